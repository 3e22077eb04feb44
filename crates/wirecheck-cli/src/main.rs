use wirecheck_core::logging;

mod cli;

use crate::cli::CliCommand;

#[tokio::main]
async fn main() {
    // Initialize logging as early as possible.
    logging::init_logging();

    // Parse CLI and dispatch.
    if let Err(err) = CliCommand::run_from_args().await {
        eprintln!("wirecheck error: {:#}", err);
        std::process::exit(1);
    }
}
