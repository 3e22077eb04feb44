//! CLI command handlers, one file per command.

mod completions;
mod email_header;
mod preflight;
mod serve;
mod user;
mod validate;

pub use completions::run_completions;
pub use email_header::run_email_header;
pub use preflight::{run_preflight, PreflightArgs};
pub use serve::run_serve;
pub use user::run_user;
pub use validate::run_validate;
