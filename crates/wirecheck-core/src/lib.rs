pub mod config;
pub mod logging;

pub mod email_header;
pub mod error;
pub mod fetch;
pub mod preflight;
pub mod user;
pub mod validate;

pub use error::{Error, ErrorKind};
