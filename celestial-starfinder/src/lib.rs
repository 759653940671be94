pub mod commands;
pub mod error;
pub mod output;
pub mod session;

pub use error::{Error, Result};
