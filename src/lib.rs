pub mod cli;
pub mod config;
pub mod console;
pub mod error;
pub mod profile;
pub mod roster;
pub mod session;

pub use error::{ClassbookError, Result};
pub use roster::Roster;
