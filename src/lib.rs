pub mod cli;
pub mod config;
pub mod error;
pub mod profile;
pub mod script;
pub mod show;
pub mod source;

pub use error::{Error, Result};
