pub mod analyzers;
pub mod api;
pub mod cli;
pub mod error;
pub mod models;
pub mod utils;
pub mod writers;

pub use error::{AqiError, Result};
