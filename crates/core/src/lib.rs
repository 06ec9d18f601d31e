pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod session;
pub mod test_helpers;

pub use config::Config;
pub use error::{Error, Result};
