//! Общие типы и утилиты для rustql

pub mod cancel;
pub mod config;
pub mod constants;
pub mod error;

pub use cancel::*;
pub use config::*;
pub use constants::*;
pub use error::{Error, Result};
