//! rustql - Потоковый фронтенд SQL-подобного языка запросов на Rust
//!
//! Этот модуль предоставляет лексический и ранний синтаксический разбор
//! запросов: потоковую токенизацию, передачу токенов через канал с
//! обратным давлением и инкрементальную свёртку буфера по правилам редукции.

pub mod cli;
pub mod common;
pub mod parser;

pub use common::cancel::CancelFlag;
pub use common::config::{LoggingConfig, ParserConfig, RustqlConfig};
pub use common::error::{Error, Result};
pub use parser::{
    ParsedQuery, ParserStatistics, Position, QueryParser, Scanner, Token, TokenKind, TokenStream,
    TokenValue,
};

/// Версия библиотеки
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
