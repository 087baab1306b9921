//! Лексический и ранний синтаксический фронтенд rustql

pub mod parser;
pub mod reader;
pub(crate) mod rules;
pub mod scanner;
pub mod token;

#[cfg(test)]
pub mod tests;

// Переэкспортируем основные типы
pub use parser::{ParsedQuery, ParserStatistics, QueryParser};
pub use reader::CharReader;
pub use scanner::{Scanner, TokenStream};
pub use token::{reserved_word_kind, Position, Token, TokenKind, TokenValue};
