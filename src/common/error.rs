//! Обработка ошибок для rustql

use thiserror::Error;

/// Основной тип ошибки для rustql
#[derive(Error, Debug)]
pub enum Error {
    /// Ошибка I/O операций
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Ошибка сериализации/десериализации
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Лексическая ошибка с позицией сбойного символа
    ///
    /// Конец входа лексической ошибкой не считается.
    #[error("Lexical error at {line}:{column}: {message}")]
    Lex {
        line: usize,
        column: usize,
        message: String,
    },

    /// Разбор прерван кооперативной отменой
    #[error("Parse cancelled")]
    Cancelled,

    /// Сбой фоновой задачи
    #[error("Runtime error: {message}")]
    Runtime { message: String },

    /// Ошибка конфигурации
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Тип результата для rustql
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Создает лексическую ошибку
    pub fn lex(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self::Lex {
            line,
            column,
            message: message.into(),
        }
    }

    /// Создает ошибку отмены
    pub fn cancelled() -> Self {
        Self::Cancelled
    }

    /// Создает ошибку фоновой задачи
    pub fn runtime(message: impl Into<String>) -> Self {
        Self::Runtime {
            message: message.into(),
        }
    }

    /// Создает ошибку конфигурации
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Проверяет, вызвана ли ошибка отменой
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
