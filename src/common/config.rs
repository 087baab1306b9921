//! Конфигурация для rustql
//!
//! Предоставляет структуры конфигурации для компонентов фронтенда запросов

use crate::common::constants::{
    DEFAULT_LOG_LEVEL, DEFAULT_LOOKAHEAD, MAX_LOOKAHEAD, MIN_LOOKAHEAD, SUPPORTED_LOG_LEVELS,
};
use crate::common::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Конфигурация парсера
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Глубина предпросмотра при свёртке хвоста буфера (минимум 1)
    pub lookahead: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            lookahead: DEFAULT_LOOKAHEAD,
        }
    }
}

/// Конфигурация логирования
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Уровень логирования
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Основная конфигурация rustql
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RustqlConfig {
    /// Настройки парсера
    pub parser: ParserConfig,
    /// Настройки логирования
    pub logging: LoggingConfig,
}

impl Default for RustqlConfig {
    fn default() -> Self {
        Self {
            parser: ParserConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl RustqlConfig {
    /// Загружает конфигурацию из TOML файла
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: RustqlConfig = toml::from_str(&content)
            .map_err(|e| Error::configuration(format!("Failed to parse config file: {}", e)))?;
        Ok(config)
    }

    /// Сохраняет конфигурацию в TOML файл
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::configuration(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Загружает конфигурацию из переменных окружения
    pub fn from_env() -> Result<Self> {
        let mut config = RustqlConfig::default();

        if let Ok(lookahead) = std::env::var("RUSTQL_LOOKAHEAD") {
            config.parser.lookahead = lookahead.parse().map_err(|_| {
                Error::configuration(format!("Invalid RUSTQL_LOOKAHEAD value: {}", lookahead))
            })?;
        }

        if let Ok(level) = std::env::var("RUSTQL_LOG_LEVEL") {
            config.logging.level = level;
        }

        Ok(config)
    }

    /// Объединяет конфигурацию с другой
    pub fn merge(mut self, other: Self) -> Self {
        self.parser = self.parser.merge(other.parser);
        self.logging = self.logging.merge(other.logging);
        self
    }

    /// Валидирует конфигурацию
    pub fn validate(&self) -> Result<()> {
        if self.parser.lookahead < MIN_LOOKAHEAD {
            return Err(Error::configuration(format!(
                "Lookahead must be at least {}",
                MIN_LOOKAHEAD
            )));
        }

        if self.parser.lookahead > MAX_LOOKAHEAD {
            return Err(Error::configuration(format!(
                "Lookahead must not exceed {}",
                MAX_LOOKAHEAD
            )));
        }

        if !SUPPORTED_LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(Error::configuration(format!(
                "Unknown log level: {}",
                self.logging.level
            )));
        }

        Ok(())
    }
}

impl ParserConfig {
    fn merge(mut self, other: Self) -> Self {
        if other.lookahead != DEFAULT_LOOKAHEAD {
            self.lookahead = other.lookahead;
        }
        self
    }
}

impl LoggingConfig {
    fn merge(mut self, other: Self) -> Self {
        if other.level != DEFAULT_LOG_LEVEL {
            self.level = other.level;
        }
        self
    }
}
