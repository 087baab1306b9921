//! CLI интерфейс для rustql
//!
//! Предоставляет командную строку для токенизации и разбора запросов

use crate::common::{CancelFlag, Result, RustqlConfig};
use crate::parser::{QueryParser, Scanner};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

/// RustQL - Потоковый фронтенд SQL-подобного языка запросов
#[derive(Parser)]
#[command(name = "rustql")]
#[command(about = "RustQL - A streaming front end for a SQL-like query language")]
#[command(version)]
pub struct Cli {
    /// Конфигурационный файл
    #[arg(short, long, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Уровень детализации логирования
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Разбить запрос на токены без редукции
    Tokenize {
        /// Текст запроса
        query: String,

        /// Вывести токены в формате JSON
        #[arg(long)]
        json: bool,
    },

    /// Разобрать запрос: токенизация и свёртка буфера
    Parse {
        /// Текст запроса
        query: String,

        /// Вывести результат в формате JSON
        #[arg(long)]
        json: bool,

        /// Глубина предпросмотра (переопределяет конфигурацию)
        #[arg(short, long, value_name = "N")]
        lookahead: Option<usize>,

        /// Отменить разбор по истечении таймаута
        #[arg(long, value_name = "MS")]
        timeout_ms: Option<u64>,
    },

    /// Показать информацию о системе
    Info,
}

impl Cli {
    /// Инициализирует CLI
    pub fn init() -> Self {
        Self::parse()
    }

    /// Загружает конфигурацию
    ///
    /// Порядок наслоения: значения по умолчанию, затем TOML файл, затем
    /// переменные окружения, затем флаги командной строки.
    pub fn load_config(&self) -> Result<RustqlConfig> {
        let mut config = if let Some(config_path) = &self.config {
            RustqlConfig::from_file(config_path)?
        } else {
            // Пытаемся загрузить из rustql.toml, если не найден - используем по умолчанию
            RustqlConfig::from_file(&PathBuf::from("rustql.toml"))
                .unwrap_or_else(|_| RustqlConfig::default())
        };

        config = config.merge(RustqlConfig::from_env()?);

        if let Some(log_level) = &self.log_level {
            config.logging.level = log_level.clone();
        }

        config.validate()?;
        Ok(config)
    }

    /// Выполняет команду
    pub async fn execute(&self) -> Result<()> {
        match &self.command {
            Some(Commands::Tokenize { query, json }) => self.run_tokenize(query, *json).await,
            Some(Commands::Parse {
                query,
                json,
                lookahead,
                timeout_ms,
            }) => self.run_parse(query, *json, *lookahead, *timeout_ms).await,
            Some(Commands::Info) => self.show_info().await,
            None => self.show_help().await,
        }
    }

    /// Токенизирует запрос и печатает токены по одному на строку
    async fn run_tokenize(&self, query: &str, json: bool) -> Result<()> {
        let tokens = Scanner::tokenize(query)?;

        if json {
            println!("{}", serde_json::to_string_pretty(&tokens)?);
        } else {
            for token in &tokens {
                println!("{}", token);
            }
            println!("Токенов: {}", tokens.len());
        }

        Ok(())
    }

    /// Разбирает запрос и печатает редуцированный буфер
    async fn run_parse(
        &self,
        query: &str,
        json: bool,
        lookahead: Option<usize>,
        timeout_ms: Option<u64>,
    ) -> Result<()> {
        let mut config = self.load_config()?;

        if let Some(lookahead) = lookahead {
            config.parser.lookahead = lookahead;
            config.validate()?;
        }

        let cancel = CancelFlag::new();
        if let Some(ms) = timeout_ms {
            let timer = cancel.clone();
            tokio::spawn(async move {
                tokio::time::sleep(Duration::from_millis(ms)).await;
                timer.cancel();
            });
        }

        let parser = QueryParser::with_config(config.parser.clone());
        let parsed = parser.parse_with_cancel(query, cancel).await?;

        if json {
            println!("{}", serde_json::to_string_pretty(&parsed)?);
        } else {
            for token in parsed.tokens() {
                println!("{}", token);
            }
            if let Some(columns) = parsed.column_list() {
                println!("Колонки: {}", columns.join(", "));
            }
            let recognized = if parsed.is_fully_recognized() {
                "да"
            } else {
                "нет"
            };
            println!("Распознано полностью: {}", recognized);

            let stats = parsed.statistics();
            println!(
                "Статистика: получено {}, свёрнуто {}, отложено {}, доводка {}",
                stats.tokens_received,
                stats.reductions_applied,
                stats.guard_holds,
                stats.drain_reductions
            );
        }

        Ok(())
    }

    /// Показывает информацию о системе
    async fn show_info(&self) -> Result<()> {
        println!("RustQL {}", env!("CARGO_PKG_VERSION"));
        println!("ОС: {}", std::env::consts::OS);
        println!("Архитектура: {}", std::env::consts::ARCH);

        Ok(())
    }

    /// Показывает справку
    async fn show_help(&self) -> Result<()> {
        println!("Добро пожаловать в RustQL v{}!", env!("CARGO_PKG_VERSION"));
        println!("Используйте --help для получения справки");

        Ok(())
    }
}
