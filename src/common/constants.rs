//! Константы для rustql

/// Глубина предпросмотра парсера по умолчанию
pub const DEFAULT_LOOKAHEAD: usize = 1;

/// Минимальная глубина предпросмотра парсера
pub const MIN_LOOKAHEAD: usize = 1;

/// Максимальная глубина предпросмотра парсера
pub const MAX_LOOKAHEAD: usize = 8;

/// Ёмкость канала передачи токенов от сканера к парсеру
pub const HANDOFF_CAPACITY: usize = 1;

/// Знаки пунктуации, которые использует грамматика
pub const GRAMMAR_PUNCTUATION: &[char] = &[',', '.', ';', '*', '(', ')'];

/// Символ завершения запроса
pub const STATEMENT_TERMINATOR: char = ';';

/// Уровень логирования по умолчанию
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Поддерживаемые уровни логирования
pub const SUPPORTED_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];
