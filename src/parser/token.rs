//! Токены для потокового сканера rustql
//!
//! Определяет виды токенов, которые порождает сканер (идентификаторы, литералы,
//! одиночные символы) и в которые парсер сворачивает их правилами редукции
//! (ключевые слова, wildcard, квалифицированные имена колонок, списки колонок).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Позиция токена в исходном тексте
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl Position {
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Self { line, column, offset }
    }

    pub fn start() -> Self {
        Self::new(1, 1, 0)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Виды токенов
///
/// Сканер порождает только `Identifier`, `QuotedString`, `Integer`, `Float`
/// и `Symbol`; остальные виды появляются в буфере парсера как результат
/// правил редукции.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenKind {
    // === Выход сканера ===
    /// Идентификатор (имя таблицы, колонки, etc.)
    Identifier,

    /// Строковый литерал в кавычках, без обрамляющих кавычек
    QuotedString,

    /// Целочисленный литерал (текст, без преобразования в число)
    Integer,

    /// Литерал с плавающей точкой (текст, без преобразования в число)
    Float,

    /// Одиночный нераспознанный символ с его кодовой точкой
    Symbol(char),

    // === Результаты редукции ===
    /// Звёздочка, распознанная как wildcard (до повышения до имени колонки)
    Wildcard,

    /// Простое или квалифицированное имя колонки ("col", "t.col", "t.*")
    ColumnName,

    /// Накопленный список имён колонок
    ColumnList,

    // === Зарезервированные слова ===
    Select,
    Update,
    Insert,
    From,
    Where,
    Join,
    Outer,
    Inner,
    With,
}

impl TokenKind {
    /// Проверяет, является ли токен зарезервированным словом
    pub fn is_reserved_word(&self) -> bool {
        matches!(
            self,
            TokenKind::Select
                | TokenKind::Update
                | TokenKind::Insert
                | TokenKind::From
                | TokenKind::Where
                | TokenKind::Join
                | TokenKind::Outer
                | TokenKind::Inner
                | TokenKind::With
        )
    }

    /// Проверяет, является ли токен литералом
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::QuotedString | TokenKind::Integer | TokenKind::Float
        )
    }

    /// Проверяет, может ли токен быть элементом списка колонок
    ///
    /// Голый идентификатор считается именем колонки наравне с уже
    /// свёрнутыми `ColumnName` и `Wildcard`.
    pub fn is_column_item(&self) -> bool {
        matches!(
            self,
            TokenKind::ColumnName | TokenKind::Wildcard | TokenKind::Identifier
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Identifier => write!(f, "IDENTIFIER"),
            TokenKind::QuotedString => write!(f, "STRING"),
            TokenKind::Integer => write!(f, "INTEGER"),
            TokenKind::Float => write!(f, "FLOAT"),
            TokenKind::Symbol(c) => write!(f, "SYMBOL({})", c),
            TokenKind::Wildcard => write!(f, "*"),
            TokenKind::ColumnName => write!(f, "COLUMN_NAME"),
            TokenKind::ColumnList => write!(f, "COLUMN_LIST"),
            TokenKind::Select => write!(f, "SELECT"),
            TokenKind::Update => write!(f, "UPDATE"),
            TokenKind::Insert => write!(f, "INSERT"),
            TokenKind::From => write!(f, "FROM"),
            TokenKind::Where => write!(f, "WHERE"),
            TokenKind::Join => write!(f, "JOIN"),
            TokenKind::Outer => write!(f, "OUTER"),
            TokenKind::Inner => write!(f, "INNER"),
            TokenKind::With => write!(f, "WITH"),
        }
    }
}

/// Полезная нагрузка токена
///
/// Вид токена однозначно задаёт допустимую форму нагрузки:
/// текст для идентификаторов, литералов и имён колонок, одиночный символ
/// для пунктуации и wildcard, последовательность имён для списка колонок.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenValue {
    Text(String),
    Char(char),
    Columns(Vec<String>),
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Text(text) => write!(f, "{}", text),
            TokenValue::Char(c) => write!(f, "{}", c),
            TokenValue::Columns(names) => write!(f, "[{}]", names.join(", ")),
        }
    }
}

/// Токен с видом, нагрузкой и позицией первого символа
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    pub position: Position,
}

impl Token {
    pub fn new(kind: TokenKind, value: TokenValue, position: Position) -> Self {
        Self {
            kind,
            value,
            position,
        }
    }

    /// Создаёт токен идентификатора
    pub fn identifier(text: impl Into<String>, position: Position) -> Self {
        Self::new(TokenKind::Identifier, TokenValue::Text(text.into()), position)
    }

    /// Создаёт токен строкового литерала
    pub fn quoted_string(text: impl Into<String>, position: Position) -> Self {
        Self::new(
            TokenKind::QuotedString,
            TokenValue::Text(text.into()),
            position,
        )
    }

    /// Создаёт токен целочисленного литерала
    pub fn integer(text: impl Into<String>, position: Position) -> Self {
        Self::new(TokenKind::Integer, TokenValue::Text(text.into()), position)
    }

    /// Создаёт токен литерала с плавающей точкой
    pub fn float(text: impl Into<String>, position: Position) -> Self {
        Self::new(TokenKind::Float, TokenValue::Text(text.into()), position)
    }

    /// Создаёт токен одиночного символа
    pub fn symbol(c: char, position: Position) -> Self {
        Self::new(TokenKind::Symbol(c), TokenValue::Char(c), position)
    }

    /// Создаёт токен имени колонки
    pub fn column_name(name: impl Into<String>, position: Position) -> Self {
        Self::new(TokenKind::ColumnName, TokenValue::Text(name.into()), position)
    }

    /// Создаёт токен списка колонок
    pub fn column_list(names: Vec<String>, position: Position) -> Self {
        Self::new(TokenKind::ColumnList, TokenValue::Columns(names), position)
    }

    /// Текстовая нагрузка токена, если она есть
    pub fn text(&self) -> Option<&str> {
        match &self.value {
            TokenValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Символьная нагрузка токена, если она есть
    pub fn symbol_char(&self) -> Option<char> {
        match &self.value {
            TokenValue::Char(c) => Some(*c),
            _ => None,
        }
    }

    /// Имена колонок, если токен является списком колонок
    pub fn columns(&self) -> Option<&[String]> {
        match &self.value {
            TokenValue::Columns(names) => Some(names),
            _ => None,
        }
    }

    /// Проверяет соответствие формы нагрузки виду токена
    pub fn payload_matches_kind(&self) -> bool {
        match (&self.kind, &self.value) {
            (TokenKind::Identifier, TokenValue::Text(_)) => true,
            (TokenKind::QuotedString, TokenValue::Text(_)) => true,
            (TokenKind::Integer, TokenValue::Text(_)) => true,
            (TokenKind::Float, TokenValue::Text(_)) => true,
            (TokenKind::Symbol(_), TokenValue::Char(_)) => true,
            (TokenKind::Wildcard, TokenValue::Char(_)) => true,
            (TokenKind::ColumnName, TokenValue::Text(_)) => true,
            (TokenKind::ColumnList, TokenValue::Columns(_)) => true,
            // Ключевые слова сохраняют исходный текст идентификатора
            (kind, TokenValue::Text(_)) if kind.is_reserved_word() => true,
            _ => false,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}('{}') at {}", self.kind, self.value, self.position)
    }
}

lazy_static::lazy_static! {
    /// Карта зарезервированных слов для быстрого поиска
    ///
    /// Расширение грамматики новыми ключевыми словами сводится к добавлению
    /// записи в эту карту; логика диспетчеризации правил не меняется.
    pub static ref RESERVED_WORDS: std::collections::HashMap<&'static str, TokenKind> = {
        let mut map = std::collections::HashMap::new();

        map.insert("SELECT", TokenKind::Select);
        map.insert("UPDATE", TokenKind::Update);
        map.insert("INSERT", TokenKind::Insert);
        map.insert("FROM", TokenKind::From);
        map.insert("WHERE", TokenKind::Where);
        map.insert("JOIN", TokenKind::Join);
        map.insert("OUTER", TokenKind::Outer);
        map.insert("INNER", TokenKind::Inner);
        map.insert("WITH", TokenKind::With);

        map
    };
}

/// Ищет вид зарезервированного слова по тексту без учёта регистра
pub fn reserved_word_kind(text: &str) -> Option<TokenKind> {
    RESERVED_WORDS.get(text.to_uppercase().as_str()).copied()
}
