//! Посимвольный источник для сканера rustql
//!
//! Оборачивает входной текст в поток символов с возвратом ровно одного
//! прочитанного символа назад. Отслеживает строку, колонку и смещение
//! для диагностики лексических ошибок.

use crate::parser::token::Position;

/// Поток символов с возвратом одного символа
pub struct CharReader {
    /// Исходный текст
    input: Vec<char>,
    /// Текущая позиция в тексте
    position: usize,
    /// Текущая позиция для отображения ошибок
    current_position: Position,
    /// Позиция до последнего чтения, для возврата символа
    previous_position: Option<Position>,
}

impl CharReader {
    /// Создает новый поток над текстом
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            current_position: Position::start(),
            previous_position: None,
        }
    }

    /// Читает следующий символ и продвигает позицию
    ///
    /// Возвращает `None` в конце входа.
    pub fn read(&mut self) -> Option<char> {
        if self.position >= self.input.len() {
            return None;
        }

        let ch = self.input[self.position];
        self.previous_position = Some(self.current_position.clone());
        self.position += 1;

        if ch == '\n' {
            self.current_position.line += 1;
            self.current_position.column = 1;
        } else {
            self.current_position.column += 1;
        }
        self.current_position.offset += 1;

        Some(ch)
    }

    /// Возвращает последний прочитанный символ обратно в поток
    ///
    /// Гарантируется возврат не более одного символа: повторный вызов
    /// без промежуточного чтения ничего не делает.
    pub fn unread(&mut self) {
        if let Some(previous) = self.previous_position.take() {
            self.position -= 1;
            self.current_position = previous;
        }
    }

    /// Возвращает следующий символ без продвижения позиции
    pub fn peek(&self) -> Option<char> {
        if self.position >= self.input.len() {
            None
        } else {
            Some(self.input[self.position])
        }
    }

    /// Текущая позиция в тексте
    pub fn position(&self) -> Position {
        self.current_position.clone()
    }

    /// Проверяет, исчерпан ли вход
    pub fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }
}
