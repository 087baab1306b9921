//! Потоковый сканер rustql
//!
//! Преобразует входной текст в ленивую последовательность классифицированных
//! токенов. Сканер работает как отдельная задача tokio и передаёт токены
//! парсеру через канал вместимостью в один токен: следующий токен не
//! вычисляется, пока парсер не готов принять предыдущий. Кооперативная
//! отмена проверяется перед каждым чтением символа.

use crate::common::constants::HANDOFF_CAPACITY;
use crate::common::{CancelFlag, Error, Result};
use crate::parser::reader::CharReader;
use crate::parser::token::{Position, Token};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Потоковый сканер
pub struct Scanner {
    /// Флаг кооперативной отмены, общий с парсером
    cancel: CancelFlag,
}

impl Scanner {
    /// Создает сканер с собственным флагом отмены
    pub fn new() -> Self {
        Self {
            cancel: CancelFlag::new(),
        }
    }

    /// Создает сканер с внешним флагом отмены
    pub fn with_cancel(cancel: CancelFlag) -> Self {
        Self { cancel }
    }

    /// Синхронно разбирает весь текст в список токенов
    pub fn tokenize(input: &str) -> Result<Vec<Token>> {
        let scanner = Scanner::new();
        let mut reader = CharReader::new(input);
        let mut tokens = Vec::new();

        while let Some(token) = scanner.next_token(&mut reader)? {
            tokens.push(token);
        }

        Ok(tokens)
    }

    /// Запускает сканирование как отдельную задачу
    ///
    /// Последовательность токенов ленивая, упорядоченная и одноразовая.
    /// Лексический сбой и отмена не порождают токен ошибки: канал
    /// закрывается, а причина остановки возвращается через `finish`.
    pub fn spawn(self, input: String) -> TokenStream {
        let (sender, receiver) = mpsc::channel(HANDOFF_CAPACITY);

        let handle = tokio::spawn(async move {
            let mut reader = CharReader::new(&input);

            loop {
                match self.next_token(&mut reader) {
                    Ok(Some(token)) => {
                        log::trace!("сканер: {}", token);
                        if sender.send(token).await.is_err() {
                            // Получатель закрыл канал, токены больше не нужны
                            log::trace!("сканер: получатель отключился");
                            return Ok(());
                        }
                    }
                    Ok(None) => return Ok(()),
                    Err(error) => {
                        log::warn!("сканер остановлен: {}", error);
                        return Err(error);
                    }
                }
            }
        });

        TokenStream { receiver, handle }
    }

    /// Возвращает следующий токен или `None` в конце входа
    ///
    /// Порядок классификации по первому символу: пробелы пропускаются,
    /// кавычка открывает строковый литерал, цифра открывает числовой
    /// литерал, буква открывает идентификатор, всё остальное становится
    /// одиночным символьным токеном.
    pub fn next_token(&self, reader: &mut CharReader) -> Result<Option<Token>> {
        self.skip_whitespace(reader)?;

        self.check_cancelled()?;
        let current = match reader.peek() {
            Some(ch) => ch,
            None => return Ok(None),
        };
        let start_position = reader.position();

        let token = match current {
            '\'' | '"' => {
                reader.read();
                self.read_quoted_string(reader, current, start_position)?
            }
            ch if ch.is_ascii_digit() => self.read_number(reader, start_position)?,
            ch if ch.is_alphabetic() => self.read_identifier(reader, start_position)?,
            ch => {
                reader.read();
                Token::symbol(ch, start_position)
            }
        };

        Ok(Some(token))
    }

    /// Проверяет флаг отмены перед очередным чтением
    fn check_cancelled(&self) -> Result<()> {
        if self.cancel.is_cancelled() {
            Err(Error::cancelled())
        } else {
            Ok(())
        }
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Ленивая последовательность токенов работающего сканера
pub struct TokenStream {
    receiver: mpsc::Receiver<Token>,
    handle: JoinHandle<Result<()>>,
}

impl TokenStream {
    /// Забирает следующий токен; `None` означает конец последовательности
    pub async fn next(&mut self) -> Option<Token> {
        self.receiver.recv().await
    }

    /// Дожидается завершения сканера и возвращает причину остановки
    ///
    /// `Ok` означает, что вход исчерпан; ошибка несёт лексический сбой
    /// или отмену.
    pub async fn finish(self) -> Result<()> {
        // Закрываем канал, чтобы заблокированный на передаче сканер завершился
        drop(self.receiver);
        match self.handle.await {
            Ok(result) => result,
            Err(join_error) => Err(Error::runtime(format!(
                "scanner task failed: {}",
                join_error
            ))),
        }
    }
}

// Подключаем методы чтения из отдельного файла
include!("scanner_readers.rs");
