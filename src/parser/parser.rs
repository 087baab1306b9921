//! Редукционный парсер rustql
//!
//! Потребляет ленивую последовательность токенов сканера, накапливая их в
//! буфере и каскадно применяя правила редукции к скользящему хвостовому
//! окну. После исчерпания входа выполняется финальная доводка: правила
//! применяются к самому концу буфера до неподвижной точки. Результатом
//! является редуцированный буфер, а не AST.

use crate::common::config::ParserConfig;
use crate::common::constants::STATEMENT_TERMINATOR;
use crate::common::{CancelFlag, Result};
use crate::parser::rules::{self, RuleOutcome};
use crate::parser::scanner::Scanner;
use crate::parser::token::{Token, TokenKind};
use serde::{Deserialize, Serialize};

/// Статистика одного разбора
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParserStatistics {
    /// Токенов получено от сканера
    pub tokens_received: u64,
    /// Правил применено при поступлении токенов
    pub reductions_applied: u64,
    /// Срабатываний стража: правило совпало, редукция отложена
    pub guard_holds: u64,
    /// Правил применено на финальной доводке
    pub drain_reductions: u64,
}

/// Результат разбора: редуцированный буфер и статистика
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedQuery {
    tokens: Vec<Token>,
    statistics: ParserStatistics,
}

impl ParsedQuery {
    /// Редуцированный буфер токенов в исходном порядке
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Имена колонок первого свёрнутого списка
    pub fn column_list(&self) -> Option<&[String]> {
        self.tokens
            .iter()
            .find(|t| t.kind == TokenKind::ColumnList)
            .and_then(|t| t.columns())
    }

    /// Проверяет, что грамматика распознала запрос без остатка
    ///
    /// Нераспознанным остатком считается любая структурная пунктуация в
    /// буфере, кроме одиночной завершающей точки с запятой. Остаток не
    /// является ошибкой: буфер всё равно доступен вызывающему.
    pub fn is_fully_recognized(&self) -> bool {
        self.tokens
            .iter()
            .enumerate()
            .all(|(index, token)| match token.kind {
                TokenKind::Symbol(c) => {
                    c == STATEMENT_TERMINATOR && index == self.tokens.len() - 1
                }
                _ => true,
            })
    }

    /// Статистика разбора
    pub fn statistics(&self) -> &ParserStatistics {
        &self.statistics
    }

    /// Передаёт буфер во владение вызывающему
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}

/// Редукционный парсер
pub struct QueryParser {
    config: ParserConfig,
}

impl QueryParser {
    /// Создает парсер с настройками по умолчанию
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Создает парсер с заданными настройками
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Настройки парсера
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Разбирает запрос с собственным флагом отмены
    pub async fn parse(&self, input: &str) -> Result<ParsedQuery> {
        self.parse_with_cancel(input, CancelFlag::new()).await
    }

    /// Разбирает запрос, уважая внешний флаг отмены
    ///
    /// Сканер запускается отдельной задачей; токены приходят по одному
    /// через односекционный канал. Лексический сбой и отмена приходят
    /// вне полосы токенов: канал закрывается, причина возвращается
    /// ошибкой, частичный буфер отбрасывается.
    pub async fn parse_with_cancel(
        &self,
        input: &str,
        cancel: CancelFlag,
    ) -> Result<ParsedQuery> {
        let mut tokens: Vec<Token> = Vec::new();
        let mut statistics = ParserStatistics::default();

        let scanner = Scanner::with_cancel(cancel);
        let mut stream = scanner.spawn(input.to_string());

        while let Some(token) = stream.next().await {
            log::trace!("парсер: получен {}", token);
            tokens.push(token);
            statistics.tokens_received += 1;
            self.reduce_tail(&mut tokens, self.config.lookahead, &mut statistics, false);
        }

        // Канал закрыт: выясняем причину до доводки буфера
        stream.finish().await?;

        self.drain(&mut tokens, &mut statistics);

        let parsed = ParsedQuery { tokens, statistics };
        if !parsed.is_fully_recognized() {
            log::warn!(
                "запрос распознан не полностью: в буфере осталась необработанная пунктуация"
            );
        }
        log::debug!("разбор завершён: {:?}", parsed.statistics);
        Ok(parsed)
    }

    /// Каскадно применяет правила к якорю буфера
    ///
    /// Якорь отстоит от конца буфера на величину предпросмотра, поэтому
    /// правила видят токены за якорем как контекст. Каскад продолжается,
    /// пока буфер меняется; страж завершает каскад так же, как отсутствие
    /// совпадений.
    pub(crate) fn reduce_tail(
        &self,
        tokens: &mut Vec<Token>,
        lookahead: usize,
        statistics: &mut ParserStatistics,
        draining: bool,
    ) {
        loop {
            if tokens.len() <= lookahead {
                break;
            }
            let anchor = tokens.len() - 1 - lookahead;
            match rules::apply_first(tokens, anchor) {
                Some((name, RuleOutcome::Rewrote)) => {
                    log::debug!("правило {}: в буфере {} токенов", name, tokens.len());
                    if draining {
                        statistics.drain_reductions += 1;
                    } else {
                        statistics.reductions_applied += 1;
                    }
                }
                Some((name, RuleOutcome::Hold)) => {
                    log::trace!("правило {}: редукция отложена", name);
                    statistics.guard_holds += 1;
                    break;
                }
                _ => break,
            }
        }
    }

    /// Финальная доводка: правила применяются к самому концу буфера
    /// до неподвижной точки
    ///
    /// Хвостовые конструкции, не успевшие накопить предпросмотр, всё же
    /// редуцируются. Доводка идемпотентна: повторный запуск не меняет
    /// буфер.
    pub(crate) fn drain(&self, tokens: &mut Vec<Token>, statistics: &mut ParserStatistics) {
        self.reduce_tail(tokens, 0, statistics, true);
    }
}

impl Default for QueryParser {
    fn default() -> Self {
        Self::new()
    }
}
