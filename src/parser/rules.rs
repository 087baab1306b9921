//! Правила редукции парсера rustql
//!
//! Таблица именованных правил в порядке приоритета. Каждое правило
//! рассматривает до трёх токенов, оканчивающихся на якоре буфера, и может
//! заглянуть на токен сразу за якорем (окно предпросмотра). Применяется
//! первое совпавшее правило. Расширение грамматики сводится к добавлению
//! записи в таблицу, диспетчеризация не меняется.

use crate::common::constants::GRAMMAR_PUNCTUATION;
use crate::parser::token::{reserved_word_kind, Token, TokenKind, TokenValue};

/// Результат применения правила к хвосту буфера
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RuleOutcome {
    /// Шаблон не совпал
    NoMatch,
    /// Буфер переписан
    Rewrote,
    /// Шаблон совпал, но правило сознательно откладывает редукцию
    Hold,
}

/// Правило редукции: именованный шаблон по хвосту буфера и действие
pub(crate) struct ReductionRule {
    pub name: &'static str,
    pub apply: fn(&mut Vec<Token>, usize) -> RuleOutcome,
}

/// Таблица правил в порядке приоритета
pub(crate) const RULES: &[ReductionRule] = &[
    ReductionRule {
        name: "extend_column_list",
        apply: extend_column_list,
    },
    ReductionRule {
        name: "seed_column_list",
        apply: seed_column_list,
    },
    ReductionRule {
        name: "hold_select_item",
        apply: hold_select_item,
    },
    ReductionRule {
        name: "fold_qualified_name",
        apply: fold_qualified_name,
    },
    ReductionRule {
        name: "promote_wildcard",
        apply: promote_wildcard,
    },
    ReductionRule {
        name: "classify_star",
        apply: classify_star,
    },
    ReductionRule {
        name: "reclassify_symbol",
        apply: reclassify_symbol,
    },
    ReductionRule {
        name: "fold_reserved_word",
        apply: fold_reserved_word,
    },
];

/// Применяет первое совпавшее правило к окну, оканчивающемуся на якоре
///
/// Возвращает имя правила и результат; `None` означает, что ни одно
/// правило не совпало.
pub(crate) fn apply_first(
    tokens: &mut Vec<Token>,
    anchor: usize,
) -> Option<(&'static str, RuleOutcome)> {
    for rule in RULES {
        match (rule.apply)(tokens, anchor) {
            RuleOutcome::NoMatch => continue,
            outcome => return Some((rule.name, outcome)),
        }
    }
    None
}

/// Имя колонки, которое вносит элемент списка
///
/// Элементом списка считается уже свёрнутое имя колонки, wildcard
/// или голый идентификатор.
fn column_item_name(token: &Token) -> Option<String> {
    match token.kind {
        TokenKind::ColumnName | TokenKind::Identifier => token.text().map(|t| t.to_string()),
        TokenKind::Wildcard => Some("*".to_string()),
        _ => None,
    }
}

/// Проверяет, что сразу за якорем видна точка
///
/// Пока за элементом видна точка, сворачивать список нельзя: более
/// длинный шаблон квалифицированного имени имеет приоритет.
fn dot_follows(tokens: &[Token], anchor: usize) -> bool {
    tokens
        .get(anchor + 1)
        .map_or(false, |t| t.kind == TokenKind::Symbol('.'))
}

/// Правило 1: `ColumnList`, `,`, элемент → пополненный `ColumnList`
fn extend_column_list(tokens: &mut Vec<Token>, anchor: usize) -> RuleOutcome {
    if anchor < 2 {
        return RuleOutcome::NoMatch;
    }
    if tokens[anchor - 2].kind != TokenKind::ColumnList
        || tokens[anchor - 1].kind != TokenKind::Symbol(',')
    {
        return RuleOutcome::NoMatch;
    }
    let item = match column_item_name(&tokens[anchor]) {
        Some(name) => name,
        None => return RuleOutcome::NoMatch,
    };
    if dot_follows(tokens, anchor) {
        return RuleOutcome::NoMatch;
    }

    let position = tokens[anchor - 2].position.clone();
    let mut names = match &mut tokens[anchor - 2].value {
        TokenValue::Columns(names) => std::mem::take(names),
        _ => return RuleOutcome::NoMatch,
    };
    names.push(item);
    let list = Token::column_list(names, position);
    tokens.splice(anchor - 2..=anchor, std::iter::once(list));
    RuleOutcome::Rewrote
}

/// Правило 1b: элемент, `,`, элемент → начальный `ColumnList` из двух имён
fn seed_column_list(tokens: &mut Vec<Token>, anchor: usize) -> RuleOutcome {
    if anchor < 2 {
        return RuleOutcome::NoMatch;
    }
    if tokens[anchor - 1].kind != TokenKind::Symbol(',') {
        return RuleOutcome::NoMatch;
    }
    let first = match column_item_name(&tokens[anchor - 2]) {
        Some(name) => name,
        None => return RuleOutcome::NoMatch,
    };
    let second = match column_item_name(&tokens[anchor]) {
        Some(name) => name,
        None => return RuleOutcome::NoMatch,
    };
    if dot_follows(tokens, anchor) {
        return RuleOutcome::NoMatch;
    }

    let position = tokens[anchor - 2].position.clone();
    let list = Token::column_list(vec![first, second], position);
    tokens.splice(anchor - 2..=anchor, std::iter::once(list));
    RuleOutcome::Rewrote
}

/// Правило 2: страж `Select`, `Identifier` без переписывания
///
/// Голый идентификатор сразу после SELECT не редуцируется, пока не придут
/// следующие токены: он может оказаться началом квалифицированного имени,
/// в том числе совпадающим с зарезервированным словом (`select outer.x`).
fn hold_select_item(tokens: &mut Vec<Token>, anchor: usize) -> RuleOutcome {
    if anchor < 1 {
        return RuleOutcome::NoMatch;
    }
    if tokens[anchor - 1].kind == TokenKind::Select
        && tokens[anchor].kind == TokenKind::Identifier
    {
        RuleOutcome::Hold
    } else {
        RuleOutcome::NoMatch
    }
}

/// Правило 3: `Identifier`, `.`, `Identifier` или `Wildcard` → `ColumnName`
fn fold_qualified_name(tokens: &mut Vec<Token>, anchor: usize) -> RuleOutcome {
    if anchor < 2 {
        return RuleOutcome::NoMatch;
    }
    if tokens[anchor - 2].kind != TokenKind::Identifier
        || tokens[anchor - 1].kind != TokenKind::Symbol('.')
    {
        return RuleOutcome::NoMatch;
    }
    let tail = match tokens[anchor].kind {
        TokenKind::Identifier => match tokens[anchor].text() {
            Some(text) => text.to_string(),
            None => return RuleOutcome::NoMatch,
        },
        TokenKind::Wildcard => "*".to_string(),
        _ => return RuleOutcome::NoMatch,
    };
    let head = match tokens[anchor - 2].text() {
        Some(text) => text.to_string(),
        None => return RuleOutcome::NoMatch,
    };

    let position = tokens[anchor - 2].position.clone();
    let name = Token::column_name(format!("{}.{}", head, tail), position);
    tokens.splice(anchor - 2..=anchor, std::iter::once(name));
    RuleOutcome::Rewrote
}

/// Правило 4: одиночный `Wildcard` → `ColumnName("*")`
fn promote_wildcard(tokens: &mut Vec<Token>, anchor: usize) -> RuleOutcome {
    if tokens[anchor].kind != TokenKind::Wildcard {
        return RuleOutcome::NoMatch;
    }
    let position = tokens[anchor].position.clone();
    tokens[anchor] = Token::column_name("*", position);
    RuleOutcome::Rewrote
}

/// Правило 5: `Symbol('*')` → `Wildcard`
fn classify_star(tokens: &mut Vec<Token>, anchor: usize) -> RuleOutcome {
    if tokens[anchor].kind != TokenKind::Symbol('*') {
        return RuleOutcome::NoMatch;
    }
    tokens[anchor].kind = TokenKind::Wildcard;
    RuleOutcome::Rewrote
}

/// Правило 6: символ вне пунктуации грамматики → `Identifier`
fn reclassify_symbol(tokens: &mut Vec<Token>, anchor: usize) -> RuleOutcome {
    let c = match tokens[anchor].kind {
        TokenKind::Symbol(c) => c,
        _ => return RuleOutcome::NoMatch,
    };
    if GRAMMAR_PUNCTUATION.contains(&c) {
        return RuleOutcome::NoMatch;
    }
    let position = tokens[anchor].position.clone();
    tokens[anchor] = Token::identifier(c.to_string(), position);
    RuleOutcome::Rewrote
}

/// Правило 7: идентификатор из таблицы зарезервированных слов → ключевое слово
///
/// Меняется только вид токена, исходный текст сохраняется.
fn fold_reserved_word(tokens: &mut Vec<Token>, anchor: usize) -> RuleOutcome {
    if tokens[anchor].kind != TokenKind::Identifier {
        return RuleOutcome::NoMatch;
    }
    let kind = match tokens[anchor].text().and_then(reserved_word_kind) {
        Some(kind) => kind,
        None => return RuleOutcome::NoMatch,
    };
    tokens[anchor].kind = kind;
    RuleOutcome::Rewrote
}
