//! Тесты для редукционного парсера rustql

use crate::common::config::ParserConfig;
use crate::common::{CancelFlag, Error, Result};
use crate::parser::{Position, QueryParser, TokenKind};

#[tokio::test]
async fn test_parse_simple_select() -> Result<()> {
    let parser = QueryParser::new();
    let parsed = parser.parse("select foo from t").await?;

    let kinds: Vec<TokenKind> = parsed.tokens().iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Select,
            TokenKind::Identifier,
            TokenKind::From,
            TokenKind::Identifier,
        ]
    );

    assert_eq!(parsed.tokens()[1].text(), Some("foo"));
    assert_eq!(parsed.tokens()[3].text(), Some("t"));
    assert!(parsed.is_fully_recognized());
    assert!(parsed.column_list().is_none());

    Ok(())
}

#[tokio::test]
async fn test_parse_column_list() -> Result<()> {
    let parser = QueryParser::new();
    let parsed = parser.parse("foo, bar, baz").await?;

    assert_eq!(parsed.tokens().len(), 1);
    assert_eq!(parsed.tokens()[0].kind, TokenKind::ColumnList);
    assert_eq!(
        parsed.column_list(),
        Some(&["foo".to_string(), "bar".to_string(), "baz".to_string()][..])
    );
    assert!(parsed.is_fully_recognized());

    // Хвостовой элемент сворачивается только на финальной доводке
    assert!(parsed.statistics().drain_reductions > 0);

    Ok(())
}

#[tokio::test]
async fn test_parse_qualified_name() -> Result<()> {
    let parser = QueryParser::new();
    let parsed = parser.parse("t.col").await?;

    assert_eq!(parsed.tokens().len(), 1);
    assert_eq!(parsed.tokens()[0].kind, TokenKind::ColumnName);
    assert_eq!(parsed.tokens()[0].text(), Some("t.col"));

    Ok(())
}

#[tokio::test]
async fn test_parse_qualified_wildcard() -> Result<()> {
    let parser = QueryParser::new();
    let parsed = parser.parse("t.*").await?;

    assert_eq!(parsed.tokens().len(), 1);
    assert_eq!(parsed.tokens()[0].kind, TokenKind::ColumnName);
    assert_eq!(parsed.tokens()[0].text(), Some("t.*"));

    Ok(())
}

#[tokio::test]
async fn test_parse_qualified_name_inside_column_list() -> Result<()> {
    // Точка за элементом видна в окне предпросмотра, поэтому b.c
    // сворачивается целиком до пополнения списка
    let parser = QueryParser::new();
    let parsed = parser.parse("select foo, b.c from t;").await?;

    let kinds: Vec<TokenKind> = parsed.tokens().iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Select,
            TokenKind::ColumnList,
            TokenKind::From,
            TokenKind::Identifier,
            TokenKind::Symbol(';'),
        ]
    );
    assert_eq!(
        parsed.column_list(),
        Some(&["foo".to_string(), "b.c".to_string()][..])
    );
    assert!(parsed.is_fully_recognized());

    Ok(())
}

#[tokio::test]
async fn test_parse_bare_wildcard() -> Result<()> {
    let parser = QueryParser::new();
    let parsed = parser.parse("*").await?;

    assert_eq!(parsed.tokens().len(), 1);
    assert_eq!(parsed.tokens()[0].kind, TokenKind::ColumnName);
    assert_eq!(parsed.tokens()[0].text(), Some("*"));

    Ok(())
}

#[tokio::test]
async fn test_parse_keyword_folding_case_insensitive() -> Result<()> {
    let parser = QueryParser::new();
    let parsed = parser.parse("SeLeCt").await?;

    assert_eq!(parsed.tokens().len(), 1);
    assert_eq!(parsed.tokens()[0].kind, TokenKind::Select);
    // Исходный текст сохраняется при смене вида
    assert_eq!(parsed.tokens()[0].text(), Some("SeLeCt"));

    Ok(())
}

#[tokio::test]
async fn test_parse_similar_word_stays_identifier() -> Result<()> {
    // Таблица зарезервированных слов сравнивает слово целиком
    let parser = QueryParser::new();
    let parsed = parser.parse("selected").await?;

    assert_eq!(parsed.tokens().len(), 1);
    assert_eq!(parsed.tokens()[0].kind, TokenKind::Identifier);
    assert_eq!(parsed.tokens()[0].text(), Some("selected"));

    Ok(())
}

#[tokio::test]
async fn test_parse_select_guard_holds() -> Result<()> {
    let parser = QueryParser::new();
    let parsed = parser.parse("select foo").await?;

    let kinds: Vec<TokenKind> = parsed.tokens().iter().map(|t| t.kind).collect();
    assert_eq!(kinds, vec![TokenKind::Select, TokenKind::Identifier]);
    assert!(parsed.statistics().guard_holds > 0);

    Ok(())
}

#[tokio::test]
async fn test_parse_keyword_like_column_head() -> Result<()> {
    // Страж после SELECT: "outer" не должен свернуться в ключевое слово,
    // пока может оказаться началом квалифицированного имени
    let parser = QueryParser::new();
    let parsed = parser.parse("select outer.x").await?;

    let kinds: Vec<TokenKind> = parsed.tokens().iter().map(|t| t.kind).collect();
    assert_eq!(kinds, vec![TokenKind::Select, TokenKind::ColumnName]);
    assert_eq!(parsed.tokens()[1].text(), Some("outer.x"));

    Ok(())
}

#[tokio::test]
async fn test_parse_full_query() -> Result<()> {
    let parser = QueryParser::new();
    let parsed = parser
        .parse("select foo, foo.*, *, \"hello, world\" from foo;")
        .await?;

    let kinds: Vec<TokenKind> = parsed.tokens().iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Select,
            TokenKind::ColumnList,
            TokenKind::Symbol(','),
            TokenKind::QuotedString,
            TokenKind::From,
            TokenKind::Identifier,
            TokenKind::Symbol(';'),
        ]
    );

    assert_eq!(
        parsed.column_list(),
        Some(&["foo".to_string(), "foo.*".to_string(), "*".to_string()][..])
    );
    assert_eq!(parsed.tokens()[1].position, Position::new(1, 8, 7));
    assert_eq!(parsed.tokens()[3].text(), Some("hello, world"));
    assert_eq!(parsed.tokens()[5].text(), Some("foo"));

    // Запятая перед строковым литералом осталась несвёрнутой
    assert!(!parsed.is_fully_recognized());
    assert_eq!(parsed.statistics().tokens_received, 13);

    Ok(())
}

#[tokio::test]
async fn test_parse_trailing_semicolon() -> Result<()> {
    let parser = QueryParser::new();
    let parsed = parser.parse("select foo from t;").await?;

    let kinds: Vec<TokenKind> = parsed.tokens().iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Select,
            TokenKind::Identifier,
            TokenKind::From,
            TokenKind::Identifier,
            TokenKind::Symbol(';'),
        ]
    );

    // Одиночная завершающая точка с запятой не считается остатком
    assert!(parsed.is_fully_recognized());

    Ok(())
}

#[tokio::test]
async fn test_parse_empty_input() -> Result<()> {
    let parser = QueryParser::new();
    let parsed = parser.parse("").await?;

    assert!(parsed.tokens().is_empty());
    assert!(parsed.is_fully_recognized());
    assert_eq!(parsed.statistics().tokens_received, 0);

    Ok(())
}

#[tokio::test]
async fn test_parse_unknown_symbol_reclassified() -> Result<()> {
    let parser = QueryParser::new();
    let parsed = parser.parse("@").await?;

    assert_eq!(parsed.tokens().len(), 1);
    assert_eq!(parsed.tokens()[0].kind, TokenKind::Identifier);
    assert_eq!(parsed.tokens()[0].text(), Some("@"));

    Ok(())
}

#[tokio::test]
async fn test_parse_propagates_lex_error() {
    let parser = QueryParser::new();

    match parser.parse("select 1.2.3").await {
        Err(Error::Lex { line, column, .. }) => {
            assert_eq!(line, 1);
            assert_eq!(column, 11);
        }
        other => panic!("Ожидалась лексическая ошибка, получено {:?}", other),
    }
}

#[tokio::test]
async fn test_parse_cancelled() {
    let parser = QueryParser::new();
    let cancel = CancelFlag::new();
    cancel.cancel();

    match parser.parse_with_cancel("select foo from t", cancel).await {
        Err(error) => assert!(error.is_cancelled()),
        Ok(_) => panic!("Ожидалась ошибка отмены"),
    }
}

#[tokio::test]
async fn test_parse_custom_lookahead() -> Result<()> {
    let parser = QueryParser::with_config(ParserConfig { lookahead: 2 });
    let parsed = parser.parse("foo, bar, baz").await?;

    assert_eq!(parsed.tokens().len(), 1);
    assert_eq!(
        parsed.column_list(),
        Some(&["foo".to_string(), "bar".to_string(), "baz".to_string()][..])
    );

    Ok(())
}

#[tokio::test]
async fn test_parse_statistics() -> Result<()> {
    let parser = QueryParser::new();
    let parsed = parser.parse("select foo, bar from t").await?;

    let stats = parsed.statistics();
    assert_eq!(stats.tokens_received, 6);
    assert!(stats.reductions_applied > 0);
    assert!(stats.guard_holds > 0);

    Ok(())
}

#[tokio::test]
async fn test_parse_is_one_shot_per_invocation() -> Result<()> {
    // Один парсер можно переиспользовать: каждый вызов разбирает
    // свой вход с чистым буфером и статистикой
    let parser = QueryParser::new();

    let first = parser.parse("foo, bar").await?;
    let second = parser.parse("select x from y").await?;

    assert_eq!(first.tokens().len(), 1);
    assert_eq!(second.tokens().len(), 4);
    assert_eq!(second.statistics().tokens_received, 4);

    Ok(())
}
