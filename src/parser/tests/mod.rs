//! Тесты для фронтенда запросов rustql

pub mod parser_tests;
