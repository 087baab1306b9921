//! Кооперативная отмена разбора
//!
//! Флаг разделяется между парсером, сканером и внешними таймерами. Сканер
//! проверяет его перед каждым чтением символа и после установки прекращает
//! выдачу токенов. Уже начатое чтение символа завершается.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Разделяемый флаг отмены
#[derive(Debug, Clone, Default)]
pub struct CancelFlag {
    cancelled: Arc<AtomicBool>,
}

impl CancelFlag {
    /// Создаёт новый флаг в сброшенном состоянии
    pub fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Запрашивает отмену
    ///
    /// Установка необратима: сброс флага не предусмотрен, один флаг
    /// обслуживает ровно один разбор.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    /// Проверяет, была ли запрошена отмена
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}
