use thiserror::Error;

/// Ошибки хранилища забронированных мест
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("storage backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("storage lock poisoned")]
    Poisoned,

    #[error("storage backend {0} is not compiled in")]
    Unsupported(&'static str),
}

/// Ошибки бронирования. Отказы выбора места (лимит, непрерывность) ошибками не
/// являются, сюда попадает только сбой записи в хранилище.
#[derive(Debug, Error)]
pub enum BookingError {
    #[error("failed to persist booked seats: {0}")]
    Store(#[from] StoreError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} has invalid value {value:?}")]
    Invalid { name: &'static str, value: String },

    #[error("{0} must be set")]
    Missing(&'static str),
}
