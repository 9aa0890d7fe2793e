//! Ошибки пайплайна преобразования данных

use std::path::PathBuf;

use thiserror::Error;

/// Единый тип ошибки: каждая ошибка несёт контекст места возникновения
/// (путь к файлу или имя колонки) и исходную причину
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("failed to read dataset {}", path.display())]
    DatasetRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("dataset has no rows")]
    EmptyDataset,

    #[error("column '{0}' not found")]
    MissingColumn(String),

    #[error("column '{column}' has non-numeric value '{value}'")]
    NonNumeric { column: String, value: String },

    #[error("column '{0}' has no observed values to fit on")]
    EmptyColumn(String),

    #[error("expected {expected} feature columns, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("column lengths differ: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("failed to access artifact {}", path.display())]
    ArtifactIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode artifact {}", path.display())]
    ArtifactFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, TransformError>;
