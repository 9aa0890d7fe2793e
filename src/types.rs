//! Типы данных и конфигурация пайплайна

use std::path::PathBuf;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// Схема преобразования: числовые и категориальные колонки,
/// целевая переменная и путь для сохранения обученного препроцессора
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformConfig {
    pub numeric_columns: Vec<String>,
    pub categorical_columns: Vec<String>,
    pub label_column: String,
    pub preprocessor_path: PathBuf,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            numeric_columns: vec!["reading_score".to_string(), "writing_score".to_string()],
            categorical_columns: vec![
                "gender".to_string(),
                "race_ethnicity".to_string(),
                "parental_level_of_education".to_string(),
                "lunch".to_string(),
                "test_preparation_course".to_string(),
            ],
            label_column: "math_score".to_string(),
            preprocessor_path: PathBuf::from("artifacts/preprocessor.json"),
        }
    }
}

/// Результат преобразования train/test пары.
/// Последняя колонка каждой матрицы - целевая переменная
#[derive(Debug)]
pub struct TransformOutput {
    pub train: Array2<f64>,
    pub test: Array2<f64>,
    pub preprocessor_path: PathBuf,
}
