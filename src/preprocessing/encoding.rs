//! One-hot кодирование категориальных признаков

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TransformError};

/// Словарь категорий фиксируется при обучении.
/// Значение, не встречавшееся при обучении, кодируется нулевой строкой
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OneHotEncoder {
    categories: Vec<String>,
}

impl OneHotEncoder {
    pub fn fit(column: &str, values: &[String]) -> Result<Self> {
        let mut categories = values.to_vec();
        categories.sort();
        categories.dedup();

        if categories.is_empty() {
            return Err(TransformError::EmptyColumn(column.to_string()));
        }

        Ok(Self { categories })
    }

    pub fn transform(&self, values: &[String]) -> Array2<f64> {
        let mut encoded = Array2::zeros((values.len(), self.categories.len()));
        for (i, value) in values.iter().enumerate() {
            if let Ok(j) = self.categories.binary_search(value) {
                encoded[[i, j]] = 1.0;
            }
        }
        encoded
    }

    /// Количество индикаторных колонок
    pub fn width(&self) -> usize {
        self.categories.len()
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }
}
