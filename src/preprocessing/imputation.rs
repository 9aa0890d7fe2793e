//! Заполнение пропущенных значений

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TransformError};

/// Заполняет пропуски медианой, вычисленной при обучении
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedianImputer {
    fill: f64,
}

impl MedianImputer {
    pub fn fit(column: &str, values: &[Option<f64>]) -> Result<Self> {
        let mut observed: Vec<f64> = values.iter().filter_map(|v| *v).collect();
        if observed.is_empty() {
            return Err(TransformError::EmptyColumn(column.to_string()));
        }

        observed.sort_by(f64::total_cmp);
        let mid = observed.len() / 2;
        let fill = if observed.len() % 2 == 0 {
            (observed[mid - 1] + observed[mid]) / 2.0
        } else {
            observed[mid]
        };

        Ok(Self { fill })
    }

    pub fn transform(&self, values: &[Option<f64>]) -> Vec<f64> {
        values
            .iter()
            .copied()
            .map(|v| v.unwrap_or(self.fill))
            .collect()
    }

    pub fn fill(&self) -> f64 {
        self.fill
    }
}

/// Заполняет пропуски самым частым значением обучающей выборки
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModeImputer {
    fill: String,
}

impl ModeImputer {
    pub fn fit(column: &str, values: &[Option<&str>]) -> Result<Self> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for value in values.iter().flatten() {
            *counts.entry(value).or_insert(0) += 1;
        }

        // При равенстве частот берётся лексикографически меньшее значение
        let fill = counts
            .into_iter()
            .max_by(|(a, count_a), (b, count_b)| count_a.cmp(count_b).then_with(|| b.cmp(a)))
            .map(|(value, _)| value.to_string())
            .ok_or_else(|| TransformError::EmptyColumn(column.to_string()))?;

        Ok(Self { fill })
    }

    pub fn transform(&self, values: &[Option<&str>]) -> Vec<String> {
        values
            .iter()
            .map(|v| match v {
                Some(value) => (*value).to_string(),
                None => self.fill.clone(),
            })
            .collect()
    }

    pub fn fill(&self) -> &str {
        &self.fill
    }
}
