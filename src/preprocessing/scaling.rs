//! Стандартизация признаков

use ndarray::{Array1, Array2, Axis};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TransformError};

/// Приведение колонок к нулевому среднему и единичной дисперсии.
/// Для индикаторных колонок центрирование отключается (with_mean = false),
/// чтобы сохранить их естественный ноль
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    mean: Array1<f64>,
    scale: Array1<f64>,
    with_mean: bool,
}

impl StandardScaler {
    pub fn fit(x: &Array2<f64>, with_mean: bool) -> Result<Self> {
        if x.nrows() == 0 {
            return Err(TransformError::EmptyDataset);
        }

        let mean = x.mean_axis(Axis(0)).ok_or(TransformError::EmptyDataset)?;
        let mut scale = x.std_axis(Axis(0), 0.0);

        // Избегаем деления на ноль для вырожденных колонок
        for value in scale.iter_mut() {
            if *value < 1e-10 {
                *value = 1.0;
            }
        }

        let mean = if with_mean {
            mean
        } else {
            Array1::zeros(x.ncols())
        };

        Ok(Self {
            mean,
            scale,
            with_mean,
        })
    }

    pub fn transform(&self, x: &Array2<f64>) -> Result<Array2<f64>> {
        if x.ncols() != self.scale.len() {
            return Err(TransformError::ShapeMismatch {
                expected: self.scale.len(),
                actual: x.ncols(),
            });
        }

        let mut scaled = x.clone();
        for mut row in scaled.rows_mut() {
            for (i, value) in row.iter_mut().enumerate() {
                *value = (*value - self.mean[i]) / self.scale[i];
            }
        }

        Ok(scaled)
    }

    pub fn with_mean(&self) -> bool {
        self.with_mean
    }
}
