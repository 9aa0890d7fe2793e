//! Составной препроцессор: числовая и категориальная ветки

use ndarray::{s, Array2};
use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::error::Result;
use crate::preprocessing::{MedianImputer, ModeImputer, OneHotEncoder, StandardScaler};

/// Ещё не обученный препроцессор. Детерминирован списками колонок;
/// наличие колонок в данных проверяется только при обучении
#[derive(Debug, Clone)]
pub struct ColumnTransformer {
    numeric_columns: Vec<String>,
    categorical_columns: Vec<String>,
}

impl ColumnTransformer {
    pub fn new(numeric_columns: Vec<String>, categorical_columns: Vec<String>) -> Self {
        Self {
            numeric_columns,
            categorical_columns,
        }
    }

    /// Обучение поглощает неподготовленный препроцессор.
    /// Все статистики вычисляются только из переданных данных
    pub fn fit(self, data: &Dataset) -> Result<FittedColumnTransformer> {
        // Числовая ветка: медиана -> стандартизация
        let mut numeric_imputers = Vec::with_capacity(self.numeric_columns.len());
        let mut numeric = Array2::zeros((data.n_rows(), self.numeric_columns.len()));
        for (j, name) in self.numeric_columns.iter().enumerate() {
            let values = data.numeric_column(name)?;
            let imputer = MedianImputer::fit(name, &values)?;
            for (i, value) in imputer.transform(&values).into_iter().enumerate() {
                numeric[[i, j]] = value;
            }
            numeric_imputers.push(imputer);
        }
        let numeric_scaler = StandardScaler::fit(&numeric, true)?;

        // Категориальная ветка: мода -> one-hot -> масштабирование без центрирования
        let mut categorical_imputers = Vec::with_capacity(self.categorical_columns.len());
        let mut encoders = Vec::with_capacity(self.categorical_columns.len());
        let mut blocks = Vec::with_capacity(self.categorical_columns.len());
        for name in &self.categorical_columns {
            let values = data.column(name)?;
            let imputer = ModeImputer::fit(name, &values)?;
            let filled = imputer.transform(&values);
            let encoder = OneHotEncoder::fit(name, &filled)?;
            blocks.push(encoder.transform(&filled));
            categorical_imputers.push(imputer);
            encoders.push(encoder);
        }
        let encoded = hstack(data.n_rows(), &blocks);
        let categorical_scaler = StandardScaler::fit(&encoded, false)?;

        Ok(FittedColumnTransformer {
            numeric_columns: self.numeric_columns,
            categorical_columns: self.categorical_columns,
            numeric_imputers,
            numeric_scaler,
            categorical_imputers,
            encoders,
            categorical_scaler,
        })
    }

    pub fn fit_transform(self, data: &Dataset) -> Result<(FittedColumnTransformer, Array2<f64>)> {
        let fitted = self.fit(data)?;
        let transformed = fitted.transform(data)?;
        Ok((fitted, transformed))
    }
}

/// Обученный препроцессор. Параметры зафиксированы и больше не меняются;
/// этот объект сериализуется в артефакт и переиспользуется при инференсе
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FittedColumnTransformer {
    numeric_columns: Vec<String>,
    categorical_columns: Vec<String>,
    numeric_imputers: Vec<MedianImputer>,
    numeric_scaler: StandardScaler,
    categorical_imputers: Vec<ModeImputer>,
    encoders: Vec<OneHotEncoder>,
    categorical_scaler: StandardScaler,
}

impl FittedColumnTransformer {
    /// Применяет зафиксированные параметры к новым данным.
    /// Порядок строк и их количество сохраняются
    pub fn transform(&self, data: &Dataset) -> Result<Array2<f64>> {
        let mut numeric = Array2::zeros((data.n_rows(), self.numeric_columns.len()));
        for (j, name) in self.numeric_columns.iter().enumerate() {
            let values = data.numeric_column(name)?;
            for (i, value) in self.numeric_imputers[j].transform(&values).into_iter().enumerate() {
                numeric[[i, j]] = value;
            }
        }
        let numeric = self.numeric_scaler.transform(&numeric)?;

        let mut blocks = Vec::with_capacity(self.categorical_columns.len());
        for (j, name) in self.categorical_columns.iter().enumerate() {
            let values = data.column(name)?;
            let filled = self.categorical_imputers[j].transform(&values);
            blocks.push(self.encoders[j].transform(&filled));
        }
        let categorical = self
            .categorical_scaler
            .transform(&hstack(data.n_rows(), &blocks))?;

        // Сначала числовые признаки, затем one-hot блоки
        Ok(hstack(data.n_rows(), &[numeric, categorical]))
    }

    /// Ширина выходной матрицы признаков
    pub fn output_width(&self) -> usize {
        self.numeric_columns.len() + self.encoders.iter().map(OneHotEncoder::width).sum::<usize>()
    }
}

fn hstack(n_rows: usize, blocks: &[Array2<f64>]) -> Array2<f64> {
    let width: usize = blocks.iter().map(|block| block.ncols()).sum();
    let mut out = Array2::zeros((n_rows, width));
    let mut offset = 0;
    for block in blocks {
        out.slice_mut(s![.., offset..offset + block.ncols()]).assign(block);
        offset += block.ncols();
    }
    out
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::error::TransformError;

    fn col(values: &[&str]) -> Vec<Option<String>> {
        values
            .iter()
            .map(|v| {
                if v.is_empty() {
                    None
                } else {
                    Some(v.to_string())
                }
            })
            .collect()
    }

    fn train_data() -> Dataset {
        Dataset::from_columns(
            vec![
                "reading_score".to_string(),
                "writing_score".to_string(),
                "gender".to_string(),
            ],
            vec![
                col(&["70", "80", "90"]),
                col(&["65", "75", "85"]),
                col(&["M", "F", "M"]),
            ],
        )
        .unwrap()
    }

    fn transformer() -> ColumnTransformer {
        ColumnTransformer::new(
            vec!["reading_score".to_string(), "writing_score".to_string()],
            vec!["gender".to_string()],
        )
    }

    #[test]
    fn output_width_is_numeric_plus_one_hot() {
        let data = train_data();
        let (fitted, transformed) = transformer().fit_transform(&data).unwrap();

        assert_eq!(fitted.output_width(), 2 + 2);
        assert_eq!(transformed.shape(), &[3, 4]);
    }

    #[test]
    fn transform_is_idempotent() {
        let data = train_data();
        let fitted = transformer().fit(&data).unwrap();

        let first = fitted.transform(&data).unwrap();
        let second = fitted.transform(&data).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn transforming_new_data_does_not_change_fitted_parameters() {
        let fitted = transformer().fit(&train_data()).unwrap();
        let before = serde_json::to_string(&fitted).unwrap();

        let test = Dataset::from_columns(
            vec![
                "reading_score".to_string(),
                "writing_score".to_string(),
                "gender".to_string(),
            ],
            vec![col(&["10", "10"]), col(&["10", "10"]), col(&["F", "F"])],
        )
        .unwrap();
        fitted.transform(&test).unwrap();

        let after = serde_json::to_string(&fitted).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn missing_values_are_imputed_with_train_statistics() {
        let with_missing = Dataset::from_columns(
            vec![
                "reading_score".to_string(),
                "writing_score".to_string(),
                "gender".to_string(),
            ],
            vec![
                col(&["70", "", "90"]),
                col(&["65", "75", "85"]),
                col(&["M", "", "M"]),
            ],
        )
        .unwrap();

        let explicit = Dataset::from_columns(
            vec![
                "reading_score".to_string(),
                "writing_score".to_string(),
                "gender".to_string(),
            ],
            vec![
                col(&["70", "80", "90"]),
                col(&["65", "75", "85"]),
                col(&["M", "M", "M"]),
            ],
        )
        .unwrap();

        let fitted = transformer().fit(&train_data()).unwrap();
        let imputed = fitted.transform(&with_missing).unwrap();
        let expected = fitted.transform(&explicit).unwrap();

        for (a, b) in imputed.iter().zip(expected.iter()) {
            assert_abs_diff_eq!(*a, *b, epsilon = 1e-12);
        }
    }

    #[test]
    fn fit_fails_when_declared_column_is_absent() {
        let data = Dataset::from_columns(
            vec!["reading_score".to_string(), "writing_score".to_string()],
            vec![col(&["70"]), col(&["65"])],
        )
        .unwrap();

        let err = transformer().fit(&data).unwrap_err();
        assert!(matches!(err, TransformError::MissingColumn(name) if name == "gender"));
    }

    #[test]
    fn unseen_category_transforms_to_zero_block() {
        let data = train_data();
        let fitted = transformer().fit(&data).unwrap();

        let unseen = Dataset::from_columns(
            vec![
                "reading_score".to_string(),
                "writing_score".to_string(),
                "gender".to_string(),
            ],
            vec![col(&["80"]), col(&["75"]), col(&["X"])],
        )
        .unwrap();

        let transformed = fitted.transform(&unseen).unwrap();
        // Две последние колонки - one-hot блок пола
        assert_eq!(transformed[[0, 2]], 0.0);
        assert_eq!(transformed[[0, 3]], 0.0);
    }
}
