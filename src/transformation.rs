//! Преобразование train/test пары и сохранение препроцессора

use std::path::Path;

use ndarray::{s, Array1, Array2};

use crate::artifacts::save_object;
use crate::dataset::Dataset;
use crate::error::Result;
use crate::preprocessing::ColumnTransformer;
use crate::types::{TransformConfig, TransformOutput};

pub struct DataTransformation {
    config: TransformConfig,
}

impl DataTransformation {
    pub fn new() -> Self {
        Self {
            config: TransformConfig::default(),
        }
    }

    pub fn with_config(config: TransformConfig) -> Self {
        Self { config }
    }

    /// Загружает обе выборки, обучает препроцессор на train,
    /// применяет его к обеим и сохраняет обученный объект
    pub fn run<P, Q>(&self, train_path: P, test_path: Q) -> Result<TransformOutput>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let train = Dataset::from_path(train_path)?;
        let test = Dataset::from_path(test_path)?;
        tracing::info!(
            "Read train and test data: {} / {} rows",
            train.n_rows(),
            test.n_rows()
        );

        let transformer = ColumnTransformer::new(
            self.config.numeric_columns.clone(),
            self.config.categorical_columns.clone(),
        );
        tracing::info!("Numeric columns: {:?}", self.config.numeric_columns);
        tracing::info!("Categorical columns: {:?}", self.config.categorical_columns);

        let (train_features, train_labels) = train.split_label(&self.config.label_column)?;
        let (test_features, test_labels) = test.split_label(&self.config.label_column)?;

        // Статистики вычисляются только из train: test не влияет на параметры
        let (fitted, train_features) = transformer.fit_transform(&train_features)?;
        let test_features = fitted.transform(&test_features)?;
        tracing::info!(
            "Applied preprocessing: train {:?}, test {:?}",
            train_features.dim(),
            test_features.dim()
        );

        let train_arr = append_label(train_features, &train_labels);
        let test_arr = append_label(test_features, &test_labels);

        save_object(&self.config.preprocessor_path, &fitted)?;
        tracing::info!(
            "Saved preprocessing object to {}",
            self.config.preprocessor_path.display()
        );

        Ok(TransformOutput {
            train: train_arr,
            test: test_arr,
            preprocessor_path: self.config.preprocessor_path.clone(),
        })
    }
}

impl Default for DataTransformation {
    fn default() -> Self {
        Self::new()
    }
}

/// Добавляет целевую переменную последней колонкой матрицы
fn append_label(features: Array2<f64>, labels: &Array1<f64>) -> Array2<f64> {
    let (rows, cols) = features.dim();
    let mut combined = Array2::zeros((rows, cols + 1));
    combined.slice_mut(s![.., ..cols]).assign(&features);
    combined.slice_mut(s![.., cols]).assign(labels);
    combined
}
