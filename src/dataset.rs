//! Загрузка табличных данных в память

use std::path::Path;

use ndarray::Array1;

use crate::error::{Result, TransformError};

/// Прямоугольная таблица с именованными колонками.
/// Пустая ячейка трактуется как пропущенное значение
#[derive(Debug, Clone)]
pub struct Dataset {
    headers: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

impl Dataset {
    /// Читает CSV файл целиком в память
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let read_error = |source| TransformError::DatasetRead {
            path: path.to_path_buf(),
            source,
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_path(path)
            .map_err(read_error)?;

        let headers = reader
            .headers()
            .map_err(read_error)?
            .iter()
            .map(str::to_string)
            .collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(read_error)?;
            rows.push(
                record
                    .iter()
                    .map(|cell| {
                        if cell.is_empty() {
                            None
                        } else {
                            Some(cell.to_string())
                        }
                    })
                    .collect(),
            );
        }

        Ok(Self { headers, rows })
    }

    /// Собирает таблицу из именованных колонок
    pub fn from_columns(headers: Vec<String>, columns: Vec<Vec<Option<String>>>) -> Result<Self> {
        if headers.len() != columns.len() {
            return Err(TransformError::LengthMismatch {
                expected: headers.len(),
                actual: columns.len(),
            });
        }

        let n_rows = columns.first().map_or(0, Vec::len);
        for column in &columns {
            if column.len() != n_rows {
                return Err(TransformError::LengthMismatch {
                    expected: n_rows,
                    actual: column.len(),
                });
            }
        }

        let rows = (0..n_rows)
            .map(|i| columns.iter().map(|column| column[i].clone()).collect())
            .collect();

        Ok(Self { headers, rows })
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn column(&self, name: &str) -> Result<Vec<Option<&str>>> {
        let idx = self.column_index(name)?;
        Ok(self.rows.iter().map(|row| row[idx].as_deref()).collect())
    }

    /// Колонка, разобранная как числа; пропуски сохраняются
    pub fn numeric_column(&self, name: &str) -> Result<Vec<Option<f64>>> {
        let idx = self.column_index(name)?;
        self.rows
            .iter()
            .map(|row| match row[idx].as_deref() {
                None => Ok(None),
                Some(text) => text.parse::<f64>().map(Some).map_err(|_| {
                    TransformError::NonNumeric {
                        column: name.to_string(),
                        value: text.to_string(),
                    }
                }),
            })
            .collect()
    }

    /// Отделяет целевую переменную от признаков.
    /// Пропущенное значение целевой переменной становится NaN
    pub fn split_label(&self, label: &str) -> Result<(Dataset, Array1<f64>)> {
        let idx = self.column_index(label)?;

        let mut labels = Array1::zeros(self.rows.len());
        let mut rows = Vec::with_capacity(self.rows.len());
        for (i, row) in self.rows.iter().enumerate() {
            labels[i] = match row[idx].as_deref() {
                None => f64::NAN,
                Some(text) => text.parse::<f64>().map_err(|_| TransformError::NonNumeric {
                    column: label.to_string(),
                    value: text.to_string(),
                })?,
            };

            let mut feature_row = row.clone();
            feature_row.remove(idx);
            rows.push(feature_row);
        }

        let mut headers = self.headers.clone();
        headers.remove(idx);

        Ok((Dataset { headers, rows }, labels))
    }

    fn column_index(&self, name: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|header| header == name)
            .ok_or_else(|| TransformError::MissingColumn(name.to_string()))
    }
}
