//! Сохранение и загрузка обученных объектов

use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Result, TransformError};

/// Сериализует объект в JSON, создавая родительские каталоги.
/// Существующий файл перезаписывается
pub fn save_object<T: Serialize, P: AsRef<Path>>(path: P, object: &T) -> Result<()> {
    let path = path.as_ref();
    let io_error = |source| TransformError::ArtifactIo {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
    }

    let file = fs::File::create(path).map_err(io_error)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, object).map_err(|source| TransformError::ArtifactFormat {
        path: path.to_path_buf(),
        source,
    })?;
    writer.flush().map_err(io_error)?;

    Ok(())
}

/// Восстанавливает объект, сохранённый через save_object
pub fn load_object<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T> {
    let path = path.as_ref();

    let file = fs::File::open(path).map_err(|source| TransformError::ArtifactIo {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| {
        TransformError::ArtifactFormat {
            path: path.to_path_buf(),
            source,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_creates_parent_directories_and_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("artifacts/nested/object.json");

        save_object(&path, &vec![1.0, 2.5]).unwrap();
        let restored: Vec<f64> = load_object(&path).unwrap();

        assert_eq!(restored, vec![1.0, 2.5]);
    }

    #[test]
    fn save_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("object.json");

        save_object(&path, &1).unwrap();
        save_object(&path, &2).unwrap();

        let restored: i32 = load_object(&path).unwrap();
        assert_eq!(restored, 2);
    }

    #[test]
    fn load_fails_on_missing_file() {
        let err = load_object::<i32, _>("no/such/object.json").unwrap_err();
        assert!(matches!(err, TransformError::ArtifactIo { .. }));
    }
}
