use std::{
    fs,
    path::{
        Path,
        PathBuf,
    },
};

use serde::{
    Deserialize,
    Serialize,
};
use tracing::{
    debug,
    warn,
};

use crate::core::VocBuilderError;

const APP_NAME: &str = "voc-builder";

pub fn get_app_data_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        data_dir.join(APP_NAME)
    } else {
        PathBuf::from(".")
    }
}

pub fn get_data_file_path(filename: &str) -> PathBuf {
    get_app_data_dir().join(filename)
}

pub fn save_json_to<T: Serialize>(data: &T, path: &Path) -> Result<(), VocBuilderError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(data)?;
    fs::write(path, json)?;
    debug!(path = %path.display(), "Data saved");
    Ok(())
}

/// Missing files load as `T::default()`.
pub fn load_json_from<T: for<'de> Deserialize<'de> + Default>(
    path: &Path,
) -> Result<T, VocBuilderError> {
    if !path.exists() {
        return Ok(T::default());
    }

    let json = fs::read_to_string(path)?;
    let data: T = serde_json::from_str(&json)?;
    debug!(path = %path.display(), "Data loaded");
    Ok(data)
}

pub fn load_json_or_default<T: for<'de> Deserialize<'de> + Default>(path: &Path) -> T {
    match load_json_from::<T>(path) {
        Ok(data) => data,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to load, using defaults");
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn test_roundtrip_and_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("data.json");

        let missing: HashMap<String, u32> = load_json_from(&path).unwrap();
        assert!(missing.is_empty());

        let data = HashMap::from([("words".to_string(), 3u32)]);
        save_json_to(&data, &path).unwrap();
        let loaded: HashMap<String, u32> = load_json_from(&path).unwrap();
        assert_eq!(loaded, data);
    }

    #[test]
    fn test_corrupt_file_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(load_json_from::<HashMap<String, u32>>(&path).is_err());
        let data: HashMap<String, u32> = load_json_or_default(&path);
        assert!(data.is_empty());
    }
}
