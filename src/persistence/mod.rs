use std::{
    fs,
    path::PathBuf,
};

use serde::{
    de::DeserializeOwned,
    Serialize,
};

use crate::core::JobDeckError;

const APP_NAME: &str = "jobdeck";

pub fn get_app_data_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        let app_dir = data_dir.join(APP_NAME);
        let _ = fs::create_dir_all(&app_dir);
        app_dir
    } else {
        PathBuf::from(".")
    }
}

pub fn get_data_file_path(filename: &str) -> PathBuf {
    get_app_data_dir().join(filename)
}

pub fn save_json<T: Serialize>(data: &T, filename: &str) -> Result<(), JobDeckError> {
    let file_path = get_data_file_path(filename);
    let json = serde_json::to_string_pretty(data)?;
    fs::write(&file_path, json)?;
    Ok(())
}

/// Loads `filename` from the app data dir, falling back to `T::default()`
/// when the file is absent or unreadable.
pub fn load_json_or_default<T: DeserializeOwned + Default>(filename: &str) -> T {
    let file_path = get_data_file_path(filename);

    if !file_path.exists() {
        return T::default();
    }

    match fs::read_to_string(&file_path).map_err(JobDeckError::from).and_then(|json| {
        serde_json::from_str(&json).map_err(JobDeckError::from)
    }) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Failed to load {}: {}. Using defaults.", filename, e);
            T::default()
        }
    }
}
