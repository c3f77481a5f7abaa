use serde_json::Value;
use std::{fs, path::PathBuf};

const SNAPSHOT_KEYS: [&str; 4] = ["golfers", "courses", "rounds", "hole_scores"];

/// # Errors
///
/// Will return `Err` if the file is not readable or is not a valid snapshot
pub fn check_readable_file_and_json(file: &str) -> Result<Value, String> {
    let path = PathBuf::from(file);
    if !path.is_file() || fs::metadata(&path).is_err() {
        return Err(format!("The json file '{file}' is not readable."));
    }
    let contents = fs::read_to_string(&path)
        .map_err(|e| format!("The json file '{file}' could not be read: {e}"))?;
    let json: Value = serde_json::from_str(&contents)
        .map_err(|e| format!("The json file '{file}' is not valid json: {e}"))?;
    validate_json_format(&json)?;
    Ok(json)
}

/// Validate the json file format
/// format we expect is this:
/// { "golfers": [{"id": "g1", "name": "Firstname Lastname"}, ...]
/// , "courses": [{"id": "c1", "name": "...", "rating": <float>, "slope": <int>, "hole_count": 18, "total_par": 72, "holes": [...]}, ...]
/// , "rounds": [{"id": "r1", "golfer_id": "g1", "course_id": "c1", "date": "2026-05-01", "score": 90, "holes_played": 18}, ...]
/// , "hole_scores": [{"round_id": "r1", "hole_number": 1, "score": 5}, ...]
/// }
///
/// # Errors
///
/// Will return `Err` if the json is not in the correct format
pub fn validate_json_format(json: &Value) -> Result<(), String> {
    let Some(object) = json.as_object() else {
        return Err("The json file is not in the correct format. Expected an object.".to_string());
    };

    for (key, value) in object {
        if !SNAPSHOT_KEYS.contains(&key.as_str()) {
            return Err(format!(
                "The json file is not in the correct format. Expected keys: {SNAPSHOT_KEYS:?}"
            ));
        }
        let Some(entries) = value.as_array() else {
            return Err(format!(
                "The json key {key} is not in the correct format. Expected an array."
            ));
        };
        if entries.iter().any(|entry| !entry.is_object()) {
            return Err(format!(
                "The json key {key} is not in the correct format. Expected objects."
            ));
        }
    }

    let ids_are_strings = ["golfers", "courses", "rounds"].iter().all(|key| {
        object
            .get(*key)
            .and_then(Value::as_array)
            .is_none_or(|entries| entries.iter().all(|e| e["id"].is_string()))
    });
    if !ids_are_strings {
        return Err(
            "The json key id is not in the correct format. Expected a string.".to_string(),
        );
    }

    Ok(())
}
