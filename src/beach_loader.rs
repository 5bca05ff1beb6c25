//! Beach list loading.
//!
//! Beaches are read once at startup from a JSON array of
//! `{lat, lng, name, position, user}` records and kept in memory.

use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

use crate::error::{Result, SurfcastError};
use crate::logging::log_beach_load_stats;
use crate::models::Beach;

/// Load and validate the beaches listed in a JSON file
pub fn load_beaches(path: &Path) -> Result<Vec<Beach>> {
    if !path.exists() {
        return Err(SurfcastError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("File not found: {}", path.display()),
        )));
    }

    let content = std::fs::read_to_string(path)?;
    let beaches = parse_beaches(&content)?;

    let names: Vec<&str> = beaches.iter().map(|b| b.name.as_str()).collect();
    let users: HashSet<&str> = beaches.iter().map(|b| b.user.as_str()).collect();
    log_beach_load_stats(&path.display().to_string(), &names, users.len());

    Ok(beaches)
}

/// Parse and validate a JSON beach list
pub fn parse_beaches(content: &str) -> Result<Vec<Beach>> {
    let beaches: Vec<Beach> = serde_json::from_str(content)?;
    for beach in &beaches {
        beach.validate()?;
        debug!(name = %beach.name, position = %beach.position, "Loaded beach");
    }
    Ok(beaches)
}

/// Beaches owned by `user`, in their original order
pub fn beaches_for_user(beaches: &[Beach], user: &str) -> Vec<Beach> {
    beaches
        .iter()
        .filter(|beach| beach.user == user)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Octant;
    use std::io::Write;

    const BEACHES: &str = r#"[
        {"lat": -33.792726, "lng": 151.289824, "name": "Manly", "position": "E", "user": "alice"},
        {"lat": -33.750000, "lng": 151.299000, "name": "Dee Why", "position": "NE", "user": "bob"},
        {"lat": -33.890000, "lng": 151.274000, "name": "Bondi", "position": "E", "user": "alice"}
    ]"#;

    #[test]
    fn test_load_beaches_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(BEACHES.as_bytes()).unwrap();

        let beaches = load_beaches(file.path()).unwrap();
        assert_eq!(beaches.len(), 3);
        assert_eq!(beaches[1].name, "Dee Why");
        assert_eq!(beaches[1].position, Octant::NE);
    }

    #[test]
    fn test_missing_file() {
        let err = load_beaches(Path::new("/nonexistent/beaches.json")).unwrap_err();
        assert!(matches!(err, SurfcastError::Io(_)));
    }

    #[test]
    fn test_invalid_beach_is_rejected() {
        let content = r#"[{"lat": 120.0, "lng": 0.0, "name": "Nowhere", "position": "N", "user": "x"}]"#;
        let err = parse_beaches(content).unwrap_err();
        assert!(matches!(err, SurfcastError::InvalidBeach { .. }));
    }

    #[test]
    fn test_unknown_position_is_rejected() {
        let content = r#"[{"lat": 0.0, "lng": 0.0, "name": "Somewhere", "position": "NNE", "user": "x"}]"#;
        assert!(matches!(parse_beaches(content), Err(SurfcastError::Json(_))));
    }

    #[test]
    fn test_beaches_for_user() {
        let beaches = parse_beaches(BEACHES).unwrap();
        let names: Vec<String> = beaches_for_user(&beaches, "alice")
            .into_iter()
            .map(|b| b.name)
            .collect();
        assert_eq!(names, vec!["Manly", "Bondi"]);
        assert!(beaches_for_user(&beaches, "carol").is_empty());
    }
}
