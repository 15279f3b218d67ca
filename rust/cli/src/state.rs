//! Saved session state for `play --state`.
//!
//! A missing file means a fresh session. An unreadable or malformed file is
//! reported as a warning and the session starts from defaults.

use crate::error::CliError;
use crate::io_utils::ensure_parent_dir;
use crate::ui;
use keno_engine::session::SessionSnapshot;
use std::io::Write;
use std::path::Path;

pub fn load_snapshot(path: &Path, err: &mut dyn Write) -> Result<Option<SessionSnapshot>, CliError> {
    if !path.exists() {
        return Ok(None);
    }
    let body = match std::fs::read_to_string(path) {
        Ok(b) => b,
        Err(e) => {
            ui::display_warning(
                err,
                &format!("Cannot read state {}: {}; starting fresh", path.display(), e),
            )?;
            return Ok(None);
        }
    };
    match serde_json::from_str::<SessionSnapshot>(&body) {
        Ok(snapshot) => Ok(Some(snapshot)),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "discarding malformed state");
            ui::display_warning(
                err,
                &format!("Ignoring malformed state {}: {}", path.display(), e),
            )?;
            Ok(None)
        }
    }
}

pub fn save_snapshot(path: &Path, snapshot: &SessionSnapshot) -> Result<(), CliError> {
    ensure_parent_dir(path).map_err(CliError::InvalidInput)?;
    let body = serde_json::to_string_pretty(snapshot).map_err(std::io::Error::other)?;
    std::fs::write(path, body)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use keno_engine::card::Card;

    #[test]
    fn missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut err = Vec::new();
        let loaded = load_snapshot(&dir.path().join("none.json"), &mut err).unwrap();
        assert!(loaded.is_none());
        assert!(err.is_empty());
    }

    #[test]
    fn malformed_file_warns_and_yields_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, "{not json").unwrap();
        let mut err = Vec::new();
        assert!(load_snapshot(&path, &mut err).unwrap().is_none());
        assert!(String::from_utf8(err).unwrap().contains("WARNING: Ignoring malformed state"));
    }

    #[test]
    fn saved_snapshot_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("state.json");
        let snapshot = SessionSnapshot {
            cards: vec![Card {
                id: 1,
                picks: vec![4, 44],
            }],
            ..SessionSnapshot::default()
        };
        save_snapshot(&path, &snapshot).unwrap();
        let mut err = Vec::new();
        assert_eq!(load_snapshot(&path, &mut err).unwrap(), Some(snapshot));
    }
}
