use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::StateStore;
use crate::error::PersistError;
use crate::model::{GameEvent, GameState};

pub const STATE_FILE: &str = "state.json";
pub const EVENTS_FILE: &str = "events.jsonl";

/// Write an iterator of serializable items to a JSONL file (one JSON object per line).
fn write_jsonl<T: Serialize>(path: &Path, items: impl Iterator<Item = T>) -> Result<(), PersistError> {
    let mut writer = BufWriter::new(File::create(path)?);
    for item in items {
        serde_json::to_writer(&mut writer, &item)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    PathBuf::from(tmp)
}

fn write_state(path: &Path, state: &GameState) -> Result<(), PersistError> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, state)?;
    writer.flush()?;
    Ok(())
}

/// File-backed store: one directory per game.
///
/// - `state.json`: the latest committed snapshot
/// - `events.jsonl`: one event per line, in firing order
#[derive(Debug, Clone)]
pub struct JsonDirStore {
    dir: PathBuf,
}

impl JsonDirStore {
    /// Creates the directory if it does not exist.
    pub fn create(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl StateStore for JsonDirStore {
    /// Both files are staged as temps before either is renamed into place,
    /// and `state.json` is renamed last. A failed write leaves the previous
    /// pair untouched.
    fn commit(&mut self, state: &GameState) -> Result<(), PersistError> {
        let events = self.dir.join(EVENTS_FILE);
        let snapshot = self.dir.join(STATE_FILE);
        let (events_tmp, snapshot_tmp) = (temp_path(&events), temp_path(&snapshot));

        let staged = write_jsonl(&events_tmp, state.recent_events.iter())
            .and_then(|()| write_state(&snapshot_tmp, state));
        if let Err(error) = staged {
            let _ = fs::remove_file(&events_tmp);
            let _ = fs::remove_file(&snapshot_tmp);
            return Err(error);
        }

        if let Err(error) = fs::rename(&events_tmp, &events) {
            let _ = fs::remove_file(&snapshot_tmp);
            return Err(error.into());
        }
        fs::rename(&snapshot_tmp, &snapshot)?;
        tracing::debug!(dir = %self.dir.display(), cycle = state.cycle, "state committed");
        Ok(())
    }
}

/// Read the snapshot a [`JsonDirStore`] committed to `dir`.
pub fn load_state(dir: &Path) -> Result<GameState, PersistError> {
    let reader = BufReader::new(File::open(dir.join(STATE_FILE))?);
    Ok(serde_json::from_reader(reader)?)
}

/// Read the event log a [`JsonDirStore`] committed to `dir`.
pub fn read_events(dir: &Path) -> Result<Vec<GameEvent>, PersistError> {
    let reader = BufReader::new(File::open(dir.join(EVENTS_FILE))?);
    let mut events = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        events.push(serde_json::from_str(&line)?);
    }
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ActionKind, Faction, FactionType, WorldState};
    use crate::sim::events::repetition_event;

    #[test]
    fn missing_state_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(load_state(dir.path()), Err(PersistError::Io(_))));
    }

    fn state() -> GameState {
        GameState::new(
            Faction::new(1, "Test".to_string(), FactionType::Empire),
            WorldState {
                galactic_stability: 50,
                gate_network_integrity: 50,
                ancient_tech_discovery: 0,
            },
        )
    }

    #[test]
    fn commit_leaves_no_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonDirStore::create(dir.path().join("game")).unwrap();
        store.commit(&state()).unwrap();

        let mut names: Vec<_> = fs::read_dir(store.dir())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        names.sort();
        assert_eq!(names, vec![EVENTS_FILE, STATE_FILE]);
    }

    #[test]
    fn corrupt_state_is_json_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(STATE_FILE), "{ not json").unwrap();
        assert!(matches!(load_state(dir.path()), Err(PersistError::Json(_))));
    }

    #[test]
    fn failed_state_write_keeps_previous_pair() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonDirStore::create(dir.path()).unwrap();
        let mut first = state();
        first.recent_events.push(repetition_event(ActionKind::Diplomacy, 1));
        store.commit(&first).unwrap();
        let events_before = read_events(dir.path()).unwrap();

        // A directory squatting on the temp path makes the snapshot write fail.
        fs::create_dir(dir.path().join("state.json.tmp")).unwrap();
        let mut second = first.clone();
        second.cycle = 2;
        second.faction.resources = 12;
        second.recent_events.push(repetition_event(ActionKind::BuildDefenses, 2));
        assert!(store.commit(&second).is_err());

        assert_eq!(load_state(dir.path()).unwrap(), first);
        assert_eq!(read_events(dir.path()).unwrap(), events_before);
        assert!(!dir.path().join("events.jsonl.tmp").exists());

        fs::remove_dir(dir.path().join("state.json.tmp")).unwrap();
        store.commit(&second).unwrap();
        assert_eq!(load_state(dir.path()).unwrap(), second);
    }
}
