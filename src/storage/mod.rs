//! Durable session and stats persistence
//!
//! A `StateStore` is a flat string key-value contract with single-writer,
//! whole-record read-modify-write semantics. `FileStore` keeps one JSON
//! document per key under the platform data directory; `MemoryStore` backs
//! tests. A missing, unreadable, or unparseable stored record always means
//! "no prior record" and never aborts the game.

use crate::core::Word;
use crate::daily::DailyWord;
use crate::game::{AggregateStats, Session};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Store key for the current day's session snapshot
pub const SESSION_KEY: &str = "session";

/// Store key for the aggregate statistics
pub const STATS_KEY: &str = "stats";

/// Record-shape version written with every session snapshot
pub const SESSION_RECORD_VERSION: u32 = 1;

/// Flat key-value persistence contract
pub trait StateStore {
    /// Read the stored value for `key`, if any
    fn get(&self, key: &str) -> Option<String>;

    /// Durably replace the value for `key`
    ///
    /// # Errors
    /// Returns an I/O error if the value cannot be written.
    fn set(&mut self, key: &str, value: &str) -> io::Result<()>;
}

/// File-backed store: one JSON document per key
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir` (created lazily on first write)
    #[must_use]
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Open the store at the platform data directory
    ///
    /// # Errors
    /// Returns an error if no data directory can be determined.
    pub fn open_default() -> io::Result<Self> {
        let base = dirs::data_dir().or_else(dirs::home_dir).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "could not determine a data directory",
            )
        })?;
        Ok(Self::open(base.join("horrordle")))
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StateStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.key_path(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.key_path(key), value)
    }
}

/// In-memory store for tests
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl StateStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Stored shape of a session snapshot
///
/// Only the raw guess texts are stored; evaluations are recomputed on
/// restore so the record can never disagree with the evaluator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    pub version: u32,
    pub date: String,
    pub target: String,
    #[serde(default)]
    pub hint: Option<String>,
    #[serde(default)]
    pub guesses: Vec<String>,
    #[serde(default)]
    pub concluded: bool,
}

impl SessionRecord {
    /// Snapshot a live session
    #[must_use]
    pub fn from_session(session: &Session) -> Self {
        Self {
            version: SESSION_RECORD_VERSION,
            date: session.date().to_string(),
            target: session.target().text().to_string(),
            hint: session.hint().map(str::to_string),
            guesses: session
                .attempts()
                .iter()
                .map(|attempt| attempt.guess.text().to_string())
                .collect(),
            concluded: session.is_concluded(),
        }
    }

    /// Rebuild the live session, or `None` if any stored word is invalid
    #[must_use]
    pub fn into_session(self) -> Option<Session> {
        let target = Word::new(&self.target).ok()?;
        let guesses: Vec<Word> = self
            .guesses
            .iter()
            .map(Word::new)
            .collect::<Result<_, _>>()
            .ok()?;

        Some(Session::restore(
            self.date,
            target,
            self.hint,
            &guesses,
            self.concluded,
        ))
    }
}

/// Resume the stored session for `today`, or start a fresh one
///
/// A stored record resumes only when its date string matches `today` and it
/// parses cleanly; anything else (prior day, corrupt record, unknown record
/// version) starts fresh. On resume the stored target wins over the computed
/// one, so an answer-list change can never corrupt a mid-day game.
#[must_use]
pub fn start_or_resume(store: &dyn StateStore, today: &str, daily: &DailyWord) -> Session {
    if let Some(session) = load_session(store, today) {
        return session;
    }

    Session::new(today, daily.target.clone(), daily.hint.clone())
}

fn load_session(store: &dyn StateStore, today: &str) -> Option<Session> {
    let text = store.get(SESSION_KEY)?;
    let record: SessionRecord = serde_json::from_str(&text).ok()?;

    if record.version != SESSION_RECORD_VERSION || record.date != today {
        return None;
    }

    record.into_session()
}

/// Write the session snapshot
///
/// # Errors
/// Returns an I/O error if the record cannot be written.
pub fn persist_session(store: &mut dyn StateStore, session: &Session) -> io::Result<()> {
    let record = SessionRecord::from_session(session);
    let text = serde_json::to_string_pretty(&record)?;
    store.set(SESSION_KEY, &text)
}

/// Read the aggregate stats, defaulting on a missing or corrupt record
#[must_use]
pub fn load_stats(store: &dyn StateStore) -> AggregateStats {
    store
        .get(STATS_KEY)
        .and_then(|text| serde_json::from_str(&text).ok())
        .unwrap_or_default()
}

/// Write the aggregate stats
///
/// # Errors
/// Returns an I/O error if the record cannot be written.
pub fn persist_stats(store: &mut dyn StateStore, stats: &AggregateStats) -> io::Result<()> {
    let text = serde_json::to_string_pretty(stats)?;
    store.set(STATS_KEY, &text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::Dictionary;
    use crate::wordlists::loader::words_from_slice;

    fn fixture_daily() -> DailyWord {
        DailyWord {
            date: "2026-08-07".to_string(),
            target: Word::new("ghost").unwrap(),
            hint: Some("begins with 'G' and ends with 'T'".to_string()),
        }
    }

    fn fixture_dictionary() -> Dictionary {
        let words = words_from_slice(&["ghost", "crypt", "haunt"]);
        Dictionary::from_words(&words)
    }

    #[test]
    fn fresh_session_when_store_empty() {
        let store = MemoryStore::default();
        let session = start_or_resume(&store, "2026-08-07", &fixture_daily());

        assert_eq!(session.attempts().len(), 0);
        assert_eq!(session.date(), "2026-08-07");
        assert_eq!(session.target().text(), "GHOST");
    }

    #[test]
    fn same_day_resume_preserves_attempts() {
        let mut store = MemoryStore::default();
        let dictionary = fixture_dictionary();
        let daily = fixture_daily();

        let mut session = start_or_resume(&store, "2026-08-07", &daily);
        session.submit("crypt", &dictionary).unwrap();
        session.submit("haunt", &dictionary).unwrap();
        persist_session(&mut store, &session).unwrap();

        let resumed = start_or_resume(&store, "2026-08-07", &daily);
        assert_eq!(resumed.attempts().len(), 2);
        assert_eq!(resumed.attempts()[0].guess.text(), "CRYPT");
        assert_eq!(
            resumed.attempts()[1].evaluation,
            session.attempts()[1].evaluation
        );
        assert!(!resumed.is_over());
    }

    #[test]
    fn later_day_discards_stored_session() {
        let mut store = MemoryStore::default();
        let dictionary = fixture_dictionary();
        let daily = fixture_daily();

        let mut session = start_or_resume(&store, "2026-08-07", &daily);
        session.submit("crypt", &dictionary).unwrap();
        persist_session(&mut store, &session).unwrap();

        let next_daily = DailyWord {
            date: "2026-08-08".to_string(),
            target: Word::new("raven").unwrap(),
            hint: None,
        };
        let fresh = start_or_resume(&store, "2026-08-08", &next_daily);

        assert_eq!(fresh.attempts().len(), 0);
        assert_eq!(fresh.target().text(), "RAVEN");
    }

    #[test]
    fn corrupt_record_starts_fresh() {
        let mut store = MemoryStore::default();
        store.set(SESSION_KEY, "{ not json").unwrap();

        let session = start_or_resume(&store, "2026-08-07", &fixture_daily());
        assert_eq!(session.attempts().len(), 0);
    }

    #[test]
    fn unknown_record_version_starts_fresh() {
        let mut store = MemoryStore::default();
        let record = SessionRecord {
            version: 99,
            date: "2026-08-07".to_string(),
            target: "GHOST".to_string(),
            hint: None,
            guesses: vec!["CRYPT".to_string()],
            concluded: false,
        };
        store
            .set(SESSION_KEY, &serde_json::to_string(&record).unwrap())
            .unwrap();

        let session = start_or_resume(&store, "2026-08-07", &fixture_daily());
        assert_eq!(session.attempts().len(), 0);
    }

    #[test]
    fn resumed_session_keeps_concluded_guard() {
        let mut store = MemoryStore::default();
        let dictionary = fixture_dictionary();
        let daily = fixture_daily();
        let mut stats = AggregateStats::default();

        let mut session = start_or_resume(&store, "2026-08-07", &daily);
        session.submit("ghost", &dictionary).unwrap();
        session.conclude(&mut stats).unwrap();
        persist_session(&mut store, &session).unwrap();

        // Reload and conclude again: stats must not double-count
        let mut resumed = start_or_resume(&store, "2026-08-07", &daily);
        assert!(resumed.is_over());
        assert!(resumed.is_concluded());

        let outcome = resumed.conclude(&mut stats).unwrap();
        assert!(outcome.won);
        assert_eq!(stats.games_played, 1);
    }

    #[test]
    fn stats_default_on_missing_or_corrupt() {
        let mut store = MemoryStore::default();
        assert_eq!(load_stats(&store), AggregateStats::default());

        store.set(STATS_KEY, "not json at all").unwrap();
        assert_eq!(load_stats(&store), AggregateStats::default());
    }

    #[test]
    fn stats_round_trip() {
        let mut store = MemoryStore::default();
        let mut stats = AggregateStats::default();
        stats.record_win(4);
        stats.record_loss();

        persist_stats(&mut store, &stats).unwrap();
        assert_eq!(load_stats(&store), stats);
    }

    #[test]
    fn file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path().join("horrordle"));

        assert_eq!(store.get(SESSION_KEY), None);

        store.set(SESSION_KEY, "{\"v\":1}").unwrap();
        assert_eq!(store.get(SESSION_KEY), Some("{\"v\":1}".to_string()));

        // A second handle over the same directory sees the value
        let reopened = FileStore::open(dir.path().join("horrordle"));
        assert_eq!(reopened.get(SESSION_KEY), Some("{\"v\":1}".to_string()));
    }

    #[test]
    fn file_store_full_session_cycle() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path());
        let dictionary = fixture_dictionary();
        let daily = fixture_daily();

        let mut session = start_or_resume(&store, "2026-08-07", &daily);
        session.submit("crypt", &dictionary).unwrap();
        persist_session(&mut store, &session).unwrap();

        let resumed = start_or_resume(&store, "2026-08-07", &daily);
        assert_eq!(resumed.attempts().len(), 1);
    }
}
