use core::fmt;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::*;

/// Default location of the leaderboard file.
pub const DEFAULT_LEADERBOARD_PATH: &str = "leaderboard.txt";

/// How many records survive a save.
pub const LEADERBOARD_SIZE: usize = 5;

/// Longest player name accepted from the name prompt.
pub const MAX_NAME_LEN: usize = 10;

/// Formats seconds as `MM:SS`, with minutes clamped to 99.
pub fn format_time_label(secs: u64) -> String {
    let minutes = (secs / 60).min(99);
    let seconds = secs % 60;
    format!("{minutes:02}:{seconds:02}")
}

/// Keeps alphabetic characters only, up to [`MAX_NAME_LEN`], capitalized first
/// and lowercase after.
pub fn normalize_player_name(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_alphabetic)
        .take(MAX_NAME_LEN)
        .enumerate()
        .map(|(i, c)| {
            if i == 0 {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}

fn is_time_label(label: &str) -> bool {
    let bytes = label.as_bytes();
    bytes.len() == 5
        && bytes[2] == b':'
        && [0, 1, 3, 4].iter().all(|&i| bytes[i].is_ascii_digit())
}

/// One finished run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub time: String,
    pub name: String,
}

impl Record {
    pub fn new(elapsed_secs: u64, name: impl Into<String>) -> Self {
        Self {
            time: format_time_label(elapsed_secs),
            name: name.into(),
        }
    }

    /// Parses a stored `MM:SS,Name` line.
    pub fn parse(line: &str) -> Option<Self> {
        let (time, name) = line.split_once(',')?;
        is_time_label(time).then(|| Self {
            time: time.to_owned(),
            name: name.to_owned(),
        })
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.time, self.name)
    }
}

/// A ranked entry as shown in the leaderboard view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry<'a> {
    pub rank: usize,
    pub record: &'a Record,
    /// Set on the run recorded in this session.
    pub is_new: bool,
}

/// Best-time records backed by a text file.
///
/// Records stay sorted by time label; equal labels keep their insertion
/// order. Only the first [`LEADERBOARD_SIZE`] are ever written back.
#[derive(Clone, Debug, PartialEq)]
pub struct Leaderboard {
    path: PathBuf,
    records: Vec<Record>,
    new_record: Option<Record>,
}

impl Leaderboard {
    /// An empty leaderboard that will be saved to `path`.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            records: Vec::new(),
            new_record: None,
        }
    }

    /// Reads the records stored at `path`.
    ///
    /// A missing or unreadable file gives an empty leaderboard.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let mut leaderboard = Self::empty(path);
        match fs::read_to_string(&leaderboard.path) {
            Ok(contents) => leaderboard.extend_from_str(&contents),
            Err(err) => log::warn!(
                "Leaderboard {} unavailable, starting empty: {}",
                leaderboard.path.display(),
                err
            ),
        }
        leaderboard
    }

    fn extend_from_str(&mut self, contents: &str) {
        for line in contents.lines().map(str::trim_end) {
            if line.is_empty() {
                continue;
            }
            match Record::parse(line) {
                Some(record) => self.records.push(record),
                None => log::warn!("Skipping malformed leaderboard line {:?}", line),
            }
        }
        self.sort();
        log::debug!("Loaded {} leaderboard records", self.records.len());
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Adds a run and returns the record that was stored.
    pub fn insert(&mut self, elapsed_secs: u64, name: impl Into<String>) -> &Record {
        let record = Record::new(elapsed_secs, name);
        log::info!("New leaderboard record {}", record);
        self.records.push(record.clone());
        self.sort();
        self.new_record.insert(record)
    }

    /// The ranked entries that would be persisted.
    pub fn top(&self) -> Vec<Entry<'_>> {
        let mut highlight = self.new_record.as_ref();
        self.records
            .iter()
            .take(LEADERBOARD_SIZE)
            .enumerate()
            .map(|(i, record)| {
                let is_new = highlight == Some(record);
                if is_new {
                    highlight = None;
                }
                Entry {
                    rank: i + 1,
                    record,
                    is_new,
                }
            })
            .collect()
    }

    /// Writes the first [`LEADERBOARD_SIZE`] records, replacing the file.
    pub fn save(&self) -> core::result::Result<(), LeaderboardError> {
        let contents: String = self
            .records
            .iter()
            .take(LEADERBOARD_SIZE)
            .map(|record| format!("{record}\n"))
            .collect();
        fs::write(&self.path, contents)?;
        log::debug!(
            "Saved {} leaderboard records to {}",
            self.records.len().min(LEADERBOARD_SIZE),
            self.path.display()
        );
        Ok(())
    }

    fn sort(&mut self) {
        // stable, so ties keep their order
        self.records.sort_by(|a, b| a.time.cmp(&b.time));
    }
}

impl fmt::Display for Leaderboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in self.top() {
            write!(f, "{}.\t{}\t{}", entry.rank, entry.record.time, entry.record.name)?;
            if entry.is_new {
                write!(f, "*")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
