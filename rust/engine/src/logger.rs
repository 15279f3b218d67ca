use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{create_dir_all, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::paytable::Preset;
use crate::scoring::CardResult;

/// One card's line in a round record.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct CardRecord {
    pub card_id: u32,
    /// Picks at draw time
    pub picks: Vec<u8>,
    pub hits: usize,
    pub win: u64,
}

/// Complete record of a drawn round.
/// Serialized to JSONL for round history and later aggregation.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Unique identifier for this round (format: YYYYMMDD-NNNNNN)
    pub round_id: String,
    /// Generator seed, when the session was seeded
    #[serde(default)]
    pub seed: Option<u64>,
    pub preset: Preset,
    pub bet_per_card: u32,
    /// Drawn numbers in ascending order
    pub drawn: Vec<u8>,
    pub cards: Vec<CardRecord>,
    pub total_bet: u64,
    pub total_win: u64,
    /// Timestamp when the round was drawn (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

impl CardRecord {
    pub fn new(picks: &[u8], result: &CardResult) -> Self {
        Self {
            card_id: result.card_id,
            picks: picks.to_vec(),
            hits: result.hits,
            win: result.win,
        }
    }
}

pub fn format_round_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

pub struct RoundLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl RoundLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        Self::open(path, false)
    }

    /// Opens `path` for appending, keeping earlier rounds.
    pub fn append<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        Self::open(path, true)
    }

    fn open<P: AsRef<Path>>(path: P, append: bool) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                let _ = create_dir_all(parent);
            }
        }
        let f = OpenOptions::new()
            .write(true)
            .create(true)
            .append(append)
            .truncate(!append)
            .open(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_round_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &RoundRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
