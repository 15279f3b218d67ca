use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::errors::KenoError;

/// Payout ratios keyed by spot count, then by hit count.
///
/// Only entries that are present pay. A missing spot row or a missing hit
/// entry resolves to no multiplier at all, which scoring treats as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paytable {
    rows: BTreeMap<u8, BTreeMap<u8, u32>>,
}

/// A spot count and its `(hits, multiplier)` entries.
pub type PaytableRow = (u8, &'static [(u8, u32)]);

impl Paytable {
    pub fn from_rows(rows: &[PaytableRow]) -> Self {
        let rows = rows
            .iter()
            .map(|(spots, entries)| (*spots, entries.iter().copied().collect()))
            .collect();
        Self { rows }
    }

    /// Multiplier for a card with `spots` picks that hit `hits` numbers.
    pub fn multiplier(&self, spots: usize, hits: usize) -> Option<u32> {
        let spots = u8::try_from(spots).ok()?;
        let hits = u8::try_from(hits).ok()?;
        self.rows.get(&spots)?.get(&hits).copied()
    }

    pub fn row(&self, spots: u8) -> Option<&BTreeMap<u8, u32>> {
        self.rows.get(&spots)
    }

    pub fn spot_counts(&self) -> impl Iterator<Item = u8> + '_ {
        self.rows.keys().copied()
    }
}

/// Named paytables shipped with the game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
pub enum Preset {
    #[default]
    Fun,
    #[serde(rename = "Casino-ish")]
    CasinoIsh,
}

impl Preset {
    pub const ALL: [Preset; 2] = [Preset::Fun, Preset::CasinoIsh];

    pub fn name(&self) -> &'static str {
        match self {
            Preset::Fun => "Fun",
            Preset::CasinoIsh => "Casino-ish",
        }
    }

    /// Resolves a preset by display name, ignoring case and separators.
    ///
    /// ```
    /// use keno_engine::paytable::Preset;
    ///
    /// assert_eq!(Preset::from_name("fun"), Ok(Preset::Fun));
    /// assert_eq!(Preset::from_name("casino_ish"), Ok(Preset::CasinoIsh));
    /// assert!(Preset::from_name("jackpot").is_err());
    /// ```
    pub fn from_name(name: &str) -> Result<Preset, KenoError> {
        let key: String = name
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "fun" => Ok(Preset::Fun),
            "casinoish" => Ok(Preset::CasinoIsh),
            _ => Err(KenoError::UnknownPreset(name.to_string())),
        }
    }

    pub fn table(&self) -> &'static Paytable {
        static FUN: OnceLock<Paytable> = OnceLock::new();
        static CASINO_ISH: OnceLock<Paytable> = OnceLock::new();
        match self {
            Preset::Fun => FUN.get_or_init(|| Paytable::from_rows(FUN_ROWS)),
            Preset::CasinoIsh => CASINO_ISH.get_or_init(|| Paytable::from_rows(CASINO_ISH_ROWS)),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = KenoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::from_name(s)
    }
}

const FUN_ROWS: &[PaytableRow] = &[
    (1, &[(1, 3)]),
    (2, &[(2, 10)]),
    (3, &[(2, 2), (3, 20)]),
    (4, &[(2, 1), (3, 5), (4, 50)]),
    (5, &[(3, 2), (4, 15), (5, 100)]),
    (6, &[(3, 1), (4, 5), (5, 25), (6, 200)]),
    (7, &[(3, 1), (4, 3), (5, 10), (6, 50), (7, 400)]),
    (8, &[(4, 2), (5, 8), (6, 30), (7, 100), (8, 700)]),
    (9, &[(4, 1), (5, 5), (6, 15), (7, 60), (8, 200), (9, 1000)]),
    (
        10,
        &[(5, 2), (6, 8), (7, 25), (8, 100), (9, 400), (10, 1500)],
    ),
];

const CASINO_ISH_ROWS: &[PaytableRow] = &[
    (1, &[(1, 2)]),
    (2, &[(2, 8)]),
    (3, &[(2, 1), (3, 16)]),
    (4, &[(3, 4), (4, 30)]),
    (5, &[(3, 1), (4, 8), (5, 60)]),
    (6, &[(4, 4), (5, 15), (6, 120)]),
    (7, &[(4, 2), (5, 8), (6, 30), (7, 250)]),
    (8, &[(5, 5), (6, 20), (7, 80), (8, 500)]),
    (9, &[(5, 3), (6, 10), (7, 40), (8, 150), (9, 800)]),
    (
        10,
        &[(5, 2), (6, 8), (7, 25), (8, 100), (9, 250), (10, 1000)],
    ),
];
