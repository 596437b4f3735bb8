//! Row Ledger
//!
//! An ordered, bounded set of betting rows. Each row carries a percentage and
//! odds pair (each the reciprocal of the other), a winnings target shared by
//! every row, and a stake derived from them:
//!     stake = winnings / odds     (0 when odds == 0)
//!
//! The ledger sums the stakes into a total and flags the total as
//! over-allocated when it exceeds the winnings target.
//!
//! Every edit runs to completion and derives totals from the full row set;
//! nothing is tracked incrementally.

use std::fmt;

use crate::error::{ConfigError, Field, InputError};
use crate::numeric::{format_fixed, parse_field, reciprocal};

pub const DEFAULT_MIN_ROWS: usize = 2;
pub const DEFAULT_MAX_ROWS: usize = 20;

/// Row-count bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerConfig {
    min_rows: usize,
    max_rows: usize,
}

impl LedgerConfig {
    pub fn new(min_rows: usize, max_rows: usize) -> Result<Self, ConfigError> {
        if max_rows == 0 {
            return Err(ConfigError::NoRows);
        }
        if min_rows > max_rows {
            return Err(ConfigError::InvertedBounds { min_rows, max_rows });
        }
        Ok(Self { min_rows, max_rows })
    }

    pub fn min_rows(&self) -> usize {
        self.min_rows
    }

    pub fn max_rows(&self) -> usize {
        self.max_rows
    }
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            min_rows: DEFAULT_MIN_ROWS,
            max_rows: DEFAULT_MAX_ROWS,
        }
    }
}

/// What the stake readout of a row currently shows
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum StakeReadout {
    /// Never computed, or cleared
    #[default]
    Blank,
    /// Odds or winnings did not parse; counts as zero
    Unpriced,
    Priced(f64),
}

impl StakeReadout {
    pub fn value(&self) -> f64 {
        match self {
            StakeReadout::Priced(stake) => *stake,
            StakeReadout::Blank | StakeReadout::Unpriced => 0.0,
        }
    }
}

impl fmt::Display for StakeReadout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StakeReadout::Blank => Ok(()),
            StakeReadout::Unpriced => write!(f, "0"),
            StakeReadout::Priced(stake) => write!(f, "{}", format_fixed(*stake)),
        }
    }
}

/// One betting line.
///
/// Editable fields hold the text exactly as typed by the user or as written
/// by derivation, so an invalid entry stays visible until it is corrected.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    percentage: String,
    odds: String,
    winnings: String,
    stake: StakeReadout,
}

impl Row {
    pub fn percentage_text(&self) -> &str {
        &self.percentage
    }

    pub fn odds_text(&self) -> &str {
        &self.odds
    }

    pub fn winnings_text(&self) -> &str {
        &self.winnings
    }

    pub fn percentage(&self) -> Option<f64> {
        parse_field(Field::Percentage, &self.percentage).ok()
    }

    pub fn odds(&self) -> Option<f64> {
        parse_field(Field::Odds, &self.odds).ok()
    }

    pub fn winnings(&self) -> Option<f64> {
        parse_field(Field::Winnings, &self.winnings).ok()
    }

    pub fn stake(&self) -> StakeReadout {
        self.stake
    }

    fn price(&self) -> Result<(f64, f64), InputError> {
        let odds = parse_field(Field::Odds, &self.odds)?;
        let winnings = parse_field(Field::Winnings, &self.winnings)?;
        Ok((odds, winnings))
    }

    fn blank(&mut self) {
        *self = Row::default();
    }
}

/// Display text for the paired field of `text`.
///
/// Derived text is written straight into the paired field and never goes
/// back through the input setters, so percentage and odds cannot ping-pong.
/// A reciprocal too large for `f64` counts as invalid input.
fn derive_paired(field: Field, text: &str) -> Result<String, InputError> {
    let derived = reciprocal(parse_field(field, text)?);
    if !derived.is_finite() {
        return Err(InputError::NotFinite {
            field,
            text: text.to_string(),
        });
    }
    Ok(format_fixed(derived))
}

/// Sum of all row stakes
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Total {
    /// Fresh or cleared ledger
    #[default]
    Blank,
    Computed {
        stake: f64,
        /// Winnings of the last row whose odds and winnings both parsed
        reference: f64,
    },
}

impl Total {
    pub fn stake(&self) -> f64 {
        match self {
            Total::Blank => 0.0,
            Total::Computed { stake, .. } => *stake,
        }
    }

    /// True only when the total strictly exceeds the winnings target.
    pub fn is_over_allocated(&self) -> bool {
        match self {
            Total::Blank => false,
            Total::Computed { stake, reference } => stake > reference,
        }
    }
}

impl fmt::Display for Total {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Total::Blank => write!(f, "0"),
            Total::Computed { stake, .. } => write!(f, "{}", format_fixed(*stake)),
        }
    }
}

/// Result of a field edit.
///
/// Bad input is never an error for the caller: the ledger recovers and
/// reports what it recovered from.
#[derive(Debug, Clone, PartialEq)]
pub enum Edit {
    Applied,
    /// The text did not parse; dependent values were blanked or zeroed
    Recovered(InputError),
    /// Index past the last row; nothing changed
    NoSuchRow(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ledger {
    config: LedgerConfig,
    rows: Vec<Row>,
    total: Total,
}

impl Ledger {
    /// Create a ledger holding `min_rows` blank rows
    pub fn new(config: LedgerConfig) -> Self {
        Self {
            config,
            rows: vec![Row::default(); config.min_rows],
            total: Total::Blank,
        }
    }

    pub fn config(&self) -> LedgerConfig {
        self.config
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn total(&self) -> Total {
        self.total
    }

    pub fn is_over_allocated(&self) -> bool {
        self.total.is_over_allocated()
    }

    pub fn can_add_row(&self) -> bool {
        self.rows.len() < self.config.max_rows
    }

    pub fn can_remove_row(&self) -> bool {
        self.rows.len() > self.config.min_rows
    }

    /// Append a blank row. Returns false at `max_rows`.
    ///
    /// A blank row has zero stake, so stakes and the total are not recomputed.
    pub fn add_row(&mut self) -> bool {
        if !self.can_add_row() {
            return false;
        }
        self.rows.push(Row::default());
        true
    }

    /// Drop the last row and recompute. Returns false at `min_rows`.
    pub fn remove_row(&mut self) -> bool {
        if !self.can_remove_row() {
            return false;
        }
        self.rows.pop();
        self.recompute_stakes();
        true
    }

    /// Blank every row and shrink back to `min_rows`.
    pub fn clear(&mut self) {
        for row in &mut self.rows {
            row.blank();
        }
        self.rows.truncate(self.config.min_rows);
        self.total = Total::Blank;
    }

    /// Store `text` as the row's percentage and derive its odds.
    ///
    /// Unparseable text, or a percentage whose reciprocal overflows, blanks
    /// the odds and leaves stakes untouched.
    pub fn set_percentage(&mut self, index: usize, text: &str) -> Edit {
        let Some(row) = self.rows.get_mut(index) else {
            return Edit::NoSuchRow(index);
        };
        row.percentage = text.to_string();
        match derive_paired(Field::Percentage, text) {
            Ok(odds) => {
                row.odds = odds;
                self.recompute_stakes();
                Edit::Applied
            }
            Err(err) => {
                row.odds.clear();
                Edit::Recovered(err)
            }
        }
    }

    /// Store `text` as the row's odds and derive its percentage.
    ///
    /// Unparseable text, or odds whose reciprocal overflows, blanks the
    /// percentage and leaves stakes untouched.
    pub fn set_odds(&mut self, index: usize, text: &str) -> Edit {
        let Some(row) = self.rows.get_mut(index) else {
            return Edit::NoSuchRow(index);
        };
        row.odds = text.to_string();
        match derive_paired(Field::Odds, text) {
            Ok(percentage) => {
                row.percentage = percentage;
                self.recompute_stakes();
                Edit::Applied
            }
            Err(err) => {
                row.percentage.clear();
                Edit::Recovered(err)
            }
        }
    }

    /// Set the winnings target from any row; every row receives the same text.
    pub fn set_winnings(&mut self, index: usize, text: &str) -> Edit {
        if index >= self.rows.len() {
            return Edit::NoSuchRow(index);
        }
        for row in &mut self.rows {
            row.winnings = text.to_string();
        }
        self.recompute_stakes();
        match parse_field(Field::Winnings, text) {
            Ok(_) => Edit::Applied,
            Err(err) => Edit::Recovered(err),
        }
    }

    /// Derive every row stake and the total from the current field text.
    pub fn recompute_stakes(&mut self) {
        let mut stake_total = 0.0;
        let mut reference = 0.0;

        for row in &mut self.rows {
            row.stake = match row.price() {
                Ok((odds, winnings)) => {
                    reference = winnings;
                    StakeReadout::Priced(if odds != 0.0 { winnings / odds } else { 0.0 })
                }
                Err(_) => StakeReadout::Unpriced,
            };
            stake_total += row.stake.value();
        }

        self.total = Total::Computed {
            stake: stake_total,
            reference,
        };
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new(LedgerConfig::default())
    }
}
