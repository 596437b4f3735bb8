//! Stake Ledger - odds and stake allocation across betting rows
//!
//! This library provides:
//! - Percentage <-> odds conversion with two-decimal display values
//! - Per-row stakes for a shared winnings target, and their total
//! - Over-allocation detection when the total exceeds the target
//! - A bounded row count (add, remove from the tail, clear)
//!
//! # Example
//!
//! ```
//! use stakeledger::{Ledger, LedgerConfig};
//!
//! let mut ledger = Ledger::new(LedgerConfig::default());
//! ledger.set_winnings(0, "100");
//! ledger.set_odds(0, "2.0");
//! ledger.set_odds(1, "4.0");
//!
//! assert_eq!(ledger.total().to_string(), "75.00");
//! assert!(!ledger.is_over_allocated());
//! ```

pub mod error;
pub mod ledger;
pub mod numeric;

pub use error::{ConfigError, Field, InputError};
pub use ledger::{Edit, Ledger, LedgerConfig, Row, StakeReadout, Total};
