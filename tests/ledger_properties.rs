//! Behaviour of the ledger through its public API

use proptest::prelude::*;
use stakeledger::{Edit, Ledger, LedgerConfig, StakeReadout, Total};

fn nonzero() -> impl Strategy<Value = f64> {
    prop_oneof![1e-4f64..1e6, -1e6f64..-1e-4]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn test_percentage_sets_reciprocal_odds(p in nonzero(), index in 0usize..2) {
        let mut ledger = Ledger::default();
        let text = p.to_string();
        prop_assert_eq!(ledger.set_percentage(index, &text), Edit::Applied);
        prop_assert_eq!(ledger.rows()[index].odds_text(), format!("{:.2}", 1.0 / p));
        prop_assert_eq!(ledger.rows()[index].percentage_text(), text.as_str());
    }

    #[test]
    fn test_odds_sets_reciprocal_percentage(o in nonzero(), index in 0usize..2) {
        let mut ledger = Ledger::default();
        let text = o.to_string();
        prop_assert_eq!(ledger.set_odds(index, &text), Edit::Applied);
        prop_assert_eq!(ledger.rows()[index].percentage_text(), format!("{:.2}", 1.0 / o));
        prop_assert_eq!(ledger.rows()[index].odds_text(), text.as_str());
    }
}

#[test]
fn test_reciprocal_display_values() {
    let mut ledger = Ledger::default();
    let cases = [
        ("0.3", "3.33"),
        ("0.01", "100.00"),
        ("0.25", "4.00"),
        ("3", "0.33"),
        ("1.5", "0.67"),
        ("0", "0.00"),
        ("-4", "-0.25"),
    ];
    for (input, derived) in cases {
        ledger.set_percentage(0, input);
        assert_eq!(ledger.rows()[0].odds_text(), derived, "percentage {}", input);
        ledger.set_odds(1, input);
        assert_eq!(ledger.rows()[1].percentage_text(), derived, "odds {}", input);
    }
}

#[test]
fn test_invalid_text_blanks_paired_field() {
    let mut ledger = Ledger::default();
    for text in ["", "abc", "1..2", "inf", "5%"] {
        ledger.set_odds(0, "2");
        assert!(matches!(ledger.set_percentage(0, text), Edit::Recovered(_)));
        assert_eq!(ledger.rows()[0].odds_text(), "");

        ledger.set_percentage(0, "0.5");
        assert!(matches!(ledger.set_odds(0, text), Edit::Recovered(_)));
        assert_eq!(ledger.rows()[0].percentage_text(), "");
    }
}

#[test]
fn test_winnings_edit_reaches_every_row() {
    let mut ledger = Ledger::default();
    for _ in 0..4 {
        ledger.add_row();
    }
    ledger.set_winnings(3, "50");
    assert!(ledger.rows().iter().all(|r| r.winnings() == Some(50.0)));
    assert!(ledger.rows().iter().all(|r| r.winnings_text() == "50"));
}

#[test]
fn test_within_winnings_example() {
    let mut ledger = Ledger::default();
    ledger.set_winnings(0, "100");
    ledger.set_odds(0, "2.0");
    ledger.set_odds(1, "4.0");

    assert_eq!(ledger.rows()[0].stake().to_string(), "50.00");
    assert_eq!(ledger.rows()[1].stake().to_string(), "25.00");
    assert_eq!(ledger.total().to_string(), "75.00");
    assert!(!ledger.is_over_allocated());
}

#[test]
fn test_over_allocated_example() {
    let mut ledger = Ledger::default();
    ledger.set_winnings(0, "100");
    ledger.set_odds(0, "0.5");
    ledger.set_odds(1, "4.0");

    assert_eq!(ledger.rows()[0].stake(), StakeReadout::Priced(200.0));
    assert_eq!(ledger.rows()[1].stake(), StakeReadout::Priced(25.0));
    assert_eq!(ledger.total().to_string(), "225.00");
    assert!(ledger.is_over_allocated());
}

#[test]
fn test_percentage_entry_prices_with_rounded_odds() {
    let mut ledger = Ledger::default();
    ledger.set_winnings(0, "100");
    ledger.set_percentage(0, "0.3");
    // Odds read back as 3.33, not 3.333...
    assert_eq!(ledger.rows()[0].stake().to_string(), "30.03");
}

#[test]
fn test_add_row_stops_at_max() {
    let mut ledger = Ledger::default();
    for _ in 0..18 {
        ledger.add_row();
    }
    assert_eq!(ledger.len(), 20);
    assert!(!ledger.add_row());
    assert_eq!(ledger.len(), 20);
}

#[test]
fn test_remove_row_stops_at_min() {
    let mut ledger = Ledger::default();
    while ledger.add_row() {}
    assert_eq!(ledger.len(), 20);

    let mut removed = 0;
    for _ in 0..30 {
        if ledger.remove_row() {
            removed += 1;
        }
    }
    assert_eq!(removed, 18);
    assert_eq!(ledger.len(), 2);
    assert!(!ledger.can_remove_row());
}

#[test]
fn test_clear_resets_to_min_rows() {
    let config = LedgerConfig::new(3, 6).unwrap();
    let mut ledger = Ledger::new(config);
    while ledger.add_row() {}
    ledger.set_winnings(0, "80");
    ledger.set_odds(5, "1.5");
    ledger.set_percentage(2, "0.4");

    ledger.clear();

    assert_eq!(ledger.len(), 3);
    for row in ledger.rows() {
        assert_eq!(row.percentage_text(), "");
        assert_eq!(row.odds_text(), "");
        assert_eq!(row.winnings_text(), "");
        assert_eq!(row.stake(), StakeReadout::Blank);
    }
    assert_eq!(ledger.total(), Total::Blank);
    assert_eq!(ledger.total().stake(), 0.0);
    assert!(!ledger.is_over_allocated());
}
