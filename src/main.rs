use gloo::console::{error, log, warn};
use stakeledger::ledger::{DEFAULT_MAX_ROWS, DEFAULT_MIN_ROWS};
use stakeledger::{Edit, Ledger, LedgerConfig};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew::TargetCast;

#[derive(Properties, PartialEq)]
struct AppProps {
    #[prop_or(DEFAULT_MIN_ROWS)]
    min_rows: usize,
    #[prop_or(DEFAULT_MAX_ROWS)]
    max_rows: usize,
}

impl Default for AppProps {
    fn default() -> Self {
        Self {
            min_rows: DEFAULT_MIN_ROWS,
            max_rows: DEFAULT_MAX_ROWS,
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
enum Column {
    Percentage,
    Odds,
    Winnings,
}

impl Column {
    fn label(self) -> &'static str {
        match self {
            Column::Percentage => "Percentage",
            Column::Odds => "Odds",
            Column::Winnings => "Winnings",
        }
    }
}

fn ledger_config(props: &AppProps) -> LedgerConfig {
    LedgerConfig::new(props.min_rows, props.max_rows).unwrap_or_else(|e| {
        error!(format!("Invalid row bounds ({}), using defaults", e));
        LedgerConfig::default()
    })
}

fn report(row: usize, edit: &Edit) {
    match edit {
        Edit::Applied => {}
        Edit::Recovered(e) => warn!(format!("Row {}: {}", row + 1, e)),
        Edit::NoSuchRow(i) => warn!(format!("Edit for unknown row {}", i + 1)),
    }
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let ledger = use_state(|| Ledger::new(ledger_config(props)));

    // Handlers
    let on_field = |i: usize, column: Column| {
        let ledger = ledger.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            let text = target.value();
            let mut v = (*ledger).clone();
            let edit = match column {
                Column::Percentage => v.set_percentage(i, &text),
                Column::Odds => v.set_odds(i, &text),
                Column::Winnings => v.set_winnings(i, &text),
            };
            report(i, &edit);
            ledger.set(v);
        })
    };

    let on_add_row = {
        let ledger = ledger.clone();
        Callback::from(move |_| {
            let mut v = (*ledger).clone();
            if v.add_row() {
                log!(format!("Added row, {} rows", v.len()));
                ledger.set(v);
            }
        })
    };
    let on_remove_row = {
        let ledger = ledger.clone();
        Callback::from(move |_| {
            let mut v = (*ledger).clone();
            if v.remove_row() {
                log!(format!("Removed row, {} rows", v.len()));
                ledger.set(v);
            }
        })
    };
    let on_clear = {
        let ledger = ledger.clone();
        Callback::from(move |_| {
            let mut v = (*ledger).clone();
            v.clear();
            log!(format!("Cleared, {} rows", v.len()));
            ledger.set(v);
        })
    };

    let total = ledger.total();
    let over = ledger.is_over_allocated();

    html! {
        <div class="container">
            <header>
                <h1>{"Odds & Stake Calculator"}</h1>
                <div class="pill">{format!("{} / {} rows", ledger.len(), ledger.config().max_rows())}</div>
            </header>

            <div class="card">
                <div class="row four labels">
                    <label>{Column::Percentage.label()}</label>
                    <label>{Column::Odds.label()}</label>
                    <label>{Column::Winnings.label()}</label>
                    <label>{"Stake"}</label>
                </div>

                { for ledger.rows().iter().enumerate().map(|(i, r)| {
                    html!{
                        <div class="row four">
                            <input
                                placeholder={Column::Percentage.label()}
                                value={r.percentage_text().to_string()}
                                oninput={on_field(i, Column::Percentage)}
                                aria-label="Percentage" />
                            <input
                                placeholder={Column::Odds.label()}
                                value={r.odds_text().to_string()}
                                oninput={on_field(i, Column::Odds)}
                                aria-label="Odds" />
                            <input
                                placeholder={Column::Winnings.label()}
                                value={r.winnings_text().to_string()}
                                oninput={on_field(i, Column::Winnings)}
                                aria-label="Winnings" />
                            <input
                                placeholder="Stake"
                                readonly={true}
                                value={r.stake().to_string()}
                                aria-label="Stake" />
                        </div>
                    }
                }) }

                <div class={classes!("total", if over { "danger" } else { "success" })}>
                    {format!("Total: {}", total)}
                </div>

                <div class="section-divider"></div>

                <div class="row three">
                    <button onclick={on_add_row} disabled={!ledger.can_add_row()} aria-label="Add row">
                        {"Add Row"}
                    </button>
                    <button onclick={on_remove_row} disabled={!ledger.can_remove_row()} aria-label="Remove row">
                        {"Remove Row"}
                    </button>
                    <button onclick={on_clear} class="danger" aria-label="Clear all rows">
                        {"Clear"}
                    </button>
                </div>

                { if over {
                    html!{ <div class="hint warning">{"Total stake exceeds the winnings target"}</div> }
                } else { html!{} }}
            </div>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
