//! Budget CLI commands
//!
//! Implements the one-shot commands that read or change the budget. Every
//! change goes through the [`BudgetModel`], so it is saved by the same
//! listener the TUI uses.

use std::io::{self, IsTerminal, Write};

use clap::Subcommand;

use crate::config::paths::PlannerPaths;
use crate::config::settings::Settings;
use crate::display::{format_line_items, format_summary, TextChart};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{BudgetState, Currency, LineItemId, LineItemKind, LineItemPatch, Money};
use crate::services::{BudgetModel, ChartListener, Decided};

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Show line items, totals and the expense breakdown
    Show,

    /// Add a line item
    Add {
        /// Collection to add to (income or expense)
        kind: LineItemKind,

        /// Item name (defaults to "New Item")
        #[arg(short, long)]
        name: Option<String>,

        /// Amount (e.g., "1200" or "1,200.50")
        #[arg(short, long)]
        amount: Option<String>,
    },

    /// Change the name or amount of a line item
    Set {
        /// Collection the item belongs to (income or expense)
        kind: LineItemKind,

        /// Item ID, short ID (li-1a2b3c4d) or position in the list
        id: String,

        /// New name
        #[arg(short, long)]
        name: Option<String>,

        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
    },

    /// Remove a line item
    #[command(alias = "rm")]
    Remove {
        /// Collection the item belongs to (income or expense)
        kind: LineItemKind,

        /// Item ID, short ID (li-1a2b3c4d) or position in the list
        id: String,
    },

    /// Replace the budget note
    Note {
        /// Note text
        #[arg(required_unless_present = "clear")]
        text: Option<String>,

        /// Clear the note
        #[arg(long, conflicts_with = "text")]
        clear: bool,
    },

    /// Change the display currency (e.g., USD, EUR)
    Currency {
        /// ISO currency code
        code: String,
    },

    /// Replace the budget with the starter line items
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show current configuration and paths
    Config,
}

/// Handle a budget command
pub fn handle_budget_command(
    model: &mut BudgetModel,
    paths: &PlannerPaths,
    settings: &Settings,
    cmd: BudgetCommands,
) -> BudgetResult<()> {
    match cmd {
        BudgetCommands::Show => {
            print_budget(model.state(), io::stdout().is_terminal());
        }

        BudgetCommands::Add { kind, name, amount } => {
            let patch = LineItemPatch { name, amount };
            warn_if_invalid(&patch);
            let item = model.add_line_item_with(kind, &patch);

            println!(
                "Added {} '{}' ({}) {}",
                kind.label().to_lowercase(),
                item.name,
                item.id,
                item.amount.format_with_symbol(&model.state().currency.symbol())
            );
        }

        BudgetCommands::Set {
            kind,
            id,
            name,
            amount,
        } => {
            let patch = LineItemPatch { name, amount };
            if patch.is_empty() {
                return Err(BudgetError::Validation(
                    "Nothing to change. Pass --name and/or --amount.".into(),
                ));
            }

            let id = resolve_line_item(model.state(), kind, &id)?;
            warn_if_invalid(&patch);
            model.update_line_item(kind, id, &patch);

            if let Some(item) = model.state().get(kind, id) {
                println!(
                    "Updated {} '{}' ({}) {}",
                    kind.label().to_lowercase(),
                    item.name,
                    item.id,
                    item.amount.format_with_symbol(&model.state().currency.symbol())
                );
            }
        }

        BudgetCommands::Remove { kind, id } => {
            let id = resolve_line_item(model.state(), kind, &id)?;
            if let Some(item) = model.remove_line_item(kind, id) {
                println!(
                    "Removed {} '{}' ({})",
                    kind.label().to_lowercase(),
                    item.name,
                    item.id
                );
            }
        }

        BudgetCommands::Note { text, clear } => {
            let text = if clear { String::new() } else { text.unwrap_or_default() };
            model.set_note(text);
            if model.state().note.is_empty() {
                println!("Note cleared");
            } else {
                println!("Note saved");
            }
        }

        BudgetCommands::Currency { code } => {
            let currency: Currency = code
                .parse()
                .map_err(|e| BudgetError::Validation(format!("Invalid currency: {}", e)))?;
            model.set_currency(currency.clone());
            println!("Currency set to {} ({})", currency, currency.symbol().trim());
        }

        BudgetCommands::Reset { yes } => {
            let reset = if yes || !settings.confirm_reset {
                model.reset(&Decided(true))
            } else {
                model.reset(&prompt_yes_no)
            };

            if reset {
                println!("Budget reset to the starter line items.");
            } else {
                println!("Aborted.");
            }
        }

        BudgetCommands::Config => {
            println!("Budget Planner Configuration");
            println!("============================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Log file:         {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Default currency: {}", settings.default_currency);
            println!("  Log level:        {}", settings.log_level);
            println!("  Confirm reset:    {}", settings.confirm_reset);
        }
    }

    Ok(())
}

/// Print both collections, the summary and the breakdown chart
pub fn print_budget(state: &BudgetState, colored: bool) {
    for kind in LineItemKind::all() {
        println!("{}", kind.label());
        println!("{}", format_line_items(state, kind));
        println!();
    }

    print!("{}", format_summary(state));
    println!();

    let mut chart = ChartListener::new(TextChart::new(state.currency.symbol(), colored));
    chart.prime(state);
    print!("{}", chart.chart().output());
}

/// Find an item by full ID, short ID, or 1-based position
pub fn resolve_line_item(
    state: &BudgetState,
    kind: LineItemKind,
    ident: &str,
) -> BudgetResult<LineItemId> {
    let items = state.items(kind);
    let ident = ident.trim();

    if let Ok(position) = ident.parse::<usize>() {
        if (1..=items.len()).contains(&position) {
            return Ok(items[position - 1].id);
        }
    }

    let mut matches = items.iter().filter(|item| item.id.matches(ident));
    match (matches.next(), matches.next()) {
        (Some(item), None) => Ok(item.id),
        (Some(_), Some(_)) => Err(BudgetError::Validation(format!(
            "'{}' matches more than one {}; use a longer ID",
            ident,
            kind.label().to_lowercase()
        ))),
        (None, _) => Err(BudgetError::line_item_not_found(ident)),
    }
}

fn warn_if_invalid(patch: &LineItemPatch) {
    if let Some(ref raw) = patch.amount {
        if Money::parse_amount(raw).is_none() {
            eprintln!(
                "Warning: '{}' is not a valid amount; it counts as 0 until corrected.",
                raw
            );
        }
    }
}

fn prompt_yes_no(message: &str) -> bool {
    print!("{} (yes/no): ", message);
    if io::stdout().flush().is_err() {
        return false;
    }

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return false;
    }

    matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
}
