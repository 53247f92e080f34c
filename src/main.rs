use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use budget_planner::cli::{handle_budget_command, BudgetCommands};
use budget_planner::config::{paths::PlannerPaths, settings::Settings};
use budget_planner::logging;
use budget_planner::services::BudgetModel;
use budget_planner::storage::{BudgetStore, FileStore};

#[derive(Parser)]
#[command(
    name = "budget",
    author = "Kaylee Beyene",
    version,
    about = "Monthly budget planner for the terminal",
    long_about = "Budget Planner keeps a simple monthly budget: list your income \
                  and expenses, see what's left over, and where the money goes. \
                  Changes are saved automatically."
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    #[command(flatten)]
    Budget(BudgetCommands),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = PlannerPaths::new()?;
    paths.ensure_directories()?;
    let settings = Settings::load_or_create(&paths)?;

    let launch_tui = matches!(cli.command, None | Some(Commands::Tui));
    let log_file = paths.log_file();
    logging::init(
        &settings.log_level,
        cli.verbose,
        launch_tui.then_some(log_file.as_path()),
    )?;
    debug!(base_dir = %paths.base_dir().display(), "Starting budget planner");

    let store = BudgetStore::new(FileStore::open(&paths)?)
        .with_default_currency(settings.default_currency.clone());
    let mut model = BudgetModel::new(store.load_or_default())
        .with_default_currency(settings.default_currency.clone());
    model.subscribe(store);

    match cli.command {
        None | Some(Commands::Tui) => {
            budget_planner::tui::run_tui(model)?;
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&mut model, &paths, &settings, cmd)?;
        }
    }

    Ok(())
}
