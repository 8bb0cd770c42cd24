use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};

use budget_wizard::cli::{handle_categories_command, handle_summary_command, SummaryArgs};
use budget_wizard::config::{Settings, WizardPaths};
use budget_wizard::logging;
use budget_wizard::wizard::{PromptOutcome, PromptWizard};

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Three-step budget calculator: income, expenses, summary",
    long_about = "Budget Wizard asks for your income, then for categorized expenses, \
                  and shows the total expenses and the balance left over. The \
                  expense list can be saved as a CSV file."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (default)
    #[command(alias = "ui")]
    Tui,

    /// Run the wizard with line-based prompts
    Prompt,

    /// Compute a summary from arguments without prompting
    Summary(SummaryArgs),

    /// List the expense categories
    Categories,

    /// Show configuration paths and settings
    Config {
        /// Write the current settings to the config file
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = WizardPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    logging::init(&paths, &settings)?;

    match cli.command {
        None | Some(Commands::Tui) => {
            budget_wizard::tui::run_tui(&settings)?;
        }
        Some(Commands::Prompt) => {
            let outcome = PromptWizard::new(io::stdin().lock(), io::stdout().lock(), &settings).run()?;
            if let PromptOutcome::Aborted = outcome {
                println!();
                println!("Wizard cancelled.");
            }
        }
        Some(Commands::Summary(args)) => {
            handle_summary_command(args, &settings, &mut io::stdout().lock())?;
        }
        Some(Commands::Categories) => {
            handle_categories_command(&mut io::stdout().lock())?;
        }
        Some(Commands::Config { init }) => {
            if init {
                settings.save(&paths)?;
                println!("Settings written to: {}", paths.settings_file().display());
                println!();
            }
            println!("Budget Wizard Configuration");
            println!("===========================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Log file:         {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:  {}", settings.currency_symbol);
            match &settings.default_export_dir {
                Some(dir) => println!("  Export directory: {}", dir.display()),
                None => println!("  Export directory: (current directory)"),
            }
            println!("  Log level:        {}", settings.log_level);
        }
    }

    Ok(())
}
