use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use atm_cli::config::{Settings, UserEntry};
use atm_cli::logging;
use atm_cli::models::Money;
use atm_cli::services::AccountBalance;
use atm_cli::session::Session;

#[derive(Parser)]
#[command(
    name = "atm",
    version,
    about = "Terminal ATM simulator",
    long_about = "An in-memory ATM simulator. Log in with an account number and \
                  password, then deposit, withdraw, check your balance, review \
                  your activity or change your password. Nothing is saved when \
                  the session ends."
)]
struct Cli {
    /// JSON settings file (read only)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Starting balance, e.g. 2000 or 2000.00
    #[arg(long, value_name = "AMOUNT", allow_hyphen_values = true)]
    initial_balance: Option<Money>,

    /// Failed logins allowed before lockout
    #[arg(long, value_name = "N")]
    max_attempts: Option<u32>,

    /// Add a credential (repeatable)
    #[arg(long = "user", value_name = "ACCOUNT:PASSWORD")]
    users: Vec<String>,

    /// Log filter, e.g. "info" or "atm_cli=debug" (defaults to RUST_LOG, then "warn")
    #[arg(long, value_name = "FILTER")]
    log_level: Option<String>,

    /// Argon2 memory cost in KiB
    #[arg(long, value_name = "KIB", hide = true)]
    hash_memory_kib: Option<u32>,

    /// Argon2 iteration count
    #[arg(long, value_name = "N", hide = true)]
    hash_iterations: Option<u32>,
}

impl Cli {
    /// Merge file settings (or defaults) with command line overrides
    fn settings(&self) -> Result<Settings> {
        let mut settings = Settings::load_or_default(self.config.as_deref())?;

        if let Some(balance) = self.initial_balance {
            settings.initial_balance = balance;
        }
        if let Some(max_attempts) = self.max_attempts {
            settings.max_attempts = max_attempts;
        }
        if let Some(memory) = self.hash_memory_kib {
            settings.hashing.memory_cost = memory;
        }
        if let Some(iterations) = self.hash_iterations {
            settings.hashing.time_cost = iterations;
        }
        for user in &self.users {
            settings.extra_users.push(UserEntry::parse(user)?);
        }

        settings.validate()?;
        Ok(settings)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_level.as_deref());

    let settings = cli.settings()?;
    let store = settings
        .credential_store()
        .context("Failed to set up credentials")?;
    let ledger = settings.ledger();
    let balance = AccountBalance::new(settings.initial_balance, &ledger);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(&store, balance, stdin.lock(), stdout.lock())
        .with_currency_symbol(settings.currency_symbol.as_str());

    let outcome = session.run()?;
    tracing::info!(?outcome, "session finished");

    Ok(())
}
