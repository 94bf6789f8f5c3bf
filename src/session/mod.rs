//! Interactive ATM session
//!
//! Drives the login loop and, once authenticated, the service menu. The
//! session only talks to the core services through their public API:
//!
//! 1. Prompt for account and password until
//!    [`CredentialStore::authenticate`] succeeds or
//!    [`CredentialStore::has_attempts_left`] turns false.
//! 2. Loop over the menu until the user picks Exit.
//!
//! Reader and writer are generic so tests can script a whole session.

pub mod input;
pub mod menu;

use std::io::{BufRead, Write};

use zeroize::Zeroizing;

use crate::display::EMPTY_HISTORY;
use crate::error::AtmResult;
use crate::models::Money;
use crate::services::{AccountBalance, CredentialStore, PasswordPolicy};

pub use input::TokenReader;
pub use menu::MenuChoice;

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The user chose Exit from the menu
    Exited,
    /// Login attempts ran out
    LockedOut,
    /// Input ended before the session finished
    InputClosed,
}

/// Whether the menu loop keeps going after an action
enum Step {
    Continue,
    Exit,
    Closed,
}

/// One login-then-menu run over a reader and a writer
pub struct Session<'a, R, W> {
    store: &'a CredentialStore,
    balance: AccountBalance<'a>,
    policy: PasswordPolicy<'a>,
    input: TokenReader<R>,
    output: W,
    currency_symbol: String,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    /// Create a session over shared services
    ///
    /// History is read from the ledger `balance` records into, so the two
    /// can never disagree.
    pub fn new(store: &'a CredentialStore, balance: AccountBalance<'a>, input: R, output: W) -> Self {
        Self {
            store,
            balance,
            policy: PasswordPolicy::new(store),
            input: TokenReader::new(input),
            output,
            currency_symbol: "$".to_string(),
        }
    }

    /// Use `symbol` when printing the balance
    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    /// Current balance of the session
    pub fn balance(&self) -> Money {
        self.balance.balance()
    }

    /// Run the session to completion
    pub fn run(&mut self) -> AtmResult<SessionOutcome> {
        tracing::info!(
            attempts = self.store.attempts_left(),
            balance = %self.balance.balance(),
            "session started"
        );

        while self.store.has_attempts_left() {
            let Some(account) = self.prompt("Enter account number: ")? else {
                return Ok(SessionOutcome::InputClosed);
            };
            let Some(password) = self.prompt("Enter password: ")?.map(Zeroizing::new) else {
                return Ok(SessionOutcome::InputClosed);
            };

            if self.store.authenticate(&account, &password) {
                writeln!(self.output, "Authentication successful!\n")?;
                return self.run_menu(&account);
            }

            writeln!(
                self.output,
                "Authentication failed. Attempts remaining: {}",
                self.store.attempts_left()
            )?;
        }

        writeln!(self.output, "Too many failed attempts. Exiting system.")?;
        tracing::warn!("login attempts exhausted, session locked out");
        Ok(SessionOutcome::LockedOut)
    }

    fn run_menu(&mut self, account: &str) -> AtmResult<SessionOutcome> {
        loop {
            write!(self.output, "{}", MenuChoice::render())?;
            let Some(token) = self.prompt("Enter your option: ")? else {
                return Ok(SessionOutcome::InputClosed);
            };

            let step = match MenuChoice::parse(&token) {
                Some(choice) => self.process(choice, account)?,
                None => {
                    writeln!(self.output, "Invalid option. Try again.")?;
                    Step::Continue
                }
            };

            match step {
                Step::Continue => {}
                Step::Exit => return Ok(SessionOutcome::Exited),
                Step::Closed => return Ok(SessionOutcome::InputClosed),
            }
        }
    }

    fn process(&mut self, choice: MenuChoice, account: &str) -> AtmResult<Step> {
        tracing::debug!(%choice, "menu option selected");

        match choice {
            MenuChoice::Deposit => self.handle_deposit(),
            MenuChoice::Withdraw => self.handle_withdraw(),
            MenuChoice::PrintBalance => {
                writeln!(
                    self.output,
                    "Current Balance: {}",
                    self.balance.balance().format_with_symbol(&self.currency_symbol)
                )?;
                Ok(Step::Continue)
            }
            MenuChoice::PrintHistory => {
                let history = match self.balance.ledger() {
                    Some(ledger) => ledger.formatted(),
                    None => EMPTY_HISTORY.to_string(),
                };
                writeln!(self.output, "{}", history)?;
                Ok(Step::Continue)
            }
            MenuChoice::ChangePassword => self.handle_password_change(account),
            MenuChoice::Exit => {
                writeln!(self.output, "Thank you for using ATM Machine.")?;
                Ok(Step::Exit)
            }
        }
    }

    fn handle_deposit(&mut self) -> AtmResult<Step> {
        let Some(token) = self.prompt("Enter deposit amount: ")? else {
            return Ok(Step::Closed);
        };

        let deposited = Money::parse(&token)
            .map(|amount| self.balance.deposit(amount))
            .unwrap_or(false);

        if deposited {
            writeln!(self.output, "Deposit successful!")?;
        } else {
            writeln!(self.output, "Invalid deposit amount.")?;
        }
        Ok(Step::Continue)
    }

    fn handle_withdraw(&mut self) -> AtmResult<Step> {
        let Some(token) = self.prompt("Enter withdrawal amount: ")? else {
            return Ok(Step::Closed);
        };

        let withdrawn = Money::parse(&token)
            .map(|amount| self.balance.withdraw(amount))
            .unwrap_or(false);

        if withdrawn {
            writeln!(self.output, "Withdrawal successful!")?;
        } else {
            writeln!(self.output, "Invalid withdrawal amount or insufficient funds.")?;
        }
        Ok(Step::Continue)
    }

    fn handle_password_change(&mut self, account: &str) -> AtmResult<Step> {
        let Some(old_password) = self.prompt("Enter current password: ")?.map(Zeroizing::new) else {
            return Ok(Step::Closed);
        };
        let Some(new_password) = self.prompt("Enter new password: ")?.map(Zeroizing::new) else {
            return Ok(Step::Closed);
        };

        if self.policy.change_password(account, &old_password, &new_password) {
            writeln!(self.output, "Password changed successfully!")?;
        } else {
            writeln!(self.output, "Password change failed.")?;
        }
        Ok(Step::Continue)
    }

    /// Print `message` without a newline and read the next token
    fn prompt(&mut self, message: &str) -> AtmResult<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;
        self.input.next_token()
    }
}
