//! Account CLI commands

use clap::Subcommand;

use super::Session;
use crate::display::{format_account_details, format_account_list};
use crate::error::WalletResult;
use crate::models::{AccountId, Money};

/// Account subcommands
#[derive(Subcommand)]
pub enum AccountCommands {
    /// Register a new account for a phone number
    Register {
        /// Phone number (must be unused)
        phone: String,
    },
    /// Add funds to an account
    Deposit {
        /// Account ID
        account: AccountId,
        /// Amount in whole units
        amount: Money,
    },
    /// List all accounts
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show an account with its payments and favorites
    Show {
        /// Account ID
        account: AccountId,
    },
}

/// Handle an account command
pub fn handle_account_command(session: &mut Session, cmd: AccountCommands) -> WalletResult<()> {
    match cmd {
        AccountCommands::Register { phone } => {
            let account = session.ledger.register_account(&phone)?;
            session.mark_dirty();

            println!("Registered account: {}", account.phone);
            println!("  ID: {}", account.id);
        }

        AccountCommands::Deposit { account, amount } => {
            session.ledger.deposit(account, amount)?;
            session.mark_dirty();

            let updated = session.ledger.find_account_by_id(account)?;
            println!("Deposited {} to account {}", amount, account);
            println!("  Balance: {}", updated.balance);
        }

        AccountCommands::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(session.ledger.accounts())?);
            } else {
                print!("{}", format_account_list(session.ledger.accounts()));
            }
        }

        AccountCommands::Show { account } => {
            let found = session.ledger.find_account_by_id(account)?;
            print!("{}", format_account_details(&session.ledger, found));
        }
    }

    Ok(())
}
