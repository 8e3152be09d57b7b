//! Payment CLI commands

use clap::Subcommand;

use super::Session;
use crate::display::{format_payment_details, format_payment_list};
use crate::error::WalletResult;
use crate::models::{AccountId, Money, PaymentId};

/// Payment subcommands
#[derive(Subcommand)]
pub enum PaymentCommands {
    /// Pay from an account
    Pay {
        /// Account ID
        account: AccountId,
        /// Amount in whole units
        amount: Money,
        /// Category tag (e.g. "internet")
        category: String,
    },
    /// Reject a payment and refund its amount
    Reject {
        /// Payment ID
        payment: PaymentId,
    },
    /// Show a copy of a payment under a new ID (nothing is charged)
    Repeat {
        /// Payment ID
        payment: PaymentId,
    },
    /// List payments
    List {
        /// Only payments of this account
        #[arg(short, long)]
        account: Option<AccountId>,
        /// Only payments with this category
        #[arg(short, long)]
        category: Option<String>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show payment details
    Show {
        /// Payment ID
        payment: PaymentId,
    },
}

/// Handle a payment command
pub fn handle_payment_command(session: &mut Session, cmd: PaymentCommands) -> WalletResult<()> {
    match cmd {
        PaymentCommands::Pay {
            account,
            amount,
            category,
        } => {
            let payment = session.ledger.pay(account, amount, &category)?;
            session.mark_dirty();

            println!("Created payment: {}", payment.id);
            println!("  Amount:  {}", payment.amount);
            println!("  Balance: {}", session.ledger.find_account_by_id(account)?.balance);
        }

        PaymentCommands::Reject { payment } => {
            session.ledger.reject(&payment)?;
            session.mark_dirty();

            let rejected = session.ledger.find_payment_by_id(&payment)?;
            let account = session.ledger.find_account_by_id(rejected.account_id)?;
            println!("Rejected payment: {}", rejected.id);
            println!("  Refunded: {}", rejected.amount);
            println!("  Balance:  {}", account.balance);
        }

        PaymentCommands::Repeat { payment } => {
            let copy = session.ledger.repeat(&payment)?;
            print!("{}", format_payment_details(&copy));
        }

        PaymentCommands::List {
            account,
            category,
            json,
        } => {
            let workers = session.settings.aggregate_workers;
            let payments = match account {
                Some(id) => session.ledger.filter_payments(id, workers)?,
                None => session.ledger.payments().to_vec(),
            };
            let payments: Vec<_> = match category {
                Some(category) => payments.into_iter().filter(|p| p.category == category).collect(),
                None => payments,
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&payments)?);
            } else {
                print!("{}", format_payment_list(&payments));
            }
        }

        PaymentCommands::Show { payment } => {
            let found = session.ledger.find_payment_by_id(&payment)?;
            print!("{}", format_payment_details(found));
        }
    }

    Ok(())
}
