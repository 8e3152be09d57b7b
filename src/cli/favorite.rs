//! Favorite CLI commands

use clap::Subcommand;

use super::Session;
use crate::display::format_favorite_list;
use crate::error::WalletResult;
use crate::models::{FavoriteId, PaymentId};

/// Favorite subcommands
#[derive(Subcommand)]
pub enum FavoriteCommands {
    /// Save a payment as a named favorite
    Add {
        /// Payment ID
        payment: PaymentId,
        /// Favorite name
        name: String,
    },
    /// Pay again using a favorite
    Pay {
        /// Favorite ID
        favorite: FavoriteId,
    },
    /// List favorites
    List,
}

/// Handle a favorite command
pub fn handle_favorite_command(session: &mut Session, cmd: FavoriteCommands) -> WalletResult<()> {
    match cmd {
        FavoriteCommands::Add { payment, name } => {
            let favorite = session.ledger.favorite_payment(&payment, &name)?;
            session.mark_dirty();

            println!("Created favorite: {}", favorite.name);
            println!("  ID: {}", favorite.id);
        }

        FavoriteCommands::Pay { favorite } => {
            let payment = session.ledger.pay_from_favorite(&favorite)?;
            session.mark_dirty();

            println!("Created payment: {}", payment.id);
            println!("  Amount:  {}", payment.amount);
        }

        FavoriteCommands::List => {
            print!("{}", format_favorite_list(session.ledger.favorites()));
        }
    }

    Ok(())
}
