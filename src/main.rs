use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use wallet_ledger::cli::{
    handle_account_command, handle_favorite_command, handle_history_command,
    handle_payment_command, handle_snapshot_command, handle_sum_command, Session,
};
use wallet_ledger::config::{Settings, WalletPaths};
use wallet_ledger::display::format_wallet_tree;
use wallet_ledger::models::AccountId;

#[derive(Parser)]
#[command(
    name = "wallet",
    version,
    about = "Phone-number wallet ledger with flat-file snapshots",
    long_about = "Tracks accounts identified by phone number, payments debited from them \
                  and favorite payments that can be replayed. State is kept in plain-text \
                  dump files under the data directory."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Account management commands
    #[command(subcommand, alias = "acc")]
    Account(wallet_ledger::cli::AccountCommands),

    /// Payment commands
    #[command(subcommand, alias = "pay")]
    Payment(wallet_ledger::cli::PaymentCommands),

    /// Favorite payment commands
    #[command(subcommand, alias = "fav")]
    Favorite(wallet_ledger::cli::FavoriteCommands),

    /// Snapshot export and import
    #[command(subcommand)]
    Snapshot(wallet_ledger::cli::SnapshotCommands),

    /// Export an account's payment history as chunk files
    History {
        /// Account ID
        account: AccountId,
        /// Output directory (defaults to history/ in the data directory)
        #[arg(short, long)]
        dir: Option<PathBuf>,
        /// Maximum payments per file
        #[arg(short, long)]
        chunk: Option<usize>,
    },

    /// Sum all payments, reporting progress per chunk
    Sum {
        /// Payments per chunk
        #[arg(short, long)]
        chunk: Option<usize>,
    },

    /// Show every account with its payments and favorites
    Tree,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    wallet_ledger::utils::init_tracing();
    let cli = Cli::parse();

    let paths = WalletPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let mut session = Session::open(paths, settings)?;

    match cli.command {
        Some(Commands::Account(cmd)) => handle_account_command(&mut session, cmd)?,
        Some(Commands::Payment(cmd)) => handle_payment_command(&mut session, cmd)?,
        Some(Commands::Favorite(cmd)) => handle_favorite_command(&mut session, cmd)?,
        Some(Commands::Snapshot(cmd)) => handle_snapshot_command(&mut session, cmd)?,
        Some(Commands::History {
            account,
            dir,
            chunk,
        }) => handle_history_command(&session, account, dir, chunk)?,
        Some(Commands::Sum { chunk }) => handle_sum_command(&session, chunk)?,
        Some(Commands::Tree) => print!("{}", format_wallet_tree(&session.ledger)),
        Some(Commands::Config) => {
            println!("Wallet Configuration");
            println!("====================");
            println!("Base directory:    {}", session.paths.base_dir().display());
            println!("Dump directory:    {}", session.paths.dump_dir().display());
            println!("History directory: {}", session.paths.history_dir().display());
            println!();
            println!("Settings:");
            println!("  History chunk size:  {}", session.settings.history_chunk_size);
            println!("  Progress chunk size: {}", session.settings.progress_chunk_size);
            println!("  Aggregate workers:   {}", session.settings.aggregate_workers);
        }
        None => {
            println!("wallet - phone-number wallet ledger");
            println!();
            println!("Run 'wallet --help' for usage information.");
        }
    }

    session.close()?;
    Ok(())
}
