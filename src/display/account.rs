//! Account display formatting
//!
//! Formats accounts for terminal output in table and detail views.

use crate::ledger::Ledger;
use crate::models::{Account, Money};

use super::payment::format_payment_row;

/// Format a list of accounts as a table
pub fn format_account_list(accounts: &[Account]) -> String {
    if accounts.is_empty() {
        return "No accounts found.\n".to_string();
    }

    let phone_width = accounts
        .iter()
        .map(|a| a.phone.len())
        .max()
        .unwrap_or(5)
        .max(5);

    let mut output = String::new();
    output.push_str(&format!(
        "{:>6}  {:<phone_width$}  {:>12}\n",
        "ID",
        "Phone",
        "Balance",
        phone_width = phone_width,
    ));
    output.push_str(&format!(
        "{:->6}  {:-<phone_width$}  {:->12}\n",
        "",
        "",
        "",
        phone_width = phone_width,
    ));

    for account in accounts {
        output.push_str(&format!(
            "{:>6}  {:<phone_width$}  {:>12}\n",
            account.id,
            account.phone,
            account.balance.to_string(),
            phone_width = phone_width,
        ));
    }

    let total: Money = accounts.iter().map(|a| a.balance).sum();
    output.push_str(&format!(
        "{:>6}  {:<phone_width$}  {:>12}\n",
        "",
        "TOTAL",
        total.to_string(),
        phone_width = phone_width,
    ));

    output
}

/// Format one account with its payments and favorites
pub fn format_account_details(ledger: &Ledger, account: &Account) -> String {
    let mut output = String::new();

    output.push_str(&format!("Account #{}\n", account.id));
    output.push_str(&format!("  Phone:   {}\n", account.phone));
    output.push_str(&format!("  Balance: {}\n", account.balance));

    output.push_str("  Payments:\n");
    let mut any = false;
    for payment in ledger.payments().iter().filter(|p| p.account_id == account.id) {
        output.push_str(&format!("    {}\n", format_payment_row(payment)));
        any = true;
    }
    if !any {
        output.push_str("    (none)\n");
    }

    output.push_str("  Favorites:\n");
    let mut any = false;
    for favorite in ledger.favorites().iter().filter(|f| f.account_id == account.id) {
        output.push_str(&format!(
            "    {}  {:<16} {:>10}  {}\n",
            favorite.id, favorite.name, favorite.amount, favorite.category
        ));
        any = true;
    }
    if !any {
        output.push_str("    (none)\n");
    }

    output
}

/// Format every account with its payments and favorites
pub fn format_wallet_tree(ledger: &Ledger) -> String {
    if ledger.is_empty() {
        return "No accounts found.\n".to_string();
    }

    ledger
        .accounts()
        .iter()
        .map(|account| format_account_details(ledger, account))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Ledger {
        let mut ledger = Ledger::new();
        let a = ledger.register_account("917590330").unwrap();
        ledger.register_account("917590331").unwrap();
        ledger.deposit(a.id, Money::new(1500)).unwrap();
        let p = ledger.pay(a.id, Money::new(250), "internet").unwrap();
        ledger.favorite_payment(&p.id, "Home net").unwrap();
        ledger
    }

    #[test]
    fn test_format_account_list() {
        let ledger = sample();
        let output = format_account_list(ledger.accounts());

        assert!(output.contains("Phone"));
        assert!(output.contains("917590330"));
        assert!(output.contains("1250"));
        assert!(output.contains("TOTAL"));
    }

    #[test]
    fn test_format_empty_list() {
        assert_eq!(format_account_list(&[]), "No accounts found.\n");
    }

    #[test]
    fn test_format_wallet_tree() {
        let ledger = sample();
        let output = format_wallet_tree(&ledger);

        assert!(output.contains("Account #1"));
        assert!(output.contains("Account #2"));
        assert!(output.contains("internet"));
        assert!(output.contains("Home net"));
        assert!(output.contains("(none)"));
    }
}
