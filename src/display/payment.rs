//! Payment and favorite display formatting

use crate::ledger::Progress;
use crate::models::{Favorite, Money, Payment, PaymentStatus};

/// Format a single payment as a register row
pub fn format_payment_row(payment: &Payment) -> String {
    let status_icon = match payment.status {
        PaymentStatus::InProgress => " ",
        PaymentStatus::Failed => "x",
    };

    format!(
        "{} {:36}  acc {:>4}  {:>10}  {}",
        status_icon, payment.id, payment.account_id, payment.amount, payment.category
    )
}

/// Format a list of payments as a register
pub fn format_payment_list(payments: &[Payment]) -> String {
    if payments.is_empty() {
        return "No payments found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:1} {:36}  {:>8}  {:>10}  {}\n",
        "", "ID", "Account", "Amount", "Category"
    ));
    output.push_str(&"-".repeat(72));
    output.push('\n');

    for payment in payments {
        output.push_str(&format_payment_row(payment));
        output.push('\n');
    }

    output
}

/// Format a single payment's details
pub fn format_payment_details(payment: &Payment) -> String {
    let mut output = String::new();
    output.push_str(&format!("Payment {}\n", payment.id));
    output.push_str(&format!("  Account:  {}\n", payment.account_id));
    output.push_str(&format!("  Amount:   {}\n", payment.amount));
    output.push_str(&format!("  Category: {}\n", payment.category));
    output.push_str(&format!("  Status:   {}\n", payment.status));
    output
}

pub fn format_favorite_list(favorites: &[Favorite]) -> String {
    if favorites.is_empty() {
        return "No favorites found.\n".to_string();
    }

    let mut output = String::new();
    for favorite in favorites {
        output.push_str(&format!(
            "{}  acc {:>4}  {:<16} {:>10}  {}\n",
            favorite.id, favorite.account_id, favorite.name, favorite.amount, favorite.category
        ));
    }
    output
}

/// Format per-chunk sums followed by the total
pub fn format_progress(parts: &[Progress]) -> String {
    let mut output = String::new();
    for part in parts {
        output.push_str(&format!("part {:>3}  sum {:>12}\n", part.part, part.result));
    }
    let total: Money = parts.iter().map(|p| p.result).sum();
    output.push_str(&format!("total     sum {:>12}\n", total));
    output
}
