use super::ui;
use crate::core::summary::{self, Transaction};
use anyhow::Result;

/// Renders the overall ledger balance.
pub fn run(transactions: &[Transaction]) -> Result<()> {
    let totals = summary::summarize(transactions);

    println!(
        "{}: {}",
        ui::style_text("Your balance", ui::StyleType::Title),
        ui::style_text(&format!("{:.2} UAH", totals.balance), balance_style(totals.balance)),
    );
    println!(
        "  {} {}",
        ui::style_text("Income: ", ui::StyleType::TotalLabel),
        ui::style_text(&format!("{:.2}", totals.income), ui::StyleType::IncomeValue),
    );
    println!(
        "  {} {}",
        ui::style_text("Expenses:", ui::StyleType::TotalLabel),
        ui::style_text(&format!("-{:.2}", totals.expense), ui::StyleType::ExpenseValue),
    );
    Ok(())
}

fn balance_style(balance: f64) -> ui::StyleType {
    if balance < 0.0 {
        ui::StyleType::ExpenseValue
    } else {
        ui::StyleType::IncomeValue
    }
}
