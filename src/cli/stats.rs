use super::ui;
use crate::core::summary::{self, ChartSeries, PeriodSummary, Transaction};
use anyhow::Result;
use chrono::{Datelike, Utc};
use comfy_table::Cell;

/// Renders per-category statistics for a reporting period. Defaults to the
/// current year when none is given.
pub fn run(transactions: &[Transaction], year: Option<i32>, month: Option<u32>) -> Result<()> {
    let year = year.unwrap_or_else(|| Utc::now().year());
    let period = summary::summarize_period(transactions, year, month);
    let series = summary::chart_series(&period.categories_summary);

    println!("{}", render_stats(&period, &series));
    Ok(())
}

fn render_stats(period: &PeriodSummary, series: &ChartSeries) -> String {
    let period_label = match period.month {
        Some(month) => format!("{:02}/{}", month, period.year),
        None => period.year.to_string(),
    };

    let mut output = format!(
        "{}\n\n",
        ui::style_text(&format!("Statistics for {period_label}"), ui::StyleType::Title)
    );

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell(""),
        ui::header_cell("Category"),
        ui::header_cell("Amount"),
    ]);

    if series.is_placeholder() {
        table.add_row(vec![
            Cell::new(""),
            Cell::new(ui::style_text(
                "No expense data available",
                ui::StyleType::Subtle,
            )),
            Cell::new(""),
        ]);
    } else {
        for ((label, value), color) in series
            .labels
            .iter()
            .zip(&series.values)
            .zip(&series.colors)
        {
            table.add_row(vec![
                ui::swatch_cell(color),
                Cell::new(label),
                ui::amount_cell(*value),
            ]);
        }
    }

    output.push_str(&table.to_string());
    output.push_str(&format!(
        "\n\n{} {}\n{} {}",
        ui::style_text("Expenses:", ui::StyleType::TotalLabel),
        ui::style_text(
            &format!("{:.2}", period.expense_summary),
            ui::StyleType::ExpenseValue
        ),
        ui::style_text("Income:  ", ui::StyleType::TotalLabel),
        ui::style_text(
            &format!("{:.2}", period.income_summary),
            ui::StyleType::IncomeValue
        ),
    ));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::summary::TransactionType;

    fn ledger() -> Vec<Transaction> {
        vec![
            Transaction {
                kind: TransactionType::Income,
                amount: 1000.0,
                category: Some("Income".to_string()),
                date: "2026-08-01".parse().unwrap(),
                comment: None,
            },
            Transaction {
                kind: TransactionType::Expense,
                amount: -250.0,
                category: Some("Products".to_string()),
                date: "2026-08-03".parse().unwrap(),
                comment: None,
            },
        ]
    }

    #[test]
    fn test_stats_render_lists_expense_categories_only() {
        let period = summary::summarize_period(&ledger(), 2026, Some(8));
        let series = summary::chart_series(&period.categories_summary);
        let rendered = render_stats(&period, &series);

        assert!(rendered.contains("Products"));
        assert!(rendered.contains("250.00"));
        assert!(rendered.contains("Statistics for 08/2026"));
    }

    #[test]
    fn test_stats_render_shows_placeholder_for_empty_period() {
        let period = summary::summarize_period(&ledger(), 2024, None);
        let series = summary::chart_series(&period.categories_summary);
        let rendered = render_stats(&period, &series);

        assert!(rendered.contains("No expense data available"));
    }
}
