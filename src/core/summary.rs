//! Ledger aggregation: overall balance totals, per-period category summaries,
//! and chart-ready series for the statistics views.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Category name the ledger uses for earnings. Excluded from expense charts.
pub const INCOME_CATEGORY: &str = "Income";

/// Bucket for transactions that carry no category.
const UNCATEGORIZED: &str = "Other";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionType {
    #[serde(rename = "INCOME")]
    Income,
    #[serde(rename = "EXPENSE")]
    Expense,
    /// Any tag the ledger format does not recognize. The reducers skip these
    /// rather than erroring out.
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "type")]
    pub kind: TransactionType,
    /// Signed amount: positive for income, negative for expenses.
    pub amount: f64,
    pub category: Option<String>,
    pub date: NaiveDate,
    pub comment: Option<String>,
}

/// Whole-ledger totals. `expense` is an absolute magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BalanceTotals {
    pub income: f64,
    pub expense: f64,
    pub balance: f64,
}

/// Signed total for one category: negative for expense categories, positive
/// for income, following the ledger's sign convention.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySummary {
    pub name: String,
    pub total: f64,
}

/// Aggregates for one reporting period. Derived on every call, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodSummary {
    pub year: i32,
    pub month: Option<u32>,
    pub period_total: f64,
    pub income_summary: f64,
    pub expense_summary: f64,
    pub categories_summary: Vec<CategorySummary>,
}

/// Parallel label/value/color sequences ready for chart rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub colors: Vec<&'static str>,
}

const PALETTE: [&str; 10] = [
    "#FED057", "#FFD8D0", "#FD9498", "#C5BAFF", "#6E78E8", "#4A56E2", "#81E1FF", "#24CCA7",
    "#00AD84", "#FF6596",
];

const PLACEHOLDER_COLOR: &str = "#E5E7EB";

impl ChartSeries {
    /// Gray single-segment series rendered when there is nothing to chart.
    pub fn placeholder() -> Self {
        Self {
            labels: vec!["No Expenses".to_string()],
            values: vec![1.0],
            colors: vec![PLACEHOLDER_COLOR],
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.colors == [PLACEHOLDER_COLOR]
    }
}

/// Picks a stable color for a category: the same name always maps to the same
/// palette entry, regardless of which other categories are present.
pub fn category_color(name: &str) -> &'static str {
    use std::hash::{DefaultHasher, Hash, Hasher};

    let mut hasher = DefaultHasher::new();
    name.hash(&mut hasher);
    PALETTE[(hasher.finish() % PALETTE.len() as u64) as usize]
}

/// Reduces the ledger to income/expense/balance totals in one pass.
///
/// The reduction is commutative, so the result does not depend on the order
/// transactions appear in the ledger.
pub fn summarize(transactions: &[Transaction]) -> BalanceTotals {
    let mut totals = BalanceTotals::default();
    for transaction in transactions {
        match transaction.kind {
            TransactionType::Income => totals.income += transaction.amount,
            TransactionType::Expense => totals.expense += transaction.amount.abs(),
            TransactionType::Unknown => {}
        }
    }
    totals.balance = totals.income - totals.expense;
    totals
}

/// Builds the per-category breakdown for one reporting period.
///
/// `income_summary` is positive, `expense_summary` negative, and category
/// totals keep the ledger's sign so expense categories stay negative.
pub fn summarize_period(
    transactions: &[Transaction],
    year: i32,
    month: Option<u32>,
) -> PeriodSummary {
    let in_period = |t: &&Transaction| {
        t.date.year() == year && month.is_none_or(|m| t.date.month() == m)
    };

    let mut income_summary = 0.0;
    let mut expense_summary = 0.0;
    let mut by_category: BTreeMap<String, f64> = BTreeMap::new();

    for transaction in transactions.iter().filter(in_period) {
        let name = match transaction.kind {
            TransactionType::Income => {
                income_summary += transaction.amount;
                INCOME_CATEGORY.to_string()
            }
            TransactionType::Expense => {
                expense_summary -= transaction.amount.abs();
                transaction
                    .category
                    .clone()
                    .unwrap_or_else(|| UNCATEGORIZED.to_string())
            }
            TransactionType::Unknown => continue,
        };
        let signed = match transaction.kind {
            TransactionType::Income => transaction.amount,
            _ => -transaction.amount.abs(),
        };
        *by_category.entry(name).or_insert(0.0) += signed;
    }

    PeriodSummary {
        year,
        month,
        period_total: income_summary + expense_summary,
        income_summary,
        expense_summary,
        categories_summary: by_category
            .into_iter()
            .map(|(name, total)| CategorySummary { name, total })
            .collect(),
    }
}

/// Turns category summaries into a chart-ready series.
///
/// The "Income" category never appears in the output; remaining totals are
/// charted by magnitude with a stable per-name color. When nothing is left to
/// chart, an explicit placeholder series is returned so callers can render a
/// "no data" state instead of an empty chart.
pub fn chart_series(categories: &[CategorySummary]) -> ChartSeries {
    let mut series = ChartSeries {
        labels: Vec::new(),
        values: Vec::new(),
        colors: Vec::new(),
    };

    for category in categories {
        if category.name == INCOME_CATEGORY {
            continue;
        }
        series.labels.push(category.name.clone());
        series.values.push(category.total.abs());
        series.colors.push(category_color(&category.name));
    }

    if series.labels.is_empty() {
        return ChartSeries::placeholder();
    }
    series
}
