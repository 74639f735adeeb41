use super::ui;
use crate::core::RateService;
use crate::core::currency::{CurrencyRate, currency_symbol};
use anyhow::Result;
use comfy_table::Cell;
use tracing::error;

/// Renders the current exchange-rate table. A failed fetch degrades to a
/// "rates unavailable" message instead of aborting the app.
pub async fn run(service: &RateService, refresh: bool) -> Result<()> {
    let result = if refresh {
        service.refresh().await
    } else {
        service.get_rates().await
    };

    let rates = match result {
        Ok(rates) => rates,
        Err(e) => {
            error!(error = %e, "Failed to load currency rates");
            println!(
                "{}",
                ui::style_text(
                    "Currency rates are unavailable. Please try again later.",
                    ui::StyleType::Error
                )
            );
            return Ok(());
        }
    };

    println!("{}", render_rates_table(&rates));
    Ok(())
}

fn render_rates_table(rates: &[CurrencyRate]) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Currency"),
        ui::header_cell("Purchase"),
        ui::header_cell("Sale"),
    ]);

    for rate in rates {
        let name = currency_symbol(rate.currency_code_a).unwrap_or("Unknown");
        table.add_row(vec![
            Cell::new(name),
            ui::amount_cell(rate.rate_buy),
            ui::amount_cell(rate.rate_sell),
        ]);
    }

    let mut output = format!(
        "{}\n\n",
        ui::style_text("Exchange Rates (UAH)", ui::StyleType::Title)
    );
    output.push_str(&table.to_string());
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rates_table_lists_supported_symbols() {
        let rates = vec![
            CurrencyRate {
                currency_code_a: 840,
                currency_code_b: 980,
                rate_buy: 36.5,
                rate_sell: 37.0,
            },
            CurrencyRate {
                currency_code_a: 978,
                currency_code_b: 980,
                rate_buy: 39.0,
                rate_sell: 39.8,
            },
        ];

        let rendered = render_rates_table(&rates);
        assert!(rendered.contains("USD"));
        assert!(rendered.contains("EUR"));
        assert!(rendered.contains("36.50"));
        assert!(rendered.contains("39.80"));
    }
}
