//! Spreadsheet export.
//!
//! Writes a result set as CSV, one row per agent, in result order. Amounts
//! are formatted through [`DisplayRow`], the same rows the page renders.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::config::CalculatorConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::ResultSet;

use super::format::format_percent;
use super::summary::DisplayRow;

/// Suggested file name for downloads.
pub const EXPORT_FILE_NAME: &str = "agent_beans.csv";

/// Options controlling the exported columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportOptions {
    /// Whether to append the `Diamond Breakdown` column.
    pub include_breakdown: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            include_breakdown: true,
        }
    }
}

/// Returns the header row for the given configuration and options.
///
/// Currency names come from the configured labels and the commission column
/// from the configured rate.
pub fn export_headers(config: &CalculatorConfig, options: &ExportOptions) -> Vec<String> {
    let currency = &config.metadata().currency;
    let mut headers = vec![
        "Agent".to_string(),
        format!("{} Earned", currency.base),
        "Salary (USD)".to_string(),
        format!("Salary in {}", currency.base),
        format!("{} Commission", format_percent(config.rates().commission_rate)),
        format!("Total {}", currency.base),
        currency.converted.clone(),
    ];
    if options.include_breakdown {
        headers.push(format!("{} Breakdown", currency.converted_unit));
    }
    headers
}

/// Writes the result set as CSV to `writer`.
///
/// # Examples
///
/// ```
/// use bean_calculator::calculation::calculate_batch;
/// use bean_calculator::config::CalculatorConfig;
/// use bean_calculator::models::AgentInput;
/// use bean_calculator::report::{export_csv, ExportOptions};
/// use rust_decimal::Decimal;
///
/// let config = CalculatorConfig::reference();
/// let result = calculate_batch(&[AgentInput::new("Ava", Decimal::from(12000))], &config)?;
///
/// let mut out = Vec::new();
/// export_csv(&result, &config, &ExportOptions::default(), &mut out)?;
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.contains("Ava,12000,23,4830,600,5430,1488,5 x 275 + 3 x 29 + 13 x 2"));
/// # Ok::<(), bean_calculator::error::EngineError>(())
/// ```
pub fn export_csv<W: Write>(
    result: &ResultSet,
    config: &CalculatorConfig,
    options: &ExportOptions,
    writer: W,
) -> EngineResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(export_headers(config, options))?;

    for record in &result.records {
        let row = DisplayRow::from_record(record);
        csv_writer.write_record(row.cells(options.include_breakdown))?;
    }

    csv_writer.flush().map_err(|e| EngineError::ExportError {
        message: e.to_string(),
    })
}

/// Writes the result set as CSV into a new buffer.
pub fn export_csv_bytes(
    result: &ResultSet,
    config: &CalculatorConfig,
    options: &ExportOptions,
) -> EngineResult<Vec<u8>> {
    let mut buffer = Vec::new();
    export_csv(result, config, options, &mut buffer)?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::calculate_batch;
    use crate::config::{CalculatorMetadata, CommissionRates, CurrencyLabels};
    use crate::models::AgentInput;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn sample_result() -> ResultSet {
        let inputs = vec![
            AgentInput::new("Ben, Jr.", Decimal::from_str("1234.5").unwrap()),
            AgentInput::new("Ava", Decimal::from(12000)),
        ];
        calculate_batch(&inputs, &CalculatorConfig::reference()).unwrap()
    }

    fn export_lines(options: ExportOptions) -> Vec<String> {
        let bytes =
            export_csv_bytes(&sample_result(), &CalculatorConfig::reference(), &options).unwrap();
        String::from_utf8(bytes)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_header_with_breakdown() {
        let lines = export_lines(ExportOptions::default());
        assert_eq!(
            lines[0],
            "Agent,Beans Earned,Salary (USD),Salary in Beans,5% Commission,Total Beans,Diamonds,Diamond Breakdown"
        );
    }

    #[test]
    fn test_header_without_breakdown() {
        let lines = export_lines(ExportOptions {
            include_breakdown: false,
        });
        assert_eq!(
            lines[0],
            "Agent,Beans Earned,Salary (USD),Salary in Beans,5% Commission,Total Beans,Diamonds"
        );
        assert_eq!(lines[1], "Ava,12000,23,4830,600,5430,1488");
    }

    #[test]
    fn test_rows_follow_result_order_and_format_amounts() {
        let lines = export_lines(ExportOptions::default());

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "Ava,12000,23,4830,600,5430,1488,5 x 275 + 3 x 29 + 13 x 2");
        assert_eq!(lines[2], "\"Ben, Jr.\",1234.5,0,0,61.73,61.73,14,7 x 2");
    }

    /// Reference tables with the given rates and currency labels.
    fn config_with(rates: CommissionRates, currency: CurrencyLabels) -> CalculatorConfig {
        let reference = CalculatorConfig::reference();
        CalculatorConfig::new(
            CalculatorMetadata {
                currency,
                ..reference.metadata().clone()
            },
            rates,
            reference.tiers().clone(),
            reference.packs().clone(),
        )
    }

    #[test]
    fn test_commission_header_follows_rate() {
        let rates = CommissionRates {
            beans_per_usd: Decimal::from(210),
            commission_rate: Decimal::from_str("0.075").unwrap(),
        };
        let config = config_with(rates, CurrencyLabels::default());
        let headers = export_headers(&config, &ExportOptions::default());
        assert_eq!(headers[4], "7.5% Commission");
    }

    #[test]
    fn test_headers_follow_currency_labels() {
        let currency = CurrencyLabels {
            base: "Coins".to_string(),
            converted: "Gems".to_string(),
            converted_unit: "Gem".to_string(),
        };
        let config = config_with(CommissionRates::default(), currency);
        let headers = export_headers(&config, &ExportOptions::default());

        assert_eq!(
            headers,
            vec![
                "Agent",
                "Coins Earned",
                "Salary (USD)",
                "Salary in Coins",
                "5% Commission",
                "Total Coins",
                "Gems",
                "Gem Breakdown",
            ]
        );
    }

    #[test]
    fn test_midpoint_amounts_round_away_from_zero() {
        let inputs = vec![AgentInput::new("Ava", Decimal::from_str("20.1").unwrap())];
        let result = calculate_batch(&inputs, &CalculatorConfig::reference()).unwrap();
        let bytes =
            export_csv_bytes(&result, &CalculatorConfig::reference(), &ExportOptions::default())
                .unwrap();
        let text = String::from_utf8(bytes).unwrap();

        assert_eq!(text.lines().nth(1), Some("Ava,20.1,0,0,1.01,1.01,0,-"));
    }
}
