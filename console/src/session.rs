//! The read-convert-print loop.

use std::str::FromStr;

use fxlookup_common::{Currency, Money};
use fxlookup_fx::{Conversion, FxError, SharedConverter};
use rust_decimal::Decimal;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};
use tracing::{debug, warn};

/// Printed after every entry, successful or not.
pub const SEPARATOR: &str = "----------------------------------------------";

const BASE_PROMPT: &str = "Enter Base Currency: ";
const TARGET_PROMPT: &str = "Enter Target Currency: ";
const AMOUNT_PROMPT: &str = "Enter Amount: ";

/// How conversions are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `"{amount} {base}= {result} {target}"`
    #[default]
    Text,
    /// One serialized [`Conversion`] per line.
    Json,
}

/// Why a single entry produced no conversion.
#[derive(Debug, Error)]
pub enum EntryError {
    #[error("Invalid amount '{input}': {source}")]
    InvalidAmount {
        input: String,
        source: rust_decimal::Error,
    },

    #[error(transparent)]
    Conversion(#[from] FxError),
}

/// Counts for a finished session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub converted: u64,
    pub failed: u64,
}

/// Prompt for entries until `input` ends.
///
/// A bad amount or an unknown pair is reported and the loop carries on.
/// Currency lines are used as typed, minus the line terminator. The rate
/// table is loaded when the first well-formed entry reaches the converter.
pub async fn run_session<R, W>(
    converter: &SharedConverter,
    input: R,
    mut output: W,
    format: OutputFormat,
) -> anyhow::Result<SessionSummary>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    let mut summary = SessionSummary::default();

    loop {
        let Some(base) = prompt(&mut lines, &mut output, BASE_PROMPT).await? else {
            break;
        };
        let Some(target) = prompt(&mut lines, &mut output, TARGET_PROMPT).await? else {
            break;
        };
        let Some(amount) = prompt(&mut lines, &mut output, AMOUNT_PROMPT).await? else {
            break;
        };

        match convert_entry(converter, base, target, &amount).await {
            Ok(conversion) => {
                let rendered = match format {
                    OutputFormat::Text => conversion.to_string(),
                    OutputFormat::Json => serde_json::to_string(&conversion)?,
                };
                write_line(&mut output, &rendered).await?;
                summary.converted += 1;
            }
            Err(e) => {
                warn!(error = %e, "Entry rejected");
                write_line(&mut output, &format!("Error: {e}")).await?;
                summary.failed += 1;
            }
        }

        write_line(&mut output, SEPARATOR).await?;
    }

    output.flush().await?;
    debug!(
        converted = summary.converted,
        failed = summary.failed,
        "Input exhausted"
    );

    Ok(summary)
}

async fn convert_entry(
    converter: &SharedConverter,
    base: String,
    target: String,
    amount: &str,
) -> Result<Conversion, EntryError> {
    let value = Decimal::from_str(amount.trim()).map_err(|source| EntryError::InvalidAmount {
        input: amount.to_string(),
        source,
    })?;

    let money = Money::new(value, Currency::new(base));
    let conversion = converter
        .get()
        .await
        .convert_money(&money, &Currency::new(target))?;

    Ok(conversion)
}

async fn prompt<R, W>(
    lines: &mut Lines<R>,
    output: &mut W,
    text: &str,
) -> std::io::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    output.write_all(text.as_bytes()).await?;
    output.flush().await?;
    lines.next_line().await
}

async fn write_line<W: AsyncWrite + Unpin>(output: &mut W, line: &str) -> std::io::Result<()> {
    output.write_all(line.as_bytes()).await?;
    output.write_all(b"\n").await
}
