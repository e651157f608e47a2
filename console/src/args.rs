//! Command-line arguments.

use std::time::Duration;

use clap::Parser;
use fxlookup_fx::ConverterConfig;

use crate::session::OutputFormat;

/// FxLookup console
#[derive(Parser, Debug)]
#[command(name = "fxlookup")]
#[command(about = "Convert amounts between currencies using a fixed rate table")]
pub struct Args {
    /// Simulated rate load time in milliseconds (overrides FX_LOAD_DELAY_MS)
    #[arg(long)]
    pub load_delay_ms: Option<u64>,

    /// Print the available currency pairs and exit
    #[arg(long)]
    pub list: bool,

    /// Print each conversion as a JSON line
    #[arg(long)]
    pub json: bool,
}

impl Args {
    /// Converter configuration: environment first, then flags.
    pub fn converter_config(&self) -> ConverterConfig {
        let config = ConverterConfig::from_env();
        match self.load_delay_ms {
            Some(ms) => config.with_load_delay(Duration::from_millis(ms)),
            None => config,
        }
    }

    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}
