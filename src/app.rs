use crate::cli::OutputFormat;
use crate::config::Config;
use crate::error::Result;

pub struct AppContext {
    pub config: Config,
    pub output_format: OutputFormat,
}

impl AppContext {
    pub fn from_cli(cli: &crate::cli::Cli) -> Result<Self> {
        let config = Config::load(cli.config.as_deref())?;
        // Command-line format beats the configured one.
        let output_format = match cli.output_format() {
            Some(format) => format,
            None => config.output.format.parse::<OutputFormat>()?,
        };

        Ok(Self {
            config,
            output_format,
        })
    }
}
