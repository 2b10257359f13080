use clap::{Parser, ValueEnum};

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::{Commands, LoginArgs, SignupArgs};

/// Top-level CLI parser for the `saarthi` binary.
#[derive(Debug, Parser)]
#[command(
    name = "saarthi",
    version,
    about = "AarogyaSaarthi - role-based healthcare portal (mock auth)"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw (defaults to general.default_format)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Resolve global flags, falling back to configuration for the format.
    pub fn global_flags(&self, config: &saarthi_config::SaarthiConfig) -> anyhow::Result<GlobalFlags> {
        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_str(&config.general.default_format, true)
                .map_err(|error| anyhow::anyhow!("general.default_format: {error}"))?,
        };

        Ok(GlobalFlags { format })
    }
}
