use crate::export::ExportFormat;
use crate::input::InputFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for tablecheck
/// CLI tool to validate time-range consistency in timesheet tables
#[derive(Parser)]
#[command(
    name = "tablecheck",
    version = env!("CARGO_PKG_VERSION"),
    about = "Validate time-range consistency in timesheet tables (HTML or CSV)",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or custom setups)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    /// Run in test mode (no config file writes)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration directory and default config file
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "check",
            help = "Check configuration file for missing or inconsistent fields"
        )]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// List configured table modes in detection priority order
    Modes,

    /// Check a table file for time-range consistency
    Check {
        /// Input file (HTML document or CSV)
        file: String,

        /// Tolerance in minutes (overrides the configured value)
        #[arg(long, short = 't')]
        threshold: Option<u32>,

        /// Force a specific mode instead of table-id detection
        /// (required for CSV input)
        #[arg(long, short = 'm')]
        mode: Option<String>,

        #[arg(
            long = "input-format",
            value_enum,
            help = "Input format (inferred from the file extension by default)"
        )]
        input_format: Option<InputFormat>,

        /// Render the table with offending rows and cells highlighted
        #[arg(long = "show-table")]
        show_table: bool,

        /// Write the report to a file
        #[arg(long, value_name = "FILE")]
        export: Option<String>,

        #[arg(long = "export-format", value_enum, default_value = "json")]
        export_format: ExportFormat,
    },
}
