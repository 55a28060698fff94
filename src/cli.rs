//! CLI argument parsing for cexplain

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for explanations and findings
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "cexplain")]
#[command(version)]
#[command(about = "Explains GCC diagnostics for novice C programmers", long_about = None)]
pub struct Cli {
    /// Output format (text or json)
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Enable debug logging to stderr
    #[arg(long)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compile a source file on the remote toolchain and explain every diagnostic
    Exec {
        /// C source file to submit
        file: PathBuf,

        /// Text to feed to the compiled program's stdin
        #[arg(long, value_name = "TEXT")]
        stdin: Option<String>,
    },

    /// Explain raw compiler output read from a file (or stdin when omitted)
    Resolve {
        /// File holding raw compiler output
        file: Option<PathBuf>,
    },

    /// Scan a source file for common beginner mistakes without compiling
    Check {
        /// C source file to scan
        file: PathBuf,
    },
}
