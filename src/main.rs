use anyhow::{Context, Result};
use cexplain::classifier::{self, ResolvedDiagnostic, UNKNOWN_LOCATION};
use cexplain::cli::{Cli, Command, OutputFormat};
use cexplain::compile::{CompileRequest, CompileService, CompileStatus};
use cexplain::scanner::{self, MistakeFinding, LINE_DELIMITER};
use cexplain::wandbox::WandboxClient;
use clap::Parser;
use std::io::Read;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn read_raw_diagnostics(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => read_source(path),
        None => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("failed to read raw compiler output from stdin")?;
            Ok(raw)
        }
    }
}

fn location(value: i64) -> String {
    if value == UNKNOWN_LOCATION {
        "?".to_string()
    } else {
        value.to_string()
    }
}

fn print_resolved(resolved: &[ResolvedDiagnostic], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(resolved)?),
        OutputFormat::Text => {
            for diag in resolved {
                println!("{}行{}列:", location(diag.row), location(diag.column));
                println!("  説明: {}", diag.description);
                println!("  対処: {}", diag.fix);
            }
        }
    }
    Ok(())
}

fn print_findings(findings: &[MistakeFinding], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(findings)?),
        OutputFormat::Text => {
            for finding in findings {
                println!("{}行: {}", finding.row, finding.description);
            }
        }
    }
    Ok(())
}

/// Compile remotely, then route the raw output through the engine.
fn run_exec(file: &Path, stdin: Option<String>, format: OutputFormat) -> Result<()> {
    let code = read_source(file)?;
    let client = WandboxClient::new();
    let outcome = client.compile(&CompileRequest { code, stdin })?;

    match outcome.status {
        CompileStatus::Success => match format {
            OutputFormat::Json => println!("[]"),
            OutputFormat::Text => println!("コンパイルに成功しました。"),
        },
        CompileStatus::CompileError => {
            let resolved = classifier::classify(&outcome.diagnostics);
            if resolved.is_empty() {
                // Failure with no located diagnostics (e.g. a link error).
                match format {
                    OutputFormat::Json => println!("[]"),
                    OutputFormat::Text => {
                        println!("エラー位置を特定できませんでした。コンパイラの出力:");
                        println!("{}", outcome.diagnostics);
                    }
                }
            } else {
                print_resolved(&resolved, format)?;
            }
        }
    }
    Ok(())
}

fn run_resolve(file: Option<&Path>, format: OutputFormat) -> Result<()> {
    let raw = read_raw_diagnostics(file)?;
    print_resolved(&classifier::classify(&raw), format)
}

fn run_check(file: &Path, format: OutputFormat) -> Result<()> {
    // The scanner expects the transport's escaped-newline framing.
    let source = read_source(file)?.replace('\n', LINE_DELIMITER);
    print_findings(&scanner::scan_mistakes(&source), format)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    match cli.command {
        Command::Exec { file, stdin } => run_exec(&file, stdin, cli.format),
        Command::Resolve { file } => run_resolve(file.as_deref(), cli.format),
        Command::Check { file } => run_check(&file, cli.format),
    }
}
