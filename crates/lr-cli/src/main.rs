//! logredact - log messages through the redacting formatter.
//!
//! Each MESSAGE argument (or each stdin line when none are given) is emitted
//! as an INFO event. The installed formatter renders it with the chosen
//! inner format and masks passwords, API keys, email addresses and any
//! extra patterns before the line is written.

use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use lr_format::{
    init_logging, init_logging_stdout, FormatError, Formatter, LogConfig, LogFormat,
    LogLevel, RedactingFormatter,
};
use lr_redact::{PatternRule, RedactionError, RedactionPolicy};
use thiserror::Error;

/// Log messages with sensitive values masked
#[derive(Parser, Debug)]
#[command(name = "logredact")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Messages to log; stdin lines are used when omitted
    messages: Vec<String>,

    /// Inner log format (text, json)
    #[arg(long, short = 'f')]
    format: Option<LogFormat>,

    /// Minimum level to emit
    #[arg(long)]
    level: Option<LogLevel>,

    /// Replacement token for every redactor
    #[arg(long, env = "LR_REDACT_TOKEN")]
    token: Option<String>,

    /// Path to a JSON redaction policy
    #[arg(long, env = "LR_REDACT_POLICY")]
    policy: Option<PathBuf>,

    /// Disable the built-in password, api_key and email redactors
    #[arg(long)]
    no_defaults: bool,

    /// Extra whole-match redactor, repeatable
    #[arg(long = "redactor", value_name = "NAME=REGEX")]
    redactors: Vec<String>,

    /// Omit timestamps from output
    #[arg(long)]
    no_timestamp: bool,

    /// Write log lines to stdout instead of stderr
    #[arg(long)]
    stdout: bool,
}

#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Redaction(#[from] RedactionError),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("invalid --redactor '{0}': expected NAME=REGEX")]
    InvalidRedactor(String),

    #[error("failed to initialize logging: {0}")]
    Init(String),

    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

impl CliError {
    fn exit_code(&self) -> u8 {
        match self {
            CliError::Redaction(_) | CliError::Format(_) | CliError::InvalidRedactor(_) => 2,
            CliError::Init(_) | CliError::Io(_) => 1,
        }
    }
}

/// Parse a `NAME=REGEX` argument into a whole-match rule.
fn parse_redactor_arg(arg: &str) -> Result<PatternRule, CliError> {
    match arg.split_once('=') {
        Some((name, pattern)) if !name.trim().is_empty() && !pattern.is_empty() => {
            Ok(PatternRule::new(name.trim(), pattern))
        }
        _ => Err(CliError::InvalidRedactor(arg.to_string())),
    }
}

/// Assemble the redaction policy from the policy file and CLI overrides.
fn build_policy(cli: &Cli) -> Result<RedactionPolicy, CliError> {
    let mut policy = match &cli.policy {
        Some(path) => RedactionPolicy::load(path)?,
        None => RedactionPolicy::default(),
    };
    if cli.no_defaults {
        policy.builtins.clear();
    }
    for arg in &cli.redactors {
        policy.patterns.push(parse_redactor_arg(arg)?);
    }
    if let Some(token) = &cli.token {
        policy.replacement_token = token.clone();
    }
    policy.validate()?;
    Ok(policy)
}

fn build_formatter(
    cli: &Cli,
    config: &LogConfig,
) -> Result<RedactingFormatter<Box<dyn Formatter>>, CliError> {
    let policy = build_policy(cli)?;
    Ok(RedactingFormatter::from_policy(
        config.inner_formatter(),
        &policy,
    )?)
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let config = LogConfig::from_env(cli.level, cli.format).with_timestamps(!cli.no_timestamp);
    let formatter = build_formatter(cli, &config)?;

    let installed = if cli.stdout {
        init_logging_stdout(&config, formatter)
    } else {
        init_logging(&config, formatter)
    };
    installed.map_err(|e| CliError::Init(e.to_string()))?;

    if cli.messages.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line?;
            tracing::info!(target: "logredact", "{}", line);
        }
    } else {
        for message in &cli.messages {
            tracing::info!(target: "logredact", "{}", message);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("logredact: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
