use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use derivix::parser::DEFAULT_MAX_DEPTH;
use derivix::scanner::{format_tokens, tokenize};
use derivix::{DEFAULT_VARIABLE, Session, SessionError, SessionOptions};
use log::{info, warn};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Derivix - evaluate, simplify and differentiate infix expressions
#[derive(Parser, Debug)]
#[command(name = "derivix")]
#[command(about = "Parse infix expressions, evaluate, simplify and differentiate them")]
#[command(version)]
pub struct CliArgs {
    /// Process a single expression instead of running the dialogue
    #[arg(short, long)]
    pub expr: Option<String>,

    /// Variable to differentiate with respect to
    #[arg(short, long, default_value = DEFAULT_VARIABLE)]
    pub variable: String,

    /// Maximum nesting of parentheses and depth of the parsed expression tree
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub expr: Option<String>,
    pub options: SessionOptions,
    pub log_level: LogLevel,
}

impl From<CliArgs> for CliConfig {
    fn from(args: CliArgs) -> Self {
        CliConfig {
            expr: args.expr,
            options: SessionOptions {
                variable: args.variable,
                max_depth: args.max_depth,
            },
            log_level: args.log_level,
        }
    }
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> CliConfig {
    CliArgs::parse().into()
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args();

    init_logging(&config.log_level);

    let session =
        Session::with_options(config.options).context("Invalid differentiation variable")?;

    match config.expr {
        Some(expr) => {
            let report = session
                .process(&expr)
                .with_context(|| format!("Failed to process '{}'", expr))?;
            println!("{}", report);
            Ok(())
        }
        None => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            run_dialogue(&session, stdin.lock(), &mut stdout.lock())
        }
    }
}

/// Prompt for expressions until a line starting with `!` or end of input.
/// A line that fails is reported and the dialogue continues.
pub fn run_dialogue<R: BufRead, W: Write>(
    session: &Session,
    input: R,
    output: &mut W,
) -> Result<()> {
    info!(
        "Starting dialogue, differentiating with respect to '{}'",
        session.variable()
    );

    let mut lines = input.lines();
    loop {
        write!(output, "give an expression: ").context("Failed to write prompt")?;
        output.flush().context("Failed to flush output")?;

        let Some(line) = lines.next() else {
            writeln!(output).context("Failed to write output")?;
            break;
        };
        let line = line.context("Failed to read input line")?;

        if Session::is_terminator(&line) {
            break;
        }

        let written = match session.process(&line) {
            Ok(report) => writeln!(output, "{}", report),
            Err(err) => {
                warn!("Input '{}' rejected: {}", line, err);
                writeln!(output, "{}", describe_failure(&line, &err))
            }
        };
        written.context("Failed to write output")?;
        writeln!(output).context("Failed to write output")?;
    }

    writeln!(output, "good bye").context("Failed to write output")?;
    Ok(())
}

// A rejected line still echoes its tokens, like an accepted one does
fn describe_failure(line: &str, err: &SessionError) -> String {
    match err {
        SessionError::Parse(_) => format!(
            "tokens: {}\nthis is not an expression",
            format_tokens(&tokenize(line))
        ),
        other => other.to_string(),
    }
}
