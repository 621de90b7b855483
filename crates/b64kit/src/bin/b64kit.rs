//! `b64kit`: convert text to Base64 and back.
//!
//! Usage:
//!   b64kit encode [OPTIONS] [TEXT]
//!   b64kit decode [OPTIONS] [TEXT]
//!
//! TEXT is read from stdin when omitted. Options from `--config` are applied
//! first; flags on the command line win. Logging goes to stderr and is
//! controlled by `RUST_LOG`.

use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use b64kit::{coerce_line_width, convert, Config, ConfigError, ConversionOptions, Mode};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "b64kit", version, about = "Convert text to Base64 and back")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// TOML file with default options.
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the full conversion result as JSON.
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Text to Base64.
    Encode(ConvertArgs),
    /// Base64 to text.
    Decode(ConvertArgs),
}

#[derive(Debug, Args)]
struct ConvertArgs {
    /// Input text. Read from stdin when omitted.
    text: Option<String>,

    /// Use the URL-safe alphabet (`-` and `_`).
    #[arg(long)]
    url_safe: bool,

    /// Omit trailing `=` when encoding; do not restore it when decoding.
    #[arg(long)]
    no_padding: bool,

    /// Break encoded output every N characters (non-numeric or < 1 means 76).
    #[arg(long, value_name = "N", allow_hyphen_values = true)]
    wrap: Option<String>,

    /// Keep whitespace in decode input instead of stripping it.
    #[arg(long)]
    keep_whitespace: bool,

    /// Skip round-trip validation before decoding.
    #[arg(long)]
    no_validate: bool,

    /// Text to put before successful output.
    #[arg(long)]
    prefix: Option<String>,

    /// Text to put after successful output.
    #[arg(long)]
    suffix: Option<String>,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),
    #[error("failed to write output: {0}")]
    Stdout(#[source] io::Error),
    #[error("failed to serialize result: {0}")]
    Json(#[from] serde_json::Error),
}

fn configure_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn build_options(base: ConversionOptions, mode: Mode, args: &ConvertArgs) -> ConversionOptions {
    let mut opts = base.with_mode(mode);
    if args.url_safe {
        opts.url_safe = true;
    }
    if args.no_padding {
        opts.add_padding = false;
    }
    if let Some(raw) = &args.wrap {
        opts.add_line_breaks = true;
        // coerce_line_width never returns more than i64::MAX.
        opts.set_line_break_every(coerce_line_width(raw) as i64);
    }
    if args.keep_whitespace {
        opts.strip_whitespace = false;
    }
    if args.no_validate {
        opts.validate_input = false;
    }
    if let Some(prefix) = &args.prefix {
        opts.add_prefix = prefix.clone();
    }
    if let Some(suffix) = &args.suffix {
        opts.add_suffix = suffix.clone();
    }
    opts
}

fn run(cli: Cli) -> Result<bool, CliError> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let (mode, args) = match &cli.command {
        Command::Encode(args) => (Mode::Encode, args),
        Command::Decode(args) => (Mode::Decode, args),
    };
    let opts = build_options(config.options, mode, args);

    let input = match &args.text {
        Some(text) => text.clone(),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).map_err(CliError::Stdin)?;
            buf
        }
    };

    let result = convert(&input, &opts);
    let mut stdout = io::stdout().lock();
    if cli.json {
        let json = serde_json::to_string_pretty(&result)?;
        writeln!(stdout, "{json}").map_err(CliError::Stdout)?;
    } else if result.is_valid {
        writeln!(stdout, "{}", result.converted_text).map_err(CliError::Stdout)?;
    }
    if let Some(message) = &result.error_message {
        eprintln!("{message}");
    }
    Ok(result.is_valid)
}

fn main() -> ExitCode {
    configure_logging();
    match run(Cli::parse()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from(["b64kit", "encode", "--url-safe", "--no-padding", "--wrap", "0", "hi"]);
        let Command::Encode(args) = &cli.command else {
            panic!("expected encode");
        };
        let base = ConversionOptions::default().with_prefix("cfg:");
        let opts = build_options(base, Mode::Encode, args);
        assert!(opts.url_safe);
        assert!(!opts.add_padding);
        assert!(opts.add_line_breaks);
        assert_eq!(opts.line_break_every(), 76);
        assert_eq!(opts.add_prefix, "cfg:");
        assert_eq!(args.text.as_deref(), Some("hi"));
    }

    #[test]
    fn config_options_survive_without_flags() {
        let cli = Cli::parse_from(["b64kit", "decode"]);
        let Command::Decode(args) = &cli.command else {
            panic!("expected decode");
        };
        let base = ConversionOptions::default().with_url_safe(true).with_validation(false);
        let opts = build_options(base, Mode::Decode, args);
        assert_eq!(opts.mode, Mode::Decode);
        assert!(opts.url_safe);
        assert!(!opts.validate_input);
        assert!(opts.strip_whitespace);
    }
}
