use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use flightlink_core::{
    CaptureFormat, DEFAULT_GENERATED_AT, FlightControlRecord, Report, ValidatorConfig,
};
use glob::{Pattern, glob};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::{Level, debug, info};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\ncommit: ",
    env!("FLIGHTLINK_BUILD_COMMIT"),
    " (",
    env!("FLIGHTLINK_BUILD_COMMIT_FULL"),
    ")\nbuilt: ",
    env!("FLIGHTLINK_BUILD_DATE"),
);

const EXAMPLES: &str = "Examples:\n  flightlink decode capture.bin -o report.json\n  flightlink decode frames.hex --stdout --pretty\n  flightlink encode record.json --config link.toml\n  flightlink config -o flightlink.toml";

#[derive(Parser, Debug)]
#[command(name = "flightlink")]
#[command(version, long_version = LONG_VERSION)]
#[command(
    about = "Offline decoder for 32-byte flight-control frames.",
    long_about = None,
    after_help = EXAMPLES
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate and decode every frame of a capture into a JSON report.
    #[command(after_help = EXAMPLES)]
    Decode(DecodeArgs),
    /// Build a conforming frame from a JSON record and print it as hex.
    Encode {
        /// Path to a JSON file holding one record
        record: PathBuf,

        /// Link configuration (TOML)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print the default link configuration as TOML.
    Config {
        /// Write to this path instead of stdout
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
struct DecodeArgs {
    /// Path to a binary or hex capture (a glob matching one file is accepted)
    input: PathBuf,

    /// Output report path (JSON)
    #[arg(short = 'o', long, required_unless_present = "stdout")]
    report: Option<PathBuf>,

    /// Write JSON report to stdout
    #[arg(long, conflicts_with = "report")]
    stdout: bool,

    /// Capture encoding
    #[arg(long, value_enum, default_value_t = InputFormat::Auto)]
    format: InputFormat,

    /// Pretty-print JSON output
    #[arg(long, conflicts_with = "compact")]
    pretty: bool,

    /// Compact JSON output (default)
    #[arg(long)]
    compact: bool,

    /// Suppress non-error output
    #[arg(long)]
    quiet: bool,

    /// Exit with a non-zero code if any frame was rejected
    #[arg(long)]
    strict: bool,

    /// List rejection counts per kind after decoding
    #[arg(long)]
    list_rejections: bool,

    /// Link configuration (TOML)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum InputFormat {
    /// `.hex` and `.txt` are hex, anything else binary
    Auto,
    Bin,
    Hex,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let quiet = matches!(&cli.command, Commands::Decode(args) if args.quiet);
    init_logging(cli.verbose, quiet);

    let result = match cli.command {
        Commands::Decode(args) => cmd_decode(args),
        Commands::Encode { record, config } => cmd_encode(&record, config.as_deref()),
        Commands::Config { output } => cmd_config(output.as_deref()),
    };

    let Err(err) = result else {
        return ExitCode::SUCCESS;
    };
    eprintln!("error: {}", err.message);
    if let Some(hint) = err.hint {
        eprintln!("hint: {hint}");
    }
    ExitCode::from(2)
}

fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    // Already initialised is fine.
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .try_init();
}

/// Failure reported to the user as `error:` plus an optional `hint:` line.
#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<&'static str>,
}

impl CliError {
    fn hinted(message: impl Into<String>, hint: &'static str) -> Self {
        Self {
            message: message.into(),
            hint: Some(hint),
        }
    }
}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        Self {
            message: format!("{err:#}"),
            hint: None,
        }
    }
}

const CAPTURE_HINT: &str = "pass a binary (.bin) or hex (.hex, .txt) capture";

fn cmd_decode(args: DecodeArgs) -> Result<(), CliError> {
    let config = load_config(args.config.as_deref())?;
    let capture = locate_capture(&args.input)?;
    let capture_abs = fs::canonicalize(&capture)
        .with_context(|| format!("Failed to resolve input path: {}", capture.display()))?;

    let report_path = match (args.stdout, args.report) {
        (true, _) => None,
        (false, Some(path)) => {
            ensure_distinct_output(&path, &capture_abs)?;
            Some(path)
        }
        (false, None) => {
            return Err(CliError::hinted(
                "missing output path",
                "use -o/--report or --stdout",
            ));
        }
    };

    let format = match args.format {
        InputFormat::Auto => CaptureFormat::from_path(&capture),
        InputFormat::Bin => CaptureFormat::Binary,
        InputFormat::Hex => CaptureFormat::Hex,
    };
    debug!(input = %capture.display(), ?format, "decoding capture");

    let mut rep = flightlink_core::analyze_file(&capture, format, &config)
        .context("capture decoding failed")?;
    rep.generated_at = now_rfc3339();
    let json = render_report(&rep, args.pretty && !args.compact)?;

    match report_path {
        None => print!("{json}"),
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create output directory: {}", parent.display())
                })?;
            }
            fs::write(&path, json)
                .with_context(|| format!("Failed to write report: {}", path.display()))?;
            info!(report = %path.display(), "report written");
            if !args.quiet {
                eprintln!("OK: report written -> {}", path.display());
            }
        }
    }

    if args.list_rejections && !args.quiet {
        print_rejections(&rep);
    }
    let summary = &rep.summary;
    if args.strict && summary.frames_rejected > 0 {
        return Err(CliError::hinted(
            format!(
                "rejected frames detected ({} of {})",
                summary.frames_rejected, summary.frames_total
            ),
            "use --list-rejections to inspect",
        ));
    }
    Ok(())
}

fn cmd_encode(record_path: &Path, config_path: Option<&Path>) -> Result<(), CliError> {
    let config = load_config(config_path)?;
    let text = fs::read_to_string(record_path)
        .with_context(|| format!("Failed to read record: {}", record_path.display()))?;
    let record: FlightControlRecord = serde_json::from_str(&text).map_err(|err| {
        CliError::hinted(
            format!("invalid record '{}': {}", record_path.display(), err),
            "expected a JSON object with raw field values",
        )
    })?;
    let frame = flightlink_core::encode(&record, &config)
        .map_err(|err| CliError::hinted(err.to_string(), "raw values must fit their bit width"))?;
    println!("{}", hex::encode(frame));
    Ok(())
}

fn cmd_config(output: Option<&Path>) -> Result<(), CliError> {
    let text = toml::to_string_pretty(&ValidatorConfig::default())
        .context("TOML serialization failed")?;
    match output {
        None => print!("{text}"),
        Some(path) => {
            fs::write(path, text)
                .with_context(|| format!("Failed to write config: {}", path.display()))?;
            eprintln!("OK: config written -> {}", path.display());
        }
    }
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<ValidatorConfig, CliError> {
    let Some(path) = path else {
        return Ok(ValidatorConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    let config: ValidatorConfig = toml::from_str(&text).map_err(|err| {
        CliError::hinted(
            format!("invalid config '{}': {}", path.display(), err.message()),
            "run `flightlink config` for a valid template",
        )
    })?;
    debug!(?config, "config loaded");
    Ok(config)
}

fn ensure_distinct_output(report_path: &Path, capture_abs: &Path) -> Result<(), CliError> {
    let parent = match report_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    // Parent may not exist yet; it is created on write.
    let Ok(report_dir) = fs::canonicalize(parent) else {
        return Ok(());
    };
    let file_name = report_path
        .file_name()
        .ok_or_else(|| anyhow::anyhow!("Invalid report path: {}", report_path.display()))?;
    if report_dir.join(file_name) == capture_abs {
        return Err(CliError::hinted(
            format!(
                "report path must differ from input: {}",
                report_path.display()
            ),
            "choose a different output path",
        ));
    }
    Ok(())
}

fn now_rfc3339() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| DEFAULT_GENERATED_AT.to_string())
}

fn render_report(rep: &Report, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(rep)
    } else {
        serde_json::to_string(rep)
    };
    json.context("JSON serialization failed")
}

fn print_rejections(rep: &Report) {
    eprintln!(
        "Rejected frames: {} of {}",
        rep.summary.frames_rejected, rep.summary.frames_total
    );
    for rejection in &rep.summary.rejections {
        eprintln!("  {} ({})", rejection.kind, rejection.count);
    }
}

/// Resolves `input` to one existing capture file. Inputs containing glob
/// metacharacters must match exactly one file.
fn locate_capture(input: &Path) -> Result<PathBuf, CliError> {
    let text = input.to_string_lossy();
    let path = if Pattern::escape(&text) == text {
        input.to_path_buf()
    } else {
        single_glob_match(&text)?
    };
    if !path.is_file() {
        let reason = if path.exists() {
            "input is not a file"
        } else {
            "input file not found"
        };
        return Err(CliError::hinted(
            format!("{reason}: {}", path.display()),
            CAPTURE_HINT,
        ));
    }
    Ok(path)
}

fn single_glob_match(pattern: &str) -> Result<PathBuf, CliError> {
    let entries = glob(pattern).map_err(|err| {
        CliError::hinted(
            format!("invalid input pattern '{pattern}': {}", err.msg),
            "quote the pattern so the shell does not expand it",
        )
    })?;
    let mut matches: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .filter(|path| path.is_file())
        .collect();
    match matches.len() {
        0 => Err(CliError::hinted(
            format!("no files match pattern '{pattern}'"),
            CAPTURE_HINT,
        )),
        1 => Ok(matches.remove(0)),
        count => Err(CliError::hinted(
            format!("multiple files match pattern '{pattern}' ({count} matches)"),
            "pass a single capture file, or run once per file",
        )),
    }
}
