use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use tagscan::aws::client::TaggingClient;
use tagscan::aws::error::format_aws_error;
use tagscan::config::Config;
use tagscan::error::{EXIT_FAILURE, EXIT_OK};
use tagscan::output::{self, OutputFormat};
use tagscan::resource::collect_resources;
use tokio_util::sync::CancellationToken;
use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;

/// List tagged AWS resources in a region, classified by service
#[derive(Parser, Debug)]
#[command(name = "tagscan", version, about, long_about = None)]
struct Args {
    /// AWS region to scan, e.g. us-east-1
    #[arg(value_parser = tagscan::parse_region)]
    region: String,

    /// Fail on the first resource whose ARN cannot be classified
    #[arg(long)]
    strict: bool,

    /// Add the short ARN column to table output
    #[arg(long)]
    show_arn: bool,

    /// Output format
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Log level for debugging
    #[arg(long, value_enum, default_value = "off")]
    log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Trace => Some(Level::TRACE),
        }
    }
}

fn setup_logging(level: LogLevel) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let Some(tracing_level) = level.to_tracing_level() else {
        return Ok(None);
    };

    let log_path = get_log_path();

    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file {:?}", log_path))?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::fmt()
        .with_max_level(tracing_level)
        .with_writer(non_blocking.with_max_level(tracing_level))
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("tagscan started with log level: {:?}", level);
    tracing::info!("Log file: {:?}", log_path);

    Ok(Some(guard))
}

fn get_log_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join("tagscan").join("tagscan.log");
    }
    if let Some(home) = dirs::home_dir() {
        return home.join(".tagscan").join("tagscan.log");
    }
    PathBuf::from("tagscan.log")
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let _log_guard = match setup_logging(args.log_level) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("warning: logging disabled: {err:#}");
            None
        }
    };

    match run(&args).await {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

async fn run(args: &Args) -> Result<u8> {
    let config = Config::load();
    let policy = config.effective_policy(args.strict);
    let format = config.effective_format(args.format);
    let show_arn = config.effective_show_arn(args.show_arn);

    tracing::info!(
        "Scanning {} (policy: {:?}, format: {:?})",
        args.region,
        policy,
        format
    );

    let cancel = CancellationToken::new();
    let ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Ctrl-C received, cancelling scan");
            ctrl_c.cancel();
        }
    });

    let client = TaggingClient::new(&args.region).await;

    let report = match collect_resources(&client, &args.region, policy, &cancel).await {
        Ok(report) => report,
        Err(err) => {
            tracing::error!("Scan failed: {}", err);
            eprintln!("Error: {}", format_aws_error(&err.to_string(), err.hint()));
            return Ok(err.exit_code());
        }
    };

    let rendered = output::render(&report.records, format, show_arn)
        .context("Failed to render output")?;
    println!("{rendered}");

    if let Some(warning) = output::skipped_warning(&report) {
        eprintln!("{warning}");
    }

    Ok(EXIT_OK)
}
