use std::{io::Write, process::ExitCode};

use anyhow::Result;
use charsets_core::config::{Config, OutputFormat};
use report::ReportOptions;
use tracing::Level;
use tracing_subscriber::{Registry, filter, fmt, layer::Layer, prelude::*};

mod report;

fn init_logging(log_level: Option<&str>) -> Result<()> {
    let var = log_level
        .map(str::to_string)
        .unwrap_or_else(|| std::env::var("CHARSETS_LOG").unwrap_or_default());
    let log_level = match var.to_ascii_lowercase().as_str() {
        "error" => Level::ERROR,
        "warn" => Level::WARN,
        "info" => Level::INFO,
        "debug" => Level::DEBUG,
        "trace" => Level::TRACE,
        #[cfg(debug_assertions)]
        _ => Level::TRACE,
        #[cfg(not(debug_assertions))]
        _ => Level::WARN,
    };

    let subscriber = Registry::default().with(
        fmt::layer()
            .compact()
            .without_time()
            .with_writer(std::io::stderr)
            .with_filter(filter::LevelFilter::from_level(log_level)),
    );

    tracing::subscriber::set_global_default(subscriber)?;
    tracing_log::LogTracer::init()?;
    Ok(())
}

fn main() -> Result<ExitCode> {
    let args = charsets_cli::parse();
    init_logging(args.log_level.as_deref())?;

    if args.init {
        let path = match &args.config {
            Some(path) => {
                Config::write_default(path, args.overwrite)?;
                path.clone()
            }
            None => Config::create_default_config(args.overwrite)?,
        };
        eprintln!("Created default config at: `{}`", path.to_string_lossy());
        return Ok(ExitCode::SUCCESS);
    }

    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::load_from_default_location()?,
    };

    let options = ReportOptions::new(&args, &config);
    let resolution = report::resolve(&args.names);
    for err in &resolution.unknown {
        eprintln!("{err}");
    }

    let output = report::render(&resolution.charsets, &options)?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    if options.format == OutputFormat::Json {
        writeln!(stdout)?;
    }
    stdout.flush()?;

    if !resolution.is_complete() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
