use anyhow::{Context, Result};
use clap::Parser;
use serde_json::Value;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use template::{host, Converter};
use tracing::{debug, info};
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

mod cli;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.log_json);
    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    let template = read_template(&cli.template)?;
    let data = read_data(cli)?;

    let conversion = Converter::convert(&template, &data, &cli.options());
    info!(
        locale = %conversion.locale,
        bytes = conversion.html.len(),
        "converted template"
    );

    if cli.show_locale {
        eprintln!("locale: {}", conversion.locale);
    }

    write_output(cli.output.as_deref(), &conversion.html)
}

/// Read the whole template, from stdin when the path is "-"
fn read_template(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read template from stdin")?;
        host::require_template(&content)?;
        return Ok(content);
    }

    host::read_template(path).with_context(|| format!("Failed to load template {}", path.display()))
}

/// Load sample data overrides from --data or --data-json
fn read_data(cli: &Cli) -> Result<Value> {
    let json = match (&cli.data, &cli.data_json) {
        (Some(path), _) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read sample data {}", path.display()))?,
        (None, Some(inline)) => inline.clone(),
        (None, None) => String::new(),
    };

    let data = host::parse_data(&json)?;
    debug!(keys = data.as_object().map_or(0, |o| o.len()), "loaded sample data");
    Ok(data)
}

fn write_output(output: Option<&Path>, html: &str) -> Result<()> {
    match output {
        Some(path) if path != Path::new("-") => {
            fs::write(path, html).with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), "wrote converted email");
        }
        _ => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{html}").context("Failed to write to stdout")?;
        }
    }
    Ok(())
}

/// Initialize tracing subscriber based on verbosity and output format
fn init_tracing(verbose: u8, json: bool) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "warn,mailtpl_cli=info,template=info".to_string(),
            2 => "info,template=debug,email_i18n=debug".to_string(),
            _ => "debug,template=trace,email_i18n=trace,html_core=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_file(verbose >= 3)
                    .with_line_number(verbose >= 3)
                    .with_writer(io::stderr)
                    .compact(),
            )
            .init();
    }
}
