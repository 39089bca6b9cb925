use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use legend_lint::{report, validate_legends};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "legend-lint",
    version,
    about = "Validate chart legend configuration files against the legend schema"
)]
struct Cli {
    /// JSON files, each holding one legend object or an array of legend objects.
    #[arg(required = true)]
    files: Vec<PathBuf>,
    /// Report format (text or json). If omitted, inferred from --out extension.
    #[arg(long, value_enum)]
    format: Option<OutFormat>,
    /// Write the report to a file instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutFormat {
    Text,
    Json,
}

fn load_legends(path: &Path) -> Result<Vec<Value>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let value: Value =
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
    Ok(match value {
        Value::Array(items) => items,
        other => vec![other],
    })
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let format = match cli.format {
        Some(f) => f,
        None => match cli
            .out
            .as_ref()
            .and_then(|p| p.extension())
            .and_then(|e| e.to_str())
        {
            Some("json") => OutFormat::Json,
            _ => OutFormat::Text,
        },
    };

    let mut legends = Vec::new();
    for path in &cli.files {
        let mut batch = load_legends(path)?;
        log::info!("{}: {} legend(s)", path.display(), batch.len());
        legends.append(&mut batch);
    }

    let results = validate_legends(&legends);

    match (cli.out.as_ref(), format) {
        (Some(path), OutFormat::Json) => report::save_json(&results, path)?,
        (Some(path), OutFormat::Text) => {
            fs::write(path, report::render_text(&results))
                .with_context(|| format!("writing {}", path.display()))?;
        }
        (None, OutFormat::Json) => println!("{}", serde_json::to_string_pretty(&results)?),
        (None, OutFormat::Text) => print!("{}", report::render_text(&results)),
    }

    let invalid = results.iter().filter(|r| !r.valid).count();
    if invalid > 0 {
        log::warn!("{invalid} of {} legend(s) failed validation", results.len());
        std::process::exit(1);
    }
    Ok(())
}
