//! Command-line interface for payload-fixtures
//!
//! # Usage Examples
//!
//! ## Generate
//! ```bash
//! # Small preset (1000 users) as compact JSON on stdout
//! payload-fixtures generate --preset small > small.json
//!
//! # Large preset, reproducible, pretty-printed into a file
//! payload-fixtures generate --preset large --seed 42 \
//!   --encoder json-pretty --output large.json
//!
//! # Custom shape layered over the large preset
//! payload-fixtures generate --preset large --shape-file shape.yaml --users 5000
//! ```
//!
//! ## Compare
//! ```bash
//! # Generic value tree vs typed structs on the large preset
//! payload-fixtures compare --preset large --encoders json-value,json \
//!   --iterations 20 --warmup 3
//! ```
//!
//! ## Presets
//! ```bash
//! payload-fixtures presets --preset small
//! ```
//!
//! Logs go to stderr and are filtered by `RUST_LOG`
//! (e.g. `RUST_LOG=fixture_generator=debug`).

use anyhow::Context;
use clap::{Parser, Subcommand};
use fixture_compare::{compare, export_dataset, write_dataset, CompareOptions, EncoderKind};
use fixture_core::Preset;
use payload_fixtures::{DatasetOpts, EncoderArg, PresetArg};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "payload-fixtures")]
#[command(about = "Generate synthetic user-dataset payloads and compare encoders on them")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a dataset and write it out
    Generate {
        #[command(flatten)]
        dataset: DatasetOpts,

        /// Output encoding
        #[arg(long, value_enum, default_value = "json")]
        encoder: EncoderArg,

        /// Output file (default: stdout)
        #[arg(long, short = 'o', value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Generate a dataset once and time each encoder on it
    Compare {
        #[command(flatten)]
        dataset: DatasetOpts,

        /// Timed encodes per encoder
        #[arg(long, default_value = "10")]
        iterations: usize,

        /// Untimed encodes per encoder before timing
        #[arg(long, default_value = "2")]
        warmup: usize,

        /// Encoders to compare (comma-separated, default: json-value,json)
        #[arg(long, value_enum, value_delimiter = ',')]
        encoders: Vec<EncoderArg>,
    },

    /// Print preset shapes as YAML
    Presets {
        /// Only print this preset
        #[arg(long, value_enum)]
        preset: Option<PresetArg>,
    },
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing; stdout is reserved for payloads
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            dataset,
            encoder,
            output,
        } => run_generate(&dataset, encoder.into(), output)?,
        Commands::Compare {
            dataset,
            iterations,
            warmup,
            encoders,
        } => run_compare(&dataset, iterations, warmup, encoders)?,
        Commands::Presets { preset } => run_presets(preset)?,
    }

    Ok(())
}

fn run_generate(
    opts: &DatasetOpts,
    encoder: EncoderKind,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    tracing::info!(
        "Generating {} users with the {} preset",
        opts.user_count(),
        opts.preset()
    );

    let dataset = opts.build_dataset()?;
    let encoder = encoder.encoder();

    let metrics = match output {
        Some(path) => export_dataset(&dataset, encoder.as_ref(), &path)
            .with_context(|| format!("Failed to write dataset to {path:?}"))?,
        None => {
            let stdout = std::io::stdout();
            write_dataset(&dataset, encoder.as_ref(), stdout.lock())
                .context("Failed to write dataset to stdout")?
        }
    };

    tracing::info!(
        "{} payload size: {:.2} MB",
        encoder.name(),
        metrics.payload_megabytes()
    );
    Ok(())
}

fn run_compare(
    opts: &DatasetOpts,
    iterations: usize,
    warmup: usize,
    encoders: Vec<EncoderArg>,
) -> anyhow::Result<()> {
    let encoders: Vec<EncoderKind> = if encoders.is_empty() {
        vec![EncoderKind::JsonValue, EncoderKind::Json]
    } else {
        encoders.into_iter().map(EncoderKind::from).collect()
    };

    let dataset = opts.build_dataset()?;
    let report = compare(
        &dataset,
        &encoders,
        CompareOptions { iterations, warmup },
    )
    .context("Encoder comparison failed")?;

    print!("{}", report.render_table());
    Ok(())
}

fn run_presets(preset: Option<PresetArg>) -> anyhow::Result<()> {
    let presets: Vec<Preset> = match preset {
        Some(p) => vec![p.into()],
        None => Preset::ALL.to_vec(),
    };

    let mut stdout = std::io::stdout().lock();
    for (i, preset) in presets.iter().enumerate() {
        if i > 0 {
            writeln!(stdout, "---")?;
        }
        writeln!(
            stdout,
            "# preset: {preset} (default users: {})",
            preset.default_user_count()
        )?;
        write!(stdout, "base: {preset}\n{}", preset.shape().to_yaml()?)?;
    }
    Ok(())
}
