use anyhow::{Context, Result};
use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::time::Instant;

use modalizer::analysis::{analyze_file, AnalysisSettings};
use modalizer::config::{resolve_config, QuestionScope};
use modalizer::logging::{init_subscriber, level_for_verbosity};
use modalizer::report::{
    build_report, color_enabled, execution_summary, render_json, render_text, OutputFormat,
    ReportOptions,
};
use modalizer::report_io::save_report;

#[derive(Parser, Debug)]
#[command(name = "modalizer")]
#[command(version)]
#[command(about = "Count, exemplify and classify modal verbs per speaker in a transcript")]
struct Cli {
    /// Transcript with one `SPEAKER: utterance` per line
    file: PathBuf,

    /// Annotation JSONL (defaults to FILE plus the configured suffix)
    #[arg(short, long, value_name = "PATH")]
    annotations: Option<PathBuf>,

    /// Show one example sentence per modal lemma
    #[arg(short, long)]
    example: bool,

    /// Classify modals into modality categories
    #[arg(short, long)]
    categorize: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Span that must end in `?` for the Permission category
    #[arg(long, value_enum)]
    question_scope: Option<QuestionScope>,

    /// TOML configuration (defaults to ./modalizer.toml when present)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Also save the JSON report here
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Disable ANSI colors in the text report
    #[arg(long)]
    no_color: bool,

    /// More log output on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_subscriber(level_for_verbosity(cli.verbose));
    let started = Instant::now();

    let mut config = resolve_config(cli.config.as_deref()).context("failed to load configuration")?;
    if let Some(scope) = cli.question_scope {
        config.classification.question_scope = scope;
    }
    if cli.no_color {
        config.report.color = false;
    }

    let annotations_path = cli
        .annotations
        .clone()
        .unwrap_or_else(|| config.annotations.path_for(&cli.file));
    let settings = AnalysisSettings::from(&config);
    let analysis = analyze_file(&cli.file, &annotations_path, &settings)
        .with_context(|| format!("failed to analyze {}", cli.file.display()))?;

    let options = ReportOptions {
        examples: cli.example,
        categories: cli.categorize,
    };
    let report = build_report(&analysis, options);

    match cli.format {
        OutputFormat::Text => {
            let color = color_enabled(config.report.color, std::io::stdout().is_terminal());
            print!("{}", render_text(&report, color));
        }
        OutputFormat::Json => println!("{}", render_json(&report).context("failed to render report")?),
    }

    if let Some(output) = &cli.output {
        save_report(&report, output)?;
        tracing::info!(path = %output.display(), "report saved");
    }

    eprintln!("{}", execution_summary(started.elapsed()));
    Ok(())
}
