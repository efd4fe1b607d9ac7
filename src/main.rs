// lesson-lint/src/main.rs

use anyhow::{Context, Result};
use clap::Parser;
use lesson_lint::{Config, LessonLinter, OutputFormat, RuleSet, config::{self, CONFIG_FILE}};
use std::{path::{Path, PathBuf}, process::ExitCode};

#[derive(Parser)]
#[command(name = "lesson-lint", version, about = "Check the structure of JSON lesson files")]
struct Args {
    /// Lesson tree to check (default: ./lessons, or `root` from the config file)
    root: Option<PathBuf>,
    /// Config file (default: ./lessonlint.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Output format
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
    /// Skip a rule by id; repeatable
    #[arg(long = "disable", value_name = "RULE")]
    disable: Vec<String>,
    /// Skip files matching a glob relative to the root; repeatable
    #[arg(long = "exclude", value_name = "GLOB")]
    exclude: Vec<String>,
    /// Print the available rules and exit
    #[arg(long)]
    list_rules: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    match run(Args::parse()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}

/// Ok(true) when every file passed.
fn run(args: Args) -> Result<bool> {
    if args.list_rules {
        for rule in RuleSet::standard().iter() {
            println!("{:<26} {}", rule.id(), rule.description());
        }
        return Ok(true);
    }

    let mut cfg = match &args.config {
        Some(path) => Config::load_file(path)?,
        None => Config::load(Path::new(CONFIG_FILE))?,
    };
    let overlay = Config { root: args.root, exclude: args.exclude, disable: args.disable, format: args.format };
    config::merge(&mut cfg, &overlay);

    let linter = LessonLinter::from_config(&cfg)?;
    let report = linter.run().with_context(|| format!("lint {}", linter.root.display()))?;
    match cfg.format() {
        OutputFormat::Text => print!("{}", report.render_text()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(report.is_clean())
}
