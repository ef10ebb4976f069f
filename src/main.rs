use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use keyword_labeler::LabelConfig;

/// Keyword labeler - derive top-word labels for CSV product records
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON config file; missing fields use the built-in defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Input CSV file (default: ./allcsv/moringa.csv)
    #[arg(long)]
    input: Option<PathBuf>,

    /// JSON array of words to ignore (default: ./ignored_words.json)
    #[arg(long)]
    ignored_words: Option<PathBuf>,

    /// JSON array of priority words (default: ./allpriority/moringa_priority_words.json)
    #[arg(long)]
    priority_words: Option<PathBuf>,

    /// Output for original/processed pairs (default: ./processed_data.json)
    #[arg(long)]
    records_output: Option<PathBuf>,

    /// Output for distinct labels (default: ./processed_lines.json)
    #[arg(long)]
    labels_output: Option<PathBuf>,

    /// Maximum words per label (default: 4)
    #[arg(long)]
    max_words: Option<usize>,
}

impl Args {
    /// Config file (or defaults) with command-line overrides applied.
    fn resolve_config(self) -> Result<LabelConfig> {
        let mut config = match &self.config {
            Some(path) => {
                debug!("Using config file from --config argument: {}", path.display());
                LabelConfig::from_json_file(path)
                    .with_context(|| format!("loading config {}", path.display()))?
            }
            None => LabelConfig::default(),
        };

        if let Some(path) = self.input {
            config = config.with_input_path(path);
        }
        if let Some(path) = self.ignored_words {
            config = config.with_ignored_words_path(path);
        }
        if let Some(path) = self.priority_words {
            config = config.with_priority_words_path(path);
        }
        if let Some(path) = self.records_output {
            config = config.with_records_output_path(path);
        }
        if let Some(path) = self.labels_output {
            config = config.with_labels_output_path(path);
        }
        if let Some(max_words) = self.max_words {
            config = config.with_max_words(max_words);
        }

        Ok(config)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_line_number(true)
        .init();

    let config = Args::parse().resolve_config()?;
    info!(
        "Starting keyword-labeler - input={}, max_words={}",
        config.input_path.display(),
        config.max_words
    );

    let stats = keyword_labeler::run(&config).context("labeling run failed")?;
    debug!("Run stats: {:?}", stats);

    Ok(())
}
