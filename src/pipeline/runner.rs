//! Pipeline runner — file in, two artifacts out.
//!
//! [`run`] loads the word lists and the CSV input named by a
//! [`LabelConfig`], labels every record with a [`DatasetProcessor`], and
//! writes both artifacts. Nothing is written unless processing finished.

use std::time::Instant;

use tracing::info;

use super::artifacts::RunStats;
use super::processor::DatasetProcessor;
use crate::config::LabelConfig;
use crate::errors::Result;
use crate::ingest::{load_word_lists, read_records, write_json};

/// Run the whole labeling job described by `config`.
pub fn run(config: &LabelConfig) -> Result<RunStats> {
    let started = Instant::now();
    let processor = DatasetProcessor::from_config(config)?;

    let lists = load_word_lists(&config.ignored_words_path, &config.priority_words_path)?;
    info!(
        "Word lists loaded - ignored={}, priority={}",
        lists.num_ignored(),
        lists.priority().len()
    );

    let records = read_records(&config.input_path)?;
    info!(
        "CSV file successfully read - path={}, records={}",
        config.input_path.display(),
        records.len()
    );

    let dataset = processor.process(records, &lists);

    write_json(&config.records_output_path, &dataset.records)?;
    info!(
        "Processed data written to {}",
        config.records_output_path.display()
    );

    write_json(&config.labels_output_path, &dataset.labels)?;
    info!(
        "Processed lines written to {}",
        config.labels_output_path.display()
    );

    info!(
        "Run completed - duration={:.2}s",
        started.elapsed().as_secs_f32()
    );
    Ok(dataset.stats)
}
