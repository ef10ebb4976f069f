//! Pipeline artifacts.
//!
//! [`ProcessedDataset`] is what the processor hands to the output boundary:
//! per-record labels aligned with the input, the distinct labels, and run
//! statistics.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// One input record paired with its label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedRecord {
    pub original: String,
    pub processed: String,
}

/// Counters reported after a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    /// Records processed
    pub records: usize,
    /// Distinct words in the frequency map
    pub vocabulary: usize,
    /// Distinct labels produced
    pub distinct_labels: usize,
    /// Records whose label came out empty
    pub empty_labels: usize,
}

/// Everything produced from one dataset.
#[derive(Debug, Clone, Default)]
pub struct ProcessedDataset {
    /// Input order, one entry per record
    pub records: Vec<ProcessedRecord>,
    /// Distinct labels, first-seen order
    pub labels: Vec<String>,
    pub stats: RunStats,
}

impl ProcessedDataset {
    /// Pair records with their labels and collect the distinct labels.
    pub fn assemble(originals: Vec<String>, processed: Vec<String>, vocabulary: usize) -> Self {
        let labels = distinct_labels(&processed);
        let empty_labels = processed.iter().filter(|l| l.is_empty()).count();

        let records: Vec<ProcessedRecord> = originals
            .into_iter()
            .zip(processed)
            .map(|(original, processed)| ProcessedRecord {
                original,
                processed,
            })
            .collect();

        let stats = RunStats {
            records: records.len(),
            vocabulary,
            distinct_labels: labels.len(),
            empty_labels,
        };

        Self {
            records,
            labels,
            stats,
        }
    }
}

/// Labels with duplicates removed, keeping first-seen order.
pub fn distinct_labels<S: AsRef<str>>(labels: &[S]) -> Vec<String> {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    labels
        .iter()
        .map(AsRef::as_ref)
        .filter(|l| seen.insert(l))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distinct_labels_first_seen() {
        let labels = distinct_labels(&["Tea Leaf", "Powder", "Tea Leaf", "", "Powder", ""]);
        assert_eq!(labels, vec!["Tea Leaf", "Powder", ""]);
    }

    #[test]
    fn test_assemble_aligns_records() {
        let dataset = ProcessedDataset::assemble(
            vec!["a tea".to_string(), "b tea".to_string(), "???".to_string()],
            vec!["Tea".to_string(), "Tea".to_string(), String::new()],
            7,
        );

        assert_eq!(dataset.records.len(), 3);
        assert_eq!(dataset.records[1].original, "b tea");
        assert_eq!(dataset.records[1].processed, "Tea");
        assert_eq!(dataset.labels, vec!["Tea", ""]);
        assert_eq!(
            dataset.stats,
            RunStats {
                records: 3,
                vocabulary: 7,
                distinct_labels: 2,
                empty_labels: 1,
            }
        );
    }

    #[test]
    fn test_record_json_shape() {
        let record = ProcessedRecord {
            original: "Moringa Powder".to_string(),
            processed: "Moringa Powder".to_string(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "original": "Moringa Powder", "processed": "Moringa Powder" })
        );
    }
}
