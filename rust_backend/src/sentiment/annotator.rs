use log::info;
use rayon::prelude::*;

use super::analyzer::PolarityAnalyzer;
use crate::core::domain::{AnnotatedRecord, CleanedRecord, SentimentLabel};

/// Attaches `description_tone` and `sentiment_label` to cleaned records.
///
/// Annotation never fails: the scorer is total over all strings.
#[derive(Debug, Clone, Default)]
pub struct SentimentAnnotator {
    analyzer: PolarityAnalyzer,
}

impl SentimentAnnotator {
    pub fn new(analyzer: PolarityAnalyzer) -> Self {
        Self { analyzer }
    }

    pub fn analyzer(&self) -> &PolarityAnalyzer {
        &self.analyzer
    }

    pub fn annotate_one(&self, record: CleanedRecord) -> AnnotatedRecord {
        let tone = self.analyzer.polarity(&record.description);
        AnnotatedRecord::new(record, tone)
    }

    /// Annotate every record sequentially, preserving order and cardinality.
    pub fn annotate(&self, records: Vec<CleanedRecord>) -> Vec<AnnotatedRecord> {
        let annotated: Vec<AnnotatedRecord> =
            records.into_iter().map(|r| self.annotate_one(r)).collect();
        log_label_counts(&annotated);
        annotated
    }

    /// Same output as [`annotate`](Self::annotate), scored across the rayon pool.
    pub fn annotate_parallel(&self, records: Vec<CleanedRecord>) -> Vec<AnnotatedRecord> {
        let annotated: Vec<AnnotatedRecord> = records
            .into_par_iter()
            .map(|r| self.annotate_one(r))
            .collect();
        log_label_counts(&annotated);
        annotated
    }
}

fn log_label_counts(records: &[AnnotatedRecord]) {
    let (mut positive, mut negative, mut neutral) = (0usize, 0usize, 0usize);
    for record in records {
        match record.sentiment_label {
            SentimentLabel::Positive => positive += 1,
            SentimentLabel::Negative => negative += 1,
            SentimentLabel::Neutral => neutral += 1,
        }
    }
    info!(
        "Annotated {} descriptions: {} positive, {} negative, {} neutral",
        records.len(),
        positive,
        negative,
        neutral
    );
}
