use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::core::domain::AnnotatedRecord;

/// Default `k` used by the dashboard's top-N charts.
pub const DEFAULT_TOP_K: usize = 10;

/// One bar of a frequency chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub value: String,
    pub count: usize,
}

/// Count values and rank them by descending frequency.
///
/// The sort is stable, so ties keep first-encountered order.
pub fn rank_counts<'a, I>(values: I) -> Vec<CategoryCount>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    let mut counts: Vec<CategoryCount> = Vec::new();

    for value in values {
        match index.get(value) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(value, counts.len());
                counts.push(CategoryCount {
                    value: value.to_string(),
                    count: 1,
                });
            }
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

fn top_k<'a, I>(values: I, k: usize) -> Vec<CategoryCount>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut ranked = rank_counts(values);
    ranked.truncate(k);
    ranked
}

/// Top-`k` primary genres by frequency.
///
/// # Example
///
/// ```
/// use netflix_insights::core::domain::{AnnotatedRecord, ContentRecord};
/// use netflix_insights::services::summary::top_genres;
/// use netflix_insights::transformations::Cleaner;
///
/// let raw = vec![
///     ContentRecord { listed_in: Some("Dramas, Thrillers".into()), ..Default::default() },
///     ContentRecord { listed_in: Some("Comedies".into()), ..Default::default() },
///     ContentRecord { listed_in: Some("Dramas".into()), ..Default::default() },
/// ];
/// let cleaned = Cleaner::default().clean_records(&raw).records;
/// let annotated: Vec<AnnotatedRecord> =
///     cleaned.into_iter().map(|r| AnnotatedRecord::new(r, 0.0)).collect();
///
/// let top = top_genres(&annotated, 1);
/// assert_eq!(top.len(), 1);
/// assert_eq!(top[0].value, "Dramas");
/// assert_eq!(top[0].count, 2);
/// ```
pub fn top_genres(records: &[AnnotatedRecord], k: usize) -> Vec<CategoryCount> {
    top_k(records.iter().map(|r| r.record.primary_genre.as_str()), k)
}

/// Top-`k` ratings by frequency.
pub fn top_ratings(records: &[AnnotatedRecord], k: usize) -> Vec<CategoryCount> {
    top_k(records.iter().map(|r| r.record.rating.as_str()), k)
}

/// Top-`k` (first listed) countries by frequency.
pub fn top_countries(records: &[AnnotatedRecord], k: usize) -> Vec<CategoryCount> {
    top_k(records.iter().map(|r| r.record.country.as_str()), k)
}

/// Frequency of every content type. Counts sum to `records.len()`.
pub fn content_type_distribution(records: &[AnnotatedRecord]) -> Vec<CategoryCount> {
    rank_counts(records.iter().map(|r| r.record.content_type.as_str()))
}
