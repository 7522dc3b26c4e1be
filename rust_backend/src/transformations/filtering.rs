use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::core::domain::{AnnotatedRecord, ContentType};

/// Dashboard selection, passed explicitly with every request.
///
/// For each categorical dimension `None` means "no restriction", while
/// `Some` restricts to the listed values; an empty set therefore matches
/// nothing, the same as clearing a multiselect widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogFilter {
    #[serde(default)]
    pub content_types: Option<HashSet<ContentType>>,
    #[serde(default)]
    pub genres: Option<HashSet<String>>,
    #[serde(default)]
    pub countries: Option<HashSet<String>>,
    /// Inclusive polarity bounds.
    #[serde(default = "full_tone_range")]
    pub tone_range: (f64, f64),
}

fn full_tone_range() -> (f64, f64) {
    (-1.0, 1.0)
}

impl Default for CatalogFilter {
    fn default() -> Self {
        Self {
            content_types: None,
            genres: None,
            countries: None,
            tone_range: full_tone_range(),
        }
    }
}

impl CatalogFilter {
    /// Filter that accepts every record (the dashboard's reset state).
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_content_types<I: IntoIterator<Item = ContentType>>(mut self, types: I) -> Self {
        self.content_types = Some(types.into_iter().collect());
        self
    }

    pub fn with_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres = Some(genres.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_countries<I, S>(mut self, countries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.countries = Some(countries.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_tone_range(mut self, min: f64, max: f64) -> Self {
        self.tone_range = (min, max);
        self
    }

    pub fn matches(&self, record: &AnnotatedRecord) -> bool {
        let row = &record.record;

        if let Some(types) = &self.content_types {
            if !types.contains(&row.content_type) {
                return false;
            }
        }
        if let Some(genres) = &self.genres {
            if !genres.contains(&row.primary_genre) {
                return false;
            }
        }
        if let Some(countries) = &self.countries {
            if !countries.contains(&row.country) {
                return false;
            }
        }

        let (min, max) = self.tone_range;
        record.description_tone >= min && record.description_tone <= max
    }

    /// Records that satisfy every condition, in input order.
    pub fn apply(&self, records: &[AnnotatedRecord]) -> Vec<AnnotatedRecord> {
        records.iter().filter(|r| self.matches(r)).cloned().collect()
    }
}

/// Distinct values of a categorical column in first-seen order.
///
/// Feeds the dashboard's option lists.
pub fn distinct_values<F>(records: &[AnnotatedRecord], key: F) -> Vec<String>
where
    F: Fn(&AnnotatedRecord) -> &str,
{
    let mut seen = HashSet::new();
    records
        .iter()
        .map(|r| key(r))
        .filter(|v| seen.insert(v.to_string()))
        .map(str::to_string)
        .collect()
}
