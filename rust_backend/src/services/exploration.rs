//! Exploratory summary of a catalog record set.
//!
//! Works on raw or cleaned data alike: values are counted as they appear,
//! without first-token reduction.

use anyhow::Result;
use polars::prelude::DataFrame;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt;

use super::summary::{rank_counts, CategoryCount};
use crate::core::domain::{ContentRecord, REQUIRED_COLUMNS};
use crate::parsing::csv_parser::dataframe_to_records;

const TOP_N: usize = 10;
const SAMPLE_DESCRIPTIONS: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnMissing {
    pub column: String,
    pub missing: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeShare {
    pub content_type: String,
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearCount {
    pub year: i32,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplorationSummary {
    pub rows: usize,
    pub columns: Vec<String>,
    pub missing_values: Vec<ColumnMissing>,
    pub type_shares: Vec<TypeShare>,
    pub top_countries: Vec<CategoryCount>,
    pub top_genre_combinations: Vec<CategoryCount>,
    /// Most recent release years, ascending.
    pub recent_release_years: Vec<YearCount>,
    pub top_ratings: Vec<CategoryCount>,
    pub sample_descriptions: Vec<String>,
    pub duplicate_rows: usize,
}

fn column_value<'a>(record: &'a ContentRecord, column: &str) -> Option<&'a str> {
    match column {
        "show_id" => record.show_id.as_deref(),
        "type" => record.content_type.as_deref(),
        "title" => record.title.as_deref(),
        "director" => record.director.as_deref(),
        "cast" => record.cast.as_deref(),
        "country" => record.country.as_deref(),
        "date_added" => record.date_added.as_deref(),
        "rating" => record.rating.as_deref(),
        "duration" => record.duration.as_deref(),
        "listed_in" => record.listed_in.as_deref(),
        "description" => record.description.as_deref(),
        _ => None,
    }
}

fn is_missing(record: &ContentRecord, column: &str) -> bool {
    if column == "release_year" {
        return record.release_year.is_none();
    }
    column_value(record, column).is_none()
}

fn top_values(records: &[ContentRecord], column: &str) -> Vec<CategoryCount> {
    let mut ranked = rank_counts(records.iter().filter_map(|r| column_value(r, column)));
    ranked.truncate(TOP_N);
    ranked
}

/// Summarise a record set over the given columns.
pub fn explore(records: &[ContentRecord]) -> ExplorationSummary {
    let columns: Vec<String> = std::iter::once("show_id")
        .chain(REQUIRED_COLUMNS)
        .map(str::to_string)
        .collect();
    explore_columns(records, columns)
}

/// Summarise a DataFrame, reporting its actual column list.
pub fn explore_frame(df: &DataFrame) -> Result<ExplorationSummary> {
    let records = dataframe_to_records(df)?;
    let columns = df
        .get_column_names()
        .iter()
        .map(|c| c.to_string())
        .collect();
    Ok(explore_columns(&records, columns))
}

fn explore_columns(records: &[ContentRecord], columns: Vec<String>) -> ExplorationSummary {
    let rows = records.len();

    let missing_values = columns
        .iter()
        .map(|column| ColumnMissing {
            column: column.clone(),
            missing: records.iter().filter(|r| is_missing(r, column)).count(),
        })
        .collect();

    let types = rank_counts(records.iter().filter_map(|r| r.content_type.as_deref()));
    let typed: usize = types.iter().map(|c| c.count).sum();
    let type_shares = types
        .into_iter()
        .map(|c| TypeShare {
            percent: c.count as f64 * 100.0 / typed as f64,
            content_type: c.value,
        })
        .collect();

    let mut years: BTreeMap<i32, usize> = BTreeMap::new();
    for year in records.iter().filter_map(|r| r.release_year) {
        *years.entry(year).or_default() += 1;
    }
    let skip = years.len().saturating_sub(TOP_N);
    let recent_release_years = years
        .into_iter()
        .skip(skip)
        .map(|(year, count)| YearCount { year, count })
        .collect();

    let sample_descriptions = records
        .iter()
        .filter_map(|r| r.description.as_deref())
        .filter(|d| !d.trim().is_empty())
        .take(SAMPLE_DESCRIPTIONS)
        .map(str::to_string)
        .collect();

    let mut seen = HashSet::with_capacity(rows);
    let duplicate_rows = records.iter().filter(|r| !seen.insert(*r)).count();

    ExplorationSummary {
        rows,
        columns,
        missing_values,
        type_shares,
        top_countries: top_values(records, "country"),
        top_genre_combinations: top_values(records, "listed_in"),
        recent_release_years,
        top_ratings: top_values(records, "rating"),
        sample_descriptions,
        duplicate_rows,
    }
}

fn write_counts(f: &mut fmt::Formatter<'_>, title: &str, counts: &[CategoryCount]) -> fmt::Result {
    writeln!(f, "\n{}:", title)?;
    for c in counts {
        writeln!(f, "  {:<40} {}", c.value, c.count)?;
    }
    Ok(())
}

impl fmt::Display for ExplorationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "-".repeat(40);
        writeln!(f, "Dataset Summary")?;
        writeln!(f, "{}", rule)?;
        writeln!(f, "Shape: ({}, {})", self.rows, self.columns.len())?;
        writeln!(f, "\nColumns: {}", self.columns.join(", "))?;

        writeln!(f, "\nMissing Values:")?;
        for m in &self.missing_values {
            writeln!(f, "  {:<40} {}", m.column, m.missing)?;
        }

        writeln!(f, "\nContent Type Distribution (%):")?;
        for share in &self.type_shares {
            writeln!(f, "  {:<40} {:.2}", share.content_type, share.percent)?;
        }

        write_counts(f, "Top 10 Countries", &self.top_countries)?;
        write_counts(f, "Top 10 Genre Combinations", &self.top_genre_combinations)?;

        writeln!(f, "\nContent Releases Over Time (Recent):")?;
        for y in &self.recent_release_years {
            writeln!(f, "  {:<40} {}", y.year, y.count)?;
        }

        write_counts(f, "Top Content Ratings", &self.top_ratings)?;

        writeln!(f, "\nSample Descriptions:")?;
        for d in &self.sample_descriptions {
            writeln!(f, "  - {}", d)?;
        }

        writeln!(f, "\nDuplicate Rows: {}", self.duplicate_rows)?;
        writeln!(f, "{}", rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(ty: Option<&str>, country: Option<&str>, year: Option<i32>) -> ContentRecord {
        ContentRecord {
            content_type: ty.map(str::to_string),
            country: country.map(str::to_string),
            release_year: year,
            rating: Some("TV-MA".to_string()),
            listed_in: Some("Dramas, International Movies".to_string()),
            description: Some(format!("{:?} {:?}", country, year)),
            ..Default::default()
        }
    }

    #[test]
    fn test_explore_counts() {
        let records = vec![
            raw(Some("Movie"), Some("United States, India"), Some(2019)),
            raw(Some("Movie"), None, Some(2020)),
            raw(Some("TV Show"), Some("India"), None),
            raw(None, Some("India"), Some(2021)),
        ];

        let summary = explore(&records);
        assert_eq!(summary.rows, 4);
        assert_eq!(summary.columns.len(), 12);

        let country_missing = summary
            .missing_values
            .iter()
            .find(|m| m.column == "country")
            .unwrap();
        assert_eq!(country_missing.missing, 1);
        let director_missing = summary
            .missing_values
            .iter()
            .find(|m| m.column == "director")
            .unwrap();
        assert_eq!(director_missing.missing, 4);

        // Raw values are not reduced to their first token
        assert_eq!(summary.top_countries[0].value, "India");
        assert_eq!(summary.top_countries[0].count, 2);
        assert_eq!(summary.top_countries[1].value, "United States, India");

        let movie = &summary.type_shares[0];
        assert_eq!(movie.content_type, "Movie");
        assert!((movie.percent - 200.0 / 3.0).abs() < 1e-9);

        assert_eq!(
            summary.recent_release_years,
            vec![
                YearCount { year: 2019, count: 1 },
                YearCount { year: 2020, count: 1 },
                YearCount { year: 2021, count: 1 },
            ]
        );
        assert_eq!(summary.sample_descriptions.len(), 3);
        assert_eq!(summary.duplicate_rows, 0);
    }

    #[test]
    fn test_recent_years_keep_last_ten() {
        let records: Vec<_> = (2000..2015)
            .map(|y| raw(Some("Movie"), Some("Spain"), Some(y)))
            .collect();
        let summary = explore(&records);
        assert_eq!(summary.recent_release_years.len(), 10);
        assert_eq!(summary.recent_release_years[0].year, 2005);
        assert_eq!(summary.recent_release_years[9].year, 2014);
    }

    #[test]
    fn test_duplicates_are_counted() {
        let row = raw(Some("Movie"), Some("Spain"), Some(2001));
        let summary = explore(&[row.clone(), row.clone(), row]);
        assert_eq!(summary.duplicate_rows, 2);
    }

    #[test]
    fn test_empty_input() {
        let summary = explore(&[]);
        assert_eq!(summary.rows, 0);
        assert!(summary.type_shares.is_empty());
        assert!(summary.sample_descriptions.is_empty());
        assert!(summary.to_string().contains("Duplicate Rows: 0"));
    }
}
