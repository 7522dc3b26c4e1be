use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::summary::{
    content_type_distribution, rank_counts, top_genres, top_ratings, CategoryCount, DEFAULT_TOP_K,
};
use crate::core::domain::{AnnotatedRecord, CountryCoordinate};
use crate::parsing::coordinates_parser::coordinates_by_country;
use crate::transformations::filtering::CatalogFilter;

/// Base radius of a map point, in metres.
pub const MAP_BASE_RADIUS: f64 = 50_000.0;

/// Extra radius per title, in metres.
pub const MAP_RADIUS_PER_TITLE: f64 = 200.0;

/// Rows shown in the filtered preview table.
pub const PREVIEW_ROWS: usize = 10;

/// Mean description tone of one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToneByCategory {
    pub category: String,
    pub mean_tone: f64,
    pub count: usize,
}

/// One scatter point of the country map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryMapPoint {
    pub country: String,
    pub count: usize,
    pub lat: f64,
    pub lon: f64,
    pub radius: f64,
}

/// Everything the dashboard renders for one filter selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    /// Charts over the whole catalog, independent of the filter.
    pub top_genres: Vec<CategoryCount>,
    pub top_ratings: Vec<CategoryCount>,
    pub content_types: Vec<CategoryCount>,

    pub filtered_count: usize,
    pub preview: Vec<AnnotatedRecord>,
    pub tone_by_genre: Vec<ToneByCategory>,
    pub tone_by_type: Vec<ToneByCategory>,
    pub sentiment: Vec<CategoryCount>,
    pub map_points: Vec<CountryMapPoint>,
}

fn mean_tone_by<F>(records: &[AnnotatedRecord], key: F) -> Vec<ToneByCategory>
where
    F: Fn(&AnnotatedRecord) -> &str,
{
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut sums: Vec<(String, f64, usize)> = Vec::new();

    for record in records {
        let category = key(record);
        match index.get(category) {
            Some(&i) => {
                sums[i].1 += record.description_tone;
                sums[i].2 += 1;
            }
            None => {
                index.insert(category, sums.len());
                sums.push((category.to_string(), record.description_tone, 1));
            }
        }
    }

    let mut tones: Vec<ToneByCategory> = sums
        .into_iter()
        .map(|(category, sum, count)| ToneByCategory {
            category,
            mean_tone: sum / count as f64,
            count,
        })
        .collect();
    tones.sort_by(|a, b| {
        a.mean_tone
            .partial_cmp(&b.mean_tone)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    tones
}

/// Mean tone per primary genre, ascending by mean.
pub fn mean_tone_by_genre(records: &[AnnotatedRecord]) -> Vec<ToneByCategory> {
    mean_tone_by(records, |r| r.record.primary_genre.as_str())
}

/// Mean tone per content type, ascending by mean.
pub fn mean_tone_by_type(records: &[AnnotatedRecord]) -> Vec<ToneByCategory> {
    mean_tone_by(records, |r| r.record.content_type.as_str())
}

/// Record counts per sentiment label.
pub fn sentiment_distribution(records: &[AnnotatedRecord]) -> Vec<CategoryCount> {
    rank_counts(records.iter().map(|r| r.sentiment_label.as_str()))
}

/// Radius of a map point for `count` titles.
pub fn map_point_radius(count: usize) -> f64 {
    MAP_BASE_RADIUS + count as f64 * MAP_RADIUS_PER_TITLE
}

/// Per-country title counts joined with the coordinate table.
///
/// Countries without coordinates (including `"Unknown"`) are dropped.
pub fn country_map_points(
    records: &[AnnotatedRecord],
    coordinates: &[CountryCoordinate],
) -> Vec<CountryMapPoint> {
    let lookup = coordinates_by_country(coordinates);

    rank_counts(records.iter().map(|r| r.record.country.as_str()))
        .into_iter()
        .filter_map(|c| {
            let (lat, lon) = *lookup.get(c.value.as_str())?;
            Some(CountryMapPoint {
                radius: map_point_radius(c.count),
                country: c.value,
                count: c.count,
                lat,
                lon,
            })
        })
        .collect()
}

/// Build the full dashboard view for one filter selection.
pub fn dashboard_view(
    records: &[AnnotatedRecord],
    coordinates: &[CountryCoordinate],
    filter: &CatalogFilter,
) -> DashboardView {
    let filtered = filter.apply(records);

    DashboardView {
        top_genres: top_genres(records, DEFAULT_TOP_K),
        top_ratings: top_ratings(records, DEFAULT_TOP_K),
        content_types: content_type_distribution(records),
        filtered_count: filtered.len(),
        preview: filtered.iter().take(PREVIEW_ROWS).cloned().collect(),
        tone_by_genre: mean_tone_by_genre(&filtered),
        tone_by_type: mean_tone_by_type(&filtered),
        sentiment: sentiment_distribution(&filtered),
        map_points: country_map_points(&filtered, coordinates),
    }
}
