//! Read-only queries over catalog record sets.
//!
//! These feed the dashboard and the CLI reports; none of them touch storage.

pub mod exploration;
pub mod insights;
pub mod summary;

pub use exploration::{explore, explore_frame, ExplorationSummary};
pub use insights::{
    country_map_points, dashboard_view, mean_tone_by_genre, mean_tone_by_type,
    sentiment_distribution, CountryMapPoint, DashboardView, ToneByCategory,
};
pub use summary::{
    content_type_distribution, top_countries, top_genres, top_ratings, CategoryCount,
    DEFAULT_TOP_K,
};
