//! Page view analytics for the Clubhouse platform
//!
//! Three cooperating pieces:
//! - the event recorder appends one raw row per tracked page view;
//! - the archival compactor folds the raw table into a running total once
//!   it crosses a threshold, bounding storage and query cost;
//! - the stats aggregator computes time-windowed statistics over the raw
//!   table, folding archived totals into the all-time view.

mod analytics;
mod handler;
mod plugin;
mod traits;

pub mod types;

pub use analytics::{AnalyticsService, ARCHIVE_THRESHOLD, MAX_RANGE_DAYS};
pub use handler::{configure_routes, AnalyticsApiDoc, AppState};
pub use plugin::AnalyticsPlugin;
pub use traits::Analytics;
pub use types::AnalyticsError;
