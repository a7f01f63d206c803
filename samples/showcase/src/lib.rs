//! Showcase Sample Application
//!
//! Builds a small map of greetings, updates one, removes another and
//! prints the map after each step.

pub mod config;
pub mod error;
pub mod render;

use std::io::Write;

use listmap::map::{Entry, ListMap};

pub use config::{ConfigError, OutputFormat, ShowcaseConfig};
pub use error::ShowcaseError;

/// Runs the greeting scenario, rendering each stage to `writer`.
///
/// Returns the final map.
///
/// # Errors
///
/// Propagates the first map or output error.
pub fn run<W: Write>(writer: &mut W, format: OutputFormat) -> Result<ListMap<i32, String>, ShowcaseError> {
    let mut map = ListMap::new();
    map.add(1, "Hello".to_string())?;
    map.add(2, "world".to_string())?;
    map.add_entry(Entry::new(3, "Hey".to_string()))?;
    map.add_entry(Entry::new(4, "Space".to_string()))?;
    tracing::debug!(entries = map.count(), "map created");
    render::render_stage(writer, format, "Created map", &map)?;

    map.update(&2, "Beautiful World".to_string())?;
    tracing::debug!(entries = map.count(), "entry 2 updated");
    render::render_stage(writer, format, "Updated map", &map)?;

    map.remove(&4);
    tracing::debug!(entries = map.count(), "entry 4 removed");
    render::render_stage(writer, format, "Cleared map", &map)?;

    Ok(map)
}
