//! Rendering of map stages.

use std::fmt::Display;
use std::io::Write;

use listmap::map::ListMap;
use serde::Serialize;

use crate::config::OutputFormat;
use crate::error::ShowcaseError;

#[derive(Serialize)]
struct Stage<'a, K, V> {
    title: &'a str,
    entries: &'a ListMap<K, V>,
}

/// Writes one titled stage of `map` to `writer`.
///
/// The text form looks up every key through [`ListMap::get`], so a key that
/// vanished between `keys()` and `get()` would surface as an error rather
/// than be skipped.
///
/// # Errors
///
/// Returns `ShowcaseError` if a lookup fails or the writer rejects output.
pub fn render_stage<W, K, V>(
    writer: &mut W,
    format: OutputFormat,
    title: &str,
    map: &ListMap<K, V>,
) -> Result<(), ShowcaseError>
where
    W: Write,
    K: Clone + PartialEq + std::fmt::Debug + Display + Serialize,
    V: Display + Serialize,
{
    match format {
        OutputFormat::Text => {
            writeln!(writer, "{title}: ")?;
            for key in map.keys() {
                let value = map.get(&key)?;
                writeln!(writer, "{key} - {value}")?;
            }
            writeln!(writer)?;
        }
        OutputFormat::Json => {
            serde_json::to_writer(
                &mut *writer,
                &Stage {
                    title,
                    entries: map,
                },
            )?;
            writeln!(writer)?;
        }
    }
    Ok(())
}
