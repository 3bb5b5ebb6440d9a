use crate::config::SourceSpec;
use crate::error::Result;

pub mod table_renderer;

/// Lazy sequence of fixed-width records from one source.
pub type Records<'a, const N: usize> = Box<dyn Iterator<Item = Result<[String; N]>> + 'a>;

/// Supplies validated field tuples for a record file.
///
/// Opening happens when `records` is called, so an unreadable source fails
/// immediately; rows are then produced on demand. Every call starts over from
/// the first data row.
pub trait RecordSource {
    fn records<const N: usize>(&self, spec: &SourceSpec) -> Result<Records<'_, N>>;
}
