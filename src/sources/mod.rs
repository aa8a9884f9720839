pub mod csv;
pub mod sqlite;

/// Tally of a bulk load: records inserted versus rows skipped, either because
/// the source could not produce a record from them or because their key was
/// already present.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: usize,
}
