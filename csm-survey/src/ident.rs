//! Identifier assignment over the current in-memory set.

/// Next id for a new record: one more than the current maximum, or 1 when the
/// set is empty.
///
/// Pure and side-effect-free. The caller must insert the record with the
/// returned id before allocating again; in a multi-threaded host the
/// allocate-plus-insert sequence must be one mutual-exclusion region.
pub fn next_id(existing: impl IntoIterator<Item = u32>) -> u32 {
    existing.into_iter().max().map_or(1, |max| max + 1)
}
