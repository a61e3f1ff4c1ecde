//! ID allocation for the in-memory stores.
//!
//! IDs are opaque numeric strings from a counter seeded past the initial
//! data, so repeated runs assign the same IDs in the same order.

/// One past the highest numeric ID, or 1 for an empty or non-numeric set.
pub(crate) fn next_id_after<'a>(ids: impl Iterator<Item = &'a str>) -> u64 {
    ids.filter_map(|id| id.parse::<u64>().ok())
        .max()
        .map_or(1, |max| max + 1)
}

#[cfg(test)]
mod id_tests {
    use super::next_id_after;

    #[test]
    fn next_id_continues_past_the_highest_numeric_id() {
        assert_eq!(next_id_after(["1", "3", "2"].into_iter()), 4);
    }

    #[test]
    fn next_id_starts_at_one_for_an_empty_set() {
        assert_eq!(next_id_after([].into_iter()), 1);
    }

    #[test]
    fn non_numeric_ids_are_ignored() {
        assert_eq!(next_id_after(["7", "TXN123"].into_iter()), 8);
    }
}
