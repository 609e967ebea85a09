/// Column value meaning "no column"; such cells render blank and are
/// never evaluated.
pub const BLANK_SENTINEL: u32 = 0;

/// Count clamps for the auto-generated target axis.
pub const TARGET_MIN_COLUMNS: usize = 10;
pub const TARGET_MAX_COLUMNS: usize = 30;

/// An axis sequence plus whether inverted bounds were normalized.
/// Callers use `swapped` to update displayed inputs; it is not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedRange {
    pub values: Vec<u32>,
    pub swapped: bool,
}

/// Generate the target-value axis: inclusive stepping from start to end,
/// right-padded with the blank sentinel up to `min_count`, truncated to
/// `max_count`. An increment of 0 is treated as 1.
pub fn generate_range(
    start: u32,
    end: u32,
    increment: u32,
    min_count: usize,
    max_count: usize,
) -> GeneratedRange {
    let step = increment.max(1);
    let swapped = start > end;
    let (lo, hi) = if swapped { (end, start) } else { (start, end) };

    // truncation keeps the first max_count elements; never collect the
    // raw range beyond that
    let mut values: Vec<u32> = (lo..=hi).step_by(step as usize).take(max_count).collect();
    if values.len() < min_count {
        values.resize(min_count, BLANK_SENTINEL);
    }
    values.truncate(max_count);

    GeneratedRange { values, swapped }
}

/// Generate the rank axis: same swap and increment rules, inclusive, no
/// count clamping (rank bounds are limited by the input layer).
pub fn generate_rank_axis(min: u32, max: u32, increment: u32) -> GeneratedRange {
    let step = increment.max(1);
    let swapped = min > max;
    let (lo, hi) = if swapped { (max, min) } else { (min, max) };

    GeneratedRange {
        values: (lo..=hi).step_by(step as usize).collect(),
        swapped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inclusive_range_without_clamping_needed() {
        let range = generate_range(80, 140, 5, 10, 30);
        assert!(!range.swapped);
        assert_eq!(range.values.len(), 13);
        assert_eq!(range.values.first(), Some(&80));
        assert_eq!(range.values.last(), Some(&140));
        for pair in range.values.windows(2) {
            assert_eq!(pair[1] - pair[0], 5);
        }
    }

    #[test]
    fn long_range_truncates_to_max_count() {
        let range = generate_range(10, 200, 1, 10, 20);
        assert_eq!(range.values, (10..30).collect::<Vec<u32>>());
    }

    #[test]
    fn huge_range_truncates_without_materializing() {
        let range = generate_range(10, u32::MAX, 1, 10, 30);
        assert_eq!(range.values, (10..40).collect::<Vec<u32>>());

        let inverted = generate_range(u32::MAX, 0, 1, 10, 30);
        assert!(inverted.swapped);
        assert_eq!(inverted.values, (0..30).collect::<Vec<u32>>());
    }

    #[test]
    fn short_range_pads_with_sentinel() {
        let range = generate_range(100, 110, 5, 5, 30);
        assert_eq!(range.values, vec![100, 105, 110, BLANK_SENTINEL, BLANK_SENTINEL]);
    }

    #[test]
    fn inverted_bounds_swap_and_report() {
        let range = generate_range(50, 10, 5, 5, 30);
        assert!(range.swapped);
        assert_eq!(range.values, vec![10, 15, 20, 25, 30, 35, 40, 45, 50]);
    }

    #[test]
    fn zero_increment_defaults_to_one() {
        let range = generate_range(10, 12, 0, 1, 30);
        assert_eq!(range.values, vec![10, 11, 12]);
    }

    #[test]
    fn single_element_when_start_equals_end() {
        let range = generate_range(90, 90, 5, 1, 30);
        assert_eq!(range.values, vec![90]);
        assert!(!range.swapped);
    }

    #[test]
    fn generated_length_always_within_count_clamps() {
        for start in (0..150).step_by(7) {
            for end in (0..150).step_by(11) {
                for increment in 0..6 {
                    let range = generate_range(start, end, increment, 10, 30);
                    assert!(range.values.len() >= 10);
                    assert!(range.values.len() <= 30);

                    let produced: Vec<u32> = range
                        .values
                        .iter()
                        .copied()
                        .filter(|v| *v != BLANK_SENTINEL)
                        .collect();
                    for pair in produced.windows(2) {
                        assert_eq!(pair[1] - pair[0], increment.max(1));
                    }
                    if start.min(end) != BLANK_SENTINEL {
                        if let Some(first) = produced.first() {
                            assert_eq!(*first, start.min(end));
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn rank_axis_has_no_count_clamping() {
        let range = generate_rank_axis(1, 100, 1);
        assert_eq!(range.values.len(), 100);

        let swapped = generate_rank_axis(100, 1, 10);
        assert!(swapped.swapped);
        assert_eq!(swapped.values, vec![1, 11, 21, 31, 41, 51, 61, 71, 81, 91]);
    }
}
