/// Number of tags to exercise for the given coverage percentage.
///
/// The product is truncated toward zero: 33% of 10 tags tests 3 of them.
pub(crate) fn sample_count(percent_cover: f64, tag_count: usize) -> usize {
    (percent_cover * tag_count as f64 / 100.0) as usize
}
