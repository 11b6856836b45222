//! Size accounting for one optimization call.

/// Byte-size statistics derived from a completed optimization.
///
/// Recomputed fresh from the two strings each call; never persisted. Note
/// that optimization does not guarantee a reduction: merging shrinks, but
/// the trailing `;` added per declaration can grow minimal inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OptimizationStats {
    /// Byte length of the input CSS.
    pub original_bytes: usize,
    /// Byte length of the optimized CSS.
    pub optimized_bytes: usize,
    /// Percentage reduction; negative when the output grew.
    pub reduction_percent: f64,
    /// Number of distinct used classes, when usage filtering ran.
    pub used_class_count: Option<usize>,
}

impl OptimizationStats {
    /// Computes statistics from the original and optimized strings.
    pub fn compute(original: &str, optimized: &str, used_class_count: Option<usize>) -> Self {
        let original_bytes = original.len();
        let optimized_bytes = optimized.len();
        let reduction_percent = if original_bytes == 0 {
            0.0
        } else {
            (original_bytes as f64 - optimized_bytes as f64) / original_bytes as f64 * 100.0
        };

        Self {
            original_bytes,
            optimized_bytes,
            reduction_percent,
            used_class_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn computed_from_the_two_strings() {
        let stats = OptimizationStats::compute("abcdefghij", "abcde", Some(3));
        assert_eq!(stats.original_bytes, 10);
        assert_eq!(stats.optimized_bytes, 5);
        assert_eq!(stats.reduction_percent, 50.0);
        assert_eq!(stats.used_class_count, Some(3));
    }

    #[test]
    fn growth_is_reported_as_negative_reduction() {
        let stats = OptimizationStats::compute("ab", "abcd", None);
        assert_eq!(stats.reduction_percent, -100.0);
    }

    #[test]
    fn empty_original_does_not_divide_by_zero() {
        let stats = OptimizationStats::compute("", "", None);
        assert_eq!(stats.reduction_percent, 0.0);
    }
}
