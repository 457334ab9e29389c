//! Goal Progress
//!
//! Percentage of the fundraising goal reached, as shown on the progress bar.

use serde::Deserialize;

/// Which bounds the percentage is clamped to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ClampPolicy {
    /// Cap at 100 only; a negative `raised` yields a negative percentage
    #[default]
    UpperOnly,
    /// Keep the percentage within 0..=100
    Both,
}

/// `round(raised / goal * 100)` clamped according to `policy`.
///
/// Rounding follows `Math.round` (halves go toward positive infinity).
/// A NaN ratio (zero raised of a zero goal) counts as 0.
pub fn percentage(goal: f64, raised: f64, policy: ClampPolicy) -> i64 {
    let ratio = raised / goal * 100.0;
    if ratio.is_nan() {
        return 0;
    }

    let mut pct = (ratio + 0.5).floor().min(100.0);
    if policy == ClampPolicy::Both {
        pct = pct.max(0.0);
    }
    // `as` saturates, so -inf lands on i64::MIN
    pct as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_quarter_of_goal() {
        assert_eq!(percentage(1000.0, 250.0, ClampPolicy::UpperOnly), 25);
    }

    #[test]
    fn test_rounding_matches_math_round() {
        assert_eq!(percentage(200.0, 1.0, ClampPolicy::UpperOnly), 1); // 0.5 -> 1
        assert_eq!(percentage(3.0, 1.0, ClampPolicy::UpperOnly), 33);
        assert_eq!(percentage(3.0, 2.0, ClampPolicy::UpperOnly), 67);
        assert_eq!(percentage(200.0, -1.0, ClampPolicy::UpperOnly), 0); // -0.5 -> 0
    }

    #[test]
    fn test_over_goal_is_capped() {
        assert_eq!(percentage(1000.0, 1000.0, ClampPolicy::UpperOnly), 100);
        assert_eq!(percentage(1000.0, 4200.0, ClampPolicy::UpperOnly), 100);
        assert_eq!(percentage(0.0, 10.0, ClampPolicy::UpperOnly), 100);
    }

    #[test]
    fn test_negative_raised_by_policy() {
        assert_eq!(percentage(1000.0, -250.0, ClampPolicy::UpperOnly), -25);
        assert_eq!(percentage(1000.0, -250.0, ClampPolicy::Both), 0);
    }

    #[test]
    fn test_zero_over_zero() {
        assert_eq!(percentage(0.0, 0.0, ClampPolicy::UpperOnly), 0);
    }

    proptest! {
        #[test]
        fn prop_within_goal_is_rounded_ratio(goal in 1u32..10_000_000, frac in 0.0f64..=1.0) {
            let goal = goal as f64;
            let raised = (goal * frac).floor();
            let pct = percentage(goal, raised, ClampPolicy::UpperOnly);
            prop_assert!((0..=100).contains(&pct));
            prop_assert_eq!(pct, (raised / goal * 100.0 + 0.5).floor() as i64);
        }

        #[test]
        fn prop_over_goal_is_exactly_100(goal in 1u32..10_000_000, extra in 1u32..10_000_000) {
            let goal = goal as f64;
            let raised = goal + extra as f64;
            prop_assert_eq!(percentage(goal, raised, ClampPolicy::UpperOnly), 100);
            prop_assert_eq!(percentage(goal, raised, ClampPolicy::Both), 100);
        }
    }
}
