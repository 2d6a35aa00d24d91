//! Animated statistic counters
//!
//! Drives a displayed number from a start value to a target over a fixed
//! duration with ease-out-quad easing, sampled once per display frame. The
//! final sample is forced to exactly the target so rounding drift can never
//! leave a counter one frame short of its advertised value.

/// Duration of every stat counter animation
pub const COUNTER_DURATION_MS: f64 = 2000.0;

/// Delay between successive counters in a stats batch
pub const COUNTER_STAGGER_MS: u32 = 200;

/// Approximate display-frame interval for driver loops
pub const FRAME_INTERVAL_MS: u32 = 16;

/// Ease-out quadratic: `1 - (1 - t)^2`, with `t` clamped to `[0, 1]`.
pub fn ease_out_quad(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// A single counter animation from `start` to `end` over `duration_ms`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CounterAnimation {
    start: f64,
    end: f64,
    duration_ms: f64,
    decimal: bool,
}

impl CounterAnimation {
    pub fn new(start: f64, end: f64, duration_ms: f64, decimal: bool) -> Self {
        Self {
            start,
            end,
            duration_ms,
            decimal,
        }
    }

    /// Raw eased value at `elapsed_ms`. Descending animations
    /// (`end < start`) are valid and simply interpolate downwards.
    pub fn value_at(&self, elapsed_ms: f64) -> f64 {
        let progress = (elapsed_ms / self.duration_ms).clamp(0.0, 1.0);
        self.start + (self.end - self.start) * ease_out_quad(progress)
    }

    /// Whether the animation has run its full duration.
    pub fn is_complete(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.duration_ms
    }

    /// Displayed text at `elapsed_ms`: one fractional digit for decimal
    /// targets, floored integer otherwise. On completion the text is exactly
    /// the target value.
    pub fn display_at(&self, elapsed_ms: f64) -> String {
        let value = if self.is_complete(elapsed_ms) {
            self.end
        } else {
            self.value_at(elapsed_ms)
        };
        if self.decimal {
            format!("{value:.1}")
        } else {
            format!("{}", value.floor() as i64)
        }
    }
}

/// Target parsed from a stat element's `data-target` attribute.
///
/// A non-zero fractional part selects one-decimal display; whole-number
/// targets render as integers. This attribute is the markup contract between
/// the stats section and the counter driver.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StatTarget {
    pub value: f64,
    pub decimal: bool,
}

impl StatTarget {
    /// Parse a `data-target` attribute value. Returns `None` for anything
    /// that is not a finite number.
    pub fn parse(attr: &str) -> Option<Self> {
        let value: f64 = attr.trim().parse().ok()?;
        if !value.is_finite() {
            return None;
        }
        Some(Self {
            value,
            decimal: value.fract() != 0.0,
        })
    }

    /// Counter animation from zero to this target.
    pub fn animation(&self) -> CounterAnimation {
        CounterAnimation::new(0.0, self.value, COUNTER_DURATION_MS, self.decimal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_endpoints() {
        assert_eq!(ease_out_quad(0.0), 0.0);
        assert_eq!(ease_out_quad(1.0), 1.0);
    }

    #[test]
    fn test_easing_clamps_out_of_range_input() {
        assert_eq!(ease_out_quad(-0.5), 0.0);
        assert_eq!(ease_out_quad(1.5), 1.0);
    }

    #[test]
    fn test_easing_is_monotone_non_decreasing() {
        let mut previous = ease_out_quad(0.0);
        for i in 1..=100 {
            let current = ease_out_quad(f64::from(i) / 100.0);
            assert!(
                current >= previous,
                "eased output decreased at t={}",
                f64::from(i) / 100.0
            );
            previous = current;
        }
    }

    #[test]
    fn test_integer_counter_ends_exactly_on_target() {
        let anim = CounterAnimation::new(0.0, 500.0, 2000.0, false);

        assert_eq!(anim.display_at(0.0), "0");
        assert_eq!(anim.display_at(2000.0), "500");
        // Well past completion stays pinned.
        assert_eq!(anim.display_at(10_000.0), "500");
    }

    #[test]
    fn test_decimal_counter_ends_exactly_on_target() {
        let anim = CounterAnimation::new(0.0, 99.5, 2000.0, true);

        assert_eq!(anim.display_at(2000.0), "99.5");
        assert_eq!(anim.display_at(2001.0), "99.5");
    }

    #[test]
    fn test_decimal_display_has_one_fractional_digit() {
        let anim = CounterAnimation::new(0.0, 99.5, 2000.0, true);
        let halfway = anim.display_at(1000.0);

        let (_, frac) = halfway.split_once('.').expect("one fractional digit");
        assert_eq!(frac.len(), 1);
    }

    #[test]
    fn test_integer_display_floors_intermediate_values() {
        let anim = CounterAnimation::new(0.0, 500.0, 2000.0, false);
        let halfway = anim.display_at(1000.0);

        assert!(!halfway.contains('.'));
        // ease_out_quad(0.5) = 0.75 -> 375
        assert_eq!(halfway, "375");
    }

    #[test]
    fn test_descending_animation_is_valid() {
        let anim = CounterAnimation::new(100.0, 20.0, 1000.0, false);

        assert_eq!(anim.display_at(0.0), "100");
        assert!(anim.value_at(500.0) < 100.0);
        assert_eq!(anim.display_at(1000.0), "20");
    }

    #[test]
    fn test_stat_target_parse_integer() {
        let target = StatTarget::parse("500").unwrap();
        assert_eq!(target.value, 500.0);
        assert!(!target.decimal);
    }

    #[test]
    fn test_stat_target_parse_decimal() {
        let target = StatTarget::parse("99.5").unwrap();
        assert_eq!(target.value, 99.5);
        assert!(target.decimal);
    }

    #[test]
    fn test_stat_target_whole_valued_decimal_renders_as_integer() {
        // "99.0" carries no fractional value, so it displays floored.
        let target = StatTarget::parse("99.0").unwrap();
        assert!(!target.decimal);
    }

    #[test]
    fn test_stat_target_rejects_garbage() {
        assert!(StatTarget::parse("").is_none());
        assert!(StatTarget::parse("fast").is_none());
        assert!(StatTarget::parse("NaN").is_none());
    }
}
