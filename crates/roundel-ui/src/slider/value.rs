//! Integer range and the continuous position behind a slider value.

/// Inclusive integer bounds with `minimum < maximum` at all times.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "RangeRepr", into = "RangeRepr")
)]
pub struct SliderRange {
    minimum: i32,
    maximum: i32,
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RangeRepr {
    minimum: i32,
    maximum: i32,
}

#[cfg(feature = "serde")]
impl From<RangeRepr> for SliderRange {
    fn from(r: RangeRepr) -> Self {
        SliderRange::new(r.minimum, r.maximum)
    }
}

#[cfg(feature = "serde")]
impl From<SliderRange> for RangeRepr {
    fn from(r: SliderRange) -> Self {
        RangeRepr {
            minimum: r.minimum,
            maximum: r.maximum,
        }
    }
}

impl Default for SliderRange {
    fn default() -> Self {
        Self {
            minimum: 1,
            maximum: 10,
        }
    }
}

impl SliderRange {
    /// Takes both bounds when `minimum < maximum`; otherwise keeps
    /// `minimum` and places `maximum` one above it.
    pub fn new(minimum: i32, maximum: i32) -> Self {
        if minimum < maximum {
            Self { minimum, maximum }
        } else if minimum == i32::MAX {
            Self {
                minimum: i32::MAX - 1,
                maximum: i32::MAX,
            }
        } else {
            Self {
                minimum,
                maximum: minimum + 1,
            }
        }
    }

    pub fn minimum(&self) -> i32 {
        self.minimum
    }

    pub fn maximum(&self) -> i32 {
        self.maximum
    }

    /// A minimum at or above the maximum lands one below it.
    pub fn set_minimum(&mut self, minimum: i32) {
        self.minimum = if minimum >= self.maximum {
            self.maximum - 1
        } else {
            minimum
        };
    }

    /// A maximum at or below the minimum lands one above it.
    pub fn set_maximum(&mut self, maximum: i32) {
        self.maximum = if maximum <= self.minimum {
            self.minimum + 1
        } else {
            maximum
        };
    }

    pub fn clamp(&self, v: i32) -> i32 {
        v.clamp(self.minimum, self.maximum)
    }

    pub fn span(&self) -> f64 {
        self.maximum as f64 - self.minimum as f64
    }
}

/// The continuous position a drag produces, read back as a truncated
/// integer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueModel {
    range: SliderRange,
    position: f64,
}

impl Default for ValueModel {
    fn default() -> Self {
        Self::new(SliderRange::default(), 1)
    }
}

impl ValueModel {
    pub fn new(range: SliderRange, value: i32) -> Self {
        Self {
            range,
            position: range.clamp(value) as f64,
        }
    }

    pub fn range(&self) -> SliderRange {
        self.range
    }

    /// Truncates toward zero; always within the range.
    pub fn value(&self) -> i32 {
        self.position.trunc() as i32
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    /// Position along the range, 0 at the minimum and 1 at the maximum.
    pub fn ratio(&self) -> f32 {
        ((self.position - self.range.minimum as f64) / self.range.span()) as f32
    }

    /// Clamps `v` into the range first. Returns whether anything changed.
    pub fn set_value(&mut self, v: i32) -> bool {
        self.set_position(self.range.clamp(v) as f64)
    }

    pub fn set_position(&mut self, position: f64) -> bool {
        let position = position.clamp(self.range.minimum as f64, self.range.maximum as f64);
        let changed = position != self.position;
        self.position = position;
        changed
    }

    pub fn set_ratio(&mut self, ratio: f32) -> bool {
        let ratio = ratio.clamp(0.0, 1.0) as f64;
        self.set_position(self.range.minimum as f64 + ratio * self.range.span())
    }

    pub fn set_minimum(&mut self, minimum: i32) {
        self.range.set_minimum(minimum);
        self.set_position(self.position);
    }

    pub fn set_maximum(&mut self, maximum: i32) {
        self.range.set_maximum(maximum);
        self.set_position(self.position);
    }

    pub fn set_range(&mut self, range: SliderRange) {
        self.range = range;
        self.set_position(self.position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_clamps_on_every_mutation() {
        let mut r = SliderRange::default();
        r.set_minimum(10);
        assert_eq!((r.minimum(), r.maximum()), (9, 10));
        r.set_maximum(3);
        assert_eq!((r.minimum(), r.maximum()), (9, 10));
        r.set_maximum(i32::MIN);
        assert_eq!(r.maximum(), 10);

        assert_eq!(SliderRange::new(5, 5), SliderRange::new(5, 6));
        let top = SliderRange::new(i32::MAX, 0);
        assert!(top.minimum() < top.maximum());
        assert_eq!(top.maximum(), i32::MAX);
    }

    #[test]
    fn value_reads_back_clamped() {
        for (min, max) in [(1, 10), (-5, 5), (0, 1), (i32::MIN, i32::MAX)] {
            let mut m = ValueModel::new(SliderRange::new(min, max), min);
            for v in [i32::MIN, min, -1, 0, 3, max, i32::MAX] {
                m.set_value(v);
                assert_eq!(m.value(), v.clamp(min, max), "range {min}..={max}, v {v}");
            }
        }
    }

    #[test]
    fn continuous_position_truncates() {
        let mut m = ValueModel::default();
        m.set_position(7.9);
        assert_eq!(m.value(), 7);
        m.set_ratio(1.5);
        assert_eq!(m.value(), 10);
        m.set_ratio(-0.5);
        assert_eq!(m.value(), 1);
    }

    #[test]
    fn shrinking_range_pulls_position_in() {
        let mut m = ValueModel::new(SliderRange::new(0, 100), 80);
        m.set_maximum(50);
        assert_eq!(m.value(), 50);
        m.set_minimum(60);
        assert_eq!((m.range().minimum(), m.value()), (49, 50));
    }
}
