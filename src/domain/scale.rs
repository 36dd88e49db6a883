// Scales: pure mappings from data values to positions and colors
use super::color::{Rgb, interpolate_rd_bu};
use super::variance::Extent;

/// Continuous linear map from `domain` onto `range`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// A zero-width domain maps everything to the middle of the range.
    pub fn apply(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        let t = if span != 0.0 { (value - d0) / span } else { 0.5 };
        r0 + t * (r1 - r0)
    }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks(self.domain.0, self.domain.1, count)
    }
}

/// Discrete map giving each domain entry an equal-width slice of the range.
///
/// No inner or outer padding: the bands tile the range exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale<T> {
    domain: Vec<T>,
    range: (f64, f64),
}

impl<T: PartialEq> BandScale<T> {
    pub fn new(domain: Vec<T>, range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    pub fn bandwidth(&self) -> f64 {
        if self.domain.is_empty() {
            return 0.0;
        }
        (self.range.1 - self.range.0) / self.domain.len() as f64
    }

    /// Start of the band owning `value`, `None` if it is not in the domain.
    pub fn apply(&self, value: &T) -> Option<f64> {
        let index = self.domain.iter().position(|d| d == value)?;
        Some(self.range.0 + self.bandwidth() * index as f64)
    }
}

/// Continuous map from a numeric domain onto `[0, 1]`, fed through an interpolator.
#[derive(Debug, Clone, Copy)]
pub struct SequentialScale {
    domain: (f64, f64),
    interpolator: fn(f64) -> Rgb,
}

impl SequentialScale {
    pub fn new(domain: (f64, f64), interpolator: fn(f64) -> Rgb) -> Self {
        Self {
            domain,
            interpolator,
        }
    }

    /// Red–blue diverging ramp, reversed so the top of the domain is red.
    pub fn warm_red(extent: Extent<f64>) -> Self {
        Self::new((extent.min, extent.max), reversed_rd_bu)
    }

    /// A zero-width domain maps everything to the middle of the ramp.
    pub fn normalize(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        if d0 == d1 {
            return 0.5;
        }
        (value - d0) / (d1 - d0)
    }

    pub fn apply(&self, value: f64) -> Rgb {
        (self.interpolator)(self.normalize(value))
    }
}

fn reversed_rd_bu(t: f64) -> Rgb {
    interpolate_rd_bu(1.0 - t)
}

/// Approximately `count` evenly spaced round values within `[start, stop]`.
///
/// Steps are 1, 2 or 5 times a power of ten.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let Some((i1, i2, inc)) = tick_spec(lo, hi, count as f64) else {
        return Vec::new();
    };
    if i2 < i1 {
        return Vec::new();
    }

    let mut values: Vec<f64> = (i1..=i2)
        .map(|i| {
            let i = i as f64;
            if inc < 0.0 { i / -inc } else { i * inc }
        })
        .collect();
    if reverse {
        values.reverse();
    }
    values
}

fn tick_spec(start: f64, stop: f64, count: f64) -> Option<(i64, i64, f64)> {
    let e10 = 50f64.sqrt();
    let e5 = 10f64.sqrt();
    let e2 = 2f64.sqrt();

    let step = (stop - start) / count;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= e10 {
        10.0
    } else if error >= e5 {
        5.0
    } else if error >= e2 {
        2.0
    } else {
        1.0
    };

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let k = 10f64.powf(-power) / factor;
        i1 = round_half_up(start * k);
        i2 = round_half_up(stop * k);
        if i1 / k < start {
            i1 += 1.0;
        }
        if i2 / k > stop {
            i2 -= 1.0;
        }
        inc = -k;
    } else {
        let k = 10f64.powf(power) * factor;
        i1 = round_half_up(start / k);
        i2 = round_half_up(stop / k);
        if i1 * k < start {
            i1 += 1.0;
        }
        if i2 * k > stop {
            i2 -= 1.0;
        }
        inc = k;
    }

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    if !i1.is_finite() || !i2.is_finite() {
        return None;
    }
    Some((i1 as i64, i2 as i64, inc))
}

fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::variance::Month;

    #[test]
    fn test_linear_scale_maps_endpoints() {
        let x = LinearScale::new((1753.0, 2015.0), (60.0, 1180.0));
        assert!((x.apply(1753.0) - 60.0).abs() < 1e-9);
        assert!((x.apply(2015.0) - 1180.0).abs() < 1e-9);
    }

    #[test]
    fn test_linear_scale_is_monotonic() {
        let x = LinearScale::new((1753.0, 2015.0), (60.0, 1180.0));
        let mut previous = f64::NEG_INFINITY;
        for year in 1753..=2015 {
            let position = x.apply(year as f64);
            assert!(position >= previous);
            assert_eq!(position, x.apply(year as f64));
            previous = position;
        }
    }

    #[test]
    fn test_linear_scale_degenerate_domain_uses_midpoint() {
        let x = LinearScale::new((2000.0, 2000.0), (60.0, 160.0));
        assert_eq!(x.apply(2000.0), 110.0);
    }

    #[test]
    fn test_band_scale_tiles_range() {
        let y = BandScale::new(Month::ALL.to_vec(), (60.0, 660.0));
        assert_eq!(y.bandwidth(), 50.0);

        let mut expected_start = 60.0;
        for month in Month::ALL {
            let start = y.apply(&month).unwrap();
            assert!((start - expected_start).abs() < 1e-9);
            expected_start = start + y.bandwidth();
        }
        assert!((expected_start - 660.0).abs() < 1e-9);
    }

    #[test]
    fn test_band_scale_unknown_value() {
        let y = BandScale::new(vec![Month::January, Month::February], (0.0, 10.0));
        assert_eq!(y.apply(&Month::March), None);
    }

    #[test]
    fn test_sequential_scale_is_warm_red() {
        let color = SequentialScale::warm_red(Extent { min: 7.16, max: 9.16 });

        assert_eq!(color.apply(7.16), Rgb::new(5, 48, 97));
        assert_eq!(color.apply(9.16), Rgb::new(103, 0, 31));
    }

    #[test]
    fn test_sequential_scale_degenerate_domain() {
        let color = SequentialScale::warm_red(Extent { min: 8.0, max: 8.0 });
        assert_eq!(color.normalize(8.0), 0.5);
        assert_eq!(color.apply(8.0), Rgb::new(242, 239, 238));
    }

    #[test]
    fn test_ticks_over_year_domain() {
        let values = ticks(1753.0, 2015.0, 10);
        let expected: Vec<f64> = (0..13).map(|i| 1760.0 + 20.0 * i as f64).collect();
        assert_eq!(values, expected);
    }

    #[test]
    fn test_ticks_small_steps() {
        assert_eq!(ticks(0.0, 1.0, 5), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    }

    #[test]
    fn test_ticks_edge_cases() {
        assert_eq!(ticks(2000.0, 2000.0, 10), vec![2000.0]);
        assert!(ticks(0.0, 10.0, 0).is_empty());
        assert_eq!(ticks(10.0, 0.0, 2), vec![10.0, 5.0, 0.0]);
    }
}
