// Color values and the red-blue diverging ramp
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    fn from_channels(r: f64, g: f64, b: f64) -> Self {
        Self::new(clamp_channel(r), clamp_channel(g), clamp_channel(b))
    }
}

impl fmt::Display for Rgb {
    /// CSS form: `rgb(r, g, b)`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

fn clamp_channel(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    (value + 0.5).floor().clamp(0.0, 255.0) as u8
}

/// Red → white → blue, dark red at 0 and dark blue at 1.
const RD_BU: [Rgb; 11] = [
    Rgb::new(0x67, 0x00, 0x1f),
    Rgb::new(0xb2, 0x18, 0x2b),
    Rgb::new(0xd6, 0x60, 0x4d),
    Rgb::new(0xf4, 0xa5, 0x82),
    Rgb::new(0xfd, 0xdb, 0xc7),
    Rgb::new(0xf7, 0xf7, 0xf7),
    Rgb::new(0xd1, 0xe5, 0xf0),
    Rgb::new(0x92, 0xc5, 0xde),
    Rgb::new(0x43, 0x93, 0xc3),
    Rgb::new(0x21, 0x66, 0xac),
    Rgb::new(0x05, 0x30, 0x61),
];

/// Samples the red-blue scheme at `t`, clamped to `[0, 1]`.
pub fn interpolate_rd_bu(t: f64) -> Rgb {
    interpolate_basis(&RD_BU, t)
}

/// Uniform cubic B-spline through `stops`, evaluated per channel.
///
/// The curve passes exactly through the first and last stop.
pub fn interpolate_basis(stops: &[Rgb], t: f64) -> Rgb {
    match stops {
        [] => Rgb::new(0, 0, 0),
        [only] => *only,
        _ => {
            let channel = |pick: fn(&Rgb) -> u8| {
                let values: Vec<f64> = stops.iter().map(|c| f64::from(pick(c))).collect();
                basis_spline(&values, t)
            };
            Rgb::from_channels(channel(|c| c.r), channel(|c| c.g), channel(|c| c.b))
        }
    }
}

fn basis_spline(values: &[f64], t: f64) -> f64 {
    let n = values.len() - 1;
    let (t, i) = if t.is_nan() || t <= 0.0 {
        (0.0, 0)
    } else if t >= 1.0 {
        (1.0, n - 1)
    } else {
        (t, (t * n as f64).floor() as usize)
    };

    let v1 = values[i];
    let v2 = values[i + 1];
    let v0 = if i > 0 { values[i - 1] } else { 2.0 * v1 - v2 };
    let v3 = if i < n - 1 { values[i + 2] } else { 2.0 * v2 - v1 };

    basis((t - i as f64 / n as f64) * n as f64, v0, v1, v2, v3)
}

fn basis(t1: f64, v0: f64, v1: f64, v2: f64, v3: f64) -> f64 {
    let t2 = t1 * t1;
    let t3 = t2 * t1;
    ((1.0 - 3.0 * t1 + 3.0 * t2 - t3) * v0
        + (4.0 - 6.0 * t2 + 3.0 * t3) * v1
        + (1.0 + 3.0 * t1 + 3.0 * t2 - 3.0 * t3) * v2
        + t3 * v3)
        / 6.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ramp_endpoints() {
        assert_eq!(interpolate_rd_bu(0.0), Rgb::new(103, 0, 31));
        assert_eq!(interpolate_rd_bu(1.0), Rgb::new(5, 48, 97));
    }

    #[test]
    fn test_ramp_clamps_out_of_range() {
        assert_eq!(interpolate_rd_bu(-0.5), interpolate_rd_bu(0.0));
        assert_eq!(interpolate_rd_bu(1.5), interpolate_rd_bu(1.0));
        assert_eq!(interpolate_rd_bu(f64::NAN), interpolate_rd_bu(0.0));
    }

    #[test]
    fn test_ramp_midpoint_is_near_white() {
        assert_eq!(interpolate_rd_bu(0.5), Rgb::new(242, 239, 238));
    }

    #[test]
    fn test_ramp_moves_from_red_to_blue() {
        let red_side = interpolate_rd_bu(0.2);
        let blue_side = interpolate_rd_bu(0.8);
        assert!(red_side.r > red_side.b);
        assert!(blue_side.b > blue_side.r);
    }

    #[test]
    fn test_display() {
        assert_eq!(Rgb::new(5, 48, 97).to_string(), "rgb(5, 48, 97)");
    }

    #[test]
    fn test_interpolate_basis_single_stop() {
        let white = Rgb::new(255, 255, 255);
        assert_eq!(interpolate_basis(&[white], 0.3), white);
    }
}
