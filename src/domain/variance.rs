// Monthly variance domain model
use serde::Deserialize;
use std::fmt;

/// Reference temperature (°C) the dataset's variances are measured against.
pub const DEFAULT_BASELINE_TEMPERATURE: f64 = 8.66;

/// One month of one year, as delivered by the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct VarianceRecord {
    pub year: i32,
    pub month: u8,
    pub variance: f64,
}

impl VarianceRecord {
    pub fn new(year: i32, month: u8, variance: f64) -> Self {
        Self {
            year,
            month,
            variance,
        }
    }

    pub fn month_name(&self) -> Option<Month> {
        Month::from_number(self.month)
    }
}

/// The fetched dataset. `base_temperature` is whatever the source advertised, if anything.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VarianceDataset {
    pub base_temperature: Option<f64>,
    pub records: Vec<VarianceRecord>,
}

/// The single place baseline and variance are combined.
pub fn actual_temperature(baseline: f64, record: &VarianceRecord) -> f64 {
    baseline + record.variance
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Calendar month number, 1 = January.
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1..=12 => Some(Self::ALL[usize::from(number) - 1]),
            _ => None,
        }
    }

    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    pub fn name(self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Inclusive `[min, max]` of a non-empty sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd + Copy> Extent<T> {
    /// Returns `None` for an empty iterator. Incomparable values (NaN) are skipped.
    pub fn of<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut extent: Option<Self> = None;
        for value in values {
            if value.partial_cmp(&value).is_none() {
                continue;
            }
            extent = Some(match extent {
                None => Self {
                    min: value,
                    max: value,
                },
                Some(e) => Self {
                    min: if value < e.min { value } else { e.min },
                    max: if value > e.max { value } else { e.max },
                },
            });
        }
        extent
    }
}

pub fn year_extent(records: &[VarianceRecord]) -> Option<Extent<i32>> {
    Extent::of(records.iter().map(|r| r.year))
}

pub fn temperature_extent(baseline: f64, records: &[VarianceRecord]) -> Option<Extent<f64>> {
    Extent::of(records.iter().map(|r| actual_temperature(baseline, r)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actual_temperature() {
        let cold = VarianceRecord::new(2000, 1, -1.5);
        let warm = VarianceRecord::new(2000, 2, 0.5);

        assert!((actual_temperature(DEFAULT_BASELINE_TEMPERATURE, &cold) - 7.16).abs() < 1e-9);
        assert!((actual_temperature(DEFAULT_BASELINE_TEMPERATURE, &warm) - 9.16).abs() < 1e-9);
    }

    #[test]
    fn test_month_numbers() {
        assert_eq!(Month::from_number(1), Some(Month::January));
        assert_eq!(Month::from_number(12), Some(Month::December));
        assert_eq!(Month::from_number(0), None);
        assert_eq!(Month::from_number(13), None);

        for (i, month) in Month::ALL.iter().enumerate() {
            assert_eq!(usize::from(month.number()), i + 1);
        }
        assert_eq!(Month::September.to_string(), "September");
    }

    #[test]
    fn test_extents() {
        let records = vec![
            VarianceRecord::new(1760, 3, 0.2),
            VarianceRecord::new(1753, 1, -1.366),
            VarianceRecord::new(2015, 9, 1.1),
        ];

        let years = year_extent(&records).unwrap();
        assert_eq!(years, Extent { min: 1753, max: 2015 });

        let temps = temperature_extent(8.66, &records).unwrap();
        assert!((temps.min - 7.294).abs() < 1e-9);
        assert!((temps.max - 9.76).abs() < 1e-9);
    }

    #[test]
    fn test_extent_of_empty_is_none() {
        assert!(year_extent(&[]).is_none());
        assert!(temperature_extent(8.66, &[]).is_none());
    }

    #[test]
    fn test_extent_skips_nan() {
        let extent = Extent::of(vec![f64::NAN, 2.0, -1.0]).unwrap();
        assert_eq!(extent.min, -1.0);
        assert_eq!(extent.max, 2.0);
    }
}
