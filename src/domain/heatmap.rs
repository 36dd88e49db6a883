// Heatmap render model - the data-to-visual pipeline
use super::color::Rgb;
use super::format::fixed2;
use super::scale::{BandScale, LinearScale, SequentialScale};
use super::variance::{
    Extent, Month, VarianceRecord, actual_temperature, temperature_extent, year_extent,
};
use thiserror::Error;

pub const LEGEND_POINTS: usize = 6;
pub const LEGEND_SWATCH_WIDTH: f64 = 40.0;
pub const LEGEND_SWATCH_HEIGHT: f64 = 20.0;
pub const LEGEND_PITCH: f64 = 50.0;
pub const X_TICK_COUNT: usize = 10;

const TICK_SIZE: f64 = 6.0;
const TICK_PADDING: f64 = 3.0;
const AXIS_OFFSET: f64 = 0.5;

#[derive(Debug, Error, PartialEq)]
pub enum HeatmapError {
    #[error("at least one variance record is required to build a heatmap")]
    EmptyDataset,
    #[error("record for {year} has month {month}, expected 1-12")]
    MonthOutOfRange { year: i32, month: u8 },
}

/// Browser-like viewport the chart is laid out in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64, padding: f64) -> Self {
        Self {
            width,
            height,
            padding,
        }
    }

    /// Chart size: the viewport less page margins.
    pub fn chart_size(&self) -> (f64, f64) {
        (self.width - 40.0, self.height - 100.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Rgb,
    pub year: i32,
    pub month: Month,
    pub temperature: f64,
    pub variance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOrient {
    Bottom,
    Left,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    /// Position along the axis, half-pixel offset included.
    pub position: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub id: &'static str,
    pub orient: AxisOrient,
    pub translate: (f64, f64),
    pub range: (f64, f64),
    pub ticks: Vec<Tick>,
}

impl Axis {
    pub fn tick_size(&self) -> f64 {
        TICK_SIZE
    }

    /// Distance from the axis line to the tick label.
    pub fn label_offset(&self) -> f64 {
        TICK_SIZE + TICK_PADDING
    }

    /// Outline of the axis line including its end ticks.
    pub fn domain_path(&self) -> String {
        let r0 = self.range.0 + AXIS_OFFSET;
        let r1 = self.range.1 + AXIS_OFFSET;
        match self.orient {
            AxisOrient::Bottom => format!(
                "M{r0},{TICK_SIZE}V{AXIS_OFFSET}H{r1}V{TICK_SIZE}"
            ),
            AxisOrient::Left => {
                let k = -TICK_SIZE;
                format!("M{k},{r0}H{AXIS_OFFSET}V{r1}H{k}")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisTitle {
    pub text: &'static str,
    pub x: f64,
    pub y: f64,
    /// Rotation in degrees applied around the origin before placement.
    pub rotate: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub temperature: f64,
    pub fill: Rgb,
}

impl LegendEntry {
    pub fn label(&self) -> String {
        format!("{}°C", fixed2(self.temperature))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    pub translate: (f64, f64),
    pub entries: Vec<LegendEntry>,
}

impl Legend {
    pub fn swatch_x(index: usize) -> f64 {
        index as f64 * LEGEND_PITCH
    }

    pub fn label_position(index: usize) -> (f64, f64) {
        (Self::swatch_x(index) + LEGEND_SWATCH_WIDTH / 2.0, 35.0)
    }
}

/// Everything needed to draw the chart, produced in one pass.
#[derive(Debug, Clone)]
pub struct Heatmap {
    pub width: f64,
    pub height: f64,
    pub baseline: f64,
    pub years: Extent<i32>,
    pub temperatures: Extent<f64>,
    pub x_scale: LinearScale,
    pub y_scale: BandScale<Month>,
    pub color_scale: SequentialScale,
    pub cells: Vec<Cell>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub titles: Vec<AxisTitle>,
    pub legend: Legend,
}

impl Heatmap {
    pub fn build(
        records: &[VarianceRecord],
        baseline: f64,
        viewport: Viewport,
    ) -> Result<Self, HeatmapError> {
        let (width, height) = viewport.chart_size();
        let padding = viewport.padding;

        let years = year_extent(records).ok_or(HeatmapError::EmptyDataset)?;
        let temperatures =
            temperature_extent(baseline, records).ok_or(HeatmapError::EmptyDataset)?;

        let x_scale = LinearScale::new(
            (f64::from(years.min), f64::from(years.max)),
            (padding, width - padding),
        );
        let y_scale = BandScale::new(Month::ALL.to_vec(), (padding, height - padding));
        let color_scale = SequentialScale::warm_red(temperatures);

        let cell_width = (width - 2.0 * padding) / f64::from(years.max - years.min + 1);
        let cell_height = y_scale.bandwidth();

        let cells = records
            .iter()
            .map(|record| {
                let month = record
                    .month_name()
                    .ok_or(HeatmapError::MonthOutOfRange {
                        year: record.year,
                        month: record.month,
                    })?;
                let y = y_scale
                    .apply(&month)
                    .ok_or(HeatmapError::MonthOutOfRange {
                        year: record.year,
                        month: record.month,
                    })?;
                let temperature = actual_temperature(baseline, record);
                Ok(Cell {
                    x: x_scale.apply(f64::from(record.year)),
                    y,
                    width: cell_width,
                    height: cell_height,
                    fill: color_scale.apply(temperature),
                    year: record.year,
                    month,
                    temperature,
                    variance: record.variance,
                })
            })
            .collect::<Result<Vec<_>, HeatmapError>>()?;

        tracing::debug!(
            cells = cells.len(),
            first_year = years.min,
            last_year = years.max,
            min_temperature = temperatures.min,
            max_temperature = temperatures.max,
            "built heatmap cells"
        );

        let x_axis = Axis {
            id: "x-axis",
            orient: AxisOrient::Bottom,
            translate: (0.0, height - padding),
            range: x_scale.range(),
            ticks: x_scale
                .ticks(X_TICK_COUNT)
                .into_iter()
                .map(|value| Tick {
                    position: x_scale.apply(value) + AXIS_OFFSET,
                    label: format_year(value),
                })
                .collect(),
        };

        let band_center = (y_scale.bandwidth() - 2.0 * AXIS_OFFSET).max(0.0) / 2.0;
        let y_axis = Axis {
            id: "y-axis",
            orient: AxisOrient::Left,
            translate: (padding, 0.0),
            range: y_scale.range(),
            ticks: Month::ALL
                .iter()
                .filter_map(|month| {
                    let start = y_scale.apply(month)?;
                    Some(Tick {
                        position: start + band_center + AXIS_OFFSET,
                        label: month.name().to_string(),
                    })
                })
                .collect(),
        };

        let titles = vec![
            AxisTitle {
                text: "Years",
                x: width / 2.0,
                y: height - 20.0,
                rotate: None,
            },
            AxisTitle {
                text: "Months",
                x: -height / 2.0,
                y: 15.0,
                rotate: Some(-90.0),
            },
        ];

        let legend = Legend {
            translate: (
                (width - LEGEND_POINTS as f64 * LEGEND_PITCH) / 2.0,
                height - padding + 40.0,
            ),
            entries: legend_temperatures(temperatures, LEGEND_POINTS)
                .into_iter()
                .map(|temperature| LegendEntry {
                    temperature,
                    fill: color_scale.apply(temperature),
                })
                .collect(),
        };

        Ok(Self {
            width,
            height,
            baseline,
            years,
            temperatures,
            x_scale,
            y_scale,
            color_scale,
            cells,
            x_axis,
            y_axis,
            titles,
            legend,
        })
    }

    /// Actual temperature for a record, using this chart's baseline.
    pub fn temperature_of(&self, record: &VarianceRecord) -> f64 {
        actual_temperature(self.baseline, record)
    }

    pub fn color_of(&self, record: &VarianceRecord) -> Rgb {
        self.color_scale.apply(self.temperature_of(record))
    }
}

/// `points` evenly spaced samples from `extent.min` to `extent.max` inclusive.
pub fn legend_temperatures(extent: Extent<f64>, points: usize) -> Vec<f64> {
    if points < 2 {
        return vec![extent.min; points];
    }
    let step = (extent.max - extent.min) / (points - 1) as f64;
    (0..points)
        .map(|i| extent.min + i as f64 * step)
        .collect()
}

/// Integer tick label without grouping separators.
fn format_year(value: f64) -> String {
    format!("{}", value.round() as i64)
}
