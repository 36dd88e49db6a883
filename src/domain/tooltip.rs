// Hover tooltip - visible/hidden state driven by pointer events
use super::format::fixed2;
use super::heatmap::Cell;
use super::variance::Month;

/// Tooltip placement relative to the pointer, in pixels.
pub const POINTER_OFFSET: (f64, f64) = (10.0, -28.0);

#[derive(Debug, Clone, PartialEq)]
pub struct TooltipContent {
    pub year: i32,
    pub month: Month,
    pub temperature: f64,
    pub variance: f64,
}

impl TooltipContent {
    pub fn from_cell(cell: &Cell) -> Self {
        Self {
            year: cell.year,
            month: cell.month,
            temperature: cell.temperature,
            variance: cell.variance,
        }
    }

    pub fn lines(&self) -> [String; 3] {
        [
            format!("{} - {}", self.year, self.month),
            format!("{}°C", fixed2(self.temperature)),
            format!("{}°C", fixed2(self.variance)),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum TooltipState {
    #[default]
    Hidden,
    Visible {
        content: TooltipContent,
        left: f64,
        top: f64,
    },
}

impl TooltipState {
    /// Pointer entered `cell` at page coordinates `pointer`.
    ///
    /// Replaces whatever was shown before; there is no memory of earlier cells.
    pub fn hover(&mut self, cell: &Cell, pointer: (f64, f64)) {
        *self = TooltipState::Visible {
            content: TooltipContent::from_cell(cell),
            left: pointer.0 + POINTER_OFFSET.0,
            top: pointer.1 + POINTER_OFFSET.1,
        };
    }

    pub fn exit(&mut self) {
        *self = TooltipState::Hidden;
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, TooltipState::Visible { .. })
    }

    /// Year the tooltip is tagged with while visible.
    pub fn year(&self) -> Option<i32> {
        match self {
            TooltipState::Visible { content, .. } => Some(content.year),
            TooltipState::Hidden => None,
        }
    }
}
