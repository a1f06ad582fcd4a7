//! What the control surface hands to a renderer after each recomputation.

use std::fmt;
use ts_core::Real;
use ts_engine::{SequencePair, SequenceParams, Variant};

/// Consumer of computed series (plot, table, ...).
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame);
}

/// Which of the two series a point belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeriesKind {
    Dirty,
    Clean,
}

impl SeriesKind {
    pub const ALL: [SeriesKind; 2] = [SeriesKind::Dirty, SeriesKind::Clean];

    /// Legend entry.
    pub fn legend(self) -> &'static str {
        match self {
            SeriesKind::Dirty => "Dirty-water volume (morning of day t)",
            SeriesKind::Clean => "Clean-water volume (afternoon of day t)",
        }
    }

    /// Short name shown in hover tooltips.
    pub fn name(self) -> &'static str {
        match self {
            SeriesKind::Dirty => "Dirty water",
            SeriesKind::Clean => "Clean water",
        }
    }
}

/// `(t, dirty, clean)` triple plus the display extents.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub variant: Variant,
    pub days: Vec<usize>,
    pub dirty: Vec<Real>,
    pub clean: Vec<Real>,
    /// Horizontal extent `[0, Nmax]`.
    pub x_extent: (Real, Real),
    /// Vertical extent `[0, V]`.
    pub y_extent: (Real, Real),
}

impl RenderFrame {
    pub fn new(variant: Variant, params: &SequenceParams, pair: SequencePair) -> Self {
        let days = pair.days();
        Self {
            variant,
            days,
            dirty: pair.dirty,
            clean: pair.clean,
            x_extent: (0.0, params.n_max as Real),
            y_extent: (0.0, params.capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn series(&self, kind: SeriesKind) -> &[Real] {
        match kind {
            SeriesKind::Dirty => &self.dirty,
            SeriesKind::Clean => &self.clean,
        }
    }

    /// `[day, value]` pairs of one series.
    pub fn points(&self, kind: SeriesKind) -> Vec<[f64; 2]> {
        self.days
            .iter()
            .zip(self.series(kind))
            .map(|(&day, &value)| [day as f64, value])
            .collect()
    }

    pub fn value_at(&self, kind: SeriesKind, day: usize) -> Option<Real> {
        self.series(kind).get(day).copied()
    }

    /// Point closest to a cursor position: nearest day, then the series
    /// whose value on that day is closest to `y`.
    ///
    /// `radius` is a fraction of the plot extents; the point is dropped when
    /// the cursor is farther than that from it.
    pub fn hover(&self, x: f64, y: f64, radius: f64) -> Option<HoverInfo> {
        if self.is_empty() || !x.is_finite() || !y.is_finite() {
            return None;
        }
        let last = (self.len() - 1) as f64;
        let day = x.round().clamp(0.0, last) as usize;
        let dirty = self.dirty[day];
        let clean = self.clean[day];
        let (series, value) = if (dirty - y).abs() <= (clean - y).abs() {
            (SeriesKind::Dirty, dirty)
        } else {
            (SeriesKind::Clean, clean)
        };

        let x_span = (self.x_extent.1 - self.x_extent.0).max(f64::EPSILON);
        let y_span = (self.y_extent.1 - self.y_extent.0).max(f64::EPSILON);
        let dx = (x - day as f64) / x_span;
        let dy = (y - value) / y_span;
        if dx.hypot(dy) > radius {
            return None;
        }
        Some(HoverInfo { day, value, series })
    }
}

/// Tooltip content for one point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverInfo {
    pub day: usize,
    pub value: Real,
    pub series: SeriesKind,
}

impl fmt::Display for HoverInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Day: {}", self.day)?;
        writeln!(f, "Volume: {}", format_volume(self.value))?;
        write!(f, "Series: {}", self.series.name())
    }
}

/// Three decimals with a thousands separator, e.g. `1,234.500`.
pub fn format_volume(value: Real) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "000"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        "-"
    } else {
        ""
    };
    format!("{sign}{grouped}.{frac_part}")
}
