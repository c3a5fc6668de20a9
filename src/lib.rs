//! # Tide Chart Core Library
//!
//! This library fetches tide predictions from NOAA's station tide info
//! endpoint and renders them as an annotated time-series chart. It is split
//! into two halves that data flows through exactly once:
//!
//! 1. **Fetch** ([`tide_data`]): one HTTP request, tolerant pipe-delimited
//!    parsing, degradation to an empty sequence on any failure.
//! 2. **Render** ([`renderer`]): scale construction, Catmull-Rom curve and
//!    filled area, a bottom time axis with friendly hour labels, high/low
//!    extremum annotations, and a current-time marker.
//!
//! ## Data Flow
//!
//! ```text
//! NOAA endpoint --(pipe-delimited text)--> Vec<TideEvent>
//!              --(anchor to today, scale, draw)--> Surface (SVG)
//! ```
//!
//! The renderer draws through the [`surface::Surface`] trait rather than a
//! concrete graphics stack, so the layout and annotation logic is testable
//! with a recording backend and the shipped [`surface::SvgSurface`] is just
//! one implementation.
//!
//! ## Core Types
//!
//! - [`TideEvent`]: one predicted tide sample or extremum
//! - [`TideKind`]: classification of an event (`High`, `Low`, or other)

pub mod config;
pub mod curve;
pub mod renderer;
pub mod scale;
pub mod surface;
pub mod tide_data;

/// A single tide prediction as reported by the upstream endpoint.
///
/// The `time` field is a bare time-of-day string in the source's 12-hour
/// clock format (e.g. `"03:45 PM"`); it carries no date. The renderer
/// anchors it to a concrete calendar day via
/// [`renderer::anchor_time`] — the fetcher never resolves it.
///
/// # Example
/// ```
/// use tide_chart_lib::{TideEvent, TideKind};
///
/// let high = TideEvent {
///     time: "08:12 AM".to_string(),
///     height: 2.87,
///     kind: TideKind::High,
/// };
/// assert_eq!(high.kind, TideKind::High);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct TideEvent {
    /// Time of day in the source clock format (`%I:%M %p`)
    pub time: String,
    /// Tide height in the configured unit system (feet by default)
    pub height: f32,
    /// Whether this is a high tide, low tide, or something else
    pub kind: TideKind,
}

/// Classification of a tide event.
///
/// Only `High` and `Low` events receive guide lines and labels on the
/// chart; anything else from the upstream feed is carried through as
/// `Other` and plotted on the curve without annotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TideKind {
    High,
    Low,
    Other,
}

impl TideKind {
    /// Parse the trimmed kind field from the upstream record.
    pub fn from_label(label: &str) -> Self {
        match label {
            "high" => TideKind::High,
            "low" => TideKind::Low,
            _ => TideKind::Other,
        }
    }

    /// True for the kinds that get extremum annotations.
    pub fn is_extremum(self) -> bool {
        matches!(self, TideKind::High | TideKind::Low)
    }
}
