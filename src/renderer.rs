//! # Tide Chart Renderer
//!
//! Renders a fetched tide event sequence onto a [`Surface`]: the smooth
//! tide curve with its filled area, a bottom time axis, guide lines and
//! labels for every high/low extremum, and a vertical current-time marker.
//!
//! The pipeline is a deterministic single pass with no error path of its
//! own: the caller guarantees a non-empty, well-formed event sequence
//! (check after fetching), and a failure in here is a programming error.
//!
//! The upstream feed supplies only times of day, so every event is
//! anchored to a concrete calendar day before it can be scaled. The anchor
//! day and "now" both come from the `now` argument rather than the system
//! clock, which keeps the output deterministic under test.

use crate::curve::{area_path, curve_path, Point};
use crate::scale::{format_hour_label, LinearScale, TimeScale};
use crate::surface::Surface;
use crate::{TideEvent, TideKind};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Clock format of the upstream time fields, e.g. `03:45 PM`.
pub const CLOCK_FORMAT: &str = "%I:%M %p";

/// Tick mark length below the axis, in pixels.
const TICK_SIZE: f32 = 4.0;

/// Chart margins in pixels.
#[derive(Clone, Copy, Debug)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Default for Margins {
    fn default() -> Self {
        Margins {
            top: 30.0,
            right: 25.0,
            bottom: 20.0,
            left: 25.0,
        }
    }
}

/// Resolve a bare time-of-day string to an instant on `day`.
///
/// The feed never supplies a date, so comparability across events comes
/// from pinning them all to the same synthetic day.
pub fn anchor_time(time: &str, day: NaiveDate) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveTime::parse_from_str(time.trim(), CLOCK_FORMAT).map(|t| day.and_time(t))
}

/// Render the tide chart for `events` onto `surface`.
///
/// Dimensions are read from the surface; `now` supplies both the calendar
/// day the time-of-day strings are anchored to and the position of the
/// current-time marker.
///
/// # Contract
/// `events` must be non-empty and carry parseable `%I:%M %p` time strings;
/// rendering an empty sequence is out of contract (the scale domains would
/// be undefined) and is the caller's responsibility to prevent.
pub fn render_tide_chart<S: Surface>(
    surface: &mut S,
    events: &[TideEvent],
    margins: Margins,
    now: NaiveDateTime,
) {
    debug_assert!(
        !events.is_empty(),
        "renderer requires a non-empty event sequence"
    );

    let day = now.date();
    let plotted: Vec<(NaiveDateTime, &TideEvent)> = events
        .iter()
        .map(|event| {
            let t = anchor_time(&event.time, day)
                .expect("fetched tide events carry %I:%M %p time strings");
            (t, event)
        })
        .collect();

    let width = surface.width();
    let height = surface.height();
    let bottom = height - margins.bottom;

    let (t_min, t_max) = plotted
        .iter()
        .fold((plotted[0].0, plotted[0].0), |(lo, hi), (t, _)| {
            (lo.min(*t), hi.max(*t))
        });
    let (h_min, h_max) = events
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), event| {
            (lo.min(event.height), hi.max(event.height))
        });

    let x = TimeScale::new((t_min, t_max), (margins.left, width - margins.right));
    // One unit of padding on each side; range inverted so height grows up.
    let y = LinearScale::new((h_min - 1.0, h_max + 1.0), (bottom, margins.top));

    // Curve and area
    let points: Vec<Point> = plotted
        .iter()
        .map(|(t, event)| Point {
            x: x.map(*t),
            y: y.map(event.height),
        })
        .collect();
    surface.path(&curve_path(&points), "tide-line");
    surface.path(&area_path(&points, bottom), "tide-area");

    // Bottom axis: ticks and labels only, no domain line
    for tick in x.ticks(5) {
        let px = x.map(tick);
        surface.line(px, bottom, px, bottom + TICK_SIZE, "tick");
        surface.text(px, bottom + TICK_SIZE + 10.0, "tick-label", &format_hour_label(tick));
    }

    // High/low extremum annotations; point-anchored, no collision avoidance
    for (t, event) in &plotted {
        let class = match event.kind {
            TideKind::High => "line-high",
            TideKind::Low => "line-low",
            TideKind::Other => continue,
        };
        let px = x.map(*t);
        let py = y.map(event.height);
        surface.line(px, py, px, bottom, class);
        surface.text(px, py - 10.0, "label-height", &format!("{}ft", event.height));
        surface.text(px, py - 22.0, "label-time", &t.format(CLOCK_FORMAT).to_string());
    }

    // Current-time marker: format and re-parse "now" through the feed's
    // clock convention so it lands on the same synthetic day.
    let now_label = now.format(CLOCK_FORMAT).to_string();
    let now_anchored =
        anchor_time(&now_label, day).expect("current time round-trips through the clock format");
    let px = x.map(now_anchored);
    surface.line(px, margins.top - 5.0, px, bottom + 5.0, "line-current");
}
