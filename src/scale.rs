//! Coordinate scales for the tide chart.
//!
//! A scale is a deterministic mapping from a data domain (time or tide
//! height) to a pixel range on the drawing surface. The vertical axis of a
//! surface grows downward, so the vertical scale is built with an inverted
//! range (`range.0 > range.1`) rather than special-casing the math here.
//!
//! [`TimeScale`] also generates the bottom-axis ticks: roughly the
//! requested number of hour-aligned instants with friendly labels
//! (`9am`, `3pm`, and the one special case `Noon`).

use chrono::{Duration, NaiveDateTime, NaiveTime};

/// Candidate tick steps in minutes, smallest first.
const TICK_STEPS_MINUTES: [i64; 8] = [15, 30, 60, 120, 180, 360, 720, 1440];

/// Linear mapping from a numeric domain to a pixel range.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    domain: (f32, f32),
    range: (f32, f32),
}

impl LinearScale {
    pub fn new(domain: (f32, f32), range: (f32, f32)) -> Self {
        LinearScale { domain, range }
    }

    /// Map a domain value to pixel space.
    ///
    /// A degenerate domain (min == max) maps everything to the middle of
    /// the range instead of dividing by zero.
    pub fn map(&self, value: f32) -> f32 {
        let span = self.domain.1 - self.domain.0;
        if span == 0.0 {
            return (self.range.0 + self.range.1) / 2.0;
        }
        let normalized = (value - self.domain.0) / span;
        self.range.0 + normalized * (self.range.1 - self.range.0)
    }

    pub fn domain(&self) -> (f32, f32) {
        self.domain
    }
}

/// Linear mapping from a time domain to a pixel range.
#[derive(Clone, Copy, Debug)]
pub struct TimeScale {
    domain: (NaiveDateTime, NaiveDateTime),
    range: (f32, f32),
}

impl TimeScale {
    pub fn new(domain: (NaiveDateTime, NaiveDateTime), range: (f32, f32)) -> Self {
        TimeScale { domain, range }
    }

    /// Map an instant to pixel space. Degenerate domains map to the middle
    /// of the range, same as [`LinearScale::map`].
    pub fn map(&self, value: NaiveDateTime) -> f32 {
        let span = (self.domain.1 - self.domain.0).num_seconds();
        if span == 0 {
            return (self.range.0 + self.range.1) / 2.0;
        }
        let offset = (value - self.domain.0).num_seconds() as f32;
        self.range.0 + offset / span as f32 * (self.range.1 - self.range.0)
    }

    /// Generate approximately `count` ticks across the domain.
    ///
    /// The step is the smallest nice interval (15m up to 24h) that yields
    /// at most `count` ticks, and ticks land on whole multiples of the step
    /// counted from midnight of the domain's first day, so labels always
    /// fall on clean clock times.
    pub fn ticks(&self, count: usize) -> Vec<NaiveDateTime> {
        let span_minutes = (self.domain.1 - self.domain.0).num_minutes();
        if span_minutes <= 0 {
            return vec![self.domain.0];
        }

        let target = span_minutes / count.max(1) as i64;
        let step = *TICK_STEPS_MINUTES
            .iter()
            .find(|s| **s >= target)
            .unwrap_or(&TICK_STEPS_MINUTES[TICK_STEPS_MINUTES.len() - 1]);

        let midnight = self.domain.0.date().and_time(NaiveTime::MIN);
        let start_offset = (self.domain.0 - midnight).num_minutes();
        let first_multiple = (start_offset + step - 1) / step;

        let mut ticks = Vec::new();
        let mut tick = midnight + Duration::minutes(first_multiple * step);
        while tick <= self.domain.1 {
            ticks.push(tick);
            tick += Duration::minutes(step);
        }
        ticks
    }
}

/// Format a tick instant as an axis label.
///
/// Hour of day with a lowercase am/pm suffix and no leading zero (`9am`,
/// `3pm`). Noon gets the literal word `Noon`; midnight stays `12am`.
pub fn format_hour_label(tick: NaiveDateTime) -> String {
    let label = tick.format("%-I%P").to_string();
    if label == "12pm" {
        "Noon".to_string()
    } else {
        label
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn linear_scale_maps_endpoints_and_midpoint() {
        let scale = LinearScale::new((0.0, 10.0), (100.0, 200.0));
        assert_eq!(scale.map(0.0), 100.0);
        assert_eq!(scale.map(10.0), 200.0);
        assert_eq!(scale.map(5.0), 150.0);
    }

    #[test]
    fn linear_scale_supports_inverted_range() {
        // Vertical scale: larger heights map to smaller y.
        let scale = LinearScale::new((0.0, 4.0), (280.0, 30.0));
        assert_eq!(scale.map(0.0), 280.0);
        assert_eq!(scale.map(4.0), 30.0);
        assert!(scale.map(3.0) < scale.map(1.0));
    }

    #[test]
    fn degenerate_domain_maps_to_range_middle() {
        let scale = LinearScale::new((2.0, 2.0), (0.0, 100.0));
        assert_eq!(scale.map(2.0), 50.0);
        assert_eq!(scale.map(7.0), 50.0);

        let time = TimeScale::new((at(8, 0), at(8, 0)), (25.0, 375.0));
        assert_eq!(time.map(at(8, 0)), 200.0);
    }

    #[test]
    fn time_scale_is_linear_in_seconds() {
        let scale = TimeScale::new((at(6, 0), at(18, 0)), (0.0, 120.0));
        assert_eq!(scale.map(at(6, 0)), 0.0);
        assert_eq!(scale.map(at(18, 0)), 120.0);
        assert_eq!(scale.map(at(12, 0)), 60.0);
        assert_eq!(scale.map(at(9, 0)), 30.0);
    }

    #[test]
    fn ticks_are_hour_aligned_and_bounded() {
        // 08:12 -> 21:03 spans 771 minutes; a 3-hour step gives 5 ticks.
        let scale = TimeScale::new((at(8, 12), at(21, 3)), (0.0, 100.0));
        let ticks = scale.ticks(5);
        assert_eq!(
            ticks,
            vec![at(9, 0), at(12, 0), at(15, 0), at(18, 0), at(21, 0)]
        );
    }

    #[test]
    fn full_day_domain_uses_six_hour_step() {
        let scale = TimeScale::new((at(0, 0), at(23, 30)), (0.0, 100.0));
        let ticks = scale.ticks(5);
        assert_eq!(ticks, vec![at(0, 0), at(6, 0), at(12, 0), at(18, 0)]);
    }

    #[test]
    fn hour_labels_use_lowercase_suffix_without_leading_zero() {
        assert_eq!(format_hour_label(at(9, 0)), "9am");
        assert_eq!(format_hour_label(at(15, 0)), "3pm");
        assert_eq!(format_hour_label(at(21, 0)), "9pm");
    }

    #[test]
    fn noon_is_special_cased_but_midnight_is_not() {
        assert_eq!(format_hour_label(at(12, 0)), "Noon");
        assert_eq!(format_hour_label(at(0, 0)), "12am");
    }
}
