//! # NOAA Tide Data Fetching
//!
//! This module handles the single network operation in the application:
//! fetching tide predictions from NOAA's station tide info endpoint.
//!
//! ## Data Source
//!
//! - **URL**: https://tidesandcurrents.noaa.gov/cgi-bin/stationtideinfo.cgi
//! - **Station**: 8418150 (Portland, ME) by default - configurable
//! - **Format**: UTF-8 text, one record per line, pipe-separated fields:
//!   `time|height|kind` (e.g. `08:12 AM|2.87|high`)
//! - **Trailing record**: the endpoint always appends one final line
//!   describing the *next* upcoming tide. It is not part of the day's
//!   series and is dropped before parsing.
//!
//! ## Error Handling
//!
//! Failures are handled at this boundary and never re-raised upward:
//! network errors, non-2xx statuses, and malformed records all collapse to
//! an empty event sequence after being logged to stderr. Callers must treat
//! an empty result as "no data available", not as a distinguishable error.
//! Internally the pipeline is `Result`-typed ([`TideError`]) so the failure
//! modes stay observable in tests.

use crate::{TideEvent, TideKind};
use thiserror::Error;

/// Errors that can occur while fetching and parsing tide predictions.
#[derive(Error, Debug)]
pub enum TideError {
    /// HTTP request failed (network, protocol, or non-2xx status)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A record did not have the expected `time|height|kind` shape
    #[error("malformed tide record: {0:?}")]
    Malformed(String),

    /// The height field of a record was not a number
    #[error("invalid height in tide record {line:?}: {source}")]
    Height {
        line: String,
        source: std::num::ParseFloatError,
    },
}

const BASE_URL: &str = "https://tidesandcurrents.noaa.gov/cgi-bin/stationtideinfo.cgi";

/// Query parameters for the tide prediction endpoint.
///
/// Every field has a default matching the upstream station contract, so
/// `TideFetchOptions::default()` is a complete, working query. Override any
/// subset via struct update syntax:
///
/// ```
/// use tide_chart_lib::tide_data::TideFetchOptions;
///
/// let options = TideFetchOptions {
///     station_id: "8443970".to_string(),
///     ..TideFetchOptions::default()
/// };
/// assert_eq!(options.datum, "MLLW");
/// ```
#[derive(Clone, Debug)]
pub struct TideFetchOptions {
    /// NOAA station identifier
    pub station_id: String,
    /// Vertical datum heights are measured against
    pub datum: String,
    /// Timezone convention (local standard/daylight time)
    pub timezone: String,
    /// Unit system for heights
    pub units: String,
    /// Clock format of the time fields (12-hour)
    pub clock: String,
    /// Decimal places in the height fields
    pub decimal_places: u8,
}

impl Default for TideFetchOptions {
    fn default() -> Self {
        TideFetchOptions {
            station_id: "8418150".to_string(),
            datum: "MLLW".to_string(),
            timezone: "LST_LDT".to_string(),
            units: "english".to_string(),
            clock: "12hour".to_string(),
            decimal_places: 2,
        }
    }
}

/// Fetch tide predictions for the configured station.
///
/// This is the public boundary of the fetcher: it never fails. Any error in
/// the pipeline (network, HTTP status, parse) is logged to stderr and
/// collapsed into an empty vector. Ownership of the returned sequence
/// transfers to the caller; the order of events matches the source.
pub async fn fetch_tides(options: &TideFetchOptions) -> Vec<TideEvent> {
    fetch_tides_from(BASE_URL, options).await
}

/// [`fetch_tides`] with an injectable endpoint so tests can point the
/// degradation boundary at a local listener.
async fn fetch_tides_from(base_url: &str, options: &TideFetchOptions) -> Vec<TideEvent> {
    match fetch_tides_inner(base_url, options).await {
        Ok(events) => events,
        Err(error) => {
            eprintln!("Tide data fetch failed: {error}");
            Vec::new()
        }
    }
}

/// `Result`-typed fetch pipeline behind [`fetch_tides`].
async fn fetch_tides_inner(
    base_url: &str,
    options: &TideFetchOptions,
) -> Result<Vec<TideEvent>, TideError> {
    let url = request_url_at(base_url, options);
    let response = reqwest::get(&url).await?.error_for_status()?;
    let body = response.text().await?;
    parse_events(&body)
}

/// Build the query URL from the options.
///
/// Parameter names (including the `Stationid` capitalization) follow the
/// endpoint exactly.
pub fn request_url(options: &TideFetchOptions) -> String {
    request_url_at(BASE_URL, options)
}

fn request_url_at(base_url: &str, options: &TideFetchOptions) -> String {
    format!(
        "{base_url}?Stationid={}&datum={}&timezone={}&units={}&clock={}&decimalPlaces={}",
        options.station_id,
        options.datum,
        options.timezone,
        options.units,
        options.clock,
        options.decimal_places,
    )
}

/// Parse a response body into tide events.
///
/// Blank lines are discarded, then the last remaining line is dropped
/// unconditionally: the endpoint's fixed convention is that the final
/// record is a forward-looking "next tide" summary, not part of the series.
/// The removal is positional rather than content-based to match the
/// upstream contract; if the endpoint ever omits the summary line this
/// would silently drop a real record, which is a known, accepted risk.
///
/// Each remaining line must be `time|height|kind`. A single malformed line
/// fails the whole parse; there is no partial-success contract.
pub fn parse_events(body: &str) -> Result<Vec<TideEvent>, TideError> {
    let mut lines: Vec<&str> = body.lines().filter(|l| !l.trim().is_empty()).collect();
    lines.pop();

    let mut events = Vec::with_capacity(lines.len());
    for line in lines {
        // First three pipe fields; anything after the third is ignored,
        // matching the upstream grammar's tolerance.
        let mut fields = line.split('|');
        let (time, height, kind) = match (fields.next(), fields.next(), fields.next()) {
            (Some(t), Some(h), Some(k)) => (t, h, k),
            _ => return Err(TideError::Malformed(line.to_string())),
        };
        let height: f32 = height.trim().parse().map_err(|source| TideError::Height {
            line: line.to_string(),
            source,
        })?;
        events.push(TideEvent {
            time: time.to_string(),
            height,
            kind: TideKind::from_label(kind.trim()),
        });
    }
    Ok(events)
}
