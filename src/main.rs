//! # Tide Chart Application Entry Point
//!
//! Fetches tide predictions for the configured station and renders them as
//! an SVG tide chart, written to `--out <path>`, the configured output
//! path, or stdout.

// Test modules
#[cfg(test)]
mod tests;

use chrono::Local;
use std::{env, fs};
use tide_chart_lib::config::Config;
use tide_chart_lib::renderer::render_tide_chart;
use tide_chart_lib::surface::SvgSurface;
use tide_chart_lib::tide_data::fetch_tides;

/// Resolve the output path from `--out <path>`, if given.
fn out_arg() -> Option<String> {
    let mut args = env::args();
    while let Some(arg) = args.next() {
        if arg == "--out" {
            return args.next();
        }
    }
    None
}

fn main() -> anyhow::Result<()> {
    let config = Config::load();

    // The fetch is the only async suspension point; run it to completion
    // before any rendering starts.
    let rt = tokio::runtime::Runtime::new()?;
    let options = config.station.fetch_options();
    let events = rt.block_on(fetch_tides(&options));

    // The renderer requires a non-empty sequence; an empty fetch result
    // means "no data available" and yields no chart.
    if events.is_empty() {
        eprintln!(
            "No tide data available for station {}; nothing to render",
            options.station_id
        );
        return Ok(());
    }

    let mut surface = SvgSurface::new(config.chart.width, config.chart.height);
    render_tide_chart(
        &mut surface,
        &events,
        config.chart.margins(),
        Local::now().naive_local(),
    );
    let svg = surface.finish();

    match out_arg().or(config.chart.output) {
        Some(path) => fs::write(&path, svg)?,
        None => print!("{svg}"),
    }

    Ok(())
}
