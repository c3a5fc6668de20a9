//! Rendering backend seam.
//!
//! The renderer draws through [`Surface`] instead of a concrete graphics
//! library: a surface reports its dimensions and accepts path, line, and
//! text primitives tagged with a style class. [`SvgSurface`] is the shipped
//! backend and serializes everything into a standalone SVG document; tests
//! use a recording implementation instead.

/// An addressable 2D drawing target.
///
/// Dimensions are read from the surface, not passed to the renderer, so a
/// backend decides its own size. The `class` arguments carry styling
/// (`tide-line`, `line-high`, ...) without the renderer knowing how a
/// backend expresses it.
pub trait Surface {
    fn width(&self) -> f32;
    fn height(&self) -> f32;
    /// Draw a filled-or-stroked path from an SVG-style path string.
    fn path(&mut self, d: &str, class: &str);
    /// Draw a straight line segment.
    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, class: &str);
    /// Draw a horizontally centered text label at the given baseline point.
    fn text(&mut self, x: f32, y: f32, class: &str, content: &str);
}

/// Default stylesheet embedded in the SVG output so the chart is viewable
/// standalone. External CSS targeting the same classes overrides it.
const STYLE: &str = "\
.tide-line{fill:none;stroke:#2b6cb0;stroke-width:2}\
.tide-area{fill:#bee3f8;stroke:none;opacity:0.6}\
.line-high{stroke:#2b6cb0;stroke-width:1;stroke-dasharray:2 2}\
.line-low{stroke:#718096;stroke-width:1;stroke-dasharray:2 2}\
.line-current{stroke:#e53e3e;stroke-width:2}\
.tick{stroke:#171717;stroke-width:1}\
.tick-label{font-size:10px;fill:#171717}\
.label-height{font-size:10px;fill:#171717}\
.label-time{font-size:10px;font-weight:700;fill:#171717}";

/// A [`Surface`] that collects primitives into an SVG document.
pub struct SvgSurface {
    width: f32,
    height: f32,
    elements: Vec<String>,
}

impl SvgSurface {
    pub fn new(width: u32, height: u32) -> Self {
        SvgSurface {
            width: width as f32,
            height: height as f32,
            elements: Vec::new(),
        }
    }

    /// Serialize the collected primitives into a complete SVG document.
    pub fn finish(self) -> String {
        let mut svg = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" \
             viewBox=\"0 0 {} {}\" class=\"tide-chart\">\n<style>{}</style>\n",
            self.width, self.height, self.width, self.height, STYLE
        );
        for element in &self.elements {
            svg.push_str(element);
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }
}

impl Surface for SvgSurface {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn path(&mut self, d: &str, class: &str) {
        self.elements
            .push(format!("<path class=\"{class}\" d=\"{d}\"/>"));
    }

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, class: &str) {
        self.elements.push(format!(
            "<line class=\"{class}\" x1=\"{x1:.2}\" y1=\"{y1:.2}\" x2=\"{x2:.2}\" y2=\"{y2:.2}\"/>"
        ));
    }

    fn text(&mut self, x: f32, y: f32, class: &str, content: &str) {
        self.elements.push(format!(
            "<text class=\"{class}\" x=\"{x:.2}\" y=\"{y:.2}\" text-anchor=\"middle\">{}</text>",
            escape(content)
        ));
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_dimensions() {
        let surface = SvgSurface::new(700, 300);
        assert_eq!(surface.width(), 700.0);
        assert_eq!(surface.height(), 300.0);
    }

    #[test]
    fn finish_produces_a_document_with_all_primitives() {
        let mut surface = SvgSurface::new(100, 50);
        surface.path("M0.00,0.00", "tide-line");
        surface.line(1.0, 2.0, 3.0, 4.0, "line-high");
        surface.text(10.0, 20.0, "label-height", "2.87ft");
        let svg = surface.finish();

        assert!(svg.starts_with("<svg "));
        assert!(svg.contains("width=\"100\""));
        assert!(svg.contains("<path class=\"tide-line\" d=\"M0.00,0.00\"/>"));
        assert!(svg.contains("x1=\"1.00\" y1=\"2.00\" x2=\"3.00\" y2=\"4.00\""));
        assert!(svg.contains(">2.87ft</text>"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn text_content_is_escaped() {
        let mut surface = SvgSurface::new(10, 10);
        surface.text(0.0, 0.0, "label-time", "a<b&c");
        assert!(surface.finish().contains(">a&lt;b&amp;c</text>"));
    }
}
