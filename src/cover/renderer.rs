//! Cover image rendering backend.
//!
//! Rendering is a consumed capability: the packager only needs
//! `render(spec) -> bytes + media type`. The built-in [`SvgRenderer`]
//! covers vector output; raster output requires the caller to supply an
//! implementation backed by a real graphics stack.

use crate::book::CoverFormat;
use crate::error::{Error, Result};
use crate::util::escape_xml;

/// Everything a renderer needs to draw a cover.
#[derive(Debug, Clone, Copy)]
pub struct CoverSpec<'a> {
    pub title: &'a str,
    pub author: &'a str,
    /// Optional attribution line ("Generated by ...").
    pub generator: Option<&'a str>,
    /// Preferred font families, most preferred first.
    pub fonts: &'a [String],
    pub width: u32,
    pub height: u32,
    pub format: CoverFormat,
}

/// A rendered cover image ready to be bundled as an attachment.
#[derive(Debug, Clone)]
pub struct RenderedCover {
    pub data: Vec<u8>,
    pub media_type: String,
    pub extension: &'static str,
}

/// Renders a [`CoverSpec`] to image bytes.
pub trait CoverRenderer {
    fn render(&self, spec: &CoverSpec<'_>) -> Result<RenderedCover>;
}

/// Built-in vector renderer producing an SVG cover.
///
/// Raster requests fail with [`Error::RenderUnavailable`]; supply your
/// own [`CoverRenderer`] to rasterize.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgRenderer;

impl CoverRenderer for SvgRenderer {
    fn render(&self, spec: &CoverSpec<'_>) -> Result<RenderedCover> {
        match spec.format {
            CoverFormat::Raster => Err(Error::RenderUnavailable(
                "raster cover output requires an external renderer".into(),
            )),
            CoverFormat::Plain | CoverFormat::Vector => Ok(RenderedCover {
                data: render_svg(spec).into_bytes(),
                media_type: "image/svg+xml".to_string(),
                extension: "svg",
            }),
        }
    }
}

/// Build the font-family stack: requested fonts in preference order,
/// always terminated by a generic sans-serif fallback.
fn font_stack(fonts: &[String]) -> String {
    let mut stack = String::new();
    for font in fonts {
        stack.push_str(font);
        stack.push_str(", ");
    }
    stack.push_str("sans-serif");
    stack
}

fn render_svg(spec: &CoverSpec<'_>) -> String {
    let (w, h) = (spec.width, spec.height);
    let fonts = escape_xml(&font_stack(spec.fonts)).into_owned();
    let cx = w / 2;

    let mut svg = format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n\
         \x20 <rect width=\"100%\" height=\"100%\" fill=\"#ffffff\" stroke=\"#333333\" stroke-width=\"4\"/>\n"
    );
    svg.push_str(&format!(
        "  <text x=\"{cx}\" y=\"{}\" text-anchor=\"middle\" font-family=\"{fonts}\" font-size=\"{}\">{}</text>\n",
        h * 2 / 5,
        w / 12,
        escape_xml(spec.title)
    ));
    svg.push_str(&format!(
        "  <text x=\"{cx}\" y=\"{}\" text-anchor=\"middle\" font-family=\"{fonts}\" font-size=\"{}\">{}</text>\n",
        h / 2,
        w / 20,
        escape_xml(spec.author)
    ));
    if let Some(generator) = spec.generator {
        svg.push_str(&format!(
            "  <text x=\"{cx}\" y=\"{}\" text-anchor=\"middle\" font-family=\"{fonts}\" font-size=\"{}\">{}</text>\n",
            h - h / 20,
            w / 30,
            escape_xml(generator)
        ));
    }
    svg.push_str("</svg>\n");
    svg
}
