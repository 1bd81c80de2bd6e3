//! Cover composition: turns a [`CoverRequest`] into a title-page chapter
//! and (for image formats) a rendered cover attachment.

mod renderer;

pub use renderer::{CoverRenderer, CoverSpec, RenderedCover, SvgRenderer};

use crate::book::{CoverFormat, CoverRequest, ResolvedAttachment};
use crate::error::Result;
use crate::util::escape_xml;

/// Manifest id assigned to the synthesized cover attachment.
pub const COVER_FILE_ID: &str = "cover-image";

/// Result of composing a cover request.
pub(crate) struct ComposedCover {
    /// XHTML title page, injected as the first chapter.
    pub page: String,
    /// Rendered cover image; `None` for the plain text-only format.
    pub attachment: Option<ResolvedAttachment>,
}

/// Compose the title page and cover image for a book.
///
/// A renderer failure aborts packaging; a cover request is never
/// silently dropped.
pub(crate) fn compose(
    title: &str,
    author: &str,
    request: &CoverRequest,
    renderer: &dyn CoverRenderer,
) -> Result<ComposedCover> {
    if request.format == CoverFormat::Plain {
        return Ok(ComposedCover {
            page: plain_title_page(title, author),
            attachment: None,
        });
    }

    let rendered = renderer.render(&CoverSpec {
        title,
        author,
        generator: request.generator.as_deref(),
        fonts: &request.fonts,
        width: request.width,
        height: request.height,
        format: request.format,
    })?;

    let file_name = format!("cover.{}", rendered.extension);
    let page = image_title_page(title, &file_name);

    Ok(ComposedCover {
        page,
        attachment: Some(ResolvedAttachment {
            file_id: COVER_FILE_ID.to_string(),
            file_name,
            media_type: rendered.media_type,
            data: rendered.data,
        }),
    })
}

fn plain_title_page(title: &str, author: &str) -> String {
    format!(
        "{XHTML_HEADER}<head><title>{title}</title></head>\n\
         <body>\n\
         <h1>{title}</h1>\n\
         <p class=\"author\">{author}</p>\n\
         </body>\n\
         </html>\n",
        title = escape_xml(title),
        author = escape_xml(author),
    )
}

fn image_title_page(title: &str, image_file: &str) -> String {
    format!(
        "{XHTML_HEADER}<head><title>{title}</title></head>\n\
         <body>\n\
         <div class=\"cover\"><img src=\"{src}\" alt=\"{title}\"/></div>\n\
         </body>\n\
         </html>\n",
        title = escape_xml(title),
        src = escape_xml(image_file),
    )
}

const XHTML_HEADER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
    <!DOCTYPE html>\n\
    <html xmlns=\"http://www.w3.org/1999/xhtml\">\n";
