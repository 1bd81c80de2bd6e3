//! Core data model for book packaging.
//!
//! A [`Book`] is built by the caller and handed to the packager. It is
//! never mutated by this crate: packaging derives an immutable
//! [`ResolvedBook`](crate::book::ResolvedBook) view with identifiers and
//! chapter indices filled in, and generates all documents from that.

mod resolved;

pub use resolved::{ResolvedAttachment, ResolvedBook, ResolvedChapter};

/// Placeholder used wherever an author is required but none was supplied.
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

/// In-memory representation of a book to be packaged.
#[derive(Debug, Clone, Default)]
pub struct Book {
    /// Globally unique identifier. Generated at packaging time when absent.
    pub id: Option<String>,
    pub title: String,
    /// Display author. Falls back to [`UNKNOWN_AUTHOR`] when empty.
    pub author: String,
    /// Reading (spine) order.
    pub chapters: Vec<Chapter>,
    pub attachments: Vec<Attachment>,
    /// File id of the attachment to treat as the cover image. An id that
    /// matches no attachment is tolerated: the cover reference is simply
    /// omitted from the generated package.
    pub cover_id: Option<String>,
    /// When present, a title page and cover image are synthesized and
    /// injected as the first chapter.
    pub cover: Option<CoverRequest>,
}

/// One reading-order content document.
#[derive(Debug, Clone)]
pub struct Chapter {
    /// Display title. May be empty.
    pub title: String,
    /// Whether a TOC-only view should list this chapter. The navigation
    /// document includes hidden chapters by default; see
    /// [`TocPolicy`](crate::epub::TocPolicy).
    pub show_in_toc: bool,
    /// Raw XHTML markup. Passed through verbatim, not validated.
    pub content: String,
}

/// Any non-chapter file bundled into the archive (images, stylesheets,
/// fonts).
#[derive(Debug, Clone)]
pub struct Attachment {
    /// Manifest id, unique within the book. Generated when absent.
    pub file_id: Option<String>,
    /// Archive-relative path, forward slashes.
    pub file_name: String,
    pub media_type: String,
    pub data: Vec<u8>,
}

/// Requested output format for a synthesized cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverFormat {
    /// Text-only title page, no image attachment.
    Plain,
    /// Vector (SVG) cover image.
    Vector,
    /// Raster cover image. Requires an external renderer; the built-in
    /// renderer refuses raster requests.
    Raster,
}

/// Caller's specification for an auto-generated title page and cover.
///
/// Consumed once during packaging to produce an injected chapter and
/// (for image formats) one attachment.
#[derive(Debug, Clone)]
pub struct CoverRequest {
    pub format: CoverFormat,
    /// Target pixel dimensions.
    pub width: u32,
    pub height: u32,
    /// Preferred font families, most preferred first. The renderer falls
    /// back to a generic sans-serif face.
    pub fonts: Vec<String>,
    /// Optional attribution line naming the generating tool.
    pub generator: Option<String>,
}

impl Default for CoverRequest {
    fn default() -> Self {
        Self {
            format: CoverFormat::Vector,
            width: 600,
            height: 800,
            fonts: Vec::new(),
            generator: None,
        }
    }
}

impl Book {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_cover(mut self, request: CoverRequest) -> Self {
        self.cover = Some(request);
        self
    }

    /// Append a chapter to the reading order.
    pub fn add_chapter(&mut self, chapter: Chapter) {
        self.chapters.push(chapter);
    }

    /// Bundle an additional file into the archive.
    pub fn add_attachment(&mut self, attachment: Attachment) {
        self.attachments.push(attachment);
    }
}

impl Chapter {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            show_in_toc: true,
            content: content.into(),
        }
    }

    pub fn hidden_from_toc(mut self) -> Self {
        self.show_in_toc = false;
        self
    }
}

impl Attachment {
    pub fn new(
        file_name: impl Into<String>,
        data: Vec<u8>,
        media_type: impl Into<String>,
    ) -> Self {
        Self {
            file_id: None,
            file_name: file_name.into(),
            media_type: media_type.into(),
            data,
        }
    }

    pub fn with_file_id(mut self, file_id: impl Into<String>) -> Self {
        self.file_id = Some(file_id.into());
        self
    }
}
