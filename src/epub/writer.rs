//! Archive assembly: writes a resolved book into the zip container in the
//! fixed member order EPUB readers expect.

use std::io::{Cursor, Seek, Write};
use std::path::Path;

use tracing::info;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::book::{Book, ResolvedBook};
use crate::cover::{CoverRenderer, SvgRenderer};
use crate::epub::ncx::{TocPolicy, generate_ncx};
use crate::epub::opf::generate_opf;
use crate::error::Result;
use crate::identity::{IdGenerator, UuidGenerator};

/// Compiles a [`Book`] into an EPUB archive.
///
/// Identifier generation and cover rendering are injected capabilities;
/// the defaults are random UUIDs and the built-in SVG renderer.
///
/// # Example
///
/// ```no_run
/// use bindery::{Book, Chapter, Packager};
///
/// let mut book = Book::new("My Book").with_author("Me");
/// book.add_chapter(Chapter::new("Chapter 1", "<p>hi</p>"));
/// Packager::new().pack_to_path(&book, "output.epub")?;
/// # Ok::<(), bindery::Error>(())
/// ```
pub struct Packager {
    ids: Box<dyn IdGenerator>,
    renderer: Box<dyn CoverRenderer>,
    toc_policy: TocPolicy,
    /// Deflate level for compressed members (0-9, default 6).
    compression_level: Option<u32>,
}

impl Packager {
    pub fn new() -> Self {
        Self {
            ids: Box::new(UuidGenerator),
            renderer: Box::new(SvgRenderer),
            toc_policy: TocPolicy::default(),
            compression_level: None,
        }
    }

    /// Replace the identifier source (e.g. a fixed sequence in tests).
    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    /// Replace the cover renderer (e.g. a raster backend).
    pub fn with_renderer(mut self, renderer: impl CoverRenderer + 'static) -> Self {
        self.renderer = Box::new(renderer);
        self
    }

    pub fn with_toc_policy(mut self, policy: TocPolicy) -> Self {
        self.toc_policy = policy;
        self
    }

    pub fn with_compression_level(mut self, level: u32) -> Self {
        self.compression_level = Some(level);
        self
    }

    /// Derive the fully-resolved packaging view without writing anything.
    ///
    /// The caller's book is left untouched; this is the view the
    /// generated documents are produced from.
    pub fn resolve(&self, book: &Book) -> Result<ResolvedBook> {
        ResolvedBook::resolve(book, self.ids.as_ref(), self.renderer.as_ref())
    }

    /// Pack a book into any `Write + Seek` destination.
    ///
    /// On error the destination may hold partial zip data; use
    /// [`pack_to_vec`](Self::pack_to_vec) or
    /// [`pack_to_path`](Self::pack_to_path) for all-or-nothing output.
    pub fn pack<W: Write + Seek>(&self, book: &Book, writer: W) -> Result<()> {
        let resolved = self.resolve(book)?;
        self.write_archive(&resolved, writer)?;
        info!(
            chapters = resolved.chapters.len(),
            attachments = resolved.attachments.len(),
            "packaged book"
        );
        Ok(())
    }

    /// Pack a book into an in-memory archive.
    pub fn pack_to_vec(&self, book: &Book) -> Result<Vec<u8>> {
        let mut buffer = Cursor::new(Vec::new());
        self.pack(book, &mut buffer)?;
        Ok(buffer.into_inner())
    }

    /// Pack a book and write the finished archive to `path`.
    ///
    /// The archive is assembled in memory first, so a failed pack leaves
    /// no partial file behind.
    pub fn pack_to_path<P: AsRef<Path>>(&self, book: &Book, path: P) -> Result<()> {
        let bytes = self.pack_to_vec(book)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    fn write_archive<W: Write + Seek>(&self, book: &ResolvedBook, writer: W) -> Result<()> {
        // Generate both metadata documents up front; a generator failure
        // must abort before any member is written.
        let opf = generate_opf(book);
        let ncx = generate_ncx(book, self.toc_policy);

        let mut zip = ZipWriter::new(writer);
        let stored = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
        let deflated = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .compression_level(self.compression_level.map(|l| l as i64));

        // 1. mimetype marker, conventionally first and uncompressed.
        zip.start_file("mimetype", stored)?;
        zip.write_all(b"application/epub+zip")?;

        // 2. Container description.
        zip.start_file("META-INF/container.xml", deflated)?;
        zip.write_all(CONTAINER_XML.as_bytes())?;

        // 3. Manifest/spine document.
        zip.start_file("content.opf", deflated)?;
        zip.write_all(opf.as_bytes())?;

        // 4. Navigation document.
        zip.start_file("toc.ncx", deflated)?;
        zip.write_all(ncx.as_bytes())?;

        // 5. Chapters, in spine order.
        for chapter in &book.chapters {
            zip.start_file(chapter.file_name(), deflated)?;
            zip.write_all(chapter.content.as_bytes())?;
        }

        // 6. Attachments, in array order.
        for attachment in &book.attachments {
            zip.start_file(&attachment.file_name, deflated)?;
            zip.write_all(&attachment.data)?;
        }

        zip.finish()?;
        Ok(())
    }
}

impl Default for Packager {
    fn default() -> Self {
        Self::new()
    }
}

/// Write a [`Book`] to an EPUB file on disk with default settings.
///
/// # Example
///
/// ```no_run
/// use bindery::{Book, Chapter, write_epub};
///
/// let mut book = Book::new("My Book").with_author("Me");
/// book.add_chapter(Chapter::new("Chapter 1", "<p>hi</p>"));
/// write_epub(&book, "output.epub")?;
/// # Ok::<(), bindery::Error>(())
/// ```
pub fn write_epub<P: AsRef<Path>>(book: &Book, path: P) -> Result<()> {
    Packager::new().pack_to_path(book, path)
}

const CONTAINER_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<container version="1.0" xmlns="urn:oasis:names:tc:opendocument:xmlns:container">
  <rootfiles>
    <rootfile full-path="content.opf" media-type="application/oebps-package+xml"/>
  </rootfiles>
</container>
"#;
