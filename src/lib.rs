//! # bindery
//!
//! A library for compiling an in-memory book model into a valid EPUB
//! archive: package document (`content.opf`), navigation document
//! (`toc.ncx`), chapter documents, attachments, and zip packaging with
//! the `mimetype` member stored first. Optionally synthesizes a cover
//! image and title page from the book's metadata.
//!
//! This crate only constructs archives; it never parses existing ones.
//!
//! ## Quick Start
//!
//! ```
//! use bindery::{Book, Chapter, Packager};
//!
//! let mut book = Book::new("Must Go Faster").with_author("Neia Neutuladh");
//! book.add_chapter(Chapter::new("Ch1", "<p>hi</p>"));
//!
//! let epub = Packager::new().pack_to_vec(&book).unwrap();
//! assert!(!epub.is_empty());
//! ```
//!
//! ## Covers
//!
//! Attach a [`CoverRequest`] to have a title page and cover image
//! generated and injected as the first chapter:
//!
//! ```
//! use bindery::{Book, Chapter, CoverRequest, Packager};
//!
//! let mut book = Book::new("My Book")
//!     .with_author("Me")
//!     .with_cover(CoverRequest::default());
//! book.add_chapter(Chapter::new("Ch1", "<p>hi</p>"));
//! let epub = Packager::new().pack_to_vec(&book).unwrap();
//! ```
//!
//! The built-in renderer produces SVG covers; raster output requires
//! supplying a [`CoverRenderer`] backed by a real graphics stack.

pub mod book;
pub mod cover;
pub mod epub;
pub mod error;
pub mod identity;
pub(crate) mod util;

pub use book::{
    Attachment, Book, Chapter, CoverFormat, CoverRequest, ResolvedAttachment, ResolvedBook,
    ResolvedChapter, UNKNOWN_AUTHOR,
};
pub use cover::{COVER_FILE_ID, CoverRenderer, CoverSpec, RenderedCover, SvgRenderer};
pub use epub::{Packager, TocPolicy, write_epub};
pub use error::{Error, Result};
pub use identity::{IdGenerator, SequenceGenerator, UuidGenerator};
