//! EPUB document generation and archive assembly.
//!
//! `opf`: manifest/spine package document, `ncx`: navigation document,
//! `writer`: the [`Packager`] that assembles the container.

mod ncx;
mod opf;
mod writer;

pub use ncx::TocPolicy;
pub use writer::{Packager, write_epub};
