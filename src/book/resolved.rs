//! Resolved packaging view.
//!
//! [`ResolvedBook::resolve`] is the single derivation pass run before any
//! document is generated: it fills in missing identifiers, composes the
//! cover, and assigns final chapter indices. The caller's [`Book`] is
//! read, never mutated; generators consume only the resolved view.

use tracing::{debug, warn};

use crate::book::{Book, UNKNOWN_AUTHOR};
use crate::cover::{self, CoverRenderer};
use crate::error::Result;
use crate::identity::IdGenerator;
use crate::util::sanitize_path;

/// Fully-resolved, immutable view of a book ready for packaging.
#[derive(Debug, Clone)]
pub struct ResolvedBook {
    pub id: String,
    pub title: String,
    /// Display author with the placeholder already applied, so every
    /// generated document agrees.
    pub author: String,
    pub chapters: Vec<ResolvedChapter>,
    pub attachments: Vec<ResolvedAttachment>,
    /// File name of the cover attachment, when the cover id resolved.
    pub cover_ref: Option<String>,
}

/// A chapter with its final 1-based position in the spine.
#[derive(Debug, Clone)]
pub struct ResolvedChapter {
    pub index: usize,
    pub title: String,
    pub show_in_toc: bool,
    pub content: String,
}

/// An attachment with its manifest id guaranteed present.
#[derive(Debug, Clone)]
pub struct ResolvedAttachment {
    pub file_id: String,
    pub file_name: String,
    pub media_type: String,
    pub data: Vec<u8>,
}

impl ResolvedChapter {
    pub fn file_id(&self) -> String {
        format!("chapter{}", self.index)
    }

    pub fn file_name(&self) -> String {
        format!("chapter{}.html", self.index)
    }

    /// Navigation id derived from the chapter title. Stable across runs;
    /// same-titled chapters share an id, which readers tolerate.
    pub fn nav_id(&self) -> String {
        let mut sha = sha1_smol::Sha1::new();
        sha.update(self.title.as_bytes());
        format!("nav-{}", &sha.digest().to_string()[..8])
    }
}

impl ResolvedBook {
    /// Derive the packaging view: assign missing identifiers, compose the
    /// cover (injected as chapter 1, hidden from TOC-only views), and
    /// number chapters by final position.
    pub fn resolve(
        book: &Book,
        ids: &dyn IdGenerator,
        renderer: &dyn CoverRenderer,
    ) -> Result<Self> {
        let id = match book.id.as_deref().filter(|s| !s.is_empty()) {
            Some(id) => id.to_string(),
            None => {
                let id = ids.generate();
                debug!(%id, "assigned book identifier");
                id
            }
        };

        let author = if book.author.is_empty() {
            UNKNOWN_AUTHOR.to_string()
        } else {
            book.author.clone()
        };

        let mut attachments: Vec<ResolvedAttachment> = book
            .attachments
            .iter()
            .map(|a| {
                let file_id = match a.file_id.as_deref().filter(|s| !s.is_empty()) {
                    Some(id) => id.to_string(),
                    None => {
                        let id = ids.generate();
                        debug!(%id, file_name = %a.file_name, "assigned attachment id");
                        id
                    }
                };
                ResolvedAttachment {
                    file_id,
                    file_name: sanitize_path(&a.file_name),
                    media_type: a.media_type.clone(),
                    data: a.data.clone(),
                }
            })
            .collect();

        let mut cover_id = book.cover_id.clone();
        let mut title_page = None;
        if let Some(request) = &book.cover {
            let composed = cover::compose(&book.title, &author, request, renderer)?;
            title_page = Some(ResolvedChapter {
                index: 0,
                title: book.title.clone(),
                show_in_toc: false,
                content: composed.page,
            });
            if let Some(attachment) = composed.attachment {
                if cover_id.is_none() {
                    cover_id = Some(attachment.file_id.clone());
                }
                attachments.push(attachment);
            }
            debug!("injected cover title page");
        }

        let mut chapters: Vec<ResolvedChapter> = title_page
            .into_iter()
            .chain(book.chapters.iter().map(|c| ResolvedChapter {
                index: 0,
                title: c.title.clone(),
                show_in_toc: c.show_in_toc,
                content: c.content.clone(),
            }))
            .collect();
        for (i, chapter) in chapters.iter_mut().enumerate() {
            chapter.index = i + 1;
        }

        let cover_ref = cover_id.as_deref().and_then(|wanted| {
            let found = attachments.iter().find(|a| a.file_id == wanted);
            if found.is_none() {
                warn!(cover_id = wanted, "cover id matches no attachment, omitting cover reference");
            }
            found.map(|a| a.file_name.clone())
        });

        Ok(Self {
            id,
            title: book.title.clone(),
            author,
            chapters,
            attachments,
            cover_ref,
        })
    }
}
