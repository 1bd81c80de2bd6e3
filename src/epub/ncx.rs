//! NCX navigation document generation.

use crate::book::ResolvedBook;
use crate::util::escape_xml;

/// Which chapters receive a navigation point.
///
/// Readers disagree on whether hidden chapters belong in the navigation
/// document; most observed ones include everything, so that is the
/// default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TocPolicy {
    /// Every chapter gets a navPoint, including `show_in_toc = false`
    /// ones (e.g. the injected cover page).
    #[default]
    IncludeAll,
    /// Only chapters with `show_in_toc = true`; play order is renumbered
    /// contiguously.
    VisibleOnly,
}

/// Generate `toc.ncx` for a resolved book.
pub(crate) fn generate_ncx(book: &ResolvedBook, policy: TocPolicy) -> String {
    let mut ncx = String::new();

    ncx.push_str(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE ncx PUBLIC "-//NISO//DTD ncx 2005-1//EN" "http://www.daisy.org/z3986/2005/ncx-2005-1.dtd">
<ncx xmlns="http://www.daisy.org/z3986/2005/ncx/" version="2005-1">
  <head>
    <meta name="dtb:uid" content="urn:uuid:"#,
    );
    ncx.push_str(&escape_xml(&book.id));
    ncx.push_str(
        r#""/>
    <meta name="dtb:depth" content="1"/>
    <meta name="dtb:totalPageCount" content="0"/>
    <meta name="dtb:maxPageNumber" content="0"/>
  </head>
  <docTitle>
    <text>"#,
    );
    ncx.push_str(&escape_xml(&book.title));
    ncx.push_str(
        r#"</text>
  </docTitle>
  <navMap>
"#,
    );

    let mut play_order = 1;
    for chapter in &book.chapters {
        if policy == TocPolicy::VisibleOnly && !chapter.show_in_toc {
            continue;
        }
        ncx.push_str(&format!(
            "    <navPoint id=\"{}\" playOrder=\"{}\">\n",
            chapter.nav_id(),
            play_order
        ));
        ncx.push_str(&format!(
            "      <navLabel><text>{}</text></navLabel>\n",
            escape_xml(&chapter.title)
        ));
        ncx.push_str(&format!(
            "      <content src=\"{}\"/>\n",
            chapter.file_name()
        ));
        ncx.push_str("    </navPoint>\n");
        play_order += 1;
    }

    ncx.push_str("  </navMap>\n</ncx>\n");
    ncx
}
