//! OPF package document generation (manifest, spine, guide).

use crate::book::ResolvedBook;
use crate::util::escape_xml;

/// Generate `content.opf` for a resolved book.
///
/// Pure text generation; must only run once chapter indices and
/// attachment ids are final.
pub(crate) fn generate_opf(book: &ResolvedBook) -> String {
    let mut opf = String::new();

    opf.push_str(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<package xmlns="http://www.idpf.org/2007/opf" version="2.0" unique-identifier="BookId">
  <metadata xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:opf="http://www.idpf.org/2007/opf">
"#,
    );

    opf.push_str(&format!(
        "    <dc:title>{}</dc:title>\n",
        escape_xml(&book.title)
    ));
    opf.push_str(&format!(
        "    <dc:creator>{}</dc:creator>\n",
        escape_xml(&book.author)
    ));
    opf.push_str("    <dc:language>en</dc:language>\n");
    opf.push_str(&format!(
        "    <dc:identifier id=\"BookId\">urn:uuid:{}</dc:identifier>\n",
        escape_xml(&book.id)
    ));

    // Cover metadata, only when the cover id resolved to an attachment.
    if let Some(cover) = cover_attachment(book) {
        opf.push_str(&format!(
            "    <meta name=\"cover\" content=\"{}\"/>\n",
            escape_xml(&cover.0)
        ));
    }

    opf.push_str("  </metadata>\n  <manifest>\n");

    // Fixed infrastructure entries.
    opf.push_str(
        "    <item id=\"ncx\" href=\"toc.ncx\" media-type=\"application/x-dtbncx+xml\"/>\n",
    );
    opf.push_str("    <item id=\"style\" href=\"style.css\" media-type=\"text/css\"/>\n");

    for chapter in &book.chapters {
        opf.push_str(&format!(
            "    <item id=\"{}\" href=\"{}\" media-type=\"application/xhtml+xml\"/>\n",
            chapter.file_id(),
            chapter.file_name()
        ));
    }

    for attachment in &book.attachments {
        opf.push_str(&format!(
            "    <item id=\"{}\" href=\"{}\" media-type=\"{}\"/>\n",
            escape_xml(&attachment.file_id),
            escape_xml(&attachment.file_name),
            escape_xml(&attachment.media_type)
        ));
    }

    opf.push_str("  </manifest>\n  <spine toc=\"ncx\">\n");

    // Authoritative reading order: chapter array order, exactly.
    for chapter in &book.chapters {
        opf.push_str(&format!(
            "    <itemref idref=\"{}\"/>\n",
            chapter.file_id()
        ));
    }

    opf.push_str("  </spine>\n");

    if let Some((_, href)) = cover_attachment(book) {
        opf.push_str("  <guide>\n");
        opf.push_str(&format!(
            "    <reference type=\"cover\" title=\"Cover\" href=\"{}\"/>\n",
            escape_xml(&href)
        ));
        opf.push_str("  </guide>\n");
    }

    opf.push_str("</package>\n");
    opf
}

/// Resolve the cover reference to (file id, file name), if any.
fn cover_attachment(book: &ResolvedBook) -> Option<(String, String)> {
    let href = book.cover_ref.as_deref()?;
    book.attachments
        .iter()
        .find(|a| a.file_name == href)
        .map(|a| (a.file_id.clone(), a.file_name.clone()))
}
