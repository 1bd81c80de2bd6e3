//! Well-formedness of generated documents under hostile text input.

use std::io::{Cursor, Read};

use bindery::{Book, Chapter, Packager};
use proptest::prelude::*;
use quick_xml::Reader;
use quick_xml::events::Event;
use zip::ZipArchive;

fn read_member(bytes: Vec<u8>, name: &str) -> String {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut file = archive.by_name(name).unwrap();
    let mut content = String::new();
    file.read_to_string(&mut content).unwrap();
    content
}

/// Parse a document to EOF, returning the concatenated character data of
/// every `<text>` element. Panics on any parse error.
fn nav_label_text(xml: &str) -> Vec<String> {
    let mut reader = Reader::from_str(xml);
    let mut labels = Vec::new();
    let mut current: Option<String> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.name().as_ref() == b"text" => {
                current = Some(String::new());
            }
            Ok(Event::Text(e)) => {
                if let Some(ref mut label) = current {
                    label.push_str(&String::from_utf8_lossy(e.as_ref()));
                }
            }
            Ok(Event::GeneralRef(e)) => {
                if let Some(ref mut label) = current {
                    label.push_str(resolve_entity(&String::from_utf8_lossy(e.as_ref())));
                }
            }
            Ok(Event::End(e)) if e.name().as_ref() == b"text" => {
                if let Some(label) = current.take() {
                    labels.push(label);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => panic!("malformed document: {e}"),
            _ => {}
        }
    }
    labels
}

fn resolve_entity(entity: &str) -> &'static str {
    match entity {
        "amp" => "&",
        "lt" => "<",
        "gt" => ">",
        "quot" => "\"",
        "apos" => "'",
        other => panic!("unexpected entity: {other}"),
    }
}

fn pack_with_title(chapter_title: &str) -> Vec<u8> {
    let mut book = Book::new("T").with_author("A");
    book.add_chapter(Chapter::new(chapter_title, "<p>hi</p>"));
    Packager::new().pack_to_vec(&book).unwrap()
}

#[test]
fn test_reserved_characters_round_trip() {
    let title = "A & B < C>";
    let ncx = read_member(pack_with_title(title), "toc.ncx");

    // Raw text must not appear unescaped.
    assert!(!ncx.contains("A & B < C>"));
    // Parsed back, the visible label equals the original title.
    let labels = nav_label_text(&ncx);
    assert!(labels.contains(&title.to_string()), "labels: {labels:?}");
}

#[test]
fn test_opf_parses_with_hostile_metadata() {
    let mut book = Book::new("\"Quotes\" & <Angles>").with_author("O'Brien & Sons");
    book.add_chapter(Chapter::new("Ch1", "<p>hi</p>"));
    let opf = read_member(
        Packager::new().pack_to_vec(&book).unwrap(),
        "content.opf",
    );

    // Drive the parser over the whole document; any malformed output panics.
    let mut reader = Reader::from_str(&opf);
    loop {
        match reader.read_event() {
            Ok(Event::Eof) => break,
            Err(e) => panic!("malformed opf: {e}"),
            _ => {}
        }
    }
}

proptest! {
    #[test]
    fn prop_ncx_stays_well_formed(title in "[ -~]{0,40}") {
        let ncx = read_member(pack_with_title(&title), "toc.ncx");
        // Parses cleanly whatever the title contained.
        nav_label_text(&ncx);
    }
}
