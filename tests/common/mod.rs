// ABOUTME: Shared helpers for the integration tests
// ABOUTME: Opens generated PPTX files and pulls text and fills out of slide XML

#![allow(dead_code)]

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use zip::ZipArchive;

pub fn open_archive(path: &Path) -> ZipArchive<File> {
    let file = File::open(path).expect("Failed to open PPTX file");
    ZipArchive::new(file).expect("Failed to read PPTX as ZIP")
}

pub fn part_names(archive: &ZipArchive<File>) -> Vec<String> {
    archive.file_names().map(String::from).collect()
}

pub fn read_part(archive: &mut ZipArchive<File>, name: &str) -> String {
    let mut part = archive
        .by_name(name)
        .unwrap_or_else(|e| panic!("Missing part {}: {}", name, e));
    let mut xml = String::new();
    part.read_to_string(&mut xml).expect("Part is not UTF-8");
    xml
}

pub fn slide_xml(archive: &mut ZipArchive<File>, number: usize) -> String {
    read_part(archive, &format!("ppt/slides/slide{}.xml", number))
}

fn attribute(element: &BytesStart, key: &str) -> Option<String> {
    element
        .try_get_attribute(key)
        .expect("Malformed attribute")
        .map(|attr| attr.unescape_value().expect("Bad attribute value").into_owned())
}

/// Paragraph texts of the shape called `shape_name`; soft breaks read as `\n`
pub fn shape_paragraphs(xml: &str, shape_name: &str) -> Vec<String> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs = Vec::new();
    let mut in_shape = false;
    let mut in_text = false;

    loop {
        match reader.read_event().expect("Malformed slide XML") {
            Event::Start(e) => match e.name().as_ref() {
                b"a:p" if in_shape => paragraphs.push(String::new()),
                b"a:t" if in_shape => in_text = true,
                b"a:br" if in_shape => {
                    if let Some(current) = paragraphs.last_mut() {
                        current.push('\n');
                    }
                }
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"p:cNvPr" => in_shape = attribute(&e, "name").as_deref() == Some(shape_name),
                b"a:p" if in_shape => paragraphs.push(String::new()),
                _ => {}
            },
            Event::Text(t) if in_text => {
                if let Some(current) = paragraphs.last_mut() {
                    current.push_str(&t.unescape().expect("Bad text"));
                }
            }
            Event::End(e) => match e.name().as_ref() {
                b"a:t" => in_text = false,
                b"p:sp" => in_shape = false,
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    paragraphs
}

/// Solid fill color of the shape called `shape_name`, ignoring its outline
pub fn shape_fill(xml: &str, shape_name: &str) -> Option<String> {
    let mut reader = Reader::from_str(xml);
    let mut in_shape = false;
    let mut in_sp_pr = false;
    let mut in_line = false;

    loop {
        match reader.read_event().expect("Malformed slide XML") {
            Event::Start(e) => match e.name().as_ref() {
                b"p:spPr" => in_sp_pr = true,
                b"a:ln" => in_line = true,
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"p:cNvPr" => in_shape = attribute(&e, "name").as_deref() == Some(shape_name),
                b"a:srgbClr" if in_shape && in_sp_pr && !in_line => return attribute(&e, "val"),
                _ => {}
            },
            Event::End(e) => match e.name().as_ref() {
                b"p:spPr" => in_sp_pr = false,
                b"a:ln" => in_line = false,
                b"p:sp" => in_shape = false,
                _ => {}
            },
            Event::Eof => return None,
            _ => {}
        }
    }
}

/// Solid background color of a slide
pub fn background_fill(xml: &str) -> Option<String> {
    let mut reader = Reader::from_str(xml);
    let mut in_background = false;

    loop {
        match reader.read_event().expect("Malformed slide XML") {
            Event::Start(e) if e.name().as_ref() == b"p:bg" => in_background = true,
            Event::End(e) if e.name().as_ref() == b"p:bg" => in_background = false,
            Event::Empty(e) if in_background && e.name().as_ref() == b"a:srgbClr" => {
                return attribute(&e, "val");
            }
            Event::Eof => return None,
            _ => {}
        }
    }
}
