mod common;

use common::{
    background_fill, open_archive, part_names, read_part, shape_fill, shape_paragraphs, slide_xml,
};
use std::fs;
use tana_deck::config::parse_source_date_epoch;
use tana_deck::{Deck, DeckError, PackageProps, TANA_MARKET};
use tempfile::TempDir;

fn fixed_props() -> PackageProps {
    PackageProps {
        created: parse_source_date_epoch("1767225600").expect("Failed to parse epoch"),
        ..PackageProps::default()
    }
}

fn generate(dir: &TempDir, name: &str) -> std::path::PathBuf {
    let deck = Deck::tana_market().expect("Failed to build deck");
    let output_path = dir.path().join(name);
    tana_deck::write_pptx(&deck, &output_path, &fixed_props()).expect("Failed to write PPTX");
    output_path
}

#[test]
fn test_package_contains_eighteen_slides() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output_path = generate(&temp_dir, "deck.pptx");

    let archive = open_archive(&output_path);
    let names = part_names(&archive);

    let slide_files: Vec<&String> = names
        .iter()
        .filter(|name| name.starts_with("ppt/slides/slide") && name.ends_with(".xml"))
        .collect();
    assert_eq!(slide_files.len(), 18, "Expected exactly eighteen slide XML files");
    for n in 1..=18 {
        assert!(names.contains(&format!("ppt/slides/slide{}.xml", n)));
        assert!(names.contains(&format!("ppt/slides/_rels/slide{}.xml.rels", n)));
    }

    for part in [
        "[Content_Types].xml",
        "_rels/.rels",
        "docProps/app.xml",
        "docProps/core.xml",
        "ppt/presentation.xml",
        "ppt/_rels/presentation.xml.rels",
        "ppt/slideMasters/slideMaster1.xml",
        "ppt/slideLayouts/slideLayout1.xml",
        "ppt/theme/theme1.xml",
    ] {
        assert!(names.contains(&part.to_string()), "Missing part {}", part);
    }
}

#[test]
fn test_presentation_lists_slides_in_order() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output_path = generate(&temp_dir, "deck.pptx");
    let mut archive = open_archive(&output_path);

    let presentation = read_part(&mut archive, "ppt/presentation.xml");
    assert!(presentation.contains(r#"<p:sldId id="256" r:id="rId2"/>"#));
    assert!(presentation.contains(r#"<p:sldId id="273" r:id="rId19"/>"#));
    assert!(presentation.contains(r#"<p:sldSz cx="9144000" cy="6858000" type="screen4x3"/>"#));

    let rels = read_part(&mut archive, "ppt/_rels/presentation.xml.rels");
    let last_slide_rel = concat!(
        r#"Id="rId19" "#,
        r#"Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide" "#,
        r#"Target="slides/slide18.xml""#,
    );
    assert!(rels.contains(last_slide_rel));

    let app = read_part(&mut archive, "docProps/app.xml");
    assert!(app.contains("<Slides>18</Slides>"));

    let core = read_part(&mut archive, "docProps/core.xml");
    assert!(core.contains("<dc:title>Tana Market</dc:title>"));
    assert!(core.contains("2026-01-01T00:00:00Z"));
}

#[test]
fn test_slide_titles_round_trip() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output_path = generate(&temp_dir, "deck.pptx");
    let mut archive = open_archive(&output_path);

    for (i, record) in TANA_MARKET.iter().enumerate() {
        let xml = slide_xml(&mut archive, i + 1);
        assert_eq!(shape_paragraphs(&xml, "Title"), vec![record.title.to_string()]);
    }

    let cover = slide_xml(&mut archive, 1);
    assert_eq!(shape_paragraphs(&cover, "Title"), vec!["TANA MARKET"]);
    assert_eq!(
        shape_paragraphs(&cover, "Byline"),
        vec!["Presented by: Tana Market Team\nDate: January 2026"]
    );
}

#[test]
fn test_body_paragraphs_carry_bullets() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output_path = generate(&temp_dir, "deck.pptx");
    let mut archive = open_archive(&output_path);

    for (i, record) in TANA_MARKET.iter().enumerate().skip(1) {
        let xml = slide_xml(&mut archive, i + 1);
        let expected: Vec<String> = record
            .points
            .iter()
            .map(|point| format!("\u{2022} {}", point))
            .collect();
        assert_eq!(shape_paragraphs(&xml, "Body"), expected, "Slide {}", i + 1);
    }

    let order_slide = slide_xml(&mut archive, 13);
    let workflow = "\u{2022} Status Workflow: Pending -> Paid -> Approved -> Shipped -> Delivered.";
    assert!(shape_paragraphs(&order_slide, "Body").contains(&workflow.to_string()));
}

#[test]
fn test_header_fill_is_identical_across_content_slides() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output_path = generate(&temp_dir, "deck.pptx");
    let mut archive = open_archive(&output_path);

    let cover = slide_xml(&mut archive, 1);
    assert_eq!(shape_fill(&cover, "Header"), None);
    assert_eq!(background_fill(&cover).as_deref(), Some("4F46E5"));

    let mut header_fills = Vec::new();
    for n in 2..=18 {
        let xml = slide_xml(&mut archive, n);
        assert_eq!(background_fill(&xml).as_deref(), Some("F8FAFC"));
        assert_eq!(shape_fill(&xml, "Footer").as_deref(), Some("F59E0B"));
        header_fills.push(shape_fill(&xml, "Header"));
    }
    assert_eq!(header_fills.len(), 17);
    assert!(header_fills.iter().all(|fill| fill.as_deref() == Some("4F46E5")));
}

#[test]
fn test_generation_is_byte_identical() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let first = generate(&temp_dir, "first.pptx");
    let second = generate(&temp_dir, "second.pptx");

    let first_bytes = fs::read(&first).expect("Failed to read first deck");
    let second_bytes = fs::read(&second).expect("Failed to read second deck");
    assert_eq!(first_bytes, second_bytes);
}

#[test]
fn test_creates_missing_parent_directories() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output_path = generate(&temp_dir, "nested/out/deck.pptx");
    assert!(output_path.exists());
}

#[test]
fn test_unwritable_output_fails_without_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let deck = Deck::tana_market().expect("Failed to build deck");

    // The target is an existing directory
    let result = tana_deck::write_pptx(&deck, temp_dir.path(), &fixed_props());
    assert!(matches!(result, Err(DeckError::FileWriteError(_))));

    // The parent is a regular file
    let blocker = temp_dir.path().join("blocker");
    fs::write(&blocker, "not a directory").expect("Failed to write blocker file");
    let output_path = blocker.join("deck.pptx");
    let result = tana_deck::write_pptx(&deck, &output_path, &fixed_props());
    assert!(matches!(result, Err(DeckError::ValidationError(_))));
    assert!(!output_path.exists());
}

#[test]
fn test_empty_deck_is_rejected() {
    let deck = Deck::new(Default::default(), Default::default());
    let result = tana_deck::to_bytes(&deck, &fixed_props());
    assert!(matches!(result, Err(DeckError::EmptyDeck)));
}

#[test]
fn test_every_text_box_wraps_words() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output_path = generate(&temp_dir, "deck.pptx");
    let mut archive = open_archive(&output_path);

    for n in 1..=18 {
        let xml = slide_xml(&mut archive, n);
        let bodies = xml.matches("<a:bodyPr").count();
        let wrapped = xml.matches(r#"<a:bodyPr wrap="square""#).count();
        assert!(bodies > 0, "Slide {} has no text boxes", n);
        assert_eq!(wrapped, bodies, "Slide {} has a text box without word wrap", n);
    }

    // The cover carries title, subtitle and byline boxes
    let cover = slide_xml(&mut archive, 1);
    assert_eq!(cover.matches(r#"<a:bodyPr wrap="square""#).count(), 3);
}

#[test]
fn test_control_characters_in_properties_are_rejected() {
    let deck = Deck::tana_market().expect("Failed to build deck");

    let props = PackageProps {
        title: "Tana\u{1}Market".to_string(),
        ..fixed_props()
    };
    let result = tana_deck::to_bytes(&deck, &props);
    assert!(matches!(result, Err(DeckError::ValidationError(_))));

    let props = PackageProps {
        author: "Team\u{1B}".to_string(),
        ..fixed_props()
    };
    let result = tana_deck::to_bytes(&deck, &props);
    assert!(matches!(result, Err(DeckError::ValidationError(_))));

    // Tab, line feed and carriage return are legal XML characters
    let props = PackageProps {
        title: "Tana\tMarket\r\n".to_string(),
        ..fixed_props()
    };
    assert!(tana_deck::to_bytes(&deck, &props).is_ok());
}

#[test]
fn test_rejected_properties_leave_no_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let deck = Deck::tana_market().expect("Failed to build deck");
    let output_path = temp_dir.path().join("deck.pptx");

    let props = PackageProps {
        title: "Tana\u{0}Market".to_string(),
        ..fixed_props()
    };
    let result = tana_deck::write_pptx(&deck, &output_path, &props);
    assert!(matches!(result, Err(DeckError::ValidationError(_))));
    assert!(!output_path.exists());
}
