// ABOUTME: PPTX generation module for the tana-deck application
// ABOUTME: Packages a rendered deck into a PowerPoint file

use crate::config::{DEFAULT_AUTHOR, DEFAULT_TITLE};
use crate::deck::Deck;
use crate::errors::{DeckError, Result};
use crate::parts;
use crate::utils;
use crate::xml::validate_text;
use chrono::{DateTime, Utc};
use log::{debug, info};
use quick_xml::escape::escape;
use std::fs;
use std::io::{Cursor, Seek, Write};
use std::path::Path;
use zip::{CompressionMethod, ZipWriter, write::FileOptions};

const FIRST_SLIDE_ID: usize = 256;

/// Document properties stored in `docProps/core.xml`
#[derive(Debug, Clone)]
pub struct PackageProps {
    pub title: String,
    pub author: String,
    pub created: DateTime<Utc>,
}

impl Default for PackageProps {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            author: DEFAULT_AUTHOR.to_string(),
            created: Utc::now(),
        }
    }
}

impl PackageProps {
    /// Check that the title and author can be stored in `core.xml`
    pub fn validate(&self) -> Result<()> {
        validate_text("Title", &self.title)?;
        validate_text("Author", &self.author)
    }
}

// Fixed entry timestamps keep repeated builds byte-identical
fn entry_options() -> FileOptions {
    FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(zip::DateTime::default())
}

fn add_part<W: Write + Seek>(zip: &mut ZipWriter<W>, name: &str, data: &[u8]) -> Result<()> {
    debug!("Adding package part: {}", name);
    zip.start_file(name, entry_options())?;
    zip.write_all(data)?;
    Ok(())
}

/// Relationship id of slide `index` (0-based) in `presentation.xml.rels`.
/// rId1 is taken by the slide master.
fn slide_rel_id(index: usize) -> String {
    format!("rId{}", index + 2)
}

/// Write the deck as a PPTX package into any seekable sink
pub fn write_package<W: Write + Seek>(
    deck: &Deck,
    writer: W,
    props: &PackageProps,
) -> Result<W> {
    if deck.is_empty() {
        return Err(DeckError::EmptyDeck);
    }
    props.validate()?;

    let slide_count = deck.len();
    let mut zip = ZipWriter::new(writer);

    info!("Creating PPTX structure: [Content_Types].xml");
    let content_types = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
    <Default Extension="xml" ContentType="application/xml"/>
    <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
    <Override PartName="/ppt/presentation.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"/>
    <Override PartName="/ppt/slideMasters/slideMaster1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml"/>
    <Override PartName="/ppt/slideLayouts/slideLayout1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml"/>
    <Override PartName="/ppt/theme/theme1.xml" ContentType="application/vnd.openxmlformats-officedocument.theme+xml"/>
    <Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>
    <Override PartName="/docProps/app.xml" ContentType="application/vnd.openxmlformats-officedocument.extended-properties+xml"/>
{slides}
</Types>"#,
        slides = (1..=slide_count)
            .map(|n| {
                format!(
                    r#"    <Override PartName="/ppt/slides/slide{}.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slide+xml"/>"#,
                    n
                )
            })
            .collect::<Vec<String>>()
            .join("\n")
    );
    add_part(&mut zip, "[Content_Types].xml", content_types.as_bytes())?;

    info!("Creating PPTX structure: _rels/.rels");
    let rels = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="ppt/presentation.xml"/>
    <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/>
    <Relationship Id="rId3" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties" Target="docProps/app.xml"/>
</Relationships>"#;
    add_part(&mut zip, "_rels/.rels", rels.as_bytes())?;

    info!("Creating PPTX structure: docProps");
    let app_xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">
    <Application>tana-deck</Application>
    <Slides>{}</Slides>
</Properties>"#,
        slide_count
    );
    add_part(&mut zip, "docProps/app.xml", app_xml.as_bytes())?;

    let timestamp = props.created.format("%Y-%m-%dT%H:%M:%SZ").to_string();
    let core_xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
    <dc:title>{title}</dc:title>
    <dc:creator>{author}</dc:creator>
    <dcterms:created xsi:type="dcterms:W3CDTF">{timestamp}</dcterms:created>
    <dcterms:modified xsi:type="dcterms:W3CDTF">{timestamp}</dcterms:modified>
    <cp:revision>1</cp:revision>
</cp:coreProperties>"#,
        title = escape(props.title.as_str()),
        author = escape(props.author.as_str()),
        timestamp = timestamp,
    );
    add_part(&mut zip, "docProps/core.xml", core_xml.as_bytes())?;

    info!("Creating PPTX structure: ppt/_rels/presentation.xml.rels");
    let mut pres_rels = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster" Target="slideMasters/slideMaster1.xml"/>
"#,
    );
    for i in 0..slide_count {
        pres_rels.push_str(&format!(
            r#"    <Relationship Id="{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide" Target="slides/slide{}.xml"/>"#,
            slide_rel_id(i),
            i + 1
        ));
        pres_rels.push('\n');
    }
    pres_rels.push_str(&format!(
        r#"    <Relationship Id="{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme" Target="theme/theme1.xml"/>"#,
        slide_rel_id(slide_count)
    ));
    pres_rels.push_str("\n</Relationships>");
    add_part(&mut zip, "ppt/_rels/presentation.xml.rels", pres_rels.as_bytes())?;

    info!("Creating PPTX structure: ppt/presentation.xml");
    let presentation_xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:presentation xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" saveSubsetFonts="1">
    <p:sldMasterIdLst>
        <p:sldMasterId id="{master_id}" r:id="rId1"/>
    </p:sldMasterIdLst>
    <p:sldIdLst>
{slide_ids}
    </p:sldIdLst>
    <p:sldSz cx="{cx}" cy="{cy}" type="{size_type}"/>
    <p:notesSz cx="6858000" cy="9144000"/>
</p:presentation>"#,
        master_id = parts::SLIDE_MASTER_ID,
        slide_ids = (0..slide_count)
            .map(|i| {
                format!(
                    r#"        <p:sldId id="{}" r:id="{}"/>"#,
                    FIRST_SLIDE_ID + i,
                    slide_rel_id(i)
                )
            })
            .collect::<Vec<String>>()
            .join("\n"),
        cx = deck.size.width.value(),
        cy = deck.size.height.value(),
        size_type = deck.size.presentation_type(),
    );
    add_part(&mut zip, "ppt/presentation.xml", presentation_xml.as_bytes())?;

    info!("Creating PPTX structure: slide master, layout and theme");
    add_part(
        &mut zip,
        "ppt/slideMasters/slideMaster1.xml",
        parts::slide_master_xml().as_bytes(),
    )?;
    add_part(
        &mut zip,
        "ppt/slideMasters/_rels/slideMaster1.xml.rels",
        parts::slide_master_rels().as_bytes(),
    )?;
    add_part(
        &mut zip,
        "ppt/slideLayouts/slideLayout1.xml",
        parts::slide_layout_xml().as_bytes(),
    )?;
    add_part(
        &mut zip,
        "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
        parts::slide_layout_rels().as_bytes(),
    )?;
    add_part(
        &mut zip,
        "ppt/theme/theme1.xml",
        parts::theme_xml(&deck.style).as_bytes(),
    )?;

    for (i, slide) in deck.slides().iter().enumerate() {
        let slide_num = i + 1;
        info!("Creating slide XML: ppt/slides/slide{}.xml", slide_num);
        add_part(
            &mut zip,
            &format!("ppt/slides/_rels/slide{}.xml.rels", slide_num),
            parts::slide_rels().as_bytes(),
        )?;
        let slide_xml = slide.to_xml()?;
        add_part(&mut zip, &format!("ppt/slides/slide{}.xml", slide_num), &slide_xml)?;
    }

    info!("Finalizing PPTX package");
    Ok(zip.finish()?)
}

/// Serialize the whole deck in memory
pub fn to_bytes(deck: &Deck, props: &PackageProps) -> Result<Vec<u8>> {
    Ok(write_package(deck, Cursor::new(Vec::new()), props)?.into_inner())
}

/// Write the deck to `output`. The file is only touched once the whole
/// package has been assembled.
pub fn write_pptx(deck: &Deck, output: &Path, props: &PackageProps) -> Result<()> {
    info!("Generating PPTX with {} slides", deck.len());
    let bytes = to_bytes(deck, props)?;

    utils::ensure_parent_directory_exists(output)?;
    fs::write(output, bytes)?;

    info!("PPTX file created at {:?}", output);
    Ok(())
}
