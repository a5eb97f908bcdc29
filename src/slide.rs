// ABOUTME: Slide object model for the tana-deck application
// ABOUTME: Shapes, text frames and paragraphs, plus their PresentationML serialization

use crate::errors::Result;
use crate::geometry::{Pt, Rect};
use crate::palette::Rgb;
use crate::xml::XmlBuilder;

const NS_A: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
const NS_R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const NS_P: &str = "http://schemas.openxmlformats.org/presentationml/2006/main";

/// Which template produced a slide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideKind {
    Title,
    Content,
}

impl std::fmt::Display for SlideKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SlideKind::Title => write!(f, "title"),
            SlideKind::Content => write!(f, "content"),
        }
    }
}

/// Preset geometry of an auto shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeGeometry {
    Rectangle,
    Oval,
}

impl ShapeGeometry {
    fn preset(self) -> &'static str {
        match self {
            ShapeGeometry::Rectangle => "rect",
            ShapeGeometry::Oval => "ellipse",
        }
    }
}

/// Outline of an auto shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Line {
    /// No outline at all
    #[default]
    None,
    Solid(Rgb),
}

/// Horizontal paragraph alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    fn attr(self) -> &'static str {
        match self {
            Alignment::Left => "l",
            Alignment::Center => "ctr",
            Alignment::Right => "r",
        }
    }
}

/// Character formatting applied to a whole paragraph
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font {
    /// `None` falls back to the theme font
    pub name: Option<&'static str>,
    pub size: Pt,
    pub bold: bool,
    pub color: Rgb,
}

/// A single paragraph of a text frame
#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    /// Line feeds become soft line breaks inside the paragraph
    pub text: String,
    pub font: Font,
    pub alignment: Alignment,
    pub space_before: Option<Pt>,
    pub space_after: Option<Pt>,
    pub level: u8,
}

impl Paragraph {
    pub fn new(text: impl Into<String>, font: Font) -> Self {
        Self {
            text: text.into(),
            font,
            alignment: Alignment::default(),
            space_before: None,
            space_after: None,
            level: 0,
        }
    }

    pub fn aligned(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn spacing(mut self, before: Pt, after: Pt) -> Self {
        self.space_before = Some(before);
        self.space_after = Some(after);
        self
    }
}

/// A filled preset shape (rectangle, oval)
#[derive(Debug, Clone, PartialEq)]
pub struct AutoShape {
    pub id: u32,
    pub name: String,
    pub geometry: ShapeGeometry,
    pub frame: Rect,
    pub fill: Option<Rgb>,
    pub line: Line,
}

/// A text box holding one or more paragraphs
#[derive(Debug, Clone, PartialEq)]
pub struct TextBox {
    pub id: u32,
    pub name: String,
    pub frame: Rect,
    pub word_wrap: bool,
    pub paragraphs: Vec<Paragraph>,
}

impl TextBox {
    pub fn add_paragraph(&mut self, paragraph: Paragraph) -> &mut Self {
        self.paragraphs.push(paragraph);
        self
    }

    /// Paragraph texts in order
    pub fn texts(&self) -> Vec<&str> {
        self.paragraphs.iter().map(|p| p.text.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Auto(AutoShape),
    Text(TextBox),
}

impl Shape {
    pub fn name(&self) -> &str {
        match self {
            Shape::Auto(shape) => &shape.name,
            Shape::Text(text_box) => &text_box.name,
        }
    }
}

/// One rendered slide
#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    pub kind: SlideKind,
    pub background: Rgb,
    pub shapes: Vec<Shape>,
}

impl Slide {
    pub fn new(kind: SlideKind, background: Rgb) -> Self {
        Self {
            kind,
            background,
            shapes: Vec::new(),
        }
    }

    // Id 1 belongs to the shape tree itself
    fn next_shape_id(&self) -> u32 {
        self.shapes.len() as u32 + 2
    }

    /// Append a preset shape with a solid fill and no outline
    pub fn add_auto_shape(
        &mut self,
        name: &str,
        geometry: ShapeGeometry,
        frame: Rect,
        fill: Rgb,
    ) -> &mut AutoShape {
        let shape = AutoShape {
            id: self.next_shape_id(),
            name: name.to_string(),
            geometry,
            frame,
            fill: Some(fill),
            line: Line::None,
        };
        self.shapes.push(Shape::Auto(shape));
        match self.shapes.last_mut() {
            Some(Shape::Auto(shape)) => shape,
            _ => unreachable!("auto shape was just pushed"),
        }
    }

    /// Append an empty word-wrapping text box
    pub fn add_text_box(&mut self, name: &str, frame: Rect) -> &mut TextBox {
        let text_box = TextBox {
            id: self.next_shape_id(),
            name: name.to_string(),
            frame,
            word_wrap: true,
            paragraphs: Vec::new(),
        };
        self.shapes.push(Shape::Text(text_box));
        match self.shapes.last_mut() {
            Some(Shape::Text(text_box)) => text_box,
            _ => unreachable!("text box was just pushed"),
        }
    }

    pub fn shape(&self, name: &str) -> Option<&Shape> {
        self.shapes.iter().find(|shape| shape.name() == name)
    }

    pub fn auto_shape(&self, name: &str) -> Option<&AutoShape> {
        match self.shape(name) {
            Some(Shape::Auto(shape)) => Some(shape),
            _ => None,
        }
    }

    pub fn text_box(&self, name: &str) -> Option<&TextBox> {
        match self.shape(name) {
            Some(Shape::Text(text_box)) => Some(text_box),
            _ => None,
        }
    }

    /// Serialize as a `ppt/slides/slideN.xml` part
    pub fn to_xml(&self) -> Result<Vec<u8>> {
        let mut xml = XmlBuilder::new()?;
        xml.open("p:sld", &[("xmlns:a", NS_A), ("xmlns:r", NS_R), ("xmlns:p", NS_P)])?;
        xml.open("p:cSld", &[])?;

        xml.open("p:bg", &[])?.open("p:bgPr", &[])?;
        write_solid_fill(&mut xml, self.background)?;
        xml.empty("a:effectLst", &[])?.close("p:bgPr")?.close("p:bg")?;

        xml.open("p:spTree", &[])?;
        xml.open("p:nvGrpSpPr", &[])?
            .empty("p:cNvPr", &[("id", "1"), ("name", "")])?
            .empty("p:cNvGrpSpPr", &[])?
            .empty("p:nvPr", &[])?
            .close("p:nvGrpSpPr")?;
        xml.open("p:grpSpPr", &[])?.open("a:xfrm", &[])?;
        xml.empty("a:off", &[("x", "0"), ("y", "0")])?
            .empty("a:ext", &[("cx", "0"), ("cy", "0")])?
            .empty("a:chOff", &[("x", "0"), ("y", "0")])?
            .empty("a:chExt", &[("cx", "0"), ("cy", "0")])?;
        xml.close("a:xfrm")?.close("p:grpSpPr")?;

        for shape in &self.shapes {
            match shape {
                Shape::Auto(shape) => write_auto_shape(&mut xml, shape)?,
                Shape::Text(text_box) => write_text_box(&mut xml, text_box)?,
            }
        }

        xml.close("p:spTree")?.close("p:cSld")?;
        xml.open("p:clrMapOvr", &[])?
            .empty("a:masterClrMapping", &[])?
            .close("p:clrMapOvr")?;
        xml.close("p:sld")?;
        Ok(xml.finish())
    }
}

fn write_solid_fill(xml: &mut XmlBuilder, color: Rgb) -> Result<()> {
    xml.open("a:solidFill", &[])?
        .empty("a:srgbClr", &[("val", color.hex().as_str())])?
        .close("a:solidFill")?;
    Ok(())
}

fn write_xfrm(xml: &mut XmlBuilder, frame: &Rect) -> Result<()> {
    let (x, y) = (frame.x.value().to_string(), frame.y.value().to_string());
    let (cx, cy) = (frame.cx.value().to_string(), frame.cy.value().to_string());
    xml.open("a:xfrm", &[])?
        .empty("a:off", &[("x", x.as_str()), ("y", y.as_str())])?
        .empty("a:ext", &[("cx", cx.as_str()), ("cy", cy.as_str())])?
        .close("a:xfrm")?;
    Ok(())
}

fn write_non_visual(xml: &mut XmlBuilder, id: u32, name: &str, text_box: bool) -> Result<()> {
    let id = id.to_string();
    xml.open("p:nvSpPr", &[])?
        .empty("p:cNvPr", &[("id", id.as_str()), ("name", name)])?;
    if text_box {
        xml.empty("p:cNvSpPr", &[("txBox", "1")])?;
    } else {
        xml.empty("p:cNvSpPr", &[])?;
    }
    xml.empty("p:nvPr", &[])?.close("p:nvSpPr")?;
    Ok(())
}

fn write_auto_shape(xml: &mut XmlBuilder, shape: &AutoShape) -> Result<()> {
    xml.open("p:sp", &[])?;
    write_non_visual(xml, shape.id, &shape.name, false)?;

    xml.open("p:spPr", &[])?;
    write_xfrm(xml, &shape.frame)?;
    xml.open("a:prstGeom", &[("prst", shape.geometry.preset())])?
        .empty("a:avLst", &[])?
        .close("a:prstGeom")?;
    match shape.fill {
        Some(color) => write_solid_fill(xml, color)?,
        None => {
            xml.empty("a:noFill", &[])?;
        }
    }
    xml.open("a:ln", &[])?;
    match shape.line {
        Line::None => {
            xml.empty("a:noFill", &[])?;
        }
        Line::Solid(color) => write_solid_fill(xml, color)?,
    }
    xml.close("a:ln")?.close("p:spPr")?;

    xml.close("p:sp")?;
    Ok(())
}

fn write_text_box(xml: &mut XmlBuilder, text_box: &TextBox) -> Result<()> {
    xml.open("p:sp", &[])?;
    write_non_visual(xml, text_box.id, &text_box.name, true)?;

    xml.open("p:spPr", &[])?;
    write_xfrm(xml, &text_box.frame)?;
    xml.open("a:prstGeom", &[("prst", "rect")])?
        .empty("a:avLst", &[])?
        .close("a:prstGeom")?;
    xml.empty("a:noFill", &[])?.close("p:spPr")?;

    xml.open("p:txBody", &[])?;
    let wrap = if text_box.word_wrap { "square" } else { "none" };
    xml.open("a:bodyPr", &[("wrap", wrap), ("rtlCol", "0")])?
        .empty("a:spAutoFit", &[])?
        .close("a:bodyPr")?;
    xml.empty("a:lstStyle", &[])?;
    if text_box.paragraphs.is_empty() {
        // A text body needs at least one paragraph
        xml.empty("a:p", &[])?;
    }
    for paragraph in &text_box.paragraphs {
        write_paragraph(xml, paragraph)?;
    }
    xml.close("p:txBody")?;

    xml.close("p:sp")?;
    Ok(())
}

fn write_paragraph(xml: &mut XmlBuilder, paragraph: &Paragraph) -> Result<()> {
    xml.open("a:p", &[])?;

    let level = paragraph.level.to_string();
    xml.open("a:pPr", &[("lvl", level.as_str()), ("algn", paragraph.alignment.attr())])?;
    if let Some(before) = paragraph.space_before {
        xml.open("a:spcBef", &[])?
            .empty("a:spcPts", &[("val", before.centipoints().to_string().as_str())])?
            .close("a:spcBef")?;
    }
    if let Some(after) = paragraph.space_after {
        xml.open("a:spcAft", &[])?
            .empty("a:spcPts", &[("val", after.centipoints().to_string().as_str())])?
            .close("a:spcAft")?;
    }
    xml.close("a:pPr")?;

    for (i, line) in paragraph.text.split('\n').enumerate() {
        if i > 0 {
            xml.open("a:br", &[])?;
            write_run_properties(xml, &paragraph.font)?;
            xml.close("a:br")?;
        }
        xml.open("a:r", &[])?;
        write_run_properties(xml, &paragraph.font)?;
        xml.text_element("a:t", &[], line)?;
        xml.close("a:r")?;
    }

    xml.close("a:p")?;
    Ok(())
}

fn write_run_properties(xml: &mut XmlBuilder, font: &Font) -> Result<()> {
    let size = font.size.centipoints().to_string();
    let bold = if font.bold { "1" } else { "0" };
    xml.open(
        "a:rPr",
        &[("lang", "en-US"), ("sz", size.as_str()), ("b", bold), ("dirty", "0")],
    )?;
    write_solid_fill(xml, font.color)?;
    if let Some(name) = font.name {
        xml.empty("a:latin", &[("typeface", name)])?;
    }
    xml.close("a:rPr")?;
    Ok(())
}
