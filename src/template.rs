// ABOUTME: Slide templates for the tana-deck application
// ABOUTME: Turns a content record into a styled title or content slide

use crate::content::SlideRecord;
use crate::errors::Result;
use crate::geometry::{inches, Emu, Rect, SlideSize};
use crate::palette::Style;
use crate::slide::{Alignment, Font, Line, Paragraph, ShapeGeometry, Slide, SlideKind};
use log::debug;

/// Glyph prepended to every body paragraph of a content slide
pub const BULLET: &str = "\u{2022} ";

pub const HEADER: &str = "Header";
pub const LOGO: &str = "Logo";
pub const TITLE: &str = "Title";
pub const FOOTER: &str = "Footer";
pub const BODY: &str = "Body";
pub const SUBTITLE: &str = "Subtitle";
pub const BYLINE: &str = "Byline";

/// Render one record with the template for `kind`.
///
/// A content record without points still gets its body text box. The model
/// then holds no paragraphs, while the serialized body carries one empty
/// `a:p` because DrawingML requires at least one paragraph per text body.
pub fn render_slide(
    record: &SlideRecord,
    kind: SlideKind,
    size: SlideSize,
    style: &Style,
) -> Result<Slide> {
    debug!("Rendering {} slide: {}", kind, record.title);
    match kind {
        SlideKind::Title => render_title_slide(record, style),
        SlideKind::Content => render_content_slide(record, size, style),
    }
}

/// Cover slide: primary background with centered title, subtitle and byline
fn render_title_slide(record: &SlideRecord, style: &Style) -> Result<Slide> {
    let palette = &style.palette;
    let typography = &style.typography;
    let mut slide = Slide::new(SlideKind::Title, palette.primary);

    let title_font = Font {
        name: None,
        size: typography.cover_title,
        bold: true,
        color: palette.white,
    };
    slide
        .add_text_box(TITLE, Rect::from_inches(1.0, 2.5, 8.5, 2.0)?)
        .add_paragraph(Paragraph::new(record.title, title_font).aligned(Alignment::Center));

    let Some((subtitle, byline)) = record.points.split_first() else {
        return Ok(slide);
    };

    let subtitle_font = Font {
        name: None,
        size: typography.cover_subtitle,
        bold: false,
        color: palette.accent,
    };
    slide
        .add_text_box(SUBTITLE, Rect::from_inches(1.0, 4.0, 8.5, 1.0)?)
        .add_paragraph(Paragraph::new(*subtitle, subtitle_font).aligned(Alignment::Center));

    if !byline.is_empty() {
        let byline_font = Font {
            name: None,
            size: typography.cover_byline,
            bold: false,
            color: palette.white,
        };
        let text_box = slide.add_text_box(BYLINE, Rect::from_inches(1.0, 5.5, 8.5, 1.0)?);
        for line in byline {
            text_box.add_paragraph(Paragraph::new(*line, byline_font).aligned(Alignment::Center));
        }
    }

    Ok(slide)
}

/// Content slide: branded frame plus one bullet paragraph per point
fn render_content_slide(record: &SlideRecord, size: SlideSize, style: &Style) -> Result<Slide> {
    let mut slide = Slide::new(SlideKind::Content, style.palette.background);
    apply_slide_design(&mut slide, record.title, size, style)?;

    let bullet_font = Font {
        name: Some(style.typography.font_family),
        size: style.typography.bullet,
        bold: false,
        color: style.palette.text,
    };
    let body = slide.add_text_box(BODY, Rect::from_inches(1.0, 1.5, 8.5, 5.5)?);
    for point in record.points {
        body.add_paragraph(
            Paragraph::new(format!("{}{}", BULLET, point), bullet_font).spacing(
                style.typography.bullet_space_before,
                style.typography.bullet_space_after,
            ),
        );
    }

    Ok(slide)
}

/// Header band, logo circle, title and footer line shared by content slides
fn apply_slide_design(
    slide: &mut Slide,
    title: &str,
    size: SlideSize,
    style: &Style,
) -> Result<()> {
    let palette = &style.palette;

    let header = Rect::new(Emu(0), Emu(0), size.width, inches(1.2))?;
    slide.add_auto_shape(HEADER, ShapeGeometry::Rectangle, header, palette.primary);

    let logo = Rect::from_inches(0.5, 0.2, 0.8, 0.8)?;
    slide
        .add_auto_shape(LOGO, ShapeGeometry::Oval, logo, palette.white)
        .line = Line::Solid(palette.accent);

    let title_font = Font {
        name: Some(style.typography.font_family),
        size: style.typography.slide_title,
        bold: true,
        color: palette.white,
    };
    slide
        .add_text_box(TITLE, Rect::from_inches(1.5, 0.3, 8.0, 0.8)?)
        .add_paragraph(Paragraph::new(title, title_font).aligned(Alignment::Left));

    let footer = Rect::new(Emu(0), size.height - inches(0.5), size.width, inches(0.05))?;
    slide.add_auto_shape(FOOTER, ShapeGeometry::Rectangle, footer, palette.accent);

    Ok(())
}
