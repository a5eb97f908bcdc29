// ABOUTME: Deck assembly for the tana-deck application
// ABOUTME: Renders content records in order into an in-memory deck

use crate::content::{SlideRecord, TANA_MARKET};
use crate::errors::{DeckError, Result};
use crate::geometry::SlideSize;
use crate::palette::Style;
use crate::slide::{Slide, SlideKind};
use crate::template::render_slide;
use log::info;

/// An ordered, fully rendered presentation
#[derive(Debug, Clone, PartialEq)]
pub struct Deck {
    pub size: SlideSize,
    pub style: Style,
    slides: Vec<Slide>,
}

impl Deck {
    pub fn new(size: SlideSize, style: Style) -> Self {
        Self {
            size,
            style,
            slides: Vec::new(),
        }
    }

    /// The eighteen-slide Tana Market presentation
    pub fn tana_market() -> Result<Self> {
        build_deck(&TANA_MARKET, SlideSize::default(), &Style::TANA)
    }

    pub fn push(&mut self, slide: Slide) {
        self.slides.push(slide);
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}

/// Kind of template used for the record at `index`
pub fn slide_kind(index: usize) -> SlideKind {
    if index == 0 {
        SlideKind::Title
    } else {
        SlideKind::Content
    }
}

/// Render every record in order; the first one becomes the cover slide
pub fn build_deck(records: &[SlideRecord], size: SlideSize, style: &Style) -> Result<Deck> {
    if records.is_empty() {
        return Err(DeckError::EmptyDeck);
    }

    info!("Building deck with {} slides", records.len());
    let mut deck = Deck::new(size, *style);
    for (i, record) in records.iter().enumerate() {
        deck.push(render_slide(record, slide_kind(i), size, style)?);
    }

    Ok(deck)
}
