// ABOUTME: Library module for the tana-deck program.
// ABOUTME: Contains the slide model, templates and PPTX writer for the Tana Market deck.

// Reexport modules
pub mod config;
pub mod content;
pub mod deck;
pub mod errors;
pub mod geometry;
pub mod palette;
pub mod parts;
pub mod pptx;
pub mod slide;
pub mod template;
pub mod utils;
mod xml;

// Reexport common types and functions
pub use config::Config;
pub use content::{SlideRecord, TANA_MARKET};
pub use deck::{Deck, build_deck};
pub use errors::{DeckError, Result};
pub use palette::{Palette, Rgb, Style, Typography};
pub use pptx::{PackageProps, to_bytes, write_package, write_pptx};
pub use slide::{Slide, SlideKind};
pub use template::render_slide;
