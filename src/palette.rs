// ABOUTME: Palette and typography definitions for the tana-deck application
// ABOUTME: Holds the brand colors and font sizes shared by every slide

use crate::geometry::Pt;
use std::fmt;

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Six-digit uppercase hex form, as DrawingML `a:srgbClr` expects it
    pub fn hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.hex())
    }
}

/// Named brand colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: Rgb,
    pub secondary: Rgb,
    pub accent: Rgb,
    pub text: Rgb,
    pub background: Rgb,
    pub white: Rgb,
}

impl Palette {
    /// The Tana Market brand colors
    pub const TANA: Palette = Palette {
        primary: Rgb(79, 70, 229),    // indigo
        secondary: Rgb(30, 41, 59),   // dark slate
        accent: Rgb(245, 158, 11),    // amber
        text: Rgb(51, 65, 85),        // slate
        background: Rgb(248, 250, 252),
        white: Rgb(255, 255, 255),
    };
}

impl Default for Palette {
    fn default() -> Self {
        Self::TANA
    }
}

/// Font family and sizes used by the slide templates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Typography {
    pub font_family: &'static str,
    pub cover_title: Pt,
    pub cover_subtitle: Pt,
    pub cover_byline: Pt,
    pub slide_title: Pt,
    pub bullet: Pt,
    pub bullet_space_before: Pt,
    pub bullet_space_after: Pt,
}

impl Typography {
    pub const TANA: Typography = Typography {
        font_family: "Calibri",
        cover_title: Pt(64.0),
        cover_subtitle: Pt(28.0),
        cover_byline: Pt(18.0),
        slide_title: Pt(32.0),
        bullet: Pt(20.0),
        bullet_space_before: Pt(0.0),
        bullet_space_after: Pt(14.0),
    };
}

impl Default for Typography {
    fn default() -> Self {
        Self::TANA
    }
}

/// Everything a template needs to style a slide
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Style {
    pub palette: Palette,
    pub typography: Typography,
}

impl Style {
    pub const TANA: Style = Style {
        palette: Palette::TANA,
        typography: Typography::TANA,
    };
}
