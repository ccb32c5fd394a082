//! Theme and font tokens.

use serde::{Deserialize, Serialize};

/// Accent color token applied across the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeColor {
    #[default]
    Pink,
    Sky,
    Violet,
    Teal,
    Amber,
}

impl ThemeColor {
    /// CSS/class token.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeColor::Pink => "pink",
            ThemeColor::Sky => "sky",
            ThemeColor::Violet => "violet",
            ThemeColor::Teal => "teal",
            ThemeColor::Amber => "amber",
        }
    }

    /// Picker label in the embedded locale.
    pub fn display_name(&self) -> &'static str {
        match self {
            ThemeColor::Pink => "Rosa",
            ThemeColor::Sky => "Azul",
            ThemeColor::Violet => "Lilás",
            ThemeColor::Teal => "Verde",
            ThemeColor::Amber => "Amarelo",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pink" => Some(ThemeColor::Pink),
            "sky" => Some(ThemeColor::Sky),
            "violet" => Some(ThemeColor::Violet),
            "teal" => Some(ThemeColor::Teal),
            "amber" => Some(ThemeColor::Amber),
            _ => None,
        }
    }

    /// All tokens, in picker order.
    pub fn all() -> [ThemeColor; 5] {
        [
            ThemeColor::Pink,
            ThemeColor::Sky,
            ThemeColor::Violet,
            ThemeColor::Teal,
            ThemeColor::Amber,
        ]
    }
}

/// Typography pairing for the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontTheme {
    #[default]
    Afetivo,
    Elegante,
    Moderno,
}

impl FontTheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            FontTheme::Afetivo => "afetivo",
            FontTheme::Elegante => "elegante",
            FontTheme::Moderno => "moderno",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FontTheme::Afetivo => "Afetivo",
            FontTheme::Elegante => "Elegante",
            FontTheme::Moderno => "Moderno",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "afetivo" => Some(FontTheme::Afetivo),
            "elegante" => Some(FontTheme::Elegante),
            "moderno" => Some(FontTheme::Moderno),
            _ => None,
        }
    }

    /// CSS class pair for the handwriting/body fonts.
    pub fn font_classes(&self) -> (&'static str, &'static str) {
        match self {
            FontTheme::Afetivo => ("font-handwriting-1", "font-body-1"),
            FontTheme::Elegante => ("font-handwriting-2", "font-body-2"),
            FontTheme::Moderno => ("font-handwriting-3", "font-body-3"),
        }
    }

    pub fn all() -> [FontTheme; 3] {
        [FontTheme::Afetivo, FontTheme::Elegante, FontTheme::Moderno]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_color_round_trip() {
        for color in ThemeColor::all() {
            assert_eq!(ThemeColor::parse(color.as_str()), Some(color));
        }
        assert_eq!(ThemeColor::parse("magenta"), None);
    }

    #[test]
    fn test_font_theme_round_trip() {
        for font in FontTheme::all() {
            assert_eq!(FontTheme::parse(font.as_str()), Some(font));
        }
        assert_eq!(FontTheme::default(), FontTheme::Afetivo);
    }
}
