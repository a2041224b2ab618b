//! Random colour generation in hex or RGB notation.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Symbols a hex colour is drawn from. There is no `0`.
pub const HEX_SYMBOLS: [char; 15] = [
    '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F',
];

/// Notation to generate colours in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Hex,
    Rgb,
}

impl ColorMode {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Hex => "HEX Color",
            Self::Rgb => "RGB Color",
        }
    }
}

/// A generated colour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorValue {
    /// Six upper-case hex symbols, without the leading `#`.
    Hex { code: String },
    Rgb { r: u8, g: u8, b: u8 },
}

impl ColorValue {
    #[must_use]
    pub fn mode(&self) -> ColorMode {
        match self {
            Self::Hex { .. } => ColorMode::Hex,
            Self::Rgb { .. } => ColorMode::Rgb,
        }
    }

    /// Channel values, for painting the colour on screen.
    #[must_use]
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        match self {
            Self::Rgb { r, g, b } => (*r, *g, *b),
            Self::Hex { code } => {
                let channel = |start: usize| {
                    code.get(start..start + 2)
                        .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                        .unwrap_or(0)
                };
                (channel(0), channel(2), channel(4))
            }
        }
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hex { code } => write!(f, "#{code}"),
            Self::Rgb { r, g, b } => write!(f, "rgb({r},{g},{b})"),
        }
    }
}

/// Draw a fresh colour in `mode`.
pub fn generate<R: Rng + ?Sized>(mode: ColorMode, rng: &mut R) -> ColorValue {
    match mode {
        ColorMode::Hex => {
            let code = (0..6)
                .map(|_| HEX_SYMBOLS[rng.random_range(0..HEX_SYMBOLS.len())])
                .collect();
            ColorValue::Hex { code }
        }
        ColorMode::Rgb => ColorValue::Rgb {
            r: rng.random(),
            g: rng.random(),
            b: rng.random(),
        },
    }
}

/// Colour generator widget state: the active notation and the last colour.
#[derive(Debug, Clone)]
pub struct ColorPicker {
    mode: ColorMode,
    value: ColorValue,
}

impl Default for ColorPicker {
    fn default() -> Self {
        Self {
            mode: ColorMode::Hex,
            value: ColorValue::Hex {
                code: "000000".to_string(),
            },
        }
    }
}

impl ColorPicker {
    #[must_use]
    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    #[must_use]
    pub fn value(&self) -> &ColorValue {
        &self.value
    }

    /// Switch notation and immediately draw a colour in it.
    pub fn set_mode<R: Rng + ?Sized>(&mut self, mode: ColorMode, rng: &mut R) {
        self.mode = mode;
        self.regenerate(rng);
    }

    /// Draw a new colour in the current notation.
    pub fn regenerate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.value = generate(self.mode, rng);
        log::debug!("generated colour {}", self.value);
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn hex_never_contains_zero() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..2_000 {
            let ColorValue::Hex { code } = generate(ColorMode::Hex, &mut rng) else {
                panic!("expected a hex colour");
            };
            assert_eq!(code.len(), 6);
            assert!(!code.contains('0'), "{code} contains 0");
            assert!(code.chars().all(|c| HEX_SYMBOLS.contains(&c)));
        }
    }

    #[test]
    fn rgb_emits_three_channels() {
        let mut rng = StdRng::seed_from_u64(11);
        let value = generate(ColorMode::Rgb, &mut rng);
        assert_eq!(value.mode(), ColorMode::Rgb);
        let rendered = value.to_string();
        assert!(rendered.starts_with("rgb("));
        let parts: Vec<u16> = rendered
            .trim_start_matches("rgb(")
            .trim_end_matches(')')
            .split(',')
            .map(|part| part.parse().unwrap())
            .collect();
        assert_eq!(parts.len(), 3);
        assert!(parts.iter().all(|channel| *channel <= 255));
    }

    #[test]
    fn hex_channels_decode() {
        let value = ColorValue::Hex {
            code: "FF8811".into(),
        };
        assert_eq!(value.to_rgb(), (255, 136, 17));
        assert_eq!(value.to_string(), "#FF8811");
    }

    #[test]
    fn picker_starts_black_and_follows_mode() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut picker = ColorPicker::default();
        assert_eq!(picker.value().to_string(), "#000000");
        picker.set_mode(ColorMode::Rgb, &mut rng);
        assert_eq!(picker.value().mode(), ColorMode::Rgb);
        picker.regenerate(&mut rng);
        assert_eq!(picker.value().mode(), ColorMode::Rgb);
        picker.set_mode(ColorMode::Hex, &mut rng);
        assert_eq!(picker.value().mode(), ColorMode::Hex);
    }
}
