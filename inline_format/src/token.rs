// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed style tokens and their string encoding.
//!
//! The host content stores opaque [`StyleName`]s. Everything above this module works with
//! [`StyleToken`]; the prefix-dash-value strings exist only at that boundary:
//!
//! | Token                        | Style name            |
//! |------------------------------|-----------------------|
//! | `Weight(FontWeight(700))`    | `WEIGHT-700`          |
//! | `LetterSpacing(-150)`        | `LETTERSPACING-N150`  |
//! | `Color(Rgba { 255, 0, 0, 1.0 })` | `COLOR-ff000064`  |
//! | `Italic`                     | `ITALIC`              |
//!
//! Color alpha is stored as a percentage (`0..=100`, two hex digits), so alpha survives a round
//! trip only to the nearest 1/100.

use core::fmt;

use styled_content::StyleName;

/// The namespace of a logical inline property.
///
/// At most one style name per prefix is present on any character.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Prefix {
    /// Font weight, `WEIGHT-<n>`.
    Weight,
    /// Italic, the bare flag `ITALIC`.
    Italic,
    /// Underline, the bare flag `UNDERLINE`.
    Underline,
    /// Uppercase transform, the bare flag `UPPERCASE`.
    Uppercase,
    /// Letter spacing in hundredths of an em, `LETTERSPACING-<n>`.
    LetterSpacing,
    /// Text color, `COLOR-<rrggbbaa>`.
    Color,
}

impl Prefix {
    /// Every prefix, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Weight,
        Self::Italic,
        Self::Underline,
        Self::Uppercase,
        Self::LetterSpacing,
        Self::Color,
    ];

    /// The textual prefix used in style names.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weight => "WEIGHT",
            Self::Italic => "ITALIC",
            Self::Underline => "UNDERLINE",
            Self::Uppercase => "UPPERCASE",
            Self::LetterSpacing => "LETTERSPACING",
            Self::Color => "COLOR",
        }
    }

    /// Returns `true` if `name` belongs to this prefix.
    #[inline]
    pub fn matches(self, name: &str) -> bool {
        name.starts_with(self.as_str())
    }

    /// The bare style name consisting of the prefix alone.
    pub fn flag_style(self) -> StyleName {
        StyleName::new(self.as_str())
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A font weight on the CSS scale.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// Weight 100.
    pub const THIN: Self = Self(100);
    /// Weight 400, the weight of text without a weight token.
    pub const NORMAL: Self = Self(400);
    /// Weight 600, the lightest weight considered bold.
    pub const SEMI_BOLD: Self = Self(600);
    /// Weight 700, set when turning bold on over text that is not yet bold.
    pub const BOLD: Self = Self(700);
    /// Weight 900.
    pub const BLACK: Self = Self(900);

    /// The numeric weight.
    #[inline]
    pub const fn value(self) -> u16 {
        self.0
    }

    /// This weight limited to the stored range, [`THIN`](Self::THIN) to
    /// [`BLACK`](Self::BLACK).
    #[inline]
    #[must_use]
    pub fn clamped(self) -> Self {
        Self(self.0.clamp(Self::THIN.0, Self::BLACK.0))
    }

    /// Returns `true` if this weight counts as bold.
    #[inline]
    pub fn is_bold(self) -> bool {
        self >= Self::SEMI_BOLD
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// An sRGB color with straight alpha in `0.0..=1.0`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha, `0.0` (transparent) to `1.0` (opaque).
    pub a: f32,
}

impl Rgba {
    /// Opaque black, the color of text without a color token.
    pub const BLACK: Self = Self::opaque(0, 0, 0);

    /// A color with the given alpha.
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// A fully opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Alpha as the stored percentage, `0..=100`.
    pub fn alpha_percent(self) -> u8 {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "The value is clamped to 0..=100 before the cast."
        )]
        let percent = (self.a * 100.0).round().clamp(0.0, 100.0) as u8;
        percent
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::BLACK
    }
}

/// One typed inline style.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum StyleToken {
    /// A font weight other than normal.
    Weight(FontWeight),
    /// Italic text.
    Italic,
    /// Underlined text.
    Underline,
    /// Text rendered in capitals.
    Uppercase,
    /// Extra letter spacing in hundredths of an em.
    LetterSpacing(i16),
    /// Text color.
    Color(Rgba),
}

impl StyleToken {
    /// The prefix this token belongs to.
    pub const fn prefix(&self) -> Prefix {
        match self {
            Self::Weight(_) => Prefix::Weight,
            Self::Italic => Prefix::Italic,
            Self::Underline => Prefix::Underline,
            Self::Uppercase => Prefix::Uppercase,
            Self::LetterSpacing(_) => Prefix::LetterSpacing,
            Self::Color(_) => Prefix::Color,
        }
    }

    /// Encodes the token as a host style name.
    pub fn to_style_name(&self) -> StyleName {
        match *self {
            Self::Weight(weight) => numeric_to_style(Prefix::Weight, i32::from(weight.value())),
            Self::LetterSpacing(spacing) => {
                numeric_to_style(Prefix::LetterSpacing, i32::from(spacing))
            }
            Self::Color(color) => color_to_style(color),
            Self::Italic | Self::Underline | Self::Uppercase => self.prefix().flag_style(),
        }
    }

    /// Decodes a host style name, returning `None` for names this version cannot read.
    pub fn from_style_name(name: &str) -> Option<Self> {
        let prefix = Prefix::ALL.into_iter().find(|p| p.matches(name))?;
        match prefix {
            Prefix::Weight => style_to_numeric(prefix, name)
                .and_then(|n| u16::try_from(n).ok())
                .map(|n| Self::Weight(FontWeight(n))),
            Prefix::LetterSpacing => style_to_numeric(prefix, name)
                .and_then(|n| i16::try_from(n).ok())
                .map(Self::LetterSpacing),
            Prefix::Color => style_to_color(name).map(Self::Color),
            Prefix::Italic if name == prefix.as_str() => Some(Self::Italic),
            Prefix::Underline if name == prefix.as_str() => Some(Self::Underline),
            Prefix::Uppercase if name == prefix.as_str() => Some(Self::Uppercase),
            _ => None,
        }
    }
}

impl From<StyleToken> for StyleName {
    fn from(token: StyleToken) -> Self {
        token.to_style_name()
    }
}

/// Encodes `n` as `{prefix}-{n}`, writing negative numbers as `N` followed by the magnitude.
pub fn numeric_to_style(prefix: Prefix, n: i32) -> StyleName {
    let name = if n < 0 {
        format!("{}-N{}", prefix.as_str(), n.unsigned_abs())
    } else {
        format!("{}-{n}", prefix.as_str())
    };
    StyleName::from(name)
}

/// Decodes a style name written by [`numeric_to_style`].
pub fn style_to_numeric(prefix: Prefix, style: &str) -> Option<i32> {
    let value = strip_value(prefix, style)?;
    let (negative, digits) = match value.strip_prefix('N') {
        Some(rest) => (true, rest),
        None => (false, value),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let magnitude: i64 = digits.parse().ok()?;
    i32::try_from(if negative { -magnitude } else { magnitude }).ok()
}

/// Encodes a color as `COLOR-rrggbbaa`, with `aa` the alpha percentage in hex.
pub fn color_to_style(color: Rgba) -> StyleName {
    StyleName::from(format!(
        "{}-{:02x}{:02x}{:02x}{:02x}",
        Prefix::Color.as_str(),
        color.r,
        color.g,
        color.b,
        color.alpha_percent()
    ))
}

/// Decodes a style name written by [`color_to_style`].
pub fn style_to_color(style: &str) -> Option<Rgba> {
    let hex = strip_value(Prefix::Color, style)?;
    if hex.len() != 8 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let (r, g, b) = parse_hex_rgb(&hex[..6])?;
    let alpha = u8::from_str_radix(&hex[6..], 16).ok()?;
    if alpha > 100 {
        return None;
    }
    Some(Rgba::new(r, g, b, f32::from(alpha) / 100.0))
}

/// Parses `rrggbb` hex digits.
pub(crate) fn parse_hex_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

fn strip_value(prefix: Prefix, style: &str) -> Option<&str> {
    style.strip_prefix(prefix.as_str())?.strip_prefix('-')
}
