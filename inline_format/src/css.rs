// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inline CSS: declaration lists from `style` attributes, and the few value types the
//! formatters read and write.

use std::borrow::Cow;
use std::fmt;

use cssparser::{Delimiter, ParseError, Parser, ParserInput, Token};

use crate::{FontWeight, Rgba};

/// One `property: value` pair of inline CSS.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CssDeclaration {
    /// Lowercase property name.
    pub property: Cow<'static, str>,
    /// The value text, trimmed and without any `!important`.
    pub value: String,
}

impl CssDeclaration {
    /// Creates a declaration.
    pub fn new(property: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for CssDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.property, self.value)
    }
}

/// The view of one inline element that formatters inspect during import.
#[derive(Clone, Copy, Debug)]
pub struct InlineElement<'a> {
    tag: &'a str,
    declarations: &'a [CssDeclaration],
}

impl<'a> InlineElement<'a> {
    /// Creates an element view from its tag name and parsed `style` attribute.
    pub fn new(tag: &'a str, declarations: &'a [CssDeclaration]) -> Self {
        Self { tag, declarations }
    }

    /// The element's tag name.
    #[inline]
    pub fn tag(&self) -> &'a str {
        self.tag
    }

    /// The value of inline CSS `property`, if declared. The last declaration wins.
    pub fn style(&self, property: &str) -> Option<&'a str> {
        self.declarations
            .iter()
            .rev()
            .find(|d| d.property.eq_ignore_ascii_case(property))
            .map(|d| d.value.as_str())
    }
}

/// Parses the contents of a `style` attribute.
///
/// Malformed declarations are skipped; parsing resumes after the next semicolon.
pub fn parse_style_attribute(style: &str) -> Vec<CssDeclaration> {
    let mut input = ParserInput::new(style);
    let mut parser = Parser::new(&mut input);
    let mut declarations = Vec::new();
    while !parser.is_exhausted() {
        match parser.parse_until_after(Delimiter::Semicolon, parse_declaration) {
            Ok(declaration) => declarations.push(declaration),
            Err(err) => log::debug!("skipping malformed declaration in {style:?}: {err:?}"),
        }
    }
    declarations
}

fn parse_declaration<'i>(
    parser: &mut Parser<'i, '_>,
) -> Result<CssDeclaration, ParseError<'i, ()>> {
    let property = parser.expect_ident()?.to_ascii_lowercase();
    parser.expect_colon()?;
    let start = parser.position();
    while parser.next().is_ok() {}
    let mut value = parser.slice_from(start).trim();
    if let Some(bang) = value.find('!') {
        value = value[..bang].trim_end();
    }
    Ok(CssDeclaration::new(property, value))
}

/// Parses a CSS `font-weight` value: a number or the keywords `normal` and `bold`.
///
/// Numbers from 1 to 1000 are accepted and clamped to 100 to 900.
pub fn parse_font_weight(value: &str) -> Option<FontWeight> {
    parse_value(value, |parser| {
        let location = parser.current_source_location();
        match parser.next()? {
            Token::Number {
                int_value: Some(n), ..
            } => u16::try_from(*n)
                .ok()
                .filter(|n| (1..=1000).contains(n))
                .map(|n| FontWeight(n).clamped())
                .ok_or_else(|| location.new_custom_error(())),
            Token::Ident(name) if name.eq_ignore_ascii_case("normal") => Ok(FontWeight::NORMAL),
            Token::Ident(name) if name.eq_ignore_ascii_case("bold") => Ok(FontWeight::BOLD),
            _ => Err(location.new_custom_error(())),
        }
    })
}

/// Parses a length in `em`, returning the number of ems. A bare `0` is accepted.
pub fn parse_em_length(value: &str) -> Option<f32> {
    parse_value(value, |parser| {
        let location = parser.current_source_location();
        match parser.next()? {
            Token::Dimension { value, unit, .. } if unit.eq_ignore_ascii_case("em") => Ok(*value),
            Token::Number { value, .. } if *value == 0.0 => Ok(0.0),
            _ => Err(location.new_custom_error(())),
        }
    })
}

/// Parses a CSS color: hex notation, `rgb()`/`rgba()`, `hsl()`/`hsla()`, a named color or
/// `transparent`.
pub fn parse_css_color(value: &str) -> Option<Rgba> {
    parse_value(value, |parser| {
        let location = parser.current_source_location();
        let token = parser.next()?.clone();
        match token {
            Token::Hash(ref hex) | Token::IDHash(ref hex) => {
                parse_hash_color(hex).ok_or_else(|| location.new_custom_error(()))
            }
            Token::Ident(ref name) if name.eq_ignore_ascii_case("transparent") => {
                Ok(Rgba::new(0, 0, 0, 0.0))
            }
            Token::Ident(ref name) => {
                named_color(name).ok_or_else(|| location.new_custom_error(()))
            }
            Token::Function(ref name)
                if name.eq_ignore_ascii_case("rgb") || name.eq_ignore_ascii_case("rgba") =>
            {
                parser.parse_nested_block(parse_rgb_arguments)
            }
            Token::Function(ref name)
                if name.eq_ignore_ascii_case("hsl") || name.eq_ignore_ascii_case("hsla") =>
            {
                parser.parse_nested_block(parse_hsl_arguments)
            }
            _ => Err(location.new_custom_error(())),
        }
    })
}

/// Formats a color the way exported markup writes it: `#rrggbb` when opaque, `rgba()`
/// otherwise, with alpha at the precision the style name keeps.
pub fn format_css_color(color: Rgba) -> String {
    let percent = color.alpha_percent();
    if percent == 100 {
        format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b)
    } else {
        format!(
            "rgba({}, {}, {}, {})",
            color.r,
            color.g,
            color.b,
            f32::from(percent) / 100.0
        )
    }
}

fn parse_value<T>(
    value: &str,
    parse: impl for<'i, 't> FnOnce(&mut Parser<'i, 't>) -> Result<T, ParseError<'i, ()>>,
) -> Option<T> {
    let mut input = ParserInput::new(value);
    let mut parser = Parser::new(&mut input);
    parser.parse_entirely(parse).ok()
}

fn parse_hash_color(hex: &str) -> Option<Rgba> {
    let nibble = |c: u8| char::from(c).to_digit(16);
    let expanded: String;
    let hex = match hex.len() {
        3 | 4 => {
            expanded = hex.chars().flat_map(|c| [c, c]).collect();
            expanded.as_str()
        }
        6 | 8 => hex,
        _ => return None,
    };
    if !hex.bytes().all(|b| nibble(b).is_some()) {
        return None;
    }
    let (r, g, b) = crate::token::parse_hex_rgb(&hex[..6])?;
    let a = match hex.get(6..) {
        Some(alpha) if !alpha.is_empty() => f32::from(u8::from_str_radix(alpha, 16).ok()?) / 255.0,
        _ => 1.0,
    };
    Some(Rgba::new(r, g, b, a))
}

fn parse_rgb_arguments<'i>(parser: &mut Parser<'i, '_>) -> Result<Rgba, ParseError<'i, ()>> {
    let r = parse_channel(parser)?;
    let legacy = parser.try_parse(|p| p.expect_comma()).is_ok();
    let g = parse_channel(parser)?;
    if legacy {
        parser.expect_comma()?;
    }
    let b = parse_channel(parser)?;
    let has_alpha = if legacy {
        parser.try_parse(|p| p.expect_comma()).is_ok()
    } else {
        parser.try_parse(|p| p.expect_delim('/')).is_ok()
    };
    let a = if has_alpha { parse_alpha(parser)? } else { 1.0 };
    Ok(Rgba::new(r, g, b, a))
}

fn parse_hsl_arguments<'i>(parser: &mut Parser<'i, '_>) -> Result<Rgba, ParseError<'i, ()>> {
    let hue = parse_hue(parser)?;
    let legacy = parser.try_parse(|p| p.expect_comma()).is_ok();
    let saturation = parser.expect_percentage()?.clamp(0.0, 1.0);
    if legacy {
        parser.expect_comma()?;
    }
    let lightness = parser.expect_percentage()?.clamp(0.0, 1.0);
    let has_alpha = if legacy {
        parser.try_parse(|p| p.expect_comma()).is_ok()
    } else {
        parser.try_parse(|p| p.expect_delim('/')).is_ok()
    };
    let a = if has_alpha { parse_alpha(parser)? } else { 1.0 };
    let [r, g, b] = hsl_to_rgb(hue, saturation, lightness);
    Ok(Rgba::new(r, g, b, a))
}

/// Reads a hue in degrees, as a bare number or a `deg`/`turn` dimension.
fn parse_hue<'i>(parser: &mut Parser<'i, '_>) -> Result<f32, ParseError<'i, ()>> {
    let location = parser.current_source_location();
    match parser.next()? {
        Token::Number { value, .. } => Ok(*value),
        Token::Dimension { value, unit, .. } if unit.eq_ignore_ascii_case("deg") => Ok(*value),
        Token::Dimension { value, unit, .. } if unit.eq_ignore_ascii_case("turn") => {
            Ok(*value * 360.0)
        }
        _ => Err(location.new_custom_error(())),
    }
}

/// Converts hue (degrees), saturation and lightness (both `0..=1`) to RGB channels.
fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> [u8; 3] {
    let h = hue.rem_euclid(360.0) / 360.0;
    let q = if lightness < 0.5 {
        lightness * (1.0 + saturation)
    } else {
        lightness + saturation - lightness * saturation
    };
    let p = 2.0 * lightness - q;
    let channel = |mut t: f32| {
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }
        let v = if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 0.5 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        };
        to_channel(v * 255.0)
    };
    [channel(h + 1.0 / 3.0), channel(h), channel(h - 1.0 / 3.0)]
}

fn named_color(name: &str) -> Option<Rgba> {
    let name = name.to_ascii_lowercase();
    NAMED_COLORS
        .binary_search_by(|(known, _)| (*known).cmp(name.as_str()))
        .ok()
        .map(|i| {
            let [r, g, b] = NAMED_COLORS[i].1;
            Rgba::opaque(r, g, b)
        })
}

/// The CSS named colors, sorted by name.
const NAMED_COLORS: &[(&str, [u8; 3])] = &[
    ("aliceblue", [240, 248, 255]),
    ("antiquewhite", [250, 235, 215]),
    ("aqua", [0, 255, 255]),
    ("aquamarine", [127, 255, 212]),
    ("azure", [240, 255, 255]),
    ("beige", [245, 245, 220]),
    ("bisque", [255, 228, 196]),
    ("black", [0, 0, 0]),
    ("blanchedalmond", [255, 235, 205]),
    ("blue", [0, 0, 255]),
    ("blueviolet", [138, 43, 226]),
    ("brown", [165, 42, 42]),
    ("burlywood", [222, 184, 135]),
    ("cadetblue", [95, 158, 160]),
    ("chartreuse", [127, 255, 0]),
    ("chocolate", [210, 105, 30]),
    ("coral", [255, 127, 80]),
    ("cornflowerblue", [100, 149, 237]),
    ("cornsilk", [255, 248, 220]),
    ("crimson", [220, 20, 60]),
    ("cyan", [0, 255, 255]),
    ("darkblue", [0, 0, 139]),
    ("darkcyan", [0, 139, 139]),
    ("darkgoldenrod", [184, 134, 11]),
    ("darkgray", [169, 169, 169]),
    ("darkgreen", [0, 100, 0]),
    ("darkgrey", [169, 169, 169]),
    ("darkkhaki", [189, 183, 107]),
    ("darkmagenta", [139, 0, 139]),
    ("darkolivegreen", [85, 107, 47]),
    ("darkorange", [255, 140, 0]),
    ("darkorchid", [153, 50, 204]),
    ("darkred", [139, 0, 0]),
    ("darksalmon", [233, 150, 122]),
    ("darkseagreen", [143, 188, 143]),
    ("darkslateblue", [72, 61, 139]),
    ("darkslategray", [47, 79, 79]),
    ("darkslategrey", [47, 79, 79]),
    ("darkturquoise", [0, 206, 209]),
    ("darkviolet", [148, 0, 211]),
    ("deeppink", [255, 20, 147]),
    ("deepskyblue", [0, 191, 255]),
    ("dimgray", [105, 105, 105]),
    ("dimgrey", [105, 105, 105]),
    ("dodgerblue", [30, 144, 255]),
    ("firebrick", [178, 34, 34]),
    ("floralwhite", [255, 250, 240]),
    ("forestgreen", [34, 139, 34]),
    ("fuchsia", [255, 0, 255]),
    ("gainsboro", [220, 220, 220]),
    ("ghostwhite", [248, 248, 255]),
    ("gold", [255, 215, 0]),
    ("goldenrod", [218, 165, 32]),
    ("gray", [128, 128, 128]),
    ("green", [0, 128, 0]),
    ("greenyellow", [173, 255, 47]),
    ("grey", [128, 128, 128]),
    ("honeydew", [240, 255, 240]),
    ("hotpink", [255, 105, 180]),
    ("indianred", [205, 92, 92]),
    ("indigo", [75, 0, 130]),
    ("ivory", [255, 255, 240]),
    ("khaki", [240, 230, 140]),
    ("lavender", [230, 230, 250]),
    ("lavenderblush", [255, 240, 245]),
    ("lawngreen", [124, 252, 0]),
    ("lemonchiffon", [255, 250, 205]),
    ("lightblue", [173, 216, 230]),
    ("lightcoral", [240, 128, 128]),
    ("lightcyan", [224, 255, 255]),
    ("lightgoldenrodyellow", [250, 250, 210]),
    ("lightgray", [211, 211, 211]),
    ("lightgreen", [144, 238, 144]),
    ("lightgrey", [211, 211, 211]),
    ("lightpink", [255, 182, 193]),
    ("lightsalmon", [255, 160, 122]),
    ("lightseagreen", [32, 178, 170]),
    ("lightskyblue", [135, 206, 250]),
    ("lightslategray", [119, 136, 153]),
    ("lightslategrey", [119, 136, 153]),
    ("lightsteelblue", [176, 196, 222]),
    ("lightyellow", [255, 255, 224]),
    ("lime", [0, 255, 0]),
    ("limegreen", [50, 205, 50]),
    ("linen", [250, 240, 230]),
    ("magenta", [255, 0, 255]),
    ("maroon", [128, 0, 0]),
    ("mediumaquamarine", [102, 205, 170]),
    ("mediumblue", [0, 0, 205]),
    ("mediumorchid", [186, 85, 211]),
    ("mediumpurple", [147, 112, 219]),
    ("mediumseagreen", [60, 179, 113]),
    ("mediumslateblue", [123, 104, 238]),
    ("mediumspringgreen", [0, 250, 154]),
    ("mediumturquoise", [72, 209, 204]),
    ("mediumvioletred", [199, 21, 133]),
    ("midnightblue", [25, 25, 112]),
    ("mintcream", [245, 255, 250]),
    ("mistyrose", [255, 228, 225]),
    ("moccasin", [255, 228, 181]),
    ("navajowhite", [255, 222, 173]),
    ("navy", [0, 0, 128]),
    ("oldlace", [253, 245, 230]),
    ("olive", [128, 128, 0]),
    ("olivedrab", [107, 142, 35]),
    ("orange", [255, 165, 0]),
    ("orangered", [255, 69, 0]),
    ("orchid", [218, 112, 214]),
    ("palegoldenrod", [238, 232, 170]),
    ("palegreen", [152, 251, 152]),
    ("paleturquoise", [175, 238, 238]),
    ("palevioletred", [219, 112, 147]),
    ("papayawhip", [255, 239, 213]),
    ("peachpuff", [255, 218, 185]),
    ("peru", [205, 133, 63]),
    ("pink", [255, 192, 203]),
    ("plum", [221, 160, 221]),
    ("powderblue", [176, 224, 230]),
    ("purple", [128, 0, 128]),
    ("rebeccapurple", [102, 51, 153]),
    ("red", [255, 0, 0]),
    ("rosybrown", [188, 143, 143]),
    ("royalblue", [65, 105, 225]),
    ("saddlebrown", [139, 69, 19]),
    ("salmon", [250, 128, 114]),
    ("sandybrown", [244, 164, 96]),
    ("seagreen", [46, 139, 87]),
    ("seashell", [255, 245, 238]),
    ("sienna", [160, 82, 45]),
    ("silver", [192, 192, 192]),
    ("skyblue", [135, 206, 235]),
    ("slateblue", [106, 90, 205]),
    ("slategray", [112, 128, 144]),
    ("slategrey", [112, 128, 144]),
    ("snow", [255, 250, 250]),
    ("springgreen", [0, 255, 127]),
    ("steelblue", [70, 130, 180]),
    ("tan", [210, 180, 140]),
    ("teal", [0, 128, 128]),
    ("thistle", [216, 191, 216]),
    ("tomato", [255, 99, 71]),
    ("turquoise", [64, 224, 208]),
    ("violet", [238, 130, 238]),
    ("wheat", [245, 222, 179]),
    ("white", [255, 255, 255]),
    ("whitesmoke", [245, 245, 245]),
    ("yellow", [255, 255, 0]),
    ("yellowgreen", [154, 205, 50]),
];

fn parse_channel<'i>(parser: &mut Parser<'i, '_>) -> Result<u8, ParseError<'i, ()>> {
    let location = parser.current_source_location();
    let value = match parser.next()? {
        Token::Number { value, .. } => *value,
        Token::Percentage { unit_value, .. } => *unit_value * 255.0,
        _ => return Err(location.new_custom_error(())),
    };
    Ok(to_channel(value))
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "The value is clamped to 0..=255 before the cast."
)]
fn to_channel(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

fn parse_alpha<'i>(parser: &mut Parser<'i, '_>) -> Result<f32, ParseError<'i, ()>> {
    let location = parser.current_source_location();
    match parser.next()? {
        Token::Number { value, .. } => Ok(value.clamp(0.0, 1.0)),
        Token::Percentage { unit_value, .. } => Ok(unit_value.clamp(0.0, 1.0)),
        _ => Err(location.new_custom_error(())),
    }
}
