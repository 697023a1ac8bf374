// SPDX: CC0-1.0

//! Immutable style descriptors.
//!
//! A [`Style`] is passed by value to each drawing primitive, which applies it
//! between a `save` and a `restore` on the surface. Unset fields leave the
//! surface's current state alone.

use crate::Number;
use core::fmt;

/// RGBA color with 8-bit components.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parses `#rgb`, `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#')?;
        if !hex.is_ascii() {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        match hex.len() {
            3 => {
                let mut rgb = [0; 3];
                for (dst, c) in rgb.iter_mut().zip(hex.chars()) {
                    let v = c.to_digit(16)? as u8;
                    *dst = v * 16 + v;
                }
                Some(Self::rgb(rgb[0], rgb[1], rgb[2]))
            }
            6 => Some(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Self::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => None,
        }
    }

    /// Color at `t` along the straight line from `self` to `other`, per channel.
    /// `t` is clamped to `[0, 1]`.
    pub fn lerp(self, other: Color, t: Number) -> Color {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| {
            let (a, b) = (Number::from(a), Number::from(b));
            (a + (b - a) * t).round() as u8
        };
        Color {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }

    pub fn opacity(&self) -> Number {
        Number::from(self.a) / 255.0
    }

    /// `#rrggbb`, without alpha.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    // css syntax
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "rgb({},{},{})", self.r, self.g, self.b)
        } else {
            write!(
                f,
                "rgba({},{},{},{:.3})",
                self.r,
                self.g,
                self.b,
                self.opacity()
            )
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Style {
    pub stroke: Option<Color>,
    pub fill: Option<Color>,
    pub line_width: Option<Number>,
    /// e.g. `20px sans-serif`
    pub font: Option<String>,
}

impl Style {
    pub fn stroke(color: Color) -> Self {
        Self {
            stroke: Some(color),
            ..Self::default()
        }
    }

    pub fn fill(color: Color) -> Self {
        Self {
            fill: Some(color),
            ..Self::default()
        }
    }

    pub fn with_stroke(mut self, color: Color) -> Self {
        self.stroke = Some(color);
        self
    }

    pub fn with_fill(mut self, color: Color) -> Self {
        self.fill = Some(color);
        self
    }

    pub fn with_line_width(mut self, width: Number) -> Self {
        self.line_width = Some(width);
        self
    }

    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = Some(font.into());
        self
    }

    /// `self` with every field that `over` sets replaced by `over`'s value.
    pub fn merged(&self, over: &Style) -> Style {
        Style {
            stroke: over.stroke.or(self.stroke),
            fill: over.fill.or(self.fill),
            line_width: over.line_width.or(self.line_width),
            font: over.font.clone().or_else(|| self.font.clone()),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Style::default()
    }
}
