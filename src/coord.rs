// SPDX: CC0-1.0

//! Cartesian coordinate space on a canvas.
//!
//! Each axis shows a window symmetric about zero whose half-width is the
//! larger absolute endpoint of the declared bounds, so a domain of `[-2, 5]`
//! is displayed as `[-5, 5]`.

use crate::{
    draw::{draw_line, draw_text},
    error::{ConfigError, RenderError},
    geom::max_abs,
    sample::{sample, Samples},
    style::{Color, Style},
    surface::{Canvas, Surface},
    Number, Point,
};
use tracing::{debug, warn};

/// Linear map from `[-max_abs, max_abs]` onto `[low, high]` in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scale {
    low: Number,
    high: Number,
    max_abs: Number,
}

impl Scale {
    #[inline]
    pub const fn new(low: Number, high: Number, max_abs: Number) -> Self {
        Self { low, high, max_abs }
    }

    /// Undefined (NaN) when `max_abs` is zero.
    #[inline]
    pub fn apply(&self, v: Number) -> Number {
        self.low + (self.high - self.low) * (v + self.max_abs) / (2.0 * self.max_abs)
    }

    pub const fn max_abs(&self) -> Number {
        self.max_abs
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AxisConfig {
    /// x bounds
    pub domain: [Number; 2],
    /// y bounds
    pub range: [Number; 2],
    /// pixel length of the x axis, full canvas width if unset
    pub x_size: Option<Number>,
    /// pixel length of the y axis, full canvas height if unset
    pub y_size: Option<Number>,
    pub style: Style,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            domain: [-5.0, 5.0],
            range: [-5.0, 5.0],
            x_size: None,
            y_size: None,
            style: Style::stroke(Color::WHITE),
        }
    }
}

impl AxisConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if max_abs(&self.domain) == 0.0 {
            return Err(ConfigError::ZeroExtent { axis: "domain" });
        }
        if max_abs(&self.range) == 0.0 {
            return Err(ConfigError::ZeroExtent { axis: "range" });
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Label {
    /// Drawn at the curve's highest sample with the default label style.
    Text(String),
    Custom {
        name: String,
        /// pixel position, overrides the highest sample
        pos: Option<Point<Number>>,
        /// merged over the default label style
        style: Style,
    },
}

impl From<&str> for Label {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CurveOptions {
    /// number of sampling intervals; `rate + 1` samples are taken
    pub rate: u32,
    pub style: Style,
    pub label: Option<Label>,
}

impl Default for CurveOptions {
    fn default() -> Self {
        Self {
            rate: 1000,
            style: Style::stroke(Color::RED),
            label: None,
        }
    }
}

pub fn default_label_style() -> Style {
    Style::fill(Color::RED).with_font("20px sans-serif")
}

/// Scales and axis geometry for one canvas, fixed at construction.
#[derive(Clone, Debug)]
pub struct CoordSpace {
    x_scale: Scale,
    y_scale: Scale,
    size: Point<Number>,
    axis_style: Style,
}

/// Derives the scales for `canvas` from `axis`. Bounds are not validated;
/// see [`AxisConfig::validate`].
pub fn setup_coord<S: Surface>(canvas: &Canvas<S>, axis: &AxisConfig) -> CoordSpace {
    let Point { x: w, y: h } = canvas.size();
    let x_size = axis.x_size.unwrap_or(w);
    let y_size = axis.y_size.unwrap_or(h);

    // pixel y grows downward, so the low end of the range sits at the bottom
    let x_scale = Scale::new((w - x_size) / 2.0, (w + x_size) / 2.0, max_abs(&axis.domain));
    let y_scale = Scale::new((h + y_size) / 2.0, (h - y_size) / 2.0, max_abs(&axis.range));
    debug!(?x_scale, ?y_scale, "coordinate space ready");

    CoordSpace {
        x_scale,
        y_scale,
        size: Point { x: w, y: h },
        axis_style: axis.style.clone(),
    }
}

impl CoordSpace {
    pub const fn x_scale(&self) -> &Scale {
        &self.x_scale
    }

    pub const fn y_scale(&self) -> &Scale {
        &self.y_scale
    }

    /// Pixel position of the mathematical origin.
    pub fn origin(&self) -> Point<Number> {
        Point {
            x: self.x_scale.apply(0.0),
            y: self.y_scale.apply(0.0),
        }
    }

    pub fn to_pixel(&self, p: Point<Number>) -> Point<Number> {
        Point {
            x: self.x_scale.apply(p.x),
            y: self.y_scale.apply(p.y),
        }
    }

    /// Draws both axes through the canvas center.
    pub fn setup<S: Surface>(&self, canvas: &mut Canvas<S>) -> Result<(), RenderError> {
        let surface = canvas.surface_mut()?;
        let Point { x: w, y: h } = self.size;
        let x = [self.x_scale.low, self.x_scale.high];
        let y = [self.y_scale.low, self.y_scale.high];
        draw_line(
            surface,
            &self.axis_style,
            false,
            &[Point::new(x[0], h / 2.0), Point::new(x[1], h / 2.0)],
        );
        draw_line(
            surface,
            &self.axis_style,
            false,
            &[Point::new(w / 2.0, y[0]), Point::new(w / 2.0, y[1])],
        );
        Ok(())
    }

    /// Plots `fx` over the visible domain and labels it if asked to.
    pub fn draw<S, F>(
        &self,
        canvas: &mut Canvas<S>,
        fx: F,
        options: &CurveOptions,
    ) -> Result<Samples, RenderError>
    where
        S: Surface,
        F: FnMut(Number) -> Number,
    {
        let surface = canvas.surface_mut()?;
        let samples = sample(
            fx,
            self.x_scale.max_abs,
            options.rate,
            &self.x_scale,
            &self.y_scale,
        );

        if samples.pixels.len() < 2 {
            debug!(
                kept = samples.pixels.len(),
                "too few samples to draw a curve"
            );
        } else {
            draw_line(surface, &options.style, false, &samples.pixels);
        }

        let Some(ref label) = options.label else {
            return Ok(samples);
        };
        let anchor = samples.peak.map(|p| p.pixel);
        let (text, pos, style) = match label {
            Label::Text(text) => (text, anchor, default_label_style()),
            Label::Custom { name, pos, style } => {
                (name, pos.or(anchor), default_label_style().merged(style))
            }
        };
        match pos {
            Some(pos) => draw_text(surface, text, pos, &style),
            None => warn!(label = %text, "no valid sample to anchor the label to"),
        }

        Ok(samples)
    }
}
