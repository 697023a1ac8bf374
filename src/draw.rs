// SPDX: CC0-1.0

//! Stateless drawing primitives.
//!
//! Every primitive brackets its work in `save`/`restore`, so styles applied for
//! one call never leak into the next.

use crate::{
    error::RenderError,
    geom,
    style::{Color, Style},
    surface::{Canvas, Surface},
    Number, Point,
};
use core::{f64::consts::TAU, num::NonZeroU32};

pub const ANGLE_FONT: &str = "30px sans-serif";

/// Polyline through `points` in order, stroked once.
///
/// With `show_angle`, the angle in degrees of the last segment is written at
/// the final point with one decimal place.
pub fn draw_line<S: Surface + ?Sized>(
    surface: &mut S,
    style: &Style,
    show_angle: bool,
    points: &[Point<Number>],
) {
    let Some((from, rest)) = points.split_first() else {
        return;
    };

    surface.save();
    surface.begin_path();
    surface.apply_style(style);
    surface.move_to(from.x, from.y);
    for to in rest {
        surface.line_to(to.x, to.y);
    }
    if show_angle {
        if let [.., a, b] = points {
            if style.font.is_none() {
                surface.apply_style(&Style::default().with_font(ANGLE_FONT));
            }
            let label = format!("{:.1}", geom::angle_between(*a, *b));
            surface.fill_text(&label, b.x, b.y);
        }
    }
    surface.stroke();
    surface.restore();
}

pub fn draw_text<S: Surface + ?Sized>(
    surface: &mut S,
    text: &str,
    pos: Point<Number>,
    style: &Style,
) {
    surface.save();
    surface.apply_style(style);
    surface.fill_text(text, pos.x, pos.y);
    surface.restore();
}

/// `(x, y)` is the top-left corner. Stroked if `style` has a stroke color,
/// filled if it has a fill color.
pub fn draw_rect<S: Surface + ?Sized>(
    surface: &mut S,
    x: Number,
    y: Number,
    w: Number,
    h: Number,
    style: &Style,
    dash: Option<&[Number]>,
) {
    surface.save();
    surface.apply_style(style);
    if let Some(pattern) = dash {
        surface.set_line_dash(pattern);
    }
    if style.stroke.is_some() {
        surface.stroke_rect(x, y, w, h);
    }
    if style.fill.is_some() {
        surface.fill_rect(x, y, w, h);
    }
    surface.restore();
}

/// Full circle. Stroke and fill follow the same rule as [`draw_rect`].
pub fn draw_cycle<S: Surface + ?Sized>(
    surface: &mut S,
    x: Number,
    y: Number,
    r: Number,
    style: &Style,
) {
    surface.save();
    surface.apply_style(style);
    surface.begin_path();
    surface.arc(x, y, r, 0.0, TAU);
    if style.fill.is_some() {
        surface.fill();
    }
    if style.stroke.is_some() {
        surface.stroke();
    }
    surface.restore();
}

/// Passed to the per-segment style callback of [`draw_helix_curve`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SegmentEvent {
    pub index: usize,
    pub total: usize,
}

impl SegmentEvent {
    /// How far along the curve this segment is, in `[0, 1)`.
    pub fn progress(&self) -> Number {
        self.index as Number / self.total as Number
    }
}

/// Polyline through `points`.
///
/// Without `on_segment` this is one continuous path. With it, each segment is
/// its own path: the callback runs first, any style it returns is applied, and
/// the segment is stroked before the next one starts at its endpoint.
pub fn draw_helix_curve<S: Surface + ?Sized>(
    surface: &mut S,
    points: &[Point<Number>],
    on_segment: Option<&mut dyn FnMut(SegmentEvent) -> Option<Style>>,
) {
    let [start, rest @ ..] = points else {
        return;
    };
    if rest.is_empty() {
        return;
    }

    surface.save();
    surface.begin_path();
    surface.move_to(start.x, start.y);
    match on_segment {
        None => {
            for pt in rest {
                surface.line_to(pt.x, pt.y);
            }
            surface.stroke();
        }
        Some(on_segment) => {
            let total = rest.len();
            for (index, pt) in rest.iter().enumerate() {
                if let Some(style) = on_segment(SegmentEvent { index, total }) {
                    surface.apply_style(&style);
                }
                surface.line_to(pt.x, pt.y);
                surface.stroke();
                if index + 1 < total {
                    surface.begin_path();
                    surface.move_to(pt.x, pt.y);
                }
            }
        }
    }
    surface.restore();
}

#[derive(Clone, Debug)]
pub struct GridOptions {
    pub grid_size: NonZeroU32,
    pub line_width: Number,
    pub color: Color,
}

/// Grid lines every `grid_size` pixels, edges included, across the canvas.
pub fn setup_grid<S: Surface>(
    canvas: &mut Canvas<S>,
    options: &GridOptions,
) -> Result<(), RenderError> {
    let Point { x: w, y: h } = canvas.size();
    let step = usize::try_from(options.grid_size.get()).unwrap_or(usize::MAX);
    let style = Style::stroke(options.color).with_line_width(options.line_width);
    let surface = canvas.surface_mut()?;

    for x in (0..=w as usize).step_by(step) {
        let x = x as Number;
        draw_line(surface, &style, false, &[Point::new(x, 0.0), Point::new(x, h)]);
    }
    for y in (0..=h as usize).step_by(step) {
        let y = y as Number;
        draw_line(surface, &style, false, &[Point::new(0.0, y), Point::new(w, y)]);
    }
    Ok(())
}
