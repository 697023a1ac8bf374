// SPDX: CC0-1.0

//! Drawing surface abstraction.
//!
//! # Graphics State Model
//!
//! A surface keeps a current path, stroke and fill colors, line width, font and
//! dash pattern. `save` pushes all of it onto a stack, `restore` pops it back.
//!
//! # Coordinate System
//!
//! Pixel coordinates with the origin at the top-left, x growing rightward and
//! y growing downward.

use crate::{error::RenderError, style::Style, Number, Point};

pub trait Surface {
    /// Push the graphics state onto the stack.
    fn save(&mut self);

    /// Pop the graphics state from the stack.
    fn restore(&mut self);

    /// Overwrite the graphics state with every field `style` sets.
    fn apply_style(&mut self, style: &Style);

    /// Empty slice for solid lines.
    fn set_line_dash(&mut self, pattern: &[Number]);

    /// Discard the current path and start a new one.
    fn begin_path(&mut self);

    fn move_to(&mut self, x: Number, y: Number);

    fn line_to(&mut self, x: Number, y: Number);

    /// Add an arc to the current path. Angles in radians.
    fn arc(&mut self, cx: Number, cy: Number, r: Number, start: Number, end: Number);

    /// Stroke the current path with the stroke color. The path is kept.
    fn stroke(&mut self);

    /// Fill the current path with the fill color. The path is kept.
    fn fill(&mut self);

    fn stroke_rect(&mut self, x: Number, y: Number, w: Number, h: Number);

    fn fill_rect(&mut self, x: Number, y: Number, w: Number, h: Number);

    fn fill_text(&mut self, text: &str, x: Number, y: Number);
}

/// A sized drawing area which may or may not have a surface bound to it yet.
#[derive(Clone, Debug)]
pub struct Canvas<S> {
    width: u32,
    height: u32,
    surface: Option<S>,
}

impl<S: Surface> Canvas<S> {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            surface: None,
        }
    }

    #[inline]
    pub const fn with_surface(width: u32, height: u32, surface: S) -> Self {
        Self {
            width,
            height,
            surface: Some(surface),
        }
    }

    /// Binds `surface`, handing back whichever one was bound before.
    pub fn attach(&mut self, surface: S) -> Option<S> {
        self.surface.replace(surface)
    }

    pub fn detach(&mut self) -> Option<S> {
        self.surface.take()
    }

    pub fn surface_mut(&mut self) -> Result<&mut S, RenderError> {
        self.surface.as_mut().ok_or(RenderError::NoSurface)
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub const fn width(&self) -> u32 {
        self.width
    }

    pub const fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> Point<Number> {
        Point {
            x: Number::from(self.width),
            y: Number::from(self.height),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::{testing::Recorder, *};

    #[test]
    fn test_missing_surface_is_an_error() {
        let mut canvas = Canvas::<Recorder>::new(200, 100);
        assert_eq!(canvas.surface_mut().err(), Some(RenderError::NoSurface));
        assert!(canvas.attach(Recorder::default()).is_none());
        assert!(canvas.surface_mut().is_ok());
        assert!(canvas.detach().is_some());
        assert!(canvas.surface_mut().is_err());
    }

    #[test]
    fn test_size() {
        let canvas = Canvas::<Recorder>::new(200, 100);
        assert_eq!(canvas.size(), Point::new(200.0, 100.0));
    }
}
