// SPDX: CC0-1.0

//! Spiral point sets.

use crate::{geom::angle_to_pos, Number, Point};
use core::iter::FusedIterator;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HelixOptions {
    /// number of points, more is smoother
    pub count: usize,
    /// degrees
    pub deg_start: Number,
    /// degrees
    pub deg_end: Number,
    pub r_start: Number,
    /// smaller than `r_start` spirals inward
    pub r_end: Number,
}

impl HelixOptions {
    /// One full turn of 100 points.
    pub const fn new(r_start: Number, r_end: Number) -> Self {
        Self {
            count: 100,
            deg_start: 0.0,
            deg_end: 360.0,
            r_start,
            r_end,
        }
    }
}

/// Every point of the spiral, first and last included.
pub fn helix_points(options: &HelixOptions, center: Point<Number>) -> Vec<Point<Number>> {
    HelixPoints::new(options, center).collect()
}

/// Lazy form of [`helix_points`]. It yields the same points and cannot be
/// rewound; build a new one to start over.
#[derive(Debug)]
pub struct HelixPoints {
    center: Point<Number>,
    deg_start: Number,
    deg_step: Number,
    r_start: Number,
    r_step: Number,
    next: usize,
    count: usize,
}

impl HelixPoints {
    pub fn new(options: &HelixOptions, center: Point<Number>) -> Self {
        let intervals = options.count.saturating_sub(1).max(1) as Number;
        Self {
            center,
            deg_start: options.deg_start,
            deg_step: (options.deg_end - options.deg_start) / intervals,
            r_start: options.r_start,
            r_step: (options.r_end - options.r_start) / intervals,
            next: 0,
            count: options.count,
        }
    }
}

impl Iterator for HelixPoints {
    type Item = Point<Number>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.count {
            return None;
        }
        let i = self.next as Number;
        self.next += 1;
        Some(angle_to_pos(
            self.center,
            self.deg_start + self.deg_step * i,
            self.r_start + self.r_step * i,
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.count - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for HelixPoints {}

impl FusedIterator for HelixPoints {}
