// SPDX: CC0-1.0

use crate::Number;
use thiserror::Error;

/// Fatal errors raised while rendering.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("no drawing surface is attached to the canvas")]
    NoSurface,
}

/// Problems with an axis configuration. Nothing in the drawing path checks for
/// these; call [`crate::coord::AxisConfig::validate`] before building a
/// coordinate space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{axis} bounds have zero extent, so the axis cannot be scaled")]
    ZeroExtent { axis: &'static str },
}

/// A sample the curve sampler had to discard. Only ever logged.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum SampleError {
    #[error("f({x}) = {y} is not a finite number")]
    NonFinite { x: Number, y: Number },
}
