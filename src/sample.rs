// SPDX: CC0-1.0

use crate::{coord::Scale, error::SampleError, Number, Point};
use tracing::warn;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    /// (x, fx(x))
    pub math: Point<Number>,
    pub pixel: Point<Number>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Samples {
    /// Retained samples in pixel space, in sampling order.
    pub pixels: Vec<Point<Number>>,
    /// First retained sample with the largest y.
    pub peak: Option<Sample>,
    /// `rate + 1`, before filtering.
    pub candidates: usize,
}

impl Samples {
    pub fn dropped(&self) -> usize {
        self.candidates - self.pixels.len()
    }
}

/// Largest rate the shell accepts. [`sample`] itself takes any rate but never
/// reserves room for more than this many points up front.
pub const MAX_RATE: u32 = 1 << 20;

fn reserve_for(rate: u32) -> usize {
    rate.min(MAX_RATE) as usize + 1
}

/// Evaluates `fx` at `rate + 1` evenly spaced x values across
/// `[-max_abs, max_abs]` and maps each result through the scales.
///
/// Non-finite outputs are logged and skipped. With `rate == 0` the only sample
/// is taken at `-max_abs`.
pub fn sample<F>(mut fx: F, max_abs: Number, rate: u32, x_scale: &Scale, y_scale: &Scale) -> Samples
where
    F: FnMut(Number) -> Number,
{
    let mut out = Samples {
        pixels: Vec::with_capacity(reserve_for(rate)),
        peak: None,
        candidates: rate as usize + 1,
    };

    for i in 0..=rate {
        let x = if rate == 0 {
            -max_abs
        } else {
            -max_abs + (Number::from(i) * (max_abs * 2.0)) / Number::from(rate)
        };
        let y = fx(x);
        if !y.is_finite() {
            let err = SampleError::NonFinite { x, y };
            warn!(%err, "dropping sample");
            continue;
        }

        let sample = Sample {
            math: Point { x, y },
            pixel: Point {
                x: x_scale.apply(x),
                y: y_scale.apply(y),
            },
        };
        out.pixels.push(sample.pixel);
        match out.peak {
            Some(peak) if peak.math.y >= y => {}
            _ => out.peak = Some(sample),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn identity_scale(max_abs: Number) -> Scale {
        Scale::new(-max_abs, max_abs, max_abs)
    }

    #[test]
    fn test_candidate_count() {
        let s = identity_scale(5.0);
        let out = sample(|x| x, 5.0, 10, &s, &s);
        assert_eq!(out.candidates, 11);
        assert_eq!(out.pixels.len(), 11);
        assert_relative_eq!(out.pixels[0].x, -5.0);
        assert_relative_eq!(out.pixels[10].x, 5.0);
    }

    #[test]
    fn test_non_finite_samples_are_dropped() {
        let s = identity_scale(2.0);
        // x = -2, -1, 0, 1, 2
        let out = sample(|x: Number| x.ln(), 2.0, 4, &s, &s);
        assert_eq!(out.candidates, 5);
        // ln(-2), ln(-1) are NaN and ln(0) is -inf
        assert_eq!(out.dropped(), 3);
        assert_eq!(out.pixels.len(), 2);

        let out = sample(|x| 1.0 / x, 2.0, 4, &s, &s);
        assert_eq!(out.dropped(), 1);
    }

    #[test]
    fn test_peak_keeps_first_of_ties() {
        let s = identity_scale(2.0);
        let out = sample(|x: Number| x.abs(), 2.0, 4, &s, &s);
        let peak = out.peak.unwrap();
        assert_eq!(peak.math, Point::new(-2.0, 2.0));

        let out = sample(|x: Number| 1.0 - x * x, 2.0, 4, &s, &s);
        assert_eq!(out.peak.unwrap().math, Point::new(0.0, 1.0));
    }

    #[test]
    fn test_zero_rate_is_single_sample() {
        let s = identity_scale(3.0);
        let out = sample(|x| x, 3.0, 0, &s, &s);
        assert_eq!(out.candidates, 1);
        assert_eq!(out.pixels, vec![Point::new(-3.0, -3.0)]);
    }

    #[test]
    fn test_reservation_is_bounded() {
        assert_eq!(reserve_for(0), 1);
        assert_eq!(reserve_for(1000), 1001);
        assert_eq!(reserve_for(MAX_RATE), MAX_RATE as usize + 1);
        assert_eq!(reserve_for(u32::MAX), MAX_RATE as usize + 1);
    }

    #[test]
    fn test_all_invalid() {
        let s = identity_scale(1.0);
        let out = sample(|_| Number::NAN, 1.0, 8, &s, &s);
        assert!(out.pixels.is_empty());
        assert!(out.peak.is_none());
        assert_eq!(out.dropped(), 9);
    }
}
