//! Elliptical arc support: conversion from the SVG endpoint parameterization
//! to center parameterization, and approximation by cubic Bezier curves.
//!
//! See <https://www.w3.org/TR/SVG2/implnote.html#ArcConversionEndpointToCenter>

use super::Segment;
use crate::constants::MAX_ARC_SEGMENT_DEG;
use crate::geometry::{Point, Transform};

/// An elliptical arc in endpoint form, as given by an SVG `A` command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EndpointArc {
    pub start: Point,
    pub end: Point,
    pub rx: f64,
    pub ry: f64,
    /// x-axis-rotation in degrees
    pub rotation: f64,
    pub large_arc: bool,
    pub sweep: bool,
}

/// An elliptical arc in center form. Angles are in degrees; `theta1` is in
/// `[0, 360)` and `delta_theta` is positive exactly when the arc sweeps in
/// the positive-angle direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CenterArc {
    pub center: Point,
    pub rx: f64,
    pub ry: f64,
    /// x-axis-rotation in degrees, in `[0, 360)`
    pub rotation: f64,
    pub theta1: f64,
    pub delta_theta: f64,
}

impl EndpointArc {
    /// Convert to center parameterization.
    ///
    /// Radii which are too small for the ellipse to reach from `start` to
    /// `end` are scaled up uniformly, per the SVG out-of-range radii rules.
    pub fn to_center(&self) -> CenterArc {
        let rotation = self.rotation - (self.rotation / 360.).floor() * 360.;
        let phi = rotation.to_radians();

        // Step 1: Compute (x1', y1')
        let z = ((self.start - self.end) * 0.5).rotate(-phi);

        // https://www.w3.org/TR/SVG2/implnote.html#ArcCorrectionOutOfRangeRadii
        let (mut rx, mut ry) = (self.rx.abs(), self.ry.abs());
        let lambda = (z.x * z.x) / (rx * rx) + (z.y * z.y) / (ry * ry);
        if lambda > 1. {
            log::debug!("arc radii ({rx}, {ry}) too small; scaling by {}", lambda.sqrt());
            rx *= lambda.sqrt();
            ry *= lambda.sqrt();
        }

        // Step 2: Compute (cx', cy')
        let denom = rx * rx * z.y * z.y + ry * ry * z.x * z.x;
        let num = (rx * rx * ry * ry - denom).max(0.);
        let mut k = if denom == 0. { 0. } else { (num / denom).sqrt() };
        if self.large_arc == self.sweep {
            k = -k;
        }
        let c = Point::new(rx / ry * z.y, -ry / rx * z.x) * k;

        // Step 3: Compute (cx, cy) from (cx', cy')
        let center = c.rotate(phi) + self.start.midpoint(self.end);

        // Step 4: Compute theta1 and delta_theta
        let p1 = z - c;
        let p2 = -z - c;
        let mut theta1 = p1.scale_xy(1. / rx, 1. / ry).angle_deg();
        let theta2 = p2.scale_xy(1. / rx, 1. / ry).angle_deg();
        let mut delta_theta = theta2 - theta1;
        if theta1 < 0. {
            theta1 += 360.;
        }
        if self.sweep && delta_theta < 0. {
            delta_theta += 360.;
        } else if !self.sweep && delta_theta > 0. {
            delta_theta -= 360.;
        }

        CenterArc {
            center,
            rx,
            ry,
            rotation,
            theta1,
            delta_theta,
        }
    }

    /// Cubic Bezier segments tracing the arc from `start` to `end`.
    ///
    /// Returns no segments if `start` and `end` coincide, as such an arc
    /// is omitted entirely.
    pub fn to_curves(&self) -> Vec<Segment> {
        if self.start == self.end {
            return Vec::new();
        }
        let mut curves = self.to_center().to_curves();
        // land exactly on the requested end point regardless of rounding
        if let Some(Segment::CubicCurveTo(_, _, end)) = curves.last_mut() {
            *end = self.end;
        }
        curves
    }
}

impl CenterArc {
    /// Mapping from the unit circle onto this arc's ellipse
    pub fn transform(&self) -> Transform {
        Transform::scale(self.rx, self.ry)
            .then_rotate(self.rotation.to_radians())
            .then_translate(self.center)
    }

    /// Point on the ellipse at parameter `angle` (degrees)
    pub fn point_at(&self, angle: f64) -> Point {
        let (sin, cos) = angle.to_radians().sin_cos();
        self.transform().apply(Point::new(cos, sin))
    }

    /// Approximate the arc with cubic Bezier segments, each spanning at
    /// most `MAX_ARC_SEGMENT_DEG`.
    pub fn to_curves(&self) -> Vec<Segment> {
        // tolerance stops e.g. 270.00000001 degrees becoming four pieces
        let count = (self.delta_theta.abs() / MAX_ARC_SEGMENT_DEG - 1e-9)
            .ceil()
            .max(1.) as usize;
        let step = (self.delta_theta / count as f64).to_radians();
        let t = (0.5 * step).tan();
        // handle length for a unit circle arc of `step` radians; takes the
        // sign of `step` so negative sweeps need no special handling.
        let alpha = step.sin() * ((4. + 3. * t * t).sqrt() - 1.) / 3.;

        let xfrm = self.transform();
        let theta1 = self.theta1.to_radians();
        (0..count)
            .map(|i| {
                let (sa, ca) = (theta1 + step * i as f64).sin_cos();
                let (sb, cb) = (theta1 + step * (i + 1) as f64).sin_cos();
                let a = Point::new(ca, sa);
                let b = Point::new(cb, sb);
                let a_dot = Point::new(-sa, ca);
                let b_dot = Point::new(-sb, cb);
                Segment::CubicCurveTo(
                    xfrm.apply(a + a_dot * alpha),
                    xfrm.apply(b - b_dot * alpha),
                    xfrm.apply(b),
                )
            })
            .collect()
    }
}
