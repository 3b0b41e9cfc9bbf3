use std::fmt;
use std::ops::Deref;

#[cfg(feature = "json")]
use serde_derive::Serialize;

use super::Path;
use crate::geometry::{BoundingBox, Point};

/// A path centered on the origin, scaled so its larger dimension is 1 and
/// with the y-axis pointing up.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "json", derive(Serialize))]
#[cfg_attr(feature = "json", serde(transparent))]
pub struct NormalizedPath(Path);

impl NormalizedPath {
    /// Equivalent normalized path with quadratic curves lifted to cubics.
    pub fn to_cubic(&self) -> Self {
        Self(self.0.to_cubic())
    }
}

impl Deref for NormalizedPath {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Scale factor used by `normalize`; never zero.
pub fn normalize_scale(bbox: &BoundingBox) -> f64 {
    let scale = bbox.extent();
    if scale == 0. {
        1.
    } else {
        scale
    }
}

/// Center `path` on the origin, scale so the larger side of its bounding box
/// (control points included) is 1, and flip it vertically.
pub fn normalize(path: &Path) -> NormalizedPath {
    let Some(bbox) = path.bounding_box() else {
        return NormalizedPath(path.clone());
    };
    let center = bbox.center();
    let scale = normalize_scale(&bbox);
    log::debug!("normalizing path with bbox {bbox:?} by scale {scale}");
    NormalizedPath(
        path.map_points(|p| Point::new((p.x - center.x) / scale, (center.y - p.y) / scale)),
    )
}
