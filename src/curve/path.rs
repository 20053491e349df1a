use std::fmt::Write as _;

use crate::{
    config::QualityConfig,
    curve::{
        params::CurveParams,
        sampler::{sample, sample_with_oscillation},
        simplify::simplify,
    },
    foundation::core::{BezPath, Point, Rect, bounding_box},
    oscillate::param::ParamOscillations,
};

/// A sampled, simplified curve ready for drawing or export.
#[derive(Clone, Debug, PartialEq)]
pub struct CurvePath {
    pub points: Vec<Point>,
    /// Total polyline length.
    pub length: f64,
    /// Tight bounds of `points`.
    pub bounds: Rect,
    /// `bounds` padded on every side; the coordinate frame exports draw into.
    pub view_box: Rect,
}

impl CurvePath {
    pub fn from_points(points: Vec<Point>, padding: f64) -> Self {
        let bounds = bounding_box(&points);
        Self {
            length: path_length(&points),
            view_box: padded_view_box(bounds, padding),
            bounds,
            points,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// `M x y L x y ...` markup for the full curve.
    pub fn path_data(&self) -> String {
        svg_path_data(&self.points)
    }

    /// `min-x min-y width height` for the `viewBox` attribute.
    pub fn view_box_attr(&self) -> String {
        view_box_attr(self.view_box)
    }
}

/// Sum of segment lengths.
pub fn path_length(points: &[Point]) -> f64 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

pub fn padded_view_box(bounds: Rect, padding: f64) -> Rect {
    let padding = if padding.is_finite() {
        padding.max(0.0)
    } else {
        0.0
    };
    bounds.inflate(padding, padding)
}

pub fn view_box_attr(view_box: Rect) -> String {
    format!(
        "{} {} {} {}",
        fmt_num(view_box.x0),
        fmt_num(view_box.y0),
        fmt_num(view_box.width()),
        fmt_num(view_box.height())
    )
}

/// Polyline markup. Empty input yields an empty string.
pub fn svg_path_data(points: &[Point]) -> String {
    let mut out = String::with_capacity(points.len() * 16);
    for (i, p) in points.iter().enumerate() {
        let cmd = if i == 0 { "M" } else { " L" };
        // Writing into a String cannot fail.
        let _ = write!(out, "{cmd} {} {}", fmt_num(p.x), fmt_num(p.y));
    }
    out
}

/// Open polyline through `points`, for raster backends.
pub fn polyline(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    if let Some((first, rest)) = points.split_first() {
        path.move_to(*first);
        for p in rest {
            path.line_to(*p);
        }
    }
    path
}

/// Fixed three-decimal formatting with trailing zeros trimmed; `-0` prints as `0`.
pub(crate) fn fmt_num(v: f64) -> String {
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" || s.is_empty() {
        "0".to_string()
    } else {
        s.to_string()
    }
}

/// Sample, simplify and measure a curve.
///
/// Oscillations are re-centered on `params` before sampling, so their stored base values only
/// matter when the caller evaluates them directly.
#[tracing::instrument(level = "debug", skip_all, fields(kind = ?params.kind))]
pub fn build_curve(
    params: &CurveParams,
    oscillations: &ParamOscillations,
    quality: &QualityConfig,
) -> CurvePath {
    let clean = params.sanitized();
    if clean != *params {
        tracing::warn!(?params, coerced = ?clean, "curve parameters coerced into range");
    }
    let quality = quality.sanitized();

    let raw = if oscillations.any_enabled() {
        let oscillations = oscillations.sanitized().centered_on(&clean);
        sample_with_oscillation(
            &clean,
            clean.kind,
            |progress| oscillations.params_at(&clean, progress),
            quality.samples_per_turn,
        )
    } else {
        sample(&clean, clean.kind, quality.samples_per_turn)
    };

    let points = simplify(&raw, quality.simplify_epsilon);
    let curve = CurvePath::from_points(points, quality.view_box_padding);
    tracing::debug!(
        sampled = raw.len(),
        kept = curve.points.len(),
        length = curve.length,
        "curve built"
    );
    curve
}

#[cfg(test)]
#[path = "../../tests/unit/curve/path.rs"]
mod tests;
