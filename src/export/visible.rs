use crate::{
    animation::clock::LoopMode,
    curve::path::path_length,
    foundation::core::{Point, Rgb8},
    oscillate::color::ColorOscillation,
    render::backend::StrokeRun,
};

/// Number of solid runs a color-oscillated stroke is split into across the whole path.
pub const COLOR_RUNS: usize = 96;

/// The part of a curve that is visible at one instant.
#[derive(Clone, Debug, PartialEq)]
pub struct VisibleStroke {
    pub points: Vec<Point>,
    /// Path length in front of the first visible point. Non-zero only while a
    /// forward-continuing loop erases from the start.
    pub start_length: f64,
    /// Length of the full curve the stroke was cut from.
    pub total_length: f64,
}

impl VisibleStroke {
    /// The whole curve.
    pub fn full(points: &[Point]) -> Self {
        Self {
            points: points.to_vec(),
            start_length: 0.0,
            total_length: path_length(points),
        }
    }

    /// Geometry shown at eased `progress`.
    ///
    /// Drawing, and erasing in every mode except [`LoopMode::ContinueForward`], reveal a prefix
    /// of `progress * length` via [`draw_length_walk`]. Forward-continuing erasure instead drops
    /// `floor((1 - progress) * n)` points from the start of the sequence.
    pub fn for_progress(
        points: &[Point],
        progress: f64,
        is_erasing: bool,
        loop_mode: LoopMode,
    ) -> Self {
        let total_length = path_length(points);
        let progress = if progress.is_finite() {
            progress.clamp(0.0, 1.0)
        } else {
            0.0
        };

        if is_erasing && loop_mode == LoopMode::ContinueForward {
            let start = continue_forward_start(points.len(), progress);
            let start_length = path_length(&points[..(start + 1).min(points.len())]);
            return Self {
                points: points[start..].to_vec(),
                start_length,
                total_length,
            };
        }

        Self {
            points: draw_length_walk(points, total_length * progress),
            start_length: 0.0,
            total_length,
        }
    }

    pub fn length(&self) -> f64 {
        path_length(&self.points)
    }

    /// Split into solid runs. With an inactive color oscillation that is a single `solid` run;
    /// otherwise each run takes the color at its position along the full curve, so colors stay
    /// attached to the geometry while it is drawn or erased.
    pub fn runs(&self, colors: &ColorOscillation, solid: Rgb8) -> Vec<StrokeRun> {
        if self.points.len() < 2 {
            return Vec::new();
        }
        if !colors.is_active() || self.total_length <= 0.0 {
            return vec![StrokeRun {
                points: self.points.clone(),
                color: if colors.is_active() {
                    colors.color_at(0.0)
                } else {
                    solid
                },
            }];
        }

        let bucket_of = |s: f64| {
            ((s / self.total_length * COLOR_RUNS as f64).floor() as usize).min(COLOR_RUNS - 1)
        };
        let color_of = |b: usize| colors.color_at((b as f64 + 0.5) / COLOR_RUNS as f64);

        let mut runs = Vec::new();
        let mut along = self.start_length;
        let mut current: Option<(usize, Vec<Point>)> = None;
        for w in self.points.windows(2) {
            let seg = w[0].distance(w[1]);
            let bucket = bucket_of(along + seg / 2.0);
            along += seg;
            match &mut current {
                Some((b, pts)) if *b == bucket => pts.push(w[1]),
                _ => {
                    if let Some((b, pts)) = current.take() {
                        runs.push(StrokeRun {
                            points: pts,
                            color: color_of(b),
                        });
                    }
                    current = Some((bucket, vec![w[0], w[1]]));
                }
            }
        }
        if let Some((b, pts)) = current {
            runs.push(StrokeRun {
                points: pts,
                color: color_of(b),
            });
        }
        runs
    }
}

/// Index of the first point kept while a forward-continuing loop erases.
pub fn continue_forward_start(len: usize, progress: f64) -> usize {
    let drop = ((1.0 - progress.clamp(0.0, 1.0)) * len as f64).floor() as usize;
    drop.min(len)
}

/// Prefix of `points` whose length is exactly `target` (clamped to the path), ending with an
/// interpolated point inside the segment that crosses `target`.
pub fn draw_length_walk(points: &[Point], target: f64) -> Vec<Point> {
    let Some(&first) = points.first() else {
        return Vec::new();
    };
    let mut out = vec![first];
    if target.is_nan() || target <= 0.0 {
        return out;
    }

    let mut walked = 0.0;
    for w in points.windows(2) {
        let seg = w[0].distance(w[1]);
        if walked + seg <= target {
            out.push(w[1]);
            walked += seg;
            continue;
        }
        let t = (target - walked) / seg;
        out.push(w[0].lerp(w[1], t));
        break;
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/export/visible.rs"]
mod tests;
