use crate::foundation::core::Point;

/// Ramer–Douglas–Peucker polyline simplification.
///
/// The result is an order-preserving subset of `points` that keeps the first and last point and
/// never strays more than `epsilon` from any dropped point. Inputs of length `<= 2` are returned
/// unchanged. A negative or non-finite `epsilon` is treated as `0`.
///
/// The recursion is driven by an explicit work stack so very dense curves cannot overflow the
/// call stack; the kept set is identical to the textbook recursive formulation.
pub fn simplify(points: &[Point], epsilon: f64) -> Vec<Point> {
    if points.len() <= 2 {
        return points.to_vec();
    }
    let epsilon = if epsilon.is_finite() {
        epsilon.max(0.0)
    } else {
        0.0
    };

    let last = points.len() - 1;
    let mut keep = vec![false; points.len()];
    keep[0] = true;
    keep[last] = true;

    let mut stack = vec![(0usize, last)];
    while let Some((first, end)) = stack.pop() {
        if end <= first + 1 {
            continue;
        }
        let (a, b) = (points[first], points[end]);
        let mut max_dist = 0.0;
        let mut max_index = first;
        for (i, p) in points.iter().enumerate().take(end).skip(first + 1) {
            let dist = segment_distance(*p, a, b);
            if dist > max_dist {
                max_dist = dist;
                max_index = i;
            }
        }
        if max_dist > epsilon {
            keep[max_index] = true;
            stack.push((max_index, end));
            stack.push((first, max_index));
        }
    }

    let out: Vec<Point> = points
        .iter()
        .zip(&keep)
        .filter_map(|(p, k)| k.then_some(*p))
        .collect();
    tracing::debug!(
        input = points.len(),
        output = out.len(),
        epsilon,
        "simplified path"
    );
    out
}

/// Distance from `p` to the segment `a..b` (clamped to the endpoints, not the infinite line).
/// A zero-length segment degrades to the distance from `a`, so an exactly closed curve whose
/// chord collapses still splits at its farthest point.
pub(crate) fn segment_distance(p: Point, a: Point, b: Point) -> f64 {
    let ab = b - a;
    let len_sq = ab.hypot2();
    if len_sq == 0.0 {
        return p.distance(a);
    }
    let u = (p - a).dot(ab) / len_sq;
    let closest = if u < 0.0 {
        a
    } else if u > 1.0 {
        b
    } else {
        a + ab * u
    };
    p.distance(closest)
}

#[cfg(test)]
#[path = "../../tests/unit/curve/simplify.rs"]
mod tests;
