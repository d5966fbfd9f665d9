use crate::foundation::core::{BezPath, Point, Rect};

/// Corner smoothing radius for a border of half-width `half_width` around corners of radius
/// `corner_radius`. Square corners stay square.
pub fn corner_smoothing_radius(corner_radius: f64, half_width: f64) -> f64 {
    if corner_radius > 0.0 {
        (corner_radius - half_width).max(0.0)
    } else {
        0.0
    }
}

/// Border stroke geometry, reused across frames.
///
/// Both paths are truncated at the start of every rebuild, so they always hold exactly one
/// closed outline.
#[derive(Clone, Debug, Default)]
pub struct BorderPath {
    outline: BezPath,
    smoothed: BezPath,
    corner_radius: f64,
}

impl BorderPath {
    /// Create an empty border path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the outline for `destination`.
    ///
    /// The polygon is inset by half the border width on the top, left and right, and sits on
    /// the bottom edge. Its vertices are then rounded with the smoothing radius.
    pub fn rebuild(&mut self, destination: Rect, border_width: f64, corner_radius: f64) {
        self.outline.truncate(0);
        self.smoothed.truncate(0);

        let h = border_width / 2.0;
        let corners = [
            Point::new(destination.x0 + h, destination.y0 + h),
            Point::new(destination.x1 - h, destination.y0 + h),
            Point::new(destination.x1 - h, destination.y1),
            Point::new(destination.x0 + h, destination.y1),
        ];

        self.outline.move_to(corners[0]);
        for &p in &corners[1..] {
            self.outline.line_to(p);
        }
        self.outline.close_path();

        self.corner_radius = corner_smoothing_radius(corner_radius, h);
        if self.corner_radius > 0.0 {
            round_polygon_corners(&corners, self.corner_radius, &mut self.smoothed);
        } else {
            self.smoothed.clone_from(&self.outline);
        }
    }

    /// Unsmoothed closed polygon.
    pub fn outline(&self) -> &BezPath {
        &self.outline
    }

    /// Polygon with rounded vertices; this is what gets stroked.
    pub fn path(&self) -> &BezPath {
        &self.smoothed
    }

    /// Smoothing radius used by the last rebuild.
    pub fn corner_radius(&self) -> f64 {
        self.corner_radius
    }
}

/// Append a closed polygon to `out` with every vertex replaced by a quadratic arc.
///
/// Each arc starts and ends `radius` away from the vertex along its two edges (at most half the
/// edge length) and uses the vertex as control point.
pub fn round_polygon_corners(points: &[Point], radius: f64, out: &mut BezPath) {
    let n = points.len();
    if n < 3 {
        return;
    }

    for i in 0..n {
        let v = points[i];
        let prev = points[(i + n - 1) % n];
        let next = points[(i + 1) % n];
        let enter = toward(v, prev, radius);
        let exit = toward(v, next, radius);
        if i == 0 {
            out.move_to(enter);
        } else {
            out.line_to(enter);
        }
        out.quad_to(v, exit);
    }
    out.close_path();
}

fn toward(from: Point, to: Point, radius: f64) -> Point {
    let d = to - from;
    let len = d.hypot();
    if len <= f64::EPSILON {
        return from;
    }
    let dist = radius.min(len / 2.0);
    from + d * (dist / len)
}

#[cfg(test)]
#[path = "../../tests/unit/transform/border.rs"]
mod tests;
