use glam::*;

/// A finite line segment in screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// The start point.
    pub start: Vec2,
    /// The end point.
    pub end: Vec2,
}

impl Segment {
    /// Create a new segment.
    pub const fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    /// Get the intersection point with another segment.
    ///
    /// Endpoints are inclusive. Parallel and collinear segments do not intersect.
    pub fn intersection(&self, other: &Segment) -> Option<Vec2> {
        let d1 = self.end - self.start;
        let d2 = other.end - other.start;

        let denom = d1.perp_dot(d2);
        if denom == 0.0 {
            return None;
        }

        let offset = other.start - self.start;
        let t = offset.perp_dot(d2) / denom;
        let u = offset.perp_dot(d1) / denom;

        ((0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u)).then(|| self.start + d1 * t)
    }

    /// Check if the point lies exactly on the segment.
    pub fn contains_point(&self, point: Vec2) -> bool {
        let d = self.end - self.start;
        if d.perp_dot(point - self.start) != 0.0 {
            return false;
        }

        let min = self.start.min(self.end);
        let max = self.start.max(self.end);
        point.cmpge(min).all() && point.cmple(max).all()
    }

    /// Check if a vertical ray cast from `point` toward decreasing Y crosses the segment.
    ///
    /// The crossing is half-open in X: the segment counts only when exactly one endpoint lies
    /// strictly to the right of `point`, so a ray through a shared vertex is counted once and
    /// vertical segments are never counted.
    pub fn crosses_ray_below(&self, point: Vec2) -> bool {
        let (a, b) = (self.start, self.end);
        if (a.x > point.x) == (b.x > point.x) {
            return false;
        }

        let y = a.y + (point.x - a.x) * (b.y - a.y) / (b.x - a.x);
        y < point.y
    }
}

/// A lasso polygon in drawing order.
///
/// The polygon is implicitly closed: the last vertex connects back to the first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    vertices: Vec<Vec2>,
}

impl Polygon {
    /// Create an empty polygon.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the vertices.
    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    /// Get the number of vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Check if there are no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Get the first vertex.
    pub fn first(&self) -> Option<Vec2> {
        self.vertices.first().copied()
    }

    /// Get the most recently added vertex.
    pub fn last(&self) -> Option<Vec2> {
        self.vertices.last().copied()
    }

    /// Append a vertex.
    pub fn push(&mut self, vertex: Vec2) {
        self.vertices.push(vertex);
    }

    /// Remove all vertices.
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    /// Iterate the edges, including the closing edge from the last vertex to the first.
    pub fn edges(&self) -> impl Iterator<Item = Segment> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| Segment::new(self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Get the axis-aligned bounds as `(min, max)`.
    pub fn bounds(&self) -> Option<(Vec2, Vec2)> {
        let first = self.first()?;
        Some(
            self.vertices
                .iter()
                .fold((first, first), |(min, max), v| (min.min(*v), max.max(*v))),
        )
    }

    /// Check if any two non-adjacent edges intersect.
    ///
    /// Zero-length edges, such as the one left by a closing click landing on the first vertex, are
    /// skipped, so the edges around them are still adjacent.
    pub fn is_self_intersecting(&self) -> bool {
        let edges = self
            .edges()
            .filter(|edge| edge.start != edge.end)
            .collect::<Vec<_>>();
        let n = edges.len();
        if n < 4 {
            return false;
        }

        (0..n).any(|i| {
            (i + 2..n)
                // The first and last edges share a vertex.
                .filter(|&j| !(i == 0 && j == n - 1))
                .any(|j| edges[i].intersection(&edges[j]).is_some())
        })
    }
}

impl From<Vec<Vec2>> for Polygon {
    fn from(vertices: Vec<Vec2>) -> Self {
        Self { vertices }
    }
}

impl FromIterator<Vec2> for Polygon {
    fn from_iter<T: IntoIterator<Item = Vec2>>(iter: T) -> Self {
        Self {
            vertices: iter.into_iter().collect(),
        }
    }
}
