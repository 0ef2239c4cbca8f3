//! Vector outlines for shape layers.

use smallvec::SmallVec;

use crate::{Rect, Vec2};

/// Line segments emitted per cubic when flattening.
const CUBIC_STEPS: usize = 16;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathSegment {
    MoveTo(Vec2),
    /// Control point 1, control point 2, end point.
    CubicTo(Vec2, Vec2, Vec2),
    Close,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    segments: SmallVec<[PathSegment; 8]>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(mut self, p: Vec2) -> Self {
        self.segments.push(PathSegment::MoveTo(p));
        self
    }

    pub fn cubic_to(mut self, c1: Vec2, c2: Vec2, to: Vec2) -> Self {
        self.segments.push(PathSegment::CubicTo(c1, c2, to));
        self
    }

    pub fn close(mut self) -> Self {
        self.segments.push(PathSegment::Close);
        self
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// An upside-down droplet filling a `size` x `size` box: rounded top,
    /// tip at the bottom center.
    pub fn teardrop(size: f32) -> Self {
        let half = size / 2.0;
        let quarter = half / 2.0;
        Path::new()
            .move_to(Vec2::new(half, size))
            .cubic_to(
                Vec2::new(0.0, quarter),
                Vec2::new(quarter, 0.0),
                Vec2::new(half, 0.0),
            )
            .cubic_to(
                Vec2::new(3.0 * quarter, 0.0),
                Vec2::new(size, quarter),
                Vec2::new(half, size),
            )
            .close()
    }

    /// Polylines approximating each subpath.
    pub fn flatten(&self) -> Vec<Vec<Vec2>> {
        let mut out: Vec<Vec<Vec2>> = Vec::new();
        let mut current: Vec<Vec2> = Vec::new();
        for seg in &self.segments {
            match *seg {
                PathSegment::MoveTo(p) => {
                    if current.len() > 1 {
                        out.push(std::mem::take(&mut current));
                    }
                    current.clear();
                    current.push(p);
                }
                PathSegment::CubicTo(c1, c2, to) => {
                    let from = current.last().copied().unwrap_or_default();
                    if current.is_empty() {
                        current.push(from);
                    }
                    for i in 1..=CUBIC_STEPS {
                        let t = i as f32 / CUBIC_STEPS as f32;
                        current.push(cubic_point(from, c1, c2, to, t));
                    }
                }
                PathSegment::Close => {
                    if let Some(&first) = current.first() {
                        if current.last() != Some(&first) {
                            current.push(first);
                        }
                    }
                    if current.len() > 1 {
                        out.push(std::mem::take(&mut current));
                    }
                }
            }
        }
        if current.len() > 1 {
            out.push(current);
        }
        out
    }

    /// Tight-ish bounds of the flattened outline.
    pub fn bounds(&self) -> Rect {
        let mut pts = self.flatten().into_iter().flatten();
        let Some(first) = pts.next() else {
            return Rect::ZERO;
        };
        let (mut min, mut max) = (first, first);
        for p in pts {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Rect::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    /// Even-odd containment test against the flattened outline.
    pub fn contains(&self, p: Vec2) -> bool {
        let mut inside = false;
        for poly in self.flatten() {
            for edge in poly.windows(2) {
                let (a, b) = (edge[0], edge[1]);
                if (a.y > p.y) != (b.y > p.y) {
                    let x = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
                    if p.x < x {
                        inside = !inside;
                    }
                }
            }
        }
        inside
    }
}

fn cubic_point(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let mt = 1.0 - t;
    let a = mt * mt * mt;
    let b = 3.0 * mt * mt * t;
    let c = 3.0 * mt * t * t;
    let d = t * t * t;
    Vec2 {
        x: a * p0.x + b * p1.x + c * p2.x + d * p3.x,
        y: a * p0.y + b * p1.y + c * p2.y + d * p3.y,
    }
}
