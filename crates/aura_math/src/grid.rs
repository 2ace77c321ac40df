//! Parameter grids and the sampled geometry built from them
//!
//! Every animation follows the same pattern: sample one or two parameters,
//! map the samples through a vector-valued function, and draw the result.
//! [`ParamGrid`] is the two-parameter case and produces a [`Surface`];
//! single-parameter curves are [`Polyline`]s.

use crate::Vec3;

/// `n` evenly spaced samples over `[start, end]`, both ends included
///
/// `n == 1` yields `[start]` and `n == 0` yields an empty vector.
pub fn linspace(start: f32, end: f32, n: usize) -> Vec<f32> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f32;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f32 })
                .collect()
        }
    }
}

/// Outer product of two sample vectors
///
/// Row `r`, column `c` of the grid holds the pair `(rows[r], cols[c])`.
#[derive(Clone, Debug, PartialEq)]
pub struct ParamGrid {
    pub rows: Vec<f32>,
    pub cols: Vec<f32>,
}

impl ParamGrid {
    /// Create a grid from row and column samples
    pub fn new(rows: Vec<f32>, cols: Vec<f32>) -> Self {
        Self { rows, cols }
    }

    /// Grid shape as `(rows, cols)`
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.cols.len())
    }

    /// Evaluate `f(row_value, col_value)` at every grid node
    pub fn map<F>(&self, mut f: F) -> Surface
    where
        F: FnMut(f32, f32) -> Vec3,
    {
        let mut points = Vec::with_capacity(self.rows.len() * self.cols.len());
        for &r in &self.rows {
            for &c in &self.cols {
                points.push(f(r, c));
            }
        }
        Surface {
            rows: self.rows.len(),
            cols: self.cols.len(),
            points,
        }
    }
}

/// A row-major grid of points
///
/// Invariant: `points.len() == rows * cols`.
#[derive(Clone, Debug, PartialEq)]
pub struct Surface {
    pub rows: usize,
    pub cols: usize,
    pub points: Vec<Vec3>,
}

impl Surface {
    /// Point at grid position `(r, c)`
    #[inline]
    pub fn point(&self, r: usize, c: usize) -> Vec3 {
        self.points[r * self.cols + c]
    }

    /// Number of grid cells (quads)
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.rows.saturating_sub(1) * self.cols.saturating_sub(1)
    }

    /// Triangle indices into `points`, two per grid cell
    pub fn triangles(&self) -> Vec<[u32; 3]> {
        let mut tris = Vec::with_capacity(self.cell_count() * 2);
        for r in 0..self.rows.saturating_sub(1) {
            for c in 0..self.cols.saturating_sub(1) {
                let i00 = (r * self.cols + c) as u32;
                let i01 = i00 + 1;
                let i10 = i00 + self.cols as u32;
                let i11 = i10 + 1;
                tris.push([i00, i10, i11]);
                tris.push([i00, i11, i01]);
            }
        }
        tris
    }

    /// Axis-aligned bounds as `(min, max)`, `None` for an empty surface
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        bounds_of(&self.points)
    }

    /// Apply `f` to every point
    pub fn map_points<F: FnMut(Vec3) -> Vec3>(mut self, f: F) -> Self {
        self.points = self.points.into_iter().map(f).collect();
        self
    }
}

/// An ordered list of points drawn as a connected line
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polyline {
    pub points: Vec<Vec3>,
}

impl Polyline {
    /// Create a polyline from points
    pub fn new(points: Vec<Vec3>) -> Self {
        Self { points }
    }

    /// Number of line segments
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Total arc length
    pub fn length(&self) -> f32 {
        self.points.windows(2).map(|w| (w[1] - w[0]).length()).sum()
    }

    /// Axis-aligned bounds as `(min, max)`, `None` for an empty line
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        bounds_of(&self.points)
    }
}

impl FromIterator<Vec3> for Polyline {
    fn from_iter<I: IntoIterator<Item = Vec3>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

fn bounds_of(points: &[Vec3]) -> Option<(Vec3, Vec3)> {
    let first = *points.first()?;
    Some(points.iter().fold((first, first), |(lo, hi), &p| {
        (lo.min_components(p), hi.max_components(p))
    }))
}
