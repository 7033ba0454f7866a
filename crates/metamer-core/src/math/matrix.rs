//! 3x3 Matrix operations for colour space basis changes
//!
//! A colour system's primaries form the columns of a basis matrix; its inverse
//! (row-scaled by the white point) maps XYZ into RGB.
//! All operations use f64.

use std::ops::{Index, Mul};

/// Determinants below this magnitude are treated as singular
pub const SINGULAR_EPSILON: f64 = 1e-14;

#[inline]
fn dot(a: [f64; 3], b: [f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

#[inline]
fn cross(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

/// Row-major 3x3 matrix, `m[row][col]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix3x3 {
    pub m: [[f64; 3]; 3],
}

impl Matrix3x3 {
    #[inline]
    pub const fn new(m: [[f64; 3]; 3]) -> Self {
        Self { m }
    }

    /// Matrix whose columns are `c0`, `c1`, `c2`
    #[inline]
    pub const fn from_columns(c0: [f64; 3], c1: [f64; 3], c2: [f64; 3]) -> Self {
        Self {
            m: [
                [c0[0], c1[0], c2[0]],
                [c0[1], c1[1], c2[1]],
                [c0[2], c1[2], c2[2]],
            ],
        }
    }

    /// Create an identity matrix
    #[inline]
    pub const fn identity() -> Self {
        Self {
            m: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    #[inline]
    pub const fn column(&self, col: usize) -> [f64; 3] {
        [self.m[0][col], self.m[1][col], self.m[2][col]]
    }

    /// `M × v`
    #[inline]
    pub fn multiply_vec(&self, v: [f64; 3]) -> [f64; 3] {
        self.m.map(|row| dot(row, v))
    }

    /// Row-by-column product `self × other`
    pub fn multiply(&self, other: &Self) -> Self {
        let cols = [other.column(0), other.column(1), other.column(2)];
        Self {
            m: self.m.map(|row| cols.map(|col| dot(row, col))),
        }
    }

    /// Triple product of the columns
    #[inline]
    pub fn determinant(&self) -> f64 {
        dot(self.column(0), cross(self.column(1), self.column(2)))
    }

    /// Inverse, or `None` when the columns are (nearly) linearly dependent
    ///
    /// Row i of the inverse is the cross product of the other two columns
    /// divided by the determinant.
    pub fn inverse(&self) -> Option<Self> {
        let [c0, c1, c2] = [self.column(0), self.column(1), self.column(2)];
        let det = dot(c0, cross(c1, c2));
        if !det.is_finite() || det.abs() < SINGULAR_EPSILON {
            return None;
        }
        let rows = [cross(c1, c2), cross(c2, c0), cross(c0, c1)];
        Some(Self {
            m: rows.map(|row| row.map(|v| v / det)),
        })
    }

    /// Divide each row by the matching element of `divisors`
    ///
    /// Row i of the result is `self[i] / divisors[i]`.
    #[inline]
    pub fn scale_rows_inv(&self, divisors: [f64; 3]) -> Self {
        let mut m = self.m;
        for (row, d) in m.iter_mut().zip(divisors) {
            for value in row.iter_mut() {
                *value /= d;
            }
        }
        Self { m }
    }

    /// Element-wise comparison within `epsilon`
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }

    pub fn is_identity(&self, epsilon: f64) -> bool {
        self.approx_eq(&Self::identity(), epsilon)
    }
}

impl Index<usize> for Matrix3x3 {
    type Output = [f64; 3];

    fn index(&self, row: usize) -> &Self::Output {
        &self.m[row]
    }
}

impl Mul for Matrix3x3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl Mul<[f64; 3]> for Matrix3x3 {
    type Output = [f64; 3];

    fn mul(self, rhs: [f64; 3]) -> Self::Output {
        self.multiply_vec(rhs)
    }
}
