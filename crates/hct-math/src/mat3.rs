//! 3x3 matrix type for color transformations.
//!
//! [`Mat3`] covers linear RGB to XYZ, the CAT16 cone transform, and the
//! folded "scaled discount" matrices the gamut solver uses.
//!
//! # Convention
//!
//! Matrices are stored in **row-major** order and use **column vectors**:
//!
//! ```text
//! | m00 m01 m02 |   | x |   | m00*x + m01*y + m02*z |
//! | m10 m11 m12 | * | y | = | m10*x + m11*y + m12*z |
//! | m20 m21 m22 |   | z |   | m20*x + m21*y + m22*z |
//! ```

use crate::Vec3;
use std::ops::Mul;

/// A 3x3 row-major matrix.
///
/// # Example
///
/// ```rust
/// use hct_math::{Mat3, Vec3};
///
/// let v = Vec3::new(1.0, 2.0, 3.0);
/// assert_eq!(Mat3::IDENTITY * v, v);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Mat3 {
    /// Matrix elements in row-major order: [row0, row1, row2]
    pub m: [[f64; 3]; 3],
}

impl Mat3 {
    /// Zero matrix.
    pub const ZERO: Self = Self { m: [[0.0; 3]; 3] };

    /// Identity matrix.
    pub const IDENTITY: Self = Self::diagonal(1.0, 1.0, 1.0);

    /// Creates a matrix from row arrays.
    #[inline]
    pub const fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        Self { m: rows }
    }

    /// Creates a diagonal matrix.
    ///
    /// Used for the per-channel von Kries discount.
    #[inline]
    pub const fn diagonal(d0: f64, d1: f64, d2: f64) -> Self {
        Self::from_rows([[d0, 0.0, 0.0], [0.0, d1, 0.0], [0.0, 0.0, d2]])
    }

    /// Computes the determinant.
    #[inline]
    pub fn determinant(&self) -> f64 {
        let m = &self.m;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Computes the inverse of this matrix.
    ///
    /// Returns `None` if the matrix is singular.
    ///
    /// ```rust
    /// use hct_math::Mat3;
    ///
    /// let m = Mat3::diagonal(2.0, 4.0, 8.0);
    /// let inv = m.inverse().unwrap();
    /// assert_eq!(inv, Mat3::diagonal(0.5, 0.25, 0.125));
    /// ```
    pub fn inverse(&self) -> Option<Self> {
        if self.determinant().abs() < 1e-15 {
            return None;
        }
        let inv = Self::from_glam(self.to_glam().inverse());
        inv.is_finite().then_some(inv)
    }

    /// Transforms a Vec3 by this matrix.
    ///
    /// Equivalent to `matrix * vector`.
    #[inline]
    pub fn transform(&self, v: Vec3) -> Vec3 {
        Vec3::new(
            self.m[0][0] * v.x + self.m[0][1] * v.y + self.m[0][2] * v.z,
            self.m[1][0] * v.x + self.m[1][1] * v.y + self.m[1][2] * v.z,
            self.m[2][0] * v.x + self.m[2][1] * v.y + self.m[2][2] * v.z,
        )
    }

    /// Multiplies two matrices.
    #[inline]
    pub fn mul_mat(&self, other: &Self) -> Self {
        let mut result = Self::ZERO;
        for i in 0..3 {
            for j in 0..3 {
                result.m[i][j] = self.m[i][0] * other.m[0][j]
                    + self.m[i][1] * other.m[1][j]
                    + self.m[i][2] * other.m[2][j];
            }
        }
        result
    }

    /// Returns true if all elements are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.m.iter().flatten().all(|x| x.is_finite())
    }

    /// Converts to glam DMat3 (column-major).
    #[inline]
    fn to_glam(&self) -> glam::DMat3 {
        glam::DMat3::from_cols_array_2d(&[
            [self.m[0][0], self.m[1][0], self.m[2][0]],
            [self.m[0][1], self.m[1][1], self.m[2][1]],
            [self.m[0][2], self.m[1][2], self.m[2][2]],
        ])
    }

    /// Creates from glam DMat3.
    #[inline]
    fn from_glam(m: glam::DMat3) -> Self {
        let c = m.to_cols_array_2d();
        Self::from_rows([
            [c[0][0], c[1][0], c[2][0]],
            [c[0][1], c[1][1], c[2][1]],
            [c[0][2], c[1][2], c[2][2]],
        ])
    }
}

impl Mul<Vec3> for Mat3 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        self.transform(rhs)
    }
}

impl Mul for Mat3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const CAT16: Mat3 = Mat3::from_rows([
        [0.401288, 0.650173, -0.051461],
        [-0.250268, 1.204414, 0.045854],
        [-0.002079, 0.048952, 0.953127],
    ]);

    #[test]
    fn test_mat3_identity() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(Mat3::IDENTITY * v, v);
    }

    #[test]
    fn test_mat3_inverse() {
        let inv = CAT16.inverse().unwrap();
        let result = CAT16 * inv;
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_abs_diff_eq!(result.m[i][j], expected, epsilon = 1e-12);
            }
        }
        // Published CAT16 inverse, first row.
        assert_abs_diff_eq!(inv.m[0][0], 1.8620678550872327, epsilon = 1e-9);
        assert_abs_diff_eq!(inv.m[0][1], -1.0112546305316843, epsilon = 1e-9);
        assert_abs_diff_eq!(inv.m[0][2], 0.14918677544445175, epsilon = 1e-9);
    }

    #[test]
    fn test_mat3_singular() {
        let m = Mat3::from_rows([
            [1.0, 2.0, 3.0],
            [2.0, 4.0, 6.0],
            [1.0, 1.0, 1.0],
        ]);
        assert!(m.inverse().is_none());
    }

    #[test]
    fn test_mat3_glam_roundtrip() {
        assert_eq!(Mat3::from_glam(CAT16.to_glam()), CAT16);
    }

    #[test]
    fn test_mat3_mul_mat() {
        let a = Mat3::diagonal(2.0, 2.0, 2.0);
        let b = Mat3::diagonal(3.0, 4.0, 5.0);
        assert_eq!(a * b, Mat3::diagonal(6.0, 8.0, 10.0));
        assert_eq!(CAT16 * Mat3::IDENTITY, CAT16);
    }
}
