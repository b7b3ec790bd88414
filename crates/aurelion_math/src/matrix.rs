//! Matrices.

use bytemuck::{Pod, Zeroable};

/// A 4x4 matrix.
///
/// The elements are stored column-major in 128-bit SIMD registers;
/// [`element`](Self::element) addresses row `i`, column `j` regardless of
/// storage order. The matrix follows the column-vector convention: transforms
/// compose right to left, so a full camera transform reads
/// `projection * view * model`.
///
/// The default value is the identity matrix.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
pub struct Matrix4 {
    inner: glam::Mat4,
}

impl Matrix4 {
    /// Creates the identity matrix.
    #[inline]
    pub const fn identity() -> Self {
        Self::wrap(glam::Mat4::IDENTITY)
    }

    /// Creates a matrix with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::wrap(glam::Mat4::ZERO)
    }

    /// Creates a matrix with the given value along the diagonal and zeros
    /// everywhere else.
    #[inline]
    pub const fn from_same_diagonal(value: f32) -> Self {
        Self::wrap(glam::Mat4::from_diagonal(glam::Vec4::splat(value)))
    }

    /// Returns the element at row `i` and column `j`.
    ///
    /// # Panics
    /// If the indices are outside the matrix.
    #[inline]
    pub fn element(&self, i: usize, j: usize) -> f32 {
        let m = &self.inner;
        match j {
            0 => m.x_axis[i],
            1 => m.y_axis[i],
            2 => m.z_axis[i],
            3 => m.w_axis[i],
            _ => panic!("index out of bounds"),
        }
    }

    /// Returns a mutable reference to the element at row `i` and column `j`.
    ///
    /// # Panics
    /// If the indices are outside the matrix.
    #[inline]
    pub fn element_mut(&mut self, i: usize, j: usize) -> &mut f32 {
        let m = &mut self.inner;
        match j {
            0 => &mut m.x_axis[i],
            1 => &mut m.y_axis[i],
            2 => &mut m.z_axis[i],
            3 => &mut m.w_axis[i],
            _ => panic!("index out of bounds"),
        }
    }

    #[inline]
    pub(crate) const fn wrap(inner: glam::Mat4) -> Self {
        Self { inner }
    }
}

impl_binop!(Mul, mul, Matrix4, Matrix4, Matrix4, |a, b| {
    Matrix4::wrap(a.inner.mul_mat4(&b.inner))
});

impl_binop_assign!(MulAssign, mul_assign, Matrix4, Matrix4, |a, b| {
    a.inner.mul_assign(b.inner);
});

impl_abs_diff_eq!(Matrix4, |a, b, epsilon| {
    a.inner.abs_diff_eq(b.inner, epsilon)
});

impl_relative_eq!(Matrix4, |a, b, epsilon, max_relative| {
    a.inner.relative_eq(&b.inner, epsilon, max_relative)
});
