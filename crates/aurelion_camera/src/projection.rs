//! Projection transformations.

use approx::assert_abs_diff_ne;
use aurelion_math::{Matrix4, angle::Angle};

/// Creates a perspective projection matrix mapping points in a view frustum
/// pointing along the negative z-axis into the clip volume spanning from -1
/// to 1 in x and y and from 0 to 1 in z.
///
/// # Note
/// `aspect_ratio` is the ratio of width to height of the view plane.
///
/// # Panics
/// If `vertical_field_of_view` or `aspect_ratio` is zero, or if the near
/// distance is not strictly between zero and the far distance.
pub fn perspective<A: Angle>(
    vertical_field_of_view: A,
    aspect_ratio: f32,
    near_distance: f32,
    far_distance: f32,
) -> Matrix4 {
    let vertical_field_of_view = vertical_field_of_view.radians();
    assert_abs_diff_ne!(vertical_field_of_view, 0.0);
    assert_abs_diff_ne!(aspect_ratio, 0.0);
    assert!(near_distance > 0.0);
    assert!(far_distance > near_distance);

    let inverse_half_fov_tan = 1.0 / (0.5 * vertical_field_of_view).tan();

    let mut matrix = Matrix4::zeros();
    *matrix.element_mut(0, 0) = inverse_half_fov_tan / aspect_ratio;
    *matrix.element_mut(1, 1) = inverse_half_fov_tan;
    *matrix.element_mut(2, 2) = -far_distance / (far_distance - near_distance);
    *matrix.element_mut(2, 3) = matrix.element(2, 2) * near_distance;
    *matrix.element_mut(3, 2) = -1.0;

    matrix
}
