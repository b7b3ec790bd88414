//! View transformations.

use approx::assert_abs_diff_ne;
use aurelion_math::{Matrix4, Vector3};

/// Creates a view matrix transforming world-space points into the space of a
/// camera positioned at `eye` and looking toward `center`, with `up` hinting
/// which way is up.
///
/// The camera basis is right-handed and orthonormal: the camera looks along
/// its negative z-axis, with its x-axis pointing right and its y-axis
/// pointing up.
///
/// # Panics
/// If `eye` and `center` coincide, or if `up` is parallel to the viewing
/// direction.
pub fn look_at(eye: &Vector3, center: &Vector3, up: &Vector3) -> Matrix4 {
    let forward = (center - eye).normalized();
    assert_abs_diff_ne!(forward.norm_squared(), 0.0);

    let right = forward.cross(up).normalized();
    assert_abs_diff_ne!(right.norm_squared(), 0.0);

    let true_up = right.cross(&forward);

    let mut matrix = Matrix4::identity();

    *matrix.element_mut(0, 0) = right.x();
    *matrix.element_mut(0, 1) = right.y();
    *matrix.element_mut(0, 2) = right.z();
    *matrix.element_mut(0, 3) = -right.dot(eye);

    *matrix.element_mut(1, 0) = true_up.x();
    *matrix.element_mut(1, 1) = true_up.y();
    *matrix.element_mut(1, 2) = true_up.z();
    *matrix.element_mut(1, 3) = -true_up.dot(eye);

    *matrix.element_mut(2, 0) = -forward.x();
    *matrix.element_mut(2, 1) = -forward.y();
    *matrix.element_mut(2, 2) = -forward.z();
    *matrix.element_mut(2, 3) = forward.dot(eye);

    matrix
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const EPSILON: f32 = 1e-6;

    fn matrix_row(matrix: &Matrix4, i: usize) -> Vector3 {
        Vector3::new(
            matrix.element(i, 0),
            matrix.element(i, 1),
            matrix.element(i, 2),
        )
    }

    /// Applies the view matrix to a world-space point.
    fn transformed_point(matrix: &Matrix4, point: &Vector3) -> Vector3 {
        Vector3::new(
            matrix_row(matrix, 0).dot(point) + matrix.element(0, 3),
            matrix_row(matrix, 1).dot(point) + matrix.element(1, 3),
            matrix_row(matrix, 2).dot(point) + matrix.element(2, 3),
        )
    }

    #[test]
    fn looking_down_negative_z_gives_identity_rotation() {
        let eye = Vector3::new(0.0, 0.0, 5.0);
        let matrix = look_at(&eye, &Vector3::zeros(), &Vector3::unit_y());

        assert_abs_diff_eq!(matrix_row(&matrix, 0), Vector3::unit_x(), epsilon = EPSILON);
        assert_abs_diff_eq!(matrix_row(&matrix, 1), Vector3::unit_y(), epsilon = EPSILON);
        assert_abs_diff_eq!(matrix_row(&matrix, 2), Vector3::unit_z(), epsilon = EPSILON);

        assert_abs_diff_eq!(matrix.element(0, 3), 0.0, epsilon = EPSILON);
        assert_abs_diff_eq!(matrix.element(1, 3), 0.0, epsilon = EPSILON);
        assert_abs_diff_eq!(matrix.element(2, 3), -5.0, epsilon = EPSILON);
    }

    #[test]
    fn look_at_basis_is_orthonormal_and_right_handed() {
        let eye = Vector3::new(1.0, -2.0, 3.0);
        let center = Vector3::new(-4.0, 5.0, 0.5);
        let up = Vector3::new(0.2, 1.0, -0.1);
        let matrix = look_at(&eye, &center, &up);

        let right = matrix_row(&matrix, 0);
        let true_up = matrix_row(&matrix, 1);
        let back = matrix_row(&matrix, 2);

        assert_abs_diff_eq!(right.norm(), 1.0, epsilon = EPSILON);
        assert_abs_diff_eq!(true_up.norm(), 1.0, epsilon = EPSILON);
        assert_abs_diff_eq!(back.norm(), 1.0, epsilon = EPSILON);

        assert_abs_diff_eq!(right.dot(&true_up), 0.0, epsilon = EPSILON);
        assert_abs_diff_eq!(right.dot(&back), 0.0, epsilon = EPSILON);
        assert_abs_diff_eq!(true_up.dot(&back), 0.0, epsilon = EPSILON);

        assert_abs_diff_eq!(right.cross(&true_up), back, epsilon = EPSILON);
    }

    #[test]
    fn look_at_maps_eye_to_origin() {
        let eye = Vector3::new(2.0, 3.0, -1.0);
        let center = Vector3::new(0.0, 1.0, 4.0);
        let matrix = look_at(&eye, &center, &Vector3::unit_y());

        assert_abs_diff_eq!(
            transformed_point(&matrix, &eye),
            Vector3::zeros(),
            epsilon = EPSILON
        );
    }

    #[test]
    fn look_at_maps_center_onto_negative_z_axis() {
        let eye = Vector3::new(2.0, 3.0, -1.0);
        let center = Vector3::new(0.0, 1.0, 4.0);
        let matrix = look_at(&eye, &center, &Vector3::unit_y());

        let distance = (&center - &eye).norm();
        assert_abs_diff_eq!(
            transformed_point(&matrix, &center),
            Vector3::new(0.0, 0.0, -distance),
            epsilon = 1e-5
        );
    }

    #[test]
    fn look_at_bottom_row_is_homogeneous() {
        let matrix = look_at(
            &Vector3::new(1.0, 2.0, 3.0),
            &Vector3::zeros(),
            &Vector3::unit_y(),
        );

        assert_eq!(matrix.element(3, 0), 0.0);
        assert_eq!(matrix.element(3, 1), 0.0);
        assert_eq!(matrix.element(3, 2), 0.0);
        assert_eq!(matrix.element(3, 3), 1.0);
    }

    #[test]
    #[should_panic]
    fn look_at_with_coincident_eye_and_center_panics() {
        let eye = Vector3::new(1.0, 2.0, 3.0);
        look_at(&eye, &eye, &Vector3::unit_y());
    }

    #[test]
    #[should_panic]
    fn look_at_with_up_parallel_to_view_direction_panics() {
        look_at(
            &Vector3::zeros(),
            &Vector3::new(0.0, 2.0, 0.0),
            &Vector3::unit_y(),
        );
    }
}
