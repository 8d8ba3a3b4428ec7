//! Camera translator

use super::super::coordinates;
use super::super::document::{CameraEntry, CameraMode};
use crate::foundation::math::Vec3;
use crate::scene::{CameraObject, CameraProjection, SceneObject};

/// Build the camera entry.
///
/// The direction is the local forward axis `(0, 0, -1)` rotated into
/// world space, then run through the vector mapping rule like any
/// other vector.
#[must_use]
pub fn translate_camera(object: &SceneObject, camera: &CameraObject) -> CameraEntry {
    let forward = Vec3::new(0.0, 0.0, -1.0);
    let position = coordinates::map_vector(object.transform.position);
    let direction = coordinates::map_vector(object.transform.rotation * forward);

    let (mode, ortho_size) = match camera.projection {
        CameraProjection::Perspective => (CameraMode::InfinitePerspective, None),
        CameraProjection::Orthographic => (
            CameraMode::Orthographic,
            Some([camera.ortho_scale, camera.ortho_scale]),
        ),
    };

    CameraEntry {
        position: position.into(),
        direction: direction.into(),
        mode,
        ortho_size,
        fov: camera.angle.to_degrees(),
        near_plane: camera.clip_start,
        far_plane: camera.clip_end,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::{Quaternion, Transform, Unit};
    use crate::scene::ObjectData;
    use approx::assert_relative_eq;
    use std::collections::HashMap;
    use std::f32::consts::FRAC_PI_2;

    fn camera_object(projection: CameraProjection) -> (SceneObject, CameraObject) {
        let camera = CameraObject {
            projection,
            angle: FRAC_PI_2,
            ortho_scale: 6.0,
            clip_start: 0.1,
            clip_end: 500.0,
        };
        let object = SceneObject {
            name: "Camera".to_string(),
            transform: Transform::from_position(Vec3::new(0.0, -10.0, 4.0)),
            data: ObjectData::Camera(camera.clone()),
            custom_props: HashMap::new(),
        };
        (object, camera)
    }

    #[test]
    fn test_perspective_camera() {
        let (object, camera) = camera_object(CameraProjection::Perspective);
        let entry = translate_camera(&object, &camera);

        assert_eq!(entry.mode, CameraMode::InfinitePerspective);
        assert!(entry.ortho_size.is_none());
        assert_eq!(entry.position, [0.0, 4.0, -10.0]);
        assert_relative_eq!(entry.fov, 90.0, epsilon = 1e-4);
        assert_eq!(entry.near_plane, 0.1);
        assert_eq!(entry.far_plane, 500.0);
    }

    #[test]
    fn test_orthographic_camera_carries_size_pair() {
        let (object, camera) = camera_object(CameraProjection::Orthographic);
        let entry = translate_camera(&object, &camera);

        assert_eq!(entry.mode, CameraMode::Orthographic);
        assert_eq!(entry.ortho_size, Some([6.0, 6.0]));
        // FOV is still emitted; the engine ignores it in this mode
        assert_relative_eq!(entry.fov, 90.0, epsilon = 1e-4);
    }

    #[test]
    fn test_identity_rotation_direction() {
        // Authoring forward (0, 0, -1) maps to engine (0, -1, 0)
        let (object, camera) = camera_object(CameraProjection::Perspective);
        let entry = translate_camera(&object, &camera);
        assert_eq!(entry.direction, [0.0, -1.0, 0.0]);
    }

    #[test]
    fn test_rotated_camera_direction() {
        // -90 degrees around authoring X tilts forward onto authoring
        // -Y, which the axis swap turns into engine -Z
        let half_angle = -FRAC_PI_2 / 2.0;
        let (mut object, camera) = camera_object(CameraProjection::Perspective);
        object.transform.rotation =
            Unit::new_normalize(Quaternion::new(half_angle.cos(), half_angle.sin(), 0.0, 0.0));

        let entry = translate_camera(&object, &camera);
        let [x, y, z] = entry.direction;
        assert_relative_eq!(x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(y, 0.0, epsilon = 1e-6);
        assert_relative_eq!(z, -1.0, epsilon = 1e-6);
    }
}
