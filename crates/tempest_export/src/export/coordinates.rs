//! Coordinate system conversion utilities
//!
//! The authoring tool works Z-up right-handed; Tempest is Y-up. Every
//! vector and quaternion that reaches the document goes through the
//! mapping here. The functions are pure and have no failure modes:
//! inputs are trusted (unit-length rotations, finite components), and a
//! snapshot violating that is malformed at the source, not handled here.

use crate::foundation::math::{Quat, Quaternion, Transform, Unit, Vec3};

/// Map a vector from the authoring convention to Tempest's.
///
/// Swaps the Y and Z components: `(x, y, z) -> (x, z, y)`. Applies to
/// positions, scales, and direction vectors alike.
#[must_use]
pub fn map_vector(v: Vec3) -> Vec3 {
    Vec3::new(v.x, v.z, v.y)
}

/// Map a rotation quaternion from the authoring convention to Tempest's.
///
/// With components named `(x, y, z, w)`, the output is `(x, z, y, w)`:
/// the imaginary Y and Z components swap and the scalar stays in the
/// final slot. This is a basis change, not a relabeling, and the wire
/// format depends on exactly this remap.
///
/// No renormalization is performed; the input is trusted unit-length.
#[must_use]
pub fn map_quaternion(q: Quat) -> Quat {
    let q = q.into_inner();
    // Quaternion::new takes (w, i, j, k)
    Unit::new_unchecked(Quaternion::new(q.w, q.i, q.k, q.j))
}

/// Map a whole transform (position, rotation, scale) at once.
#[must_use]
pub fn map_transform(t: &Transform) -> Transform {
    Transform {
        position: map_vector(t.position),
        rotation: map_quaternion(t.rotation),
        scale: map_vector(t.scale),
    }
}

/// Wire layout of a quaternion, slot order `(x, y, z, w)`.
#[must_use]
pub fn quaternion_slots(q: Quat) -> [f32; 4] {
    let q = q.into_inner();
    [q.i, q.j, q.k, q.w]
}
