//! Mesh instance translator

use super::super::coordinates;
use super::super::document::{Collider, ColliderGeometry, Dynamism, InstanceEntry, ScriptsBlock};
use super::super::ExportError;
use crate::scene::{CollisionShape, MeshObject, RigidBody, SceneObject};

/// Build the instance entry for a placed mesh object.
///
/// The material reference is taken from the object's first slot,
/// unconditionally; a mesh object with no slots aborts the run.
pub fn translate_mesh_instance(
    object: &SceneObject,
    mesh: &MeshObject,
    asset_name: &str,
) -> Result<InstanceEntry, ExportError> {
    let slot = mesh
        .material_slots
        .first()
        .ok_or_else(|| ExportError::MissingMaterialSlot(object.name.clone()))?;

    let mapped = coordinates::map_transform(&object.transform);

    let scripts = object.gameplay_tag().map(|tag| ScriptsBlock {
        gameplay: tag.to_string(),
    });

    Ok(InstanceEntry {
        asset: asset_name.to_string(),
        scale: mapped.scale.into(),
        rotation: coordinates::quaternion_slots(mapped.rotation),
        position: mapped.position.into(),
        material: slot.name.clone(),
        collider: translate_collider(&mesh.rigid_body, &object.name),
        scripts,
    })
}

/// Map the rigid body onto the embedded collider record.
///
/// Shapes outside the engine's four collider geometries produce an
/// entry with no `GEOMETRY` field; the gap is reported, not fatal.
fn translate_collider(rigid_body: &RigidBody, object_name: &str) -> Collider {
    let geometry = match rigid_body.collision_shape {
        CollisionShape::Box => Some(ColliderGeometry::Box),
        CollisionShape::Capsule => Some(ColliderGeometry::Capsule),
        CollisionShape::Sphere => Some(ColliderGeometry::Sphere),
        CollisionShape::Mesh => Some(ColliderGeometry::Mesh),
        shape @ (CollisionShape::ConvexHull
        | CollisionShape::Cylinder
        | CollisionShape::Cone
        | CollisionShape::Compound) => {
            log::warn!(
                "object '{object_name}': collision shape {shape:?} has no engine geometry, \
                 omitting GEOMETRY"
            );
            None
        }
    };

    Collider {
        geometry,
        mass: rigid_body.mass,
        dynamism: Dynamism::from_physics_enabled(rigid_body.enabled),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::{Transform, Vec3};
    use crate::scene::{MaterialSlot, MeshGeometry, ObjectData, GAMEPLAY_TAG};
    use std::collections::HashMap;

    fn crate_object(shape: CollisionShape, enabled: bool) -> (SceneObject, MeshObject) {
        let mesh = MeshObject {
            geometry: MeshGeometry::default(),
            rigid_body: RigidBody {
                enabled,
                collision_shape: shape,
                mass: 5.0,
            },
            material_slots: vec![MaterialSlot {
                name: "Wood".to_string(),
                nodes: Vec::new(),
            }],
        };
        let object = SceneObject {
            name: "Crate.002".to_string(),
            transform: Transform::from_position(Vec3::new(1.0, 2.0, 3.0)),
            data: ObjectData::Mesh(mesh.clone()),
            custom_props: HashMap::new(),
        };
        (object, mesh)
    }

    #[test]
    fn test_instance_entry_fields() {
        let (object, mesh) = crate_object(CollisionShape::Box, true);
        let entry = translate_mesh_instance(&object, &mesh, "Crate").unwrap();

        assert_eq!(entry.asset, "Crate");
        assert_eq!(entry.material, "Wood");
        assert_eq!(entry.position, [1.0, 3.0, 2.0]);
        assert_eq!(entry.scale, [1.0, 1.0, 1.0]);
        assert_eq!(entry.rotation, [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(entry.collider.geometry, Some(ColliderGeometry::Box));
        assert_eq!(entry.collider.mass, 5.0);
        assert_eq!(entry.collider.dynamism, Dynamism::Dynamic);
        assert!(entry.scripts.is_none());
    }

    #[test]
    fn test_disabled_body_exports_static_collider() {
        let (object, mesh) = crate_object(CollisionShape::Sphere, false);
        let entry = translate_mesh_instance(&object, &mesh, "Crate").unwrap();
        assert_eq!(entry.collider.dynamism, Dynamism::Static);
        assert_eq!(entry.collider.geometry, Some(ColliderGeometry::Sphere));
    }

    #[test]
    fn test_unmapped_shape_omits_geometry() {
        let (object, mesh) = crate_object(CollisionShape::ConvexHull, true);
        let entry = translate_mesh_instance(&object, &mesh, "Crate").unwrap();
        // Partial record, not an error
        assert_eq!(entry.collider.geometry, None);
        assert_eq!(entry.collider.mass, 5.0);
    }

    #[test]
    fn test_gameplay_tag_attaches_scripts_block() {
        let (mut object, mesh) = crate_object(CollisionShape::Box, true);
        object
            .custom_props
            .insert(GAMEPLAY_TAG.to_string(), "CrateSmasher".to_string());

        let entry = translate_mesh_instance(&object, &mesh, "Crate").unwrap();
        assert_eq!(entry.scripts.unwrap().gameplay, "CrateSmasher");
    }

    #[test]
    fn test_missing_material_slot_is_fatal() {
        let (object, mut mesh) = crate_object(CollisionShape::Box, true);
        mesh.material_slots.clear();

        match translate_mesh_instance(&object, &mesh, "Crate") {
            Err(ExportError::MissingMaterialSlot(name)) => assert_eq!(name, "Crate.002"),
            other => panic!("expected MissingMaterialSlot, got {other:?}"),
        }
    }
}
