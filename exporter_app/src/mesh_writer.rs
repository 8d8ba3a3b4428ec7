//! Binary mesh container writer
//!
//! Stands in for the authoring tool's geometry baker: serializes a
//! snapshot's triangulated buffers into the compact `.tmesh` container.
//! Layout: magic, version, vertex count, index count, then the
//! position/normal/uv/index buffers as little-endian bytes.

use std::fs;
use std::path::Path;

use tempest_export::prelude::*;

const TMESH_MAGIC: [u8; 4] = *b"TMSH";
const TMESH_VERSION: u32 = 1;

/// Mesh-bake collaborator writing `.tmesh` containers.
pub struct TmeshBaker;

impl TmeshBaker {
    /// Create a baker.
    pub fn new() -> Self {
        Self
    }
}

impl MeshExporter for TmeshBaker {
    fn extension(&self) -> &str {
        "tmesh"
    }

    fn bake(
        &mut self,
        object: &SceneObject,
        mesh: &MeshObject,
        output_base: &Path,
    ) -> Result<(), ExportError> {
        let geometry = &mesh.geometry;
        log::debug!(
            "baking '{}' ({} vertices, {} indices)",
            object.name,
            geometry.positions.len(),
            geometry.indices.len()
        );

        let mut buf = Vec::new();
        buf.extend_from_slice(&TMESH_MAGIC);
        buf.extend_from_slice(&TMESH_VERSION.to_le_bytes());
        buf.extend_from_slice(&(geometry.positions.len() as u32).to_le_bytes());
        buf.extend_from_slice(&(geometry.indices.len() as u32).to_le_bytes());
        buf.extend_from_slice(bytemuck::cast_slice(&geometry.positions));
        buf.extend_from_slice(bytemuck::cast_slice(&geometry.normals));
        buf.extend_from_slice(bytemuck::cast_slice(&geometry.uvs));
        buf.extend_from_slice(bytemuck::cast_slice(&geometry.indices));

        fs::write(output_base.with_extension(self.extension()), &buf)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempest_export::scene::{
        CollisionShape, MaterialSlot, MeshGeometry, MeshObject, ObjectData, RigidBody,
    };

    fn triangle() -> (SceneObject, MeshObject) {
        let mesh = MeshObject {
            geometry: MeshGeometry {
                positions: vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
                normals: vec![[0.0, 0.0, 1.0]; 3],
                uvs: vec![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]],
                indices: vec![0, 1, 2],
            },
            rigid_body: RigidBody {
                enabled: false,
                collision_shape: CollisionShape::Mesh,
                mass: 0.0,
            },
            material_slots: vec![MaterialSlot {
                name: "Default".to_string(),
                nodes: Vec::new(),
            }],
        };
        let object = SceneObject {
            name: "Tri".to_string(),
            transform: Transform::identity(),
            data: ObjectData::Mesh(mesh.clone()),
            custom_props: HashMap::new(),
        };
        (object, mesh)
    }

    #[test]
    fn test_bake_writes_header_and_buffers() {
        let dir = tempfile::tempdir().unwrap();
        let (object, mesh) = triangle();

        let mut baker = TmeshBaker::new();
        baker.bake(&object, &mesh, &dir.path().join("Tri")).unwrap();

        let bytes = fs::read(dir.path().join("Tri.tmesh")).unwrap();
        assert_eq!(&bytes[0..4], b"TMSH");
        assert_eq!(bytes[4..8], 1u32.to_le_bytes());
        assert_eq!(bytes[8..12], 3u32.to_le_bytes());
        assert_eq!(bytes[12..16], 3u32.to_le_bytes());
        // header + 3 positions + 3 normals + 3 uvs + 3 indices
        assert_eq!(bytes.len(), 16 + 36 + 36 + 24 + 12);
    }
}
