//! Mesh asset registry - per-run dedup around the bake collaborator
//!
//! Multiple scene objects can share one mesh (`Rock.001`, `Rock.002`
//! both place `Rock`). The registry guarantees the expensive bake runs
//! at most once per base name per run, and that an asset file already
//! on disk is never re-baked at all, even when the geometry changed:
//! stale geometry is refreshed by deleting the asset file, not by the
//! exporter.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::document::{Dynamism, MeshAsset};
use super::ExportError;
use crate::scene::{MeshObject, SceneObject};

/// Directory under the project root where mesh assets land.
pub const MESH_DIR: &str = "Meshes";

/// Black-box mesh-geometry bake collaborator.
///
/// The translation engine only needs the output-path convention and an
/// existence check; what the bytes look like is entirely the
/// implementation's business. A bake may block for an unbounded time;
/// there is no cancellation or retry.
pub trait MeshExporter {
    /// File extension (without the dot) of assets this exporter writes.
    fn extension(&self) -> &str;

    /// Bake `mesh`'s geometry to `<output_base>.<extension()>`.
    ///
    /// `object` is the representative sample whose data is baked; which
    /// object that is for a shared base name is first-encounter-wins.
    fn bake(
        &mut self,
        object: &SceneObject,
        mesh: &MeshObject,
        output_base: &Path,
    ) -> Result<(), ExportError>;
}

/// Derive the shared base name: the object name truncated at the first
/// `.` separator, so `Rock.001` and `Rock.002` both yield `Rock`.
#[must_use]
pub fn base_mesh_name(name: &str) -> &str {
    name.split_once('.').map_or(name, |(base, _)| base)
}

/// Per-run registry of exported mesh assets.
pub struct AssetRegistry<'a> {
    project_root: PathBuf,
    exporter: &'a mut dyn MeshExporter,
    entries: HashMap<String, MeshAsset>,
}

impl<'a> AssetRegistry<'a> {
    /// Create the registry and the mesh output directory.
    ///
    /// The directory is created here, once, before any export can run.
    pub fn new(
        project_root: &Path,
        exporter: &'a mut dyn MeshExporter,
    ) -> Result<Self, ExportError> {
        let mesh_dir = project_root.join(MESH_DIR);
        if !mesh_dir.exists() {
            fs::create_dir_all(&mesh_dir)?;
            log::debug!("created mesh output directory {:?}", mesh_dir);
        }

        Ok(Self {
            project_root: project_root.to_path_buf(),
            exporter,
            entries: HashMap::new(),
        })
    }

    /// Ensure the asset for `base_name` is exported and registered.
    ///
    /// First call for a base name bakes the asset (unless its file
    /// already exists) and derives `Dynamism` from the sample object's
    /// physics enablement. Every later call in the same run returns the
    /// cached entry untouched: a differently-configured object sharing
    /// the base name does not re-bake and does not re-derive.
    pub fn ensure_exported(
        &mut self,
        base_name: &str,
        object: &SceneObject,
        mesh: &MeshObject,
    ) -> Result<&MeshAsset, ExportError> {
        if self.entries.contains_key(base_name) {
            return Ok(&self.entries[base_name]);
        }

        let relative_path = format!("{}/{}.{}", MESH_DIR, base_name, self.exporter.extension());
        let asset_path = self.project_root.join(&relative_path);
        if asset_path.exists() {
            log::debug!("asset {relative_path} already on disk, skipping bake");
        } else {
            let output_base = self.project_root.join(MESH_DIR).join(base_name);
            self.exporter.bake(object, mesh, &output_base)?;
            log::info!("baked mesh asset {relative_path} from object '{}'", object.name);
        }

        let entry = MeshAsset {
            path: relative_path,
            dynamism: Dynamism::from_physics_enabled(mesh.rigid_body.enabled),
        };
        self.entries.insert(base_name.to_string(), entry);
        Ok(&self.entries[base_name])
    }

    /// Number of assets registered so far this run.
    #[must_use]
    pub fn asset_count(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Transform;
    use crate::scene::{CollisionShape, MaterialSlot, MeshGeometry, ObjectData, RigidBody};

    /// Fake collaborator that records every bake and writes a stub file.
    struct RecordingExporter {
        baked: Vec<String>,
    }

    impl RecordingExporter {
        fn new() -> Self {
            Self { baked: Vec::new() }
        }
    }

    impl MeshExporter for RecordingExporter {
        fn extension(&self) -> &str {
            "glb"
        }

        fn bake(
            &mut self,
            object: &SceneObject,
            _mesh: &MeshObject,
            output_base: &Path,
        ) -> Result<(), ExportError> {
            self.baked.push(object.name.clone());
            fs::write(output_base.with_extension("glb"), b"stub")?;
            Ok(())
        }
    }

    fn mesh_object(name: &str, physics_enabled: bool) -> (SceneObject, MeshObject) {
        let mesh = MeshObject {
            geometry: MeshGeometry::default(),
            rigid_body: RigidBody {
                enabled: physics_enabled,
                collision_shape: CollisionShape::Box,
                mass: 1.0,
            },
            material_slots: vec![MaterialSlot {
                name: "Default".to_string(),
                nodes: Vec::new(),
            }],
        };
        let object = SceneObject {
            name: name.to_string(),
            transform: Transform::identity(),
            data: ObjectData::Mesh(mesh.clone()),
            custom_props: HashMap::new(),
        };
        (object, mesh)
    }

    #[test]
    fn test_base_mesh_name_truncates_at_first_dot() {
        assert_eq!(base_mesh_name("Rock.001"), "Rock");
        assert_eq!(base_mesh_name("Rock.001.L"), "Rock");
        assert_eq!(base_mesh_name("Rock"), "Rock");
    }

    #[test]
    fn test_shared_base_name_bakes_once() {
        let dir = tempfile::tempdir().unwrap();
        let mut exporter = RecordingExporter::new();
        let mut registry = AssetRegistry::new(dir.path(), &mut exporter).unwrap();

        let (obj_a, mesh_a) = mesh_object("Rock.001", true);
        let (obj_b, mesh_b) = mesh_object("Rock.002", false);

        let first = registry
            .ensure_exported("Rock", &obj_a, &mesh_a)
            .unwrap()
            .clone();
        let second = registry
            .ensure_exported("Rock", &obj_b, &mesh_b)
            .unwrap()
            .clone();

        // One bake, one shared entry, first object wins the dynamism
        assert_eq!(registry.asset_count(), 1);
        assert_eq!(exporter.baked, vec!["Rock.001"]);
        assert_eq!(first, second);
        assert_eq!(first.dynamism, Dynamism::Dynamic);
        assert_eq!(first.path, "Meshes/Rock.glb");
    }

    #[test]
    fn test_existing_asset_file_suppresses_bake() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join(MESH_DIR)).unwrap();
        fs::write(dir.path().join("Meshes/Rock.glb"), b"old geometry").unwrap();

        let mut exporter = RecordingExporter::new();
        let mut registry = AssetRegistry::new(dir.path(), &mut exporter).unwrap();

        let (object, mesh) = mesh_object("Rock.001", false);
        let entry = registry.ensure_exported("Rock", &object, &mesh).unwrap();

        // Never re-baked, but still registered with derived dynamism
        assert_eq!(entry.dynamism, Dynamism::Static);
        assert!(exporter.baked.is_empty());
        assert_eq!(
            fs::read(dir.path().join("Meshes/Rock.glb")).unwrap(),
            b"old geometry"
        );
    }

    #[test]
    fn test_registry_creates_mesh_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut exporter = RecordingExporter::new();
        let _registry = AssetRegistry::new(dir.path(), &mut exporter).unwrap();
        assert!(dir.path().join(MESH_DIR).is_dir());
    }
}
