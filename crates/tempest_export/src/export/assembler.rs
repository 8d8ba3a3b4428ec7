//! Scene document assembler
//!
//! One export run: read the prior document's GLOBALS, walk the snapshot
//! once, dispatch each object to its translator, and overwrite the
//! document. The run is synchronous and single-threaded; a bake may
//! block it for as long as it likes.

use std::path::PathBuf;

use super::document::{self, SceneDocument, SCENE_DOCUMENT_NAME};
use super::registry::{base_mesh_name, AssetRegistry, MeshExporter};
use super::{translators, ExportError};
use crate::scene::{MeshObject, ObjectData, SceneObject, SceneSnapshot};

/// Exporter for one authoring project.
///
/// Owns the project root and the mesh-bake collaborator; each call to
/// [`run`](Self::run) is one complete export of one snapshot.
pub struct SceneExporter<E: MeshExporter> {
    project_root: PathBuf,
    mesh_exporter: E,
}

impl<E: MeshExporter> SceneExporter<E> {
    /// Create an exporter rooted at the authoring project directory.
    pub fn new(project_root: impl Into<PathBuf>, mesh_exporter: E) -> Self {
        Self {
            project_root: project_root.into(),
            mesh_exporter,
        }
    }

    /// Path of the scene document this exporter overwrites.
    #[must_use]
    pub fn document_path(&self) -> PathBuf {
        self.project_root.join(SCENE_DOCUMENT_NAME)
    }

    /// Run one export and return the assembled document.
    ///
    /// Any error aborts the whole run; the document on disk is only
    /// replaced once assembly has fully succeeded.
    pub fn run(&mut self, scene: &SceneSnapshot) -> Result<SceneDocument, ExportError> {
        let document_path = self.document_path();
        log::info!(
            "exporting scene '{}' ({} objects) to {:?}",
            scene.name,
            scene.objects.len(),
            document_path
        );

        let globals = document::load_globals(&document_path)?;
        let mut doc = SceneDocument::with_globals(globals);
        let mut registry = AssetRegistry::new(&self.project_root, &mut self.mesh_exporter)?;

        for object in &scene.objects {
            match &object.data {
                ObjectData::Mesh(mesh) => {
                    Self::export_mesh_object(&mut registry, &mut doc, object, mesh)?;
                }
                ObjectData::Camera(camera) => {
                    log::debug!("translating camera '{}'", object.name);
                    doc.cameras
                        .insert(object.name.clone(), translators::translate_camera(object, camera));
                }
                ObjectData::Light(light) => {
                    log::debug!("translating light '{}'", object.name);
                    doc.lights
                        .insert(object.name.clone(), translators::translate_light(object, light));
                }
                ObjectData::Empty => {
                    log::trace!("skipping non-exported object '{}'", object.name);
                }
            }
        }

        doc.write(&document_path)?;
        log::info!(
            "export complete: {} meshes, {} instances, {} cameras, {} lights, {} materials",
            doc.meshes.len(),
            doc.instances.len(),
            doc.cameras.len(),
            doc.lights.len(),
            doc.materials.len()
        );
        Ok(doc)
    }

    /// Translate one mesh object: asset, instance, material, script.
    fn export_mesh_object(
        registry: &mut AssetRegistry<'_>,
        doc: &mut SceneDocument,
        object: &SceneObject,
        mesh: &MeshObject,
    ) -> Result<(), ExportError> {
        log::debug!("translating mesh '{}'", object.name);

        let base_name = base_mesh_name(&object.name).to_string();
        let asset = registry.ensure_exported(&base_name, object, mesh)?.clone();
        doc.meshes.entry(base_name.clone()).or_insert(asset);

        let instance = translators::translate_mesh_instance(object, mesh, &base_name)?;
        doc.instances.insert(object.name.clone(), instance);

        // Last object wins for a shared material name
        let (material_name, material) = translators::translate_material(object, mesh)?;
        doc.materials.insert(material_name, material);

        if let Some(tag) = object.gameplay_tag() {
            doc.scripts
                .insert(tag.to_string(), format!("Scripts/{tag}.lua"));
        }

        Ok(())
    }
}
