//! # Tempest Export
//!
//! Scene-to-document translation engine for the Tempest engine.
//!
//! Converts an authoring-tool scene snapshot (meshes, materials, lights,
//! cameras, physics colliders, script tags) into the single `scene.json`
//! document Tempest loads at level start, plus the set of baked mesh
//! assets the document references.
//!
//! ## Features
//!
//! - **Coordinate Mapping**: Z-up authoring transforms to Tempest's Y-up
//!   convention, including the quaternion component remap
//! - **Entity Translators**: one per object category (mesh instance,
//!   material, camera, light)
//! - **Asset Registry**: mesh bakes deduplicated by base name, existing
//!   assets never re-baked
//! - **Document Assembly**: GLOBALS round-tripped from any prior
//!   document, every other collection rebuilt, atomic overwrite
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tempest_export::prelude::*;
//!
//! # fn load_snapshot() -> SceneSnapshot { unimplemented!() }
//! # struct Baker;
//! # impl MeshExporter for Baker {
//! #     fn extension(&self) -> &str { "glb" }
//! #     fn bake(
//! #         &mut self,
//! #         _object: &SceneObject,
//! #         _mesh: &MeshObject,
//! #         _output_base: &std::path::Path,
//! #     ) -> Result<(), ExportError> { Ok(()) }
//! # }
//! fn main() -> Result<(), ExportError> {
//!     let snapshot = load_snapshot();
//!     let mut exporter = SceneExporter::new("game/project", Baker);
//!     let document = exporter.run(&snapshot)?;
//!     println!("exported {} instances", document.instances.len());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod scene;
pub mod export;

pub use export::{ExportError, MeshExporter, SceneExporter};

/// Common imports for exporter users
pub mod prelude {
    pub use crate::export::{
        document::SceneDocument,
        ExportError, MeshExporter, SceneExporter,
    };
    pub use crate::foundation::math::{Quat, Transform, Vec3};
    pub use crate::scene::{
        CameraObject, LightObject, MeshObject, ObjectData, SceneObject, SceneSnapshot,
    };
}
