//! Authoring-tool scene snapshot model
//!
//! Read-only input to the export run. An export never mutates a
//! snapshot; the host (or the RON adapter) builds one and hands it in,
//! together with an explicit project root, instead of the exporter
//! reaching into ambient authoring-tool state.

pub mod camera;
pub mod light;
pub mod mesh;

pub use camera::{CameraObject, CameraProjection};
pub use light::{LightKind, LightObject};
pub use mesh::{
    CollisionShape, MaterialSlot, MeshGeometry, MeshObject, RigidBody, ShaderNode,
};

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::foundation::math::Transform;

/// Custom-property key carrying an object's gameplay script tag.
pub const GAMEPLAY_TAG: &str = "GamePlay";

/// A complete scene captured at export time.
///
/// Objects appear in the authoring tool's native iteration order. That
/// order is not guaranteed stable across authoring-tool versions; the
/// exported document's collections are unordered maps, so nothing
/// downstream may depend on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneSnapshot {
    /// Scene name, used only for logging
    pub name: String,

    /// Every object in the scene, in native iteration order
    pub objects: Vec<SceneObject>,
}

/// One object of the authoring scene.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneObject {
    /// Unique object name (instance key; `Rock.001` style suffixes
    /// distinguish copies of a shared base mesh)
    pub name: String,

    /// Local transform in the authoring convention (Z-up)
    pub transform: Transform,

    /// Category-specific payload
    pub data: ObjectData,

    /// String-keyed custom-property store
    #[serde(default)]
    pub custom_props: HashMap<String, String>,
}

impl SceneObject {
    /// The object's gameplay script tag, if one is set.
    #[must_use]
    pub fn gameplay_tag(&self) -> Option<&str> {
        self.custom_props.get(GAMEPLAY_TAG).map(String::as_str)
    }
}

/// Category payload of a [`SceneObject`].
///
/// Closed set: categories the exporter does not translate (empties,
/// armatures, curves, ...) all collapse into `Empty` and are skipped,
/// never an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ObjectData {
    /// Renderable mesh with physics and material data
    Mesh(MeshObject),
    /// Camera with lens parameters
    Camera(CameraObject),
    /// Light source
    Light(LightObject),
    /// Any category the export does not translate
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gameplay_tag_lookup() {
        let mut object = SceneObject {
            name: "Door".to_string(),
            transform: Transform::identity(),
            data: ObjectData::Empty,
            custom_props: HashMap::new(),
        };
        assert_eq!(object.gameplay_tag(), None);

        object
            .custom_props
            .insert(GAMEPLAY_TAG.to_string(), "DoorOpener".to_string());
        assert_eq!(object.gameplay_tag(), Some("DoorOpener"));
    }
}
