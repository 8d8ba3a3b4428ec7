//! Wire schema of the Tempest scene document
//!
//! Field names, casing, and nesting here are the wire contract with the
//! engine (`GEOMETRY`, `Dynamism`, `OrthoSize`, ...) and must not drift.
//! The document is a single JSON object with exactly seven top-level
//! collections; `GLOBALS` is the only one preserved across re-exports,
//! the other six are rebuilt from scratch every run.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::ExportError;

/// File name of the scene document, relative to the project root.
pub const SCENE_DOCUMENT_NAME: &str = "scene.json";

/// Engine-global settings block, round-tripped verbatim.
///
/// The exporter never writes into GLOBALS; it only carries forward what
/// a prior document (or a hand edit) put there, e.g. `Gravity`.
pub type Globals = serde_json::Map<String, serde_json::Value>;

/// Whether an asset or collider participates in physics simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dynamism {
    /// Immovable level geometry
    Static,
    /// Simulated rigid body
    Dynamic,
}

impl Dynamism {
    /// Physics-enabled bodies are dynamic, everything else is static.
    #[must_use]
    pub const fn from_physics_enabled(enabled: bool) -> Self {
        if enabled {
            Self::Dynamic
        } else {
            Self::Static
        }
    }
}

/// Collider geometries the engine can build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColliderGeometry {
    /// Box collider
    Box,
    /// Capsule collider
    Capsule,
    /// Sphere collider
    Sphere,
    /// Triangle-mesh collider
    Mesh,
}

/// Camera projection modes the engine supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CameraMode {
    /// Perspective with an infinite far plane
    InfinitePerspective,
    /// Orthographic projection
    Orthographic,
}

/// Light types the engine supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LightTypeTag {
    /// Omnidirectional point light
    Point,
    /// Cone spot light
    Spot,
    /// Rectangular area light
    Area,
}

/// One exported mesh asset, keyed by base mesh name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshAsset {
    /// Asset path relative to the project root, e.g. `Meshes/Rock.glb`
    #[serde(rename = "Path")]
    pub path: String,

    /// Derived from the first-encountered object's physics enablement
    #[serde(rename = "Dynamism")]
    pub dynamism: Dynamism,
}

/// Physics collider embedded in an instance entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collider {
    /// Engine collider geometry; absent when the authoring shape has no
    /// engine counterpart
    #[serde(rename = "GEOMETRY", default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<ColliderGeometry>,

    /// Mass in kilograms
    #[serde(rename = "Mass")]
    pub mass: f32,

    /// Mirrors the object's physics enablement
    #[serde(rename = "Type")]
    pub dynamism: Dynamism,
}

/// Scripts block attached to an instance carrying a gameplay tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptsBlock {
    /// The gameplay tag, copied through verbatim
    #[serde(rename = "GamePlay")]
    pub gameplay: String,
}

/// One placed mesh instance, keyed by full object name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstanceEntry {
    /// Base name of the mesh asset this instance places
    #[serde(rename = "Asset")]
    pub asset: String,

    /// Mapped scale
    #[serde(rename = "Scale")]
    pub scale: [f32; 3],

    /// Mapped rotation, slot order `(x, y, z, w)`
    #[serde(rename = "Rotation")]
    pub rotation: [f32; 4],

    /// Mapped position
    #[serde(rename = "Position")]
    pub position: [f32; 3],

    /// Name of the material in the object's first slot
    #[serde(rename = "Material")]
    pub material: String,

    /// Embedded physics collider
    #[serde(rename = "Collider")]
    pub collider: Collider,

    /// Present only when the object carries a gameplay tag
    #[serde(rename = "Scripts", default, skip_serializing_if = "Option::is_none")]
    pub scripts: Option<ScriptsBlock>,
}

/// One camera, keyed by object name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraEntry {
    /// Mapped position
    #[serde(rename = "Position")]
    pub position: [f32; 3],

    /// Mapped unit forward direction
    #[serde(rename = "Direction")]
    pub direction: [f32; 3],

    /// Projection mode
    #[serde(rename = "Mode")]
    pub mode: CameraMode,

    /// Orthographic extent pair; present only for orthographic cameras
    #[serde(rename = "OrthoSize", default, skip_serializing_if = "Option::is_none")]
    pub ortho_size: Option<[f32; 2]>,

    /// Vertical field of view in degrees
    #[serde(rename = "FOV")]
    pub fov: f32,

    /// Near clip distance
    #[serde(rename = "NearPlane")]
    pub near_plane: f32,

    /// Far clip distance
    #[serde(rename = "FarPlane")]
    pub far_plane: f32,
}

/// One light, keyed by object name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightEntry {
    /// Mapped scale
    #[serde(rename = "Scale")]
    pub scale: [f32; 3],

    /// Mapped rotation, slot order `(x, y, z, w)`
    #[serde(rename = "Rotation")]
    pub rotation: [f32; 4],

    /// Mapped position
    #[serde(rename = "Position")]
    pub position: [f32; 3],

    /// Engine light type; absent when the authoring kind has no engine
    /// counterpart
    #[serde(rename = "Type", default, skip_serializing_if = "Option::is_none")]
    pub light_type: Option<LightTypeTag>,

    /// RGB color triple, verbatim
    #[serde(rename = "Colour")]
    pub colour: [f32; 3],

    /// Cutoff distance, verbatim
    #[serde(rename = "FallOff")]
    pub fall_off: f32,

    /// Specular factor, verbatim (the engine reads this as intensity)
    #[serde(rename = "Intensity")]
    pub intensity: f32,
}

/// Texture-role to relative-path map for one material.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialEntry {
    /// Base color texture
    #[serde(rename = "Albedo", default, skip_serializing_if = "Option::is_none")]
    pub albedo: Option<String>,

    /// Metalness texture
    #[serde(rename = "Metalness", default, skip_serializing_if = "Option::is_none")]
    pub metalness: Option<String>,

    /// Normal map
    #[serde(rename = "Normal", default, skip_serializing_if = "Option::is_none")]
    pub normal: Option<String>,

    /// Roughness texture
    #[serde(rename = "Roughness", default, skip_serializing_if = "Option::is_none")]
    pub roughness: Option<String>,

    /// Ambient occlusion texture
    #[serde(rename = "Occlusion", default, skip_serializing_if = "Option::is_none")]
    pub occlusion: Option<String>,

    /// Emissive texture
    #[serde(rename = "Emissive", default, skip_serializing_if = "Option::is_none")]
    pub emissive: Option<String>,
}

/// The root scene document: exactly seven named collections.
///
/// Collections are unordered maps; consumers must not depend on entry
/// iteration order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneDocument {
    /// Engine-global settings, preserved across re-exports
    #[serde(rename = "GLOBALS")]
    pub globals: Globals,

    /// Mesh assets by base name
    #[serde(rename = "MESH")]
    pub meshes: HashMap<String, MeshAsset>,

    /// Placed instances by full object name
    #[serde(rename = "INSTANCE")]
    pub instances: HashMap<String, InstanceEntry>,

    /// Cameras by object name
    #[serde(rename = "CAMERA")]
    pub cameras: HashMap<String, CameraEntry>,

    /// Lights by object name
    #[serde(rename = "LIGHT")]
    pub lights: HashMap<String, LightEntry>,

    /// Script references by gameplay tag
    #[serde(rename = "SCRIPTS")]
    pub scripts: HashMap<String, String>,

    /// Materials by slot name
    #[serde(rename = "MATERIALS")]
    pub materials: HashMap<String, MaterialEntry>,
}

impl SceneDocument {
    /// Create an empty document carrying the given GLOBALS block.
    #[must_use]
    pub fn with_globals(globals: Globals) -> Self {
        Self {
            globals,
            ..Self::default()
        }
    }

    /// Serialize to the wire format: UTF-8 JSON, 4-space indentation.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, ExportError> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;
        Ok(buf)
    }

    /// Overwrite the document at `path` atomically.
    ///
    /// The bytes land in a sibling temp file first and reach `path` via
    /// rename, so a failure at any point leaves the previous document
    /// intact.
    pub fn write(&self, path: &Path) -> Result<(), ExportError> {
        let bytes = self.to_json_bytes()?;
        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, &bytes)?;
        fs::rename(&tmp_path, path)?;
        log::debug!("wrote scene document {:?} ({} bytes)", path, bytes.len());
        Ok(())
    }
}

/// Read the GLOBALS collection of a prior document, if one exists.
///
/// Missing file or missing GLOBALS key yield an empty block. A file
/// that is not valid JSON, or a GLOBALS value that is not a JSON
/// object, is fatal: overwriting a document we cannot read risks
/// destroying hand-authored settings.
pub fn load_globals(path: &Path) -> Result<Globals, ExportError> {
    if !path.exists() {
        return Ok(Globals::new());
    }

    let contents = fs::read_to_string(path)?;
    let root: serde_json::Value =
        serde_json::from_str(&contents).map_err(|source| ExportError::DocumentParse {
            path: path.to_path_buf(),
            source,
        })?;

    match root.get("GLOBALS") {
        None => Ok(Globals::new()),
        Some(serde_json::Value::Object(map)) => Ok(map.clone()),
        Some(_) => Err(ExportError::GlobalsNotObject(path.to_path_buf())),
    }
}
