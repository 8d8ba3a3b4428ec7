//! Mesh object payload: geometry buffers, rigid-body physics, materials

use serde::{Deserialize, Serialize};

/// Mesh category payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeshObject {
    /// Baked local-space geometry, consumed only by the mesh-export
    /// collaborator
    pub geometry: MeshGeometry,

    /// Rigid-body physics properties. Every mesh object carries one;
    /// a snapshot without it is malformed at the source.
    pub rigid_body: RigidBody,

    /// Material slots in slot order. Export reads only the first slot;
    /// an empty list is a precondition violation and aborts the run.
    pub material_slots: Vec<MaterialSlot>,
}

/// Triangulated local-space geometry buffers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MeshGeometry {
    /// Vertex positions
    pub positions: Vec<[f32; 3]>,

    /// Per-vertex normals, parallel to `positions`
    pub normals: Vec<[f32; 3]>,

    /// Per-vertex texture coordinates, parallel to `positions`
    pub uvs: Vec<[f32; 2]>,

    /// Triangle list indices into the vertex buffers
    pub indices: Vec<u32>,
}

/// Rigid-body physics properties of a mesh object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RigidBody {
    /// Whether the body participates in simulation (drives `Dynamism`
    /// and the collider `Type`)
    pub enabled: bool,

    /// Collision geometry the authoring tool assigned
    pub collision_shape: CollisionShape,

    /// Mass in kilograms
    pub mass: f32,
}

/// Collision shapes the authoring tool can assign.
///
/// Closed set covering the source tool's full enum. Only four of these
/// have an engine-side collider geometry; the rest export a collider
/// with no `GEOMETRY` field (see the instance translator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionShape {
    /// Axis-aligned box
    Box,
    /// Capsule
    Capsule,
    /// Sphere
    Sphere,
    /// Full triangle-mesh collision
    Mesh,
    /// Convex hull of the mesh
    ConvexHull,
    /// Cylinder
    Cylinder,
    /// Cone
    Cone,
    /// Compound of child shapes
    Compound,
}

/// One material slot with its shading node graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialSlot {
    /// Slot (material) name, the key of the exported material entry
    pub name: String,

    /// Shading nodes of the slot's material
    #[serde(default)]
    pub nodes: Vec<ShaderNode>,
}

/// Shading nodes of a material graph.
///
/// Export only reads image-texture nodes; every other node kind is
/// represented so snapshots round-trip, and skipped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ShaderNode {
    /// Image texture sampling a file on disk
    ImageTexture {
        /// Texture file path as stored by the authoring tool (may carry
        /// leading/trailing path separators)
        filepath: String,
    },
    /// Principled BSDF shading node
    PrincipledBsdf,
    /// Material output node
    MaterialOutput,
    /// Any other node kind, identified by the source tool's type name
    Other(String),
}
