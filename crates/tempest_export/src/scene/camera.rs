//! Camera object payload

use serde::{Deserialize, Serialize};

/// Camera category payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraObject {
    /// Projection the authoring tool uses for this camera
    pub projection: CameraProjection,

    /// Full vertical lens angle in radians
    pub angle: f32,

    /// Orthographic viewport scale (meaningful only for orthographic
    /// cameras, but always present in the source data)
    pub ortho_scale: f32,

    /// Near clip distance
    pub clip_start: f32,

    /// Far clip distance
    pub clip_end: f32,
}

/// Camera projections the authoring tool can assign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CameraProjection {
    /// Perspective projection
    Perspective,
    /// Orthographic projection
    Orthographic,
}
