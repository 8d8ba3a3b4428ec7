//! Light object payload

use serde::{Deserialize, Serialize};

/// Light category payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LightObject {
    /// Light kind the authoring tool assigned
    pub kind: LightKind,

    /// RGB color triple, each channel in `[0, 1]`
    pub color: [f32; 3],

    /// Distance at which the light's influence is cut off
    pub cutoff_distance: f32,

    /// Specular reflection factor. This is what the engine reads as
    /// `Intensity`; see the light translator.
    pub specular_factor: f32,

    /// Radiant power in watts. Carried in the snapshot but never
    /// exported; `Intensity` comes from `specular_factor`.
    pub power: f32,
}

/// Light kinds the authoring tool can assign.
///
/// Closed set covering the source tool's full enum. `Sun` has no
/// engine-side light type and exports an entry with no `Type` field
/// (see the light translator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LightKind {
    /// Omnidirectional point light
    Point,
    /// Cone spot light
    Spot,
    /// Rectangular area light
    Area,
    /// Directional sun light
    Sun,
}
