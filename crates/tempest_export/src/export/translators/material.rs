//! Material translator
//!
//! Texture roles are inferred from filename substrings, not from the
//! node graph's socket wiring: artists name their maps `wall_col.png`,
//! `wall_nrm.png`, and so on, and the engine only needs the role, not
//! the shading network.

use super::super::document::MaterialEntry;
use super::super::ExportError;
use crate::scene::{MeshObject, SceneObject, ShaderNode};

/// Texture roles the engine's material system understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TextureRole {
    Albedo,
    Metalness,
    Normal,
    Roughness,
    Occlusion,
    Emissive,
}

/// Substring patterns in classification order. A path matching several
/// patterns takes the first listed match, so `wall_nrm_col.png` is
/// Albedo, not Normal.
const ROLE_PATTERNS: [(&str, TextureRole); 6] = [
    ("_col", TextureRole::Albedo),
    ("_mtl", TextureRole::Metalness),
    ("_nrm", TextureRole::Normal),
    ("_rgh", TextureRole::Roughness),
    ("_occ", TextureRole::Occlusion),
    ("_em", TextureRole::Emissive),
];

fn classify_texture(path: &str) -> Option<TextureRole> {
    ROLE_PATTERNS
        .iter()
        .find(|(pattern, _)| path.contains(pattern))
        .map(|&(_, role)| role)
}

/// Build the material entry for the object's first slot.
///
/// Returns the slot name alongside the entry; the assembler inserts
/// under that name, overwriting any entry a previous object produced
/// for the same material (last object wins).
pub fn translate_material(
    object: &SceneObject,
    mesh: &MeshObject,
) -> Result<(String, MaterialEntry), ExportError> {
    let slot = mesh
        .material_slots
        .first()
        .ok_or_else(|| ExportError::MissingMaterialSlot(object.name.clone()))?;

    let mut entry = MaterialEntry::default();
    for node in &slot.nodes {
        if let ShaderNode::ImageTexture { filepath } = node {
            let path = filepath.trim_matches(['\\', '/']);
            match classify_texture(path) {
                Some(TextureRole::Albedo) => entry.albedo = Some(path.to_string()),
                Some(TextureRole::Metalness) => entry.metalness = Some(path.to_string()),
                Some(TextureRole::Normal) => entry.normal = Some(path.to_string()),
                Some(TextureRole::Roughness) => entry.roughness = Some(path.to_string()),
                Some(TextureRole::Occlusion) => entry.occlusion = Some(path.to_string()),
                Some(TextureRole::Emissive) => entry.emissive = Some(path.to_string()),
                None => {
                    log::debug!(
                        "material '{}': texture '{path}' matches no role pattern, dropped",
                        slot.name
                    );
                }
            }
        }
    }

    Ok((slot.name.clone(), entry))
}
