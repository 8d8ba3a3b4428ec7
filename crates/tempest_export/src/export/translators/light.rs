//! Light translator

use super::super::coordinates;
use super::super::document::{LightEntry, LightTypeTag};
use crate::scene::{LightKind, LightObject, SceneObject};

/// Build the light entry.
///
/// `Intensity` copies the light's specular factor, not its radiant
/// power.
#[must_use]
pub fn translate_light(object: &SceneObject, light: &LightObject) -> LightEntry {
    let mapped = coordinates::map_transform(&object.transform);

    let light_type = match light.kind {
        LightKind::Point => Some(LightTypeTag::Point),
        LightKind::Spot => Some(LightTypeTag::Spot),
        LightKind::Area => Some(LightTypeTag::Area),
        LightKind::Sun => {
            log::warn!(
                "light '{}': kind Sun has no engine light type, omitting Type",
                object.name
            );
            None
        }
    };

    LightEntry {
        scale: mapped.scale.into(),
        rotation: coordinates::quaternion_slots(mapped.rotation),
        position: mapped.position.into(),
        light_type,
        colour: light.color,
        fall_off: light.cutoff_distance,
        intensity: light.specular_factor,
    }
}
