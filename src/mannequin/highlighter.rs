use crate::mannequin::muscle_map::segments_for_muscle;
use crate::mannequin::rig::MannequinRig;
use crate::mannequin::MuscleId;
use crate::resources::material::color_from_hex;
use crate::scene::Scene;

/// Resting segment tone.
pub const DEFAULT_COLOR: u32 = 0x00D0_D0D0;
/// Primary muscle tint.
pub const PRIMARY_COLOR: u32 = 0x006D_8FFF;
/// Secondary muscle tint, dimmer than primary.
pub const SECONDARY_COLOR: u32 = 0x004A_5A80;

/// Recolors the rig's segments for an exercise's muscle involvement.
///
/// Every segment is first reset to [`DEFAULT_COLOR`], so the call is
/// idempotent and carries no state over from the previous exercise.
/// Secondary tints are applied before primary, so a segment claimed by
/// both ends up with the primary color.
pub fn apply_muscle_highlights(
    scene: &mut Scene,
    rig: &MannequinRig,
    primary: &[MuscleId],
    secondary: &[MuscleId],
) {
    for &key in rig.segments.values() {
        if let Some(mesh) = scene.meshes.get_mut(key) {
            mesh.material.set_color(color_from_hex(DEFAULT_COLOR));
        }
    }

    for &muscle in secondary {
        for &segment in segments_for_muscle(muscle) {
            if let Some(&key) = rig.segments.get(&segment)
                && let Some(mesh) = scene.meshes.get_mut(key)
            {
                mesh.material.set_color(color_from_hex(SECONDARY_COLOR));
            }
        }
    }

    for &muscle in primary {
        for &segment in segments_for_muscle(muscle) {
            if let Some(&key) = rig.segments.get(&segment)
                && let Some(mesh) = scene.meshes.get_mut(key)
            {
                mesh.material.set_color(color_from_hex(PRIMARY_COLOR));
            }
        }
    }
}
