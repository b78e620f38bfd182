use crate::mannequin::{MuscleId, SegmentName};

/// Segments a muscle group lights up.
///
/// The mannequin's segment resolution is coarser than real anatomy, so
/// several muscles share segments (quads and hamstrings both claim the
/// thighs, triceps and biceps both claim the forearms).
#[must_use]
pub fn segments_for_muscle(muscle: MuscleId) -> &'static [SegmentName] {
    match muscle {
        MuscleId::Quads | MuscleId::Hamstrings | MuscleId::HipFlexors => {
            &[SegmentName::ThighL, SegmentName::ThighR]
        }
        MuscleId::Glutes => &[SegmentName::Glutes],
        MuscleId::Calves => &[SegmentName::ShinL, SegmentName::ShinR],
        MuscleId::Chest => &[SegmentName::Chest],
        MuscleId::FrontDelts | MuscleId::RearDelts => {
            &[SegmentName::UpperArmL, SegmentName::UpperArmR]
        }
        MuscleId::Triceps | MuscleId::Biceps => &[SegmentName::ForearmL, SegmentName::ForearmR],
        MuscleId::Lats => &[SegmentName::Torso],
        MuscleId::Traps => &[SegmentName::Neck],
        MuscleId::Core => &[SegmentName::CoreFront, SegmentName::Torso],
        MuscleId::LowerBack => &[SegmentName::LowerBack],
    }
}
