//! Procedural mannequin: joint hierarchy, segment meshes and muscle
//! highlighting.

pub mod highlighter;
pub mod muscle_map;
pub mod rig;
pub mod segments;

pub use highlighter::apply_muscle_highlights;
pub use rig::{build_mannequin, MannequinRig};

/// The 17 joint pivots of the mannequin — a FROZEN animation contract.
///
/// [`JointName::as_str`] values are used both as node names and as
/// animation track target prefixes. A mismatch causes silent animation
/// failure (the track binds to nothing), so these strings must never be
/// renamed once clips have been authored against them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JointName {
    Pelvis,
    Spine,
    Chest,
    Neck,
    Head,
    LShoulder,
    LElbow,
    LWrist,
    RShoulder,
    RElbow,
    RWrist,
    LHip,
    LKnee,
    LAnkle,
    RHip,
    RKnee,
    RAnkle,
}

impl JointName {
    pub const ALL: [JointName; 17] = [
        JointName::Pelvis,
        JointName::Spine,
        JointName::Chest,
        JointName::Neck,
        JointName::Head,
        JointName::LShoulder,
        JointName::LElbow,
        JointName::LWrist,
        JointName::RShoulder,
        JointName::RElbow,
        JointName::RWrist,
        JointName::LHip,
        JointName::LKnee,
        JointName::LAnkle,
        JointName::RHip,
        JointName::RKnee,
        JointName::RAnkle,
    ];

    /// The frozen contract string (node name / track target).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            JointName::Pelvis => "pelvis",
            JointName::Spine => "spine",
            JointName::Chest => "chest",
            JointName::Neck => "neck",
            JointName::Head => "head",
            JointName::LShoulder => "l_shoulder",
            JointName::LElbow => "l_elbow",
            JointName::LWrist => "l_wrist",
            JointName::RShoulder => "r_shoulder",
            JointName::RElbow => "r_elbow",
            JointName::RWrist => "r_wrist",
            JointName::LHip => "l_hip",
            JointName::LKnee => "l_knee",
            JointName::LAnkle => "l_ankle",
            JointName::RHip => "r_hip",
            JointName::RKnee => "r_knee",
            JointName::RAnkle => "r_ankle",
        }
    }
}

/// The 15 highlightable mesh regions.
///
/// Distinct from [`JointName`]: a joint is a pivot with no geometry of its
/// own; a segment is a renderable mesh with its own material instance,
/// parented under some joint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentName {
    Torso,
    Chest,
    UpperArmL,
    UpperArmR,
    ForearmL,
    ForearmR,
    ThighL,
    ThighR,
    ShinL,
    ShinR,
    Head,
    Neck,
    Glutes,
    LowerBack,
    CoreFront,
}

impl SegmentName {
    pub const ALL: [SegmentName; 15] = [
        SegmentName::Torso,
        SegmentName::Chest,
        SegmentName::UpperArmL,
        SegmentName::UpperArmR,
        SegmentName::ForearmL,
        SegmentName::ForearmR,
        SegmentName::ThighL,
        SegmentName::ThighR,
        SegmentName::ShinL,
        SegmentName::ShinR,
        SegmentName::Head,
        SegmentName::Neck,
        SegmentName::Glutes,
        SegmentName::LowerBack,
        SegmentName::CoreFront,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            SegmentName::Torso => "torso",
            SegmentName::Chest => "chest",
            SegmentName::UpperArmL => "upper_arm_l",
            SegmentName::UpperArmR => "upper_arm_r",
            SegmentName::ForearmL => "forearm_l",
            SegmentName::ForearmR => "forearm_r",
            SegmentName::ThighL => "thigh_l",
            SegmentName::ThighR => "thigh_r",
            SegmentName::ShinL => "shin_l",
            SegmentName::ShinR => "shin_r",
            SegmentName::Head => "head",
            SegmentName::Neck => "neck",
            SegmentName::Glutes => "glutes",
            SegmentName::LowerBack => "lower_back",
            SegmentName::CoreFront => "core_front",
        }
    }
}

/// Muscle groups an exercise can declare as primary or secondary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MuscleId {
    Quads,
    Hamstrings,
    Glutes,
    Calves,
    Chest,
    FrontDelts,
    Triceps,
    Lats,
    Traps,
    RearDelts,
    Biceps,
    Core,
    LowerBack,
    HipFlexors,
}

impl MuscleId {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            MuscleId::Quads => "quads",
            MuscleId::Hamstrings => "hamstrings",
            MuscleId::Glutes => "glutes",
            MuscleId::Calves => "calves",
            MuscleId::Chest => "chest",
            MuscleId::FrontDelts => "front-delts",
            MuscleId::Triceps => "triceps",
            MuscleId::Lats => "lats",
            MuscleId::Traps => "traps",
            MuscleId::RearDelts => "rear-delts",
            MuscleId::Biceps => "biceps",
            MuscleId::Core => "core",
            MuscleId::LowerBack => "lower-back",
            MuscleId::HipFlexors => "hip-flexors",
        }
    }
}

/// Mannequin side, for bilateral segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

