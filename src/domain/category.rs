use serde::{Deserialize, Serialize};

/// Kind of floating element; decides mass and initial jitter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BodyCategory {
    /// Logo letters - heavy, medium jitter
    Letter,
    /// Decorative icons - light, most jitter
    Icon,
    /// Trust badges - medium, least jitter
    Badge,
}

impl BodyCategory {
    pub const ALL: [BodyCategory; 3] = [BodyCategory::Letter, BodyCategory::Icon, BodyCategory::Badge];

    /// Numeric id used across the wasm boundary
    pub fn id(self) -> u8 {
        match self {
            BodyCategory::Letter => 0,
            BodyCategory::Icon => 1,
            BodyCategory::Badge => 2,
        }
    }

    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            0 => Some(BodyCategory::Letter),
            1 => Some(BodyCategory::Icon),
            2 => Some(BodyCategory::Badge),
            _ => None,
        }
    }
}
