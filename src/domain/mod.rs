//! Domain - body categories and the settings that tune every system

pub mod category;
pub mod settings;

pub use category::BodyCategory;
pub use settings::{
    CategorySettings, CategoryTable, DomSettings, DragSettings, FieldSettings, IntroSettings,
    PhysicsSettings, TimelineSettings,
};
