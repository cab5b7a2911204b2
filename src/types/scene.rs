//! Preset lighting scenes.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

/// The preset scenes this adapter knows how to select.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, EnumIter, Display, PartialEq, Eq)]
pub enum Scene {
    #[strum(to_string = "Warm White")]
    WarmWhite = 11,
    #[strum(to_string = "Daylight")]
    Daylight = 12,
}

impl Scene {
    /// Returns None for scene ids this adapter does not model.
    ///
    /// # Examples
    ///
    /// ```
    /// use wiz_bulb_tools::Scene;
    ///
    /// assert_eq!(Scene::create(12), Some(Scene::Daylight));
    /// assert_eq!(Scene::create(4), None);
    /// ```
    pub fn create(value: i64) -> Option<Self> {
        Scene::iter().find(|scene| scene.id() == value)
    }

    pub fn id(&self) -> i64 {
        *self as i64
    }

    /// Human name for a raw scene id, "Unknown" when unmodelled.
    pub fn name_of(id: i64) -> String {
        Scene::create(id).map_or_else(|| "Unknown".to_string(), |scene| scene.to_string())
    }
}
