use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::DraggerId;

/// One axis marker.
///
/// `pixel_position` is the marker's left edge: the axis x of `time` minus
/// the dragger width. It stays consistent with the current grid window even
/// while the marker is hidden.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dragger {
    pub time: DateTime<Utc>,
    pub pixel_position: f64,
    pub visible: bool,
    pub selected: bool,
}

impl Dragger {
    #[must_use]
    pub fn new(time: DateTime<Utc>, selected: bool) -> Self {
        Self {
            time,
            pixel_position: 0.0,
            visible: false,
            selected,
        }
    }
}

/// Both markers, always present for the lifetime of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DraggerPair {
    pub primary: Dragger,
    pub secondary: Dragger,
}

impl DraggerPair {
    #[must_use]
    pub fn get(&self, id: DraggerId) -> &Dragger {
        match id {
            DraggerId::Primary => &self.primary,
            DraggerId::Secondary => &self.secondary,
        }
    }

    pub fn get_mut(&mut self, id: DraggerId) -> &mut Dragger {
        match id {
            DraggerId::Primary => &mut self.primary,
            DraggerId::Secondary => &mut self.secondary,
        }
    }

    pub fn set(&mut self, id: DraggerId, dragger: Dragger) {
        *self.get_mut(id) = dragger;
    }
}
