use super::marker::{Rgb, MARKER_NEUTRAL};
use crate::constants::{CARD_OFFSET_ACTIVATED, CARD_OFFSET_IDLE};

/// Transient per-marker pointer state.
///
/// One instance lives for as long as the projects scene is mounted. Nothing
/// here is shared between markers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MarkerInteraction {
    hovered: bool,
    activated: bool,
}

impl MarkerInteraction {
    pub fn hovered(&self) -> bool {
        self.hovered
    }

    pub fn activated(&self) -> bool {
        self.activated
    }

    /// Pointer entered (`true`) or left (`false`) the hit volume.
    /// Returns whether the flag changed.
    pub fn set_hovered(&mut self, hovered: bool) -> bool {
        let changed = self.hovered != hovered;
        self.hovered = hovered;
        changed
    }

    /// Click or tap on the marker. Returns the new value.
    pub fn toggle_activated(&mut self) -> bool {
        self.activated = !self.activated;
        self.activated
    }

    #[inline]
    pub fn panel_visible(&self) -> bool {
        self.hovered || self.activated
    }

    /// Accent while hovered, neutral otherwise.
    #[inline]
    pub fn material_color(&self, accent: Rgb) -> Rgb {
        if self.hovered {
            accent
        } else {
            MARKER_NEUTRAL
        }
    }

    #[inline]
    pub fn panel_offset(&self) -> f32 {
        if self.activated {
            CARD_OFFSET_ACTIVATED
        } else {
            CARD_OFFSET_IDLE
        }
    }
}
