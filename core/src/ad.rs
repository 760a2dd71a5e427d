//! Advertising placeholder regions.
//!
//! The page carries two ad slots, above the editor and below the keyboard.
//! They have no link to the buffer. A blocked or failing ad script only leaves
//! an empty placeholder behind; the failure is logged and never shown.

use crate::error::ActionError;

pub const DEFAULT_AD_CLIENT: &str = "ca-pub-YOUR_PUBLISHER_ID";
pub const DEFAULT_TOP_SLOT: &str = "1234567890";
pub const DEFAULT_BOTTOM_SLOT: &str = "0987654321";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdPosition {
    Top,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdFormat {
    #[default]
    Auto,
    Fluid,
    Rectangle,
    Horizontal,
    Vertical,
}

impl AdFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdFormat::Auto => "auto",
            AdFormat::Fluid => "fluid",
            AdFormat::Rectangle => "rectangle",
            AdFormat::Horizontal => "horizontal",
            AdFormat::Vertical => "vertical",
        }
    }
}

/// Ad network request for one slot.
pub trait AdLoader {
    /// Request content for `slot`. Returns the rendered markup.
    fn request(&self, slot: &AdSlot) -> Result<String, ActionError>;
}

/// Loader used when no ad network is wired in.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAds;

impl AdLoader for NoAds {
    fn request(&self, _slot: &AdSlot) -> Result<String, ActionError> {
        Err(ActionError::AdLoadFailure("no ad network configured".into()))
    }
}

/// What ended up in a slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdStatus {
    Filled(String),
    /// Empty region of the same size; layout is unaffected.
    Placeholder,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdSlot {
    pub slot_id: String,
    pub client: String,
    pub format: AdFormat,
    pub responsive: bool,
    pub position: AdPosition,
}

impl AdSlot {
    pub fn new(slot_id: impl Into<String>, client: impl Into<String>, position: AdPosition) -> Self {
        Self {
            slot_id: slot_id.into(),
            client: client.into(),
            format: AdFormat::Auto,
            responsive: true,
            position,
        }
    }

    pub fn top() -> Self {
        Self::new(DEFAULT_TOP_SLOT, DEFAULT_AD_CLIENT, AdPosition::Top)
    }

    pub fn bottom() -> Self {
        Self::new(DEFAULT_BOTTOM_SLOT, DEFAULT_AD_CLIENT, AdPosition::Bottom)
    }

    /// Fill the slot. Never fails: errors degrade to a placeholder.
    pub fn render<L: AdLoader + ?Sized>(&self, loader: &L) -> AdStatus {
        match loader.request(self) {
            Ok(markup) => AdStatus::Filled(markup),
            Err(e) => {
                tracing::warn!(slot = %self.slot_id, error = %e, "ad slot left empty");
                AdStatus::Placeholder
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticAd;

    impl AdLoader for StaticAd {
        fn request(&self, slot: &AdSlot) -> Result<String, ActionError> {
            Ok(format!("<ad {}>", slot.slot_id))
        }
    }

    #[test]
    fn test_default_slots() {
        assert_eq!(AdSlot::top().slot_id, "1234567890");
        assert_eq!(AdSlot::bottom().slot_id, "0987654321");
        assert_eq!(AdSlot::top().format.as_str(), "auto");
        assert!(AdSlot::bottom().responsive);
    }

    #[test]
    fn test_failure_degrades_to_placeholder() {
        assert_eq!(AdSlot::top().render(&NoAds), AdStatus::Placeholder);
    }

    #[test]
    fn test_filled() {
        assert_eq!(
            AdSlot::bottom().render(&StaticAd),
            AdStatus::Filled("<ad 0987654321>".into())
        );
    }
}
