//! Alfred Script Filter feedback document
//!
//! Serializes to the JSON Alfred reads from a Script Filter's stdout:
//! `{"items": [{"title": .., "subtitle": .., "arg": .., "valid": ..}]}`.

use serde::Serialize;

use crate::DisplayItem;

/// macOS caution icon, used for the empty-state placeholder
pub const ICON_WARNING: &str =
    "/System/Library/CoreServices/CoreTypes.bundle/Contents/Resources/AlertCautionIcon.icns";

/// macOS stop icon, used for fatal errors
pub const ICON_ERROR: &str =
    "/System/Library/CoreServices/CoreTypes.bundle/Contents/Resources/AlertStopIcon.icns";

/// Complete response sent to Alfred
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Feedback {
    pub items: Vec<Item>,
}

/// One result row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub title: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub subtitle: String,

    /// Passed to the next workflow action when the item is actioned
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arg: Option<String>,

    pub valid: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Icon {
    pub path: String,
}

impl Item {
    /// Non-actionable item carrying a message
    pub fn message(title: impl Into<String>, subtitle: impl Into<String>, icon: &str) -> Self {
        Item {
            title: title.into(),
            subtitle: subtitle.into(),
            arg: None,
            valid: false,
            icon: Some(Icon {
                path: icon.to_string(),
            }),
        }
    }
}

impl From<DisplayItem> for Item {
    fn from(item: DisplayItem) -> Self {
        Item {
            title: item.label,
            subtitle: item.detail,
            arg: Some(item.action_payload),
            valid: item.selectable,
            icon: None,
        }
    }
}

impl Feedback {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Render as Script Filter JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
