//! Record-status badge vocabulary.
//!
//! Dashboards classify record statuses into a fixed set of badge styles.
//! The mapping is a total lookup: an unrecognized status string falls back
//! to the muted style instead of erroring.

use serde::{Deserialize, Serialize};

/// Statuses the dashboards know how to display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordStatus {
    Active,
    Inactive,
    InProgress,
    Review,
    Open,
    Closed,
}

impl RecordStatus {
    /// Display label, also the wire form on list DTOs
    pub fn label(&self) -> &'static str {
        match self {
            RecordStatus::Active => "Active",
            RecordStatus::Inactive => "Inactive",
            RecordStatus::InProgress => "In Progress",
            RecordStatus::Review => "Review",
            RecordStatus::Open => "Open",
            RecordStatus::Closed => "Closed",
        }
    }

    pub fn all() -> Vec<RecordStatus> {
        vec![
            RecordStatus::Active,
            RecordStatus::Inactive,
            RecordStatus::InProgress,
            RecordStatus::Review,
            RecordStatus::Open,
            RecordStatus::Closed,
        ]
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Active" => Some(RecordStatus::Active),
            "Inactive" => Some(RecordStatus::Inactive),
            "In Progress" => Some(RecordStatus::InProgress),
            "Review" => Some(RecordStatus::Review),
            "Open" => Some(RecordStatus::Open),
            "Closed" => Some(RecordStatus::Closed),
            _ => None,
        }
    }

    pub fn badge_style(&self) -> BadgeStyle {
        match self {
            RecordStatus::Active | RecordStatus::Closed => BadgeStyle::Success,
            RecordStatus::Inactive => BadgeStyle::Muted,
            RecordStatus::InProgress => BadgeStyle::Info,
            RecordStatus::Review => BadgeStyle::Warning,
            RecordStatus::Open => BadgeStyle::Secondary,
        }
    }
}

/// Badge styles the UI kit renders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeStyle {
    Success,
    #[default]
    Muted,
    Info,
    Warning,
    Secondary,
}

impl BadgeStyle {
    /// CSS modifier class of the badge
    pub fn css_class(&self) -> &'static str {
        match self {
            BadgeStyle::Success => "badge--success",
            BadgeStyle::Muted => "badge--muted",
            BadgeStyle::Info => "badge--info",
            BadgeStyle::Warning => "badge--warning",
            BadgeStyle::Secondary => "badge--secondary",
        }
    }
}

/// Style for a raw status string; unknown statuses get the default style
pub fn badge_style_for(label: &str) -> BadgeStyle {
    RecordStatus::from_label(label)
        .map(|s| s.badge_style())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_mapping() {
        assert_eq!(badge_style_for("Active"), BadgeStyle::Success);
        assert_eq!(badge_style_for("Inactive"), BadgeStyle::Muted);
        assert_eq!(badge_style_for("In Progress"), BadgeStyle::Info);
        assert_eq!(badge_style_for("Review"), BadgeStyle::Warning);
        assert_eq!(badge_style_for("Open"), BadgeStyle::Secondary);
        assert_eq!(badge_style_for("Closed"), BadgeStyle::Success);
    }

    #[test]
    fn test_unrecognized_status_falls_back_to_muted() {
        assert_eq!(badge_style_for("Escalated"), BadgeStyle::Muted);
        assert_eq!(badge_style_for(""), BadgeStyle::Muted);
    }

    #[test]
    fn test_labels_round_trip() {
        for status in RecordStatus::all() {
            assert_eq!(RecordStatus::from_label(status.label()), Some(status));
        }
    }
}
