//! Display classifications for the status and priority semantic columns.
//!
//! These are rendering hints only: the grid behaves identically whatever
//! the cell contains. Values outside the known sets fall back to a gray
//! style, matching unrecognized input.

use serde::{Deserialize, Serialize};

/// Recognized values of the "Status" column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StatusKind {
    InProcess,
    NeedToStart,
    Complete,
    Blocked,
    Other,
}

impl StatusKind {
    /// Classify a cell value (case-insensitive).
    pub fn classify(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "in-process" => Self::InProcess,
            "need to start" => Self::NeedToStart,
            "complete" => Self::Complete,
            "blocked" => Self::Blocked,
            _ => Self::Other,
        }
    }

    /// CSS class hint for the cell background.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::InProcess => "bg-yellow-100",
            Self::NeedToStart => "bg-blue-100",
            Self::Complete => "bg-green-100",
            Self::Blocked => "bg-red-100",
            Self::Other => "bg-gray-100",
        }
    }
}

/// Recognized values of the "Priority" column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PriorityKind {
    High,
    Medium,
    Low,
    Other,
}

impl PriorityKind {
    /// Classify a cell value (case-insensitive).
    pub fn classify(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "high" => Self::High,
            "medium" => Self::Medium,
            "low" => Self::Low,
            _ => Self::Other,
        }
    }

    /// CSS class hint for the cell text color.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::High => "text-red-500",
            Self::Medium => "text-orange-400",
            Self::Low => "text-blue-500",
            Self::Other => "bg-gray-100",
        }
    }
}
