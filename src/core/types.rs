//! Core data types for the FinLab MCP service.
//!
//! Feedback records as persisted, plus the request and response
//! bodies of the HTTP surface.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Closed set of feedback categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackCategory {
    Bug,
    Feature,
    Improvement,
    #[default]
    Other,
}

impl FeedbackCategory {
    /// Map caller input onto the closed set; anything unrecognized is `Other`
    pub fn coerce(input: Option<&str>) -> Self {
        match input {
            Some("bug") => FeedbackCategory::Bug,
            Some("feature") => FeedbackCategory::Feature,
            Some("improvement") => FeedbackCategory::Improvement,
            _ => FeedbackCategory::Other,
        }
    }
}

/// A persisted feedback note
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    pub id: String,

    #[serde(rename = "type")]
    pub category: FeedbackCategory,

    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,

    pub timestamp: DateTime<Utc>,
}

/// Body of `POST /feedback`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedbackRequest {
    /// Any JSON value; non-string or unknown values become `other`
    #[serde(rename = "type", default)]
    pub category: Option<serde_json::Value>,

    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub context: Option<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub server: String,
}

/// Feedback submission acknowledgement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackCreated {
    pub success: bool,
    pub id: String,
}

/// Generic success acknowledgement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}
