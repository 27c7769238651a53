use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::asset::Asset;

/// Lifecycle of a project. Progression is monotonic: `pending`/`processing`
/// advance to `completed` or `failed` and never move back. `pending` exists
/// for parity with the persisted layout but the simulated path creates
/// projects directly in `processing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Pending,
    Processing,
    Completed,
    Failed,
}

impl ProjectStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, ProjectStatus::Completed | ProjectStatus::Failed)
    }
}

/// A user's video-to-content conversion request and its resulting assets.
///
/// Invariant: `assets` is non-empty if and only if `status` is `completed`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub user_id: String,
    pub original_video_url: String,
    pub status: ProjectStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Duration in seconds, populated on completion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub assets: Vec<Asset>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// New project in `processing` state with an empty asset list.
    ///
    /// Ids are timestamp-derived with a random uniquifier so two projects
    /// created in the same millisecond still get distinct ids.
    pub fn new(user_id: &str, original_video_url: &str) -> Self {
        let now = Utc::now();
        let uniquifier = Uuid::new_v4().simple().to_string();
        let id = format!("project_{}_{}", now.timestamp_millis(), &uniquifier[..8]);

        Self {
            id,
            user_id: user_id.to_string(),
            original_video_url: original_video_url.to_string(),
            status: ProjectStatus::Processing,
            title: None,
            description: None,
            duration: None,
            thumbnail_url: None,
            assets: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_project_is_processing_with_empty_assets() {
        let project = Project::new("user_1", "https://youtu.be/abc123");
        assert_eq!(project.status, ProjectStatus::Processing);
        assert!(project.assets.is_empty());
        assert!(project.title.is_none());
        assert_eq!(project.created_at, project.updated_at);
    }

    #[test]
    fn project_ids_are_unique() {
        let a = Project::new("user_1", "https://youtu.be/abc123");
        let b = Project::new("user_1", "https://youtu.be/abc123");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn status_serializes_snake_case() {
        let json = serde_json::to_string(&ProjectStatus::Processing).unwrap();
        assert_eq!(json, "\"processing\"");
        let back: ProjectStatus = serde_json::from_str("\"failed\"").unwrap();
        assert_eq!(back, ProjectStatus::Failed);
    }

    #[test]
    fn terminal_states() {
        assert!(ProjectStatus::Completed.is_terminal());
        assert!(ProjectStatus::Failed.is_terminal());
        assert!(!ProjectStatus::Processing.is_terminal());
        assert!(!ProjectStatus::Pending.is_terminal());
    }
}
