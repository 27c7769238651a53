use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetType {
    Blog,
    LinkedinPost,
    Tweet,
    VideoClip,
    Image,
}

/// One piece of generated output belonging to a project.
///
/// Text types (`blog`, `linkedin_post`, `tweet`) carry `content`; media
/// types (`video_clip`, `image`) carry `file_url`. `metadata` is an open
/// attribute bag whose shape varies by asset type and is never validated
/// against a schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    pub id: String,
    pub project_id: String,
    pub asset_type: AssetType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub metadata: Value,
    pub created_at: DateTime<Utc>,
}

impl Asset {
    pub fn text(
        project_id: &str,
        index: usize,
        asset_type: AssetType,
        content: String,
        metadata: Value,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: format!("asset_{}_{}", project_id, index),
            project_id: project_id.to_string(),
            asset_type,
            content: Some(content),
            file_url: None,
            metadata,
            created_at,
        }
    }

    pub fn media(
        project_id: &str,
        index: usize,
        asset_type: AssetType,
        file_url: String,
        metadata: Value,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: format!("asset_{}_{}", project_id, index),
            project_id: project_id.to_string(),
            asset_type,
            content: None,
            file_url: Some(file_url),
            metadata,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn asset_type_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&AssetType::LinkedinPost).unwrap(),
            "\"linkedin_post\""
        );
        assert_eq!(
            serde_json::to_string(&AssetType::VideoClip).unwrap(),
            "\"video_clip\""
        );
    }

    #[test]
    fn ids_embed_project_id_and_index() {
        let asset = Asset::text(
            "project_42",
            3,
            AssetType::Tweet,
            "hello".to_string(),
            json!({"character_count": 5}),
            Utc::now(),
        );
        assert_eq!(asset.id, "asset_project_42_3");
        assert_eq!(asset.project_id, "project_42");
        assert!(asset.file_url.is_none());
    }
}
