use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::pipeline::classifier::{classify, Category};
use crate::pipeline::identifier::UNKNOWN_VIDEO_ID;

/// Duration reported when the real one is unknown (12:34, the canned value
/// used for synthesized metadata).
const SYNTHESIZED_DURATION_SECS: u32 = 754;
const SYNTHESIZED_CHANNEL: &str = "Content Creator";

/// Where the analysis metadata came from. Degradation is tagged rather than
/// swallowed so callers and asset provenance can tell the difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataSource {
    OEmbed,
    Synthesized,
}

impl MetadataSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetadataSource::OEmbed => "oembed",
            MetadataSource::Synthesized => "synthesized",
        }
    }
}

/// Best-effort metadata for a video, always fully populated.
#[derive(Debug, Clone)]
pub struct VideoAnalysis {
    pub video_id: String,
    pub title: String,
    pub description: String,
    pub channel_title: String,
    pub duration_secs: u32,
    pub tags: Vec<String>,
    pub category: Category,
    pub thumbnail_url: String,
    pub key_topics: Vec<String>,
    pub summary: String,
    pub source: MetadataSource,
}

#[derive(Debug, Deserialize)]
struct OEmbedResponse {
    title: Option<String>,
    author_name: Option<String>,
    thumbnail_url: Option<String>,
}

/// Resolves video metadata via the public oEmbed endpoint, falling back to
/// the classifier's synthesized profile. Never fails its caller: downstream
/// generation must not block on metadata absence.
pub struct MetadataResolver {
    client: reqwest::Client,
    endpoint: String,
}

impl MetadataResolver {
    pub fn new(config: &Config) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.lookup_timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            client,
            endpoint: config.oembed_endpoint.clone(),
        }
    }

    /// Single attempt, no retry. A dead network degrades to synthesized
    /// metadata after the configured timeout instead of wedging the job.
    pub async fn resolve(&self, video_id: &str, original_url: &str) -> VideoAnalysis {
        if video_id != UNKNOWN_VIDEO_ID {
            match self.lookup(original_url).await {
                Ok(oembed) => {
                    if let Some(title) = oembed.title.filter(|t| !t.is_empty()) {
                        debug!(video_id, "oEmbed lookup succeeded");
                        return self.from_oembed(video_id, original_url, title, oembed.author_name, oembed.thumbnail_url);
                    }
                    warn!(video_id, "oEmbed response missing title, synthesizing metadata");
                }
                Err(e) => {
                    warn!(video_id, error = %e, "oEmbed lookup failed, synthesizing metadata");
                }
            }
        }
        self.synthesize(video_id, original_url)
    }

    async fn lookup(&self, original_url: &str) -> Result<OEmbedResponse> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("url", original_url), ("format", "json")])
            .send()
            .await
            .map_err(|e| Error::Lookup(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Error::Lookup(format!(
                "oEmbed endpoint returned {}",
                response.status()
            )));
        }

        response
            .json::<OEmbedResponse>()
            .await
            .map_err(|e| Error::Lookup(e.to_string()))
    }

    fn from_oembed(
        &self,
        video_id: &str,
        original_url: &str,
        title: String,
        author_name: Option<String>,
        thumbnail_url: Option<String>,
    ) -> VideoAnalysis {
        let channel = author_name.unwrap_or_else(|| SYNTHESIZED_CHANNEL.to_string());
        // Real title and channel join the scanned haystack, so a URL with no
        // keyword can still classify off its resolved metadata.
        let category = classify(&format!("{} {} {}", original_url, title, channel));
        let profile = category.profile();

        VideoAnalysis {
            video_id: video_id.to_string(),
            title,
            description: profile.description.to_string(),
            channel_title: channel,
            duration_secs: SYNTHESIZED_DURATION_SECS,
            tags: profile.tags.iter().map(|t| t.to_string()).collect(),
            category,
            thumbnail_url: thumbnail_url
                .unwrap_or_else(|| default_thumbnail(video_id)),
            key_topics: profile.key_topics.iter().map(|t| t.to_string()).collect(),
            summary: profile.summary.to_string(),
            source: MetadataSource::OEmbed,
        }
    }

    fn synthesize(&self, video_id: &str, original_url: &str) -> VideoAnalysis {
        let category = classify(original_url);
        let profile = category.profile();

        VideoAnalysis {
            video_id: video_id.to_string(),
            title: profile.title.to_string(),
            description: profile.description.to_string(),
            channel_title: SYNTHESIZED_CHANNEL.to_string(),
            duration_secs: SYNTHESIZED_DURATION_SECS,
            tags: profile.tags.iter().map(|t| t.to_string()).collect(),
            category,
            thumbnail_url: default_thumbnail(video_id),
            key_topics: profile.key_topics.iter().map(|t| t.to_string()).collect(),
            summary: profile.summary.to_string(),
            source: MetadataSource::Synthesized,
        }
    }
}

fn default_thumbnail(video_id: &str) -> String {
    format!("https://img.youtube.com/vi/{}/maxresdefault.jpg", video_id)
}

/// Build the synthesized analysis without touching the network. Used for the
/// deterministic seed project.
pub fn synthesized_analysis(video_id: &str, original_url: &str) -> VideoAnalysis {
    let category = classify(original_url);
    let profile = category.profile();
    VideoAnalysis {
        video_id: video_id.to_string(),
        title: profile.title.to_string(),
        description: profile.description.to_string(),
        channel_title: SYNTHESIZED_CHANNEL.to_string(),
        duration_secs: SYNTHESIZED_DURATION_SECS,
        tags: profile.tags.iter().map(|t| t.to_string()).collect(),
        category,
        thumbnail_url: default_thumbnail(video_id),
        key_topics: profile.key_topics.iter().map(|t| t.to_string()).collect(),
        summary: profile.summary.to_string(),
        source: MetadataSource::Synthesized,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn unreachable_config() -> Config {
        Config {
            // Nothing listens here; the lookup fails fast with a connect error.
            oembed_endpoint: "http://127.0.0.1:9/oembed".to_string(),
            lookup_timeout: Duration::from_millis(300),
            ..Config::default()
        }
    }

    #[tokio::test]
    async fn failed_lookup_degrades_to_synthesized_metadata() {
        let resolver = MetadataResolver::new(&unreachable_config());
        let analysis = resolver
            .resolve("abc123", "https://www.youtube.com/watch?v=abc123")
            .await;

        assert_eq!(analysis.source, MetadataSource::Synthesized);
        assert_eq!(analysis.category, Category::General);
        assert!(!analysis.title.is_empty());
        assert!(!analysis.key_topics.is_empty());
        assert_eq!(
            analysis.thumbnail_url,
            "https://img.youtube.com/vi/abc123/maxresdefault.jpg"
        );
    }

    #[tokio::test]
    async fn unknown_id_skips_lookup_entirely() {
        let resolver = MetadataResolver::new(&unreachable_config());
        let analysis = resolver.resolve(UNKNOWN_VIDEO_ID, "garbage input").await;
        assert_eq!(analysis.source, MetadataSource::Synthesized);
        assert_eq!(analysis.video_id, UNKNOWN_VIDEO_ID);
    }

    #[test]
    fn synthesized_analysis_follows_url_keywords() {
        let analysis = synthesized_analysis(
            "xyz",
            "https://www.youtube.com/watch?v=xyz&list=workout-mix",
        );
        assert_eq!(analysis.category, Category::Fitness);
        assert_eq!(analysis.title, Category::Fitness.profile().title);
    }
}
