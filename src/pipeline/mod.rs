//! The content-generation pipeline: URL -> video id -> category ->
//! best-effort metadata -> template bundle -> typed asset list.

pub mod assembler;
pub mod classifier;
pub mod generator;
pub mod identifier;
pub mod resolver;

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::config::Config;
use crate::models::Asset;
use crate::pipeline::resolver::{MetadataResolver, VideoAnalysis};

/// Descriptive fields and assets produced for one project.
#[derive(Debug)]
pub struct PipelineOutput {
    pub title: String,
    pub description: String,
    pub duration_secs: u32,
    pub thumbnail_url: String,
    pub assets: Vec<Asset>,
    pub analysis: VideoAnalysis,
}

pub struct Pipeline {
    resolver: MetadataResolver,
    template_seed: u64,
}

impl Pipeline {
    pub fn new(config: &Config) -> Self {
        Self {
            resolver: MetadataResolver::new(config),
            template_seed: config.template_seed,
        }
    }

    /// Run the full pipeline for one project. Malformed URLs proceed with
    /// the sentinel id; metadata failures degrade to synthesized data, so
    /// this only errs on conditions downstream of generation.
    pub async fn run(&self, project_id: &str, video_url: &str) -> PipelineOutput {
        let video_id = identifier::video_id_or_unknown(video_url);
        let analysis = self.resolver.resolve(&video_id, video_url).await;
        debug!(
            project_id,
            video_id,
            category = analysis.category.as_str(),
            source = analysis.source.as_str(),
            "Resolved video analysis"
        );

        let mut rng = StdRng::seed_from_u64(self.project_seed(project_id));
        let bundle = generator::generate(&analysis, &mut rng);
        let assets = assembler::assemble(project_id, &analysis, &bundle, Utc::now());

        PipelineOutput {
            title: analysis.title.clone(),
            description: analysis.description.clone(),
            duration_secs: analysis.duration_secs,
            thumbnail_url: analysis.thumbnail_url.clone(),
            assets,
            analysis,
        }
    }

    /// Base seed mixed with the project id: distinct projects vary, reruns
    /// of the same project reproduce.
    fn project_seed(&self, project_id: &str) -> u64 {
        let mut hasher = DefaultHasher::new();
        project_id.hash(&mut hasher);
        self.template_seed ^ hasher.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn offline_config() -> Config {
        Config {
            oembed_endpoint: "http://127.0.0.1:9/oembed".to_string(),
            lookup_timeout: Duration::from_millis(300),
            ..Config::default()
        }
    }

    #[tokio::test]
    async fn pipeline_produces_full_output_for_valid_url() {
        let pipeline = Pipeline::new(&offline_config());
        let output = pipeline
            .run("project_1", "https://www.youtube.com/watch?v=dQw4w9WgXcQ")
            .await;

        assert!(!output.title.is_empty());
        assert!(output.assets.len() >= 4);
        assert!(output
            .assets
            .iter()
            .all(|a| a.project_id == "project_1"));
        assert_eq!(output.analysis.video_id, "dQw4w9WgXcQ");
    }

    #[tokio::test]
    async fn pipeline_proceeds_on_garbage_input() {
        let pipeline = Pipeline::new(&offline_config());
        let output = pipeline.run("project_2", "not a url at all").await;
        assert_eq!(output.analysis.video_id, identifier::UNKNOWN_VIDEO_ID);
        assert!(!output.assets.is_empty());
    }

    #[tokio::test]
    async fn rerun_of_same_project_is_reproducible() {
        let pipeline = Pipeline::new(&offline_config());
        let a = pipeline.run("project_3", "https://youtu.be/abc").await;
        let b = pipeline.run("project_3", "https://youtu.be/abc").await;
        assert_eq!(a.assets[0].content, b.assets[0].content);
    }
}
