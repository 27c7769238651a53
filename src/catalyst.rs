use std::sync::Arc;

use chrono::{TimeZone, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::broadcast;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::models::{Project, ProjectStatus};
use crate::pipeline::{assembler, generator, identifier, resolver, Pipeline};
use crate::services::{DelayedExecutor, JobExecutor};
use crate::store::{JsonFileStore, MemoryStore, ProjectStore};

/// Well-known id of the permanently available demo project.
pub const SEED_PROJECT_ID: &str = "demo_project_123";
const SEED_USER_ID: &str = "demo_user_123";
const SEED_VIDEO_URL: &str = "https://www.youtube.com/watch?v=demo_tutorial_2024";
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Notification emitted when a project's deferred job reaches a terminal
/// state. Consumed by UI layers via [`Catalyst::subscribe`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectEvent {
    Completed { project_id: String },
    Failed { project_id: String },
}

/// Public entry point: create, fetch, list, and delete projects, with the
/// generation pipeline running behind a pluggable job executor.
pub struct Catalyst {
    store: Arc<dyn ProjectStore>,
    executor: Arc<dyn JobExecutor>,
    pipeline: Arc<Pipeline>,
    events: broadcast::Sender<ProjectEvent>,
    seed: Project,
    user_id: String,
}

impl Catalyst {
    /// Wire up from configuration: JSON file store when a path is set,
    /// in-memory otherwise, with the delayed executor simulating backend
    /// processing. Must be called within a tokio runtime.
    pub fn new(config: Config) -> Self {
        let store: Arc<dyn ProjectStore> = match &config.store_path {
            Some(path) => Arc::new(JsonFileStore::open(path)),
            None => Arc::new(MemoryStore::new()),
        };
        let executor = Arc::new(DelayedExecutor::new(config.processing_delay));
        Self::with_parts(store, executor, &config)
    }

    /// Explicit injection of store and executor, for tests and for callers
    /// swapping in a real backend.
    pub fn with_parts(
        store: Arc<dyn ProjectStore>,
        executor: Arc<dyn JobExecutor>,
        config: &Config,
    ) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            store,
            executor,
            pipeline: Arc::new(Pipeline::new(config)),
            events,
            seed: seed_project(),
            user_id: config.user_id.clone(),
        }
    }

    /// Receiver for terminal-state notifications. Subscribe before creating
    /// a project to observe its completion.
    pub fn subscribe(&self) -> broadcast::Receiver<ProjectEvent> {
        self.events.subscribe()
    }

    /// Synchronously persists and returns a `processing` project with an
    /// empty asset list, then submits the deferred generation job. No
    /// validation beyond id extraction happens here: invalid URLs still
    /// produce a project, which completes with synthesized metadata.
    pub fn create_project(&self, video_url: &str) -> Result<Project> {
        let project = Project::new(&self.user_id, video_url);
        self.store.save(&project)?;
        info!(project_id = %project.id, url = video_url, "Project created, processing scheduled");

        self.submit_job(project.clone());
        Ok(project)
    }

    /// The persisted project, or the seed project for its well-known id.
    /// Unknown ids are the one error callers must handle.
    pub fn get_project(&self, id: &str) -> Result<Project> {
        if let Some(project) = self.store.get(id)? {
            return Ok(project);
        }
        if id == SEED_PROJECT_ID {
            return Ok(self.seed.clone());
        }
        Err(Error::NotFound(id.to_string()))
    }

    /// All persisted projects plus the seed project, newest first.
    pub fn list_projects(&self) -> Result<Vec<Project>> {
        let mut projects = self.store.list()?;
        if !projects.iter().any(|p| p.id == SEED_PROJECT_ID) {
            projects.push(self.seed.clone());
        }
        projects.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(projects)
    }

    /// Removes the project and its embedded assets. The seed project is not
    /// persisted and therefore not deletable; it reports NotFound like any
    /// other id the store does not hold.
    pub fn delete_project(&self, id: &str) -> Result<()> {
        if self.store.delete(id)? {
            info!(project_id = id, "Project deleted");
            Ok(())
        } else {
            Err(Error::NotFound(id.to_string()))
        }
    }

    fn submit_job(&self, project: Project) {
        let store = self.store.clone();
        let pipeline = self.pipeline.clone();
        let events = self.events.clone();

        self.executor.submit(Box::pin(async move {
            let output = pipeline
                .run(&project.id, &project.original_video_url)
                .await;

            let mut completed = project.clone();
            completed.status = ProjectStatus::Completed;
            completed.title = Some(output.title);
            completed.description = Some(output.description);
            completed.duration = Some(output.duration_secs);
            completed.thumbnail_url = Some(output.thumbnail_url);
            completed.assets = output.assets;
            completed.updated_at = Utc::now();

            match store.save(&completed) {
                Ok(()) => {
                    info!(
                        project_id = %completed.id,
                        assets = completed.assets.len(),
                        category = output.analysis.category.as_str(),
                        "Project completed"
                    );
                    let _ = events.send(ProjectEvent::Completed {
                        project_id: completed.id,
                    });
                }
                Err(e) => {
                    warn!(project_id = %project.id, error = %e, "Completion write failed, marking project failed");
                    let mut failed = project;
                    failed.status = ProjectStatus::Failed;
                    failed.assets = Vec::new();
                    failed.updated_at = Utc::now();
                    if let Err(e) = store.save(&failed) {
                        warn!(project_id = %failed.id, error = %e, "Failed-state write also failed");
                    }
                    let _ = events.send(ProjectEvent::Failed {
                        project_id: failed.id,
                    });
                }
            }
        }));
    }
}

/// The seed project is built deterministically by the same generator and
/// assembler as real projects, so the assets-iff-completed invariant holds
/// by construction rather than by a hand-maintained fixture.
fn seed_project() -> Project {
    let fixed_time = Utc
        .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_else(Utc::now);

    let video_id = identifier::video_id_or_unknown(SEED_VIDEO_URL);
    let analysis = resolver::synthesized_analysis(&video_id, SEED_VIDEO_URL);
    let mut rng = StdRng::seed_from_u64(0);
    let bundle = generator::generate(&analysis, &mut rng);
    let assets = assembler::assemble(SEED_PROJECT_ID, &analysis, &bundle, fixed_time);

    Project {
        id: SEED_PROJECT_ID.to_string(),
        user_id: SEED_USER_ID.to_string(),
        original_video_url: SEED_VIDEO_URL.to_string(),
        status: ProjectStatus::Completed,
        title: Some(analysis.title.clone()),
        description: Some(analysis.description.clone()),
        duration: Some(analysis.duration_secs),
        thumbnail_url: Some(analysis.thumbnail_url.clone()),
        assets,
        created_at: fixed_time,
        updated_at: fixed_time,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AssetType;

    #[test]
    fn seed_project_is_completed_with_assets() {
        let seed = seed_project();
        assert_eq!(seed.id, SEED_PROJECT_ID);
        assert_eq!(seed.status, ProjectStatus::Completed);
        assert!(!seed.assets.is_empty());
        assert!(seed.assets.iter().all(|a| a.project_id == SEED_PROJECT_ID));
        assert_eq!(
            seed.assets
                .iter()
                .filter(|a| a.asset_type == AssetType::Blog)
                .count(),
            1
        );
    }

    #[test]
    fn seed_project_is_deterministic() {
        let a = seed_project();
        let b = seed_project();
        assert_eq!(a.created_at, b.created_at);
        assert_eq!(a.assets.len(), b.assets.len());
        assert_eq!(a.assets[0].content, b.assets[0].content);
    }
}
