use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use tracing::warn;

use crate::error::{Error, Result};
use crate::models::Project;
use crate::store::ProjectStore;

/// Project store persisted as one JSON array of projects (with embedded
/// assets) under a single well-known path. There is no versioning or
/// migration scheme.
///
/// Persistence is best-effort: a missing or corrupt file degrades to an
/// empty collection with a warning, and write failures leave the in-memory
/// copy live rather than failing the operation.
pub struct JsonFileStore {
    path: PathBuf,
    projects: RwLock<HashMap<String, Project>>,
}

impl JsonFileStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let projects = load_collection(&path)
            .into_iter()
            .map(|p| (p.id.clone(), p))
            .collect();
        Self {
            path,
            projects: RwLock::new(projects),
        }
    }

    fn persist(&self, projects: &HashMap<String, Project>) {
        let collection: Vec<&Project> = projects.values().collect();
        let serialized = match serde_json::to_string_pretty(&collection) {
            Ok(s) => s,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to serialize project collection");
                return;
            }
        };
        if let Err(e) = fs::write(&self.path, serialized) {
            warn!(path = %self.path.display(), error = %e, "Failed to write project collection, keeping in-memory copy");
        }
    }
}

fn load_collection(path: &Path) -> Vec<Project> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to read project collection, starting empty");
            return Vec::new();
        }
    };
    match serde_json::from_str(&raw) {
        Ok(projects) => projects,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Corrupt project collection, starting empty");
            Vec::new()
        }
    }
}

impl ProjectStore for JsonFileStore {
    fn save(&self, project: &Project) -> Result<()> {
        let mut projects = self
            .projects
            .write()
            .map_err(|e| Error::Storage(e.to_string()))?;
        projects.insert(project.id.clone(), project.clone());
        self.persist(&projects);
        Ok(())
    }

    fn get(&self, id: &str) -> Result<Option<Project>> {
        let projects = self
            .projects
            .read()
            .map_err(|e| Error::Storage(e.to_string()))?;
        Ok(projects.get(id).cloned())
    }

    fn list(&self) -> Result<Vec<Project>> {
        let projects = self
            .projects
            .read()
            .map_err(|e| Error::Storage(e.to_string()))?;
        Ok(projects.values().cloned().collect())
    }

    fn delete(&self, id: &str) -> Result<bool> {
        let mut projects = self
            .projects
            .write()
            .map_err(|e| Error::Storage(e.to_string()))?;
        let removed = projects.remove(id).is_some();
        if removed {
            self.persist(&projects);
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProjectStatus;
    use tempfile::tempdir;

    #[test]
    fn round_trips_through_the_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("projects.json");

        let project = Project::new("user_1", "https://youtu.be/abc");
        {
            let store = JsonFileStore::open(&path);
            store.save(&project).unwrap();
        }

        // A fresh store over the same path sees the persisted project.
        let reopened = JsonFileStore::open(&path);
        let fetched = reopened.get(&project.id).unwrap().unwrap();
        assert_eq!(fetched.original_video_url, project.original_video_url);
        assert_eq!(fetched.status, ProjectStatus::Processing);
    }

    #[test]
    fn missing_file_starts_empty() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("nope.json"));
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn corrupt_file_degrades_to_empty_collection() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("projects.json");
        fs::write(&path, "{not json").unwrap();

        let store = JsonFileStore::open(&path);
        assert!(store.list().unwrap().is_empty());

        // The store stays usable and overwrites the corrupt file.
        let project = Project::new("user_1", "https://youtu.be/abc");
        store.save(&project).unwrap();
        let reopened = JsonFileStore::open(&path);
        assert_eq!(reopened.list().unwrap().len(), 1);
    }

    #[test]
    fn delete_removes_from_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("projects.json");
        let project = Project::new("user_1", "https://youtu.be/abc");

        let store = JsonFileStore::open(&path);
        store.save(&project).unwrap();
        assert!(store.delete(&project.id).unwrap());

        let reopened = JsonFileStore::open(&path);
        assert!(reopened.list().unwrap().is_empty());
    }

    #[test]
    fn unwritable_path_keeps_in_memory_copy() {
        // Directory path cannot be written as a file; save still succeeds.
        let dir = tempdir().unwrap();
        let store = JsonFileStore::open(dir.path());
        let project = Project::new("user_1", "https://youtu.be/abc");
        store.save(&project).unwrap();
        assert_eq!(store.list().unwrap().len(), 1);
    }
}
