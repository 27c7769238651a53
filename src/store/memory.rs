use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{Error, Result};
use crate::models::Project;
use crate::store::ProjectStore;

/// In-memory project store. The lock serializes read-modify-write cycles,
/// so concurrent creates cannot lose updates.
#[derive(Default)]
pub struct MemoryStore {
    projects: RwLock<HashMap<String, Project>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProjectStore for MemoryStore {
    fn save(&self, project: &Project) -> Result<()> {
        let mut projects = self
            .projects
            .write()
            .map_err(|e| Error::Storage(e.to_string()))?;
        projects.insert(project.id.clone(), project.clone());
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
        Ok(projects.remove(id).is_some())
    }
}
