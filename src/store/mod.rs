//! Project persistence behind an injected repository trait, so the
//! generation pipeline is decoupled from any concrete storage technology.

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use crate::error::Result;
use crate::models::Project;

/// Minimal repository contract for projects. Assets are embedded in the
/// project record, so deleting a project removes them with it.
pub trait ProjectStore: Send + Sync {
    /// Insert-or-replace by project id. Completion writes go through here
    /// too, which is what re-materializes a project deleted mid-processing.
    fn save(&self, project: &Project) -> Result<()>;

    fn get(&self, id: &str) -> Result<Option<Project>>;

    /// All persisted projects, in no particular order.
    fn list(&self) -> Result<Vec<Project>>;

    /// Returns whether a project with the id existed.
    fn delete(&self, id: &str) -> Result<bool>;
}
