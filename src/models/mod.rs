pub mod asset;
pub mod project;

pub use asset::{Asset, AssetType};
pub use project::{Project, ProjectStatus};
