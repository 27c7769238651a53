//! Content Catalyst: turn a YouTube URL into a bundle of marketing assets.
//!
//! The library accepts a video URL, classifies it into a topical category,
//! resolves best-effort metadata via the public oEmbed endpoint, and composes
//! a blog post, social posts, clip references, and quote graphics from
//! category phrase banks. Processing runs as a deferred job that advances the
//! project from `processing` to a terminal state and emits a completion event.
//!
//! Entry point is [`Catalyst`]; everything else is plumbing behind it.

pub mod catalyst;
pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod store;

pub use catalyst::{Catalyst, ProjectEvent};
pub use config::Config;
pub use error::{Error, Result};
pub use models::{Asset, AssetType, Project, ProjectStatus};
