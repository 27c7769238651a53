pub mod executor;

pub use executor::{DelayedExecutor, ImmediateExecutor, JobExecutor, JobFuture};
