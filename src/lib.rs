// src/lib.rs
// =============================================================================
// milist: list Material Design Icon names from google/material-design-icons.
//
// The binary (src/main.rs) is a thin shell around this library:
//
//   let lister = IconLister::new(ApiConfig::from_env())?;
//   let names = lister.list("web").await?;   // sorted, no duplicates
//
// Modules:
// - cli:    clap definition of the command line
// - config: API hosts, repository, optional bearer token
// - error:  ListError, the one error type the resolver returns
// - github: request plumbing and the segment-by-segment tree walk
// - icons:  Source selector and the IconLister entry point
// - output: text / JSON / TypeScript rendering
// =============================================================================

pub mod cli;
pub mod config;
pub mod error;
pub mod github;
pub mod icons;
pub mod output;

pub use config::ApiConfig;
pub use error::{ListError, Stage};
pub use icons::{IconLister, Source};
