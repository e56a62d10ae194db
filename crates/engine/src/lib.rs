//! # Repobrief Engine
//!
//! Turns an assembled [`BriefingContext`](repobrief_context::BriefingContext)
//! into a structured [`Briefing`].
//!
//! ```text
//! BriefingContext
//!     │
//!     ├──> local::infer   (rule tables, total, no I/O) ── default path
//!     │
//!     └──> RemoteBriefingClient (Anthropic Messages API) ── only with a credential
//!            └─> same Briefing shape, parsed from strict JSON
//! ```
//!
//! Which path runs is decided by [`BriefingConfig`], built by the caller —
//! the engine never reads the process environment itself.

mod briefing;
pub mod local;
mod remote;
mod report;

pub use briefing::{Briefing, FileNote};
pub use remote::{build_prompt, parse_briefing, RemoteBriefingClient, DEFAULT_MODEL};
pub use report::{render, BriefingSource};

/// Configuration for briefing generation, passed in explicitly so the
/// engine stays a pure function of its arguments.
#[derive(Debug, Clone, Default)]
pub struct BriefingConfig {
    /// Remote service credential; `None` means the local engine is
    /// authoritative and no network I/O happens
    pub api_key: Option<String>,
    /// Remote model id; ignored on the local path
    pub model: Option<String>,
}

impl BriefingConfig {
    pub fn local_only() -> Self {
        Self::default()
    }

    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            model: None,
        }
    }

    pub fn model(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }
}
