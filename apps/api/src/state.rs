use std::sync::Arc;

use crate::ats::JobSource;
use crate::matching::scoring::PostingScorer;
use crate::profile::MatcherProfile;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub profile: Arc<MatcherProfile>,
    /// Where postings come from. Default: `ProxyClient`.
    pub job_source: Arc<dyn JobSource>,
    /// Pluggable scorer. Default: `KeywordScorer` built from the profile tables.
    pub scorer: Arc<dyn PostingScorer>,
}
