// Matching pipeline: rubric scoring, threshold filter, ranking, and the
// HTTP handler that ties fetch and rank together.

pub mod handlers;
pub mod ranking;
pub mod scoring;
