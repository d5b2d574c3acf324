use crate::matching::scoring::PostingScorer;
use crate::models::posting::JobPosting;

/// Minimum score a posting needs to be returned.
pub const DEFAULT_MIN_SCORE: u32 = 5;

/// Scores every posting, drops those below `min_score`, and orders the rest
/// by score descending. The sort is stable, so equal scores keep their
/// input order.
pub fn rank_postings(
    postings: Vec<JobPosting>,
    scorer: &dyn PostingScorer,
    min_score: u32,
) -> Vec<JobPosting> {
    let mut ranked: Vec<JobPosting> = postings
        .into_iter()
        .map(|mut posting| {
            posting.score = Some(scorer.score(&posting));
            posting
        })
        .filter(|posting| posting.score.unwrap_or(0) >= min_score)
        .collect();

    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}
