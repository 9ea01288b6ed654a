//! Digest client: polls `GET /api/stages` on a fixed interval and maps wire
//! records into display records with randomized decoration.

use anyhow::Result;
use async_trait::async_trait;
use log::error;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::time::Duration;
use tokio::sync::watch;

use crate::common::{EXCITEMENT_MAX, EXCITEMENT_MIN, TAG_VOCABULARY};
use crate::models::stage::{DisplayStage, EnrichedStage};

/// User-facing banner shown for any fetch failure.
pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch stage data. Please try again later.";

#[async_trait]
pub trait StageFetcher: Send + Sync {
    async fn fetch_stages(&self) -> Result<Vec<EnrichedStage>>;
}

/// Fetcher over HTTP against the backend base URL (e.g.
/// `http://localhost:8080/api`).
pub struct HttpStageFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl HttpStageFetcher {
    pub fn new(base_url: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl StageFetcher for HttpStageFetcher {
    async fn fetch_stages(&self) -> Result<Vec<EnrichedStage>> {
        let url = format!("{}/stages", self.base_url);
        let records = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<EnrichedStage>>()
            .await?;
        Ok(records)
    }
}

/// Three-state render model. A failed fetch discards previous data; there
/// is no stale-data fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DigestState {
    Loading,
    Error(String),
    Ready(Vec<DisplayStage>),
}

/// Attach decoration to wire records: a synthesized id, a random excitement
/// percentage, and up to three unique tags from the fixed vocabulary.
///
/// Pure in the random source, so tests can assert the shape with a seeded
/// rng. Decoration is regenerated on every successful fetch and is not
/// stable across polls.
pub fn decorate<R: Rng + ?Sized>(stages: &[EnrichedStage], rng: &mut R) -> Vec<DisplayStage> {
    stages
        .iter()
        .enumerate()
        .map(|(index, stage)| {
            // Three draws with replacement, deduplicated.
            let mut tags: Vec<String> = Vec::new();
            for _ in 0..3 {
                if let Some(tag) = TAG_VOCABULARY.choose(rng) {
                    if !tags.iter().any(|t| t == tag) {
                        tags.push(tag.to_string());
                    }
                }
            }

            DisplayStage {
                id: format!("{}-{}", stage.name, index),
                stage_name: stage.name.clone(),
                summary: stage.summary.clone(),
                video_url: stage.video_url.clone(),
                excitement: rng.random_range(EXCITEMENT_MIN..=EXCITEMENT_MAX),
                tags,
            }
        })
        .collect()
}

/// One poll: fetch, then decorate on success or collapse to the fixed error
/// banner on failure.
pub async fn poll_once<F: StageFetcher + ?Sized>(fetcher: &F) -> DigestState {
    match fetcher.fetch_stages().await {
        Ok(stages) => DigestState::Ready(decorate(&stages, &mut rand::rng())),
        Err(err) => {
            error!("Error fetching stages: {:?}", err);
            DigestState::Error(FETCH_ERROR_MESSAGE.to_string())
        }
    }
}

/// Fetch immediately, then refetch on every interval tick, publishing each
/// state over the watch channel. Ends when every receiver is gone or the
/// task driving it is dropped. In-flight requests are never superseded by
/// the next tick; ticks wait for the previous fetch to finish.
pub async fn run_poll_loop<F: StageFetcher>(
    fetcher: F,
    period: Duration,
    tx: watch::Sender<DigestState>,
) {
    let mut interval = tokio::time::interval(period);
    loop {
        interval.tick().await;
        let state = poll_once(&fetcher).await;
        if tx.send(state).is_err() {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn wire_records() -> Vec<EnrichedStage> {
        vec![
            EnrichedStage {
                name: "Main Stage".to_string(),
                summary: "AI Summary: keynote...".to_string(),
                video_url: "https://example.com/main.mp4".to_string(),
            },
            EnrichedStage {
                name: "Developer Lounge".to_string(),
                summary: "AI Summary: workshops...".to_string(),
                video_url: "https://example.com/dev.mp4".to_string(),
            },
        ]
    }

    struct AlwaysOk;

    #[async_trait]
    impl StageFetcher for AlwaysOk {
        async fn fetch_stages(&self) -> Result<Vec<EnrichedStage>> {
            Ok(wire_records())
        }
    }

    struct AlwaysFails;

    #[async_trait]
    impl StageFetcher for AlwaysFails {
        async fn fetch_stages(&self) -> Result<Vec<EnrichedStage>> {
            anyhow::bail!("connection refused")
        }
    }

    struct Counting(Arc<AtomicUsize>);

    #[async_trait]
    impl StageFetcher for Counting {
        async fn fetch_stages(&self) -> Result<Vec<EnrichedStage>> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(wire_records())
        }
    }

    #[test]
    fn decoration_shape_is_deterministic_in_bounds() {
        let records = wire_records();
        for seed in 0..64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let cards = decorate(&records, &mut rng);

            assert_eq!(cards.len(), records.len());
            for (index, card) in cards.iter().enumerate() {
                assert_eq!(card.id, format!("{}-{}", records[index].name, index));
                assert_eq!(card.stage_name, records[index].name);
                assert!((EXCITEMENT_MIN..=EXCITEMENT_MAX).contains(&card.excitement));

                assert!(!card.tags.is_empty() && card.tags.len() <= 3);
                let unique: std::collections::HashSet<_> = card.tags.iter().collect();
                assert_eq!(unique.len(), card.tags.len());
                for tag in &card.tags {
                    assert!(TAG_VOCABULARY.contains(&tag.as_str()));
                }
            }
        }
    }

    #[tokio::test]
    async fn successful_fetch_transitions_to_ready() {
        let state = poll_once(&AlwaysOk).await;
        match state {
            DigestState::Ready(cards) => assert_eq!(cards.len(), 2),
            other => panic!("expected Ready, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn failed_fetch_transitions_to_error_with_no_stale_data() {
        let state = poll_once(&AlwaysFails).await;
        assert_eq!(state, DigestState::Error(FETCH_ERROR_MESSAGE.to_string()));
    }

    #[tokio::test]
    async fn polls_immediately_then_once_per_interval_until_aborted() {
        let count = Arc::new(AtomicUsize::new(0));
        let (tx, rx) = watch::channel(DigestState::Loading);

        let handle = tokio::spawn(run_poll_loop(
            Counting(count.clone()),
            Duration::from_millis(200),
            tx,
        ));

        // Immediate first fetch, no second fetch before one interval.
        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);

        // Second fetch after the interval elapses.
        tokio::time::sleep(Duration::from_millis(250)).await;
        assert_eq!(count.load(Ordering::SeqCst), 2);

        // No further fetches after teardown.
        handle.abort();
        let _ = handle.await;
        tokio::time::sleep(Duration::from_millis(300)).await;
        assert_eq!(count.load(Ordering::SeqCst), 2);
        drop(rx);
    }

    #[tokio::test]
    async fn poll_loop_ends_when_receivers_are_gone() {
        let (tx, rx) = watch::channel(DigestState::Loading);
        drop(rx);
        // Returns instead of spinning forever once the send fails.
        run_poll_loop(AlwaysOk, Duration::from_millis(10), tx).await;
    }

    #[test]
    fn http_fetcher_trims_trailing_slash() {
        let fetcher = HttpStageFetcher::new("http://localhost:8080/api/");
        assert_eq!(fetcher.base_url, "http://localhost:8080/api");
    }
}
