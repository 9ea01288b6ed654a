use log::info;
use rocket::serde::json::Json;
use rocket::{Route, State, get, routes};
use std::time::Instant;

use crate::api::AppResult;
use crate::enrich::Enricher;
use crate::models::stage::{EnrichedStage, event_stages};

/// Enrich the static event program and return one record per stage.
///
/// Every request re-runs the full pipeline; there is no caching or request
/// coalescing, so cost scales with stage count and poll frequency.
#[get("/api/stages")]
pub async fn get_stages(enricher: &State<Enricher>) -> AppResult<Json<Vec<EnrichedStage>>> {
    info!("Received request for /api/stages");
    let start_time = Instant::now();

    let records = enricher.enrich_all(event_stages()).await?;

    let duration = format!("{:?}", start_time.elapsed());
    info!(duration = &*duration; "Enriched {} stages", records.len());
    Ok(Json(records))
}

pub fn generate_stage_routes() -> Vec<Route> {
    routes![get_stages]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::STAGE_ERROR_BODY;
    use crate::providers::{
        ImagenSynthesizer, ProviderError, StubPublisher, StubSummarizer, Summarizer,
    };
    use async_trait::async_trait;
    use rocket::http::{ContentType, Status};
    use rocket::local::asynchronous::Client;
    use std::sync::Arc;

    struct FailingSummarizer;

    #[async_trait]
    impl Summarizer for FailingSummarizer {
        async fn summarize(&self, _text: &str) -> Result<String, ProviderError> {
            Err(ProviderError::Request("connection refused".to_string()))
        }
    }

    fn stub_rocket() -> rocket::Rocket<rocket::Build> {
        let enricher = Enricher::new(
            Arc::new(StubSummarizer),
            Arc::new(ImagenSynthesizer),
            Arc::new(StubPublisher),
        );
        rocket::build()
            .manage(enricher)
            .mount("/", generate_stage_routes())
    }

    fn failing_rocket() -> rocket::Rocket<rocket::Build> {
        let enricher = Enricher::new(
            Arc::new(FailingSummarizer),
            Arc::new(ImagenSynthesizer),
            Arc::new(StubPublisher),
        );
        rocket::build()
            .manage(enricher)
            .mount("/", generate_stage_routes())
    }

    #[rocket::async_test]
    async fn returns_json_array_with_one_record_per_stage() {
        let client = Client::tracked(stub_rocket()).await.unwrap();
        let response = client.get("/api/stages").dispatch().await;

        assert_eq!(response.status(), Status::Ok);
        assert_eq!(response.content_type(), Some(ContentType::JSON));

        let records: Vec<EnrichedStage> = response.into_json().await.unwrap();
        assert_eq!(records.len(), event_stages().len());
        for (record, stage) in records.iter().zip(event_stages()) {
            assert_eq!(record.name, stage.name);
            assert!(!record.summary.is_empty());
            assert!(!record.video_url.is_empty());
        }
    }

    #[rocket::async_test]
    async fn wire_records_use_camel_case_video_url() {
        let client = Client::tracked(stub_rocket()).await.unwrap();
        let response = client.get("/api/stages").dispatch().await;
        let body = response.into_string().await.unwrap();
        assert!(body.contains("\"videoUrl\""));
        assert!(!body.contains("\"video_url\""));
    }

    #[rocket::async_test]
    async fn any_failure_collapses_to_generic_500_with_no_partial_records() {
        let client = Client::tracked(failing_rocket()).await.unwrap();
        let response = client.get("/api/stages").dispatch().await;

        assert_eq!(response.status(), Status::InternalServerError);
        assert_eq!(response.content_type(), Some(ContentType::Plain));
        assert_eq!(response.into_string().await.unwrap(), STAGE_ERROR_BODY);
    }
}
