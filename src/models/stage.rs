use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// A named venue/track within the event, with a human-written description.
/// Static, defined at startup; never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StageDescriptor {
    pub id: String,
    pub name: String,
    pub description: String,
}

/// Wire record returned by `GET /api/stages`. Derived per request, never
/// persisted. All three fields are non-empty on a successful response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedStage {
    pub name: String,
    pub summary: String,
    pub video_url: String,
}

/// Client-side display record: an [`EnrichedStage`] plus the randomized
/// decoration fields attached on every successful poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayStage {
    pub id: String,
    pub stage_name: String,
    pub summary: String,
    pub video_url: String,
    pub excitement: u8,
    pub tags: Vec<String>,
}

static EVENT_STAGES: LazyLock<Vec<StageDescriptor>> = LazyLock::new(|| {
    vec![
        StageDescriptor {
            id: "main-stage".to_string(),
            name: "Main Stage".to_string(),
            description: "The main stage features the keynote speech by the CEO, followed by \
                          a deep dive into our new product line. Later, a panel of industry \
                          experts will discuss the future of technology."
                .to_string(),
        },
        StageDescriptor {
            id: "dev-lounge".to_string(),
            name: "Developer Lounge".to_string(),
            description: "A series of technical deep dives and coding workshops. We will \
                          cover everything from our new API endpoints to advanced debugging \
                          techniques. Bring your laptop!"
                .to_string(),
        },
        StageDescriptor {
            id: "creator-zone".to_string(),
            name: "Creator Zone".to_string(),
            description: "Meet your favorite content creators. They will be sharing their \
                          tips and tricks for building an audience and creating engaging \
                          content. There will be live demos and Q&A sessions."
                .to_string(),
        },
    ]
});

/// The event program served by the backend.
pub fn event_stages() -> &'static [StageDescriptor] {
    &EVENT_STAGES
}
