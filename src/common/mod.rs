pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 30;

pub const EXCITEMENT_MIN: u8 = 60;

pub const EXCITEMENT_MAX: u8 = 95;

pub const TAG_VOCABULARY: &'static [&'static str] =
    &["#AI", "#Live", "#Tech", "#Music", "#Future", "#Demo"];

// Served while the video model upstream is unavailable.
pub const PLACEHOLDER_VIDEO_URL: &'static str =
    "https://storage.googleapis.com/gtv-videos-bucket/sample/BigBuckBunny.mp4";

pub const PLACEHOLDER_VIDEO_BYTES: &'static [u8] = b"fake-video-data";
