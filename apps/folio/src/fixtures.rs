//! Shared test fixtures: the demo profile and host page shipped under `site/`.

use crate::models::profile::Profile;

pub const SAMPLE_PROFILE_JSON: &str = include_str!("../site/profile.json");
pub const HOST_PAGE: &str = include_str!("../site/index.html");

pub fn sample_profile() -> Profile {
    serde_json::from_str(SAMPLE_PROFILE_JSON).expect("demo profile parses")
}
