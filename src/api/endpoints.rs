// OpenDota endpoint URL builders. The API is keyless; the base URL is
// swappable via OPENDOTA_BASE_URL for testing against a local stub.

pub const DEFAULT_BASE_URL: &str = "https://api.opendota.com/api";

pub fn hero_stats_url(base_url: &str) -> String {
    format!("{}/heroStats", base_url)
}

pub fn matchups_url(base_url: &str, hero_id: u32) -> String {
    format!("{}/heroes/{}/matchups", base_url, hero_id)
}
