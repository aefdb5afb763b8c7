pub(super) fn default_api_url() -> String {
    "https://api.telegram.org".to_string()
}

pub(super) fn default_limit() -> u32 {
    100
}

pub(super) fn default_timeout_secs() -> u32 {
    30
}
