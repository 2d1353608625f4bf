use super::*;

#[test]
fn resolve_base_url_prefers_configured_value() {
    assert_eq!(resolve_base_url(Some("https://feedback.example.com/api")), "https://feedback.example.com/api");
}

#[test]
fn resolve_base_url_falls_back_when_unset_or_blank() {
    assert_eq!(resolve_base_url(None), DEFAULT_BASE_URL);
    assert_eq!(resolve_base_url(Some("   ")), DEFAULT_BASE_URL);
}
