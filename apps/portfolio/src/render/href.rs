/// Link targets are limited to http(s), mailto and relative URLs; anything else
/// (e.g. `javascript:`) is replaced with `#`. The result is not escaped; the
/// templates do that on output.
pub fn safe_href(url: &str) -> String {
    let trimmed = url.trim();
    let lower = trimmed.to_ascii_lowercase();
    let has_scheme = lower
        .split_once(':')
        .map(|(scheme, _)| !scheme.contains('/') && !scheme.contains('?') && !scheme.contains('#'))
        .unwrap_or(false);
    let allowed = !has_scheme
        || lower.starts_with("http:")
        || lower.starts_with("https:")
        || lower.starts_with("mailto:");
    if allowed {
        trimmed.to_string()
    } else {
        "#".to_string()
    }
}
