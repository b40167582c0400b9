//! Asset URL resolution.

use reqwest::Url;

/// Join the relative `path` under `base`, keeping any path the base already
/// has. Falls back to plain concatenation when the base is not a valid URL.
pub fn join_url(base: &str, path: &str) -> String {
    let path = path.trim_start_matches('/');
    let directory = format!("{}/", base.trim_end_matches('/'));

    match Url::parse(&directory).and_then(|url| url.join(path)) {
        Ok(url) => url.to_string(),
        Err(e) => {
            tracing::debug!("Cannot join {:?} onto base {:?}: {}", path, base, e);
            format!("{}{}", directory, path)
        }
    }
}

/// Absolute URL of an asset, or an empty string when there is no asset.
pub fn asset_url(base: &str, asset_id: Option<&str>) -> String {
    match asset_id.map(str::trim) {
        Some(id) if !id.is_empty() => join_url(base, &format!("assets/{}", id)),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_url() {
        assert_eq!(
            asset_url("https://cms.example/", Some("abc")),
            "https://cms.example/assets/abc"
        );
        assert_eq!(
            asset_url("https://cms.example", Some("abc")),
            "https://cms.example/assets/abc"
        );
    }

    #[test]
    fn test_join_keeps_base_path() {
        assert_eq!(
            join_url("https://host/cms/", "items/schedule"),
            "https://host/cms/items/schedule"
        );
        assert_eq!(
            join_url("https://host/cms", "items/schedule"),
            "https://host/cms/items/schedule"
        );
        assert_eq!(
            asset_url("https://host/cms", Some("abc")),
            "https://host/cms/assets/abc"
        );
    }

    #[test]
    fn test_asset_url_absent() {
        assert_eq!(asset_url("https://cms.example/", None), "");
        assert_eq!(asset_url("https://cms.example/", Some("")), "");
    }

    #[test]
    fn test_asset_url_invalid_base_falls_back() {
        assert_eq!(asset_url("cms.local/", Some("abc")), "cms.local/assets/abc");
        assert_eq!(asset_url("", Some("abc")), "/assets/abc");
    }
}
