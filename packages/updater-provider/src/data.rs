use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const IPA_SUFFIX: &str = ".ipa";

/// A named downloadable file attached to a release.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetData {
    pub name: String,
    pub browser_download_url: String,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub download_count: u64,
}

impl AssetData {
    pub fn is_ipa(&self) -> bool {
        self.name.ends_with(IPA_SUFFIX)
    }
}

/// One entry of the releases list returned by the API. Drafts have a null
/// `published_at`, published releases carry a timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseData {
    pub tag_name: String,
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub prerelease: bool,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub assets: Vec<AssetData>,
}

impl ReleaseData {
    /// First attached asset that is an IPA package, if any.
    pub fn ipa_asset(&self) -> Option<&AssetData> {
        self.assets.iter().find(|asset| asset.is_ipa())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_release_list() {
        let body = r#"[
            {
                "tag_name": "v1.1.0",
                "draft": false,
                "prerelease": false,
                "published_at": "2024-05-01T12:00:00Z",
                "assets": [
                    {
                        "name": "app-1.1.0.ipa",
                        "browser_download_url": "https://example.com/app-1.1.0.ipa",
                        "size": 1048576,
                        "download_count": 42
                    }
                ]
            },
            {
                "tag_name": "untagged-8a1f09c2",
                "draft": true,
                "prerelease": false,
                "published_at": null,
                "assets": []
            }
        ]"#;

        let releases: Vec<ReleaseData> = serde_json::from_str(body).unwrap();
        assert_eq!(releases.len(), 2);

        let published = &releases[0];
        assert_eq!(published.tag_name, "v1.1.0");
        assert!(!published.draft);
        assert!(published.published_at.is_some());
        let ipa = published.ipa_asset().unwrap();
        assert_eq!(ipa.name, "app-1.1.0.ipa");
        assert_eq!(ipa.browser_download_url, "https://example.com/app-1.1.0.ipa");
        assert_eq!(ipa.size, 1048576);

        let draft = &releases[1];
        assert!(draft.draft);
        assert!(draft.published_at.is_none());
        assert!(draft.ipa_asset().is_none());
    }

    #[test]
    fn test_decode_tolerates_missing_fields() {
        // The API omits nothing in practice, but only tag_name is required
        let release: ReleaseData = serde_json::from_str(r#"{"tag_name": "v1.0.0"}"#).unwrap();
        assert_eq!(release.tag_name, "v1.0.0");
        assert!(!release.draft);
        assert!(release.assets.is_empty());
    }

    #[test]
    fn test_ipa_asset_skips_other_files() {
        let release = ReleaseData {
            tag_name: "v1.0.0".to_string(),
            draft: false,
            prerelease: false,
            published_at: None,
            assets: vec![
                AssetData {
                    name: "app.dSYM.zip".to_string(),
                    browser_download_url: "https://example.com/app.dSYM.zip".to_string(),
                    size: 0,
                    download_count: 0,
                },
                AssetData {
                    name: "app.ipa".to_string(),
                    browser_download_url: "https://example.com/app.ipa".to_string(),
                    size: 0,
                    download_count: 0,
                },
            ],
        };
        assert_eq!(release.ipa_asset().unwrap().name, "app.ipa");
    }
}
