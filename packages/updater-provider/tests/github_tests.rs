use mockito::Server;
use updater_provider::{GitHubProvider, ReleaseProvider, UpdateError};

const RELEASES_BODY: &str = r#"[
    {
        "tag_name": "v1.1.0",
        "draft": false,
        "prerelease": false,
        "published_at": "2024-05-01T12:00:00Z",
        "assets": [
            {
                "name": "nezu-app-1.1.0.ipa",
                "browser_download_url": "https://github.com/nezumi0627/nezu-app/releases/download/v1.1.0/nezu-app-1.1.0.ipa",
                "size": 2097152,
                "download_count": 3
            }
        ]
    },
    {
        "tag_name": "v1.0.0",
        "draft": false,
        "prerelease": false,
        "published_at": "2024-04-01T12:00:00Z",
        "assets": [
            {
                "name": "nezu-app-1.0.0.ipa",
                "browser_download_url": "https://github.com/nezumi0627/nezu-app/releases/download/v1.0.0/nezu-app-1.0.0.ipa",
                "size": 2097152,
                "download_count": 17
            }
        ]
    }
]"#;

#[tokio::test]
async fn test_fetch_releases() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/repos/nezumi0627/nezu-app/releases")
        .match_header("accept", "application/vnd.github.v3+json")
        .match_header("user-agent", "ipa-updater")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(RELEASES_BODY)
        .create_async()
        .await;

    let provider = GitHubProvider::new("nezumi0627", "nezu-app").with_api_base(&server.url());
    let releases = provider.fetch_releases().await.unwrap();

    assert_eq!(releases.len(), 2);
    assert_eq!(releases[0].tag_name, "v1.1.0");
    let ipa = releases[0].ipa_asset().unwrap();
    assert_eq!(ipa.name, "nezu-app-1.1.0.ipa");
    assert_eq!(
        ipa.browser_download_url,
        "https://github.com/nezumi0627/nezu-app/releases/download/v1.1.0/nezu-app-1.1.0.ipa"
    );
}

#[tokio::test]
async fn test_fetch_releases_with_token() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/repos/nezumi0627/nezu-app/releases")
        .match_header("authorization", "Bearer test_token")
        .with_status(200)
        .with_body(RELEASES_BODY)
        .create_async()
        .await;

    let provider = GitHubProvider::new("nezumi0627", "nezu-app")
        .with_api_base(&server.url())
        .with_token("test_token");
    let releases = provider.fetch_releases().await.unwrap();
    assert_eq!(releases.len(), 2);
}

#[tokio::test]
async fn test_fetch_releases_empty_list() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/repos/nezumi0627/nezu-app/releases")
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let provider = GitHubProvider::new("nezumi0627", "nezu-app").with_api_base(&server.url());
    let releases = provider.fetch_releases().await.unwrap();
    assert!(releases.is_empty());
}

#[tokio::test]
async fn test_fetch_releases_server_error() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/repos/nezumi0627/nezu-app/releases")
        .with_status(502)
        .create_async()
        .await;

    let provider = GitHubProvider::new("nezumi0627", "nezu-app").with_api_base(&server.url());
    let err = provider.fetch_releases().await.unwrap_err();
    assert_eq!(err, UpdateError::Network("server returned status 502".to_string()));
}

#[tokio::test]
async fn test_fetch_releases_invalid_json() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/repos/nezumi0627/nezu-app/releases")
        .with_status(200)
        .with_body("{\"message\": \"Not Found\"}")
        .create_async()
        .await;

    let provider = GitHubProvider::new("nezumi0627", "nezu-app").with_api_base(&server.url());
    let err = provider.fetch_releases().await.unwrap_err();
    assert!(matches!(err, UpdateError::Parse(_)));
}
