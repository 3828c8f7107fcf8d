use bytes::{Bytes, BytesMut};
use http_body_util::{BodyExt, Empty};
use hyper::{StatusCode, Uri};
#[cfg(not(feature = "rustls-platform-verifier"))]
use hyper_rustls::ConfigBuilderExt;
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};
use once_cell::sync::Lazy;
use rustls::ClientConfig;
#[cfg(feature = "rustls-platform-verifier")]
use rustls_platform_verifier::BuilderVerifierExt;
use std::{collections::HashMap, fmt, time::Duration};

pub type HttpError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug)]
pub struct ResponseData {
    pub status: u16,
    pub body: Bytes,
}

impl fmt::Display for ResponseData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Response status: {}, body: {}",
            self.status,
            String::from_utf8_lossy(&self.body)
        )
    }
}

static PROVIDER: Lazy<std::sync::Arc<rustls::crypto::CryptoProvider>> =
    Lazy::new(|| std::sync::Arc::new(rustls::crypto::ring::default_provider()));

fn https_connector() -> Result<hyper_rustls::HttpsConnector<HttpConnector>, HttpError> {
    let provider = PROVIDER.clone();
    let tls: ClientConfig;
    #[cfg(feature = "rustls-platform-verifier")]
    {
        tls = ClientConfig::builder_with_provider(provider)
            .with_safe_default_protocol_versions()?
            .with_platform_verifier()
            .with_no_client_auth();
    }
    #[cfg(all(feature = "webpki-roots", not(feature = "rustls-platform-verifier")))]
    {
        tls = ClientConfig::builder_with_provider(provider)
            .with_safe_default_protocol_versions()?
            .with_webpki_roots()
            .with_no_client_auth();
    }
    #[cfg(all(not(feature = "webpki-roots"), not(feature = "rustls-platform-verifier")))]
    {
        compile_error!("No TLS backend enabled");
    }
    Ok(hyper_rustls::HttpsConnectorBuilder::new()
        .with_tls_config(tls)
        .https_or_http()
        .enable_http1()
        .enable_http2()
        .build())
}

/// Issues a single GET request with the given headers, bounded by `timeout`.
pub async fn get(
    url: Uri,
    header_map: &HashMap<String, String>,
    timeout: Duration,
) -> Result<ResponseData, HttpError> {
    match tokio::time::timeout(timeout, request(url, header_map)).await {
        Ok(result) => result,
        Err(_) => Err(Box::new(std::io::Error::new(
            std::io::ErrorKind::TimedOut,
            format!("request timed out after {}s", timeout.as_secs()),
        ))),
    }
}

async fn request(
    url: Uri,
    header_map: &HashMap<String, String>,
) -> Result<ResponseData, HttpError> {
    let https = https_connector()?;
    let client = Client::builder(TokioExecutor::new()).build(https);

    let mut req = hyper::Request::builder().method("GET").uri(url.clone());
    for (key, value) in header_map {
        req = req.header(key, value);
    }
    let req = req.body(Empty::<Bytes>::new())?;

    let mut res = client.request(req).await?;
    let status = res.status().as_u16();
    let mut body = BytesMut::new();
    while let Some(next) = res.frame().await {
        let frame = next?;
        if let Some(chunk) = frame.data_ref() {
            body.extend_from_slice(chunk);
        }
    }
    Ok(ResponseData {
        status,
        body: body.freeze(),
    })
}

pub fn http_status_is_ok(status: u16) -> bool {
    if let Ok(status) = StatusCode::from_u16(status) {
        !(status.is_client_error() || status.is_server_error())
    } else {
        false
    }
}
