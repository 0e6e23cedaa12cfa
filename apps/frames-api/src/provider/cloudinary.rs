//! Cloudinary upload API client.
//!
//! A render is a signed upload of a `data:text/html` URI with an incoming
//! transformation; Cloudinary rasterizes the document and returns the stored
//! image's `secure_url`, which is then downloaded.

use std::collections::BTreeMap;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use crate::config::CloudinaryConfig;
use crate::provider::{ProviderError, RenderProvider, RenderSubmission, RenderedAsset};

const SIGNATURE_ALGORITHM: &str = "sha256";

#[derive(Debug, Deserialize)]
struct UploadResponse {
    public_id: Option<String>,
    secure_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CloudinaryError {
    error: CloudinaryErrorBody,
}

#[derive(Debug, Deserialize)]
struct CloudinaryErrorBody {
    message: String,
}

struct Credentials<'a> {
    cloud_name: &'a str,
    api_key: &'a str,
    api_secret: &'a str,
}

/// Immutable provider handle built once at startup and shared by all requests.
#[derive(Clone)]
pub struct CloudinaryClient {
    client: Client,
    config: CloudinaryConfig,
}

impl CloudinaryClient {
    /// Builds the client. No request timeout is set; the surrounding server
    /// decides how long a request may run.
    pub fn new(config: CloudinaryConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, config })
    }

    fn credentials(&self) -> Result<Credentials<'_>, ProviderError> {
        Ok(Credentials {
            cloud_name: self
                .config
                .cloud_name
                .as_deref()
                .ok_or(ProviderError::MissingCredentials("CLOUDINARY_CLOUD_NAME"))?,
            api_key: self
                .config
                .api_key
                .as_deref()
                .ok_or(ProviderError::MissingCredentials("CLOUDINARY_API_KEY"))?,
            api_secret: self
                .config
                .api_secret
                .as_deref()
                .ok_or(ProviderError::MissingCredentials("CLOUDINARY_API_SECRET"))?,
        })
    }

    fn upload_url(&self, cloud_name: &str) -> String {
        format!(
            "{}/{}/image/upload",
            self.config.api_base.trim_end_matches('/'),
            cloud_name
        )
    }
}

#[async_trait]
impl RenderProvider for CloudinaryClient {
    async fn submit(&self, submission: &RenderSubmission) -> Result<RenderedAsset, ProviderError> {
        let credentials = self.credentials()?;
        let timestamp = chrono::Utc::now().timestamp();
        let form = upload_form(
            submission,
            credentials.api_key,
            credentials.api_secret,
            timestamp,
        );

        let response = self
            .client
            .post(self.upload_url(credentials.cloud_name))
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        let asset = parse_upload_response(status, &body, &submission.public_id).map_err(|e| {
            warn!("Cloudinary upload for frame {} failed: {}", submission.frame, e);
            e
        })?;

        debug!(
            "Cloudinary upload succeeded: frame={}, public_id={}, url={}",
            submission.frame, asset.public_id, asset.secure_url
        );

        Ok(asset)
    }

    async fn fetch(&self, asset: &RenderedAsset) -> Result<Bytes, ProviderError> {
        let response = self.client.get(&asset.secure_url).send().await?;
        check_retrieval_status(response.status(), &asset.secure_url)?;
        Ok(response.bytes().await?)
    }
}

/// Maps an upload reply to the stored asset. Non-2xx statuses carry the
/// provider's `error.message` when the body has one, else the raw body.
fn parse_upload_response(
    status: StatusCode,
    body: &str,
    requested_public_id: &str,
) -> Result<RenderedAsset, ProviderError> {
    if !status.is_success() {
        let message = serde_json::from_str::<CloudinaryError>(body)
            .map(|e| e.error.message)
            .unwrap_or_else(|_| body.to_string());
        return Err(ProviderError::Api {
            status: status.as_u16(),
            message,
        });
    }

    let upload: UploadResponse = serde_json::from_str(body)
        .map_err(|e| ProviderError::MalformedResponse(e.to_string()))?;
    let secure_url = upload.secure_url.ok_or_else(|| {
        ProviderError::MalformedResponse("upload response has no secure_url".to_string())
    })?;

    Ok(RenderedAsset {
        public_id: upload
            .public_id
            .unwrap_or_else(|| requested_public_id.to_string()),
        secure_url,
    })
}

fn check_retrieval_status(status: StatusCode, url: &str) -> Result<(), ProviderError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(ProviderError::Retrieval {
            status: status.as_u16(),
            url: url.to_string(),
        })
    }
}

/// Incoming transformation applied at upload time, components in the
/// alphabetical order Cloudinary normalises to.
fn transformation(submission: &RenderSubmission) -> String {
    format!(
        "c_{},fl_{},h_{},q_{},w_{}",
        submission.crop,
        submission.flags,
        submission.height,
        submission.quality,
        submission.width
    )
}

/// Builds the full signed upload form.
fn upload_form(
    submission: &RenderSubmission,
    api_key: &str,
    api_secret: &str,
    timestamp: i64,
) -> Vec<(&'static str, String)> {
    let mut signed = BTreeMap::new();
    signed.insert("format", submission.format.to_string());
    signed.insert("public_id", submission.public_id.clone());
    signed.insert("timestamp", timestamp.to_string());
    signed.insert("transformation", transformation(submission));

    let signature = sign(&signed, api_secret);

    let mut form: Vec<(&'static str, String)> = signed.into_iter().collect();
    form.push(("api_key", api_key.to_string()));
    form.push(("signature_algorithm", SIGNATURE_ALGORITHM.to_string()));
    form.push(("signature", signature));
    form.push(("file", submission.file.clone()));
    form
}

/// `k=v` pairs sorted by key and joined with `&`, secret appended, SHA-256 hex.
fn sign(params: &BTreeMap<&'static str, String>, api_secret: &str) -> String {
    let to_sign = params
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");

    let mut hasher = Sha256::new();
    hasher.update(to_sign.as_bytes());
    hasher.update(api_secret.as_bytes());
    hex::encode(hasher.finalize())
}
