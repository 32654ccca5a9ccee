// src/infrastructure/images/cloudinary.rs
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::{images::ImageStore, time::Clock},
};
use async_trait::async_trait;
use serde::Deserialize;
use sha2::{Digest, Sha256};
use std::{sync::Arc, time::Duration};

const API_BASE: &str = "https://api.cloudinary.com/v1_1";

#[derive(Debug, Clone)]
pub struct CloudinaryConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
}

/// Signed uploads and deletions against the Cloudinary REST API.
pub struct CloudinaryImageStore {
    config: CloudinaryConfig,
    client: reqwest::Client,
    clock: Arc<dyn Clock>,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
}

#[derive(Debug, Deserialize)]
struct DestroyResponse {
    result: String,
}

impl CloudinaryImageStore {
    pub fn new(config: CloudinaryConfig, clock: Arc<dyn Clock>) -> ApplicationResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|err| ApplicationError::infrastructure(format!("http client: {err}")))?;
        Ok(Self {
            config,
            client,
            clock,
        })
    }

    fn endpoint(&self, action: &str) -> String {
        format!("{API_BASE}/{}/image/{action}", self.config.cloud_name)
    }

    /// Cloudinary signs the alphabetically sorted `key=value` pairs joined
    /// with `&`, followed directly by the API secret.
    fn sign(&self, params: &[(&str, &str)]) -> String {
        let mut sorted = params.to_vec();
        sorted.sort_by(|a, b| a.0.cmp(b.0));
        let payload = sorted
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&");

        hex::encode(Sha256::digest(
            format!("{payload}{}", self.config.api_secret).as_bytes(),
        ))
    }

    async fn post_signed<T: for<'de> Deserialize<'de>>(
        &self,
        action: &str,
        mut fields: Vec<(&str, String)>,
        signed: &[(&str, &str)],
    ) -> ApplicationResult<T> {
        fields.push(("api_key", self.config.api_key.clone()));
        fields.push(("signature", self.sign(signed)));
        fields.push(("signature_algorithm", "sha256".to_string()));

        let response = self
            .client
            .post(self.endpoint(action))
            .form(&fields)
            .send()
            .await
            .map_err(|err| ApplicationError::infrastructure(format!("image host: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApplicationError::infrastructure(format!(
                "image host returned {status}: {body}"
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|err| ApplicationError::infrastructure(format!("image host response: {err}")))
    }
}

/// Extracts the public id from a delivery URL such as
/// `https://res.cloudinary.com/demo/image/upload/v1712/folder/cat.png`,
/// which yields `folder/cat`.
pub(crate) fn public_id_from_url(url: &str) -> Option<String> {
    let (_, rest) = url.split_once("/upload/")?;
    let rest = rest.split(['?', '#']).next().unwrap_or(rest);
    let rest = match rest.split_once('/') {
        Some((version, tail))
            if version.len() > 1
                && version.starts_with('v')
                && version[1..].chars().all(|c| c.is_ascii_digit()) =>
        {
            tail
        }
        _ => rest,
    };
    let without_ext = match rest.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.contains('/') => stem,
        _ => rest,
    };
    (!without_ext.is_empty()).then(|| without_ext.to_string())
}

#[async_trait]
impl ImageStore for CloudinaryImageStore {
    async fn upload(&self, source: &str) -> ApplicationResult<String> {
        let timestamp = self.clock.now().timestamp().to_string();
        let fields = vec![("file", source.to_string()), ("timestamp", timestamp.clone())];
        let uploaded: UploadResponse = self
            .post_signed("upload", fields, &[("timestamp", timestamp.as_str())])
            .await?;
        tracing::debug!(url = %uploaded.secure_url, "image uploaded");
        Ok(uploaded.secure_url)
    }

    async fn delete(&self, url: &str) -> ApplicationResult<()> {
        let public_id = public_id_from_url(url).ok_or_else(|| {
            ApplicationError::infrastructure(format!("not an uploaded image url: {url}"))
        })?;
        let timestamp = self.clock.now().timestamp().to_string();
        let fields = vec![
            ("public_id", public_id.clone()),
            ("timestamp", timestamp.clone()),
        ];
        let destroyed: DestroyResponse = self
            .post_signed(
                "destroy",
                fields,
                &[("public_id", public_id.as_str()), ("timestamp", timestamp.as_str())],
            )
            .await?;

        if destroyed.result != "ok" {
            return Err(ApplicationError::infrastructure(format!(
                "image host refused to delete {public_id}: {}",
                destroyed.result
            )));
        }
        Ok(())
    }
}

/// Used when no image host credentials are configured. Every call fails.
#[derive(Default, Clone)]
pub struct DisabledImageStore;

#[async_trait]
impl ImageStore for DisabledImageStore {
    async fn upload(&self, _source: &str) -> ApplicationResult<String> {
        Err(ApplicationError::infrastructure(
            "image uploads are not configured",
        ))
    }

    async fn delete(&self, _url: &str) -> ApplicationResult<()> {
        Err(ApplicationError::infrastructure(
            "image uploads are not configured",
        ))
    }
}
