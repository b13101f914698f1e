//! Images (`rest/images`).
//!
//! Uploading is two steps: [`Image::initialize_upload`] reserves an image
//! URN and returns an upload URL, then [`Image::upload`] PUTs the bytes
//! there. [`Image::upload_image`] does both.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::clients::WebRequestor;
use crate::json::serde_helpers::epoch_millis_option;
use crate::json::JsonMapper;
use crate::rest::{ErrorMapper, LinkedInClient, LinkedInError, LinkedInResource, UploadResponse};
use crate::urn::Urn;

const OCTET_STREAM: &str = "application/octet-stream";

/// Processing state of an uploaded asset.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaStatus {
    /// Reserved, bytes not received yet.
    WaitingUpload,
    /// Being processed.
    Processing,
    /// Ready to use in posts.
    Available,
    /// Processing failed.
    ProcessingFailed,
    /// A value this crate does not know yet.
    #[serde(other)]
    Unknown,
}

/// An image.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    /// The image URN.
    pub id: Urn,
    /// The owning member or organization.
    #[serde(default)]
    pub owner: Option<Urn>,
    /// Processing state.
    pub status: MediaStatus,
    /// Where the image can be downloaded.
    #[serde(default)]
    pub download_url: Option<String>,
    /// When `download_url` stops working.
    #[serde(default, with = "epoch_millis_option")]
    pub download_url_expires_at: Option<DateTime<Utc>>,
}

/// The result of reserving an image upload.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ImageUploadTicket {
    /// Where to PUT the bytes.
    pub upload_url: String,
    /// The reserved image URN.
    pub image: Urn,
    /// When `upload_url` stops working.
    #[serde(default, with = "epoch_millis_option")]
    pub upload_url_expires_at: Option<DateTime<Utc>>,
}

impl LinkedInResource for Image {
    type Id = Urn;
    const NAME: &'static str = "Image";
    const PATH: &'static str = "rest/images";
}

impl Image {
    /// Reserves an image upload for `owner`.
    ///
    /// # Errors
    ///
    /// See [`LinkedInClient::action`].
    pub async fn initialize_upload<R, M, E>(
        client: &LinkedInClient<R, M, E>,
        owner: &Urn,
    ) -> Result<ImageUploadTicket, LinkedInError>
    where
        R: WebRequestor,
        M: JsonMapper,
        E: ErrorMapper,
    {
        let body = json!({ "initializeUploadRequest": { "owner": owner } });
        client.action(Self::PATH, "initializeUpload", &body).await
    }

    /// Uploads image bytes to a reserved upload URL.
    ///
    /// # Errors
    ///
    /// See [`LinkedInClient::upload`].
    pub async fn upload<R, M, E>(
        client: &LinkedInClient<R, M, E>,
        ticket: &ImageUploadTicket,
        data: Vec<u8>,
    ) -> Result<UploadResponse, LinkedInError>
    where
        R: WebRequestor,
        M: JsonMapper,
        E: ErrorMapper,
    {
        client.upload(&ticket.upload_url, data, OCTET_STREAM).await
    }

    /// Reserves and uploads an image, returning its URN.
    ///
    /// # Errors
    ///
    /// Returns the first error of either step.
    pub async fn upload_image<R, M, E>(
        client: &LinkedInClient<R, M, E>,
        owner: &Urn,
        data: Vec<u8>,
    ) -> Result<Urn, LinkedInError>
    where
        R: WebRequestor,
        M: JsonMapper,
        E: ErrorMapper,
    {
        let ticket = Self::initialize_upload(client, owner).await?;
        tracing::debug!(image = %ticket.image, bytes = data.len(), "Uploading image");
        Self::upload(client, &ticket, data).await?;
        Ok(ticket.image)
    }
}
