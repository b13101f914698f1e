//! Digital media assets (`v2/assets`).
//!
//! The asset flow predates [`Image`](super::Image) and
//! [`Video`](super::Video) and is still what [`UgcPost`](super::UgcPost)
//! media refers to.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::clients::{BinaryAttachment, WebRequestor};
use crate::json::JsonMapper;
use crate::rest::resources::common::AuditStamp;
use crate::rest::{
    DeletableResource, ErrorMapper, LinkedInClient, LinkedInError, LinkedInResource,
    UploadResponse,
};
use crate::urn::Urn;

const UPLOAD_HTTP_REQUEST: &str = "com.linkedin.digitalmedia.uploading.MediaUploadHttpRequest";

/// Recipe for feed images.
pub const FEEDSHARE_IMAGE: &str = "urn:li:digitalmediaRecipe:feedshare-image";
/// Recipe for feed videos.
pub const FEEDSHARE_VIDEO: &str = "urn:li:digitalmediaRecipe:feedshare-video";

/// An asset.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    /// The bare asset id.
    #[serde(default)]
    pub id: String,
    /// `ALLOWED`, `BLOCKED` or `ABSENT`.
    #[serde(default)]
    pub status: Option<String>,
    /// `STILLIMAGE`, `VIDEO`, ...
    #[serde(default)]
    pub media_type_family: Option<String>,
    /// Processing state per recipe.
    #[serde(default)]
    pub recipes: Vec<AssetRecipe>,
    /// Owners and other relationships.
    #[serde(default)]
    pub service_relationships: Vec<ServiceRelationship>,
    /// Creation stamp.
    #[serde(default)]
    pub created: Option<AuditStamp>,
    /// Last modification stamp.
    #[serde(default)]
    pub last_modified: Option<AuditStamp>,
}

impl Asset {
    /// Returns the asset URN.
    #[must_use]
    pub fn urn(&self) -> Urn {
        Urn::digital_media_asset(self.id.clone())
    }
}

/// Processing state of one recipe.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssetRecipe {
    /// The recipe URN.
    pub recipe: String,
    /// `AVAILABLE`, `PROCESSING`, `WAITING_UPLOAD`, ...
    #[serde(default)]
    pub status: Option<String>,
}

/// A relationship between an asset and an entity.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRelationship {
    /// Usually `urn:li:userGeneratedContent`.
    pub identifier: String,
    /// Usually `OWNER`.
    pub relationship_type: String,
}

impl Default for ServiceRelationship {
    fn default() -> Self {
        Self {
            identifier: "urn:li:userGeneratedContent".to_string(),
            relationship_type: "OWNER".to_string(),
        }
    }
}

/// Options for registering an upload.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUploadRequest {
    /// The owning member or organization.
    pub owner: Urn,
    /// Recipes, e.g. [`FEEDSHARE_IMAGE`].
    pub recipes: Vec<String>,
    /// Relationships to create.
    pub service_relationships: Vec<ServiceRelationship>,
    /// `SYNCHRONOUS_UPLOAD` for single-request uploads.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub supported_upload_mechanism: Vec<String>,
}

impl RegisterUploadRequest {
    /// A feed image upload.
    #[must_use]
    pub fn image(owner: Urn) -> Self {
        Self::with_recipe(owner, FEEDSHARE_IMAGE)
    }

    /// A feed video upload.
    #[must_use]
    pub fn video(owner: Urn) -> Self {
        Self::with_recipe(owner, FEEDSHARE_VIDEO)
    }

    fn with_recipe(owner: Urn, recipe: &str) -> Self {
        Self {
            owner,
            recipes: vec![recipe.to_string()],
            service_relationships: vec![ServiceRelationship::default()],
            supported_upload_mechanism: Vec::new(),
        }
    }
}

/// The result of registering an upload.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AssetUploadTicket {
    /// The registered asset.
    pub asset: Urn,
    /// The media artifact being uploaded.
    #[serde(default)]
    pub media_artifact: Option<String>,
    /// How to upload.
    pub upload_mechanism: HashMap<String, UploadHttpRequest>,
}

impl AssetUploadTicket {
    /// Returns the HTTP upload URL.
    #[must_use]
    pub fn upload_url(&self) -> Option<&str> {
        self.upload_mechanism
            .get(UPLOAD_HTTP_REQUEST)
            .or_else(|| self.upload_mechanism.values().next())
            .map(|m| m.upload_url.as_str())
    }
}

/// An HTTP upload target.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UploadHttpRequest {
    /// Where to send the bytes.
    pub upload_url: String,
    /// Headers LinkedIn expects on the upload.
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

impl LinkedInResource for Asset {
    type Id = String;
    const NAME: &'static str = "Asset";
    const PATH: &'static str = "v2/assets";
}

impl DeletableResource for Asset {}

impl Asset {
    /// Registers an upload.
    ///
    /// # Errors
    ///
    /// See [`LinkedInClient::action`].
    pub async fn register_upload<R, M, E>(
        client: &LinkedInClient<R, M, E>,
        request: &RegisterUploadRequest,
    ) -> Result<AssetUploadTicket, LinkedInError>
    where
        R: WebRequestor,
        M: JsonMapper,
        E: ErrorMapper,
    {
        let body = json!({ "registerUploadRequest": request });
        client.action(Self::PATH, "registerUpload", &body).await
    }

    /// Uploads raw bytes to a registered asset with `PUT`.
    ///
    /// # Errors
    ///
    /// Returns [`LinkedInError::MissingHeader`] if the ticket has no upload
    /// URL, plus the errors of [`LinkedInClient::upload`].
    pub async fn upload<R, M, E>(
        client: &LinkedInClient<R, M, E>,
        ticket: &AssetUploadTicket,
        data: Vec<u8>,
        content_type: &str,
    ) -> Result<UploadResponse, LinkedInError>
    where
        R: WebRequestor,
        M: JsonMapper,
        E: ErrorMapper,
    {
        let url = Self::ticket_url(ticket)?;
        client.upload(url, data, content_type).await
    }

    /// Uploads a file to a registered asset as `multipart/form-data`.
    ///
    /// # Errors
    ///
    /// See [`upload`](Self::upload).
    pub async fn upload_multipart<R, M, E>(
        client: &LinkedInClient<R, M, E>,
        ticket: &AssetUploadTicket,
        attachment: BinaryAttachment,
    ) -> Result<UploadResponse, LinkedInError>
    where
        R: WebRequestor,
        M: JsonMapper,
        E: ErrorMapper,
    {
        let url = Self::ticket_url(ticket)?;
        client.upload_multipart(url, vec![attachment]).await
    }

    fn ticket_url(ticket: &AssetUploadTicket) -> Result<&str, LinkedInError> {
        ticket
            .upload_url()
            .ok_or(LinkedInError::MissingHeader { header: "uploadUrl" })
    }
}
