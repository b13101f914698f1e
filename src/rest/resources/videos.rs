//! Videos (`rest/videos`).
//!
//! Videos upload in parts:
//!
//! 1. [`Video::initialize_upload`] reserves a video URN and returns one
//!    [`UploadInstruction`] per part (videos over 4 MB are split)
//! 2. [`Video::upload_part`] PUTs each byte range and returns its `ETag`
//! 3. [`Video::finalize_upload`] hands the collected `ETag`s back
//!
//! [`Video::upload_video`] runs the whole sequence.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::clients::WebRequestor;
use crate::json::serde_helpers::epoch_millis_option;
use crate::json::JsonMapper;
use crate::rest::resources::images::MediaStatus;
use crate::rest::{DeletableResource, ErrorMapper, LinkedInClient, LinkedInError, LinkedInResource};
use crate::urn::Urn;

const OCTET_STREAM: &str = "application/octet-stream";

/// A video.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    /// The video URN.
    pub id: Urn,
    /// The owning member or organization.
    #[serde(default)]
    pub owner: Option<Urn>,
    /// Processing state.
    pub status: MediaStatus,
    /// Where the video can be downloaded.
    #[serde(default)]
    pub download_url: Option<String>,
    /// When `download_url` stops working.
    #[serde(default, with = "epoch_millis_option")]
    pub download_url_expires_at: Option<DateTime<Utc>>,
    /// Duration in milliseconds.
    #[serde(default)]
    pub duration: Option<u64>,
    /// Thumbnail image URL.
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// Width component of the aspect ratio.
    #[serde(default)]
    pub aspect_ratio_width: Option<f64>,
    /// Height component of the aspect ratio.
    #[serde(default)]
    pub aspect_ratio_height: Option<f64>,
}

/// Options for reserving a video upload.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VideoUploadRequest {
    /// The owning member or organization.
    pub owner: Urn,
    /// Total size of the video.
    pub file_size_bytes: u64,
    /// Request a captions upload URL.
    pub upload_captions: bool,
    /// Request a thumbnail upload URL.
    pub upload_thumbnail: bool,
}

impl VideoUploadRequest {
    /// A request without captions or thumbnail.
    #[must_use]
    pub const fn new(owner: Urn, file_size_bytes: u64) -> Self {
        Self {
            owner,
            file_size_bytes,
            upload_captions: false,
            upload_thumbnail: false,
        }
    }
}

/// The result of reserving a video upload.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VideoUploadTicket {
    /// The reserved video URN.
    pub video: Urn,
    /// One instruction per part.
    pub upload_instructions: Vec<UploadInstruction>,
    /// Token to pass back when finalizing.
    #[serde(default)]
    pub upload_token: String,
    /// When the upload URLs stop working.
    #[serde(default, with = "epoch_millis_option")]
    pub upload_urls_expire_at: Option<DateTime<Utc>>,
    /// Where to PUT a thumbnail, if requested.
    #[serde(default)]
    pub thumbnail_upload_url: Option<String>,
    /// Where to PUT captions, if requested.
    #[serde(default)]
    pub captions_upload_url: Option<String>,
}

/// Where to upload one byte range of a video.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UploadInstruction {
    /// Upload URL for this part.
    pub upload_url: String,
    /// First byte offset, inclusive.
    pub first_byte: u64,
    /// Last byte offset, inclusive.
    pub last_byte: u64,
}

impl UploadInstruction {
    /// Returns this part's slice of `data`, clamped to its length.
    #[must_use]
    pub fn slice<'d>(&self, data: &'d [u8]) -> &'d [u8] {
        let start = usize::try_from(self.first_byte).unwrap_or(usize::MAX).min(data.len());
        let end = usize::try_from(self.last_byte)
            .unwrap_or(usize::MAX)
            .saturating_add(1)
            .min(data.len());
        &data[start..end.max(start)]
    }
}

impl LinkedInResource for Video {
    type Id = Urn;
    const NAME: &'static str = "Video";
    const PATH: &'static str = "rest/videos";
}

impl DeletableResource for Video {}

impl Video {
    /// Reserves a video upload.
    ///
    /// # Errors
    ///
    /// See [`LinkedInClient::action`].
    pub async fn initialize_upload<R, M, E>(
        client: &LinkedInClient<R, M, E>,
        request: &VideoUploadRequest,
    ) -> Result<VideoUploadTicket, LinkedInError>
    where
        R: WebRequestor,
        M: JsonMapper,
        E: ErrorMapper,
    {
        let body = json!({ "initializeUploadRequest": request });
        client.action(Self::PATH, "initializeUpload", &body).await
    }

    /// Uploads one part and returns its `ETag`.
    ///
    /// # Errors
    ///
    /// Returns [`LinkedInError::MissingHeader`] if the response has no
    /// `ETag`, plus the errors of [`LinkedInClient::upload`].
    pub async fn upload_part<R, M, E>(
        client: &LinkedInClient<R, M, E>,
        instruction: &UploadInstruction,
        part: Vec<u8>,
    ) -> Result<String, LinkedInError>
    where
        R: WebRequestor,
        M: JsonMapper,
        E: ErrorMapper,
    {
        client
            .upload(&instruction.upload_url, part, OCTET_STREAM)
            .await?
            .etag
            .ok_or(LinkedInError::MissingHeader { header: "etag" })
    }

    /// Completes an upload with the part `ETag`s in upload order.
    ///
    /// # Errors
    ///
    /// See [`LinkedInClient::action`].
    pub async fn finalize_upload<R, M, E>(
        client: &LinkedInClient<R, M, E>,
        ticket: &VideoUploadTicket,
        uploaded_part_ids: &[String],
    ) -> Result<(), LinkedInError>
    where
        R: WebRequestor,
        M: JsonMapper,
        E: ErrorMapper,
    {
        let body = json!({
            "finalizeUploadRequest": {
                "video": ticket.video,
                "uploadToken": ticket.upload_token,
                "uploadedPartIds": uploaded_part_ids,
            }
        });
        client.action(Self::PATH, "finalizeUpload", &body).await
    }

    /// Reserves, uploads and finalizes a video, returning its URN.
    ///
    /// # Errors
    ///
    /// Returns the first error of any step.
    pub async fn upload_video<R, M, E>(
        client: &LinkedInClient<R, M, E>,
        owner: &Urn,
        data: &[u8],
    ) -> Result<Urn, LinkedInError>
    where
        R: WebRequestor,
        M: JsonMapper,
        E: ErrorMapper,
    {
        let request = VideoUploadRequest::new(owner.clone(), data.len() as u64);
        let ticket = Self::initialize_upload(client, &request).await?;

        let mut etags = Vec::with_capacity(ticket.upload_instructions.len());
        for (index, instruction) in ticket.upload_instructions.iter().enumerate() {
            let part = instruction.slice(data);
            tracing::debug!(
                video = %ticket.video,
                part = index + 1,
                of = ticket.upload_instructions.len(),
                bytes = part.len(),
                "Uploading video part"
            );
            etags.push(Self::upload_part(client, instruction, part.to_vec()).await?);
        }

        Self::finalize_upload(client, &ticket, &etags).await?;
        Ok(ticket.video)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instruction(first: u64, last: u64) -> UploadInstruction {
        UploadInstruction {
            upload_url: "https://upload".to_string(),
            first_byte: first,
            last_byte: last,
        }
    }

    #[test]
    fn test_slice_is_inclusive() {
        let data: Vec<u8> = (0..10).collect();
        assert_eq!(instruction(0, 3).slice(&data), &[0, 1, 2, 3]);
        assert_eq!(instruction(4, 9).slice(&data), &[4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_slice_clamps_out_of_range() {
        let data = [1_u8, 2, 3];
        assert_eq!(instruction(2, 100).slice(&data), &[3]);
        assert!(instruction(5, 9).slice(&data).is_empty());
        assert!(instruction(2, 1).slice(&data).is_empty());
    }

    #[test]
    fn test_ticket_deserializes() {
        let ticket: VideoUploadTicket = serde_json::from_value(json!({
            "uploadUrlsExpireAt": 1_649_813_490_000_i64,
            "video": "urn:li:video:C5505AQH-oV1qvnFtKA",
            "uploadInstructions": [
                {"uploadUrl": "https://www.linkedin.com/dms-uploads/a", "lastByte": 4_194_303, "firstByte": 0},
                {"uploadUrl": "https://www.linkedin.com/dms-uploads/b", "lastByte": 8_388_607, "firstByte": 4_194_304}
            ],
            "uploadToken": "",
            "thumbnailUploadUrl": ""
        }))
        .unwrap();
        assert_eq!(ticket.upload_instructions.len(), 2);
        assert_eq!(ticket.upload_instructions[1].first_byte, 4_194_304);
    }

    #[test]
    fn test_upload_request_serializes() {
        let request = VideoUploadRequest::new(Urn::organization("1"), 1024);
        assert_eq!(
            serde_json::to_value(request).unwrap(),
            json!({
                "owner": "urn:li:organization:1",
                "fileSizeBytes": 1024,
                "uploadCaptions": false,
                "uploadThumbnail": false
            })
        );
    }
}
