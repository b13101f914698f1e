//! The authenticated member (`v2/userinfo`, `v2/me`).

use serde::{Deserialize, Serialize};

use crate::clients::WebRequestor;
use crate::json::JsonMapper;
use crate::rest::resources::common::Locale;
use crate::rest::{ErrorMapper, LinkedInClient, LinkedInError, Parameter};
use crate::urn::Urn;

const USER_INFO_PATH: &str = "v2/userinfo";
const ME_PATH: &str = "v2/me";

/// OpenID Connect claims about the member.
///
/// Requires the `openid` scope, plus `profile` and `email` for the
/// corresponding claims.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserInfo {
    /// The member id.
    pub sub: String,
    /// Full name.
    #[serde(default)]
    pub name: Option<String>,
    /// First name.
    #[serde(default)]
    pub given_name: Option<String>,
    /// Last name.
    #[serde(default)]
    pub family_name: Option<String>,
    /// Profile picture URL.
    #[serde(default)]
    pub picture: Option<String>,
    /// Primary email address.
    #[serde(default)]
    pub email: Option<String>,
    /// Whether the email is verified.
    #[serde(default)]
    pub email_verified: Option<bool>,
    /// Preferred locale.
    #[serde(default)]
    pub locale: Option<UserLocale>,
}

/// A locale sent either as `"en_US"` or as an object.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum UserLocale {
    /// `language_COUNTRY`.
    Tag(String),
    /// Separate parts.
    Parts(Locale),
}

impl UserInfo {
    /// Returns the member URN.
    #[must_use]
    pub fn urn(&self) -> Urn {
        Urn::person(self.sub.clone())
    }
}

/// The lite profile of the member.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Me {
    /// The member id.
    pub id: String,
    /// First name in the default locale.
    #[serde(default)]
    pub localized_first_name: Option<String>,
    /// Last name in the default locale.
    #[serde(default)]
    pub localized_last_name: Option<String>,
    /// Headline in the default locale.
    #[serde(default)]
    pub localized_headline: Option<String>,
    /// The public profile slug.
    #[serde(default)]
    pub vanity_name: Option<String>,
    /// Profile picture.
    #[serde(default)]
    pub profile_picture: Option<ProfilePicture>,
}

/// Profile picture reference.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePicture {
    /// The displayed image asset.
    #[serde(default)]
    pub display_image: Option<Urn>,
}

impl Me {
    /// Returns the member URN.
    #[must_use]
    pub fn urn(&self) -> Urn {
        Urn::person(self.id.clone())
    }
}

/// Fetches the OpenID Connect claims of the authenticated member.
///
/// # Errors
///
/// See [`LinkedInClient::fetch_object`].
pub async fn user_info<R, M, E>(client: &LinkedInClient<R, M, E>) -> Result<UserInfo, LinkedInError>
where
    R: WebRequestor,
    M: JsonMapper,
    E: ErrorMapper,
{
    client.fetch_object(USER_INFO_PATH, &[]).await
}

/// Fetches the lite profile of the authenticated member.
///
/// `params` may carry a `projection`.
///
/// # Errors
///
/// See [`LinkedInClient::fetch_object`].
pub async fn me<R, M, E>(
    client: &LinkedInClient<R, M, E>,
    params: &[Parameter],
) -> Result<Me, LinkedInError>
where
    R: WebRequestor,
    M: JsonMapper,
    E: ErrorMapper,
{
    client.fetch_object(ME_PATH, params).await
}
