//! Typed LinkedIn endpoint groups.
//!
//! Each group pairs data types mirroring LinkedIn's JSON with thin async
//! operations over [`LinkedInClient`](crate::LinkedInClient). Keyed reads
//! come from [`LinkedInResource`](crate::rest::LinkedInResource); the rest
//! are associated functions on the entity type.
//!
//! | Group | Path | Types |
//! |-------|------|-------|
//! | posts | `rest/posts` | [`Post`] |
//! | shares | `v2/shares` | [`Share`] |
//! | UGC posts | `v2/ugcPosts` | [`UgcPost`] |
//! | images | `rest/images` | [`Image`] |
//! | videos | `rest/videos` | [`Video`] |
//! | assets | `v2/assets` | [`Asset`] |
//! | organizations | `rest/organizations` | [`Organization`] |
//! | page roles | `rest/organizationAcls` | [`OrganizationAcl`] |
//! | statistics | `rest/organizational*Statistics` | [`ShareStatistics`], [`FollowerStatistics`], [`PageStatistics`] |
//! | social actions | `rest/socialActions` | [`SocialActions`], [`Comment`], [`Like`] |
//! | reactions | `rest/reactions` | [`Reaction`] |
//! | profile | `v2/userinfo`, `v2/me` | [`UserInfo`], [`Me`] |
//!
//! Enums carry an `Unknown` variant so values LinkedIn adds later still
//! deserialize.

mod assets;
mod common;
mod images;
mod organization_acls;
mod organizations;
mod posts;
pub mod profile;
mod reactions;
mod shares;
mod social_actions;
mod statistics;
mod ugc_posts;
mod videos;

pub use assets::{
    Asset, AssetRecipe, AssetUploadTicket, RegisterUploadRequest, ServiceRelationship,
    UploadHttpRequest, FEEDSHARE_IMAGE, FEEDSHARE_VIDEO,
};
pub use common::{
    AuditStamp, LifecycleState, Locale, MultiLocaleString, TimeGranularity, TimeIntervals,
    TimeRange, Visibility,
};
pub use images::{Image, ImageUploadTicket, MediaStatus};
pub use organization_acls::{AclState, OrganizationAcl, OrganizationRole};
pub use organizations::{Address, FoundedOn, Logo, Organization, OrganizationLocation};
pub use posts::{
    Article, Distribution, Media, MultiImage, Post, PostContent, PostUpdate, ReshareContext,
};
pub use profile::{Me, ProfilePicture, UserInfo, UserLocale};
pub use reactions::{Reaction, ReactionType};
pub use shares::{ContentEntity, Share, ShareContent, ShareText, Thumbnail};
pub use social_actions::{
    Comment, CommentMessage, CommentsSummary, Like, LikesSummary, SocialActions,
};
pub use statistics::{
    FacetCount, FollowerCounts, FollowerGains, FollowerStatistics, PageCounts, PageStatistics,
    PageViews, ShareCounts, ShareStatistics,
};
pub use ugc_posts::{
    SpecificContent, TextValue, UgcMedia, UgcPost, UgcShareContent, UgcVisibility,
};
pub use videos::{UploadInstruction, Video, VideoUploadRequest, VideoUploadTicket};
