//! Organization access control (`rest/organizationAcls`).

use serde::{Deserialize, Serialize};

use crate::clients::WebRequestor;
use crate::connection::Connection;
use crate::json::JsonMapper;
use crate::rest::{ErrorMapper, LinkedInClient, LinkedInError, Parameters};
use crate::urn::Urn;

const PATH: &str = "rest/organizationAcls";

/// A member's role on an organization page.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationAcl {
    /// The member holding the role.
    pub role_assignee: Urn,
    /// The organization.
    pub organization: Urn,
    /// The role.
    pub role: OrganizationRole,
    /// Approval state.
    pub state: AclState,
}

/// A page role.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrganizationRole {
    /// Full page administrator.
    Administrator,
    /// Content administrator.
    ContentAdministrator,
    /// Curator.
    Curator,
    /// Analyst.
    Analyst,
    /// Paid media poster.
    DirectSponsoredContentPoster,
    /// Recruiting poster.
    RecruitingPoster,
    /// Lead generation forms manager.
    LeadGenFormsManager,
    /// A value this crate does not know yet.
    #[serde(other)]
    Unknown,
}

impl OrganizationRole {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Administrator => "ADMINISTRATOR",
            Self::ContentAdministrator => "CONTENT_ADMINISTRATOR",
            Self::Curator => "CURATOR",
            Self::Analyst => "ANALYST",
            Self::DirectSponsoredContentPoster => "DIRECT_SPONSORED_CONTENT_POSTER",
            Self::RecruitingPoster => "RECRUITING_POSTER",
            Self::LeadGenFormsManager => "LEAD_GEN_FORMS_MANAGER",
            Self::Unknown => "UNKNOWN",
        }
    }
}

/// Approval state of a role.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AclState {
    /// Granted.
    Approved,
    /// Awaiting approval.
    Requested,
    /// Rejected.
    Rejected,
    /// Revoked.
    Revoked,
    /// A value this crate does not know yet.
    #[serde(other)]
    Unknown,
}

impl AclState {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Approved => "APPROVED",
            Self::Requested => "REQUESTED",
            Self::Rejected => "REJECTED",
            Self::Revoked => "REVOKED",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl OrganizationAcl {
    /// Lists the organizations the authenticated member has a role on.
    ///
    /// # Errors
    ///
    /// See [`LinkedInClient::fetch_connection`].
    pub async fn find_by_role_assignee<R, M, E>(
        client: &LinkedInClient<R, M, E>,
        role: Option<OrganizationRole>,
        state: Option<AclState>,
    ) -> Result<Connection<Self>, LinkedInError>
    where
        R: WebRequestor,
        M: JsonMapper,
        E: ErrorMapper,
    {
        let params = Parameters::new()
            .with("q", "roleAssignee")
            .with_opt("role", role.map(OrganizationRole::as_str))
            .with_opt("state", state.map(AclState::as_str));
        client.fetch_connection(PATH, &params).await
    }

    /// Lists the members with a role on `organization`.
    ///
    /// # Errors
    ///
    /// See [`LinkedInClient::fetch_connection`].
    pub async fn find_by_organization<R, M, E>(
        client: &LinkedInClient<R, M, E>,
        organization: &Urn,
        role: Option<OrganizationRole>,
        state: Option<AclState>,
    ) -> Result<Connection<Self>, LinkedInError>
    where
        R: WebRequestor,
        M: JsonMapper,
        E: ErrorMapper,
    {
        let params = Parameters::new()
            .with("q", "organization")
            .urn("organization", organization)
            .with_opt("role", role.map(OrganizationRole::as_str))
            .with_opt("state", state.map(AclState::as_str));
        client.fetch_connection(PATH, &params).await
    }
}
