//! Organizations (`rest/organizations`, `rest/organizationsLookup`,
//! `rest/networkSizes`).
//!
//! # Example
//!
//! ```rust,ignore
//! use linkedin_api::rest::resources::Organization;
//! use linkedin_api::rest::LinkedInResource;
//!
//! let org = Organization::find(&client, &2_414_183, &[]).await?;
//! let by_vanity = Organization::find_by_vanity_name(&client, "linkedin").await?;
//! let followers = Organization::follower_count(&client, &org.urn().unwrap()).await?;
//! ```

use serde::{Deserialize, Serialize};

use crate::clients::WebRequestor;
use crate::connection::Connection;
use crate::json::serde_helpers::lenient_i64_option;
use crate::json::JsonMapper;
use crate::rest::resources::common::{Locale, MultiLocaleString};
use crate::rest::{
    build_path, BatchResult, ErrorMapper, LinkedInClient, LinkedInError, LinkedInResource,
    Parameter, Parameters,
};
use crate::urn::Urn;

const LOOKUP_PATH: &str = "rest/organizationsLookup";
const NETWORK_SIZES_PATH: &str = "rest/networkSizes/{urn}";

/// An organization (company or school).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    /// The numeric organization id.
    #[serde(default, deserialize_with = "lenient_i64_option")]
    pub id: Option<i64>,
    /// The URL slug, as in `linkedin.com/company/<vanity>`.
    #[serde(default)]
    pub vanity_name: Option<String>,
    /// Name in the default locale.
    #[serde(default)]
    pub localized_name: Option<String>,
    /// Name in every locale.
    #[serde(default)]
    pub name: Option<MultiLocaleString>,
    /// Description in the default locale.
    #[serde(default)]
    pub localized_description: Option<String>,
    /// Website in the default locale.
    #[serde(default)]
    pub localized_website: Option<String>,
    /// The default locale.
    #[serde(default)]
    pub default_locale: Option<Locale>,
    /// `PUBLIC_COMPANY`, `EDUCATIONAL`, `SELF_EMPLOYED`, ...
    #[serde(default)]
    pub organization_type: Option<String>,
    /// `COMPANY`, `SCHOOL`, ...
    #[serde(default)]
    pub primary_organization_type: Option<String>,
    /// Employee count band, e.g. `SIZE_10001_OR_MORE`.
    #[serde(default)]
    pub staff_count_range: Option<String>,
    /// Industry URNs.
    #[serde(default)]
    pub industries: Vec<Urn>,
    /// Specialties in the default locale.
    #[serde(default)]
    pub localized_specialties: Vec<String>,
    /// Offices.
    #[serde(default)]
    pub locations: Vec<OrganizationLocation>,
    /// Logo asset URNs.
    #[serde(default)]
    pub logo_v2: Option<Logo>,
    /// Founding date.
    #[serde(default)]
    pub founded_on: Option<FoundedOn>,
    /// `ACTIVE` or `INACTIVE`.
    #[serde(default)]
    pub entity_status: Option<String>,
    /// Opaque version for optimistic updates.
    #[serde(default)]
    pub version_tag: Option<String>,
}

impl Organization {
    /// Returns the organization URN, if the id is known.
    #[must_use]
    pub fn urn(&self) -> Option<Urn> {
        self.id.map(|id| Urn::organization(id.to_string()))
    }
}

/// An office.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationLocation {
    /// `HEADQUARTERS` or `OTHER`.
    #[serde(default)]
    pub location_type: Option<String>,
    /// Postal address.
    #[serde(default)]
    pub address: Option<Address>,
    /// Office description.
    #[serde(default)]
    pub description: Option<MultiLocaleString>,
}

/// A postal address.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// First street line.
    #[serde(default)]
    pub line1: Option<String>,
    /// Second street line.
    #[serde(default)]
    pub line2: Option<String>,
    /// City.
    #[serde(default)]
    pub city: Option<String>,
    /// State or region.
    #[serde(default)]
    pub geographic_area: Option<String>,
    /// Postal code.
    #[serde(default)]
    pub postal_code: Option<String>,
    /// ISO 3166 country code.
    #[serde(default)]
    pub country: Option<String>,
}

/// Logo asset URNs.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Logo {
    /// Cropped logo.
    #[serde(default)]
    pub cropped: Option<Urn>,
    /// Original upload.
    #[serde(default)]
    pub original: Option<Urn>,
}

/// A founding date.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FoundedOn {
    /// Year.
    #[serde(default)]
    pub year: Option<i32>,
    /// Month, 1 to 12.
    #[serde(default)]
    pub month: Option<u32>,
    /// Day of month.
    #[serde(default)]
    pub day: Option<u32>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct NetworkSize {
    first_degree_size: u64,
}

impl LinkedInResource for Organization {
    type Id = u64;
    const NAME: &'static str = "Organization";
    const PATH: &'static str = "rest/organizations";

    /// Fetches several organizations through `organizationsLookup`, which
    /// also returns organizations the caller does not administer.
    async fn batch_get<R, M, E>(
        client: &LinkedInClient<R, M, E>,
        ids: &[u64],
        params: &[Parameter],
    ) -> Result<BatchResult<Self>, LinkedInError>
    where
        R: WebRequestor,
        M: JsonMapper,
        E: ErrorMapper,
    {
        client.batch_get(LOOKUP_PATH, ids, params).await
    }
}

impl Organization {
    /// Finds organizations by vanity name.
    ///
    /// # Errors
    ///
    /// See [`LinkedInClient::fetch_connection`].
    pub async fn find_by_vanity_name<R, M, E>(
        client: &LinkedInClient<R, M, E>,
        vanity_name: &str,
    ) -> Result<Connection<Self>, LinkedInError>
    where
        R: WebRequestor,
        M: JsonMapper,
        E: ErrorMapper,
    {
        let params = Parameters::new()
            .with("q", "vanityName")
            .with("vanityName", vanity_name);
        client.fetch_connection(Self::PATH, &params).await
    }

    /// Finds organizations that own an email domain.
    ///
    /// # Errors
    ///
    /// See [`LinkedInClient::fetch_connection`].
    pub async fn find_by_email_domain<R, M, E>(
        client: &LinkedInClient<R, M, E>,
        email_domain: &str,
    ) -> Result<Connection<Self>, LinkedInError>
    where
        R: WebRequestor,
        M: JsonMapper,
        E: ErrorMapper,
    {
        let params = Parameters::new()
            .with("q", "emailDomain")
            .with("emailDomain", email_domain);
        client.fetch_connection(Self::PATH, &params).await
    }

    /// Returns the number of members following an organization.
    ///
    /// # Errors
    ///
    /// See [`LinkedInClient::fetch_object`].
    pub async fn follower_count<R, M, E>(
        client: &LinkedInClient<R, M, E>,
        organization: &Urn,
    ) -> Result<u64, LinkedInError>
    where
        R: WebRequestor,
        M: JsonMapper,
        E: ErrorMapper,
    {
        let path = build_path(NETWORK_SIZES_PATH, &[("urn", organization)]);
        let params = [Parameter::with("edgeType", "COMPANY_FOLLOWED_BY_MEMBER")];
        let size: NetworkSize = client.fetch_object(&path, &params).await?;
        Ok(size.first_degree_size)
    }
}
