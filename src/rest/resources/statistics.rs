//! Organization statistics.
//!
//! Three finders, each lifetime by default or time-bound when given
//! [`TimeIntervals`]:
//!
//! - [`ShareStatistics`]: `rest/organizationalEntityShareStatistics`
//! - [`FollowerStatistics`]: `rest/organizationalEntityFollowerStatistics`
//! - [`PageStatistics`]: `rest/organizationPageStatistics`

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::clients::WebRequestor;
use crate::connection::Connection;
use crate::json::JsonMapper;
use crate::rest::resources::common::{TimeIntervals, TimeRange};
use crate::rest::{ErrorMapper, LinkedInClient, LinkedInError, Parameters};
use crate::urn::Urn;

const SHARE_STATISTICS_PATH: &str = "rest/organizationalEntityShareStatistics";
const FOLLOWER_STATISTICS_PATH: &str = "rest/organizationalEntityFollowerStatistics";
const PAGE_STATISTICS_PATH: &str = "rest/organizationPageStatistics";

fn with_intervals(params: Parameters, intervals: Option<&TimeIntervals>) -> Parameters {
    match intervals {
        Some(intervals) => params.raw("timeIntervals", intervals.to_restli()),
        None => params,
    }
}

/// Engagement on an organization's shares.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShareStatistics {
    /// The organization.
    pub organizational_entity: Urn,
    /// The share, for per-share statistics.
    #[serde(default)]
    pub share: Option<Urn>,
    /// The UGC post, for per-post statistics.
    #[serde(default)]
    pub ugc_post: Option<Urn>,
    /// The bucket, for time-bound statistics.
    #[serde(default)]
    pub time_range: Option<TimeRange>,
    /// The counts.
    pub total_share_statistics: ShareCounts,
}

/// Share engagement counts.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShareCounts {
    /// Impressions.
    #[serde(default)]
    pub impression_count: u64,
    /// Unique impressions.
    #[serde(default)]
    pub unique_impressions_count: u64,
    /// Clicks.
    #[serde(default)]
    pub click_count: u64,
    /// Likes.
    #[serde(default)]
    pub like_count: u64,
    /// Comments.
    #[serde(default)]
    pub comment_count: u64,
    /// Shares.
    #[serde(default)]
    pub share_count: u64,
    /// Engagement rate.
    #[serde(default)]
    pub engagement: f64,
}

impl ShareStatistics {
    /// Fetches share statistics for an organization.
    ///
    /// `shares` restricts the result to particular shares.
    ///
    /// # Errors
    ///
    /// See [`LinkedInClient::fetch_connection`].
    pub async fn find<R, M, E>(
        client: &LinkedInClient<R, M, E>,
        organization: &Urn,
        intervals: Option<&TimeIntervals>,
        shares: &[Urn],
    ) -> Result<Connection<Self>, LinkedInError>
    where
        R: WebRequestor,
        M: JsonMapper,
        E: ErrorMapper,
    {
        let mut params = Parameters::new()
            .with("q", "organizationalEntity")
            .urn("organizationalEntity", organization);
        params = with_intervals(params, intervals);
        if !shares.is_empty() {
            params = params.list("shares", shares);
        }
        client
            .fetch_connection(SHARE_STATISTICS_PATH, &params)
            .await
    }
}

/// Follower statistics.
///
/// Lifetime statistics break followers down by facet; time-bound statistics
/// report gains per bucket.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FollowerStatistics {
    /// The organization.
    #[serde(default)]
    pub organizational_entity: Option<Urn>,
    /// The bucket, for time-bound statistics.
    #[serde(default)]
    pub time_range: Option<TimeRange>,
    /// Gains in the bucket, for time-bound statistics.
    #[serde(default)]
    pub follower_gains: Option<FollowerGains>,
    /// Followers by association type (employees).
    #[serde(default)]
    pub follower_counts_by_association_type: Vec<FacetCount>,
    /// Followers by seniority.
    #[serde(default)]
    pub follower_counts_by_seniority: Vec<FacetCount>,
    /// Followers by industry.
    #[serde(default)]
    pub follower_counts_by_industry: Vec<FacetCount>,
    /// Followers by job function.
    #[serde(default)]
    pub follower_counts_by_function: Vec<FacetCount>,
    /// Followers by company size.
    #[serde(default)]
    pub follower_counts_by_staff_count_range: Vec<FacetCount>,
    /// Followers by geography.
    #[serde(default, alias = "followerCountsByGeo")]
    pub follower_counts_by_geo_country: Vec<FacetCount>,
}

/// Organic and paid follower counts for one facet value.
///
/// The facet key (`seniority`, `industry`, `geo`, ...) differs per
/// breakdown and is kept in `facet`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FacetCount {
    /// The counts.
    pub follower_counts: FollowerCounts,
    /// The facet key and value, e.g. `{"seniority": "urn:li:seniority:3"}`.
    #[serde(flatten)]
    pub facet: HashMap<String, serde_json::Value>,
}

/// Follower counts.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FollowerCounts {
    /// Organic followers.
    #[serde(default)]
    pub organic_follower_count: u64,
    /// Followers from paid campaigns.
    #[serde(default)]
    pub paid_follower_count: u64,
}

/// Follower gains in a bucket.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FollowerGains {
    /// New organic followers.
    #[serde(default)]
    pub organic_follower_gain: i64,
    /// New followers from paid campaigns.
    #[serde(default)]
    pub paid_follower_gain: i64,
}

impl FollowerStatistics {
    /// Fetches follower statistics for an organization.
    ///
    /// # Errors
    ///
    /// See [`LinkedInClient::fetch_connection`].
    pub async fn find<R, M, E>(
        client: &LinkedInClient<R, M, E>,
        organization: &Urn,
        intervals: Option<&TimeIntervals>,
    ) -> Result<Connection<Self>, LinkedInError>
    where
        R: WebRequestor,
        M: JsonMapper,
        E: ErrorMapper,
    {
        let params = Parameters::new()
            .with("q", "organizationalEntity")
            .urn("organizationalEntity", organization);
        let params = with_intervals(params, intervals);
        client
            .fetch_connection(FOLLOWER_STATISTICS_PATH, &params)
            .await
    }
}

/// Page view and click statistics.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageStatistics {
    /// The organization.
    #[serde(default)]
    pub organization: Option<Urn>,
    /// The bucket, for time-bound statistics.
    #[serde(default)]
    pub time_range: Option<TimeRange>,
    /// The counts.
    #[serde(default)]
    pub total_page_statistics: PageCounts,
}

/// Views per page and clicks per button.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageCounts {
    /// Views keyed by page, e.g. `allPageViews`, `careersPageViews`.
    #[serde(default)]
    pub views: HashMap<String, PageViews>,
    /// Click counts, grouped by page.
    #[serde(default)]
    pub clicks: serde_json::Value,
}

impl PageCounts {
    /// Returns the views across all pages.
    #[must_use]
    pub fn all_page_views(&self) -> Option<u64> {
        self.views.get("allPageViews").and_then(|v| v.page_views)
    }
}

/// View counts for one page.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageViews {
    /// Views.
    #[serde(default)]
    pub page_views: Option<u64>,
    /// Unique viewers.
    #[serde(default)]
    pub unique_page_views: Option<u64>,
}

impl PageStatistics {
    /// Fetches page statistics for an organization.
    ///
    /// # Errors
    ///
    /// See [`LinkedInClient::fetch_connection`].
    pub async fn find<R, M, E>(
        client: &LinkedInClient<R, M, E>,
        organization: &Urn,
        intervals: Option<&TimeIntervals>,
    ) -> Result<Connection<Self>, LinkedInError>
    where
        R: WebRequestor,
        M: JsonMapper,
        E: ErrorMapper,
    {
        let params = Parameters::new()
            .with("q", "organization")
            .urn("organization", organization);
        let params = with_intervals(params, intervals);
        client.fetch_connection(PAGE_STATISTICS_PATH, &params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::resources::common::TimeGranularity;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    #[test]
    fn test_time_intervals_are_sent_raw() {
        let intervals = TimeIntervals::new(
            Utc.timestamp_millis_opt(1_000).unwrap(),
            Some(Utc.timestamp_millis_opt(2_000).unwrap()),
            TimeGranularity::Day,
        );
        let params = with_intervals(
            Parameters::new()
                .with("q", "organizationalEntity")
                .urn("organizationalEntity", &Urn::organization("1")),
            Some(&intervals),
        );
        assert_eq!(
            params.to_query_string(),
            "q=organizationalEntity&organizationalEntity=urn%3Ali%3Aorganization%3A1\
             &timeIntervals=(timeRange:(start:1000,end:2000),timeGranularityType:DAY)"
        );
    }

    #[test]
    fn test_share_statistics_deserialize() {
        let stats: ShareStatistics = serde_json::from_value(json!({
            "totalShareStatistics": {
                "uniqueImpressionsCount": 11,
                "shareCount": 2,
                "engagement": 0.25,
                "clickCount": 3,
                "likeCount": 4,
                "impressionCount": 20,
                "commentCount": 1
            },
            "organizationalEntity": "urn:li:organization:2414183",
            "timeRange": {"start": 1_451_606_400_000_i64, "end": 1_451_692_800_000_i64}
        }))
        .unwrap();
        assert_eq!(stats.total_share_statistics.impression_count, 20);
        assert!(stats.time_range.unwrap().end.is_some());
    }

    #[test]
    fn test_follower_facets_keep_their_key() {
        let stats: FollowerStatistics = serde_json::from_value(json!({
            "followerCountsBySeniority": [{
                "followerCounts": {"organicFollowerCount": 85, "paidFollowerCount": 2},
                "seniority": "urn:li:seniority:3"
            }],
            "organizationalEntity": "urn:li:organization:2414183"
        }))
        .unwrap();
        let facet = &stats.follower_counts_by_seniority[0];
        assert_eq!(facet.follower_counts.organic_follower_count, 85);
        assert_eq!(facet.facet["seniority"], "urn:li:seniority:3");
    }

    #[test]
    fn test_page_statistics_all_page_views() {
        let stats: PageStatistics = serde_json::from_value(json!({
            "totalPageStatistics": {
                "views": {
                    "allPageViews": {"pageViews": 120, "uniquePageViews": 40},
                    "careersPageViews": {"pageViews": 5}
                },
                "clicks": {}
            },
            "organization": "urn:li:organization:2414183"
        }))
        .unwrap();
        assert_eq!(stats.total_page_statistics.all_page_views(), Some(120));
    }
}
