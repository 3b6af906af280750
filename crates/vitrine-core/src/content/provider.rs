use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use super::models::{Project, SocialLinks, TeamMember};
use crate::config::ApiConfig;
use crate::{Error, Result};

const TEAM_ENDPOINT: &str = "/api/team-members";
const PROJECTS_ENDPOINT: &str = "/api/projects";

/// Error payload the backend returns on non-2xx responses.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Asynchronous source of section content.
///
/// Content resolves before a section mounts; the carousel engine never
/// fetches, retries or caches anything itself.
#[async_trait]
pub trait ContentProvider {
    async fn team(&self) -> Result<Vec<TeamMember>>;
    async fn projects(&self) -> Result<Vec<Project>>;
}

/// HTTP provider against the studio's REST backend.
pub struct ContentClient {
    client: Client,
    base_url: Url,
}

impl ContentClient {
    /// Create a new content client with configuration
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .gzip(true)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        let base_url = Url::parse(&config.base_url)?;

        Ok(Self { client, base_url })
    }

    async fn get_json<D>(&self, endpoint: &str) -> Result<D>
    where
        D: serde::de::DeserializeOwned,
    {
        let url = self.base_url.join(endpoint)?;
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|body| body.message)
                .unwrap_or_else(|_| status.to_string());
            return Err(Error::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl ContentProvider for ContentClient {
    async fn team(&self) -> Result<Vec<TeamMember>> {
        self.get_json(TEAM_ENDPOINT).await
    }

    async fn projects(&self) -> Result<Vec<Project>> {
        self.get_json(PROJECTS_ENDPOINT).await
    }
}

/// Bundled sample content: offline fallback when the backend is
/// unreachable, and fixture data for tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleContent;

#[async_trait]
impl ContentProvider for SampleContent {
    async fn team(&self) -> Result<Vec<TeamMember>> {
        Ok(sample_team())
    }

    async fn projects(&self) -> Result<Vec<Project>> {
        Ok(sample_projects())
    }
}

/// Sample team roster.
pub fn sample_team() -> Vec<TeamMember> {
    let member = |id: &str, name: &str, role: &str, bio: &str, github: &str| TeamMember {
        id: id.to_string(),
        name: name.to_string(),
        role: role.to_string(),
        bio: Some(bio.to_string()),
        avatar_url: None,
        social: SocialLinks {
            github: Some(format!("https://github.com/{}", github)),
            linkedin: None,
            twitter: None,
        },
    };

    vec![
        member(
            "tm-01",
            "Lina Haddad",
            "Lead Engineer",
            "Distributed systems and the odd compiler detour.",
            "linahaddad",
        ),
        member(
            "tm-02",
            "Omar Khalil",
            "Product Designer",
            "Designs interfaces people stop noticing.",
            "omarkhalil",
        ),
        member(
            "tm-03",
            "Sara Mansour",
            "ML Engineer",
            "Takes models out of notebooks and into production.",
            "saramansour",
        ),
        member(
            "tm-04",
            "Karim Aziz",
            "Cloud Architect",
            "Builds platforms that survive region outages.",
            "karimaziz",
        ),
        member(
            "tm-05",
            "Nadia Fares",
            "Frontend Engineer",
            "Obsessive about input latency and type safety.",
            "nadiafares",
        ),
        member(
            "tm-06",
            "Yusuf Rahman",
            "Backend Engineer",
            "APIs, queues and the occasional 3 a.m. migration.",
            "yusufrahman",
        ),
    ]
}

/// Sample portfolio projects.
pub fn sample_projects() -> Vec<Project> {
    let project = |id: &str, title: &str, category: &str, description: &str| Project {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        category: Some(category.to_string()),
        image_url: None,
        live_url: Some(format!("https://vitrine.studio/work/{}", id)),
        repo_url: None,
        created_at: None,
    };

    vec![
        project(
            "pr-01",
            "Freight Exchange",
            "Web Platform",
            "Realtime marketplace matching shippers with regional carriers.",
        ),
        project(
            "pr-02",
            "Clinic Companion",
            "Mobile",
            "Appointment and records app serving forty private clinics.",
        ),
        project(
            "pr-03",
            "Atlas Analytics",
            "Data",
            "Self-serve dashboards over a column store, no SQL required.",
        ),
        project(
            "pr-04",
            "Souq Checkout",
            "E-commerce",
            "Payment orchestration layer handling three PSPs behind one API.",
        ),
        project(
            "pr-05",
            "Fieldwise",
            "IoT",
            "Soil telemetry and irrigation control for large farms.",
        ),
        project(
            "pr-06",
            "Ledgerline",
            "Fintech",
            "Double-entry bookkeeping engine with a plain-language rule DSL.",
        ),
        project(
            "pr-07",
            "Campus Portal",
            "Web Platform",
            "Enrollment, grading and messaging for a 20k-student university.",
        ),
        project(
            "pr-08",
            "Transit Lens",
            "Data",
            "Bus fleet tracking with arrival prediction for city operators.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_rejects_invalid_base_url() {
        let config = ApiConfig {
            base_url: "not a url".to_string(),
            request_timeout_secs: 5,
        };
        assert!(matches!(
            ContentClient::new(&config),
            Err(Error::UrlParse(_))
        ));
    }

    #[test]
    fn test_endpoints_join_against_origin() {
        let base = Url::parse("https://api.vitrine.studio").unwrap();
        assert_eq!(
            base.join(TEAM_ENDPOINT).unwrap().as_str(),
            "https://api.vitrine.studio/api/team-members"
        );
        assert_eq!(
            base.join(PROJECTS_ENDPOINT).unwrap().as_str(),
            "https://api.vitrine.studio/api/projects"
        );
    }

    #[tokio::test]
    async fn test_sample_content_resolves() {
        let provider = SampleContent;
        assert_eq!(provider.team().await.unwrap().len(), 6);
        assert_eq!(provider.projects().await.unwrap().len(), 8);
    }
}
