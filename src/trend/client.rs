use anyhow::{Context, Result, bail};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use serde::Deserialize;

use super::{TrendBadge, TrendRecord};

const GITHUB_SEARCH_URL: &str = "https://api.github.com/search/repositories";

const USER_AGENT_VALUE: &str = concat!("tech-layer-map/", env!("CARGO_PKG_VERSION"));

// Search keywords that rank better than the bare technology name.
const SEARCH_KEYWORDS: &[(&str, &str)] = &[
    ("AWS", "aws-sdk"),
    ("GCP", "google-cloud"),
    ("Azure", "azure-sdk"),
    ("Docker", "docker"),
    ("Kubernetes", "kubernetes"),
    ("Linux", "linux"),
    ("Kafka", "apache-kafka"),
    ("Airflow", "apache-airflow"),
    ("Scrapy", "scrapy"),
    ("API 연동", "rest-api"),
    ("Logstash", "logstash"),
    ("PostgreSQL", "postgresql"),
    ("MySQL", "mysql"),
    ("MongoDB", "mongodb"),
    ("Redis", "redis"),
    ("Snowflake", "snowflake-connector"),
    ("S3", "aws-s3"),
    ("Pandas", "pandas"),
    ("Spark", "apache-spark"),
    ("dbt", "dbt-core"),
    ("Hadoop", "hadoop"),
    ("Streamlit", "streamlit"),
    ("Tableau", "tableau-api-lib"),
    ("Grafana", "grafana"),
    ("REST API", "fastapi"),
    ("GraphQL", "graphql-js"),
    ("Scikit-learn", "scikit-learn"),
    ("TensorFlow", "tensorflow"),
    ("PyTorch", "pytorch"),
    ("LangChain", "langchain"),
    ("OpenAI API", "openai-python"),
];

fn search_keyword(tech_name: &str) -> String {
    SEARCH_KEYWORDS
        .iter()
        .find(|(name, _)| *name == tech_name)
        .map(|(_, keyword)| (*keyword).to_owned())
        .unwrap_or_else(|| tech_name.to_lowercase())
}

/// Client for the GitHub repository-search API.
pub struct TrendClient {
    client: reqwest::blocking::Client,
}

impl TrendClient {
    pub fn new() -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static("2022-11-28"),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = reqwest::blocking::Client::builder()
            .default_headers(headers)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self { client })
    }

    /// Looks up the most-starred repository for a technology and maps it
    /// into a [`TrendRecord`]. Any failure (transport, status, empty
    /// result set) collapses to `None`; nothing propagates.
    pub fn resolve_trend(&self, tech_name: &str) -> Option<TrendRecord> {
        let keyword = search_keyword(tech_name);

        match self.top_repository(&keyword) {
            Ok(Some(repo)) => {
                tracing::debug!(
                    "trend for {tech_name}: {} with {} stars",
                    repo.full_name,
                    repo.stargazers_count
                );
                Some(record_from(repo))
            }
            Ok(None) => {
                tracing::debug!("no repository matched `{keyword}` for {tech_name}");
                None
            }
            Err(error) => {
                tracing::debug!("trend lookup for {tech_name} failed: {error:#}");
                None
            }
        }
    }

    // `RequestBuilder::query` is feature-gated in reqwest 0.13.
    fn search_request(&self, keyword: &str) -> reqwest::blocking::RequestBuilder {
        self.client
            .get(GITHUB_SEARCH_URL)
            .query(&[("q", keyword), ("sort", "stars"), ("per_page", "1")])
    }

    fn top_repository(&self, keyword: &str) -> Result<Option<RepositoryItem>> {
        let response = self
            .search_request(keyword)
            .send()
            .with_context(|| format!("search request for `{keyword}` failed"))?;

        let status = response.status();
        if !status.is_success() {
            bail!("search for `{keyword}` returned {status}");
        }

        let parsed: SearchResponse = response
            .json()
            .with_context(|| format!("malformed search response for `{keyword}`"))?;

        Ok(parsed.items.into_iter().next())
    }
}

fn record_from(repo: RepositoryItem) -> TrendRecord {
    TrendRecord {
        stars: repo.stargazers_count,
        badge: TrendBadge::for_stars(repo.stargazers_count),
        repo_name: repo.full_name,
        url: repo.html_url,
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<RepositoryItem>,
}

#[derive(Debug, Deserialize)]
struct RepositoryItem {
    full_name: String,
    html_url: String,
    stargazers_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_construction_succeeds() {
        assert!(TrendClient::new().is_ok());
    }

    #[test]
    fn search_request_carries_query_parameters() {
        let client = TrendClient::new().unwrap();
        let request = client.search_request("apache-kafka").build().unwrap();

        assert_eq!(
            request.url().as_str(),
            "https://api.github.com/search/repositories?q=apache-kafka&sort=stars&per_page=1"
        );
    }

    #[test]
    fn keyword_mapping_prefers_static_table() {
        assert_eq!(search_keyword("AWS"), "aws-sdk");
        assert_eq!(search_keyword("Kafka"), "apache-kafka");
        assert_eq!(search_keyword("API 연동"), "rest-api");
        assert_eq!(search_keyword("REST API"), "fastapi");
    }

    #[test]
    fn keyword_falls_back_to_lowercase() {
        assert_eq!(search_keyword("Zig"), "zig");
        assert_eq!(search_keyword("FORTRAN"), "fortran");
    }

    #[test]
    fn search_response_fixture_parses() {
        let fixture = r#"{
            "total_count": 128639,
            "incomplete_results": false,
            "items": [
                {
                    "id": 5152285,
                    "full_name": "apache/kafka",
                    "html_url": "https://github.com/apache/kafka",
                    "stargazers_count": 29467,
                    "watchers_count": 29467,
                    "language": "Java"
                }
            ]
        }"#;

        let parsed: SearchResponse = serde_json::from_str(fixture).unwrap();
        let top = parsed.items.into_iter().next().unwrap();
        assert_eq!(top.full_name, "apache/kafka");
        assert_eq!(top.html_url, "https://github.com/apache/kafka");
        assert_eq!(top.stargazers_count, 29_467);
    }

    #[test]
    fn empty_result_set_parses_to_no_items() {
        let parsed: SearchResponse = serde_json::from_str(r#"{"items": []}"#).unwrap();
        assert!(parsed.items.is_empty());

        let missing: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(missing.items.is_empty());
    }

    #[test]
    fn record_maps_top_match() {
        let record = record_from(RepositoryItem {
            full_name: "pytorch/pytorch".to_owned(),
            html_url: "https://github.com/pytorch/pytorch".to_owned(),
            stargazers_count: 89_000,
        });

        assert_eq!(record.stars, 89_000);
        assert_eq!(record.badge, TrendBadge::Hot);
        assert_eq!(record.repo_name, "pytorch/pytorch");
        assert_eq!(record.url, "https://github.com/pytorch/pytorch");
    }
}
