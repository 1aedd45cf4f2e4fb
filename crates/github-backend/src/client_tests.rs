//! Unit tests for GitHubClient using wiremock

#[cfg(test)]
mod tests {
    use crate::client::GitHubClient;
    use crate::error::GitHubError;
    use std::time::Duration;
    use survey_core::{RepositorySource, SearchQuery, SearchRequest, SurveyError};
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// Helper to create a mock search item
    fn mock_repo(name: &str, stars: u64) -> serde_json::Value {
        serde_json::json!({
            "id": stars,
            "name": name,
            "full_name": format!("acme/{}", name),
            "html_url": format!("https://github.com/acme/{}", name),
            "description": "UML modeling tool",
            "stargazers_count": stars,
            "forks": 12,
            "forks_count": 12,
            "open_issues": 3,
            "open_issues_count": 3,
            "language": "Java",
            "license": {"key": "mit", "name": "MIT License", "spdx_id": "MIT", "url": null},
            "topics": ["uml", "modeling"],
            "pushed_at": "2024-09-01T10:00:00Z",
            "created_at": "2016-02-01T08:30:00Z",
            "owner": {"login": "acme", "id": 1}
        })
    }

    fn page_body(items: Vec<serde_json::Value>) -> serde_json::Value {
        serde_json::json!({
            "total_count": items.len(),
            "incomplete_results": false,
            "items": items
        })
    }

    fn request(max_pages: usize) -> SearchRequest {
        let now = "2025-03-15T12:00:00Z".parse().unwrap();
        let mut request = SearchRequest::new(SearchQuery::active_since("uml", 50, 365, now));
        request.max_pages = max_pages;
        request
    }

    fn client(server: &MockServer) -> GitHubClient {
        GitHubClient::with_base_url(&server.uri(), None, Duration::from_secs(5))
    }

    async fn mount_page(server: &MockServer, page: &str, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path("/search/repositories"))
            .and(query_param("page", page))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_search_page_sends_query_parameters() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search/repositories"))
            .and(query_param("q", "uml stars:>=50 pushed:>=2024-03-15"))
            .and(query_param("sort", "stars"))
            .and(query_param("order", "desc"))
            .and(query_param("per_page", "100"))
            .and(query_param("page", "1"))
            .and(header("Accept", "application/vnd.github+json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_body(vec![
                mock_repo("plantuml", 10000),
                mock_repo("umlet", 1800),
            ])))
            .mount(&mock_server)
            .await;

        let result = client(&mock_server)
            .search_repositories_page(&request(10), 1)
            .unwrap();

        assert_eq!(result.items.len(), 2);
        assert_eq!(result.items[0].name, "plantuml");
        assert_eq!(result.items[1].stargazers_count, 1800);
        assert_eq!(result.items[0].license.as_ref().unwrap().name, "MIT License");
    }

    #[tokio::test]
    async fn test_search_sends_token_when_configured() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search/repositories"))
            .and(header("Authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_body(vec![])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = GitHubClient::with_base_url(
            &mock_server.uri(),
            Some("test-token"),
            Duration::from_secs(5),
        );
        let result = client.search_repositories_page(&request(1), 1).unwrap();
        assert!(result.items.is_empty());
    }

    #[tokio::test]
    async fn test_search_stops_at_first_empty_page() {
        let mock_server = MockServer::start().await;

        mount_page(&mock_server, "1", page_body(vec![mock_repo("a", 900), mock_repo("b", 800)])).await;
        mount_page(&mock_server, "2", page_body(vec![mock_repo("c", 700)])).await;
        mount_page(&mock_server, "3", page_body(vec![])).await;
        Mock::given(method("GET"))
            .and(path("/search/repositories"))
            .and(query_param("page", "4"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_body(vec![mock_repo("d", 600)])))
            .expect(0)
            .mount(&mock_server)
            .await;

        let records = client(&mock_server)
            .search_repositories(&request(10))
            .unwrap();

        let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert_eq!(records[0].language.as_deref(), Some("Java"));
        assert_eq!(records[0].topics, vec!["uml", "modeling"]);
    }

    #[tokio::test]
    async fn test_search_respects_max_pages() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search/repositories"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_body(vec![mock_repo("same", 100)])))
            .expect(3)
            .mount(&mock_server)
            .await;

        let records = client(&mock_server)
            .search_repositories(&request(3))
            .unwrap();

        // Duplicates across pages are passed through
        assert_eq!(records.len(), 3);
        assert!(records.iter().all(|r| r.name == "same"));
    }

    #[tokio::test]
    async fn test_error_on_first_page_stops_fetch() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search/repositories"))
            .and(query_param("page", "1"))
            .respond_with(
                ResponseTemplate::new(500).set_body_json(serde_json::json!({"message": "Server Error"})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/search/repositories"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_body(vec![mock_repo("b", 1)])))
            .expect(0)
            .mount(&mock_server)
            .await;

        let err = client(&mock_server)
            .search_repositories(&request(10))
            .unwrap_err();

        match err {
            SurveyError::Source { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "Server Error");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_error_on_later_page_drops_partial_results() {
        let mock_server = MockServer::start().await;

        mount_page(&mock_server, "1", page_body(vec![mock_repo("a", 900)])).await;
        Mock::given(method("GET"))
            .and(path("/search/repositories"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(422).set_body_string(""))
            .mount(&mock_server)
            .await;

        let result = client(&mock_server).search_repositories(&request(10));
        assert!(matches!(
            result,
            Err(SurveyError::Source { status: 422, .. })
        ));
    }

    #[tokio::test]
    async fn test_non_200_success_status_is_failure() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search/repositories"))
            .respond_with(ResponseTemplate::new(202).set_body_json(page_body(vec![mock_repo("a", 1)])))
            .mount(&mock_server)
            .await;

        let err = client(&mock_server)
            .search_repositories_page(&request(1), 1)
            .unwrap_err();
        assert!(matches!(err, GitHubError::Api { status: 202, .. }));
    }

    #[tokio::test]
    async fn test_rate_limit_detected() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search/repositories"))
            .respond_with(
                ResponseTemplate::new(403)
                    .insert_header("x-ratelimit-remaining", "0")
                    .set_body_json(serde_json::json!({"message": "API rate limit exceeded"})),
            )
            .mount(&mock_server)
            .await;

        let err = client(&mock_server)
            .search_repositories_page(&request(1), 1)
            .unwrap_err();
        assert!(matches!(err, GitHubError::RateLimited));

        let err = client(&mock_server)
            .search_repositories(&request(1))
            .unwrap_err();
        assert!(matches!(err, SurveyError::Source { status: 403, .. }));
    }

    #[tokio::test]
    async fn test_unauthorized() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search/repositories"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&mock_server)
            .await;

        let err = client(&mock_server)
            .search_repositories_page(&request(1), 1)
            .unwrap_err();
        assert!(matches!(err, GitHubError::Unauthorized));
    }

    #[tokio::test]
    async fn test_body_without_items_is_parse_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search/repositories"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"total_count": 0})))
            .mount(&mock_server)
            .await;

        let err = client(&mock_server)
            .search_repositories(&request(1))
            .unwrap_err();
        assert!(matches!(err, SurveyError::Parse(_)));
    }

    #[tokio::test]
    async fn test_slow_response_times_out() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search/repositories"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(page_body(vec![mock_repo("a", 1)]))
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&mock_server)
            .await;

        let client =
            GitHubClient::with_base_url(&mock_server.uri(), None, Duration::from_millis(200));
        let err = client.search_repositories(&request(1)).unwrap_err();
        assert!(matches!(err, SurveyError::Transport(_)));
    }

    #[test]
    fn test_connection_refused_is_transport_error() {
        let client = GitHubClient::with_base_url("http://127.0.0.1:1", None, Duration::from_secs(2));
        let err = client.search_repositories(&request(1)).unwrap_err();
        assert!(matches!(err, SurveyError::Transport(_)));
    }

    #[test]
    fn test_source_name() {
        assert_eq!(GitHubClient::new().name(), "GitHub API");
        assert_eq!(GitHubClient::new().base_url(), "https://api.github.com");
    }
}
