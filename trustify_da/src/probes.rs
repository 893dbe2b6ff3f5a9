use reqwest::StatusCode;
use serde_json::Value;

/// Check whether the input is a valid JSON object or array.
///
/// Scalar JSON documents are rejected; the backend only ever responds
/// with objects or arrays.
pub fn is_json_valid(input: &str) -> bool {
    matches!(serde_json::from_str::<Value>(input), Ok(Value::Object(_) | Value::Array(_)))
}

/// Check whether a URL responds with HTTP 200.
///
/// Invalid URLs, transport failures, and non-200 statuses all report the
/// URL as unreachable.
pub fn url_exists(url: &str) -> bool {
    match reqwest::blocking::get(url) {
        Ok(response) => response.status() == StatusCode::OK,
        Err(err) => {
            log::warn!("URL {url:?} is not reachable: {err}");
            false
        },
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    /// Run the blocking probe off the async test runtime.
    async fn probe(url: String) -> bool {
        tokio::task::spawn_blocking(move || url_exists(&url)).await.unwrap()
    }

    #[test]
    fn json_objects_and_arrays_are_valid() {
        assert!(is_json_valid(r#"{"a":1}"#));
        assert!(is_json_valid("[1,2,3]"));
        assert!(is_json_valid("{}"));
    }

    #[test]
    fn json_scalars_and_garbage_are_invalid() {
        assert!(!is_json_valid("not json"));
        assert!(!is_json_valid(""));
        assert!(!is_json_valid("42"));
        assert!(!is_json_valid("\"quoted\""));
        assert!(!is_json_valid(r#"{"a":1"#));
    }

    #[tokio::test]
    async fn url_exists_on_200() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&mock_server)
            .await;

        assert!(probe(mock_server.uri()).await);
    }

    #[tokio::test]
    async fn url_does_not_exist_on_error_status() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        assert!(!probe(mock_server.uri()).await);
    }

    #[tokio::test]
    async fn unreachable_hosts_are_swallowed() {
        let mock_server = MockServer::start().await;
        let uri = mock_server.uri();
        drop(mock_server);

        assert!(!probe(uri).await);
        assert!(!probe("not a url".into()).await);
    }
}
