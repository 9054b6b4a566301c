/// Requests to the decomposition service
use gloo_net::http::Request;

use crate::config::InspectorConfig;
use crate::decomposition::RawOutcome;
use crate::fragment::encode_component;

/// Reserved path on the same origin that a literal query must not hit.
const ROBOTS: &str = "robots.txt";
const ROBOTS_SUBSTITUTE: &str = "Robots.txt";

/// URL for inspecting `query`, with the query as one encoded path segment.
pub fn request_url(config: &InspectorConfig, query: &str) -> String {
    let segment = if query == ROBOTS { ROBOTS_SUBSTITUTE } else { query };
    config.request_url(&encode_component(segment))
}

/// Issue one GET and report what came back, without interpreting it.
///
/// A body that cannot be read counts as no response.
pub async fn fetch(url: &str) -> RawOutcome {
    let response = match Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
    {
        Ok(response) => response,
        Err(e) => {
            log::debug!("Request to {} failed: {}", url, e);
            return RawOutcome::NoResponse;
        }
    };

    let status = response.status();
    match response.text().await {
        Ok(body) => RawOutcome::Response { status, body },
        Err(e) => {
            log::debug!("Reading response from {} failed: {}", url, e);
            RawOutcome::NoResponse
        }
    }
}
