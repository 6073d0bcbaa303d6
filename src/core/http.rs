use std::time::Duration;

use reqwest::Client;

use crate::core::{
    Job,
    JobDeckError,
};

pub fn http_client() -> Result<Client, JobDeckError> {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .map_err(|e| JobDeckError::Custom(format!("HTTP client build failed: {e}")))
}

/// Loads the job document from `location`. An `http(s)` location is fetched,
/// anything else is read from disk; both branches share the parse step. A
/// non-success status collapses to the fixed `FailedFetch` message, every
/// other failure surfaces its own.
pub async fn load_jobs(client: &Client, location: &str) -> Result<Vec<Job>, JobDeckError> {
    let body = if location.starts_with("http://") || location.starts_with("https://") {
        let resp = client.get(location).send().await?;
        if !resp.status().is_success() {
            return Err(JobDeckError::FailedFetch);
        }
        resp.text().await?
    } else {
        tokio::fs::read_to_string(location).await?
    };

    parse_jobs(&body)
}

pub fn parse_jobs(body: &str) -> Result<Vec<Job>, JobDeckError> {
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"[{
        "id": 5,
        "company": "Loop Studios",
        "logo": "./images/loop-studios.svg",
        "new": false,
        "featured": false,
        "position": "Software Engineer",
        "role": "Fullstack",
        "level": "Midweight",
        "postedAt": "1mo ago",
        "contract": "Full Time",
        "location": "Worldwide",
        "languages": ["JavaScript", "Ruby"],
        "tools": ["Sass"]
    }]"#;

    #[test]
    fn parses_a_job_array() {
        let jobs = parse_jobs(VALID).expect("valid document should parse");
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].company, "Loop Studios");
    }

    #[test]
    fn malformed_body_is_a_json_error() {
        let err = parse_jobs("{\"not\": \"an array\"}").unwrap_err();
        assert!(matches!(err, JobDeckError::Json(_)));
    }

    #[test]
    fn local_document_loads_without_a_server() {
        let path = std::env::temp_dir().join("jobdeck_http_test.json");
        std::fs::write(&path, VALID).expect("temp write");

        let rt = tokio::runtime::Runtime::new().expect("test runtime");
        let client = http_client().expect("client");
        let jobs =
            rt.block_on(load_jobs(&client, path.to_str().expect("utf8 temp path"))).expect("load");
        assert_eq!(jobs[0].id, 5);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn missing_local_document_is_an_io_error() {
        let rt = tokio::runtime::Runtime::new().expect("test runtime");
        let client = http_client().expect("client");
        let err = rt
            .block_on(load_jobs(&client, "data/does_not_exist.json"))
            .unwrap_err();
        assert!(matches!(err, JobDeckError::Io(_)));
    }
}
