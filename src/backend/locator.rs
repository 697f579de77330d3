//! Backend URL validation and endpoint derivation.

use url::Url;

use super::error::BackendError;
use super::models::{ResponseId, Verdict};

/// Validated base URL of the rating backend.
///
/// Endpoints are derived from the base by appending well-known path
/// segments, so a backend mounted under a path prefix keeps working.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendLocator {
    base: Url,
}

impl BackendLocator {
    /// Parses and validates a backend base URL.
    ///
    /// The URL must use the `http` or `https` scheme and include a host.
    /// A trailing slash on the path is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::InvalidUrl`] when parsing fails, the scheme
    /// is not HTTP, or the URL has no host.
    pub fn parse(input: &str) -> Result<Self, BackendError> {
        let parsed =
            Url::parse(input).map_err(|error| BackendError::InvalidUrl(error.to_string()))?;

        match parsed.scheme() {
            "http" | "https" => {}
            other => {
                return Err(BackendError::InvalidUrl(format!(
                    "unsupported scheme `{other}`, expected http or https"
                )));
            }
        }

        if parsed.host_str().is_none() {
            return Err(BackendError::InvalidUrl(
                "backend URL must include a host".to_owned(),
            ));
        }

        Ok(Self { base: parsed })
    }

    /// The validated base URL.
    #[must_use]
    pub const fn base(&self) -> &Url {
        &self.base
    }

    fn trimmed_base(&self) -> &str {
        self.base.as_str().trim_end_matches('/')
    }

    /// URL of the response collection endpoint.
    #[must_use]
    pub fn responses_url(&self) -> String {
        format!("{}/responses", self.trimmed_base())
    }

    /// URL of the rating endpoint for one response and verdict.
    ///
    /// The identifier and signed score are embedded in the path, matching
    /// the backend route `/rate/{id}/{score}`.
    #[must_use]
    pub fn rate_url(&self, id: &ResponseId, verdict: Verdict) -> String {
        format!(
            "{}/rate/{id}/{score}",
            self.trimmed_base(),
            score = verdict.score()
        )
    }

    /// URL of the batch-generation trigger endpoint.
    #[must_use]
    pub fn run_batch_url(&self) -> String {
        format!("{}/run-batch", self.trimmed_base())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::https("https://rater.example.com")]
    #[case::http("http://localhost:8000")]
    #[case::trailing_slash("http://localhost:8000/")]
    #[case::path_prefix("https://rater.example.com/eval/")]
    fn parse_accepts_http_urls(#[case] input: &str) {
        let locator = BackendLocator::parse(input).expect("URL should parse");
        assert!(locator.responses_url().ends_with("/responses"));
    }

    #[rstest]
    #[case::not_a_url("not a url")]
    #[case::bad_scheme("ftp://rater.example.com")]
    #[case::no_host("http://")]
    fn parse_rejects_invalid_urls(#[case] input: &str) {
        let error = BackendLocator::parse(input).expect_err("URL should be rejected");
        assert!(matches!(error, BackendError::InvalidUrl(_)), "{error:?}");
    }

    #[rstest]
    fn endpoints_preserve_path_prefix() {
        let locator =
            BackendLocator::parse("https://rater.example.com/eval/").expect("URL should parse");

        assert_eq!(
            locator.responses_url(),
            "https://rater.example.com/eval/responses"
        );
        assert_eq!(
            locator.run_batch_url(),
            "https://rater.example.com/eval/run-batch"
        );
    }

    #[rstest]
    #[case::approve(Verdict::Approve, "http://localhost:8000/rate/7/1")]
    #[case::reject(Verdict::Reject, "http://localhost:8000/rate/7/-1")]
    fn rate_url_embeds_signed_score(#[case] verdict: Verdict, #[case] expected: &str) {
        let locator = BackendLocator::parse("http://localhost:8000").expect("URL should parse");
        assert_eq!(locator.rate_url(&ResponseId::Number(7), verdict), expected);
    }

    #[rstest]
    fn rate_url_round_trips_text_identifiers() {
        let locator = BackendLocator::parse("http://localhost:8000").expect("URL should parse");
        assert_eq!(
            locator.rate_url(&ResponseId::Text("resp-41".to_owned()), Verdict::Approve),
            "http://localhost:8000/rate/resp-41/1"
        );
    }
}
