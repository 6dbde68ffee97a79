use async_trait::async_trait;
use reqwest::Client;
use std::{fmt::Debug, time::Duration};

use crate::{error::Error, model::ObservationSet};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Seam between the pipeline and the network, so tests can stub status and
/// body without a server.
#[async_trait]
pub trait Transport: Send + Sync + Debug {
    /// Fetch the URL and return the raw response body.
    ///
    /// Anything other than HTTP 200 is an error; there is no body to hand
    /// back in that case.
    async fn fetch(&self, url: &str) -> Result<String, Error>;
}

/// Live client over reqwest. One GET per invocation, bounded timeout, no
/// retries.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
}

impl ApiClient {
    pub fn new() -> Result<Self, Error> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { http })
    }
}

#[async_trait]
impl Transport for ApiClient {
    async fn fetch(&self, url: &str) -> Result<String, Error> {
        let res = self.http.get(url).send().await?;

        let status = res.status().as_u16();
        if status != 200 {
            return Err(Error::BadStatus(status));
        }

        Ok(res.text().await?)
    }
}

/// Fetch the composite document once and decode it once.
///
/// There is no partial result: any failure here means nothing gets
/// formatted.
pub async fn retrieve(transport: &dyn Transport, url: &str) -> Result<ObservationSet, Error> {
    let body = transport.fetch(url).await?;
    let observation = serde_json::from_str(&body)?;
    Ok(observation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    enum StubTransport {
        Status(u16),
        Body(&'static str),
    }

    #[async_trait]
    impl Transport for StubTransport {
        async fn fetch(&self, _url: &str) -> Result<String, Error> {
            match self {
                StubTransport::Status(code) => Err(Error::BadStatus(*code)),
                StubTransport::Body(body) => Ok((*body).to_string()),
            }
        }
    }

    #[tokio::test]
    async fn non_200_status_yields_no_observation() {
        let transport = StubTransport::Status(404);
        let err = retrieve(&transport, "http://unused").await.unwrap_err();

        assert!(matches!(err, Error::BadStatus(404)));
        assert_eq!(err.to_string(), "Bad HTTP Status: 404");
    }

    #[tokio::test]
    async fn successful_body_decodes_into_observation() {
        let transport = StubTransport::Body(
            r#"{ "current_observation": { "weather": "Clear", "temperature_string": "70 F (21 C)" } }"#,
        );
        let obs = retrieve(&transport, "http://unused").await.expect("must decode");

        assert_eq!(obs.current_observation.weather, "Clear");
        assert!(obs.alerts.is_empty());
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        let transport = StubTransport::Body("<html>not json</html>");
        let err = retrieve(&transport, "http://unused").await.unwrap_err();

        assert!(matches!(err, Error::Decode(_)));
    }
}
