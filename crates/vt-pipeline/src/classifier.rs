//! Client for the external claim/evidence classification service.
//!
//! Wire format:
//!
//! ```text
//! POST {"prompts": [["<claim>", "<evidence>"], ...]}
//! ->   {"status": "ok", "predictions": [2, 0, ...]}
//!  |   {"status": "error", "message": "..."}
//! ```
//!
//! `predictions[i]` labels `prompts[i]`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use vt_config::ClassifierConfig;

use crate::error::ClassificationError;

/// Labels a batch of `(claim, evidence)` pairs in one round trip.
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Raw integer predictions, positionally matching `prompts`.
    ///
    /// # Errors
    ///
    /// Returns [`ClassificationError`] if the request fails or the service
    /// reports an error.
    async fn predict(&self, prompts: &[(String, String)]) -> Result<Vec<i64>, ClassificationError>;
}

#[derive(Serialize)]
struct PredictionRequest<'a> {
    prompts: &'a [(String, String)],
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
enum ResponseStatus {
    Ok,
    Error,
}

#[derive(Debug, Deserialize)]
struct PredictionResponse {
    status: ResponseStatus,
    #[serde(default)]
    predictions: Option<Vec<i64>>,
    #[serde(default)]
    message: Option<String>,
}

impl PredictionResponse {
    fn into_predictions(self) -> Result<Vec<i64>, ClassificationError> {
        match self.status {
            ResponseStatus::Error => Err(ClassificationError::Service {
                message: self
                    .message
                    .unwrap_or_else(|| String::from("no message provided")),
            }),
            ResponseStatus::Ok => self.predictions.ok_or(ClassificationError::MissingPredictions),
        }
    }
}

/// HTTP implementation of [`Classifier`].
pub struct HttpClassifier {
    http: reqwest::Client,
    url: String,
}

impl HttpClassifier {
    /// # Errors
    ///
    /// Returns [`ClassificationError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &ClassifierConfig) -> Result<Self, ClassificationError> {
        let http = reqwest::Client::builder()
            .user_agent("verita/0.1")
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            url: config.url.clone(),
        })
    }
}

#[async_trait]
impl Classifier for HttpClassifier {
    async fn predict(&self, prompts: &[(String, String)]) -> Result<Vec<i64>, ClassificationError> {
        tracing::debug!(url = %self.url, prompts = prompts.len(), "submitting classification batch");

        let resp = self
            .http
            .post(&self.url)
            .json(&PredictionRequest { prompts })
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;
        decode_response(status, body)
    }
}

/// Interpret one service reply.
///
/// Error payloads may arrive with a non-2xx status; the service's own
/// message wins when the body parses. An `ok` body is trusted only on 2xx.
fn decode_response(status: StatusCode, body: String) -> Result<Vec<i64>, ClassificationError> {
    match serde_json::from_str::<PredictionResponse>(&body) {
        Ok(parsed) if status.is_success() || matches!(parsed.status, ResponseStatus::Error) => {
            parsed.into_predictions()
        }
        Ok(_) | Err(_) if !status.is_success() => Err(ClassificationError::Api {
            status: status.as_u16(),
            message: body,
        }),
        Err(e) => Err(ClassificationError::Service {
            message: format!("malformed response: {e}"),
        }),
        Ok(_) => unreachable!("parsed bodies are handled by the arms above"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_pairs_as_arrays() {
        let prompts = vec![
            ("Mars is a planet".to_string(), "Mars is a planet".to_string()),
            ("Mars is a planet".to_string(), "Mars is not a planet".to_string()),
        ];
        let json = serde_json::to_value(PredictionRequest { prompts: &prompts }).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "prompts": [
                    ["Mars is a planet", "Mars is a planet"],
                    ["Mars is a planet", "Mars is not a planet"]
                ]
            })
        );
    }

    #[test]
    fn ok_response_yields_predictions() {
        let resp: PredictionResponse =
            serde_json::from_str(r#"{"status": "ok", "predictions": [2, 0, 1]}"#).unwrap();
        assert_eq!(resp.into_predictions().unwrap(), vec![2, 0, 1]);
    }

    #[test]
    fn error_response_carries_message() {
        let resp: PredictionResponse =
            serde_json::from_str(r#"{"status": "error", "message": "model not loaded"}"#).unwrap();
        match resp.into_predictions().unwrap_err() {
            ClassificationError::Service { message } => assert_eq!(message, "model not loaded"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn ok_without_predictions_is_an_error() {
        let resp: PredictionResponse = serde_json::from_str(r#"{"status": "ok"}"#).unwrap();
        assert!(matches!(
            resp.into_predictions(),
            Err(ClassificationError::MissingPredictions)
        ));
    }

    #[test]
    fn unknown_status_does_not_parse() {
        assert!(serde_json::from_str::<PredictionResponse>(r#"{"status": "pending"}"#).is_err());
    }

    #[test]
    fn ok_body_with_failure_status_is_an_api_error() {
        let body = r#"{"status": "ok", "predictions": [2]}"#.to_string();
        match decode_response(StatusCode::BAD_GATEWAY, body.clone()).unwrap_err() {
            ClassificationError::Api { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, body);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn error_body_with_failure_status_keeps_service_message() {
        let body = r#"{"status": "error", "message": "model not loaded"}"#.to_string();
        assert!(matches!(
            decode_response(StatusCode::SERVICE_UNAVAILABLE, body),
            Err(ClassificationError::Service { message }) if message == "model not loaded"
        ));
    }

    #[test]
    fn unparsable_bodies_depend_on_status() {
        assert!(matches!(
            decode_response(StatusCode::INTERNAL_SERVER_ERROR, "oops".into()),
            Err(ClassificationError::Api { status: 500, .. })
        ));
        assert!(matches!(
            decode_response(StatusCode::OK, "oops".into()),
            Err(ClassificationError::Service { .. })
        ));
        assert_eq!(
            decode_response(StatusCode::OK, r#"{"status": "ok", "predictions": [1]}"#.into())
                .unwrap(),
            vec![1]
        );
    }

    #[tokio::test]
    #[ignore] // requires a running classification service
    async fn live_predict() {
        let classifier = HttpClassifier::new(&ClassifierConfig::default()).unwrap();
        let prompts = vec![(
            "Mars is a planet".to_string(),
            "Mars is the fourth planet from the Sun".to_string(),
        )];
        let predictions = classifier.predict(&prompts).await.unwrap();
        println!("predictions: {predictions:?}");
        assert_eq!(predictions.len(), 1);
    }
}
