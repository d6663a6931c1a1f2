use reqwest::StatusCode;
use thiserror::Error;

/// Application-level result of one request attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseStatus {
    Complete,
    TransportError,
    Unauthorized,
    BadRequest,
}

impl ResponseStatus {
    pub fn is_complete(&self) -> bool {
        matches!(self, ResponseStatus::Complete)
    }

    /// Message shown to the user for a failed request, `None` on success.
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            ResponseStatus::Complete => None,
            ResponseStatus::TransportError => {
                Some("An error occurred in the request: network is down, failed DNS lookup, etc")
            }
            ResponseStatus::Unauthorized => {
                Some("An error occurred in the request: key is unauthorized")
            }
            ResponseStatus::BadRequest => {
                Some("An error occurred in the request: the request was malformed")
            }
        }
    }
}

impl std::fmt::Display for ResponseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ResponseStatus::Complete => "complete",
            ResponseStatus::TransportError => "transport error",
            ResponseStatus::Unauthorized => "unauthorized",
            ResponseStatus::BadRequest => "bad request",
        };
        f.write_str(s)
    }
}

/// Raw outcome of an HTTP attempt, before classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpOutcome {
    /// No usable response arrived. `status` is whatever the transport
    /// layer reported alongside the failure, if anything.
    TransportFailed { status: Option<StatusCode> },
    Received(StatusCode),
}

/// First match wins: a transport failure is never inspected for a status.
pub fn classify(outcome: &HttpOutcome) -> ResponseStatus {
    match outcome {
        HttpOutcome::TransportFailed { .. } => ResponseStatus::TransportError,
        HttpOutcome::Received(code) if *code == StatusCode::UNAUTHORIZED => {
            ResponseStatus::Unauthorized
        }
        HttpOutcome::Received(code) if *code == StatusCode::BAD_REQUEST => {
            ResponseStatus::BadRequest
        }
        HttpOutcome::Received(_) => ResponseStatus::Complete,
    }
}

/// A failed query in tagged form, see [`crate::WeatherOutcome::into_result`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WeatherError {
    #[error("could not reach the weather service: {0}")]
    Transport(String),

    #[error("the weather service rejected the API key")]
    Unauthorized,

    #[error("the weather service rejected the request as malformed")]
    BadRequest,

    #[error("failed to decode weather payload: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_failure_wins_over_any_status() {
        for status in [
            None,
            Some(StatusCode::OK),
            Some(StatusCode::UNAUTHORIZED),
            Some(StatusCode::BAD_REQUEST),
            Some(StatusCode::INTERNAL_SERVER_ERROR),
        ] {
            let outcome = HttpOutcome::TransportFailed { status };
            assert_eq!(classify(&outcome), ResponseStatus::TransportError);
        }
    }

    #[test]
    fn named_statuses_are_classified() {
        assert_eq!(
            classify(&HttpOutcome::Received(StatusCode::UNAUTHORIZED)),
            ResponseStatus::Unauthorized
        );
        assert_eq!(
            classify(&HttpOutcome::Received(StatusCode::BAD_REQUEST)),
            ResponseStatus::BadRequest
        );
        assert_eq!(classify(&HttpOutcome::Received(StatusCode::OK)), ResponseStatus::Complete);
    }

    #[test]
    fn other_statuses_fall_through_to_complete() {
        for code in [StatusCode::NOT_FOUND, StatusCode::TOO_MANY_REQUESTS, StatusCode::BAD_GATEWAY] {
            assert_eq!(classify(&HttpOutcome::Received(code)), ResponseStatus::Complete);
        }
    }

    #[test]
    fn only_failures_have_user_messages() {
        assert_eq!(ResponseStatus::Complete.user_message(), None);
        assert!(ResponseStatus::TransportError.user_message().unwrap().contains("network is down"));
        assert!(ResponseStatus::Unauthorized.user_message().unwrap().contains("unauthorized"));
        assert!(ResponseStatus::BadRequest.user_message().unwrap().contains("malformed"));
    }
}
