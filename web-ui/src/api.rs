//! API client for the conversion service

use gloo_net::http::Request;
use shared_types::{ApiErrorBody, ConvertRequest, ConvertResponse};
use std::sync::OnceLock;

use crate::converter::types::{ConvertFailure, Converted, FailureCause};

/// Generic message for failures where no response was obtained.
pub const TRANSPORT_ERROR_MESSAGE: &str = "Something went sideways. Try again?";

/// Get the API base URL based on current environment
/// - In development (localhost): use http://localhost:5001
/// - In production: use same origin (API serves static files)
fn get_api_base() -> String {
    // Get the current hostname from the browser
    let hostname = web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_default();

    // If running on localhost, point to the API server on port 5001
    if hostname == "localhost" || hostname == "127.0.0.1" {
        "http://localhost:5001".to_string()
    } else {
        // In production, use same origin
        "".to_string()
    }
}

/// Lazy-static equivalent for WASM - computed at first use
static API_BASE_CACHE: OnceLock<String> = OnceLock::new();

/// Get the cached API base URL
pub fn api_base() -> &'static str {
    API_BASE_CACHE.get_or_init(get_api_base).as_str()
}

/// Map a settled HTTP exchange to the conversion outcome. Pure so the
/// failure taxonomy is testable without a browser.
pub fn interpret_response(status: u16, body: &str) -> Result<Converted, ConvertFailure> {
    if (200..300).contains(&status) {
        match serde_json::from_str::<ConvertResponse>(body) {
            Ok(resp) => Ok(Converted {
                converted_text: resp.converted_text,
            }),
            Err(_) => Err(ConvertFailure::new(
                FailureCause::MalformedResponse,
                "The service sent back something unusable. Try again?",
            )),
        }
    } else {
        // Prefer the server-provided message; fall back to the status code.
        match serde_json::from_str::<ApiErrorBody>(body) {
            Ok(err) => Err(ConvertFailure::new(FailureCause::Server, err.error)),
            Err(_) => Err(ConvertFailure::new(
                FailureCause::Server,
                format!("HTTP error! Status: {status}"),
            )),
        }
    }
}

/// Issue one conversion call and map the settle into result-or-failure.
/// No retry and no timeout beyond what the browser transport provides.
pub async fn convert_text(request: &ConvertRequest) -> Result<Converted, ConvertFailure> {
    let url = format!("{}/api/convert", api_base());

    let response = Request::post(&url)
        .json(request)
        .map_err(|e| {
            ConvertFailure::new(
                FailureCause::Transport,
                format!("Failed to serialize request: {e}"),
            )
        })?
        .send()
        .await
        .map_err(|_| ConvertFailure::new(FailureCause::Transport, TRANSPORT_ERROR_MESSAGE))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|_| ConvertFailure::new(FailureCause::Transport, TRANSPORT_ERROR_MESSAGE))?;

    interpret_response(status, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_body_with_converted_text_succeeds() {
        let result = interpret_response(200, r#"{"converted_text":"HELLO"}"#).unwrap();
        assert_eq!(result.converted_text, "HELLO");
    }

    #[test]
    fn ok_body_without_converted_text_is_malformed() {
        let failure = interpret_response(200, "{}").unwrap_err();
        assert_eq!(failure.cause, FailureCause::MalformedResponse);
    }

    #[test]
    fn ok_body_that_is_not_json_is_malformed() {
        let failure = interpret_response(200, "<html>oops</html>").unwrap_err();
        assert_eq!(failure.cause, FailureCause::MalformedResponse);
    }

    #[test]
    fn error_body_message_is_surfaced() {
        let failure = interpret_response(500, r#"{"error":"boom"}"#).unwrap_err();
        assert_eq!(failure.cause, FailureCause::Server);
        assert!(failure.message.contains("boom"));
    }

    #[test]
    fn unparsable_error_body_falls_back_to_status() {
        let failure = interpret_response(502, "Bad Gateway").unwrap_err();
        assert_eq!(failure.cause, FailureCause::Server);
        assert!(failure.message.contains("502"));
    }

    mod lifecycle_round_trip {
        //! Interpreter output fed through the controller transitions, the
        //! same path the view takes when a call settles.

        use super::*;
        use crate::converter::logic::{
            begin_submission, error_message, output_text, settle_failure, settle_success,
        };
        use crate::converter::types::{ConverterState, Phase, SubmitDecision};

        #[test]
        fn uppercase_echo_lands_in_succeeded() {
            let mut state = ConverterState::default();

            let decision = begin_submission(&mut state, "hello", 50);
            assert!(matches!(decision, SubmitDecision::Start(_)));

            match interpret_response(200, r#"{"converted_text":"HELLO"}"#) {
                Ok(converted) => settle_success(&mut state, converted),
                Err(failure) => settle_failure(&mut state, failure),
            }

            assert_eq!(state.phase, Phase::Succeeded);
            assert_eq!(output_text(&state), Some("HELLO"));
            assert!(error_message(&state).is_none());
        }

        #[test]
        fn server_error_body_lands_in_failed_with_message() {
            let mut state = ConverterState::default();

            begin_submission(&mut state, "ok", 50);
            match interpret_response(500, r#"{"error":"boom"}"#) {
                Ok(converted) => settle_success(&mut state, converted),
                Err(failure) => settle_failure(&mut state, failure),
            }

            assert_eq!(state.phase, Phase::Failed);
            assert!(error_message(&state).unwrap().contains("boom"));
            assert!(output_text(&state).is_none());
        }

        #[test]
        fn empty_success_body_lands_in_failed_as_malformed() {
            let mut state = ConverterState::default();

            begin_submission(&mut state, "ok", 50);
            match interpret_response(200, "{}") {
                Ok(converted) => settle_success(&mut state, converted),
                Err(failure) => settle_failure(&mut state, failure),
            }

            assert_eq!(state.phase, Phase::Failed);
            assert!(output_text(&state).is_none());
        }
    }
}
