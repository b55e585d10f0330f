//! Converter pure logic functions — no RSX, no signals
//!
//! All state mutation goes through these transitions. `begin_submission` is
//! the single-flight gate: the Submitting check and the move into Submitting
//! happen under one `&mut` borrow, so a second submit while a request is in
//! flight can only ever see `Ignored`.

use shared_types::ConvertRequest;

use super::types::{
    ConvertFailure, Converted, ConverterState, Outcome, Phase, SubmitDecision,
};

pub const EMPTY_INPUT_MESSAGE: &str = "Ayo, drop some text first! 🙄 No cap.";

/// Trim the raw input and reject it when nothing is left.
pub fn validate(raw_text: &str) -> Result<String, ConvertFailure> {
    let trimmed = raw_text.trim();
    if trimmed.is_empty() {
        Err(ConvertFailure::validation(EMPTY_INPUT_MESSAGE))
    } else {
        Ok(trimmed.to_string())
    }
}

/// Gate a submit attempt.
pub fn begin_submission(
    state: &mut ConverterState,
    raw_text: &str,
    slang_level: i64,
) -> SubmitDecision {
    if state.phase == Phase::Submitting {
        return SubmitDecision::Ignored;
    }

    match validate(raw_text) {
        Ok(text) => {
            state.phase = Phase::Submitting;
            state.outcome = Outcome::None;
            SubmitDecision::Start(ConvertRequest::new(text, slang_level))
        }
        Err(failure) => {
            state.phase = Phase::Idle;
            state.outcome = Outcome::Failure(failure);
            SubmitDecision::Rejected
        }
    }
}

/// Apply a successful settle. Only meaningful while Submitting.
pub fn settle_success(state: &mut ConverterState, converted: Converted) {
    if state.phase != Phase::Submitting {
        return;
    }
    state.phase = Phase::Succeeded;
    state.outcome = Outcome::Success(converted);
}

/// Apply a failed settle. Only meaningful while Submitting.
pub fn settle_failure(state: &mut ConverterState, failure: ConvertFailure) {
    if state.phase != Phase::Submitting {
        return;
    }
    state.phase = Phase::Failed;
    state.outcome = Outcome::Failure(failure);
}

/// Reset to a blank converter. Refused while a request is in flight.
pub fn clear_all(state: &mut ConverterState) -> bool {
    if state.phase == Phase::Submitting {
        return false;
    }
    *state = ConverterState::default();
    true
}

pub fn is_busy(state: &ConverterState) -> bool {
    state.phase == Phase::Submitting
}

pub fn output_text(state: &ConverterState) -> Option<&str> {
    match &state.outcome {
        Outcome::Success(converted) => Some(&converted.converted_text),
        _ => None,
    }
}

pub fn error_message(state: &ConverterState) -> Option<&str> {
    match &state.outcome {
        Outcome::Failure(failure) => Some(&failure.message),
        _ => None,
    }
}

pub fn status_text(phase: &Phase) -> &'static str {
    match phase {
        Phase::Idle => "Ready",
        Phase::Submitting => "Converting",
        Phase::Succeeded => "Done",
        Phase::Failed => "Error",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::types::FailureCause;

    fn server_failure(message: &str) -> ConvertFailure {
        ConvertFailure::new(FailureCause::Server, message)
    }

    #[test]
    fn whitespace_input_never_starts_a_request() {
        let mut state = ConverterState::default();

        let decision = begin_submission(&mut state, "   ", 50);

        assert_eq!(decision, SubmitDecision::Rejected);
        assert_eq!(state.phase, Phase::Idle);
        match &state.outcome {
            Outcome::Failure(failure) => {
                assert_eq!(failure.cause, FailureCause::Validation);
                assert_eq!(failure.message, EMPTY_INPUT_MESSAGE);
            }
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[test]
    fn validate_trims_without_transforming() {
        assert_eq!(validate("  hello world  ").unwrap(), "hello world");
        assert_eq!(validate("MiXeD Case").unwrap(), "MiXeD Case");
        assert!(validate("\n\t ").is_err());
    }

    #[test]
    fn accepted_submission_enters_submitting_with_trimmed_text() {
        let mut state = ConverterState::default();

        let decision = begin_submission(&mut state, "  hello  ", 70);

        match decision {
            SubmitDecision::Start(request) => {
                assert_eq!(request.text, "hello");
                assert_eq!(request.slang_level, 70);
            }
            other => panic!("expected start, got {other:?}"),
        }
        assert_eq!(state.phase, Phase::Submitting);
        assert_eq!(state.outcome, Outcome::None);
    }

    #[test]
    fn submit_while_in_flight_is_ignored() {
        let mut state = ConverterState::default();

        let first = begin_submission(&mut state, "hello", 50);
        assert!(matches!(first, SubmitDecision::Start(_)));

        // A second attempt before the first settles must not start anything.
        let second = begin_submission(&mut state, "hello again", 50);
        assert_eq!(second, SubmitDecision::Ignored);
        assert_eq!(state.phase, Phase::Submitting);

        // The first call's settle stays the only authoritative outcome.
        settle_success(
            &mut state,
            Converted {
                converted_text: "HELLO".to_string(),
            },
        );
        assert_eq!(state.phase, Phase::Succeeded);
        assert_eq!(output_text(&state), Some("HELLO"));
    }

    #[test]
    fn settle_holds_exactly_one_outcome() {
        let mut state = ConverterState::default();

        begin_submission(&mut state, "hello", 50);
        settle_success(
            &mut state,
            Converted {
                converted_text: "HELLO".to_string(),
            },
        );
        assert!(output_text(&state).is_some());
        assert!(error_message(&state).is_none());

        begin_submission(&mut state, "hello", 50);
        settle_failure(&mut state, server_failure("boom"));
        assert!(output_text(&state).is_none());
        assert_eq!(error_message(&state), Some("boom"));
    }

    #[test]
    fn settle_outside_submitting_is_dropped() {
        let mut state = ConverterState::default();

        settle_success(
            &mut state,
            Converted {
                converted_text: "stray".to_string(),
            },
        );
        assert_eq!(state.phase, Phase::Idle);
        assert_eq!(state.outcome, Outcome::None);

        settle_failure(&mut state, server_failure("stray"));
        assert_eq!(state.phase, Phase::Idle);
        assert_eq!(state.outcome, Outcome::None);
    }

    #[test]
    fn resubmission_from_terminal_state_clears_stale_outcome_immediately() {
        let mut state = ConverterState::default();

        begin_submission(&mut state, "hello", 50);
        settle_failure(&mut state, server_failure("boom"));
        assert_eq!(state.phase, Phase::Failed);

        let decision = begin_submission(&mut state, "hello", 50);
        assert!(matches!(decision, SubmitDecision::Start(_)));
        assert_eq!(state.phase, Phase::Submitting);
        // Old failure is gone before the new call settles.
        assert_eq!(state.outcome, Outcome::None);
    }

    #[test]
    fn clear_resets_terminal_states_but_not_in_flight() {
        let mut state = ConverterState::default();

        begin_submission(&mut state, "hello", 50);
        assert!(!clear_all(&mut state));
        assert_eq!(state.phase, Phase::Submitting);

        settle_success(
            &mut state,
            Converted {
                converted_text: "HELLO".to_string(),
            },
        );
        assert!(clear_all(&mut state));
        assert_eq!(state, ConverterState::default());

        // A fresh submit after clear behaves like a first call.
        let decision = begin_submission(&mut state, "again", 30);
        assert!(matches!(decision, SubmitDecision::Start(_)));
        assert_eq!(state.phase, Phase::Submitting);
    }

    #[test]
    fn validation_failure_does_not_disturb_a_later_submit() {
        let mut state = ConverterState::default();

        begin_submission(&mut state, "", 50);
        assert_eq!(state.phase, Phase::Idle);

        let decision = begin_submission(&mut state, "ok", 50);
        assert!(matches!(decision, SubmitDecision::Start(_)));
        assert_eq!(state.outcome, Outcome::None);
    }

    #[test]
    fn status_text_covers_every_phase() {
        assert_eq!(status_text(&Phase::Idle), "Ready");
        assert_eq!(status_text(&Phase::Submitting), "Converting");
        assert_eq!(status_text(&Phase::Succeeded), "Done");
        assert_eq!(status_text(&Phase::Failed), "Error");
    }
}
