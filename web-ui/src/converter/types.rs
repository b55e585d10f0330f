//! Converter data types

use shared_types::ConvertRequest;

/// Where the current conversion attempt sits in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Nothing submitted yet, or everything cleared
    #[default]
    Idle,
    /// Exactly one request in flight
    Submitting,
    /// Last request settled with output
    Succeeded,
    /// Last request settled with a failure
    Failed,
}

/// Why a conversion attempt failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureCause {
    /// Rejected locally before any network call
    Validation,
    /// No response obtained from the service
    Transport,
    /// Non-2xx status, with or without a structured error body
    Server,
    /// 2xx response whose body is missing the converted text
    MalformedResponse,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertFailure {
    pub cause: FailureCause,
    pub message: String,
}

impl ConvertFailure {
    pub fn new(cause: FailureCause, message: impl Into<String>) -> Self {
        Self {
            cause,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(FailureCause::Validation, message)
    }
}

/// Latest successful conversion output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Converted {
    pub converted_text: String,
}

/// Latest settled outcome. Holds at most one of result/failure; entering
/// Submitting resets it to None so stale output never overlaps a fresh
/// loading indicator.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Outcome {
    #[default]
    None,
    Success(Converted),
    Failure(ConvertFailure),
}

/// Full converter state consumed by the view. Written only through the
/// transition functions in `logic`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConverterState {
    pub phase: Phase,
    pub outcome: Outcome,
}

/// What the controller decided to do with a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitDecision {
    /// A request is already in flight; the attempt is silently dropped
    Ignored,
    /// Input failed validation; the failure is recorded, no request starts
    Rejected,
    /// The attempt was accepted; the caller owns the request to send
    Start(ConvertRequest),
}
