//! Error side channel for failures the view-model recovers from.

use crate::repo::StoreError;
use log::error;
use std::fmt::{Display, Formatter};
use std::sync::{Arc, Mutex, PoisonError};

/// Where in the view-model lifecycle a store error happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorContext {
    /// `list_all` during construction.
    InitialLoad,
    /// `append` during `add()`.
    Add,
}

impl Display for ErrorContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InitialLoad => f.write_str("initial_load"),
            Self::Add => f.write_str("add"),
        }
    }
}

/// Receives store errors that are not propagated to the view surface.
pub trait ErrorReporter {
    fn report(&self, context: ErrorContext, err: &StoreError);
}

/// Default reporter: one structured `error` log line per failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogErrorReporter;

impl ErrorReporter for LogErrorReporter {
    fn report(&self, context: ErrorContext, err: &StoreError) {
        error!("event=viewmodel_error module=viewmodel status=error context={context} error={err}");
    }
}

/// Reported failure kept by `RecordingErrorReporter`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportedError {
    pub context: ErrorContext,
    pub message: String,
}

/// Logs like `LogErrorReporter` and also keeps every report.
///
/// Clones share the same buffer, so a caller can keep one clone and inject another.
#[derive(Debug, Clone, Default)]
pub struct RecordingErrorReporter {
    reports: Arc<Mutex<Vec<ReportedError>>>,
}

impl RecordingErrorReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> Vec<ReportedError> {
        self.reports
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_empty(&self) -> bool {
        self.reports
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }
}

impl ErrorReporter for RecordingErrorReporter {
    fn report(&self, context: ErrorContext, err: &StoreError) {
        LogErrorReporter.report(context, err);
        self.reports
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(ReportedError {
                context,
                message: err.to_string(),
            });
    }
}
