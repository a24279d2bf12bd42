use std::process::ExitCode;

use reg_core::Report;

pub mod add;
pub mod dispatch;
pub mod next_id;
pub mod render;
pub mod schema;
pub mod validate;

/// Whether a command met its success contract (zero ERROR diagnostics).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    Success,
    Failed,
}

impl Outcome {
    #[must_use]
    pub fn from_report(report: &Report) -> Self {
        if report.is_success() {
            Self::Success
        } else {
            Self::Failed
        }
    }

    #[must_use]
    pub fn exit_code(self) -> ExitCode {
        match self {
            Self::Success => ExitCode::SUCCESS,
            Self::Failed => ExitCode::FAILURE,
        }
    }
}
