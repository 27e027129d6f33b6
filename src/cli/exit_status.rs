use std::process::ExitCode;

/// Exit status for the CLI.
///
/// - `Success` (0): run completed.
/// - `Error` (2): run aborted on a contract violation or internal error
///   (missing arguments, config error, parse error).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
