//! The report line emitted for each caught failure.

use std::error::Error as _;
use std::fmt;

use crate::error::{FaultError, FaultKind};

/// One caught failure: which scenario produced it and how it was classified.
///
/// Reports are ephemeral: produced by [`Scenario::run`], printed, dropped.
///
/// [`Scenario::run`]: crate::scenarios::Scenario::run
#[derive(Debug)]
pub struct FailureReport {
    scenario: &'static str,
    error: FaultError,
}

impl FailureReport {
    pub(crate) fn new(scenario: &'static str, error: FaultError) -> Self {
        FailureReport { scenario, error }
    }

    pub fn scenario(&self) -> &'static str {
        self.scenario
    }

    pub fn kind(&self) -> FaultKind {
        self.error.kind()
    }

    pub fn error(&self) -> &FaultError {
        &self.error
    }
}

/// `Caught <kind>: <description>`, plus ` - <native detail>` when the
/// classified error wraps a native one.
impl fmt::Display for FailureReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Caught {}: {}", self.error.kind(), self.error)?;
        if let Some(source) = self.error.source() {
            write!(f, " - {source}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn report_line_includes_kind_and_native_detail() {
        let err = io::Error::new(io::ErrorKind::UnexpectedEof, "failed to fill whole buffer");
        let report = FailureReport::new("read-past-end", FaultError::classify_io(err));
        let line = report.to_string();
        assert!(line.starts_with("Caught EndOfData: "));
        assert!(line.ends_with(" - failed to fill whole buffer"));
    }

    #[test]
    fn sourceless_report_line_has_no_detail_segment() {
        let report = FailureReport::new(
            "divide-by-zero",
            FaultError::InvalidArithmetic {
                operation: "10 / 0".to_string(),
            },
        );
        assert_eq!(
            report.to_string(),
            "Caught InvalidArithmetic: arithmetic operation '10 / 0' is undefined"
        );
    }

    #[test]
    fn report_remembers_its_scenario() {
        let report = FailureReport::new(
            "unknown-handler",
            FaultError::UnitNotFound {
                name: "transliterate".to_string(),
            },
        );
        assert_eq!(report.scenario(), "unknown-handler");
        assert_eq!(report.kind(), FaultKind::UnitNotFound);
    }
}
