//! The scenario catalog and the sequential runner.

pub mod network;
pub mod registry;
pub mod resources;
pub mod values;

use crate::error::FaultError;
use crate::report::FailureReport;

/// A single fault demonstration: a name plus the operation that provokes it.
pub struct Scenario {
    name: &'static str,
    attempt: fn() -> Result<(), FaultError>,
}

impl Scenario {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Run the scenario once, turning any failure into a report.
    ///
    /// `None` means the operation unexpectedly succeeded, which is an
    /// anomaly in a catalog where every operation is built to fail.
    pub fn run(&self) -> Option<FailureReport> {
        (self.attempt)()
            .err()
            .map(|error| FailureReport::new(self.name, error))
    }
}

/// The fixed demonstration sequence. Order matters only for readability;
/// no scenario depends on another.
pub fn catalog() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "write-after-close",
            attempt: resources::write_after_close,
        },
        Scenario {
            name: "open-missing-file",
            attempt: resources::open_missing_file,
        },
        Scenario {
            name: "read-past-end",
            attempt: resources::read_past_end,
        },
        Scenario {
            name: "unreachable-endpoint",
            attempt: network::connect_unreachable,
        },
        Scenario {
            name: "unknown-handler",
            attempt: registry::resolve_unknown_handler,
        },
        Scenario {
            name: "divide-by-zero",
            attempt: values::divide_by_zero,
        },
        Scenario {
            name: "absent-reference",
            attempt: values::read_absent_setting,
        },
        Scenario {
            name: "index-out-of-bounds",
            attempt: values::index_past_len,
        },
        Scenario {
            name: "incompatible-cast",
            attempt: values::downcast_mismatch,
        },
        Scenario {
            name: "unordered-input",
            attempt: values::sort_with_missing_label,
        },
        Scenario {
            name: "malformed-number",
            attempt: values::parse_garbage,
        },
    ]
}

/// Run every scenario in order, collecting one report per provoked
/// failure. A scenario's failure never aborts the sequence.
pub fn run_all() -> Vec<FailureReport> {
    catalog().iter().filter_map(Scenario::run).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FaultKind;
    use std::collections::HashSet;

    const EXPECTED_KINDS: [FaultKind; 11] = [
        FaultKind::ResourceClosed,
        FaultKind::ResourceNotFound,
        FaultKind::EndOfData,
        FaultKind::DependencyUnavailable,
        FaultKind::UnitNotFound,
        FaultKind::InvalidArithmetic,
        FaultKind::InvalidReference,
        FaultKind::OutOfRange,
        FaultKind::InvalidConversion,
        FaultKind::InvalidArgument,
        FaultKind::MalformedInput,
    ];

    #[test]
    fn every_scenario_produces_exactly_one_report() {
        let reports = run_all();
        assert_eq!(reports.len(), catalog().len());
    }

    #[test]
    fn reports_follow_the_catalog_order_and_kinds() {
        let kinds: Vec<FaultKind> = run_all().iter().map(FailureReport::kind).collect();
        assert_eq!(kinds, EXPECTED_KINDS);
    }

    #[test]
    fn no_scenario_emits_the_generic_io_fallback() {
        for report in run_all() {
            assert_ne!(report.kind(), FaultKind::Io, "{}", report.scenario());
        }
    }

    #[test]
    fn scenario_names_are_unique() {
        let catalog = catalog();
        let names: HashSet<&str> = catalog.iter().map(Scenario::name).collect();
        assert_eq!(names.len(), catalog.len());
    }

    #[test]
    fn running_the_sequence_twice_is_idempotent() {
        let first: Vec<FaultKind> = run_all().iter().map(FailureReport::kind).collect();
        let second: Vec<FaultKind> = run_all().iter().map(FailureReport::kind).collect();
        assert_eq!(first, second);
    }
}
