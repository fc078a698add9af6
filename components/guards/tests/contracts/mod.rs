//! Contract tests for the guards component
//!
//! These suites pin the externally observable properties of the catalogue:
//! disjointness of the sign/zero/finiteness families, detector round trips,
//! probe robustness against prototype-only fakes, and the concrete
//! classification scenarios.

mod cross_realm_tests;
mod disjointness_tests;
mod numeric_tests;
mod probe_robustness_tests;
mod scenario_tests;
mod tag_detector_tests;
