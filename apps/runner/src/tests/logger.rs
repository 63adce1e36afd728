// Unit tests for logger initialization

use crate::logger;

/// **VALUE**: Verifies repeated initialization is a warning, not a
/// crash - the runner and any embedding test can both call it.
#[test]
fn given_repeated_initialization_when_called_then_second_is_noop() {
    let dir = tempfile::tempdir().expect("temp dir");

    assert!(logger::initialize(dir.path()).is_ok());
    assert!(logger::initialize(dir.path()).is_ok());
}
