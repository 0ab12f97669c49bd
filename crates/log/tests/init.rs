//! Global subscriber installation.
//!
//! Kept to a single test: the global dispatcher can only be set once per
//! process.

use contact_log::{Config, LogError, info};

#[test]
fn installs_once_then_reports_already_initialized() {
    let guard = contact_log::init_with(Config::test()).expect("first install succeeds");
    assert_eq!(guard.filter(), Some("trace"));
    info!(target: "contact_log::tests", "logger is live");

    let second = contact_log::init();
    assert!(matches!(second, Err(LogError::AlreadyInitialized(_))));

    let auto = contact_log::auto_init().expect("auto_init tolerates an installed logger");
    assert_eq!(auto.filter(), None);
}
