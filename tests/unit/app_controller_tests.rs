/*!
 * Tests for the application controller
 */

use std::fs;
use anyhow::Result;
use cardshift::app_config::{Config, LogLevel};
use cardshift::app_controller::Controller;
use crate::common;

/// Test that the test constructor produces an initialized controller
#[test]
fn test_new_for_test_shouldBeInitialized() -> Result<()> {
    let controller = Controller::new_for_test()?;
    assert!(controller.is_initialized());
    Ok(())
}

/// Test that an empty target list is reported as uninitialized
#[test]
fn test_run_withEmptyTargets_shouldFail() -> Result<()> {
    let config = Config {
        targets: Vec::new(),
        log_level: LogLevel::Info,
    };
    let controller = Controller::with_config(config)?;

    assert!(!controller.is_initialized());
    assert!(controller.run().is_err());

    Ok(())
}

/// Test that restyling a missing target fails
#[test]
fn test_restyle_file_withMissingTarget_shouldFail() -> Result<()> {
    let controller = Controller::new_for_test()?;
    let temp_dir = common::create_temp_dir()?;

    let missing = temp_dir.path().join("missing.html");
    assert!(controller.restyle_file(&missing).is_err());

    Ok(())
}

/// Test that a document without matches is rewritten verbatim
#[test]
fn test_restyle_file_withNoMatches_shouldLeaveContentUnchanged() -> Result<()> {
    let controller = Controller::new_for_test()?;
    let temp_dir = common::create_temp_dir()?;

    let content = common::wrap_page("<p>Sin ponencias</p>");
    let path = common::create_test_file(&temp_dir.path().to_path_buf(), "dia1.html", &content)?;

    let changed = controller.restyle_file(&path)?;

    assert!(!changed);
    assert_eq!(fs::read_to_string(&path)?, content);

    Ok(())
}

/// Test that a legacy card target is rewritten in place
#[test]
fn test_restyle_file_withLegacyCard_shouldOverwriteTarget() -> Result<()> {
    let controller = Controller::new_for_test()?;
    let temp_dir = common::create_temp_dir()?;

    let card = common::legacy_card("Intro to X", "09:00", "10:00", "Ana Gomez", "Doctorado");
    let path = common::create_test_file(
        &temp_dir.path().to_path_buf(),
        "dia1.html",
        &common::wrap_page(&card),
    )?;

    let changed = controller.restyle_file(&path)?;
    assert!(changed);

    let updated = fs::read_to_string(&path)?;
    assert!(updated.contains("09:00 - 10:00"));
    assert!(!updated.contains("text-center w-24"));

    Ok(())
}

/// Test that run processes every configured target in order
#[test]
fn test_run_withConfiguredTargets_shouldProcessAll() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = temp_dir.path().to_path_buf();

    let first = common::create_test_file(
        &root,
        "dia1.html",
        &common::wrap_page(&common::legacy_card("Charla A", "09:00", "10:00", "Ana Gomez", "Doctorado")),
    )?;
    let second = common::create_test_file(
        &root,
        "dia2.html",
        &common::wrap_page(&common::speaker_card_inline(
            "Charla B",
            "11:00 - 12:00",
            "Luis Perez",
            "Maestría",
            "blue",
        )),
    )?;

    let config = Config {
        targets: vec![first.clone(), second.clone()],
        log_level: LogLevel::Info,
    };
    Controller::with_config(config)?.run()?;

    assert!(fs::read_to_string(&first)?.contains("09:00 - 10:00"));
    assert!(fs::read_to_string(&second)?.contains("Lic. Luis Perez"));

    Ok(())
}
