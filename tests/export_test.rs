use parking_lot::Mutex;
use pitchdeck::{catalog, export_deck, DeckError, ExportConfig, ExportStatus, ViewerState};
use std::sync::Arc;
use tempfile::TempDir;

#[test]
fn test_export_rejected_while_one_is_in_flight() {
    let slides = catalog();
    let state = Arc::new(Mutex::new(ViewerState::new(slides.len())));

    // Simulate an in-flight export holding the slot
    assert!(state.lock().try_begin_export());

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = temp_dir.path().join("deck.pptx");
    let result = export_deck(slides, &state, &ExportConfig::default(), &output);

    assert!(matches!(result, Err(DeckError::ExportInFlight)));
    // The rejected request must not disturb the running export's status
    assert_eq!(state.lock().export_status(), ExportStatus::Exporting);

    state.lock().finish_export();
    assert_eq!(state.lock().export_status(), ExportStatus::Idle);
}

#[test]
fn test_failed_export_resets_status_to_idle() {
    // One slide keeps the background prefetch short; the bogus browser path
    // makes the capture pass fail without needing Chrome installed.
    let slides = &catalog()[..1];
    let state = Arc::new(Mutex::new(ViewerState::new(slides.len())));

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = temp_dir.path().join("deck.pptx");
    let config = ExportConfig {
        browser_path: Some("/definitely/not/a/browser".to_string()),
        ..ExportConfig::default()
    };

    let result = export_deck(slides, &state, &config, &output);
    assert!(result.is_err());

    // The slot is released on the failure path and no artifact is left behind
    assert_eq!(state.lock().export_status(), ExportStatus::Idle);
    assert!(!output.exists());
}

#[test]
fn test_export_rejects_empty_catalog() {
    let state = Arc::new(Mutex::new(ViewerState::new(1)));
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = temp_dir.path().join("deck.pptx");

    let result = export_deck(&[], &state, &ExportConfig::default(), &output);
    assert!(matches!(result, Err(DeckError::ValidationError(_))));
    assert_eq!(state.lock().export_status(), ExportStatus::Idle);
}

#[test]
#[ignore] // Ignore by default as it requires Chrome to be installed
fn test_export_deck_end_to_end() {
    let slides = catalog();
    let state = Arc::new(Mutex::new(ViewerState::new(slides.len())));

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = temp_dir.path().join("deck.pptx");

    let path = export_deck(slides, &state, &ExportConfig::default(), &output)
        .expect("export failed");
    assert!(path.exists());

    // Exactly one page per catalog slide, in order
    let file = std::fs::File::open(&path).expect("Failed to open PPTX");
    let mut archive = zip::ZipArchive::new(file).expect("PPTX is not a valid ZIP");
    for i in 1..=slides.len() {
        assert!(archive.by_name(&format!("ppt/slides/slide{}.xml", i)).is_ok());
    }
    assert!(archive
        .by_name(&format!("ppt/slides/slide{}.xml", slides.len() + 1))
        .is_err());

    // The slot is released after completion
    assert_eq!(state.lock().export_status(), ExportStatus::Idle);

    // A second run produces a fresh artifact with the same shape
    let output2 = temp_dir.path().join("deck2.pptx");
    export_deck(slides, &state, &ExportConfig::default(), &output2).expect("re-export failed");
    assert!(output2.exists());
}
