use super::*;
use crate::net::types::{error_from_body, parse_analysis};
use serde_json::json;

fn staged_state() -> AnalyzerState {
    let mut state = AnalyzerState::default();
    state.stage("car.jpg", "image/jpeg").unwrap();
    state
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_is_empty_with_nothing_staged() {
    let state = AnalyzerState::default();
    assert_eq!(state.view, ViewState::Empty);
    assert_eq!(state.staged, None);
    assert_eq!(state.last_uploaded_name, None);
    assert!(!state.can_analyze());
    assert!(state.can_clear());
    assert!(!state.is_busy());
}

// =============================================================
// stage
// =============================================================

#[test]
fn stage_valid_image_enters_staged() {
    let mut state = AnalyzerState::default();
    assert_eq!(state.stage("car.jpg", "image/jpeg"), Ok(()));
    assert_eq!(state.view, ViewState::Staged);

    let staged = state.staged.unwrap();
    assert_eq!(staged.file_name, "car.jpg");
    assert_eq!(staged.media_type, "image/jpeg");
    assert!(!staged.uploaded);
}

#[test]
fn stage_non_image_never_changes_state() {
    for media_type in ["application/pdf", "text/plain", "", "image/"] {
        let mut state = AnalyzerState::default();
        assert_eq!(state.stage("doc.pdf", media_type), Err(StageError::NotAnImage));
        assert_eq!(state.view, ViewState::Empty);
        assert_eq!(state.staged, None);
    }
}

#[test]
fn stage_non_image_leaves_rendered_results_intact() {
    let mut state = staged_state();
    let ticket = state.begin_analyze().unwrap();
    state.finish(ticket.generation, AnalyzeOutcome::Success(Vec::new()));

    assert_eq!(state.stage("notes.txt", "text/plain"), Err(StageError::NotAnImage));
    assert_eq!(state.view, ViewState::Rendered(Vec::new()));
    assert_eq!(state.staged.unwrap().file_name, "car.jpg");
}

#[test]
fn selecting_new_file_always_resets_uploaded_flag() {
    let mut state = staged_state();
    let ticket = state.begin_analyze().unwrap();
    assert!(state.mark_uploaded(&ticket));
    assert!(state.staged.as_ref().unwrap().uploaded);

    state.stage("car.jpg", "image/jpeg").unwrap();
    assert!(!state.staged.as_ref().unwrap().uploaded);
}

// =============================================================
// begin_analyze
// =============================================================

#[test]
fn begin_analyze_from_empty_is_rejected() {
    let mut state = AnalyzerState::default();
    assert_eq!(state.begin_analyze(), Err(AnalyzeRejection::NothingStaged));
    assert_eq!(state.view, ViewState::Empty);
}

#[test]
fn begin_analyze_from_busy_is_rejected() {
    let mut state = staged_state();
    let first = state.begin_analyze().unwrap();
    assert_eq!(state.begin_analyze(), Err(AnalyzeRejection::AlreadyRunning));
    // The original run's generation is still the latest.
    assert_eq!(state.generation(), first.generation);
}

#[test]
fn begin_analyze_enters_busy_and_requires_upload_first_time() {
    let mut state = staged_state();
    let ticket = state.begin_analyze().unwrap();

    assert_eq!(state.view, ViewState::Busy);
    assert!(ticket.needs_upload);
    assert_eq!(ticket.file_name, "car.jpg");
    assert!(!state.can_analyze());
    assert!(!state.can_clear());
}

#[test]
fn reanalyze_same_uploaded_file_skips_upload() {
    let mut state = staged_state();
    let first = state.begin_analyze().unwrap();
    assert!(first.needs_upload);
    assert!(state.mark_uploaded(&first));
    state.finish(first.generation, AnalyzeOutcome::Success(Vec::new()));

    let second = state.begin_analyze().unwrap();
    assert!(!second.needs_upload);
    assert!(second.generation > first.generation);
}

#[test]
fn reanalyze_after_reselecting_same_name_requires_upload() {
    let mut state = staged_state();
    let first = state.begin_analyze().unwrap();
    assert!(state.mark_uploaded(&first));
    state.finish(first.generation, AnalyzeOutcome::Success(Vec::new()));

    // Reselecting clears the uploaded flag even for an identical name, since
    // a same-named file may have different content.
    state.stage("car.jpg", "image/jpeg").unwrap();
    let second = state.begin_analyze().unwrap();
    assert!(second.needs_upload);
}

#[test]
fn reanalyze_after_failure_is_allowed_without_reselecting() {
    let mut state = staged_state();
    let first = state.begin_analyze().unwrap();
    state.finish(first.generation, AnalyzeOutcome::Failure("boom".to_owned()));
    assert_eq!(state.view, ViewState::Failed("boom".to_owned()));

    let second = state.begin_analyze().unwrap();
    assert_eq!(state.view, ViewState::Busy);
    assert!(second.needs_upload);
}

#[test]
fn upload_failure_keeps_uploaded_flag_false() {
    let mut state = staged_state();
    let ticket = state.begin_analyze().unwrap();
    // Upload failed, so mark_uploaded is never called.
    state.finish(ticket.generation, AnalyzeOutcome::Failure("disk full".to_owned()));

    assert!(!state.staged.as_ref().unwrap().uploaded);
    assert_eq!(state.last_uploaded_name, None);
    let retry = state.begin_analyze().unwrap();
    assert!(retry.needs_upload);
}

// =============================================================
// mark_uploaded guard
// =============================================================

#[test]
fn upload_ack_after_mid_flight_reselect_is_dropped() {
    let mut state = staged_state();
    let ticket = state.begin_analyze().unwrap();

    // The file input stays enabled while a run is in flight; the user
    // swaps in a different file before the first upload is acknowledged.
    state.stage("dog.jpg", "image/jpeg").unwrap();

    // The acknowledgment is for car.jpg and must not vouch for dog.jpg.
    assert!(!state.mark_uploaded(&ticket));
    assert!(!state.staged.as_ref().unwrap().uploaded);
    assert_eq!(state.last_uploaded_name, None);

    // The next run therefore uploads dog.jpg instead of skipping.
    let next = state.begin_analyze().unwrap();
    assert!(next.needs_upload);
    assert_eq!(next.file_name, "dog.jpg");
}

#[test]
fn upload_ack_with_stale_generation_is_dropped() {
    let mut state = staged_state();
    let stale = state.begin_analyze().unwrap();

    state.reset();
    state.stage("car.jpg", "image/jpeg").unwrap();

    // Same file name, but the run the acknowledgment belongs to was
    // superseded by the reset.
    assert!(!state.mark_uploaded(&stale));
    assert!(!state.staged.as_ref().unwrap().uploaded);
    assert_eq!(state.last_uploaded_name, None);
}

// =============================================================
// finish + generation guard
// =============================================================

#[test]
fn finish_applies_matching_generation() {
    let mut state = staged_state();
    let ticket = state.begin_analyze().unwrap();
    assert!(state.finish(ticket.generation, AnalyzeOutcome::Success(Vec::new())));
    assert_eq!(state.view, ViewState::Rendered(Vec::new()));
}

#[test]
fn finish_drops_stale_generation() {
    let mut state = staged_state();
    let stale = state.begin_analyze().unwrap();
    state.finish(stale.generation, AnalyzeOutcome::Failure("first".to_owned()));

    let fresh = state.begin_analyze().unwrap();
    assert!(!state.finish(stale.generation, AnalyzeOutcome::Failure("late".to_owned())));
    assert_eq!(state.view, ViewState::Busy);

    assert!(state.finish(fresh.generation, AnalyzeOutcome::Success(Vec::new())));
    assert_eq!(state.view, ViewState::Rendered(Vec::new()));
}

#[test]
fn clear_during_flight_suppresses_late_response() {
    let mut state = staged_state();
    let ticket = state.begin_analyze().unwrap();

    state.reset();
    assert_eq!(state.view, ViewState::Empty);

    // The in-flight response lands after the clear and must not resurface.
    assert!(!state.finish(ticket.generation, AnalyzeOutcome::Success(Vec::new())));
    assert_eq!(state.view, ViewState::Empty);
    assert_eq!(state.staged, None);
}

// =============================================================
// reset
// =============================================================

#[test]
fn reset_from_empty_is_safe_and_repeatable() {
    let mut state = AnalyzerState::default();
    state.reset();
    state.reset();
    assert_eq!(state.view, ViewState::Empty);
    assert_eq!(state.staged, None);
}

#[test]
fn reset_discards_rendered_results_and_upload_memory() {
    let mut state = staged_state();
    let ticket = state.begin_analyze().unwrap();
    assert!(state.mark_uploaded(&ticket));
    state.finish(
        ticket.generation,
        AnalyzeOutcome::Success(vec![VehicleRecord::Invalid]),
    );

    state.reset();
    assert_eq!(state.view, ViewState::Empty);
    assert_eq!(state.staged, None);
    assert_eq!(state.last_uploaded_name, None);
    assert!(!state.can_analyze());
}

// =============================================================
// End-to-end scenarios (state machine + response decoding)
// =============================================================

#[test]
fn scenario_a_upload_then_analyze_renders_owner_details() {
    let mut state = AnalyzerState::default();
    state.stage("car.jpg", "image/jpeg").unwrap();
    assert_eq!(state.view, ViewState::Staged);

    let ticket = state.begin_analyze().unwrap();
    assert!(ticket.needs_upload);
    assert!(state.mark_uploaded(&ticket));

    let body = json!([{"plate_number_queried": "MH12AB1234", "rc_owner_name": "J. Doe"}]);
    let records = parse_analysis(&body).unwrap();
    assert!(state.finish(ticket.generation, AnalyzeOutcome::Success(records)));

    let ViewState::Rendered(records) = &state.view else {
        panic!("expected rendered results");
    };
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].plate(), Some("MH12AB1234"));
    let crate::net::types::VehicleRecord::Details(details) = &records[0] else {
        panic!("expected a Details record");
    };
    assert_eq!(details.owner_name.as_deref(), Some("J. Doe"));
}

#[test]
fn scenario_b_upload_http_500_fails_with_server_reason() {
    let mut state = staged_state();
    let ticket = state.begin_analyze().unwrap();

    let reason = error_from_body(&json!({"error": "disk full"}), 500);
    assert!(state.finish(ticket.generation, AnalyzeOutcome::Failure(reason)));
    assert_eq!(state.view, ViewState::Failed("disk full".to_owned()));
    // The staged image survives for a retry.
    assert!(state.can_analyze());
}

#[test]
fn scenario_c_empty_result_set_renders_placeholder_state() {
    let mut state = staged_state();
    let ticket = state.begin_analyze().unwrap();
    assert!(state.mark_uploaded(&ticket));

    let records = parse_analysis(&json!([])).unwrap();
    assert!(state.finish(ticket.generation, AnalyzeOutcome::Success(records)));
    assert_eq!(state.view, ViewState::Rendered(Vec::new()));
}

#[test]
fn scenario_d_per_plate_api_error_is_carried_into_results() {
    let mut state = staged_state();
    let ticket = state.begin_analyze().unwrap();
    assert!(state.mark_uploaded(&ticket));

    let body = json!([{"error": "lookup timeout", "plate_number_queried": "DL1CAB9999"}]);
    let records = parse_analysis(&body).unwrap();
    assert!(state.finish(ticket.generation, AnalyzeOutcome::Success(records)));

    let ViewState::Rendered(records) = &state.view else {
        panic!("expected rendered results");
    };
    assert_eq!(
        records[0],
        crate::net::types::VehicleRecord::ApiError {
            plate: Some("DL1CAB9999".to_owned()),
            reason: "lookup timeout".to_owned(),
        }
    );
}
