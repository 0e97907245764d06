//! Tests for the edit-mode lifecycle: enter, live write, commit.

#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use webgrid::state::GridState;
    use webgrid::types::{Coordinate, NavKey};
    use webgrid::GridView;

    // ================================================================
    // Test helpers
    // ================================================================

    fn selected_at(row: usize, col: usize) -> GridState {
        let mut state = GridState::sample();
        state.click_cell(Coordinate::data(row, col));
        state
    }

    // ================================================================
    // Entering edit mode
    // ================================================================

    #[test]
    fn test_enter_on_data_cell_starts_editing() {
        let coord = Coordinate::data(3, 2);
        let mut state = selected_at(3, 2);
        state.handle_key(NavKey::Enter);
        assert_eq!(state.editing, Some(coord));
        // Selection is unchanged (and re-asserted)
        assert_eq!(state.selected, Some(coord));
    }

    #[test]
    fn test_enter_on_identifier_cell_never_edits() {
        let mut state = GridState::sample();
        state.click_cell(Coordinate::id(3));
        state.handle_key(NavKey::Enter);
        assert_eq!(state.editing, None);
        // The key is still consumed and the selection re-asserted
        assert_eq!(state.selected, Some(Coordinate::id(3)));
    }

    #[test]
    fn test_double_click_on_data_cell_starts_editing() {
        let mut state = GridState::sample();
        let coord = Coordinate::data(6, 1);
        state.double_click_cell(coord);
        assert_eq!(state.editing, Some(coord));
        assert_eq!(state.selected, Some(coord));
    }

    #[test]
    fn test_double_click_on_identifier_is_noop() {
        let mut state = GridState::sample();
        state.click_cell(Coordinate::data(2, 2));
        state.double_click_cell(Coordinate::id(6));
        assert_eq!(state.editing, None);
        // Not even the selection moves
        assert_eq!(state.selected, Some(Coordinate::data(2, 2)));
    }

    // ================================================================
    // Live writes and commit
    // ================================================================

    #[test]
    fn test_edit_writes_land_in_store_immediately() {
        let mut state = selected_at(0, 2); // "Status"
        state.handle_key(NavKey::Enter);

        state.edit_write("Blo").unwrap();
        assert_eq!(state.grid.get(0, "Status").unwrap(), "Blo");
        state.edit_write("Blocked").unwrap();
        assert_eq!(state.grid.get(0, "Status").unwrap(), "Blocked");
        assert_eq!(state.edit_value(), Some("Blocked"));
    }

    #[test]
    fn test_commit_clears_editing_keeps_selection_and_value() {
        let coord = Coordinate::data(0, 2);
        let mut state = selected_at(0, 2);
        state.handle_key(NavKey::Enter);
        state.edit_write("Blocked").unwrap();

        state.commit_edit();
        assert_eq!(state.editing, None);
        assert_eq!(state.selected, Some(coord));
        assert_eq!(state.grid.get(0, "Status").unwrap(), "Blocked");
    }

    #[test]
    fn test_enter_roundtrip_selected_editing_selected() {
        // Enter opens the edit, a second Enter (commit) returns to
        // selected with intermediate writes retained.
        let coord = Coordinate::data(1, 0);
        let mut state = selected_at(1, 0);

        state.handle_key(NavKey::Enter);
        assert_eq!(state.editing, Some(coord));
        state.edit_write("Rename the campaign").unwrap();
        state.commit_edit();

        assert_eq!(state.editing, None);
        assert_eq!(state.selected, Some(coord));
        assert_eq!(
            state.grid.get(1, "Job Request").unwrap(),
            "Rename the campaign"
        );
    }

    #[test]
    fn test_edit_write_without_open_edit_is_noop() {
        let mut state = selected_at(0, 2);
        let before = state.grid.get(0, "Status").unwrap().to_string();
        state.edit_write("ignored").unwrap();
        assert_eq!(state.grid.get(0, "Status").unwrap(), before);
    }

    #[test]
    fn test_blur_then_click_ordering() {
        // A click elsewhere while editing: blur commits first, then the
        // click re-selects. Pinned here as two explicit transitions.
        let mut state = selected_at(0, 2);
        state.handle_key(NavKey::Enter);
        state.edit_write("Blocked").unwrap();

        state.commit_edit(); // blur
        state.click_cell(Coordinate::data(5, 1)); // click

        assert_eq!(state.editing, None);
        assert_eq!(state.selected, Some(Coordinate::data(5, 1)));
        assert_eq!(state.grid.get(0, "Status").unwrap(), "Blocked");
    }

    #[test]
    fn test_navigation_resumes_after_commit() {
        let mut state = selected_at(0, 2);
        state.handle_key(NavKey::Enter);
        state.edit_write("Blocked").unwrap();
        state.commit_edit();

        assert!(state.handle_key(NavKey::Down));
        assert_eq!(state.selected, Some(Coordinate::data(1, 2)));
    }

    // ================================================================
    // Headless view wrapper
    // ================================================================

    #[test]
    fn test_headless_view_snapshot_tracks_edits() {
        let mut view = GridView::new_test();
        view.state_mut().double_click_cell(Coordinate::data(0, 2));
        view.state_mut().edit_write("Paused").unwrap();
        view.state_mut().commit_edit();

        let json = view.snapshot_json().unwrap();
        assert!(json.contains("Paused"));
        assert!(view.state().editing.is_none());
    }
}
