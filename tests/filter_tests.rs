//! Tests for the global row filter.

#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use test_case::test_case;
    use webgrid::grid::filter::{row_matches, visible_row_indices};
    use webgrid::grid::{GridData, TOTAL_ROWS};
    use webgrid::state::GridState;

    // ================================================================
    // Per-row matching
    // ================================================================

    #[test]
    fn test_empty_query_matches_every_row() {
        let grid = GridData::sample();
        for row in &grid.rows {
            assert!(row_matches(row, &grid.columns, ""));
        }
    }

    #[test_case("comp", true; "case-insensitive prefix of Complete")]
    #[test_case("COMPLETE", true; "uppercase query")]
    #[test_case("xyz", true; "matches product XYZ in Job Request")]
    #[test_case("zzzz-not-there", false; "no column matches")]
    fn test_match_on_sample_row_two(query: &str, expected: bool) {
        let grid = GridData::sample();
        // Row 2 has Status = "Complete"
        assert_eq!(row_matches(&grid.rows[2], &grid.columns, query), expected);
    }

    #[test]
    fn test_match_searches_all_columns() {
        let grid = GridData::sample();
        // Matches the Submitter column only
        assert!(row_matches(&grid.rows[0], &grid.columns, "aisha"));
        // Matches the Est. Value column only
        assert!(row_matches(&grid.rows[0], &grid.columns, "6,200,000"));
    }

    #[test]
    fn test_identifier_does_not_participate() {
        let grid = GridData::sample();
        // Row id 42 is an empty padding row; its id must not match "42"
        assert!(!row_matches(&grid.rows[41], &grid.columns, "42"));
    }

    // ================================================================
    // Visible set
    // ================================================================

    #[test]
    fn test_visible_set_preserves_order() {
        let grid = GridData::sample();
        let visible = visible_row_indices(&grid.rows, &grid.columns, "in-process");
        assert_eq!(visible, vec![0, 3]);
    }

    #[test]
    fn test_empty_query_shows_all_rows() {
        let grid = GridData::sample();
        let visible = visible_row_indices(&grid.rows, &grid.columns, "");
        assert_eq!(visible.len(), TOTAL_ROWS);
    }

    #[test]
    fn test_filter_reevaluated_after_edit() {
        let mut state = GridState::sample();
        state.set_filter("blocked");
        assert_eq!(state.visible_rows(), vec![4]);

        // Editing a value into range brings the row into the visible set
        state.grid.set(10, "Status", "Blocked").unwrap();
        assert_eq!(state.visible_rows(), vec![4, 10]);

        // And editing it away removes it again
        state.grid.set(4, "Status", "Complete").unwrap();
        assert_eq!(state.visible_rows(), vec![10]);
    }

    #[test]
    fn test_filter_sees_added_columns() {
        let mut state = GridState::sample();
        state.add_column("Notes").unwrap();
        state.grid.set(7, "Notes", "follow up with vendor").unwrap();
        state.set_filter("vendor");
        assert_eq!(state.visible_rows(), vec![7]);
    }

    #[test]
    fn test_snapshot_reflects_filter() {
        let mut state = GridState::sample();
        state.set_filter("need to start");
        let snapshot = state.visible_snapshot();
        assert_eq!(snapshot.rows.len(), 1);
        assert_eq!(snapshot.rows[0].id, 2);
        assert_eq!(snapshot.columns, state.grid.columns);
    }
}
