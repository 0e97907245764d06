//! Global row filter.
//!
//! A row is visible iff the query is empty, or some registered column's
//! value contains the query as a case-insensitive substring. Filtering
//! never reorders rows and keeps no cross-row state, so the visible set
//! is recomputed from scratch whenever the query or the data changes.

use crate::types::{ColumnKey, Row};

/// Does `row` match `query` over the given columns?
///
/// The identifier value does not participate; only registered data
/// columns are searched.
pub fn row_matches(row: &Row, columns: &[ColumnKey], query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    columns
        .iter()
        .any(|key| row.value(key).to_lowercase().contains(&needle))
}

/// Indices of visible rows, in their original relative order.
pub fn visible_row_indices(rows: &[Row], columns: &[ColumnKey], query: &str) -> Vec<usize> {
    rows.iter()
        .enumerate()
        .filter(|(_, row)| row_matches(row, columns, query))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn row_with_status(status: &str) -> (Row, Vec<ColumnKey>) {
        let columns = vec!["Status".to_string()];
        let mut row = Row::empty(1, &columns);
        row.fields.insert("Status".to_string(), status.to_string());
        (row, columns)
    }

    #[test_case("", true; "empty query matches")]
    #[test_case("comp", true; "lowercase prefix")]
    #[test_case("COMPLETE", true; "uppercase full")]
    #[test_case("plet", true; "inner substring")]
    #[test_case("xyz", false; "no match")]
    fn test_match_against_complete(query: &str, expected: bool) {
        let (row, columns) = row_with_status("Complete");
        assert_eq!(row_matches(&row, &columns, query), expected);
    }

    #[test]
    fn test_visible_preserves_order() {
        let columns = vec!["Status".to_string()];
        let statuses = ["Blocked", "Complete", "Blocked", "", "blocked"];
        let rows: Vec<Row> = statuses
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let mut row = Row::empty(u32::try_from(i).unwrap_or(0) + 1, &columns);
                row.fields.insert("Status".to_string(), (*s).to_string());
                row
            })
            .collect();

        assert_eq!(visible_row_indices(&rows, &columns, "block"), vec![0, 2, 4]);
        assert_eq!(
            visible_row_indices(&rows, &columns, ""),
            vec![0, 1, 2, 3, 4]
        );
    }

    #[test]
    fn test_absent_key_reads_empty() {
        let columns = vec!["Status".to_string(), "Notes".to_string()];
        let (row, _) = row_with_status("Complete");
        // "Notes" missing from the row's fields: treated as ""
        assert!(!row_matches(&row, &columns, "notes"));
        assert!(row_matches(&row, &columns, "comp"));
    }
}
