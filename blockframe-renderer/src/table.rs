//! Block summary table shaping.

use blockframe_core::{BlockSummaryRecord, Localizer, StringKey};

use crate::context::RenderableTableModel;

/// Shape block summary records into a header + rows table payload.
///
/// Pure function: one output row per input record, input order preserved,
/// no filtering or aggregation. Empty input keeps the four localized
/// headers with zero rows.
pub fn block_summary_table(
    records: &[BlockSummaryRecord],
    strings: &dyn Localizer,
) -> RenderableTableModel {
    let headers = vec![
        strings.text(StringKey::BlockIdHeader),
        strings.text(StringKey::BlockNameHeader),
        strings.text(StringKey::CourseHeader),
        strings.text(StringKey::CategoryHeader),
    ];

    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|record| {
            vec![
                record.id.to_string(),
                record.block_name.clone(),
                record.course_short_name.clone(),
                record.category_name.clone(),
            ]
        })
        .collect();

    debug_assert!(
        rows.iter().all(|row| row.len() == headers.len()),
        "every row must have one cell per header"
    );
    RenderableTableModel { headers, rows }
}

#[cfg(test)]
mod tests {
    use blockframe_core::{BlockId, EnglishStrings};

    use super::*;

    fn record(id: i64, name: &str, course: &str, category: &str) -> BlockSummaryRecord {
        BlockSummaryRecord {
            id: BlockId(id),
            block_name: name.to_string(),
            course_short_name: course.to_string(),
            category_name: category.to_string(),
        }
    }

    #[test]
    fn empty_input_keeps_headers() {
        let table = block_summary_table(&[], &EnglishStrings);
        assert_eq!(
            table.headers,
            vec!["Block id", "Block name", "Course", "Category"]
        );
        assert!(table.rows.is_empty());
    }

    #[test]
    fn one_row_per_record_in_input_order() {
        let records = vec![
            record(3, "Navigation", "HIST201", "Humanities"),
            record(1, "Superframe", "CS101", "Computing"),
        ];
        let table = block_summary_table(&records, &EnglishStrings);
        assert_eq!(table.rows.len(), records.len());
        assert_eq!(
            table.rows[0],
            vec!["3", "Navigation", "HIST201", "Humanities"]
        );
        assert_eq!(table.rows[1], vec!["1", "Superframe", "CS101", "Computing"]);
    }

    #[test]
    fn rows_are_rectangular() {
        let records = vec![record(1, "Superframe", "CS101", "Computing")];
        let table = block_summary_table(&records, &EnglishStrings);
        for row in &table.rows {
            assert_eq!(row.len(), table.headers.len());
        }
    }
}
