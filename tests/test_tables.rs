//! Integration tests for table rendering.
//!
//! Uses a recording canvas with fixed metrics (2pt per character, 6pt per
//! line) so positions can be computed by hand.

use pdf_formkit::document::flatten_columns;
use pdf_formkit::{
    Align, CellOptions, Cursor, DataCell, Document, DrawOp, HeaderSpec, LayoutConfig, RecordingCanvas,
    TableStyle,
};

fn recording() -> Document<RecordingCanvas> {
    Document::with_canvas(RecordingCanvas::with_fixed_metrics(2.0, 6.0), LayoutConfig::default()).unwrap()
}

/// Three headers: plain, borderless, and split into two centered bold columns.
fn sample_headers() -> Vec<HeaderSpec> {
    vec![
        HeaderSpec::new("Header 1", 50.0),
        HeaderSpec::new("Header 2", 100.0).with_options(CellOptions::new().borders(false, false)),
        HeaderSpec::new("Header 3", 75.0)
            .with_children(["Header 3-1", "Header 3-2"])
            .with_options(CellOptions::new().gap(2.0).align(Align::Center).bold()),
    ]
}

fn sample_rows() -> Vec<Vec<DataCell>> {
    let mut rows: Vec<Vec<DataCell>> = (1..=3)
        .map(|r| (1..=4).map(|c| DataCell::new(format!("Data {}-{}", r, c))).collect())
        .collect();
    rows[2].push(DataCell::new("Data 3-4"));
    rows
}

fn line_widths(doc: &Document<RecordingCanvas>) -> usize {
    doc.canvas()
        .count(|op| matches!(op, DrawOp::LineWidth { width } if *width == 0.1))
}

// =============================================================================
// CALL STRUCTURE TESTS
// =============================================================================

mod structure_tests {
    use super::*;

    #[test]
    fn test_cells_and_border_passes() {
        let mut doc = recording();
        let start = doc.canvas().ops().len();
        let mut pos = Cursor::new(50.0, 100.0);
        doc.print_table(&mut pos, &sample_headers(), &sample_rows());

        let ops = &doc.canvas().ops()[start..];
        let count = |pred: fn(&DrawOp) -> bool| ops.iter().filter(|op| pred(op)).count();
        // 3 headers + 2 sub-headers + 13 data cells
        assert_eq!(count(|op| matches!(op, DrawOp::Text(_))), 18);
        // Every cell selects its font once, after the table's own bold switch
        assert_eq!(count(|op| matches!(op, DrawOp::Font { .. })), 19);
        // 18 cell border passes, the split header's divider, and the closing line
        assert_eq!(count(|op| matches!(op, DrawOp::LineWidth { width } if *width == 0.1)), 20);
    }

    #[test]
    fn test_stroke_count_respects_border_flags() {
        let mut doc = recording();
        let mut pos = Cursor::new(50.0, 100.0);
        doc.print_table(&mut pos, &sample_headers(), &sample_rows());

        // Header 1: 4, Header 2: 0, sub-headers: 2 each, Header 3: 4 + 4,
        // data cells: 13 * 4, closing line: 1
        assert_eq!(doc.canvas().count(|op| matches!(op, DrawOp::Stroke)), 69);
    }

    #[test]
    fn test_cursor_after_table() {
        let mut doc = recording();
        let mut pos = Cursor::new(50.0, 100.0);
        doc.print_table(&mut pos, &sample_headers(), &sample_rows());
        assert_eq!(pos, Cursor::new(50.0, 152.0));
    }

    #[test]
    fn test_without_final_border() {
        let mut doc = recording();
        let mut pos = Cursor::new(50.0, 100.0);
        let style = TableStyle {
            row_height: 13.0,
            final_border: false,
        };
        doc.print_table_with(&mut pos, &sample_headers(), &sample_rows(), style);
        assert_eq!(line_widths(&doc), 19);
    }
}

// =============================================================================
// GEOMETRY TESTS
// =============================================================================

mod geometry_tests {
    use super::*;

    #[test]
    fn test_data_cells_follow_flattened_columns() {
        let mut doc = recording();
        let mut pos = Cursor::new(50.0, 100.0);
        doc.print_table(&mut pos, &sample_headers(), &sample_rows());

        let xs: Vec<f32> = ["Data 1-1", "Data 1-2", "Data 1-3", "Data 1-4"]
            .iter()
            .map(|t| doc.canvas().find_text(t).unwrap().x)
            .collect();
        assert_eq!(xs, vec![50.0, 100.0, 200.0, 275.0]);
    }

    #[test]
    fn test_extra_cell_uses_fallback_width() {
        let mut doc = recording();
        let mut pos = Cursor::new(50.0, 100.0);
        doc.print_table(&mut pos, &sample_headers(), &sample_rows());

        let extra: Vec<f32> = doc
            .canvas()
            .texts()
            .iter()
            .filter(|t| t.text == "Data 3-4")
            .map(|t| t.x)
            .collect();
        assert_eq!(extra, vec![275.0, 350.0]);
    }

    #[test]
    fn test_split_header_text_positions() {
        let mut doc = recording();
        let mut pos = Cursor::new(50.0, 100.0);
        doc.print_table(&mut pos, &sample_headers(), &sample_rows());

        // Spans 150pt: 2 + (150 - 16) / 2 = 69
        let parent = doc.canvas().find_text("Header 3").unwrap();
        assert_eq!((parent.x, parent.y), (269.0, 103.0));
        assert_eq!(parent.font, "Helvetica-Bold");

        // Bottom half, 75pt each: 2 + (75 - 20) / 2 = 29.5
        let child = doc.canvas().find_text("Header 3-2").unwrap();
        assert_eq!(child.x, 275.0 + 29.5);
        assert_eq!(child.y, 106.5 + 1.5 + (3.25 - 5.0));
    }

    #[test]
    fn test_children_drawn_before_parent() {
        let mut doc = recording();
        let mut pos = Cursor::new(50.0, 100.0);
        doc.print_table(&mut pos, &sample_headers(), &[]);

        let order: Vec<&str> = doc.canvas().texts().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(order, vec!["Header 1", "Header 2", "Header 3-1", "Header 3-2", "Header 3"]);
    }

    #[test]
    fn test_closing_line_spans_all_columns() {
        let mut doc = recording();
        let mut pos = Cursor::new(50.0, 100.0);
        doc.print_table(&mut pos, &sample_headers(), &sample_rows());

        let ops = doc.canvas().ops();
        let n = ops.len();
        assert_eq!(ops[n - 4], DrawOp::MoveTo { x: 50.0, y: 152.0 });
        assert_eq!(ops[n - 3], DrawOp::LineTo { x: 350.0, y: 152.0 });
    }

    #[test]
    fn test_flatten_matches_drawn_columns() {
        let headers = sample_headers();
        let columns = flatten_columns(&headers);
        let total: f32 = columns.iter().map(|c| c.width).sum();
        assert_eq!(columns.len(), 4);
        assert_eq!(total, 300.0);
    }
}

// =============================================================================
// CELL OPTION TESTS
// =============================================================================

mod cell_option_tests {
    use super::*;

    #[test]
    fn test_cell_font_size_override() {
        let mut doc = recording();
        let mut pos = Cursor::new(12.0, 100.0);
        let rows = vec![vec![DataCell::new("big").with_options(CellOptions::new().font_size(9.0))]];
        doc.print_table(&mut pos, &[HeaderSpec::new("H", 40.0)], &rows);

        assert_eq!(doc.canvas().find_text("H").unwrap().size, 5.0);
        assert_eq!(doc.canvas().find_text("big").unwrap().size, 9.0);
    }

    #[test]
    fn test_right_aligned_cell() {
        let mut doc = recording();
        let mut pos = Cursor::new(12.0, 100.0);
        let rows = vec![vec![DataCell::new("9.99").with_options(CellOptions::new().align(Align::Right).gap(1.0))]];
        doc.print_table(&mut pos, &[HeaderSpec::new("Price", 40.0)], &rows);

        // 40 - 8 - 1
        assert_eq!(doc.canvas().find_text("9.99").unwrap().x, 12.0 + 31.0);
    }

    #[test]
    fn test_long_cell_text_wraps_inside_row() {
        let mut doc = recording();
        let mut pos = Cursor::new(12.0, 100.0);
        let rows = vec![vec![DataCell::new("aaaa bbbb")]];
        doc.print_table(&mut pos, &[HeaderSpec::new("H", 10.0)], &rows);

        let lines: Vec<f32> = doc
            .canvas()
            .texts()
            .iter()
            .filter(|t| t.text == "aaaa" || t.text == "bbbb")
            .map(|t| t.y)
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1] - lines[0], 5.0);
        // Rows keep their fixed height
        assert_eq!(pos.y, 126.0);
    }
}
