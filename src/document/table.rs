use super::cell::BORDER_WIDTH;
use super::Document;
use crate::canvas::Canvas;
use crate::layout::{Cursor, DataCell, HeaderSpec};
use serde::{Deserialize, Serialize};

/// Row geometry of a table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableStyle {
    /// Height of the header row and of every data row
    pub row_height: f32,
    /// Close the table with a horizontal line under the last row
    pub final_border: bool,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            row_height: 13.0,
            final_border: true,
        }
    }
}

/// Data column of a flattened header row.
#[derive(Debug, Clone, PartialEq)]
pub struct Column<'a> {
    /// Header or sub-header title
    pub text: &'a str,
    /// Column width
    pub width: f32,
}

/// One column per child for split headers, one per plain header.
pub fn flatten_columns(headers: &[HeaderSpec]) -> Vec<Column<'_>> {
    headers
        .iter()
        .flat_map(|header| {
            let width = header.width;
            let columns: Vec<Column<'_>> = if header.children.is_empty() {
                vec![Column {
                    text: &header.text,
                    width,
                }]
            } else {
                header
                    .children
                    .iter()
                    .map(|child| Column { text: child, width })
                    .collect()
            };
            columns
        })
        .collect()
}

impl<C: Canvas> Document<C> {
    /// Draw a table with 13pt rows and a closing border.
    pub fn print_table(&mut self, pos: &mut Cursor, headers: &[HeaderSpec], rows: &[Vec<DataCell>]) -> &mut Self {
        self.print_table_with(pos, headers, rows, TableStyle::default())
    }

    /// Draw a header row followed by data rows, breaking pages between rows.
    ///
    /// Data cells take the width of the flattened header column at the same
    /// index. Cells beyond the last column fall back to the large gap width
    /// and still draw. `pos.y` ends below the last row; `pos.x` is unchanged.
    pub fn print_table_with(
        &mut self,
        pos: &mut Cursor,
        headers: &[HeaderSpec],
        rows: &[Vec<DataCell>],
        style: TableStyle,
    ) -> &mut Self {
        let row_height = style.row_height;
        self.set_bold_font_style();
        self.set_small_font_size();

        let mut offset = 0.0;
        for header in headers {
            self.draw_cell(
                &header.text,
                Cursor::new(pos.x + offset, pos.y),
                header.width,
                row_height,
                &header.options,
                header.children.as_slice(),
            );
            offset += header.total_width();
        }

        let columns = flatten_columns(headers);
        let fallback_width = self.config.large_gap;
        pos.y += row_height;

        for (row_index, row) in rows.iter().enumerate() {
            self.add_page_if_needed(pos, row_height);

            if row.len() > columns.len() {
                log::warn!(
                    "Table row {} has {} cells but only {} columns; extra cells are {}pt wide",
                    row_index,
                    row.len(),
                    columns.len(),
                    fallback_width
                );
            }

            let mut offset = 0.0;
            for (index, cell) in row.iter().enumerate() {
                let width = columns.get(index).map_or(fallback_width, |c| c.width);
                self.draw_cell::<&str>(
                    &cell.text,
                    Cursor::new(pos.x + offset, pos.y),
                    width,
                    row_height,
                    &cell.options,
                    &[],
                );
                offset += width;
            }

            pos.y += row_height;
        }

        if style.final_border {
            let total: f32 = columns.iter().map(|c| c.width).sum();
            self.canvas.move_to(pos.x, pos.y);
            self.canvas.line_to(pos.x + total, pos.y);
            self.canvas.line_width(BORDER_WIDTH);
            self.canvas.stroke();
        }

        log::debug!(
            "Printed table: {} columns, {} rows, ending at y {}",
            columns.len(),
            rows.len(),
            pos.y
        );
        self
    }
}
