use super::Document;
use crate::canvas::Canvas;
use crate::layout::{CellOptions, Cursor};

/// Vertical padding above the first line of a cell.
const CELL_PADDING: f32 = 1.5;

/// Border line width shared by cells and tables.
pub(crate) const BORDER_WIDTH: f32 = 0.1;

impl<C: Canvas> Document<C> {
    /// Stroke the borders of a `width` x `height` box at `pos`.
    ///
    /// The line width is set to 0.1 even when both border axes are off.
    pub fn draw_cell_borders(&mut self, pos: Cursor, width: f32, height: f32, options: &CellOptions) {
        self.canvas.line_width(BORDER_WIDTH);

        if options.draws_horizontal_border() {
            self.stroke_line(pos.x, pos.y, pos.x + width, pos.y);
            self.stroke_line(pos.x, pos.y + height, pos.x + width, pos.y + height);
        }

        if options.draws_vertical_border() {
            self.stroke_line(pos.x, pos.y, pos.x, pos.y + height);
            self.stroke_line(pos.x + width, pos.y, pos.x + width, pos.y + height);
        }
    }

    /// Draw a bordered cell with wrapped, aligned text.
    ///
    /// With `children`, the cell spans `width * children.len()`: each child
    /// is drawn first as a half-height sub-cell in the bottom half, then the
    /// full-height border and a half-height divider are drawn over them,
    /// and the parent text sits in the top half.
    pub fn draw_cell<S: AsRef<str>>(
        &mut self,
        text: &str,
        pos: Cursor,
        width: f32,
        height: f32,
        options: &CellOptions,
        children: &[S],
    ) {
        self.draw_cell_with_offset(text, pos, width, height, options, children, 0.0, 0.0);
    }

    /// [`draw_cell`](Self::draw_cell) with extra text offsets.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_cell_with_offset<S: AsRef<str>>(
        &mut self,
        text: &str,
        pos: Cursor,
        width: f32,
        height: f32,
        options: &CellOptions,
        children: &[S],
        value_gap_y: f32,
        value_gap_x: f32,
    ) {
        if !children.is_empty() {
            let child_options = CellOptions {
                vertical_border: Some(true),
                horizontal_border: Some(false),
                ..options.clone()
            };
            for (index, child) in children.iter().enumerate() {
                let child_pos = Cursor::new(pos.x + width * index as f32, pos.y + height / 2.0);
                self.draw_cell::<&str>(child.as_ref(), child_pos, width, height / 2.0, &child_options, &[]);
            }
        }

        let span_width = width * children.len().max(1) as f32;
        self.draw_cell_borders(pos, span_width, height, options);
        if !children.is_empty() {
            self.draw_cell_borders(pos, span_width, height / 2.0, options);
        }

        if options.is_bold() {
            self.set_bold_font_style();
        } else {
            self.set_normal_font_style();
        }

        let font_size = options
            .input_font_size
            .unwrap_or(self.config.label_font_size);
        self.canvas.font_size(font_size);

        log::trace!(
            "Cell '{}' at ({}, {}) spanning {}x{}",
            text,
            pos.x,
            pos.y,
            span_width,
            height
        );

        let gap = options.resolved_gap();
        let align = options.alignment();
        for (index, line) in self.split_text_to_lines(text, span_width).iter().enumerate() {
            let x = pos.x + self.gap_by_align(line, span_width, gap, align) + value_gap_x;
            let y = pos.y
                + CELL_PADDING
                + index as f32 * font_size
                + value_gap_y
                + (height / 2.0 - font_size);
            self.canvas.text(line, x, y);
        }
    }

    fn stroke_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.canvas.move_to(x1, y1);
        self.canvas.line_to(x2, y2);
        self.canvas.stroke();
    }
}
