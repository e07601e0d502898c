use super::cell::BORDER_WIDTH;
use super::Document;
use crate::canvas::Canvas;
use crate::layout::{CellOptions, Cursor, TextInputField};

const INPUT_RADIUS: f32 = 5.0;
/// Vertical offset of the first value line below the box top.
const VALUE_GAP_Y: f32 = 6.0;

impl<C: Canvas> Document<C> {
    /// Draw a rounded input box at the cursor and move `pos.y` below it.
    pub fn print_input(&mut self, pos: &mut Cursor, width: f32, height: f32) -> &mut Self {
        self.print_input_with(pos, width, height, INPUT_RADIUS, 1.0)
    }

    /// Draw a rounded rectangle with corner `radius` and stroke opacity.
    pub fn print_input_with(
        &mut self,
        pos: &mut Cursor,
        width: f32,
        height: f32,
        radius: f32,
        stroke_opacity: f32,
    ) -> &mut Self {
        let (x, y, r) = (pos.x, pos.y, radius);
        let canvas = &mut self.canvas;

        canvas.move_to(x + r, y);
        canvas.line_to(x + width - r, y);
        canvas.quadratic_curve_to(x + width, y, x + width, y + r);
        canvas.line_to(x + width, y + height - r);
        canvas.quadratic_curve_to(x + width, y + height, x + width - r, y + height);
        canvas.line_to(x + r, y + height);
        canvas.quadratic_curve_to(x, y + height, x, y + height - r);
        canvas.line_to(x, y + r);
        canvas.quadratic_curve_to(x, y, x + r, y);
        canvas.line_width(BORDER_WIDTH);
        canvas.undash();
        canvas.close_path();
        canvas.stroke_opacity(stroke_opacity);
        canvas.stroke();

        pos.y += height;
        self
    }

    /// Draw a labeled input field at the cursor.
    ///
    /// The box is drawn from a copy of the cursor, so `pos` only moves when
    /// the field grows to fit its value (`fit_overflow`) or a page break
    /// resets it to the top margin.
    pub fn print_input_text(&mut self, pos: &mut Cursor, field: &TextInputField) -> &mut Self {
        let options = &field.options;
        let mut height = field.height.unwrap_or(self.config.input_height);
        let margin = self.margin();
        self.add_page_if_needed(pos, height - margin);

        self.set_normal_font_style();
        self.canvas.font_size(self.config.input_font_size);

        if options.fit_overflow {
            let value = field.value.as_deref().unwrap_or("");
            let lines = self.split_text_to_lines(value, field.width).len();
            height = (lines + 1) as f32 * self.canvas.height_of_string("A");
        }
        height = height.max(self.config.input_height);

        log::trace!(
            "Input field {:?} at ({}, {}) size {}x{}",
            field.label,
            pos.x,
            pos.y,
            field.width,
            height
        );

        let mut box_pos = *pos;
        self.print_input(&mut box_pos, field.width, height);
        self.print_label_and_value(
            *pos,
            height,
            field.label.as_deref(),
            field.value.as_deref(),
            field.width,
            options,
        );

        if options.fit_overflow {
            pos.y += height;
        }
        self
    }

    /// Overlay a label and a wrapped value on an input box at `pos`.
    ///
    /// The label sits at the small-gap inset in the label font size. The
    /// value starts 6pt below the box top, plus the label font size when a
    /// label is present, and is wrapped to `input_width` minus the small gap
    /// (a zero width is used as is). Lines that would exceed the writable
    /// height (`input_height` minus the label font size) are dropped.
    pub fn print_label_and_value(
        &mut self,
        pos: Cursor,
        input_height: f32,
        label: Option<&str>,
        value: Option<&str>,
        input_width: f32,
        options: &CellOptions,
    ) -> &mut Self {
        let small_gap = self.config.small_gap;
        let label_font_size = self.config.label_font_size;
        let inner_width = if input_width != 0.0 {
            input_width - small_gap
        } else {
            input_width
        };

        let label = label.filter(|l| !l.is_empty());
        let mut value_gap_y = VALUE_GAP_Y;
        if label.is_some() {
            value_gap_y += label_font_size;
        }

        if options.is_bold() {
            self.set_bold_font_style();
        }
        self.canvas.font_size(label_font_size);
        if let Some(label) = label {
            self.canvas.text(label, pos.x + small_gap, pos.y + small_gap);
        }
        self.set_normal_font_style();

        let text_font_size = options
            .input_font_size
            .unwrap_or(self.config.input_font_size);
        self.canvas.font_size(text_font_size);

        let value = value.unwrap_or("");
        let value_gap_x = self.gap_by_align(value, inner_width, small_gap, options.alignment());
        let writable_height = input_height - label_font_size;

        let mut text_pos = pos;
        let lines = self.split_text_to_lines(value, inner_width);
        for (index, line) in lines.iter().enumerate() {
            let line_height = self.canvas.height_of_string(line);
            if self.add_page_if_needed(&mut text_pos, line_height) {
                self.set_normal_font_style();
                self.canvas.font_size(text_font_size);
            }

            if line_height * (index + 1) as f32 > writable_height {
                log::warn!(
                    "Input value truncated: {} of {} lines fit in a {}pt field",
                    index,
                    lines.len(),
                    input_height
                );
                break;
            }

            self.canvas
                .text(line, text_pos.x + value_gap_x, text_pos.y + value_gap_y);
            text_pos.y += text_font_size;
        }

        self.set_normal_font_size()
    }

    /// Draw rows of input fields side by side.
    ///
    /// Fields in a row are placed left to right, each advancing `pos.x` by
    /// its width. After every row `pos.x` returns to the margin and `pos.y`
    /// moves down by the input height.
    pub fn print_multiple_input_text(&mut self, pos: &mut Cursor, rows: &[Vec<TextInputField>]) -> &mut Self {
        for row in rows {
            for field in row {
                self.print_input_text(pos, field);
                pos.x += field.width;
            }
            pos.x = self.margin();
            pos.y += self.config.input_height;
        }
        self
    }
}
