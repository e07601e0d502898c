use super::Document;
use crate::canvas::Canvas;
use crate::layout::Cursor;

impl<C: Canvas> Document<C> {
    /// Start a new page when `increment` more points would run past the
    /// bottom limit.
    ///
    /// The limit is `page_height - margin`. On a break the cursor moves to
    /// the top margin, the regular font and the small size are selected,
    /// and `true` is returned. `pos.x` is never touched.
    pub fn add_page_if_needed(&mut self, pos: &mut Cursor, increment: f32) -> bool {
        let limit = self.page_height() - self.margin();
        if pos.y + increment <= limit {
            return false;
        }

        log::trace!(
            "Page break: y {} + {} exceeds {}",
            pos.y,
            increment,
            limit
        );
        self.add_page();
        self.set_normal_font_style();
        self.set_small_font_size();
        pos.y = self.margin();
        true
    }
}
