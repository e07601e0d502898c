use super::options::Align;

/// Horizontal offset of a line of `text_width` inside a box of `width`.
///
/// - `Center`: `gap + (width - text_width) / 2`
/// - `Right`: `width - text_width - gap`
/// - `Left`: `gap`
///
/// Centered and right-aligned offsets are clamped at zero so text never
/// starts left of the box. Left alignment returns `gap` unchanged.
pub fn align_offset(text_width: f32, width: f32, gap: f32, align: Align) -> f32 {
    match align {
        Align::Center => (gap + (width - text_width) / 2.0).max(0.0),
        Align::Right => (width - text_width - gap).max(0.0),
        Align::Left => gap,
    }
}

/// Offset of `text` inside a box of `width`, measured with `measure`.
pub fn resolve_gap<F>(text: &str, width: f32, gap: f32, align: Align, measure: F) -> f32
where
    F: Fn(&str) -> f32,
{
    match align {
        Align::Left => gap,
        _ => align_offset(measure(text), width, gap, align),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(_: &str) -> f32 {
        50.0
    }

    #[test]
    fn test_gap_by_align() {
        assert_eq!(resolve_gap("text", 100.0, 10.0, Align::Center, fixed), 35.0);
        assert_eq!(resolve_gap("text", 100.0, 10.0, Align::Left, fixed), 10.0);
        assert_eq!(resolve_gap("text", 100.0, 10.0, Align::Right, fixed), 40.0);
    }

    #[test]
    fn test_negative_offsets_clamp_to_zero() {
        assert_eq!(resolve_gap("text", 100.0, -1000.0, Align::Center, fixed), 0.0);
        assert_eq!(resolve_gap("text", 100.0, 1000.0, Align::Right, fixed), 0.0);
    }

    #[test]
    fn test_left_gap_is_not_clamped() {
        assert_eq!(align_offset(50.0, 100.0, -3.0, Align::Left), -3.0);
    }

    #[test]
    fn test_text_wider_than_box() {
        assert_eq!(align_offset(150.0, 100.0, 0.0, Align::Center), 0.0);
        assert_eq!(align_offset(150.0, 100.0, 0.0, Align::Right), 0.0);
    }
}
