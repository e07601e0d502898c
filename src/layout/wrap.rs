/// Split `text` into lines no wider than `max_width`.
///
/// Explicit `'\n'` breaks are honored first; each segment is then wrapped
/// greedily on single spaces. A word is moved to a new line only when the
/// current line is non-empty, so a word wider than `max_width` is never
/// split and sits alone on an overflowing line. Empty text, and empty
/// segments between consecutive breaks, produce no lines.
///
/// `measure` returns the rendered width of a candidate line.
///
/// ```
/// use pdf_formkit::layout::wrap_text;
///
/// let lines = wrap_text("one two three", 40.0, |s| s.len() as f32 * 5.0);
/// assert_eq!(lines, vec!["one two", "three"]);
/// ```
pub fn wrap_text<F>(text: &str, max_width: f32, measure: F) -> Vec<String>
where
    F: Fn(&str) -> f32,
{
    let mut lines = Vec::new();
    for segment in text.split('\n') {
        wrap_segment(segment, max_width, &measure, &mut lines);
    }
    lines
}

fn wrap_segment<F>(segment: &str, max_width: f32, measure: &F, lines: &mut Vec<String>)
where
    F: Fn(&str) -> f32,
{
    if segment.is_empty() {
        return;
    }

    let mut current = String::new();
    for word in segment.split(' ') {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };

        if !current.is_empty() && measure(&candidate) > max_width {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        } else {
            current = candidate;
        }
    }
    lines.push(current);
}
