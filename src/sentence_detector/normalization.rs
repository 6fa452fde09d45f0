// WHY: Sentence text is printed on a single line, so embedded hard line breaks are removed
// Deletion only: no space is substituted and no whitespace is collapsed

/// Remove interior hard line breaks from a sentence, treating \r\n as a single break
pub fn strip_line_breaks(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    strip_line_breaks_into(text, &mut result);
    result
}

/// Strip line breaks into supplied buffer to avoid allocation
pub fn strip_line_breaks_into(text: &str, buffer: &mut String) {
    buffer.clear();
    buffer.reserve(text.len());
    buffer.extend(text.chars().filter(|&ch| ch != '\n' && ch != '\r'));
}
