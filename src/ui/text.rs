//! Text measuring helpers shared by widgets that size themselves

/// Wrap text to fit within a maximum width.
///
/// Breaks on whitespace; a word wider than `max_width` is split across rows.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        if paragraph.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current_line = String::new();
        let mut current_len = 0;
        for word in paragraph.split_whitespace() {
            let word_len = word.chars().count();
            if current_len > 0 && current_len + word_len + 1 > max_width {
                lines.push(std::mem::take(&mut current_line));
                current_len = 0;
            }
            if current_len > 0 {
                current_line.push(' ');
                current_len += 1;
            }
            for c in word.chars() {
                if current_len == max_width {
                    lines.push(std::mem::take(&mut current_line));
                    current_len = 0;
                }
                current_line.push(c);
                current_len += 1;
            }
        }
        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

/// Rows `text` occupies when wrapped to `max_width`
pub fn wrapped_height(text: &str, max_width: usize) -> usize {
    wrap_text(text, max_width).len()
}
