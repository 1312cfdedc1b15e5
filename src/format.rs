use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn truncate_unicode(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > max_width.saturating_sub(1) {
            result.push('\u{2026}');
            break;
        }
        result.push(ch);
        width += ch_width;
    }
    result
}

pub fn format_percent(percent: Option<f32>) -> String {
    match percent {
        Some(p) => format!("{p:.2}%"),
        None => "--".to_string(),
    }
}

pub fn format_memory(used_mb: u64, total_mb: u64) -> String {
    format!("{used_mb} MB / {total_mb} MB")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_names_are_untouched() {
        assert_eq!(truncate_unicode("bash", 16), "bash");
        assert_eq!(truncate_unicode("exactly-sixteen!", 16), "exactly-sixteen!");
    }

    #[test]
    fn long_names_get_an_ellipsis() {
        let out = truncate_unicode("a-very-long-process-name", 10);
        assert_eq!(out, "a-very-lo\u{2026}");
        assert_eq!(out.width(), 10);
    }

    #[test]
    fn wide_characters_count_double() {
        let out = truncate_unicode("日本語のプロセス", 7);
        assert_eq!(out, "日本語\u{2026}");
    }

    #[test]
    fn percent_and_memory_labels() {
        assert_eq!(format_percent(Some(12.346)), "12.35%");
        assert_eq!(format_percent(Some(0.0)), "0.00%");
        assert_eq!(format_percent(None), "--");
        assert_eq!(format_memory(5859, 7812), "5859 MB / 7812 MB");
    }
}
