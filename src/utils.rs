use std::process::Command;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncates `s` to at most `max_width` display columns, appending "..."
/// when anything was cut. Walks characters by display width so multi-byte
/// and wide characters are never split.
pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let budget = max_width.saturating_sub(3);
    let mut truncated = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let char_width = ch.width().unwrap_or(1);
        if width + char_width > budget {
            break;
        }
        truncated.push(ch);
        width += char_width;
    }
    truncated.push_str("...");
    truncated
}

/// Opens `url` in the system browser. Fire and forget: no state depends on
/// the result, so failures are ignored.
pub fn open_url(url: &str) {
    #[cfg(target_os = "macos")]
    let result = Command::new("open").arg(url).spawn();
    #[cfg(target_os = "windows")]
    let result = Command::new("cmd").args(["/C", "start", url]).spawn();
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let result = Command::new("xdg-open").arg(url).spawn();
    let _ = result;
}
