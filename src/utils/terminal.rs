//! Terminal output sanitization
//!
//! The sync endpoint's response body is echoed to stdout. It is remote-controlled
//! text, so escape sequences and other control characters are removed before
//! printing, and oversized bodies (such as HTML error pages) are cut short.

/// Longest response excerpt printed, in characters
pub const MAX_ECHO_CHARS: usize = 2000;

/// Strip ANSI escape sequences and control characters, then truncate to `max_chars`
///
/// CSI sequences (`ESC [ ... letter`) and OSC sequences (`ESC ] ... BEL` or
/// `ESC ] ... ESC \`) are dropped whole. Tabs and newlines are kept. Truncated
/// output ends with an ellipsis.
///
/// # Examples
///
/// ```
/// use pastpaper_tools::utils::sanitize_for_terminal;
///
/// assert_eq!(sanitize_for_terminal("\x1b[31mok\x1b[0m", 100), "ok");
/// assert_eq!(sanitize_for_terminal("abcdef", 3), "abc…");
/// ```
pub fn sanitize_for_terminal(text: &str, max_chars: usize) -> String {
    let mut result = String::with_capacity(text.len().min(max_chars * 4));
    let mut kept = 0;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            match chars.peek() {
                Some('[') => {
                    chars.next();
                    for next in chars.by_ref() {
                        if next.is_ascii_alphabetic() {
                            break;
                        }
                    }
                }
                Some(']') => {
                    chars.next();
                    while let Some(next) = chars.next() {
                        if next == '\x07' {
                            break;
                        }
                        if next == '\x1b' && chars.peek() == Some(&'\\') {
                            chars.next();
                            break;
                        }
                    }
                }
                _ => {}
            }
            continue;
        }

        if ch.is_control() && ch != '\t' && ch != '\n' {
            continue;
        }

        if kept == max_chars {
            result.push('…');
            break;
        }
        result.push(ch);
        kept += 1;
    }

    result
}
