//! Safety scan for embedded SVG payloads.
//!
//! Fragments arrive from an LLM and are embedded verbatim into a display
//! surface, so a payload carrying script is a direct injection path. The
//! scan is an allow-nothing check for the executable constructs SVG can
//! smuggle; it never modifies the payload.

use memchr::memmem;

/// Check a fragment payload for executable content.
///
/// Returns `Err` naming the first offending construct found. The check is
/// ASCII-case-insensitive and deliberately conservative: a false positive
/// costs one un-rendered chart, a false negative runs attacker script.
pub fn check(payload: &str) -> Result<(), &'static str> {
    let lower = payload.to_ascii_lowercase();
    let bytes = lower.as_bytes();

    if memmem::find(bytes, b"<script").is_some() {
        return Err("<script> element");
    }
    if memmem::find(bytes, b"javascript:").is_some() {
        return Err("javascript: URL");
    }
    if memmem::find(bytes, b"<foreignobject").is_some() {
        return Err("<foreignObject> element");
    }
    if has_event_handler(bytes) {
        return Err("event-handler attribute");
    }

    Ok(())
}

/// Detect `on…=` attributes (`onload=`, `onclick=`, ...).
///
/// An occurrence counts when `on` follows an attribute boundary (space,
/// tab, newline, or quote) and a run of letters leads to `=`.
fn has_event_handler(lower: &[u8]) -> bool {
    let finder = memmem::Finder::new(b"on");
    for pos in finder.find_iter(lower) {
        if pos == 0 {
            continue;
        }
        match lower[pos - 1] {
            b' ' | b'\t' | b'\n' | b'\r' | b'"' | b'\'' => {}
            _ => continue,
        }

        let mut i = pos + 2;
        let mut saw_name = false;
        while i < lower.len() && lower[i].is_ascii_alphabetic() {
            saw_name = true;
            i += 1;
        }
        while i < lower.len() && lower[i] == b' ' {
            i += 1;
        }
        if saw_name && i < lower.len() && lower[i] == b'=' {
            return true;
        }
    }
    false
}
