//! Filename Sanitization
//!
//! Caller-supplied filenames are untrusted input from the rendered layer.
//! Sanitization is total: any string (or no string at all) maps to a legal
//! single-segment filename, never to an error.
//!
//! The policy, applied in order:
//! 1. absent or empty name → `download_<unix-millis>`
//! 2. every character outside `[a-zA-Z0-9._-]` becomes `_`
//! 3. runs of two or more consecutive dots collapse to a single dot
//!
//! Step 2 removes path separators before step 3 runs, so a traversal attempt
//! like `a/../../b.txt` degrades to `a_._._b.txt`, a plain filename inside
//! the target directory.

use bridge_traits::time::Clock;

/// Produce a safe single-segment filename from untrusted input.
///
/// The output always matches `^[a-zA-Z0-9._-]+$` and never contains `..`.
/// Sanitizing an already-safe name returns it unchanged.
pub fn sanitize_file_name(raw: Option<&str>, clock: &dyn Clock) -> String {
    let raw = match raw {
        Some(name) if !name.is_empty() => name,
        _ => return format!("download_{}", clock.unix_timestamp_millis()),
    };

    let replaced: String = raw
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();

    collapse_dot_runs(&replaced)
}

fn collapse_dot_runs(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut previous_was_dot = false;
    for c in name.chars() {
        if c == '.' {
            if !previous_was_dot {
                out.push('.');
            }
            previous_was_dot = true;
        } else {
            out.push(c);
            previous_was_dot = false;
        }
    }
    out
}
