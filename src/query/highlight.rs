//! Case-insensitive term highlighting with merged spans.
//!
//! Every match of every term contributes a byte span; overlapping and
//! adjacent spans are merged before their boundaries go into one sorted
//! set. The original-case text is then walked once, toggling highlight
//! state at each boundary, so matches never nest or duplicate markers.

use std::collections::BTreeSet;

/// A maximal run of text that is either entirely highlighted or entirely
/// plain. Concatenating the `text` of all runs reproduces the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run<'a> {
    pub text: &'a str,
    pub highlighted: bool,
}

/// Byte offsets where highlight state toggles, sorted ascending.
///
/// Positions are found on a lowercased copy of `text` and apply to the
/// original-case text at the same offsets. Spans that overlap or touch are
/// merged first, so the returned boundaries strictly alternate between
/// span starts and span ends.
pub fn highlight_boundaries(text: &str, terms: &[String]) -> BTreeSet<usize> {
    let lowered = text.to_lowercase();

    let mut spans: Vec<(usize, usize)> = Vec::new();
    for term in terms {
        let term = term.to_lowercase();
        if term.is_empty() {
            continue;
        }
        let mut from = 0;
        while let Some(pos) = lowered[from..].find(&term) {
            let start = from + pos;
            spans.push((start, start + term.len()));
            // Step one character so overlapping occurrences are found too.
            from = start
                + lowered[start..]
                    .chars()
                    .next()
                    .map_or(1, |ch| ch.len_utf8());
        }
    }
    spans.sort_unstable();

    let mut boundaries = BTreeSet::new();
    let mut current: Option<(usize, usize)> = None;
    for (start, end) in spans {
        match current {
            Some((cur_start, cur_end)) if start <= cur_end => {
                current = Some((cur_start, cur_end.max(end)));
            }
            Some((cur_start, cur_end)) => {
                boundaries.insert(cur_start);
                boundaries.insert(cur_end);
                current = Some((start, end));
            }
            None => current = Some((start, end)),
        }
    }
    if let Some((start, end)) = current {
        boundaries.insert(start);
        boundaries.insert(end);
    }

    boundaries
}

/// Split `text` into alternating plain/highlighted runs.
///
/// Boundaries already passed, out of range, or off a character boundary of
/// the original text are skipped. Empty runs are not emitted.
pub fn runs<'a>(text: &'a str, boundaries: &BTreeSet<usize>) -> Vec<Run<'a>> {
    let mut out = Vec::new();
    let mut last = 0;
    let mut highlighted = false;

    for &pos in boundaries {
        if pos < last || pos > text.len() || !text.is_char_boundary(pos) {
            continue;
        }
        if pos > last {
            out.push(Run {
                text: &text[last..pos],
                highlighted,
            });
        }
        highlighted = !highlighted;
        last = pos;
    }

    if last < text.len() {
        out.push(Run {
            text: &text[last..],
            highlighted,
        });
    }

    out
}

/// Wrap every case-insensitive occurrence of `terms` in `text` with the
/// given marker pair, merging overlapping matches into continuous runs.
pub fn highlight(text: &str, terms: &[String], start_marker: &str, end_marker: &str) -> String {
    let boundaries = highlight_boundaries(text, terms);
    if boundaries.is_empty() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    for run in runs(text, &boundaries) {
        if run.highlighted {
            out.push_str(start_marker);
            out.push_str(run.text);
            out.push_str(end_marker);
        } else {
            out.push_str(run.text);
        }
    }
    out
}
