use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// Sentinel returned when no snippet can be produced, either because the
/// file is unreadable or because no sentence contains a query term.
pub const NO_PREVIEW: &str = "No preview available.";

fn sentence_splitter() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\.\s+").expect("valid regex"))
}

/// First sentence of the document containing any of `terms`.
///
/// The document is re-read fresh from disk; content is never cached from
/// ingestion. Sentences are split on a period followed by whitespace; the
/// matching sentence is trimmed and returned with a trailing period. Terms
/// match as case-insensitive substrings, not whole words.
///
/// Returns [`NO_PREVIEW`] when the file cannot be read or no sentence
/// matches; snippet extraction never fails.
pub fn snippet(doc_id: &str, terms: &[String]) -> String {
    let Ok(content) = fs::read_to_string(Path::new(doc_id)) else {
        return NO_PREVIEW.to_string();
    };

    let terms: Vec<String> = terms.iter().map(|t| t.to_lowercase()).collect();
    for sentence in sentence_splitter().split(&content) {
        let trimmed = sentence.trim();
        let lowered = trimmed.to_lowercase();
        if terms.iter().any(|t| !t.is_empty() && lowered.contains(t.as_str())) {
            return format!("{trimmed}.");
        }
    }

    NO_PREVIEW.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn terms(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn write_doc(dir: &tempfile::TempDir, name: &str, content: &str) -> String {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn returns_first_matching_sentence_with_trailing_period() {
        let dir = tempfile::tempdir().unwrap();
        let doc = write_doc(
            &dir,
            "movie.txt",
            "A quiet opening. The action never stops. More text follows.",
        );
        assert_eq!(snippet(&doc, &terms(&["action"])), "The action never stops.");
    }

    #[test]
    fn matches_case_insensitively_as_substring() {
        let dir = tempfile::tempdir().unwrap();
        let doc = write_doc(&dir, "movie.txt", "Pure ACTION-packed fun. The end.");
        assert_eq!(snippet(&doc, &terms(&["action"])), "Pure ACTION-packed fun.");
        // Substring match: "java" matches inside "JavaScript" here, unlike
        // index lookups which are whole-token.
        let doc2 = write_doc(&dir, "code.txt", "We love JavaScript a lot. Yes.");
        assert_eq!(snippet(&doc2, &terms(&["java"])), "We love JavaScript a lot.");
    }

    #[test]
    fn any_term_is_enough() {
        let dir = tempfile::tempdir().unwrap();
        let doc = write_doc(&dir, "movie.txt", "Romance on screen. Nothing else.");
        assert_eq!(
            snippet(&doc, &terms(&["spaceship", "romance"])),
            "Romance on screen."
        );
    }

    #[test]
    fn no_matching_sentence_yields_sentinel() {
        let dir = tempfile::tempdir().unwrap();
        let doc = write_doc(&dir, "movie.txt", "Nothing relevant here. At all.");
        assert_eq!(snippet(&doc, &terms(&["spaceship"])), NO_PREVIEW);
    }

    #[test]
    fn unreadable_file_yields_sentinel() {
        let missing = std::env::temp_dir()
            .join("sift_missing_snippet_doc.txt")
            .to_string_lossy()
            .into_owned();
        assert_eq!(snippet(&missing, &terms(&["anything"])), NO_PREVIEW);
    }

    #[test]
    fn trailing_sentence_without_period_still_matches() {
        let dir = tempfile::tempdir().unwrap();
        let doc = write_doc(&dir, "movie.txt", "First part. great stunts at the end");
        assert_eq!(
            snippet(&doc, &terms(&["stunts"])),
            "great stunts at the end."
        );
    }
}
