// ABOUTME: Builds the sentinel script document written when script generation fails.
// ABOUTME: The failure marker and diagnostic are emitted as comment lines so the file stays inspectable.

/// First line of every script document produced by a failed generation.
pub const SCRIPT_FAILURE_MARKER: &str = "# Failed to generate test scripts:";

/// Render a failure diagnostic as a commented script document.
pub fn failure_document(diagnostic: &str) -> String {
    let mut doc = String::from(SCRIPT_FAILURE_MARKER);
    for line in diagnostic.lines() {
        doc.push_str("\n# ");
        doc.push_str(line);
    }
    doc.push('\n');
    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_marker_and_comments_every_line() {
        let doc = failure_document("status 500\nmodel not found");

        assert!(doc.starts_with(SCRIPT_FAILURE_MARKER));
        assert_eq!(
            doc,
            "# Failed to generate test scripts:\n# status 500\n# model not found\n"
        );
    }

    #[test]
    fn empty_diagnostic_still_has_marker() {
        assert_eq!(failure_document(""), format!("{}\n", SCRIPT_FAILURE_MARKER));
    }
}
