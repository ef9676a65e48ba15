//! Shared utility functions.

/// Remove markdown code-fence markers from a model response.
///
/// Models frequently wrap requested JSON in ` ```json ... ``` ` fences even
/// when told not to. All fence markers are removed and the result trimmed,
/// leaving the bare encoding for the decoder.
pub fn strip_code_fences(raw: &str) -> String {
    raw.replace("```json", "").replace("```", "").trim().to_string()
}

/// Remove `<...>` markup spans from a winning candidate text.
///
/// Candidates are asked to structure their answers with angle-bracket
/// section tags to ease judging; the tags are stripped before the text is
/// accumulated. An unclosed `<` is kept as-is.
pub fn strip_markup_tags(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(open) = rest.find('<') {
        out.push_str(&rest[..open]);
        match rest[open..].find('>') {
            Some(close) => rest = &rest[open + close + 1..],
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_fences_json_block() {
        let raw = "```json\n[\"a\", \"b\"]\n```";
        assert_eq!(strip_code_fences(raw), "[\"a\", \"b\"]");
    }

    #[test]
    fn strip_fences_bare_block() {
        let raw = "```\n{\"x\": 1}\n```";
        assert_eq!(strip_code_fences(raw), "{\"x\": 1}");
    }

    #[test]
    fn strip_fences_no_op() {
        assert_eq!(strip_code_fences("[1, 2]"), "[1, 2]");
    }

    #[test]
    fn strip_tags_removes_spans() {
        let text = "<Key Concept/Direct Answer />The answer.<Supporting Evidence />Because.";
        assert_eq!(strip_markup_tags(text), "The answer.Because.");
    }

    #[test]
    fn strip_tags_keeps_plain_text() {
        assert_eq!(strip_markup_tags("no tags here"), "no tags here");
    }

    #[test]
    fn strip_tags_unclosed_bracket_kept() {
        assert_eq!(strip_markup_tags("a < b"), "a < b");
    }

    #[test]
    fn strip_tags_multiline() {
        let text = "<Answer>\nline one\n</Answer>\n";
        assert_eq!(strip_markup_tags(text), "\nline one\n\n");
    }
}
