//! Chapter segmentation.
//!
//! The document's full text is split on every literal, case-sensitive
//! occurrence of the delimiter word. The delimiter is a bare word, so
//! it can also match inside running prose and fragment a section
//! mid-sentence; that imprecision is deliberate and preserved as-is.

/// Display name of the span before the first delimiter occurrence.
pub const PREFACE_NAME: &str = "Introduction/Preface";

/// One contiguous span of document text between delimiter occurrences.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    /// Raw split index; dropped empty spans leave gaps.
    pub index: usize,
    /// Display name used as the report key.
    pub name: String,
    /// The span's text, untrimmed.
    pub text: String,
}

/// Display name for the span at the given raw split index.
fn section_name(delimiter: &str, index: usize) -> String {
    if index == 0 {
        PREFACE_NAME.to_string()
    } else {
        format!("{delimiter} {index}")
    }
}

/// Split full text into named sections on the delimiter.
///
/// Spans whose trimmed text is empty are dropped and produce no
/// section. Indices refer to the raw split positions, so the names of
/// surviving sections keep their document-order numbering even when
/// earlier spans were dropped.
pub fn split_sections(full_text: &str, delimiter: &str) -> Vec<Section> {
    full_text
        .split(delimiter)
        .enumerate()
        .filter(|(_, text)| !text.trim().is_empty())
        .map(|(index, text)| Section {
            index,
            name: section_name(delimiter, index),
            text: text.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_delimiter_yields_single_preface() {
        let sections = split_sections("just some text", "Chapter");

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].index, 0);
        assert_eq!(sections[0].name, PREFACE_NAME);
        assert_eq!(sections[0].text, "just some text");
    }

    #[test]
    fn test_two_occurrences_yield_three_sections() {
        let text = "intro Chapter one body Chapter two body";
        let sections = split_sections(text, "Chapter");

        assert_eq!(sections.len(), 3);
        assert_eq!(sections[0].name, PREFACE_NAME);
        assert_eq!(sections[1].name, "Chapter 1");
        assert_eq!(sections[2].name, "Chapter 2");
        assert_eq!(sections[1].text, " one body ");
    }

    #[test]
    fn test_leading_delimiter_drops_empty_preface() {
        let sections = split_sections("Chapter first words", "Chapter");

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].index, 1);
        assert_eq!(sections[0].name, "Chapter 1");
    }

    #[test]
    fn test_adjacent_delimiters_leave_index_gaps() {
        // "ChapterChapter tail" splits into ["", "", " tail"]; only the
        // last survives and keeps its raw index.
        let sections = split_sections("ChapterChapter tail", "Chapter");

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].index, 2);
        assert_eq!(sections[0].name, "Chapter 2");
    }

    #[test]
    fn test_split_is_case_sensitive() {
        let sections = split_sections("before chapter after", "Chapter");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].name, PREFACE_NAME);
    }

    #[test]
    fn test_delimiter_matches_inside_prose() {
        // A mid-sentence occurrence splits exactly like a heading.
        let sections = split_sections("see the next Chapter for details", "Chapter");

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].text, "see the next ");
        assert_eq!(sections[1].text, " for details");
    }

    #[test]
    fn test_whitespace_only_spans_are_dropped() {
        let sections = split_sections("  \n Chapter one", "Chapter");

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].name, "Chapter 1");
    }

    #[test]
    fn test_empty_text_yields_no_sections() {
        assert!(split_sections("", "Chapter").is_empty());
        assert!(split_sections("   \n\t", "Chapter").is_empty());
    }

    #[test]
    fn test_custom_delimiter() {
        let sections = split_sections("pre Part a Part b", "Part");
        assert_eq!(sections[1].name, "Part 1");
        assert_eq!(sections[2].name, "Part 2");
    }
}
