//! Content assembler: fixed layout of the four sections plus hashtags.
//!
//! `hook`, `story`, `insight`, `cta` and the hashtag line are separated by a
//! blank line; hashtags come last, each prefixed with `#`.

use serde::{Deserialize, Serialize};

/// The sections of one post, before or after assembly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostSections {
    pub hook: String,
    pub story: String,
    pub insight: String,
    pub cta: String,
    pub hashtags: Vec<String>,
}

impl PostSections {
    pub fn assemble(&self) -> String {
        assemble_content(&self.hook, &self.story, &self.insight, &self.cta, &self.hashtags)
    }
}

pub fn assemble_content(
    hook: &str,
    story: &str,
    insight: &str,
    cta: &str,
    hashtags: &[String],
) -> String {
    let tags = hashtags
        .iter()
        .map(|tag| format!("#{tag}"))
        .collect::<Vec<_>>()
        .join(" ");

    format!("{hook}\n\n{story}\n\n{insight}\n\n{cta}\n\n{tags}")
        .trim()
        .to_string()
}

/// Splits assembled text back into sections.
///
/// Paragraphs are separated by blank lines. A trailing paragraph made only of
/// `#tag` tokens becomes the hashtag list. Of the remaining paragraphs the
/// first is the hook, the last is the CTA, the one before it the insight, and
/// everything in between the story.
pub fn disassemble_content(text: &str) -> PostSections {
    let normalized = text.replace("\r\n", "\n");
    let mut paragraphs: Vec<&str> = normalized
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();

    let mut sections = PostSections::default();

    if let Some(last) = paragraphs.last() {
        let tokens: Vec<&str> = last.split_whitespace().collect();
        if tokens.iter().all(|t| t.len() > 1 && t.starts_with('#')) {
            sections.hashtags = tokens
                .iter()
                .map(|t| t.trim_start_matches('#').to_string())
                .collect();
            paragraphs.pop();
        }
    }

    match paragraphs.as_slice() {
        [] => {}
        [hook] => sections.hook = hook.to_string(),
        [hook, cta] => {
            sections.hook = hook.to_string();
            sections.cta = cta.to_string();
        }
        [hook, middle @ .., insight, cta] => {
            sections.hook = hook.to_string();
            sections.story = middle.join("\n\n");
            sections.insight = insight.to_string();
            sections.cta = cta.to_string();
        }
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_assemble_layout() {
        let text = assemble_content(
            "Hook line",
            "A story.",
            "An insight.",
            "Thoughts?",
            &tags(&["rust", "career"]),
        );
        assert_eq!(
            text,
            "Hook line\n\nA story.\n\nAn insight.\n\nThoughts?\n\n#rust #career"
        );
    }

    #[test]
    fn test_assemble_yields_five_segments_and_all_hashtags() {
        let hashtags = tags(&["ai", "leadership", "growth", "tech"]);
        let text = assemble_content("H", "S", "I", "C", &hashtags);
        let segments: Vec<&str> = text.split("\n\n").collect();
        assert_eq!(segments.len(), 5);
        assert!(segments.iter().all(|s| !s.is_empty()));

        let tag_line: Vec<&str> = segments[4].split(' ').collect();
        assert_eq!(tag_line.len(), hashtags.len());
        assert!(tag_line.iter().all(|t| t.starts_with('#')));
    }

    #[test]
    fn test_assemble_trims_outer_whitespace() {
        let text = assemble_content("  Hook", "S", "I", "C", &[]);
        assert!(text.starts_with("Hook"));
        assert!(text.ends_with("C"));
    }

    #[test]
    fn test_disassemble_inverts_assemble() {
        let original = PostSections {
            hook: "Hook".into(),
            story: "Story part one.".into(),
            insight: "Insight.".into(),
            cta: "What do you think?".into(),
            hashtags: tags(&["a", "b", "c"]),
        };
        assert_eq!(disassemble_content(&original.assemble()), original);
    }

    #[test]
    fn test_disassemble_multi_paragraph_story_without_hashtags() {
        let text = "Hook\n\nStory 1\n\nStory 2\n\nInsight\n\nCTA?";
        let sections = disassemble_content(text);
        assert_eq!(sections.hook, "Hook");
        assert_eq!(sections.story, "Story 1\n\nStory 2");
        assert_eq!(sections.insight, "Insight");
        assert_eq!(sections.cta, "CTA?");
        assert!(sections.hashtags.is_empty());
    }

    #[test]
    fn test_disassemble_short_content() {
        let one = disassemble_content("Just a single paragraph.");
        assert_eq!(one.hook, "Just a single paragraph.");
        assert!(one.cta.is_empty());

        let two = disassemble_content("Hook\r\n\r\nCTA\n\n#x");
        assert_eq!(two.hook, "Hook");
        assert_eq!(two.cta, "CTA");
        assert_eq!(two.hashtags, vec!["x"]);
    }

    #[test]
    fn test_paragraph_with_prose_is_not_hashtags() {
        let sections = disassemble_content("Hook\n\nLove #rust a lot");
        assert!(sections.hashtags.is_empty());
        assert_eq!(sections.cta, "Love #rust a lot");
    }
}
