//! Prompt vocabulary. The fixed niche / post type / tone enumerations and the
//! descriptive fragments each one contributes to a generation prompt.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unsupported {kind}: {value}")]
pub struct UnknownValue {
    pub kind: &'static str,
    pub value: String,
}

/// A `{value, label}` pair for the UI's select boxes.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogOption {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Niche {
    Technology,
    Marketing,
    Finance,
    Entrepreneurship,
    Leadership,
    Sales,
    Hr,
    Design,
    Healthcare,
    Education,
}

impl Niche {
    pub const ALL: [Niche; 10] = [
        Niche::Technology,
        Niche::Marketing,
        Niche::Finance,
        Niche::Entrepreneurship,
        Niche::Leadership,
        Niche::Sales,
        Niche::Hr,
        Niche::Design,
        Niche::Healthcare,
        Niche::Education,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Niche::Technology => "technology",
            Niche::Marketing => "marketing",
            Niche::Finance => "finance",
            Niche::Entrepreneurship => "entrepreneurship",
            Niche::Leadership => "leadership",
            Niche::Sales => "sales",
            Niche::Hr => "hr",
            Niche::Design => "design",
            Niche::Healthcare => "healthcare",
            Niche::Education => "education",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Niche::Technology => "Technology",
            Niche::Marketing => "Marketing",
            Niche::Finance => "Finance",
            Niche::Entrepreneurship => "Entrepreneurship",
            Niche::Leadership => "Leadership",
            Niche::Sales => "Sales",
            Niche::Hr => "Human Resources",
            Niche::Design => "Design",
            Niche::Healthcare => "Healthcare",
            Niche::Education => "Education",
        }
    }

    /// Audience description for the system prompt.
    pub fn prompt_fragment(self) -> &'static str {
        match self {
            Niche::Technology => "technology, software development, AI, programming, tech trends",
            Niche::Marketing => {
                "digital marketing, social media, content marketing, SEO, growth strategies"
            }
            Niche::Finance => {
                "finance, investing, personal finance, wealth management, market analysis"
            }
            Niche::Entrepreneurship => {
                "entrepreneurship, startups, business growth, innovation, venture capital"
            }
            Niche::Leadership => {
                "leadership, management, team building, executive strategies, organizational culture"
            }
            Niche::Sales => {
                "sales, business development, revenue growth, client relationships, sales strategies"
            }
            Niche::Hr => {
                "human resources, talent acquisition, company culture, employee engagement, HR strategies"
            }
            Niche::Design => "design, UX/UI, creative work, visual communication, design thinking",
            Niche::Healthcare => {
                "healthcare, medical technology, patient care, health innovation, medical industry"
            }
            Niche::Education => {
                "education, e-learning, teaching, educational technology, learning strategies"
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostType {
    Story,
    Tips,
    Question,
    Achievement,
    Trend,
    Mistake,
    Controversial,
}

impl PostType {
    pub const ALL: [PostType; 7] = [
        PostType::Story,
        PostType::Tips,
        PostType::Question,
        PostType::Achievement,
        PostType::Trend,
        PostType::Mistake,
        PostType::Controversial,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PostType::Story => "story",
            PostType::Tips => "tips",
            PostType::Question => "question",
            PostType::Achievement => "achievement",
            PostType::Trend => "trend",
            PostType::Mistake => "mistake",
            PostType::Controversial => "controversial",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PostType::Story => "Personal Story",
            PostType::Tips => "Tips & Strategies",
            PostType::Question => "Engaging Question",
            PostType::Achievement => "Achievement",
            PostType::Trend => "Industry Trend",
            PostType::Mistake => "Lesson from Mistake",
            PostType::Controversial => "Controversial Take",
        }
    }

    pub fn prompt_fragment(self) -> &'static str {
        match self {
            PostType::Story => "personal story, experience, journey, narrative format",
            PostType::Tips => "tips, strategies, advice, how-to guide, actionable insights",
            PostType::Question => {
                "engaging question, thought-provoking, discussion starter, audience interaction"
            }
            PostType::Achievement => {
                "achievement celebration, success story, milestone, accomplishment"
            }
            PostType::Trend => {
                "industry trend analysis, market insights, future predictions, trend commentary"
            }
            PostType::Mistake => {
                "lessons from mistakes, failure story, learning experience, growth mindset"
            }
            PostType::Controversial => {
                "thought-provoking opinion, controversial take, debate starter, unique perspective"
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Professional,
    Inspirational,
    Conversational,
    Authoritative,
    Vulnerable,
}

impl Tone {
    pub const ALL: [Tone; 5] = [
        Tone::Professional,
        Tone::Inspirational,
        Tone::Conversational,
        Tone::Authoritative,
        Tone::Vulnerable,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Inspirational => "inspirational",
            Tone::Conversational => "conversational",
            Tone::Authoritative => "authoritative",
            Tone::Vulnerable => "vulnerable",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tone::Professional => "Professional",
            Tone::Inspirational => "Inspirational",
            Tone::Conversational => "Conversational",
            Tone::Authoritative => "Authoritative",
            Tone::Vulnerable => "Vulnerable & Authentic",
        }
    }

    pub fn prompt_fragment(self) -> &'static str {
        match self {
            Tone::Professional => {
                "professional tone, formal language, business-appropriate, polished"
            }
            Tone::Inspirational => "inspirational tone, motivational, uplifting, encouraging",
            Tone::Conversational => {
                "conversational tone, friendly, approachable, casual but professional"
            }
            Tone::Authoritative => "authoritative tone, expert voice, confident, knowledgeable",
            Tone::Vulnerable => "vulnerable and authentic tone, honest, transparent, relatable",
        }
    }
}

macro_rules! impl_catalog_traits {
    ($ty:ty, $kind:literal) => {
        impl FromStr for $ty {
            type Err = UnknownValue;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                <$ty>::ALL
                    .into_iter()
                    .find(|v| v.as_str().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| UnknownValue {
                        kind: $kind,
                        value: wanted.to_string(),
                    })
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ty {
            pub fn options() -> Vec<CatalogOption> {
                <$ty>::ALL
                    .into_iter()
                    .map(|v| CatalogOption {
                        value: v.as_str(),
                        label: v.label(),
                    })
                    .collect()
            }
        }
    };
}

impl_catalog_traits!(Niche, "niche");
impl_catalog_traits!(PostType, "post type");
impl_catalog_traits!(Tone, "tone");

/// A validated (niche, post type, tone) selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub niche: Niche,
    pub post_type: PostType,
    pub tone: Tone,
}

impl Selection {
    pub fn parse(niche: &str, post_type: &str, tone: &str) -> Result<Self, UnknownValue> {
        Ok(Self {
            niche: niche.parse()?,
            post_type: post_type.parse()?,
            tone: tone.parse()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive_and_trimmed() {
        assert_eq!(" Technology ".parse::<Niche>().unwrap(), Niche::Technology);
        assert_eq!("TIPS".parse::<PostType>().unwrap(), PostType::Tips);
        assert_eq!("vulnerable".parse::<Tone>().unwrap(), Tone::Vulnerable);
    }

    #[test]
    fn test_unknown_value_names_kind() {
        let err = "crypto".parse::<Niche>().unwrap_err();
        assert_eq!(err.to_string(), "Unsupported niche: crypto");
        let err = "rant".parse::<PostType>().unwrap_err();
        assert_eq!(err.to_string(), "Unsupported post type: rant");
    }

    #[test]
    fn test_wire_form_round_trips_through_serde() {
        for niche in Niche::ALL {
            let json = serde_json::to_string(&niche).unwrap();
            assert_eq!(json, format!("\"{}\"", niche.as_str()));
        }
        let hr: Niche = serde_json::from_str("\"hr\"").unwrap();
        assert_eq!(hr.label(), "Human Resources");
    }

    #[test]
    fn test_options_cover_every_variant() {
        assert_eq!(Niche::options().len(), 10);
        assert_eq!(PostType::options().len(), 7);
        assert_eq!(Tone::options().len(), 5);
        assert_eq!(Tone::options()[4].label, "Vulnerable & Authentic");
    }

    #[test]
    fn test_selection_parse_reports_first_bad_field() {
        let err = Selection::parse("technology", "story", "smug").unwrap_err();
        assert_eq!(err.kind, "tone");
        let ok = Selection::parse("finance", "trend", "authoritative").unwrap();
        assert_eq!(ok.niche.prompt_fragment().split(", ").next(), Some("finance"));
    }
}
