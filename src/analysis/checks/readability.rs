//! Readability check: sentence length, action verbs and quantified results

use super::{AtsCheck, CheckOutcome, ScoreCard};
use crate::analysis::result::{Impact, IssueCategory, IssueType};
use crate::analysis::text::ResumeText;
use crate::model::ResumeData;

const BASE_SCORE: i32 = 85;
const LONG_SENTENCE_PENALTY: i32 = 10;
const ACTION_VERB_PENALTY: i32 = 15;
const QUANTIFICATION_PENALTY: i32 = 15;

const LONG_SENTENCE_WORDS: usize = 25;
const MAX_LONG_SENTENCES: usize = 3;

pub const ACTION_VERBS: [&str; 12] = [
    "achieved",
    "developed",
    "implemented",
    "managed",
    "led",
    "created",
    "improved",
    "increased",
    "designed",
    "built",
    "optimized",
    "delivered",
];

pub struct ReadabilityCheck;

impl ReadabilityCheck {
    /// Words are counted between single spaces, so the space after a terminator counts as one.
    fn long_sentence_count(text: &ResumeText) -> usize {
        text.sentences()
            .filter(|sentence| sentence.split(' ').count() > LONG_SENTENCE_WORDS)
            .count()
    }

    fn has_action_verbs(text: &ResumeText) -> bool {
        ACTION_VERBS.iter().any(|verb| text.lower.contains(verb))
    }
}

impl AtsCheck for ReadabilityCheck {
    fn category(&self) -> IssueCategory {
        IssueCategory::Readability
    }

    fn run(&self, _resume: &ResumeData, text: &ResumeText) -> CheckOutcome {
        let mut card = ScoreCard::new(self.category(), BASE_SCORE);

        let long_sentences = Self::long_sentence_count(text);
        if long_sentences > MAX_LONG_SENTENCES {
            card.penalize(
                LONG_SENTENCE_PENALTY,
                IssueType::Suggestion,
                "Long Sentences",
                &format!(
                    "{} sentences are longer than {} words, which makes them hard to scan.",
                    long_sentences, LONG_SENTENCE_WORDS
                ),
                "Break long sentences into concise bullet points of one idea each.",
                Impact::Low,
            );
        }

        if Self::has_action_verbs(text) {
            card.pass("Strong action verbs used");
        } else {
            card.penalize(
                ACTION_VERB_PENALTY,
                IssueType::Suggestion,
                "Limited Action Verbs",
                "Your descriptions rarely start with strong action verbs.",
                "Begin bullet points with verbs such as developed, led, designed, improved or delivered.",
                Impact::Medium,
            );
        }

        if text.contains_digit() {
            card.pass("Quantifiable achievements included");
        } else {
            card.penalize(
                QUANTIFICATION_PENALTY,
                IssueType::Suggestion,
                "No Quantifiable Results",
                "Your resume contains no numbers. Metrics make achievements concrete and credible.",
                "Add figures such as percentages, revenue, users served or time saved.",
                Impact::Medium,
            );
        }

        card.finish()
    }
}
