//! The interview question set: wire schema, parse-time validation, and the
//! tool definition the model is forced to invoke.

use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::ToolDefinition;

/// Counts are instructed in the system prompt AND enforced on the response:
/// a set that deviates is rejected outright, never returned partially filled.
pub const MULTIPLE_CHOICE_COUNT: usize = 5;
pub const DESCRIPTIVE_COUNT: usize = 10;
pub const MIN_CHOICES: usize = 3;

pub const TOOL_NAME: &str = "InterviewQuestions";

/// A multiple-choice question with at least [`MIN_CHOICES`] options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultipleChoiceQuestion {
    pub question: String,
    pub choices: Vec<String>,
}

/// An open-ended descriptive question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DescriptiveQuestion {
    pub question: String,
}

/// One generated question set. Owned by the caller; never cached or persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewQuestionSet {
    pub multiple_choice_questions: Vec<MultipleChoiceQuestion>,
    pub descriptive_questions: Vec<DescriptiveQuestion>,
}

/// The model's structured reply could not be turned into a valid question
/// set. Surfaced explicitly to the presentation boundary — never swallowed.
#[derive(Debug, Error)]
pub enum GenerationParseError {
    #[error("model returned no tool call")]
    MissingToolCall,

    #[error("tool arguments were not a valid question set: {0}")]
    InvalidArguments(#[from] serde_json::Error),

    #[error("expected 5 multiple-choice questions, got {0}")]
    MultipleChoiceCount(usize),

    #[error("expected 10 descriptive questions, got {0}")]
    DescriptiveCount(usize),

    #[error("multiple-choice question {index} has {got} choices, minimum is 3")]
    TooFewChoices { index: usize, got: usize },
}

impl InterviewQuestionSet {
    /// Checks the structural invariants: exactly 5 multiple-choice and 10
    /// descriptive questions, every multiple-choice item with ≥ 3 choices.
    pub fn validate(&self) -> Result<(), GenerationParseError> {
        if self.multiple_choice_questions.len() != MULTIPLE_CHOICE_COUNT {
            return Err(GenerationParseError::MultipleChoiceCount(
                self.multiple_choice_questions.len(),
            ));
        }
        if self.descriptive_questions.len() != DESCRIPTIVE_COUNT {
            return Err(GenerationParseError::DescriptiveCount(
                self.descriptive_questions.len(),
            ));
        }
        for (index, mcq) in self.multiple_choice_questions.iter().enumerate() {
            if mcq.choices.len() < MIN_CHOICES {
                return Err(GenerationParseError::TooFewChoices {
                    index,
                    got: mcq.choices.len(),
                });
            }
        }
        Ok(())
    }
}

/// Tool definition whose parameter schema mirrors [`InterviewQuestionSet`]
/// exactly. The model is forced to call this tool by name.
pub fn tool_definition() -> ToolDefinition {
    ToolDefinition {
        name: TOOL_NAME,
        description: "Represents a set of interview questions.",
        parameters: json!({
            "type": "object",
            "properties": {
                "multiple_choice_questions": {
                    "type": "array",
                    "description": "List of multiple-choice questions.",
                    "items": {
                        "type": "object",
                        "properties": {
                            "question": {
                                "type": "string",
                                "description": "MCQ Question for Candidate"
                            },
                            "choices": {
                                "type": "array",
                                "items": {"type": "string"},
                                "minItems": MIN_CHOICES,
                                "description": "List of choices for the question."
                            }
                        },
                        "required": ["question", "choices"]
                    }
                },
                "descriptive_questions": {
                    "type": "array",
                    "description": "List of open-ended descriptive questions.",
                    "items": {
                        "type": "object",
                        "properties": {
                            "question": {
                                "type": "string",
                                "description": "Descriptive question for Candidate"
                            }
                        },
                        "required": ["question"]
                    }
                }
            },
            "required": ["multiple_choice_questions", "descriptive_questions"]
        }),
    }
}

#[cfg(test)]
pub(crate) mod test_fixtures {
    use super::*;

    /// A structurally valid set: 5 MCQs with 4 choices each, 10 descriptive.
    pub fn valid_set() -> InterviewQuestionSet {
        InterviewQuestionSet {
            multiple_choice_questions: (0..MULTIPLE_CHOICE_COUNT)
                .map(|i| MultipleChoiceQuestion {
                    question: format!("MCQ {i}?"),
                    choices: vec![
                        "Option A".to_string(),
                        "Option B".to_string(),
                        "Option C".to_string(),
                        "Option D".to_string(),
                    ],
                })
                .collect(),
            descriptive_questions: (0..DESCRIPTIVE_COUNT)
                .map(|i| DescriptiveQuestion {
                    question: format!("Describe {i}."),
                })
                .collect(),
        }
    }
}
