//! Question Generator — the one component with real contract logic.
//!
//! Flow: trim JD and CV to their token budgets → compose the two-turn
//! prompt → one forced tool call → parse and validate the arguments.
//! A failed or malformed call yields no question set; nothing is retried.

use std::sync::Arc;

use tracing::info;

use crate::generation::prompts::{QUESTIONS_HUMAN_TEMPLATE, QUESTIONS_SYSTEM};
use crate::generation::questions::{tool_definition, InterviewQuestionSet};
use crate::generation::truncate::TokenTrimmer;
use crate::generation::{GenerationError, GenerationParseError};
use crate::llm_client::ChatModel;

pub struct QuestionGenerator {
    model: Arc<dyn ChatModel>,
    trimmer: TokenTrimmer,
    cv_max_tokens: usize,
    jd_max_tokens: usize,
}

impl QuestionGenerator {
    pub fn new(
        model: Arc<dyn ChatModel>,
        cv_max_tokens: usize,
        jd_max_tokens: usize,
    ) -> anyhow::Result<Self> {
        Ok(QuestionGenerator {
            model,
            trimmer: TokenTrimmer::new()?,
            cv_max_tokens,
            jd_max_tokens,
        })
    }

    /// Generates one interview question set for a job description and a
    /// candidate resume. Both inputs are prefix-trimmed to their configured
    /// token budgets before prompting; the result is validated against the
    /// 5/10/≥3 invariants and is never returned partially populated.
    pub async fn generate(
        &self,
        jd: &str,
        cv: &str,
    ) -> Result<InterviewQuestionSet, GenerationError> {
        let jd = self.trimmer.trim(jd, self.jd_max_tokens);
        let cv = self.trimmer.trim(cv, self.cv_max_tokens);

        let user_turn = QUESTIONS_HUMAN_TEMPLATE
            .replace("{JD}", &jd)
            .replace("{CV}", &cv);

        let tool = tool_definition();
        let arguments = self
            .model
            .forced_tool_call(QUESTIONS_SYSTEM, &user_turn, &tool)
            .await?
            .ok_or(GenerationParseError::MissingToolCall)?;

        let set: InterviewQuestionSet =
            serde_json::from_str(&arguments).map_err(GenerationParseError::InvalidArguments)?;
        set.validate()?;

        info!(
            "Generated question set: {} multiple-choice, {} descriptive",
            set.multiple_choice_questions.len(),
            set.descriptive_questions.len()
        );
        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::questions::test_fixtures::valid_set;
    use crate::llm_client::{LlmError, ToolDefinition};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Scripted stand-in for the hosted model. Returns a canned reply and
    /// records the prompt it was sent.
    struct ScriptedModel {
        reply: Option<String>,
        seen_user_turn: Mutex<Option<String>>,
    }

    impl ScriptedModel {
        fn replying(reply: Option<String>) -> Arc<Self> {
            Arc::new(ScriptedModel {
                reply,
                seen_user_turn: Mutex::new(None),
            })
        }

        fn user_turn(&self) -> String {
            self.seen_user_turn.lock().unwrap().clone().unwrap()
        }
    }

    #[async_trait]
    impl ChatModel for ScriptedModel {
        async fn forced_tool_call(
            &self,
            _system: &str,
            user: &str,
            _tool: &ToolDefinition,
        ) -> Result<Option<String>, LlmError> {
            *self.seen_user_turn.lock().unwrap() = Some(user.to_string());
            Ok(self.reply.clone())
        }
    }

    fn generator(model: Arc<ScriptedModel>) -> QuestionGenerator {
        QuestionGenerator::new(model, 2700, 2700).unwrap()
    }

    #[tokio::test]
    async fn test_well_formed_tool_call_yields_full_set() {
        let reply = serde_json::to_string(&valid_set()).unwrap();
        let model = ScriptedModel::replying(Some(reply));
        let generator = generator(model);

        let set = generator
            .generate(
                "Looking for a Sales Manager with 5 years experience",
                "Seasoned sales professional, led a regional team of twelve.",
            )
            .await
            .unwrap();

        assert_eq!(set.multiple_choice_questions.len(), 5);
        assert_eq!(set.descriptive_questions.len(), 10);
        assert!(set
            .multiple_choice_questions
            .iter()
            .all(|mcq| mcq.choices.len() >= 3));
    }

    #[tokio::test]
    async fn test_short_inputs_reach_the_prompt_unmodified() {
        let reply = serde_json::to_string(&valid_set()).unwrap();
        let model = ScriptedModel::replying(Some(reply));
        let generator = generator(model.clone());

        let jd = "Looking for a Sales Manager with 5 years experience";
        let cv = "Seasoned sales professional with a strong track record.";
        generator.generate(jd, cv).await.unwrap();

        let user_turn = model.user_turn();
        assert_eq!(
            user_turn,
            format!("@Job Description\n{jd}\n\n@Candidate Resume\n{cv}")
        );
    }

    #[tokio::test]
    async fn test_oversized_cv_is_trimmed_to_budget() {
        let reply = serde_json::to_string(&valid_set()).unwrap();
        let model = ScriptedModel::replying(Some(reply));
        let generator = generator(model.clone());

        let cv = "experience ".repeat(6000);
        generator.generate("Short JD", &cv).await.unwrap();

        let user_turn = model.user_turn();
        let sent_cv = user_turn
            .split("@Candidate Resume\n")
            .nth(1)
            .expect("prompt must carry the resume turn");
        assert!(cv.starts_with(sent_cv), "trim must be a prefix of the CV");

        let trimmer = TokenTrimmer::new().unwrap();
        assert!(trimmer.count(sent_cv) <= 2700);
        assert!(trimmer.count(sent_cv) < trimmer.count(&cv));
    }

    #[tokio::test]
    async fn test_missing_tool_call_is_a_parse_error() {
        let model = ScriptedModel::replying(None);
        let generator = generator(model);

        let err = generator.generate("JD", "CV").await.unwrap_err();
        assert!(matches!(
            err,
            GenerationError::Parse(GenerationParseError::MissingToolCall)
        ));
    }

    #[tokio::test]
    async fn test_undecodable_arguments_are_a_parse_error() {
        let model = ScriptedModel::replying(Some("{not json".to_string()));
        let generator = generator(model);

        let err = generator.generate("JD", "CV").await.unwrap_err();
        assert!(matches!(
            err,
            GenerationError::Parse(GenerationParseError::InvalidArguments(_))
        ));
    }

    #[tokio::test]
    async fn test_count_violation_yields_error_not_partial_set() {
        let mut set = valid_set();
        set.descriptive_questions.truncate(4);
        let model = ScriptedModel::replying(Some(serde_json::to_string(&set).unwrap()));
        let generator = generator(model);

        let err = generator.generate("JD", "CV").await.unwrap_err();
        assert!(matches!(
            err,
            GenerationError::Parse(GenerationParseError::DescriptiveCount(4))
        ));
    }
}
