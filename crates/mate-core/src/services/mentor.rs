//! Mentor service - fills a prompt template, calls the completion port and
//! checks the reply against the expected shape.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::error::AdapterError;
use crate::domain::{FormData, SimulationResult, VerificationResult};
use crate::ports::{CompletionPort, CompletionRequest, PromptMessage};
use crate::prompts;

/// Model used when the configuration does not name one.
pub const DEFAULT_MODEL: &str = "gpt-4-turbo-preview";

/// Translates mentoring intents into completion calls.
///
/// Each operation is one template fill and one call. Nothing is retried or
/// cached; the service holds no per-request state and is shared behind an
/// `Arc` across handlers.
pub struct MentorService {
    completion: Arc<dyn CompletionPort>,
    model: String,
}

impl MentorService {
    /// Create a service that sends every request to `model`.
    pub fn new(completion: Arc<dyn CompletionPort>, model: impl Into<String>) -> Self {
        Self {
            completion,
            model: model.into(),
        }
    }

    /// Model identifier sent with each request.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Score the business viability of the step-1 and step-2 answers.
    ///
    /// Both maps are merged into one object; on a duplicate key the step-2
    /// value wins.
    pub async fn verify_phase1(
        &self,
        step1: &FormData,
        step2: &FormData,
    ) -> Result<VerificationResult, AdapterError> {
        let mut merged = step1.clone();
        merged.extend(step2.iter().map(|(k, v)| (k.clone(), v.clone())));

        let prompt = prompts::verification_prompt(&merged).map_err(encoding_error)?;
        self.complete_json("verify_phase1", prompt).await
    }

    /// Simulate the business model described by the full form.
    pub async fn simulate_business_model(
        &self,
        form: &FormData,
    ) -> Result<SimulationResult, AdapterError> {
        let prompt = prompts::simulation_prompt(form).map_err(encoding_error)?;
        self.complete_json("simulate_business_model", prompt).await
    }

    /// Generate follow-up questions for moving between two fields.
    ///
    /// Returns an empty list when the reply has no `questions` key. The
    /// number of questions is not checked.
    pub async fn guided_questions(
        &self,
        current_label: &str,
        next_label: &str,
        form: &FormData,
    ) -> Result<Vec<String>, AdapterError> {
        let prompt = prompts::guided_questions_prompt(current_label, next_label, form)
            .map_err(encoding_error)?;
        let mut reply: Map<String, Value> = self.complete_json("guided_questions", prompt).await?;

        match reply.remove("questions") {
            None | Some(Value::Null) => {
                tracing::debug!("Guided questions reply has no questions");
                Ok(Vec::new())
            }
            Some(questions) => serde_json::from_value(questions).map_err(|e| {
                AdapterError::ContractViolation(format!("`questions` is not a list of strings: {e}"))
            }),
        }
    }

    /// Free-form chat with the Socratic mentor persona.
    ///
    /// The step number and form are sent as context in the system message;
    /// `message` goes out unchanged as the user turn.
    pub async fn chat_with_mentor(
        &self,
        step: i64,
        form: &Map<String, Value>,
        message: &str,
    ) -> Result<String, AdapterError> {
        let context = prompts::mentor_context(step, form).map_err(encoding_error)?;
        let request = CompletionRequest::new(
            self.model.clone(),
            vec![
                PromptMessage::system(prompts::mentor_persona(&context)),
                PromptMessage::user(message),
            ],
        );

        tracing::debug!(step, message_len = message.len(), "Sending mentor chat");
        self.completion.complete(request).await.map_err(|e| {
            tracing::warn!(operation = "chat_with_mentor", error = %e, "Completion failed");
            AdapterError::from(e)
        })
    }

    /// Send `prompt` as a system message asking for a JSON object and decode
    /// the reply into `T`.
    async fn complete_json<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        prompt: String,
    ) -> Result<T, AdapterError> {
        tracing::debug!(operation, prompt_len = prompt.len(), "Sending completion");

        let request =
            CompletionRequest::new(self.model.clone(), vec![PromptMessage::system(prompt)])
                .expect_json_object();
        let raw = self.completion.complete(request).await.map_err(|e| {
            tracing::warn!(operation, error = %e, "Completion failed");
            AdapterError::from(e)
        })?;

        decode_object(&raw).inspect_err(|e| {
            tracing::warn!(operation, error = %e, "Completion reply rejected");
        })
    }
}

fn encoding_error(err: serde_json::Error) -> AdapterError {
    AdapterError::Encoding(err.to_string())
}

/// Parse `raw` as a JSON object and deserialise it into `T`.
fn decode_object<T: DeserializeOwned>(raw: &str) -> Result<T, AdapterError> {
    let value: Value =
        serde_json::from_str(raw).map_err(|e| AdapterError::MalformedResponse(e.to_string()))?;

    if !value.is_object() {
        return Err(AdapterError::ContractViolation(format!(
            "expected a JSON object, got {}",
            json_kind(&value)
        )));
    }

    serde_json::from_value(value).map_err(|e| AdapterError::ContractViolation(e.to_string()))
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{CompletionError, CompletionResult, MessageRole, ResponseShape};
    use async_trait::async_trait;
    use mockall::mock;
    use serde_json::json;
    use tokio_test::{assert_err, assert_ok};

    mock! {
        pub Upstream {}

        #[async_trait]
        impl CompletionPort for Upstream {
            async fn complete(&self, request: CompletionRequest) -> CompletionResult<String>;
        }
    }

    fn service_replying(reply: &'static str) -> MentorService {
        let mut upstream = MockUpstream::new();
        upstream
            .expect_complete()
            .times(1)
            .returning(move |_| Ok(reply.to_string()));
        MentorService::new(Arc::new(upstream), "test-model")
    }

    fn form(pairs: &[(&str, &str)]) -> FormData {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[tokio::test]
    async fn test_verify_sends_merged_form_as_json_system_prompt() {
        let mut upstream = MockUpstream::new();
        upstream
            .expect_complete()
            .withf(|req| {
                req.model == "test-model"
                    && req.shape == ResponseShape::JsonObject
                    && req.messages.len() == 1
                    && req.messages[0].role == MessageRole::System
                    && req.messages[0]
                        .content
                        .contains(r#"{"1-1":"idea","2-1":"market"}"#)
            })
            .times(1)
            .returning(|_| {
                Ok(r#"{"score": 85, "passed": true, "feedback": "ok", "suggestions": ["a"]}"#
                    .to_string())
            });
        let service = MentorService::new(Arc::new(upstream), "test-model");

        let result = service
            .verify_phase1(&form(&[("1-1", "idea")]), &form(&[("2-1", "market")]))
            .await;

        let result = assert_ok!(result);
        assert!(result.passed);
        assert_eq!(result.suggestions, vec!["a"]);
    }

    #[tokio::test]
    async fn test_verify_step2_wins_on_duplicate_key() {
        let mut upstream = MockUpstream::new();
        upstream
            .expect_complete()
            .withf(|req| req.messages[0].content.contains(r#"{"1-1":"second"}"#))
            .times(1)
            .returning(|_| {
                Ok(r#"{"score": 1, "passed": false, "feedback": "", "suggestions": []}"#
                    .to_string())
            });
        let service = MentorService::new(Arc::new(upstream), "test-model");

        assert_ok!(
            service
                .verify_phase1(&form(&[("1-1", "first")]), &form(&[("1-1", "second")]))
                .await
        );
    }

    #[tokio::test]
    async fn test_verify_rejects_wrong_shape() {
        let service = service_replying(r#"{"verdict": "great"}"#);
        let err = assert_err!(service.verify_phase1(&FormData::new(), &FormData::new()).await);
        assert!(matches!(err, AdapterError::ContractViolation(_)));
    }

    #[tokio::test]
    async fn test_non_json_reply_is_malformed() {
        let service = service_replying("Sure! Here is your analysis: ...");
        let err = assert_err!(service.simulate_business_model(&FormData::new()).await);
        assert!(matches!(err, AdapterError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_non_object_reply_is_contract_violation() {
        let service = service_replying(r#"["a", "b"]"#);
        let err = assert_err!(service.guided_questions("a", "b", &FormData::new()).await);
        match err {
            AdapterError::ContractViolation(msg) => assert!(msg.contains("an array")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_simulation_decodes_typed_result() {
        let service = service_replying(
            r#"{"score": 90, "status": "viable", "bm": {"channel": "B2B"}, "simulation": {"year1": 120}, "riskFactor": "CAC"}"#,
        );
        let result = assert_ok!(service.simulate_business_model(&form(&[("1-1", "x")])).await);
        assert_eq!(result.status, "viable");
        assert_eq!(result.bm["channel"], "B2B");
        assert_eq!(result.risk_factor, "CAC");
    }

    #[tokio::test]
    async fn test_guided_questions_missing_key_is_empty() {
        let service = service_replying(r#"{"note": "nothing to ask"}"#);
        let questions = assert_ok!(service.guided_questions("a", "b", &FormData::new()).await);
        assert!(questions.is_empty());
    }

    #[tokio::test]
    async fn test_guided_questions_count_not_enforced() {
        let service = service_replying(r#"{"questions": ["a", "b"]}"#);
        let questions = assert_ok!(service.guided_questions("x", "y", &FormData::new()).await);
        assert_eq!(questions, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_guided_questions_wrong_type_is_contract_violation() {
        let service = service_replying(r#"{"questions": "why?"}"#);
        let err = assert_err!(service.guided_questions("x", "y", &FormData::new()).await);
        assert!(matches!(err, AdapterError::ContractViolation(_)));
    }

    #[tokio::test]
    async fn test_chat_sends_persona_and_user_turn_as_text() {
        let mut upstream = MockUpstream::new();
        upstream
            .expect_complete()
            .withf(|req| {
                req.shape == ResponseShape::Text
                    && req.messages.len() == 2
                    && req.messages[0].role == MessageRole::System
                    && req.messages[0].content.contains("현재 단계: 3")
                    && req.messages[0].content.contains(r#"{"3-1":"pricing"}"#)
                    && req.messages[1].role == MessageRole::User
                    && req.messages[1].content == "hello"
            })
            .times(1)
            .returning(|_| Ok("What problem are you solving?".to_string()));
        let service = MentorService::new(Arc::new(upstream), "test-model");

        let form = json!({"3-1": "pricing"});
        let form = form.as_object().unwrap();
        let answer = assert_ok!(service.chat_with_mentor(3, form, "hello").await);
        assert_eq!(answer, "What problem are you solving?");
    }

    #[tokio::test]
    async fn test_chat_reply_is_not_parsed() {
        let service = service_replying("not { json");
        let answer = assert_ok!(service.chat_with_mentor(1, &Map::new(), "").await);
        assert_eq!(answer, "not { json");
    }

    #[tokio::test]
    async fn test_upstream_failure_propagates() {
        let mut upstream = MockUpstream::new();
        upstream.expect_complete().times(1).returning(|_| {
            Err(CompletionError::Network {
                message: "connection reset".to_string(),
            })
        });
        let service = MentorService::new(Arc::new(upstream), DEFAULT_MODEL);

        let err = assert_err!(service.chat_with_mentor(1, &Map::new(), "hi").await);
        assert!(matches!(err, AdapterError::Upstream(CompletionError::Network { .. })));
        assert!(err.to_string().contains("connection reset"));
    }
}
