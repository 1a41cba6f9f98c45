//! Instruction templates for each mentoring intent.
//!
//! The persona text is user-facing and written in Korean, the language the
//! front end is used in. Form data is embedded as compact JSON.

use serde::Serialize;

fn to_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string(value)
}

/// Business-viability scoring for the merged step-1/step-2 answers.
pub fn verification_prompt<T: Serialize + ?Sized>(data: &T) -> serde_json::Result<String> {
    Ok(format!(
        "당신은 전략적 사업 코치입니다. 다음 데이터를 분석하여 JSON 형식으로 응답하세요.\n\
         데이터: {}\n\
         응답 형식: {{\"score\": 85, \"passed\": true, \"feedback\": \"...\", \"suggestions\": [\"...\"]}}",
        to_json(data)?
    ))
}

/// Business-model simulation over every answer.
pub fn simulation_prompt<T: Serialize + ?Sized>(data: &T) -> serde_json::Result<String> {
    Ok(format!(
        "당신은 Venture Builder입니다. 다음 데이터를 바탕으로 BM 시뮬레이션을 수행하고 JSON으로 응답하세요.\n\
         데이터: {}\n\
         응답 형식: {{\"score\": 90, \"status\": \"...\", \"bm\": {{...}}, \"simulation\": {{...}}, \"riskFactor\": \"...\"}}",
        to_json(data)?
    ))
}

/// Three follow-up questions for moving from `current_label` to `next_label`.
pub fn guided_questions_prompt<T: Serialize + ?Sized>(
    current_label: &str,
    next_label: &str,
    data: &T,
) -> serde_json::Result<String> {
    Ok(format!(
        "당신은 전략 멘토입니다. [{current_label}] 작성을 마친 사용자에게 다음 항목 [{next_label}] 작성을 위한 날카로운 질문 3가지를 생성하세요.\n\
         현재 데이터: {}\n\
         반드시 다음 JSON 형식을 따르세요: {{\"questions\": [\"질문1\", \"질문2\", \"질문3\"]}}",
        to_json(data)?
    ))
}

/// Context line carried by the mentor persona: current step and form state.
pub fn mentor_context<T: Serialize + ?Sized>(step: i64, data: &T) -> serde_json::Result<String> {
    Ok(format!("현재 단계: {step}, 데이터: {}", to_json(data)?))
}

/// Socratic mentor persona wrapping `context`.
pub fn mentor_persona(context: &str) -> String {
    format!("당신은 소크라테스형 멘토입니다. 짧게 조언하세요. 컨텍스트: {context}")
}
