// Prompt constants for the remote document evaluation call.
// The JSON shape named here is the contract `RemoteEvaluation` deserializes.

/// System prompt for the evaluation call. The field names and the 0-100 score
/// range are part of the parsing contract; change them together with
/// `RemoteEvaluation` or not at all.
pub const EVALUATION_SYSTEM: &str = r#"You are an expert AI document evaluator. Analyze the document content and provide a detailed evaluation.

IMPORTANT: You must respond ONLY with a valid JSON object, no other text.

JSON Response Format:
{
  "score": <number 0-100>,
  "skills": [<skills from document>],
  "experienceLevel": "<Entry/Mid/Senior/Expert>",
  "experienceYears": <number>,
  "shortlistRecommendation": "<Yes/No/Maybe>",
  "strengths": [<achievements>],
  "improvements": [<areas to improve>],
  "reasoning": "<summary>"
}"#;

/// Builds the user message for an evaluation call.
pub fn evaluation_prompt(file_name: &str, document_text: &str) -> String {
    format!("Please evaluate this document:\n\nFile: {file_name}\n\nContent:\n{document_text}")
}
