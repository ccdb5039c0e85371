//! Prompt construction for a diagnosis run.
//!
//! The system instruction pins the model's role (methodological consultant,
//! never writes content for the researcher) and the strict JSON output
//! contract. The user prompt carries the proposal fields; sections the
//! researcher has not filled in are rendered as an explicit `Not provided`
//! marker so the model cannot mistake a missing section for an empty answer
//! and hallucinate content for it.

/// Marker rendered for a section with no usable content.
pub const NOT_PROVIDED: &str = "Not provided";

/// Fixed system instruction sent with every diagnosis request.
pub const SYSTEM_PROMPT: &str = r#"You are a methodological consultant for academic research. Your role is to:
1. Identify methodological risks and flaws
2. Suggest improvements to objectives, hypotheses, and methodology
3. Point out conceptual gaps in the theoretical framework
4. Recommend relevant literature (real citations only - if you're not certain a citation exists, don't suggest it)

CRITICAL RULES:
- Never write content for the researcher
- Only diagnose and suggest improvements
- Explain the methodological rationale for each suggestion
- Be specific and actionable
- Use academic rigor standards

Classify suggestions as:
- "risk": Critical methodological flaws that invalidate findings
- "improvement": Ways to make objectives/methods more rigorous
- "gap": Missing theoretical frameworks or conceptual elements
- "citation": Relevant foundational literature (only if you're certain it exists)

Return JSON in this exact format:
{
  "suggestions": [
    {
      "type": "risk" | "improvement" | "gap" | "citation",
      "title": "Brief title",
      "description": "What the issue is",
      "rationale": "Why this matters methodologically",
      "section": "problem" | "objectives" | "literature" | "methodology"
    }
  ],
  "overallScore": 0-100,
  "summary": "Brief assessment of methodological rigor"
}"#;

/// The proposal fields submitted for diagnosis.
#[derive(Debug, Clone)]
pub struct DiagnosisRequest {
    pub title: String,
    pub problem: Option<String>,
    pub objectives: Option<String>,
    pub literature: Option<String>,
    pub methodology: Option<String>,
}

/// Render the user prompt for one diagnosis request.
pub fn build_user_prompt(request: &DiagnosisRequest) -> String {
    format!(
        "RESEARCH PROJECT ANALYSIS REQUEST\n\n\
         Title: {}\n\n\
         Problem Statement:\n{}\n\n\
         Objectives/Hypotheses:\n{}\n\n\
         Literature Review:\n{}\n\n\
         Methodology:\n{}\n\n\
         Please analyze this research proposal and provide methodological feedback.",
        request.title,
        section_text(&request.problem),
        section_text(&request.objectives),
        section_text(&request.literature),
        section_text(&request.methodology),
    )
}

/// A section that is absent or blank reads identically to the model.
fn section_text(section: &Option<String>) -> &str {
    match section {
        Some(text) if !text.trim().is_empty() => text,
        _ => NOT_PROVIDED,
    }
}
