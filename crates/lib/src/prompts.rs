//! # Prompt Templates
//!
//! The fixed prompts sent to the completion API. The system prompt frames the
//! assistant as a career advisor; the user prompt pins down the document
//! structure so the generated markdown matches what the fallback template
//! produces.

/// The system instruction for roadmap generation.
pub const ROADMAP_SYSTEM_PROMPT: &str = "You are an experienced career advisor and technical mentor. \
You create practical, structured learning roadmaps in clean markdown. \
Be specific and actionable; do not add commentary outside the document.";

/// Builds the user prompt requesting a phased roadmap for `query`.
pub fn build_roadmap_prompt(query: &str) -> String {
    format!(
        "Create a detailed learning roadmap for: {query}\n\n\
        Structure the roadmap as a markdown document with a top-level title \
        and multiple phases. Each phase must be a `## Phase N: <name>` heading \
        with an estimated duration, and must contain these subsections:\n\
        - `### Goals` - what the learner should achieve in this phase\n\
        - `### Topics` - the concepts and skills to study\n\
        - `### Projects` - hands-on work to practice the topics\n\
        - `### Tools` - the tools and technologies to pick up\n\n\
        Progress from absolute fundamentals to professional, job-ready skills."
    )
}
