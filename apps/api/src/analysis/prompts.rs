// Prompt template for résumé-vs-job analysis.
// The three keys below are what the web client renders; keep them stable.

use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;

/// ATS analysis template. Replace `{resume_text}`, `{job_description}` and
/// `{json_instruction}` before sending.
pub const ATS_PROMPT_TEMPLATE: &str = r#"Act as an experienced Applicant Tracking System (ATS) with deep knowledge of software engineering, data science, data analysis and big data engineering hiring.

Evaluate the resume below against the job description. The job market is very competitive, so give the candidate concrete help to improve the resume. Assign a percentage match based on the job description and list the missing keywords precisely.

RESUME:
{resume_text}

JOB DESCRIPTION:
{job_description}

{json_instruction}
Return a single JSON object with this EXACT schema:
{"JD Match": "85%", "MissingKeywords": ["keyword"], "Profile Summary": "**Strengths:** ... **Improvements:** ..."}"#;

/// Turns résumé text and a job description into the prompt sent to the model.
pub trait PromptBuilder: Send + Sync {
    fn build(&self, resume_text: &str, job_description: &str) -> String;
}

/// Default builder: fills `ATS_PROMPT_TEMPLATE` with both inputs verbatim.
pub struct AtsPromptBuilder;

impl PromptBuilder for AtsPromptBuilder {
    fn build(&self, resume_text: &str, job_description: &str) -> String {
        ATS_PROMPT_TEMPLATE
            .replace("{json_instruction}", JSON_ONLY_INSTRUCTION)
            .replace("{job_description}", job_description)
            .replacen("{resume_text}", resume_text, 1)
    }
}
