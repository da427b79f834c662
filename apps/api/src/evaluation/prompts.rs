// All LLM prompt constants for the evaluation pipeline.

use serde_json::{json, Value};

/// System prompt for resume evaluation — sets the ATS persona and enforces
/// JSON-only output.
pub const ATS_SYSTEM: &str =
    "You are an experienced Applicant Tracking System (ATS) analyst \
    with profound knowledge in technology, software engineering, data science, \
    and big data engineering. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

const PROMPT_PREAMBLE: &str = "\
Your role involves evaluating resumes against job descriptions. \
Recognizing the competitive job market, provide top-notch assistance for resume improvement. \
Your goal is to analyze the resume against the given job description, \
assign a percentage match based on key criteria, and pinpoint missing keywords accurately.";

const PROMPT_OUTPUT_SHAPE: &str = r#"I want the response in one single string having the structure
{"Job Description Match": "%","Missing Keywords":"","Candidate Summary":"","Experience":""}"#;

/// Builds the evaluation prompt. Pure string assembly: the resume text is
/// embedded verbatim after the literal label `resume:` and the job
/// description verbatim after `description:`. Neither input is escaped or
/// sanitized.
pub fn build_prompt(resume_text: &str, job_description: &str) -> String {
    format!(
        "{PROMPT_PREAMBLE}\nresume:{resume_text}\ndescription:{job_description}\n{PROMPT_OUTPUT_SHAPE}"
    )
}

/// Response schema sent with the generation request so the hosted API
/// constrains output to the four-field evaluation object. The prompt's
/// requested shape remains advisory; this makes it machine-checkable.
pub fn ats_response_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "Job Description Match": {
                "type": "string",
                "description": "Percentage match with a trailing percent sign, e.g. \"87%\""
            },
            "Missing Keywords": {
                "type": "string",
                "description": "Keywords from the job description absent from the resume"
            },
            "Candidate Summary": {
                "type": "string"
            },
            "Experience": {
                "type": "string"
            }
        },
        "required": [
            "Job Description Match",
            "Missing Keywords",
            "Candidate Summary",
            "Experience"
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_embedded_verbatim_after_label() {
        let prompt = build_prompt("5 years Python, Django, PostgreSQL", "Python backend engineer");
        assert!(prompt.contains("resume:5 years Python, Django, PostgreSQL"));
    }

    #[test]
    fn test_job_description_embedded_verbatim_after_label() {
        let prompt = build_prompt("resume body", "Looking for a Python backend engineer");
        assert!(prompt.contains("description:Looking for a Python backend engineer"));
    }

    #[test]
    fn test_empty_inputs_still_produce_labels() {
        let prompt = build_prompt("", "");
        assert!(prompt.contains("resume:\n"));
        assert!(prompt.contains("description:\n"));
    }

    #[test]
    fn test_inputs_with_braces_pass_through_unmodified() {
        let resume = r#"{"Job Description Match": "0%"} and {braces} everywhere"#;
        let jd = r#"needs {curly} experience"#;
        let prompt = build_prompt(resume, jd);
        assert!(prompt.contains(&format!("resume:{resume}")));
        assert!(prompt.contains(&format!("description:{jd}")));
    }

    #[test]
    fn test_template_requests_the_four_keys() {
        let prompt = build_prompt("r", "j");
        assert!(prompt.contains(r#""Job Description Match""#));
        assert!(prompt.contains(r#""Missing Keywords""#));
        assert!(prompt.contains(r#""Candidate Summary""#));
        assert!(prompt.contains(r#""Experience""#));
    }

    #[test]
    fn test_schema_requires_all_four_fields() {
        let schema = ats_response_schema();
        let required = schema["required"].as_array().unwrap();
        assert_eq!(required.len(), 4);
        for key in [
            "Job Description Match",
            "Missing Keywords",
            "Candidate Summary",
            "Experience",
        ] {
            assert!(schema["properties"].get(key).is_some(), "missing {key}");
        }
    }
}
