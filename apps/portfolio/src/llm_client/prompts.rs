// Prompt and response schema for portfolio content generation.
// The prompt fixes the three featured projects; the model only writes the copy.

use serde_json::{json, Value};

/// Generation prompt. Counts (6 skills, 3 projects) are a contract with the model only.
pub const PORTFOLIO_PROMPT: &str = r#"Generate content for the personal portfolio website of a software engineer who works mostly in Rust, backend services and web tooling.

Return a JSON object with this EXACT shape:
{
  "biography": "string",
  "skills": [{"skillName": "string", "description": "string"}],
  "projects": [{
    "projectName": "string",
    "description": "string",
    "technologies": ["string"],
    "githubUrl": "string",
    "liveUrl": "string"
  }]
}

Rules:
1. "biography": a first-person professional biography of 100 to 150 words.
2. "skills": EXACTLY 6 entries. Each description is one or two sentences.
3. "projects": EXACTLY 3 entries, using these names, URLs and subjects:
   - "Ledgerline": a double-entry bookkeeping API with audit trails.
     githubUrl "https://github.com/ada-portfolio/ledgerline", liveUrl "https://ledgerline.dev"
   - "Tidepool": a terminal dashboard for tailing and filtering structured logs.
     githubUrl "https://github.com/ada-portfolio/tidepool", liveUrl ""
   - "Quillmark": a static site generator with incremental rebuilds.
     githubUrl "https://github.com/ada-portfolio/quillmark", liveUrl "https://quillmark.ada.dev"
4. Each project lists 3 to 4 "technologies".
5. Use an empty string for "liveUrl" when a project has no live deployment.
6. Respond with the JSON object only."#;

/// Response schema in the Gemini OpenAPI subset. All fields are required.
pub fn portfolio_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "biography": { "type": "STRING" },
            "skills": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "skillName": { "type": "STRING" },
                        "description": { "type": "STRING" }
                    },
                    "required": ["skillName", "description"]
                }
            },
            "projects": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "projectName": { "type": "STRING" },
                        "description": { "type": "STRING" },
                        "technologies": {
                            "type": "ARRAY",
                            "items": { "type": "STRING" }
                        },
                        "githubUrl": { "type": "STRING" },
                        "liveUrl": { "type": "STRING" }
                    },
                    "required": ["projectName", "description", "technologies", "githubUrl", "liveUrl"]
                }
            }
        },
        "required": ["biography", "skills", "projects"]
    })
}
