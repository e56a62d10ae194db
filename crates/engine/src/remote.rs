use crate::briefing::Briefing;
use anyhow::{anyhow, Context as AnyhowContext, Result};
use repobrief_context::BriefingContext;
use serde::{Deserialize, Serialize};

const API_URL: &str = "https://api.anthropic.com/v1/messages";
const API_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 1500;

pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";

/// Client for the remote briefing path.
///
/// Sends the assembled context to the Anthropic Messages API and parses
/// the strict-JSON answer into the same `Briefing` shape the local engine
/// produces. Only constructed when a credential is configured; the local
/// engine never goes near the network.
pub struct RemoteBriefingClient {
    api_key: String,
    model: String,
    http: reqwest::Client,
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<Message<'a>>,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    text: String,
}

impl RemoteBriefingClient {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            http: reqwest::Client::new(),
        }
    }

    /// Request a briefing for the assembled context.
    pub async fn generate(&self, context: &BriefingContext) -> Result<Briefing> {
        let prompt = build_prompt(context);
        let request = MessagesRequest {
            model: &self.model,
            max_tokens: MAX_TOKENS,
            messages: vec![Message {
                role: "user",
                content: &prompt,
            }],
        };

        log::debug!("Requesting remote briefing via {}", self.model);
        let response = self
            .http
            .post(API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&request)
            .send()
            .await
            .context("briefing request failed")?
            .error_for_status()
            .context("briefing request rejected")?;

        let body: MessagesResponse = response
            .json()
            .await
            .context("briefing response was not valid JSON")?;
        let text = body
            .content
            .first()
            .map(|block| block.text.as_str())
            .ok_or_else(|| anyhow!("briefing response had no content"))?;

        parse_briefing(text)
    }
}

/// Parse the model's reply, which must be a bare JSON object in the
/// `Briefing` shape.
pub fn parse_briefing(text: &str) -> Result<Briefing> {
    serde_json::from_str(text.trim()).context("briefing payload did not match expected schema")
}

/// Prompt demanding structured JSON, not prose, over the same context the
/// local engine sees.
pub fn build_prompt(context: &BriefingContext) -> String {
    let mut prompt = format!(
        "You are analyzing a codebase to help a developer who just inherited it.\n\n\
         PROJECT TYPE: {}\nLANGUAGE: {}\nTOTAL FILES: {}\n\n\
         PROJECT STRUCTURE:\n{}\n",
        context.type_label, context.language_label, context.total_files, context.structure_text
    );

    if let (Some(entry), Some(preview)) = (
        context.entry_point.as_deref(),
        context.entry_preview.as_deref(),
    ) {
        prompt.push_str(&format!("\nENTRY POINT: {entry}\n```\n{preview}\n```\n"));
    }

    if let Some(deps) = context.dependency_excerpt.as_deref() {
        prompt.push_str(&format!("\nDEPENDENCIES:\n```\n{deps}\n```\n"));
    }

    if !context.key_files.is_empty() {
        prompt.push_str("\nKEY FILES:\n");
        for key_file in &context.key_files {
            prompt.push_str(&format!("{}:\n{}\n\n", key_file.path, key_file.preview));
        }
    }

    prompt.push_str(
        "\nReturn ONLY valid JSON with this exact structure (no markdown, no explanation):\n\n\
         {\n\
         \x20 \"purpose\": \"One sentence describing what this project does\",\n\
         \x20 \"how_to_run\": \"Command to run the project\",\n\
         \x20 \"core_files\": [\n\
         \x20   {\"file\": \"path/to/file.js\", \"why\": \"Brief explanation of importance\"}\n\
         \x20 ],\n\
         \x20 \"safe_files\": [\"dir/\", \"file.ext\"],\n\
         \x20 \"dangerous_files\": [\n\
         \x20   {\"file\": \"path/to/file.js\", \"why\": \"Why editing this is risky\"}\n\
         \x20 ],\n\
         \x20 \"data_flow\": \"Brief description of how data flows through the system\",\n\
         \x20 \"start_editing\": [\"Step 1\", \"Step 2\", \"Step 3\"]\n\
         }\n\n\
         Focus on actual file paths from the project structure above.",
    );

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn context() -> BriefingContext {
        BriefingContext {
            type_label: "Rust project".to_string(),
            language_label: "Rust".to_string(),
            entry_point: Some("src/main.rs".to_string()),
            entry_preview: Some("fn main() {}".to_string()),
            dependency_excerpt: Some("[package]".to_string()),
            structure_text: "src/\n  main.rs\n".to_string(),
            key_files: Vec::new(),
            total_files: 2,
        }
    }

    #[test]
    fn prompt_includes_context_sections() {
        let prompt = build_prompt(&context());
        assert!(prompt.contains("PROJECT TYPE: Rust project"));
        assert!(prompt.contains("TOTAL FILES: 2"));
        assert!(prompt.contains("ENTRY POINT: src/main.rs"));
        assert!(prompt.contains("DEPENDENCIES:"));
        assert!(prompt.contains("Return ONLY valid JSON"));
    }

    #[test]
    fn prompt_omits_absent_sections() {
        let mut ctx = context();
        ctx.entry_point = None;
        ctx.entry_preview = None;
        ctx.dependency_excerpt = None;
        let prompt = build_prompt(&ctx);
        assert!(!prompt.contains("ENTRY POINT:"));
        assert!(!prompt.contains("DEPENDENCIES:"));
    }

    #[test]
    fn parses_conforming_payload() {
        let payload = r#"{
            "purpose": "Demo",
            "how_to_run": "cargo run",
            "core_files": [{"file": "src/main.rs", "why": "entry"}],
            "safe_files": ["docs/"],
            "dangerous_files": [],
            "data_flow": "main -> modules",
            "start_editing": ["Read src/main.rs"]
        }"#;
        let briefing = parse_briefing(payload).unwrap();
        assert_eq!(briefing.purpose, "Demo");
        assert_eq!(briefing.core_files[0].file, "src/main.rs");
        assert_eq!(briefing.safe_areas, vec!["docs/"]);
        assert_eq!(briefing.start_steps, vec!["Read src/main.rs"]);
    }

    #[test]
    fn rejects_prose_payload() {
        assert!(parse_briefing("Here is your briefing!").is_err());
    }
}
