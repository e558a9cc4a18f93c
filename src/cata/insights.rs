//! Advisory tasting insights from a generative-text service.
//!
//! The provider contract is deliberately narrow: given a record's origin,
//! roaster, and tasting notes, it returns a short advisory string or
//! nothing. Failures never cross this boundary; every call site handles
//! absence explicitly, and the journal treats absence as "no insight
//! available" rather than an error.

use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const REQUEST_TIMEOUT_SECS: u64 = 20;

/// External text-generation collaborator.
pub trait InsightProvider {
    /// Produce a short advisory insight, or `None` on any failure.
    fn generate(&self, origin: &str, roaster: &str, notes: &str) -> Option<String>;
}

/// Null provider used when no API key is configured.
pub struct NoInsights;

impl InsightProvider for NoInsights {
    fn generate(&self, _origin: &str, _roaster: &str, _notes: &str) -> Option<String> {
        None
    }
}

/// Gemini-backed provider (blocking REST client).
pub struct GeminiInsights {
    client: reqwest::blocking::Client,
    api_key: String,
    model: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Deserialize)]
struct Content {
    parts: Option<Vec<Part>>,
}

#[derive(Deserialize)]
struct Part {
    text: Option<String>,
}

impl GeminiInsights {
    pub fn new(api_key: String, model: String) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_default();
        Self {
            client,
            api_key,
            model,
        }
    }

    /// Build a provider from the environment, or `None` when no key is set.
    pub fn from_env(model: &str) -> Option<Self> {
        let api_key = std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty())?;
        Some(Self::new(api_key, model.to_string()))
    }

    fn request(&self, prompt: &str) -> Option<String> {
        let url = format!(
            "{}/{}:generateContent?key={}",
            API_BASE, self.model, self.api_key
        );
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "systemInstruction": {
                "parts": [{ "text": "Act as a professional coffee taster." }]
            },
            "generationConfig": { "temperature": 0.7 }
        });

        let response: GenerateResponse = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .ok()?
            .error_for_status()
            .ok()?
            .json()
            .ok()?;

        let text = response
            .candidates?
            .into_iter()
            .next()?
            .content?
            .parts?
            .into_iter()
            .next()?
            .text?;
        let text = text.trim().to_string();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

impl InsightProvider for GeminiInsights {
    fn generate(&self, origin: &str, roaster: &str, notes: &str) -> Option<String> {
        let prompt = format!(
            "Based on the origin \"{}\", the roaster \"{}\" and the taster's notes \"{}\", \
             write one short paragraph (150 characters max) with a brewing recommendation \
             or a curious fact about that flavor profile.",
            origin, roaster, notes
        );
        self.request(&prompt)
    }
}
