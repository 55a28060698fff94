//! Wandbox compile client
//!
//! Thin blocking HTTP client for the Wandbox `compile.json` API,
//! implementing [`CompileService`] with the fixed compiler and option
//! configuration the learning environment standardizes on. Submitted
//! units always compile as `prog.c`, which is what lets the segmenter
//! split diagnostics on that marker.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::compile::{CompileOutcome, CompileRequest, CompileService, CompileStatus};

const WANDBOX_URL: &str = "https://wandbox.org/api/compile.json";
const COMPILER: &str = "gcc-13.2.0-c";
const OPTIONS: &str = "warning,gnu++1y";
const COMPILER_OPTION_RAW: &str = "-Dx=hogefuga\n-O3";

/// Errors from the Wandbox edge. Everything past this edge degrades
/// instead of erroring.
#[derive(Error, Debug)]
pub enum WandboxError {
    #[error("compile request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("compile response carried no status field")]
    MissingStatus,
}

#[derive(Serialize)]
struct WandboxRequest<'a> {
    code: &'a str,
    options: &'a str,
    compiler: &'a str,
    #[serde(rename = "compiler-option-raw")]
    compiler_option_raw: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    stdin: Option<&'a str>,
}

#[derive(Deserialize)]
struct WandboxResponse {
    status: Option<String>,
    #[serde(default)]
    compiler_error: String,
}

/// Blocking client for the Wandbox compile API.
pub struct WandboxClient {
    http: reqwest::blocking::Client,
    url: String,
}

impl WandboxClient {
    pub fn new() -> Self {
        Self::with_url(WANDBOX_URL)
    }

    /// Point the client at a different endpoint (tests use a local stub).
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            url: url.into(),
        }
    }

    fn post(&self, request: &CompileRequest) -> std::result::Result<WandboxResponse, WandboxError> {
        let body = WandboxRequest {
            code: &request.code,
            options: OPTIONS,
            compiler: COMPILER,
            compiler_option_raw: COMPILER_OPTION_RAW,
            stdin: request.stdin.as_deref(),
        };
        tracing::debug!(url = %self.url, compiler = COMPILER, "submitting compile request");
        let response: WandboxResponse = self
            .http
            .post(&self.url)
            .json(&body)
            .send()?
            .error_for_status()?
            .json()?;
        Ok(response)
    }
}

impl Default for WandboxClient {
    fn default() -> Self {
        Self::new()
    }
}

impl CompileService for WandboxClient {
    fn compile(&self, request: &CompileRequest) -> Result<CompileOutcome> {
        let response = self.post(request)?;
        let raw_status = response.status.ok_or(WandboxError::MissingStatus)?;
        let status = CompileStatus::from_raw(&raw_status);
        tracing::debug!(%raw_status, diagnostics = %response.compiler_error, "compile finished");
        Ok(CompileOutcome {
            status,
            diagnostics: response.compiler_error,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_with_fixed_configuration() {
        let body = WandboxRequest {
            code: "int main(void) { return 0; }",
            options: OPTIONS,
            compiler: COMPILER,
            compiler_option_raw: COMPILER_OPTION_RAW,
            stdin: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["compiler"], "gcc-13.2.0-c");
        assert_eq!(json["options"], "warning,gnu++1y");
        assert_eq!(json["compiler-option-raw"], "-Dx=hogefuga\n-O3");
        assert!(json.get("stdin").is_none());
    }

    #[test]
    fn test_stdin_is_sent_when_present() {
        let body = WandboxRequest {
            code: "int main(void) { return 0; }",
            options: OPTIONS,
            compiler: COMPILER,
            compiler_option_raw: COMPILER_OPTION_RAW,
            stdin: Some("3 4"),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["stdin"], "3 4");
    }

    #[test]
    fn test_response_defaults_missing_compiler_error() {
        let response: WandboxResponse = serde_json::from_str(r#"{"status":"0"}"#).unwrap();
        assert_eq!(response.status.as_deref(), Some("0"));
        assert!(response.compiler_error.is_empty());
    }
}
