//! Boundary types for the external compile service
//!
//! The engine never talks to the network itself; it consumes the
//! outcome of a remote compile performed by a collaborator implementing
//! [`CompileService`]. The collaborator's raw, stringly-typed status is
//! converted into [`CompileStatus`] exactly once, at this edge.

use anyhow::Result;

/// Outcome status of a remote compile, decoded from the service's raw
/// status string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompileStatus {
    /// Exit status "0": the unit compiled, nothing to classify
    Success,
    /// Any other exit status: diagnostics are expected
    CompileError,
}

impl CompileStatus {
    /// Decode the service's raw status string. `"0"` means success;
    /// every other value (including garbage) is a compile error.
    pub fn from_raw(raw: &str) -> Self {
        if raw == "0" {
            CompileStatus::Success
        } else {
            CompileStatus::CompileError
        }
    }
}

/// A compilation unit submitted to the remote toolchain.
#[derive(Debug, Clone)]
pub struct CompileRequest {
    /// C source code of the unit
    pub code: String,
    /// Text fed to the program's stdin, if any
    pub stdin: Option<String>,
}

/// What the remote toolchain reported back.
#[derive(Debug, Clone)]
pub struct CompileOutcome {
    pub status: CompileStatus,
    /// Raw compiler stderr/stdout text; empty on success
    pub diagnostics: String,
}

/// A remote toolchain that compiles one unit with a fixed compiler and
/// option set. Implemented over HTTP by [`crate::wandbox::WandboxClient`];
/// tests substitute a canned implementation.
pub trait CompileService {
    fn compile(&self, request: &CompileRequest) -> Result<CompileOutcome>;
}
