//! Shared types for the uidlock probe.
//!
//! The probe builds a [`LicenseEngine`] from build-time configuration plus
//! command-line overrides, runs verification once and renders the result.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use uidlock_license::{
    Credential, DeviceIdentity, FileIdentity, IdentityProvider, LicenseEngine, LicenseReport,
    StaticIdentity, TrustAnchor, BUILD_DEVICE_UID, BUILD_LICENSE_KEY, TRUST_ANCHOR_PEM,
};

/// Where the probe reads the device identity from.
#[derive(Debug, Clone)]
pub enum IdentitySource {
    /// A secure element export file (raw bytes or hex).
    File(PathBuf),
    /// A fixed identity given on the command line.
    Fixed(DeviceIdentity),
}

impl IdentitySource {
    /// Builds the identity provider for this source.
    #[must_use]
    pub fn provider(&self) -> Box<dyn IdentityProvider> {
        match self {
            Self::File(path) => Box::new(FileIdentity::new(path.clone())),
            Self::Fixed(id) => Box::new(StaticIdentity::new(*id)),
        }
    }
}

/// Probe configuration; unset overrides fall back to the build values.
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    pub identity: IdentitySource,
    pub uid: Option<String>,
    pub license: Option<String>,
    pub anchor_pem: Option<String>,
}

impl ProbeConfig {
    /// Returns the credential, preferring overrides over build values.
    #[must_use]
    pub fn credential(&self) -> Credential {
        Credential::new(
            self.uid.as_deref().unwrap_or(BUILD_DEVICE_UID),
            self.license.as_deref().unwrap_or(BUILD_LICENSE_KEY),
        )
    }

    /// Returns the trust anchor, preferring the override over the build value.
    #[must_use]
    pub fn trust_anchor(&self) -> TrustAnchor {
        TrustAnchor::from_pem(self.anchor_pem.as_deref().unwrap_or(TRUST_ANCHOR_PEM))
    }

    /// Builds an uninitialized engine.
    #[must_use]
    pub fn build_engine(&self) -> LicenseEngine<Box<dyn IdentityProvider>> {
        LicenseEngine::new(self.credential(), self.trust_anchor(), self.identity.provider())
    }
}

/// Result of a probe run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeOutput {
    /// Engine state after the run; `None` in identity-only mode.
    pub report: Option<LicenseReport>,
    /// Device identity as hex, if it could be read.
    pub device_identity: Option<String>,
    /// Why the identity could not be read.
    pub identity_error: Option<String>,
    /// True if the trust anchor is still the placeholder.
    pub anchor_placeholder: bool,
}

impl ProbeOutput {
    /// Returns true if the run succeeded: licensed, or identity read in
    /// identity-only mode.
    #[must_use]
    pub fn success(&self) -> bool {
        match &self.report {
            Some(report) => report.licensed,
            None => self.device_identity.is_some(),
        }
    }
}

/// Runs the engine (unless `identity_only`) and collects the output.
pub fn run_probe<P: IdentityProvider>(engine: &LicenseEngine<P>, identity_only: bool) -> ProbeOutput {
    let report = if identity_only {
        None
    } else {
        engine.initialize();
        Some(engine.report())
    };

    let (device_identity, identity_error) = match engine.device_identity() {
        Ok(id) => (Some(id.to_hex()), None),
        Err(e) => (None, Some(e.to_string())),
    };

    ProbeOutput {
        report,
        device_identity,
        identity_error,
        anchor_placeholder: engine.trust_anchor().is_placeholder(),
    }
}

/// Renders the output as a human-readable block.
#[must_use]
pub fn render_text(output: &ProbeOutput) -> String {
    let mut lines = vec![
        "========================================".to_string(),
        "  uidlock License Probe".to_string(),
        "========================================".to_string(),
    ];

    if let Some(report) = &output.report {
        lines.push(format!("  Status:    {} (code {})", report.message, report.code));
        lines.push(format!("  Licensed:  {}", if report.licensed { "yes" } else { "no" }));
        if report.bypassed {
            lines.push("  WARNING:   signature NOT verified (placeholder trust anchor)".to_string());
        }
        lines.push(format!("  Version:   {}", report.version));
    }

    match (&output.device_identity, &output.identity_error) {
        (Some(id), _) => lines.push(format!("  Device ID: {id}")),
        (None, Some(err)) => lines.push(format!("  Device ID: unavailable ({err})")),
        (None, None) => lines.push("  Device ID: unavailable".to_string()),
    }

    if output.anchor_placeholder {
        lines.push("  Trust anchor is a placeholder; provision a real public key".to_string());
    }

    lines.push("========================================".to_string());
    lines.join("\n")
}
