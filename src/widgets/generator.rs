//! Artifact generator state.
//!
//! The story generator and the release-plan generator share one contract:
//! trim-validate the input, sit in a cosmetic loading state for the
//! simulated latency, then produce a canned artifact. The release plan
//! echoes the goal text verbatim (sanitized for display); nothing else is
//! derived from the input.

use tracing::warn;

use crate::error::Error;
use crate::models::GeneratorKind;
use crate::models::knowledge::{
    MOCK_STORIES, MOCK_TIME_ESTIMATE, RELEASE_FEATURES, RELEASE_METRICS, RELEASE_RISKS,
    RELEASE_TIMELINE,
};
use crate::utils::sanitize_display;

/// Whether a generator is waiting out its simulated latency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
}

/// A generated release-plan outline. Only `goal` comes from the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleasePlan {
    pub goal: String,
    pub features: &'static [&'static str],
    pub timeline: &'static str,
    pub risks: &'static [&'static str],
    pub metrics: &'static [&'static str],
}

/// A rendered artifact, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Artifact {
    /// The canned (story, points) pairs plus their computed total.
    Stories {
        stories: &'static [(&'static str, u32)],
        total: u32,
        time_estimate: &'static str,
    },
    Release(ReleasePlan),
}

pub struct Generator {
    kind: GeneratorKind,
    input: String,
    phase: Phase,
    artifact: Option<Artifact>,
}

impl Generator {
    pub fn new(kind: GeneratorKind) -> Self {
        Self {
            kind,
            input: String::new(),
            phase: Phase::default(),
            artifact: None,
        }
    }

    pub fn kind(&self) -> GeneratorKind {
        self.kind
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn artifact(&self) -> Option<&Artifact> {
        self.artifact.as_ref()
    }

    /// Label for the trigger control, swapped while loading.
    pub fn trigger_label(&self) -> &'static str {
        match (self.kind, self.phase) {
            (_, Phase::Loading) => "Generating...",
            (GeneratorKind::Story, Phase::Idle) => "Generate User Stories",
            (GeneratorKind::Release, Phase::Idle) => "Generate Release Plan",
        }
    }

    pub fn push_char(&mut self, c: char) {
        if !c.is_control() {
            self.input.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    /// Validate the input and enter the loading state. An empty trimmed
    /// input fails with `Error::Validation` and no loading state is
    /// entered; the caller then schedules the finish timer on success.
    /// Submitting while already loading is a no-op (the trigger is
    /// disabled), reported as Ok(false).
    pub fn submit(&mut self) -> Result<bool, Error> {
        if self.phase == Phase::Loading {
            return Ok(false);
        }
        if self.input.trim().is_empty() {
            let message = match self.kind {
                GeneratorKind::Story => "Please enter a product vision first.",
                GeneratorKind::Release => "Please enter a release goal first.",
            };
            return Err(Error::Validation(message.to_string()));
        }
        self.phase = Phase::Loading;
        Ok(true)
    }

    /// Build and store the artifact. Fired by the finish timer; exits the
    /// loading state unconditionally, success or failure.
    pub fn finish(&mut self) -> Result<(), Error> {
        let result = self.build_artifact();
        self.phase = Phase::Idle;
        match result {
            Ok(artifact) => {
                self.artifact = Some(artifact);
                Ok(())
            }
            Err(err) => {
                warn!(kind = self.kind.label(), %err, "artifact construction failed");
                let message = match self.kind {
                    GeneratorKind::Story => "Failed to generate stories. Please try again.",
                    GeneratorKind::Release => "Failed to generate release plan. Please try again.",
                };
                Err(Error::Generation(message.to_string()))
            }
        }
    }

    /// Assemble the artifact from the fixed tables. Constant data makes
    /// failure unexpected here, but the contract keeps the error path so a
    /// failure can never leave the loading state stuck.
    fn build_artifact(&self) -> Result<Artifact, Error> {
        match self.kind {
            GeneratorKind::Story => {
                let total = MOCK_STORIES.iter().map(|(_, pts)| pts).sum();
                Ok(Artifact::Stories {
                    stories: &MOCK_STORIES,
                    total,
                    time_estimate: MOCK_TIME_ESTIMATE,
                })
            }
            GeneratorKind::Release => Ok(Artifact::Release(ReleasePlan {
                goal: sanitize_display(self.input.trim()),
                features: &RELEASE_FEATURES,
                timeline: RELEASE_TIMELINE,
                risks: &RELEASE_RISKS,
                metrics: &RELEASE_METRICS,
            })),
        }
    }
}
