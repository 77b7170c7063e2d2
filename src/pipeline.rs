//! Ordered pipeline of fallible workflow steps.
//!
//! Steps run in order. The first failure stops the pipeline and is reported
//! as [`ShareError::StepFailed`] naming the failed step and the last one that
//! completed. Completed steps are not rolled back.

use crate::error::{Result, ShareError};
use tracing::{debug, warn};

type Action<'a> = Box<dyn FnOnce() -> Result<()> + 'a>;

struct Step<'a> {
    name: &'static str,
    announce: String,
    action: Action<'a>,
}

pub struct Pipeline<'a> {
    name: &'static str,
    steps: Vec<Step<'a>>,
}

impl<'a> Pipeline<'a> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            steps: Vec::new(),
        }
    }

    /// Append a step. `announce` is printed to stdout just before it runs.
    pub fn step(
        mut self,
        name: &'static str,
        announce: impl Into<String>,
        action: impl FnOnce() -> Result<()> + 'a,
    ) -> Self {
        self.steps.push(Step {
            name,
            announce: announce.into(),
            action: Box::new(action),
        });
        self
    }

    /// Run every step, returning the names of the completed steps.
    pub fn run(self) -> Result<Vec<&'static str>> {
        let mut completed = Vec::with_capacity(self.steps.len());

        for step in self.steps {
            println!("{}", step.announce);
            debug!(pipeline = self.name, step = step.name, "running step");

            if let Err(source) = (step.action)() {
                let last_completed = completed.last().map(|s: &&str| s.to_string());
                warn!(
                    pipeline = self.name,
                    step = step.name,
                    last_completed = ?last_completed,
                    "step failed"
                );
                return Err(ShareError::StepFailed {
                    step: step.name.to_string(),
                    last_completed,
                    source: Box::new(source),
                });
            }

            completed.push(step.name);
        }

        debug!(pipeline = self.name, steps = completed.len(), "pipeline finished");
        Ok(completed)
    }
}
