//! Deploy runner implementation

use std::path::Path;

use crate::domain::entities::{ArtifactInfo, CommandSpec, DeployPlan};
use crate::domain::ports::{ProcessRunner, RunEvent, RunEventSink};
use crate::domain::value_objects::{RunState, Step};
use crate::error::{RunnerError, RunnerResult};
use crate::infrastructure::inspect_artifact;

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub state: RunState,
    /// `None` when the build exited zero but left no file at the expected path
    pub artifact: Option<ArtifactInfo>,
}

/// Runs the compile step and then the deploy step, stopping at the first failure
pub struct DeployRunner<'a> {
    processes: &'a dyn ProcessRunner,
    events: &'a dyn RunEventSink,
}

impl<'a> DeployRunner<'a> {
    pub fn new(processes: &'a dyn ProcessRunner, events: &'a dyn RunEventSink) -> Self {
        Self { processes, events }
    }

    /// Build, then deploy to `plan.account`.
    ///
    /// Returns `BuildFailed` without touching the deploy tool if the build
    /// exits non-zero, and `DeployFailed` if the deploy tool does.
    pub fn deploy(&self, plan: &DeployPlan) -> RunnerResult<RunReport> {
        tracing::info!(account = %plan.account, artifact = %plan.artifact.display(), "deploy run");
        self.events.on_event(RunEvent::Started {
            account: Some(plan.account.to_string()),
            artifact: plan.artifact.clone(),
        });

        let mut state = RunState::Building;
        let code = self.execute(Step::Build, &plan.build);
        state = state.advance(code);
        if state.is_terminal() {
            self.finish(state, code);
            return Err(RunnerError::BuildFailed { code });
        }

        let artifact = self.report_artifact(&plan.artifact_on_disk(), &plan.artifact);

        let code = self.execute(Step::Deploy, &plan.deploy);
        state = state.advance(code);
        self.finish(state, code);
        if state != RunState::Succeeded {
            return Err(RunnerError::DeployFailed {
                account: plan.account.to_string(),
                code,
            });
        }

        Ok(RunReport { state, artifact })
    }

    /// Run only the compile step
    pub fn build_only(&self, build: &CommandSpec, artifact: &Path) -> RunnerResult<RunReport> {
        self.events.on_event(RunEvent::Started {
            account: None,
            artifact: artifact.to_path_buf(),
        });

        let code = self.execute(Step::Build, build);
        if code != 0 {
            self.finish(RunState::Failed(Step::Build), code);
            return Err(RunnerError::BuildFailed { code });
        }

        let artifact = self.report_artifact(&build.cwd.join(artifact), artifact);
        self.finish(RunState::Succeeded, 0);
        Ok(RunReport {
            state: RunState::Succeeded,
            artifact,
        })
    }

    /// Spawn one step and return its exit code (start failures become 126/127)
    fn execute(&self, step: Step, command: &CommandSpec) -> i32 {
        let cmdline = command.render();
        tracing::debug!(%step, cmdline = cmdline.as_str(), "step start");
        self.events.on_event(RunEvent::StepStarted {
            step,
            command: cmdline,
        });

        let exit_code = match self.processes.run(command) {
            Ok(code) => code,
            Err(e) => {
                tracing::error!(%step, "{}", e);
                e.exit_code()
            }
        };

        tracing::debug!(%step, exit_code, "step finished");
        self.events.on_event(RunEvent::StepFinished { step, exit_code });
        exit_code
    }

    fn report_artifact(&self, on_disk: &Path, shown: &Path) -> Option<ArtifactInfo> {
        match inspect_artifact(on_disk) {
            Ok(Some(info)) => {
                self.events.on_event(RunEvent::ArtifactReady {
                    path: shown.to_path_buf(),
                    size: info.size,
                    sha256: info.sha256.clone(),
                });
                Some(info)
            }
            Ok(None) => {
                tracing::warn!(path = %on_disk.display(), "build produced no artifact");
                self.events.on_event(RunEvent::ArtifactMissing {
                    path: shown.to_path_buf(),
                });
                None
            }
            Err(e) => {
                tracing::warn!(path = %on_disk.display(), "cannot read artifact: {}", e);
                self.events.on_event(RunEvent::ArtifactUnreadable {
                    path: shown.to_path_buf(),
                    error: e.to_string(),
                });
                None
            }
        }
    }

    fn finish(&self, state: RunState, exit_code: i32) {
        tracing::info!(state = state.label(), exit_code, "run finished");
        self.events.on_event(RunEvent::Completed { state, exit_code });
    }
}
