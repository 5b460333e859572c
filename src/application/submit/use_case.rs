//! Submit Use Case
//!
//! 1. Extract the component name from the initial code
//! 2. Write the code to `<cards_dir>/<fragment>.gts`
//! 3. POST the card document
//! 4. On rejection, while the policy allows: repair, overwrite, sync, resubmit
//!
//! With a run folder, the document is saved as `submission.json` before the
//! first POST and the last response body as `response.txt`.

use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::entities::{SubmissionDocument, SubmissionState};
use crate::domain::ports::{
    ContentServer, FileSystem, NoopEventSink, RunEvent, RunEventSink, Stage,
};
use crate::domain::services::extract_component_name;
use crate::domain::value_objects::RetryPolicy;
use crate::error::CardsmithResult;

use super::super::prompts::CodeRepair;
use super::outcome::SubmitOutcome;
use super::request::SubmitRequest;

pub const SUBMISSION_FILE: &str = "submission.json";
pub const RESPONSE_FILE: &str = "response.txt";

pub struct SubmitUseCase<S, FS>
where
    S: ContentServer,
    FS: FileSystem,
{
    server: S,
    file_system: FS,
    cards_dir: PathBuf,
    policy: RetryPolicy,
    success_status: u16,
}

impl<S, FS> SubmitUseCase<S, FS>
where
    S: ContentServer,
    FS: FileSystem,
{
    pub fn new(server: S, file_system: FS, cards_dir: impl Into<PathBuf>) -> Self {
        Self {
            server,
            file_system,
            cards_dir: cards_dir.into(),
            policy: RetryPolicy::default(),
            success_status: 201,
        }
    }

    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_success_status(mut self, status: u16) -> Self {
        self.success_status = status;
        self
    }

    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    pub fn server_url(&self) -> &str {
        self.server.url()
    }

    /// Execute without event reporting
    pub fn execute<R: CodeRepair + ?Sized>(
        &self,
        request: &SubmitRequest<'_>,
        repair: &R,
    ) -> CardsmithResult<SubmitOutcome> {
        self.execute_with_events(request, repair, Arc::new(NoopEventSink))
    }

    pub fn execute_with_events<R: CodeRepair + ?Sized>(
        &self,
        request: &SubmitRequest<'_>,
        repair: &R,
        events: Arc<dyn RunEventSink>,
    ) -> CardsmithResult<SubmitOutcome> {
        let component_name = extract_component_name(request.code)?;
        let document = SubmissionDocument::new(
            self.server.url(),
            request.fragment,
            &component_name,
            request.attributes.clone(),
        );

        if let Some(dir) = request.run_dir {
            let path = dir.join(SUBMISSION_FILE);
            self.file_system
                .write(&path, &serde_json::to_string_pretty(&document)?)?;
            events.on_event(RunEvent::ArtifactWritten { path });
        }

        let card_path = self.cards_dir.join(request.fragment.file_name());
        self.save_card(&card_path, request.code)?;
        events.on_event(RunEvent::ArtifactWritten {
            path: card_path.clone(),
        });

        let mut states = vec![SubmissionState::Built];
        let mut code = request.code.to_string();
        let mut revisions = Vec::new();
        let mut attempt: u32 = 1;

        loop {
            let response = self.server.submit(&document)?;
            let sent = if attempt == 1 {
                SubmissionState::Submitted
            } else {
                SubmissionState::Resubmitted
            };
            states.push(sent);

            let accepted = response.status == self.success_status;
            tracing::info!(
                attempt,
                status = response.status,
                expected = self.success_status,
                accepted,
                "submission response"
            );
            events.on_event(RunEvent::Submitted {
                attempt,
                status: response.status,
                accepted,
            });

            if accepted {
                states.push(SubmissionState::Accepted);
                self.save_response(request, &response.body)?;
                return Ok(SubmitOutcome {
                    accepted: true,
                    attempts: attempt,
                    states,
                    document,
                    response,
                    final_code: code,
                    card_path,
                    revisions,
                });
            }

            states.push(SubmissionState::Rejected);
            if !self.policy.allows_another(attempt) {
                tracing::warn!(attempt, "submission rejected, no attempts left");
                self.save_response(request, &response.body)?;
                return Ok(SubmitOutcome {
                    accepted: false,
                    attempts: attempt,
                    states,
                    document,
                    response,
                    final_code: code,
                    card_path,
                    revisions,
                });
            }

            tracing::info!(attempt, "submission rejected, requesting a fix");
            events.on_event(RunEvent::StageStarted { stage: Stage::Fix });
            code = repair.repair(request.description, &code, &response.body)?;
            self.save_card(&card_path, &code)?;
            states.push(SubmissionState::Fixed);

            if let Some(dir) = request.run_dir {
                let revision = dir.join(format!("v{}.gts", attempt + 1));
                self.file_system.write(&revision, &code)?;
                events.on_event(RunEvent::Repaired {
                    attempt,
                    revision: revision.clone(),
                });
                revisions.push(revision);
            }

            if let Some(delay) = self.policy.delay() {
                tracing::debug!(?delay, "waiting before resubmitting");
                std::thread::sleep(delay);
            }

            attempt += 1;
        }
    }

    fn save_response(&self, request: &SubmitRequest<'_>, body: &str) -> CardsmithResult<()> {
        if let Some(dir) = request.run_dir {
            self.file_system.write(&dir.join(RESPONSE_FILE), body)?;
        }
        Ok(())
    }

    fn save_card(&self, path: &std::path::Path, code: &str) -> CardsmithResult<()> {
        self.file_system.write(path, code)?;
        // The server reads the module from disk on the next request
        self.file_system.sync(path)?;
        Ok(())
    }
}
