//! Generate Use Case
//!
//! Orchestrates one run:
//! 1. Generate the card code and extract its component name
//! 2. Pick the filename fragment and create the run folder
//! 3. Generate field copy (JSON) and, with a style, CSS
//! 4. Submit with repair, unless submission is disabled
//! 5. Save the final code

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::entities::Artifact;
use crate::domain::ports::{
    CompletionApi, ContentServer, FileSystem, NoopEventSink, ResponseCache, RunEvent,
    RunEventSink, Stage,
};
use crate::domain::services::extract_component_name;
use crate::domain::value_objects::FilenameFragment;
use crate::error::CardsmithResult;

use super::super::prompts::PromptBuilder;
use super::super::submit::{SubmitRequest, SubmitUseCase};
use super::options::GenerateOptions;
use super::result::GenerateResult;

pub const FIRST_REVISION_FILE: &str = "v1.gts";
pub const FINAL_FILE: &str = "final.gts";
pub const DATA_FILE: &str = "data.json";
pub const CSS_FILE: &str = "style.css";

/// `<fragment>-<YYYYMMDD-HHMMSS>`
pub fn run_dir_name(fragment: &FilenameFragment, at: DateTime<Utc>) -> String {
    format!("{}-{}", fragment.as_str(), at.format("%Y%m%d-%H%M%S"))
}

pub struct GenerateUseCase<FS, C, A, S>
where
    FS: FileSystem,
    C: ResponseCache,
    A: CompletionApi,
    S: ContentServer,
{
    prompts: PromptBuilder<FS, C, A>,
    submit: SubmitUseCase<S, FS>,
    file_system: FS,
    runs_dir: PathBuf,
}

impl<FS, C, A, S> GenerateUseCase<FS, C, A, S>
where
    FS: FileSystem,
    C: ResponseCache,
    A: CompletionApi,
    S: ContentServer,
{
    pub fn new(
        prompts: PromptBuilder<FS, C, A>,
        submit: SubmitUseCase<S, FS>,
        file_system: FS,
        runs_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            prompts,
            submit,
            file_system,
            runs_dir: runs_dir.into(),
        }
    }

    pub fn prompts(&self) -> &PromptBuilder<FS, C, A> {
        &self.prompts
    }

    pub fn prompts_mut(&mut self) -> &mut PromptBuilder<FS, C, A> {
        &mut self.prompts
    }

    pub fn submitter(&self) -> &SubmitUseCase<S, FS> {
        &self.submit
    }

    /// Execute without event reporting
    pub fn execute(&self, options: &GenerateOptions) -> CardsmithResult<GenerateResult> {
        self.execute_with_events(options, Arc::new(NoopEventSink))
    }

    pub fn execute_with_events(
        &self,
        options: &GenerateOptions,
        events: Arc<dyn RunEventSink>,
    ) -> CardsmithResult<GenerateResult> {
        events.on_event(RunEvent::Started {
            model: self.prompts.model().to_string(),
            description: options.description.clone(),
        });

        events.on_event(RunEvent::StageStarted { stage: Stage::Code });
        let code = self.prompts.generate_code(&options.description)?;
        let component_name = extract_component_name(&code)?;
        tracing::info!(component = %component_name, "generated card code");

        let fragment = match options.fragment.as_deref() {
            Some(raw) => FilenameFragment::parse(raw)?,
            None => FilenameFragment::from_component_name(&component_name)?,
        };

        let run_dir = self.create_run_dir(&fragment)?;
        events.on_event(RunEvent::RunDirCreated {
            run_dir: run_dir.clone(),
        });

        let mut files = Vec::new();
        self.save(&run_dir, FIRST_REVISION_FILE, &code, &mut files, &events)?;

        events.on_event(RunEvent::StageStarted {
            stage: Stage::Attributes,
        });
        let attributes =
            self.prompts
                .generate_json(&options.description, &code, &options.use_case)?;
        let data = serde_json::to_string_pretty(&attributes)?;
        self.save(&run_dir, DATA_FILE, &data, &mut files, &events)?;

        let mut artifact = Artifact::new(code, component_name, attributes);

        if let Some(style) = options.style.as_deref() {
            events.on_event(RunEvent::StageStarted { stage: Stage::Css });
            let css = self
                .prompts
                .css(&options.description, artifact.code(), style)?;
            self.save(&run_dir, CSS_FILE, &css, &mut files, &events)?;
            artifact = artifact.with_css(css);
        }

        let submission = if options.submit {
            let request = SubmitRequest {
                fragment: &fragment,
                description: &options.description,
                code: artifact.code(),
                attributes: artifact.attributes(),
                run_dir: Some(&run_dir),
            };
            let outcome =
                self.submit
                    .execute_with_events(&request, &self.prompts, events.clone())?;
            artifact.replace_code(outcome.final_code.clone());
            Some(outcome)
        } else {
            tracing::info!("submission disabled, skipping content server");
            None
        };

        let final_code = artifact.code().to_string();
        self.save(&run_dir, FINAL_FILE, &final_code, &mut files, &events)?;

        events.on_event(RunEvent::Completed {
            component_name: artifact.component_name().to_string(),
            run_dir: run_dir.clone(),
            accepted: submission.as_ref().map(|s| s.accepted),
            attempts: submission.as_ref().map_or(0, |s| s.attempts),
        });

        Ok(GenerateResult {
            run_dir,
            fragment,
            artifact,
            submission,
            files,
        })
    }

    /// `<runs_dir>/<fragment>-<timestamp>`, suffixed when the second is taken
    fn create_run_dir(&self, fragment: &FilenameFragment) -> CardsmithResult<PathBuf> {
        let base = run_dir_name(fragment, Utc::now());
        let mut run_dir = self.runs_dir.join(&base);
        let mut n = 2;
        while self.file_system.exists(&run_dir) {
            run_dir = self.runs_dir.join(format!("{base}-{n}"));
            n += 1;
        }
        self.file_system.create_dir_all(&run_dir)?;
        Ok(run_dir)
    }

    fn save(
        &self,
        run_dir: &Path,
        name: &str,
        content: &str,
        files: &mut Vec<PathBuf>,
        events: &Arc<dyn RunEventSink>,
    ) -> CardsmithResult<()> {
        let path = run_dir.join(name);
        self.file_system.write(&path, content)?;
        events.on_event(RunEvent::ArtifactWritten { path: path.clone() });
        files.push(path);
        Ok(())
    }
}
