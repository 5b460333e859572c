//! Port mocks shared by the use-case tests

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, VecDeque};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::entities::{ServerResponse, SubmissionDocument};
use crate::domain::ports::{
    CacheResult, CompletionApi, CompletionRequest, ContentServer, FileSystem, FsError, FsResult,
    ResponseCache, RunEvent, RunEventSink,
};
use crate::domain::value_objects::CacheKey;
use crate::error::{CardsmithError, CardsmithResult};

use super::prompts::CodeRepair;

#[derive(Default)]
pub struct MemoryFs {
    pub files: RefCell<BTreeMap<PathBuf, String>>,
    pub syncs: RefCell<Vec<PathBuf>>,
}

impl MemoryFs {
    pub fn with_file(path: &str, content: &str) -> Self {
        let fs = Self::default();
        fs.files
            .borrow_mut()
            .insert(PathBuf::from(path), content.to_string());
        fs
    }

    pub fn content(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.borrow().get(path.as_ref()).cloned()
    }
}

impl FileSystem for MemoryFs {
    fn read(&self, path: &Path) -> FsResult<String> {
        self.content(path)
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path)
    }

    fn create_dir_all(&self, _path: &Path) -> FsResult<()> {
        Ok(())
    }

    fn sync(&self, path: &Path) -> FsResult<()> {
        self.syncs.borrow_mut().push(path.to_path_buf());
        Ok(())
    }
}

/// Content server answering from a script; repeats the last answer when the
/// script runs out
pub struct ScriptedServer {
    pub url: String,
    script: RefCell<VecDeque<(u16, String)>>,
    last: RefCell<(u16, String)>,
    pub posts: RefCell<Vec<SubmissionDocument>>,
}

impl ScriptedServer {
    pub fn new(answers: &[(u16, &str)]) -> Self {
        Self {
            url: "http://localhost:4202/".to_string(),
            script: RefCell::new(
                answers
                    .iter()
                    .map(|(s, b)| (*s, b.to_string()))
                    .collect(),
            ),
            last: RefCell::new((500, String::new())),
            posts: RefCell::new(Vec::new()),
        }
    }

    pub fn always(status: u16, body: &str) -> Self {
        Self::new(&[(status, body)])
    }

    pub fn post_count(&self) -> usize {
        self.posts.borrow().len()
    }
}

impl ContentServer for ScriptedServer {
    fn url(&self) -> &str {
        &self.url
    }

    fn submit(&self, document: &SubmissionDocument) -> CardsmithResult<ServerResponse> {
        self.posts.borrow_mut().push(document.clone());
        if let Some(next) = self.script.borrow_mut().pop_front() {
            *self.last.borrow_mut() = next;
        }
        let (status, body) = self.last.borrow().clone();
        Ok(ServerResponse::new(status, body))
    }
}

/// Content server that cannot be reached
pub struct UnreachableServer;

impl ContentServer for UnreachableServer {
    fn url(&self) -> &str {
        "http://localhost:1/"
    }

    fn submit(&self, _document: &SubmissionDocument) -> CardsmithResult<ServerResponse> {
        Err(CardsmithError::Submission {
            url: self.url().to_string(),
            message: "connection refused".to_string(),
        })
    }
}

/// Repair that returns numbered fixes and records its inputs
#[derive(Default)]
pub struct CountingRepair {
    pub calls: Cell<u32>,
    pub errors: RefCell<Vec<String>>,
}

impl CodeRepair for CountingRepair {
    fn repair(&self, _description: &str, _code: &str, error: &str) -> CardsmithResult<String> {
        let n = self.calls.get() + 1;
        self.calls.set(n);
        self.errors.borrow_mut().push(error.to_string());
        Ok(format!("export class Fixed{n} extends Card {{}}"))
    }
}

#[derive(Default)]
pub struct MemoryCache {
    pub entries: RefCell<BTreeMap<String, String>>,
}

impl ResponseCache for MemoryCache {
    fn get(&self, key: &CacheKey) -> CacheResult<Option<String>> {
        Ok(self.entries.borrow().get(key.as_str()).cloned())
    }

    fn put(&self, key: &CacheKey, response: &str) -> CacheResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.as_str().to_string(), response.to_string());
        Ok(())
    }
}

/// Completion API answering by which template the prompt came from
pub struct StageAwareApi {
    pub code: String,
    pub json: String,
    pub css: String,
    pub fix: String,
    pub calls: RefCell<Vec<&'static str>>,
}

impl StageAwareApi {
    pub fn new(code: &str, json: &str) -> Self {
        Self {
            code: code.to_string(),
            json: json.to_string(),
            css: "```css\n.card { color: teal; }\n```".to_string(),
            fix: "```ts\nexport class TodoList extends Card {}\n```".to_string(),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn count(&self, stage: &str) -> usize {
        self.calls.borrow().iter().filter(|s| **s == stage).count()
    }
}

impl CompletionApi for StageAwareApi {
    fn complete(&self, request: &CompletionRequest<'_>) -> CardsmithResult<String> {
        let prompt = request
            .messages
            .last()
            .map(|m| m.content.as_str())
            .unwrap_or_default();
        let (stage, reply) = if prompt.contains("Please fix the error") {
            ("fix", &self.fix)
        } else if prompt.contains("Please write CSS") {
            ("css", &self.css)
        } else if prompt.contains("Please create JSON") {
            ("json", &self.json)
        } else {
            ("code", &self.code)
        };
        self.calls.borrow_mut().push(stage);
        Ok(reply.clone())
    }
}

/// Event sink that records all events
#[derive(Default)]
pub struct RecordingSink {
    pub events: Mutex<Vec<RunEvent>>,
}

impl RecordingSink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn events(&self) -> Vec<RunEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl RunEventSink for RecordingSink {
    fn on_event(&self, event: RunEvent) {
        self.events.lock().unwrap().push(event);
    }
}
