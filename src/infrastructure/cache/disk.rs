//! Disk Response Cache
//!
//! One JSON file per completion under `<dir>/<aa>/<sha256>.json`, where `aa`
//! is the first two hex digits of the key digest. Each entry stores the full
//! key, so a digest collision reads as a miss instead of a wrong answer.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::domain::ports::{CacheError, CacheResult, ResponseCache};
use crate::domain::value_objects::CacheKey;

const LOCK_FILE: &str = ".lock";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CacheEntry {
    key: String,
    response: String,
    created_at: DateTime<Utc>,
}

/// Totals reported by `cardsmith cache stats`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub entries: usize,
    pub bytes: u64,
}

/// Persistent cache rooted at a directory
#[derive(Debug, Clone)]
pub struct DiskCache {
    dir: PathBuf,
}

impl DiskCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn entry_path(&self, key: &CacheKey) -> PathBuf {
        let stem = key.file_stem();
        self.dir.join(&stem[..2]).join(format!("{stem}.json"))
    }

    fn access_error(path: &Path, err: impl std::fmt::Display) -> CacheError {
        CacheError::Access {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }

    fn read_entry(path: &Path) -> CacheResult<Option<CacheEntry>> {
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(Self::access_error(path, e)),
        };

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|e| CacheError::Corrupted {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
    }

    fn write_entry(&self, path: &Path, entry: &CacheEntry) -> CacheResult<()> {
        let parent = path.parent().unwrap_or(&self.dir);
        fs::create_dir_all(parent).map_err(|e| Self::access_error(parent, e))?;

        let content =
            serde_json::to_string_pretty(entry).map_err(|e| Self::access_error(path, e))?;
        let mut tmp = NamedTempFile::new_in(parent).map_err(|e| Self::access_error(parent, e))?;
        tmp.write_all(content.as_bytes())
            .map_err(|e| Self::access_error(path, e))?;
        tmp.persist(path)
            .map_err(|e| Self::access_error(path, e.error))?;
        Ok(())
    }

    /// Count entries and their total size on disk
    pub fn stats(&self) -> CacheResult<CacheStats> {
        let mut stats = CacheStats::default();
        if !self.dir.exists() {
            return Ok(stats);
        }

        let shards = fs::read_dir(&self.dir).map_err(|e| Self::access_error(&self.dir, e))?;
        for shard in shards {
            let shard = shard.map_err(|e| Self::access_error(&self.dir, e))?;
            let shard_path = shard.path();
            if !shard_path.is_dir() {
                continue;
            }
            let files = fs::read_dir(&shard_path).map_err(|e| Self::access_error(&shard_path, e))?;
            for file in files {
                let file = file.map_err(|e| Self::access_error(&shard_path, e))?;
                let path = file.path();
                if path.extension().and_then(|e| e.to_str()) != Some("json") {
                    continue;
                }
                let meta = file
                    .metadata()
                    .map_err(|e| Self::access_error(&path, e))?;
                stats.entries += 1;
                stats.bytes += meta.len();
            }
        }

        Ok(stats)
    }
}

impl ResponseCache for DiskCache {
    fn get(&self, key: &CacheKey) -> CacheResult<Option<String>> {
        let path = self.entry_path(key);
        match Self::read_entry(&path)? {
            Some(entry) if entry.key == key.as_str() => Ok(Some(entry.response)),
            Some(_) => {
                tracing::warn!(path = %path.display(), "cache digest collision, treating as miss");
                Ok(None)
            }
            None => Ok(None),
        }
    }

    fn put(&self, key: &CacheKey, response: &str) -> CacheResult<()> {
        fs::create_dir_all(&self.dir).map_err(|e| Self::access_error(&self.dir, e))?;

        let lock_path = self.dir.join(LOCK_FILE);
        let lock_file =
            fs::File::create(&lock_path).map_err(|e| Self::access_error(&lock_path, e))?;
        lock_file
            .lock_exclusive()
            .map_err(|e| Self::access_error(&lock_path, e))?;

        let path = self.entry_path(key);
        let result = match Self::read_entry(&path) {
            // Entries are write-once
            Ok(Some(existing)) if existing.key == key.as_str() => Ok(()),
            Ok(_) | Err(CacheError::Corrupted { .. }) => {
                let entry = CacheEntry {
                    key: key.as_str().to_string(),
                    response: response.to_string(),
                    created_at: Utc::now(),
                };
                self.write_entry(&path, &entry)
            }
            Err(e) => Err(e),
        };

        let _ = lock_file.unlock();
        result
    }
}
