use super::{AdminSession, SessionStore};
use crate::error::{LumoreError, Result};
use std::fs;
use std::path::{Path, PathBuf};

const SESSION_FILENAME: &str = "session.json";

/// Session persisted as JSON in a data directory.
pub struct FileSessionStore {
    root: PathBuf,
}

impl FileSessionStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path(&self) -> PathBuf {
        self.root.join(SESSION_FILENAME)
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(LumoreError::Io)?;
        }
        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<AdminSession>> {
        let path = self.path();
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path).map_err(LumoreError::Io)?;
        match serde_json::from_str(&content) {
            Ok(session) => Ok(Some(session)),
            Err(e) => {
                log::warn!("ignoring unreadable session at {}: {}", path.display(), e);
                Ok(None)
            }
        }
    }

    fn save(&mut self, session: &AdminSession) -> Result<()> {
        let stamped = session.stamped()?;
        self.ensure_dir(&self.root)?;

        let content = serde_json::to_string_pretty(&stamped)?;
        fs::write(self.path(), content).map_err(LumoreError::Io)?;
        log::debug!("session saved for {}", session.user.username);
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        let path = self.path();
        if path.exists() {
            fs::remove_file(&path).map_err(LumoreError::Io)?;
        }
        Ok(())
    }
}
