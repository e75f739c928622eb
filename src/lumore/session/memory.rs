use super::{AdminSession, SessionStore};
use crate::error::Result;

/// Session held in memory only.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    session: Option<AdminSession>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: AdminSession) -> Self {
        Self {
            session: Some(session),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<AdminSession>> {
        Ok(self.session.clone())
    }

    fn save(&mut self, session: &AdminSession) -> Result<()> {
        self.session = Some(session.stamped()?);
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.session = None;
        Ok(())
    }
}
