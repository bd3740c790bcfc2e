use crate::consts::{ACTIVE_TAB_KEY, TOKEN_KEY};
use crate::error::AppError;
use crate::nav::Tab;

use super::Storage;

/// Session state persisted between invocations: bearer token and last tab.
/// All reads and writes of those keys go through this type.
pub(crate) struct SessionStore {
    storage: Box<dyn Storage>,
}

impl SessionStore {
    pub(crate) fn new(storage: Box<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn token(&self) -> Option<String> {
        self.storage.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub(crate) fn set_token(&mut self, token: &str) -> Result<(), AppError> {
        self.storage.set(TOKEN_KEY, token)
    }

    /// Tab to show on start: the persisted one, or the default when
    /// nothing (or an unknown id) was stored
    pub(crate) fn restored_tab(&self) -> Tab {
        self.storage
            .get(ACTIVE_TAB_KEY)
            .and_then(|id| Tab::from_id(&id))
            .unwrap_or_default()
    }

    pub(crate) fn set_active_tab(&mut self, tab: Tab) -> Result<(), AppError> {
        self.storage.set(ACTIVE_TAB_KEY, tab.id())
    }

    /// Forget token and tab
    pub(crate) fn clear(&mut self) -> Result<(), AppError> {
        self.storage.remove(TOKEN_KEY)?;
        self.storage.remove(ACTIVE_TAB_KEY)
    }
}
