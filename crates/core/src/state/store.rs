//! Shared application store.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::NaiveDate;
use log::{debug, warn};

use super::{StateAction, WorkbenchState};
use crate::errors::{Error, Result};
use crate::requests::RequestType;

/// Owns the [`WorkbenchState`]; every mutation goes through `dispatch`.
///
/// Independent flows that touch the same record are last-write-wins.
#[derive(Debug)]
pub struct AppStore {
    state: RwLock<WorkbenchState>,
}

impl AppStore {
    pub fn new(state: WorkbenchState) -> Self {
        Self {
            state: RwLock::new(state),
        }
    }

    fn read_guard(&self) -> Result<RwLockReadGuard<'_, WorkbenchState>> {
        self.state
            .read()
            .map_err(|e| Error::State(format!("state lock poisoned: {}", e)))
    }

    fn write_guard(&self) -> Result<RwLockWriteGuard<'_, WorkbenchState>> {
        self.state
            .write()
            .map_err(|e| Error::State(format!("state lock poisoned: {}", e)))
    }

    /// Runs `f` against the current state.
    pub fn read<R>(&self, f: impl FnOnce(&WorkbenchState) -> R) -> Result<R> {
        let guard = self.read_guard()?;
        Ok(f(&guard))
    }

    pub fn snapshot(&self) -> Result<WorkbenchState> {
        self.read(|state| state.clone())
    }

    pub fn dispatch(&self, action: StateAction) -> Result<()> {
        let mut guard = self.write_guard()?;
        let name = action.name();
        guard.apply(action).map_err(|e| {
            warn!("State action {} rejected: {}", name, e);
            e
        })
    }

    /// Applies `actions` as one unit: either all of them land or none do.
    pub fn dispatch_all(&self, actions: Vec<StateAction>) -> Result<()> {
        let mut guard = self.write_guard()?;
        let mut working = guard.clone();
        let count = actions.len();
        for action in actions {
            let name = action.name();
            if let Err(e) = working.apply(action) {
                warn!("Batch of {} actions rolled back at {}: {}", count, name, e);
                return Err(e);
            }
        }
        *guard = working;
        debug!("Committed batch of {} state actions", count);
        Ok(())
    }

    /// Id the next appended request will carry, formatted `PREFIX-YYYYMMDD-NNN`.
    pub fn next_request_id(&self, request_type: RequestType, date: NaiveDate) -> Result<String> {
        self.read(|state| state.peek_request_id(request_type, date))
    }
}
