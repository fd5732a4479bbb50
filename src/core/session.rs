//! Editing session over one category's plan list.
//!
//! A session is created by opening a category (the shell holds no session
//! while idle) and moves between `Viewing` and one pending operation at a
//! time. All changes stay in memory until [`CategorySession::close`] writes
//! the whole list back.

use std::fmt;

use thiserror::Error;
use todo_config::Settings;
use todo_domain::{CategoryKey, Plan};
use todo_services::{codec, CoreError, PlanService};

use crate::core::plan_store::PlanStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Viewing,
    Adding,
    Editing(usize),
    Deleting(usize),
    Closed,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::Viewing => write!(f, "viewing"),
            SessionState::Adding => write!(f, "adding a plan"),
            SessionState::Editing(index) => write!(f, "editing plan #{}", index + 1),
            SessionState::Deleting(index) => write!(f, "deleting plan #{}", index + 1),
            SessionState::Closed => write!(f, "closed"),
        }
    }
}

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("The category session is closed")]
    Closed,
    #[error("Cannot {action} while {state}")]
    InvalidState {
        action: &'static str,
        state: SessionState,
    },
    #[error("No plan #{} in the current list", .0 + 1)]
    IndexOutOfView(usize),
    #[error(transparent)]
    Core(#[from] CoreError),
}

pub struct CategorySession {
    key: CategoryKey,
    name: String,
    plans: Vec<Plan>,
    state: SessionState,
    snapshot_len: usize,
}

impl CategorySession {
    /// Opens the category carrying display name `name`.
    pub fn open(store: &PlanStore, settings: &Settings, name: &str) -> Result<Self, SessionError> {
        let key = store.resolve_key(settings, name)?;
        Ok(Self::open_key(store, settings, key))
    }

    /// Opens a category by key, decoding its stored lines.
    pub fn open_key(store: &PlanStore, settings: &Settings, key: CategoryKey) -> Self {
        let lines = store.load_key(key);
        let plans = codec::decode_all(&lines);
        tracing::info!(%key, count = plans.len(), "category opened");
        Self::from_plans(key, settings.name(key), plans)
    }

    pub fn from_plans(key: CategoryKey, name: impl Into<String>, plans: Vec<Plan>) -> Self {
        let snapshot_len = plans.len();
        Self {
            key,
            name: name.into(),
            plans,
            state: SessionState::Viewing,
            snapshot_len,
        }
    }

    pub fn key(&self) -> CategoryKey {
        self.key
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_closed(&self) -> bool {
        self.state == SessionState::Closed
    }

    pub fn plans(&self) -> &[Plan] {
        &self.plans
    }

    /// Current list, recorded as the snapshot later indexes refer to.
    pub fn view(&mut self) -> Result<&[Plan], SessionError> {
        self.expect_viewing("view the list")?;
        self.enter_viewing();
        Ok(&self.plans)
    }

    pub fn begin_add(&mut self) -> Result<(), SessionError> {
        self.expect_viewing("add a plan")?;
        self.state = SessionState::Adding;
        Ok(())
    }

    /// Appends `plan`. On a validation failure the session stays in
    /// `Adding` so the input can be corrected.
    pub fn commit_add(&mut self, plan: Plan) -> Result<usize, SessionError> {
        if self.state != SessionState::Adding {
            return Err(self.invalid("save a new plan"));
        }
        let index = PlanService::add(&mut self.plans, plan)?;
        tracing::debug!(key = %self.key, index, "plan added");
        self.enter_viewing();
        Ok(index)
    }

    /// Starts editing the plan at `index` and returns it for prefilling.
    pub fn begin_edit(&mut self, index: usize) -> Result<&Plan, SessionError> {
        self.expect_viewing("edit a plan")?;
        self.check_in_view(index)?;
        self.state = SessionState::Editing(index);
        Ok(&self.plans[index])
    }

    pub fn commit_edit(&mut self, plan: Plan) -> Result<usize, SessionError> {
        let SessionState::Editing(index) = self.state else {
            return Err(self.invalid("save an edit"));
        };
        PlanService::update(&mut self.plans, index, plan)?;
        tracing::debug!(key = %self.key, index, "plan updated");
        self.enter_viewing();
        Ok(index)
    }

    pub fn begin_delete(&mut self, index: usize) -> Result<&Plan, SessionError> {
        self.expect_viewing("delete a plan")?;
        self.check_in_view(index)?;
        self.state = SessionState::Deleting(index);
        Ok(&self.plans[index])
    }

    pub fn confirm_delete(&mut self) -> Result<Plan, SessionError> {
        let SessionState::Deleting(index) = self.state else {
            return Err(self.invalid("confirm a deletion"));
        };
        let removed = PlanService::remove(&mut self.plans, index)?;
        tracing::debug!(key = %self.key, index, "plan deleted");
        self.enter_viewing();
        Ok(removed)
    }

    /// Drops any pending operation without touching the list.
    pub fn cancel(&mut self) -> Result<(), SessionError> {
        if self.is_closed() {
            return Err(SessionError::Closed);
        }
        self.enter_viewing();
        Ok(())
    }

    /// Encoded lines of the current list.
    pub fn lines(&self) -> Vec<String> {
        codec::encode_all(&self.plans)
    }

    /// Persists the whole list and closes the session. A pending operation
    /// is discarded. Returns the number of plans written.
    pub fn close(&mut self, store: &PlanStore) -> Result<usize, SessionError> {
        if self.is_closed() {
            return Err(SessionError::Closed);
        }
        let lines = self.lines();
        store.save_key(self.key, &lines);
        self.state = SessionState::Closed;
        tracing::info!(key = %self.key, count = lines.len(), "category closed");
        Ok(lines.len())
    }

    fn enter_viewing(&mut self) {
        self.state = SessionState::Viewing;
        self.snapshot_len = self.plans.len();
    }

    fn expect_viewing(&self, action: &'static str) -> Result<(), SessionError> {
        match self.state {
            SessionState::Viewing => Ok(()),
            SessionState::Closed => Err(SessionError::Closed),
            _ => Err(self.invalid(action)),
        }
    }

    fn check_in_view(&self, index: usize) -> Result<(), SessionError> {
        if index < self.snapshot_len && index < self.plans.len() {
            Ok(())
        } else {
            Err(SessionError::IndexOutOfView(index))
        }
    }

    fn invalid(&self, action: &'static str) -> SessionError {
        if self.is_closed() {
            SessionError::Closed
        } else {
            SessionError::InvalidState {
                action,
                state: self.state,
            }
        }
    }
}
