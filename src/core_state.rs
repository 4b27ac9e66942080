//! Application state owned by the presentation layer.
//!
//! `CoreState` holds the current call batch, the selected call and the
//! analysis workflow. The generation engine never sees it: handlers
//! borrow the RNG from here and pass it into engine functions.

use std::sync::{Arc, Mutex, MutexGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::config::{self, ConfigError, ServerConfig};
use crate::engine::{self, EngineError};
use crate::models::{AnalysisRecord, CallRecord, SummaryAnalysis, SupportTicket};
use crate::workflow::{AnalysisStage, AnalysisWorkflow, WorkflowError, WorkflowEvent};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Internal lock poisoned")]
    LockPoisoned,
    #[error("Call not found: {0}")]
    CallNotFound(String),
    #[error("No call selected")]
    NoCallSelected,
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error(transparent)]
    Workflow(#[from] WorkflowError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Per-run session: replaced batch-wise, never persisted.
#[derive(Debug, Default)]
pub struct Session {
    /// Current batch. Swapped as a whole on regeneration.
    pub calls: Arc<Vec<CallRecord>>,
    pub selected_call: Option<String>,
    pub workflow: AnalysisWorkflow,
}

/// Read-only view of the session returned to clients.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub selected_call: Option<String>,
    pub stage: AnalysisStage,
    pub analysis: Option<AnalysisRecord>,
    pub ticket: Option<SupportTicket>,
    pub batch_size: usize,
}

pub struct CoreState {
    session: RwLock<Session>,
    /// Shared RNG. Always locked before `session` when both are needed.
    rng: Mutex<StdRng>,
    /// Size used when regeneration does not ask for one.
    pub default_batch_size: usize,
}

impl CoreState {
    /// Seed the RNG from `config` and build the first batch.
    pub fn new(config: &ServerConfig) -> Result<Self, CoreError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(rng, config.batch_size)
    }

    pub fn with_rng(mut rng: StdRng, batch_size: usize) -> Result<Self, CoreError> {
        let batch_size = config::validate_batch_size("batch_size", batch_size)?;
        let calls = engine::build_batch(&mut rng, batch_size, Utc::now())?;
        tracing::info!(count = calls.len(), "Initial call batch ready");

        Ok(Self {
            session: RwLock::new(Session {
                calls: Arc::new(calls),
                ..Session::default()
            }),
            rng: Mutex::new(rng),
            default_batch_size: batch_size,
        })
    }

    // ── Lock helpers ────────────────────────────────────────

    fn read_session(&self) -> Result<RwLockReadGuard<'_, Session>, CoreError> {
        self.session.read().map_err(|_| CoreError::LockPoisoned)
    }

    fn write_session(&self) -> Result<RwLockWriteGuard<'_, Session>, CoreError> {
        self.session.write().map_err(|_| CoreError::LockPoisoned)
    }

    fn lock_rng(&self) -> Result<MutexGuard<'_, StdRng>, CoreError> {
        self.rng.lock().map_err(|_| CoreError::LockPoisoned)
    }

    // ── Batch access ────────────────────────────────────────

    /// Snapshot of the current batch. Stays valid across regenerations.
    pub fn calls(&self) -> Result<Arc<Vec<CallRecord>>, CoreError> {
        Ok(Arc::clone(&self.read_session()?.calls))
    }

    pub fn find_call(&self, call_id: &str) -> Result<CallRecord, CoreError> {
        self.read_session()?
            .calls
            .iter()
            .find(|c| c.call_id == call_id)
            .cloned()
            .ok_or_else(|| CoreError::CallNotFound(call_id.to_string()))
    }

    /// Build a new batch and swap it in, clearing selection and workflow.
    ///
    /// The batch is built before the session lock is taken, so readers see
    /// the old batch until the new one is complete.
    pub fn regenerate(&self, count: Option<usize>) -> Result<Arc<Vec<CallRecord>>, CoreError> {
        let count = match count {
            Some(n) => config::validate_batch_size("count", n)?,
            None => self.default_batch_size,
        };

        let calls = {
            let mut rng = self.lock_rng()?;
            Arc::new(engine::build_batch(&mut *rng, count, Utc::now())?)
        };

        let mut session = self.write_session()?;
        session.calls = Arc::clone(&calls);
        session.selected_call = None;
        session.workflow.reset();
        drop(session);

        tracing::info!(count, "Call batch regenerated");
        Ok(calls)
    }

    // ── Session / workflow ──────────────────────────────────

    pub fn snapshot(&self) -> Result<SessionSnapshot, CoreError> {
        let session = self.read_session()?;
        Ok(SessionSnapshot {
            selected_call: session.selected_call.clone(),
            stage: session.workflow.stage(),
            analysis: session.workflow.analysis().cloned(),
            ticket: session.workflow.ticket().cloned(),
            batch_size: session.calls.len(),
        })
    }

    /// Select a call from the current batch; the workflow restarts.
    pub fn select_call(&self, call_id: &str) -> Result<SessionSnapshot, CoreError> {
        {
            let mut session = self.write_session()?;
            if !session.calls.iter().any(|c| c.call_id == call_id) {
                return Err(CoreError::CallNotFound(call_id.to_string()));
            }
            session.selected_call = Some(call_id.to_string());
            session.workflow.reset();
        }
        tracing::info!(call_id, "Call selected");
        self.snapshot()
    }

    /// Drive the workflow for the selected call.
    pub fn apply_event(&self, event: WorkflowEvent) -> Result<SessionSnapshot, CoreError> {
        {
            let mut rng = self.lock_rng()?;
            let mut session = self.write_session()?;
            if session.selected_call.is_none() && event != WorkflowEvent::Reset {
                return Err(CoreError::NoCallSelected);
            }
            let stage = session.workflow.apply(event, &mut *rng, Utc::now())?;
            tracing::info!(?event, ?stage, "Workflow advanced");
        }
        self.snapshot()
    }

    /// Clear everything and start over with a fresh default-sized batch.
    pub fn reset(&self) -> Result<SessionSnapshot, CoreError> {
        self.regenerate(None)?;
        self.snapshot()
    }

    // ── On-demand generation ────────────────────────────────

    pub fn generate_analysis(&self) -> Result<AnalysisRecord, CoreError> {
        let mut rng = self.lock_rng()?;
        Ok(engine::generate_analysis(&mut *rng, Utc::now()))
    }

    pub fn analyze_summary(&self) -> Result<SummaryAnalysis, CoreError> {
        let mut rng = self.lock_rng()?;
        Ok(engine::analyze_summary(&mut *rng))
    }
}
