//! Shared application state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use packsmith_config::{HttpConfig, ServiceConfig, SolverConfig};
use packsmith_core::{OrderQuantity, PackSizes, PackSolution};
use packsmith_solver::{PackSolver, SolveResult};
use packsmith_store::{open_seeded, MemoryStore, PackSizeStore, StoreError};
use tokio::sync::Semaphore;
use tracing::warn;

use crate::error::ApiError;

/// State handed to every handler. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn PackSizeStore>,
    solver: PackSolver,
    solve_slots: Arc<Semaphore>,
    request_timeout: Duration,
}

/// Raises the solver's termination flag once the awaiting request stops
/// waiting for any reason.
struct CancelOnDrop(Arc<AtomicBool>);

impl Drop for CancelOnDrop {
    fn drop(&mut self) {
        self.0.store(true, Ordering::Relaxed);
    }
}

fn solve_slots(config: &SolverConfig) -> Arc<Semaphore> {
    Arc::new(Semaphore::new(
        config.max_concurrent_solves.min(Semaphore::MAX_PERMITS),
    ))
}

impl AppState {
    /// Creates state around an existing store.
    pub fn new(store: Arc<dyn PackSizeStore>, solver: SolverConfig, http: &HttpConfig) -> Self {
        Self {
            store,
            solve_slots: solve_slots(&solver),
            solver: PackSolver::new(solver),
            request_timeout: http.request_timeout(),
        }
    }

    /// Opens (and seeds) the configured store.
    pub fn from_config(config: &ServiceConfig) -> Result<Self, StoreError> {
        let store = open_seeded(&config.store)?;
        Ok(Self::new(store, config.solver.clone(), &config.http))
    }

    /// In-memory state pre-filled with `sizes`, using default settings.
    ///
    /// Fails with [`StoreError::Capacity`] past the default size limit.
    pub fn with_sizes(sizes: impl IntoIterator<Item = u64>) -> Result<Self, StoreError> {
        let config = ServiceConfig::default();
        let store = MemoryStore::with_sizes(sizes, config.store.max_pack_sizes)?;
        Ok(Self::new(Arc::new(store), config.solver, &config.http))
    }

    /// Replaces the solver configuration.
    pub fn with_solver_config(mut self, config: SolverConfig) -> Self {
        self.solve_slots = solve_slots(&config);
        self.solver = PackSolver::new(config);
        self
    }

    /// Returns the pack-size store.
    pub fn store(&self) -> &dyn PackSizeStore {
        self.store.as_ref()
    }

    /// Returns the per-request timeout.
    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Loads the current sizes and solves `quantity` on the blocking pool.
    ///
    /// At most `max_concurrent_solves` solves run at once. The solve
    /// timeout covers waiting for a slot as well as the search; once it
    /// passes, or the request is dropped, the search is told to stop.
    pub async fn calculate(&self, quantity: OrderQuantity) -> Result<PackSolution, ApiError> {
        let sizes: PackSizes = self.store.pack_sizes()?.ok_or(ApiError::NoPackSizes)?;
        let terminate = Arc::new(AtomicBool::new(false));
        let _cancel = CancelOnDrop(Arc::clone(&terminate));

        let solve = self.spawn_solve(quantity, sizes, terminate);
        let joined = match self.solver.config().solve_timeout() {
            Some(limit) => match tokio::time::timeout(limit, solve).await {
                Ok(joined) => joined,
                Err(_) => {
                    warn!(
                        event = "solve_abandoned",
                        quantity = quantity.get(),
                        timeout_ms = limit.as_millis() as u64,
                    );
                    return Err(ApiError::SolveTimeout);
                }
            },
            None => solve.await,
        };

        Ok(joined?.solution)
    }

    async fn spawn_solve(
        &self,
        quantity: OrderQuantity,
        sizes: PackSizes,
        terminate: Arc<AtomicBool>,
    ) -> Result<SolveResult, ApiError> {
        let permit = Arc::clone(&self.solve_slots)
            .acquire_owned()
            .await
            .map_err(|e| ApiError::Internal(format!("solve slots closed: {e}")))?;
        let solver = self.solver.clone();

        let task = tokio::task::spawn_blocking(move || {
            // The slot is held until the search itself returns.
            let _permit = permit;
            solver.solve_with_termination(quantity, &sizes, &terminate)
        });

        let result = task
            .await
            .map_err(|e| ApiError::Internal(format!("solver task failed: {e}")))??;
        Ok(result)
    }
}
