//! Bounded concurrent persistence of a stamped batch
//!
//! A fixed number of workers pull batch indices from a shared cursor and
//! write one order at a time. Each outcome goes into the slot of its batch
//! index, so the result is independent of completion order.

use super::backend::PersistenceBackend;
use super::error::PersistenceError;
use super::types::{Order, Outcome, OutcomeSet, RecordOutcome};
use futures::future::join_all;
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::time::Instant;
use tracing::{debug, error, warn};

type Slots = Arc<Mutex<Vec<Option<Outcome>>>>;

/// Raises the stop flag when the persist call ends, including by being dropped
struct StopOnDrop(Arc<AtomicBool>);

impl Drop for StopOnDrop {
    fn drop(&mut self) {
        self.0.store(true, Ordering::Release);
    }
}

/// Fans writes out over at most `max_workers` tasks
#[derive(Debug, Clone, Copy)]
pub struct ConcurrentPersister {
    max_workers: usize,
}

impl ConcurrentPersister {
    /// Create a persister; the worker ceiling is at least 1
    pub fn new(max_workers: usize) -> Self {
        Self {
            max_workers: max_workers.max(1),
        }
    }

    pub fn max_workers(&self) -> usize {
        self.max_workers
    }

    /// Number of workers used for a batch of `batch_len` orders
    pub fn worker_count(&self, batch_len: usize) -> usize {
        batch_len.min(self.max_workers)
    }

    /// Persist every order, returning exactly one outcome per order
    ///
    /// All orders are attempted regardless of earlier failures. Once
    /// `deadline` passes, workers stop claiming orders; writes already sent
    /// to the backend are left to finish and unclaimed orders fail with
    /// [`PersistenceError::Timeout`]. Orders left without an outcome for
    /// any other reason fail with [`PersistenceError::WorkerAborted`].
    ///
    /// Dropping the returned future stops workers from claiming further
    /// orders; writes already in flight still complete.
    pub async fn persist(
        &self,
        batch: Vec<Order>,
        backend: Arc<dyn PersistenceBackend>,
        deadline: Option<Instant>,
    ) -> OutcomeSet {
        let total = batch.len();
        if total == 0 {
            return OutcomeSet::default();
        }

        let workers = self.worker_count(total);
        debug!("Persisting {} records with {} workers", total, workers);

        let records = Arc::new(batch);
        let cursor = Arc::new(AtomicUsize::new(0));
        let slots: Slots = Arc::new(Mutex::new((0..total).map(|_| None).collect()));
        let stop = Arc::new(AtomicBool::new(false));
        let _stop_guard = StopOnDrop(Arc::clone(&stop));

        let handles: Vec<_> = (0..workers)
            .map(|worker_id| {
                tokio::spawn(run_worker(
                    worker_id,
                    Arc::clone(&records),
                    Arc::clone(&backend),
                    Arc::clone(&cursor),
                    Arc::clone(&slots),
                    Arc::clone(&stop),
                    deadline,
                ))
            })
            .collect();

        // Join barrier
        for (worker_id, joined) in join_all(handles).await.into_iter().enumerate() {
            if let Err(e) = joined {
                error!(worker_id, error = %e, "Persist worker terminated abnormally");
            }
        }

        // Indices at or past the cursor were never claimed by any worker.
        let claimed = cursor.load(Ordering::Acquire).min(total);
        let deadline_passed = deadline.is_some_and(|deadline| Instant::now() >= deadline);

        let slots = match Arc::try_unwrap(slots) {
            Ok(slots) => slots.into_inner(),
            Err(shared) => std::mem::take(&mut *shared.lock()),
        };
        let records = Arc::try_unwrap(records).unwrap_or_else(|shared| (*shared).clone());

        let entries = records
            .into_iter()
            .zip(slots)
            .enumerate()
            .map(|(index, (record, slot))| {
                let outcome = slot.unwrap_or_else(|| {
                    if index >= claimed && deadline_passed {
                        Outcome::Failed(PersistenceError::Timeout { index })
                    } else {
                        Outcome::Failed(PersistenceError::WorkerAborted { index })
                    }
                });
                RecordOutcome {
                    index,
                    record,
                    outcome,
                }
            })
            .collect();

        OutcomeSet { entries }
    }
}

async fn run_worker(
    worker_id: usize,
    records: Arc<Vec<Order>>,
    backend: Arc<dyn PersistenceBackend>,
    cursor: Arc<AtomicUsize>,
    slots: Slots,
    stop: Arc<AtomicBool>,
    deadline: Option<Instant>,
) {
    let mut processed = 0usize;

    loop {
        if deadline.is_some_and(|deadline| Instant::now() >= deadline) {
            debug!(worker_id, "Deadline reached, worker stops claiming records");
            break;
        }
        if stop.load(Ordering::Acquire) {
            debug!(worker_id, "Caller went away, worker stops claiming records");
            break;
        }

        let index = cursor.fetch_add(1, Ordering::AcqRel);
        let Some(record) = records.get(index) else {
            break;
        };

        let outcome = match backend.create(record).await {
            Ok(id) => Outcome::Written { id },
            Err(source) => {
                warn!(worker_id, index, error = %source, "Failed to persist record");
                Outcome::Failed(PersistenceError::Backend { index, source })
            }
        };

        slots.lock()[index] = Some(outcome);
        processed += 1;
    }

    debug!(worker_id, processed, "Persist worker finished");
}
