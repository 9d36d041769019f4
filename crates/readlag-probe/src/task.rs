use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{Span, debug, info_span, warn};

use readlag_client::{ConnectOptions, Connector, DatabaseClient, Statement, TimestampBound};

use crate::errors::ProbeError;
use crate::outcome::ReadOutcome;
use crate::sampling::Sampling;
use crate::statement::key_lookup;
use crate::validate::confirm_match;

/// Fixed offset behind now that every read observes.
///
/// The offset is exact (see [`TimestampBound::ExactStaleness`]) and is
/// part of the read protocol, not configuration.
pub const EXACT_STALENESS: Duration = Duration::from_secs(15);

/// One timed, traced stale read against a single key.
///
/// A task is built for exactly one invocation: [`StaleReadTask::execute`]
/// consumes it and returns the measurement. The key used in the lookup
/// predicate is the same value the returned row is compared against.
///
/// Every execution is traced by default ([`Sampling::Always`]); harnesses
/// running large fleets can thin that out with
/// [`StaleReadTask::with_sampling`].
pub struct StaleReadTask {
    key_field: String,
    task_id: u32,
    client: Arc<dyn DatabaseClient>,
    sampling: Sampling,
}

impl StaleReadTask {
    /// Task over a pre-built client handle.
    pub fn new(
        key_field: impl Into<String>,
        client: Arc<dyn DatabaseClient>,
        task_id: u32,
    ) -> Self {
        Self {
            key_field: key_field.into(),
            task_id,
            client,
            sampling: Sampling::default(),
        }
    }

    /// Task from raw connection parameters.
    ///
    /// Resolution happens here, exactly once; the resolved handle is
    /// cached for the task's lifetime. Failure to resolve is a
    /// construction failure surfaced to the caller, never a measured one.
    pub fn connect(
        key_field: impl Into<String>,
        connector: &dyn Connector,
        options: &ConnectOptions,
        task_id: u32,
    ) -> Result<Self, ProbeError> {
        let client = connector.connect(options).map_err(ProbeError::Connect)?;
        debug!(task_id, database = %options.database, "client created");
        Ok(Self::new(key_field, client, task_id))
    }

    pub fn with_sampling(mut self, sampling: Sampling) -> Self {
        self.sampling = sampling;
        self
    }

    pub fn task_id(&self) -> u32 {
        self.task_id
    }

    /// Run the read and report how long it took.
    ///
    /// Timing is returned for failed executions too; the cause rides
    /// along in the outcome and is additionally logged at warn level, so
    /// latency-only consumers still leave a fault trail.
    pub fn execute(self) -> ReadOutcome {
        let start = Instant::now();
        let result = self.span().in_scope(|| self.perform());
        let elapsed = start.elapsed();

        if let Err(err) = &result {
            warn!(task_id = self.task_id, error = %err, "stale read failed");
        }
        ReadOutcome::new(elapsed, result)
    }

    fn span(&self) -> Span {
        if self.sampling.should_sample(self.task_id) {
            info_span!("stale_read", task_id = self.task_id)
        } else {
            Span::none()
        }
    }

    fn perform(&self) -> Result<(), ProbeError> {
        let statement = key_lookup(&self.key_field);
        let result = self.read_and_validate(&statement);
        // The row stream is gone by now, on every path.
        debug!("results closed");
        result
    }

    fn read_and_validate(&self, statement: &Statement) -> Result<(), ProbeError> {
        let mut rows = self
            .client
            .single_use_query(TimestampBound::ExactStaleness(EXACT_STALENESS), statement)
            .map_err(ProbeError::Query)?;
        debug!("query executed");
        confirm_match(&self.key_field, &mut *rows)?;
        Ok(())
    }
}
