//! Timeout budgeting across the HEAD and GET requests of one probe.

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use super::{TransportError, TransportErrorKind};

/// What the probe timeout bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeoutScope {
    /// One deadline for the whole call; the GET only gets what the HEAD left.
    #[default]
    WholeProbe,
    /// Each request gets the full timeout.
    PerRequest,
}

/// Below this, libcurl cannot express the limit (0 means "no timeout").
const MIN_BUDGET: Duration = Duration::from_millis(1);

#[derive(Debug)]
pub(crate) struct Deadline {
    timeout: Duration,
    scope: TimeoutScope,
    started: Instant,
}

impl Deadline {
    pub(crate) fn start(timeout: Duration, scope: TimeoutScope) -> Self {
        Self {
            timeout,
            scope,
            started: Instant::now(),
        }
    }

    /// Timeout for the next request, or a timeout error if nothing is left.
    pub(crate) fn budget(&self) -> Result<Duration, TransportError> {
        let left = match self.scope {
            TimeoutScope::PerRequest => self.timeout,
            TimeoutScope::WholeProbe => self.timeout.saturating_sub(self.started.elapsed()),
        };
        if left < MIN_BUDGET {
            return Err(TransportError::new(
                TransportErrorKind::Timeout,
                format!("probe deadline of {:?} exceeded", self.timeout),
            ));
        }
        Ok(left)
    }
}
