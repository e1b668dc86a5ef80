//! Start/end logging shared by every handler

use std::time::Instant;

use todolog_core::errors::ExError;
use todolog_core::{log_op_end, log_op_error, log_op_start};
use todolog_core_types::RequestId;

use super::outcome::{Outcome, Result};

/// One handler invocation, from its start event to its end event
pub(crate) struct Boundary {
    op: &'static str,
    request_id: RequestId,
    start: Instant,
}

impl Boundary {
    pub(crate) fn open(op: &'static str) -> Self {
        let request_id = RequestId::new();
        log_op_start!(op, request_id = %request_id);
        Self {
            op,
            request_id,
            start: Instant::now(),
        }
    }

    /// Emit the end event matching `result` and hand it back
    pub(crate) fn close<T>(self, result: Result<Outcome<T>>) -> Result<Outcome<T>> {
        let duration_ms = self.start.elapsed().as_millis() as u64;
        match result {
            Ok(outcome) => {
                log_op_end!(
                    self.op,
                    duration_ms = duration_ms,
                    request_id = %self.request_id,
                    outcome = outcome.label()
                );
                Ok(outcome)
            }
            Err(err) => {
                let err: ExError = err.with_op(self.op).with_request_id(self.request_id.clone());
                log_op_error!(
                    self.op,
                    err.clone(),
                    duration_ms = duration_ms,
                    request_id = %self.request_id
                );
                Err(err)
            }
        }
    }
}
