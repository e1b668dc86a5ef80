//! Boundary event macros for command handlers
//!
//! A handled command emits one `start` event and then exactly one of
//! `end` or `end_error`. `component` is the calling module; any trailing
//! `key = value` pairs ride along unchanged.

/// Emit the `start` event for a command
///
/// ```
/// # use todolog_core::log_op_start;
/// log_op_start!("create_list");
/// log_op_start!("add_item", list_id = 3);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = todolog_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = todolog_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Emit the `end` event for a command that settled into an outcome
///
/// Not-found, invalid and conflict results also end here, tagged with
/// their `outcome`.
///
/// ```
/// # use todolog_core::log_op_end;
/// log_op_end!("delete_list", duration_ms = 4, outcome = "conflict");
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = todolog_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = todolog_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Emit the `end_error` event for a command that hit a storage failure
///
/// `$err` is anything convertible into `ExError`; its kind, code and
/// message are attached as `err_kind`, `err_code` and `err_message`.
///
/// ```
/// # use todolog_core::{log_op_error, errors::TodoError};
/// let err = TodoError::Persistence { message: "disk full".to_string() };
/// log_op_error!("add_item", err, duration_ms = 10);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        use $crate::errors::ExError;
        let ex_err: ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = todolog_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            err_message = ex_err.message(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        use $crate::errors::ExError;
        let ex_err: ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = todolog_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            err_message = ex_err.message(),
            $($field)*
        );
    }};
}
