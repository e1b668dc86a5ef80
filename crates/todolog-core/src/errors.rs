use todolog_core_types::RequestId;
use thiserror::Error;

use crate::model::{ItemId, ListId};

/// Result type alias using TodoError
pub type Result<T> = std::result::Result<T, TodoError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code usable by callers, tests and
/// rendered output. Kinds fold into one of four [`ErrorClass`]es.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Validation
    InvalidName,
    InvalidTitle,
    InvalidStatus,

    // Lookup
    NotFound,

    // Business rules
    Conflict,

    // Integration/IO
    Io,
    Persistence,
    Configuration,
}

/// Coarse classification used to pick a handler outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Bad user input; nothing was written
    Validation,
    /// A referenced id does not exist; nothing was written
    NotFound,
    /// A business rule blocked the operation; nothing was written
    Conflict,
    /// Storage or environment failure
    Infrastructure,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidName => "ERR_INVALID_NAME",
            ExErrorKind::InvalidTitle => "ERR_INVALID_TITLE",
            ExErrorKind::InvalidStatus => "ERR_INVALID_STATUS",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::Conflict => "ERR_CONFLICT",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Configuration => "ERR_CONFIGURATION",
        }
    }

    /// Fold this kind into its error class
    pub fn class(&self) -> ErrorClass {
        match self {
            ExErrorKind::InvalidName
            | ExErrorKind::InvalidTitle
            | ExErrorKind::InvalidStatus => ErrorClass::Validation,
            ExErrorKind::NotFound => ErrorClass::NotFound,
            ExErrorKind::Conflict => ErrorClass::Conflict,
            ExErrorKind::Io | ExErrorKind::Persistence | ExErrorKind::Configuration => {
                ErrorClass::Infrastructure
            }
        }
    }
}

/// Canonical structured error type
///
/// Carries classification fields for programmatic handling and context
/// for debugging. Domain code raises [`TodoError`]; boundaries convert it
/// into `ExError` via `From`.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    list_id: Option<ListId>,
    item_id: Option<ItemId>,
    request_id: Option<RequestId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            list_id: None,
            item_id: None,
            request_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add list ID context
    pub fn with_list_id(mut self, id: ListId) -> Self {
        self.list_id = Some(id);
        self
    }

    /// Add item ID context
    pub fn with_item_id(mut self, id: ItemId) -> Self {
        self.item_id = Some(id);
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the error class
    pub fn class(&self) -> ErrorClass {
        self.kind.class()
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the list ID context, if any
    pub fn list_id(&self) -> Option<ListId> {
        self.list_id
    }

    /// Get the item ID context, if any
    pub fn item_id(&self) -> Option<ItemId> {
        self.item_id
    }

    /// Get the request ID context, if any
    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(list_id) = self.list_id {
            write!(f, " (list_id: {})", list_id)?;
        }
        if let Some(item_id) = self.item_id {
            write!(f, " (item_id: {})", item_id)?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request_id: {})", request_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for todolog domain operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TodoError {
    // ===== Validation Errors =====
    /// List name is empty or too long
    #[error("Invalid list name: {reason}")]
    InvalidName { reason: String },

    /// Item title is empty or too long
    #[error("Invalid item title: {reason}")]
    InvalidTitle { reason: String },

    /// Status text is not one of TODO, IN_PROGRESS, DONE
    #[error("Invalid status: {value:?} is not one of TODO, IN_PROGRESS, DONE")]
    InvalidStatus { value: String },

    // ===== Lookup Errors =====
    /// List not found in store
    #[error("List not found: {list_id}")]
    ListNotFound { list_id: ListId },

    /// Item not found in store
    #[error("Item not found: {item_id}")]
    ItemNotFound { item_id: ItemId },

    // ===== Business Rule Errors =====
    /// List still owns items that are not DONE
    #[error("Cannot delete list {list_id}: {open_count} item(s) still TODO or IN PROGRESS")]
    ListHasOpenItems { list_id: ListId, open_count: usize },

    // ===== Storage Errors =====
    /// Backing store failure
    #[error("Persistence error: {message}")]
    Persistence { message: String },
}

impl TodoError {
    /// Classification of this error, without building a full `ExError`
    pub fn class(&self) -> ErrorClass {
        ExError::from(self.clone()).class()
    }
}

impl From<TodoError> for ExError {
    fn from(err: TodoError) -> Self {
        let message = err.to_string();
        match err {
            TodoError::InvalidName { .. } => {
                ExError::new(ExErrorKind::InvalidName).with_message(message)
            }
            TodoError::InvalidTitle { .. } => {
                ExError::new(ExErrorKind::InvalidTitle).with_message(message)
            }
            TodoError::InvalidStatus { .. } => {
                ExError::new(ExErrorKind::InvalidStatus).with_message(message)
            }
            TodoError::ListNotFound { list_id } => ExError::new(ExErrorKind::NotFound)
                .with_list_id(list_id)
                .with_message("List not found"),
            TodoError::ItemNotFound { item_id } => ExError::new(ExErrorKind::NotFound)
                .with_item_id(item_id)
                .with_message("Item not found"),
            TodoError::ListHasOpenItems { list_id, .. } => ExError::new(ExErrorKind::Conflict)
                .with_list_id(list_id)
                .with_message(message),
            TodoError::Persistence { .. } => {
                ExError::new(ExErrorKind::Persistence).with_message(message)
            }
        }
    }
}
