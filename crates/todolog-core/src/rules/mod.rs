//! Pure domain rules
//!
//! Nothing in here touches storage or reads a clock; the store calls these
//! and performs the writes itself.

pub mod lifecycle;
pub mod transition;
pub mod validation;

pub use lifecycle::can_delete;
pub use transition::record_transition;
