//! Canonical schema constants for structured logging and events
//!
//! These constants keep field names identical across crates.

// Field keys every boundary event carries
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

// Outcome tags carried on `end` events
pub const OUTCOME_OK: &str = "ok";
pub const OUTCOME_NOT_FOUND: &str = "not_found";
pub const OUTCOME_INVALID: &str = "invalid";
pub const OUTCOME_CONFLICT: &str = "conflict";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_accessibility() {
        assert!(!FIELD_COMPONENT.is_empty());
        assert!(!FIELD_OP.is_empty());
        assert!(!FIELD_EVENT.is_empty());
        assert!(!EVENT_START.is_empty());
        assert!(!EVENT_END.is_empty());
        assert!(!EVENT_END_ERROR.is_empty());
    }

    #[test]
    fn test_event_names_are_distinct() {
        assert_ne!(EVENT_START, EVENT_END);
        assert_ne!(EVENT_START, EVENT_END_ERROR);
        assert_ne!(EVENT_END, EVENT_END_ERROR);
    }

    #[test]
    fn test_outcome_tags_are_distinct() {
        let tags = [OUTCOME_OK, OUTCOME_NOT_FOUND, OUTCOME_INVALID, OUTCOME_CONFLICT];
        for (i, a) in tags.iter().enumerate() {
            for b in &tags[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
