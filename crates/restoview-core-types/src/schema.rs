//! Canonical schema constants for structured logging
//!
//! Every log event emitted by the `log_op_*` macros uses these keys.

pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_REQUEST_ID: &str = "request_id";

// Entity identifiers
pub const FIELD_RESTAURANT_ID: &str = "restaurant_id";
pub const FIELD_CUSTOMER_ID: &str = "customer_id";
pub const FIELD_REVIEW_ID: &str = "review_id";

// Result sizes
pub const FIELD_ROWS_AFFECTED: &str = "rows_affected";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names_are_distinct() {
        assert_ne!(EVENT_START, EVENT_END);
        assert_ne!(EVENT_START, EVENT_END_ERROR);
        assert_ne!(EVENT_END, EVENT_END_ERROR);
    }

    #[test]
    fn test_entity_fields_are_distinct() {
        assert_ne!(FIELD_RESTAURANT_ID, FIELD_CUSTOMER_ID);
        assert_ne!(FIELD_CUSTOMER_ID, FIELD_REVIEW_ID);
    }
}
