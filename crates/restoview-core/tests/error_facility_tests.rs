use restoview_core::errors::{ExError, ExErrorKind, RestoError};
use restoview_core_types::RequestId;

#[test]
fn test_not_found_verifiable_by_kind() {
    let err = RestoError::RestaurantNotFound { restaurant_id: 42 };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::NotFound);
    assert_eq!(ex_err.code(), "ERR_NOT_FOUND");
    assert_eq!(ex_err.entity_id(), Some("42"));
}

#[test]
fn test_each_entity_not_found_keeps_its_id() {
    let cases: Vec<(RestoError, &str)> = vec![
        (RestoError::RestaurantNotFound { restaurant_id: 1 }, "1"),
        (RestoError::CustomerNotFound { customer_id: 2 }, "2"),
        (RestoError::ReviewNotFound { review_id: 3 }, "3"),
    ];

    for (err, id) in cases {
        let ex_err: ExError = err.into();
        assert_eq!(ex_err.kind(), ExErrorKind::NotFound);
        assert_eq!(ex_err.entity_id(), Some(id));
    }
}

#[test]
fn test_invalid_input_carries_reason() {
    let err = RestoError::InvalidInput {
        reason: "unknown seed key 'r9'".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.code(), "ERR_INVALID_INPUT");
    assert!(ex_err.message().contains("r9"));
}

#[test]
fn test_serde_json_error_becomes_serialization() {
    let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: RestoError = parse_err.into();

    let ex_err: ExError = err.into();
    assert_eq!(ex_err.kind(), ExErrorKind::Serialization);
}

#[test]
fn test_request_id_attached() {
    let request_id = RequestId::from_string("req-7".to_string());
    let err = ExError::new(ExErrorKind::Persistence).with_request_id(request_id.clone());

    assert_eq!(err.request_id(), Some(&request_id));
    assert!(err.to_string().contains("(request_id: req-7)"));
}

#[test]
fn test_domain_error_messages() {
    let err = RestoError::CustomerNotFound { customer_id: 17 };
    assert_eq!(err.to_string(), "Customer not found: 17");
}
