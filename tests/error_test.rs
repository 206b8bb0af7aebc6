use serde_json::Value;
use winzo_smoke::{Result, SmokeError};

#[test]
fn test_protocol_error_display() {
    let err = SmokeError::Protocol {
        status: 403,
        body: r#"{"success": false}"#.to_string(),
    };
    assert_eq!(err.to_string(), "API rejected the request (HTTP 403)");
    assert!(err.is_protocol());
}

#[test]
fn test_protocol_diagnostic_keeps_json_body() {
    let err = SmokeError::Protocol {
        status: 200,
        body: r#"{"success": false, "error": "Insufficient funds"}"#.to_string(),
    };
    let diagnostic = err.diagnostic();
    assert_eq!(diagnostic["error"], "Insufficient funds");
}

#[test]
fn test_protocol_diagnostic_falls_back_to_raw_text() {
    let err = SmokeError::Protocol {
        status: 502,
        body: "Bad Gateway".to_string(),
    };
    assert_eq!(err.diagnostic(), Value::String("Bad Gateway".to_string()));
}

#[test]
fn test_missing_field_is_transport_kind() {
    let err = SmokeError::MissingField("data");
    assert!(!err.is_protocol());
    assert_eq!(
        err.diagnostic(),
        Value::String("response is missing expected field: data".to_string())
    );
}

#[test]
fn test_decode_error_is_transport_kind() {
    let decode_err = serde_json::from_str::<Value>("not json").unwrap_err();
    let err = SmokeError::from(decode_err);
    assert!(!err.is_protocol());
    assert!(err.to_string().starts_with("malformed response body"));
}

#[test]
fn test_result_type() {
    fn returns_error() -> Result<()> {
        Err(SmokeError::MissingField("token"))
    }

    match returns_error() {
        Err(SmokeError::MissingField(field)) => assert_eq!(field, "token"),
        _ => panic!("Expected MissingField"),
    }
}
