use super::*;

#[test]
fn api_error_extracts_backend_message() {
    let err = api_error(404, r#"{"message":"Admin not found"}"#);
    assert_eq!(err, ApiError::Status { status: 404, message: "Admin not found".to_owned() });
    assert_eq!(err.to_string(), "HTTP Error 404: Admin not found");
}

#[test]
fn api_error_falls_back_to_unknown() {
    let err = api_error(502, "<html>bad gateway</html>");
    assert_eq!(err.to_string(), "HTTP Error 502: Unknown Error");
}

#[test]
fn api_error_empty_body_is_unknown() {
    let err = api_error(500, "");
    assert_eq!(err, ApiError::Status { status: 500, message: "Unknown Error".to_owned() });
}

#[test]
fn transport_error_displays_message_verbatim() {
    let err = ApiError::Transport("connection refused".to_owned());
    assert_eq!(err.to_string(), "connection refused");
}
