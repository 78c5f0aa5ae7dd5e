use super::*;

// =============================================================
// Password validation
// =============================================================

#[test]
fn password_error_rejects_short_passwords() {
    assert_eq!(password_error("12345").as_deref(), Some("Password must be at least 6 characters."));
    assert!(password_error("").is_some());
}

#[test]
fn password_error_accepts_min_length() {
    assert!(password_error("123456").is_none());
    assert!(password_error("correct horse").is_none());
}

#[test]
fn password_error_counts_characters_not_bytes() {
    assert!(password_error("ωωωωωω").is_none());
    assert!(password_error("ωωωωω").is_some());
}

// =============================================================
// Registration warning
// =============================================================

#[test]
fn registration_warning_embeds_backend_message() {
    assert_eq!(
        registration_warning("Admin ID already taken"),
        "Signup successful, but failed to save details: Admin ID already taken. Try logging in."
    );
}
