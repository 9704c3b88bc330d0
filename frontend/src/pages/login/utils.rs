use leptos::*;

pub const EMAIL_INVALID_MESSAGE: &str = "Email is invalid";
pub const LOGIN_FAILED_MESSAGE: &str =
    "Login failed. Please check your credentials and try again.";

/// Reactive state owned by the login page.
#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub email_message: RwSignal<Option<String>>,
    pub message: RwSignal<Option<String>>,
    pub notification_open: RwSignal<bool>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
            email_message: create_rw_signal(None),
            message: create_rw_signal(None),
            notification_open: create_rw_signal(false),
        }
    }
}

/// Permissive shape check: some non-blank text, an `@`, then a dot-separated
/// domain. Matches anywhere in the string, like the original form did.
pub fn is_valid_email(email: &str) -> bool {
    let chars: Vec<char> = email.chars().collect();
    let len = chars.len();
    for at in 1..len {
        if chars[at] != '@' || chars[at - 1].is_whitespace() {
            continue;
        }
        let mut idx = at + 1;
        while idx < len && !chars[idx].is_whitespace() {
            if chars[idx] == '.' && idx > at + 1 && idx + 1 < len && !chars[idx + 1].is_whitespace()
            {
                return true;
            }
            idx += 1;
        }
    }
    false
}

/// Advisory message for the inline email hint; never blocks submission.
pub fn email_message(email: &str) -> Option<String> {
    if is_valid_email(email) {
        None
    } else {
        Some(EMAIL_INVALID_MESSAGE.to_string())
    }
}

/// Submission is blocked only when a field is empty.
pub fn credentials_present(email: &str, password: &str) -> bool {
    !email.is_empty() && !password.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_strings_without_at_or_dot() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("missing.at.example.com"));
        assert!(!is_valid_email("missing-dot@example"));
    }

    #[test]
    fn accepts_basic_shapes() {
        assert!(is_valid_email("x@y.z"));
        assert!(is_valid_email("alice@example.com"));
        assert!(is_valid_email("a+b@sub.example.co"));
    }

    #[test]
    fn rejects_whitespace_inside_the_match() {
        assert!(!is_valid_email("alice@ example.com"));
        assert!(!is_valid_email("alice @example.com"));
        assert!(!is_valid_email("alice@example .com"));
    }

    #[test]
    fn matches_a_valid_shape_anywhere_in_the_string() {
        assert!(is_valid_email("please contact a@b.c today"));
        assert!(is_valid_email(" a@b.c"));
    }

    #[test]
    fn the_dot_needs_text_on_both_sides() {
        assert!(!is_valid_email("a@.b"));
        assert!(!is_valid_email("a@b."));
        assert!(is_valid_email("a@..b"));
    }

    #[test]
    fn email_message_is_advisory() {
        assert_eq!(email_message("nope"), Some(EMAIL_INVALID_MESSAGE.to_string()));
        assert_eq!(email_message("a@b.c"), None);
    }

    #[test]
    fn only_empty_fields_block_submission() {
        assert!(!credentials_present("", "secret"));
        assert!(!credentials_present("alice@example.com", ""));
        assert!(!credentials_present("", ""));
        // A malformed email still submits.
        assert!(credentials_present("not-an-email", "secret"));
    }
}
