//! Intake rules applied to a contact-form submission before anything is stored.

use super::domain::{ContactSubmission, ValidSubmission};

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 100;
pub const MESSAGE_MAX_CHARS: usize = 1000;

const PHONE_DIGITS: usize = 10;
const PHONE_SEPARATORS: [char; 4] = [' ', '-', '(', ')'];

/// Rule violated by a submission. The display text is shown to the visitor as-is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Имя должно содержать от 2 до 100 символов")]
    Name,
    #[error("Неверный формат телефона")]
    Phone,
    #[error("Неверный формат email")]
    Email,
    #[error("Сообщение не должно превышать 1000 символов")]
    MessageTooLong,
}

/// Checks every field in order and returns the first violation.
pub fn validate_submission(
    submission: ContactSubmission,
) -> Result<ValidSubmission, ValidationError> {
    if !is_valid_name(&submission.name) {
        return Err(ValidationError::Name);
    }

    if !is_valid_phone(&submission.phone) {
        return Err(ValidationError::Phone);
    }

    if let Some(email) = submission.email.as_deref() {
        // blank means the visitor left the field empty
        if !email.trim().is_empty() && !is_valid_email(email) {
            return Err(ValidationError::Email);
        }
    }

    if let Some(message) = submission.message.as_deref() {
        if message.chars().count() > MESSAGE_MAX_CHARS {
            return Err(ValidationError::MessageTooLong);
        }
    }

    Ok(ValidSubmission(submission))
}

pub fn is_valid_name(name: &str) -> bool {
    if name.trim().is_empty() {
        return false;
    }
    let length = name.chars().count();
    (NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&length)
}

/// Accepts Russian numbers: an optional `+7` or `8` prefix followed by ten digits,
/// once spaces, hyphens and parentheses are removed.
pub fn is_valid_phone(phone: &str) -> bool {
    let normalized: String = phone
        .chars()
        .filter(|c| !PHONE_SEPARATORS.contains(c))
        .collect();

    let is_number = |digits: &str| {
        digits.len() == PHONE_DIGITS && digits.bytes().all(|b| b.is_ascii_digit())
    };

    is_number(&normalized)
        || normalized.strip_prefix("+7").is_some_and(is_number)
        || normalized.strip_prefix('8').is_some_and(is_number)
}

/// `local@domain.tld` where the final domain label is at least two letters.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || !local.chars().all(is_local_part_char) {
        return false;
    }

    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };

    !host.is_empty()
        && host.chars().all(is_domain_char)
        && tld.len() >= 2
        && tld.chars().all(|c| c.is_ascii_alphabetic())
}

fn is_local_part_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '%' | '+' | '-')
}

fn is_domain_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '-')
}
