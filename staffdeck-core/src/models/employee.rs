//! Employee input models: validated fields plus the create/update payloads.

use rust_decimal::Decimal;

use super::ValidationError;

/// Matches the VARCHAR(100) columns.
const MAX_NAME_LEN: usize = 100;
const MAX_EMAIL_LEN: usize = 100;

/// Validated employee name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeName(String);

impl EmployeeName {
    /// Non-empty after trimming, max 100 characters. Names are not unique.
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "name" });
        }

        if trimmed.len() > MAX_NAME_LEN {
            return Err(ValidationError::TooLong {
                field: "name",
                max: MAX_NAME_LEN,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for EmployeeName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validated email address
///
/// The check is deliberately shallow: one `@` with non-empty sides. The
/// store's unique index on the verbatim string is the real gatekeeper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "email" });
        }

        if trimmed.len() > MAX_EMAIL_LEN {
            return Err(ValidationError::TooLong {
                field: "email",
                max: MAX_EMAIL_LEN,
            });
        }

        match trimmed.split_once('@') {
            Some((local, domain))
                if !local.is_empty() && !domain.is_empty() && !domain.contains('@') =>
            {
                Ok(Self(trimmed.to_owned()))
            }
            _ => Err(ValidationError::InvalidFormat {
                field: "email",
                reason: "expected a single '@' with text on both sides",
            }),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// New employee payload for `EmployeeRepo::create`.
#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub name: EmployeeName,
    pub email: EmailAddress,
    /// Optional department assignment; must reference an existing row.
    pub department_id: Option<i32>,
    /// Defaults to 0.00 when the caller leaves it unspecified.
    pub salary: Decimal,
}

/// Change set for `EmployeeRepo::update`.
///
/// A `None` field is left untouched; there is no way to clear an assigned
/// department through an update (the foreign key clears it when the
/// department itself is deleted).
#[derive(Debug, Clone, Default)]
pub struct EmployeeUpdate {
    pub name: Option<EmployeeName>,
    pub email: Option<EmailAddress>,
    pub department_id: Option<i32>,
    pub salary: Option<Decimal>,
}

impl EmployeeUpdate {
    /// True when no field was supplied; the update treats this as a no-op.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.department_id.is_none()
            && self.salary.is_none()
    }
}
