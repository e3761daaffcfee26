//! User entity and the fixed enumerations attached to it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Mobile operator dialing prefixes accepted for user phone numbers.
///
/// The wire representation is the prefix code with a leading underscore
/// (`"_050"`), matching what API clients submit. Each variant carries the
/// dialing code and the operator it belongs to; the mapping is data only,
/// nothing dispatches on the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhonePrefix {
    #[serde(rename = "_050")]
    P050,
    #[serde(rename = "_051")]
    P051,
    #[serde(rename = "_055")]
    P055,
    #[serde(rename = "_070")]
    P070,
    #[serde(rename = "_077")]
    P077,
    #[serde(rename = "_099")]
    P099,
    #[serde(rename = "_010")]
    P010,
}

impl PhonePrefix {
    /// The dialing code without the underscore, e.g. `"050"`.
    pub const fn code(self) -> &'static str {
        match self {
            Self::P050 => "050",
            Self::P051 => "051",
            Self::P055 => "055",
            Self::P070 => "070",
            Self::P077 => "077",
            Self::P099 => "099",
            Self::P010 => "010",
        }
    }

    /// The operator that owns this prefix.
    pub const fn operator(self) -> &'static str {
        match self {
            Self::P050 | Self::P051 => "Azercell",
            Self::P055 | Self::P099 | Self::P010 => "Bakcell",
            Self::P070 | Self::P077 => "Nar",
        }
    }

    /// Canonical string form, identical to the wire representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::P050 => "_050",
            Self::P051 => "_051",
            Self::P055 => "_055",
            Self::P070 => "_070",
            Self::P077 => "_077",
            Self::P099 => "_099",
            Self::P010 => "_010",
        }
    }

    /// Parses the canonical string form. Returns `None` for unknown values.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "_050" => Some(Self::P050),
            "_051" => Some(Self::P051),
            "_055" => Some(Self::P055),
            "_070" => Some(Self::P070),
            "_077" => Some(Self::P077),
            "_099" => Some(Self::P099),
            "_010" => Some(Self::P010),
            _ => None,
        }
    }
}

/// Access tier attached to a user. No authorization logic consumes it yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    /// Canonical string form, identical to the wire representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Admin => "ADMIN",
        }
    }

    /// Parses the canonical string form. Returns `None` for unknown values.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "USER" => Some(Self::User),
            "ADMIN" => Some(Self::Admin),
            _ => None,
        }
    }
}

/// A persisted user record.
///
/// `id` is assigned by the database on insert and immutable thereafter.
/// `created_at` is set once at creation; `updated_at` is refreshed on every
/// successful update.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub phone_prefix: PhonePrefix,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input data for inserting a new user row.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub phone_prefix: PhonePrefix,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Field set accepted by the create and update operations.
///
/// Both operations take the full set; there are no partial updates.
#[derive(Debug, Clone)]
pub struct UserInput {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub phone_prefix: PhonePrefix,
    pub role: Role,
}
