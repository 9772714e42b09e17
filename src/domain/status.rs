// src/domain/status.rs

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Operability of a return machine as reported by a visitor.
///
/// The declaration order is also the tie-break order used when deriving the
/// current status: WORKING, then ISSUES, then OUT_OF_ORDER.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Working,
    Issues,
    OutOfOrder,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown status literal: {0:?}")]
pub struct UnknownStatus(pub String);

impl Status {
    pub const ALL: [Status; 3] = [Status::Working, Status::Issues, Status::OutOfOrder];

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Working => "WORKING",
            Status::Issues => "ISSUES",
            Status::OutOfOrder => "OUT_OF_ORDER",
        }
    }

    /// Dutch label shown in badges.
    pub fn label(self) -> &'static str {
        match self {
            Status::Working => "Werkend",
            Status::Issues => "Problemen",
            Status::OutOfOrder => "Stuk",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Status::Working => 0,
            Status::Issues => 1,
            Status::OutOfOrder => 2,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "WORKING" => Ok(Status::Working),
            "ISSUES" => Ok(Status::Issues),
            "OUT_OF_ORDER" => Ok(Status::OutOfOrder),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

impl ToSql for Status {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

// An unknown literal in storage is a data-integrity bug: fail the row instead
// of dropping the report from the vote.
impl FromSql for Status {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let text = value.as_str()?;
        text.parse()
            .map_err(|e: UnknownStatus| FromSqlError::Other(Box::new(e)))
    }
}
