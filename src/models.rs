use serde_json::Value;
use std::fmt;

/// Key the record service uses for records and their detail lines.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identifier {
    Integer(i64),
    Text(String),
}

impl Identifier {
    /// Read a scalar JSON value as an identifier.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n
                .as_i64()
                .map(Identifier::Integer)
                .or_else(|| Some(Identifier::Text(n.to_string()))),
            Value::String(s) => Some(Identifier::Text(s.clone())),
            _ => None,
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Integer(n) => write!(f, "{}", n),
            Identifier::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Identifier {
    fn from(n: i64) -> Self {
        Identifier::Integer(n)
    }
}

impl From<&str> for Identifier {
    fn from(s: &str) -> Self {
        Identifier::Text(s.to_string())
    }
}

/// A record as returned by `/first`, `/next` and `/prev`.
///
/// Only `id` and `mah_idd` are read; the server may send other fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub id: Identifier,
    pub mah_idd: Option<Identifier>,
}

impl Record {
    /// Interpret a response body as a record.
    ///
    /// Returns `None` for anything that is not an object carrying an `id`:
    /// `null`, `{}`, lists, scalars. The service answers this way past the
    /// ends of the sequence.
    pub fn from_json(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        let id = object.get("id").and_then(Identifier::from_json)?;
        let mah_idd = object.get("mah_idd").and_then(Identifier::from_json);
        Some(Record { id, mah_idd })
    }

    /// `mah_idd` as sent back to `/mahal_line`; empty when absent.
    pub fn mah_idd_param(&self) -> String {
        self.mah_idd
            .as_ref()
            .map(|m| m.to_string())
            .unwrap_or_default()
    }
}

/// Endpoints exposed by the record service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    First,
    Next,
    Prev,
    MahalLine,
}

impl Endpoint {
    pub fn as_str(&self) -> &str {
        match self {
            Endpoint::First => "first",
            Endpoint::Next => "next",
            Endpoint::Prev => "prev",
            Endpoint::MahalLine => "mahal_line",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of a cursor move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    First,
    Next,
    Previous,
}

impl Navigation {
    pub fn endpoint(&self) -> Endpoint {
        match self {
            Navigation::First => Endpoint::First,
            Navigation::Next => Endpoint::Next,
            Navigation::Previous => Endpoint::Prev,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Navigation::First => "first",
            Navigation::Next => "next",
            Navigation::Previous => "previous",
        }
    }
}
