use sea_orm::ColumnType;
use std::fmt;
use uuid::Uuid;

/// A raw key identifying one row by its route key column.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyValue {
    Integer(i64),
    Uuid(Uuid),
    Text(String),
}

impl KeyValue {
    /// Parse a key taken from a URL path segment.
    ///
    /// Integers win over UUIDs, UUIDs over plain text. Only canonical forms
    /// are typed (`"007"` and upper case UUIDs stay text), so the key always
    /// displays as the raw segment.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if let Some(integer) = raw.parse::<i64>().ok().filter(|n| n.to_string() == raw) {
            Self::Integer(integer)
        } else if let Some(uuid) = Uuid::parse_str(raw).ok().filter(|u| u.to_string() == raw) {
            Self::Uuid(uuid)
        } else {
            Self::Text(raw.to_string())
        }
    }

    /// The key as a value of a column of `column_type`.
    ///
    /// `None` when no value of that column can equal the key, e.g. a text
    /// key against an integer column.
    #[must_use]
    pub fn coerce(&self, column_type: &ColumnType) -> Option<Self> {
        match column_type {
            ColumnType::Char(_) | ColumnType::String(_) | ColumnType::Text => {
                Some(Self::Text(self.to_string()))
            }
            ColumnType::TinyInteger
            | ColumnType::SmallInteger
            | ColumnType::Integer
            | ColumnType::BigInteger
            | ColumnType::TinyUnsigned
            | ColumnType::SmallUnsigned
            | ColumnType::Unsigned
            | ColumnType::BigUnsigned => match self {
                Self::Integer(_) => Some(self.clone()),
                Self::Text(text) => text.trim().parse().ok().map(Self::Integer),
                Self::Uuid(_) => None,
            },
            ColumnType::Uuid => match self {
                Self::Uuid(_) => Some(self.clone()),
                Self::Text(text) => Uuid::parse_str(text).ok().map(Self::Uuid),
                Self::Integer(_) => None,
            },
            _ => Some(self.clone()),
        }
    }
}

impl fmt::Display for KeyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(integer) => write!(f, "{integer}"),
            Self::Uuid(uuid) => write!(f, "{uuid}"),
            Self::Text(text) => write!(f, "{text}"),
        }
    }
}

impl From<i32> for KeyValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<i64> for KeyValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<Uuid> for KeyValue {
    fn from(value: Uuid) -> Self {
        Self::Uuid(value)
    }
}

impl From<&str> for KeyValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for KeyValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<KeyValue> for sea_orm::Value {
    fn from(key: KeyValue) -> Self {
        match key {
            KeyValue::Integer(integer) => integer.into(),
            KeyValue::Uuid(uuid) => uuid.into(),
            KeyValue::Text(text) => text.into(),
        }
    }
}

/// Either a model that is already loaded, or the key to load it by.
#[derive(Debug, Clone)]
pub enum ModelRef<M> {
    Instance(M),
    Key(KeyValue),
}

impl<M> ModelRef<M> {
    pub fn key(key: impl Into<KeyValue>) -> Self {
        Self::Key(key.into())
    }
}
