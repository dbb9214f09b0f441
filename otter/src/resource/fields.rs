use serde::{Serialize, Serializer, ser::SerializeMap};

/// Input type the dashboard renders for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    Text,
    Email,
    Password,
    Integer,
    Decimal,
    Boolean,
    Date,
    DateTime,
    Json,
}

/// Ordered mapping of field name to [`FieldType`].
///
/// Serializes as a JSON object whose keys keep declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fields(Vec<(&'static str, FieldType)>);

impl Fields {
    #[must_use]
    pub fn new(fields: Vec<(&'static str, FieldType)>) -> Self {
        Self(fields)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(&'static str, FieldType)> {
        self.0.iter()
    }

    /// Field names in declaration order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().map(|(name, _)| *name)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<FieldType> {
        self.0
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, field_type)| *field_type)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(&'static str, FieldType)> for Fields {
    fn from_iter<I: IntoIterator<Item = (&'static str, FieldType)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Serialize for Fields {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, field_type) in &self.0 {
            map.serialize_entry(name, field_type)?;
        }
        map.end()
    }
}

/// Declaration of one relation on a resource.
///
/// Bare form names the target resource and lets the resolver derive the
/// foreign key from the target model. The pair form pins the foreign key.
///
/// ```
/// use otter::RelationSpec;
///
/// let author: RelationSpec = "User".into();
/// let tags: RelationSpec = ("Tag", "tag_id").into();
/// assert_eq!(author.foreign_key(), None);
/// assert_eq!(tags.foreign_key(), Some("tag_id"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationSpec {
    Resource(&'static str),
    WithForeignKey {
        resource: &'static str,
        foreign_key: &'static str,
    },
}

impl RelationSpec {
    /// Base name (or namespaced name) of the target resource
    #[must_use]
    pub fn resource(&self) -> &'static str {
        match self {
            Self::Resource(resource) | Self::WithForeignKey { resource, .. } => *resource,
        }
    }

    /// Explicit foreign key, if one was declared
    #[must_use]
    pub fn foreign_key(&self) -> Option<&'static str> {
        match self {
            Self::Resource(_) => None,
            Self::WithForeignKey { foreign_key, .. } => Some(*foreign_key),
        }
    }
}

impl From<&'static str> for RelationSpec {
    fn from(resource: &'static str) -> Self {
        Self::Resource(resource)
    }
}

impl From<(&'static str, &'static str)> for RelationSpec {
    fn from((resource, foreign_key): (&'static str, &'static str)) -> Self {
        Self::WithForeignKey {
            resource,
            foreign_key,
        }
    }
}
