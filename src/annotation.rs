use std::collections::BTreeMap;

use crate::analysis::GestureAnnotation;
use crate::catalog;

/// One row of the annotation file, keyed by column name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    id_user: String,
    fields: BTreeMap<String, String>,
}

impl UserRecord {
    pub fn new(id_user: impl Into<String>) -> Self {
        Self {
            id_user: id_user.into(),
            fields: BTreeMap::new(),
        }
    }

    pub fn id_user(&self) -> &str {
        &self.id_user
    }

    /// Adds the four columns of one gesture. A later gesture with the same
    /// prefix overwrites the earlier one.
    pub fn merge(&mut self, gesture: &GestureAnnotation) {
        let prefix = &gesture.gesture;
        self.fields
            .insert(format!("{prefix}_type"), gesture.kind.as_str().to_string());
        self.fields
            .insert(format!("{prefix}_num"), gesture.num.to_string());
        self.fields
            .insert(catalog::label_column(prefix), gesture.label.clone());
        self.fields
            .insert(format!("{prefix}_description"), gesture.description.clone());
    }

    /// Value of `column`, or `None` when the gesture was absent.
    pub fn get(&self, column: &str) -> Option<&str> {
        if column == catalog::ID_COLUMN {
            return Some(&self.id_user);
        }
        self.fields.get(column).map(String::as_str)
    }

    /// Gesture columns set so far, excluding `id_user`.
    pub fn columns(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
