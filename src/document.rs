//! Document produced by one read

use std::fmt;

use indexmap::IndexMap;

use crate::entities::{EntityType, EntityVariant};
use crate::geometry::GeoPoint;
use crate::notification::NotificationCollection;
use crate::types::Handle;

/// Value of one header variable, typed by the group code it was written
/// with.
#[derive(Debug, Clone, PartialEq)]
pub enum HeaderValue {
    Text(String),
    Integer(i64),
    Double(f64),
    Bool(bool),
    Handle(Handle),
    /// Variables written as coordinate groups (10/20/30)
    Point(GeoPoint),
}

impl HeaderValue {
    /// Text value, `None` for other kinds
    pub fn as_text(&self) -> Option<&str> {
        match self {
            HeaderValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Integer value; booleans read as 0 or 1
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            HeaderValue::Integer(v) => Some(*v),
            HeaderValue::Bool(b) => Some(i64::from(*b)),
            _ => None,
        }
    }

    /// Floating point value, widening integers
    pub fn as_double(&self) -> Option<f64> {
        match self {
            HeaderValue::Double(v) => Some(*v),
            HeaderValue::Integer(v) => Some(*v as f64),
            _ => None,
        }
    }

    /// Point value from a coordinate group
    pub fn as_point(&self) -> Option<GeoPoint> {
        match self {
            HeaderValue::Point(p) => Some(*p),
            _ => None,
        }
    }
}

impl fmt::Display for HeaderValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderValue::Text(s) => write!(f, "{}", s),
            HeaderValue::Integer(v) => write!(f, "{}", v),
            HeaderValue::Double(v) => write!(f, "{}", v),
            HeaderValue::Bool(b) => write!(f, "{}", b),
            HeaderValue::Handle(h) => write!(f, "{}", h),
            HeaderValue::Point(p) => write!(f, "{}", p),
        }
    }
}

/// Header table and entities of a drawing, in file order.
#[derive(Debug, Clone, Default)]
pub struct SectionsContainer {
    /// Header variables keyed by name including the leading `$`
    pub header: IndexMap<String, HeaderValue>,
    /// Entities of the ENTITIES section
    pub entities: Vec<EntityType>,
    /// Notifications collected during the read
    pub notifications: NotificationCollection,
}

impl SectionsContainer {
    /// Create an empty container
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of a header variable such as `$INSBASE`
    pub fn header_value(&self, name: &str) -> Option<&HeaderValue> {
        self.header.get(name)
    }

    /// Format version from `$ACADVER`, e.g. `AC1015`
    pub fn version(&self) -> Option<&str> {
        self.header_value("$ACADVER").and_then(HeaderValue::as_text)
    }

    /// All entities in file order
    pub fn entities(&self) -> &[EntityType] {
        &self.entities
    }

    /// Number of entities read
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Entities of one concrete type, in file order
    pub fn entities_of<'a, T: EntityVariant + 'a>(&'a self) -> impl Iterator<Item = &'a T> + 'a {
        self.entities.iter().filter_map(T::from_entity_type)
    }

    /// Entity carrying `handle`
    pub fn entity_by_handle(&self, handle: Handle) -> Option<&EntityType> {
        self.entities
            .iter()
            .find(|entity| entity.as_entity().handle() == handle)
    }

    /// Notifications raised while reading
    pub fn notifications(&self) -> &NotificationCollection {
        &self.notifications
    }
}
