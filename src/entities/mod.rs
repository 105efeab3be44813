//! Drawing entities
//!
//! Every entity is built in two phases: a [`WireStructure`] is filled while
//! its tagged pairs are consumed, then converted once into the public type
//! held by [`EntityType`].

use crate::types::{Color, Handle, LineWeight};

pub mod arc;
pub mod circle;
pub mod field;
pub mod hatch;
pub mod line;
pub mod lwpolyline;

pub use arc::Arc;
pub use circle::Circle;
pub use field::{CommonStructure, FieldRef, WireStructure};
pub use hatch::{BoundaryPath, BoundaryPathFlags, Hatch, HatchPatternType, HatchStyleType};
pub use line::Line;
pub use lwpolyline::{LwPolyline, LwPolylineFlags};

/// Base trait for all entities
pub trait Entity {
    /// Attributes shared by every entity
    fn common(&self) -> &EntityCommon;

    /// Entity type name as written in the record stream
    fn entity_type(&self) -> &'static str;

    fn handle(&self) -> Handle {
        self.common().handle
    }

    fn layer(&self) -> &str {
        &self.common().layer
    }

    fn line_type(&self) -> &str {
        &self.common().line_type
    }

    fn color(&self) -> Color {
        self.common().color
    }

    fn line_weight(&self) -> LineWeight {
        self.common().line_weight
    }

    fn is_invisible(&self) -> bool {
        self.common().invisible
    }
}

/// Common entity data shared by all entities
#[derive(Debug, Clone, PartialEq)]
pub struct EntityCommon {
    /// Unique handle
    pub handle: Handle,
    /// Layer name
    pub layer: String,
    /// Line type name
    pub line_type: String,
    /// Color
    pub color: Color,
    /// Line weight
    pub line_weight: LineWeight,
    /// Visibility flag
    pub invisible: bool,
}

impl EntityCommon {
    /// Create new common entity data with defaults
    pub fn new() -> Self {
        CommonStructure::default().into_common()
    }

    /// Create with a specific layer
    pub fn with_layer(layer: impl Into<String>) -> Self {
        EntityCommon {
            layer: layer.into(),
            ..Self::new()
        }
    }
}

impl Default for EntityCommon {
    fn default() -> Self {
        Self::new()
    }
}

/// Enumeration of all entity types for type-safe storage
#[derive(Debug, Clone, PartialEq)]
pub enum EntityType {
    Line(Line),
    Circle(Circle),
    Arc(Arc),
    /// Lightweight polyline entity
    LwPolyline(LwPolyline),
    Hatch(Hatch),
}

impl EntityType {
    /// Get a reference to the entity trait object
    pub fn as_entity(&self) -> &dyn Entity {
        match self {
            EntityType::Line(e) => e,
            EntityType::Circle(e) => e,
            EntityType::Arc(e) => e,
            EntityType::LwPolyline(e) => e,
            EntityType::Hatch(e) => e,
        }
    }
}

/// A concrete entity type that can be picked out of an [`EntityType`].
pub trait EntityVariant: Entity + Sized {
    fn from_entity_type(entity: &EntityType) -> Option<&Self>;
}

macro_rules! entity_variant {
    ($($variant:ident),+) => {
        $(
            impl EntityVariant for $variant {
                fn from_entity_type(entity: &EntityType) -> Option<&Self> {
                    match entity {
                        EntityType::$variant(e) => Some(e),
                        _ => None,
                    }
                }
            }

            impl From<$variant> for EntityType {
                fn from(entity: $variant) -> Self {
                    EntityType::$variant(entity)
                }
            }
        )+
    };
}

entity_variant!(Line, Circle, Arc, LwPolyline, Hatch);
