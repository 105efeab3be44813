//! Group-code specifications
//!
//! An [`EntitySpec`] maps the field names of one entity type to the group
//! codes that carry them. Specs are built once from the declarative tables in
//! [`tables`] and are read-only afterwards, so one [`SpecRegistry`] can be
//! shared by any number of concurrent reads.

pub mod tables;

use std::collections::HashMap;

use once_cell::sync::OnceCell;

use crate::error::ConfigurationError;

pub use tables::COMMON_SPEC;

/// Declarative description of one spec
#[derive(Debug, Clone, Copy)]
pub struct SpecSource {
    /// Entity type name, or [`COMMON_SPEC`]
    pub name: &'static str,
    /// `(field, group code)` pairs
    pub fields: &'static [(&'static str, i16)],
}

/// Markers that frame sections and entities in the record stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatConstants {
    /// Code of section markers and end-of-file
    pub section_start_code: i16,
    /// Value opening a section
    pub section_start: &'static str,
    /// Value closing a section
    pub section_end: &'static str,
    /// Code that starts the next entity
    pub end_of_entity_code: i16,
    /// Name of the header section
    pub header_section: &'static str,
    /// Name of the entities section
    pub entities_section: &'static str,
    /// Value ending the file
    pub end_of_file: &'static str,
    /// Code that names a header variable
    pub header_variable_code: i16,
}

impl FormatConstants {
    /// Markers of the ASCII DXF format
    pub const DXF: FormatConstants = FormatConstants {
        section_start_code: 0,
        section_start: "SECTION",
        section_end: "ENDSEC",
        end_of_entity_code: 0,
        header_section: "HEADER",
        entities_section: "ENTITIES",
        end_of_file: "EOF",
        header_variable_code: 9,
    };
}

impl Default for FormatConstants {
    fn default() -> Self {
        Self::DXF
    }
}

/// Field name ↔ group code mapping for one entity type.
#[derive(Debug, Clone)]
pub struct EntitySpec {
    name: &'static str,
    fields: &'static [(&'static str, i16)],
    by_code: HashMap<i16, &'static str>,
}

impl EntitySpec {
    /// Build from a table, rejecting two fields that share a code
    pub fn from_source(source: &SpecSource) -> Result<Self, ConfigurationError> {
        let mut by_code = HashMap::with_capacity(source.fields.len());
        for &(field, code) in source.fields {
            if let Some(first) = by_code.insert(code, field) {
                return Err(ConfigurationError::DuplicateCode {
                    spec: source.name.to_string(),
                    code,
                    first: first.to_string(),
                    second: field.to_string(),
                });
            }
        }
        Ok(EntitySpec {
            name: source.name,
            fields: source.fields,
            by_code,
        })
    }

    /// Get the spec name
    pub fn name(&self) -> &str {
        self.name
    }

    /// Field carried by `code`, if this spec claims it
    pub fn field_for(&self, code: i16) -> Option<&'static str> {
        self.by_code.get(&code).copied()
    }

    /// Group code of `field`
    pub fn code_of(&self, field: &str) -> Option<i16> {
        self.fields
            .iter()
            .find(|(name, _)| *name == field)
            .map(|&(_, code)| code)
    }

    /// Field names in table order
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|&(name, _)| name)
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the spec names no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Read-only collection of specs keyed by entity type name.
#[derive(Debug, Clone)]
pub struct SpecRegistry {
    constants: FormatConstants,
    specs: HashMap<&'static str, EntitySpec>,
}

static STANDARD: OnceCell<SpecRegistry> = OnceCell::new();

impl SpecRegistry {
    /// Build a registry from declarative tables.
    ///
    /// Fails on a spec name given twice or on two fields of one spec that
    /// share a group code.
    pub fn load(constants: FormatConstants, sources: &[SpecSource]) -> Result<Self, ConfigurationError> {
        let mut specs = HashMap::with_capacity(sources.len());
        for source in sources {
            if specs.contains_key(source.name) {
                return Err(ConfigurationError::DuplicateSpec(source.name.to_string()));
            }
            specs.insert(source.name, EntitySpec::from_source(source)?);
        }
        Ok(SpecRegistry { constants, specs })
    }

    /// Registry for every supported entity type, built on first use.
    pub fn standard() -> Result<&'static SpecRegistry, ConfigurationError> {
        STANDARD.get_or_try_init(|| SpecRegistry::load(FormatConstants::DXF, tables::STANDARD_SPECS))
    }

    /// Markers used by every reader sharing this registry
    pub fn constants(&self) -> &FormatConstants {
        &self.constants
    }

    /// Spec registered under `name`
    pub fn get_spec(&self, name: &str) -> Result<&EntitySpec, ConfigurationError> {
        self.specs
            .get(name)
            .ok_or_else(|| ConfigurationError::UnknownSpec(name.to_string()))
    }

    /// The spec shared by every entity type
    pub fn common(&self) -> Result<&EntitySpec, ConfigurationError> {
        self.get_spec(COMMON_SPEC)
    }

    /// Whether a spec is registered under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.specs.contains_key(name)
    }

    /// Check that spec `name` only names fields in `accepted`.
    pub fn validate_fields(&self, name: &str, accepted: &[&str]) -> Result<(), ConfigurationError> {
        let spec = self.get_spec(name)?;
        match spec.field_names().find(|field| !accepted.contains(field)) {
            Some(field) => Err(ConfigurationError::UnknownField {
                spec: name.to_string(),
                field: field.to_string(),
            }),
            None => Ok(()),
        }
    }
}
