//! DXF section readers

use indexmap::IndexMap;
use tracing::{debug, trace, warn};

use super::entity_builder::find_builder;
use super::tagged_reader::{TaggedPair, TaggedReader};
use crate::document::HeaderValue;
use crate::entities::EntityType;
use crate::error::{DxfError, Result, StructuralError};
use crate::geometry::GeoPoint;
use crate::io::dxf::group_code::GroupCodeValueType;
use crate::notification::{NotificationCollection, NotificationType};
use crate::spec::SpecRegistry;
use crate::types::Handle;

/// Reads the body of one section, up to and including its end marker.
pub struct SectionReader<'a> {
    reader: &'a mut dyn TaggedReader,
    registry: &'a SpecRegistry,
    failsafe: bool,
}

impl<'a> SectionReader<'a> {
    /// Create a section reader over a shared pair source
    pub fn new(reader: &'a mut dyn TaggedReader, registry: &'a SpecRegistry, failsafe: bool) -> Self {
        Self {
            reader,
            registry,
            failsafe,
        }
    }

    /// Next pair of section `name`, failing if the stream ends first.
    fn next_in_section(&mut self, name: &str) -> Result<TaggedPair> {
        if self.reader.at_end()? {
            return Err(StructuralError::MissingSectionEnd(name.to_string()).into());
        }
        self.reader.next_pair()
    }

    fn is_section_end(&self, pair: &TaggedPair) -> bool {
        let constants = self.registry.constants();
        pair.is(constants.section_start_code, constants.section_end)
    }

    fn group_code(&self, pair: &TaggedPair) -> Result<i16> {
        pair.group_code().ok_or_else(|| {
            StructuralError::InvalidGroupCode {
                code: pair.code.clone(),
                line: self.reader.position(),
            }
            .into()
        })
    }

    /// Read the HEADER section into an ordered variable table
    pub fn read_header(&mut self) -> Result<IndexMap<String, HeaderValue>> {
        let constants = self.registry.constants().clone();
        let mut header = IndexMap::new();

        loop {
            let pair = self.next_in_section(constants.header_section)?;
            if self.is_section_end(&pair) {
                break;
            }
            if pair.group_code() != Some(constants.header_variable_code) {
                trace!(code = %pair.code, "discarding header pair outside a variable");
                continue;
            }

            let name = pair.value.trim().to_string();
            let values = self.read_variable_values(constants.header_section)?;
            match header_value(&values) {
                Some(value) => {
                    header.insert(name, value);
                }
                None => trace!(variable = %name, "header variable without a value"),
            }
        }

        debug!(variables = header.len(), "read HEADER section");
        Ok(header)
    }

    /// Pairs of one header variable: everything up to the next variable or
    /// the section end.
    fn read_variable_values(&mut self, section: &str) -> Result<Vec<(i16, String)>> {
        let constants = self.registry.constants();
        let (variable_code, end_code) = (constants.header_variable_code, constants.section_start_code);
        let mut values = Vec::new();
        loop {
            let pair = self.next_in_section(section)?;
            let code = self.group_code(&pair)?;
            if code == variable_code || code == end_code {
                self.reader.push_back(pair);
                return Ok(values);
            }
            values.push((code, pair.value));
        }
    }

    /// Read the ENTITIES section.
    ///
    /// Types without a builder are skipped and recorded as notifications.
    /// In failsafe mode an entity whose values cannot be converted is
    /// dropped instead of failing the read.
    pub fn read_entities(&mut self, notifications: &mut NotificationCollection) -> Result<Vec<EntityType>> {
        let constants = self.registry.constants().clone();
        let section = constants.entities_section;
        let mut entities = Vec::new();

        loop {
            let pair = self.next_in_section(section)?;
            if self.is_section_end(&pair) {
                break;
            }
            if pair.group_code() != Some(constants.end_of_entity_code) {
                trace!(code = %pair.code, "discarding pair outside an entity");
                continue;
            }

            let type_name = pair.value.trim().to_string();
            let line = self.reader.position();
            let Some(builder) = find_builder(&type_name) else {
                debug!(entity = %type_name, line, "skipping unsupported entity type");
                notifications.notify_at(
                    NotificationType::NotImplemented,
                    line,
                    format!("entity type {} skipped", type_name),
                );
                self.skip_entity(section)?;
                continue;
            };

            match (builder.build)(&mut *self.reader, self.registry) {
                Ok(entity) => {
                    if let EntityType::Hatch(hatch) = &entity {
                        if hatch.skipped_path_count() > 0 {
                            notifications.notify_at(
                                NotificationType::NotSupported,
                                line,
                                format!(
                                    "HATCH {}: {} boundary path(s) with ellipse or spline edges skipped",
                                    hatch.common.handle,
                                    hatch.skipped_path_count()
                                ),
                            );
                        }
                    }
                    entities.push(entity);
                }
                Err(err) if self.failsafe && is_entity_local(&err) => {
                    warn!(entity = %type_name, line, error = %err, "dropping entity");
                    notifications.notify_at(
                        NotificationType::Error,
                        line,
                        format!("{} entity dropped: {}", type_name, err),
                    );
                    self.skip_entity(section)?;
                }
                Err(err) => return Err(err),
            }
        }

        debug!(entities = entities.len(), "read ENTITIES section");
        Ok(entities)
    }

    /// Consume the rest of the current entity, stopping before the next
    /// code-0 pair.
    fn skip_entity(&mut self, section: &str) -> Result<()> {
        let end_code = self.registry.constants().end_of_entity_code;
        loop {
            let pair = self.next_in_section(section)?;
            if pair.group_code() == Some(end_code) {
                self.reader.push_back(pair);
                return Ok(());
            }
        }
    }

    /// Consume an unread section through its end marker
    pub fn skip_section(&mut self, name: &str) -> Result<()> {
        loop {
            let pair = self.next_in_section(name)?;
            if self.is_section_end(&pair) {
                return Ok(());
            }
        }
    }
}

/// Errors confined to one entity, which failsafe mode can step over
fn is_entity_local(err: &DxfError) -> bool {
    matches!(
        err,
        DxfError::SetField(_)
            | DxfError::Structural(StructuralError::MismatchedLengths { .. } | StructuralError::TooFewVertices(_))
    )
}

/// Type the pairs of one header variable.
///
/// Coordinate groups form a point. Anything else takes the first value,
/// typed by its group code, and falls back to text when it does not parse.
fn header_value(values: &[(i16, String)]) -> Option<HeaderValue> {
    if values
        .iter()
        .any(|(code, _)| GroupCodeValueType::coordinate_axis(*code).is_some())
    {
        let mut axes = [0.0; 3];
        for (code, raw) in values {
            if let (Some(axis), Ok(v)) = (GroupCodeValueType::coordinate_axis(*code), raw.trim().parse::<f64>()) {
                axes[axis] = v;
            }
        }
        return Some(HeaderValue::Point(GeoPoint::new(axes[0], axes[1], axes[2])));
    }

    let (code, raw) = values.first()?;
    let trimmed = raw.trim();
    let typed = match GroupCodeValueType::from_code(*code) {
        GroupCodeValueType::Double => trimmed.parse().ok().map(HeaderValue::Double),
        t if t.is_integer() => trimmed.parse().ok().map(HeaderValue::Integer),
        GroupCodeValueType::Bool => trimmed.parse::<i64>().ok().map(|v| HeaderValue::Bool(v != 0)),
        GroupCodeValueType::Handle => Handle::from_hex(trimmed).map(HeaderValue::Handle),
        _ => None,
    };
    Some(typed.unwrap_or_else(|| HeaderValue::Text(raw.clone())))
}
