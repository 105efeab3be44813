//! Spec-driven entity parse loop

use tracing::trace;

use super::tagged_reader::TaggedReader;
use crate::entities::arc::ArcStructure;
use crate::entities::circle::CircleStructure;
use crate::entities::hatch::HatchStructure;
use crate::entities::line::LineStructure;
use crate::entities::lwpolyline::LwPolylineStructure;
use crate::entities::{CommonStructure, EntityType, WireStructure};
use crate::error::{ConfigurationError, Result, StructuralError};
use crate::spec::{EntitySpec, FormatConstants, SpecRegistry, COMMON_SPEC};

/// Fill `structure` from the pairs of one entity.
///
/// Consumes pairs up to, not including, the next end-of-entity pair. Each
/// code is offered to the common spec first and to the type spec second;
/// codes neither claims are dropped.
pub fn parse_entity<S: WireStructure>(
    mut structure: S,
    reader: &mut dyn TaggedReader,
    type_spec: &EntitySpec,
    common_spec: &EntitySpec,
    constants: &FormatConstants,
) -> Result<S> {
    while !reader.at_end()? {
        let pair = reader.next_pair()?;
        let code = pair.group_code().ok_or_else(|| StructuralError::InvalidGroupCode {
            code: pair.code.clone(),
            line: reader.position(),
        })?;

        if code == constants.end_of_entity_code {
            reader.push_back(pair);
            break;
        }

        if let Some(field) = common_spec.field_for(code) {
            structure.common_mut().set_field(field, &pair.value)?;
        } else if let Some(field) = type_spec.field_for(code) {
            structure.set_field(field, &pair.value)?;
        } else {
            trace!(entity = type_spec.name(), code, value = %pair.value, "discarding group code");
        }
    }
    Ok(structure)
}

/// Build one entity of wire type `S` from the reader
fn build<S: WireStructure>(reader: &mut dyn TaggedReader, registry: &SpecRegistry) -> Result<EntityType> {
    let type_spec = registry.get_spec(S::SPEC_NAME)?;
    let common_spec = registry.common()?;
    let structure = parse_entity(S::default(), reader, type_spec, common_spec, registry.constants())?;
    Ok(structure.into_entity()?)
}

/// Builds one entity of a known type from the pair source
pub type BuildFn = fn(&mut dyn TaggedReader, &SpecRegistry) -> Result<EntityType>;

/// Dispatch entry for one entity type name
#[derive(Clone, Copy)]
pub struct EntityBuilder {
    /// Entity type name, which is also the spec key
    pub name: &'static str,
    /// Fields the wire structure accepts
    pub field_names: &'static [&'static str],
    pub build: BuildFn,
}

macro_rules! entity_builders {
    ($($structure:ty),+ $(,)?) => {
        &[$(
            EntityBuilder {
                name: <$structure as WireStructure>::SPEC_NAME,
                field_names: <$structure as WireStructure>::FIELD_NAMES,
                build: build::<$structure>,
            }
        ),+]
    };
}

/// Every entity type the reader builds
pub const ENTITY_BUILDERS: &[EntityBuilder] = entity_builders![
    LineStructure,
    CircleStructure,
    ArcStructure,
    LwPolylineStructure,
    HatchStructure,
];

/// Builder registered for entity type `name`
pub fn find_builder(name: &str) -> Option<&'static EntityBuilder> {
    ENTITY_BUILDERS.iter().find(|builder| builder.name == name)
}

/// Check that every spec the builders rely on exists and only names
/// fields its wire structure accepts.
pub fn validate_registry(registry: &SpecRegistry) -> std::result::Result<(), ConfigurationError> {
    registry.validate_fields(COMMON_SPEC, CommonStructure::FIELD_NAMES)?;
    for builder in ENTITY_BUILDERS {
        registry.validate_fields(builder.name, builder.field_names)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Entity, Line};
    use crate::error::{DxfError, SetFieldError};
    use crate::io::dxf::reader::tagged_reader::PairListReader;
    use crate::spec::SpecSource;
    use crate::types::Color;

    fn line_from(pairs: &[(&str, &str)]) -> Result<(Line, PairListReader)> {
        let registry = SpecRegistry::standard().unwrap();
        let mut reader = PairListReader::from_tuples(pairs.iter().copied());
        let entity = (find_builder("LINE").unwrap().build)(&mut reader, registry)?;
        match entity {
            EntityType::Line(line) => Ok((line, reader)),
            other => panic!("expected a line, got {:?}", other),
        }
    }

    #[test]
    fn test_standard_registry_is_valid() {
        validate_registry(SpecRegistry::standard().unwrap()).unwrap();
    }

    #[test]
    fn test_stops_at_end_of_entity() {
        let (line, mut reader) = line_from(&[
            ("8", "Walls"),
            ("62", "1"),
            ("10", "1.0"),
            ("20", "2.0"),
            ("11", "4.0"),
            ("21", "6.0"),
            ("0", "CIRCLE"),
        ])
        .unwrap();
        assert_eq!(line.layer(), "Walls");
        assert_eq!(line.color(), Color::RED);
        assert_eq!(line.length(), 5.0);

        let next = reader.next_pair().unwrap();
        assert!(next.is(0, "CIRCLE"));
    }

    #[test]
    fn test_unknown_code_is_skipped() {
        let (line, _) = line_from(&[("10", "1"), ("999", "comment"), ("100", "AcDbLine"), ("20", "2")]).unwrap();
        assert_eq!(line.start.x, 1.0);
        assert_eq!(line.start.y, 2.0);
    }

    #[test]
    fn test_conversion_error() {
        let err = line_from(&[("10", "one")]).unwrap_err();
        assert!(matches!(
            err,
            DxfError::SetField(SetFieldError::Conversion { ref field, .. }) if field == "StartX"
        ));
    }

    #[test]
    fn test_invalid_group_code() {
        let err = line_from(&[("10", "1"), ("x1", "2")]).unwrap_err();
        assert!(matches!(
            err,
            DxfError::Structural(StructuralError::InvalidGroupCode { ref code, line: 4 }) if code == "x1"
        ));
    }

    #[test]
    fn test_common_spec_claims_code_first() {
        // A type spec that also maps the layer code never sees it.
        let common = EntitySpec::from_source(&SpecSource {
            name: COMMON_SPEC,
            fields: &[("Layer", 8)],
        })
        .unwrap();
        let type_spec = EntitySpec::from_source(&SpecSource {
            name: "LINE",
            fields: &[("StartX", 8)],
        })
        .unwrap();
        let mut reader = PairListReader::from_tuples([("8", "Walls")]);
        let line = parse_entity(
            LineStructure::default(),
            &mut reader,
            &type_spec,
            &common,
            &FormatConstants::DXF,
        )
        .unwrap();
        let EntityType::Line(line) = line.into_entity().unwrap() else {
            panic!("expected a line");
        };
        assert_eq!(line.layer(), "Walls");
        assert_eq!(line.start.x, 0.0);
    }

    #[test]
    fn test_validate_rejects_foreign_field() {
        let registry = SpecRegistry::load(
            FormatConstants::DXF,
            &[
                crate::spec::tables::COMMON,
                SpecSource {
                    name: "LINE",
                    fields: &[("Radius", 40)],
                },
            ],
        )
        .unwrap();
        let err = validate_registry(&registry).unwrap_err();
        assert!(matches!(err, ConfigurationError::UnknownField { ref field, .. } if field == "Radius"));
    }
}
