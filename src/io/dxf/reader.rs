//! DXF file reader

pub mod entity_builder;
mod section_reader;
pub mod tagged_reader;
pub mod text_reader;

pub use entity_builder::{parse_entity, EntityBuilder, ENTITY_BUILDERS};
pub use tagged_reader::{PairListReader, TaggedPair, TaggedReader};
pub use text_reader::DxfTextReader;

use section_reader::SectionReader;

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use encoding_rs::Encoding;
use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::document::{HeaderValue, SectionsContainer};
use crate::error::{DxfError, Result, StructuralError};
use crate::io::dxf::code_page::encoding_from_code_page;
use crate::notification::{NotificationCollection, NotificationType};
use crate::spec::SpecRegistry;

/// First version that always writes UTF-8
const FIRST_UTF8_VERSION: &str = "AC1021";

/// Configuration for the DXF reader.
#[derive(Debug, Clone, Default)]
pub struct DxfReaderConfiguration {
    /// When `true`, entities whose values cannot be converted, or whose
    /// geometry is invalid, are dropped and reported as notifications
    /// instead of aborting the read. Malformed record streams still fail.
    ///
    /// Default: `false` (strict mode, errors propagate).
    pub failsafe: bool,
    /// Encoding for text that is not UTF-8. Overrides `$DWGCODEPAGE`.
    ///
    /// Default: `None` (Latin-1 until the header names a code page).
    pub encoding: Option<&'static Encoding>,
}

/// DXF file reader
pub struct DxfReader<'a> {
    reader: Box<dyn TaggedReader>,
    registry: &'a SpecRegistry,
    config: DxfReaderConfiguration,
}

impl DxfReader<'static> {
    /// Create a new DXF reader from any reader
    pub fn from_reader<R: Read + 'static>(reader: R) -> Result<Self> {
        Self::from_tagged_reader(Box::new(DxfTextReader::new(BufReader::new(reader))))
    }

    /// Create a new DXF reader from a file path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_reader(File::open(path)?)
    }

    /// Read from any source of tagged pairs, using the standard specs
    pub fn from_tagged_reader(reader: Box<dyn TaggedReader>) -> Result<Self> {
        Ok(Self {
            reader,
            registry: SpecRegistry::standard()?,
            config: DxfReaderConfiguration::default(),
        })
    }
}

impl<'a> DxfReader<'a> {
    /// Set the reader configuration.
    pub fn with_configuration(mut self, config: DxfReaderConfiguration) -> Self {
        if let Some(encoding) = config.encoding {
            self.reader.set_encoding(encoding);
        }
        self.config = config;
        self
    }

    /// Read with a different set of specs
    pub fn with_registry<'b>(self, registry: &'b SpecRegistry) -> DxfReader<'b> {
        DxfReader {
            reader: self.reader,
            registry,
            config: self.config,
        }
    }

    /// Read the stream and return its HEADER and ENTITIES sections
    pub fn read(mut self) -> Result<SectionsContainer> {
        entity_builder::validate_registry(self.registry)?;
        let constants = self.registry.constants().clone();
        let failsafe = self.config.failsafe;
        let mut container = SectionsContainer::new();

        while !self.reader.at_end()? {
            let Some(first) = self.next_top_level_pair()? else {
                break;
            };
            if first.is(constants.section_start_code, constants.end_of_file) {
                break;
            }
            if self.reader.at_end()? {
                break;
            }
            let Some(second) = self.next_top_level_pair()? else {
                break;
            };
            if !first.is(constants.section_start_code, constants.section_start) {
                // Not a section start: rescan from the second pair
                self.reader.push_back(second);
                continue;
            }

            let name = second.value.trim().to_string();
            debug!(section = %name, "reading section");
            let mut sections = SectionReader::new(self.reader.as_mut(), self.registry, failsafe);
            if name == constants.header_section {
                container.header = sections.read_header()?;
                self.apply_code_page(&container.header, &mut container.notifications);
            } else if name == constants.entities_section {
                let entities = sections.read_entities(&mut container.notifications)?;
                container.entities.extend(entities);
            } else {
                container
                    .notifications
                    .notify(NotificationType::NotImplemented, format!("{} section skipped", name));
                sections.skip_section(&name)?;
            }
        }

        Ok(container)
    }

    /// Next pair between sections. A record cut off by the end of the
    /// stream ends the read here instead of failing it.
    fn next_top_level_pair(&mut self) -> Result<Option<TaggedPair>> {
        match self.reader.next_pair() {
            Ok(pair) => Ok(Some(pair)),
            Err(DxfError::Structural(StructuralError::TruncatedPair { code, line })) => {
                debug!(code = %code, line, "stream ends with a dangling record");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    /// Switch the text encoding to the header's code page for files older
    /// than AC1021, unless an encoding was configured.
    fn apply_code_page(&mut self, header: &IndexMap<String, HeaderValue>, notifications: &mut NotificationCollection) {
        if self.config.encoding.is_some() {
            return;
        }
        let version = header.get("$ACADVER").and_then(HeaderValue::as_text).map(str::trim);
        if version.is_some_and(|v| v >= FIRST_UTF8_VERSION) {
            return;
        }
        let Some(code_page) = header.get("$DWGCODEPAGE").and_then(HeaderValue::as_text) else {
            return;
        };
        let code_page = code_page.trim();
        match encoding_from_code_page(code_page) {
            Some(encoding) => {
                debug!(encoding = encoding.name(), "using header code page");
                self.reader.set_encoding(encoding);
            }
            None if matches!(code_page.to_ascii_lowercase().as_str(), "utf8" | "utf-8" | "ansi_65001") => {}
            None => {
                warn!(code_page, "unknown code page, keeping default decoding");
                notifications.notify(NotificationType::Warning, format!("unknown code page {}", code_page));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Circle, Entity, Line};
    use crate::spec::{FormatConstants, SpecSource};
    use std::io::Cursor;

    fn read_str(text: &str) -> Result<SectionsContainer> {
        DxfReader::from_reader(Cursor::new(text.as_bytes().to_vec()))?.read()
    }

    #[test]
    fn test_empty_entities_section() {
        let doc = read_str("0\nSECTION\n2\nENTITIES\n0\nENDSEC\n0\nEOF\n").unwrap();
        assert!(doc.entities.is_empty());
        assert!(doc.header.is_empty());
    }

    #[test]
    fn test_stream_without_eof_marker() {
        let doc = read_str("0\nSECTION\n2\nENTITIES\n0\nCIRCLE\n40\n1.5\n0\nENDSEC\n").unwrap();
        assert_eq!(doc.entities_of::<Circle>().next().unwrap().radius, 1.5);
    }

    #[test]
    fn test_odd_trailing_pair_stops_cleanly() {
        let doc = read_str("999\ncomment\n").unwrap();
        assert!(doc.entities.is_empty());
    }

    #[test]
    fn test_pairs_outside_sections_are_skipped() {
        let doc = read_str("999\nwritten by hand\n0\nSECTION\n2\nENTITIES\n0\nLINE\n11\n2\n0\nENDSEC\n").unwrap();
        assert_eq!(doc.entity_count(), 1);
    }

    #[test]
    fn test_unknown_section_is_skipped() {
        let doc = read_str(
            "0\nSECTION\n2\nTABLES\n0\nTABLE\n2\nLAYER\n0\nENDTAB\n0\nENDSEC\n\
             0\nSECTION\n2\nENTITIES\n0\nLINE\n8\nWalls\n0\nENDSEC\n0\nEOF\n",
        )
        .unwrap();
        assert_eq!(doc.entities_of::<Line>().next().unwrap().layer(), "Walls");
        assert!(doc.notifications.has_type(NotificationType::NotImplemented));
    }

    #[test]
    fn test_missing_endsec() {
        let err = read_str("0\nSECTION\n2\nENTITIES\n0\nLINE\n10\n1\n").unwrap_err();
        assert!(matches!(err, DxfError::Structural(StructuralError::MissingSectionEnd(_))));
    }

    #[test]
    fn test_dangling_record_after_last_section() {
        let doc = read_str("0\nSECTION\n2\nENTITIES\n0\nCIRCLE\n40\n2\n0\nENDSEC\n0\n").unwrap();
        assert_eq!(doc.entity_count(), 1);

        let doc = read_str("0\nSECTION\n2\nENTITIES\n0\nENDSEC\n\n").unwrap();
        assert!(doc.entities.is_empty());

        // Dangling second record of a would-be section start
        let doc = read_str("0\nSECTION\n2\nENTITIES\n0\nENDSEC\n0\nSECTION\n2\n").unwrap();
        assert!(doc.entities.is_empty());
    }

    #[test]
    fn test_truncated_pair() {
        let err = read_str("0\nSECTION\n2\nENTITIES\n0\nLINE\n10\n").unwrap_err();
        assert!(matches!(err, DxfError::Structural(StructuralError::TruncatedPair { .. })));
    }

    #[test]
    fn test_header_code_page_selects_encoding() {
        let mut data = b"0\nSECTION\n2\nHEADER\n9\n$ACADVER\n1\nAC1015\n9\n$DWGCODEPAGE\n3\nANSI_1251\n0\nENDSEC\n\
0\nSECTION\n2\nENTITIES\n0\nLINE\n8\n"
            .to_vec();
        data.extend_from_slice(b"\xd1\xf2\xe5\xed\xfb\n0\nENDSEC\n0\nEOF\n");
        let doc = DxfReader::from_reader(Cursor::new(data)).unwrap().read().unwrap();
        assert_eq!(doc.version(), Some("AC1015"));
        assert_eq!(doc.entities[0].as_entity().layer(), "Стены");
    }

    #[test]
    fn test_unknown_code_page_is_notified() {
        let doc = read_str("0\nSECTION\n2\nHEADER\n9\n$DWGCODEPAGE\n3\nANSI_9999\n0\nENDSEC\n").unwrap();
        let warnings: Vec<_> = doc.notifications.of_type(NotificationType::Warning).collect();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message.contains("ANSI_9999"));

        let doc = read_str("0\nSECTION\n2\nHEADER\n9\n$DWGCODEPAGE\n3\nUTF8\n0\nENDSEC\n").unwrap();
        assert!(doc.notifications.is_empty());
    }

    #[test]
    fn test_configured_encoding_wins() {
        let data = b"0\nSECTION\n2\nHEADER\n9\n$DWGCODEPAGE\n3\nANSI_1251\n0\nENDSEC\n\
0\nSECTION\n2\nENTITIES\n0\nLINE\n8\nCaf\xe9\n0\nENDSEC\n"
            .to_vec();
        let config = DxfReaderConfiguration {
            encoding: Some(encoding_rs::WINDOWS_1252),
            ..Default::default()
        };
        let doc = DxfReader::from_reader(Cursor::new(data))
            .unwrap()
            .with_configuration(config)
            .read()
            .unwrap();
        assert_eq!(doc.entities[0].as_entity().layer(), "Café");
    }

    #[test]
    fn test_registry_missing_builder_spec() {
        let registry = SpecRegistry::load(
            FormatConstants::DXF,
            &[SpecSource {
                name: crate::spec::COMMON_SPEC,
                fields: &[("Layer", 8)],
            }],
        )
        .unwrap();
        let err = DxfReader::from_reader(Cursor::new(Vec::new()))
            .unwrap()
            .with_registry(&registry)
            .read()
            .unwrap_err();
        assert!(matches!(err, DxfError::Configuration(_)));
    }
}
