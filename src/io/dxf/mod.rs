//! ASCII DXF reading

mod code_page;
mod group_code;
mod reader;

pub use code_page::encoding_from_code_page;
pub use group_code::GroupCodeValueType;
pub use reader::{
    parse_entity, DxfReader, DxfReaderConfiguration, DxfTextReader, EntityBuilder, PairListReader,
    TaggedPair, TaggedReader, ENTITY_BUILDERS,
};
