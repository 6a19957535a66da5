//! Core data types

pub mod font_config;
pub mod gen_config;
pub mod range;

pub use font_config::{
    FieldDef, FieldKind, FieldSlot, FieldValue, FontConfig, Scalar, CHARS_KEY, FIELDS,
    TEXTURE_SIZE_KEY,
};
pub use gen_config::{GenConfig, OUTPUT_FILE_KEY};
pub use range::NumRange;
