//! The bitmap font generator configuration record
//!
//! Every scalar field is declared once in the `font_config!` table below. The
//! table drives the struct definition, the defaults, the serialization order and
//! the name-based lookup used by the text parser and the JSON overlay, so adding
//! a field is a one-line change.

use std::fmt;

use crate::domain::NumRange;
use crate::error::{BmfcError, Result};

/// Static type of a configuration field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Int,
    Float,
    Text,
}

/// Read-only view of a field value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Int(i64),
    Float(f64),
    Text(&'a str),
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Int(v) => write!(f, "{v}"),
            // Debug keeps the decimal point on integral values and round-trips.
            FieldValue::Float(v) => write!(f, "{v:?}"),
            FieldValue::Text(v) => f.write_str(v),
        }
    }
}

/// An owned value already coerced to a field's static type.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Int(i64),
    Float(f64),
    Text(String),
}

/// Mutable handle to a field, typed by its kind.
#[derive(Debug)]
pub enum FieldSlot<'a> {
    Int(&'a mut i64),
    Float(&'a mut f64),
    Text(&'a mut String),
}

/// One row of the field table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    /// Key as written in the config file.
    pub name: &'static str,
    pub kind: FieldKind,
    /// Comment banner the field is printed under. Empty for the header block.
    pub section: &'static str,
}

pub trait FieldType {
    const KIND: FieldKind;

    fn value(&self) -> FieldValue<'_>;
    fn slot(&mut self) -> FieldSlot<'_>;
}

impl FieldType for i64 {
    const KIND: FieldKind = FieldKind::Int;

    fn value(&self) -> FieldValue<'_> {
        FieldValue::Int(*self)
    }

    fn slot(&mut self) -> FieldSlot<'_> {
        FieldSlot::Int(self)
    }
}

impl FieldType for f64 {
    const KIND: FieldKind = FieldKind::Float;

    fn value(&self) -> FieldValue<'_> {
        FieldValue::Float(*self)
    }

    fn slot(&mut self) -> FieldSlot<'_> {
        FieldSlot::Float(self)
    }
}

impl FieldType for String {
    const KIND: FieldKind = FieldKind::Text;

    fn value(&self) -> FieldValue<'_> {
        FieldValue::Text(self.as_str())
    }

    fn slot(&mut self) -> FieldSlot<'_> {
        FieldSlot::Text(self)
    }
}

macro_rules! font_config {
    ($( [$section:literal] $( $field:ident : $ty:ty = $default:expr => $key:literal; )* )*) => {
        /// A complete generator configuration: scalar settings plus the
        /// selected character ranges, kept in insertion order.
        #[derive(Debug, Clone, PartialEq)]
        pub struct FontConfig {
            $( $( pub $field: $ty, )* )*
            pub chars: Vec<NumRange>,
        }

        impl Default for FontConfig {
            fn default() -> Self {
                Self {
                    $( $( $field: $default, )* )*
                    chars: Vec::new(),
                }
            }
        }

        /// All scalar fields in serialization order.
        pub static FIELDS: &[FieldDef] = &[
            $( $( FieldDef { name: $key, kind: <$ty as FieldType>::KIND, section: $section }, )* )*
        ];

        impl FontConfig {
            /// Look up a scalar field by its file key.
            pub fn field(&self, name: &str) -> Option<FieldValue<'_>> {
                match name {
                    $( $( $key => Some(FieldType::value(&self.$field)), )* )*
                    _ => None,
                }
            }

            /// Mutable lookup of a scalar field by its file key.
            pub fn field_mut(&mut self, name: &str) -> Option<FieldSlot<'_>> {
                match name {
                    $( $( $key => Some(FieldType::slot(&mut self.$field)), )* )*
                    _ => None,
                }
            }
        }
    };
}

font_config! {
    [""]
    file_version: i64 = 1 => "fileVersion";

    ["font settings"]
    font_name: String = String::new() => "fontName";
    font_file: String = String::new() => "fontFile";
    char_set: i64 = 0 => "charSet";
    font_size: i64 = 10 => "fontSize";
    aa: i64 = 1 => "aa";
    scale_h: i64 = 100 => "scaleH";
    use_smoothing: i64 = 1 => "useSmoothing";
    is_bold: i64 = 0 => "isBold";
    is_italic: i64 = 0 => "isItalic";
    use_unicode: i64 = 1 => "useUnicode";
    disable_box_chars: i64 = 1 => "disableBoxChars";
    output_invalid_char_glyph: i64 = 0 => "outputInvalidCharGlyph";
    dont_include_kerning_pairs: i64 = 0 => "dontIncludeKerningPairs";
    use_hinting: i64 = 1 => "useHinting";
    render_from_outline: i64 = 1 => "renderFromOutline";
    use_clear_type: i64 = 1 => "useClearType";
    auto_fit_num_pages: i64 = 0 => "autoFitNumPages";
    auto_fit_font_size_min: i64 = 0 => "autoFitFontSizeMin";
    auto_fit_font_size_max: i64 = 0 => "autoFitFontSizeMax";

    ["character alignment"]
    padding_down: i64 = 0 => "paddingDown";
    padding_up: i64 = 0 => "paddingUp";
    padding_right: i64 = 0 => "paddingRight";
    padding_left: i64 = 0 => "paddingLeft";
    spacing_horiz: i64 = 1 => "spacingHoriz";
    spacing_vert: i64 = 1 => "spacingVert";
    use_fixed_height: i64 = 0 => "useFixedHeight";
    force_zero: i64 = 0 => "forceZero";
    width_padding_factor: f64 = 0.0 => "widthPaddingFactor";

    ["output file"]
    out_width: i64 = 256 => "outWidth";
    out_height: i64 = 256 => "outHeight";
    out_bit_depth: i64 = 32 => "outBitDepth";
    font_desc_format: i64 = 0 => "fontDescFormat";
    four_chnl_packed: i64 = 0 => "fourChnlPacked";
    texture_format: String = String::from("png") => "textureFormat";
    texture_compression: i64 = 0 => "textureCompression";
    alpha_chnl: i64 = 1 => "alphaChnl";
    red_chnl: i64 = 0 => "redChnl";
    green_chnl: i64 = 0 => "greenChnl";
    blue_chnl: i64 = 0 => "blueChnl";
    inv_a: i64 = 0 => "invA";
    inv_r: i64 = 0 => "invR";
    inv_g: i64 = 0 => "invG";
    inv_b: i64 = 0 => "invB";

    ["outline"]
    outline_thickness: i64 = 0 => "outlineThickness";
}

/// Key for the two-valued `(outWidth, outHeight)` pseudo field.
pub const TEXTURE_SIZE_KEY: &str = "textureSize";

/// Key for the selected character ranges.
pub const CHARS_KEY: &str = "chars";

impl FontConfig {
    /// Field table entry for `name`, if it is a known scalar field.
    pub fn field_def(name: &str) -> Option<&'static FieldDef> {
        FIELDS.iter().find(|def| def.name == name)
    }

    /// Store an already coerced value. Returns `Ok(false)` for unknown keys;
    /// a value of the wrong kind is rejected.
    pub fn set_scalar(&mut self, name: &str, value: Scalar) -> Result<bool> {
        let Some(slot) = self.field_mut(name) else {
            return Ok(false);
        };
        match (slot, value) {
            (FieldSlot::Int(v), Scalar::Int(x)) => *v = x,
            (FieldSlot::Float(v), Scalar::Float(x)) => *v = x,
            (FieldSlot::Text(v), Scalar::Text(x)) => *v = x,
            (_, value) => {
                return Err(BmfcError::Config(format!("'{name}' cannot hold {value:?}")));
            }
        }
        Ok(true)
    }

    pub fn texture_size(&self) -> (i64, i64) {
        (self.out_width, self.out_height)
    }

    /// Set `outWidth` and `outHeight` together. Anything but exactly two
    /// values is rejected.
    pub fn set_texture_size(&mut self, size: &[i64]) -> Result<()> {
        match size {
            [w, h] => {
                self.out_width = *w;
                self.out_height = *h;
                Ok(())
            }
            _ => Err(BmfcError::Config(format!(
                "{TEXTURE_SIZE_KEY} takes exactly two values (width, height), got {}",
                size.len()
            ))),
        }
    }
}
