//! Annotation values as read from class files.
//!
//! Parameter maps use `IndexMap` so that iteration and [`Display`] output
//! follow the order in which the class file listed the parameters.
//!
//! [`Display`]: std::fmt::Display

use std::fmt;

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

/// Insertion-ordered map from parameter name to value.
pub type AnnotationValues = IndexMap<String, AnnotationValue, FxBuildHasher>;

/// Scalar payload of a `visit` event.
///
/// Primitive element values plus the two reference kinds the class-file
/// format stores inline: strings and class literals (as type descriptors).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Constant {
    Bool(bool),
    Byte(i8),
    /// UTF-16 code unit.
    Char(u16),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(String),
    /// Class literal, as a type descriptor (`Ljava/lang/String;`, `I`, ...).
    Type(String),
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constant::Bool(v) => write!(f, "{v}"),
            Constant::Byte(v) => write!(f, "{v}"),
            Constant::Char(v) => match char::from_u32(u32::from(*v)) {
                Some(c) => write!(f, "{c:?}"),
                None => write!(f, "'\\u{v:04x}'"),
            },
            Constant::Short(v) => write!(f, "{v}"),
            Constant::Int(v) => write!(f, "{v}"),
            Constant::Long(v) => write!(f, "{v}L"),
            Constant::Float(v) => write!(f, "{v:?}f"),
            Constant::Double(v) => write!(f, "{v:?}"),
            Constant::String(v) => write!(f, "{v:?}"),
            Constant::Type(desc) => write!(f, "{desc}.class"),
        }
    }
}

/// An enum constant: the enum's type descriptor and the constant's name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct EnumConstant {
    pub desc: String,
    pub name: String,
}

impl EnumConstant {
    pub fn new(desc: impl Into<String>, name: impl Into<String>) -> Self {
        EnumConstant {
            desc: desc.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for EnumConstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.desc, self.name)
    }
}

/// Any value an annotation parameter or array element can hold.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum AnnotationValue {
    Scalar(Constant),
    Enum(EnumConstant),
    Annotation(AnnotationData),
    /// Elements in class-file order.
    Array(Vec<AnnotationValue>),
}

impl AnnotationValue {
    pub fn as_scalar(&self) -> Option<&Constant> {
        match self {
            AnnotationValue::Scalar(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<&EnumConstant> {
        match self {
            AnnotationValue::Enum(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_annotation(&self) -> Option<&AnnotationData> {
        match self {
            AnnotationValue::Annotation(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[AnnotationValue]> {
        match self {
            AnnotationValue::Array(items) => Some(items),
            _ => None,
        }
    }
}

impl From<Constant> for AnnotationValue {
    fn from(c: Constant) -> Self {
        AnnotationValue::Scalar(c)
    }
}

impl From<EnumConstant> for AnnotationValue {
    fn from(e: EnumConstant) -> Self {
        AnnotationValue::Enum(e)
    }
}

impl From<AnnotationData> for AnnotationValue {
    fn from(a: AnnotationData) -> Self {
        AnnotationValue::Annotation(a)
    }
}

impl fmt::Display for AnnotationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnnotationValue::Scalar(c) => write!(f, "{c}"),
            AnnotationValue::Enum(e) => write!(f, "{e}"),
            AnnotationValue::Annotation(a) => write!(f, "{a}"),
            AnnotationValue::Array(items) => {
                f.write_str("{")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("}")
            }
        }
    }
}

/// One annotation instance: its type descriptor, runtime visibility, and
/// parameter values.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnotationData {
    desc: String,
    visible: bool,
    values: AnnotationValues,
}

impl AnnotationData {
    pub fn new(desc: impl Into<String>, visible: bool) -> Self {
        AnnotationData {
            desc: desc.into(),
            visible,
            values: AnnotationValues::default(),
        }
    }

    /// Type descriptor of the annotation type, e.g. `Ljava/lang/Deprecated;`.
    pub fn desc(&self) -> &str {
        &self.desc
    }

    /// Whether the annotation is retained for runtime reflection.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn values(&self) -> &AnnotationValues {
        &self.values
    }

    pub fn get(&self, name: &str) -> Option<&AnnotationValue> {
        self.values.get(name)
    }

    /// Store `value` under `name`.
    ///
    /// A repeated name replaces the earlier value but keeps its position.
    /// Returns the replaced value.
    pub fn add_value(
        &mut self,
        name: impl Into<String>,
        value: impl Into<AnnotationValue>,
    ) -> Option<AnnotationValue> {
        self.values.insert(name.into(), value.into())
    }

    pub(crate) fn values_mut(&mut self) -> &mut AnnotationValues {
        &mut self.values
    }
}

impl fmt::Display for AnnotationData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.desc)?;
        if self.values.is_empty() {
            return Ok(());
        }
        f.write_str("(")?;
        for (i, (name, value)) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            // Unnamed values print bare, like a single `value` element.
            if name.is_empty() {
                write!(f, "{value}")?;
            } else {
                write!(f, "{name}={value}")?;
            }
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests;
