//! The annotation visitor protocol.
//!
//! A class-file reader describes each annotation as a stream of events:
//! zero or more value events followed by exactly one `visit_end`. A nested
//! annotation or array opens a child visitor; the reader drives that child
//! to its own `visit_end` before sending the parent anything else.
//!
//! `name` is the parameter name inside an annotation and `None` for array
//! elements.
//!
//! [`walk_annotation`] replays collected data through any visitor, which is
//! how cached annotation data is fed back to consumers written against the
//! event protocol.

use crate::{AnnotationData, AnnotationValue, Constant};

/// Receiver of annotation events.
pub trait AnnotationVisitor {
    /// A scalar value.
    fn visit(&mut self, name: Option<&str>, value: Constant);

    /// An enum constant: the enum's type descriptor and the constant name.
    fn visit_enum(&mut self, name: Option<&str>, desc: &str, value: &str);

    /// A nested annotation of type `desc`. Its events go to the returned
    /// visitor.
    fn visit_annotation(&mut self, name: Option<&str>, desc: &str)
        -> Box<dyn AnnotationVisitor + '_>;

    /// An array value. Its elements go to the returned visitor.
    fn visit_array(&mut self, name: Option<&str>) -> Box<dyn AnnotationVisitor + '_>;

    /// No more events for this annotation or array.
    fn visit_end(&mut self);
}

/// Replay `data`'s parameters through `visitor`, ending with `visit_end`.
pub fn walk_annotation(visitor: &mut dyn AnnotationVisitor, data: &AnnotationData) {
    for (name, value) in data.values() {
        walk_value(visitor, Some(name.as_str()), value);
    }
    visitor.visit_end();
}

/// Replay one value as the event(s) that would have produced it.
pub fn walk_value(visitor: &mut dyn AnnotationVisitor, name: Option<&str>, value: &AnnotationValue) {
    match value {
        AnnotationValue::Scalar(c) => visitor.visit(name, c.clone()),
        AnnotationValue::Enum(e) => visitor.visit_enum(name, &e.desc, &e.name),
        AnnotationValue::Annotation(nested) => {
            let mut child = visitor.visit_annotation(name, nested.desc());
            walk_annotation(child.as_mut(), nested);
        }
        AnnotationValue::Array(items) => {
            let mut child = visitor.visit_array(name);
            for item in items {
                walk_value(child.as_mut(), None, item);
            }
            child.visit_end();
        }
    }
}
