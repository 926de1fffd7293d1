//! Kiln ASM - annotation metadata from compiled classes.
//!
//! Class-file readers report annotations through the [`AnnotationVisitor`]
//! event protocol. This crate provides:
//! - the annotation data model ([`AnnotationData`], [`AnnotationValue`])
//! - collectors that build that model from events, including arbitrarily
//!   nested annotations and arrays
//! - replay of collected data back into the event protocol
//!   ([`walk_annotation`])
//!
//! ```text
//! let mut annotations = Vec::new();
//! let mut v = collect_into(&mut annotations, "Lfoo;", true);
//! v.visit(Some("x"), Constant::Int(5));
//! v.visit_end();
//! // annotations == [@Lfoo;(x=5)]
//! ```

mod collector;
mod value;
mod visitor;

pub use collector::{
    collect_into, ArrayCollector, CollectAnnotationData, NESTED_ANNOTATION_VISIBLE,
};
pub use value::{AnnotationData, AnnotationValue, AnnotationValues, Constant, EnumConstant};
pub use visitor::{walk_annotation, walk_value, AnnotationVisitor};
