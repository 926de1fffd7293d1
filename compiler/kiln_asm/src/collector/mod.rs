//! Collectors that turn annotation events into [`AnnotationData`].
//!
//! A [`CollectAnnotationData`] builds one annotation. When it is nested
//! inside another annotation or array, it owns a sink: a single-shot closure
//! that stores the finished value in the parent's map or list. The closure
//! borrows that map or list mutably, so the parent cannot receive events
//! while a child is open; the borrow checker enforces the nesting rule of
//! the visitor protocol.
//!
//! Out-of-protocol events (anything after `visit_end`) are logged and
//! dropped. Collection itself never fails.

use crate::{
    AnnotationData, AnnotationValue, AnnotationValues, AnnotationVisitor, Constant, EnumConstant,
};

/// Single-shot continuation receiving a finished value.
type Sink<'a, T> = Box<dyn FnOnce(T) + 'a>;

/// Visibility given to annotations nested in another annotation or array.
///
/// The class-file format records visibility only for top-level
/// annotations; nested ones are treated as visible.
pub const NESTED_ANNOTATION_VISIBLE: bool = true;

/// Collects one (possibly nested) annotation.
pub struct CollectAnnotationData<'a> {
    /// `None` once handed to the sink.
    annotation: Option<AnnotationData>,
    sink: Option<Sink<'a, AnnotationData>>,
    finished: bool,
}

impl<'a> CollectAnnotationData<'a> {
    /// A top-level collector. Read the result back with
    /// [`annotation`](Self::annotation) or
    /// [`into_annotation`](Self::into_annotation) after `visit_end`.
    pub fn new(desc: impl Into<String>, visible: bool) -> Self {
        CollectAnnotationData {
            annotation: Some(AnnotationData::new(desc, visible)),
            sink: None,
            finished: false,
        }
    }

    /// A collector that hands its result to `sink` on `visit_end`.
    pub fn with_sink(
        desc: impl Into<String>,
        visible: bool,
        sink: impl FnOnce(AnnotationData) + 'a,
    ) -> Self {
        CollectAnnotationData {
            annotation: Some(AnnotationData::new(desc, visible)),
            sink: Some(Box::new(sink)),
            finished: false,
        }
    }

    /// The annotation collected so far; `None` after it went to a sink.
    pub fn annotation(&self) -> Option<&AnnotationData> {
        self.annotation.as_ref()
    }

    pub fn into_annotation(self) -> Option<AnnotationData> {
        self.annotation
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// The parameter map, unless this collector already ended.
    fn open(&mut self, event: &'static str) -> Option<&mut AnnotationValues> {
        if self.finished {
            ignored(event);
            return None;
        }
        self.annotation.as_mut().map(AnnotationData::values_mut)
    }
}

impl AnnotationVisitor for CollectAnnotationData<'_> {
    fn visit(&mut self, name: Option<&str>, value: Constant) {
        if let Some(values) = self.open("visit") {
            values.insert(key(name), AnnotationValue::Scalar(value));
        }
    }

    fn visit_enum(&mut self, name: Option<&str>, desc: &str, value: &str) {
        if let Some(values) = self.open("visit_enum") {
            values.insert(key(name), AnnotationValue::Enum(EnumConstant::new(desc, value)));
        }
    }

    fn visit_annotation(
        &mut self,
        name: Option<&str>,
        desc: &str,
    ) -> Box<dyn AnnotationVisitor + '_> {
        let Some(values) = self.open("visit_annotation") else {
            return Box::new(Ignored);
        };
        let key = key(name);
        Box::new(CollectAnnotationData::with_sink(
            desc,
            NESTED_ANNOTATION_VISIBLE,
            move |data| {
                values.insert(key, AnnotationValue::Annotation(data));
            },
        ))
    }

    fn visit_array(&mut self, name: Option<&str>) -> Box<dyn AnnotationVisitor + '_> {
        let Some(values) = self.open("visit_array") else {
            return Box::new(Ignored);
        };
        let key = key(name);
        Box::new(ArrayCollector::new(move |items| {
            values.insert(key, AnnotationValue::Array(items));
        }))
    }

    fn visit_end(&mut self) {
        if self.finished {
            ignored("visit_end");
            return;
        }
        self.finished = true;

        let Some(sink) = self.sink.take() else {
            if let Some(data) = &self.annotation {
                tracing::debug!(
                    desc = data.desc(),
                    params = data.values().len(),
                    "annotation collected"
                );
            }
            return;
        };
        if let Some(data) = self.annotation.take() {
            tracing::debug!(
                desc = data.desc(),
                params = data.values().len(),
                "nested annotation collected"
            );
            sink(data);
        }
    }
}

/// Collects the elements of an array-valued parameter in arrival order.
///
/// Element names are ignored.
pub struct ArrayCollector<'a> {
    values: Vec<AnnotationValue>,
    /// `None` once the array ended.
    sink: Option<Sink<'a, Vec<AnnotationValue>>>,
}

impl<'a> ArrayCollector<'a> {
    pub fn new(sink: impl FnOnce(Vec<AnnotationValue>) + 'a) -> Self {
        ArrayCollector {
            values: Vec::new(),
            sink: Some(Box::new(sink)),
        }
    }

    fn open(&mut self, event: &'static str) -> Option<&mut Vec<AnnotationValue>> {
        if self.sink.is_none() {
            ignored(event);
            return None;
        }
        Some(&mut self.values)
    }
}

impl AnnotationVisitor for ArrayCollector<'_> {
    fn visit(&mut self, _name: Option<&str>, value: Constant) {
        if let Some(values) = self.open("visit") {
            values.push(AnnotationValue::Scalar(value));
        }
    }

    fn visit_enum(&mut self, _name: Option<&str>, desc: &str, value: &str) {
        if let Some(values) = self.open("visit_enum") {
            values.push(AnnotationValue::Enum(EnumConstant::new(desc, value)));
        }
    }

    fn visit_annotation(
        &mut self,
        _name: Option<&str>,
        desc: &str,
    ) -> Box<dyn AnnotationVisitor + '_> {
        let Some(values) = self.open("visit_annotation") else {
            return Box::new(Ignored);
        };
        Box::new(CollectAnnotationData::with_sink(
            desc,
            NESTED_ANNOTATION_VISIBLE,
            move |data| values.push(AnnotationValue::Annotation(data)),
        ))
    }

    fn visit_array(&mut self, _name: Option<&str>) -> Box<dyn AnnotationVisitor + '_> {
        let Some(values) = self.open("visit_array") else {
            return Box::new(Ignored);
        };
        Box::new(ArrayCollector::new(move |items| {
            values.push(AnnotationValue::Array(items));
        }))
    }

    fn visit_end(&mut self) {
        let Some(sink) = self.sink.take() else {
            ignored("visit_end");
            return;
        };
        tracing::debug!(len = self.values.len(), "array collected");
        sink(std::mem::take(&mut self.values));
    }
}

/// A collector whose finished annotation is pushed onto `list`.
///
/// Class, method and field readers keep one list per entity and open one
/// collector per annotation they encounter.
pub fn collect_into<'a>(
    list: &'a mut Vec<AnnotationData>,
    desc: impl Into<String>,
    visible: bool,
) -> CollectAnnotationData<'a> {
    CollectAnnotationData::with_sink(desc, visible, move |data| list.push(data))
}

/// Swallows every event. Handed out for children opened after `visit_end`.
struct Ignored;

impl AnnotationVisitor for Ignored {
    fn visit(&mut self, _name: Option<&str>, _value: Constant) {}

    fn visit_enum(&mut self, _name: Option<&str>, _desc: &str, _value: &str) {}

    fn visit_annotation(
        &mut self,
        _name: Option<&str>,
        _desc: &str,
    ) -> Box<dyn AnnotationVisitor + '_> {
        Box::new(Ignored)
    }

    fn visit_array(&mut self, _name: Option<&str>) -> Box<dyn AnnotationVisitor + '_> {
        Box::new(Ignored)
    }

    fn visit_end(&mut self) {}
}

/// Parameter key for a map-context event. Unnamed values use `""`.
fn key(name: Option<&str>) -> String {
    name.unwrap_or_default().to_owned()
}

fn ignored(event: &'static str) {
    tracing::warn!(event, "annotation event after visit_end ignored");
}
