//! Event-protocol tests: feed visitor events into a collector and check the
//! collected annotation data.

use kiln_asm::{
    collect_into, walk_annotation, AnnotationData, AnnotationValue, AnnotationVisitor,
    CollectAnnotationData, Constant, EnumConstant,
};
use pretty_assertions::assert_eq;

/// Run `events` against a fresh top-level collector and return its result.
fn collect(desc: &str, events: impl FnOnce(&mut dyn AnnotationVisitor)) -> AnnotationData {
    let mut list = Vec::new();
    {
        let mut collector = collect_into(&mut list, desc, true);
        events(&mut collector);
    }
    assert_eq!(list.len(), 1, "visit_end must deliver exactly one annotation");
    list.remove(0)
}

fn expected(desc: &str, values: Vec<(&str, AnnotationValue)>) -> AnnotationData {
    let mut data = AnnotationData::new(desc, true);
    for (name, value) in values {
        data.add_value(name, value);
    }
    data
}

fn int(v: i32) -> AnnotationValue {
    Constant::Int(v).into()
}

// -- Single events --

#[test]
fn scalar_parameter() {
    let data = collect("Lann;", |v| {
        v.visit(Some("x"), Constant::Int(5));
        v.visit_end();
    });
    assert_eq!(data, expected("Lann;", vec![("x", int(5))]));
}

#[test]
fn array_parameter_keeps_arrival_order() {
    let data = collect("Lann;", |v| {
        {
            let mut xs = v.visit_array(Some("xs"));
            xs.visit(None, Constant::Int(1));
            xs.visit(None, Constant::Int(2));
            xs.visit_end();
        }
        v.visit_end();
    });
    assert_eq!(
        data,
        expected("Lann;", vec![("xs", AnnotationValue::Array(vec![int(1), int(2)]))])
    );
}

#[test]
fn nested_annotation_parameter() {
    let data = collect("Lann;", |v| {
        {
            let mut inner = v.visit_annotation(Some("inner"), "Lfoo;");
            inner.visit(Some("y"), Constant::Int(9));
            inner.visit_end();
        }
        v.visit_end();
    });
    let inner = expected("Lfoo;", vec![("y", int(9))]);
    assert_eq!(
        data,
        expected("Lann;", vec![("inner", AnnotationValue::Annotation(inner))])
    );
}

#[test]
fn enum_parameter() {
    let data = collect("Lann;", |v| {
        v.visit_enum(Some("e"), "Lcolor;", "RED");
        v.visit_end();
    });
    assert_eq!(
        data.get("e"),
        Some(&AnnotationValue::Enum(EnumConstant::new("Lcolor;", "RED")))
    );
}

#[test]
fn duplicate_parameter_last_write_wins() {
    let data = collect("Lann;", |v| {
        v.visit(Some("x"), Constant::Int(1));
        v.visit(Some("x"), Constant::Int(2));
        v.visit_end();
    });
    assert_eq!(data, expected("Lann;", vec![("x", int(2))]));
    assert_eq!(data.values().len(), 1);
}

#[test]
fn empty_annotation() {
    let data = collect("Lmarker;", |v| v.visit_end());
    assert!(data.values().is_empty());
    assert_eq!(data.to_string(), "@Lmarker;");
}

// -- Composition --

#[test]
fn deeply_nested_values() {
    // @Lroute;(paths={@Lpath;(segs={{"a", "b"}, {}}, kind=Lkind;.GET)}, class=Lfoo;.class)
    let data = collect("Lroute;", |v| {
        {
            let mut paths = v.visit_array(Some("paths"));
            {
                let mut path = paths.visit_annotation(None, "Lpath;");
                {
                    let mut segs = path.visit_array(Some("segs"));
                    {
                        let mut first = segs.visit_array(None);
                        first.visit(None, Constant::String("a".into()));
                        first.visit(None, Constant::String("b".into()));
                        first.visit_end();
                    }
                    {
                        let mut second = segs.visit_array(None);
                        second.visit_end();
                    }
                    segs.visit_end();
                }
                path.visit_enum(Some("kind"), "Lkind;", "GET");
                path.visit_end();
            }
            paths.visit_end();
        }
        v.visit(Some("class"), Constant::Type("Lfoo;".into()));
        v.visit_end();
    });

    assert_eq!(
        data.to_string(),
        "@Lroute;(paths={@Lpath;(segs={{\"a\", \"b\"}, {}}, kind=Lkind;.GET)}, class=Lfoo;.class)"
    );
    let path = data
        .get("paths")
        .and_then(AnnotationValue::as_array)
        .and_then(|paths| paths.first())
        .and_then(AnnotationValue::as_annotation);
    assert_eq!(path.map(AnnotationData::is_visible), Some(true));
}

#[test]
fn parameter_order_follows_events() {
    let data = collect("Lann;", |v| {
        v.visit(Some("b"), Constant::Int(1));
        {
            let mut inner = v.visit_annotation(Some("a"), "Lfoo;");
            inner.visit_end();
        }
        v.visit(Some("c"), Constant::Long(3));
        v.visit_end();
    });
    let keys: Vec<&str> = data.values().keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["b", "a", "c"]);
}

#[test]
fn one_list_per_entity() {
    let mut method_annotations = Vec::new();
    {
        let mut first = collect_into(&mut method_annotations, "Ljava/lang/Deprecated;", true);
        first.visit_end();
    }
    {
        let mut second = collect_into(&mut method_annotations, "Lcheck;", false);
        second.visit(Some("level"), Constant::Short(2));
        second.visit_end();
    }

    let rendered: Vec<String> = method_annotations.iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        vec!["@Ljava/lang/Deprecated;".to_string(), "@Lcheck;(level=2)".to_string()]
    );
    assert!(!method_annotations[1].is_visible());
}

// -- Replay --

#[test]
fn replay_reproduces_collected_data() {
    let original = collect("Lann;", |v| {
        v.visit(Some("x"), Constant::Char(u16::from(b'q')));
        v.visit_enum(Some("e"), "Lcolor;", "BLUE");
        {
            let mut xs = v.visit_array(Some("xs"));
            {
                let mut nested = xs.visit_annotation(None, "Lfoo;");
                nested.visit(Some("y"), Constant::Double(0.5));
                nested.visit_end();
            }
            xs.visit_end();
        }
        v.visit_end();
    });

    let mut replayed = CollectAnnotationData::new(original.desc(), original.is_visible());
    walk_annotation(&mut replayed, &original);

    assert!(replayed.is_finished());
    assert_eq!(replayed.into_annotation(), Some(original));
}
