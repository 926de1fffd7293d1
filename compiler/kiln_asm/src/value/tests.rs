use super::*;
use pretty_assertions::assert_eq;

#[test]
fn add_value_overwrites_in_place() {
    let mut data = AnnotationData::new("Lfoo;", true);
    assert_eq!(data.add_value("x", Constant::Int(1)), None);
    data.add_value("y", Constant::Int(2));

    let replaced = data.add_value("x", Constant::Int(3));
    assert_eq!(replaced, Some(AnnotationValue::Scalar(Constant::Int(1))));

    let keys: Vec<&str> = data.values().keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["x", "y"]);
    assert_eq!(data.get("x"), Some(&AnnotationValue::Scalar(Constant::Int(3))));
}

#[test]
fn accessors() {
    let data = AnnotationData::new("Ljava/lang/Deprecated;", false);
    assert_eq!(data.desc(), "Ljava/lang/Deprecated;");
    assert!(!data.is_visible());
    assert!(data.values().is_empty());
    assert_eq!(data.get("missing"), None);
}

#[test]
fn value_views() {
    let scalar = AnnotationValue::from(Constant::Bool(true));
    let enumeration = AnnotationValue::from(EnumConstant::new("Lcolor;", "RED"));
    let nested = AnnotationValue::from(AnnotationData::new("Lbar;", true));
    let array = AnnotationValue::Array(vec![scalar.clone()]);

    assert_eq!(scalar.as_scalar(), Some(&Constant::Bool(true)));
    assert_eq!(scalar.as_enum(), None);
    assert_eq!(enumeration.as_enum().map(|e| e.name.as_str()), Some("RED"));
    assert_eq!(nested.as_annotation().map(AnnotationData::desc), Some("Lbar;"));
    assert_eq!(array.as_array().map(<[_]>::len), Some(1));
    assert_eq!(array.as_scalar(), None);
}

#[test]
fn constant_display() {
    assert_eq!(Constant::Bool(false).to_string(), "false");
    assert_eq!(Constant::Byte(-8).to_string(), "-8");
    assert_eq!(Constant::Char(u16::from(b'a')).to_string(), "'a'");
    assert_eq!(Constant::Char(0xD800).to_string(), "'\\ud800'");
    assert_eq!(Constant::Short(300).to_string(), "300");
    assert_eq!(Constant::Int(5).to_string(), "5");
    assert_eq!(Constant::Long(5).to_string(), "5L");
    assert_eq!(Constant::Float(1.5).to_string(), "1.5f");
    assert_eq!(Constant::Double(2.0).to_string(), "2.0");
    assert_eq!(Constant::String("a\"b".into()).to_string(), "\"a\\\"b\"");
    assert_eq!(
        Constant::Type("Ljava/lang/String;".into()).to_string(),
        "Ljava/lang/String;.class"
    );
}

#[test]
fn annotation_display() {
    let mut inner = AnnotationData::new("Lbar;", true);
    inner.add_value("y", Constant::Int(9));

    let mut data = AnnotationData::new("Lfoo;", true);
    data.add_value("x", Constant::Int(5));
    data.add_value(
        "xs",
        AnnotationValue::Array(vec![Constant::Int(1).into(), Constant::Int(2).into()]),
    );
    data.add_value("e", EnumConstant::new("Lcolor;", "RED"));
    data.add_value("inner", inner);

    assert_eq!(
        data.to_string(),
        "@Lfoo;(x=5, xs={1, 2}, e=Lcolor;.RED, inner=@Lbar;(y=9))"
    );
}

#[test]
fn annotation_display_without_values() {
    assert_eq!(AnnotationData::new("Lmarker;", false).to_string(), "@Lmarker;");
}

#[test]
fn unnamed_value_displays_bare() {
    let mut data = AnnotationData::new("Lfoo;", true);
    data.add_value("", Constant::String("v".into()));
    assert_eq!(data.to_string(), "@Lfoo;(\"v\")");
}

#[test]
fn empty_array_display() {
    assert_eq!(AnnotationValue::Array(Vec::new()).to_string(), "{}");
}
