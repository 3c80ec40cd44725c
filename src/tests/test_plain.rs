use common::Value;
use error::SerializeError;
use field::{Access, Field};
use serializer::{Context, Serializer};
use tests::fixtures::Row;

fn render(serializer: &Serializer, row: &Row) -> String {
    serializer.to_json(row, &Context::new()).unwrap()
}

#[test]
fn test_emits_every_readable_field() {
    let serializer = Serializer::new("thing")
        .values(&["a", "b", "c"])
        .field(Field::value("d").write_only());
    let row = Row::new("thing")
        .set("c", json!([]))
        .set("b", Value::Null)
        .set("a", 0)
        .set("d", 4);

    let object = serializer.to_representation(&row, &Context::new()).unwrap();
    let keys: Vec<_> = object.keys().map(String::as_str).collect();
    assert_eq_dbg!(keys, serializer.readable_fields());
    assert_eq_str!(render(&serializer, &row), r#"{"a":0,"b":null,"c":[]}"#);
}

#[test]
fn test_skip_renders_null() {
    let serializer = Serializer::new("thing").values(&["a", "b"]);
    let row = Row::new("thing").skip("a").set("b", 1);

    assert_eq_str!(render(&serializer, &row), r#"{"a":null,"b":1}"#);
}

#[test]
fn test_unknown_attribute_is_configuration_error() {
    let serializer = Serializer::new("thing").values(&["a", "missing"]);
    let row = Row::new("thing").set("a", 1);

    let err = serializer
        .to_representation(&row, &Context::new())
        .unwrap_err();
    assert!(err.is_configuration_error());
    assert_eq_str!(
        err.to_string(),
        "field 'missing' of thing serializer: thing has no attribute 'missing'"
    );
}

#[test]
fn test_unknown_attribute_fails_in_compact_mode() {
    let serializer = Serializer::compact("thing").values(&["missing"]);
    let row = Row::new("thing");

    match serializer.to_representation(&row, &Context::new()) {
        Err(SerializeError::UnknownAttribute { field, .. }) => assert_eq_str!(field, "missing"),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_entity_mismatch() {
    let serializer = Serializer::new("city").values(&["descr"]);
    let row = Row::new("call_unit").set("descr", "A1".to_string());

    let err = serializer
        .to_representation(&row, &Context::new())
        .unwrap_err();
    assert!(err.is_configuration_error());
    assert_eq_str!(err.to_string(), "city serializer cannot represent a call_unit record");
}

#[test]
fn test_source_rename() {
    let serializer = Serializer::new("thing").field(Field::value("n").source("call_id__count"));
    let row = Row::new("thing").set("call_id__count", 57);

    assert_eq_str!(render(&serializer, &row), r#"{"n":57}"#);
}

#[test]
fn test_dotted_source_follows_relation() {
    let serializer = Serializer::new("call").field(Field::value("city_name").source("city.descr"));

    let row = Row::new("call").one("city", Some(Row::new("city").set("descr", "Durham".to_string())));
    assert_eq_str!(render(&serializer, &row), r#"{"city_name":"Durham"}"#);

    let row = Row::new("call").one("city", None);
    assert_eq_str!(render(&serializer, &row), r#"{"city_name":null}"#);

    let compact = serializer.clone().with_mode(::serializer::Mode::Compact);
    assert_eq_str!(render(&compact, &row), "{}");
}

#[test]
fn test_dotted_source_through_scalar() {
    let serializer = Serializer::new("call").field(Field::value("city_name").source("city.descr"));
    let row = Row::new("call").set("city", 3);

    match serializer.to_representation(&row, &Context::new()) {
        Err(SerializeError::NotARelation { attribute, entity, .. }) => {
            assert_eq_str!(attribute, "city");
            assert_eq_str!(entity, "call");
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_relation_without_serializer_renders_pk() {
    let serializer = Serializer::new("user").values(&["city", "groups"]);
    let row = Row::new("user")
        .one("city", Some(Row::new("city").pk(5)))
        .many("groups", vec![Row::new("group").pk(1), Row::new("group").pk(2)]);

    assert_eq_str!(render(&serializer, &row), r#"{"city":5,"groups":[1,2]}"#);
}

#[test]
fn test_nested_field_rejects_scalar() {
    let serializer = Serializer::new("call")
        .field(Field::nested("city", Serializer::new("city").values(&["descr"])));
    let row = Row::new("call").set("city", "Durham".to_string());

    let err = serializer
        .to_representation(&row, &Context::new())
        .unwrap_err();
    assert!(!err.is_configuration_error());
    assert_eq_str!(
        err.to_string(),
        "field 'city' of call serializer: expected a related record, found string"
    );
}

#[test]
fn test_integer_coercion() {
    let serializer = Serializer::new("thing")
        .field(Field::integer("text"))
        .field(Field::integer("float"))
        .field(Field::integer("negative"))
        .field(Field::integer("flag"))
        .field(Field::integer("none"));
    let row = Row::new("thing")
        .set("text", " 42 ".to_string())
        .set("float", 3.9)
        .set("negative", -2.5)
        .set("flag", true)
        .set("none", Value::Null);

    assert_eq_str!(
        render(&serializer, &row),
        r#"{"text":42,"float":3,"negative":-2,"flag":1,"none":null}"#
    );
}

#[test]
fn test_integer_rejects_text() {
    let serializer = Serializer::new("thing").field(Field::integer("n"));
    let row = Row::new("thing").set("n", "many".to_string());

    let err = serializer
        .to_representation(&row, &Context::new())
        .unwrap_err();
    assert_eq_str!(
        err.to_string(),
        "field 'n' of thing serializer: expected an integer, found string"
    );
}

#[test]
fn test_redeclared_field_keeps_position() {
    let serializer = Serializer::new("call")
        .values(&["call_id", "city", "zip"])
        .field(Field::nested("city", Serializer::new("city").values(&["descr"])))
        .read_only(&["call_id", "city"]);

    let names: Vec<_> = serializer.fields().iter().map(Field::name).collect();
    assert_eq_dbg!(names, vec!["call_id", "city", "zip"]);
    assert_eq_dbg!(serializer.read_only_fields(), vec!["call_id", "city"]);
    assert_eq!(serializer.get_field("zip").unwrap().access(), Access::ReadWrite);
}

#[test]
fn test_identity_and_links() {
    let serializer = Serializer::new("user")
        .field(Field::identity("url", "users"))
        .field(Field::link("groups", "groups"))
        .field(Field::link("manager", "users"));
    let row = Row::new("user")
        .pk(3)
        .many("groups", vec![Row::new("group").pk(1)])
        .one("manager", None);

    assert_eq_str!(
        render(&serializer, &row),
        r#"{"url":"/users/3/","groups":["/groups/1/"],"manager":null}"#
    );

    let context = Context::with_base_url("http://testserver/api/");
    assert_eq_str!(
        serializer.to_json(&row, &context).unwrap(),
        r#"{"url":"http://testserver/api/users/3/","groups":["http://testserver/api/groups/1/"],"manager":null}"#
    );
}

#[test]
fn test_serialize_many() {
    let serializer = Serializer::new("city").values(&["city_id"]);
    let rows = vec![
        Row::new("city").set("city_id", 1),
        Row::new("city").set("city_id", 2),
    ];

    let values = serializer.serialize_many(&rows, &Context::new()).unwrap();
    assert_eq_dbg!(values, vec![json!({"city_id": 1}), json!({"city_id": 2})]);
}

#[test]
fn test_integer_rejects_out_of_range_float() {
    let serializer = Serializer::new("thing").field(Field::integer("n"));

    let row = Row::new("thing").set("n", 1e20);
    let err = serializer
        .to_representation(&row, &Context::new())
        .unwrap_err();
    assert_eq_str!(
        err.to_string(),
        "field 'n' of thing serializer: expected an integer, found number"
    );

    let row = Row::new("thing").set("n", -1e19);
    assert!(serializer.to_representation(&row, &Context::new()).is_err());

    let row = Row::new("thing").set("n", -9.2e18);
    assert_eq_str!(render(&serializer, &row), r#"{"n":-9200000000000000000}"#);
}

#[test]
fn test_identity_without_pk() {
    let serializer = Serializer::new("thing").field(Field::identity("url", "things"));
    let row = Row::new("thing");

    assert_eq_str!(render(&serializer, &row), r#"{"url":null}"#);

    let compact = serializer.with_mode(::serializer::Mode::Compact);
    assert_eq_str!(render(&compact, &row), "{}");
}
