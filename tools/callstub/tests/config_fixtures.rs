use callstub::{
    load_config, load_fixture, CallHistory, CallstubError, Fixture, Stub, StubConfig, StubError,
};
use serde_json::{json, Value};
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn toml_and_json_fixtures_describe_the_same_stub() {
    let from_toml: Fixture<Value> =
        load_fixture(fixture_path("lookup.toml")).expect("load toml fixture");
    let from_json: Fixture<Value> =
        load_fixture(fixture_path("lookup.json")).expect("load json fixture");

    assert_eq!(from_toml, from_json);
    assert_eq!(from_toml.config.name.as_deref(), Some("lookup"));
}

#[test]
fn fixture_stub_replays_values_under_its_name() {
    let fixture: Fixture<Value> =
        load_fixture(fixture_path("lookup.toml")).expect("load toml fixture");
    let fn_stub: Stub<&str, Value, ()> = Stub::from_fixture(fixture);

    assert_eq!(fn_stub.name(), Some("lookup"));
    assert_eq!(fn_stub.call("a"), Ok(json!("woot")));
    assert_eq!(fn_stub.call("b"), Ok(json!(5)));
    assert_eq!(fn_stub.call("c"), Ok(json!({"foo": "bar"})));
    assert_eq!(fn_stub.call("d"), Err(StubError::Exhausted));
    assert_eq!(fn_stub.calls(), vec!["a", "b", "c", "d"]);
}

#[test]
fn typed_fixture_values_deserialize_directly() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("ports.toml");
    std::fs::write(&path, "values = [8080, 8443]\n").expect("write fixture");

    let fixture: Fixture<u16> = load_fixture(&path).expect("load typed fixture");
    assert_eq!(fixture.config, StubConfig::default());

    let fn_stub: Stub<(), u16, ()> = Stub::from_fixture(fixture);
    assert_eq!(fn_stub.name(), None);
    assert_eq!(fn_stub.call(()), Ok(8080));
    assert_eq!(fn_stub.call(()), Ok(8443));
}

#[test]
fn malformed_fixture_reports_its_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{\"values\": [1, 2").expect("write fixture");

    let err = load_fixture::<i64>(&path).expect_err("truncated json");
    match err {
        CallstubError::Fixture(message) => assert!(message.contains("broken.json")),
        other => panic!("expected fixture error, got {other:?}"),
    }
}

#[test]
fn missing_files_are_io_errors() {
    let dir = tempfile::tempdir().expect("tempdir");

    let err = load_config(dir.path().join("absent.toml")).expect_err("no config file");
    assert!(matches!(err, CallstubError::Io(_)));
    let err = load_fixture::<i64>(dir.path().join("absent.json")).expect_err("no fixture");
    assert!(matches!(err, CallstubError::Io(_)));
}

#[test]
fn config_file_names_any_stub_kind() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("stub.toml");
    std::fs::write(&path, "name = \"clock\"\n").expect("write config");
    let config = load_config(&path).expect("load config");

    let producer: Stub<(), i32, ()> = Stub::from_values([1]).with_config(&config);
    let deferred: callstub::DeferredStub<(), i32, ()> =
        callstub::DeferredStub::new().with_config(&config);
    let unnamed: Stub<(), i32, ()> = Stub::from_values([1]).with_config(&StubConfig::default());

    assert_eq!(producer.name(), Some("clock"));
    assert_eq!(deferred.name(), Some("clock"));
    assert_eq!(unnamed.name(), None);
}
