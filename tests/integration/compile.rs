//! End-to-end compilation through a bound client.

use callspec::{
    ApiClient, ApiSpec, Argument, Arguments, ClientConfig, ErrorKind, HttpMethod, OperationSpec,
    ProxySettings, RequestBody,
};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::json;

use crate::common;

#[derive(Debug, Serialize)]
struct Payload {
    name: String,
    tags: Vec<String>,
}

fn payload() -> Payload {
    Payload {
        name: "widget".into(),
        tags: vec!["a".into(), "b".into()],
    }
}

fn widgets() -> ApiSpec {
    ApiSpec::new("widgets")
        .operation(OperationSpec::get("user_repos", "/users/{id}/repos").path("id"))
        .operation(
            OperationSpec::get("mirror", "/{name}/mirror/{name}/{name}").path("name"),
        )
        .operation(OperationSpec::get("orphan", "/teams/{team}/members/{member}").path("team"))
        .operation(OperationSpec::post("create", "/widgets").body::<Payload>("p"))
        .operation(OperationSpec::get("read", "/widgets").body::<Payload>("p"))
        .operation(OperationSpec::put("touch", "/widgets/{id}").path("id"))
}

#[test]
fn test_users_repos_scenario() {
    let api = common::client("https://api.example.com/").bind(widgets()).unwrap();
    let request = api
        .compile("user_repos", &Arguments::new().arg(42u64))
        .unwrap();

    assert_eq!(request.url(), "https://api.example.com/users/42/repos");
    assert_eq!(request.method(), HttpMethod::Get);
    assert!(request.headers().is_empty());
    assert!(request.body().is_none());
}

#[test]
fn test_placeholder_repeated_three_times() {
    let api = common::client("https://api.example.com").bind(widgets()).unwrap();
    let request = api
        .compile("mirror", &Arguments::new().arg("r2"))
        .unwrap();
    assert_eq!(request.url(), "https://api.example.com/r2/mirror/r2/r2");
}

#[test]
fn test_undeclared_placeholder() {
    let api = common::client("https://api.example.com").bind(widgets()).unwrap();
    let err = api
        .compile("orphan", &Arguments::new().arg("core"))
        .unwrap_err();

    assert!(matches!(err.kind, ErrorKind::UnresolvedPathVariable { .. }));
    assert!(err.to_string().contains("/teams/{team}/members/{member}"));
}

#[test]
fn test_post_attaches_body_get_does_not() {
    let api = common::client("https://api.example.com").bind(widgets()).unwrap();
    let args = Arguments::new().value(&payload()).unwrap();

    let created = api.compile("create", &args).unwrap();
    assert_eq!(
        created.body(),
        Some(&RequestBody::Json(json!({"name": "widget", "tags": ["a", "b"]})))
    );

    let read = api.compile("read", &args).unwrap();
    assert!(read.body().is_none());
}

#[test]
fn test_put_without_body_is_valid() {
    let api = common::client("https://api.example.com").bind(widgets()).unwrap();
    let request = api.compile("touch", &Arguments::new().arg("w-1")).unwrap();
    assert_eq!(request.method(), HttpMethod::Put);
    assert!(request.body().is_none());
}

#[test]
fn test_config_shared_by_every_descriptor() {
    let config = ClientConfig::builder("https://api.example.com/v2/")
        .with_query_params([("api_key", "k 1"), ("format", "json")])
        .with_basic_auth("svc", "pw")
        .with_proxy(ProxySettings::new("http://proxy.internal", 8080).with_credentials("p", "q"))
        .with_tls_verification_disabled(true)
        .build()
        .unwrap();
    let client = ApiClient::new(config);
    let api = client.bind(widgets()).unwrap();

    let a = api.compile("user_repos", &Arguments::new().arg(1u64)).unwrap();
    let b = api.compile("touch", &Arguments::new().arg(2u64)).unwrap();

    assert_eq!(
        a.url(),
        "https://api.example.com/v2/users/1/repos?api_key=k%201&format=json"
    );
    assert_eq!(b.url(), "https://api.example.com/v2/widgets/2?api_key=k%201&format=json");
    for request in [&a, &b] {
        assert_eq!(request.auth(), client.config().auth.as_ref());
        assert_eq!(request.proxy(), client.config().proxy.as_ref());
        assert!(request.tls_verification_disabled());
    }
    assert_eq!(
        a.auth().unwrap().authorization_header(),
        "Basic c3ZjOnB3"
    );
}

#[test]
fn test_header_map_from_serialized_map() {
    let api = common::client("https://api.example.com")
        .bind(
            ApiSpec::new("h").operation(
                OperationSpec::get("echo", "/headers")
                    .headers(["x-foo:Bar", "x-ping:Pong"])
                    .header_map("headers"),
            ),
        )
        .unwrap();

    let mut dynamic = IndexMap::new();
    dynamic.insert("x-foo".to_string(), "Baz".to_string());
    let request = api
        .compile("echo", &Arguments::new().arg(Argument::from(dynamic)))
        .unwrap();

    let mut expected = IndexMap::new();
    expected.insert("x-foo".to_string(), "Baz".to_string());
    expected.insert("x-ping".to_string(), "Pong".to_string());
    assert_eq!(request.headers(), &expected);
}

#[test]
fn test_spec_serializes_for_inspection() {
    let spec = widgets();
    let dumped = serde_json::to_value(&spec).unwrap();
    assert_eq!(dumped["name"], "widgets");
    assert_eq!(dumped["operations"][3]["request"]["method"], "POST");
    assert_eq!(dumped["operations"][3]["params"][0]["role"], "body");
}
