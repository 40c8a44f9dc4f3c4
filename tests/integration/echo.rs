//! Header behaviour against an in-process echo executor.
//!
//! `EchoServer` answers like an HTTP echo service: it reflects the request
//! headers back with lower-cased names.

use std::collections::HashMap;
use std::convert::Infallible;

use callspec::{
    Api, ApiSpec, Arguments, Call, CallExecutor, ErrorKind, OperationSpec, RequestDescriptor,
    Result,
};
use serde_json::{json, Value};

use crate::common;

trait PostmanEcho {
    fn get_call(&self) -> Result<Call<Value>>;
    fn get_multiple_headers_call(&self) -> Result<Call<Value>>;
    fn get_incorrect_header(&self) -> Result<Call<Value>>;
    fn get_single_param_headers_call(&self, headers: HashMap<String, String>)
        -> Result<Call<Value>>;
    fn get_both_single_param_static_headers_call(
        &self,
        headers: HashMap<String, String>,
    ) -> Result<Call<Value>>;
    fn no_headers_call(&self) -> Result<Call<Value>>;
    fn incorrect_headers_call(&self, headers: &str) -> Result<Call<Value>>;
}

struct EchoClient {
    api: Api,
}

impl EchoClient {
    fn new() -> Self {
        let spec = ApiSpec::new("postman-echo")
            .operation(
                OperationSpec::get("get_call", "/headers")
                    .header("x-foo:Bar")
                    .returns::<Call<Value>>(),
            )
            .operation(
                OperationSpec::get("get_multiple_headers_call", "/headers")
                    .headers(["x-foo:Bar", "x-ping:Pong"])
                    .returns::<Call<Value>>(),
            )
            .operation(
                OperationSpec::get("get_incorrect_header", "/headers")
                    .header("x-foo Bar")
                    .returns::<Call<Value>>(),
            )
            .operation(
                OperationSpec::get("get_single_param_headers_call", "/headers")
                    .header_map("headers")
                    .returns::<Call<Value>>(),
            )
            .operation(
                OperationSpec::get("get_both_single_param_static_headers_call", "/headers")
                    .headers(["x-ping:Pong", "x-static:True"])
                    .header_map("headers")
                    .returns::<Call<Value>>(),
            )
            .operation(OperationSpec::get("no_headers_call", "/headers").returns::<Call<Value>>())
            .operation(
                OperationSpec::get("incorrect_headers_call", "/headers")
                    .header_map("headers")
                    .returns::<Call<Value>>(),
            );

        let api = common::client("https://postman-echo.com")
            .bind(spec)
            .expect("echo spec binds");
        Self { api }
    }
}

impl PostmanEcho for EchoClient {
    fn get_call(&self) -> Result<Call<Value>> {
        self.api.call("get_call", &Arguments::new())
    }

    fn get_multiple_headers_call(&self) -> Result<Call<Value>> {
        self.api.call("get_multiple_headers_call", &Arguments::new())
    }

    fn get_incorrect_header(&self) -> Result<Call<Value>> {
        self.api.call("get_incorrect_header", &Arguments::new())
    }

    fn get_single_param_headers_call(
        &self,
        headers: HashMap<String, String>,
    ) -> Result<Call<Value>> {
        self.api
            .call("get_single_param_headers_call", &Arguments::new().arg(headers))
    }

    fn get_both_single_param_static_headers_call(
        &self,
        headers: HashMap<String, String>,
    ) -> Result<Call<Value>> {
        self.api.call(
            "get_both_single_param_static_headers_call",
            &Arguments::new().arg(headers),
        )
    }

    fn no_headers_call(&self) -> Result<Call<Value>> {
        self.api.call("no_headers_call", &Arguments::new())
    }

    fn incorrect_headers_call(&self, headers: &str) -> Result<Call<Value>> {
        self.api
            .call("incorrect_headers_call", &Arguments::new().arg(headers))
    }
}

struct EchoServer;

impl CallExecutor<Value> for EchoServer {
    type Response = Value;
    type Error = Infallible;

    fn execute(&self, request: RequestDescriptor) -> std::result::Result<Value, Infallible> {
        let headers: serde_json::Map<String, Value> = request
            .headers()
            .iter()
            .map(|(k, v)| (k.to_ascii_lowercase(), Value::String(v.clone())))
            .collect();
        Ok(json!({ "url": request.url(), "headers": headers }))
    }
}

fn echoed_headers(call: Call<Value>) -> Value {
    let response = call.execute(&EchoServer).unwrap();
    response["headers"].clone()
}

fn single(key: &str, value: &str) -> HashMap<String, String> {
    let mut map = HashMap::new();
    map.insert(key.to_string(), value.to_string());
    map
}

#[test]
fn test_single_static_header() {
    let headers = echoed_headers(EchoClient::new().get_call().unwrap());
    assert_eq!(headers["x-foo"], "Bar");
}

#[test]
fn test_multiple_static_headers() {
    let headers = echoed_headers(EchoClient::new().get_multiple_headers_call().unwrap());
    assert_eq!(headers["x-foo"], "Bar");
    assert_eq!(headers["x-ping"], "Pong");
}

#[test]
fn test_failure_static_header() {
    let err = EchoClient::new().get_incorrect_header().unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MalformedHeader(_)));
    assert!(err.to_string().contains("x-foo Bar"));
}

#[test]
fn test_single_dynamic_header() {
    let headers = echoed_headers(
        EchoClient::new()
            .get_single_param_headers_call(single("x-Foo", "Bar"))
            .unwrap(),
    );
    assert_eq!(headers["x-foo"], "Bar");
}

#[test]
fn test_both_dynamic_and_static_headers() {
    let headers = echoed_headers(
        EchoClient::new()
            .get_both_single_param_static_headers_call(single("x-Foo", "Bar"))
            .unwrap(),
    );
    assert_eq!(headers["x-foo"], "Bar");
    assert_eq!(headers["x-ping"], "Pong");
    assert_eq!(headers["x-static"], "True");
}

#[test]
fn test_dynamic_header_overrides_static_regardless_of_case() {
    let headers = echoed_headers(
        EchoClient::new()
            .get_both_single_param_static_headers_call(single("X-Static", "False"))
            .unwrap(),
    );
    assert_eq!(headers["x-static"], "False");
    assert_eq!(headers.as_object().unwrap().len(), 2);
}

#[test]
fn test_no_headers() {
    let headers = echoed_headers(EchoClient::new().no_headers_call().unwrap());
    assert!(headers.as_object().unwrap().is_empty());
}

#[test]
fn test_failure_dynamic_header() {
    let err = EchoClient::new()
        .incorrect_headers_call("X-Foo:Bar")
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::HeaderArgumentType { .. }));
    assert!(err.to_string().contains("string-to-string mapping"));
}
