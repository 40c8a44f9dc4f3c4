//! Concurrent invocation of one bound client.

use std::thread;

use callspec::{ApiSpec, Arguments, OperationSpec};

use crate::common;

#[test]
fn test_parallel_first_use_converges() {
    let api = common::client("https://api.example.com")
        .bind(
            ApiSpec::new("parallel")
                .operation(
                    OperationSpec::get("item", "/items/{id}")
                        .header("x-client:callspec")
                        .path("id"),
                )
                .operation(OperationSpec::delete("drop", "/items/{id}").path("id")),
        )
        .unwrap();

    thread::scope(|scope| {
        for worker in 0..8u64 {
            let api = api.clone();
            scope.spawn(move || {
                for n in 0..50u64 {
                    let id = worker * 1000 + n;
                    let operation = if n % 2 == 0 { "item" } else { "drop" };
                    let request = api
                        .compile(operation, &Arguments::new().arg(id))
                        .unwrap();
                    assert_eq!(request.url(), format!("https://api.example.com/items/{id}"));
                    if operation == "item" {
                        assert_eq!(request.header("x-client"), Some("callspec"));
                    } else {
                        assert!(request.headers().is_empty());
                    }
                }
            });
        }
    });
}
