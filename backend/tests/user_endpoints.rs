//! End-to-end behaviour of the `/v1/user` endpoints over the in-memory store.

mod support;

use actix_web::http::StatusCode;
use actix_web::test;
use rstest::rstest;
use serde_json::{Value, json};

use support::{app, memory_state};

#[rstest]
#[actix_web::test]
async fn created_user_is_found_by_code() {
    let app = test::init_service(app(memory_state())).await;

    let created = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/v1/user")
            .set_json(json!({ "code": "1234", "name": "henk" }))
            .to_request(),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(created).await;

    let res = test::call_service(&app, test::TestRequest::get().uri("/v1/user/1234").to_request())
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["code"], "1234");
    assert_eq!(body["name"], "henk");
    assert_eq!(body["uuid"], created["uuid"]);
    assert_eq!(body["_links"]["self"]["href"], "/v1/user/1234");
}

#[rstest]
#[actix_web::test]
async fn unknown_code_is_not_found_with_a_trace_id() {
    let app = test::init_service(app(memory_state())).await;

    let res =
        test::call_service(&app, test::TestRequest::get().uri("/v1/user/1").to_request()).await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let header = res
        .headers()
        .get("trace-id")
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .expect("trace-id header");
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["code"], "not_found");
    assert_eq!(body["traceId"], header.as_str());
}

#[rstest]
#[actix_web::test]
async fn unversioned_patch_path_is_not_routed() {
    let app = test::init_service(app(memory_state())).await;

    let res = test::call_service(
        &app,
        test::TestRequest::patch()
            .uri("/user/test-uuid")
            .set_json(json!({ "uuid": "test-uuid" }))
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[rstest]
#[actix_web::test]
async fn duplicate_code_conflicts_without_mutating_the_store() {
    let app = test::init_service(app(memory_state())).await;
    for expected in [StatusCode::CREATED, StatusCode::CONFLICT] {
        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/v1/user")
                .set_json(json!({ "code": "1234", "name": "henk" }))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), expected);
    }

    let res = test::call_service(&app, test::TestRequest::get().uri("/v1/user").to_request()).await;
    let page: Value = test::read_body_json(res).await;
    assert_eq!(page["totalElements"], 1);
}

#[rstest]
#[actix_web::test]
async fn patch_changes_only_supplied_fields() {
    let app = test::init_service(app(memory_state())).await;
    test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/v1/user")
            .set_json(json!({ "uuid": "u-1", "code": "1234", "name": "henk" }))
            .to_request(),
    )
    .await;

    let res = test::call_service(
        &app,
        test::TestRequest::patch()
            .uri("/v1/user/u-1")
            .set_json(json!({ "name": "piet" }))
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["code"], "1234");
    assert_eq!(body["name"], "piet");
    assert_eq!(body["uuid"], "u-1");
}

#[rstest]
#[actix_web::test]
async fn patch_to_a_taken_code_conflicts() {
    let app = test::init_service(app(memory_state())).await;
    for (uuid, code) in [("u-1", "1234"), ("u-2", "5678")] {
        test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/v1/user")
                .set_json(json!({ "uuid": uuid, "code": code, "name": "henk" }))
                .to_request(),
        )
        .await;
    }

    let res = test::call_service(
        &app,
        test::TestRequest::patch()
            .uri("/v1/user/u-2")
            .set_json(json!({ "code": "1234" }))
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::CONFLICT);
}

#[rstest]
#[actix_web::test]
async fn deleted_user_is_gone_and_second_delete_is_not_found() {
    let app = test::init_service(app(memory_state())).await;
    test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/v1/user")
            .set_json(json!({ "uuid": "u-1", "code": "1234", "name": "henk" }))
            .to_request(),
    )
    .await;

    let first =
        test::call_service(&app, test::TestRequest::delete().uri("/v1/user/u-1").to_request())
            .await;
    assert_eq!(first.status(), StatusCode::NO_CONTENT);

    let lookup =
        test::call_service(&app, test::TestRequest::get().uri("/v1/user/1234").to_request()).await;
    assert_eq!(lookup.status(), StatusCode::NOT_FOUND);

    let second =
        test::call_service(&app, test::TestRequest::delete().uri("/v1/user/u-1").to_request())
            .await;
    assert_eq!(second.status(), StatusCode::NOT_FOUND);
}

#[rstest]
#[actix_web::test]
async fn listing_pages_in_creation_order() {
    let app = test::init_service(app(memory_state())).await;
    for code in ["a", "b", "c"] {
        test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/v1/user")
                .set_json(json!({ "code": code, "name": code }))
                .to_request(),
        )
        .await;
    }

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/v1/user?page=1&size=2")
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    let page: Value = test::read_body_json(res).await;
    assert_eq!(page["content"][0]["code"], "c");
    assert_eq!(page["totalElements"], 3);
    assert_eq!(page["totalPages"], 2);
}

#[rstest]
#[case("ab\u{1}c")]
#[case("é1")]
#[case("a%2F")]
#[actix_web::test]
async fn unsafe_codes_are_rejected_before_anything_is_stored(#[case] code: &str) {
    let app = test::init_service(app(memory_state())).await;

    for _ in 0..2 {
        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/v1/user")
                .set_json(json!({ "code": code, "name": "henk" }))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["details"]["field"], "code");
    }

    let res = test::call_service(&app, test::TestRequest::get().uri("/v1/user").to_request())
        .await;
    let page: Value = test::read_body_json(res).await;
    assert_eq!(page["totalElements"], 0);
}

#[rstest]
#[actix_web::test]
async fn patching_an_unknown_user_with_an_invalid_body_is_not_found() {
    let app = test::init_service(app(memory_state())).await;

    let res = test::call_service(
        &app,
        test::TestRequest::patch()
            .uri("/v1/user/does-not-exist")
            .set_json(json!({ "name": "" }))
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["message"], "user with uuid 'does-not-exist' not found");
}
