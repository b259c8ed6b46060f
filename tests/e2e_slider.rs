use axum::http::{Method, StatusCode};
use serde_json::json;
use talentos_backoffice::domain::slider::{SliderImage, SliderImageId};
use tower::util::ServiceExt as _;
use uuid::Uuid;

mod support;

use support::{MultipartBuilder, TestApp, admin_cookie, empty_request, json_request, read_json};

fn slide(orden: i32, url: &str) -> SliderImage {
    SliderImage {
        id: SliderImageId(Uuid::new_v4()),
        imagen_url: url.into(),
        alt_text: Some("Slider image".into()),
        orden,
        created_at: support::fixed_now(),
        updated_at: support::fixed_now(),
    }
}

#[tokio::test]
async fn e2e_slider_list_is_public_and_ordered() {
    let app = TestApp::new();
    app.slider.seed(slide(1, "https://cdn.test/b.jpg"));
    app.slider.seed(slide(0, "https://cdn.test/a.jpg"));

    let resp = app
        .router
        .clone()
        .oneshot(empty_request(Method::GET, "/api/slider", None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    assert_eq!(body["imagenes"][0]["imagen_url"], "https://cdn.test/a.jpg");
    assert_eq!(body["imagenes"][1]["imagen_url"], "https://cdn.test/b.jpg");
}

#[tokio::test]
async fn e2e_slider_upload_appends_with_default_alt_text() {
    let app = TestApp::new();
    app.slider.seed(slide(3, "https://cdn.test/a.jpg"));
    let cookie = admin_cookie();

    let req = MultipartBuilder::new()
        .png("imagen", "portada.png")
        .text("alt_text", "  ")
        .build(Method::POST, "/api/slider/upload", Some(&cookie));
    let resp = app.router.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = read_json(resp).await;
    assert_eq!(body["message"], "Imagen del slider creada exitosamente");

    let stored = &app.storage.objects()[0];
    assert_eq!(stored.bucket, "slider-imagenes");
    assert!(stored.path.starts_with("slider/"));
    assert_eq!(body["imagen"]["imagen_url"], json!(stored.url));
    assert_eq!(body["imagen"]["alt_text"], "Slider image");
    assert_eq!(body["imagen"]["orden"], 4);
}

#[tokio::test]
async fn e2e_slider_upload_removes_object_when_insert_fails() {
    let app = TestApp::new();
    app.slider.fail_inserts();
    let cookie = admin_cookie();

    let req = MultipartBuilder::new()
        .png("imagen", "portada.png")
        .build(Method::POST, "/api/slider/upload", Some(&cookie));
    let resp = app.router.clone().oneshot(req).await.unwrap();
    support::assert_error_response(resp, StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
        .await;

    let stored = &app.storage.objects()[0];
    assert_eq!(
        app.storage.removed(),
        [(stored.bucket.clone(), stored.path.clone())]
    );
}

#[tokio::test]
async fn e2e_slider_upload_requires_an_image() {
    let app = TestApp::new();
    let cookie = admin_cookie();

    let missing = MultipartBuilder::new()
        .text("alt_text", "Sin archivo")
        .build(Method::POST, "/api/slider/upload", Some(&cookie));
    let resp = app.router.clone().oneshot(missing).await.unwrap();
    support::assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;

    let pdf = MultipartBuilder::new()
        .file("imagen", "doc.pdf", "application/pdf", b"%PDF")
        .build(Method::POST, "/api/slider/upload", Some(&cookie));
    let resp = app.router.clone().oneshot(pdf).await.unwrap();
    support::assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;

    assert!(app.storage.objects().is_empty());
}

#[tokio::test]
async fn e2e_slider_add_hosted_image() {
    let app = TestApp::new();
    let cookie = admin_cookie();

    let payload = json!({"imagen_url": "https://cdn.test/hero.jpg", "alt_text": "Hero"});
    let resp = app
        .router
        .clone()
        .oneshot(json_request(Method::POST, "/api/slider", &payload, Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = read_json(resp).await;
    assert_eq!(body["imagen"]["orden"], 0);
    assert_eq!(body["imagen"]["alt_text"], "Hero");

    let blank = json!({"imagen_url": "   "});
    let resp = app
        .router
        .clone()
        .oneshot(json_request(Method::POST, "/api/slider", &blank, Some(&cookie)))
        .await
        .unwrap();
    support::assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
}

#[tokio::test]
async fn e2e_slider_reorder_uses_list_positions() {
    let app = TestApp::new();
    let a = slide(0, "https://cdn.test/a.jpg");
    let b = slide(1, "https://cdn.test/b.jpg");
    let c = slide(2, "https://cdn.test/c.jpg");
    for image in [&a, &b, &c] {
        app.slider.seed(image.clone());
    }
    let cookie = admin_cookie();

    let payload = json!({"ids": [c.id.0, a.id.0, b.id.0]});
    let resp = app
        .router
        .clone()
        .oneshot(json_request(Method::PUT, "/api/slider/reorder", &payload, Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        read_json(resp).await["message"],
        "Orden de imágenes actualizado exitosamente"
    );

    let resp = app
        .router
        .clone()
        .oneshot(empty_request(Method::GET, "/api/slider", None))
        .await
        .unwrap();
    let body = read_json(resp).await;
    let urls: Vec<&str> = body["imagenes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["imagen_url"].as_str().unwrap())
        .collect();
    assert_eq!(
        urls,
        ["https://cdn.test/c.jpg", "https://cdn.test/a.jpg", "https://cdn.test/b.jpg"]
    );

    let empty = json!({"ids": []});
    let resp = app
        .router
        .clone()
        .oneshot(json_request(Method::PUT, "/api/slider/reorder", &empty, Some(&cookie)))
        .await
        .unwrap();
    support::assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
}

#[tokio::test]
async fn e2e_slider_delete_keeps_stored_object() {
    let app = TestApp::new();
    let image = slide(0, "https://cdn.test/a.jpg");
    app.slider.seed(image.clone());
    let cookie = admin_cookie();

    let uri = format!("/api/slider?id={}", image.id.0);
    let resp = app
        .router
        .clone()
        .oneshot(empty_request(Method::DELETE, &uri, Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        read_json(resp).await["message"],
        "Imagen del slider eliminada exitosamente"
    );
    assert!(app.slider.all().is_empty());
    assert!(app.storage.removed().is_empty());

    let resp = app
        .router
        .clone()
        .oneshot(empty_request(Method::DELETE, &uri, Some(&cookie)))
        .await
        .unwrap();
    support::assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
}

#[tokio::test]
async fn e2e_slider_writes_require_admin_session() {
    let app = TestApp::new();
    let payload = json!({"imagen_url": "https://cdn.test/hero.jpg"});
    let resp = app
        .router
        .clone()
        .oneshot(json_request(Method::POST, "/api/slider", &payload, None))
        .await
        .unwrap();
    support::assert_error_response(resp, StatusCode::UNAUTHORIZED, "Unauthorized").await;
    assert!(app.slider.all().is_empty());
}
