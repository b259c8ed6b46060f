use axum::http::{Method, StatusCode};
use serde_json::json;
use tower::util::ServiceExt as _;

mod support;

use support::{MultipartBuilder, TestApp, admin_cookie, empty_request, json_request, read_json};

fn applicant(edad: &str) -> MultipartBuilder {
    MultipartBuilder::new()
        .text("nombreCompleto", "Martina")
        .text("apellido", "López")
        .text("edad", edad)
        .text("fechaNacimiento", "2001-05-04")
        .text("email", "martina@example.com")
        .text("whatsapp", "+54 9 11 5555 5555")
        .text("nacionalidad", "Argentina")
        .text("altura", "1.68")
        .text("canta", "Sí")
}

#[tokio::test]
async fn e2e_contact_form_is_stored() {
    let app = TestApp::new();
    let payload = json!({
        "nombre": " Ana ",
        "apellido": "Gómez",
        "email": "ana@example.com",
        "mensaje": "Quisiera representar a mi hija"
    });

    let resp = app
        .router
        .clone()
        .oneshot(json_request(Method::POST, "/api/contacto", &payload, None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = read_json(resp).await;
    assert_eq!(body["message"], "Mensaje enviado exitosamente");
    assert_eq!(body["data"]["nombre"], "Ana");
    assert_eq!(body["data"]["created_at"], "2024-01-01T00:00:00Z");
    assert_eq!(app.contacts.all().len(), 1);
}

#[tokio::test]
async fn e2e_contact_form_reports_field_errors() {
    let app = TestApp::new();
    let payload = json!({
        "nombre": "A",
        "apellido": "Gómez",
        "email": "no-es-email",
        "mensaje": "corto"
    });

    let resp = app
        .router
        .clone()
        .oneshot(json_request(Method::POST, "/api/contacto", &payload, None))
        .await
        .unwrap();
    let body = support::assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
    let details = body["details"].as_object().expect("field details");
    assert!(details.contains_key("nombre"));
    assert!(details.contains_key("email"));
    assert!(details.contains_key("mensaje"));
    assert!(!details.contains_key("apellido"));
    assert!(app.contacts.all().is_empty());
}

#[tokio::test]
async fn e2e_material_from_adult_with_cv_and_photos() {
    let app = TestApp::new();
    let req = applicant("22")
        .text("reelUrl", "https://vimeo.com/123")
        .text("campoDesconocido", "ignorado")
        .file("cvPdf", "cv.pdf", "application/pdf", b"%PDF-1.4 fake")
        .png("imagenes", "perfil.png")
        .png("imagenes", "cuerpo.png")
        .build(Method::POST, "/api/envia-material", None);

    let resp = app.router.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = read_json(resp).await;
    assert_eq!(body["message"], "Formulario enviado exitosamente");

    let data = &body["data"];
    assert_eq!(data["nombre_completo"], "Martina");
    assert_eq!(data["edad"], 22);
    assert_eq!(data["canta"], "Sí");
    assert_eq!(data["instagram"], serde_json::Value::Null);
    assert_eq!(data["reel_url"], "https://vimeo.com/123");

    let objects = app.storage.objects();
    assert_eq!(objects.len(), 3);
    assert_eq!(objects[0].bucket, "cv-pdfs");
    assert_eq!(objects[0].content_type, "application/pdf");
    assert_eq!(data["cv_pdf_url"], json!(objects[0].url));
    assert_eq!(
        data["imagenes_urls"],
        json!([objects[1].url.clone(), objects[2].url.clone()])
    );
    assert!(objects[1..].iter().all(|o| o.bucket == "material-imagenes"));
    assert_eq!(app.materials.all().len(), 1);
}

#[tokio::test]
async fn e2e_material_from_minor_requires_responsible_adult() {
    let app = TestApp::new();

    let resp = app
        .router
        .clone()
        .oneshot(applicant("15").build(Method::POST, "/api/envia-material", None))
        .await
        .unwrap();
    let body = support::assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
    assert!(body["details"]["nombre_adulto_responsable"].is_array());
    assert!(app.materials.all().is_empty());

    let with_adult = applicant("15")
        .text("nombreAdultoResponsable", "Laura López")
        .build(Method::POST, "/api/envia-material", None);
    let resp = app.router.clone().oneshot(with_adult).await.unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(read_json(resp).await["data"]["nombre_adulto_responsable"], "Laura López");
}

#[tokio::test]
async fn e2e_material_rejects_bad_files_without_storing() {
    let app = TestApp::new();

    let word_cv = applicant("30")
        .file("cvPdf", "cv.docx", "application/msword", b"not a pdf")
        .build(Method::POST, "/api/envia-material", None);
    let resp = app.router.clone().oneshot(word_cv).await.unwrap();
    support::assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;

    let mut too_many = applicant("30");
    for n in 0..11 {
        too_many = too_many.png("imagenes", &format!("foto{n}.png"));
    }
    let resp = app
        .router
        .clone()
        .oneshot(too_many.build(Method::POST, "/api/envia-material", None))
        .await
        .unwrap();
    support::assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;

    assert!(app.storage.objects().is_empty());
    assert!(app.materials.all().is_empty());
}

#[tokio::test]
async fn e2e_upload_cv_stores_pdf() {
    let app = TestApp::new();

    let req = MultipartBuilder::new()
        .file("file", "cv.pdf", "application/pdf", b"%PDF-1.4 fake")
        .build(Method::POST, "/api/upload-cv", None);
    let resp = app.router.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    assert_eq!(body["message"], "Archivo subido exitosamente");
    let stored = &app.storage.objects()[0];
    assert_eq!(body["url"], json!(stored.url));
    assert!(stored.path.starts_with(&format!(
        "cv-pdfs/{}_",
        support::fixed_now().timestamp_millis()
    )));

    let missing = MultipartBuilder::new()
        .text("otro", "x")
        .build(Method::POST, "/api/upload-cv", None);
    let resp = app.router.clone().oneshot(missing).await.unwrap();
    let body = support::assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
    assert_eq!(body["message"], "No se proporcionó ningún archivo");

    let image = MultipartBuilder::new()
        .png("file", "cv.png")
        .build(Method::POST, "/api/upload-cv", None);
    let resp = app.router.clone().oneshot(image).await.unwrap();
    support::assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
}

#[tokio::test]
async fn e2e_admin_inbox_lists_and_deletes() {
    let app = TestApp::new();
    let cookie = admin_cookie();
    let payload = json!({
        "nombre": "Ana",
        "apellido": "Gómez",
        "email": "ana@example.com",
        "mensaje": "Quisiera más información"
    });
    app.router
        .clone()
        .oneshot(json_request(Method::POST, "/api/contacto", &payload, None))
        .await
        .unwrap();

    let resp = app
        .router
        .clone()
        .oneshot(empty_request(Method::GET, "/api/contactos", None))
        .await
        .unwrap();
    support::assert_error_response(resp, StatusCode::UNAUTHORIZED, "Unauthorized").await;

    let resp = app
        .router
        .clone()
        .oneshot(empty_request(Method::GET, "/api/propuestas", Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    let id = body["propuestas"][0]["id"].as_str().unwrap().to_owned();

    let resp = app
        .router
        .clone()
        .oneshot(empty_request(Method::DELETE, "/api/contactos", Some(&cookie)))
        .await
        .unwrap();
    support::assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;

    let resp = app
        .router
        .clone()
        .oneshot(empty_request(Method::DELETE, "/api/contactos?id=nope", Some(&cookie)))
        .await
        .unwrap();
    support::assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;

    let resp = app
        .router
        .clone()
        .oneshot(empty_request(
            Method::DELETE,
            &format!("/api/propuestas?id={id}"),
            Some(&cookie),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await["message"], "Propuesta eliminada exitosamente");
    assert!(app.contacts.all().is_empty());

    let resp = app
        .router
        .clone()
        .oneshot(empty_request(
            Method::DELETE,
            &format!("/api/contactos?id={id}"),
            Some(&cookie),
        ))
        .await
        .unwrap();
    support::assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
}

#[tokio::test]
async fn e2e_admin_material_list_and_delete() {
    let app = TestApp::new();
    let cookie = admin_cookie();
    app.router
        .clone()
        .oneshot(applicant("25").build(Method::POST, "/api/envia-material", None))
        .await
        .unwrap();

    let resp = app
        .router
        .clone()
        .oneshot(empty_request(Method::GET, "/api/material", Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    let materiales = body["materiales"].as_array().unwrap();
    assert_eq!(materiales.len(), 1);
    let id = materiales[0]["id"].as_str().unwrap().to_owned();

    let resp = app
        .router
        .clone()
        .oneshot(empty_request(
            Method::DELETE,
            &format!("/api/material?id={id}"),
            Some(&cookie),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await["message"], "Material eliminado exitosamente");
    assert!(app.materials.all().is_empty());
}
