mod common;

use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

fn sample_supplier() -> serde_json::Value {
    json!({
        "supplierID": 1,
        "name": "Muhnis",
        "contactInfo": 8943505858i64,
        "productsSupplied": "TV",
        "quantity": 3,
        "date": "2023-05-10T10:00:00"
    })
}

async fn add(app: &TestApp, supplier: &serde_json::Value) -> reqwest::Response {
    app.post("/api/supplier/add")
        .json(supplier)
        .send()
        .await
        .expect("Failed to execute request")
}

#[tokio::test]
async fn test_add_supplier_success() {
    let app = TestApp::spawn().await;

    let response = add(&app, &sample_supplier()).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), "Supplier info saved");
}

#[tokio::test]
async fn test_add_then_get_by_id_returns_exact_record() {
    let app = TestApp::spawn().await;
    add(&app, &sample_supplier()).await;

    let response = app
        .get("/api/supplier/supplierInfoById/1")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, sample_supplier());
}

#[tokio::test]
async fn test_save_with_existing_id_overwrites() {
    let app = TestApp::spawn().await;
    add(&app, &sample_supplier()).await;

    let replacement = json!({
        "supplierID": 1,
        "name": "Aisha",
        "contactInfo": 9123456780i64,
        "productsSupplied": "Fridge",
        "quantity": 5,
        "date": "2023-06-15T11:30:00"
    });
    add(&app, &replacement).await;

    let body: serde_json::Value = app
        .get("/api/supplier/supplierInfoById/1")
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse response");

    assert_eq!(body, replacement);

    // Still a single record.
    let all: serde_json::Value = app
        .get("/api/supplier/viewAllSupplier")
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(all.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_get_by_id_not_found() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/supplier/supplierInfoById/99")
        .send()
        .await
        .expect("Failed to execute request");

    // Not-found is reported as 406 by this service, not 404.
    assert_eq!(response.status(), StatusCode::NOT_ACCEPTABLE);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Supplier with this ID is not present");
}

#[tokio::test]
async fn test_view_all_on_empty_store() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/supplier/viewAllSupplier")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_name_validation() {
    let app = TestApp::spawn().await;

    let mut short = sample_supplier();
    short["name"] = json!("Ann");
    let response = add(&app, &short).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["name"], "Name must be between 5 and 20 character");
    assert!(body.get("timestamp").is_some());

    let mut long = sample_supplier();
    long["name"] = json!("A very long supplier name");
    assert_eq!(add(&app, &long).await.status(), StatusCode::BAD_REQUEST);

    let mut digits = sample_supplier();
    digits["name"] = json!("Muhnis77");
    let response = add(&app, &digits).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["name"], "Name must not contain numbers");

    // Nothing invalid was persisted.
    let all: serde_json::Value = app
        .get("/api/supplier/viewAllSupplier")
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(all, json!([]));
}

#[tokio::test]
async fn test_field_constraints() {
    let app = TestApp::spawn().await;

    let mut bad_id = sample_supplier();
    bad_id["supplierID"] = json!(0);
    let response = add(&app, &bad_id).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["supplierID"], "ID must be greater than or equal to 1");

    let mut bad_contact = sample_supplier();
    bad_contact["contactInfo"] = json!(12345);
    let response = add(&app, &bad_contact).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["contactInfo"], "Contact number must be 10 digits");

    let mut bad_quantity = sample_supplier();
    bad_quantity["quantity"] = json!(0);
    assert_eq!(add(&app, &bad_quantity).await.status(), StatusCode::BAD_REQUEST);

    let mut blank_products = sample_supplier();
    blank_products["productsSupplied"] = json!("  ");
    let response = add(&app, &blank_products).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["productsSupplied"], "Product supplied is mandatory field");
}

#[tokio::test]
async fn test_report_projects_matching_window() {
    let app = TestApp::spawn().await;
    add(&app, &sample_supplier()).await;
    add(
        &app,
        &json!({
            "supplierID": 2,
            "name": "Aisha",
            "contactInfo": 9123456780i64,
            "productsSupplied": "Fridge",
            "quantity": 5,
            "date": "2023-06-15T11:30:00"
        }),
    )
    .await;
    add(
        &app,
        &json!({
            "supplierID": 3,
            "name": "Peter",
            "contactInfo": 9876543210i64,
            "productsSupplied": "Radio",
            "quantity": 2,
            "date": "2022-03-01T09:00:00"
        }),
    )
    .await;

    let response = app
        .post("/api/supplier/supplierInfoByDateForReport")
        .json(&json!({
            "startDate": "2023-01-01T00:00:00",
            "endDate": "2023-12-31T23:59:00"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let mut entries: Vec<serde_json::Value> =
        response.json().await.expect("Failed to parse response");
    entries.sort_by_key(|e| e["name"].as_str().unwrap().to_string());

    assert_eq!(entries.len(), 2);
    assert_eq!(
        entries[0],
        json!({ "name": "Aisha", "productsSupplied": "Fridge", "date": "2023-06-15T11:30:00" })
    );
    assert_eq!(
        entries[1],
        json!({ "name": "Muhnis", "productsSupplied": "TV", "date": "2023-05-10T10:00:00" })
    );
}

#[tokio::test]
async fn test_report_on_empty_window() {
    let app = TestApp::spawn().await;
    add(&app, &sample_supplier()).await;

    let response = app
        .post("/api/supplier/supplierInfoByDateForReport")
        .json(&json!({
            "startDate": "2024-01-01T00:00:00",
            "endDate": "2024-12-31T23:59:00"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    // An empty window is surfaced as an error rather than an empty list.
    assert_eq!(response.status(), StatusCode::NOT_ACCEPTABLE);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(
        body["message"],
        "There is no supplier information during this period!!"
    );
}

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/health")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], true);
}
