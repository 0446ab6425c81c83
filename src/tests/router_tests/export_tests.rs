// src/tests/router_tests/export_tests.rs

use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::*;

const RAW_SNAPSHOT: &str = ",Details,Area,Address,Price,ImageLink\n\
0,Terrain,300,Saly,15000000,https://img.example/t.jpg\n";

#[test]
fn raw_snapshot_downloads_as_csv() {
    let dir = temp_snapshot_dir("export_csv");
    write_snapshot(&dir, "Apartment_3.csv", RAW_SNAPSHOT);
    let app = test_app(StaticFetcher::new(), dir);

    let resp = handle(get("/export?category=land-for-sale"), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers()["Content-Type"], "text/csv; charset=utf-8");
    assert_eq!(
        resp.headers()["Content-Disposition"],
        r#"attachment; filename="Land_For_Sale.csv""#
    );

    // re-exported with a fresh index column, otherwise unchanged
    assert_eq!(read_body(resp), RAW_SNAPSHOT);
}

#[test]
fn clean_snapshot_downloads_as_xlsx() {
    let dir = temp_snapshot_dir("export_xlsx");
    write_snapshot(&dir, "Url1.csv", "Price,Area\n250000,Almadies\n");
    let app = test_app(StaticFetcher::new(), dir);

    let resp = handle(get("/export?source=clean&format=xlsx"), &app).expect("Handler failed");
    assert_eq!(
        resp.headers()["Content-Disposition"],
        r#"attachment; filename="Rental_Apartment_clean.xlsx""#
    );
    assert_eq!(&read_bytes(resp)[..2], b"PK");
}

#[test]
fn missing_snapshot_export_is_an_error() {
    let app = test_app(StaticFetcher::new(), temp_snapshot_dir("export_missing"));

    let result = handle(get("/export?category=furnished-apartments"), &app);
    assert!(matches!(result, Err(ServerError::SnapshotMissing(_))));
}

#[test]
fn unknown_export_format_is_rejected() {
    let dir = temp_snapshot_dir("export_format");
    write_snapshot(&dir, "Apartment_1.csv", RAW_SNAPSHOT);
    let app = test_app(StaticFetcher::new(), dir);

    let result = handle(get("/export?format=parquet"), &app);
    assert!(matches!(result, Err(ServerError::BadRequest(_))));
}

#[test]
fn api_returns_batch_as_json() {
    let app = test_app(two_card_site(), temp_snapshot_dir("api"));

    let resp = handle(get("/api/listings?category=rental-apartment&page=1"), &app)
        .expect("Handler failed");
    assert_eq!(resp.headers()["Content-Type"], "application/json");

    let json: serde_json::Value = serde_json::from_str(&read_body(resp)).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{
            "Details": "Appartement",
            "Area": "75",
            "Address": "Dakar",
            "Price": "250000",
            "ImageLink": "https://www.expat-dakar.com/img/img1.jpg"
        }])
    );
}
