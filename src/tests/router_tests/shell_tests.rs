// src/tests/router_tests/shell_tests.rs

use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::*;
use base64::{engine::general_purpose::STANDARD, Engine as _};

const RAW_SNAPSHOT: &str = ",Details,Area,Address,Price,ImageLink\n\
0,Appartement,120,Mermoz,400000,https://img.example/a.jpg\n\
1,Studio,35,Plateau,150000,https://img.example/b.jpg\n";

const CLEAN_SNAPSHOT: &str = "Details,Area,Address,Price\n\
Appartement,Almadies,Dakar,250000\n\
Appartement,Ngor,Dakar,300000\n\
Studio,Almadies,Dakar,150000\n";

#[test]
fn home_page_lists_selectors() {
    let app = test_app(StaticFetcher::new(), temp_snapshot_dir("home"));

    let resp = handle(get("/"), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = read_body(resp);
    assert!(body.contains("Select Category"));
    assert!(body.contains(r#"<option value="124">124</option>"#));
    assert!(!body.contains(r#"<option value="125">"#));
}

#[test]
fn home_page_resets_page_outside_new_category() {
    let app = test_app(StaticFetcher::new(), temp_snapshot_dir("home_reset"));

    let resp = handle(get("/?category=land-for-sale&page=100"), &app).expect("Handler failed");
    let body = read_body(resp);

    assert!(body.contains(r#"<option value="1" selected>1</option>"#));
    assert!(body.contains(r#"<option value="50">50</option>"#));
    assert!(!body.contains(r#"<option value="51">"#));
}

#[test]
fn scrape_renders_table_and_csv_link() {
    let app = test_app(two_card_site(), temp_snapshot_dir("scrape"));

    let resp = handle(get("/run?category=rental-apartment&page=1&action=scrape"), &app)
        .expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = read_body(resp);
    assert!(body.contains("Rental Apartment"));
    assert!(body.contains("1 rows, 5 columns"));
    assert!(body.contains("<td>250000</td>"));
    assert!(body.contains(r#"download="Rental_Apartment.csv""#));

    let csv = STANDARD.encode(
        ",Details,Area,Address,Price,ImageLink\n\
         0,Appartement,75,Dakar,250000,https://www.expat-dakar.com/img/img1.jpg\n",
    );
    assert!(body.contains(&format!("data:text/csv;charset=utf-8;base64,{csv}")));
}

#[test]
fn scrape_with_no_listings_is_an_empty_table() {
    let site = StaticFetcher::new().page(RENTAL_PAGE_1, index_page(&[]));
    let app = test_app(site, temp_snapshot_dir("scrape_empty"));

    let resp = handle(get("/run?action=scrape"), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert!(read_body(resp).contains("0 rows, 5 columns"));
}

#[test]
fn scrape_fails_when_index_page_is_unreachable() {
    let app = test_app(StaticFetcher::new(), temp_snapshot_dir("scrape_down"));

    let result = handle(get("/run?action=scrape&page=2"), &app);
    assert!(matches!(result, Err(ServerError::Scrape(_))));
}

#[test]
fn page_beyond_last_page_is_rejected() {
    let app = test_app(StaticFetcher::new(), temp_snapshot_dir("bad_page"));

    let result = handle(get("/run?category=furnished-apartments&page=80"), &app);
    assert!(matches!(result, Err(ServerError::BadRequest(_))));
}

#[test]
fn download_saved_renders_raw_snapshot() {
    let dir = temp_snapshot_dir("download");
    write_snapshot(&dir, "Apartment_1.csv", RAW_SNAPSHOT);
    let site = StaticFetcher::new();
    let app = test_app(site.clone(), dir);

    let resp = handle(get("/run?category=rental-apartment&action=download"), &app)
        .expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = read_body(resp);
    assert!(body.contains("2 rows, 5 columns"));
    assert!(body.contains("<td>Mermoz</td>"));
    assert!(body.contains("Download data as CSV"));
    // saved data never touches the network
    assert!(site.requests().is_empty());
}

#[test]
fn download_saved_without_file_shows_not_found() {
    let app = test_app(StaticFetcher::new(), temp_snapshot_dir("download_missing"));

    let resp = handle(get("/run?category=land-for-sale&action=download"), &app)
        .expect("Handler failed");
    assert_eq!(resp.status(), 404);
    assert!(read_body(resp).contains("Data for Land For Sale not found!"));
}

#[test]
fn dashboard_draws_both_charts() {
    let dir = temp_snapshot_dir("dashboard");
    write_snapshot(&dir, "Url2.csv", CLEAN_SNAPSHOT);
    let app = test_app(StaticFetcher::new(), dir);

    let resp = handle(get("/run?category=furnished-apartments&action=dashboard"), &app)
        .expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = read_body(resp);
    assert!(body.contains("Dashboard for Furnished Apartments"));
    assert!(body.contains("Price Distribution for Furnished Apartments"));
    assert!(body.contains("Top Areas for Furnished Apartments"));
    assert_eq!(body.matches("<svg").count(), 2);
    assert!(body.contains("Almadies 66.7%"));
}

#[test]
fn dashboard_without_area_column_shows_not_found() {
    let dir = temp_snapshot_dir("dashboard_cols");
    write_snapshot(&dir, "Url1.csv", "Price\n100\n");
    let app = test_app(StaticFetcher::new(), dir);

    let resp = handle(get("/run?action=dashboard"), &app).expect("Handler failed");
    assert_eq!(resp.status(), 404);
    assert!(read_body(resp).contains("no Area column"));
}

#[test]
fn form_action_embeds_the_external_form() {
    let app = test_app(StaticFetcher::new(), temp_snapshot_dir("form"));

    let resp = handle(get("/run?action=form"), &app).expect("Handler failed");
    let body = read_body(resp);

    assert!(body.contains("Please fill the Form Below"));
    assert!(body.contains(r#"<iframe src="https://ee.kobotoolbox.org/x/lgUh1tWb" width="800" height="1100""#));
}

#[test]
fn unknown_route_is_not_found() {
    let app = test_app(StaticFetcher::new(), temp_snapshot_dir("404"));
    assert!(matches!(handle(get("/admin"), &app), Err(ServerError::NotFound)));
}

#[test]
fn stylesheet_is_served() {
    let app = test_app(StaticFetcher::new(), temp_snapshot_dir("css"));

    let resp = handle(get("/static/app.css"), &app).expect("Handler failed");
    assert_eq!(resp.headers()["Content-Type"], "text/css; charset=utf-8");
    assert!(read_body(resp).contains("linear-gradient"));
}
