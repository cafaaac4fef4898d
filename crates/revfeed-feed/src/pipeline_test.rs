use super::*;

const GENERATED_AT: i64 = 1_760_000_000;

fn review_xml(rating_id: &str, ts: i64, rating: &str, pros: &str) -> String {
    format!(
        "<review>\
           <rating_id>{rating_id}</rating_id>\
           <rating_id_type>offer</rating_id_type>\
           <unix_timestamp>{ts}</unix_timestamp>\
           <rating>{rating}</rating>\
           <pros>{pros}</pros>\
           <cons>Žádné</cons>\
           <summary>Spokojenost</summary>\
           <recommends>1</recommends>\
         </review>"
    )
}

fn product_xml(ean: &str, reviews: &[String]) -> String {
    format!(
        "<product>\
           <product_name>Produkt {ean}</product_name>\
           <url>https://example.cz/{ean}</url>\
           <price>199,90</price>\
           <ean>{ean}</ean>\
           <reviews>{}</reviews>\
         </product>",
        reviews.concat()
    )
}

fn products_feed(products: &[String]) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?><products>{}</products>",
        products.concat()
    )
}

#[test]
fn duplicate_within_product_is_skipped() {
    let xml = products_feed(&[product_xml(
        "A",
        &[
            review_xml("1", 100, "5", "Dobré"),
            review_xml("2", 100, "5", "Dobré"),
        ],
    )]);

    let payload = build_product_payload(&xml, GENERATED_AT).unwrap();

    assert_eq!(payload.products[0].reviews_count, 1);
    assert_eq!(payload.stats.duplicates_within_product_skipped, 1);
    assert_eq!(payload.stats.reviews_raw_count, 2);
    assert_eq!(payload.stats.reviews_saved_count, 1);
}

#[test]
fn duplicate_across_products_is_reported_not_removed() {
    let xml = products_feed(&[
        product_xml("A", &[review_xml("1", 100, "5", "Dobré")]),
        product_xml("B", &[review_xml("2", 100, "5", "Dobré")]),
    ]);

    let payload = build_product_payload(&xml, GENERATED_AT).unwrap();

    assert_eq!(payload.stats.products_count, 2);
    assert_eq!(payload.stats.reviews_saved_count, 2);
    assert_eq!(payload.stats.duplicates_within_product_skipped, 0);
    assert_eq!(payload.stats.cross_product_duplicates_count, 1);

    let owners = payload.cross_product_duplicates.values().next().unwrap();
    let eans: Vec<&str> = owners.iter().map(|o| o.ean.as_str()).collect();
    assert_eq!(eans, ["A", "B"]);
}

#[test]
fn missing_rating_is_kept_as_absent() {
    let xml = "<products><product><ean>A</ean><reviews><review>\
               <rating_id>1</rating_id><unix_timestamp>100</unix_timestamp>\
               <pros>Fajn</pros></review></reviews></product></products>";

    let payload = build_product_payload(xml, GENERATED_AT).unwrap();

    assert_eq!(payload.stats.reviews_saved_count, 1);
    assert_eq!(payload.products[0].reviews[0].rating, None);
}

#[test]
fn malformed_rating_is_kept_as_absent() {
    let xml = products_feed(&[product_xml("A", &[review_xml("1", 100, "hvězda", "Fajn")])]);

    let payload = build_product_payload(&xml, GENERATED_AT).unwrap();

    assert_eq!(payload.stats.reviews_saved_count, 1);
    assert_eq!(payload.products[0].reviews[0].rating, None);
}

#[test]
fn empty_product_feed_produces_zero_stats() {
    let payload = build_product_payload("<products></products>", GENERATED_AT).unwrap();

    assert_eq!(payload.generated_at, GENERATED_AT);
    assert_eq!(payload.stats, ProductStats::default());
    assert!(payload.products.is_empty());
    assert!(payload.cross_product_duplicates.is_empty());
}

#[test]
fn empty_order_feed_produces_zero_count() {
    let payload = build_order_payload("<reviews/>", GENERATED_AT).unwrap();
    assert_eq!(payload.count, 0);
    assert!(payload.reviews.is_empty());
}

#[test]
fn products_ordered_by_latest_activity() {
    let xml = products_feed(&[
        product_xml("old", &[review_xml("1", 100, "5", "a")]),
        product_xml("quiet", &[]),
        product_xml(
            "busy",
            &[
                review_xml("2", 50, "4", "b"),
                review_xml("3", 900, "3", "c"),
            ],
        ),
    ]);

    let payload = build_product_payload(&xml, GENERATED_AT).unwrap();

    let eans: Vec<&str> = payload.products.iter().map(|p| p.ean.as_str()).collect();
    assert_eq!(eans, ["busy", "old", "quiet"]);
    assert_eq!(payload.products[0].reviews[0].rating_id, "3");
}

#[test]
fn order_reviews_ordered_newest_first() {
    let xml = "<reviews>\
               <review><rating_id>a</rating_id><unix_timestamp>10</unix_timestamp></review>\
               <review><rating_id>b</rating_id><unix_timestamp>30</unix_timestamp></review>\
               <review><rating_id>c</rating_id><unix_timestamp>20</unix_timestamp></review>\
               </reviews>";

    let payload = build_order_payload(xml, GENERATED_AT).unwrap();

    let ids: Vec<&str> = payload.reviews.iter().map(|r| r.rating_id.as_str()).collect();
    assert_eq!(ids, ["b", "c", "a"]);
    assert_eq!(payload.count, 3);
}

#[test]
fn malformed_document_aborts_product_run() {
    let result = build_product_payload("<products><product></products>", GENERATED_AT);
    assert!(result.is_err(), "expected error, got: {result:?}");
}

#[test]
fn product_payload_survives_json_round_trip() {
    let xml = products_feed(&[
        product_xml(
            "A",
            &[
                review_xml("1", 100, "5", "Dobré"),
                review_xml("2", 100, "5", "Dobré"),
                review_xml("3", 200, "4,5", "Lepší"),
            ],
        ),
        product_xml("B", &[review_xml("4", 100, "5", "Dobré")]),
    ]);
    let payload = build_product_payload(&xml, GENERATED_AT).unwrap();

    let json = serde_json::to_string_pretty(&payload).unwrap();
    let parsed: ProductReviewsPayload = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.stats, payload.stats);
    assert_eq!(parsed.products.len(), payload.products.len());
    assert_eq!(parsed, payload);
}

#[test]
fn product_json_uses_documented_keys() {
    let xml = products_feed(&[product_xml("A", &[review_xml("1", 100, "5", "Dobré")])]);
    let payload = build_product_payload(&xml, GENERATED_AT).unwrap();

    let value = serde_json::to_value(&payload).unwrap();
    assert_eq!(value["generated_at"], GENERATED_AT);
    assert_eq!(value["stats"]["products_count"], 1);
    assert_eq!(value["stats"]["reviews_raw_count"], 1);
    assert_eq!(value["stats"]["reviews_saved_count"], 1);
    assert_eq!(value["stats"]["duplicates_within_product_skipped"], 0);
    assert_eq!(value["stats"]["cross_product_duplicates_count"], 0);
    assert!(value["cross_product_duplicates"].is_object());
    assert_eq!(value["products"][0]["reviews_count"], 1);
    assert_eq!(value["products"][0]["price"], 199.9);
    assert_eq!(value["products"][0]["reviews"][0]["rating_id_type"], "offer");
    assert!(value["products"][0]["reviews"][0]["fingerprint"].is_string());
}

#[test]
fn order_payload_survives_json_round_trip() {
    let xml = "<reviews><review><rating_id>1</rating_id><total_rating>4,5</total_rating>\
               <pros>Příjemná komunikace</pros></review></reviews>";
    let payload = build_order_payload(xml, GENERATED_AT).unwrap();

    let json = serde_json::to_string(&payload).unwrap();
    assert!(json.contains("Příjemná komunikace"));

    let parsed: OrderReviewsPayload = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.count, 1);
    assert_eq!(parsed, payload);
}

#[test]
fn summary_lines_report_counters() {
    let xml = products_feed(&[product_xml(
        "A",
        &[
            review_xml("1", 100, "5", "Dobré"),
            review_xml("2", 100, "5", "Dobré"),
        ],
    )]);
    let payload = build_product_payload(&xml, GENERATED_AT).unwrap();
    assert_eq!(
        payload.summary(),
        "1 products / 1 reviews (raw 2, skipped 1 duplicates, 0 cross-product fingerprints)"
    );

    let orders = build_order_payload("<reviews><review/></reviews>", GENERATED_AT).unwrap();
    assert_eq!(orders.summary(), "1 reviews");
}
