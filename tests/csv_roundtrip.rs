// tests/csv_roundtrip.rs
//
// The written export must parse back to the same table.

use preisschild::csv::{parse_rows, to_export_string, Delim};
use preisschild::data::{ComparisonRow, ComparisonTable, Listing, COLUMNS};

fn sample_table() -> ComparisonTable {
    ComparisonTable {
        rows: vec![
            ComparisonRow {
                shop: s("Feuerdepot"),
                url: s("https://www.feuerdepot.de/x?number=1286850"),
                listing: Listing {
                    name: Some(s("Pelletofen Klaudia Plus 5.0, bordeaux")),
                    uvp: Some(s("1.249,00 €")),
                    preis: Some(s("949,00 €")),
                    lieferzeit: Some(s("Lieferzeit 5-7 Werktage")),
                    artikelnummer: Some(s("77231")),
                    ean: None,
                },
            },
            ComparisonRow {
                shop: s("Kamdi24"),
                url: s("https://www.kamdi24.de/x"),
                listing: Listing {
                    name: Some(s("Er sagte \"sofort lieferbar\"")),
                    preis: Some(s("929,00 €")),
                    ..Default::default()
                },
            },
            // shop that failed to scrape: empty row
            ComparisonRow {
                shop: s("Feuer-Fuchs"),
                url: s("https://www.feuer-fuchs.de/suche/?search=x"),
                listing: Listing::default(),
            },
        ],
    }
}

fn s(v: &str) -> String {
    v.to_string()
}

#[test]
fn csv_round_trip_preserves_rows_and_fields() {
    let table = sample_table();
    let rows = table.to_rows();

    let text = to_export_string(&Some(ComparisonTable::headers()), &rows, true, ',');
    let parsed = parse_rows(&text, ',');

    // header + one line per configured shop
    assert_eq!(parsed.len(), 1 + rows.len());
    assert_eq!(parsed[0], ComparisonTable::headers());
    for (orig, back) in rows.iter().zip(&parsed[1..]) {
        assert_eq!(orig, back);
    }
}

#[test]
fn quoted_fields_survive_commas_and_quotes() {
    let table = sample_table();
    let text = to_export_string(&None, &table.to_rows(), false, ',');
    let parsed = parse_rows(&text, ',');

    assert!(parsed[0][2].contains(", bordeaux"));
    assert!(parsed[1][2].contains("\"sofort lieferbar\""));
}

#[test]
fn tsv_round_trip() {
    let table = sample_table();
    let rows = table.to_rows();
    let text = to_export_string(&Some(ComparisonTable::headers()), &rows, true, Delim::Tsv.sep());
    let parsed = parse_rows(&text, '\t');
    assert_eq!(parsed.len(), 1 + rows.len());
    assert_eq!(parsed[1], rows[0]);
}

#[test]
fn column_order_is_fixed() {
    assert_eq!(
        COLUMNS,
        ["Shop", "URL", "Name", "UVP", "Preis", "Lieferzeit", "Artikelnummer", "EAN"]
    );

    // An empty listing still yields all eight cells, in order.
    let table = sample_table();
    let rows = table.to_rows();
    assert!(rows.iter().all(|r| r.len() == COLUMNS.len()));
    assert_eq!(rows[2][0], "Feuer-Fuchs");
    assert!(rows[2][2..].iter().all(|c| c.is_empty()));
}
