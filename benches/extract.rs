// benches/extract.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use preisschild::specs::ofen;
use scraper::Html;

// Synthetic but realistically sized product page: the probe chains run
// over the whole document text for the regex fallbacks, so padding
// matters for a honest number.
fn sample_page() -> String {
    let mut html = String::from(
        r#"<html><body>
        <h1 class="product--title">La Nordica Extraflame Klaudia Plus 5.0</h1>
        <span class="price--content">899,00 € *</span>
        <span class="price--line-through">1.249,00 €</span>
        <p>Lieferzeit ca. 5-7 Werktage</p>
        <span class="image--media"><img src="/media/image/klaudia.jpg"></span>
        <p>EAN 4008842123456</p>"#,
    );
    for i in 0..400 {
        html.push_str(&format!(
            "<div class=\"filler\"><a href=\"/p/{i}\">Zubehör Artikel {i}</a><span>ab 19,90 €</span></div>\n"
        ));
    }
    html.push_str("</body></html>");
    html
}

fn bench_extract(c: &mut Criterion) {
    let page = sample_page();

    c.bench_function("ofen_parse_and_extract", |b| {
        b.iter(|| {
            let doc = Html::parse_document(black_box(&page));
            black_box(ofen::extract(&doc))
        })
    });

    let doc = Html::parse_document(&page);
    c.bench_function("ofen_extract_only", |b| {
        b.iter(|| black_box(ofen::extract(black_box(&doc))))
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
