#![feature(test)]
extern crate html2doc;
extern crate test;

use ::test::Bencher;

use html2doc::{from_str, EventCollector};

fn make_html(content: &str) -> String {
    String::from("<html>") + content + "</html>"
}

fn make_tab(cell: &str, rows: usize, cols: usize) -> String {
    let mut result = String::from("<table>");
    for _ in 0..rows {
        result.push_str("<tr>");
        for _ in 0..cols {
            result.push_str("<td style=\"text-align: center; color: #336699\">");
            result.push_str(cell);
            result.push_str("</td>");
        }
        result.push_str("</tr>");
    }
    result.push_str("</table>");
    result
}

fn make_list(items: usize) -> String {
    let mut result = String::from("<ul>\n");
    for i in 0..items {
        result.push_str(&format!(
            "  <li><b>{}</b> <a href=\"#item{}\">item</a></li>\n",
            i, i
        ));
    }
    result.push_str("</ul>");
    result
}

#[bench]
fn bench_empty(b: &mut Bencher) {
    let html = make_html("");
    b.iter(|| from_str(&html, EventCollector::new()).unwrap());
}

#[bench]
fn bench_tab_10_10(b: &mut Bencher) {
    let html = make_html(&make_tab("cell", 10, 10));
    b.iter(|| from_str(&html, EventCollector::new()).unwrap());
}

#[bench]
fn bench_tab_100_10(b: &mut Bencher) {
    let html = make_html(&make_tab("cell", 100, 10));
    b.iter(|| from_str(&html, EventCollector::new()).unwrap());
}

#[bench]
fn bench_list_1000(b: &mut Bencher) {
    let html = make_html(&make_list(1000));
    b.iter(|| from_str(&html, EventCollector::new()).unwrap());
}
