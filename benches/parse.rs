#![feature(test)]
#![deny(warnings)]

extern crate test;

use http_accept_language::{first_prefix_match, parse, Preferences};

const HEADER: &str = "nl-NL, nl-BE;q=0.9, nl;q=0.8, en-US;q=0.6, en-GB;q=0.6, en;q=0.5, fr;q=0.1";
const SUPPORTED: &[&str] = &["de-DE", "en-GB", "en-US", "fr-FR", "nl-BE"];

#[bench]
fn parse_header(b: &mut test::Bencher) {
    b.bytes = HEADER.len() as u64;
    b.iter(|| parse(test::black_box(HEADER)).unwrap());
}

#[bench]
fn parse_and_match(b: &mut test::Bencher) {
    b.iter(|| {
        let prefs = Preferences::new(Some(test::black_box(HEADER)));
        prefs.compatible_language_from(SUPPORTED).copied()
    });
}

#[bench]
fn prefix_match(b: &mut test::Bencher) {
    let languages = parse(HEADER).unwrap();
    b.iter(|| first_prefix_match(&languages, test::black_box(SUPPORTED)));
}
