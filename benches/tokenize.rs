//! Benchmarks for document segmentation
//!
//! Tokenizing runs on every document open and text change, and the segment
//! lookup runs on every pointer event during a drag.
//!
//! Run with: cargo bench tokenize

use lectio::util::text::{segment_at, tokenize, trimmed_span};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

const VERSE: &str = "Taste and see that the LORD is good; blessed is the one who takes refuge in him. ";

fn make_text(verses: usize) -> String {
    VERSE.repeat(verses)
}

#[divan::bench(args = [10, 100, 1_000])]
fn tokenize_ascii(bencher: divan::Bencher, verses: usize) {
    let text = make_text(verses);
    bencher.bench(|| divan::black_box(tokenize(divan::black_box(&text))));
}

#[divan::bench(args = [10, 100, 1_000])]
fn tokenize_multilingual(bencher: divan::Bencher, verses: usize) {
    let text = "Gustad, y ved que es bueno Jehová; 主是美善的 — γεύσασθε καὶ ἴδετε. ".repeat(verses);
    bencher.bench(|| divan::black_box(tokenize(divan::black_box(&text))));
}

#[divan::bench(args = [100, 1_000, 10_000])]
fn segment_lookup(bencher: divan::Bencher, verses: usize) {
    let text = make_text(verses);
    let segments = tokenize(&text);
    let offset = text.chars().count() / 2;
    bencher.bench(|| divan::black_box(segment_at(&segments, divan::black_box(offset))));
}

#[divan::bench(args = [100, 1_000])]
fn trim_long_span(bencher: divan::Bencher, verses: usize) {
    let text = format!("   {}   ", make_text(verses));
    let len = text.chars().count();
    bencher.bench(|| divan::black_box(trimmed_span(&text, 0, len)));
}
