//! Benchmarks for book packaging.
//!
//! Run with: cargo bench

use criterion::{Criterion, criterion_group, criterion_main};

use bindery::{Book, Chapter, CoverRequest, Packager, SequenceGenerator};

fn sample_book(chapters: usize) -> Book {
    let mut book = Book::new("Benchmark Book").with_author("Bench Author");
    for i in 1..=chapters {
        book.add_chapter(Chapter::new(
            format!("Chapter {i}"),
            format!("<h1>Chapter {i}</h1><p>{}</p>", "lorem ipsum ".repeat(200)),
        ));
    }
    book
}

fn bench_pack_small(c: &mut Criterion) {
    let book = sample_book(10);
    c.bench_function("pack_10_chapters", |b| {
        b.iter(|| Packager::new().pack_to_vec(&book).unwrap());
    });
}

fn bench_pack_large(c: &mut Criterion) {
    let book = sample_book(200);
    c.bench_function("pack_200_chapters", |b| {
        b.iter(|| Packager::new().pack_to_vec(&book).unwrap());
    });
}

fn bench_pack_with_cover(c: &mut Criterion) {
    let book = sample_book(10).with_cover(CoverRequest::default());
    c.bench_function("pack_with_cover", |b| {
        b.iter(|| Packager::new().pack_to_vec(&book).unwrap());
    });
}

fn bench_resolve(c: &mut Criterion) {
    let book = sample_book(200);
    c.bench_function("resolve_200_chapters", |b| {
        b.iter(|| {
            Packager::new()
                .with_id_generator(SequenceGenerator::new("id"))
                .resolve(&book)
                .unwrap()
        });
    });
}

criterion_group!(
    benches,
    bench_pack_small,
    bench_pack_large,
    bench_pack_with_cover,
    bench_resolve,
);
criterion_main!(benches);
