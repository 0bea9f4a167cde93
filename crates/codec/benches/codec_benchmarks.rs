use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use bookwire_catalog::{Book, sample};
use bookwire_codec::{BinarySerializer, Serializer, TaggedSerializer};

const DATASET_SIZES: [usize; 3] = [10, 100, 1000];

fn bench_serialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize");

    for size in DATASET_SIZES {
        let books = sample::random_books(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("binary", size), &books, |b, books| {
            let strategy = BinarySerializer::new();
            b.iter(|| strategy.serialize(black_box(books)).unwrap());
        });

        group.bench_with_input(BenchmarkId::new("tagged", size), &books, |b, books| {
            let strategy = TaggedSerializer::new();
            b.iter(|| strategy.serialize(black_box(books)).unwrap());
        });
    }

    group.finish();
}

fn bench_deserialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("deserialize");

    for size in DATASET_SIZES {
        let books = sample::random_books(size);
        group.throughput(Throughput::Elements(size as u64));

        let payload = BinarySerializer::new().serialize(&books).unwrap();
        group.bench_with_input(BenchmarkId::new("binary", size), &payload, |b, payload| {
            let strategy = BinarySerializer::new();
            b.iter(|| {
                let books: Vec<Book> = strategy.deserialize(black_box(payload)).unwrap();
                books
            });
        });

        let payload = TaggedSerializer::new().serialize(&books).unwrap();
        group.bench_with_input(BenchmarkId::new("tagged", size), &payload, |b, payload| {
            let strategy = TaggedSerializer::new();
            b.iter(|| {
                let books: Vec<Book> = strategy.deserialize(black_box(payload)).unwrap();
                books
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_serialize, bench_deserialize);
criterion_main!(benches);
