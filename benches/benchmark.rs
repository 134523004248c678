use criterion::{black_box, criterion_group, criterion_main, Criterion};

use panterm::keeper::TermKeeper;
use panterm::term::sort_terms;

fn criterion_benchmark(c: &mut Criterion) {
    let keeper = TermKeeper::new();
    let texts: Vec<String> = (0..10_000)
        .map(|n| if n % 2 == 0 { n.to_string() } else { format!("key_{n}") })
        .collect();
    for text in &texts {
        keeper.create(text).unwrap();
    }
    println!("{:?}", keeper);
    c.bench_function("create cached key", |b| b.iter(|| keeper.create(black_box("key_4711"))));
    c.bench_function("create cached index", |b| b.iter(|| keeper.create_index(black_box(4710))));
    c.bench_function("create 10k cached", |b| {
        b.iter(|| {
            for text in &texts {
                black_box(keeper.create(text).unwrap());
            }
        })
    });
    c.bench_function("create 10k fresh", |b| {
        b.iter(|| {
            let fresh = TermKeeper::new();
            for text in &texts {
                black_box(fresh.create(text).unwrap());
            }
        })
    });
    c.bench_function("create quoted", |b| b.iter(|| keeper.create(black_box("{/dev/sda1}"))));
    let terms: Vec<_> = texts.iter().map(|t| keeper.create(t).unwrap()).collect();
    c.bench_function("sort 10k", |b| {
        b.iter(|| {
            let mut sorted = terms.clone();
            sort_terms(&mut sorted);
            sorted
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
