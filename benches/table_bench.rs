use criterion::{black_box, criterion_group, criterion_main, Criterion};
use reportpdf::{estimate_table_width, generate_table_html, RenderOptions, Table, Value};

fn wide_table(columns: usize, rows: i64) -> Table {
    let names: Vec<String> = (0..columns).map(|i| format!("column_{}", i)).collect();
    let mut t = Table::new(names);
    for r in 0..rows {
        t.push_row((0..columns).map(|c| {
            if c % 3 == 0 {
                Value::from(format!("row {} text cell", r))
            } else {
                Value::Int(r * c as i64)
            }
        }));
    }
    t
}

fn bench_estimate(c: &mut Criterion) {
    let table = wide_table(50, 1000);
    c.bench_function("estimate_table_width", |b| {
        b.iter(|| estimate_table_width(black_box(&table)))
    });
}

fn bench_generate_html(c: &mut Criterion) {
    let table = wide_table(20, 2000);
    let opts = RenderOptions::default();
    c.bench_function("generate_table_html", |b| {
        b.iter(|| generate_table_html(black_box(&table), &opts))
    });
}

criterion_group!(benches, bench_estimate, bench_generate_html);
criterion_main!(benches);
