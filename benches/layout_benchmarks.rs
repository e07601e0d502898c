//! Layout engine micro-benchmarks
//!
//! Measures wrapping, table pagination and full PDF production for growing inputs.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use pdf_formkit::layout::wrap_text;
use pdf_formkit::{
    CellOptions, Cursor, DataCell, Document, HeaderSpec, LayoutConfig, RecordingCanvas, TextInputField,
};
use std::hint::black_box;

fn headers() -> Vec<HeaderSpec> {
    vec![
        HeaderSpec::new("Item", 200.0),
        HeaderSpec::new("Qty", 40.0),
        HeaderSpec::new("Price", 60.0)
            .with_children(["Net", "Gross"])
            .with_options(CellOptions::new().bold()),
    ]
}

fn rows(count: usize) -> Vec<Vec<DataCell>> {
    (0..count)
        .map(|i| {
            vec![
                DataCell::new(format!("Article {} with a description long enough to wrap", i)),
                DataCell::new(format!("{}", i % 12 + 1)),
                DataCell::new(format!("{}.00", i)),
                DataCell::new(format!("{}.19", i)),
            ]
        })
        .collect()
}

fn benchmark_wrap_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("wrap_text");

    for words in [10, 100, 1000] {
        let text = (0..words)
            .map(|i| format!("word{}", i))
            .collect::<Vec<_>>()
            .join(" ");

        group.bench_with_input(BenchmarkId::new("words", words), &text, |b, text| {
            b.iter(|| wrap_text(black_box(text), 120.0, |s| s.len() as f32 * 3.5));
        });
    }

    group.finish();
}

fn benchmark_table_recording(c: &mut Criterion) {
    let mut group = c.benchmark_group("table_recording");
    let headers = headers();

    for row_count in [10, 100, 1000] {
        let data = rows(row_count);

        group.bench_with_input(BenchmarkId::new("rows", row_count), &data, |b, data| {
            b.iter(|| {
                let mut doc = Document::with_canvas(RecordingCanvas::new(), LayoutConfig::default())
                    .expect("default config is valid");
                let mut pos = Cursor::new(doc.margin(), doc.margin());
                doc.print_table(&mut pos, &headers, data);
                doc.total_page_number()
            });
        });
    }

    group.finish();
}

fn benchmark_table_pdf(c: &mut Criterion) {
    let mut group = c.benchmark_group("table_pdf");
    let headers = headers();

    for row_count in [10, 100, 1000] {
        let data = rows(row_count);

        group.bench_with_input(BenchmarkId::new("rows", row_count), &data, |b, data| {
            b.iter(|| {
                let mut doc = Document::new();
                doc.set_watermark("DRAFT");
                let mut pos = Cursor::new(doc.margin(), doc.margin());
                doc.print_table(&mut pos, &headers, data);
                doc.finish().expect("Failed to finish PDF")
            });
        });
    }

    group.finish();
}

fn benchmark_input_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("input_grid");

    for row_count in [10, 100] {
        let grid: Vec<Vec<TextInputField>> = (0..row_count)
            .map(|i| {
                vec![
                    TextInputField::new(280.0).label("Name").value(format!("Customer {}", i)),
                    TextInputField::new(280.0).label("Address").value("1 Long Street, Springfield"),
                ]
            })
            .collect();

        group.bench_with_input(BenchmarkId::new("rows", row_count), &grid, |b, grid| {
            b.iter(|| {
                let mut doc = Document::new();
                let mut pos = Cursor::new(doc.margin(), doc.margin());
                doc.print_multiple_input_text(&mut pos, grid);
                doc.finish().expect("Failed to finish PDF")
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_wrap_text,
    benchmark_table_recording,
    benchmark_table_pdf,
    benchmark_input_grid
);
criterion_main!(benches);
