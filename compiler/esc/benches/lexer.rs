#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Tokenizer benchmarks.
//!
//! Measures full tokenization (keywords, literal values, atoms, template
//! rescans) over generated sources, as UTF-8 and as UTF-16.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use es_lexer::{init_reserved_words, CompileOptions};
use esc::lex_source;

/// Generate N small functions mixing the common token shapes.
fn generate_n_functions(n: usize) -> String {
    (0..n)
        .map(|i| {
            format!(
                "function f{i}(a, b) {{\n  // step {i}\n  const s = `v${{a + {i}}}`;\n  \
                 if (a >= 0x{i:x} && /b+/g.test(s)) return a * 1.5e3 / b;\n  \
                 return 'done' + s;\n}}"
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Generate N declarations with non-ASCII names and strings.
fn generate_n_unicode_objects(n: usize) -> String {
    (0..n)
        .map(|i| format!("let café{i} = {{ 名前: \"値{i}\", π: 3.14159, ok: true }};"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn bench_tokenize(c: &mut Criterion) {
    init_reserved_words();
    let mut group = c.benchmark_group("lexer/tokenize");

    for num_functions in [10, 100, 1000] {
        let source = generate_n_functions(num_functions);
        let utf16: Vec<u16> = source.encode_utf16().collect();
        let output = lex_source(source.as_bytes(), CompileOptions::default());
        assert!(!output.has_errors(), "benchmark input must lex cleanly");

        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::new("utf8", num_functions), &source, |b, src| {
            b.iter(|| lex_source(black_box(src.as_bytes()), CompileOptions::default()));
        });
        group.bench_with_input(BenchmarkId::new("utf16", num_functions), &utf16, |b, src| {
            b.iter(|| lex_source(black_box(src.as_slice()), CompileOptions::default()));
        });
    }

    group.finish();
}

fn bench_unicode(c: &mut Criterion) {
    init_reserved_words();
    let mut group = c.benchmark_group("lexer/unicode");

    for num_objects in [100, 1000] {
        let source = generate_n_unicode_objects(num_objects);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(num_objects), &source, |b, src| {
            b.iter(|| lex_source(black_box(src.as_bytes()), CompileOptions::default()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_tokenize, bench_unicode);
criterion_main!(benches);
