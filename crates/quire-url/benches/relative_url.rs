//! Benchmarks for relative URL computation and HTML link rewriting.

use criterion::{Criterion, criterion_group, criterion_main};
use quire_url::{LinkBase, normalize_link, relative_url, rewrite_html_links};

fn bench_relative_url(c: &mut Criterion) {
    let mut group = c.benchmark_group("relative_url");

    group.bench_function("shallow", |b| {
        b.iter(|| relative_url("css/theme.css", "guide/"));
    });

    group.bench_function("deep_diverging", |b| {
        b.iter(|| relative_url("a/b/c/d/e/f/g.png", "a/b/x/y/z/page/"));
    });

    group.bench_function("dot_segments", |b| {
        b.iter(|| relative_url("foo/./bar/../../baz//qux/", "foo/bar/baz/index.html"));
    });

    group.finish();
}

fn bench_normalize_link(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize_link");

    group.bench_function("external", |b| {
        b.iter(|| normalize_link("https://example.com/a/b", "guide/install/"));
    });

    group.bench_function("site_relative_with_query", |b| {
        b.iter(|| normalize_link("js/app.js?v=42#main", "guide/install/"));
    });

    group.finish();
}

fn bench_rewrite_html(c: &mut Criterion) {
    let html: String = (0..200)
        .map(|i| format!(r#"<p><a href="section-{i}/">Section {i}</a><img src="img/{i}.png"></p>"#))
        .collect();

    c.bench_function("rewrite_html_links_200", |b| {
        b.iter(|| rewrite_html_links(&html, "blog/2024/post/", LinkBase::SiteRoot));
    });
}

criterion_group!(
    benches,
    bench_relative_url,
    bench_normalize_link,
    bench_rewrite_html
);
criterion_main!(benches);
