//! Benchmarks of the core `DiscoMap` operations.

#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use discomap::{Dimension, Disco, DiscoMap};

/// linear multiplier for work done by benchmarks
const REPEAT: usize = 120;

/// discos of length 2 with a gap of 1 in the X-space and none in the Y-space
fn build_stepped_map(n: usize) -> DiscoMap {
	DiscoMap::from_discos((0..n).map(|i| Disco::new(3 * i, 2 * i, 2)))
		.expect("stepped discos are sequential")
}

fn bench_append(c: &mut Criterion) {
	c.bench_function("append", |b| {
		b.iter(|| {
			let mut map = DiscoMap::new();
			for i in 0..REPEAT {
				map.append(Disco::new(3 * i, 2 * i, 2))
					.expect("append failed");
			}
			map
		})
	});
}

fn bench_set_all(c: &mut Criterion) {
	let discos = build_stepped_map(REPEAT).discos();
	c.bench_function("set_all", |b| {
		b.iter(|| {
			let mut map = DiscoMap::new();
			map.set_all(discos.clone()).expect("set_all failed");
			map
		})
	});
}

fn bench_translate(c: &mut Criterion) {
	let map = build_stepped_map(REPEAT);
	c.bench_function("x_to_y", |b| {
		b.iter(|| {
			for x in 0..3 * REPEAT {
				let _ = black_box(map.x_to_y(x));
			}
		})
	});
}

fn bench_overlapping(c: &mut Criterion) {
	let map = build_stepped_map(REPEAT);
	c.bench_function("overlapping", |b| {
		b.iter(|| {
			map.overlapping(Dimension::Y, REPEAT / 2, REPEAT).count()
		})
	});
}

criterion_group!(
	benches,
	bench_append,
	bench_set_all,
	bench_translate,
	bench_overlapping
);
criterion_main!(benches);
