// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Performance benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use meshkernel::entity::{complement, intersect, make_entity_set, merge, EntityKind, EntityTable, Mesh};
use meshkernel::geometry::{measure_cells, polygon_area_centroid_normal, Point, Polyhedron};
use meshkernel::partition::{block_partition_regular_mesh, BoxDomain};
use std::f64::consts::PI;
use std::sync::Arc;

const HEX_FACES: [[usize; 4]; 6] = [
    [0, 3, 2, 1],
    [4, 5, 6, 7],
    [0, 1, 5, 4],
    [1, 2, 6, 5],
    [2, 3, 7, 6],
    [3, 0, 4, 7],
];

fn hex_grid(n: usize) -> Vec<Polyhedron<'static>> {
    let h = 1.0 / n as f64;
    let mut cells = Vec::with_capacity(n * n * n);
    for k in 0..n {
        for j in 0..n {
            for i in 0..n {
                let (x, y, z) = (i as f64 * h, j as f64 * h, k as f64 * h);
                let nodes = [
                    Point::new3(x, y, z),
                    Point::new3(x + h, y, z),
                    Point::new3(x + h, y + h, z),
                    Point::new3(x, y + h, z),
                    Point::new3(x, y, z + h),
                    Point::new3(x + h, y, z + h),
                    Point::new3(x + h, y + h, z + h),
                    Point::new3(x, y + h, z + h),
                ];
                cells.push(Polyhedron::from_indexed(&nodes, &HEX_FACES).unwrap());
            }
        }
    }
    cells
}

fn bench_measures(c: &mut Criterion) {
    let mut group = c.benchmark_group("measures");

    let unit = hex_grid(1);
    let cell = &unit[0];
    group.bench_function("hex_volume_centroid", |b| {
        b.iter(|| black_box(cell).volume_centroid());
    });

    let center = Point::new3(0.5, 0.5, 0.5);
    group.bench_function("hex_contains", |b| {
        b.iter(|| black_box(cell).contains(black_box(&center)));
    });

    for sides in [4, 16, 64] {
        let polygon: Vec<Point> = (0..sides)
            .map(|i| {
                let angle = 2.0 * PI * i as f64 / sides as f64;
                Point::new2(angle.cos(), angle.sin())
            })
            .collect();
        group.bench_with_input(BenchmarkId::new("polygon", sides), &polygon, |b, polygon| {
            b.iter(|| polygon_area_centroid_normal(black_box(polygon)));
        });
    }

    for n in [8, 16, 32] {
        let cells = hex_grid(n);
        group.bench_with_input(BenchmarkId::new("measure_cells", n * n * n), &cells, |b, cells| {
            b.iter(|| measure_cells(black_box(cells)));
        });
    }

    group.finish();
}

fn bench_set_algebra(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_algebra");

    for size in [1_000, 100_000] {
        let ghosts = size / 10;
        let mesh: Arc<dyn Mesh> = Arc::new(EntityTable::new().with_range(EntityKind::Cell, size, ghosts));
        let evens = make_entity_set(
            "evens",
            mesh.clone(),
            EntityKind::Cell,
            (0..size).step_by(2).collect(),
            (size..size + ghosts).step_by(2).collect(),
            true,
        );
        let thirds = make_entity_set(
            "thirds",
            mesh,
            EntityKind::Cell,
            (0..size).step_by(3).collect(),
            (size..size + ghosts).step_by(3).collect(),
            true,
        );
        let sets = [evens, thirds];

        group.bench_with_input(BenchmarkId::new("merge", size), &sets, |b, sets| {
            b.iter(|| merge(black_box(sets), true).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("intersect", size), &sets, |b, sets| {
            b.iter(|| intersect(black_box(sets), true).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("complement", size), &sets, |b, sets| {
            b.iter(|| complement(black_box(sets), true).unwrap());
        });
    }

    group.finish();
}

fn bench_partition(c: &mut Criterion) {
    let mut group = c.benchmark_group("partition");
    let domain = BoxDomain::unit(3).unwrap();

    for blocks in [64, 720, 4096] {
        group.bench_with_input(BenchmarkId::new("regular_3d", blocks), &blocks, |b, &blocks| {
            b.iter(|| block_partition_regular_mesh(&domain, &[256, 256, 256], black_box(blocks)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_measures, bench_set_algebra, bench_partition);
criterion_main!(benches);
