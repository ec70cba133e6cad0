use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use reynolds_math::banded::BandLu;
use reynolds_math::ordering::reverse_cuthill_mckee;
use reynolds_math::sparse::{CsrMatrix, TripletBuilder};
use std::hint::black_box;

/// Periodic-by-Dirichlet five-point operator, angular-major numbering.
fn periodic_five_point(nx: usize, ny: usize) -> CsrMatrix {
    let n = nx * ny;
    let mut t = TripletBuilder::with_capacity(n, n, 5 * n);
    for i in 0..nx {
        for j in 0..ny {
            let k = i * ny + j;
            if j == 0 || j + 1 == ny {
                let _ = t.push(k, k, 1.0);
                continue;
            }
            let _ = t.push(k, k, -4.0);
            let _ = t.push(k, k + 1, 1.0);
            let _ = t.push(k, k - 1, 1.0);
            let _ = t.push(k, ((i + 1) % nx) * ny + j, 1.2);
            let _ = t.push(k, ((i + nx - 1) % nx) * ny + j, 0.8);
        }
    }
    t.build()
}

/// Axial-major numbering: k' = j * nx + i.
fn axial_major(nx: usize, ny: usize) -> Vec<usize> {
    (0..ny)
        .flat_map(|j| (0..nx).map(move |i| i * ny + j))
        .collect()
}

fn bench_factor(c: &mut Criterion) {
    let mut group = c.benchmark_group("band_lu_factor");
    for &(nx, ny) in &[(36usize, 11usize), (64, 32), (100, 100)] {
        let a = periodic_five_point(nx, ny);
        let axial = axial_major(nx, ny);
        let rcm = reverse_cuthill_mckee(&a);

        group.bench_with_input(
            BenchmarkId::new("axial_major", format!("{nx}x{ny}")),
            &a,
            |b, a| b.iter(|| black_box(BandLu::factor(a, &axial, 1e-12).is_ok())),
        );
        group.bench_with_input(
            BenchmarkId::new("rcm", format!("{nx}x{ny}")),
            &a,
            |b, a| b.iter(|| black_box(BandLu::factor(a, &rcm, 1e-12).is_ok())),
        );
    }
    group.finish();
}

fn bench_rcm(c: &mut Criterion) {
    let a = periodic_five_point(100, 100);
    c.bench_function("rcm_100x100", |b| {
        b.iter(|| black_box(reverse_cuthill_mckee(&a).len()))
    });
}

criterion_group!(benches, bench_factor, bench_rcm);
criterion_main!(benches);
