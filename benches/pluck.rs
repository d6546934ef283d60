//! Benchmarks for twangy string simulation.

use criterion::{criterion_group, criterion_main, Criterion};
use twangy::*;

fn bench_chain_settle(c: &mut Criterion) {
    c.bench_function("chain_40_segments_500_relax", |b| {
        b.iter(|| {
            let tuning = Tuning::new();
            let mut chain: PluckChain<f32> = PluckChain::new(40, &tuning).unwrap();
            chain.bend(0.5, 1.0);
            for _ in 0..500 {
                chain.relax(&tuning);
            }
            chain.is_settled(1e-3)
        });
    });
}

fn bench_board_tick(c: &mut Criterion) {
    c.bench_function("board_8_strings_120_ticks", |b| {
        b.iter(|| {
            let mut board: StringBoard<f32> = StringBoard::new(8, 40, Tuning::new()).unwrap();
            let regions: Vec<Region<f32>> = (0..8)
                .map(|i| Region::new(0.0, i as f32 * 60.0, 400.0, 50.0))
                .collect();
            board.set_regions(&regions).unwrap();

            let mut observer = NoOpPluckObserver;
            board.pointer_down(200.0, 25.0, &mut observer);
            board.pointer_up(&mut observer);
            for _ in 0..120 {
                board.tick(&mut observer);
            }
            board.dragged()
        });
    });
}

fn bench_spark_burst_decay(c: &mut Criterion) {
    c.bench_function("spark_4_bursts_60_ticks", |b| {
        b.iter(|| {
            let mut field: SparkField<f32> = SparkField::new(9);
            for i in 0..4 {
                field.burst(Vec2::new(i as f32 * 50.0, 100.0), [255, 140, 0]);
            }
            for _ in 0..60 {
                field.tick();
            }
            field.len()
        });
    });
}

criterion_group!(benches, bench_chain_settle, bench_board_tick, bench_spark_burst_decay);
criterion_main!(benches);
