use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use regen_feemodule::{compute_fee, Context, FeeKeeper, FeeSplit, Params};
use regen_nullables::NullHost;
use regen_types::{AccAddress, Coin};

fn bench_fee_math(c: &mut Criterion) {
    let params = Params::default();
    let mut group = c.benchmark_group("fee_math");

    for amount in [1_000u128, 1_000_000_000, u64::MAX as u128] {
        group.bench_with_input(BenchmarkId::new("compute_fee", amount), &amount, |b, &a| {
            b.iter(|| black_box(compute_fee(black_box(a), &params)))
        });
        group.bench_with_input(BenchmarkId::new("split", amount), &amount, |b, &a| {
            b.iter(|| black_box(FeeSplit::compute(black_box(a), &params)))
        });
    }

    group.finish();
}

fn bench_route_fee(c: &mut Criterion) {
    let host = NullHost::new();
    let payer = AccAddress::new("regen1payer").unwrap();
    host.ledger.fund_account(&payer, "uregen", u128::MAX / 2);
    let keeper = FeeKeeper::new(&host.ledger, &host.rewards, &host.treasury);
    let ctx = Context::new("regen-bench", 1);
    let params = Params::default();
    let credit = Coin::uregen(1_000_000);

    c.bench_function("route_fee_default_params", |b| {
        b.iter(|| {
            host.journal.clear();
            black_box(keeper.route_fee(&ctx, &payer, black_box(&credit), &params))
        })
    });
}

criterion_group!(benches, bench_fee_math, bench_route_fee);
criterion_main!(benches);
