use std::cell::RefCell;
use std::env;
use std::rc::Rc;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use sort_test_tools::{patterns, Sort};

struct LomutoUnstable;

impl Sort for LomutoUnstable {
    fn name() -> String {
        "rust_lomuto_unstable".into()
    }

    fn sort<T: Ord>(arr: &mut [T]) {
        lomuto::sort(arr);
    }

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering,
    {
        lomuto::sort_by(arr, compare);
    }
}

struct StdUnstable;

impl Sort for StdUnstable {
    fn name() -> String {
        "rust_std_unstable".into()
    }

    fn sort<T: Ord>(arr: &mut [T]) {
        arr.sort_unstable();
    }

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering,
    {
        arr.sort_unstable_by(compare);
    }
}

fn pin_thread_to_core() {
    use std::cell::Cell;
    let pin_core_id: usize = 2;

    thread_local! {static AFFINITY_ALREADY_SET: Cell<bool> = Cell::new(false); }

    // Set affinity only once per thread.
    if !AFFINITY_ALREADY_SET.with(|already_set| already_set.get()) {
        if let Some(core_id_2) = core_affinity::get_core_ids()
            .as_ref()
            .and_then(|ids| ids.get(pin_core_id))
        {
            core_affinity::set_for_current(*core_id_2);
        }

        AFFINITY_ALREADY_SET.with(|already_set| already_set.set(true));
    }
}

fn measure_comp_count<T, S: Sort>(name: &str, test_size: usize, make_input: impl Fn() -> Vec<T>)
where
    T: Ord,
{
    // Measure how many comparisons are performed by a specific implementation and input
    // combination.
    let run_count: usize = if test_size <= 20 { 10_000 } else { 100 };

    let comp_count = Rc::new(RefCell::new(0u64));
    for _ in 0..run_count {
        let mut test_data = make_input();
        S::sort_by(black_box(test_data.as_mut_slice()), |a, b| {
            *comp_count.borrow_mut() += 1;
            a.cmp(b)
        });
    }

    let total = *comp_count.borrow() / (run_count as u64);
    println!("{name}: mean comparisons: {total}");
}

#[inline(never)]
fn bench_impl<T: Ord, S: Sort>(
    c: &mut Criterion,
    test_size: usize,
    transform_name: &str,
    transform: fn(Vec<i32>) -> Vec<T>,
    pattern_name: &str,
    pattern_provider: fn(usize) -> Vec<i32>,
) {
    let bench_name = format!(
        "{}-{transform_name}-{pattern_name}-{test_size}",
        S::name()
    );

    if env::var("MEASURE_COMP").is_ok() {
        measure_comp_count::<T, S>(&bench_name, test_size, || {
            transform(pattern_provider(test_size))
        });
        return;
    }

    // Pin the benchmark to the same core to improve repeatability. Doing it this way allows
    // criterion to do other stuff with other threads, which greatly impacts overall benchmark
    // throughput.
    pin_thread_to_core();

    let batch_size = if test_size > 30 {
        BatchSize::LargeInput
    } else {
        BatchSize::SmallInput
    };

    c.bench_function(&bench_name, |b| {
        b.iter_batched(
            || transform(pattern_provider(test_size)),
            |mut test_data| S::sort(black_box(test_data.as_mut_slice())),
            batch_size,
        )
    });
}

fn bench_patterns<T: Ord>(
    c: &mut Criterion,
    test_size: usize,
    transform_name: &str,
    transform: fn(Vec<i32>) -> Vec<T>,
) {
    let pattern_providers: Vec<(&'static str, fn(usize) -> Vec<i32>)> = vec![
        ("random", patterns::random),
        ("random_dense", |size| {
            patterns::random_uniform(size, 0..=(((size as f64).log2().round()) as i32))
        }),
        ("random_binary", |size| patterns::random_uniform(size, 0..=1)),
        ("random_z1", |size| patterns::random_zipf(size, 1.0)),
        ("ascending", patterns::ascending),
        ("descending", patterns::descending),
        ("all_equal", patterns::all_equal),
        ("saws_long", |size| {
            patterns::saw_mixed(size, ((size as f64).log2().round()) as usize)
        }),
        ("pipe_organ", patterns::pipe_organ),
    ];

    for (pattern_name, pattern_provider) in pattern_providers {
        // With a fixed rightmost pivot every pattern with sorted runs or many equal values is
        // quadratic, above 1k elements a single sort of them takes seconds.
        if (test_size < 3 || test_size > 1_000) && pattern_name != "random" {
            continue;
        }

        bench_impl::<T, LomutoUnstable>(
            c,
            test_size,
            transform_name,
            transform,
            pattern_name,
            pattern_provider,
        );

        bench_impl::<T, StdUnstable>(
            c,
            test_size,
            transform_name,
            transform,
            pattern_name,
            pattern_provider,
        );
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    let test_sizes = [0, 1, 2, 3, 8, 16, 20, 50, 101, 200, 500, 1_000, 10_000, 100_000];

    for test_size in test_sizes {
        // Same element types linesort sorts.
        bench_patterns(c, test_size, "i32", |values| values);

        bench_patterns(c, test_size, "string", |values| {
            // Zero extended so lexicographic order matches the numeric input order.
            values
                .iter()
                .map(|val| format!("{:010}", val.saturating_abs()))
                .collect()
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
