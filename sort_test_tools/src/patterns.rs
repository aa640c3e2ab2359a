//! Provides a set of patterns useful for testing and benchmarking sorting algorithms.
//! The integer patterns produce i32 values, `random_f64` and `random_words` cover the other two
//! element types read by `linesort`.

use std::env;
use std::str::FromStr;

use once_cell::sync::Lazy;
use rand::prelude::*;

use zipf::ZipfDistribution;

// --- Public ---

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    let mut rng = new_seed();

    (0..len).map(|_| rng.gen::<i32>()).collect()
}

pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<rand::distributions::Uniform<i32>>,
{
    // :.:.:.::
    let mut rng = new_seed();

    // Abstracting over ranges in Rust :(
    let dist: rand::distributions::Uniform<i32> = range.into();

    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    // https://en.wikipedia.org/wiki/Zipf's_law
    let mut rng = new_seed();

    if len == 0 {
        return Vec::new();
    }

    let dist = ZipfDistribution::new(len, exponent).unwrap();

    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

pub fn random_sorted(len: usize, sorted_percent: f64) -> Vec<i32> {
    //     .:
    //   .:::. :
    // .::::::.::
    // [----][--]
    //  ^      ^
    //  |      |
    // sorted  |
    //     unsorted

    let mut v = random(len);
    let sorted_len = ((len as f64) * (sorted_percent / 100.0)).round() as usize;

    v[0..sorted_len].sort_unstable();

    v
}

/// Floats spread over many magnitudes and both signs, including zeros of both signs.
pub fn random_f64(len: usize) -> Vec<f64> {
    let mut rng = new_seed();

    (0..len)
        .map(|_| match rng.gen_range(0..16) {
            0 => 0.0,
            1 => -0.0,
            _ => {
                let mantissa = rng.gen_range(-1.0..1.0);
                let exponent = rng.gen_range(-20..20);
                mantissa * 10f64.powi(exponent)
            }
        })
        .collect()
}

/// Lower case ASCII words with a length in `1..=max_word_len`. Short words repeat often.
pub fn random_words(len: usize, max_word_len: usize) -> Vec<String> {
    let mut rng = new_seed();

    (0..len)
        .map(|_| {
            let word_len = rng.gen_range(1..=max_word_len.max(1));
            (0..word_len)
                .map(|_| rng.gen_range(b'a'..=b'z') as char)
                .collect::<String>()
        })
        .collect()
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::

    (0..len).map(|_| 66).collect::<Vec<_>>()
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..len as i32).collect::<Vec<_>>()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..len as i32).rev().collect::<Vec<_>>()
}

pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.    .::.    .:
    // :::.:::..::::::..:::

    let saw_directions = random_uniform(saw_count.max(1) + 1, 0..=1);
    saw(len, saw_count, |i| saw_directions.get(i) == Some(&1))
}

pub fn pipe_organ(len: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut vals = random(len);

    let first_half = &mut vals[0..(len / 2)];
    first_half.sort();

    let second_half = &mut vals[(len / 2)..len];
    second_half.sort_by_key(|&e| std::cmp::Reverse(e));

    vals
}

/// Seed used for all random patterns in this process.
///
/// It is picked once per process, unless the `OVERRIDE_SEED` environment variable is set, in which
/// case that value is used. Print it before testing, so failures can be reproduced.
pub fn random_init_seed() -> u64 {
    *SEED
}

// --- Private ---

static SEED: Lazy<u64> = Lazy::new(|| {
    env::var("OVERRIDE_SEED")
        .ok()
        .map(|seed| u64::from_str(&seed).expect("OVERRIDE_SEED must be a u64"))
        .unwrap_or_else(|| thread_rng().gen())
});

fn new_seed() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

fn saw(len: usize, saw_count: usize, is_descending: impl Fn(usize) -> bool) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }

    let mut vals = random(len);
    let chunks_size = (len / saw_count.max(1)).max(1);

    for (i, chunk) in vals.chunks_mut(chunks_size).enumerate() {
        if is_descending(i) {
            chunk.sort_by_key(|&e| std::cmp::Reverse(e));
        } else {
            chunk.sort();
        }
    }

    vals
}
