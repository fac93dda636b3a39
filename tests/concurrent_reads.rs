use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rsbits::{BitVector, RankSelect};
use std::thread;

#[derive(Clone, Copy, PartialEq, Debug)]
enum Answer {
    Rank(usize),
    Select(Option<usize>),
}

fn run_queries(rs: &RankSelect, queries: &[(bool, usize)]) -> Vec<Answer> {
    queries
        .iter()
        .map(|&(is_rank, arg)| {
            if is_rank {
                Answer::Rank(rs.rank1(arg))
            } else {
                Answer::Select(rs.select1(arg))
            }
        })
        .collect()
}

// Unsynchronized parallel readers must see exactly what a serial reader
// sees.
#[test]
fn test_parallel_readers_agree_with_serial() {
    let bits: Vec<bool> = (0..4096).map(|i| i % 3 == 0).collect();
    let rs = RankSelect::new(BitVector::from_bools(&bits));

    let mut rng = StdRng::seed_from_u64(0x5eed);
    let queries: Vec<(bool, usize)> = (0..10_000)
        .map(|_| (rng.gen_bool(0.5), rng.gen_range(0..5000)))
        .collect();

    let serial = run_queries(&rs, &queries);

    thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| run_queries(&rs, &queries)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), serial);
        }
    });
}
