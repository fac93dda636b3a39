#![no_main]
use libfuzzer_sys::fuzz_target;
use rsbits::{BitVector, RankSelect};

fuzz_target!(|data: (Vec<u64>, usize)| {
    let (words, len_raw) = data;
    if words.is_empty() {
        return;
    }

    let len = len_raw % (words.len() * 64);
    let rs = RankSelect::new(BitVector::from_words(words.clone(), len));

    let bit = |i: usize| (words[i / 64] >> (i % 64)) & 1 == 1;
    let total = (0..len).filter(|&i| bit(i)).count();

    assert_eq!(rs.ones(), total);
    assert_eq!(rs.rank1(len), total);
    assert_eq!(rs.rank1(len + 1), total);

    let mut prev = 0;
    for pos in (0..=len).step_by(17) {
        let rank = rs.rank1(pos);
        assert!(rank >= prev, "rank must be monotonic");
        assert!(rank <= pos.min(len));
        prev = rank;
    }

    assert_eq!(rs.select1(0), None);
    assert_eq!(rs.select1(total + 1), None);

    // Rank/select inverse at one derived rank.
    if total > 0 {
        let k = (len_raw / 13) % total + 1;
        let pos = rs.select1(k).expect("k is within range");
        assert!(pos < len);
        assert!(rs.get(pos), "select1({k}) = {pos} must be a set bit");
        assert_eq!(rs.rank1(pos + 1), k);
        assert_eq!(rs.rank1(pos), k - 1);
    }
});
