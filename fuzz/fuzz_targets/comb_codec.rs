#![no_main]
use libfuzzer_sys::fuzz_target;
use rsbits::combinatorial;

fuzz_target!(|raw: u16| {
    let block = raw & 0x7FFF;
    let class = block.count_ones() as usize;

    let offset = combinatorial::encode(block, class).unwrap();
    assert!(offset < combinatorial::binomial(15, class));
    assert!(u32::from(offset) < 1u32 << combinatorial::offset_bits(class).max(1));
    assert_eq!(combinatorial::decode(class, offset, 15).unwrap(), block);
});
