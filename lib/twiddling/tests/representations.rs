use ntest::timeout;
use rand::{rngs::StdRng, Rng, SeedableRng};
use twiddling::{
    bitscan, get_bit, is_zero, lsb, msb, onebit, popcount, Bits, Limbs128,
    Packed128, Wide,
};

const PAIRS: usize = 100_000;

fn random_halves(rng: &mut StdRng) -> (u64, u64) {
    let hi = rng.gen::<u64>();
    let lo = rng.gen::<u64>();

    match rng.gen_range(0..8) {                                                 /* Sparse boards hit the edge cases   */
        0 => (0, 0),
        1 => (0, lo),
        2 => (hi, 0),
        3 => (hi & rng.gen::<u64>() & rng.gen::<u64>(), 0),
        4 => {
            let bit = 1u128 << rng.gen_range(0..128u32);
            ((bit >> 64) as u64, bit as u64)
        }
        _ => (hi, lo),
    }
}

/// Everything observable about one value, computed through the generic
/// interface so each representation goes down the same path.
fn observe<B: Wide>(a: B, b: B, shift: u32) -> Vec<u128> {
    let join = |x: B| (x.high() as u128) << 64 | x.low() as u128;
    let mut seen = vec![
        popcount(a) as u128,
        onebit(a) as u128,
        is_zero(a) as u128,
        (a == b) as u128,
        get_bit(a, shift) as u128,
        join(a << shift),
        join(a >> shift),
        join(a.wrapping_mul(b)),
        join(a & b),
        join(a | b),
        join(a ^ b),
        join(!a),
    ];

    if !is_zero(a) {
        seen.push(lsb(a) as u128);
        seen.push(bitscan(a) as u128);
        seen.push(msb(a) as u128);
    }

    seen
}

#[test]
#[timeout(60000)]
fn representations_agree_bit_for_bit() {
    let mut rng = StdRng::seed_from_u64(0x5EED_0128);

    for _ in 0..PAIRS {
        let (ahi, alo) = random_halves(&mut rng);
        let (bhi, blo) = if rng.gen_bool(0.05) {
            (ahi, alo)
        } else {
            random_halves(&mut rng)
        };
        let shift = rng.gen_range(0..128u32);

        let native = observe(
            <u128 as Wide>::from_halves(ahi, alo),
            <u128 as Wide>::from_halves(bhi, blo),
            shift,
        );
        let limbs = observe(
            Limbs128::from_halves(ahi, alo),
            Limbs128::from_halves(bhi, blo),
            shift,
        );
        let packed = observe(
            Packed128::from_halves(ahi, alo),
            Packed128::from_halves(bhi, blo),
            shift,
        );

        assert_eq!(native, limbs, "limbs differ for a={ahi:x}:{alo:x} b={bhi:x}:{blo:x} shift={shift}");
        assert_eq!(native, packed, "packed differs for a={ahi:x}:{alo:x} b={bhi:x}:{blo:x} shift={shift}");
    }
}

#[test]
fn popcount_matches_per_bit_scan() {
    let mut rng = StdRng::seed_from_u64(17);

    for _ in 0..2000 {
        let (hi, lo) = random_halves(&mut rng);
        let x = Limbs128::from_halves(hi, lo);
        let naive = (0..128).filter(|&i| get_bit(x, i)).count() as u32;

        assert_eq!(popcount(x), naive);
        assert_eq!(onebit(x), naive == 1);
    }
}

#[test]
fn selected_bitboard_uses_full_width() {
    assert_eq!(<twiddling::Bitboard as Bits>::WIDTH, 128);
    let top = twiddling::square_bit::<twiddling::Bitboard>(127);
    assert_eq!(msb(top), 127);
    assert_eq!(lsb(top), 127);
}
