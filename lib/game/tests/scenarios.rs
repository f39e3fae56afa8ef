use game::{
    constants::*,
    hash::initialise_hash_keys,
    pieces::{MoveContext, Zone},
    representations::{
        move_flag::Directions,
        movement::Movement,
        piece_flags::{PieceBit, PieceFlags},
        side::{Side, SIDES},
    },
    rules::Rules,
};
use ntest::timeout;
use twiddling::{get_bit, popcount, Bitboard, Bits};

fn rook_and_knight() -> (Rules<Bitboard>, usize, usize) {
    let mut rules: Rules<Bitboard> = Rules::new(8, 8);
    let rook = rules.pieces.add_piece("Rook", "R", "r", "R");
    let knight = rules.pieces.add_piece("Knight", "N", "n", "N");

    for (piece, text) in [(rook, "slide (H,V)"), (knight, "leap (1,2)")] {
        let flag = rules.parse_movement(text).unwrap();
        rules.pieces.move_flags[piece] = flag;
        rules.pieces.capture_flags[piece] = flag;
    }

    rules.pieces.value[rook] = 500;
    rules.pieces.value[knight] = 300;
    rules.finalise();

    (rules, rook, knight)
}

#[test]
fn rook_and_knight_descriptors() {
    let (rules, rook, knight) = rook_and_knight();

    let r = rules.pieces.flags(MoveContext::Quiet, rook);
    assert!(r.is_slider());
    assert!(!r.is_hopper() && !r.is_leaper() && !r.is_rider() && !r.is_stepper());
    assert_eq!(Movement::from(r).slider, Directions::H | Directions::V);

    let n = rules.pieces.flags(MoveContext::Capture, knight);
    assert!(n.is_leaper());
    assert!(n.is_simple_leaper());
    assert!(!n.is_aleaper());
    assert_eq!(n.leaper_index(), 0);

    let g1 = rules.geometry.square(6, 0);
    let targets = rules
        .movement
        .leaper_targets(n, Side::White, g1, <Bitboard as Bits>::ZERO);
    assert_eq!(popcount(targets), 3);
    assert!(get_bit(targets, rules.geometry.square(5, 2)));
}

#[test]
fn value_order_and_classes() {
    let (rules, rook, knight) = rook_and_knight();

    assert_eq!(&rules.pieces.val_perm[..2], &[knight, rook]);
    assert_eq!(rules.pieces.minor_pieces, PieceBit::of(knight));
    assert_eq!(rules.pieces.major_pieces, PieceBit::of(rook));
    assert_eq!(rules.pieces.defensive_pieces, PieceBit::of(knight));
    assert!(rules.pieces.royal_pieces.is_empty());
}

#[test]
fn symbol_lookup() {
    let (rules, _, knight) = rook_and_knight();

    assert_eq!(rules.pieces.piece_id_from_string("N"), knight as i32);
    assert_eq!(rules.pieces.piece_id_from_string("?"), NO_PIECE);
    assert_eq!(rules.pieces.promotion_piece_id_from_string("n"), knight as i32);
}

#[test]
fn large_board_with_drop_zone() {
    let mut rules: Rules<Bitboard> = Rules::new(12, 10);
    let king = rules.pieces.add_piece("King", "K", "k", "K");
    let lion = rules.pieces.add_piece("Lion", "L", "l", "L");

    rules.pieces.piece_flags[king] = PieceFlags::ROYAL;
    rules.pieces.move_flags[king] = rules.parse_movement("leap (1,0)+(1,1)").unwrap();
    rules.pieces.move_flags[lion] =
        rules.parse_movement("leap (1,0)+(1,1)+(2,0)+(2,1)+(2,2)").unwrap();
    rules.pieces.value[lion] = 1500;

    let top: Bitboard = rules.geometry.rank_mask(9);
    rules.pieces.set_zone(Zone::Drop, Side::White, lion, top);
    rules.finalise();

    assert_eq!(rules.pieces.max_moves[king], 8);
    assert_eq!(rules.pieces.max_moves[lion], 24);
    assert_eq!(rules.pieces.super_pieces, PieceBit::of(lion));
    assert_eq!(rules.pieces.royal_pieces, PieceBit::of(king));
    assert_eq!(&rules.pieces.val_perm[..2], &[lion, king]);

    let corner = rules.geometry.square(11, 9);
    assert!(get_bit(rules.pieces.zone(Zone::Drop, Side::White, lion), corner));
    assert_eq!(rules.pieces.mobility[lion][Side::Black.index()][corner as usize], 8);
}

#[test]
#[timeout(10000)]
fn hash_keys_are_reproducible() {
    let first = initialise_hash_keys();
    let second = initialise_hash_keys();

    for piece in 0..MAX_PIECE_TYPES {
        for side in SIDES {
            assert_eq!(first.hold_key(piece, side, 0), 0);
            for count in 0..MAX_HOLDINGS {
                assert_eq!(first.hold_key(piece, side, count), second.hold_key(piece, side, count));
            }
            for square in 0..MAX_SQUARES as u32 {
                assert_eq!(
                    first.piece_key(piece, side, square),
                    second.piece_key(piece, side, square)
                );
            }
        }
    }

    for side in SIDES {
        for index in 0..FLAG_KEYS {
            assert_eq!(first.flag_key(side, index), second.flag_key(side, index));
        }
    }
    assert_eq!(first.side_to_move_key(), second.side_to_move_key());
    assert_eq!(first.en_passant_key(77), second.en_passant_key(77));
}
