use game::{
    hash::{initialise_hash_keys, Signature},
    pieces::MoveContext,
    representations::{
        piece_flags::{PieceBit, PieceFlags},
        side::Side,
    },
    rules::Rules,
};
use timed::timed;
use twiddling::{get_bit, Bitboard, Bits};

const PIECES: [(&str, &str, &str, &str, &str, i16); 6] = [
    ("Pawn", "P", "p", "", "step N", 100),
    ("Knight", "N", "n", "N", "leap (1,2)", 325),
    ("Bishop", "B", "b", "B", "slide (D,A)", 325),
    ("Rook", "R", "r", "R", "slide (H,V)", 500),
    ("Queen", "Q", "q", "Q", "slide (H,V,D,A)", 950),
    ("King", "K", "k", "K", "step N,NE,E,SE,S,SW,W,NW", 0),
];

fn format_targets(rules: &Rules<Bitboard>, origin: u32, targets: Bitboard) -> String {
    let mut result = String::new();

    for rank in (0..rules.geometry.ranks).rev() {
        result.push_str(&format!("{:02} ", rank + 1));
        for file in 0..rules.geometry.files {
            let square = rules.geometry.square(file, rank);
            let symbol = if square == origin {
                'O'
            } else if get_bit(targets, square) {
                'X'
            } else {
                '.'
            };
            result.push(symbol);
            result.push_str("  ");
        }
        result.push('\n');
    }
    result
}

#[timed]
fn load_rules() -> Rules<Bitboard> {
    let mut rules: Rules<Bitboard> = Rules::new(8, 8);

    for (name, white, black, notation, movement, value) in PIECES {
        let piece = rules.pieces.add_piece(name, white, black, notation);
        match rules.parse_movement(movement) {
            Ok(flag) => {
                rules.pieces.move_flags[piece] = flag;
                rules.pieces.capture_flags[piece] = flag;
            }
            Err(error) => panic!("Cannot load {}: {}", name, error),
        }
        rules.pieces.value[piece] = value;
    }

    let pawn = 0;
    let king = PIECES.len() - 1;
    rules.pieces.piece_flags[king] = PieceFlags::ROYAL;
    rules.pieces.piece_flags[pawn] = PieceFlags::SET_EP | PieceFlags::TAKE_EP;
    match rules.parse_movement("aleap (1,1),(-1,1)") {
        Ok(capture) => rules.pieces.capture_flags[pawn] = capture,
        Err(error) => panic!("Cannot load Pawn captures: {}", error),
    }

    let last_rank: Bitboard = rules.geometry.rank_mask(7);
    let first_rank: Bitboard = rules.geometry.rank_mask(0);
    let zone = rules
        .pieces
        .define_promotion_zone("last rank", [last_rank, first_rank]);
    let choices: PieceBit = (1..king).collect();
    rules.pieces.allow_promotion(pawn, zone, choices);

    rules.finalise();
    rules
}

fn main() {
    let rules = load_rules();
    let keys = initialise_hash_keys();

    for piece in 0..rules.pieces.num_piece_types {
        println!(
            "{:<8} {:?} min {} max {} avg {}",
            rules.pieces.name[piece],
            rules.pieces.flags(MoveContext::Quiet, piece),
            rules.pieces.min_moves[piece],
            rules.pieces.max_moves[piece],
            rules.pieces.avg_moves[piece],
        );
    }

    let order: Vec<&str> = rules.pieces.val_perm[..rules.pieces.num_piece_types]
        .iter()
        .map(|&piece| rules.pieces.name[piece].as_str())
        .collect();
    println!("value order: {}", order.join(" < "));
    println!("royal {:?} pawns {:?}", rules.pieces.royal_pieces, rules.pieces.pawn_pieces);
    println!(
        "minor {:?} major {:?} super {:?}",
        rules.pieces.minor_pieces, rules.pieces.major_pieces, rules.pieces.super_pieces
    );

    let knight = rules.pieces.piece_id_from_string("N") as usize;
    let g1 = rules.geometry.square(6, 0);
    let flag = rules.pieces.flags(MoveContext::Quiet, knight);
    let targets = rules
        .movement
        .leaper_targets(flag, Side::White, g1, <Bitboard as Bits>::ZERO);
    println!("{}", format_targets(&rules, g1, targets));

    let mut signature = Signature::default();
    signature.toggle_piece(&keys, knight, Side::White, g1);
    signature.toggle_side(&keys);
    println!("signature {:016x}", signature.0);
}
