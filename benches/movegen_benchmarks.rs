use chess_deck::board::{attack_tables, Color, Deck, Game, SlideAxis, Square};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
const MIDDLEGAME: &str = "r1bq1rk1/pp2bppp/2n1pn2/3p4/2PP4/2N1PN2/PP2BPPP/R2QKB1R w KQ - 0 8";

fn deck_game() -> Game {
    let mut rng = StdRng::seed_from_u64(7);
    let white = Deck::random(&mut rng, Color::White);
    let black = Deck::random(&mut rng, Color::Black);
    Game::from_decks(&white, &black).expect("random decks are legal")
}

fn perft_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    group.sample_size(10);

    for depth in 1..=3 {
        let mut game = Game::standard();
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| game.perft(black_box(depth)))
        });
    }

    for depth in 1..=2 {
        let mut game = Game::from_fen(KIWIPETE).unwrap();
        group.bench_with_input(BenchmarkId::new("kiwipete", depth), &depth, |b, &depth| {
            b.iter(|| game.perft(black_box(depth)))
        });
    }

    for depth in 1..=2 {
        let mut game = deck_game();
        group.bench_with_input(BenchmarkId::new("random_decks", depth), &depth, |b, &depth| {
            b.iter(|| game.perft(black_box(depth)))
        });
    }

    group.finish();
}

fn movegen_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let positions = [
        ("startpos", Game::standard()),
        ("middlegame", Game::from_fen(MIDDLEGAME).unwrap()),
        ("kiwipete", Game::from_fen(KIWIPETE).unwrap()),
        ("random_decks", deck_game()),
    ];
    for (name, game) in &positions {
        group.bench_function(*name, |b| b.iter(|| black_box(game).legal_moves()));
    }

    group.finish();
}

fn attack_table_benchmark(c: &mut Criterion) {
    let tables = attack_tables();
    let game = Game::from_fen(KIWIPETE).unwrap();
    let occupied = game.board().occupied();

    c.bench_function("slide_lookups", |b| {
        b.iter(|| {
            let mut acc = 0u64;
            for idx in 0..64 {
                let sq = Square::from_index(idx).unwrap();
                for axis in SlideAxis::ALL {
                    acc ^= tables.slide(axis, sq, black_box(occupied)).0;
                }
            }
            acc
        })
    });

    c.bench_function("square_attacked", |b| {
        b.iter(|| {
            (0..64)
                .filter_map(Square::from_index)
                .filter(|&sq| game.is_square_attacked(sq, Color::Black))
                .count()
        })
    });
}

criterion_group!(
    benches,
    perft_benchmark,
    movegen_benchmark,
    attack_table_benchmark
);
criterion_main!(benches);
