use serde::Deserialize;

use chess_deck::board::Game;

#[derive(Deserialize)]
struct PerftSet {
    positions: Vec<PerftPosition>,
}

#[derive(Deserialize)]
struct PerftPosition {
    name: String,
    fen: String,
    /// Node counts for depth 1, 2, ...
    nodes: Vec<u64>,
}

#[test]
fn perft_suite() {
    let data = include_str!("data/perft.json");
    let set: PerftSet = serde_json::from_str(data).expect("invalid perft.json");

    for position in &set.positions {
        let mut game = Game::from_fen(&position.fen)
            .unwrap_or_else(|e| panic!("bad fen for {}: {e}", position.name));
        for (depth, &expected) in position.nodes.iter().enumerate() {
            let depth = depth + 1;
            assert_eq!(
                game.perft(depth),
                expected,
                "perft {} depth {}",
                position.name,
                depth
            );
        }
    }
}

#[test]
#[ignore]
fn perft_deep() {
    let mut game = Game::standard();
    assert_eq!(game.perft(5), 4_865_609);
    let mut kiwipete =
        Game::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1")
            .unwrap();
    assert_eq!(kiwipete.perft(4), 4_085_603);
}
