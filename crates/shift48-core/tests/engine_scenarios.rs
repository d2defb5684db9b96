//! End-to-end checks through the public API only.

use shift48_core::{Direction, Game, Grid, GRID_SIZE};

fn adjacent_equal_pair(values: &[[u32; GRID_SIZE]; GRID_SIZE]) -> bool {
    for y in 0..GRID_SIZE {
        for x in 0..GRID_SIZE {
            let v = values[y][x];
            if x + 1 < GRID_SIZE && values[y][x + 1] == v {
                return true;
            }
            if y + 1 < GRID_SIZE && values[y + 1][x] == v {
                return true;
            }
        }
    }
    false
}

#[test]
fn random_playout_reaches_a_consistent_terminal_state() {
    let mut game = Game::new(Some(2024));
    let mut steps = 0;
    while !game.is_over() && steps < 100_000 {
        for direction in Direction::ALL {
            if game.step(direction) {
                break;
            }
        }
        steps += 1;
    }

    assert!(game.is_over(), "playout did not terminate");
    let values = game.grid().to_values();
    assert_eq!(game.grid().count_empty(), 0);
    assert!(!adjacent_equal_pair(&values));
    for &value in values.iter().flatten() {
        assert!(value >= 2 && value.is_power_of_two());
    }
}

#[test]
fn terminal_state_matches_the_detector() {
    let stuck = Grid::from_values([
        [2, 4, 2, 4],
        [4, 2, 4, 2],
        [2, 4, 2, 4],
        [4, 2, 4, 2],
    ]);
    assert!(!stuck.has_legal_move());

    // The same board with any two equal neighbors is live again.
    let mut live = stuck.to_values();
    live[0][1] = 2;
    assert!(Grid::from_values(live).has_legal_move());
}

#[test]
fn method_and_free_function_views_agree() {
    let mut a = Grid::from_values([
        [2, 2, 4, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ]);
    let mut b = a;
    assert_eq!(
        a.attempt_move(Direction::Right),
        shift48_core::engine::attempt_move(&mut b, Direction::Right)
    );
    assert_eq!(a, b);
    assert_eq!(a.to_values()[0], [0, 0, 4, 4]);
}
