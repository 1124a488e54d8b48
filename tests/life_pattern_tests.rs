//! Classic life patterns driven through the game model.
//!
//! Each test seeds the field directly, computes generations and compares
//! the occupied cells.

use std::rc::Rc;

use life_arena::core::{CellPos, Player, PlayerId, RoundConfig};
use life_arena::field::{Field, Rectangle};
use life_arena::model::GameModel;
use life_arena::rules::RoundOutcome;

const P0: PlayerId = PlayerId::new(0);
const P1: PlayerId = PlayerId::new(1);

fn model_on(width: usize, height: usize) -> GameModel {
    let field = Rc::new(Field::new(width, height, Box::new(Rectangle)).unwrap());
    let players = vec![Player::new(P0, "Player 0"), Player::new(P1, "Player 1")];
    GameModel::new(RoundConfig::default(), field, players, 42).unwrap()
}

fn seed(model: &GameModel, owner: PlayerId, cells: &[(usize, usize)]) {
    for &(x, y) in cells {
        model
            .field()
            .set_creature_in_cell(CellPos::new(x, y), owner)
            .unwrap();
    }
}

fn occupied(model: &GameModel) -> Vec<CellPos> {
    let mut cells: Vec<_> = model.field().occupancy().into_iter().map(|(pos, _)| pos).collect();
    cells.sort();
    cells
}

fn positions(cells: &[(usize, usize)]) -> Vec<CellPos> {
    let mut cells: Vec<_> = cells.iter().copied().map(CellPos::from).collect();
    cells.sort();
    cells
}

/// A single creature starves.
#[test]
fn test_single_creature_dies() {
    let mut model = model_on(3, 3);
    seed(&model, P0, &[(1, 1)]);

    assert_eq!(model.compute_generation().unwrap(), RoundOutcome::Draw);
    assert!(occupied(&model).is_empty());
}

/// Two neighbors without a third die together.
#[test]
fn test_pair_dies() {
    let mut model = model_on(4, 4);
    seed(&model, P0, &[(1, 1), (2, 1)]);

    model.compute_generation().unwrap();
    assert!(occupied(&model).is_empty());
}

/// An L of three fills in to a block.
#[test]
fn test_l_becomes_block() {
    let mut model = model_on(4, 4);
    seed(&model, P0, &[(1, 1), (2, 1), (1, 2)]);

    model.compute_generation().unwrap();
    assert_eq!(occupied(&model), positions(&[(1, 1), (2, 1), (1, 2), (2, 2)]));
}

/// Blocks never change, and two of them keep the round open.
#[test]
fn test_block_is_stable() {
    let mut model = model_on(8, 4);
    let left = [(1, 1), (2, 1), (1, 2), (2, 2)];
    let right = [(5, 1), (6, 1), (5, 2), (6, 2)];
    seed(&model, P0, &left);
    seed(&model, P1, &right);

    let both: Vec<_> = left.iter().chain(&right).copied().collect();
    for _ in 0..5 {
        assert_eq!(model.compute_generation().unwrap(), RoundOutcome::Continue);
        assert_eq!(occupied(&model), positions(&both));
    }
    assert_eq!(model.winner(), None);
}

/// A blinker flips between horizontal and vertical.
#[test]
fn test_blinker_oscillates() {
    let mut model = model_on(3, 3);
    let horizontal = [(0, 1), (1, 1), (2, 1)];
    let vertical = [(1, 0), (1, 1), (1, 2)];
    seed(&model, P0, &horizontal);

    model.compute_generation().unwrap();
    assert_eq!(occupied(&model), positions(&vertical));
    model.compute_generation().unwrap();
    assert_eq!(occupied(&model), positions(&horizontal));
}

/// One glider step from the reference position.
#[test]
fn test_glider_step() {
    let mut model = model_on(6, 6);
    seed(&model, P0, &[(0, 2), (1, 3), (2, 1), (2, 2), (2, 3)]);

    model.compute_generation().unwrap();
    assert_eq!(
        occupied(&model),
        positions(&[(1, 1), (2, 2), (3, 2), (1, 3), (2, 3)])
    );
}

/// After a full period the glider reappears one cell up and to the left.
#[test]
fn test_glider_moves_up_left() {
    let mut model = model_on(8, 8);
    seed(&model, P0, &[(3, 3), (4, 3), (5, 3), (3, 4), (4, 5)]);

    for _ in 0..4 {
        model.compute_generation().unwrap();
    }
    assert_eq!(
        occupied(&model),
        positions(&[(2, 2), (3, 2), (4, 2), (2, 3), (3, 4)])
    );
}

/// A one-cell board cannot sustain anything.
#[test]
fn test_single_cell_field() {
    let mut model = model_on(1, 1);
    seed(&model, P0, &[(0, 0)]);

    model.compute_generation().unwrap();
    assert!(occupied(&model).is_empty());
}

/// A newborn goes to the player with most neighbors.
#[test]
fn test_owners_after_generation() {
    let mut model = model_on(5, 5);
    // (2, 2) is born from two player 0 creatures and one player 1 creature
    seed(&model, P0, &[(1, 1), (3, 1)]);
    seed(&model, P1, &[(2, 3)]);

    model.compute_generation().unwrap();
    assert_eq!(model.field().occupancy(), vec![(CellPos::new(2, 2), P0)]);
    assert_eq!(model.winner(), Some(P0));
}
