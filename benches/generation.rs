use std::rc::Rc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use life_arena::core::{CellPos, LifeConfig, PlayerId};
use life_arena::model::GameModel;

/// Default 50x50 rhombus board tiled with blinkers of alternating owners,
/// so every generation does the same amount of work.
fn blinker_board() -> GameModel {
    let model = GameModel::from_config(&LifeConfig::default()).unwrap();
    let field = Rc::clone(model.field());

    let mut owner = 0;
    for y in (1..49).step_by(4) {
        for x in (0..47).step_by(5) {
            let phases = [(x, y), (x + 1, y), (x + 2, y), (x + 1, y - 1), (x + 1, y + 1)];
            if phases.iter().any(|&(px, py)| field.is_excluded_cell(CellPos::new(px, py))) {
                continue;
            }
            for &(px, py) in &phases[..3] {
                field
                    .set_creature_in_cell(CellPos::new(px, py), PlayerId::new(owner))
                    .unwrap();
            }
            owner = 1 - owner;
        }
    }
    model
}

fn bench_generation(c: &mut Criterion) {
    let mut model = blinker_board();
    c.bench_function("generation 50x50 rhombus", |b| {
        b.iter(|| black_box(model.compute_generation().unwrap()))
    });
}

fn bench_neighbor_count(c: &mut Criterion) {
    let model = blinker_board();
    let field = Rc::clone(model.field());
    let cells: Vec<_> = field.playable_cells().collect();
    c.bench_function("neighbor counts 50x50 rhombus", |b| {
        b.iter(|| {
            for &pos in &cells {
                black_box(field.count_cell_neighbors_creatures(pos).unwrap());
            }
        })
    });
}

criterion_group!(benches, bench_generation, bench_neighbor_count);
criterion_main!(benches);
