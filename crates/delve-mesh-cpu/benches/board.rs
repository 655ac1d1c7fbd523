use criterion::{Criterion, black_box, criterion_group, criterion_main};

use delve_board::Board;
use delve_mesh_cpu::build_board_mesh;
use delve_tiles::primitives;
use delve_tiles::{Model, NamedPart, TileSetCatalog, TileSetId};

fn kit(name: &str, gate: bool) -> Model {
    let mut parts = vec![
        NamedPart::new("floor", primitives::floor()),
        NamedPart::new("ceiling", primitives::ceiling()),
        NamedPart::new("half_wall", primitives::half_wall()),
        NamedPart::new("corner", primitives::half_corner()),
        NamedPart::new("inset", primitives::half_inset()),
    ];
    if gate {
        parts.push(NamedPart::new("gate", primitives::gate()));
    }
    Model::new(name, parts)
}

fn registry() -> TileSetCatalog {
    let mut cat = TileSetCatalog::new();
    let stone = cat.materials.insert("stone", Vec::new());
    let wood = cat.materials.insert("wood", Vec::new());
    cat.add("hall", stone, 0, None, kit("hall", false));
    cat.add("door", wood, 2, None, kit("door", true));
    cat
}

/// Rooms on a lattice joined by corridors, doors at every corridor mouth.
fn lattice_board() -> Board {
    let mut b = Board::default();
    let (w, h) = (b.width() as i32, b.height() as i32);
    for y in 0..h {
        for x in 0..w {
            let room = x % 8 < 5 && y % 8 < 5;
            let corridor_x = y % 8 == 2 && x % 8 >= 5;
            let corridor_y = x % 8 == 2 && y % 8 >= 5;
            if room {
                b.set_tile_set(x, y, Some(TileSetId(0)));
            } else if corridor_x || corridor_y {
                let mouth = x % 8 == 5 || y % 8 == 5;
                let id = if mouth { 1 } else { 0 };
                b.set_tile_set(x, y, Some(TileSetId(id)));
            }
        }
    }
    b
}

fn bench_build_board(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_board_mesh");
    let reg = registry();
    let full = {
        let mut b = Board::default();
        for y in 0..b.height() as i32 {
            for x in 0..b.width() as i32 {
                b.set_tile_set(x, y, Some(TileSetId(0)));
            }
        }
        b
    };
    let lattice = lattice_board();
    group.bench_function("filled_64x64", |b| {
        b.iter(|| black_box(build_board_mesh(&full, &reg)))
    });
    group.bench_function("lattice_64x64", |b| {
        b.iter(|| black_box(build_board_mesh(&lattice, &reg)))
    });
    group.finish();
}

criterion_group!(benches, bench_build_board);
criterion_main!(benches);
