use std::error::Error;
use std::fs;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Parser;

use delve_board::{Board, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use delve_mesh_cpu::BoardModel;
use delve_tiles::{PartKind, TileSetCatalog};

mod export;
mod layout;

#[derive(Parser, Debug)]
#[command(name = "delve", about = "Build a dungeon board mesh from tile sets and a layout")]
struct Args {
    /// Tile-set catalog (TOML)
    #[arg(long, default_value = "assets/tilesets.toml")]
    tilesets: PathBuf,
    /// ASCII layout: one character per tile, one line per row
    #[arg(long, default_value = "assets/demo.layout")]
    layout: PathBuf,
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: usize,
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: usize,
    /// Write the combined mesh as Wavefront OBJ
    #[arg(long)]
    obj: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let catalog = TileSetCatalog::load_from_path(&args.tilesets)
        .map_err(|e| format!("loading {}: {}", args.tilesets.display(), e))?;
    log::info!(
        "loaded {} tile sets, {} materials from {}",
        catalog.len(),
        catalog.materials.len(),
        args.tilesets.display()
    );

    let text = fs::read_to_string(&args.layout)
        .map_err(|e| format!("reading {}: {}", args.layout.display(), e))?;
    let mut model = BoardModel::new(Board::new(args.width, args.height));
    let report = layout::paint_layout(model.board_mut(), &text, &catalog);
    log::info!(
        "painted {} tiles from {} ({} unknown glyphs, {} clipped)",
        report.painted,
        args.layout.display(),
        report.unknown,
        report.clipped
    );

    let mesh = model.regenerate(&catalog)?;
    log::info!(
        "mesh: {} vertices, {} triangles, {} submeshes",
        mesh.vertex_count(),
        mesh.index_count() / 3,
        mesh.submeshes.len()
    );
    for kind in PartKind::ALL {
        log::info!("  {:>8}: {}", kind, mesh.stats.count(kind));
    }
    for (sm, (&mat, &ts)) in mesh
        .submeshes
        .iter()
        .zip(mesh.materials.iter().zip(mesh.tile_sets.iter()))
    {
        log::debug!(
            "  submesh {} / {}: base {} verts {} indices {}+{}",
            catalog.get(ts).map_or("?", |t| t.name.as_str()),
            catalog.materials.key_of(mat).unwrap_or("?"),
            sm.base_vertex,
            sm.vertex_count,
            sm.index_start,
            sm.index_count
        );
    }
    if let Some(bb) = mesh.bounds() {
        log::info!("bounds {:?} .. {:?}", bb.min.to_array(), bb.max.to_array());
    }

    if let Some(path) = &args.obj {
        let mtl_path = path.with_extension("mtl");
        let mtl_file = fs::File::create(&mtl_path)?;
        export::write_mtl(mesh, &catalog.materials, &mut BufWriter::new(mtl_file))?;
        let mtllib = mtl_path.file_name().and_then(|n| n.to_str());
        let file = fs::File::create(path)?;
        export::write_obj(mesh, &catalog.materials, mtllib, &mut BufWriter::new(file))?;
        log::info!("wrote {} and {}", path.display(), mtl_path.display());
    }
    Ok(())
}
