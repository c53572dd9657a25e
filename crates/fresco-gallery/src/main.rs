use anyhow::{Context, Result, bail};
use fresco_geom::logging::{LoggingConfig, init_logging};
use fresco_geom::scene::DrawList;
use fresco_geom::tess::{self, Batch};

mod scenes;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let args: Vec<String> = std::env::args().skip(1).collect();
    let names: Vec<&str> = if args.is_empty() {
        vec!["house", "spiral"]
    } else {
        args.iter().map(String::as_str).collect()
    };

    for name in names {
        let mut scene = match name {
            "house" => scenes::house(),
            "spiral" => scenes::spiral(),
            other => bail!("unknown scene {other:?} (expected \"house\" or \"spiral\")"),
        };
        report(name, &mut scene)?;
    }

    Ok(())
}

/// Tessellates `scene` and prints an upload manifest: one line per batch in
/// paint order, exactly what a harness would turn into buffers + draw calls.
fn report(name: &str, scene: &mut DrawList) -> Result<()> {
    let batches =
        tess::tessellate_list(scene).with_context(|| format!("tessellating scene {name:?}"))?;

    println!();
    println!("  scene \"{name}\": {} batches, back to front", batches.len());
    println!("  {:<10} {:<14} {:>8} {:>8}  {}", "shape", "topology", "verts", "bytes", "color");
    for batch in &batches {
        let [r, g, b] = batch.color().to_array();
        println!(
            "  {:<10} {:<14} {:>8} {:>8}  ({r:.2}, {g:.2}, {b:.2})",
            batch.shape(),
            batch.topology().name(),
            batch.vertex_count(),
            batch.as_bytes().len(),
        );
    }

    let verts: usize = batches.iter().map(Batch::vertex_count).sum();
    let bytes: usize = batches.iter().map(|b| b.as_bytes().len()).sum();
    log::info!("scene {name:?}: {verts} vertices ({bytes} bytes) ready for upload");

    Ok(())
}
