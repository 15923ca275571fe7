//! Polyloom demo: builds a few shapes, edits them, and prints SVG path data.
//!
//! Usage:
//! ```text
//! cargo run --example offset_rings
//! RUST_LOG=polyloom=debug cargo run --example offset_rings   # show bevels
//! ```

use polyloom::render::{PathCollector, RenderSink, Style};
use polyloom::{Point2, Result, Shape, ShapeStore, Vector2, Winding};

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for polyloom.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("polyloom=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut store = ShapeStore::new();

    // A hexagon with alternating vertices pushed outward: a six-point star.
    let mut star = Shape::regular(6, 40.0, Point2::new(100.0, 100.0), 0.0)?.with_color("#c33");
    star.select_vertices().every(2, 0).expand(25.0);
    let star_id = store.add(star);

    // A square with one edge extruded into a tab.
    let mut tab = Shape::from_points(
        &[
            Point2::new(200.0, 60.0),
            Point2::new(260.0, 60.0),
            Point2::new(260.0, 120.0),
            Point2::new(200.0, 120.0),
        ],
        Winding::CounterClockwise,
    )?;
    tab.select_edges().at(&[1]).extrude(20.0);
    store.add(tab);

    // Concentric rings around the star; the sharp tips bevel.
    let rings = store.select_ids(&[star_id]).offset_rings(6.0, 3);
    tracing::info!(rings = rings.len(), "added offset rings");

    // Construction guide: kept in the store but not drawn.
    let mut guide = Shape::regular(4, 10.0, Point2::origin(), 0.0)?;
    guide.translate(Vector2::new(20.0, 20.0)).mark_ephemeral();
    store.add(guide);

    let mut sink = PathCollector::default();
    store.render(&mut sink, &Style::default());
    for (data, style) in &sink.paths {
        println!(
            "{data} stroke={} fill={}",
            style.stroke().unwrap_or("none"),
            style.fill().unwrap_or("none")
        );
    }

    let mut stdout = StdoutSink;
    stdout.draw_path(&store.shape(star_id)?.path_data(), &Style::default());
    Ok(())
}

struct StdoutSink;

impl RenderSink for StdoutSink {
    fn draw_path(&mut self, data: &str, _style: &Style) {
        println!("<path d=\"{data}\"/>");
    }
}
