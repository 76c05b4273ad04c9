//! Populates a region around the given coordinates with sample overlays and prints the result as JSON.
//!
//! ```sh
//! RUST_LOG=debug cargo run --example scene -- 42.36 -71.06
//! ```

use maputil::demo::{populate_scene, SceneConfig};
use maputil::{latlon, Region, Span};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<f64> = std::env::args()
        .skip(1)
        .map(|arg| arg.parse())
        .collect::<Result<_, _>>()?;
    let (lat, lon) = match args.as_slice() {
        [lat, lon] => (*lat, *lon),
        [] => (42.36, -71.06),
        _ => return Err("expected latitude and longitude".into()),
    };

    let region = Region::new(latlon!(lat, lon), Span::new(0.2, 0.2)).validate()?;
    let mut rng = StdRng::seed_from_u64(0);
    let scene = populate_scene(&mut rng, &region, &SceneConfig::default().with_random_styles(true))?;

    log::info!("Visible region: {:?}", scene.visible_region()?);
    println!("{}", serde_json::to_string_pretty(&scene)?);

    Ok(())
}
