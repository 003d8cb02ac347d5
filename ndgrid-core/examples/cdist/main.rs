use ndgrid_core::{EngineConfig, Mask, PairwiseDistanceEngine, Result, StridedArray};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "debug".into()))
        .init();

    let engine = PairwiseDistanceEngine::new(&EngineConfig::from_env())?;

    let mut points = StridedArray::<f64>::new(&[4, 3])?;
    points.random(-1.0, 1.0)?;
    let mut cloud = StridedArray::<f64>::new(&[1000, 3])?;
    cloud.random(-1.0, 1.0)?;

    let d = engine.cdist(&points, &cloud, 8)?;
    println!("distances: {:?}", d.shape());

    let near = Mask::compare(&d, |x| x < 0.25);
    for point in 0..4 {
        let hits = near
            .nonzero()
            .iter()
            .filter(|idx| idx[0] == point)
            .count();
        println!("point {point}: {hits} neighbours within 0.25");
    }
    Ok(())
}
