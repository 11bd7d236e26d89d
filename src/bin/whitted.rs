use whitted::config;
use whitted::render;

use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_OUTPUT: &str = "whitted.png";

fn render_frame(index: usize, frame: &config::RenderFrameConfig) -> Result<(), whitted::Error> {
    config::validate_config(frame)?;
    let scene = frame.build_scene()?;
    let integrator = frame.build_integrator();

    let mut stage = render::Stage::new(scene)
        .with_sampling(frame.samples_per_pixel as usize, frame.seed);
    let mut film = render::Film::new(frame.width as usize, frame.height as usize);
    let camera = stage.camera(frame.fov_y, &film);

    let start = std::time::Instant::now();
    stage.trace(&camera, integrator.as_ref(), &mut film);
    let secs = start.elapsed().as_secs_f64();
    info!(
        frame = index,
        width = frame.width,
        height = frame.height,
        "rendered in {:.3} sec", secs);

    render::write_image(&frame.output_path, &film)
}

pub fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let frames = match std::env::args().nth(1) {
        Some(path) => {
            info!(path = %path, "loading config");
            config::load(&path)?
        },
        None => vec![config::RenderFrameConfig::showcase(DEFAULT_OUTPUT)],
    };

    for (i, frame) in frames.iter().enumerate() {
        render_frame(i, frame)?;
    }
    Ok(())
}
