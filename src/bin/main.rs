extern crate sphere_raycaster as root;

use root::parsing::parse_settings;
use root::prelude::*;

use anyhow::Context;
use structopt::StructOpt;
use tracing::{error, info, Level};

#[derive(Debug, StructOpt)]
#[structopt(rename_all = "kebab-case")]
struct Opt {
    /// TOML config, the built-in scene is rendered when absent
    #[structopt(long)]
    pub config_file: Option<String>,
    /// overrides render_settings.filename
    #[structopt(short, long)]
    pub output: Option<String>,
    #[structopt(short = "n", long)]
    pub dry_run: bool,
    #[structopt(long, default_value = "warn")]
    pub log_level: String,
}

fn parse_log_level(level: &str, default: Level) -> Level {
    match level.to_lowercase().as_str() {
        "warn" => Level::WARN,
        "info" => Level::INFO,
        "trace" => Level::TRACE,
        "error" => Level::ERROR,
        "debug" => Level::DEBUG,
        _ => default,
    }
}

/// A dry run exists to print the derived constants, so it logs at least at info.
fn log_level(opts: &Opt) -> Level {
    let level = parse_log_level(&opts.log_level, Level::WARN);
    if opts.dry_run {
        level.max(Level::INFO)
    } else {
        level
    }
}

fn run(opts: Opt) -> anyhow::Result<()> {
    let mut config: TOMLConfig = match &opts.config_file {
        Some(path) => get_settings(path)?,
        None => parse_settings("")?,
    };
    if let Some(output) = opts.output {
        config.render_settings.filename = Some(output);
    }

    let threads = config.render_settings.threads.unwrap_or(1).max(1);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads as usize)
        .build_global()
        .context("couldn't build the global thread pool")?;

    let scene = Scene::new(&config.scene).context("invalid scene")?;
    for name in SCALAR_NAMES {
        if let Some(value) = scene.scalar(name) {
            info!("{} = {}", name, value);
        }
    }
    for name in POINT_NAMES {
        if let Some(point) = scene.point(name) {
            info!("{} = {:?}", name, <[f64; 3]>::from(point));
        }
    }
    info!("sphere {:?}", scene.sphere_name);

    if opts.dry_run {
        return Ok(());
    }

    let film = render_scene(&scene, &config.render_settings, config.renderer)?;
    output_film(
        &film,
        config.render_settings.format,
        config.render_settings.filename.as_deref(),
    )
    .context("couldn't write image")?;
    Ok(())
}

fn main() {
    let opts = Opt::from_args();
    tracing_subscriber::fmt()
        .with_max_level(log_level(&opts))
        // stdout carries the image
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(opts) {
        error!("{:?}", e);
        std::process::exit(1);
    }
}
