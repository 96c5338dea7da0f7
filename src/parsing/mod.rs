pub mod config;

use config::TOMLConfig;

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::Context;

pub type Point3Data = [f64; 3];

pub fn parse_settings(input: &str) -> anyhow::Result<TOMLConfig> {
    let mut settings: TOMLConfig = toml::from_str(input).context("malformed config")?;
    if settings.render_settings.threads.is_none() {
        settings.render_settings.threads = Some(num_cpus::get() as u16);
    }
    Ok(settings)
}

pub fn get_settings<P: AsRef<Path>>(filepath: P) -> anyhow::Result<TOMLConfig> {
    let filepath = filepath.as_ref();
    let mut input = String::new();
    File::open(filepath)
        .and_then(|mut f| f.read_to_string(&mut input))
        .with_context(|| format!("couldn't read config file {}", filepath.display()))?;
    parse_settings(&input).with_context(|| format!("while parsing {}", filepath.display()))
}
