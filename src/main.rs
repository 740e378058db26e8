use crate::cli::run;

pub mod cli;
mod config;
pub mod domain;
pub mod http;
pub mod normalize;
pub mod service;
pub mod upstream;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    run()
}
