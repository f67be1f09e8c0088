mod config;
mod currency;
mod export;
mod forecast;
mod import;
mod models;
mod report;
mod run;

use anyhow::Result;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().collect();
    let today = chrono::Local::now().date_naive();
    let settings = config::Settings::resolve(&args, |key| std::env::var(key).ok(), today)?;
    run::as_cli(&args, &settings)
}
