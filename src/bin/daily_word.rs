use std::path::PathBuf;
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};
use clap::Parser;
use daily_anagram::puzzle::*;

/// Prints yesterday's, today's and tomorrow's puzzles from a published list.
#[derive(Parser, Debug)]
#[command(name = "daily_word", version)]
struct Options {
    /// Published canonical list
    #[arg(long, value_name = "PATH", default_value_os_t = default_canonical_list_path())]
    list: PathBuf,

    /// Resolve for this instant (epoch ms) instead of now
    #[arg(long)]
    now: Option<i64>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = run(Options::parse()) {
        log::error!("{}", err);
        process::exit(1);
    }
}

fn run(options: Options) -> Result<(), Box<dyn std::error::Error>> {
    let now = match options.now {
        Some(now) => now,
        None => SystemTime::now().duration_since(UNIX_EPOCH)?.as_millis() as i64,
    };

    let list = CanonicalList::load(&options.list)?;
    let rotation = resolve(now, &list).ok_or("the word list is empty")?;
    println!("{}", serde_json::to_string_pretty(&rotation)?);
    Ok(())
}
