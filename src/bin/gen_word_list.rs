/*
 * MIT License
 *
 * Copyright (c) 2022 Joseph Sacchini
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

use std::path::PathBuf;
use std::process;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};
use clap::Parser;
use daily_anagram::puzzle::*;

/// Merges the curated word list into the published canonical list and picks extra letters.
#[derive(Parser, Debug)]
#[command(name = "gen_word_list", version)]
struct Options {
    /// Curated word source, one word per line
    #[arg(long, value_name = "PATH", default_value_os_t = default_word_source_path())]
    words: PathBuf,

    /// Reference dictionary used for collision checks, one word per line
    #[arg(long, value_name = "PATH", default_value_os_t = default_dictionary_path())]
    dictionary: PathBuf,

    /// Previously published list (defaults to --out, if it exists)
    #[arg(long, value_name = "PATH")]
    previous: Option<PathBuf>,

    /// Where to write the new list
    #[arg(long, value_name = "PATH", default_value_os_t = default_canonical_list_path())]
    out: PathBuf,

    #[arg(long, default_value_t = WORD_LENGTH)]
    word_length: usize,

    /// Extra letters to offer per puzzle (capped at 9)
    #[arg(long, default_value_t = DEFAULT_NUM_EXTRA_LETTERS)]
    num_extra_letters: usize,

    /// Skip (and log) curated words that are anagrams of another dictionary word
    #[arg(long)]
    check_full_dictionary: bool,

    /// Drop upcoming words that cannot get every requested extra letter
    #[arg(long)]
    require_full_extras: bool,

    /// First day (epoch ms) for a brand new list
    #[arg(long)]
    first_day: Option<i64>,

    /// Pretend the current time is this (epoch ms)
    #[arg(long)]
    now: Option<i64>,
}

impl Options {
    fn generate_options(&self) -> GenerateOptions {
        GenerateOptions {
            word_length: self.word_length,
            num_extra_letters: self.num_extra_letters,
            check_full_dictionary: self.check_full_dictionary,
            require_full_extras: self.require_full_extras,
            first_day: self.first_day,
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = run(Options::parse()) {
        log::error!("{}", err);
        process::exit(1);
    }
}

fn run(options: Options) -> Result<(), Box<dyn std::error::Error>> {
    let now = options.now.unwrap_or_else(epoch_ms_now);
    let words = read_word_list(&options.words, options.word_length)?;
    let dictionary = read_word_list(&options.dictionary, options.word_length)?;
    let previous_path = options.previous.as_ref().unwrap_or(&options.out);
    let previous = CanonicalList::load_if_exists(previous_path)?;
    match &previous {
        Some(p) => log::info!("previous list has {} entries, now at day {}", p.len(), p.day_index_at(now)),
        None => log::info!("no previous list at {}, starting a new one", previous_path.display()),
    }

    let generate_options = options.generate_options();
    let (dur, out) = timed(|| regenerate(
        previous.as_ref(),
        &words,
        &dictionary,
        &DATA.letter_frequency,
        &generate_options,
        now,
    ));

    if out.is_empty() {
        return Err("refusing to publish an empty word list".into());
    }

    out.save(&options.out)?;
    log::info!("done! wrote {} entries to {} in {:.2}s", out.len(), options.out.display(), dur.as_secs_f64());
    Ok(())
}

fn epoch_ms_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

fn timed<R, F>(f: F) -> (Duration, R)
    where F: FnOnce() -> R
{
    let start_at = Instant::now();
    let out = f();
    let dur = start_at.elapsed();

    (dur, out)
}
