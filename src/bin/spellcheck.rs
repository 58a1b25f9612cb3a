//! Interactive spelling suggestions over a word list.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use medoid::cluster::{DEFAULT_MAX_ITER, DEFAULT_MIN_POINTS_PER_TASK};
use medoid::{distances_from, Corpus, CorpusOptions, Levenshtein, MedoidIndex, Pam};

#[derive(Parser)]
#[command(
    name = "spellcheck",
    about = "Cluster a word list and suggest corrections for typed words"
)]
struct Cli {
    /// Word list, one word per line
    words: PathBuf,

    /// Skip words longer than this many characters
    #[arg(long, default_value_t = 50)]
    max_word_len: usize,

    /// Keep the original case of every word
    #[arg(long)]
    keep_case: bool,

    /// Smallest block of points handed to one worker thread
    #[arg(long, default_value_t = DEFAULT_MIN_POINTS_PER_TASK)]
    min_points_per_task: usize,

    /// Refinement cap per cluster split
    #[arg(long, default_value_t = DEFAULT_MAX_ITER)]
    max_iter: usize,

    /// Write skipped words to too_long_words.txt / duplicates.txt in this directory
    #[arg(long)]
    skipped_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,
}

const HELP: &str = "\
Special commands:

/q    - quit the program
/cent - print the most central word and its edit distance to every other word
/clus - print the clusters found by the program
/help - print this information again
";

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let options = CorpusOptions::default()
        .with_max_word_len(cli.max_word_len)
        .with_lowercase(!cli.keep_case);
    let corpus = Corpus::from_path(&cli.words, &options)
        .with_context(|| format!("failed to load {}", cli.words.display()))?;
    let (words, report) = corpus.into_parts();

    if let Some(dir) = &cli.skipped_dir {
        for path in report
            .write_skipped(dir)
            .with_context(|| format!("failed to write skipped words to {}", dir.display()))?
        {
            println!("Skipped words logged to {}", path.display());
        }
    }

    println!("Forming clusters...");
    let pam = Pam::new(Levenshtein)
        .with_min_points_per_task(cli.min_points_per_task)
        .with_max_iter(cli.max_iter);
    let start = Instant::now();
    let index = MedoidIndex::build_with(words, pam).context("failed to build the index")?;
    println!(
        "Done in {:.2} s: {} words in {} clusters\n",
        start.elapsed().as_secs_f64(),
        index.len(),
        index.clusters().len()
    );

    println!("Enter your word and the program will try to correct it\n");
    println!("{HELP}");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    loop {
        print!("Word: ");
        stdout.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match input {
            "/q" => break,
            "/cent" => print_central(&index),
            "/clus" => print_clusters(&index),
            "/help" => println!("\n{HELP}"),
            word => {
                let word = if cli.keep_case {
                    word.to_string()
                } else {
                    word.to_lowercase()
                };
                let start = Instant::now();
                let suggestions = index.suggestions(&word);
                let elapsed = start.elapsed();

                println!("Corrections ({} microseconds):", elapsed.as_micros());
                for (suggestion, distance) in suggestions {
                    println!("\t{suggestion} ({distance})");
                }
                println!();
            }
        }
    }

    Ok(())
}

fn print_central(index: &MedoidIndex<String, Levenshtein>) {
    let central = index.central_point();
    println!("\n{central}:");
    for (word, distance) in distances_from(central, index.points(), index.distance()) {
        println!("\t{word}: {distance}");
    }
    println!();
}

fn print_clusters(index: &MedoidIndex<String, Levenshtein>) {
    println!();
    for cluster in index.clusters() {
        let points = index.points();
        println!("{} ({}):", points[cluster.medoid], cluster.len());
        for &member in &cluster.members {
            println!("\t{}", points[member]);
        }
    }
    println!();
}
