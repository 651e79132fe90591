use std::fs::File;
use std::io::{BufRead, BufReader};

use argh::FromArgs;
use wordbag::bow::vectorize;
use wordbag::config::PipelineConfig;
use wordbag::matrix::Matrix;


#[derive(FromArgs)]
/// Build bag-of-words vectors for a batch of documents.
struct MkBow {
    /// maximum tokens handed to a worker at once
    #[argh(option, default = "wordbag::config::DEFAULT_CHUNK_SIZE")]
    chunk_size: usize,

    /// cap on concurrent worker threads
    #[argh(option)]
    max_workers: Option<usize>,

    /// print the sorted vocabulary
    #[argh(switch)]
    vocab: bool,

    /// path to a text file with one document per line
    #[argh(positional)]
    input: String,
}


fn main() {
    let args: MkBow = argh::from_env();

    let file = File::open(&args.input).unwrap();
    let documents: Vec<String> = BufReader::new(file)
        .lines()
        .map(|line| line.unwrap())
        .collect();

    let mut config = PipelineConfig::default();
    config.max_chunk_size = args.chunk_size;
    if let Some(max_workers) = args.max_workers {
        config.max_workers = max_workers;
    }

    let bow = vectorize(&documents, &config).unwrap();

    let counts = Matrix::from_rows(&bow.vectors).unwrap();
    let num_values = bow
        .vectors
        .iter()
        .flatten()
        .filter(|count| **count != 0.0)
        .count();

    println!("Vocab size: {}", bow.vocab.len());
    println!("Num docs: {}", counts.rows());
    println!("Num values: {}", num_values);
    if !counts.is_empty() {
        println!(
            "Density: {}",
            num_values as f64 / (counts.rows() * counts.cols()) as f64
        );
    }
    println!(
        "Workers spawned: {} (peak {})",
        bow.stats.spawned, bow.stats.peak_live
    );

    if args.vocab {
        for token in bow.vocab.sorted_tokens() {
            println!("{}", token);
        }
    }
}
