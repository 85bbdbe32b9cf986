use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;
use std::sync::atomic::AtomicBool;

use anyhow::Result;
use clap::{Parser, Subcommand};
use humansize::{format_size, BINARY};
use indicatif::{ProgressBar, ProgressStyle};

use hashseek::finder::{list_files, Combinations};
use hashseek::{
    CandidateFile, DigestOutcome, Finder, HashAlgorithm, HashEngine, SearchOutcome, SearchResult,
};

#[derive(Parser)]
#[command(
    name = "hashseek",
    version,
    about = "Find which combination of files produces a checksum"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search folders for the file combination that matches a checksum
    Find {
        /// Target checksum (hex, case-insensitive)
        #[arg(short, long)]
        checksum: String,
        /// Hash algorithm: sha256, md5, sha1, crc32 or crc64
        #[arg(short, long)]
        algorithm: String,
        /// Folders whose files become search candidates (non-recursive)
        #[arg(required = true)]
        folders: Vec<PathBuf>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Hash an ordered list of files as one concatenated stream
    Hash {
        /// Hash algorithm: sha256, md5, sha1, crc32 or crc64
        #[arg(short, long)]
        algorithm: String,
        /// Files to concatenate, in order
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the candidate files the folders would contribute
    List {
        #[arg(required = true)]
        folders: Vec<PathBuf>,
    },
    /// List supported hash algorithms
    Algorithms,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    match cli.command {
        Command::Find {
            checksum,
            algorithm,
            folders,
            json,
        } => find(checksum, algorithm, folders, json),
        Command::Hash {
            algorithm,
            files,
            json,
        } => hash(algorithm, files, json),
        Command::List { folders } => list(folders),
        Command::Algorithms => algorithms(),
    }
}

fn find(checksum: String, algorithm: String, folders: Vec<PathBuf>, json: bool) -> Result<ExitCode> {
    let algorithm = HashAlgorithm::from_str(&algorithm)?;

    // Sort for a stable candidate order across platforms
    let mut paths = list_files(&folders);
    paths.sort();

    let mut candidates = Vec::new();
    for path in paths {
        match CandidateFile::from_path(&path) {
            Ok(candidate) => candidates.push(candidate),
            Err(e) => eprintln!("Warning: Skipping {}: {}", path.display(), e),
        }
    }

    if !json {
        let total_size: u64 = candidates.iter().map(|c| c.size).sum();
        println!(
            "Searching {} candidate files ({}) for a {} checksum",
            candidates.len(),
            format_size(total_size, BINARY),
            algorithm
        );
        println!(
            "Combinations to try: up to {}",
            Combinations::total(candidates.len())
        );
    }

    let pb = make_progress_bar(json);
    let cancel = AtomicBool::new(false);
    let finder = Finder::new(algorithm);
    let result = finder.find(&candidates, &checksum, &cancel, |percent| {
        pb.set_position(percent as u64);
    });
    pb.finish_and_clear();
    let result = result?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        report_search(&result);
    }

    Ok(match result.outcome {
        SearchOutcome::Found(_) => ExitCode::SUCCESS,
        _ => ExitCode::from(1),
    })
}

fn hash(algorithm: String, files: Vec<PathBuf>, json: bool) -> Result<ExitCode> {
    let algorithm = HashAlgorithm::from_str(&algorithm)?;
    let engine = HashEngine::new(algorithm);

    let pb = make_progress_bar(json);
    let cancel = AtomicBool::new(false);
    let result = engine.digest_files(&files, &cancel, |percent| {
        pb.set_position(percent as u64);
    });
    pb.finish_and_clear();
    let (outcome, total_bytes) = result?;

    let digest = match outcome {
        DigestOutcome::Complete(digest) => digest,
        DigestOutcome::Cancelled => {
            println!("Hashing cancelled.");
            return Ok(ExitCode::from(1));
        }
    };

    if json {
        let report = serde_json::json!({
            "algorithm": algorithm,
            "digest": digest,
            "files": files.len(),
            "total_bytes": total_bytes,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", digest);
        println!(
            "Total size: {} across {} files",
            format_size(total_bytes, BINARY),
            files.len()
        );
    }

    Ok(ExitCode::SUCCESS)
}

fn list(folders: Vec<PathBuf>) -> Result<ExitCode> {
    let mut paths = list_files(&folders);
    paths.sort();

    let mut count = 0usize;
    let mut total_size = 0u64;
    for path in &paths {
        match CandidateFile::from_path(path) {
            Ok(candidate) => {
                println!(
                    "{:>10}  {}",
                    format_size(candidate.size, BINARY),
                    candidate.path.display()
                );
                count += 1;
                total_size += candidate.size;
            }
            Err(e) => eprintln!("Warning: Skipping {}: {}", path.display(), e),
        }
    }
    println!("{} files, {}", count, format_size(total_size, BINARY));

    Ok(ExitCode::SUCCESS)
}

fn algorithms() -> Result<ExitCode> {
    println!("Supported algorithms:");
    for algorithm in HashAlgorithm::ALL {
        println!(
            "  {:<8} {:>2} hex characters",
            algorithm.name(),
            algorithm.digest_len()
        );
    }

    Ok(ExitCode::SUCCESS)
}

fn make_progress_bar(hidden: bool) -> ProgressBar {
    if hidden {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(100);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}%")
            .unwrap()
            .progress_chars("=>-"),
    );
    pb
}

fn report_search(result: &SearchResult) {
    match &result.outcome {
        SearchOutcome::Found(found) => {
            println!("\nMatch found!");
            println!("Digest: {}", found.digest);
            println!("Files ({}):", found.files.len());
            for candidate in &found.files {
                println!(
                    "  {} ({})",
                    candidate.path.display(),
                    format_size(candidate.size, BINARY)
                );
            }
        }
        SearchOutcome::Exhausted => println!("\nNo combination matches the target checksum."),
        SearchOutcome::Cancelled => println!("\nSearch cancelled."),
    }
    println!("Combinations tried: {}", result.stats.combinations_tried);
    println!(
        "Bytes hashed: {} ({})",
        result.stats.bytes_hashed,
        format_size(result.stats.bytes_hashed, BINARY)
    );
    println!("Duration: {:.2}s", result.stats.duration.as_secs_f64());
}
