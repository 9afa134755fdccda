use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::{Level, error, info, warn};
use tracing_subscriber::FmtSubscriber;

use colloquy::{
    CleanConfig, FilterConfig, HumanDocument, MachineDocument, Segment, SpeakerConfig,
    clean_transcript, extract_lines, filter_noise, identify_speakers, read_document_file,
    reconstruct_turns,
};

#[derive(Parser)]
#[command(name = "colloquy")]
#[command(author, version, about = "Meeting transcript cleanup pipeline", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Clean one or more transcript documents
    Clean {
        /// Input transcript files (plain text, one paragraph per line)
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Directory for cleaned output files (defaults to each input's directory)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Also write a machine-readable JSON document per input
        #[arg(long)]
        json: bool,

        /// Maximum number of speakers to identify
        #[arg(long, default_value = "2")]
        max_speakers: usize,

        /// File with replacement filler phrases, one per line
        #[arg(long)]
        filler_file: Option<PathBuf>,

        /// Keep blank lines instead of filtering them
        #[arg(long)]
        keep_empty: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Analyze a transcript without writing output
    Analyze {
        /// Input transcript file
        #[arg(short, long)]
        input: PathBuf,

        /// Maximum number of speakers to identify
        #[arg(long, default_value = "2")]
        max_speakers: usize,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Clean {
            inputs,
            output_dir,
            json,
            max_speakers,
            filler_file,
            keep_empty,
            verbose,
        } => {
            setup_logging(verbose);
            clean_documents(
                inputs,
                output_dir,
                json,
                max_speakers,
                filler_file,
                keep_empty,
            )
        }
        Commands::Analyze {
            input,
            max_speakers,
            verbose,
        } => {
            setup_logging(verbose);
            analyze_document(input, max_speakers)
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn build_config(
    max_speakers: usize,
    filler_file: Option<&Path>,
    keep_empty: bool,
) -> Result<CleanConfig> {
    let mut filter = match filler_file {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read filler file {:?}", path))?;
            let words: HashSet<String> = content.lines().map(|line| line.to_string()).collect();
            FilterConfig::with_filler_words(words)
        }
        None => FilterConfig::default(),
    };
    if keep_empty {
        filter = filter.keep_empty_lines();
    }

    Ok(CleanConfig {
        filter,
        speakers: SpeakerConfig { max_speakers },
    })
}

fn clean_documents(
    inputs: Vec<PathBuf>,
    output_dir: Option<PathBuf>,
    json: bool,
    max_speakers: usize,
    filler_file: Option<PathBuf>,
    keep_empty: bool,
) -> Result<()> {
    let config = build_config(max_speakers, filler_file.as_deref(), keep_empty)?;

    if let Some(dir) = &output_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory {:?}", dir))?;
    }

    let run_started = Instant::now();
    let mut cleaned = 0usize;
    let mut failed = 0usize;

    // Each document is processed in isolation; one bad file does not stop
    // the rest of the batch.
    for input in &inputs {
        match clean_one(input, output_dir.as_deref(), json, &config) {
            Ok(speakers) => {
                cleaned += 1;
                info!("Cleaned {:?} (speakers: {})", input, speakers.join(", "));
            }
            Err(err) => {
                failed += 1;
                error!("Failed to clean {:?}: {:#}", input, err);
            }
        }
    }

    info!(
        "Complete: {} file(s) cleaned in {:.2}s",
        cleaned,
        run_started.elapsed().as_secs_f64()
    );

    if failed > 0 {
        bail!("{} file(s) failed", failed);
    }
    Ok(())
}

fn clean_one(
    input: &Path,
    output_dir: Option<&Path>,
    json: bool,
    config: &CleanConfig,
) -> Result<Vec<String>> {
    let started = Instant::now();

    let paragraphs = read_document_file(input)?;
    let result = clean_transcript(&paragraphs, config);

    if result.stats.lines_kept == 0 {
        warn!("{:?}: no content lines left after noise filtering", input);
    }

    let human_path = output_path(input, output_dir, "md");
    HumanDocument::new(&result.document).write_file(&human_path)?;

    let elapsed_ms = started.elapsed().as_millis() as u64;
    if json {
        let machine_path = output_path(input, output_dir, "json");
        MachineDocument::from_result(&result, elapsed_ms).write_json(&machine_path)?;
    }

    info!(
        "{:?}: {} turns from {} paragraphs in {} ms, wrote {:?}",
        input, result.stats.turns, result.stats.paragraphs_in, elapsed_ms, human_path
    );

    Ok(result.roster.labels().to_vec())
}

/// Output file name for a cleaned document: `cleaned_<stem>.<ext>` in the
/// chosen output directory, or next to the input.
fn output_path(input: &Path, output_dir: Option<&Path>, extension: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("transcript");
    let file_name = format!("cleaned_{stem}.{extension}");
    match output_dir {
        Some(dir) => dir.join(file_name),
        None => input.with_file_name(file_name),
    }
}

fn analyze_document(input: PathBuf, max_speakers: usize) -> Result<()> {
    info!("Analyzing transcript from {:?}", input);
    let paragraphs = read_document_file(&input)?;
    let config = build_config(max_speakers, None, false)?;

    let lines = extract_lines(&paragraphs);
    let filtered = filter_noise(&lines, &config.filter);
    let roster = identify_speakers(&filtered.lines, &config.speakers);
    let segments = reconstruct_turns(&filtered.lines, &roster);

    println!("Transcript Analysis");
    println!("===================");
    println!("Paragraphs: {}", paragraphs.len());
    println!(
        "Timestamp lines dropped: {}",
        filtered.timestamp_lines_dropped
    );
    println!("Filler lines dropped: {}", filtered.filler_lines_dropped);
    println!("Content lines kept: {}", filtered.lines.len());
    println!();

    println!("Speaker Candidates");
    println!("------------------");
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for line in &filtered.lines {
        *counts.entry(line.as_str()).or_insert(0) += 1;
    }
    for label in roster.labels() {
        println!(
            "{}: {} occurrences",
            label,
            counts.get(label.as_str()).copied().unwrap_or(0)
        );
    }
    if roster.is_empty() {
        println!("(none found)");
    }
    println!();

    println!("Reconstruction");
    println!("--------------");
    let turns = segments.iter().filter(|s| s.is_label()).count();
    println!("Segments: {}", segments.len());
    println!("Turns: {}", turns);
    println!();

    println!("Speaker Statistics");
    println!("------------------");
    let mut fragments: HashMap<&str, usize> = HashMap::new();
    let mut words: HashMap<&str, usize> = HashMap::new();
    let mut turn_counts: HashMap<&str, usize> = HashMap::new();
    let mut current: Option<&str> = None;
    for segment in &segments {
        match segment {
            Segment::Label(label) => {
                *turn_counts.entry(label.as_str()).or_insert(0) += 1;
                current = Some(label.as_str());
            }
            Segment::Utterance(text) => {
                if let Some(label) = current {
                    *fragments.entry(label).or_insert(0) += 1;
                    *words.entry(label).or_insert(0) += text.split_whitespace().count();
                }
            }
        }
    }
    for label in roster.labels() {
        println!(
            "{}: {} turns, {} fragments, {} words",
            label,
            turn_counts.get(label.as_str()).copied().unwrap_or(0),
            fragments.get(label.as_str()).copied().unwrap_or(0),
            words.get(label.as_str()).copied().unwrap_or(0)
        );
    }

    Ok(())
}
