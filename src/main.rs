use anyhow::{Context, ensure};
use clap::Parser;
use minwise::{
    fs::SignatureStore,
    hashing::HashKind,
    signing::{Signed, merge_signed, sign_files, similar_pairs},
};
use std::{path::PathBuf, sync::Arc};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Near-duplicate detection over token files using MinHash signatures
#[derive(Parser, Debug)]
#[command(name = "minwise")]
#[command(about = "Estimates Jaccard similarity between token files with MinHash", long_about = None)]
struct Args {
    /// Token files to sign, tokens are separated by whitespace
    files: Vec<PathBuf>,

    /// Number of slots in each signature
    #[arg(short, long, default_value_t = 128)]
    size: usize,

    /// Two-output hash function (xxh3-128, murmur3-128, xxh3-murmur3)
    #[arg(long, default_value_t = HashKind::Xxh3)]
    hash: HashKind,

    /// Number of threads signing files in parallel
    #[arg(short, long, default_value_t = 1)]
    threads: usize,

    /// Only report pairs whose estimated similarity is at least this value
    #[arg(long, default_value_t = 0.0)]
    threshold: f64,

    /// Signature store to resume from. Files already present are merged into their stored signature
    #[arg(short, long)]
    load: Option<PathBuf>,

    /// Write every signature to this store when done
    #[arg(long)]
    save: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    ensure!(args.size > 0, "--size must be positive");
    ensure!(args.threads > 0, "--threads must be positive");

    let mut signed: Signed = match &args.load {
        Some(path) => {
            let store = SignatureStore::load(path)
                .with_context(|| format!("loading signatures from {}", path.display()))?;
            store
                .ensure_compatible(args.size, args.hash)
                .with_context(|| format!("resuming from {}", path.display()))?;
            store.engines()
        }
        None => Vec::new(),
    };

    info!(
        files = args.files.len(),
        size = args.size,
        hash = %args.hash,
        threads = args.threads,
        "signing files"
    );
    let start_time = std::time::Instant::now();
    let (fresh, stats) = sign_files(Arc::new(args.files), args.hash, args.size, args.threads)?;
    info!(
        documents = stats.get_documents(),
        elements = stats.get_elements(),
        elapsed_s = start_time.elapsed().as_secs_f64(),
        "signing done"
    );

    let merged = merge_signed(&mut signed, fresh)?;
    if merged > 0 {
        info!(merged, "merged fresh signatures into stored ones");
    }

    if let Some(path) = &args.save {
        let mut store = SignatureStore::new(args.size, args.hash)?;
        for (name, engine) in &signed {
            store.insert(name.as_str(), engine.signature())?;
        }
        store
            .save(path)
            .with_context(|| format!("saving signatures to {}", path.display()))?;
    }

    let pairs = similar_pairs(&signed, args.threshold)?;
    for pair in &pairs {
        println!(
            "{:.4}\t{}\t{}",
            pair.similarity, signed[pair.left].0, signed[pair.right].0
        );
    }
    info!(
        signatures = signed.len(),
        reported = pairs.len(),
        threshold = args.threshold,
        "comparison done"
    );

    Ok(())
}
