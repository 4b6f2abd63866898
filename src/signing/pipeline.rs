use std::{
    path::PathBuf,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    thread,
};

use hashbrown::HashMap;
use tqdm::tqdm;
use tracing::debug;

use super::SigningError;
use crate::fs::{FsError, load_tokens};
use crate::hashing::HashKind;
use crate::minhash::MinHash;
use crate::statistics::Stats;

/// Named signatures, in the order their files were given.
pub type Signed = Vec<(String, MinHash<HashKind>)>;

type WorkerOutput = Result<(Vec<(usize, String, MinHash<HashKind>)>, Stats), FsError>;

const BATCH_SIZE: usize = 64;

/// Two entries of a [`Signed`] list, by position, and their estimated similarity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimilarPair {
    pub left: usize,
    pub right: usize,
    pub similarity: f64,
}

/// Signs every file of `files` with a fresh `size`-slot engine, using `num_threads` workers.
///
/// Each signature is named after its path. The result follows the order of `files` no matter
/// which worker handled which batch.
pub fn sign_files(
    files: Arc<Vec<PathBuf>>,
    hash: HashKind,
    size: usize,
    num_threads: usize,
) -> Result<(Signed, Stats), SigningError> {
    if size == 0 {
        return Err(SigningError::ZeroSize);
    }
    if num_threads == 0 {
        return Err(SigningError::NoThreads);
    }

    let next_batch = Arc::new(AtomicUsize::new(0));
    let handles: Vec<_> = (0..num_threads)
        .map(|_thread_id| {
            let files = Arc::clone(&files);
            let next_batch = Arc::clone(&next_batch);

            thread::spawn(move || -> WorkerOutput {
                let mut local_signed = Vec::new();
                let mut local_stats = Stats::new();

                loop {
                    let batch_start = next_batch.fetch_add(BATCH_SIZE, Ordering::Relaxed);
                    if batch_start >= files.len() {
                        break;
                    }
                    let batch_end = std::cmp::min(batch_start + BATCH_SIZE, files.len());

                    for (offset, path) in files[batch_start..batch_end].iter().enumerate() {
                        let tokens = load_tokens(path)?;
                        let mut engine = MinHash::new(hash, size);
                        engine.push_strings(&tokens);

                        local_stats.bump_documents();
                        local_stats.bump_elements(tokens.len());
                        let name = path.display().to_string();
                        local_signed.push((batch_start + offset, name, engine));
                    }
                }

                Ok((local_signed, local_stats))
            })
        })
        .collect();

    let mut indexed = Vec::with_capacity(files.len());
    let mut combined_stats = Stats::new();
    for handle in handles {
        let (local_signed, local_stats) =
            handle.join().map_err(|_| SigningError::WorkerPanicked)??;
        indexed.extend(local_signed);
        combined_stats = combined_stats.merge(&local_stats);
    }

    indexed.sort_by_key(|(index, _, _)| *index);
    let signed = indexed
        .into_iter()
        .map(|(_, name, engine)| (name, engine))
        .collect();

    Ok((signed, combined_stats))
}

/// Folds `fresh` into `stored`.
///
/// A fresh signature whose name is already stored is merged into it, so the stored entry
/// becomes the signature of the union. Unknown names are appended in order.
///
/// # Returns
/// The number of fresh signatures merged into an existing entry
pub fn merge_signed(stored: &mut Signed, fresh: Signed) -> Result<usize, SigningError> {
    let mut positions: HashMap<String, usize> = stored
        .iter()
        .enumerate()
        .map(|(position, (name, _))| (name.clone(), position))
        .collect();

    let mut merged = 0;
    for (name, engine) in fresh {
        if let Some(&position) = positions.get(name.as_str()) {
            debug!(name = %name, "merging into stored signature");
            stored[position]
                .1
                .merge(&engine)
                .map_err(|source| SigningError::Signature {
                    name: name.clone(),
                    source,
                })?;
            merged += 1;
        } else {
            positions.insert(name.clone(), stored.len());
            stored.push((name, engine));
        }
    }
    Ok(merged)
}

/// Compares every unordered pair of `signed` and keeps those at least `threshold` similar.
///
/// Pairs come back by descending similarity; ties keep the order in which they were compared.
pub fn similar_pairs(signed: &Signed, threshold: f64) -> Result<Vec<SimilarPair>, SigningError> {
    let mut pairs = Vec::new();
    for left in tqdm(0..signed.len()) {
        for right in left + 1..signed.len() {
            let similarity = signed[left]
                .1
                .similarity(&signed[right].1)
                .map_err(|source| SigningError::Signature {
                    name: signed[right].0.clone(),
                    source,
                })?;
            if similarity >= threshold {
                pairs.push(SimilarPair {
                    left,
                    right,
                    similarity,
                });
            }
        }
    }
    pairs.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
    Ok(pairs)
}
