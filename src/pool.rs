use std::sync::Mutex;

use crossbeam::thread::Scope;
use crossbeam_channel::{bounded, Receiver, TryRecvError};
use simple_error::SimpleError;

use crate::chunk::{chunk_tokens, WorkChunk};
use crate::config::PipelineConfig;
use crate::tokenize::tokenize;
use crate::types::DocTokens;
use crate::vocab::Vocabulary;


/// Pool bookkeeping observed after a scan, for characterizing achieved
/// parallelism. `peak_live` can never exceed the configured cap.
#[derive(Debug, Clone, Copy)]
pub struct PoolStats {
    pub spawned: usize,
    pub peak_live: usize,
}

#[derive(Default)]
struct PoolCounters {
    live: usize,
    idle: usize,
    spawned: usize,
    peak_live: usize,
}

/// The spawn gate: a worker slot is reserved only when every live worker
/// is busy and the pool is still below its cap. Callers hold the counter
/// lock, so the check and the increment are one atomic decision and
/// concurrent submission bursts cannot overshoot the cap.
fn try_reserve_worker(counters: &mut PoolCounters, cap: usize) -> bool {
    if counters.idle == 0 && counters.live < cap {
        counters.live += 1;
        counters.spawned += 1;
        if counters.live > counters.peak_live {
            counters.peak_live = counters.live;
        }
        true
    } else {
        false
    }
}

fn spawn_worker_if_needed<'env>(
    scope: &Scope<'env>,
    rcv: &Receiver<WorkChunk>,
    vocab: &'env Vocabulary,
    counters: &'env Mutex<PoolCounters>,
    cap: usize,
) {
    let reserved = try_reserve_worker(&mut counters.lock().unwrap(), cap);
    if reserved {
        let rcv = rcv.clone();
        scope.spawn(move |_| worker_loop(&rcv, vocab, counters));
    }
}

/// One worker: take a chunk, register its tokens, repeat. A worker that
/// finds the channel momentarily empty marks itself idle and keeps
/// waiting; it exits only once the channel is closed and drained.
fn worker_loop(rcv: &Receiver<WorkChunk>, vocab: &Vocabulary, counters: &Mutex<PoolCounters>) {
    loop {
        let work_chunk = match rcv.try_recv() {
            Ok(work_chunk) => work_chunk,
            Err(TryRecvError::Empty) => {
                counters.lock().unwrap().idle += 1;
                let waited = rcv.recv();
                counters.lock().unwrap().idle -= 1;
                match waited {
                    Ok(work_chunk) => work_chunk,
                    Err(_) => break,
                }
            }
            Err(TryRecvError::Disconnected) => break,
        };
        for token in work_chunk.tokens() {
            vocab.register_if_absent(token);
        }
    }
    counters.lock().unwrap().live -= 1;
}

/// The concurrent phase: tokenizes and chunks documents on the calling
/// thread, fans chunks out to an elastically sized pool of workers, and
/// returns once every chunk has been registered.
///
/// The bounded channel doubles as backpressure: submission blocks while
/// the transport is full. The first submission always reserves a worker
/// before sending, so a full channel always has someone draining it.
/// Dropping the sender closes the channel; the scope join is the
/// full-drain barrier, after which the vocabulary is finalized.
pub fn scan_documents<S: AsRef<str>>(
    documents: &[S],
    config: &PipelineConfig,
) -> Result<(Vocabulary, Vec<DocTokens>, PoolStats), SimpleError> {
    config.validate()?;

    let vocab = Vocabulary::new();
    let counters = Mutex::new(PoolCounters::default());
    let mut doc_tokens: Vec<DocTokens> = Vec::with_capacity(documents.len());

    crossbeam::scope(|scope| {
        let (snd, rcv) = bounded(config.max_workers);
        for doc in documents {
            let tokens: DocTokens = tokenize(doc.as_ref()).into();
            for work_chunk in chunk_tokens(&tokens, config.max_chunk_size) {
                spawn_worker_if_needed(scope, &rcv, &vocab, &counters, config.max_workers);
                snd.send(work_chunk).unwrap();
            }
            doc_tokens.push(tokens);
        }
        // Closing the channel is what lets waiting workers exit.
        drop(snd);
    })
    .unwrap();

    let counters = counters.into_inner().unwrap();
    Ok((
        vocab,
        doc_tokens,
        PoolStats {
            spawned: counters.spawned,
            peak_live: counters.peak_live,
        },
    ))
}
