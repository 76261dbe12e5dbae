//! Replays the classic reference traces through every policy, printing the
//! frame table after each load.
//!
//! Run with: `cargo run --example replay`

use framekit::engine::{FrameCache, ReplacementPolicy};
use framekit::page::PageId;
use framekit::snapshot::{FrameMeta, FrameSnapshot};

fn render_frame(frame: &FrameSnapshot) -> String {
    let page = match frame.page() {
        Some(page) => page.to_string(),
        None => "-".to_string(),
    };
    match frame.meta() {
        FrameMeta::Lru => page,
        FrameMeta::Lfu { frequency } => format!("{page}(f{frequency})"),
        FrameMeta::Clock { referenced } => {
            format!("{page}({})", if referenced { "r" } else { "." })
        }
    }
}

fn replay(policy: ReplacementPolicy, capacity: usize, trace: &[u64]) {
    let mut cache = match FrameCache::new(policy, capacity) {
        Ok(cache) => cache,
        Err(err) => {
            eprintln!("cannot build cache: {err}");
            return;
        }
    };

    println!("--- {policy:?}, {capacity} frames ---");
    for &raw in trace {
        let access = cache.load_page(PageId::new(raw));
        let frames: Vec<String> = cache.snapshot().iter().map(render_frame).collect();
        println!("load {raw:>2} {access:>4?}  [{}]", frames.join(" "));
    }
    println!();
}

fn main() {
    let lfu_trace = [1, 2, 3, 4, 5, 1, 2, 1, 3, 4];
    let lru_trace = [1, 2, 3, 4, 5];

    replay(ReplacementPolicy::Lfu, 4, &lfu_trace);
    replay(ReplacementPolicy::Lru, 4, &lru_trace);
    replay(ReplacementPolicy::Clock, 4, &lru_trace);
}
