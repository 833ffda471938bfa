//! Honeycomb Word Search
//!
//! Depth-first search for simple paths through adjacent cells. A word is
//! *found* when some path of pairwise-distinct, consecutively-adjacent cells
//! spells it in order; only existence matters, never the path itself.
//!
//! DFS is the right shape here: depth is bounded by the word length, which
//! keeps memory at O(word) where a breadth-first frontier would balloon, and
//! the first complete match terminates the whole attempt early.

mod searcher;

pub use searcher::{find_words, Searcher};
