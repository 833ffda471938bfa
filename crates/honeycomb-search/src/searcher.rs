//! Recursive DFS with caller-owned visited state.

use honeycomb_grid::{CellId, Honeycomb};

/// Word lookups against one grid.
///
/// Owns the visited buffer (one slot per cell) so the grid itself stays
/// immutable during search. The buffer is all-false between lookups: every
/// recursion marks its cell on entry and unmarks it on every exit path, so
/// no attempt ever observes marks left by a sibling branch or an earlier
/// word.
pub struct Searcher<'a> {
    grid: &'a Honeycomb,
    visited: Vec<bool>,
}

impl<'a> Searcher<'a> {
    /// Create a searcher over `grid`.
    pub fn new(grid: &'a Honeycomb) -> Self {
        Self {
            grid,
            visited: vec![false; grid.len()],
        }
    }

    /// Whether `word` can be spelled by a simple path of adjacent cells.
    ///
    /// Start points are the cells holding the first letter, tried in
    /// discovery order; neighbor slots are tried in their fixed role order,
    /// so lookups are deterministic. A one-letter word is found iff the
    /// letter occurs anywhere. `word` must be non-empty; empty entries are
    /// the caller's to filter out.
    pub fn contains(&mut self, word: &str) -> bool {
        debug_assert!(!word.is_empty(), "empty word passed to search");
        debug_assert!(self.visited.iter().all(|&v| !v), "visited marks leaked");

        let letters: Vec<char> = word.chars().collect();
        // The bucket borrow must come from the long-lived grid reference,
        // not through self, so the recursion can borrow self mutably.
        let grid = self.grid;
        let found = grid
            .cells_with_letter(letters[0])
            .iter()
            .any(|&start| self.dfs(start, &letters[1..]));

        debug_assert!(self.visited.iter().all(|&v| !v), "visited marks leaked");
        found
    }

    fn dfs(&mut self, cell: CellId, rest: &[char]) -> bool {
        let Some((&next_letter, remaining)) = rest.split_first() else {
            return true;
        };

        self.visited[cell.0] = true;
        let mut found = false;
        for neighbor in self.grid.cell(cell).neighbors.into_iter().flatten() {
            if !self.visited[neighbor.0]
                && self.grid.cell(neighbor).letter == next_letter
                && self.dfs(neighbor, remaining)
            {
                found = true;
                break;
            }
        }
        self.visited[cell.0] = false;
        found
    }
}

/// Sweep `dictionary` against `grid` and return the found words, sorted
/// lexicographically.
///
/// Words are tested in dictionary order; empty entries are skipped. A word
/// listed twice and found is reported twice, matching the input's shape.
pub fn find_words(grid: &Honeycomb, dictionary: &[String]) -> Vec<String> {
    let mut searcher = Searcher::new(grid);
    let mut found = Vec::new();

    for word in dictionary {
        if word.is_empty() {
            continue;
        }
        if searcher.contains(word) {
            tracing::debug!(%word, "found");
            found.push(word.clone());
        }
    }

    found.sort();
    found
}
