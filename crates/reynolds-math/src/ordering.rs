//! Unknown orderings for the banded factorization.
//!
//! A permutation is stored as `perm[new] = old`.

use std::collections::VecDeque;

use reynolds_types::error::{ReynoldsError, ReynoldsResult};

use crate::sparse::CsrMatrix;

pub fn identity(n: usize) -> Vec<usize> {
    (0..n).collect()
}

/// `iperm[old] = new` for `perm[new] = old`.
pub fn invert_permutation(perm: &[usize]) -> Vec<usize> {
    let mut iperm = vec![0; perm.len()];
    for (new, &old) in perm.iter().enumerate() {
        iperm[old] = new;
    }
    iperm
}

/// Check that `perm` is a permutation of 0..n.
pub fn validate_permutation(perm: &[usize], n: usize) -> ReynoldsResult<()> {
    if perm.len() != n {
        return Err(ReynoldsError::DimensionMismatch {
            expected: n,
            got: perm.len(),
        });
    }
    let mut seen = vec![false; n];
    for &old in perm {
        if old >= n || seen[old] {
            return Err(ReynoldsError::ConfigError(format!(
                "ordering is not a permutation of 0..{n} (offending index {old})"
            )));
        }
        seen[old] = true;
    }
    Ok(())
}

/// Reverse Cuthill-McKee ordering of the symmetrised pattern of `a`.
///
/// Each connected component starts from a pseudo-peripheral node found
/// by repeated level-structure sweeps (George-Liu). Neighbours are
/// enqueued by ascending degree, ties broken by index, so the result is
/// deterministic.
pub fn reverse_cuthill_mckee(a: &CsrMatrix) -> Vec<usize> {
    let n = a.nrows();
    let adj = symmetric_adjacency(a);
    let degree: Vec<usize> = adj.iter().map(Vec::len).collect();

    let mut starts = identity(n);
    starts.sort_by_key(|&v| (degree[v], v));

    let mut visited = vec![false; n];
    let mut order = Vec::with_capacity(n);
    let mut queue = VecDeque::new();

    for start in starts {
        if visited[start] {
            continue;
        }
        let root = pseudo_peripheral_node(start, &adj, &degree, &visited);
        visited[root] = true;
        queue.push_back(root);

        while let Some(v) = queue.pop_front() {
            order.push(v);
            let mut next: Vec<usize> = adj[v].iter().copied().filter(|&w| !visited[w]).collect();
            next.sort_by_key(|&w| (degree[w], w));
            for w in next {
                visited[w] = true;
                queue.push_back(w);
            }
        }
    }

    order.reverse();
    order
}

fn symmetric_adjacency(a: &CsrMatrix) -> Vec<Vec<usize>> {
    let n = a.nrows();
    let mut adj = vec![Vec::new(); n];
    for r in 0..n {
        for (c, _) in a.row(r) {
            if c != r && c < n {
                adj[r].push(c);
                adj[c].push(r);
            }
        }
    }
    for list in &mut adj {
        list.sort_unstable();
        list.dedup();
    }
    adj
}

/// BFS level sets from `root`, skipping nodes already marked in `excluded`.
fn level_structure(root: usize, adj: &[Vec<usize>], excluded: &[bool]) -> Vec<Vec<usize>> {
    let mut seen = excluded.to_vec();
    seen[root] = true;
    let mut levels = Vec::new();
    let mut current = vec![root];
    while !current.is_empty() {
        let mut next = Vec::new();
        for &v in &current {
            for &w in &adj[v] {
                if !seen[w] {
                    seen[w] = true;
                    next.push(w);
                }
            }
        }
        levels.push(current);
        current = next;
    }
    levels
}

fn pseudo_peripheral_node(
    start: usize,
    adj: &[Vec<usize>],
    degree: &[usize],
    excluded: &[bool],
) -> usize {
    let mut root = start;
    let mut levels = level_structure(root, adj, excluded);
    loop {
        let candidate = levels
            .last()
            .and_then(|last| last.iter().copied().min_by_key(|&v| (degree[v], v)))
            .unwrap_or(root);
        let candidate_levels = level_structure(candidate, adj, excluded);
        if candidate_levels.len() > levels.len() {
            root = candidate;
            levels = candidate_levels;
        } else {
            return root;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sparse::TripletBuilder;

    /// Path graph whose node labels are scrambled by `labels`.
    fn scrambled_path(labels: &[usize]) -> CsrMatrix {
        let n = labels.len();
        let mut t = TripletBuilder::new(n, n);
        for k in 0..n {
            t.push(labels[k], labels[k], 2.0).unwrap();
            if k + 1 < n {
                t.push(labels[k], labels[k + 1], -1.0).unwrap();
                t.push(labels[k + 1], labels[k], -1.0).unwrap();
            }
        }
        t.build()
    }

    #[test]
    fn test_invert_permutation() {
        let perm = [2, 0, 3, 1];
        let iperm = invert_permutation(&perm);
        assert_eq!(iperm, vec![1, 3, 0, 2]);
        for (new, &old) in perm.iter().enumerate() {
            assert_eq!(iperm[old], new);
        }
    }

    #[test]
    fn test_validate_permutation() {
        assert!(validate_permutation(&[1, 0, 2], 3).is_ok());
        assert!(validate_permutation(&[1, 1, 2], 3).is_err());
        assert!(validate_permutation(&[0, 3, 1], 3).is_err());
        assert!(matches!(
            validate_permutation(&[0, 1], 3),
            Err(ReynoldsError::DimensionMismatch { expected: 3, got: 2 })
        ));
    }

    #[test]
    fn test_rcm_recovers_path_bandwidth() {
        let labels = [4, 7, 0, 2, 6, 1, 5, 3];
        let a = scrambled_path(&labels);
        assert!(a.bandwidth(&identity(8)).0 > 1);

        let perm = reverse_cuthill_mckee(&a);
        assert!(validate_permutation(&perm, 8).is_ok());
        assert_eq!(a.bandwidth(&perm), (1, 1));
    }

    #[test]
    fn test_rcm_handles_disconnected_components() {
        let mut t = TripletBuilder::new(5, 5);
        for i in 0..5 {
            t.push(i, i, 1.0).unwrap();
        }
        t.push(0, 3, 1.0).unwrap();
        t.push(3, 0, 1.0).unwrap();
        let perm = reverse_cuthill_mckee(&t.build());
        assert!(validate_permutation(&perm, 5).is_ok());
    }

    #[test]
    fn test_rcm_unsymmetric_pattern_is_symmetrised() {
        // Row 1 references 0 but not the other way round.
        let mut t = TripletBuilder::new(3, 3);
        t.push(0, 0, 1.0).unwrap();
        t.push(1, 0, 1.0).unwrap();
        t.push(1, 1, 1.0).unwrap();
        t.push(1, 2, 1.0).unwrap();
        t.push(2, 2, 1.0).unwrap();
        let a = t.build();
        let perm = reverse_cuthill_mckee(&a);
        let (kl, ku) = a.bandwidth(&perm);
        assert!(kl <= 1 && ku <= 1, "kl={kl}, ku={ku}");
    }
}
