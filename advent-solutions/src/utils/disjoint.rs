//! Disjoint-set forest (union-find).

/// Union-find over `0..len` with path compression and union by rank.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl DisjointSet {
    /// `len` singleton sets.
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
            components: len,
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Representative of the set containing `x`, compressing the path.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut cur = x;
        while self.parent[cur] != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }
        root
    }

    /// Merge the sets containing `a` and `b`.
    ///
    /// Returns `false` when they were already in the same set.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }

        let (keep, absorb) = match self.rank[root_a].cmp(&self.rank[root_b]) {
            std::cmp::Ordering::Less => (root_b, root_a),
            std::cmp::Ordering::Greater => (root_a, root_b),
            std::cmp::Ordering::Equal => {
                self.rank[root_a] += 1;
                (root_a, root_b)
            }
        };
        self.parent[absorb] = keep;
        self.components -= 1;
        true
    }

    /// Number of distinct sets remaining.
    pub fn components(&self) -> usize {
        self.components
    }

    /// Sizes of all sets, in no particular order.
    pub fn component_sizes(&mut self) -> Vec<usize> {
        let mut counts = vec![0usize; self.parent.len()];
        for i in 0..self.parent.len() {
            let root = self.find(i);
            counts[root] += 1;
        }
        counts.into_iter().filter(|&c| c > 0).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_merges_and_reports() {
        let mut sets = DisjointSet::new(5);
        assert_eq!(sets.components(), 5);

        assert!(sets.union(0, 1));
        assert!(sets.union(3, 4));
        assert!(!sets.union(1, 0));
        assert_eq!(sets.components(), 3);
        assert_eq!(sets.find(0), sets.find(1));
        assert_ne!(sets.find(0), sets.find(3));

        let mut sizes = sets.component_sizes();
        sizes.sort_unstable();
        assert_eq!(sizes, vec![1, 2, 2]);
    }

    #[test]
    fn chained_unions_collapse_to_one() {
        let mut sets = DisjointSet::new(4);
        for i in 0..3 {
            sets.union(i, i + 1);
        }
        assert_eq!(sets.components(), 1);
        assert_eq!(sets.component_sizes(), vec![4]);
    }
}
