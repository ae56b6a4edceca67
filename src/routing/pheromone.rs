//! Pheromone trail storage.

/// Smallest path cost used when converting a cost into a deposit
pub const COST_EPSILON: f64 = 1e-6;

/// Dense `N×N` pheromone matrix owned by a single router run
///
/// Entries start at the initial level and only ever shrink by
/// multiplication or grow by positive deposits, so they stay non-negative.
/// Entries are directed: `(u, v)` and `(v, u)` are stored separately.
#[derive(Debug, Clone, PartialEq)]
pub struct PheromoneMatrix {
    size: usize,
    levels: Vec<f64>,
}

impl PheromoneMatrix {
    pub fn new(size: usize, initial: f64) -> Self {
        Self {
            size,
            levels: vec![initial; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.levels[from * self.size + to]
    }

    /// Multiply every entry by `1 - decay`
    pub fn evaporate(&mut self, decay: f64) {
        let retain = (1.0 - decay).clamp(0.0, 1.0);
        for level in &mut self.levels {
            *level *= retain;
        }
    }

    /// Add `amount` to the directed entry `(from, to)`
    pub fn deposit(&mut self, from: usize, to: usize, amount: f64) {
        self.levels[from * self.size + to] += amount;
    }

    /// Reinforce every step of a path with `1 / cost`, in traversal order
    pub fn reinforce_path(&mut self, path: &[usize], cost: f64) {
        if path.len() < 2 {
            return;
        }
        let amount = 1.0 / cost.max(COST_EPSILON);
        for step in path.windows(2) {
            self.deposit(step[0], step[1], amount);
        }
    }

    /// Smallest entry in the matrix
    pub fn min_level(&self) -> f64 {
        self.levels.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Row-major view of all entries
    pub fn levels(&self) -> &[f64] {
        &self.levels
    }
}
