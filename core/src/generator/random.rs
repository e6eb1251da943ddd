use super::*;
use ndarray::Array2;
use rand::prelude::*;

/// Purely random generation strategy: every layout with the configured number of mines is equally likely.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMinefieldGenerator {
    seed: u64,
}

impl RandomMinefieldGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Generator seeded from the thread-local entropy source.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl MinefieldGenerator for RandomMinefieldGenerator {
    fn generate(self, config: GameConfig) -> Result<Minefield> {
        let config = config.validate()?;
        let width = usize::from(config.width);
        let total_cells = config.total_cells() as usize;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut permutation: Vec<usize> = (0..total_cells).collect();
        permutation.shuffle(&mut rng);

        let mut mine_mask: Array2<bool> = Array2::default(config.size().to_nd_index());
        for &index in &permutation[..config.mines as usize] {
            mine_mask[[index / width, index % width]] = true;
        }

        let minefield = Minefield::from_mine_mask(mine_mask);
        log::debug!(
            "Generated {}x{} minefield with {} mines (seed {})",
            config.width,
            config.height,
            minefield.mine_count(),
            self.seed
        );
        Ok(minefield)
    }
}
