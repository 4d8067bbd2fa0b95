//! Kernel launch configuration.
//!
//! A launch configuration is a `(grid, block)` pair of 3-dimensional
//! vectors, in that order. Magnitudes are not checked here: legal ranges
//! depend on the device, so the launching backend is responsible for them.

/// A 3-dimensional vector used for kernel launch configurations.
pub type Dimensions = (u32, u32, u32);

/// A kernel launch configuration in `(grid, block)` format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LaunchConfiguration {
    /// Number of blocks along each axis.
    pub grid: Dimensions,
    /// Number of threads per block along each axis.
    pub block: Dimensions,
}

impl LaunchConfiguration {
    /// Create a launch configuration from grid and block dimensions.
    pub const fn new(grid: Dimensions, block: Dimensions) -> Self {
        Self { grid, block }
    }

    /// Total number of blocks in the grid.
    pub fn total_blocks(&self) -> u128 {
        volume(self.grid)
    }

    /// Number of threads in a single block.
    pub fn threads_per_block(&self) -> u128 {
        volume(self.block)
    }

    /// Total number of threads launched, or `None` if it exceeds `u128`.
    ///
    /// Only reachable with dimensions far beyond any device limit.
    pub fn total_threads(&self) -> Option<u128> {
        self.total_blocks().checked_mul(self.threads_per_block())
    }

    /// Grid and threadgroup sizes for `dispatch_thread_groups`.
    #[cfg(feature = "metal")]
    pub fn to_metal(&self) -> (metal::MTLSize, metal::MTLSize) {
        let size = |(x, y, z): Dimensions| metal::MTLSize::new(x as u64, y as u64, z as u64);
        (size(self.grid), size(self.block))
    }
}

// At most (2^32 - 1)^3, which fits in u128.
fn volume((x, y, z): Dimensions) -> u128 {
    x as u128 * y as u128 * z as u128
}

impl From<(Dimensions, Dimensions)> for LaunchConfiguration {
    fn from((grid, block): (Dimensions, Dimensions)) -> Self {
        Self::new(grid, block)
    }
}

impl From<LaunchConfiguration> for (Dimensions, Dimensions) {
    fn from(cfg: LaunchConfiguration) -> Self {
        (cfg.grid, cfg.block)
    }
}

#[cfg(feature = "cuda")]
impl From<LaunchConfiguration> for cudarc::driver::LaunchConfig {
    fn from(cfg: LaunchConfiguration) -> Self {
        cudarc::driver::LaunchConfig {
            grid_dim: cfg.grid,
            block_dim: cfg.block,
            shared_mem_bytes: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_comes_first() {
        let cfg = LaunchConfiguration::from(((4, 2, 1), (256, 1, 1)));
        assert_eq!(cfg.grid, (4, 2, 1));
        assert_eq!(cfg.block, (256, 1, 1));

        let (grid, block): (Dimensions, Dimensions) = cfg.into();
        assert_eq!(grid, (4, 2, 1));
        assert_eq!(block, (256, 1, 1));
    }

    #[test]
    fn test_thread_counts() {
        let cfg = LaunchConfiguration::new((4, 2, 1), (16, 16, 1));
        assert_eq!(cfg.total_blocks(), 8);
        assert_eq!(cfg.threads_per_block(), 256);
        assert_eq!(cfg.total_threads(), Some(2048));
    }

    #[test]
    fn test_largest_cuda_grid() {
        // (2^31 - 1, 65535, 65535) blocks of 1024 threads exceeds u64.
        let cfg = LaunchConfiguration::new((i32::MAX as u32, 65535, 65535), (1024, 1, 1));
        let blocks = i32::MAX as u128 * 65535 * 65535;
        assert_eq!(cfg.total_blocks(), blocks);
        assert_eq!(cfg.threads_per_block(), 1024);
        assert_eq!(cfg.total_threads(), Some(blocks * 1024));
        assert!(blocks * 1024 > u64::MAX as u128);
    }

    #[test]
    fn test_thread_count_beyond_u128() {
        let max = (u32::MAX, u32::MAX, u32::MAX);
        let cfg = LaunchConfiguration::new(max, max);
        assert_eq!(cfg.total_blocks(), (u32::MAX as u128).pow(3));
        assert_eq!(cfg.total_threads(), None);
    }

    #[cfg(feature = "cuda")]
    #[test]
    fn test_into_cudarc() {
        let cfg: cudarc::driver::LaunchConfig =
            LaunchConfiguration::new((8, 1, 1), (128, 1, 1)).into();
        assert_eq!(cfg.grid_dim, (8, 1, 1));
        assert_eq!(cfg.block_dim, (128, 1, 1));
        assert_eq!(cfg.shared_mem_bytes, 0);
    }
}
