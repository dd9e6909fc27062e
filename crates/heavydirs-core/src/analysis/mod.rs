/// Analysis modules: post-aggregation selection of the heaviest directories.

pub mod top_dirs;

pub use top_dirs::{heavy_dirs, top_by, HeavyDir, HeavyDirsReport, DEFAULT_TOP_N};
