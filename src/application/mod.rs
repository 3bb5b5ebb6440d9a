pub mod builder;
pub mod mirror_check;

pub use builder::RepositoryBuilder;
pub use mirror_check::{compare_with_mirror, MirrorComparison};
