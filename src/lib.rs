pub mod loader;
pub mod lookup;
pub mod merge;
pub mod output;
pub mod pipeline;
pub mod summary;
pub mod types;
