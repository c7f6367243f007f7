pub mod bubble;
pub mod hybrid_merge;
pub mod insertion;
