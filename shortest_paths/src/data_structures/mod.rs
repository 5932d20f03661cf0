pub mod heap;
pub mod queue;
