pub mod pipelines;
pub mod writers;
