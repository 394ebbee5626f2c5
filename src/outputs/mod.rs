pub mod realizer;
pub mod result;
