pub mod preprocessing;
pub mod edges;
pub mod extraction;
pub mod filtering;
pub mod simplification;
pub mod classification;
pub mod moments;

pub use preprocessing::*;
pub use edges::*;
pub use extraction::*;
pub use filtering::*;
pub use simplification::*;
pub use classification::*;
pub use moments::*;
