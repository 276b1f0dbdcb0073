pub mod cart;
pub mod finish;
pub mod material;
pub mod metrics;

pub use cart::*;
pub use finish::*;
pub use material::*;
pub use metrics::*;
