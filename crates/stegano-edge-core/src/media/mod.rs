pub mod edges;
mod types;

use std::path::Path;

pub use edges::{Canny, EdgeDetector, EdgeMask};
pub use types::*;

pub trait Persist {
    fn save_as(&self, _: &Path) -> crate::Result<()>;
}
