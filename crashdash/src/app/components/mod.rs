mod controls;
mod dashboard;
mod dataset;

pub use controls::Controls;
pub use dashboard::{save_svg, Dashboard};
pub use dataset::DatasetHandle;
