pub mod showcase;
pub mod sources;
pub mod streams;

pub use crate::domain::model::Car;
pub use crate::domain::ports::{CarSource, ConfigProvider};
pub use crate::utils::error::Result;
