use crate::domain::model::Car;
use crate::utils::error::Result;

/// 車輛資料來源
pub trait CarSource {
    fn load_cars(&self) -> Result<Vec<Car>>;

    /// Short human-readable name for logs.
    fn describe(&self) -> String;
}

pub trait ConfigProvider {
    fn brand(&self) -> &str;
    fn separator(&self) -> &str;
    fn input_file(&self) -> &str;
    fn fleet_file(&self) -> Option<&str>;
}
