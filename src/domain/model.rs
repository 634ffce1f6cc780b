use serde::{Deserialize, Serialize};
use std::fmt;

/// 一台車。建立後不可變，相等與雜湊比較全部欄位。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Car {
    id: i32,
    brand: String,
    #[serde(rename = "type")]
    model: String,
    color: String,
}

impl Car {
    pub fn new(
        id: i32,
        brand: impl Into<String>,
        model: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id,
            brand: brand.into(),
            model: model.into(),
            color: color.into(),
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    /// The car's type, e.g. "Golf".
    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn color(&self) -> &str {
        &self.color
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Car{{id={}, brand='{}', type='{}', color='{}'}}",
            self.id, self.brand, self.model, self.color
        )
    }
}
