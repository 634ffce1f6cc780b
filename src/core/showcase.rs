use crate::core::{sources, streams};
use crate::domain::model::Car;
use crate::domain::ports::{CarSource, ConfigProvider};
use crate::utils::error::Result;
use indexmap::IndexMap;
use itertools::Itertools;
use serde::Serialize;
use std::fmt::Write;

/// 每個示範的結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowcaseReport {
    pub brand: String,
    pub fleet: Vec<Car>,
    pub filtered: Vec<Car>,
    pub brands: Vec<String>,
    pub colors_of_brand: Vec<String>,
    pub distinct_brands: Vec<String>,
    pub sorted_brands: Vec<String>,
    pub joined_brands: String,
    pub id_sum: i32,
    pub grouped_by_brand: IndexMap<String, Vec<Car>>,
    pub id_reduce: i32,
    pub count: usize,
    pub max_id: i32,
    pub lines: Vec<String>,
}

pub struct Showcase<S: CarSource, C: ConfigProvider> {
    source: S,
    config: C,
}

impl<S: CarSource, C: ConfigProvider> Showcase<S, C> {
    pub fn new(source: S, config: C) -> Self {
        Self { source, config }
    }

    pub fn run(&self) -> Result<ShowcaseReport> {
        tracing::info!("Loading cars from {}", self.source.describe());
        let cars = self.source.load_cars()?;
        tracing::info!("Loaded {} cars", cars.len());

        let brand = self.config.brand();

        let filtered = streams::filter_by_brand(&cars, brand);
        tracing::info!("filter brand={}: {} cars", brand, filtered.len());

        let brands = streams::brands(&cars);
        tracing::info!("map brand: {:?}", brands);

        let colors_of_brand = streams::traced_colors_of_brand(&cars, brand);
        tracing::info!("filter+map color: {:?}", colors_of_brand);

        let distinct_brands = streams::distinct_brands(&cars);
        tracing::info!("distinct brands: {:?}", distinct_brands);

        let sorted_brands = streams::sorted_brands(&cars);
        tracing::info!("sorted brands: {:?}", sorted_brands);

        let joined_brands = streams::joined_brands(&cars, self.config.separator());
        tracing::info!("joined brands: {}", joined_brands);

        let id_sum = streams::sum_ids(&cars);
        let id_reduce = streams::reduce_ids(&cars);
        tracing::info!("sum ids: {}, reduce ids: {}", id_sum, id_reduce);

        let grouped_by_brand = streams::group_by_brand(&cars);
        tracing::info!("group by brand: {} groups", grouped_by_brand.len());

        let count = streams::count(&cars);
        let max_id = streams::max_id(&cars);
        tracing::info!("count: {}, max id: {}", count, max_id);

        // 檔案不存在直接回傳錯誤，不跳過
        let lines = sources::read_lines(self.config.input_file())?;
        tracing::info!("read {} lines from {}", lines.len(), self.config.input_file());

        Ok(ShowcaseReport {
            brand: brand.to_string(),
            fleet: cars,
            filtered,
            brands,
            colors_of_brand,
            distinct_brands,
            sorted_brands,
            joined_brands,
            id_sum,
            grouped_by_brand,
            id_reduce,
            count,
            max_id,
            lines,
        })
    }
}

impl ShowcaseReport {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Plain-text rendering: the fleet one car per line, then one line per example.
    pub fn render(&self) -> Result<String> {
        let mut out = String::new();
        streams::print_each(&self.fleet, &mut out)?;

        let filtered = self.filtered.iter().map(Car::to_string).join(", ");
        let grouped = self
            .grouped_by_brand
            .iter()
            .map(|(brand, cars)| format!("{}=[{}]", brand, cars.iter().map(Car::id).join(",")))
            .join(" ");

        let examples = [
            format!("filter ({}): {}", self.brand, filtered),
            format!("map brand: {}", self.brands.join(", ")),
            format!("filter+map color: {}", self.colors_of_brand.join(", ")),
            format!("distinct: {}", self.distinct_brands.join(", ")),
            format!("sorted: {}", self.sorted_brands.join(", ")),
            format!("joined: {}", self.joined_brands),
            format!("sum ids: {}", self.id_sum),
            format!("group by brand: {}", grouped),
            format!("reduce ids: {}", self.id_reduce),
            format!("count: {}", self.count),
            format!("max id: {}", self.max_id),
            format!("lines: {}", self.lines.join(", ")),
        ];

        for line in examples {
            writeln!(out, "{}", line)?;
        }
        Ok(out)
    }
}
