use crate::domain::model::Car;
use crate::domain::ports::CarSource;
use crate::domain::sample;
use crate::utils::error::{Result, StreamsError};
use std::fs::File;
use std::io::ErrorKind;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Default)]
pub struct SampleFleet;

impl CarSource for SampleFleet {
    fn load_cars(&self) -> Result<Vec<Car>> {
        Ok(sample::fleet())
    }

    fn describe(&self) -> String {
        "built-in sample fleet".to_string()
    }
}

/// Cars read from a CSV file with header `id,brand,type,color`.
#[derive(Debug, Clone)]
pub struct CsvFleet {
    path: PathBuf,
}

impl CsvFleet {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CarSource for CsvFleet {
    fn load_cars(&self) -> Result<Vec<Car>> {
        let file = File::open(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => StreamsError::MissingInput {
                path: self.path.display().to_string(),
            },
            _ => StreamsError::IoError(e),
        })?;

        let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(file);
        let cars = reader
            .deserialize::<Car>()
            .collect::<std::result::Result<Vec<_>, csv::Error>>()?;

        tracing::debug!("Loaded {} cars from {}", cars.len(), self.path.display());
        Ok(cars)
    }

    fn describe(&self) -> String {
        format!("CSV fleet {}", self.path.display())
    }
}

/// 有指定 CSV 就用檔案，否則用內建資料
pub fn from_optional_path(path: Option<&str>) -> Box<dyn CarSource> {
    match path {
        Some(p) => Box::new(CsvFleet::new(p)),
        None => Box::new(SampleFleet),
    }
}

impl<T: CarSource + ?Sized> CarSource for Box<T> {
    fn load_cars(&self) -> Result<Vec<Car>> {
        (**self).load_cars()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
