// 固定的示範資料，所有範例共用

use crate::domain::model::Car;

pub const VOLKSWAGEN: &str = "Volkswagen";

pub fn volkswagen_golf() -> Car {
    Car::new(0, VOLKSWAGEN, "Golf", "blue")
}

pub fn skoda_octavia() -> Car {
    Car::new(1, "Skoda", "Octavia", "green")
}

pub fn renault_kadjar() -> Car {
    Car::new(2, "Renault", "Kadjar", "red")
}

pub fn volkswagen_tiguan() -> Car {
    Car::new(3, VOLKSWAGEN, "Tiguan", "red")
}

/// The four sample cars in their fixed order.
pub fn fleet() -> Vec<Car> {
    vec![
        volkswagen_golf(),
        skoda_octavia(),
        renault_kadjar(),
        volkswagen_tiguan(),
    ]
}

pub fn letters() -> Vec<String> {
    vec!["a".to_string(), "b".to_string(), "c".to_string()]
}
