//! 단위 정의 및 변환 모듈 모음.

pub mod area;
pub mod length;
pub mod speed;
pub mod temperature;
pub mod time;
pub mod volume;
pub mod weight;

pub use area::{convert_area, AreaUnit};
pub use length::{convert_length, LengthUnit};
pub use speed::{convert_speed, SpeedUnit};
pub use temperature::{convert_temperature, TemperatureUnit};
pub use time::{convert_time, TimeUnit};
pub use volume::{convert_volume, VolumeUnit};
pub use weight::{convert_weight, WeightUnit};
