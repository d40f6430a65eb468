use thiserror::Error;

pub type SparkChartResult<T> = Result<T, SparkChartError>;

#[derive(Debug, Error)]
pub enum SparkChartError {
    #[error("invalid canvas size: width={width}, height={height}")]
    InvalidCanvas { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("render surface failure: {0}")]
    Surface(String),
}
