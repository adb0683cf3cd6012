use std::path::PathBuf;

/// Default location of the application data file, relative to the working directory
pub const DEFAULT_DATA_PATH: &str = "data/applications.json";
/// Number of trailing records shown by default
pub const DEFAULT_RECORD_COUNT: usize = 3;
/// Number of characters kept in each text preview by default
pub const DEFAULT_PREVIEW_WIDTH: usize = 100;

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct Config {
    pub data_path: PathBuf,
    pub count: usize,
    pub width: usize,
    pub details: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            count: DEFAULT_RECORD_COUNT,
            width: DEFAULT_PREVIEW_WIDTH,
            details: false,
        }
    }
}
