pub mod json_file_source;
pub mod report_printer;

pub use json_file_source::JsonFileSource;
pub use report_printer::ReportPrinter;
