pub mod application_record;
pub mod record_source;

pub use application_record::ApplicationRecord;
pub use record_source::RecordSource;
