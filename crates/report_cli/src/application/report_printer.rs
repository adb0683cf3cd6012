use serde_json::Value;
use std::io::Write;

use crate::config::Config;
use crate::domain::ApplicationRecord;
use crate::domain::application_record::display_value;
use crate::errors::{ReportError, ReportResult};
use crate::utils::text::{ELLIPSIS, preview, tail};

/// Width of the line that closes each record block
pub const SEPARATOR_WIDTH: usize = 40;

/// Renders a preview block for each of the most recent records
#[derive(Debug, Clone)]
pub struct ReportPrinter {
    count: usize,
    width: usize,
    details: bool,
}

impl ReportPrinter {
    pub fn new(count: usize, width: usize, details: bool) -> Self {
        Self {
            count,
            width,
            details,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.count, config.width, config.details)
    }

    /// Print the trailing records to `out`, returning how many blocks were written
    ///
    /// Only the selected tail is decoded, so records outside it are never
    /// inspected. Each block is flushed as soon as it is complete. A record
    /// without `reasoning` aborts the report with `MissingField` after its
    /// header line; blocks already written stay written.
    pub fn print<W: Write>(&self, records: &[Value], out: &mut W) -> ReportResult<usize> {
        let selected = tail(records, self.count);
        let offset = records.len() - selected.len();

        for (position, raw) in selected.iter().enumerate() {
            let index = offset + position;
            let record = ApplicationRecord::from_json(raw)
                .map_err(|source| ReportError::InvalidRecord { index, source })?;
            self.print_record(index, &record, out)?;
            out.flush()?;
        }

        Ok(selected.len())
    }

    fn print_record<W: Write>(
        &self,
        index: usize,
        record: &ApplicationRecord,
        out: &mut W,
    ) -> ReportResult<()> {
        writeln!(
            out,
            "--- Job: {} at {} ---",
            record.title_or_placeholder(),
            record.company_or_placeholder()
        )?;

        if self.details {
            writeln!(
                out,
                "ID: {} | Score: {} | Status: {} | URL: {} | Created: {}",
                display_value(record.id().as_ref()),
                display_value(record.score().as_ref()),
                display_value(record.status().as_ref()),
                display_value(record.url().as_ref()),
                display_value(record.created_at().as_ref())
            )?;
        }

        let Some(reasoning) = record.reasoning().as_deref() else {
            // Header is already out; make it visible before failing
            out.flush()?;
            tracing::warn!(index, "record has no reasoning");
            return Err(ReportError::MissingField {
                index,
                field: "reasoning",
            });
        };

        writeln!(out, "Reasoning: {}{ELLIPSIS}", preview(reasoning, self.width))?;
        writeln!(
            out,
            "Resume snippet: {}{ELLIPSIS}",
            preview(record.resume_text(), self.width)
        )?;
        writeln!(
            out,
            "Cover Letter snippet: {}{ELLIPSIS}",
            preview(record.cover_letter_text(), self.width)
        )?;
        writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))?;

        Ok(())
    }
}

impl Default for ReportPrinter {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
