//! Terminal view surface.
//!
//! Renders whatever the view-model publishes and forwards the add intent.
//! Holds no list state of its own.

use crate::cli::OutputFormat;
use chrono::{DateTime, SecondsFormat, Utc};
use log::warn;
use stamplist_core::{ListViewModel, Record, RecordStore, SubscriptionId};
use std::io::{self, Write};

/// Observer-driven view over a borrowed view-model.
pub struct ListView<'vm, S: RecordStore> {
    view_model: &'vm mut ListViewModel<S>,
    subscription: SubscriptionId,
}

impl<'vm, S: RecordStore> ListView<'vm, S> {
    /// Subscribes a renderer writing to `out`; the current list is rendered immediately.
    pub fn attach(
        view_model: &'vm mut ListViewModel<S>,
        format: OutputFormat,
        mut out: impl Write + 'static,
    ) -> Self {
        let subscription = view_model.subscribe(move |records| {
            if let Err(err) = render_records(records, format, &mut out) {
                warn!("event=view_render module=view status=error error={err}");
            }
        });
        Self {
            view_model,
            subscription,
        }
    }

    /// User pressed "add". Returns whether a new item appeared.
    pub fn on_add(&mut self) -> bool {
        self.view_model.add().is_some()
    }
}

impl<S: RecordStore> Drop for ListView<'_, S> {
    fn drop(&mut self) {
        self.view_model.unsubscribe(self.subscription);
    }
}

/// Writes one frame: a text listing or a single JSON line.
pub fn render_records(
    records: &[Record],
    format: OutputFormat,
    out: &mut impl Write,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => {
            if records.is_empty() {
                writeln!(out, "No items.")?;
            } else {
                writeln!(out, "Items ({})", records.len())?;
                for (index, record) in records.iter().enumerate() {
                    writeln!(
                        out,
                        "{:>4}. Item at {}",
                        index + 1,
                        format_timestamp(record.timestamp_ms())
                    )?;
                }
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, records)?;
            writeln!(out)?;
        }
    }
    out.flush()
}

fn format_timestamp(timestamp_ms: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(timestamp_ms)
        .map(|at| at.to_rfc3339_opts(SecondsFormat::Millis, true))
        .unwrap_or_else(|| format!("{timestamp_ms}ms"))
}
