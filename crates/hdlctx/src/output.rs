use std::io::IsTerminal;
use std::time::Duration;

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use hdlctx_sink::{BitEvent, LevelWriter, WaveformSink};
use serde::Serialize;

use crate::exit::{sink_error, CliResult};

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    /// Packed line levels, MSB first, on stdout.
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

/// Result of one CLI encoding operation.
#[derive(Serialize, Debug)]
pub struct EncodeReport {
    pub operation: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<usize>,
    pub payload_size: usize,
    pub bits: usize,
    pub baud: u32,
    pub airtime_ms: f64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub flushed_devices: Vec<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub levels: Option<String>,
}

impl EncodeReport {
    pub fn new(operation: &'static str, payload_size: usize, bits: usize, baud: u32) -> Self {
        Self {
            operation,
            channel: None,
            payload_size,
            bits,
            baud,
            airtime_ms: millis(hdlctx_frame::airtime(bits, baud)),
            flushed_devices: Vec::new(),
            levels: None,
        }
    }
}

pub fn print_report(
    report: &EncodeReport,
    events: &[BitEvent],
    format: OutputFormat,
) -> CliResult<()> {
    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string(report).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["OPERATION", "CHANNEL", "PAYLOAD", "BITS", "AIRTIME"])
                .add_row(vec![
                    report.operation.to_string(),
                    channel_label(report.channel),
                    report.payload_size.to_string(),
                    report.bits.to_string(),
                    format!("{:.2} ms @ {} bd", report.airtime_ms, report.baud),
                ]);
            println!("{table}");
            if let Some(levels) = &report.levels {
                println!("{levels}");
            }
        }
        OutputFormat::Pretty => {
            println!(
                "{} channel={} payload={} bits={} airtime={:.2}ms",
                report.operation,
                channel_label(report.channel),
                report.payload_size,
                report.bits,
                report.airtime_ms
            );
            if let Some(levels) = &report.levels {
                println!("{levels}");
            }
        }
        OutputFormat::Raw => write_packed(events)?,
    }
    Ok(())
}

/// Line levels as a string of '0' and '1'.
pub fn level_string(events: &[BitEvent]) -> String {
    events
        .iter()
        .map(|ev| if ev.level { '1' } else { '0' })
        .collect()
}

fn write_packed(events: &[BitEvent]) -> CliResult<()> {
    let mut writer = LevelWriter::new(std::io::stdout().lock());
    for &event in events {
        writer
            .put_bit(event)
            .map_err(|err| sink_error("write failed", err))?;
    }
    writer
        .flush(0)
        .map_err(|err| sink_error("flush failed", err))
}

fn channel_label(channel: Option<usize>) -> String {
    channel.map_or_else(|| "-".to_string(), |c| c.to_string())
}

fn millis(duration: Duration) -> f64 {
    (duration.as_secs_f64() * 1000.0 * 100.0).round() / 100.0
}
