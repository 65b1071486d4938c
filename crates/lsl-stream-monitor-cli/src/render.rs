//! Console rendering of a monitor run.
//!
//! All output goes through a `Write` so tests can capture it; write failures
//! surface as `MonitorError::Io`. Colors come from `colored` and never change
//! the text itself.

use std::io::Write;

use colored::Colorize;

use lsl_stream_monitor::{CombinedStatus, MonitorReport, MonitorResult, StreamDescriptor};

const RULE: &str = "========================================";

/// Troubleshooting hints shown when discovery comes back empty.
pub const TROUBLESHOOTING_HINTS: [&str; 3] = [
    "1. LSL stream이 실행 중인지 확인",
    "2. 방화벽이 LSL 포트를 막고 있지 않은지 확인",
    "3. 네트워크 설정 확인",
];

/// Title and "searching" line, printed before the blocking discovery call.
pub fn write_banner(out: &mut impl Write, wait_time_secs: f64) -> MonitorResult<()> {
    writeln!(out, "{}", RULE.bright_blue())?;
    writeln!(out, "{}", "LSL Stream Monitor".bold())?;
    writeln!(out, "{}", RULE.bright_blue())?;
    writeln!(out)?;
    writeln!(
        out,
        "LSL streams를 검색 중... (최대 {wait_time_secs}초 대기)"
    )?;
    Ok(())
}

/// Everything after discovery: stream list, HR/RR check and verdict.
pub fn write_report(out: &mut impl Write, report: &MonitorReport) -> MonitorResult<()> {
    let Some(classification) = report.classification() else {
        return write_not_found(out);
    };

    writeln!(
        out,
        "{}\n",
        format!("✅ {}개의 LSL stream 발견!", report.len()).green()
    )?;
    for (index, stream) in report.streams().iter().enumerate() {
        write_stream(out, index + 1, stream)?;
    }

    writeln!(out, "\n{}", "[HR/RR Stream 확인]".bright_blue())?;
    write_match(out, "HR", classification.first_heart_rate())?;
    write_match(out, "RR", classification.first_rr_interval())?;

    let verdict = match classification.status() {
        CombinedStatus::BothFound => "✅ HR과 RR stream 모두 발견됨!".green(),
        CombinedStatus::OnlyOneFound => "⚠️ HR 또는 RR stream 중 하나만 발견됨".yellow(),
        CombinedStatus::NeitherFound => "❌ HR과 RR stream 모두 없음".red(),
    };
    writeln!(out, "\n{verdict}")?;
    Ok(())
}

fn write_not_found(out: &mut impl Write) -> MonitorResult<()> {
    writeln!(out, "{}", "❌ LSL stream을 찾을 수 없습니다.".red())?;
    writeln!(out, "\n{}", "확인 사항:".yellow())?;
    for hint in TROUBLESHOOTING_HINTS {
        writeln!(out, "{hint}")?;
    }
    Ok(())
}

fn write_stream(out: &mut impl Write, ordinal: usize, stream: &StreamDescriptor) -> MonitorResult<()> {
    writeln!(out, "{}", format!("[Stream {ordinal}]").cyan())?;
    writeln!(out, "  Name: {}", stream.name)?;
    writeln!(out, "  Type: {}", stream.stream_type)?;
    writeln!(out, "  Host: {}", stream.hostname)?;
    writeln!(out, "  Channels: {}", stream.channel_count)?;
    writeln!(out, "  Sample Rate: {}", format_rate(stream.nominal_srate))?;
    writeln!(out, "  Source ID: {}", stream.source_id)?;
    writeln!(out)?;
    Ok(())
}

fn write_match(
    out: &mut impl Write,
    label: &str,
    found: Option<&StreamDescriptor>,
) -> MonitorResult<()> {
    match found {
        Some(stream) => writeln!(
            out,
            "{}",
            format!(
                "✅ {label} stream 발견: {} ({})",
                stream.name, stream.stream_type
            )
            .green()
        )?,
        None => writeln!(out, "{}", format!("❌ {label} stream 없음").red())?,
    }
    Ok(())
}

/// Sample rate with at least one decimal place, e.g. `128.0`, `0.0`, `7.8125`.
///
/// Reads like Python's `str(float)` for ordinary rates; very small or very
/// large values switch to Rust's exponent form (`1e-5`, not `1e-05`).
fn format_rate(rate: f64) -> String {
    format!("{rate:?}")
}
