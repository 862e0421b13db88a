//! Output formatting for part results

use chrono::TimeDelta;

/// Timed answer for one part
pub struct PartReport {
    pub part: u8,
    pub answer: String,
    pub solve_duration: TimeDelta,
}

/// Output formatter for part results
pub struct OutputFormatter {
    quiet: bool,
    start_time: std::time::Instant,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: std::time::Instant::now(),
        }
    }

    /// Format and print a single part's answer
    pub fn print_result(&self, report: &PartReport) {
        if self.quiet {
            println!("{}", report.answer);
        } else {
            println!("Part {} result: {}", report.part, report.answer);
        }
    }

    /// Print parse/solve timing after all parts
    ///
    /// Shows both per-part solve time and actual elapsed wall-clock time.
    pub fn print_summary(&self, parse_duration: TimeDelta, reports: &[PartReport]) {
        if self.quiet {
            return;
        }

        let total_solve: TimeDelta = reports.iter().map(|r| r.solve_duration).sum();
        let elapsed = self.start_time.elapsed();

        println!();
        println!("--- Summary ---");
        println!("Parse time: {}", format_duration(parse_duration));
        for report in reports {
            println!(
                "Part {} solve time: {}",
                report.part,
                format_duration(report.solve_duration)
            );
        }
        println!("Total solve time: {}", format_duration(total_solve));
        println!(
            "Elapsed wall-clock time: {}",
            format_std_duration(elapsed)
        );
    }
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

/// Format a std::time::Duration for display (used for wall-clock time)
fn format_std_duration(d: std::time::Duration) -> String {
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}
