//! # Text Report
//!
//! Plain-text rendering of a before-closure series for terminals and logs: a
//! column table of the chart series and the cursor readings a chart shows next
//! to the data cursor. Graphical plotting belongs to the presentation layer.

use crate::{analysis::CursorReadout, AnalysisMode, TransformedSeries};

/// Column titles for one analysis mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnTitles {
    pub plot: &'static str,
    pub x: &'static str,
    pub pressure: &'static str,
    pub derivative: &'static str,
    pub log_derivative: &'static str,
}

impl ColumnTitles {
    pub fn for_mode(mode: AnalysisMode) -> Self {
        match mode {
            AnalysisMode::SquareRootTime => ColumnTitles {
                plot: "Square Root Time",
                x: "tD^1/2",
                pressure: "Pressure [psi]",
                derivative: "dp/dtD^1/2 [psi]",
                log_derivative: "tD^1/2.dp/dtD^1/2 [psi]",
            },
            AnalysisMode::GFunction => ColumnTitles {
                plot: "G-Function",
                x: "G",
                pressure: "Pressure [psi]",
                derivative: "dp/dG [psi]",
                log_derivative: "G.dp/dG [psi]",
            },
        }
    }
}

/// Indices of at most `rows` evenly strided samples out of `len`, always
/// ending on the last sample.
fn row_indices(len: usize, rows: usize) -> Vec<usize> {
    if len == 0 || rows == 0 {
        return Vec::new();
    }
    if len <= rows {
        return (0..len).collect();
    }
    if rows == 1 {
        return vec![len - 1];
    }

    let mut indices: Vec<usize> = (0..rows).map(|r| r * (len - 1) / (rows - 1)).collect();
    indices.dedup();
    indices
}

/// Format the series as a fixed-width table.
///
/// # Example
/// ```
/// use bca_lib::{analysis::compute, report::format_table, AnalysisMode};
///
/// let pressure = [100.0, 90.0, 80.0];
/// let series = compute(AnalysisMode::SquareRootTime, &[0.0, 1.0, 4.0], &pressure, 1).unwrap();
/// let table = format_table(&series, &pressure, 10, 1);
///
/// assert!(table.starts_with("Square Root Time"));
/// assert_eq!(table.lines().count(), 5);
/// ```
pub fn format_table(
    series: &TransformedSeries,
    pressure: &[f64],
    rows: usize,
    precision: usize,
) -> String {
    const WIDTH: usize = 24;
    let titles = ColumnTitles::for_mode(series.mode);
    let len = series.len().min(pressure.len());

    let mut out = String::new();
    out.push_str(titles.plot);
    out.push('\n');
    out.push_str(&format!(
        "{:>6} {:>w$} {:>w$} {:>w$} {:>w$}\n",
        "#",
        titles.x,
        titles.pressure,
        titles.derivative,
        titles.log_derivative,
        w = WIDTH
    ));

    for i in row_indices(len, rows) {
        out.push_str(&format!(
            "{:>6} {:>w$.p$} {:>w$.p$} {:>w$.p$} {:>w$.p$}\n",
            i,
            series.x[i],
            pressure[i],
            series.dx[i],
            series.xdx[i],
            w = WIDTH,
            p = precision
        ));
    }
    out
}

/// The three `"x , value"` readings shown next to the data cursor:
/// pressure, log-derivative and derivative.
pub fn format_readout(readout: &CursorReadout, precision: usize) -> [String; 3] {
    let reading = |value: f64| format!("{:.p$} , {:.p$}", readout.x, value, p = precision);
    [
        reading(readout.pressure),
        reading(readout.xdx),
        reading(readout.dx),
    ]
}

/// Print the table and an optional cursor readout to stdout.
pub fn print_report(
    series: &TransformedSeries,
    pressure: &[f64],
    cursor: Option<&CursorReadout>,
    rows: usize,
    precision: usize,
) {
    print!("{}", format_table(series, pressure, rows, precision));

    if let Some(readout) = cursor {
        let titles = ColumnTitles::for_mode(series.mode);
        let [p, xdx, dx] = format_readout(readout, precision);
        println!();
        println!("Cursor at sample {}:", readout.index);
        println!("  {:<24} {}", titles.pressure, p);
        println!("  {:<24} {}", titles.log_derivative, xdx);
        println!("  {:<24} {}", titles.derivative, dx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::compute;

    fn test_series() -> (TransformedSeries, Vec<f64>) {
        let t: Vec<f64> = (0..100).map(|i| i as f64 * 0.05).collect();
        let p: Vec<f64> = t.iter().map(|v| 5000.0 - 50.0 * v).collect();
        (compute(AnalysisMode::GFunction, &t, &p, 15).unwrap(), p)
    }

    #[test]
    fn test_row_indices() {
        assert_eq!(row_indices(5, 10), vec![0, 1, 2, 3, 4]);
        assert_eq!(row_indices(10, 4), vec![0, 3, 6, 9]);
        assert_eq!(row_indices(10, 1), vec![9]);
        assert!(row_indices(10, 0).is_empty());
        assert!(row_indices(0, 10).is_empty());
    }

    #[test]
    fn test_table_includes_last_sample() {
        let (series, p) = test_series();
        let table = format_table(&series, &p, 7, 3);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 2 + 7);
        assert!(lines[1].contains("G.dp/dG"));
        assert!(lines.last().unwrap().trim_start().starts_with("99 "));
    }

    #[test]
    fn test_readout_text() {
        let readout = CursorReadout {
            index: 3,
            x: 1.5,
            pressure: 4200.0,
            dx: -12.25,
            xdx: -18.4,
        };
        let [p, xdx, dx] = format_readout(&readout, 2);
        assert_eq!(p, "1.50 , 4200.00");
        assert_eq!(xdx, "1.50 , -18.40");
        assert_eq!(dx, "1.50 , -12.25");
    }

    #[test]
    fn test_titles_follow_mode() {
        let titles = ColumnTitles::for_mode(AnalysisMode::SquareRootTime);
        assert_eq!(titles.x, "tD^1/2");
        assert_eq!(ColumnTitles::for_mode(AnalysisMode::GFunction).plot, "G-Function");
    }

    #[test]
    fn test_print_report_does_not_panic() {
        let (series, p) = test_series();
        let readout = CursorReadout::at(&series, &p, 10).unwrap();
        print_report(&series, &p, Some(&readout), 5, 2);
        print_report(&series, &p, None, 0, 2);
    }
}
