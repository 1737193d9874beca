//! Dashboard renderers.

use crate::chart::{BarChart, Cell, Dashboard, LineChart, Panel, Point, Table};
use std::io::{self, Write};

/// Writes a dashboard to an output stream.
pub trait Renderer {
    fn render(&self, dashboard: &Dashboard, out: &mut dyn Write) -> io::Result<()>;
}

/// Pretty JSON output.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, dashboard: &Dashboard, out: &mut dyn Write) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *out, dashboard)?;
        writeln!(out)
    }
}

/// Plain-text output with block-character bars.
#[derive(Debug, Clone, Copy)]
pub struct TextRenderer {
    /// Width of a full-scale bar, in characters.
    bar_width: usize,
}

impl TextRenderer {
    /// Create a renderer with the given full-scale bar width.
    pub fn new(bar_width: usize) -> Self {
        Self { bar_width }
    }

    /// Bar length for a value on a `[lower, upper]` axis.
    fn bar_len(&self, value: f64, lower: f64, upper: f64) -> usize {
        let span = upper - lower;
        if span <= 0.0 || !value.is_finite() {
            return 0;
        }
        let frac = ((value - lower) / span).clamp(0.0, 1.0);
        (frac * self.bar_width as f64).round() as usize
    }

    fn axis(points: &[Point], fixed: Option<[f64; 2]>) -> (f64, f64) {
        match fixed {
            Some([lower, upper]) => (lower, upper),
            None => {
                let max = points.iter().map(|p| p.value).fold(0.0, f64::max);
                (0.0, max)
            }
        }
    }

    fn write_points(
        &self,
        out: &mut dyn Write,
        points: &[Point],
        axis: (f64, f64),
        integral: bool,
    ) -> io::Result<()> {
        if points.is_empty() {
            return writeln!(out, "  (no data)");
        }

        let label_width = points.iter().map(|p| p.label.chars().count()).max().unwrap_or(0);
        for point in points {
            let bar = "█".repeat(self.bar_len(point.value, axis.0, axis.1));
            let value = if integral {
                format!("{}", point.value as u64)
            } else {
                format!("{:.2}", point.value)
            };
            writeln!(out, "  {:<label_width$} | {bar} {value}", point.label)?;
        }
        Ok(())
    }

    fn write_axis_header(
        out: &mut dyn Write,
        title: &str,
        x_label: &str,
        y_label: &str,
        y_range: Option<[f64; 2]>,
    ) -> io::Result<()> {
        writeln!(out, "{title}")?;
        match y_range {
            Some([lower, upper]) => writeln!(out, "  {x_label} vs {y_label} [{lower}, {upper}]"),
            None => writeln!(out, "  {x_label} vs {y_label}"),
        }
    }

    fn write_bar(&self, out: &mut dyn Write, chart: &BarChart) -> io::Result<()> {
        Self::write_axis_header(out, &chart.title, &chart.x_label, &chart.y_label, chart.y_range)?;
        let axis = Self::axis(&chart.points, chart.y_range);
        // Unscaled charts plot counts.
        self.write_points(out, &chart.points, axis, chart.y_range.is_none())
    }

    fn write_line(&self, out: &mut dyn Write, chart: &LineChart) -> io::Result<()> {
        Self::write_axis_header(out, &chart.title, &chart.x_label, &chart.y_label, chart.y_range)?;
        let axis = Self::axis(&chart.points, chart.y_range);
        self.write_points(out, &chart.points, axis, false)
    }

    fn write_table(out: &mut dyn Write, table: &Table) -> io::Result<()> {
        writeln!(out, "{}", table.caption)?;

        let rendered: Vec<Vec<String>> = table
            .rows
            .iter()
            .map(|row| row.iter().map(Cell::to_string).collect())
            .collect();

        let mut widths: Vec<usize> = table.columns.iter().map(|c| c.chars().count()).collect();
        for row in &rendered {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let header: Vec<String> = table
            .columns
            .iter()
            .zip(&widths)
            .map(|(name, &w)| format!("{name:<w$}"))
            .collect();
        writeln!(out, "  {}", header.join(" | "))?;

        let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
        writeln!(out, "  {}", rule.join("-+-"))?;

        for (row, cells) in table.rows.iter().zip(&rendered) {
            let line: Vec<String> = row
                .iter()
                .zip(cells)
                .zip(&widths)
                .map(|((cell, text), &w)| match cell {
                    Cell::Text(_) => format!("{text:<w$}"),
                    Cell::Integer(_) | Cell::Number(_) => format!("{text:>w$}"),
                })
                .collect();
            writeln!(out, "  {}", line.join(" | "))?;
        }
        Ok(())
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new(40)
    }
}

impl Renderer for TextRenderer {
    fn render(&self, dashboard: &Dashboard, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", dashboard.title)?;
        writeln!(out, "{}", "=".repeat(dashboard.title.chars().count()))?;
        writeln!(
            out,
            "{} ratings, generated {}",
            dashboard.record_count,
            dashboard.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;

        for section in &dashboard.sections {
            writeln!(out)?;
            writeln!(out, "## {}", section.subheader)?;
            for panel in &section.panels {
                writeln!(out)?;
                match panel {
                    Panel::Bar(chart) => self.write_bar(out, chart)?,
                    Panel::Line(chart) => self.write_line(out, chart)?,
                    Panel::Table(table) => Self::write_table(out, table)?,
                }
            }
        }
        Ok(())
    }
}
