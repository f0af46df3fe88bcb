//! ASCII plotting of a depreciation series for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - series values: `*`
//! - segments between consecutive years: `-`

use crate::domain::SeriesPoint;

/// Render a depreciation series as a fixed-size character grid.
pub fn render_series_plot(series: &[SeriesPoint], width: usize, height: usize) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let Some((year_min, year_max)) = year_range(series) else {
        return "Plot: (empty series)\n".to_string();
    };
    let (x_min, x_max) = if year_max > year_min {
        (f64::from(year_min), f64::from(year_max))
    } else {
        (f64::from(year_min) - 0.5, f64::from(year_max) + 0.5)
    };

    let (v_min, v_max) = value_range(series).unwrap_or((0.0, 1.0));
    let (v_min, v_max) = if v_max > v_min {
        pad_range(v_min, v_max, 0.05)
    } else {
        let pad = (v_min.abs() * 0.05).max(1.0);
        (v_min - pad, v_max + pad)
    };

    let cells: Vec<(usize, usize)> = series
        .iter()
        .map(|p| {
            (
                map_x(f64::from(p.year), x_min, x_max, width),
                map_y(p.value, v_min, v_max, height),
            )
        })
        .collect();

    let mut grid = vec![vec![' '; width]; height];

    // Segments first so markers overlay them.
    for pair in cells.windows(2) {
        let ((x0, y0), (x1, y1)) = (pair[0], pair[1]);
        draw_line(&mut grid, x0, y0, x1, y1, '-');
    }
    for &(x, y) in &cells {
        grid[y][x] = '*';
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Plot: year=[{year_min}, {year_max}] | value=[{v_min:.2}, {v_max:.2}]\n"
    ));
    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    out
}

fn year_range(series: &[SeriesPoint]) -> Option<(i32, i32)> {
    let min = series.iter().map(|p| p.year).min()?;
    let max = series.iter().map(|p| p.year).max()?;
    Some((min, max))
}

fn value_range(series: &[SeriesPoint]) -> Option<(f64, f64)> {
    let mut min_v = f64::INFINITY;
    let mut max_v = f64::NEG_INFINITY;
    for p in series {
        min_v = min_v.min(p.value);
        max_v = max_v.max(p.value);
    }
    if min_v.is_finite() && max_v.is_finite() {
        Some((min_v, max_v))
    } else {
        None
    }
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

fn map_x(x: f64, x_min: f64, x_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((x - x_min) / (x_max - x_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

/// Integer line drawing (Bresenham-ish).
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}
