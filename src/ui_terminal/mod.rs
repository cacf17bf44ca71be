//! Terminal rendering of a [`HeatmapView`].
//!
//! Each cell takes two character columns. In colour mode every column is an
//! upper half block whose foreground paints the top quadrant and background
//! the bottom one, so split and three-way cells stay readable.

use crate::models::change_event::Category;
use crate::services::heatmap::encoder::{CellComposition, CellVisual};
use crate::services::heatmap::palette::{color_for, RgbaColor, INACTIVE_COLOR};
use crate::services::heatmap::view::HeatmapView;

const DAY_GUTTER: usize = 5;
const COLUMN_WIDTH: usize = 3;
const HALF_BLOCK: char = '▀';
const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TerminalStyle {
    /// 24-bit ANSI colour
    #[default]
    TrueColor,
    /// ASCII symbols only
    Plain,
}

fn symbol(category: Category) -> char {
    match category {
        Category::Add => '+',
        Category::Change => '~',
        Category::Delete => '-',
    }
}

fn plain_cell(visual: &CellVisual) -> String {
    match visual.composition {
        CellComposition::Inactive => ". ".to_string(),
        CellComposition::Solid { category } => {
            let glyph = symbol(category);
            format!("{glyph}{glyph}")
        }
        CellComposition::HorizontalSplit { top, bottom } => {
            format!("{}{}", symbol(top), symbol(bottom))
        }
        CellComposition::TriSplit => "**".to_string(),
    }
}

fn paint(top: RgbaColor, bottom: RgbaColor) -> String {
    format!(
        "\x1b[38;2;{};{};{}m\x1b[48;2;{};{};{}m{}{}",
        top.r, top.g, top.b, bottom.r, bottom.g, bottom.b, HALF_BLOCK, RESET
    )
}

fn color_cell(visual: &CellVisual) -> String {
    [0.25, 0.75]
        .iter()
        .map(|x| paint(visual.color_at(*x, 0.25), visual.color_at(*x, 0.75)))
        .collect()
}

fn month_header(view: &HeatmapView) -> String {
    let width = DAY_GUTTER + view.extents.width as usize * COLUMN_WIDTH;
    let mut header: Vec<char> = vec![' '; width];
    let mut next_free = 0;
    for label in &view.labels.month_labels {
        let column = DAY_GUTTER + label.week_index as usize * COLUMN_WIDTH;
        if column < next_free {
            continue;
        }
        for (offset, ch) in label.text.chars().enumerate() {
            if let Some(slot) = header.get_mut(column + offset) {
                *slot = ch;
            }
        }
        next_free = column + label.text.chars().count() + 1;
    }
    header.into_iter().collect::<String>().trim_end().to_string()
}

/// Render the grid with month and weekday labels.
pub fn render_grid(view: &HeatmapView, style: TerminalStyle) -> String {
    let columns = view.extents.width as usize;
    let rows = view.extents.height as usize;
    let mut grid: Vec<Vec<Option<String>>> = vec![vec![None; columns]; rows];

    for cell in &view.cells {
        let rendered = match style {
            TerminalStyle::TrueColor => color_cell(&cell.visual),
            TerminalStyle::Plain => plain_cell(&cell.visual),
        };
        if let Some(slot) = grid
            .get_mut(cell.day_of_week as usize)
            .and_then(|row| row.get_mut(cell.week_index as usize))
        {
            *slot = Some(rendered);
        }
    }

    let mut lines = vec![month_header(view)];
    for (row, label) in grid.iter().zip(&view.labels.day_labels) {
        let mut line = format!("{:>width$} ", label.text, width = DAY_GUTTER - 1);
        let cells: Vec<String> = row
            .iter()
            .map(|cell| cell.clone().unwrap_or_else(|| "  ".to_string()))
            .collect();
        line.push_str(&cells.join(" "));
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

/// One-line key explaining the cell colours or symbols.
pub fn render_legend(style: TerminalStyle) -> String {
    let mut parts: Vec<String> = Category::ALL
        .iter()
        .map(|category| {
            let swatch = match style {
                TerminalStyle::TrueColor => paint(color_for(*category), color_for(*category)),
                TerminalStyle::Plain => symbol(*category).to_string(),
            };
            format!("{} {}", swatch, category.heading())
        })
        .collect();
    let idle = match style {
        TerminalStyle::TrueColor => paint(INACTIVE_COLOR, INACTIVE_COLOR),
        TerminalStyle::Plain => ".".to_string(),
    };
    parts.push(format!("{} No activity", idle));
    parts.join("   ")
}
