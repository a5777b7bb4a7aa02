//! Presentation models: plain data derived from dashboard state.
//!
//! A UI layer draws these; the `Display` impls give a text rendering.

use std::fmt;

use super::chart::{format_count, format_usd, ChartRow, TrendView};
use super::filters::FilterController;
use super::pipeline::TrendPipeline;

// ---------------------------------------------------------------------------
// Filter panel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MakeChip {
    pub make: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterPanelView {
    Loading,
    Ready {
        makes: Vec<MakeChip>,
        models: Vec<String>,
        years: Vec<i32>,
        selected_model: Option<String>,
        year_min: Option<i32>,
        year_max: Option<i32>,
    },
}

impl FilterPanelView {
    pub fn from_controller(filters: &FilterController) -> Self {
        if filters.is_loading() {
            return Self::Loading;
        }
        let options = filters.options();
        let selection = filters.selection();
        Self::Ready {
            makes: options
                .makes
                .iter()
                .map(|make| MakeChip {
                    make: make.clone(),
                    selected: selection.is_selected(make),
                })
                .collect(),
            models: options.models.clone(),
            years: options.years.clone(),
            selected_model: selection.selected_model.clone(),
            year_min: selection.year_min,
            year_max: selection.year_max,
        }
    }

    /// True when loaded but the server offered no makes.
    pub fn no_makes_available(&self) -> bool {
        matches!(self, Self::Ready { makes, .. } if makes.is_empty())
    }
}

fn or_any<T: fmt::Display>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map(|v| v.to_string())
        .unwrap_or_else(|| "Any".to_string())
}

impl fmt::Display for FilterPanelView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loading => write!(f, "Loading filters..."),
            Self::Ready {
                makes,
                selected_model,
                year_min,
                year_max,
                ..
            } => {
                write!(f, "Makes: ")?;
                if makes.is_empty() {
                    write!(f, "No makes available. Import data first.")?;
                } else {
                    let chips: Vec<String> = makes
                        .iter()
                        .map(|c| {
                            if c.selected {
                                format!("[{}]", c.make)
                            } else {
                                c.make.clone()
                            }
                        })
                        .collect();
                    write!(f, "{}", chips.join(" "))?;
                }
                writeln!(f)?;
                writeln!(
                    f,
                    "Model: {}",
                    selected_model.as_deref().unwrap_or("All Models")
                )?;
                write!(f, "Years: {} - {}", or_any(year_min), or_any(year_max))
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Chart panel
// ---------------------------------------------------------------------------

/// One line of the chart: which row field to plot, and in which color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesLine {
    pub make: String,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryCard {
    pub make: String,
    pub color: &'static str,
    pub avg_price: String,
    pub sales: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChartPanelView {
    Loading,
    Empty,
    Chart {
        rows: Vec<ChartRow>,
        lines: Vec<SeriesLine>,
        cards: Vec<SummaryCard>,
    },
}

impl ChartPanelView {
    pub fn from_pipeline(pipeline: &TrendPipeline) -> Self {
        if pipeline.is_loading() {
            return Self::Loading;
        }
        Self::from_view(pipeline.view())
    }

    pub fn from_view(view: &TrendView) -> Self {
        if view.is_empty() {
            return Self::Empty;
        }
        Self::Chart {
            rows: view.rows.clone(),
            lines: view
                .summaries
                .iter()
                .map(|s| SeriesLine {
                    make: s.make.clone(),
                    color: s.color,
                })
                .collect(),
            cards: view
                .summaries
                .iter()
                .map(|s| SummaryCard {
                    make: s.make.clone(),
                    color: s.color,
                    avg_price: format_usd(s.avg_price),
                    sales: format_count(s.total_count),
                })
                .collect(),
        }
    }
}

impl fmt::Display for ChartPanelView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loading => write!(f, "Loading chart data..."),
            Self::Empty => {
                writeln!(f, "No trend data available")?;
                write!(f, "Select one or more makes above, or import data first.")
            }
            Self::Chart { rows, lines, cards } => {
                write!(f, "period")?;
                for line in lines {
                    write!(f, "\t{}", line.make)?;
                }
                writeln!(f)?;
                for row in rows {
                    write!(f, "{}", row.period)?;
                    for line in lines {
                        match row.get(&line.make) {
                            Some(v) => write!(f, "\t{}", format_usd(v))?,
                            None => write!(f, "\t-")?,
                        }
                    }
                    writeln!(f)?;
                }
                for (i, card) in cards.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(
                        f,
                        "{}: Avg Price {} | Sales {}",
                        card.make, card.avg_price, card.sales
                    )?;
                }
                Ok(())
            }
        }
    }
}
