// Settings module
// Planner configuration: grid geometry, search paging and catalog sources

use egui::{pos2, vec2, Rect};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;

use crate::models::schedule::ScheduleEntry;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PlannerConfig {
    pub grid: GridConfig,
    pub search: SearchConfig,
    pub catalog: CatalogConfig,
}

impl PlannerConfig {
    pub fn validate(&self) -> Result<(), String> {
        self.grid.validate()?;
        self.search.validate()?;
        self.catalog.validate()?;
        Ok(())
    }
}

/// Pixel geometry of the timetable grid and its day axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub cell_width: f32,
    pub cell_height: f32,
    /// Width of the row-label column left of the first day.
    pub header_width: f32,
    /// Height of the day-label row above the first slot.
    pub header_height: f32,
    pub border: f32,
    /// Ordered day labels forming the horizontal axis.
    pub days: Vec<String>,
    /// Pointer travel in pixels before a press turns into a drag.
    pub activation_distance: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cell_width: 80.0,
            cell_height: 30.0,
            header_width: 120.0,
            header_height: 40.0,
            border: 1.0,
            days: ["Mon", "Tue", "Wed", "Thu", "Fri"]
                .into_iter()
                .map(String::from)
                .collect(),
            activation_distance: 8.0,
        }
    }
}

impl GridConfig {
    pub fn validate(&self) -> Result<(), String> {
        if !(self.cell_width > 0.0 && self.cell_height > 0.0) {
            return Err("Grid cell width and height must be positive".to_string());
        }

        if self.header_width < 0.0 || self.header_height < 0.0 || self.border < 0.0 {
            return Err("Grid header offsets cannot be negative".to_string());
        }

        if !(self.activation_distance.is_finite() && self.activation_distance >= 0.0) {
            return Err("Drag activation distance must be a non-negative number".to_string());
        }

        if self.days.is_empty() {
            return Err("Grid needs at least one day label".to_string());
        }

        let mut seen = HashSet::new();
        for day in &self.days {
            if day.trim().is_empty() {
                return Err("Day labels cannot be empty".to_string());
            }
            if !seen.insert(day.as_str()) {
                return Err(format!("Duplicate day label: {}", day));
            }
        }

        Ok(())
    }

    /// Position of `day` on the horizontal axis.
    pub fn day_index(&self, day: &str) -> Option<usize> {
        self.days.iter().position(|label| label == day)
    }

    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    /// Block rectangle of `entry`, relative to the grid container's top-left.
    /// `None` for an unknown day, an empty range or a range starting at slot 0.
    pub fn entry_rect(&self, entry: &ScheduleEntry) -> Option<Rect> {
        let day_index = self.day_index(&entry.day)?;
        let slot_offset = entry.first_slot()?.checked_sub(1)?;

        let left = self.header_width + self.cell_width * day_index as f32 + self.border;
        let top = self.header_height + self.cell_height * f32::from(slot_offset) + self.border;
        let size = vec2(
            self.cell_width - self.border,
            self.cell_height * entry.range.len() as f32 - self.border,
        );
        Some(Rect::from_min_size(pos2(left, top), size))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub page_size: usize,
    /// Delay before the result-list sentinel observer is attached.
    pub observer_delay_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            page_size: 100,
            observer_delay_ms: 300,
        }
    }
}

impl SearchConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.page_size == 0 {
            return Err("Search page size must be at least 1".to_string());
        }
        Ok(())
    }
}

/// Where one catalog partition is read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CatalogSource {
    Url(String),
    File(PathBuf),
}

impl From<String> for CatalogSource {
    fn from(value: String) -> Self {
        if value.starts_with("http://") || value.starts_with("https://") {
            CatalogSource::Url(value)
        } else {
            CatalogSource::File(PathBuf::from(value))
        }
    }
}

impl From<CatalogSource> for String {
    fn from(source: CatalogSource) -> Self {
        match source {
            CatalogSource::Url(url) => url,
            CatalogSource::File(path) => path.to_string_lossy().into_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub majors: CatalogSource,
    pub liberal_arts: CatalogSource,
    pub max_response_bytes: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            majors: CatalogSource::File(PathBuf::from("schedules-majors.json")),
            liberal_arts: CatalogSource::File(PathBuf::from("schedules-liberal-arts.json")),
            max_response_bytes: 5 * 1024 * 1024,
        }
    }
}

impl CatalogConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.max_response_bytes == 0 {
            return Err("Catalog response size limit must be at least 1 byte".to_string());
        }
        Ok(())
    }
}
