/*!
 * Grid and pagination math for the image section.
 */

use serde::{Deserialize, Serialize};

/// Page and cell geometry for the compiled report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Images per page before a hard page break
    #[serde(default = "default_images_per_page")]
    pub images_per_page: usize,

    /// Grid columns per row
    #[serde(default = "default_grid_columns")]
    pub grid_columns: usize,

    /// Letterhead bounding box, in points
    #[serde(default = "default_letterhead_width")]
    pub letterhead_width: u32,

    #[serde(default = "default_letterhead_height")]
    pub letterhead_height: u32,

    /// Image cell bounding box, in points
    #[serde(default = "default_image_width")]
    pub image_width: u32,

    #[serde(default = "default_image_height")]
    pub image_height: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            images_per_page: default_images_per_page(),
            grid_columns: default_grid_columns(),
            letterhead_width: default_letterhead_width(),
            letterhead_height: default_letterhead_height(),
            image_width: default_image_width(),
            image_height: default_image_height(),
        }
    }
}

fn default_images_per_page() -> usize {
    6
}

fn default_grid_columns() -> usize {
    3
}

fn default_letterhead_width() -> u32 {
    600
}

fn default_letterhead_height() -> u32 {
    120
}

fn default_image_width() -> u32 {
    180
}

fn default_image_height() -> u32 {
    140
}

/// Splits an ordered list into pages and rows without reordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    per_page: usize,
    columns: usize,
}

impl GridLayout {
    /// Zero sizes are raised to one so pagination always terminates.
    pub fn new(per_page: usize, columns: usize) -> Self {
        let per_page = per_page.max(1);
        Self {
            per_page,
            columns: columns.clamp(1, per_page),
        }
    }

    pub fn from_config(config: &LayoutConfig) -> Self {
        Self::new(config.images_per_page, config.grid_columns)
    }

    pub fn page_count(&self, item_count: usize) -> usize {
        item_count.div_ceil(self.per_page)
    }

    /// Pages of rows, in input order.
    pub fn paginate<'a, T>(&self, items: &'a [T]) -> Vec<Vec<&'a [T]>> {
        items
            .chunks(self.per_page)
            .map(|page| page.chunks(self.columns).collect())
            .collect()
    }
}

impl Default for GridLayout {
    fn default() -> Self {
        Self::from_config(&LayoutConfig::default())
    }
}
