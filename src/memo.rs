//! Row Rendering Cache
//!
//! A row is a pure function of its house record. The cache keeps the last
//! record seen for each id together with its rendered row, and only renders
//! again when some field of the record changed.

use std::collections::HashMap;

use crate::format::{format_price, photo_src};
use crate::models::House;

/// Display-ready data for one house row
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RowView {
    pub id: u32,
    pub address: String,
    pub country: String,
    pub price_label: String,
    pub photo_src: String,
}

impl RowView {
    pub fn render(house: &House) -> Self {
        Self {
            id: house.id,
            address: house.address.clone(),
            country: house.country.clone(),
            price_label: format_price(house.price),
            photo_src: photo_src(house.photo.as_deref()),
        }
    }
}

#[derive(Debug, Default)]
pub struct RowCache {
    entries: HashMap<u32, (House, RowView)>,
    renders: usize,
}

impl RowCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached row if `house` equals the last input for its id, else a fresh render.
    pub fn row(&mut self, house: &House) -> RowView {
        if let Some((input, view)) = self.entries.get(&house.id) {
            if input == house {
                return view.clone();
            }
        }
        let view = RowView::render(house);
        self.renders += 1;
        self.entries.insert(house.id, (house.clone(), view.clone()));
        view
    }

    /// Renders every house in order and forgets ids no longer listed.
    pub fn rows(&mut self, houses: &[House]) -> Vec<RowView> {
        self.entries.retain(|id, _| houses.iter().any(|h| h.id == *id));
        houses.iter().map(|h| self.row(h)).collect()
    }

    /// Number of renders performed so far (cache misses)
    pub fn render_count(&self) -> usize {
        self.renders
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_is_pure() {
        let house = House::new(7, "1 Main St", "USA", 1_000_000);
        assert_eq!(RowView::render(&house), RowView::render(&house));
        assert_eq!(RowView::render(&house).price_label, "$1,000,000.00");
        assert_eq!(RowView::render(&house).photo_src, "./houseImages/default.jpeg");
    }

    #[test]
    fn test_cache_hit_for_unchanged_record() {
        let mut cache = RowCache::new();
        let house = House::new(1, "1 Main St", "USA", 10);

        let first = cache.row(&house);
        let second = cache.row(&house.clone());

        assert_eq!(first, second);
        assert_eq!(cache.render_count(), 1);
    }

    #[test]
    fn test_cache_invalidated_on_field_change() {
        let mut cache = RowCache::new();
        let mut house = House::new(1, "1 Main St", "USA", 10);
        cache.row(&house);

        house.photo = Some("277667".into());
        let row = cache.row(&house);

        assert_eq!(row.photo_src, "./houseImages/277667.jpeg");
        assert_eq!(cache.render_count(), 2);
    }

    #[test]
    fn test_rows_drops_missing_ids() {
        let mut cache = RowCache::new();
        let a = House::new(1, "A", "USA", 1);
        let b = House::new(2, "B", "USA", 2);
        cache.rows(&[a.clone(), b]);
        assert_eq!(cache.len(), 2);

        let rows = cache.rows(&[a]);
        assert_eq!(rows.len(), 1);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.render_count(), 2);
    }
}
