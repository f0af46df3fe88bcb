//! Listing files for batch valuation.
//!
//! Schema: a JSON array of objects with `original_price`, `model_year`,
//! `condition` and `brand_tier`. Labels are lowercase (`"good"`, `"premium"`).

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::domain::ValuationInput;
use crate::error::AppError;

pub fn read_listings_json(path: &Path) -> Result<Vec<ValuationInput>, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::new(2, format!("Failed to open listings '{}': {e}", path.display()))
    })?;
    let listings: Vec<ValuationInput> = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| AppError::new(2, format!("Invalid listings JSON '{}': {e}", path.display())))?;
    if listings.is_empty() {
        return Err(AppError::new(2, format!("No listings in '{}'.", path.display())));
    }
    Ok(listings)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::domain::{BrandTier, Condition};

    #[test]
    fn reads_listing_array() {
        let path = std::env::temp_dir().join(format!("bv_{}_listings.json", std::process::id()));
        fs::write(
            &path,
            r#"[
                {"original_price": 1200, "model_year": 2019, "condition": "good", "brand_tier": "premium"},
                {"original_price": 450.5, "model_year": 2022, "condition": "fair", "brand_tier": "budget"}
            ]"#,
        )
        .unwrap();

        let listings = read_listings_json(&path).unwrap();
        assert_eq!(listings.len(), 2);
        assert_eq!(listings[0].condition, Condition::Good);
        assert_eq!(listings[0].brand_tier, BrandTier::Premium);
        assert_eq!(listings[1].original_price, 450.5);

        fs::write(&path, "[]").unwrap();
        assert_eq!(read_listings_json(&path).unwrap_err().exit_code(), 2);

        fs::write(&path, r#"[{"original_price": 1, "model_year": 2019, "condition": "mint", "brand_tier": "budget"}]"#)
            .unwrap();
        assert!(read_listings_json(&path).is_err());

        fs::remove_file(path).ok();
    }
}
