//! Price bands assigned to each listing.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lower bound (inclusive) of the `Medio` band.
pub const MEDIUM_PRICE_FLOOR: f64 = 100_000.0;
/// Lower bound (inclusive) of the `Premium` band.
pub const PREMIUM_PRICE_FLOOR: f64 = 300_000.0;

/// Price category derived from `precio`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceCategory {
    #[serde(rename = "Económico")]
    Economico,
    Medio,
    Premium,
    #[serde(rename = "No definido")]
    NoDefinido,
}

impl PriceCategory {
    /// Assigns the first band whose predicate matches, in ascending order.
    ///
    /// Missing prices (and NaN) match no band and fall through to `NoDefinido`.
    ///
    /// # Examples
    ///
    /// ```
    /// use estate_model::PriceCategory;
    ///
    /// assert_eq!(PriceCategory::from_price(Some(99_999.99)), PriceCategory::Economico);
    /// assert_eq!(PriceCategory::from_price(Some(100_000.0)), PriceCategory::Medio);
    /// assert_eq!(PriceCategory::from_price(Some(300_000.0)), PriceCategory::Premium);
    /// assert_eq!(PriceCategory::from_price(None), PriceCategory::NoDefinido);
    /// ```
    pub fn from_price(price: Option<f64>) -> Self {
        let Some(price) = price else {
            return Self::NoDefinido;
        };
        let bands: [(bool, Self); 3] = [
            (price < MEDIUM_PRICE_FLOOR, Self::Economico),
            (
                (MEDIUM_PRICE_FLOOR..PREMIUM_PRICE_FLOOR).contains(&price),
                Self::Medio,
            ),
            (price >= PREMIUM_PRICE_FLOOR, Self::Premium),
        ];
        bands
            .into_iter()
            .find_map(|(matches, category)| matches.then_some(category))
            .unwrap_or(Self::NoDefinido)
    }

    /// Label written to the `categoria_precio` column.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Economico => "Económico",
            Self::Medio => "Medio",
            Self::Premium => "Premium",
            Self::NoDefinido => "No definido",
        }
    }
}

impl fmt::Display for PriceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
