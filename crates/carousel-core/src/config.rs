//! Tunables for a mounted carousel.
//!
//! Defaults reproduce the stock widget: the second card starts active and a
//! drag has to travel 50px before it counts as a swipe. Both values can be
//! overridden per track through `data-*` attributes.

use crate::error::CarouselError;

/// Card that is active right after mounting.
pub const DEFAULT_INITIAL_INDEX: usize = 1;

/// Minimum horizontal travel (CSS px) for a drag to commit a navigation.
pub const DEFAULT_SWIPE_THRESHOLD_PX: f64 = 50.0;

pub const ATTR_INITIAL_INDEX: &str = "data-initial-index";
pub const ATTR_SWIPE_THRESHOLD: &str = "data-swipe-threshold";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselConfig {
    pub initial_index: usize,
    pub swipe_threshold_px: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            initial_index: DEFAULT_INITIAL_INDEX,
            swipe_threshold_px: DEFAULT_SWIPE_THRESHOLD_PX,
        }
    }
}

impl CarouselConfig {
    /// Build a config from attribute lookups, keeping defaults for absent keys.
    ///
    /// `lookup` receives the attribute name and returns its raw value, if set.
    /// Blank values count as absent.
    pub fn from_attributes<F>(lookup: F) -> Result<Self, CarouselError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(raw) = non_blank(lookup(ATTR_INITIAL_INDEX)) {
            cfg.initial_index = raw
                .parse::<usize>()
                .map_err(|_| CarouselError::invalid_attribute(ATTR_INITIAL_INDEX, &raw))?;
        }

        if let Some(raw) = non_blank(lookup(ATTR_SWIPE_THRESHOLD)) {
            let px = raw
                .parse::<f64>()
                .map_err(|_| CarouselError::invalid_attribute(ATTR_SWIPE_THRESHOLD, &raw))?;
            if !px.is_finite() || px < 0.0 {
                return Err(CarouselError::invalid_attribute(ATTR_SWIPE_THRESHOLD, &raw));
            }
            cfg.swipe_threshold_px = px;
        }

        Ok(cfg)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
