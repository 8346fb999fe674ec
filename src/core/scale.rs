use crate::core::bounds::AxisBounds;
use crate::error::{PlotError, PlotResult};

/// Linear mapping from a value range onto a pixel interval.
///
/// With `inverted`, the domain start maps to the interval end; this is what a
/// y axis needs since pixel rows grow downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    pixel_start: f64,
    pixel_end: f64,
    inverted: bool,
}

impl LinearScale {
    pub fn new(domain: AxisBounds, pixel_start: f64, pixel_end: f64) -> PlotResult<Self> {
        if !domain.min.is_finite() || !domain.max.is_finite() || domain.min == domain.max {
            return Err(PlotError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }
        if !pixel_start.is_finite() || !pixel_end.is_finite() || pixel_start >= pixel_end {
            return Err(PlotError::InvalidData(
                "scale pixel interval must be finite and increasing".to_owned(),
            ));
        }

        Ok(Self {
            domain_start: domain.min,
            domain_end: domain.max,
            pixel_start,
            pixel_end,
            inverted: false,
        })
    }

    #[must_use]
    pub fn inverted(mut self) -> Self {
        self.inverted = !self.inverted;
        self
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn domain_to_pixel(self, value: f64) -> f64 {
        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        let normalized = if self.inverted {
            1.0 - normalized
        } else {
            normalized
        };
        self.pixel_start + normalized * (self.pixel_end - self.pixel_start)
    }

    #[must_use]
    pub fn pixel_to_domain(self, pixel: f64) -> f64 {
        let normalized = (pixel - self.pixel_start) / (self.pixel_end - self.pixel_start);
        let normalized = if self.inverted {
            1.0 - normalized
        } else {
            normalized
        };
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }
}
