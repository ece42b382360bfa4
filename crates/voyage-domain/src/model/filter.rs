//! RouteFilters - Optional constraints for listing routes
//!
//! Every field is independently optional. A route matches when it
//! satisfies ALL of the fields that are set. The empty filter set
//! matches every route.

use super::route::{FuelType, Route, VesselType};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteFilters {
    pub vessel_type: Option<VesselType>,
    pub fuel_type: Option<FuelType>,
    pub year: Option<u16>,
}

impl RouteFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vessel_type(mut self, vessel_type: VesselType) -> Self {
        self.vessel_type = Some(vessel_type);
        self
    }

    pub fn with_fuel_type(mut self, fuel_type: FuelType) -> Self {
        self.fuel_type = Some(fuel_type);
        self
    }

    pub fn with_year(mut self, year: u16) -> Self {
        self.year = Some(year);
        self
    }

    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        self.vessel_type.is_none() && self.fuel_type.is_none() && self.year.is_none()
    }

    /// Conjunctive exact match against every field that is set
    pub fn matches(&self, route: &Route) -> bool {
        self.vessel_type
            .as_ref()
            .map_or(true, |v| route.vessel_type() == v)
            && self
                .fuel_type
                .as_ref()
                .map_or(true, |f| route.fuel_type() == f)
            && self.year.map_or(true, |y| route.year() == y)
    }
}
