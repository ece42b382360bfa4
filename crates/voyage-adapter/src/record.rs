//! RouteRecord - The serialized shape of a Route
//!
//! The domain stays serde-free; this is the only place that knows the
//! camelCase JSON layout.

use serde::{Deserialize, Serialize};
use voyage_domain::{FuelType, Route, RouteError, RouteId, VesselType};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteRecord {
    pub route_id: String,
    pub vessel_type: String,
    pub fuel_type: String,
    pub year: u16,
    pub ghg_intensity: f64,
    pub fuel_consumption: f64,
    pub distance: f64,
    pub total_emissions: f64,
    #[serde(default)]
    pub is_baseline: bool,
}

impl RouteRecord {
    /// Convert into a validated domain Route
    pub fn into_route(self) -> Result<Route, RouteError> {
        let mut route = Route::new(
            RouteId::new(self.route_id),
            VesselType::new(self.vessel_type),
            FuelType::new(self.fuel_type),
            self.year,
        )
        .with_ghg_intensity(self.ghg_intensity)
        .with_fuel_consumption(self.fuel_consumption)
        .with_distance(self.distance)
        .with_total_emissions(self.total_emissions);

        if self.is_baseline {
            route.mark_baseline();
        }

        route.validate()?;
        Ok(route)
    }
}

impl From<&Route> for RouteRecord {
    fn from(route: &Route) -> Self {
        Self {
            route_id: route.id().as_str().to_string(),
            vessel_type: route.vessel_type().as_str().to_string(),
            fuel_type: route.fuel_type().as_str().to_string(),
            year: route.year(),
            ghg_intensity: route.ghg_intensity(),
            fuel_consumption: route.fuel_consumption(),
            distance: route.distance(),
            total_emissions: route.total_emissions(),
            is_baseline: route.is_baseline(),
        }
    }
}
