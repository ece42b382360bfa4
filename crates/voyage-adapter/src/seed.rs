//! Default route data set
//!
//! Used by the in-memory adapter for demos and to initialise a missing
//! data file. No route starts out as the baseline.

use voyage_domain::{FuelType, Route, RouteId, VesselType};

struct SeedRow {
    id: &'static str,
    vessel: &'static str,
    fuel: &'static str,
    year: u16,
    ghg_intensity: f64,
    fuel_consumption: f64,
    distance: f64,
    total_emissions: f64,
}

#[rustfmt::skip]
const SEED: &[SeedRow] = &[
    SeedRow { id: "R001", vessel: "Container", fuel: "HFO", year: 2024, ghg_intensity: 91.0, fuel_consumption: 5000.0, distance: 12000.0, total_emissions: 4500.0 },
    SeedRow { id: "R002", vessel: "BulkCarrier", fuel: "LNG", year: 2024, ghg_intensity: 88.0, fuel_consumption: 4800.0, distance: 11500.0, total_emissions: 4200.0 },
    SeedRow { id: "R003", vessel: "Tanker", fuel: "MGO", year: 2024, ghg_intensity: 93.5, fuel_consumption: 5100.0, distance: 12500.0, total_emissions: 4700.0 },
    SeedRow { id: "R004", vessel: "RoRo", fuel: "HFO", year: 2025, ghg_intensity: 89.2, fuel_consumption: 4900.0, distance: 11800.0, total_emissions: 4300.0 },
    SeedRow { id: "R005", vessel: "Container", fuel: "LNG", year: 2025, ghg_intensity: 90.5, fuel_consumption: 4950.0, distance: 11900.0, total_emissions: 4400.0 },
];

/// The five default routes, in id order
pub fn seed_routes() -> Vec<Route> {
    SEED.iter()
        .map(|row| {
            Route::new(
                RouteId::new(row.id),
                VesselType::new(row.vessel),
                FuelType::new(row.fuel),
                row.year,
            )
            .with_ghg_intensity(row.ghg_intensity)
            .with_fuel_consumption(row.fuel_consumption)
            .with_distance(row.distance)
            .with_total_emissions(row.total_emissions)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_is_valid() {
        let routes = seed_routes();
        assert_eq!(routes.len(), 5);
        assert!(routes.iter().all(|r| r.validate().is_ok()));
    }

    #[test]
    fn test_seed_has_no_baseline() {
        assert!(seed_routes().iter().all(|r| !r.is_baseline()));
    }
}
