//! Route - A voyage leg with its fuel and emissions figures
//!
//! A Route is an Entity (identity persists through changes).
//! Toggling the baseline flag does not make it a different route.

/// Unique identifier for a Route
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteId(String);

impl RouteId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for RouteId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Vessel class, e.g. `Container` or `Tanker`
///
/// Categorical and open-ended: the data set decides which classes exist.
/// Two vessel types are equal when their names match exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VesselType(String);

impl VesselType {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for VesselType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fuel class, e.g. `HFO`, `LNG`, `MGO`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FuelType(String);

impl FuelType {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for FuelType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Route - The entity queried, filtered and compared
///
/// `vessel_type`, `fuel_type` and `year` are the filterable attributes.
/// The emissions figures feed the comparison against the baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Unique identifier (Entity identity)
    id: RouteId,
    vessel_type: VesselType,
    fuel_type: FuelType,
    /// Calendar year the route was sailed
    year: u16,
    /// Well-to-wake GHG intensity in gCO2e/MJ
    ghg_intensity: f64,
    /// Fuel burnt, tonnes
    fuel_consumption: f64,
    /// Distance sailed, km
    distance: f64,
    /// Total emissions, tonnes CO2e
    total_emissions: f64,
    /// Whether this route is the current comparison baseline
    is_baseline: bool,
}

impl Route {
    /// Create a new Route with zeroed emissions figures
    pub fn new(
        id: RouteId,
        vessel_type: VesselType,
        fuel_type: FuelType,
        year: u16,
    ) -> Self {
        Self {
            id,
            vessel_type,
            fuel_type,
            year,
            ghg_intensity: 0.0,
            fuel_consumption: 0.0,
            distance: 0.0,
            total_emissions: 0.0,
            is_baseline: false,
        }
    }

    /// Builder: set GHG intensity (gCO2e/MJ)
    pub fn with_ghg_intensity(mut self, ghg_intensity: f64) -> Self {
        self.ghg_intensity = ghg_intensity;
        self
    }

    /// Builder: set fuel consumption (t)
    pub fn with_fuel_consumption(mut self, fuel_consumption: f64) -> Self {
        self.fuel_consumption = fuel_consumption;
        self
    }

    /// Builder: set distance (km)
    pub fn with_distance(mut self, distance: f64) -> Self {
        self.distance = distance;
        self
    }

    /// Builder: set total emissions (t CO2e)
    pub fn with_total_emissions(mut self, total_emissions: f64) -> Self {
        self.total_emissions = total_emissions;
        self
    }

    /// Builder: flag as baseline
    pub fn as_baseline(mut self) -> Self {
        self.is_baseline = true;
        self
    }

    // ========== Getters ==========

    pub fn id(&self) -> &RouteId {
        &self.id
    }

    pub fn vessel_type(&self) -> &VesselType {
        &self.vessel_type
    }

    pub fn fuel_type(&self) -> &FuelType {
        &self.fuel_type
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn ghg_intensity(&self) -> f64 {
        self.ghg_intensity
    }

    pub fn fuel_consumption(&self) -> f64 {
        self.fuel_consumption
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn total_emissions(&self) -> f64 {
        self.total_emissions
    }

    pub fn is_baseline(&self) -> bool {
        self.is_baseline
    }

    // ========== Mutations ==========

    /// Make this route the baseline
    pub fn mark_baseline(&mut self) {
        self.is_baseline = true;
    }

    /// Drop the baseline flag
    pub fn clear_baseline(&mut self) {
        self.is_baseline = false;
    }

    /// Check the emissions figures are usable
    ///
    /// Every figure must be finite and non-negative.
    pub fn validate(&self) -> Result<(), RouteError> {
        let figures = [
            ("ghgIntensity", self.ghg_intensity),
            ("fuelConsumption", self.fuel_consumption),
            ("distance", self.distance),
            ("totalEmissions", self.total_emissions),
        ];

        for (field, value) in figures {
            if !value.is_finite() || value < 0.0 {
                return Err(RouteError::InvalidFigure {
                    id: self.id.as_str().to_string(),
                    field,
                    value,
                });
            }
        }

        if self.id.as_str().trim().is_empty() {
            return Err(RouteError::EmptyId);
        }

        Ok(())
    }
}

/// Errors raised when a Route is malformed
#[derive(Debug, Clone, PartialEq)]
pub enum RouteError {
    EmptyId,
    InvalidFigure {
        id: String,
        field: &'static str,
        value: f64,
    },
}

impl core::fmt::Display for RouteError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RouteError::EmptyId => write!(f, "Route id must not be empty"),
            RouteError::InvalidFigure { id, field, value } => {
                write!(f, "Route {} has invalid {}: {}", id, field, value)
            }
        }
    }
}

impl std::error::Error for RouteError {}
