use std::{convert::TryFrom, fmt};

/// Symbolic key of a location in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LocationKey {
    #[default]
    Bowmanville,
    Lindsey,
}

/// A named point the forecast is requested for.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub key: LocationKey,
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

static BOWMANVILLE: Location = Location {
    key: LocationKey::Bowmanville,
    name: "Bowmanville, ON",
    latitude: 43.9135,
    longitude: -78.6864,
};

static LINDSEY: Location = Location {
    key: LocationKey::Lindsey,
    name: "Lindsey, ON",
    latitude: 44.3501,
    longitude: -78.8496,
};

impl LocationKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            LocationKey::Bowmanville => "bowmanville",
            LocationKey::Lindsey => "lindsey",
        }
    }

    pub const fn all() -> &'static [LocationKey] {
        &[LocationKey::Bowmanville, LocationKey::Lindsey]
    }

    /// Registry lookup. Every key has an entry, so this cannot fail.
    pub fn location(&self) -> &'static Location {
        match self {
            LocationKey::Bowmanville => &BOWMANVILLE,
            LocationKey::Lindsey => &LINDSEY,
        }
    }
}

impl fmt::Display for LocationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl TryFrom<&str> for LocationKey {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.trim().to_lowercase();

        LocationKey::all()
            .iter()
            .copied()
            .find(|key| key.as_str() == lower)
            .ok_or_else(|| {
                let supported: Vec<_> = LocationKey::all().iter().map(|k| k.as_str()).collect();
                anyhow::anyhow!(
                    "Unknown location '{value}'. Supported locations: {}.",
                    supported.join(", ")
                )
            })
    }
}
