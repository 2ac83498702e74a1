use serde::{Deserialize, Serialize};

/// Sky condition axis of the symbolic weather state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Clear,
    Cloudy,
    Rainy,
    Snowy,
}

impl Environment {
    pub const ALL: [Environment; 4] = [
        Environment::Clear,
        Environment::Cloudy,
        Environment::Rainy,
        Environment::Snowy,
    ];

    /// Case-insensitive lookup. Unknown names yield `None`, which the resolver
    /// treats as "unset" rather than an error.
    pub fn parse(name: &str) -> Option<Environment> {
        match name.trim().to_ascii_lowercase().as_str() {
            "clear" => Some(Environment::Clear),
            "cloudy" => Some(Environment::Cloudy),
            "rainy" => Some(Environment::Rainy),
            "snowy" => Some(Environment::Snowy),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Environment::Clear => "Clear",
            Environment::Cloudy => "Cloudy",
            Environment::Rainy => "Rainy",
            Environment::Snowy => "Snowy",
        }
    }

    /// Rain and snow dominate the lighting mood of the sky and clouds.
    pub fn is_precipitating(self) -> bool {
        matches!(self, Environment::Rainy | Environment::Snowy)
    }
}

/// Time-of-day axis of the symbolic weather state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    pub const ALL: [TimeOfDay; 4] = [
        TimeOfDay::Morning,
        TimeOfDay::Afternoon,
        TimeOfDay::Evening,
        TimeOfDay::Night,
    ];

    pub fn parse(name: &str) -> Option<TimeOfDay> {
        match name.trim().to_ascii_lowercase().as_str() {
            "morning" => Some(TimeOfDay::Morning),
            "afternoon" => Some(TimeOfDay::Afternoon),
            "evening" => Some(TimeOfDay::Evening),
            "night" => Some(TimeOfDay::Night),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TimeOfDay::Morning => "Morning",
            TimeOfDay::Afternoon => "Afternoon",
            TimeOfDay::Evening => "Evening",
            TimeOfDay::Night => "Night",
        }
    }
}
