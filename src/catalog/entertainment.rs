use serde::{Deserialize, Serialize};

use super::CostedItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Hard,
    #[default]
    Intermediate,
    Easy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Genre {
    Classical,
    #[default]
    Modern,
    Historical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DressCode {
    Streetwear,
    #[default]
    Casual,
    Formal,
}

fn one() -> u32 {
    1
}

/// Kind-specific attributes of an entertainment option.
///
/// Serialized inline with the owning [`Entertainment`] under a `kind` tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EntertainmentKind {
    Activity {
        #[serde(default)]
        difficulty: Difficulty,
        #[serde(default)]
        weather_conditions: String,
        #[serde(default)]
        equipment_required: String,
    },
    Arts {
        #[serde(default)]
        genre: Genre,
        /// Minimum age in years; 0 means suitable for everyone.
        #[serde(default)]
        age_limit: u32,
        #[serde(default)]
        teaser: String,
    },
    Gastronomy {
        #[serde(default)]
        cuisine: String,
        #[serde(default)]
        dress_code: DressCode,
        #[serde(default = "one")]
        min_people: u32,
    },
}

impl EntertainmentKind {
    pub fn activity() -> Self {
        EntertainmentKind::Activity {
            difficulty: Difficulty::default(),
            weather_conditions: String::new(),
            equipment_required: String::new(),
        }
    }

    pub fn arts() -> Self {
        EntertainmentKind::Arts {
            genre: Genre::default(),
            age_limit: 0,
            teaser: String::new(),
        }
    }

    pub fn gastronomy() -> Self {
        EntertainmentKind::Gastronomy {
            cuisine: String::new(),
            dress_code: DressCode::default(),
            min_people: one(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EntertainmentKind::Activity { .. } => "activity",
            EntertainmentKind::Arts { .. } => "arts",
            EntertainmentKind::Gastronomy { .. } => "gastronomy",
        }
    }
}

/// A single thing to do at a destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entertainment {
    pub name: String,
    pub cost: f64,
    #[serde(default)]
    pub location: String,
    #[serde(flatten)]
    pub kind: EntertainmentKind,
}

impl Entertainment {
    pub fn new(name: impl Into<String>, cost: f64, kind: EntertainmentKind) -> Self {
        Self {
            name: name.into(),
            cost,
            location: String::new(),
            kind,
        }
    }

    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }
}

impl CostedItem for Entertainment {
    fn name(&self) -> &str {
        &self.name
    }

    fn cost(&self) -> f64 {
        self.cost
    }
}
