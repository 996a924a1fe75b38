//! Event categories and the default catalog.
//!
//! A category names the houses whose joint signification by the running
//! dasha lords indicates the event. The catalog is data: it can be replaced
//! wholesale through configuration.

use serde::{Deserialize, Serialize};

/// Whether an event is welcome or not.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    #[default]
    Favorable,
    Adverse,
}

/// One scorable life event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventCategory {
    /// Stable identifier ("marriage", "career", ...).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Which house stands for what.
    #[serde(default)]
    pub description: String,
    /// Required houses, 1-12. Never empty in a valid catalog.
    pub houses: Vec<u8>,
    /// House whose cusp sub-lord decides promise or denial.
    pub primary_house: u8,
    #[serde(default)]
    pub polarity: Polarity,
}

impl EventCategory {
    pub fn new(
        id: &str,
        name: &str,
        description: &str,
        houses: &[u8],
        primary_house: u8,
        polarity: Polarity,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            houses: houses.to_vec(),
            primary_house,
            polarity,
        }
    }

    pub fn is_adverse(&self) -> bool {
        self.polarity == Polarity::Adverse
    }

    /// Whether `house` is one of the required houses.
    pub fn requires(&self, house: u8) -> bool {
        self.houses.contains(&house)
    }
}

/// The 12 built-in categories.
pub fn default_catalog() -> Vec<EventCategory> {
    use Polarity::{Adverse, Favorable};
    vec![
        EventCategory::new(
            "marriage",
            "Marriage / Relationship",
            "7=Spouse, 2=Family, 11=Fulfillment of desires",
            &[2, 7, 11],
            7,
            Favorable,
        ),
        EventCategory::new(
            "career",
            "Career / Job Change",
            "10=Profession, 6=Service, 2=Income",
            &[2, 6, 10],
            10,
            Favorable,
        ),
        EventCategory::new(
            "finance",
            "Finance / Gains",
            "2=Wealth, 6=Service income, 11=Gains",
            &[2, 6, 11],
            2,
            Favorable,
        ),
        EventCategory::new(
            "health",
            "Health Issues",
            "1=Body, 6=Disease, 8=Chronic, 12=Hospitalization",
            &[1, 6, 8, 12],
            6,
            Adverse,
        ),
        EventCategory::new(
            "travel_short",
            "Short Travel",
            "3=Short journeys, 9=Long journeys",
            &[3, 9],
            3,
            Favorable,
        ),
        EventCategory::new(
            "travel_foreign",
            "Foreign Travel / Settlement",
            "9=Foreign lands, 12=Leaving homeland",
            &[9, 12],
            12,
            Favorable,
        ),
        EventCategory::new(
            "education",
            "Education / Learning",
            "4=Foundational education, 9=Higher learning",
            &[4, 9],
            4,
            Favorable,
        ),
        EventCategory::new(
            "property",
            "Property / Real Estate",
            "4=Land, Home, 11=Gains",
            &[4, 11],
            4,
            Favorable,
        ),
        EventCategory::new(
            "children",
            "Childbirth",
            "5=Children, 2=Family extension, 11=Desires",
            &[2, 5, 11],
            5,
            Favorable,
        ),
        EventCategory::new(
            "legal",
            "Legal Matters",
            "6=Disputes, 7=Opponents, 12=Losses",
            &[6, 7, 12],
            6,
            Adverse,
        ),
        EventCategory::new(
            "obstacles",
            "Obstacles / Losses",
            "Dusthana houses",
            &[6, 8, 12],
            8,
            Adverse,
        ),
        EventCategory::new(
            "spiritual",
            "Spiritual Progress",
            "5=Merit, 9=Dharma, 12=Moksha",
            &[5, 9, 12],
            12,
            Favorable,
        ),
    ]
}

/// Look up a category by id.
pub fn find<'a>(catalog: &'a [EventCategory], id: &str) -> Option<&'a EventCategory> {
    catalog.iter().find(|e| e.id == id)
}
