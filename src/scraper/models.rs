use serde::{Deserialize, Serialize};

// listing
//  ├── url          (anchor href, prefixed with the site origin)
//  ├── title
//  ├── price
//  ├── location
//  ├── beds
//  ├── baths
//  ├── area_sqft
//  ├── created_at
//  ├── updated_at
//  └── agent_image  (img src / data-src / data-srcset)

/// The fields extracted from every listing, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Url,
    Title,
    Price,
    Location,
    Beds,
    Baths,
    AreaSqft,
    CreatedAt,
    UpdatedAt,
    AgentImage,
}

impl Field {
    pub const ALL: [Field; 10] = [
        Field::Url,
        Field::Title,
        Field::Price,
        Field::Location,
        Field::Beds,
        Field::Baths,
        Field::AreaSqft,
        Field::CreatedAt,
        Field::UpdatedAt,
        Field::AgentImage,
    ];

    /// Key used for this field in the JSON artifact.
    pub fn name(self) -> &'static str {
        match self {
            Field::Url => "url",
            Field::Title => "title",
            Field::Price => "price",
            Field::Location => "location",
            Field::Beds => "beds",
            Field::Baths => "baths",
            Field::AreaSqft => "area_sqft",
            Field::CreatedAt => "created_at",
            Field::UpdatedAt => "updated_at",
            Field::AgentImage => "agent_image",
        }
    }
}

/// One extracted listing. `None` is the absent marker and serializes as
/// `null`; every key is always written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListingRecord {
    pub url: Option<String>,
    pub title: Option<String>,
    pub price: Option<String>,
    pub location: Option<String>,
    pub beds: Option<String>,
    pub baths: Option<String>,
    pub area_sqft: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub agent_image: Option<String>,
}

impl ListingRecord {
    #[cfg(test)]
    pub fn get(&self, field: Field) -> Option<&str> {
        let slot = match field {
            Field::Url => &self.url,
            Field::Title => &self.title,
            Field::Price => &self.price,
            Field::Location => &self.location,
            Field::Beds => &self.beds,
            Field::Baths => &self.baths,
            Field::AreaSqft => &self.area_sqft,
            Field::CreatedAt => &self.created_at,
            Field::UpdatedAt => &self.updated_at,
            Field::AgentImage => &self.agent_image,
        };
        slot.as_deref()
    }

    pub(crate) fn set(&mut self, field: Field, value: Option<String>) {
        let slot = match field {
            Field::Url => &mut self.url,
            Field::Title => &mut self.title,
            Field::Price => &mut self.price,
            Field::Location => &mut self.location,
            Field::Beds => &mut self.beds,
            Field::Baths => &mut self.baths,
            Field::AreaSqft => &mut self.area_sqft,
            Field::CreatedAt => &mut self.created_at,
            Field::UpdatedAt => &mut self.updated_at,
            Field::AgentImage => &mut self.agent_image,
        };
        *slot = value;
    }
}

/// All records of one harvest, in page order then document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HarvestResult {
    records: Vec<ListingRecord>,
}

impl HarvestResult {
    pub fn new(records: Vec<ListingRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[cfg(test)]
    pub fn records(&self) -> &[ListingRecord] {
        &self.records
    }

    /// The first `n` records (fewer if the harvest is smaller).
    pub fn sample(&self, n: usize) -> &[ListingRecord] {
        &self.records[..n.min(self.records.len())]
    }
}
