use crate::{GenerateToString, GenerateToStringAttribute};

#[GenerateToString]
#[derive(Debug, Clone)]
pub struct Coffee {
    pub name: String,
    pub size_ml: u32,
    pub(crate) cost_cents: u32,
    recipe: String,
}

impl Coffee {
    pub fn new(name: &str, size_ml: u32, cost_cents: u32) -> Self {
        Self {
            name: name.to_string(),
            size_ml,
            cost_cents,
            recipe: format!("{} ml of {}", size_ml, name),
        }
    }

    pub fn recipe(&self) -> &str {
        &self.recipe
    }
}

#[GenerateToStringAttribute]
pub struct Pastry {
    pub r#type: String,
    pub vegan: bool,
}

/// Nothing to show: only private and positional fields
#[GenerateToString]
pub struct Secret(pub u32, String);

impl Secret {
    pub fn new(code: u32) -> Self {
        Self(code, "hidden".to_string())
    }

    pub fn note(&self) -> &str {
        &self.1
    }
}

pub struct Unmarked {
    pub name: String,
}

pub mod seasonal {
    use crate::GenerateToString;

    #[GenerateToString]
    pub struct Special {
        pub name: String,
        pub(crate) until: String,
    }
}
