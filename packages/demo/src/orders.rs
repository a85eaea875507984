use crate::GenerateToString;

#[GenerateToString]
pub struct Order {
    pub id: u64,
    pub item: String,
    pub(crate) total_cents: u32,
}

/// Collections are shown through a newtype implementing `Display`
pub struct Tags(pub Vec<String>);

impl std::fmt::Display for Tags {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0.join(","))
    }
}

#[GenerateToString]
pub struct Bundle {
    pub name: String,
    pub tags: Tags,
    pub(crate) items: Vec<Order>,
}

impl Bundle {
    pub fn new(name: &str, tags: Tags) -> Self {
        Self {
            name: name.to_string(),
            tags,
            items: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Zero fields render as the empty string
#[GenerateToString]
pub struct Receipt {}

/// Private to this module, so no impl can be written for it from the crate root
#[GenerateToString]
#[allow(dead_code)]
struct Draft {
    pub item: String,
}
