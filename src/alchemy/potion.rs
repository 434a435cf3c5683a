use serde::Serialize;

/// A finished brew
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Potion {
    /// Name of the recipe it was brewed from
    pub name: String,
    /// Names of the ingredients consumed, in collection order
    pub ingredients: Vec<String>,
}

impl std::fmt::Display for Potion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}]", self.name, self.ingredients.join(", "))
    }
}
