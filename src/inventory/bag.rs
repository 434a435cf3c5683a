//! Bag - capacity-bounded element storage
//!
//! The sum of contained weights never exceeds the bag's capacity and no two
//! elements share a name. Elements keep their insertion order, which is the
//! order they move in when a character swaps bags.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::types::Weight;
use crate::inventory::element::Element;

/// Reasons a bag refuses an element
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BagError {
    #[error("{name} weighs {weight} but only {free} capacity is free")]
    InsufficientCapacity {
        name: String,
        weight: Weight,
        free: Weight,
    },

    #[error("{0} is already in the bag")]
    DuplicateElement(String),
}

/// A bag holding elements up to a fixed total weight
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBag")]
pub struct Bag {
    max_weight_capacity: Weight,
    elements: Vec<Element>,
}

/// Serialized shape of a bag, validated element by element on load
#[derive(Deserialize)]
struct RawBag {
    max_weight_capacity: Weight,
    elements: Vec<Element>,
}

impl TryFrom<RawBag> for Bag {
    type Error = BagError;

    fn try_from(raw: RawBag) -> Result<Self, Self::Error> {
        let mut bag = Bag::new(raw.max_weight_capacity);
        for element in raw.elements {
            bag.add_element(element)?;
        }
        Ok(bag)
    }
}

impl Bag {
    pub fn new(max_weight_capacity: Weight) -> Self {
        Self {
            max_weight_capacity,
            elements: Vec::new(),
        }
    }

    pub fn max_weight_capacity(&self) -> Weight {
        self.max_weight_capacity
    }

    /// Combined weight of everything inside
    pub fn total_weight(&self) -> Weight {
        self.elements.iter().map(Element::weight).sum()
    }

    /// Capacity still available for new elements
    pub fn free_capacity(&self) -> Weight {
        self.max_weight_capacity.saturating_sub(self.total_weight())
    }

    /// Check whether `element` would be accepted, without inserting it
    pub fn check_fits(&self, element: &Element) -> Result<(), BagError> {
        if self.contains(element.name()) {
            return Err(BagError::DuplicateElement(element.name().to_string()));
        }
        let free = self.free_capacity();
        if element.weight() > free {
            return Err(BagError::InsufficientCapacity {
                name: element.name().to_string(),
                weight: element.weight(),
                free,
            });
        }
        Ok(())
    }

    /// Insert an element, leaving the bag unchanged on failure
    pub fn add_element(&mut self, element: Element) -> Result<(), BagError> {
        self.check_fits(&element)?;
        self.elements.push(element);
        Ok(())
    }

    /// Move every element of `other` into this bag, keeping `other`'s order
    ///
    /// All-or-nothing: if any element would be refused, neither bag changes.
    pub fn absorb(&mut self, other: &mut Bag) -> Result<(), BagError> {
        self.check_fits_all(&other.elements)?;
        self.elements.append(&mut other.elements);
        Ok(())
    }

    /// Check whether every element would be accepted together
    ///
    /// The elements are assumed to have distinct names among themselves.
    pub fn check_fits_all<'a, I>(&self, elements: I) -> Result<(), BagError>
    where
        I: IntoIterator<Item = &'a Element>,
    {
        let mut free = self.free_capacity();
        for element in elements {
            if self.contains(element.name()) {
                return Err(BagError::DuplicateElement(element.name().to_string()));
            }
            if element.weight() > free {
                return Err(BagError::InsufficientCapacity {
                    name: element.name().to_string(),
                    weight: element.weight(),
                    free,
                });
            }
            free -= element.weight();
        }
        Ok(())
    }

    /// Remove and return the element with the given name
    pub fn remove_element_by_name(&mut self, name: &str) -> Option<Element> {
        let pos = self.elements.iter().position(|e| e.name() == name)?;
        Some(self.elements.remove(pos))
    }

    pub fn get(&self, name: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.name() == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// All elements in insertion order
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bag_add_remove() {
        let mut bag = Bag::new(20);

        bag.add_element(Element::new("herb", 5)).unwrap();
        bag.add_element(Element::new("root", 7)).unwrap();
        assert_eq!(bag.total_weight(), 12);
        assert_eq!(bag.free_capacity(), 8);

        let herb = bag.remove_element_by_name("herb");
        assert_eq!(herb, Some(Element::new("herb", 5)));
        assert_eq!(bag.free_capacity(), 13);
        assert!(!bag.contains("herb"));
        assert!(bag.remove_element_by_name("herb").is_none());
    }

    #[test]
    fn test_bag_rejects_overweight() {
        let mut bag = Bag::new(10);
        bag.add_element(Element::new("stone", 8)).unwrap();

        let result = bag.add_element(Element::new("iron", 3));
        assert_eq!(
            result,
            Err(BagError::InsufficientCapacity {
                name: "iron".into(),
                weight: 3,
                free: 2,
            })
        );
        assert_eq!(bag.len(), 1);
        assert_eq!(bag.total_weight(), 8);
    }

    #[test]
    fn test_bag_exact_fit_accepted() {
        let mut bag = Bag::new(10);
        bag.add_element(Element::new("stone", 10)).unwrap();
        assert_eq!(bag.free_capacity(), 0);

        // Weightless elements still fit in a full bag
        bag.add_element(Element::new("feather", 0)).unwrap();
        assert_eq!(bag.len(), 2);
    }

    #[test]
    fn test_bag_rejects_duplicate_name() {
        let mut bag = Bag::new(50);
        bag.add_element(Element::new("herb", 1)).unwrap();

        let result = bag.add_element(Element::new("herb", 2));
        assert_eq!(result, Err(BagError::DuplicateElement("herb".into())));
        assert_eq!(bag.get("herb").map(Element::weight), Some(1));
    }

    #[test]
    fn test_bag_remove_keeps_order() {
        let mut bag = Bag::new(50);
        for name in ["a", "b", "c", "d"] {
            bag.add_element(Element::new(name, 1)).unwrap();
        }
        bag.remove_element_by_name("b");

        let names: Vec<_> = bag.elements().iter().map(Element::name).collect();
        assert_eq!(names, vec!["a", "c", "d"]);
    }

    #[test]
    fn test_bag_absorb_moves_everything() {
        let mut old = Bag::new(10);
        old.add_element(Element::new("herb", 5)).unwrap();
        old.add_element(Element::new("root", 3)).unwrap();

        let mut new = Bag::new(20);
        new.absorb(&mut old).unwrap();

        assert!(old.is_empty());
        let names: Vec<_> = new.elements().iter().map(Element::name).collect();
        assert_eq!(names, vec!["herb", "root"]);
        assert_eq!(new.free_capacity(), 12);
    }

    #[test]
    fn test_bag_absorb_is_all_or_nothing() {
        let mut old = Bag::new(10);
        old.add_element(Element::new("herb", 5)).unwrap();
        old.add_element(Element::new("root", 5)).unwrap();

        // Room for the herb but not the root
        let mut new = Bag::new(12);
        new.add_element(Element::new("salt", 4)).unwrap();

        let result = new.absorb(&mut old);
        assert_eq!(
            result,
            Err(BagError::InsufficientCapacity {
                name: "root".into(),
                weight: 5,
                free: 3,
            })
        );
        assert_eq!(old.len(), 2);
        assert_eq!(new.len(), 1);

        let mut clash = Bag::new(30);
        clash.add_element(Element::new("root", 1)).unwrap();
        assert_eq!(
            clash.absorb(&mut old),
            Err(BagError::DuplicateElement("root".into()))
        );
        assert_eq!(old.len(), 2);
    }

    #[test]
    fn test_bag_json_round_trip() {
        let mut bag = Bag::new(15);
        bag.add_element(Element::new("herb", 4)).unwrap();
        bag.add_element(Element::new("water", 6)).unwrap();

        let json = serde_json::to_string(&bag).unwrap();
        let loaded: Bag = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, bag);
        assert_eq!(loaded.free_capacity(), 5);
    }

    #[test]
    fn test_bag_json_over_capacity_rejected() {
        let json = r#"{
            "max_weight_capacity": 10,
            "elements": [{"name": "a", "weight": 4}, {"name": "b", "weight": 40}]
        }"#;
        let err = serde_json::from_str::<Bag>(json).unwrap_err();
        assert!(err.to_string().contains("b weighs 40 but only 6 capacity is free"));
    }

    #[test]
    fn test_bag_json_duplicate_name_rejected() {
        let json = r#"{
            "max_weight_capacity": 100,
            "elements": [{"name": "a", "weight": 4}, {"name": "a", "weight": 4}]
        }"#;
        let err = serde_json::from_str::<Bag>(json).unwrap_err();
        assert!(err.to_string().contains("a is already in the bag"));
    }
}
