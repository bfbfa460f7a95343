use serde::{Deserialize, Serialize};

use crate::models::dish::{Course, Dish};

/// An ordered group of dishes under one course heading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseGroup {
    pub course: Course,
    pub dishes: Vec<Dish>,
}

/// The immutable menu catalog, partitioned by course. Filter operations
/// never mutate it; screens only ever borrow or clone out of it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    groups: Vec<CourseGroup>,
}

impl Catalog {
    pub fn new(groups: Vec<CourseGroup>) -> Self {
        Self { groups }
    }

    /// The built-in Chicken Dust Express sample menu.
    pub fn sample() -> Self {
        Self::new(vec![
            CourseGroup {
                course: Course::Starters,
                dishes: vec![
                    Dish::new(
                        "1",
                        "Fried Potato",
                        "Golden crispy fried potatoes, seasoned with a touch of salt and pepper.",
                        150,
                        Course::Starters,
                    ),
                    Dish::new(
                        "2",
                        "Rolled Bread with Baked Beans",
                        "Soft, freshly baked bread rolls, served with rich and flavorful baked beans.",
                        300,
                        Course::Starters,
                    ),
                ],
            },
            CourseGroup {
                course: Course::Mains,
                dishes: vec![
                    Dish::new(
                        "3",
                        "Spaghetti",
                        "A plate of spaghetti topped with rich, savory tomato sauce and fresh basil.",
                        750,
                        Course::Mains,
                    ),
                    Dish::new(
                        "4",
                        "Pap, Cabbage, and Chicken",
                        "A traditional dish consisting of soft pap, seasoned cabbage, and grilled chicken.",
                        1500,
                        Course::Mains,
                    ),
                ],
            },
            CourseGroup {
                course: Course::Desserts,
                dishes: vec![
                    Dish::new(
                        "5",
                        "Chocolate Ice Cream",
                        "Creamy and decadent chocolate ice cream, made with the finest cocoa beans.",
                        850,
                        Course::Desserts,
                    ),
                    Dish::new(
                        "6",
                        "Chocolate Cake",
                        "A rich, moist chocolate cake topped with a smooth chocolate ganache.",
                        600,
                        Course::Desserts,
                    ),
                ],
            },
        ])
    }

    pub fn groups(&self) -> &[CourseGroup] {
        &self.groups
    }

    /// Dishes of one course, in catalog order. Empty when the course has no
    /// group in this catalog.
    pub fn dishes_for(&self, course: Course) -> &[Dish] {
        self.groups
            .iter()
            .find(|group| group.course == course)
            .map(|group| group.dishes.as_slice())
            .unwrap_or(&[])
    }

    /// All dishes flattened in course order.
    pub fn dishes(&self) -> Vec<Dish> {
        self.groups
            .iter()
            .flat_map(|group| group.dishes.iter().cloned())
            .collect()
    }

    pub fn find(&self, id: &str) -> Option<&Dish> {
        self.groups
            .iter()
            .flat_map(|group| group.dishes.iter())
            .find(|dish| dish.id == id)
    }

    pub fn dish_count(&self) -> usize {
        self.groups.iter().map(|group| group.dishes.len()).sum()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::sample()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_catalog_partitions_by_course() {
        let catalog = Catalog::sample();
        for group in catalog.groups() {
            assert!(group.dishes.iter().all(|dish| dish.course == group.course));
        }
    }

    #[test]
    fn test_sample_catalog_ids_are_unique() {
        let catalog = Catalog::sample();
        let dishes = catalog.dishes();
        for (i, a) in dishes.iter().enumerate() {
            for b in &dishes[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_dishes_for_unlisted_course_is_empty() {
        let catalog = Catalog::new(vec![CourseGroup {
            course: Course::Mains,
            dishes: vec![Dish::new("3", "Spaghetti", "Tomato sauce pasta", 750, Course::Mains)],
        }]);
        assert!(catalog.dishes_for(Course::Desserts).is_empty());
    }

    #[test]
    fn test_find_by_id() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.find("3").map(|d| d.name.as_str()), Some("Spaghetti"));
        assert!(catalog.find("99").is_none());
    }
}
