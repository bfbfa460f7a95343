use thiserror::Error;
use tracing::{debug, info};

use crate::models::cart::CheckoutSnapshot;
use crate::models::catalog::Catalog;
use crate::models::dish::{Course, Dish};

#[derive(Error, Debug, PartialEq)]
pub enum ComposerError {
    #[error("Select a course first")]
    NoCourseSelected,

    #[error("Select a dish first")]
    NoDishSelected,

    #[error("'{name}' is not a {course} dish")]
    DishNotInCourse { name: String, course: Course },
}

/// Tagged state of the course-then-dish picker. A dish can never be pending
/// without its course, so the stale-course combination is unrepresentable.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PickerState {
    #[default]
    NoCourse,
    CourseOnly(Course),
    CourseAndDish(Course, Dish),
}

impl PickerState {
    pub fn course(&self) -> Option<Course> {
        match self {
            PickerState::NoCourse => None,
            PickerState::CourseOnly(course) | PickerState::CourseAndDish(course, _) => {
                Some(*course)
            }
        }
    }

    pub fn pending_dish(&self) -> Option<&Dish> {
        match self {
            PickerState::CourseAndDish(_, dish) => Some(dish),
            _ => None,
        }
    }
}

/// Operator flow for curating a managed menu list: pick a course, pick a
/// dish from that course, add it. The managed list is independent of the
/// customer cart and of the picker state.
#[derive(Debug)]
pub struct MenuComposer {
    catalog: Catalog,
    picker: PickerState,
    items: Vec<Dish>,
}

impl MenuComposer {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            picker: PickerState::NoCourse,
            items: Vec::new(),
        }
    }

    pub fn picker(&self) -> &PickerState {
        &self.picker
    }

    pub fn selected_course(&self) -> Option<Course> {
        self.picker.course()
    }

    pub fn pending_dish(&self) -> Option<&Dish> {
        self.picker.pending_dish()
    }

    pub fn items(&self) -> &[Dish] {
        &self.items
    }

    /// Dishes the operator may currently pick from: the catalog dishes of
    /// the selected course. Empty while no course is selected.
    pub fn available_dishes(&self) -> &[Dish] {
        match self.picker.course() {
            Some(course) => self.catalog.dishes_for(course),
            None => &[],
        }
    }

    /// Selecting a course always clears any pending dish, so a dish can
    /// never be added from a stale course context.
    pub fn select_course(&mut self, course: Course) {
        debug!("composer: course selected: {}", course);
        self.picker = PickerState::CourseOnly(course);
    }

    pub fn select_dish(&mut self, dish: Dish) -> Result<(), ComposerError> {
        let course = self.picker.course().ok_or(ComposerError::NoCourseSelected)?;
        if dish.course != course {
            return Err(ComposerError::DishNotInCourse {
                name: dish.name,
                course,
            });
        }
        debug!("composer: dish selected: {}", dish.name);
        self.picker = PickerState::CourseAndDish(course, dish);
        Ok(())
    }

    /// Append the pending dish to the managed list. Only valid while a dish
    /// is selected; afterwards the picker returns to the course so more
    /// dishes can be added without reselecting it.
    pub fn add_item(&mut self) -> Result<Dish, ComposerError> {
        match std::mem::take(&mut self.picker) {
            PickerState::CourseAndDish(course, dish) => {
                info!("composer: added '{}' to the managed menu", dish.name);
                self.items.push(dish.clone());
                self.picker = PickerState::CourseOnly(course);
                Ok(dish)
            }
            other => {
                self.picker = other;
                match self.picker {
                    PickerState::NoCourse => Err(ComposerError::NoCourseSelected),
                    _ => Err(ComposerError::NoDishSelected),
                }
            }
        }
    }

    /// Remove every managed entry with this id, leaving the picker state
    /// untouched. Returns the number of entries removed.
    pub fn remove(&mut self, id: &str) -> usize {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        let removed = before - self.items.len();
        if removed > 0 {
            info!("composer: removed {} entries with id {}", removed, id);
        }
        removed
    }

    pub fn total(&self) -> u32 {
        self.items.iter().map(|item| item.price).sum()
    }

    pub fn snapshot(&self) -> CheckoutSnapshot {
        CheckoutSnapshot::of(self.items.clone())
    }
}
