use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A menu category. Every dish in the catalog belongs to exactly one course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Course {
    Starters,
    Mains,
    Desserts,
}

impl Course {
    /// All courses in menu order.
    pub const ALL: [Course; 3] = [Course::Starters, Course::Mains, Course::Desserts];
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Course::Starters => write!(f, "Starters"),
            Course::Mains => write!(f, "Mains"),
            Course::Desserts => write!(f, "Desserts"),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("unknown course: '{0}'")]
pub struct CourseParseError(String);

impl FromStr for Course {
    type Err = CourseParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "starters" => Ok(Course::Starters),
            "mains" => Ok(Course::Mains),
            "desserts" => Ok(Course::Desserts),
            other => Err(CourseParseError(other.to_string())),
        }
    }
}

/// A sellable menu entry. Prices are whole rand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: u32,
    pub course: Course,
}

impl Dish {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        price: u32,
        course: Course,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            price,
            course,
        }
    }
}
