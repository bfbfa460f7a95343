use clap::{Parser, Subcommand, ValueEnum};
use std::fmt;

use crate::models::dish::Course;

#[derive(Parser)]
#[command(name = "chicken-dust")]
#[command(about = "Chicken Dust Express - a terminal ordering application")]
#[command(version = "0.1.0")]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the interactive ordering flow (default)
    Run,
    /// Menu catalog commands
    Menu {
        #[command(subcommand)]
        command: MenuCommands,
    },
}

#[derive(Subcommand)]
pub enum MenuCommands {
    /// List dishes, optionally filtered by course and price ceiling
    List {
        /// Only show dishes of this course
        #[arg(short, long)]
        course: Option<CourseArg>,
        /// Only show dishes priced at or below this amount (rand)
        #[arg(long)]
        max_price: Option<u32>,
    },
    /// List the courses with their dish counts
    Courses,
    /// Write the catalog as JSON
    Export {
        /// Output file path; stdout when omitted
        #[arg(short, long)]
        output: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum CourseArg {
    Starters,
    Mains,
    Desserts,
}

impl From<CourseArg> for Course {
    fn from(arg: CourseArg) -> Self {
        match arg {
            CourseArg::Starters => Course::Starters,
            CourseArg::Mains => Course::Mains,
            CourseArg::Desserts => Course::Desserts,
        }
    }
}

impl fmt::Display for CourseArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CourseArg::Starters => write!(f, "starters"),
            CourseArg::Mains => write!(f, "mains"),
            CourseArg::Desserts => write!(f, "desserts"),
        }
    }
}
