use std::fs;
use std::io::Write;

use anyhow::{Context, Result};
use console::{style, Emoji};
use tracing::info;

use crate::{
    cli::args::{Args, Commands, MenuCommands},
    flow::FlowSession,
    models::catalog::Catalog,
    services::{CourseSelection, FilterState, MenuService, PriceCeiling},
    utils::{
        config::Config,
        formatting::{format_dish_table, format_price},
    },
};

static INFO: Emoji<'_, '_> = Emoji("ℹ️ ", "");

pub struct CliApp {
    config: Config,
    menu_service: MenuService,
}

impl CliApp {
    pub fn new(config: Config) -> Self {
        let menu_service = MenuService::new(Catalog::sample());
        Self {
            config,
            menu_service,
        }
    }

    pub fn run(&self, args: Args) -> Result<()> {
        match args.command.unwrap_or(Commands::Run) {
            Commands::Run => self.handle_run(),
            Commands::Menu { command } => self.handle_menu_command(command),
        }
    }

    /// Launch the interactive flow at the sign-in screen.
    fn handle_run(&self) -> Result<()> {
        let mut session = FlowSession::new(self.config.clone(), Catalog::sample());
        session.run()
    }

    fn handle_menu_command(&self, command: MenuCommands) -> Result<()> {
        match command {
            MenuCommands::List { course, max_price } => self.handle_menu_list(
                course
                    .map(|arg| CourseSelection::Only(arg.into()))
                    .unwrap_or(CourseSelection::All),
                max_price.map(PriceCeiling::Upto).unwrap_or(PriceCeiling::All),
            ),
            MenuCommands::Courses => self.handle_menu_courses(),
            MenuCommands::Export { output } => self.handle_menu_export(output),
        }
    }

    fn handle_menu_list(&self, course: CourseSelection, ceiling: PriceCeiling) -> Result<()> {
        let filter = FilterState { course, ceiling };
        let dishes = self.menu_service.filtered(filter);

        if dishes.is_empty() {
            println!("{} No dishes match ({}, {})", INFO, course, ceiling);
            return Ok(());
        }

        println!(
            "{} {}",
            INFO,
            style(format!("Found {} dishes", dishes.len())).bold()
        );
        println!("{}", format_dish_table(&dishes));
        Ok(())
    }

    fn handle_menu_courses(&self) -> Result<()> {
        for (course, count) in self.menu_service.course_summary() {
            println!("{} - {} dishes", style(course).bold(), count);
        }
        Ok(())
    }

    fn handle_menu_export(&self, output: Option<String>) -> Result<()> {
        let json = serde_json::to_string_pretty(self.menu_service.catalog())
            .context("Failed to serialize the catalog")?;

        match output {
            Some(path) => {
                let mut file = fs::File::create(&path)
                    .with_context(|| format!("Failed to create {}", path))?;
                file.write_all(json.as_bytes())
                    .with_context(|| format!("Failed to write {}", path))?;
                info!("catalog exported to {}", path);
                println!(
                    "{} Exported {} dishes ({}) to {}",
                    INFO,
                    self.menu_service.catalog().dish_count(),
                    format_price(
                        self.menu_service
                            .all_dishes()
                            .iter()
                            .map(|dish| dish.price)
                            .sum()
                    ),
                    style(path).cyan()
                );
            }
            None => println!("{}", json),
        }
        Ok(())
    }
}
