use chrono::{DateTime, Local, Utc};
use console::style;
use tabled::{
    settings::{Alignment, Style},
    Table, Tabled,
};

use crate::models::dish::Dish;
use crate::services::Receipt;

#[derive(Tabled)]
struct DishTableRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Dish")]
    name: String,
    #[tabled(rename = "Course")]
    course: String,
    #[tabled(rename = "Price")]
    price: String,
}

pub fn format_price(amount: u32) -> String {
    format!("R{}", amount)
}

pub fn format_dish_table(dishes: &[Dish]) -> String {
    if dishes.is_empty() {
        return String::new();
    }

    let rows: Vec<DishTableRow> = dishes
        .iter()
        .map(|dish| DishTableRow {
            id: dish.id.clone(),
            name: if dish.name.len() > 30 {
                format!("{}...", &dish.name[..27])
            } else {
                dish.name.clone()
            },
            course: dish.course.to_string(),
            price: format_price(dish.price),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded()).with(Alignment::left());

    table.to_string()
}

pub fn format_dish_detail(dish: &Dish) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}: {}\n", style("Dish").bold(), style(&dish.name).green()));
    output.push_str(&format!("{}: {}\n", style("Course").bold(), style(dish.course).cyan()));
    output.push_str(&format!(
        "{}: {}\n",
        style("Description").bold(),
        style(&dish.description).dim()
    ));
    output.push_str(&format!(
        "{}: {}\n",
        style("Price").bold(),
        style(format_price(dish.price)).yellow()
    ));

    output
}

pub fn format_receipt(receipt: &Receipt) -> String {
    let mut output = String::new();

    if !receipt.items.is_empty() {
        output.push_str(&format_dish_table(&receipt.items));
        output.push('\n');
    }
    output.push_str(&format!(
        "{}: {}\n",
        style("Total paid").bold(),
        style(format_price(receipt.total)).green()
    ));
    output.push_str(&format!(
        "{}: {}\n",
        style("Paid at").bold(),
        style(format_date(&receipt.paid_at)).dim()
    ));

    output
}

pub fn format_date(dt: &DateTime<Utc>) -> String {
    dt.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string()
}
