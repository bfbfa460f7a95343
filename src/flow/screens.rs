use anyhow::Result;
use console::{style, Emoji};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Password, Select};
use tracing::info;

use crate::flow::router::{Router, Screen, Transition};
use crate::models::cart::{Cart, CheckoutSnapshot};
use crate::models::catalog::Catalog;
use crate::models::dish::{Course, Dish};
use crate::services::{
    AuthService, CourseSelection, FilterState, MenuComposer, MenuService, PaymentService,
    PriceCeiling, SignInRequest, SignInSession,
};
use crate::utils::config::Config;
use crate::utils::formatting::{
    format_dish_detail, format_dish_table, format_price, format_receipt,
};

static CHECKMARK: Emoji<'_, '_> = Emoji("✅ ", "");
static CROSS: Emoji<'_, '_> = Emoji("❌ ", "");
static WARNING: Emoji<'_, '_> = Emoji("⚠️ ", "");
static INFO: Emoji<'_, '_> = Emoji("ℹ️ ", "");
static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", "");

/// The price ceilings offered on the filter screen.
const PRICE_CEILINGS: [PriceCeiling; 4] = [
    PriceCeiling::All,
    PriceCeiling::Upto(200),
    PriceCeiling::Upto(500),
    PriceCeiling::Upto(1000),
];

/// State owned by one interactive run: the services, the signed-in user,
/// and the screen-local state (cart, course tab, composer, filters). Each
/// screen mutates only its own slice of this; transitions hand snapshots
/// forward, never live references.
pub struct FlowSession {
    config: Config,
    auth: AuthService,
    menu: MenuService,
    payment: PaymentService,
    signed_in: Option<SignInSession>,
    cart: Cart,
    selected_course: Course,
    composer: MenuComposer,
    filter: FilterState,
}

impl FlowSession {
    pub fn new(config: Config, catalog: Catalog) -> Self {
        Self {
            config,
            auth: AuthService::new(),
            menu: MenuService::new(catalog.clone()),
            payment: PaymentService::new(),
            signed_in: None,
            cart: Cart::new(),
            selected_course: Course::Starters,
            composer: MenuComposer::new(catalog),
            filter: FilterState::default(),
        }
    }

    /// Drive the screen stack until the user leaves the app.
    pub fn run(&mut self) -> Result<()> {
        let mut router = Router::new();
        info!("interactive flow started");

        while let Some(screen) = router.current().cloned() {
            println!();
            let transition = self.dispatch(&screen)?;
            if !router.apply(transition) {
                break;
            }
        }

        info!("interactive flow ended");
        println!("{}", style("Goodbye!").dim());
        Ok(())
    }

    fn dispatch(&mut self, screen: &Screen) -> Result<Transition> {
        match screen {
            Screen::SignIn => self.sign_in_screen(),
            Screen::Description { checkout } => self.description_screen(checkout),
            Screen::Menu => self.menu_screen(),
            Screen::GuestMenu => self.guest_menu_screen(),
            Screen::ManageMenu => self.manage_menu_screen(),
            Screen::FilterMenu => self.filter_menu_screen(),
            Screen::Payment { checkout } => self.payment_screen(checkout),
        }
    }

    fn sign_in_screen(&mut self) -> Result<Transition> {
        println!("{} {}", ROCKET, style("Welcome Back").bold().cyan());
        println!("{}", style("Please sign in to continue").dim());

        let theme = ColorfulTheme::default();

        let email: String = Input::with_theme(&theme)
            .with_prompt("Enter Email")
            .allow_empty(true)
            .interact_text()?;

        let password: String = Password::with_theme(&theme)
            .with_prompt("Enter Password")
            .allow_empty_password(true)
            .interact()?;

        match self.auth.sign_in(SignInRequest::new(email, password)) {
            Ok(session) => {
                println!("{} Sign In Successful", CHECKMARK);
                self.signed_in = Some(session);
                Ok(Transition::Push(Screen::Description {
                    checkout: CheckoutSnapshot::empty(),
                }))
            }
            Err(e) => {
                println!("{} {}", CROSS, style(&e).red());
                Ok(Transition::Stay)
            }
        }
    }

    fn description_screen(&self, checkout: &CheckoutSnapshot) -> Result<Transition> {
        println!(
            "{}",
            style(format!("Welcome to {}", self.config.restaurant_name))
                .bold()
                .cyan()
        );
        println!(
            "{}",
            style("Explore a World of Flavors and Culinary Techniques").dim()
        );
        if let Some(session) = &self.signed_in {
            println!("{} Signed in as {}", INFO, style(&session.email).green());
        }
        println!();

        for dish in self.menu.all_dishes() {
            println!(
                "{} - {}",
                style(&dish.name).bold(),
                style(format_price(dish.price)).yellow()
            );
            println!("  {}", style(&dish.description).dim());
        }

        if !checkout.is_empty() {
            println!();
            println!(
                "{} Cart carried over: {} item(s), {}",
                INFO,
                checkout.items.len(),
                format_price(checkout.total)
            );
        }

        println!();
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Where to next?")
            .items(&["Explore the Menu", "Explore the Guest Menu", "Sign Out"])
            .default(0)
            .interact()?;

        match choice {
            0 => Ok(Transition::Push(Screen::Menu)),
            1 => Ok(Transition::Push(Screen::GuestMenu)),
            _ => Ok(Transition::Quit),
        }
    }

    fn menu_screen(&mut self) -> Result<Transition> {
        println!("{}", style("Menu").bold().cyan());

        let dishes: Vec<Dish> = self.menu.dishes_for_course(self.selected_course).to_vec();
        if dishes.is_empty() {
            println!("{} No dishes in the {} course", INFO, self.selected_course);
        } else {
            println!("{}", format_dish_table(&dishes));
        }
        println!(
            "{}: {}",
            style("Total").bold(),
            style(format_price(self.cart.total())).green()
        );

        let actions = [
            format!("Switch course (current: {})", self.selected_course),
            "Add a dish to the cart".to_string(),
            "Proceed to Payment".to_string(),
            "Manage Menu".to_string(),
            "Back".to_string(),
        ];
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Menu")
            .items(&actions)
            .default(1)
            .interact()?;

        match choice {
            0 => {
                let idx = Select::with_theme(&ColorfulTheme::default())
                    .with_prompt("Select Course")
                    .items(&Course::ALL)
                    .default(0)
                    .interact()?;
                self.selected_course = Course::ALL[idx];
                Ok(Transition::Stay)
            }
            1 => {
                if dishes.is_empty() {
                    println!("{} Nothing to add from this course", WARNING);
                    return Ok(Transition::Stay);
                }
                let labels: Vec<String> = dishes.iter().map(dish_label).collect();
                let idx = Select::with_theme(&ColorfulTheme::default())
                    .with_prompt("Add to Cart")
                    .items(&labels)
                    .default(0)
                    .interact()?;
                let dish = dishes[idx].clone();
                let name = dish.name.clone();
                self.cart.add(dish);
                println!(
                    "{} {} has been added to your cart.",
                    CHECKMARK,
                    style(name).green()
                );
                Ok(Transition::Stay)
            }
            2 => Ok(Transition::Push(Screen::Payment {
                checkout: self.cart.snapshot(),
            })),
            3 => Ok(Transition::Push(Screen::ManageMenu)),
            _ => Ok(Transition::Pop),
        }
    }

    fn guest_menu_screen(&self) -> Result<Transition> {
        println!("{}", style("Guest Menu").bold().cyan());

        let dishes = self.menu.all_dishes();
        println!("{}", format_dish_table(&dishes));

        let mut options: Vec<String> = dishes.iter().map(dish_label).collect();
        options.push("Back".to_string());
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("View Details")
            .items(&options)
            .default(0)
            .interact()?;

        if choice == dishes.len() {
            return Ok(Transition::Pop);
        }
        println!();
        println!("{}", format_dish_detail(&dishes[choice]));
        Ok(Transition::Stay)
    }

    fn manage_menu_screen(&mut self) -> Result<Transition> {
        println!("{}", style("Manage Menu").bold().cyan());

        if self.composer.items().is_empty() {
            println!("{} The managed menu is empty", INFO);
        } else {
            println!("{}", format_dish_table(self.composer.items()));
            println!(
                "{}: {}",
                style("Total").bold(),
                style(format_price(self.composer.total())).green()
            );
        }

        let course_label = match self.composer.selected_course() {
            Some(course) => format!("Select Course (current: {})", course),
            None => "Select Course".to_string(),
        };
        let dish_label_text = match self.composer.pending_dish() {
            Some(dish) => format!("Select Dish (selected: {})", dish.name),
            None => "Select Dish".to_string(),
        };
        let actions = [
            course_label,
            dish_label_text,
            "Add Item".to_string(),
            "Remove an item".to_string(),
            "Go to Filter Menu".to_string(),
            "Go to Payment".to_string(),
            "Back".to_string(),
        ];
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Manage Menu")
            .items(&actions)
            .default(0)
            .interact()?;

        match choice {
            0 => {
                let idx = Select::with_theme(&ColorfulTheme::default())
                    .with_prompt("Select Course")
                    .items(&Course::ALL)
                    .default(0)
                    .interact()?;
                self.composer.select_course(Course::ALL[idx]);
                Ok(Transition::Stay)
            }
            1 => {
                let available: Vec<Dish> = self.composer.available_dishes().to_vec();
                if available.is_empty() {
                    println!("{} Select a course first", WARNING);
                    return Ok(Transition::Stay);
                }
                let labels: Vec<String> = available.iter().map(dish_label).collect();
                let idx = Select::with_theme(&ColorfulTheme::default())
                    .with_prompt("Select Dish")
                    .items(&labels)
                    .default(0)
                    .interact()?;
                match self.composer.select_dish(available[idx].clone()) {
                    Ok(()) => {}
                    Err(e) => println!("{} {}", WARNING, style(&e).yellow()),
                }
                Ok(Transition::Stay)
            }
            2 => {
                match self.composer.add_item() {
                    Ok(dish) => println!(
                        "{} {} added to the managed menu",
                        CHECKMARK,
                        style(dish.name).green()
                    ),
                    Err(e) => println!("{} {}", WARNING, style(&e).yellow()),
                }
                Ok(Transition::Stay)
            }
            3 => {
                if self.composer.items().is_empty() {
                    println!("{} Nothing to remove", WARNING);
                    return Ok(Transition::Stay);
                }
                let mut labels: Vec<String> =
                    self.composer.items().iter().map(dish_label).collect();
                labels.push("Cancel".to_string());
                let idx = Select::with_theme(&ColorfulTheme::default())
                    .with_prompt("Remove")
                    .items(&labels)
                    .default(0)
                    .interact()?;
                if idx < self.composer.items().len() {
                    let id = self.composer.items()[idx].id.clone();
                    let removed = self.composer.remove(&id);
                    println!("{} Removed {} item(s)", CHECKMARK, removed);
                }
                Ok(Transition::Stay)
            }
            4 => Ok(Transition::Push(Screen::FilterMenu)),
            5 => Ok(Transition::Push(Screen::Payment {
                checkout: self.composer.snapshot(),
            })),
            _ => Ok(Transition::Pop),
        }
    }

    fn filter_menu_screen(&mut self) -> Result<Transition> {
        println!("{}", style("Filter Menu").bold().cyan());
        println!(
            "{}: {} | {}",
            style("Filters").bold(),
            self.filter.course,
            self.filter.ceiling
        );

        let filtered = self.menu.filtered(self.filter);
        if filtered.is_empty() {
            println!("{} No dishes match the current filters", INFO);
        } else {
            println!("{}", format_dish_table(&filtered));
        }

        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Filter Menu")
            .items(&[
                "Select Course",
                "Select Price Range",
                "Go to Payment",
                "Back",
            ])
            .default(0)
            .interact()?;

        match choice {
            0 => {
                let mut options = vec![CourseSelection::All];
                options.extend(Course::ALL.map(CourseSelection::Only));
                let idx = Select::with_theme(&ColorfulTheme::default())
                    .with_prompt("Select Course")
                    .items(&options)
                    .default(0)
                    .interact()?;
                self.filter.course = options[idx];
                Ok(Transition::Stay)
            }
            1 => {
                let idx = Select::with_theme(&ColorfulTheme::default())
                    .with_prompt("Select Price Range")
                    .items(&PRICE_CEILINGS)
                    .default(0)
                    .interact()?;
                self.filter.ceiling = PRICE_CEILINGS[idx];
                Ok(Transition::Stay)
            }
            2 => Ok(Transition::Push(Screen::Payment {
                checkout: CheckoutSnapshot::of(filtered),
            })),
            _ => Ok(Transition::Pop),
        }
    }

    fn payment_screen(&mut self, checkout: &CheckoutSnapshot) -> Result<Transition> {
        println!("{}", style("Payment Summary").bold().cyan());

        if !checkout.is_empty() {
            println!("{}", format_dish_table(&checkout.items));
        }
        println!(
            "{}: {}",
            style("Total").bold(),
            style(format_price(checkout.total)).green()
        );

        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Confirm payment of {}?", format_price(checkout.total)))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{} Payment cancelled", WARNING);
            return Ok(Transition::Pop);
        }

        let receipt = self.payment.confirm(checkout.clone());
        println!(
            "{} Payment Successful. You have paid {}.",
            CHECKMARK,
            style(format_price(receipt.total)).green()
        );
        println!("{}", format_receipt(&receipt));

        // A settled payment ends the checkout session: the cart is
        // discarded and the flow starts over from the home screen.
        self.cart = Cart::new();
        Ok(Transition::ResetTo(Screen::Description {
            checkout: CheckoutSnapshot::empty(),
        }))
    }
}

fn dish_label(dish: &Dish) -> String {
    format!("{} - {} ({})", dish.name, format_price(dish.price), dish.course)
}
