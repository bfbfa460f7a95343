use tracing::debug;

use crate::models::cart::CheckoutSnapshot;

/// Logical screens of the ordering flow. Only Description and Payment carry
/// parameters: an immutable checkout snapshot passed by value.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    SignIn,
    Description { checkout: CheckoutSnapshot },
    Menu,
    GuestMenu,
    ManageMenu,
    FilterMenu,
    Payment { checkout: CheckoutSnapshot },
}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Screen::SignIn => "SignIn",
            Screen::Description { .. } => "Description",
            Screen::Menu => "Menu",
            Screen::GuestMenu => "GuestMenu",
            Screen::ManageMenu => "ManageMenu",
            Screen::FilterMenu => "FilterMenu",
            Screen::Payment { .. } => "Payment",
        }
    }
}

/// What a screen handler asks the router to do next.
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// Re-run the current screen (e.g. after a validation error).
    Stay,
    Push(Screen),
    /// Return to the screen below the current one.
    Pop,
    /// Drop the whole stack and start over from one screen, used when a
    /// confirmed payment ends the checkout session.
    ResetTo(Screen),
    Quit,
}

/// A synchronous screen stack. The flow ends when the stack empties or a
/// handler quits.
#[derive(Debug)]
pub struct Router {
    stack: Vec<Screen>,
}

impl Router {
    /// The flow always starts at SignIn.
    pub fn new() -> Self {
        Self::starting_at(Screen::SignIn)
    }

    pub fn starting_at(initial: Screen) -> Self {
        Self { stack: vec![initial] }
    }

    pub fn current(&self) -> Option<&Screen> {
        self.stack.last()
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Apply a transition. Returns false when the flow is over.
    pub fn apply(&mut self, transition: Transition) -> bool {
        match transition {
            Transition::Stay => {}
            Transition::Push(screen) => {
                debug!("router: push {}", screen.name());
                self.stack.push(screen);
            }
            Transition::Pop => {
                debug!("router: pop");
                self.stack.pop();
            }
            Transition::ResetTo(screen) => {
                debug!("router: reset to {}", screen.name());
                self.stack.clear();
                self.stack.push(screen);
            }
            Transition::Quit => {
                debug!("router: quit");
                self.stack.clear();
            }
        }
        !self.stack.is_empty()
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
