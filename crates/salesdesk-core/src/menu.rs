//! Interactive menu state machine.
//!
//! The menu is a small state machine: [`MenuState`] names the screen the
//! operator is on and [`next`] maps a choice on that screen to a
//! [`Transition`]. [`run`] drives the machine from a [`Console`] until the
//! operator exits or the input ends.
//!
//! ```text
//!            1              0
//!   Main ───────▶ Reports ───────▶ Main
//!     │    2              0
//!     ├─────────▶ Crud ──────────▶ Main
//!     │    0
//!     └─────────▶ Exit
//! ```

use log::{info, warn};

use crate::{
    console::Console,
    error::Result,
    handlers::{handle_crud, handle_report, Entity, Operation},
    reports::Report,
    session::Session,
};

/// Screen the operator is currently on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Main,
    Reports,
    Crud,
    Exit,
}

/// Operation selected from a submenu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Report(Report),
    Crud(Entity, Operation),
}

/// Effect of a menu choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Switch to another screen.
    Goto(MenuState),
    /// Run an operation and stay on the current screen.
    Run(Action),
    /// Unrecognized choice; stay on the current screen.
    Invalid,
}

/// One numbered line of a menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub key: String,
    pub label: &'static str,
    pub transition: Transition,
}

impl MenuEntry {
    fn new(key: impl Into<String>, label: &'static str, transition: Transition) -> Self {
        Self {
            key: key.into(),
            label,
            transition,
        }
    }
}

const CRUD_ACTIONS: [(Entity, Operation, &str); 12] = [
    (Entity::Salesman, Operation::List, "Salesmen: list"),
    (Entity::Salesman, Operation::Add, "Salesmen: add"),
    (Entity::Salesman, Operation::Update, "Salesmen: update (by ID)"),
    (Entity::Salesman, Operation::Delete, "Salesmen: delete (by ID)"),
    (Entity::Customer, Operation::List, "Customers: list"),
    (Entity::Customer, Operation::Add, "Customers: add"),
    (Entity::Customer, Operation::Update, "Customers: update (by ID)"),
    (Entity::Customer, Operation::Delete, "Customers: delete (by ID)"),
    (Entity::Sale, Operation::List, "Sales: list"),
    (Entity::Sale, Operation::Add, "Sales: add"),
    (Entity::Sale, Operation::Update, "Sales: update (by ID)"),
    (Entity::Sale, Operation::Delete, "Sales: delete (by ID)"),
];

impl MenuState {
    /// Heading shown above the menu.
    pub fn title(&self) -> &'static str {
        match self {
            MenuState::Main => "=== MAIN MENU ===",
            MenuState::Reports => "=== REPORTS MENU ===",
            MenuState::Crud => "=== DATA EDITING MENU ===",
            MenuState::Exit => "",
        }
    }

    /// Numbered entries of the menu, `0` last.
    pub fn entries(&self) -> Vec<MenuEntry> {
        let back = MenuEntry::new("0", "Back", Transition::Goto(MenuState::Main));

        match self {
            MenuState::Main => vec![
                MenuEntry::new("1", "Reports", Transition::Goto(MenuState::Reports)),
                MenuEntry::new("2", "Edit data", Transition::Goto(MenuState::Crud)),
                MenuEntry::new("0", "Exit", Transition::Goto(MenuState::Exit)),
            ],
            MenuState::Reports => Report::ALL
                .iter()
                .enumerate()
                .map(|(i, report)| {
                    MenuEntry::new(
                        (i + 1).to_string(),
                        report.label(),
                        Transition::Run(Action::Report(*report)),
                    )
                })
                .chain(std::iter::once(back))
                .collect(),
            MenuState::Crud => CRUD_ACTIONS
                .iter()
                .enumerate()
                .map(|(i, (entity, operation, label))| {
                    MenuEntry::new(
                        (i + 1).to_string(),
                        *label,
                        Transition::Run(Action::Crud(*entity, *operation)),
                    )
                })
                .chain(std::iter::once(back))
                .collect(),
            MenuState::Exit => Vec::new(),
        }
    }

    /// Renders the menu as printed to the operator.
    pub fn render(&self) -> String {
        self.entries()
            .iter()
            .map(|entry| format!("{:<4}{}", format!("{}.", entry.key), entry.label))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Maps a choice on `state` to its transition.
pub fn next(state: MenuState, choice: &str) -> Transition {
    let choice = choice.trim();
    state
        .entries()
        .into_iter()
        .find(|entry| entry.key == choice)
        .map_or(Transition::Invalid, |entry| entry.transition)
}

fn dispatch<C: Console>(session: &mut Session<C>, action: Action) -> Result<()> {
    match action {
        Action::Report(report) => handle_report(session, report).map(drop),
        Action::Crud(entity, operation) => handle_crud(session, entity, operation),
    }
}

/// Drives the menus until the operator exits.
///
/// Recoverable failures of an operation are shown and the current menu
/// continues; console failures, including end of input, are returned.
pub fn run<C: Console>(session: &mut Session<C>) -> Result<()> {
    let mut state = MenuState::Main;

    while state != MenuState::Exit {
        session.console.heading(&format!("\n{}", state.title()))?;
        session.console.print(&state.render())?;
        let choice = session.console.read_line("Choose an option: ")?;

        match next(state, &choice) {
            Transition::Goto(target) => state = target,
            Transition::Invalid => session.console.print("Invalid choice.")?,
            Transition::Run(action) => match dispatch(session, action) {
                Ok(()) => {}
                Err(e) if e.is_recoverable() => {
                    warn!("{action:?} failed: {e}");
                    session.console.print(&format!("Error: {e}"))?;
                }
                Err(e) => return Err(e),
            },
        }
    }

    info!("Operator exited");
    Ok(())
}
