use tracing::{debug, warn};

use crate::error::WidgetError;
use crate::random::UniformIndex;
use crate::roster::Roster;

/// Visibility of the validation error indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    Idle,
    ShowingError,
}

/// The outcome of a successful draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draw {
    pub index : usize,
    pub name : String,
    pub message : String,
}

/// Strips leading and trailing whitespace, counting U+FEFF (byte order mark) as whitespace too.
pub fn trim_name(raw : &str) -> &str {
    raw.trim_matches(|c : char| c.is_whitespace() || c == '\u{feff}')
}

/// Formats the message shown in the result display.
pub fn draw_message(name : &str) -> String {
    format!("¡{} es el amigo secreto!", name)
}

/// Owns the roster and the display state derived from it. The widget never touches a surface
/// directly; callers apply the returned values to whatever host they render to.
#[derive(Debug)]
pub struct RosterWidget<R> {
    roster : Roster,
    indicator : Indicator,
    result : Option<String>,
    rng : R,
}

impl<R : UniformIndex> RosterWidget<R> {
    /// Creates a widget with an empty roster, drawing with the given random source.
    pub fn new(rng : R) -> Self {
        RosterWidget {
            roster : Roster::new(),
            indicator : Indicator::Idle,
            result : None,
            rng,
        }
    }

    /// Validates and appends a name, returning the stored (trimmed) value.
    ///
    /// Every call sets the indicator explicitly: shown when the trimmed input is empty, hidden
    /// otherwise. The roster is only touched on success.
    pub fn add_name(&mut self, raw : &str) -> Result<&str, WidgetError> {
        let name = trim_name(raw);

        if name.is_empty() {
            self.indicator = Indicator::ShowingError;
            warn!(raw_len = raw.len(), "rejected empty name");
            return Err(WidgetError::EmptyName);
        }

        self.indicator = Indicator::Idle;
        self.roster.push(name.to_string());
        debug!(name, total = self.roster.len(), "added name");

        Ok(self.roster.as_slice()[self.roster.len() - 1].as_str())
    }

    /// Hides the error indicator without submitting anything.
    pub fn clear_error(&mut self) {
        self.indicator = Indicator::Idle;
    }

    /// Picks one name uniformly at random. Nothing is removed, so the same name can come up on
    /// any later draw.
    pub fn draw_name(&mut self) -> Result<Draw, WidgetError> {
        if self.roster.is_empty() {
            warn!("draw requested on an empty roster");
            return Err(WidgetError::NoCandidates);
        }

        let index = self.rng.index(self.roster.len());
        let name = self.roster.as_slice()[index].clone();
        let message = draw_message(&name);
        debug!(index, name = name.as_str(), "drew name");

        self.result = Some(message.clone());

        Ok(Draw { index, name, message })
    }

    /// The visible list: one item per roster entry, in insertion order.
    pub fn render(&self) -> &[String] {
        self.roster.as_slice()
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn indicator(&self) -> Indicator {
        self.indicator
    }

    /// Whether the result display has been shown. Once set this is never reset.
    pub fn result_visible(&self) -> bool {
        self.result.is_some()
    }

    /// The last draw message, if any draw has succeeded.
    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }
}
