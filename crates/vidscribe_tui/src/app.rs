//! Application state and core TUI types.

/// Which part of the screen receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Focus {
    /// Topic input field
    Input,
    /// Collapsible panels below the script
    Panels,
}

/// Collapsible panels shown after a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Panel {
    /// Title chain transcript
    TitleHistory,
    /// Script chain transcript
    ScriptHistory,
    /// Encyclopedia research used for the script
    Research,
}

impl Panel {
    /// Panels in display order.
    pub const ALL: [Panel; 3] = [Panel::TitleHistory, Panel::ScriptHistory, Panel::Research];

    /// Heading shown for the panel.
    pub fn label(self) -> &'static str {
        match self {
            Panel::TitleHistory => "Title History",
            Panel::ScriptHistory => "Script History",
            Panel::Research => "Wikipedia Research",
        }
    }

    fn index(self) -> usize {
        match self {
            Panel::TitleHistory => 0,
            Panel::ScriptHistory => 1,
            Panel::Research => 2,
        }
    }
}

/// Display values produced by one successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationView {
    /// Generated title
    pub title: String,
    /// Generated script
    pub script: String,
    /// Research text passed to the script prompt
    pub research: String,
    /// Title log buffer after the run
    pub title_history: String,
    /// Script log buffer after the run
    pub script_history: String,
}

impl GenerationView {
    /// Body text for a panel.
    pub fn panel_text(&self, panel: Panel) -> &str {
        match panel {
            Panel::TitleHistory => &self.title_history,
            Panel::ScriptHistory => &self.script_history,
            Panel::Research => &self.research,
        }
    }
}

/// What the output region currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Outcome {
    /// Nothing submitted yet
    #[default]
    Idle,
    /// Last submission succeeded
    Success(GenerationView),
    /// Last submission failed with this message
    Failed(String),
}

/// Something the run loop must do in response to a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Run the pipeline for this raw input
    Submit(String),
}

/// Main application state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct App {
    /// Topic being typed
    pub input: String,
    /// Output of the last submission
    pub outcome: Outcome,
    /// Current key focus
    pub focus: Focus,
    /// Selected panel when focus is on the panels
    pub selected_panel: Panel,
    /// Expanded state per panel, in [`Panel::ALL`] order
    pub expanded: [bool; 3],
    /// Vertical scroll of the script block
    pub script_scroll: u16,
    /// Status message to display
    pub status_message: String,
    /// Whether to quit the application
    pub should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create a new App instance with empty state.
    pub fn new() -> Self {
        Self {
            input: String::new(),
            outcome: Outcome::Idle,
            focus: Focus::Input,
            selected_panel: Panel::TitleHistory,
            expanded: [false; 3],
            script_scroll: 0,
            status_message: String::from("Type a topic and press Enter"),
            should_quit: false,
        }
    }

    /// Append a typed character to the input.
    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
    }

    /// Remove the last character of the input.
    pub fn pop_char(&mut self) {
        self.input.pop();
    }

    /// Whether the panels can take focus.
    pub fn has_results(&self) -> bool {
        matches!(self.outcome, Outcome::Success(_))
    }

    /// Move focus between the input and the panels.
    ///
    /// Panels only take focus while results are shown.
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Input if self.has_results() => Focus::Panels,
            _ => Focus::Input,
        };
    }

    /// Select the previous panel.
    pub fn select_previous(&mut self) {
        let i = self.selected_panel.index();
        if i > 0 {
            self.selected_panel = Panel::ALL[i - 1];
        }
    }

    /// Select the next panel.
    pub fn select_next(&mut self) {
        let i = self.selected_panel.index();
        if i + 1 < Panel::ALL.len() {
            self.selected_panel = Panel::ALL[i + 1];
        }
    }

    /// Expand or collapse the selected panel.
    pub fn toggle_selected(&mut self) {
        let i = self.selected_panel.index();
        self.expanded[i] = !self.expanded[i];
    }

    /// Whether a panel is expanded.
    pub fn is_expanded(&self, panel: Panel) -> bool {
        self.expanded[panel.index()]
    }

    /// Scroll the script block up.
    pub fn scroll_up(&mut self) {
        self.script_scroll = self.script_scroll.saturating_sub(5);
    }

    /// Scroll the script block down.
    pub fn scroll_down(&mut self) {
        self.script_scroll = self.script_scroll.saturating_add(5);
    }

    /// Mark a submission as in flight.
    pub fn begin_generation(&mut self) {
        self.status_message = "Generating...".to_string();
    }

    /// Show fresh results, replacing whatever was shown before.
    pub fn show_results(&mut self, view: GenerationView) {
        self.outcome = Outcome::Success(view);
        self.expanded = [false; 3];
        self.selected_panel = Panel::TitleHistory;
        self.script_scroll = 0;
        self.status_message = "Done".to_string();
    }

    /// Show an error in place of all output regions.
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.outcome = Outcome::Failed(message.into());
        self.focus = Focus::Input;
        self.status_message = "Generation failed".to_string();
    }

    /// Leave the output untouched after an empty submission.
    pub fn ignore_empty(&mut self) {
        self.status_message = "Enter a topic first".to_string();
    }

    /// Quit the application.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
