use crate::{
    error::TyperError,
    session::{Session, SessionConfig},
    viewport::ScrollWindow,
};

pub const MIN_COLUMNS: u16 = 80;
pub const MIN_ROWS: u16 = 20;

/// Row of the first line inside the text box
pub const TEXTBOX_TOP: u16 = 13;

/// Fails when the terminal is below the supported minimum
pub fn check_terminal_size(columns: u16, rows: u16) -> Result<(), TyperError> {
    if columns >= MIN_COLUMNS && rows >= MIN_ROWS {
        return Ok(());
    }
    Err(TyperError::TerminalTooSmall {
        min_columns: MIN_COLUMNS,
        min_rows: MIN_ROWS,
        columns,
        rows,
    })
}

/// Screen layout derived from the terminal size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub columns: u16,
    pub rows: u16,
    pub textbox_x: u16,
    pub textbox_y: u16,
    pub textbox_width: u16,
    pub textbox_height: u16,
}

impl Geometry {
    pub fn new(columns: u16, rows: u16, textbox_height: u16) -> Self {
        let textbox_width = (columns / 2).max(1);
        Self {
            columns,
            rows,
            textbox_x: columns.saturating_sub(textbox_width) / 2,
            textbox_y: TEXTBOX_TOP,
            textbox_width,
            textbox_height,
        }
    }
}

#[derive(Debug)]
pub struct App {
    pub session: Session,
    pub config: SessionConfig,
    pub geometry: Geometry,
    /// One-shot footer message, cleared after it has been drawn
    pub status: Option<String>,
}

impl App {
    pub fn new(
        passage: impl Into<String>,
        config: SessionConfig,
        columns: u16,
        rows: u16,
    ) -> Result<Self, TyperError> {
        Ok(Self {
            session: Session::new(passage, config.track_stats)?,
            geometry: Geometry::new(columns, rows, config.textbox_height),
            config,
            status: None,
        })
    }

    pub fn resize(&mut self, columns: u16, rows: u16) {
        self.geometry = Geometry::new(columns, rows, self.config.textbox_height);
    }

    pub fn scroll_window(&self) -> ScrollWindow {
        ScrollWindow::compute(
            self.session.passage(),
            self.session.typed(),
            self.geometry.textbox_width as usize,
            self.geometry.textbox_height as usize,
        )
    }
}
