use std::time::Duration;

use archivum_engine::{
    Card, DetailView, Filter, Graph, Grids, Orientation, TimelineEntry, build_graph, build_grids,
    build_timeline, filter_records, jump_to_year, pick_daily,
};
use archivum_store::{Archive, NotesStore};
use crossterm::event::{KeyCode, KeyEvent};

use super::clipboard;
use super::quotes::QuoteSequencer;

/// The two persistent note fields, keyed into the notes store.
pub const NOTE_IDS: [&str; 2] = ["global", "daily"];

/// Top-level sections. Detail is not a list section: back-navigation
/// returns to the last list section that was active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Library,
    Timeline,
    Map,
    Notes,
    Detail,
}

impl Section {
    const LIST_CYCLE: [Section; 5] = [
        Section::Home,
        Section::Library,
        Section::Timeline,
        Section::Map,
        Section::Notes,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Library => "Library",
            Section::Timeline => "Timeline",
            Section::Map => "Map",
            Section::Notes => "Notes",
            Section::Detail => "Detail",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search,
    JumpYear,
    NoteEdit,
}

/// Owns all browser state: the loaded archive, per-section view state,
/// and the navigation controller. Advanced only by key events and ticks.
pub struct App {
    archive: Archive,
    notes: NotesStore,

    section: Section,
    last_list_section: Section,
    pub mode: InputMode,

    // Library
    pub filter: Filter,
    pub grids: Grids,
    pub library_cursor: usize,

    // Timeline
    pub timeline: Vec<TimelineEntry>,
    pub timeline_cursor: usize,
    pub orientation: Orientation,
    pub jump_input: String,

    // Map
    pub graph: Graph,

    // Detail
    pub detail: Option<DetailView>,

    // Home
    pub daily_id: Option<String>,
    pub quotes: QuoteSequencer,

    // Notes
    pub note_buffers: [String; 2],
    pub active_note: usize,
    pub notes_minimized: bool,

    pub status: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(archive: Archive, notes: NotesStore) -> Self {
        let filter = Filter::default();
        let grids = build_grids(archive.records().iter());
        let timeline = build_timeline(archive.records());
        let graph = rebuild_graph(&archive);

        let mut note_buffers: [String; 2] = Default::default();
        for (buffer, id) in note_buffers.iter_mut().zip(NOTE_IDS) {
            if let Ok(Some(body)) = notes.get(id) {
                *buffer = body;
            }
        }

        let mut app = Self {
            archive,
            notes,
            section: Section::Home,
            last_list_section: Section::Home,
            mode: InputMode::Normal,
            filter,
            grids,
            library_cursor: 0,
            timeline,
            timeline_cursor: 0,
            orientation: Orientation::default(),
            jump_input: String::new(),
            graph,
            detail: None,
            daily_id: None,
            quotes: QuoteSequencer::new(),
            note_buffers,
            active_note: 0,
            notes_minimized: false,
            status: None,
            should_quit: false,
        };
        app.reroll_daily();
        app
    }

    pub fn archive(&self) -> &Archive {
        &self.archive
    }

    pub fn section(&self) -> Section {
        self.section
    }

    /// The section the open detail view came from; drives both
    /// back-navigation and the tab highlight while Detail is showing.
    pub fn last_list_section(&self) -> Section {
        self.last_list_section
    }

    /// Advance time-driven state (the welcome quote sequence).
    pub fn tick(&mut self, dt: Duration) {
        self.quotes.advance(dt);
    }

    /// Switch sections. Exactly one section is visible; re-entering Home
    /// re-rolls the daily record, re-entering Map rebuilds the graph.
    pub fn activate(&mut self, section: Section) {
        if section != Section::Detail {
            self.last_list_section = section;
        }
        match section {
            Section::Home => self.reroll_daily(),
            Section::Map => self.reset_map(),
            _ => {}
        }
        self.section = section;
    }

    /// Open the detail view for a record id. Unknown ids are a no-op.
    pub fn open_detail(&mut self, id: &str) {
        if let Some(record) = self.archive.get(id) {
            self.detail = Some(DetailView::build(record));
            self.section = Section::Detail;
        }
    }

    /// Back-navigation from detail to the last list section.
    pub fn back(&mut self) {
        self.activate(self.last_list_section);
    }

    fn reroll_daily(&mut self) {
        let mut rng = rand::rng();
        self.daily_id = pick_daily(self.archive.records(), &mut rng).map(|r| r.id.clone());
    }

    /// Discard and rebuild the map from the full dataset.
    pub fn reset_map(&mut self) {
        self.graph = rebuild_graph(&self.archive);
    }

    fn refilter(&mut self) {
        let matched = filter_records(self.archive.records(), &self.filter);
        self.grids = build_grids(matched.into_iter());
        let total = self.library_len();
        if total == 0 {
            self.library_cursor = 0;
        } else if self.library_cursor >= total {
            self.library_cursor = total - 1;
        }
    }

    fn library_len(&self) -> usize {
        self.grids.people.len() + self.grids.movements.len() + self.grids.resources.len()
    }

    /// The card under the library cursor, scanning grids in display
    /// order: people, movements, resources.
    pub fn selected_card(&self) -> Option<&Card> {
        self.grids
            .people
            .iter()
            .chain(&self.grids.movements)
            .chain(&self.grids.resources)
            .nth(self.library_cursor)
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        // Any keypress interrupts the welcome sequence.
        self.quotes.cancel();
        self.status = None;

        match self.mode {
            InputMode::Normal => self.on_key_normal(key),
            InputMode::Search => self.on_key_search(key),
            InputMode::JumpYear => self.on_key_jump(key),
            InputMode::NoteEdit => self.on_key_note_edit(key),
        }
    }

    fn on_key_normal(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,

            KeyCode::Char('1') => self.activate(Section::Home),
            KeyCode::Char('2') => self.activate(Section::Library),
            KeyCode::Char('3') => self.activate(Section::Timeline),
            KeyCode::Char('4') => self.activate(Section::Map),
            KeyCode::Char('5') => self.activate(Section::Notes),

            KeyCode::Tab => {
                let current = Section::LIST_CYCLE
                    .iter()
                    .position(|s| *s == self.last_list_section)
                    .unwrap_or(0);
                let next = Section::LIST_CYCLE[(current + 1) % Section::LIST_CYCLE.len()];
                self.activate(next);
            }

            KeyCode::Esc => {
                if self.section == Section::Detail {
                    self.back();
                }
            }

            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),

            KeyCode::Enter => match self.section {
                Section::Library => {
                    if let Some(id) = self.selected_card().map(|c| c.id.clone()) {
                        self.open_detail(&id);
                    }
                }
                Section::Timeline => {
                    if let Some(id) = self
                        .timeline
                        .get(self.timeline_cursor)
                        .map(|e| e.id.clone())
                    {
                        self.open_detail(&id);
                    }
                }
                Section::Home => {
                    if let Some(id) = self.daily_id.clone() {
                        self.open_detail(&id);
                    }
                }
                _ => {}
            },

            KeyCode::Char('/') if self.section == Section::Library => {
                self.mode = InputMode::Search;
            }

            KeyCode::Char('o') if self.section == Section::Timeline => {
                self.orientation = self.orientation.toggled();
            }
            KeyCode::Char('g') if self.section == Section::Timeline => {
                self.jump_input.clear();
                self.mode = InputMode::JumpYear;
            }

            KeyCode::Char('r') if self.section == Section::Map => self.reset_map(),

            KeyCode::Char('e') if self.section == Section::Notes => {
                self.mode = InputMode::NoteEdit;
            }
            KeyCode::Char('s') if self.section == Section::Notes => self.save_active_note(),
            KeyCode::Char('y') if self.section == Section::Notes => self.copy_active_note(),
            KeyCode::Char('m') if self.section == Section::Notes => {
                self.notes_minimized = !self.notes_minimized;
            }
            KeyCode::Left if self.section == Section::Notes => self.active_note = 0,
            KeyCode::Right if self.section == Section::Notes => self.active_note = 1,

            _ => {}
        }
    }

    fn on_key_search(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => self.mode = InputMode::Normal,
            KeyCode::Backspace => {
                self.filter.query.pop();
                self.refilter();
            }
            KeyCode::Char(c) => {
                self.filter.query.push(c);
                self.refilter();
            }
            _ => {}
        }
    }

    fn on_key_jump(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.mode = InputMode::Normal,
            KeyCode::Enter => {
                if let Ok(year) = self.jump_input.parse::<i32>()
                    && let Some(index) = jump_to_year(&self.timeline, year)
                {
                    self.timeline_cursor = index;
                }
                // No qualifying entry: fall through silently.
                self.mode = InputMode::Normal;
            }
            KeyCode::Backspace => {
                self.jump_input.pop();
            }
            KeyCode::Char(c) if c.is_ascii_digit() || c == '-' => self.jump_input.push(c),
            _ => {}
        }
    }

    fn on_key_note_edit(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.mode = InputMode::Normal,
            KeyCode::Enter => self.note_buffers[self.active_note].push('\n'),
            KeyCode::Backspace => {
                self.note_buffers[self.active_note].pop();
            }
            KeyCode::Char(c) => self.note_buffers[self.active_note].push(c),
            _ => {}
        }
    }

    fn move_cursor(&mut self, delta: i32) {
        let (cursor, len) = match self.section {
            Section::Library => {
                let len = self.library_len();
                (&mut self.library_cursor, len)
            }
            Section::Timeline => {
                let len = self.timeline.len();
                (&mut self.timeline_cursor, len)
            }
            _ => return,
        };
        if len == 0 {
            return;
        }
        let next = cursor.saturating_add_signed(delta as isize);
        *cursor = next.min(len - 1);
    }

    fn save_active_note(&mut self) {
        let id = NOTE_IDS[self.active_note];
        match self.notes.put(id, &self.note_buffers[self.active_note]) {
            Ok(()) => self.status = Some(format!("Saved note '{}'", id)),
            Err(e) => self.status = Some(format!("Save failed: {}", e)),
        }
    }

    fn copy_active_note(&mut self) {
        match clipboard::copy(&self.note_buffers[self.active_note]) {
            Ok(()) => self.status = Some("Copied to clipboard".to_string()),
            Err(e) => self.status = Some(format!("Copy failed: {}", e)),
        }
    }
}

fn rebuild_graph(archive: &Archive) -> Graph {
    let links = archive
        .links()
        .iter()
        .map(|link| (link.from.as_str(), link.to.as_str()));
    build_graph(archive.records(), links)
}
