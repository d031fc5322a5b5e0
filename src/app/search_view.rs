//! Searchable, paginated hero list.
//!
//! Filtering runs against the full fetched set on every keystroke; the server
//! is only asked once per load.

use crate::core::{HeroApi, Superhero};

pub const PAGE_SIZE: usize = 4;
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load Marvel Heroes.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct SearchView {
    heroes: Vec<Superhero>,
    filtered: Vec<Superhero>,
    search_term: String,
    current_page: usize,
    state: LoadState,
}

impl Default for SearchView {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchView {
    pub fn new() -> Self {
        Self {
            heroes: Vec::new(),
            filtered: Vec::new(),
            search_term: String::new(),
            current_page: 1,
            state: LoadState::Loading,
        }
    }

    pub async fn load<A: HeroApi + ?Sized>(&mut self, api: &A) {
        self.state = LoadState::Loading;
        match api.fetch_superheroes().await {
            Ok(heroes) => {
                tracing::debug!("Loaded {} superheroes", heroes.len());
                self.set_heroes(heroes);
            }
            Err(e) => {
                tracing::warn!("Loading superheroes failed: {}", e);
                self.state = LoadState::Failed(LOAD_FAILED_MESSAGE.to_string());
            }
        }
    }

    /// Replaces the fetched set and shows all of it.
    pub fn set_heroes(&mut self, heroes: Vec<Superhero>) {
        self.filtered = heroes.clone();
        self.heroes = heroes;
        self.search_term.clear();
        self.current_page = 1;
        self.state = LoadState::Ready;
    }

    pub fn set_search_term(&mut self, term: &str) {
        self.search_term = term.to_lowercase();
        self.filtered = self
            .heroes
            .iter()
            .filter(|hero| hero.name.to_lowercase().contains(&self.search_term))
            .cloned()
            .collect();
        self.current_page = 1;
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn heroes(&self) -> &[Superhero] {
        &self.heroes
    }

    pub fn filtered(&self) -> &[Superhero] {
        &self.filtered
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.filtered.len().div_ceil(PAGE_SIZE)
    }

    pub fn page_items(&self) -> &[Superhero] {
        let start = (self.current_page - 1) * PAGE_SIZE;
        let end = (start + PAGE_SIZE).min(self.filtered.len());
        self.filtered.get(start..end).unwrap_or(&[])
    }

    pub fn can_go_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    pub fn next_page(&mut self) {
        if self.can_go_next() {
            self.current_page += 1;
        }
    }

    pub fn prev_page(&mut self) {
        if self.can_go_prev() {
            self.current_page -= 1;
        }
    }

    /// Jumps to `page`, clamped to `1..=total_pages()`.
    pub fn go_to_page(&mut self, page: usize) {
        self.current_page = page.clamp(1, self.total_pages().max(1));
    }
}
