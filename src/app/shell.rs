use crate::app::add_form::AddForm;
use crate::app::search_view::SearchView;
use crate::core::HeroApi;

/// Top-level client state: the add form above the searchable list.
///
/// A successful add bumps `refresh_generation` and rebuilds the list from a
/// fresh fetch, so search term and page reset along with it.
pub struct HeroApp<A: HeroApi> {
    api: A,
    form: AddForm,
    list: SearchView,
    refresh_generation: u64,
}

impl<A: HeroApi> HeroApp<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            form: AddForm::new(),
            list: SearchView::new(),
            refresh_generation: 0,
        }
    }

    pub async fn start(&mut self) {
        self.list.load(&self.api).await;
    }

    pub fn form(&self) -> &AddForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut AddForm {
        &mut self.form
    }

    pub fn list(&self) -> &SearchView {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut SearchView {
        &mut self.list
    }

    pub fn refresh_generation(&self) -> u64 {
        self.refresh_generation
    }

    pub async fn submit_form(&mut self) -> bool {
        let submitted = self.form.submit(&self.api).await;
        if submitted {
            self.refresh().await;
        }
        submitted
    }

    pub async fn refresh(&mut self) {
        self.refresh_generation += 1;
        self.list = SearchView::new();
        self.list.load(&self.api).await;
    }
}
