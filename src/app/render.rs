use crate::app::add_form::AddForm;
use crate::app::search_view::{LoadState, SearchView};
use crate::core::Superhero;

pub const EMPTY_RESULTS_MESSAGE: &str = "No superheroes found.";

pub fn render_hero(hero: &Superhero) -> String {
    format!(
        "{} - {} (Humility: {}/10)",
        hero.name, hero.superpower, hero.humility_score
    )
}

pub fn render_search_view(view: &SearchView) -> String {
    match view.state() {
        LoadState::Loading => return "Loading...".to_string(),
        LoadState::Failed(message) => return message.clone(),
        LoadState::Ready => {}
    }

    let mut lines = vec![format!("Search: {}", view.search_term())];

    let items = view.page_items();
    if items.is_empty() {
        lines.push(EMPTY_RESULTS_MESSAGE.to_string());
        return lines.join("\n");
    }

    lines.extend(items.iter().map(|hero| format!("  {}", render_hero(hero))));
    lines.push(format!(
        "{}  Page {} of {}  {}",
        control("Previous", view.can_go_prev()),
        view.current_page(),
        view.total_pages(),
        control("Next", view.can_go_next())
    ));

    lines.join("\n")
}

pub fn render_form(form: &AddForm) -> String {
    let mut lines = vec!["Add a Marvel Hero".to_string()];
    if let Some(error) = form.error() {
        lines.push(format!("! {}", error));
    }
    lines.push(format!("  Name: {}", form.name));
    lines.push(format!("  Superpower: {}", form.superpower));
    lines.push(format!("  Humility Score (1-10): {}", form.humility_score));
    lines.join("\n")
}

fn control(label: &str, enabled: bool) -> String {
    if enabled {
        format!("[{}]", label)
    } else {
        format!("({} disabled)", label)
    }
}
