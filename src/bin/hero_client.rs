use clap::{Parser, Subcommand};
use humble_heroes::app::render::{render_form, render_search_view};
use humble_heroes::app::{AddForm, HeroApp, LoadState, SearchView};
use humble_heroes::utils::{logger, validation::Validate};
use humble_heroes::ApiClient;
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Parser)]
#[command(name = "hero-client")]
#[command(about = "Browse and add humble superheroes")]
struct Args {
    /// URL of the superheroes resource
    #[arg(long, default_value = humble_heroes::adapters::client::DEFAULT_API_URL)]
    api_url: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show one page of heroes, optionally filtered by name
    List {
        #[arg(short, long)]
        search: Option<String>,

        #[arg(short, long, default_value = "1")]
        page: usize,
    },
    /// Add a hero
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        superpower: String,

        #[arg(long, default_value = "5")]
        humility: i64,
    },
    /// Type to search; :next, :prev, :add NAME | POWER | SCORE, :quit
    Interactive,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_client_logger(args.verbose);

    let client = ApiClient::new(args.api_url.clone());
    if let Err(e) = client.validate() {
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    match args.command {
        Command::List { search, page } => list(&client, search.as_deref(), page).await,
        Command::Add {
            name,
            superpower,
            humility,
        } => add(&client, name, superpower, humility).await,
        Command::Interactive => interactive(client).await,
    }
}

async fn list(client: &ApiClient, search: Option<&str>, page: usize) -> anyhow::Result<()> {
    let mut view = SearchView::new();
    view.load(client).await;

    if let LoadState::Failed(message) = view.state() {
        eprintln!("❌ {}", message);
        std::process::exit(2);
    }

    if let Some(term) = search {
        view.set_search_term(term);
    }
    view.go_to_page(page);

    println!("{}", render_search_view(&view));
    Ok(())
}

async fn add(
    client: &ApiClient,
    name: String,
    superpower: String,
    humility: i64,
) -> anyhow::Result<()> {
    let mut form = AddForm::with_values(name, superpower, humility);

    if form.submit(client).await {
        println!("✅ Hero added");
        Ok(())
    } else {
        eprintln!("❌ {}", form.error().unwrap_or("Failed to add a Marvel hero."));
        std::process::exit(2);
    }
}

async fn interactive(client: ApiClient) -> anyhow::Result<()> {
    let mut app = HeroApp::new(client);
    app.start().await;
    println!("{}", render_search_view(app.list()));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let input = line.trim_end();

        match input {
            ":quit" | ":q" => break,
            ":next" => app.list_mut().next_page(),
            ":prev" => app.list_mut().prev_page(),
            ":refresh" => app.refresh().await,
            _ if input.starts_with(":add") => {
                let fields: Vec<&str> = input
                    .trim_start_matches(":add")
                    .split('|')
                    .map(str::trim)
                    .collect();
                let form = app.form_mut();
                form.name = fields.first().copied().unwrap_or_default().to_string();
                form.superpower = fields.get(1).copied().unwrap_or_default().to_string();
                // Unparseable scores fall outside 1-10 and fail form validation
                form.humility_score = fields
                    .get(2)
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(0);

                if !app.submit_form().await {
                    println!("{}", render_form(app.form()));
                }
            }
            term => app.list_mut().set_search_term(term),
        }

        println!("{}", render_search_view(app.list()));
    }

    Ok(())
}
