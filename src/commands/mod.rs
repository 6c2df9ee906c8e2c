mod platform;
mod category;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use platform_dashboard::auth::{AuthGate, GateView, IdentityProvider};
use platform_dashboard::chat::ChatAssistant;
use platform_dashboard::config::Config;
use platform_dashboard::dashboard::Dashboard;
use platform_dashboard::error::DashboardError;
use platform_dashboard::presentation::render;
use platform_dashboard::presentation::{IconRegistry, Palette};
use platform_dashboard::storage::KeyValueStore;
use platform_dashboard::theme::Theme;

pub use category::{CategoryCommand, SubcategoryCommand};
pub use platform::PlatformCommand;

#[derive(Parser, Debug)]
#[command(name = "platform-dashboard", version, about = "Catalog of external platforms grouped by category")]
pub struct Cli {
    /// Path to config.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding persisted state, overrides `data_dir`
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the platforms matching the given filters
    List {
        #[arg(long)]
        main: Option<String>,
        #[arg(long)]
        sub: Option<String>,
        #[arg(long)]
        search: Option<String>,
        /// Also print the category sidebar
        #[arg(long)]
        sidebar: bool
    },
    /// Platform names matching partially typed search text
    Suggest {
        text: String
    },
    #[command(subcommand)]
    Platform(PlatformCommand),
    #[command(subcommand)]
    Category(CategoryCommand),
    #[command(subcommand)]
    Subcategory(SubcategoryCommand),
    /// Show or change the colour theme
    Theme {
        #[arg(value_enum, default_value_t = ThemeAction::Show)]
        action: ThemeAction
    },
    /// Ask the assistant about the catalog
    Chat {
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>
    },
    /// Sign in with the configured identity provider
    Login
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeAction {
    Show,
    Toggle,
    Light,
    Dark
}

/// Shared rendering helpers for the command handlers.
pub(crate) struct View {
    pub icons: IconRegistry,
    pub palette: Palette
}

impl View {
    fn new(theme: Theme) -> Self {
        View {
            icons: IconRegistry::default(),
            palette: Palette::new(theme)
        }
    }
}

pub(crate) fn print_notifications<S: KeyValueStore>(dashboard: &mut Dashboard<S>) {
    for toast in dashboard.drain_notifications() {
        println!("✔ {}", toast.message);
    }
}

pub async fn dispatch<S, P>(
    command: Command,
    config: &Config,
    mut dashboard: Dashboard<S>,
    mut gate: AuthGate<P>
) -> Result<(), DashboardError>
    where
        S: KeyValueStore,
        P: IdentityProvider,
{
    if let Command::Login = command {
        return match gate.login().await? {
            GateView::Dashboard => {
                println!("Signed in");
                Ok(())
            }
            GateView::SignIn => Err(DashboardError::auth("Login was not completed".to_string()))
        };
    }

    gate.require()?;
    let view = View::new(dashboard.theme());

    match command {
        Command::List { main, sub, search, sidebar } => {
            if let Some(main) = main {
                dashboard.select_main_category(&main);
            }
            if let Some(sub) = sub {
                dashboard.select_sub_category(&sub);
            }
            if let Some(search) = search {
                dashboard.set_search(&search);
            }

            if sidebar {
                println!("{}\n", render::sidebar(dashboard.categories(), dashboard.filter(), &view.icons));
            }

            let visible = dashboard.visible();
            let index = dashboard.category_index();
            println!("{}", render::header(visible.len(), dashboard.platforms().len()));
            if let Some(active) = render::active_filters(dashboard.filter()) {
                println!("{}", active);
            }
            println!("\n{}", render::grid(&visible, dashboard.filter(), &view.icons, &view.palette, &index));
        }
        Command::Suggest { text } => {
            dashboard.set_search(&text);
            let suggestions = dashboard.suggestions();
            if !suggestions.is_empty() {
                println!("{}", render::suggestion_list(&suggestions));
            }
        }
        Command::Platform(command) => platform::run(command, &mut dashboard, &view).await?,
        Command::Category(command) => category::run(command, &mut dashboard, &view).await?,
        Command::Subcategory(command) => category::run_sub(command, &mut dashboard).await?,
        Command::Theme { action } => {
            let theme = match action {
                ThemeAction::Show => dashboard.theme(),
                ThemeAction::Toggle => dashboard.toggle_theme().await?,
                ThemeAction::Light => dashboard.set_theme(Theme::Light).await?,
                ThemeAction::Dark => dashboard.set_theme(Theme::Dark).await?
            };
            dashboard.drain_notifications();
            println!("{}", theme);
        }
        Command::Chat { message } => {
            let mut chat = ChatAssistant::new(&config.chat.endpoint, &config.chat.model, config.chat.api_key());
            if !chat.is_enabled() {
                println!("No api key in {}, message recorded locally only", config.chat.api_key_env);
            }

            let (platforms, categories) = dashboard.snapshot();
            if let Some(reply) = chat.send(&message.join(" "), &categories, &platforms).await {
                println!("{}", reply);
            }
        }
        Command::Login => {}
    }

    Ok(())
}
