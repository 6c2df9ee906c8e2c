use clap::Subcommand;
use platform_dashboard::dashboard::Dashboard;
use platform_dashboard::error::DashboardError;
use platform_dashboard::forms::{CategoryForm, SubCategoryForm};
use platform_dashboard::presentation::icons::search_icons;
use platform_dashboard::presentation::render;
use platform_dashboard::storage::KeyValueStore;
use crate::commands::{print_notifications, View};

#[derive(Subcommand, Debug)]
pub enum CategoryCommand {
    /// List categories with their sub-categories
    List,
    /// Add a main category
    Add {
        main: String,
        /// Comma separated sub-category names
        #[arg(long, default_value = "")]
        subs: String,
        #[arg(long)]
        icon: Option<String>
    },
    /// Delete a main category; platforms referencing it are kept
    Delete {
        main: String
    },
    /// Platforms whose category or sub-category no longer exists
    Orphans,
    /// Icons available to categories and platforms
    Icons {
        search: Option<String>
    }
}

#[derive(Subcommand, Debug)]
pub enum SubcategoryCommand {
    /// Add a sub-category to an existing category
    Add {
        main: String,
        sub: String
    },
    /// Remove a sub-category; platforms referencing it are kept
    Delete {
        main: String,
        sub: String
    }
}

pub async fn run<S: KeyValueStore>(command: CategoryCommand, dashboard: &mut Dashboard<S>, view: &View) -> Result<(), DashboardError> {
    match command {
        CategoryCommand::List => {
            for category in dashboard.categories() {
                println!("{}", render::category_summary(category, &view.icons));
            }
        }
        CategoryCommand::Add { main, subs, icon } => {
            let mut form = CategoryForm { main, subs, ..CategoryForm::default() };
            if let Some(icon) = icon {
                form.icon = icon;
            }

            let category = form.submit()?;
            dashboard.add_category(category).await?;
            print_notifications(dashboard);
        }
        CategoryCommand::Delete { main } => {
            if !dashboard.delete_category(&main).await? {
                println!("No category named {}", main);
            }
            print_notifications(dashboard);
        }
        CategoryCommand::Orphans => {
            let index = dashboard.category_index();
            for platform in dashboard.orphans() {
                println!("{}", render::card(platform, &view.icons, &view.palette, &index));
            }
        }
        CategoryCommand::Icons { search } => {
            for icon in search_icons(search.as_deref().unwrap_or("")) {
                println!("{} {}", view.icons.platform_icon(icon).render(), icon);
            }
        }
    }

    Ok(())
}

pub async fn run_sub<S: KeyValueStore>(command: SubcategoryCommand, dashboard: &mut Dashboard<S>) -> Result<(), DashboardError> {
    match command {
        SubcategoryCommand::Add { main, sub } => {
            let (main, sub) = SubCategoryForm { main, sub }.submit()?;
            if !dashboard.add_sub_category(&main, &sub).await? {
                println!("{} already lists {} or does not exist", main, sub);
            }
        }
        SubcategoryCommand::Delete { main, sub } => {
            if !dashboard.delete_sub_category(&main, &sub).await? {
                println!("No sub category {} under {}", sub, main);
            }
        }
    }
    print_notifications(dashboard);

    Ok(())
}
