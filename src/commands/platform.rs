use clap::{Args, Subcommand};
use tracing::warn;
use platform_dashboard::catalog::PlatformId;
use platform_dashboard::dashboard::Dashboard;
use platform_dashboard::error::DashboardError;
use platform_dashboard::forms::PlatformForm;
use platform_dashboard::index::CategoryIndex;
use platform_dashboard::presentation::render;
use platform_dashboard::storage::KeyValueStore;
use crate::commands::{print_notifications, View};

#[derive(Subcommand, Debug)]
pub enum PlatformCommand {
    /// Add a platform
    Add(PlatformFields),
    /// Change fields of an existing platform
    Edit {
        id: String,
        #[command(flatten)]
        fields: PlatformFields
    },
    /// Remove a platform
    Delete {
        id: String
    }
}

#[derive(Args, Debug, Default)]
pub struct PlatformFields {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub url: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    /// Main category; picking one clears the sub-category
    #[arg(long)]
    pub main: Option<String>,
    #[arg(long)]
    pub sub: Option<String>,
    #[arg(long)]
    pub icon: Option<String>,
    #[arg(long)]
    pub color: Option<String>
}

impl PlatformFields {
    /// Applies the given fields in dialog order: text fields, main category, then the rest.
    fn fill(self, form: &mut PlatformForm, index: &CategoryIndex<'_>) {
        if let Some(name) = self.name {
            form.fields.name = name;
        }
        if let Some(url) = self.url {
            form.fields.url = url;
        }
        if let Some(description) = self.description {
            form.fields.description = description;
        }
        if let Some(main) = self.main {
            form.select_main_category(&main, index);
        }
        if let Some(sub) = self.sub {
            if !form.available_subs().contains(&sub) {
                warn!("{} is not a sub category of {}", sub, form.fields.main_category);
            }
            form.select_sub_category(&sub);
        }
        if let Some(icon) = self.icon {
            form.set_icon(&icon);
        }
        if let Some(color) = self.color {
            form.fields.color = color;
        }
    }
}

fn print_platform<S: KeyValueStore>(dashboard: &Dashboard<S>, id: &PlatformId, view: &View) {
    let index = dashboard.category_index();
    if let Some(platform) = dashboard.find_platform(id) {
        println!("{}", render::card(platform, &view.icons, &view.palette, &index));
    }
}

pub async fn run<S: KeyValueStore>(command: PlatformCommand, dashboard: &mut Dashboard<S>, view: &View) -> Result<(), DashboardError> {
    match command {
        PlatformCommand::Add(fields) => {
            let mut form = dashboard.add_form();
            fields.fill(&mut form, &dashboard.category_index());
            let draft = form.submit_add(&dashboard.settings().rules)?;

            let id = dashboard.add_platform(draft).await?;
            print_notifications(dashboard);
            print_platform(dashboard, &id, view);

            if !dashboard.settings().persist_platforms {
                println!("Note: platforms are not persisted, set `persist_platforms = true` to keep them");
            }
        }
        PlatformCommand::Edit { id, fields } => {
            let id = PlatformId(id);
            let mut form = match dashboard.edit_form(&id) {
                Some(form) => form,
                None => {
                    println!("No platform with id {}", id);
                    return Ok(());
                }
            };
            fields.fill(&mut form, &dashboard.category_index());
            let updated = form.submit_edit(&dashboard.settings().rules)?;

            dashboard.update_platform(updated).await?;
            print_notifications(dashboard);
            print_platform(dashboard, &id, view);
        }
        PlatformCommand::Delete { id } => {
            let id = PlatformId(id);
            if !dashboard.delete_platform(&id).await? {
                println!("No platform with id {}", id);
            }
            print_notifications(dashboard);
        }
    }

    Ok(())
}
