//! Notes, projects, workbench and introduction pages.

use axum::{
    extract::{Query, State},
    response::Html,
};
use serde::Serialize;

use crate::catalog::NOTE_CATEGORIES;
use crate::errors::AppError;
use crate::filter::{FilterQuery, ListFilter};
use crate::metadata::{self, StaticPage};
use crate::models::{Activity, Note, Project, ProjectStatus, WipItem};
use crate::AppState;

use super::{render_page, PaletteChoice};

#[derive(Serialize)]
struct NotesPage<'a> {
    notes: Vec<&'a Note>,
    total: usize,
    categories: &'static [&'static str],
    tags: Vec<String>,
    filter: &'a ListFilter,
    no_results: bool,
}

#[derive(Serialize)]
struct ProjectsPage<'a> {
    projects: Vec<&'a Project>,
    statuses: Vec<&'static str>,
    tags: Vec<String>,
    filter: &'a ListFilter,
    no_results: bool,
}

#[derive(Serialize)]
struct WorkbenchPage<'a> {
    wip_items: &'a [WipItem],
    activity: &'a [Activity],
}

#[derive(Serialize)]
struct Feature {
    title: &'static str,
    description: &'static str,
}

#[derive(Serialize)]
struct IntroductionPage {
    features: [Feature; 6],
}

const fn feature(title: &'static str, description: &'static str) -> Feature {
    Feature { title, description }
}

/// GET /notes
pub async fn notes(
    State(state): State<AppState>,
    palette: PaletteChoice,
    Query(query): Query<FilterQuery>,
) -> Result<Html<String>, AppError> {
    let filter = ListFilter::from(query);
    let filtered = filter.apply(state.catalog.notes());

    let page = NotesPage {
        no_results: filtered.is_empty(),
        total: filtered.total,
        notes: filtered.items,
        categories: &NOTE_CATEGORIES,
        tags: state.catalog.note_tags(),
        filter: &filter,
    };

    let meta = metadata::for_page(StaticPage::Notes, &state.config.base_url)?;
    render_page("notes.html", &meta, "notes", palette, page)
}

/// GET /projects
pub async fn projects(
    State(state): State<AppState>,
    palette: PaletteChoice,
    Query(query): Query<FilterQuery>,
) -> Result<Html<String>, AppError> {
    let filter = ListFilter::from(query);
    let filtered = filter.apply(state.catalog.projects());

    let page = ProjectsPage {
        no_results: filtered.is_empty(),
        projects: filtered.items,
        statuses: ProjectStatus::ALL.iter().map(ProjectStatus::as_str).collect(),
        tags: state.catalog.project_tags(),
        filter: &filter,
    };

    let meta = metadata::for_page(StaticPage::Projects, &state.config.base_url)?;
    render_page("projects.html", &meta, "projects", palette, page)
}

/// GET /workbench
pub async fn workbench(
    State(state): State<AppState>,
    palette: PaletteChoice,
) -> Result<Html<String>, AppError> {
    let page = WorkbenchPage {
        wip_items: state.catalog.wip_items(),
        activity: state.catalog.recent_activity(),
    };

    let meta = metadata::for_page(StaticPage::Workbench, &state.config.base_url)?;
    render_page("workbench.html", &meta, "workbench", palette, page)
}

/// GET /introduction - static overview of the site.
pub async fn introduction(
    State(state): State<AppState>,
    palette: PaletteChoice,
) -> Result<Html<String>, AppError> {
    let page = IntroductionPage {
        features: [
            feature(
                "Open Source Projects",
                "Every project is available on GitHub for learning and collaboration. Transparent development process from start to finish.",
            ),
            feature(
                "Developer Workbench",
                "A dedicated space for ongoing experiments and prototypes. Watch ideas evolve from concept to implementation.",
            ),
            feature(
                "Lab Notes",
                "Detailed documentation of learning journeys, technical insights, and development patterns discovered along the way.",
            ),
            feature(
                "Modern Tech Stack",
                "Built with Rust on the server and plain HTML and CSS in the browser for fast, lightweight pages.",
            ),
            feature(
                "AI Integration",
                "Exploring the intersection of AI and web development with practical implementations and real-world use cases.",
            ),
            feature(
                "Electronics",
                "Arduino, Raspberry Pi and ESP32 builds alongside the components used to make them, shipped from Sydney.",
            ),
        ],
    };

    let meta = metadata::for_page(StaticPage::Introduction, &state.config.base_url)?;
    render_page("introduction.html", &meta, "introduction", palette, page)
}
