//! FFI use-case API for the Flutter people browser.
//!
//! # Responsibility
//! - Expose page mount/render and location transitions to Dart via FRB.
//! - Flatten core view models into plain, string-friendly envelopes.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Location strings are `path?query`, exactly what the address bar shows.
//! - The record file is read once per mount.

use peoplebook_core::view::transition;
use peoplebook_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, AppView,
    JsonFilePeopleSource, LinkEmphasis, Location, PageBody, ParentCell, PeoplePageService,
    PeoplePageView, PersonLink, SearchParams, Sex, SortField, SortIndicator,
};
use log::{info, warn};
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, OnceLock};

const PEOPLE_FILE_NAME: &str = "people.json";
const PEOPLE_PATH_ENV: &str = "PEOPLEBOOK_PEOPLE_PATH";

static PEOPLE_PATH: OnceLock<PathBuf> = OnceLock::new();
static PAGE: Mutex<Option<PeoplePageService<JsonFilePeopleSource>>> = Mutex::new(None);

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking. Never throws.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes core file logging once per process.
///
/// Returns an empty string on success and the error message otherwise.
/// Repeating the active `level + log_dir` is a no-op.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Display condition of the people page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStatus {
    Loading,
    LoadError,
    NoPeopleOnServer,
    NoMatchingPeople,
    Table,
}

/// Top-level route outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKind {
    Home,
    Redirect,
    People,
    NotFound,
}

/// Link or text for a person reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonRef {
    pub label: String,
    /// Target location; `None` renders plain text.
    pub href: Option<String>,
    pub female: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRowItem {
    pub person: PersonRef,
    pub sex: String,
    pub born: i32,
    pub died: i32,
    pub mother: PersonRef,
    pub father: PersonRef,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnItem {
    pub field: String,
    pub label: String,
    /// `none|asc|desc`.
    pub indicator: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleItem {
    pub label: String,
    pub active: bool,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterPanelItem {
    pub sex: Vec<ToggleItem>,
    pub query: String,
    pub centuries: Vec<ToggleItem>,
    pub all_centuries_href: String,
    pub reset_href: String,
}

/// Render envelope for one location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeoplePageResponse {
    pub route: RouteKind,
    /// Set for `RouteKind::Redirect`.
    pub redirect_to: Option<String>,
    /// `None` for routes that do not render the people page.
    pub status: Option<PageStatus>,
    /// User-facing message for message-only statuses.
    pub message: Option<String>,
    pub columns: Vec<ColumnItem>,
    pub rows: Vec<TableRowItem>,
    /// `None` while the filter panel is hidden.
    pub filters: Option<FilterPanelItem>,
}

/// Mounts the people page and performs its single record load.
///
/// # FFI contract
/// - Sync call; reads the people file once per mount.
/// - Repeated calls while mounted keep the existing session.
/// - Returns empty string on success, diagnostics message otherwise.
#[flutter_rust_bridge::frb(sync)]
pub fn people_page_mount() -> String {
    let mut page = lock_page();
    if page.as_ref().is_some_and(|service| !service.session().is_torn_down()) {
        return String::new();
    }

    let path = resolve_people_path();
    let mut service = PeoplePageService::new(JsonFilePeopleSource::new(path));
    service.mount();
    let message = match service.session().people() {
        Some(people) => {
            info!("event=page_mount module=ffi status=ok count={}", people.len());
            String::new()
        }
        None => {
            warn!("event=page_mount module=ffi status=error");
            "people_page_mount: load failed".to_string()
        }
    };
    *page = Some(service);
    message
}

/// Tears down the mounted page. Safe to call when nothing is mounted.
#[flutter_rust_bridge::frb(sync)]
pub fn people_page_unmount() {
    let mut page = lock_page();
    if let Some(service) = page.as_mut() {
        service.unmount();
    }
    *page = None;
}

/// Renders `location` against the mounted page.
///
/// Without a mount the page reports `Loading`.
#[flutter_rust_bridge::frb(sync)]
pub fn people_page_view(location: String) -> PeoplePageResponse {
    let location = Location::parse(location.trim());
    let page = lock_page();
    let view = match page.as_ref() {
        Some(service) => service.view(&location),
        None => peoplebook_core::render_location(
            &peoplebook_core::LoadState::Idle,
            &location,
        ),
    };
    to_response(view)
}

/// Returns `location` with the text filter replaced.
#[flutter_rust_bridge::frb(sync)]
pub fn location_set_query(location: String, query: String) -> String {
    map_params(&location, |params| transition::set_query(params, &query))
}

/// Returns `location` with the sex filter set (`m`, `f`) or cleared (anything else).
#[flutter_rust_bridge::frb(sync)]
pub fn location_set_sex(location: String, sex: String) -> String {
    let sex = Sex::parse(sex.trim());
    map_params(&location, |params| transition::set_sex(params, sex))
}

#[flutter_rust_bridge::frb(sync)]
pub fn location_toggle_century(location: String, century: i32) -> String {
    map_params(&location, |params| transition::toggle_century(params, century))
}

#[flutter_rust_bridge::frb(sync)]
pub fn location_clear_centuries(location: String) -> String {
    map_params(&location, transition::clear_centuries)
}

/// Advances the column sort cycle. Unknown fields leave `location` unchanged.
#[flutter_rust_bridge::frb(sync)]
pub fn location_sort_by(location: String, field: String) -> String {
    match SortField::parse(field.trim()) {
        Some(field) => map_params(&location, |params| transition::sort_by(params, field)),
        None => Location::parse(location.trim()).to_string(),
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn location_reset_filters(location: String) -> String {
    map_params(&location, transition::reset_filters)
}

fn map_params(location: &str, f: impl FnOnce(&SearchParams) -> SearchParams) -> String {
    let location = Location::parse(location.trim());
    let params = f(&location.params);
    location.with_params(params).to_string()
}

fn lock_page() -> MutexGuard<'static, Option<PeoplePageService<JsonFilePeopleSource>>> {
    PAGE.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn resolve_people_path() -> PathBuf {
    PEOPLE_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var(PEOPLE_PATH_ENV) {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(PEOPLE_FILE_NAME)
        })
        .clone()
}

fn to_response(view: AppView) -> PeoplePageResponse {
    match view {
        AppView::Home => route_only(RouteKind::Home, None),
        AppView::Redirect(target) => route_only(RouteKind::Redirect, Some(target.to_string())),
        AppView::NotFound => route_only(RouteKind::NotFound, None),
        AppView::People(page) => people_response(page),
    }
}

fn route_only(route: RouteKind, redirect_to: Option<String>) -> PeoplePageResponse {
    PeoplePageResponse {
        route,
        redirect_to,
        status: None,
        message: None,
        columns: Vec::new(),
        rows: Vec::new(),
        filters: None,
    }
}

fn people_response(page: PeoplePageView) -> PeoplePageResponse {
    let message = page.body.message().map(str::to_string);
    let filters = page.filters.map(|panel| FilterPanelItem {
        sex: panel
            .sex_options
            .into_iter()
            .map(|option| ToggleItem {
                label: option.label.to_string(),
                active: option.active,
                href: option.activate.to_string(),
            })
            .collect(),
        query: panel.query,
        centuries: panel
            .centuries
            .into_iter()
            .map(|option| ToggleItem {
                label: option.century.to_string(),
                active: option.selected,
                href: option.toggle.to_string(),
            })
            .collect(),
        all_centuries_href: panel.all_centuries.to_string(),
        reset_href: panel.reset.to_string(),
    });

    let (status, columns, rows) = match page.body {
        PageBody::Loading => (PageStatus::Loading, Vec::new(), Vec::new()),
        PageBody::LoadError => (PageStatus::LoadError, Vec::new(), Vec::new()),
        PageBody::NoPeopleOnServer => (PageStatus::NoPeopleOnServer, Vec::new(), Vec::new()),
        PageBody::NoMatchingPeople => (PageStatus::NoMatchingPeople, Vec::new(), Vec::new()),
        PageBody::Table(table) => {
            let columns = table
                .columns
                .into_iter()
                .map(|column| ColumnItem {
                    field: column.field.as_str().to_string(),
                    label: column.label.to_string(),
                    indicator: indicator_label(column.indicator).to_string(),
                    href: column.activate.to_string(),
                })
                .collect();
            let rows = table
                .rows
                .into_iter()
                .map(|row| TableRowItem {
                    person: link_ref(row.person),
                    sex: row.sex.as_str().to_string(),
                    born: row.born,
                    died: row.died,
                    mother: parent_ref(row.mother),
                    father: parent_ref(row.father),
                    selected: row.selected,
                })
                .collect();
            (PageStatus::Table, columns, rows)
        }
    };

    PeoplePageResponse {
        route: RouteKind::People,
        redirect_to: None,
        status: Some(status),
        message,
        columns,
        rows,
        filters,
    }
}

fn link_ref(link: PersonLink) -> PersonRef {
    PersonRef {
        label: link.name,
        href: Some(link.path),
        female: link.emphasis == LinkEmphasis::Female,
    }
}

fn parent_ref(cell: ParentCell) -> PersonRef {
    match cell {
        ParentCell::Missing => PersonRef {
            label: "-".to_string(),
            href: None,
            female: false,
        },
        ParentCell::Plain(name) => PersonRef {
            label: name,
            href: None,
            female: false,
        },
        ParentCell::Link(link) => link_ref(link),
    }
}

fn indicator_label(indicator: SortIndicator) -> &'static str {
    match indicator {
        SortIndicator::Unsorted => "none",
        SortIndicator::Ascending => "asc",
        SortIndicator::Descending => "desc",
    }
}
