use std::collections::BTreeMap;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::features::svgs::dtos::SvgRecordDto;
use crate::modules::gallery::api_client::SvgApiClient;

/// Records sharing one calendar day of upload, newest first within the group.
#[derive(Debug)]
pub struct DateGroup {
    pub date: NaiveDate,
    pub svgs: Vec<SvgRecordDto>,
}

/// In-memory mirror of the record list plus the flags the gallery view
/// renders from. Always a disposable copy: rebuilt from the server on load,
/// after a search and after every mutation.
#[derive(Debug, Default)]
pub struct GalleryState {
    svgs: Vec<SvgRecordDto>,
    search_query: String,
    selected: Option<Uuid>,
    loading: bool,
    error: Option<String>,
    pending_delete: Option<Uuid>,
}

impl GalleryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[SvgRecordDto] {
        &self.svgs
    }

    pub fn query(&self) -> &str {
        &self.search_query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn pending_delete(&self) -> Option<Uuid> {
        self.pending_delete
    }

    pub fn select(&mut self, id: Uuid) {
        self.selected = Some(id);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// The record open in the detail view, if it is still in the list
    pub fn selected(&self) -> Option<&SvgRecordDto> {
        let id = self.selected?;
        self.svgs.iter().find(|s| s.id == id)
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn load_succeeded(&mut self, records: Vec<SvgRecordDto>) {
        self.svgs = records;
        self.loading = false;
    }

    pub fn load_failed(&mut self, message: String) {
        self.error = Some(message);
        self.loading = false;
    }

    pub fn begin_delete(&mut self, id: Uuid) {
        self.pending_delete = Some(id);
    }

    /// Remove the record locally and drop a matching selection. Only called
    /// once the server confirmed the delete.
    pub fn delete_succeeded(&mut self, id: Uuid) {
        self.svgs.retain(|s| s.id != id);
        if self.selected == Some(id) {
            self.selected = None;
        }
        self.pending_delete = None;
    }

    /// The list stays untouched; the item remains visible with an error
    /// alongside it. Retrying is always an explicit user action.
    pub fn delete_failed(&mut self, message: String) {
        self.error = Some(message);
        self.pending_delete = None;
    }

    /// Group records by the calendar date (UTC) of upload, newest date
    /// first, newest record first within each group.
    pub fn date_groups(&self) -> Vec<DateGroup> {
        let mut groups: BTreeMap<NaiveDate, Vec<SvgRecordDto>> = BTreeMap::new();
        for svg in &self.svgs {
            groups
                .entry(svg.created_at.date_naive())
                .or_default()
                .push(svg.clone());
        }

        groups
            .into_iter()
            .rev()
            .map(|(date, mut svgs)| {
                svgs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                DateGroup { date, svgs }
            })
            .collect()
    }
}

/// Relative label for a date group header
pub fn group_label(date: NaiveDate, today: NaiveDate) -> String {
    let days = (today - date).num_days();
    match days {
        i64::MIN..=0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        2..=7 => format!("{} days ago", days),
        8..=30 => format!("{} weeks ago", (days + 6) / 7),
        31..=365 => format!("{} months ago", (days + 29) / 30),
        _ => date.format("%B %Y").to_string(),
    }
}

/// Human-readable byte count for the detail view
pub fn format_file_size(bytes: i64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

/// Gallery driver: runs the view-model transitions against the API client.
pub struct Gallery {
    client: SvgApiClient,
    pub state: GalleryState,
}

impl Gallery {
    pub fn new(client: SvgApiClient) -> Self {
        Self {
            client,
            state: GalleryState::new(),
        }
    }

    /// Fetch everything and replace the list
    pub async fn load(&mut self) {
        self.state.begin_load();
        match self.client.fetch_all().await {
            Ok(records) => self.state.load_succeeded(records),
            Err(e) => self.state.load_failed(e.to_string()),
        }
    }

    /// Non-empty query fetches the filtered list; an empty query falls back
    /// to re-fetching everything.
    pub async fn submit_search(&mut self) {
        let query = self.state.query().trim().to_string();
        if query.is_empty() {
            self.load().await;
            return;
        }

        self.state.begin_load();
        match self.client.search(&query).await {
            Ok(records) => self.state.load_succeeded(records),
            Err(e) => self.state.load_failed(e.to_string()),
        }
    }

    /// Delete after user confirmation. The record only disappears from the
    /// local list once the server reports success.
    pub async fn confirm_delete(&mut self, id: Uuid) {
        self.state.begin_delete(id);
        match self.client.delete(id).await {
            Ok(()) => self.state.delete_succeeded(id),
            Err(_) => self.state.delete_failed("Failed to delete SVG".to_string()),
        }
    }
}
