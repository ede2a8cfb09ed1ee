use std::collections::HashSet;
use std::sync::Arc;

use log::{error, info};
use validator::Validate;

use crate::api::error;
use crate::modules::directory::model::{random_role, NewDirectoryRecord};
use crate::modules::directory::repository::DirectoryRepository;
use crate::modules::directory::schema::DirectoryRecord;
use crate::modules::session::schema::{Role, Session};

pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch users. Please try again later.";

/// The user directory: an immutable remote snapshot plus a local overlay of
/// additions and deletions, with a filtered, paginated view on top. The
/// overlay never touches the remote source.
pub struct DirectoryService {
    repo: Arc<dyn DirectoryRepository + Send + Sync>,
    remote: Vec<DirectoryRecord>,
    added: Vec<DirectoryRecord>,
    deleted: HashSet<i64>,
    search_term: String,
    city_filter: String,
    filtered: Vec<DirectoryRecord>,
    current_page: usize,
    page_size: usize,
}

impl DirectoryService {
    pub fn with_dependencies(repo: Arc<dyn DirectoryRepository + Send + Sync>) -> Self {
        info!("DirectoryService initialized with dependencies");
        DirectoryService {
            repo,
            remote: Vec::new(),
            added: Vec::new(),
            deleted: HashSet::new(),
            search_term: String::new(),
            city_filter: String::new(),
            filtered: Vec::new(),
            current_page: 1,
            page_size: crate::ENV.page_size,
        }
    }

    /// One-shot load of the remote listing. Each fetched record gets a mock
    /// role. On failure the directory stays empty and a single user-facing
    /// message is surfaced. Reloading discards the local overlay.
    pub async fn load(&mut self) -> Result<(), error::Error> {
        match self.repo.fetch_all().await {
            Ok(users) => {
                self.remote = users
                    .into_iter()
                    .map(|user| DirectoryRecord::from_remote(user, random_role()))
                    .collect();
                self.added.clear();
                self.deleted.clear();
                info!("Loaded {} directory record(s)", self.remote.len());
                self.refresh();
                Ok(())
            }
            Err(e) => {
                error!("Error while retrieving directory data: {:?}", e);
                Err(error::Error::unavailable(FETCH_ERROR_MESSAGE))
            }
        }
    }

    /// Remote snapshot minus local deletions, then local additions, in
    /// insertion order.
    pub fn records(&self) -> Vec<DirectoryRecord> {
        self.remote
            .iter()
            .chain(self.added.iter())
            .filter(|r| !self.deleted.contains(&r.id))
            .cloned()
            .collect()
    }

    /// Case-insensitive substring match on name or email, then exact city
    /// restriction. Every recompute resets the view to page 1.
    fn refresh(&mut self) {
        let term = self.search_term.to_lowercase();
        self.filtered = self
            .records()
            .into_iter()
            .filter(|r| {
                r.name.to_lowercase().contains(&term) || r.email.to_lowercase().contains(&term)
            })
            .filter(|r| self.city_filter.is_empty() || r.city == self.city_filter)
            .collect();
        self.current_page = 1;
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.refresh();
    }

    pub fn set_city_filter(&mut self, city: impl Into<String>) {
        self.city_filter = city.into();
        self.refresh();
    }

    pub fn filtered(&self) -> &[DirectoryRecord] {
        &self.filtered
    }

    pub fn total_pages(&self) -> usize {
        self.filtered.len().div_ceil(self.page_size)
    }

    pub fn set_page(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// The contiguous slice of the filtered view for the current page; pages
    /// past the end are empty.
    pub fn page(&self) -> &[DirectoryRecord] {
        let start = (self.current_page - 1) * self.page_size;
        if start >= self.filtered.len() {
            return &[];
        }
        let end = (start + self.page_size).min(self.filtered.len());
        &self.filtered[start..end]
    }

    /// Distinct cities in first-seen order, for the city filter dropdown.
    pub fn cities(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.records()
            .into_iter()
            .filter(|r| seen.insert(r.city.clone()))
            .map(|r| r.city)
            .collect()
    }

    /// Appends a local-only record with a fresh id and the fixed `viewer`
    /// role. Never synced to the remote listing.
    pub fn add_record(&mut self, input: NewDirectoryRecord) -> Result<DirectoryRecord, error::Error> {
        input.validate().map_err(|e| error::Error::bad_request(e.to_string()))?;

        let record = DirectoryRecord {
            id: self.next_id(),
            name: input.name,
            email: input.email,
            company_name: input.company_name,
            website: input.website,
            city: input.city,
            role: Role::Viewer,
        };
        self.added.push(record.clone());
        self.refresh();
        Ok(record)
    }

    fn next_id(&self) -> i64 {
        self.remote.iter().chain(self.added.iter()).map(|r| r.id).max().unwrap_or(0) + 1
    }

    /// Admin only; anyone else gets `Forbidden` and the directory stays
    /// unchanged. Returns whether a record was actually removed, so deleting
    /// an absent id is `Ok(false)` rather than an error.
    pub fn delete_record(
        &mut self,
        session: Option<&Session>,
        id: i64,
    ) -> Result<bool, error::Error> {
        match session {
            Some(s) if s.role == Role::Admin => {
                let present = self
                    .remote
                    .iter()
                    .chain(self.added.iter())
                    .any(|r| r.id == id && !self.deleted.contains(&r.id));
                if present {
                    self.deleted.insert(id);
                    self.refresh();
                    info!("Directory record {} deleted by {}", id, s.email);
                }
                Ok(present)
            }
            _ => Err(error::Error::forbidden("Only admins can delete directory entries")),
        }
    }
}
