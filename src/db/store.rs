//! In-memory store
//!
//! Every manager operation takes the lock once, which makes each
//! operation atomic with respect to the others.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::{
    Certificate, Experiment, Hackathon, HackathonAdmin, Registration, Team, TeamMember, Template,
    User, UserProfile,
};

/// All tables held by the store
#[derive(Debug, Default)]
pub struct Tables {
    next_id: i64,
    pub users: BTreeMap<i64, User>,
    pub profiles: BTreeMap<i64, UserProfile>,
    pub hackathons: BTreeMap<i64, Hackathon>,
    pub registrations: BTreeMap<i64, Registration>,
    pub templates: BTreeMap<i64, Template>,
    /// (hackathon_id, template_id) pairs
    pub hackathon_templates: BTreeSet<(i64, i64)>,
    pub admins: BTreeMap<i64, HackathonAdmin>,
    pub certificates: BTreeMap<i64, Certificate>,
    pub teams: BTreeMap<i64, Team>,
    pub team_members: BTreeMap<i64, TeamMember>,
    pub experiments: BTreeMap<i64, Experiment>,
}

impl Tables {
    /// Allocate the next row id
    pub fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    /// Find a hackathon by its unique name
    pub fn hackathon_by_name(&self, name: &str) -> Option<&Hackathon> {
        self.hackathons.values().find(|h| h.name == name)
    }

    /// Check if a user administers (or judges) a hackathon
    pub fn is_hackathon_admin(&self, user_id: i64, hackathon_id: i64) -> bool {
        self.admins
            .values()
            .any(|a| a.user_id == user_id && a.hackathon_id == hackathon_id)
    }

    /// Templates attached to a hackathon
    pub fn hackathon_template_list(&self, hackathon_id: i64) -> Vec<Template> {
        self.hackathon_templates
            .range((hackathon_id, i64::MIN)..=(hackathon_id, i64::MAX))
            .filter_map(|(_, template_id)| self.templates.get(template_id).cloned())
            .collect()
    }

    /// Team the user belongs to (approved or pending) in a hackathon
    pub fn team_of_user(&self, hackathon_id: i64, user_id: i64) -> Option<&Team> {
        self.team_members
            .values()
            .filter(|m| m.user_id == user_id)
            .filter_map(|m| self.teams.get(&m.team_id))
            .find(|t| t.hackathon_id == hackathon_id)
    }

    /// Members of a team
    pub fn members_of_team(&self, team_id: i64) -> impl Iterator<Item = &TeamMember> {
        self.team_members.values().filter(move |m| m.team_id == team_id)
    }
}

/// Shared handle to the tables
#[derive(Debug, Clone, Default)]
pub struct Store {
    tables: Arc<RwLock<Tables>>,
}

impl Store {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire shared read access
    pub async fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().await
    }

    /// Acquire exclusive write access
    pub async fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().await
    }
}

/// Slice one page out of a filtered result set, returning the page and the total
pub fn paginate<T>(items: Vec<T>, page: u32, per_page: u32) -> (Vec<T>, i64) {
    let total = items.len() as i64;
    let offset = (page.saturating_sub(1) as usize).saturating_mul(per_page as usize);
    let page_items = items
        .into_iter()
        .skip(offset)
        .take(per_page as usize)
        .collect();
    (page_items, total)
}
