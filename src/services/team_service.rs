//! Team manager
//!
//! A user belongs to at most one team per hackathon and must hold an
//! approved registration to create or join one. Only the leader may change
//! a team, its members or its template.

use async_trait::async_trait;

use crate::{
    constants::team_member_status,
    db::{Store, Tables},
    error::{AppError, AppResult},
    handlers::teams::request::{CreateTeamRequest, UpdateMemberRequest, UpdateTeamRequest},
    models::{Team, TeamMember},
    utils::{now_utc, sanitize_string},
};

/// Teams, members, leaders and team templates
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TeamManager: Send + Sync {
    /// Find a team of the hackathon by id, or else by name
    async fn get_team(
        &self,
        hackathon_id: i64,
        id: Option<i64>,
        name: Option<String>,
    ) -> AppResult<Option<Team>>;

    async fn list_teams(&self, hackathon_id: i64, name: Option<String>) -> AppResult<Vec<Team>>;

    async fn list_user_teams(&self, user_id: i64) -> AppResult<Vec<Team>>;

    async fn create_team(
        &self,
        user_id: i64,
        hackathon_id: i64,
        req: CreateTeamRequest,
    ) -> AppResult<Team>;

    async fn update_team(
        &self,
        user_id: i64,
        hackathon_id: i64,
        req: UpdateTeamRequest,
    ) -> AppResult<Team>;

    /// Dissolve a team and drop its members
    async fn dismiss_team(&self, user_id: i64, hackathon_id: i64, team_id: i64) -> AppResult<()>;

    /// Ask to join a team; the membership starts pending
    async fn join_team(&self, user_id: i64, hackathon_id: i64, team_id: i64)
    -> AppResult<TeamMember>;

    async fn update_member_status(
        &self,
        user_id: i64,
        hackathon_id: i64,
        req: UpdateMemberRequest,
    ) -> AppResult<TeamMember>;

    /// Leave a team, or remove a member as its leader
    async fn remove_member(
        &self,
        user_id: i64,
        hackathon_id: i64,
        team_id: i64,
        member_id: i64,
    ) -> AppResult<()>;

    async fn list_members(&self, team_id: i64) -> AppResult<Vec<TeamMember>>;

    /// Hand leadership to an approved member
    async fn promote_leader(
        &self,
        user_id: i64,
        hackathon_id: i64,
        team_id: i64,
        new_leader_id: i64,
    ) -> AppResult<Team>;

    async fn select_template(
        &self,
        user_id: i64,
        hackathon_id: i64,
        team_id: i64,
        template_id: i64,
    ) -> AppResult<Team>;

    async fn unselect_template(
        &self,
        user_id: i64,
        hackathon_id: i64,
        team_id: i64,
    ) -> AppResult<Team>;
}

/// In-memory team manager
pub struct TeamService {
    store: Store,
}

impl TeamService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

/// Team of the hackathon, or 404
fn team_in(tables: &Tables, hackathon_id: i64, team_id: i64) -> AppResult<&Team> {
    tables
        .teams
        .get(&team_id)
        .filter(|t| t.hackathon_id == hackathon_id)
        .ok_or_else(|| AppError::NotFound(format!("Team {team_id}")))
}

/// Team of the hackathon led by `user_id`, or 404 / 403
fn led_team<'a>(
    tables: &'a mut Tables,
    user_id: i64,
    hackathon_id: i64,
    team_id: i64,
) -> AppResult<&'a mut Team> {
    let team = tables
        .teams
        .get_mut(&team_id)
        .filter(|t| t.hackathon_id == hackathon_id)
        .ok_or_else(|| AppError::NotFound(format!("Team {team_id}")))?;

    if team.leader_id != user_id {
        tracing::debug!(user_id, team_id, "Rejected team change by non-leader");
        return Err(AppError::Forbidden(
            "Only the team leader can do this".to_string(),
        ));
    }
    Ok(team)
}

/// The user must be an approved participant without a team
fn ensure_can_join(tables: &Tables, user_id: i64, hackathon_id: i64) -> AppResult<()> {
    let approved = tables
        .registrations
        .values()
        .any(|r| r.user_id == user_id && r.hackathon_id == hackathon_id && r.is_approved());
    if !approved {
        return Err(AppError::Forbidden(
            "An approved registration is required".to_string(),
        ));
    }

    if tables.team_of_user(hackathon_id, user_id).is_some() {
        return Err(AppError::Conflict(
            "User already belongs to a team in this hackathon".to_string(),
        ));
    }
    Ok(())
}

#[async_trait]
impl TeamManager for TeamService {
    async fn get_team(
        &self,
        hackathon_id: i64,
        id: Option<i64>,
        name: Option<String>,
    ) -> AppResult<Option<Team>> {
        let tables = self.store.read().await;
        let mut teams = tables
            .teams
            .values()
            .filter(|t| t.hackathon_id == hackathon_id);

        let team = match (id, name) {
            (Some(id), _) => teams.find(|t| t.id == id),
            (None, Some(name)) => teams.find(|t| t.name == name),
            (None, None) => None,
        };
        Ok(team.cloned())
    }

    async fn list_teams(&self, hackathon_id: i64, name: Option<String>) -> AppResult<Vec<Team>> {
        Ok(self
            .store
            .read()
            .await
            .teams
            .values()
            .filter(|t| t.hackathon_id == hackathon_id)
            .filter(|t| name.as_deref().is_none_or(|n| t.name.contains(n)))
            .cloned()
            .collect())
    }

    async fn list_user_teams(&self, user_id: i64) -> AppResult<Vec<Team>> {
        let tables = self.store.read().await;
        Ok(tables
            .team_members
            .values()
            .filter(|m| m.user_id == user_id)
            .filter_map(|m| tables.teams.get(&m.team_id).cloned())
            .collect())
    }

    async fn create_team(
        &self,
        user_id: i64,
        hackathon_id: i64,
        req: CreateTeamRequest,
    ) -> AppResult<Team> {
        let name = sanitize_string(&req.name);
        if name.is_empty() {
            return Err(AppError::Validation("Team name cannot be empty".to_string()));
        }

        let mut tables = self.store.write().await;
        ensure_can_join(&tables, user_id, hackathon_id)?;
        if tables
            .teams
            .values()
            .any(|t| t.hackathon_id == hackathon_id && t.name == name)
        {
            return Err(AppError::AlreadyExists(format!("Team {name}")));
        }

        let now = now_utc();
        let team = Team {
            id: tables.next_id(),
            hackathon_id,
            name,
            description: req.description,
            logo: req.logo,
            leader_id: user_id,
            template_id: None,
            create_time: now,
            update_time: now,
        };
        let leader = TeamMember {
            id: tables.next_id(),
            team_id: team.id,
            user_id,
            status: team_member_status::APPROVED,
            join_time: now,
        };
        tables.team_members.insert(leader.id, leader);
        tables.teams.insert(team.id, team.clone());

        tracing::info!(team_id = team.id, hackathon_id, leader_id = user_id, "Team created");
        Ok(team)
    }

    async fn update_team(
        &self,
        user_id: i64,
        hackathon_id: i64,
        req: UpdateTeamRequest,
    ) -> AppResult<Team> {
        let mut tables = self.store.write().await;

        let name = req.name.as_deref().map(sanitize_string);
        if let Some(name) = &name {
            if name.is_empty() {
                return Err(AppError::Validation("Team name cannot be empty".to_string()));
            }
            if tables.teams.values().any(|t| {
                t.hackathon_id == hackathon_id && &t.name == name && t.id != req.id
            }) {
                return Err(AppError::AlreadyExists(format!("Team {name}")));
            }
        }

        let team = led_team(&mut tables, user_id, hackathon_id, req.id)?;
        if let Some(name) = name {
            team.name = name;
        }
        if req.description.is_some() {
            team.description = req.description;
        }
        if req.logo.is_some() {
            team.logo = req.logo;
        }
        team.update_time = now_utc();

        Ok(team.clone())
    }

    async fn dismiss_team(&self, user_id: i64, hackathon_id: i64, team_id: i64) -> AppResult<()> {
        let mut tables = self.store.write().await;
        led_team(&mut tables, user_id, hackathon_id, team_id)?;

        tables.teams.remove(&team_id);
        tables.team_members.retain(|_, m| m.team_id != team_id);

        tracing::info!(team_id, hackathon_id, "Team dismissed");
        Ok(())
    }

    async fn join_team(
        &self,
        user_id: i64,
        hackathon_id: i64,
        team_id: i64,
    ) -> AppResult<TeamMember> {
        let mut tables = self.store.write().await;
        team_in(&tables, hackathon_id, team_id)?;
        ensure_can_join(&tables, user_id, hackathon_id)?;

        let member = TeamMember {
            id: tables.next_id(),
            team_id,
            user_id,
            status: team_member_status::PENDING,
            join_time: now_utc(),
        };
        tables.team_members.insert(member.id, member.clone());

        tracing::info!(team_id, user_id, "Join request recorded");
        Ok(member)
    }

    async fn update_member_status(
        &self,
        user_id: i64,
        hackathon_id: i64,
        req: UpdateMemberRequest,
    ) -> AppResult<TeamMember> {
        let mut tables = self.store.write().await;
        led_team(&mut tables, user_id, hackathon_id, req.team_id)?;

        let member = tables
            .team_members
            .values_mut()
            .find(|m| m.team_id == req.team_id && m.user_id == req.user_id)
            .ok_or_else(|| AppError::NotFound(format!("Member {}", req.user_id)))?;
        member.status = req.status;

        Ok(member.clone())
    }

    async fn remove_member(
        &self,
        user_id: i64,
        hackathon_id: i64,
        team_id: i64,
        member_id: i64,
    ) -> AppResult<()> {
        let mut tables = self.store.write().await;
        let leader_id = team_in(&tables, hackathon_id, team_id)?.leader_id;

        if user_id != member_id && user_id != leader_id {
            return Err(AppError::Forbidden(
                "Only the team leader can remove other members".to_string(),
            ));
        }
        if member_id == leader_id {
            return Err(AppError::Conflict(
                "The leader cannot leave; promote another member or dismiss the team".to_string(),
            ));
        }

        let key = tables
            .members_of_team(team_id)
            .find(|m| m.user_id == member_id)
            .map(|m| m.id)
            .ok_or_else(|| AppError::NotFound(format!("Member {member_id}")))?;
        tables.team_members.remove(&key);

        tracing::info!(team_id, member_id, "Member removed");
        Ok(())
    }

    async fn list_members(&self, team_id: i64) -> AppResult<Vec<TeamMember>> {
        let tables = self.store.read().await;
        if !tables.teams.contains_key(&team_id) {
            return Err(AppError::NotFound(format!("Team {team_id}")));
        }
        Ok(tables.members_of_team(team_id).cloned().collect())
    }

    async fn promote_leader(
        &self,
        user_id: i64,
        hackathon_id: i64,
        team_id: i64,
        new_leader_id: i64,
    ) -> AppResult<Team> {
        let mut tables = self.store.write().await;
        let approved = tables.members_of_team(team_id).any(|m| {
            m.user_id == new_leader_id && m.status == team_member_status::APPROVED
        });

        let team = led_team(&mut tables, user_id, hackathon_id, team_id)?;
        if !approved {
            return Err(AppError::Conflict(
                "The new leader must be an approved member".to_string(),
            ));
        }
        team.leader_id = new_leader_id;
        team.update_time = now_utc();

        tracing::info!(team_id, new_leader_id, "Team leader changed");
        Ok(team.clone())
    }

    async fn select_template(
        &self,
        user_id: i64,
        hackathon_id: i64,
        team_id: i64,
        template_id: i64,
    ) -> AppResult<Team> {
        let mut tables = self.store.write().await;
        let offered = tables.hackathon_templates.contains(&(hackathon_id, template_id));

        let team = led_team(&mut tables, user_id, hackathon_id, team_id)?;
        if !offered {
            return Err(AppError::NotFound(format!(
                "Template {template_id} in hackathon"
            )));
        }
        team.template_id = Some(template_id);
        team.update_time = now_utc();

        Ok(team.clone())
    }

    async fn unselect_template(
        &self,
        user_id: i64,
        hackathon_id: i64,
        team_id: i64,
    ) -> AppResult<Team> {
        let mut tables = self.store.write().await;
        let team = led_team(&mut tables, user_id, hackathon_id, team_id)?;
        team.template_id = None;
        team.update_time = now_utc();

        Ok(team.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        constants::registration_status::AUDIT_PASSED,
        test_utils::{seed_hackathon, seed_registration, seed_team, seed_template},
    };

    fn create(name: &str) -> CreateTeamRequest {
        CreateTeamRequest {
            name: name.to_string(),
            description: None,
            logo: None,
        }
    }

    #[tokio::test]
    async fn test_create_requires_approved_registration() {
        let store = Store::new();
        let hackathon = seed_hackathon(&store, "alpha", 1).await;
        let service = TeamService::new(store.clone());

        let err = service
            .create_team(5, hackathon.id, create("red"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));

        seed_registration(&store, hackathon.id, 5, AUDIT_PASSED).await;
        let team = service.create_team(5, hackathon.id, create("red")).await.unwrap();
        assert_eq!(team.leader_id, 5);
        assert_eq!(service.list_members(team.id).await.unwrap().len(), 1);

        let err = service
            .create_team(5, hackathon.id, create("blue"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_only_leader_updates() {
        let store = Store::new();
        let hackathon = seed_hackathon(&store, "alpha", 1).await;
        let team = seed_team(&store, hackathon.id, 5, "red").await;
        let service = TeamService::new(store);

        let req = UpdateTeamRequest {
            id: team.id,
            name: Some("crimson".to_string()),
            description: None,
            logo: None,
        };
        let err = service
            .update_team(6, hackathon.id, req.clone())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));

        let updated = service.update_team(5, hackathon.id, req).await.unwrap();
        assert_eq!(updated.name, "crimson");
    }

    #[tokio::test]
    async fn test_join_approve_promote_leave() {
        let store = Store::new();
        let hackathon = seed_hackathon(&store, "alpha", 1).await;
        let team = seed_team(&store, hackathon.id, 5, "red").await;
        seed_registration(&store, hackathon.id, 6, AUDIT_PASSED).await;
        let service = TeamService::new(store);

        let member = service.join_team(6, hackathon.id, team.id).await.unwrap();
        assert_eq!(member.status, team_member_status::PENDING);

        let err = service
            .promote_leader(5, hackathon.id, team.id, 6)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));

        service
            .update_member_status(
                5,
                hackathon.id,
                UpdateMemberRequest {
                    team_id: team.id,
                    user_id: 6,
                    status: team_member_status::APPROVED,
                },
            )
            .await
            .unwrap();
        let team = service
            .promote_leader(5, hackathon.id, team.id, 6)
            .await
            .unwrap();
        assert_eq!(team.leader_id, 6);

        service.remove_member(5, hackathon.id, team.id, 5).await.unwrap();
        assert_eq!(service.list_members(team.id).await.unwrap().len(), 1);
        assert!(service.list_user_teams(5).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_leader_cannot_leave() {
        let store = Store::new();
        let hackathon = seed_hackathon(&store, "alpha", 1).await;
        let team = seed_team(&store, hackathon.id, 5, "red").await;
        let service = TeamService::new(store);

        let err = service
            .remove_member(5, hackathon.id, team.id, 5)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_select_template_must_be_offered() {
        let store = Store::new();
        let hackathon = seed_hackathon(&store, "alpha", 1).await;
        let team = seed_team(&store, hackathon.id, 5, "red").await;
        let offered = seed_template(&store, "ubuntu", Some(hackathon.id)).await;
        let other = seed_template(&store, "windows", None).await;
        let service = TeamService::new(store);

        let err = service
            .select_template(5, hackathon.id, team.id, other.id)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let team = service
            .select_template(5, hackathon.id, team.id, offered.id)
            .await
            .unwrap();
        assert_eq!(team.template_id, Some(offered.id));

        let team = service
            .unselect_template(5, hackathon.id, team.id)
            .await
            .unwrap();
        assert_eq!(team.template_id, None);
    }

    #[tokio::test]
    async fn test_get_team_by_id_or_name() {
        let store = Store::new();
        let hackathon = seed_hackathon(&store, "alpha", 1).await;
        let team = seed_team(&store, hackathon.id, 5, "red").await;
        let service = TeamService::new(store);

        let by_name = service
            .get_team(hackathon.id, None, Some("red".to_string()))
            .await
            .unwrap();
        assert_eq!(by_name.map(|t| t.id), Some(team.id));
        assert!(service
            .get_team(hackathon.id + 100, Some(team.id), None)
            .await
            .unwrap()
            .is_none());
        assert_eq!(service.list_teams(hackathon.id, None).await.unwrap().len(), 1);
    }
}
