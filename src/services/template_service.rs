//! Template manager

use async_trait::async_trait;
use validator::Validate;

use crate::{
    db::{paginate, Store, Tables},
    error::{AppError, AppResult},
    handlers::templates::request::{CreateTemplateRequest, UpdateTemplateRequest},
    models::{Template, UploadedFile},
    utils::now_utc,
};

/// Authority under which a template is changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateScope {
    /// The user who created the template
    Creator(i64),
    /// An administrator of a hackathon offering the template
    Hackathon(i64),
}

/// Environment templates and their association with hackathons
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TemplateManager: Send + Sync {
    async fn get_template(&self, id: i64) -> AppResult<Option<Template>>;

    async fn list_templates(
        &self,
        name: Option<String>,
        provider: Option<i32>,
        page: u32,
        per_page: u32,
    ) -> AppResult<(Vec<Template>, i64)>;

    /// Create a template, attaching it to `hackathon_id` when given
    async fn create_template(
        &self,
        creator_id: i64,
        hackathon_id: Option<i64>,
        req: CreateTemplateRequest,
    ) -> AppResult<Template>;

    /// Create a template from an uploaded JSON definition
    async fn create_template_from_file(
        &self,
        creator_id: i64,
        file: UploadedFile,
    ) -> AppResult<Template>;

    async fn update_template(
        &self,
        scope: TemplateScope,
        req: UpdateTemplateRequest,
    ) -> AppResult<Template>;

    /// Delete a template that no running experiment uses
    async fn delete_template(&self, scope: TemplateScope, id: i64) -> AppResult<()>;

    async fn get_templates_by_hackathon(&self, hackathon_id: i64) -> AppResult<Vec<Template>>;

    async fn add_template_to_hackathon(
        &self,
        hackathon_id: i64,
        template_id: i64,
    ) -> AppResult<Template>;

    async fn remove_template_from_hackathon(
        &self,
        hackathon_id: i64,
        template_id: i64,
    ) -> AppResult<()>;

    /// Templates the user may start experiments from: the team's selection
    /// if there is one, else every template of the hackathon
    async fn get_user_templates(&self, user_id: i64, hackathon_id: i64)
    -> AppResult<Vec<Template>>;
}

/// In-memory template manager
pub struct TemplateService {
    store: Store,
}

impl TemplateService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Check that `scope` may change template `id`
    fn authorize(tables: &Tables, scope: TemplateScope, id: i64) -> AppResult<()> {
        let template = tables
            .templates
            .get(&id)
            .ok_or_else(|| AppError::NotFound(format!("Template {id}")))?;

        match scope {
            TemplateScope::Creator(user_id) if template.creator_id != user_id => Err(
                AppError::Forbidden("Only the template creator can change it".to_string()),
            ),
            TemplateScope::Hackathon(hackathon_id)
                if !tables.hackathon_templates.contains(&(hackathon_id, id)) =>
            {
                Err(AppError::NotFound(format!("Template {id}")))
            }
            _ => Ok(()),
        }
    }

    fn insert(tables: &mut Tables, creator_id: i64, req: CreateTemplateRequest) -> AppResult<Template> {
        if tables.templates.values().any(|t| t.name == req.name) {
            return Err(AppError::AlreadyExists(format!("Template {}", req.name)));
        }

        let now = now_utc();
        let template = Template {
            id: tables.next_id(),
            name: req.name,
            provider: req.provider,
            description: req.description,
            content: req.content,
            creator_id,
            create_time: now,
            update_time: now,
        };
        tables.templates.insert(template.id, template.clone());

        tracing::info!(template_id = template.id, name = %template.name, "Template created");
        Ok(template)
    }
}

#[async_trait]
impl TemplateManager for TemplateService {
    async fn get_template(&self, id: i64) -> AppResult<Option<Template>> {
        Ok(self.store.read().await.templates.get(&id).cloned())
    }

    async fn list_templates(
        &self,
        name: Option<String>,
        provider: Option<i32>,
        page: u32,
        per_page: u32,
    ) -> AppResult<(Vec<Template>, i64)> {
        let tables = self.store.read().await;
        let templates: Vec<Template> = tables
            .templates
            .values()
            .filter(|t| provider.is_none_or(|p| t.provider == p))
            .filter(|t| name.as_deref().is_none_or(|n| t.name.contains(n)))
            .cloned()
            .collect();

        Ok(paginate(templates, page, per_page))
    }

    async fn create_template(
        &self,
        creator_id: i64,
        hackathon_id: Option<i64>,
        req: CreateTemplateRequest,
    ) -> AppResult<Template> {
        let mut tables = self.store.write().await;
        let template = Self::insert(&mut tables, creator_id, req)?;

        if let Some(hackathon_id) = hackathon_id {
            tables.hackathon_templates.insert((hackathon_id, template.id));
        }
        Ok(template)
    }

    async fn create_template_from_file(
        &self,
        creator_id: i64,
        file: UploadedFile,
    ) -> AppResult<Template> {
        let req: CreateTemplateRequest = serde_json::from_slice(&file.bytes).map_err(|e| {
            AppError::InvalidInput(format!("{} is not a valid template: {e}", file.file_name))
        })?;
        req.validate()?;

        let mut tables = self.store.write().await;
        Self::insert(&mut tables, creator_id, req)
    }

    async fn update_template(
        &self,
        scope: TemplateScope,
        req: UpdateTemplateRequest,
    ) -> AppResult<Template> {
        let mut tables = self.store.write().await;
        Self::authorize(&tables, scope, req.id)?;

        if let Some(name) = &req.name {
            if tables
                .templates
                .values()
                .any(|t| &t.name == name && t.id != req.id)
            {
                return Err(AppError::AlreadyExists(format!("Template {name}")));
            }
        }

        let template = tables
            .templates
            .get_mut(&req.id)
            .ok_or_else(|| AppError::NotFound(format!("Template {}", req.id)))?;

        if let Some(name) = req.name {
            template.name = name;
        }
        if let Some(provider) = req.provider {
            template.provider = provider;
        }
        if req.description.is_some() {
            template.description = req.description;
        }
        if let Some(content) = req.content {
            template.content = content;
        }
        template.update_time = now_utc();

        Ok(template.clone())
    }

    async fn delete_template(&self, scope: TemplateScope, id: i64) -> AppResult<()> {
        let mut tables = self.store.write().await;
        Self::authorize(&tables, scope, id)?;
        if tables
            .experiments
            .values()
            .any(|e| e.template_id == id && e.is_alive())
        {
            return Err(AppError::Conflict(
                "Template is used by running experiments".to_string(),
            ));
        }

        tables.templates.remove(&id);
        tables.hackathon_templates.retain(|(_, t)| *t != id);
        for team in tables.teams.values_mut() {
            if team.template_id == Some(id) {
                team.template_id = None;
            }
        }

        tracing::info!(template_id = id, "Template deleted");
        Ok(())
    }

    async fn get_templates_by_hackathon(&self, hackathon_id: i64) -> AppResult<Vec<Template>> {
        Ok(self.store.read().await.hackathon_template_list(hackathon_id))
    }

    async fn add_template_to_hackathon(
        &self,
        hackathon_id: i64,
        template_id: i64,
    ) -> AppResult<Template> {
        let mut tables = self.store.write().await;
        let template = tables
            .templates
            .get(&template_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Template {template_id}")))?;

        if !tables.hackathon_templates.insert((hackathon_id, template_id)) {
            return Err(AppError::AlreadyExists(format!(
                "Template {template_id} in hackathon"
            )));
        }
        Ok(template)
    }

    async fn remove_template_from_hackathon(
        &self,
        hackathon_id: i64,
        template_id: i64,
    ) -> AppResult<()> {
        let mut tables = self.store.write().await;
        if !tables.hackathon_templates.remove(&(hackathon_id, template_id)) {
            return Err(AppError::NotFound(format!(
                "Template {template_id} in hackathon"
            )));
        }

        for team in tables.teams.values_mut() {
            if team.hackathon_id == hackathon_id && team.template_id == Some(template_id) {
                team.template_id = None;
            }
        }
        Ok(())
    }

    async fn get_user_templates(
        &self,
        user_id: i64,
        hackathon_id: i64,
    ) -> AppResult<Vec<Template>> {
        let tables = self.store.read().await;

        let selected = tables
            .team_of_user(hackathon_id, user_id)
            .and_then(|team| team.template_id)
            .and_then(|id| tables.templates.get(&id));

        Ok(match selected {
            Some(template) => vec![template.clone()],
            None => tables.hackathon_template_list(hackathon_id),
        })
    }
}
