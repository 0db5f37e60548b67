//! Item Commands
//!
//! List-item operations for the signed-in user. A rejected access token hands
//! over to the session holder, which refreshes or signs out.

use leptos::prelude::WithUntracked;
use leptos::task::spawn_local;

use goal_store::actions::{EditOutcome, ItemActions};
use goal_store::repository::PostgrestItemRepository;
use goal_store::{DomainError, DomainResult, ListItem, UserId};

use crate::commands::renew_session;
use crate::context::AppContext;

/// Repository bound to the current session's token
struct Signed {
    repo: PostgrestItemRepository,
    token: String,
    owner: UserId,
}

fn signed(ctx: &AppContext) -> DomainResult<Signed> {
    let (token, owner) = ctx
        .session
        .with_untracked(|s| s.as_ref().map(|s| (s.access_token.clone(), s.user.id.clone())))
        .ok_or_else(|| DomainError::Unauthorized("not signed in".into()))?;
    Ok(Signed {
        repo: PostgrestItemRepository::new(ctx.config(), token.clone()),
        token,
        owner,
    })
}

fn check_session<T>(ctx: AppContext, token: &str, result: DomainResult<T>) -> DomainResult<T> {
    if let Err(e) = &result {
        if e.is_session_rejected() {
            spawn_local(renew_session(ctx, token.to_string()));
        }
    }
    result
}

/// Fetch all items of the signed-in user, newest first
pub async fn list_items(ctx: AppContext) -> DomainResult<Vec<ListItem>> {
    let session = signed(&ctx)?;
    let result = ItemActions::new(&session.repo).load(&session.owner).await;
    check_session(ctx, &session.token, result)
}

/// `Ok(None)` when the content was blank and nothing was sent
pub async fn create_item(ctx: AppContext, content: String) -> Result<Option<ListItem>, String> {
    let session = signed(&ctx).map_err(|e| e.to_string())?;
    let result = ItemActions::new(&session.repo).create(&session.owner, &content).await;
    check_session(ctx, &session.token, result).map_err(|e| e.to_string())
}

pub async fn save_item_content(ctx: AppContext, item: ListItem, buffer: String) -> EditOutcome {
    match signed(&ctx) {
        Ok(session) => ItemActions::new(&session.repo).save_content(&item, &buffer).await,
        Err(e) => {
            log::error!("[LIST] Error updating item {}: {}", item.id, e);
            EditOutcome::RolledBack { content: item.content }
        }
    }
}

pub async fn toggle_item(ctx: AppContext, item: ListItem) -> Result<ListItem, String> {
    let session = signed(&ctx).map_err(|e| e.to_string())?;
    let result = ItemActions::new(&session.repo).toggle_completion(&item).await;
    check_session(ctx, &session.token, result).map_err(|e| e.to_string())
}

pub async fn delete_item(ctx: AppContext, item: ListItem) -> Result<(), String> {
    let session = signed(&ctx).map_err(|e| e.to_string())?;
    let result = ItemActions::new(&session.repo).delete(&item).await;
    check_session(ctx, &session.token, result).map_err(|e| e.to_string())
}
