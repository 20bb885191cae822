//! In-memory integration tests for task API round-trips.

use std::sync::Arc;
use std::time::Duration;

use super::helpers::{ids, sample_board, work_item};
use rstest::{fixture, rstest};
use taskdeck::{
    config::BoardConfig,
    tracker::{
        adapters::memory::InMemoryTaskApi,
        domain::{KanbanColumn, ProjectId, Scope, Status, WorkItemId},
        ports::{CollaboratorError, NewSubItem, NewWorkItem},
        services::{BoardServiceError, ItemStore, ItemSyncService, SharedItemStore},
    },
    view::KanbanBoard,
};

type TestService = ItemSyncService<InMemoryTaskApi>;

struct Remote {
    api: InMemoryTaskApi,
    service: TestService,
}

#[fixture]
fn remote() -> eyre::Result<Remote> {
    let api = InMemoryTaskApi::new();
    api.seed(sample_board()?)?;
    let service = ItemSyncService::new(
        Arc::new(api.clone()),
        SharedItemStore::new(ItemStore::new()),
        &BoardConfig::fast(),
    );
    Ok(Remote { api, service })
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn refresh_then_move_round_trips(remote: eyre::Result<Remote>) -> eyre::Result<()> {
    let Remote { api, service } = remote?;

    let fetched = service.refresh(&Scope::All).await?;
    eyre::ensure!(fetched == 5);

    service
        .move_item(&WorkItemId::new("W1")?, KanbanColumn::InProgress)
        .await?;

    let snapshot = service.store().snapshot()?;
    let board = KanbanBoard::project(snapshot.get_all());
    eyre::ensure!(
        ids(board.lane(KanbanColumn::InProgress).items().iter().copied()) == ["W1", "W2", "O2"]
    );
    let remote_items = api.items()?;
    let remote_w1 = remote_items
        .iter()
        .find(|item| item.id().as_str() == "W1")
        .ok_or_else(|| eyre::eyre!("W1 missing remotely"))?;
    eyre::ensure!(remote_w1.status() == Status::InProgress);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn scoped_refresh_leaves_other_projects(remote: eyre::Result<Remote>) -> eyre::Result<()> {
    let Remote { api, service } = remote?;
    service.refresh(&Scope::All).await?;
    api.seed([work_item("W9", "web", Status::Open)?])?;

    service.refresh(&Scope::Only(ProjectId::new("web")?)).await?;

    let snapshot = service.store().snapshot()?;
    eyre::ensure!(ids(snapshot.get_all()) == ["O1", "O2", "W9"]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_items_and_sub_items_land_in_store(
    remote: eyre::Result<Remote>,
) -> eyre::Result<()> {
    let Remote { service, .. } = remote?;
    service.refresh(&Scope::All).await?;

    let created = service
        .create_item(NewWorkItem::new(ProjectId::new("ops")?, "Rotate keys"))
        .await?;
    let child = service
        .create_sub_item(created.id(), NewSubItem::new("Schedule window"))
        .await?;

    let stored = service
        .store()
        .read(|store| store.get_sub_item(created.id(), child.id()).cloned())??;
    eyre::ensure!(stored.title() == "Schedule window");
    eyre::ensure!(service.store().read(ItemStore::len)? == 6);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn failed_delete_keeps_the_item(remote: eyre::Result<Remote>) -> eyre::Result<()> {
    let Remote { api, service } = remote?;
    service.refresh(&Scope::All).await?;
    api.fail_next(CollaboratorError::Rejected("locked".to_owned()))?;
    let id = WorkItemId::new("W3")?;

    let result = service.delete_item(&id).await;

    eyre::ensure!(matches!(result, Err(BoardServiceError::Collaborator(_))));
    eyre::ensure!(service.store().read(|store| store.contains(&id))?);

    service.delete_item(&id).await?;
    eyre::ensure!(!service.store().read(|store| store.contains(&id))?);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn slow_api_surfaces_timeout(remote: eyre::Result<Remote>) -> eyre::Result<()> {
    let Remote { api, service } = remote?;
    api.set_latency(Duration::from_secs(2))?;

    let result = service.refresh(&Scope::All).await;

    eyre::ensure!(matches!(
        result,
        Err(BoardServiceError::Collaborator(CollaboratorError::TimedOut(_)))
    ));
    eyre::ensure!(service.store().read(ItemStore::is_empty)?);
    Ok(())
}
