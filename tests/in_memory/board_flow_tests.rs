//! In-memory integration tests for board interactions.

use std::sync::Arc;

use super::helpers::{ids, sample_board};
use mockable::DefaultClock;
use rstest::{fixture, rstest};
use taskdeck::{
    tracker::{
        adapters::memory::RecordingTransitionListener,
        domain::{KanbanColumn, ProjectId, Scope, Status, SubItemId, WorkItemId},
        services::{ItemStore, TransitionEngine},
    },
    view::{DragSession, DropOutcome, KanbanBoard, ListView, NavigationStack},
};

struct Session {
    engine: TransitionEngine<RecordingTransitionListener, DefaultClock>,
    listener: Arc<RecordingTransitionListener>,
    store: ItemStore,
}

#[fixture]
fn session() -> eyre::Result<Session> {
    let listener = Arc::new(RecordingTransitionListener::new());
    Ok(Session {
        engine: TransitionEngine::new(Arc::clone(&listener), Arc::new(DefaultClock)),
        listener,
        store: ItemStore::from_items(sample_board()?),
    })
}

#[rstest]
fn drag_between_lanes_updates_board_and_list(session: eyre::Result<Session>) -> eyre::Result<()> {
    let Session {
        engine,
        listener,
        mut store,
    } = session?;
    let mut view = ListView::new(10);
    view.set_status(Scope::Only(Status::Completed));
    eyre::ensure!(ids(view.render(store.get_all()).items) == ["W3"]);

    let mut drag = DragSession::begin(&store, &WorkItemId::new("W2")?)?;
    drag.hover(Some(KanbanColumn::Completed));
    let outcome = drag.drop_on_hovered(&engine, &mut store)?;

    eyre::ensure!(outcome.changed());
    let board = KanbanBoard::project(store.get_all());
    let completed = ids(board.lane(KanbanColumn::Completed).items().iter().copied());
    eyre::ensure!(completed == ["W2", "W3"]);
    eyre::ensure!(ids(view.render(store.get_all()).items) == ["W2", "W3"]);
    eyre::ensure!(listener.len() == 1);
    Ok(())
}

#[rstest]
fn canceled_items_sit_in_backlog_until_dragged(
    session: eyre::Result<Session>,
) -> eyre::Result<()> {
    let Session {
        engine,
        listener,
        mut store,
    } = session?;
    let canceled = WorkItemId::new("O1")?;
    let before = KanbanBoard::project(store.get_all()).column_of(&canceled);
    eyre::ensure!(before == Some(KanbanColumn::Backlog));

    let drop = DragSession::begin(&store, &canceled)?.drop_on(
        &engine,
        &mut store,
        Some(KanbanColumn::Backlog),
    )?;

    eyre::ensure!(matches!(drop, DropOutcome::Moved(_)));
    eyre::ensure!(store.get_by_id(&canceled)?.status() == Status::Open);
    let events = listener.events();
    eyre::ensure!(
        events.iter().map(|event| (event.from, event.to)).collect::<Vec<_>>()
            == [(Status::Canceled, Status::Open)]
    );
    Ok(())
}

#[rstest]
fn project_filter_and_navigation_share_the_store(
    session: eyre::Result<Session>,
) -> eyre::Result<()> {
    let Session {
        engine, mut store, ..
    } = session?;
    let mut view = ListView::new(2);
    view.set_project(Scope::Only(ProjectId::new("web")?));
    let first = view.render(store.get_all());
    eyre::ensure!(first.total_pages == 2);

    let mut navigation = NavigationStack::new();
    navigation.open(&store, &WorkItemId::new("W1")?)?;
    navigation.drill_into(&store, &SubItemId::new("W1-b")?)?;
    engine.set_sub_item_status(
        &mut store,
        &WorkItemId::new("W1")?,
        &SubItemId::new("W1-b")?,
        Status::Completed,
    )?;

    eyre::ensure!(navigation.resolve(&store).is_ok());
    navigation.close();
    navigation.close();
    eyre::ensure!(navigation.is_closed());
    eyre::ensure!(store.get_by_id(&WorkItemId::new("W1")?)?.status() == Status::Open);
    Ok(())
}
