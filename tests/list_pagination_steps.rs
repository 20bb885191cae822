//! Behaviour tests for list filtering and pagination.

#[path = "list_pagination_steps/mod.rs"]
mod list_pagination_steps_defs;

use list_pagination_steps_defs::world::{ListWorld, world};
use rstest_bdd_macros::scenario;

#[scenario(
    path = "tests/features/list_pagination.feature",
    name = "Requesting a page past the end"
)]
fn page_past_the_end(world: ListWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/list_pagination.feature",
    name = "Changing the query returns to the first page"
)]
fn query_change_resets_page(world: ListWorld) {
    let _ = world;
}
