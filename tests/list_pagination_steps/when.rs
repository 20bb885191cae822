//! When steps for list pagination BDD scenarios.

use super::world::ListWorld;
use rstest_bdd_macros::when;

#[when("page {page:usize} is requested")]
fn page_requested(world: &mut ListWorld, page: usize) {
    world.view.set_page(page);
}

#[when(r#"the query is set to "{query}""#)]
fn query_set(world: &mut ListWorld, query: String) {
    world.view.set_query(query);
}
