//! Then steps for list pagination BDD scenarios.

use super::world::ListWorld;
use rstest_bdd_macros::then;

#[then("the page is empty")]
fn page_is_empty(world: &ListWorld) -> Result<(), eyre::Report> {
    let page = world.page();
    eyre::ensure!(
        page.items.is_empty(),
        "expected an empty page, found {} items",
        page.items.len()
    );
    Ok(())
}

#[then("there are {pages:usize} pages in total")]
fn pages_in_total(world: &ListWorld, pages: usize) -> Result<(), eyre::Report> {
    let actual = world.page().total_pages;
    eyre::ensure!(actual == pages, "expected {pages} pages, found {actual}");
    Ok(())
}

#[then("the current page is {page:usize}")]
fn current_page(world: &ListWorld, page: usize) -> Result<(), eyre::Report> {
    let actual = world.view.page();
    eyre::ensure!(actual == page, "expected page {page}, found {actual}");
    Ok(())
}

#[then("the page shows {count:usize} items")]
fn page_shows(world: &ListWorld, count: usize) -> Result<(), eyre::Report> {
    let actual = world.page().items.len();
    eyre::ensure!(actual == count, "expected {count} items, found {actual}");
    Ok(())
}
