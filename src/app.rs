//! Film Browser App
//!
//! Root component: owns the page request state, issues one fetch per
//! state change, and composes the table and pagination controls.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{FilmTable, Pagination};
use crate::models::{FetchStatus, Film, PageRequest, Sort};

#[component]
pub fn App() -> impl IntoView {
    // Request state
    let (current_page, set_current_page) = signal(1u32);
    let (page_size, set_page_size) = signal(10u32);
    let (sort, set_sort) = signal::<Option<Sort>>(None);

    // Response state
    let (films, set_films) = signal(Vec::<Film>::new());
    let (total_pages, set_total_pages) = signal(0u32);
    let (total_results, set_total_results) = signal(0u32);
    let (status, set_status) = signal(FetchStatus::Loading);

    // Sequence number of the most recently issued request. A response
    // is dropped if a newer request went out while it was in flight.
    let request_seq = StoredValue::new(0u64);

    // Fetch on mount and whenever any request-state field changes
    Effect::new(move |_| {
        let request = PageRequest {
            page: current_page.get(),
            page_size: page_size.get(),
            sort: sort.get(),
        };
        let seq = request_seq.get_value() + 1;
        request_seq.set_value(seq);

        set_status.set(FetchStatus::Loading);
        spawn_local(async move {
            let result = api::fetch_films(&request).await;
            if request_seq.get_value() != seq {
                // A newer request superseded this one.
                return;
            }
            match result {
                Ok(page) => {
                    set_films.set(page.films);
                    set_total_pages.set(page.total_pages);
                    set_total_results.set(page.total_results);
                    set_status.set(FetchStatus::Idle);
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[APP] Fetch failed for page {}: {}", request.page, e).into(),
                    );
                    set_status.set(FetchStatus::Error(e));
                }
            }
        });
    });

    // Page-size input. Resets to the first page so the view never
    // lands past the new last page.
    let on_page_size_input = move |ev: web_sys::Event| {
        if let Ok(size) = event_target_value(&ev).parse::<u32>() {
            if size >= 1 {
                set_page_size.set(size);
                set_current_page.set(1);
            }
        }
    };

    view! {
        <header>
            <h1>"Film Browser"</h1>
        </header>
        <div>
            {move || match status.get() {
                FetchStatus::Loading => view! { <p>"Loading movies..."</p> }.into_any(),
                FetchStatus::Error(message) => {
                    view! { <p>{format!("Error loading movies: {}", message)}</p> }.into_any()
                }
                FetchStatus::Idle => view! {
                    <FilmTable films=films sort=sort set_sort=set_sort />
                }
                .into_any(),
            }}

            <div class="bottom">
                <span>{move || format!("Total results: {}", total_results.get())}</span>
                <span>
                    " Rows per page "
                    <input
                        type="number"
                        min="10"
                        prop:value=move || page_size.get().to_string()
                        on:change=on_page_size_input
                    />
                </span>
            </div>

            <Pagination
                current_page=current_page
                total_pages=total_pages
                set_current_page=set_current_page
            />
        </div>
    }
}
