use leptos::prelude::*;

use crate::pagination::{page_window, PageMarker};

#[component]
pub fn Pagination(
    current_page: ReadSignal<u32>,
    total_pages: ReadSignal<u32>,
    set_current_page: WriteSignal<u32>,
) -> impl IntoView {
    let window = Memo::new(move |_| page_window(current_page.get(), total_pages.get()));

    let go_first = move |_| set_current_page.set(1);
    let go_prev = move |_| {
        set_current_page.update(|page| {
            if *page > 1 {
                *page -= 1;
            }
        })
    };
    let go_next = move |_| {
        let last = total_pages.get_untracked();
        set_current_page.update(|page| {
            if *page < last {
                *page += 1;
            }
        })
    };
    let go_last = move |_| set_current_page.set(total_pages.get_untracked());

    view! {
        <div class="page-navigation">
            <ul>
                <li>
                    <button on:click=go_first disabled=move || window.get().at_first>
                        "<<"
                    </button>
                </li>
                <li>
                    <button on:click=go_prev disabled=move || window.get().at_first>
                        "<"
                    </button>
                </li>
                {move || {
                    window
                        .get()
                        .markers
                        .into_iter()
                        .map(|marker| match marker {
                            PageMarker::Ellipsis => {
                                view! { <li><span>"…"</span></li> }.into_any()
                            }
                            PageMarker::Page(page) => {
                                let selected = move || current_page.get() == page;
                                view! {
                                    <li>
                                        <button
                                            class:selected=selected
                                            disabled=selected
                                            on:click=move |_| set_current_page.set(page)
                                        >
                                            {page}
                                        </button>
                                    </li>
                                }
                                .into_any()
                            }
                        })
                        .collect_view()
                }}
                <li>
                    <button on:click=go_next disabled=move || window.get().at_last>
                        ">"
                    </button>
                </li>
                <li>
                    <button on:click=go_last disabled=move || window.get().at_last>
                        ">>"
                    </button>
                </li>
            </ul>
        </div>
    }
}
