use leptos::prelude::*;

use crate::models::{toggle_sort, Film, Sort, SortColumn, SortDirection};

#[component]
pub fn FilmTable(
    films: ReadSignal<Vec<Film>>,
    sort: ReadSignal<Option<Sort>>,
    set_sort: WriteSignal<Option<Sort>>,
) -> impl IntoView {
    let on_sort = move |column: SortColumn| {
        set_sort.update(|current| *current = Some(toggle_sort(*current, column)));
    };

    // Direction arrow for the active sort column
    let indicator = move |column: SortColumn| {
        sort.get()
            .filter(|s| s.column == column)
            .map(|s| match s.direction {
                SortDirection::Ascending => " ▲",
                SortDirection::Descending => " ▼",
            })
            .unwrap_or("")
    };

    view! {
        <table>
            <thead>
                <tr>
                    <th on:click=move |_| on_sort(SortColumn::Title)>
                        "Title"
                        {move || indicator(SortColumn::Title)}
                    </th>
                    <th>"Rental Rate"</th>
                    <th>"Rating"</th>
                    <th on:click=move |_| on_sort(SortColumn::Category)>
                        "Genre"
                        {move || indicator(SortColumn::Category)}
                    </th>
                    <th on:click=move |_| on_sort(SortColumn::RentalCount)>
                        "Rental Count"
                        {move || indicator(SortColumn::RentalCount)}
                    </th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || films.get()
                    key=|film| film.film_id
                    children=move |film| {
                        view! {
                            <tr>
                                <td>{film.title}</td>
                                <td>{format!("{:.2}", film.rental_rate)}</td>
                                <td>{film.rating}</td>
                                <td>{film.category}</td>
                                <td>{film.rental_count}</td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}
