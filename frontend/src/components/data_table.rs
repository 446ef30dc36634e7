use crate::components::{empty_state::EmptyState, layout::LoadingSpinner};
use crate::table::{Cell, Column, TableSnapshot, ViewState};
use leptos::*;

/// Server-paginated table body. Sorting is delegated to `on_sort`; the
/// component only renders the snapshot it is given.
#[component]
pub fn DataTable<R>(
    columns: Vec<Column<R>>,
    snapshot: Signal<TableSnapshot<R>>,
    on_sort: Callback<String>,
    #[prop(optional)] row_numbers: bool,
    #[prop(optional, into)] empty_title: Option<String>,
) -> impl IntoView
where
    R: Clone + 'static,
{
    let columns = store_value(columns);
    let empty_title = empty_title.unwrap_or_else(|| "No records found".to_string());
    let span = columns.with_value(|cols| cols.len()) + usize::from(row_numbers);

    let header = move || {
        columns.with_value(|cols| {
            cols.iter()
                .map(|column| {
                    let label = column.header.clone();
                    match column.sort_key {
                        Some(key) => view! {
                            <th scope="col" class="px-4 py-3 text-left text-xs font-medium uppercase tracking-wider text-fg-muted">
                                <button
                                    type="button"
                                    class="inline-flex items-center gap-1 hover:text-fg"
                                    on:click=move |_| on_sort.call(key.to_string())
                                >
                                    {label}
                                    {move || snapshot.with(|s| s.sort_indicator(key)).unwrap_or("")}
                                </button>
                            </th>
                        }
                        .into_view(),
                        None => view! {
                            <th scope="col" class="px-4 py-3 text-left text-xs font-medium uppercase tracking-wider text-fg-muted">
                                {label}
                            </th>
                        }
                        .into_view(),
                    }
                })
                .collect_view()
        })
    };

    let body = move || {
        let current = snapshot.get();
        match &current.state {
            ViewState::Idle | ViewState::Loading => view! {
                <tr><td colspan=span><LoadingSpinner /></td></tr>
            }
            .into_view(),
            ViewState::Errored(message) => view! {
                <tr>
                    <td colspan=span class="px-4 py-6 text-center text-sm text-status-error-text" role="alert">
                        {message.clone()}
                    </td>
                </tr>
            }
            .into_view(),
            ViewState::Loaded(page) if page.is_empty() => {
                let title = empty_title.clone();
                view! { <tr><td colspan=span><EmptyState title=title /></td></tr> }.into_view()
            }
            ViewState::Loaded(page) => page
                .records
                .iter()
                .enumerate()
                .map(|(index, record)| {
                    let serial = row_numbers.then(|| current.row_number(index));
                    let cells = columns.with_value(|cols| {
                        cols.iter()
                            .map(|column| {
                                let content = match column.cell(record) {
                                    Cell::Text(text) => text.into_view(),
                                    Cell::Custom(view) => view,
                                };
                                view! { <td class="px-4 py-3 text-sm text-fg whitespace-nowrap">{content}</td> }
                            })
                            .collect_view()
                    });
                    view! {
                        <tr class="hover:bg-surface-muted">
                            {serial.map(|n| view! { <td class="px-4 py-3 text-sm text-fg-muted">{n}</td> })}
                            {cells}
                        </tr>
                    }
                })
                .collect_view(),
        }
    };

    view! {
        <div class="overflow-x-auto rounded-lg border border-border">
            <table class="min-w-full divide-y divide-border">
                <thead class="bg-surface-muted">
                    <tr>
                        {row_numbers.then(|| view! {
                            <th scope="col" class="px-4 py-3 text-left text-xs font-medium uppercase tracking-wider text-fg-muted">
                                "S.No."
                            </th>
                        })}
                        {header}
                    </tr>
                </thead>
                <tbody class="divide-y divide-border bg-surface-elevated">{body}</tbody>
            </table>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::table::{yes_no, PageResult, QueryState};
    use crate::test_support::ssr::render_to_string;

    #[derive(Clone)]
    struct Row {
        name: &'static str,
        active: bool,
    }

    fn columns() -> Vec<Column<Row>> {
        vec![
            Column::data("name", "Name", |row: &Row| row.name.to_string()).sortable("name"),
            Column::data("active", "Active", |row: &Row| yes_no(row.active)),
        ]
    }

    fn render(state: ViewState<Row>, page_index: usize) -> String {
        render_to_string(move || {
            let mut query = QueryState::new(10, "name");
            query.page_index = page_index;
            let snapshot = Signal::derive(move || TableSnapshot {
                query: query.clone(),
                state: state.clone(),
            });
            view! {
                <DataTable
                    columns=columns()
                    snapshot=snapshot
                    on_sort=Callback::new(|_: String| {})
                    row_numbers=true
                    empty_title="No salary components found"
                />
            }
        })
    }

    #[test]
    fn loaded_rows_render_cells_and_serial_numbers() {
        let html = render(
            ViewState::Loaded(PageResult::new(
                vec![
                    Row { name: "Basic", active: true },
                    Row { name: "PF", active: false },
                ],
                3,
            )),
            2,
        );
        assert!(html.contains("Basic"));
        assert!(html.contains("Yes"));
        assert!(html.contains("No"));
        assert!(html.contains("21"));
        assert!(html.contains("22"));
        assert!(html.contains(" ▲"));
    }

    #[test]
    fn error_state_replaces_rows() {
        let html = render(ViewState::Errored("Database unavailable".into()), 0);
        assert!(html.contains("Database unavailable"));
        assert!(!html.contains("Basic"));
    }

    #[test]
    fn empty_page_shows_empty_state_and_loading_shows_spinner() {
        let html = render(ViewState::Loaded(PageResult::default()), 0);
        assert!(html.contains("No salary components found"));

        let html = render(ViewState::Loading, 0);
        assert!(html.contains("animate-spin"));
    }
}
