use chrono::{NaiveDate, Utc};
use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaPen, FaTrash};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::client::{
    api::ApiClient,
    components::{page::PageHeader, Loading},
    error::Error,
    util::{load_into, use_authorized_api, use_view_resource},
    view::{
        transaction::{date_range, signed_amount, TransactionEditor},
        write_then_reload, LoadPhase,
    },
};
use crate::model::transaction::{Category, Transaction, TransactionType};

type DateRange = Option<(NaiveDate, NaiveDate)>;

async fn fetch_transactions(api: ApiClient, range: DateRange) -> Result<Vec<Transaction>, Error> {
    match range {
        Some((start, end)) => api.filter_transactions(start, end).await,
        None => api.list_transactions().await,
    }
}

#[component]
pub fn Transactions() -> Element {
    let api = use_authorized_api();
    let transactions = use_view_resource::<Vec<Transaction>>();
    let mut editor = use_signal(|| TransactionEditor::new(Utc::now().date_naive()));
    let mut range = use_signal(|| None::<(NaiveDate, NaiveDate)>);
    let mut pending_delete = use_signal(|| None::<i64>);
    let mut form_error = use_signal(|| None::<String>);

    let refresh = use_callback({
        let api = api.clone();
        move |range: DateRange| {
            let Some(api) = api.clone() else {
                return;
            };

            load_into(transactions, fetch_transactions(api, range));
        }
    });

    // Re-runs whenever the date filter changes
    use_effect(move || refresh.call(range()));

    let submit = use_callback({
        let api = api.clone();
        move |_: ()| {
            let Some(api) = api.clone() else {
                return;
            };
            let request = match editor.read().draft.to_request() {
                Ok(request) => request,
                Err(e) => {
                    form_error.set(Some(e.user_message()));
                    return;
                }
            };
            form_error.set(None);
            let editing = editor.read().editing();

            spawn(async move {
                let mut slot = transactions;
                let filter = *range.peek();
                let write = async {
                    match editing {
                        Some(id) => api.update_transaction(id, &request).await,
                        None => api.create_transaction(&request).await,
                    }
                };
                let reload = || fetch_transactions(api.clone(), filter);

                match write_then_reload(&mut slot, write, reload).await {
                    Ok(_) => editor.write().reset(),
                    Err(e) => tracing::error!("{}", e),
                }
            });
        }
    });

    let delete = use_callback(move |id: i64| {
        let Some(api) = api.clone() else {
            return;
        };
        pending_delete.set(None);

        spawn(async move {
            let mut slot = transactions;
            let filter = *range.peek();
            let reload = || fetch_transactions(api.clone(), filter);

            if let Err(e) = write_then_reload(&mut slot, api.delete_transaction(id), reload).await
            {
                tracing::error!("{}", e);
            }
        });
    });

    let mut filter_start = use_signal(String::new);
    let mut filter_end = use_signal(String::new);
    let mut filter_error = use_signal(|| None::<String>);

    let resource = transactions.read();
    let draft = editor.read().draft.clone();
    let is_editing = editor.read().editing().is_some();

    rsx!(
        Title { "Transactions | BudgetWise" }
        PageHeader { title: "Transactions" }

        div { class: "card shadow-sm bg-base-100 mb-6",
            form { class: "card-body",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    submit.call(());
                },
                h3 { class: "card-title", {editor.read().title()} }
                if let Some(message) = form_error() {
                    div { class: "alert alert-error", "{message}" }
                }
                div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-5 gap-4",
                    select {
                        class: "select",
                        value: draft.kind.as_str(),
                        onchange: move |e| {
                            if let Some(kind) = TransactionType::parse(&e.value()) {
                                editor.write().draft.kind = kind;
                            }
                        },
                        for kind in TransactionType::ALL {
                            option { value: kind.as_str(), selected: kind == draft.kind, {kind.label()} }
                        }
                    }
                    input {
                        class: "input",
                        r#type: "number",
                        step: "0.01",
                        placeholder: "Amount",
                        required: true,
                        value: "{draft.amount}",
                        oninput: move |e| editor.write().draft.amount = e.value(),
                    }
                    select {
                        class: "select",
                        value: draft.category.as_str(),
                        onchange: move |e| {
                            if let Some(category) = Category::parse(&e.value()) {
                                editor.write().draft.category = category;
                            }
                        },
                        for category in Category::ALL {
                            option {
                                value: category.as_str(),
                                selected: category == draft.category,
                                {category.label()}
                            }
                        }
                    }
                    input {
                        class: "input",
                        r#type: "date",
                        required: true,
                        value: "{draft.date}",
                        oninput: move |e| editor.write().draft.date = e.value(),
                    }
                    input {
                        class: "input",
                        r#type: "text",
                        placeholder: "Description",
                        value: "{draft.description}",
                        oninput: move |e| editor.write().draft.description = e.value(),
                    }
                }
                div { class: "card-actions justify-end",
                    if is_editing {
                        button {
                            class: "btn btn-ghost",
                            r#type: "button",
                            onclick: move |_| {
                                editor.write().reset();
                                form_error.set(None);
                            },
                            "Cancel"
                        }
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        if is_editing { "Update Transaction" } else { "Add Transaction" }
                    }
                }
            }
        }

        div { class: "flex flex-wrap items-end gap-2 mb-4",
            label { class: "flex flex-col text-sm",
                "From"
                input {
                    class: "input input-sm",
                    r#type: "date",
                    value: "{filter_start}",
                    oninput: move |e| filter_start.set(e.value()),
                }
            }
            label { class: "flex flex-col text-sm",
                "To"
                input {
                    class: "input input-sm",
                    r#type: "date",
                    value: "{filter_end}",
                    oninput: move |e| filter_end.set(e.value()),
                }
            }
            button {
                class: "btn btn-sm",
                onclick: move |_| match date_range(&filter_start(), &filter_end()) {
                    Ok(selected) => {
                        filter_error.set(None);
                        range.set(Some(selected));
                    }
                    Err(e) => filter_error.set(Some(e.user_message())),
                },
                "Filter"
            }
            if range().is_some() {
                button {
                    class: "btn btn-sm btn-ghost",
                    onclick: move |_| {
                        filter_start.set(String::new());
                        filter_end.set(String::new());
                        range.set(None);
                    },
                    "Clear"
                }
            }
            if let Some(message) = filter_error() {
                span { class: "text-error text-sm", "{message}" }
            }
        }

        div { class: "card shadow-sm bg-base-100 overflow-x-auto",
            match resource.data() {
                Some(list) if list.is_empty() => rsx!(
                    p { class: "p-6 text-base-content/70", "No transactions found." }
                ),
                Some(list) => rsx!(
                    table { class: "table",
                        thead {
                            tr {
                                th { "Date" }
                                th { "Category" }
                                th { "Description" }
                                th { class: "text-right", "Amount" }
                                th {}
                            }
                        }
                        tbody {
                            for transaction in list.iter().cloned() {
                                TransactionRow {
                                    key: "{transaction.id}",
                                    confirming: pending_delete() == Some(transaction.id),
                                    transaction,
                                    on_edit: move |t: Transaction| {
                                        editor.write().edit(&t);
                                        form_error.set(None);
                                    },
                                    on_delete_request: move |id| pending_delete.set(Some(id)),
                                    on_delete_cancel: move |_| pending_delete.set(None),
                                    on_delete: delete,
                                }
                            }
                        }
                    }
                ),
                None if resource.phase() == LoadPhase::Failed => rsx!(
                    p { class: "p-6 text-error", "Could not load transactions." }
                ),
                None => rsx!(Loading {}),
            }
        }
    )
}

#[component]
fn TransactionRow(
    transaction: Transaction,
    confirming: bool,
    on_edit: EventHandler<Transaction>,
    on_delete_request: EventHandler<i64>,
    on_delete_cancel: EventHandler<()>,
    on_delete: Callback<i64>,
) -> Element {
    let id = transaction.id;
    let amount_class = if transaction.is_expense() {
        "text-right text-error"
    } else {
        "text-right text-success"
    };
    let edited = transaction.clone();

    rsx!(
        tr {
            td { "{transaction.date}" }
            td { {transaction.category.label()} }
            td { {transaction.description.clone().unwrap_or_default()} }
            td { class: amount_class, {signed_amount(&transaction)} }
            td { class: "flex gap-1 justify-end",
                if confirming {
                    span { class: "text-sm self-center", "Are you sure?" }
                    button {
                        class: "btn btn-xs btn-error",
                        onclick: move |_| on_delete.call(id),
                        "Delete"
                    }
                    button {
                        class: "btn btn-xs btn-ghost",
                        onclick: move |_| on_delete_cancel.call(()),
                        "Cancel"
                    }
                } else {
                    button {
                        class: "btn btn-xs btn-ghost",
                        onclick: move |_| on_edit.call(edited.clone()),
                        Icon { width: 14, height: 14, icon: FaPen }
                    }
                    button {
                        class: "btn btn-xs btn-ghost text-error",
                        onclick: move |_| on_delete_request.call(id),
                        Icon { width: 14, height: 14, icon: FaTrash }
                    }
                }
            }
        }
    )
}
