use chrono::Utc;
use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaTrash;
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::client::{
    api::ApiClient,
    components::{page::PageHeader, Loading, ProgressBar},
    error::Error,
    util::{load_into, use_authorized_api, use_view_resource},
    view::{
        budget::{measure_all, BudgetDraft, BudgetProgress},
        rupees, write_then_reload, LoadPhase,
    },
};
use crate::model::{
    budget::Budget,
    transaction::{Category, Transaction},
};

/// Budgets together with the transactions their spending is measured against
async fn fetch_budgets(api: ApiClient) -> Result<(Vec<Budget>, Vec<Transaction>), Error> {
    let (budgets, transactions) = futures::join!(api.list_budgets(), api.list_transactions());

    Ok((budgets?, transactions?))
}

#[component]
pub fn Budgets() -> Element {
    let api = use_authorized_api();
    let data = use_view_resource::<(Vec<Budget>, Vec<Transaction>)>();
    let mut draft = use_signal(BudgetDraft::default);
    let mut form_error = use_signal(|| None::<String>);

    let refresh = use_callback({
        let api = api.clone();
        move |_: ()| {
            let Some(api) = api.clone() else {
                return;
            };

            load_into(data, fetch_budgets(api));
        }
    });

    use_effect(move || refresh.call(()));

    let submit = use_callback({
        let api = api.clone();
        move |_: ()| {
            let Some(api) = api.clone() else {
                return;
            };
            let request = match draft.read().to_request() {
                Ok(request) => request,
                Err(e) => {
                    form_error.set(Some(e.user_message()));
                    return;
                }
            };
            form_error.set(None);

            spawn(async move {
                let mut slot = data;
                let reload = || fetch_budgets(api.clone());

                match write_then_reload(&mut slot, api.set_budget(&request), reload).await {
                    Ok(_) => draft.set(BudgetDraft::default()),
                    Err(e) => tracing::error!("{}", e),
                }
            });
        }
    });

    let delete = use_callback(move |id: i64| {
        let Some(api) = api.clone() else {
            return;
        };

        spawn(async move {
            let mut slot = data;
            let reload = || fetch_budgets(api.clone());

            if let Err(e) = write_then_reload(&mut slot, api.delete_budget(id), reload).await {
                tracing::error!("{}", e);
            }
        });
    });

    let resource = data.read();
    let current = draft.read().clone();
    let today = Utc::now().date_naive();

    rsx!(
        Title { "Budgets | BudgetWise" }
        PageHeader { title: "Monthly Budgets", subtitle: "Limits apply to expenses in the current month" }

        div { class: "card shadow-sm bg-base-100 mb-6",
            form { class: "card-body",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    submit.call(());
                },
                h3 { class: "card-title", "Set Budget" }
                if let Some(message) = form_error() {
                    div { class: "alert alert-error", "{message}" }
                }
                div { class: "flex flex-wrap gap-4",
                    select {
                        class: "select",
                        onchange: move |e| {
                            if let Some(category) = Category::parse(&e.value()) {
                                draft.write().category = category;
                            }
                        },
                        for category in Category::BUDGETABLE {
                            option {
                                value: category.as_str(),
                                selected: category == current.category,
                                {category.label()}
                            }
                        }
                    }
                    input {
                        class: "input",
                        r#type: "number",
                        step: "0.01",
                        placeholder: "Monthly limit",
                        required: true,
                        value: "{current.limit}",
                        oninput: move |e| draft.write().limit = e.value(),
                    }
                    button { class: "btn btn-primary", r#type: "submit", "Save" }
                }
            }
        }

        match resource.data() {
            Some((budgets, _)) if budgets.is_empty() => rsx!(
                p { class: "text-base-content/70", "No budgets set yet." }
            ),
            Some((budgets, transactions)) => rsx!(
                div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
                    for progress in measure_all(budgets, transactions, today) {
                        BudgetCard { key: "{progress.budget.id}", progress, on_delete: delete }
                    }
                }
            ),
            None if resource.phase() == LoadPhase::Failed => rsx!(
                p { class: "text-error", "Could not load budgets." }
            ),
            None => rsx!(Loading {}),
        }
    )
}

#[component]
fn BudgetCard(progress: BudgetProgress, on_delete: Callback<i64>) -> Element {
    let id = progress.budget.id;
    let tone = progress.tone();
    let border = if progress.over_budget {
        "border-error"
    } else {
        "border-primary"
    };
    let spent_class = if progress.over_budget {
        "text-xl font-semibold text-error"
    } else {
        "text-xl font-semibold"
    };

    rsx!(
        div { class: "card shadow-sm bg-base-100 border-l-4 {border}",
            div { class: "card-body gap-3",
                div { class: "flex justify-between items-center",
                    h4 { class: "text-lg font-bold", {progress.budget.category.label()} }
                    button {
                        class: "btn btn-xs btn-ghost text-error",
                        onclick: move |_| on_delete.call(id),
                        Icon { width: 14, height: 14, icon: FaTrash }
                    }
                }
                div { class: "flex justify-between",
                    div {
                        p { class: "text-sm text-base-content/70", "Spent" }
                        p { class: spent_class,
                            {format!("{} / {}", rupees(progress.spent), rupees(progress.budget.monthly_limit))}
                        }
                    }
                    div { class: "text-right",
                        p { class: "text-sm text-base-content/70", "Remaining" }
                        p { class: "text-lg font-semibold", {rupees(progress.remaining)} }
                    }
                }
                ProgressBar { percent: progress.progress, class: tone.bar_class() }
                if progress.over_budget {
                    p { class: "text-sm text-error", "Over budget!" }
                }
            }
        }
    )
}
