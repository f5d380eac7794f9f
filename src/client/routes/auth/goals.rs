use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaPlus, FaTrash};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::client::{
    components::{page::PageHeader, Loading, ProgressBar},
    util::{load_into, use_authorized_api, use_view_resource},
    view::{
        goal::{add_funds, progress, progress_label, GoalDraft},
        rupees, write_then_reload, LoadPhase,
    },
};
use crate::model::goal::{Goal, GoalRequest};

#[component]
pub fn Goals() -> Element {
    let api = use_authorized_api();
    let goals = use_view_resource::<Vec<Goal>>();
    let mut draft = use_signal(GoalDraft::default);
    let mut form_error = use_signal(|| None::<String>);

    let refresh = use_callback({
        let api = api.clone();
        move |_: ()| {
            let Some(api) = api.clone() else {
                return;
            };

            load_into(goals, async move { api.list_goals().await });
        }
    });

    use_effect(move || refresh.call(()));

    let create = use_callback({
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
                let mut slot = goals;
                let reload = || api.list_goals();

                match write_then_reload(&mut slot, api.create_goal(&request), reload).await {
                    Ok(_) => draft.set(GoalDraft::default()),
                    Err(e) => tracing::error!("{}", e),
                }
            });
        }
    });

    let update = use_callback({
        let api = api.clone();
        move |(id, request): (i64, GoalRequest)| {
            let Some(api) = api.clone() else {
                return;
            };

            spawn(async move {
                let mut slot = goals;
                let reload = || api.list_goals();

                if let Err(e) =
                    write_then_reload(&mut slot, api.update_goal(id, &request), reload).await
                {
                    tracing::error!("{}", e);
                }
            });
        }
    });

    let delete = use_callback(move |id: i64| {
        let Some(api) = api.clone() else {
            return;
        };

        spawn(async move {
            let mut slot = goals;
            let reload = || api.list_goals();

            if let Err(e) = write_then_reload(&mut slot, api.delete_goal(id), reload).await {
                tracing::error!("{}", e);
            }
        });
    });

    let resource = goals.read();
    let current = draft.read().clone();

    rsx!(
        Title { "Goals | BudgetWise" }
        PageHeader { title: "Savings Goals" }

        div { class: "card shadow-sm bg-base-100 mb-6",
            form { class: "card-body",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    create.call(());
                },
                h3 { class: "card-title", "New Goal" }
                if let Some(message) = form_error() {
                    div { class: "alert alert-error", "{message}" }
                }
                div { class: "grid grid-cols-1 md:grid-cols-5 gap-4",
                    input {
                        class: "input",
                        r#type: "text",
                        placeholder: "Goal name",
                        required: true,
                        value: "{current.goal_name}",
                        oninput: move |e| draft.write().goal_name = e.value(),
                    }
                    input {
                        class: "input",
                        r#type: "number",
                        step: "0.01",
                        placeholder: "Target amount",
                        required: true,
                        value: "{current.target_amount}",
                        oninput: move |e| draft.write().target_amount = e.value(),
                    }
                    input {
                        class: "input",
                        r#type: "number",
                        step: "0.01",
                        min: "0",
                        placeholder: "Current saved",
                        value: "{current.current_saved}",
                        oninput: move |e| draft.write().current_saved = e.value(),
                    }
                    input {
                        class: "input",
                        r#type: "date",
                        value: "{current.deadline}",
                        oninput: move |e| draft.write().deadline = e.value(),
                    }
                    button { class: "btn btn-primary", r#type: "submit", "Add Goal" }
                }
            }
        }

        match resource.data() {
            Some(list) if list.is_empty() => rsx!(
                p { class: "text-base-content/70", "No goals yet. Start saving for something!" }
            ),
            Some(list) => rsx!(
                div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
                    for goal in list.iter().cloned() {
                        GoalCard { key: "{goal.id}", goal, on_update: update, on_delete: delete }
                    }
                }
            ),
            None if resource.phase() == LoadPhase::Failed => rsx!(
                p { class: "text-error", "Could not load goals." }
            ),
            None => rsx!(Loading {}),
        }
    )
}

#[component]
fn GoalCard(
    goal: Goal,
    on_update: Callback<(i64, GoalRequest)>,
    on_delete: Callback<i64>,
) -> Element {
    let mut amount = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let id = goal.id;
    let funded = goal.clone();

    rsx!(
        div { class: "card shadow-sm bg-base-100",
            div { class: "card-body gap-3",
                div { class: "flex justify-between items-center",
                    h4 { class: "text-lg font-bold", "{goal.goal_name}" }
                    button {
                        class: "btn btn-xs btn-ghost text-error",
                        onclick: move |_| on_delete.call(id),
                        Icon { width: 14, height: 14, icon: FaTrash }
                    }
                }
                p { class: "text-sm",
                    {format!("{} of {}", rupees(goal.current_saved), rupees(goal.target_amount))}
                }
                if let Some(deadline) = goal.deadline {
                    p { class: "text-xs text-base-content/70", "Deadline: {deadline}" }
                }
                ProgressBar { percent: progress(&goal), class: "bg-success" }
                span { class: "text-sm text-right", {progress_label(&goal)} }
                form { class: "flex gap-2",
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        match add_funds(&funded, &amount()) {
                            Ok(request) => {
                                error.set(None);
                                amount.set(String::new());
                                on_update.call((id, request));
                            }
                            Err(e) => error.set(Some(e.user_message())),
                        }
                    },
                    input {
                        class: "input input-sm flex-1",
                        r#type: "number",
                        step: "0.01",
                        min: "0",
                        placeholder: "Amount",
                        value: "{amount}",
                        oninput: move |e| amount.set(e.value()),
                    }
                    button { class: "btn btn-sm btn-success flex gap-1", r#type: "submit",
                        Icon { width: 12, height: 12, icon: FaPlus }
                        "Add Funds"
                    }
                }
                if let Some(message) = error() {
                    p { class: "text-xs text-error", "{message}" }
                }
            }
        }
    )
}
