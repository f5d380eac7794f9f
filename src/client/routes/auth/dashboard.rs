use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaDownload, FaLightbulb};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::client::{
    api::export::ExportKind,
    components::{page::PageHeader, Loading, ProgressBar},
    util::{load_into, save_file, use_authorized_api, use_view_resource},
    view::{
        dashboard::{advice_or_fallback, category_slices, monthly_bars, Analytics},
        rupees, LoadPhase, ViewResource,
    },
};

#[component]
pub fn Dashboard() -> Element {
    let api = use_authorized_api();
    let analytics = use_view_resource::<Analytics>();
    let advice = use_view_resource::<Vec<String>>();

    use_effect(move || {
        let Some(api) = api.clone() else {
            return;
        };

        let charts = api.clone();
        load_into(analytics, async move {
            let (categories, monthly) =
                futures::join!(charts.category_spending(), charts.monthly_analytics());

            Ok(Analytics {
                categories: categories?,
                monthly: monthly?,
            })
        });

        load_into(advice, async move { Ok(advice_or_fallback(api.advice().await)) });
    });

    rsx!(
        Title { "Dashboard | BudgetWise" }
        Meta {
            name: "description",
            content: "Overview of your spending, income and personalised advice."
        }
        PageHeader { title: "Dashboard", subtitle: "Your money at a glance" }
        div { class: "flex flex-col gap-6",
            AdviceCard { advice }
            div { class: "grid grid-cols-1 lg:grid-cols-2 gap-6",
                CategoryCard { analytics }
                MonthlyCard { analytics }
            }
            ExportCard {}
        }
    )
}

#[component]
fn AdviceCard(advice: Signal<ViewResource<Vec<String>>>) -> Element {
    let advice = advice.read();

    rsx!(
        div { class: "card shadow-sm bg-base-100",
            div { class: "card-body",
                h3 { class: "card-title flex gap-2",
                    Icon { width: 20, height: 20, icon: FaLightbulb }
                    "Smart Advice"
                }
                match advice.data() {
                    Some(tips) => rsx!(
                        ul { class: "flex flex-col gap-2",
                            for tip in tips.iter() {
                                li { class: "p-3 rounded bg-base-200", "{tip}" }
                            }
                        }
                    ),
                    None => rsx!(Loading { label: "Analysing your finances..." }),
                }
            }
        }
    )
}

#[component]
fn CategoryCard(analytics: Signal<ViewResource<Analytics>>) -> Element {
    let analytics = analytics.read();

    rsx!(
        div { class: "card shadow-sm bg-base-100",
            div { class: "card-body",
                h3 { class: "card-title", "Spending by Category" }
                match analytics.data() {
                    Some(data) if data.categories.is_empty() => rsx!(
                        p { class: "text-base-content/70", "No expenses recorded yet." }
                    ),
                    Some(data) => rsx!(
                        ul { class: "flex flex-col gap-3",
                            for slice in category_slices(&data.categories) {
                                li { class: "flex flex-col gap-1",
                                    div { class: "flex justify-between text-sm",
                                        span { {slice.category.label()} }
                                        span { {format!("{} ({:.1}%)", rupees(slice.amount), slice.share)} }
                                    }
                                    ProgressBar { percent: slice.share }
                                }
                            }
                        }
                    ),
                    None if analytics.phase() == LoadPhase::Failed => rsx!(
                        p { class: "text-error", "Could not load analytics." }
                    ),
                    None => rsx!(Loading {}),
                }
            }
        }
    )
}

#[component]
fn MonthlyCard(analytics: Signal<ViewResource<Analytics>>) -> Element {
    let analytics = analytics.read();
    let bars = analytics
        .data()
        .map(|data| monthly_bars(&data.monthly))
        .unwrap_or_default();

    rsx!(
        div { class: "card shadow-sm bg-base-100",
            div { class: "card-body",
                h3 { class: "card-title", "Income vs Expense" }
                if bars.is_empty() {
                    p { class: "text-base-content/70", "No monthly history yet." }
                } else {
                    div { class: "flex items-end gap-4 h-48",
                        for bar in bars {
                            div { class: "flex flex-col items-center flex-1 h-full",
                                div { class: "flex items-end gap-1 flex-1 w-full justify-center",
                                    div {
                                        class: "w-3 bg-success rounded-t",
                                        title: format!("Income {}", rupees(bar.income)),
                                        style: "height: {bar.income_height}%",
                                    }
                                    div {
                                        class: "w-3 bg-error rounded-t",
                                        title: format!("Expense {}", rupees(bar.expense)),
                                        style: "height: {bar.expense_height}%",
                                    }
                                }
                                span { class: "text-xs mt-1", "{bar.month}" }
                            }
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn ExportCard() -> Element {
    let api = use_authorized_api();

    let download = use_callback(move |kind: ExportKind| {
        let Some(api) = api.clone() else {
            return;
        };

        spawn(async move {
            let result = match api.export(kind).await {
                Ok(bytes) => save_file(&bytes, kind.file_name(), kind.mime_type()),
                Err(e) => Err(e),
            };

            match result {
                Ok(()) => tracing::info!(file = kind.file_name(), "Export downloaded"),
                Err(e) => tracing::error!("{}", e),
            }
        });
    });

    rsx!(
        div { class: "card shadow-sm bg-base-100",
            div { class: "card-body",
                h3 { class: "card-title", "Export" }
                div { class: "flex flex-wrap gap-2",
                    for kind in ExportKind::ALL {
                        button {
                            class: "btn btn-outline flex gap-2",
                            onclick: move |_| download.call(kind),
                            Icon { width: 16, height: 16, icon: FaDownload }
                            {kind.label()}
                        }
                    }
                }
            }
        }
    )
}
