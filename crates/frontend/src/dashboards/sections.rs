//! Section blocks shared by the seeker and provider dashboard variants.

use contracts::dashboard::dto::{
    ActivityItem, CompletionSummary, EntitySummary, NotificationItem, SubscriptionSummary,
    WorkOrderSummary,
};
use leptos::prelude::*;

use crate::layout::global_context::{use_app_context, AppPage};
use crate::shared::components::ui::{Button, ProgressBar, StatusBadge};
use crate::shared::date_utils::format_datetime;

/// Profile completion summary with a shortcut into the wizard
#[component]
pub fn CompletionCard(completion: CompletionSummary) -> impl IntoView {
    let ctx = use_app_context();
    let percent = completion.overall_percentage;
    let missing = completion.missing_count;

    view! {
        <section class="dashboard-section completion-card">
            <h3>"Profile Completion"</h3>
            <ProgressBar percent=percent />
            {if completion.eligible_for_permanent_id {
                view! {
                    <p class="completion-card__note completion-card__note--ok">
                        "Eligible for permanent registration number"
                    </p>
                }
                .into_any()
            } else if missing > 0 {
                view! {
                    <p class="completion-card__note">
                        {format!("{} mandatory field(s) remaining", missing)}
                    </p>
                }
                .into_any()
            } else {
                view! {
                    <p class="completion-card__note">
                        "Upload your identity proof and match bank details to unlock permanent registration"
                    </p>
                }
                .into_any()
            }}
            <Button
                variant="secondary"
                size="sm"
                on_click=Callback::new(move |_| ctx.navigate(AppPage::Profile))
            >
                {if percent >= 100 { "Review profile" } else { "Complete profile" }}
            </Button>
        </section>
    }
}

/// Recent work orders with status badges
#[component]
pub fn WorkOrdersSection(orders: Vec<WorkOrderSummary>) -> impl IntoView {
    view! {
        <section class="dashboard-section">
            <h3>"Work Orders"</h3>
            {if orders.is_empty() {
                view! { <p class="dashboard-section__empty">"No work orders yet."</p> }.into_any()
            } else {
                view! {
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Title"</th>
                                <th>"Counterpart"</th>
                                <th>"Status"</th>
                                <th>"Updated"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {orders
                                .into_iter()
                                .map(|order| {
                                    view! {
                                        <tr>
                                            <td>{order.title}</td>
                                            <td>{order.counterpart_name}</td>
                                            <td><StatusBadge status=order.status /></td>
                                            <td>{format_datetime(&order.updated_at)}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                }
                .into_any()
            }}
        </section>
    }
}

#[component]
pub fn NotificationsSection(items: Vec<NotificationItem>) -> impl IntoView {
    view! {
        <section class="dashboard-section">
            <h3>"Notifications"</h3>
            {if items.is_empty() {
                view! { <p class="dashboard-section__empty">"You're all caught up."</p> }.into_any()
            } else {
                view! {
                    <ul class="notification-list">
                        {items
                            .into_iter()
                            .map(|item| {
                                let class = if item.is_read {
                                    "notification-list__item"
                                } else {
                                    "notification-list__item notification-list__item--unread"
                                };
                                view! {
                                    <li class=class>
                                        <span class="notification-list__title">{item.title}</span>
                                        <span class="notification-list__message">{item.message}</span>
                                        <span class="notification-list__time">
                                            {format_datetime(&item.created_at)}
                                        </span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                }
                .into_any()
            }}
        </section>
    }
}

/// Team members of an entity admin
#[component]
pub fn EntitiesSection(entities: Vec<EntitySummary>) -> impl IntoView {
    view! {
        <section class="dashboard-section">
            <h3>"Team"</h3>
            {if entities.is_empty() {
                view! { <p class="dashboard-section__empty">"No team members registered yet."</p> }
                    .into_any()
            } else {
                view! {
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Role"</th>
                                <th>"Status"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {entities
                                .into_iter()
                                .map(|entity| {
                                    view! {
                                        <tr>
                                            <td>{entity.name}</td>
                                            <td>{entity.member_role}</td>
                                            <td><StatusBadge status=entity.status /></td>
                                        </tr>
                                    }
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                }
                .into_any()
            }}
        </section>
    }
}

#[component]
pub fn SubscriptionsSection(subscriptions: Vec<SubscriptionSummary>) -> impl IntoView {
    view! {
        <section class="dashboard-section">
            <h3>"Subscription"</h3>
            {subscriptions
                .into_iter()
                .map(|sub| {
                    view! {
                        <div class="subscription-row">
                            <span class="subscription-row__plan">{sub.plan}</span>
                            <StatusBadge status=sub.status />
                            <span class="subscription-row__till">
                                {format!("valid till {}", sub.valid_till)}
                            </span>
                        </div>
                    }
                })
                .collect_view()}
        </section>
    }
}

#[component]
pub fn ActivitySection(items: Vec<ActivityItem>) -> impl IntoView {
    view! {
        <section class="dashboard-section">
            <h3>"Recent Activity"</h3>
            {if items.is_empty() {
                view! { <p class="dashboard-section__empty">"No recent activity."</p> }.into_any()
            } else {
                view! {
                    <ul class="activity-list">
                        {items
                            .into_iter()
                            .map(|item| {
                                view! {
                                    <li>
                                        <span>{item.description}</span>
                                        <span class="activity-list__time">
                                            {format_datetime(&item.occurred_at)}
                                        </span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                }
                .into_any()
            }}
        </section>
    }
}
