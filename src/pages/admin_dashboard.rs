//! Admin Dashboard Page
//!
//! Provider and contractor accounts awaiting approval. Both tables share one
//! row shape; each table refetches on its own after a decision.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{load_into, LoadError, LoadFailures};
use crate::api::{self, AccountKind, Decision};
use crate::context::Reloader;
use crate::crud::{self, Completion};
use crate::dialog;
use crate::format::or_placeholder;
use crate::models::{AccountStatus, Contractor, Provider, Service};
use crate::store::{store_notify, use_app_store, Notice};

/// Row shape shared by both account tables
#[derive(Debug, Clone, PartialEq)]
struct Account {
    kind: AccountKind,
    name: Option<String>,
    email: String,
    contact: Option<String>,
    status: AccountStatus,
    services: Vec<Service>,
}

impl From<Provider> for Account {
    fn from(p: Provider) -> Self {
        Self {
            kind: AccountKind::Provider,
            name: p.name,
            email: p.email_id,
            contact: p.contact_number,
            status: p.status,
            services: p.services,
        }
    }
}

impl From<Contractor> for Account {
    fn from(c: Contractor) -> Self {
        Self {
            kind: AccountKind::Contractor,
            name: c.company_name,
            email: c.email_id,
            contact: c.contact_number,
            status: c.status,
            services: c.services,
        }
    }
}

fn title(kind: AccountKind) -> &'static str {
    match kind {
        AccountKind::Provider => "Provider",
        AccountKind::Contractor => "Contractor",
    }
}

/// Notice texts for a decision: `Provider approved` / `Error approving provider`
fn decision_completion(outcome: &Result<(), api::ApiError>, kind: AccountKind, decision: Decision) -> Completion {
    let (done, doing) = match decision {
        Decision::Approve => ("approved", "approving"),
        Decision::Reject => ("rejected", "rejecting"),
    };
    Completion::from_outcome(
        outcome,
        format!("{} {}", title(kind), done),
        &format!("Error {} {}", doing, kind.noun()),
    )
}

/// Open modal, if any
#[derive(Debug, Clone, PartialEq)]
enum Modal {
    Message { kind: AccountKind, email: String, name: String },
    Services { name: String, services: Vec<Service> },
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let providers_reload = Reloader::new();
    let contractors_reload = Reloader::new();
    let (providers, set_providers) = signal(Vec::<Provider>::new());
    let (contractors, set_contractors) = signal(Vec::<Contractor>::new());
    let load_errors = RwSignal::new(LoadFailures::default());
    let modal = RwSignal::new(None::<Modal>);

    Effect::new(move |_| {
        providers_reload.track();
        load_into("Admin", "providers", set_providers, load_errors, |api| async move { api.list_providers().await });
    });
    Effect::new(move |_| {
        contractors_reload.track();
        load_into("Admin", "contractors", set_contractors, load_errors, |api| async move {
            api.list_contractors().await
        });
    });

    let provider_rows = Signal::derive(move || providers.get().into_iter().map(Account::from).collect::<Vec<_>>());
    let contractor_rows =
        Signal::derive(move || contractors.get().into_iter().map(Account::from).collect::<Vec<_>>());

    view! {
        <section class="page">
            <h1>"Approvals"</h1>
            <LoadError errors=load_errors />
            <h2>"Providers"</h2>
            <AccountTable kind=AccountKind::Provider accounts=provider_rows reloader=providers_reload modal=modal />
            <h2>"Contractors"</h2>
            <AccountTable kind=AccountKind::Contractor accounts=contractor_rows reloader=contractors_reload modal=modal />
            {move || modal.get().map(|open| match open {
                Modal::Message { kind, email, name } => {
                    view! { <MessageModal kind=kind email=email name=name modal=modal /> }.into_any()
                }
                Modal::Services { name, services } => {
                    view! { <ServicesModal name=name services=services modal=modal /> }.into_any()
                }
            })}
        </section>
    }
}

#[component]
fn AccountTable(
    kind: AccountKind,
    accounts: Signal<Vec<Account>>,
    reloader: Reloader,
    modal: RwSignal<Option<Modal>>,
) -> impl IntoView {
    let store = use_app_store();

    let decide = move |email: String, decision: Decision| {
        let verb = match decision {
            Decision::Approve => "Approve",
            Decision::Reject => "Reject",
        };
        if !dialog::confirm(&format!("{} {} {}?", verb, kind.noun(), email)) {
            return;
        }
        spawn_local(async move {
            let outcome = api::client().decide_account(kind, decision, &email).await;
            crud::apply(&store, &reloader, decision_completion(&outcome, kind, decision));
        });
    };

    let name_header = match kind {
        AccountKind::Provider => "Name",
        AccountKind::Contractor => "Company",
    };

    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>{name_header}</th>
                    <th>"Email"</th>
                    <th>"Contact"</th>
                    <th>"Status"</th>
                    <th>"Documents"</th>
                    <th>"Services"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || accounts.get()
                    key=|a| (a.email.clone(), a.status.label().to_string())
                    children=move |account| {
                        let email = account.email.clone();
                        let name = or_placeholder(account.name.as_deref(), "—");
                        let pending = account.status == AccountStatus::Pending;
                        let links = kind.image_kinds().map(|(image, label)| {
                            view! {
                                <a href=api::client().account_image_url(&email, image) target="_blank" rel="noopener">
                                    {label}
                                </a>
                            }
                        });
                        let services_target = Modal::Services { name: name.clone(), services: account.services.clone() };
                        let message_target = Modal::Message { kind, email: email.clone(), name: name.clone() };
                        let (approve_email, reject_email) = (email.clone(), email.clone());
                        view! {
                            <tr>
                                <td>{name}</td>
                                <td>{email.clone()}</td>
                                <td>{or_placeholder(account.contact.as_deref(), "—")}</td>
                                <td><span class=account.status.badge_class()>{account.status.label().to_string()}</span></td>
                                <td class="doc-links">{links.into_iter().collect_view()}</td>
                                <td>
                                    <button class="btn" on:click=move |_| modal.set(Some(services_target.clone()))>
                                        {format!("View ({})", account.services.len())}
                                    </button>
                                </td>
                                <td class="row-actions">
                                    <Show when=move || pending>
                                        <button
                                            class="btn btn-primary"
                                            on:click={
                                                let email = approve_email.clone();
                                                move |_| decide(email.clone(), Decision::Approve)
                                            }
                                        >
                                            "Approve"
                                        </button>
                                        <button
                                            class="btn btn-danger"
                                            on:click={
                                                let email = reject_email.clone();
                                                move |_| decide(email.clone(), Decision::Reject)
                                            }
                                        >
                                            "Reject"
                                        </button>
                                    </Show>
                                    <button class="btn" on:click=move |_| modal.set(Some(message_target.clone()))>
                                        "Message"
                                    </button>
                                </td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}

#[component]
fn MessageModal(kind: AccountKind, email: String, name: String, modal: RwSignal<Option<Modal>>) -> impl IntoView {
    let store = use_app_store();
    let (text, set_text) = signal(String::new());
    let (sending, set_sending) = signal(false);
    let email = StoredValue::new(email);

    let send = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let message = text.get().trim().to_string();
        if message.is_empty() {
            store_notify(&store, Notice::error("Message cannot be empty"));
            return;
        }
        set_sending.set(true);
        spawn_local(async move {
            let to = email.get_value();
            let outcome = api::client().send_account_message(kind, &to, &message).await;
            set_sending.set(false);
            match outcome {
                Ok(()) => {
                    log::info!("[Admin] message sent to {} {}", kind.noun(), to);
                    modal.set(None);
                    store_notify(&store, Notice::success("Message sent successfully"));
                }
                Err(e) => store_notify(&store, Notice::error(format!("Failed to send message: {}", e))),
            }
        });
    };

    view! {
        <div class="modal-backdrop">
            <form class="modal" on:submit=send>
                <h3>{format!("Message {} ({})", name, email.get_value())}</h3>
                <textarea
                    rows="5"
                    placeholder="Type your message"
                    prop:value=move || text.get()
                    on:input=move |ev| set_text.set(event_target_value(&ev))
                ></textarea>
                <div class="form-actions">
                    <button type="submit" class="btn btn-primary" disabled=move || sending.get()>
                        {move || if sending.get() {
                            view! { <span class="spinner"></span>"Sending..." }.into_any()
                        } else {
                            view! { "Send" }.into_any()
                        }}
                    </button>
                    <button type="button" class="btn" on:click=move |_| modal.set(None)>"Cancel"</button>
                </div>
            </form>
        </div>
    }
}

#[component]
fn ServicesModal(name: String, services: Vec<Service>, modal: RwSignal<Option<Modal>>) -> impl IntoView {
    let rows = if services.is_empty() {
        view! { <tr><td colspan="3">"No services listed"</td></tr> }.into_any()
    } else {
        services
            .into_iter()
            .map(|s| view! {
                <tr>
                    <td>{or_placeholder(s.service_name.as_deref(), "—")}</td>
                    <td>{or_placeholder(s.service_location.as_deref(), "—")}</td>
                    <td>{or_placeholder(s.service_rate.as_deref(), "—")}</td>
                </tr>
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="modal-backdrop">
            <div class="modal">
                <h3>{format!("Services of {}", name)}</h3>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Service"</th>
                            <th>"Location"</th>
                            <th>"Rate"</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
                <div class="form-actions">
                    <button class="btn" on:click=move |_| modal.set(None)>"Close"</button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_notices() {
        let done = decision_completion(&Ok(()), AccountKind::Provider, Decision::Approve);
        assert!(done.refetch);
        assert_eq!(done.notice, Notice::success("Provider approved"));

        let failed = decision_completion(
            &Err(api::ApiError::Rejected("already decided".into())),
            AccountKind::Contractor,
            Decision::Reject,
        );
        assert!(!failed.refetch);
        assert_eq!(failed.notice.text, "Error rejecting contractor: already decided");
    }

    #[test]
    fn test_accounts_share_row_shape() {
        let provider: Provider = serde_json::from_value(serde_json::json!({
            "provider_id": 1, "name": "Sam", "email_id": "sam@example.com", "status": "pending"
        }))
        .unwrap();
        let row = Account::from(provider);
        assert_eq!(row.kind, AccountKind::Provider);
        assert_eq!(row.status, AccountStatus::Pending);
        assert!(row.services.is_empty());
    }
}
