//! Employer dashboard page component
//!
//! Lists the employer's internship postings with their applications, lets
//! them post new internships, and move applications through the status
//! machine. Applications are loaded with one concurrent fetch per
//! internship; a failed sub-fetch degrades to an empty list for that
//! posting instead of failing the whole view.

use std::collections::HashMap;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::models::{Application, Internship, NewInternship};
use crate::core::{ApplicationStatus, Role};
use crate::ui::api;
use crate::ui::auth::use_auth_context;
use crate::ui::icon::{Icon, icons};
use crate::ui::notifications::use_notifications;
use crate::ui::page_shell::DashboardShell;

/// Employer dashboard page component
#[component]
pub fn EmployerPage() -> impl IntoView {
    let auth = use_auth_context();
    let notifications = use_notifications();

    // State
    let internships = RwSignal::new(Vec::<Internship>::new());
    let applications = RwSignal::new(HashMap::<i64, Vec<Application>>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let show_new_form = RwSignal::new(false);

    // Bumped to re-run the load effect after a create
    let refresh = RwSignal::new(0u32);

    // Load internships, then fan out one applications request per posting
    Effect::new(move |_| {
        refresh.get();
        if !auth.session.get().is_authenticated() {
            return;
        }
        spawn_local(async move {
            loading.set(true);
            match api::fetch_my_internships().await {
                Ok(list) => {
                    let apps = api::fetch_applications_for_all(&list).await;
                    internships.set(list);
                    applications.set(apps);
                    error.set(None);
                }
                Err(err) => {
                    // A 401 already cleared the session; the route guard
                    // takes it from there.
                    if !err.is_unauthorized() {
                        error.set(Some(err.message));
                    }
                }
            }
            loading.set(false);
        });
    });

    let on_created = Callback::new(move |_| {
        show_new_form.set(false);
        refresh.update(|n| *n += 1);
    });

    // Move one application to a new status and patch it in place
    let on_status_action = move |application: Application, next: ApplicationStatus| {
        spawn_local(async move {
            match api::update_application_status(application.id, next).await {
                Ok(updated) => {
                    applications.update(|apps| {
                        if let Some(list) = apps.get_mut(&updated.internship_id) {
                            if let Some(entry) = list.iter_mut().find(|a| a.id == updated.id) {
                                *entry = updated.clone();
                            }
                        }
                    });
                    notifications.success(format!("Application {}", next.label().to_lowercase()));
                }
                Err(err) => {
                    if !err.is_unauthorized() {
                        notifications.error(err.message);
                    }
                }
            }
        });
    };

    view! {
        <DashboardShell role=Role::Employer>
            <div class="space-y-6">
                // Toolbar
                <div class="flex items-center justify-between">
                    <h1 class="text-2xl font-bold text-theme-primary">"My Internships"</h1>
                    <button
                        class="flex items-center gap-2 py-2 px-4 bg-accent-primary hover:bg-accent-primary-hover
                               text-white font-medium rounded-lg transition-colors"
                        on:click=move |_| show_new_form.update(|v| *v = !*v)
                    >
                        <Icon name=icons::PLUS class="w-4 h-4" />
                        "Post Internship"
                    </button>
                </div>

                // New internship form
                <Show when=move || show_new_form.get()>
                    <NewInternshipForm on_created=on_created />
                </Show>

                // Error banner
                {move || {
                    error.get().map(|message| {
                        view! {
                            <div class="p-3 bg-red-100 dark:bg-red-900/30 border border-red-300 dark:border-red-700 rounded-lg">
                                <p class="text-sm text-red-700 dark:text-red-300">{message}</p>
                            </div>
                        }
                    })
                }}

                // Internship list
                {move || {
                    if loading.get() {
                        return view! {
                            <div class="flex items-center justify-center py-20">
                                <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-accent-primary"></div>
                            </div>
                        }.into_any();
                    }

                    let list = internships.get();
                    if list.is_empty() {
                        return view! {
                            <div class="text-center py-20 text-theme-secondary">
                                "No internships posted yet. Create your first posting to start receiving applications."
                            </div>
                        }.into_any();
                    }

                    list.into_iter().map(|internship| {
                        let apps = applications.get().get(&internship.id).cloned().unwrap_or_default();
                        view! {
                            <InternshipCard
                                internship=internship
                                applications=apps
                                on_status_action=Callback::new(move |(app, next)| on_status_action(app, next))
                            />
                        }
                    }).collect_view().into_any()
                }}
            </div>
        </DashboardShell>
    }
}

/// One internship posting with its applications.
#[component]
fn InternshipCard(
    internship: Internship,
    applications: Vec<Application>,
    on_status_action: Callback<(Application, ApplicationStatus)>,
) -> impl IntoView {
    let meta = format!(
        "{} · {} · {} weeks",
        internship.location, internship.mode, internship.duration_weeks
    );

    view! {
        <div class="bg-theme-primary border border-theme rounded-xl p-6 space-y-4">
            <div>
                <h2 class="text-lg font-semibold text-theme-primary">{internship.title.clone()}</h2>
                <p class="text-sm text-theme-tertiary">{meta}</p>
                <p class="mt-2 text-sm text-theme-secondary">{internship.description.clone()}</p>
            </div>

            <div>
                <h3 class="text-sm font-medium text-theme-primary mb-2">
                    {format!("Applications ({})", applications.len())}
                </h3>
                {if applications.is_empty() {
                    view! {
                        <p class="text-sm text-theme-tertiary">"No applications yet."</p>
                    }.into_any()
                } else {
                    applications.into_iter().map(|application| {
                        view! {
                            <ApplicationRow application=application on_status_action=on_status_action />
                        }
                    }).collect_view().into_any()
                }}
            </div>
        </div>
    }
}

/// One application with its legal status actions.
#[component]
fn ApplicationRow(
    application: Application,
    on_status_action: Callback<(Application, ApplicationStatus)>,
) -> impl IntoView {
    let status = application.status;

    let badge_class = match status {
        ApplicationStatus::Pending => "bg-yellow-500/10 text-yellow-500",
        ApplicationStatus::Shortlisted => "bg-blue-500/10 text-blue-500",
        ApplicationStatus::Rejected => "bg-red-500/10 text-red-500",
        ApplicationStatus::Accepted => "bg-green-500/10 text-green-500",
    };

    view! {
        <div class="flex items-center justify-between py-2 border-b border-theme last:border-b-0">
            <div class="flex items-center gap-3">
                <span class="text-sm text-theme-primary">
                    {format!("Student #{}", application.student_id)}
                </span>
                <span class="text-xs text-theme-tertiary">{application.applied_at.clone()}</span>
                <span class=format!("px-2 py-0.5 text-xs font-medium rounded-full {badge_class}")>
                    {status.label()}
                </span>
            </div>

            // Only the legal transitions are ever offered
            <div class="flex items-center gap-2">
                {status.available_actions().iter().map(|&next| {
                    let application = application.clone();
                    view! {
                        <button
                            class="py-1 px-3 text-xs font-medium rounded-lg border border-theme
                                   text-theme-secondary hover:text-theme-primary hover:bg-theme-secondary
                                   transition-colors"
                            on:click=move |_| on_status_action.run((application.clone(), next))
                        >
                            {next.label()}
                        </button>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}

/// Inline form for posting a new internship.
#[component]
fn NewInternshipForm(on_created: Callback<Internship>) -> impl IntoView {
    let notifications = use_notifications();

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let mode = RwSignal::new("onsite".to_string());
    let duration_weeks = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);
    let form_error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        form_error.set(None);

        if title.get().trim().is_empty() {
            form_error.set(Some("Title is required".to_string()));
            return;
        }
        let Ok(weeks) = duration_weeks.get().trim().parse::<i64>() else {
            form_error.set(Some("Duration must be a number of weeks".to_string()));
            return;
        };
        if weeks <= 0 {
            form_error.set(Some("Duration must be at least one week".to_string()));
            return;
        }

        let internship = NewInternship {
            title: title.get().trim().to_string(),
            description: description.get().trim().to_string(),
            location: location.get().trim().to_string(),
            mode: mode.get(),
            duration_weeks: weeks,
        };

        submitting.set(true);
        spawn_local(async move {
            match api::create_internship(&internship).await {
                Ok(created) => {
                    notifications.success("Internship posted");
                    on_created.run(created);
                }
                Err(err) => {
                    if !err.is_unauthorized() {
                        form_error.set(Some(err.message.clone()));
                        notifications.error(err.message);
                    }
                }
            }
            submitting.set(false);
        });
    };

    let input_class = "w-full px-3 py-2 bg-theme-secondary border border-theme rounded-lg
                       text-theme-primary placeholder-theme-tertiary
                       focus:outline-none focus:ring-2 focus:ring-accent-primary focus:border-transparent
                       transition-colors";

    view! {
        <form on:submit=on_submit class="bg-theme-primary border border-theme rounded-xl p-6 space-y-4">
            <h2 class="text-lg font-semibold text-theme-primary">"Post a New Internship"</h2>

            {move || {
                form_error.get().map(|error| {
                    view! {
                        <div class="p-3 bg-red-100 dark:bg-red-900/30 border border-red-300 dark:border-red-700 rounded-lg">
                            <p class="text-sm text-red-700 dark:text-red-300">{error}</p>
                        </div>
                    }
                })
            }}

            <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                <div>
                    <label for="title" class="block text-sm font-medium text-theme-primary mb-1">"Title"</label>
                    <input
                        type="text"
                        id="title"
                        placeholder="e.g. Backend Engineering Intern"
                        class=input_class
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </div>
                <div>
                    <label for="location" class="block text-sm font-medium text-theme-primary mb-1">"Location"</label>
                    <input
                        type="text"
                        id="location"
                        placeholder="e.g. Bengaluru"
                        class=input_class
                        prop:value=move || location.get()
                        on:input=move |ev| location.set(event_target_value(&ev))
                    />
                </div>
                <div>
                    <label for="mode" class="block text-sm font-medium text-theme-primary mb-1">"Mode"</label>
                    <select
                        id="mode"
                        class=input_class
                        on:change=move |ev| mode.set(event_target_value(&ev))
                    >
                        <option value="onsite">"On-site"</option>
                        <option value="remote">"Remote"</option>
                        <option value="hybrid">"Hybrid"</option>
                    </select>
                </div>
                <div>
                    <label for="duration_weeks" class="block text-sm font-medium text-theme-primary mb-1">
                        "Duration (weeks)"
                    </label>
                    <input
                        type="number"
                        id="duration_weeks"
                        min="1"
                        placeholder="e.g. 12"
                        class=input_class
                        prop:value=move || duration_weeks.get()
                        on:input=move |ev| duration_weeks.set(event_target_value(&ev))
                    />
                </div>
            </div>

            <div>
                <label for="description" class="block text-sm font-medium text-theme-primary mb-1">"Description"</label>
                <textarea
                    id="description"
                    rows="3"
                    placeholder="What will the intern work on?"
                    class=input_class
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
            </div>

            <button
                type="submit"
                class="py-2 px-4 bg-accent-primary hover:bg-accent-primary-hover text-white font-medium
                       rounded-lg disabled:opacity-50 disabled:cursor-not-allowed transition-colors"
                disabled=move || submitting.get()
            >
                {move || if submitting.get() { "Posting..." } else { "Post Internship" }}
            </button>
        </form>
    }
}
