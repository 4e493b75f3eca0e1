//! Leptos application with routing.

use std::rc::Rc;

use leptos::*;
use leptos_router::*;

use jobboard_auth::Session;
use jobboard_client::{ClientConfig, DEFAULT_API_URL, JobsApi, JobsClient};
use jobboard_core::{CATEGORIES, ExperienceLevel, JobId, PayType, WorkType, is_known_category};

use crate::config::EditorConfig;
use crate::form::Field;
use crate::frontend::session::load_session;
use crate::navigation::{self as nav, Navigator};
use crate::page::{EditJobPage, Mount, PageState};

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
    provide_context(load_session());
    provide_context(JobsClient::new(ClientConfig::new(
        option_env!("JOBBOARD_API_URL").unwrap_or(DEFAULT_API_URL),
    )));

    view! {
        <Router>
            <Routes>
                <Route path="/jobs/:id/edit" view=EditJobView/>
            </Routes>
        </Router>
    }
}

/// Hands page redirects to the router, delayed ones through a timer.
#[derive(Clone)]
struct RouterNavigator(Rc<dyn Fn(&str, NavigateOptions)>);

impl Navigator for RouterNavigator {
    fn navigate(&self, redirect: nav::Redirect) {
        let go = self.0.clone();
        let path = redirect.to.path();
        if redirect.after.is_zero() {
            go(path, NavigateOptions::default());
        } else {
            set_timeout(move || go(path, NavigateOptions::default()), redirect.after);
        }
    }
}

/// Edit job page component.
#[component]
fn EditJobView() -> impl IntoView {
    let session = expect_context::<Session>();
    let client = expect_context::<JobsClient>();
    let navigator = RouterNavigator(Rc::new(use_navigate()));

    let raw_id = use_params_map().with_untracked(|p| p.get("id").cloned().unwrap_or_default());
    let job_id = match raw_id.parse::<JobId>() {
        Ok(id) => id,
        Err(err) => {
            tracing::warn!(id = %raw_id, error = %err, "bad job id in route");
            navigator.navigate(nav::Redirect::now(nav::Route::Jobs));
            return ().into_view();
        }
    };

    let page = create_rw_signal(EditJobPage::new(job_id.clone(), &EditorConfig::default()));

    match page.try_update(|p| p.mount(session.user())) {
        Some(Mount::Load(ticket)) => {
            let client = client.clone();
            let session = session.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                let result = client.fetch_job(&session, &job_id).await;
                if let Some(redirect) = page.try_update(|p| p.finish_load(ticket, result)).flatten() {
                    navigator.navigate(redirect);
                }
            });
        }
        Some(Mount::Denied { redirect, .. }) => navigator.navigate(redirect),
        None => {}
    }

    on_cleanup(move || {
        page.try_update_untracked(|p| p.unmount());
    });

    let submit = {
        let navigator = navigator.clone();
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            let Some(Ok((ticket, update))) = page.try_update(|p| p.begin_submit()) else {
                return;
            };
            let client = client.clone();
            let session = session.clone();
            let navigator = navigator.clone();
            let job_id = page.with_untracked(|p| p.job_id().clone());
            spawn_local(async move {
                let result = client.update_job(&session, &job_id, &update).await;
                if let Some(redirect) = page.try_update(|p| p.finish_submit(ticket, result)).flatten() {
                    navigator.navigate(redirect);
                }
            });
        }
    };

    let cancel = move |_: ev::MouseEvent| navigator.navigate(page.with_untracked(|p| p.cancel()));
    let busy = move || page.with(|p| p.state().is_busy());
    let loading = move || page.with(|p| p.state() == &PageState::Loading);
    let mounted = move || page.with(|p| p.is_mounted());

    view! {
        <Show
            when=move || mounted() && !loading()
            fallback=move || {
                (mounted() && loading())
                    .then(|| view! { <div class="loading">"Loading job details..."</div> })
            }
        >
            <div class="edit-job">
                <h1>"Edit Job"</h1>

                {move || page.with(|p| p.state().error().map(|msg| {
                    view! { <div class="alert error">{msg.to_string()}</div> }
                }))}
                {move || page.with(|p| p.state().success().map(|msg| {
                    view! { <div class="alert success">{msg.to_string()}</div> }
                }))}

                <form on:submit=submit.clone()>
                    <TextInput page field=Field::Title label="Job Title"/>
                    <TextArea page field=Field::Description label="Description" rows=6/>
                    <TextArea
                        page
                        field=Field::Requirements
                        label="Requirements (one per line)"
                        rows=4
                    />

                    <div class="form-group">
                        <label for="category">"Category"</label>
                        <select
                            id="category"
                            name="category"
                            disabled=busy
                            on:change=move |ev| {
                                page.update(|p| {
                                    p.form_mut().set(Field::Category, &event_target_value(&ev));
                                });
                            }
                        >
                            <option value="" disabled=true>"Select Category"</option>
                            {move || {
                                let current = page.with(|p| p.form().category.clone());
                                (!current.is_empty() && !is_known_category(&current)).then(|| {
                                    view! {
                                        <option value=current.clone() selected=true>{current.clone()}</option>
                                    }
                                })
                            }}
                            {CATEGORIES
                                .iter()
                                .map(|name| {
                                    view! {
                                        <option
                                            value=*name
                                            selected=move || page.with(|p| p.form().category == *name)
                                        >
                                            {*name}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </div>

                    <TextInput page field=Field::Company label="Company Name"/>

                    <Choice
                        page
                        field=Field::PayType
                        label="Pay Type"
                        options=PayType::ALL.iter().map(|t| (t.as_str(), t.label())).collect()
                    />
                    <div class="form-group">
                        <label for="pay.amount">
                            {move || page.with(|p| p.form().pay_amount_label())}
                        </label>
                        <input
                            type="number"
                            id="pay.amount"
                            name="pay.amount"
                            min="0"
                            disabled=busy
                            prop:value=move || page.with(|p| p.form().pay.amount.clone())
                            on:input=move |ev| {
                                page.update(|p| {
                                    p.form_mut().set(Field::PayAmount, &event_target_value(&ev));
                                });
                            }
                        />
                    </div>

                    <TextInput page field=Field::Duration label="Duration (weeks)" kind="number" min="1"/>
                    <TextInput page field=Field::Location label="Location"/>
                    <Choice
                        page
                        field=Field::WorkType
                        label="Work Type"
                        options=WorkType::ALL.iter().map(|t| (t.as_str(), t.label())).collect()
                    />
                    <Choice
                        page
                        field=Field::Experience
                        label="Experience Level"
                        options=ExperienceLevel::ALL.iter().map(|l| (l.as_str(), l.as_str())).collect()
                    />
                    <TextInput page field=Field::Deadline label="Application Deadline" kind="date"/>

                    <SkillsEditor page/>

                    <div class="form-actions">
                        <button type="button" on:click=cancel.clone() disabled=busy>
                            "Cancel"
                        </button>
                        <button type="submit" disabled=busy>
                            {move || {
                                if page.with(|p| p.state() == &PageState::Submitting) {
                                    "Updating..."
                                } else {
                                    "Update Job"
                                }
                            }}
                        </button>
                    </div>
                </form>
            </div>
        </Show>
    }
    .into_view()
}

#[component]
fn TextInput(
    page: RwSignal<EditJobPage>,
    field: Field,
    label: &'static str,
    #[prop(default = "text")] kind: &'static str,
    #[prop(optional)] min: Option<&'static str>,
) -> impl IntoView {
    let id = field.name();
    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <input
                type=kind
                min=min
                id=id
                name=id
                disabled=move || page.with(|p| p.state().is_busy())
                prop:value=move || page.with(|p| p.form().value(field))
                on:input=move |ev| {
                    page.update(|p| {
                        p.form_mut().set(field, &event_target_value(&ev));
                    });
                }
            />
        </div>
    }
}

#[component]
fn TextArea(
    page: RwSignal<EditJobPage>,
    field: Field,
    label: &'static str,
    rows: u32,
) -> impl IntoView {
    let id = field.name();
    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <textarea
                id=id
                name=id
                rows=rows
                disabled=move || page.with(|p| p.state().is_busy())
                prop:value=move || page.with(|p| p.form().value(field))
                on:input=move |ev| {
                    page.update(|p| {
                        p.form_mut().set(field, &event_target_value(&ev));
                    });
                }
            />
        </div>
    }
}

/// Select over a fixed set of `(value, label)` options.
#[component]
fn Choice(
    page: RwSignal<EditJobPage>,
    field: Field,
    label: &'static str,
    options: Vec<(&'static str, &'static str)>,
) -> impl IntoView {
    let id = field.name();
    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <select
                id=id
                name=id
                disabled=move || page.with(|p| p.state().is_busy())
                on:change=move |ev| {
                    page.update(|p| {
                        p.form_mut().set(field, &event_target_value(&ev));
                    });
                }
            >
                {options
                    .into_iter()
                    .map(|(value, text)| {
                        view! {
                            <option
                                value=value
                                selected=move || page.with(|p| p.form().value(field) == value)
                            >
                                {text}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

#[component]
fn SkillsEditor(page: RwSignal<EditJobPage>) -> impl IntoView {
    let add = move || {
        page.update(|p| {
            p.form_mut().add_skill_from_draft();
        });
    };

    view! {
        <div class="form-group skills">
            <label for="skill-draft">"Required Skills"</label>
            <div class="skill-chips">
                <For
                    each=move || page.with(|p| p.form().skills().to_vec())
                    key=|skill| skill.clone()
                    children=move |skill| {
                        let name = skill.clone();
                        view! {
                            <span class="chip">
                                {skill}
                                <button
                                    type="button"
                                    class="chip-remove"
                                    on:click=move |_| {
                                        page.update(|p| {
                                            p.form_mut().remove_skill(&name);
                                        });
                                    }
                                >
                                    "×"
                                </button>
                            </span>
                        }
                    }
                />
            </div>
            <div class="skill-input">
                <input
                    type="text"
                    id="skill-draft"
                    placeholder="Add a skill"
                    prop:value=move || page.with(|p| p.form().skill_draft().to_string())
                    on:input=move |ev| {
                        page.update(|p| p.form_mut().set_skill_draft(&event_target_value(&ev)));
                    }
                    on:keydown=move |ev: ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            add();
                        }
                    }
                />
                <button
                    type="button"
                    disabled=move || page.with(|p| !p.form().can_add_skill())
                    on:click=move |_| add()
                >
                    "Add"
                </button>
            </div>
        </div>
    }
}
