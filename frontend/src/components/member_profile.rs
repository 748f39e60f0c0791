use family_roster::domain::ResourceRequest;
use family_roster::views::{MemberProfileView, ResourceEditor};
use family_roster::{Route, RosterError};
use shared::{Family, Member};
use yew::prelude::*;

use super::{error_banner, navigate_to, notes_field, text_field};
use crate::hooks::use_controller::{edit, on_click, setter, use_controller, Edit, UseControllerResult};
use crate::services::roster::{BrowserStore, RosterHandle};

type Dispatch = Callback<Edit<MemberProfileView>>;

#[derive(Properties, PartialEq)]
pub struct MemberProfileProps {
    pub roster: RosterHandle,
    pub member_id: AttrValue,
    pub transient: Option<Family>,
    pub on_navigate: Callback<Route>,
}

#[function_component(MemberProfile)]
pub fn member_profile(props: &MemberProfileProps) -> Html {
    let UseControllerResult { view, dispatch } = {
        let member_id = props.member_id.to_string();
        let transient = props.transient.clone();
        use_controller(&props.roster, &props.on_navigate, move |store| {
            MemberProfileView::load(store, &member_id, transient)
        })
    };

    let back = navigate_to(&props.on_navigate, view.back_to_family());

    let Some(member) = view.member().cloned() else {
        return html! {
            <div class="member-profile not-found">
                <h1>{"Member not found"}</h1>
                <p>{"This member is not part of your family roster."}</p>
                <button type="button" class="btn btn-primary" onclick={back}>
                    {"Back to Family Profile"}
                </button>
            </div>
        };
    };

    html! {
        <div class="member-profile">
            <button type="button" class="btn btn-link" onclick={back}>{"← Family Profile"}</button>
            <h1>{member.first_name.clone()}</h1>

            <section class="member-basics">
                <h2>{"Basic Info"}</h2>
                {error_banner(&view.basics_error)}
                {text_field("basics-first-name", "First name", &view.basics.first_name,
                    setter(&dispatch, |view: &mut MemberProfileView, value| view.basics.first_name = value))}
                {text_field("basics-age", "Age", &view.basics.age,
                    setter(&dispatch, |view: &mut MemberProfileView, value| view.basics.age = value))}
                {text_field("basics-role", "Role", &view.basics.role,
                    setter(&dispatch, |view: &mut MemberProfileView, value| view.basics.role = value))}
                <button type="button" class="btn btn-primary"
                    onclick={on_click(&dispatch, |view: &mut MemberProfileView, store| view.save_basics(store).ok())}>
                    {"Save"}
                </button>
            </section>

            {conditions_section(&view, &member, &dispatch)}
            {medications_section(&view, &member, &dispatch)}
            {appointments_section(&view, &member, &dispatch)}
        </div>
    }
}

fn begin_edit<R>(
    dispatch: &Dispatch,
    editor: fn(&mut MemberProfileView) -> &mut ResourceEditor<R>,
    resource: &R::Resource,
) -> Callback<MouseEvent>
where
    R: ResourceRequest + 'static,
    R::Resource: 'static,
{
    let dispatch = dispatch.clone();
    let resource = resource.clone();
    Callback::from(move |_: MouseEvent| {
        let resource = resource.clone();
        dispatch.emit(edit(move |view: &mut MemberProfileView, _| {
            editor(view).begin_edit(&resource);
            None
        }))
    })
}

fn cancel_edit<R>(
    dispatch: &Dispatch,
    editor: fn(&mut MemberProfileView) -> &mut ResourceEditor<R>,
) -> Callback<MouseEvent>
where
    R: ResourceRequest + 'static,
{
    let dispatch = dispatch.clone();
    Callback::from(move |_: MouseEvent| {
        dispatch.emit(edit(move |view: &mut MemberProfileView, _| {
            editor(view).cancel_edit();
            None
        }))
    })
}

fn remove(
    dispatch: &Dispatch,
    action: fn(&mut MemberProfileView, &mut BrowserStore, &str) -> Result<(), RosterError>,
    resource_id: &str,
) -> Callback<MouseEvent> {
    let dispatch = dispatch.clone();
    let resource_id = resource_id.to_string();
    Callback::from(move |_: MouseEvent| {
        let resource_id = resource_id.clone();
        dispatch.emit(edit(move |view: &mut MemberProfileView, store| {
            if let Err(e) = action(view, store, &resource_id) {
                gloo::console::warn!("Could not remove", resource_id.clone(), e.to_string());
            }
            None
        }))
    })
}

/// The editor shows the message; the console keeps a trace
fn log_rejection<T>(result: Result<T, RosterError>) {
    if let Err(e) = result {
        gloo::console::warn!("Member profile edit rejected:", e.to_string());
    }
}

fn detail(label: &str, value: &Option<String>) -> Html {
    match value {
        Some(value) => html! { <span class="resource-detail">{format!("{}: {}", label, value)}</span> },
        None => html! {},
    }
}

fn conditions_section(view: &MemberProfileView, member: &Member, dispatch: &Dispatch) -> Html {
    let editor = &view.conditions;

    let rows = member.conditions.iter().map(|condition| {
        if editor.is_editing(&condition.id) {
            html! {
                <li class="resource-row editing" key={condition.id.clone()}>
                    {text_field("edit-condition-name", "Name", &editor.edit_draft.name,
                        setter(dispatch, |view: &mut MemberProfileView, value| view.conditions.edit_draft.name = value))}
                    {notes_field("edit-condition-notes", &editor.edit_draft.notes,
                        setter(dispatch, |view: &mut MemberProfileView, value| view.conditions.edit_draft.notes = value))}
                    <button type="button" class="btn btn-primary"
                        onclick={on_click(dispatch, |view: &mut MemberProfileView, store| {
                            log_rejection(view.save_condition(store));
                            None
                        })}>
                        {"Save"}
                    </button>
                    <button type="button" class="btn btn-secondary"
                        onclick={cancel_edit(dispatch, |view| &mut view.conditions)}>
                        {"Cancel"}
                    </button>
                </li>
            }
        } else {
            html! {
                <li class="resource-row" key={condition.id.clone()}>
                    <strong>{condition.name.clone()}</strong>
                    {detail("Notes", &condition.notes)}
                    <button type="button" class="btn btn-link"
                        onclick={begin_edit(dispatch, |view| &mut view.conditions, condition)}>
                        {"Edit"}
                    </button>
                    <button type="button" class="btn btn-link"
                        onclick={remove(dispatch, |view, store, id| view.remove_condition(store, id), &condition.id)}>
                        {"Remove"}
                    </button>
                </li>
            }
        }
    });

    html! {
        <section class="resource-section conditions">
            <h2>{"Conditions"}</h2>
            {error_banner(&editor.error)}
            <ul class="resource-list">{for rows}</ul>
            <div class="resource-add">
                {text_field("new-condition-name", "Name", &editor.draft.name,
                    setter(dispatch, |view: &mut MemberProfileView, value| view.conditions.draft.name = value))}
                {notes_field("new-condition-notes", &editor.draft.notes,
                    setter(dispatch, |view: &mut MemberProfileView, value| view.conditions.draft.notes = value))}
                <button type="button" class="btn btn-secondary"
                    onclick={on_click(dispatch, |view: &mut MemberProfileView, store| {
                        log_rejection(view.add_condition(store));
                        None
                    })}>
                    {"Add Condition"}
                </button>
            </div>
        </section>
    }
}

fn medications_section(view: &MemberProfileView, member: &Member, dispatch: &Dispatch) -> Html {
    let editor = &view.medications;

    let rows = member.medications.iter().map(|medication| {
        if editor.is_editing(&medication.id) {
            html! {
                <li class="resource-row editing" key={medication.id.clone()}>
                    {text_field("edit-medication-name", "Name", &editor.edit_draft.name,
                        setter(dispatch, |view: &mut MemberProfileView, value| view.medications.edit_draft.name = value))}
                    {text_field("edit-medication-dosage", "Dosage", &editor.edit_draft.dosage,
                        setter(dispatch, |view: &mut MemberProfileView, value| view.medications.edit_draft.dosage = value))}
                    {text_field("edit-medication-frequency", "Frequency", &editor.edit_draft.frequency,
                        setter(dispatch, |view: &mut MemberProfileView, value| view.medications.edit_draft.frequency = value))}
                    {notes_field("edit-medication-notes", &editor.edit_draft.notes,
                        setter(dispatch, |view: &mut MemberProfileView, value| view.medications.edit_draft.notes = value))}
                    <button type="button" class="btn btn-primary"
                        onclick={on_click(dispatch, |view: &mut MemberProfileView, store| {
                            log_rejection(view.save_medication(store));
                            None
                        })}>
                        {"Save"}
                    </button>
                    <button type="button" class="btn btn-secondary"
                        onclick={cancel_edit(dispatch, |view| &mut view.medications)}>
                        {"Cancel"}
                    </button>
                </li>
            }
        } else {
            html! {
                <li class="resource-row" key={medication.id.clone()}>
                    <strong>{medication.name.clone()}</strong>
                    {detail("Dosage", &medication.dosage)}
                    {detail("Frequency", &medication.frequency)}
                    {detail("Notes", &medication.notes)}
                    <button type="button" class="btn btn-link"
                        onclick={begin_edit(dispatch, |view| &mut view.medications, medication)}>
                        {"Edit"}
                    </button>
                    <button type="button" class="btn btn-link"
                        onclick={remove(dispatch, |view, store, id| view.remove_medication(store, id), &medication.id)}>
                        {"Remove"}
                    </button>
                </li>
            }
        }
    });

    html! {
        <section class="resource-section medications">
            <h2>{"Medications"}</h2>
            {error_banner(&editor.error)}
            <ul class="resource-list">{for rows}</ul>
            <div class="resource-add">
                {text_field("new-medication-name", "Name", &editor.draft.name,
                    setter(dispatch, |view: &mut MemberProfileView, value| view.medications.draft.name = value))}
                {text_field("new-medication-dosage", "Dosage", &editor.draft.dosage,
                    setter(dispatch, |view: &mut MemberProfileView, value| view.medications.draft.dosage = value))}
                {text_field("new-medication-frequency", "Frequency", &editor.draft.frequency,
                    setter(dispatch, |view: &mut MemberProfileView, value| view.medications.draft.frequency = value))}
                {notes_field("new-medication-notes", &editor.draft.notes,
                    setter(dispatch, |view: &mut MemberProfileView, value| view.medications.draft.notes = value))}
                <button type="button" class="btn btn-secondary"
                    onclick={on_click(dispatch, |view: &mut MemberProfileView, store| {
                        log_rejection(view.add_medication(store));
                        None
                    })}>
                    {"Add Medication"}
                </button>
            </div>
        </section>
    }
}

fn appointments_section(view: &MemberProfileView, member: &Member, dispatch: &Dispatch) -> Html {
    let editor = &view.appointments;

    let rows = member.appointments.iter().map(|appointment| {
        if editor.is_editing(&appointment.id) {
            html! {
                <li class="resource-row editing" key={appointment.id.clone()}>
                    {text_field("edit-appointment-description", "Description", &editor.edit_draft.description,
                        setter(dispatch, |view: &mut MemberProfileView, value| view.appointments.edit_draft.description = value))}
                    {text_field("edit-appointment-date", "Date", &editor.edit_draft.date,
                        setter(dispatch, |view: &mut MemberProfileView, value| view.appointments.edit_draft.date = value))}
                    {text_field("edit-appointment-time", "Time", &editor.edit_draft.time,
                        setter(dispatch, |view: &mut MemberProfileView, value| view.appointments.edit_draft.time = value))}
                    {text_field("edit-appointment-location", "Location", &editor.edit_draft.location,
                        setter(dispatch, |view: &mut MemberProfileView, value| view.appointments.edit_draft.location = value))}
                    {notes_field("edit-appointment-notes", &editor.edit_draft.notes,
                        setter(dispatch, |view: &mut MemberProfileView, value| view.appointments.edit_draft.notes = value))}
                    <button type="button" class="btn btn-primary"
                        onclick={on_click(dispatch, |view: &mut MemberProfileView, store| {
                            log_rejection(view.save_appointment(store));
                            None
                        })}>
                        {"Save"}
                    </button>
                    <button type="button" class="btn btn-secondary"
                        onclick={cancel_edit(dispatch, |view| &mut view.appointments)}>
                        {"Cancel"}
                    </button>
                </li>
            }
        } else {
            html! {
                <li class="resource-row" key={appointment.id.clone()}>
                    <strong>{appointment.description.clone()}</strong>
                    <span class="resource-detail">{appointment.date.clone()}</span>
                    {detail("Time", &appointment.time)}
                    {detail("Location", &appointment.location)}
                    {detail("Notes", &appointment.notes)}
                    <button type="button" class="btn btn-link"
                        onclick={begin_edit(dispatch, |view| &mut view.appointments, appointment)}>
                        {"Edit"}
                    </button>
                    <button type="button" class="btn btn-link"
                        onclick={remove(dispatch, |view, store, id| view.remove_appointment(store, id), &appointment.id)}>
                        {"Remove"}
                    </button>
                </li>
            }
        }
    });

    html! {
        <section class="resource-section appointments">
            <h2>{"Appointments"}</h2>
            {error_banner(&editor.error)}
            <ul class="resource-list">{for rows}</ul>
            <div class="resource-add">
                {text_field("new-appointment-description", "Description", &editor.draft.description,
                    setter(dispatch, |view: &mut MemberProfileView, value| view.appointments.draft.description = value))}
                {text_field("new-appointment-date", "Date", &editor.draft.date,
                    setter(dispatch, |view: &mut MemberProfileView, value| view.appointments.draft.date = value))}
                {text_field("new-appointment-time", "Time", &editor.draft.time,
                    setter(dispatch, |view: &mut MemberProfileView, value| view.appointments.draft.time = value))}
                {text_field("new-appointment-location", "Location", &editor.draft.location,
                    setter(dispatch, |view: &mut MemberProfileView, value| view.appointments.draft.location = value))}
                {notes_field("new-appointment-notes", &editor.draft.notes,
                    setter(dispatch, |view: &mut MemberProfileView, value| view.appointments.draft.notes = value))}
                <button type="button" class="btn btn-secondary"
                    onclick={on_click(dispatch, |view: &mut MemberProfileView, store| {
                        log_rejection(view.add_appointment(store));
                        None
                    })}>
                    {"Add Appointment"}
                </button>
            </div>
        </section>
    }
}
