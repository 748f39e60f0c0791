use family_roster::views::CreateFamilyView;
use family_roster::Route;
use shared::Family;
use yew::prelude::*;

use super::modal::Modal;
use super::{error_banner, input_value, text_field};
use crate::hooks::use_controller::{edit, on_click, setter, use_controller, UseControllerResult};
use crate::services::roster::RosterHandle;

#[derive(Properties, PartialEq)]
pub struct CreateFamilyProps {
    pub roster: RosterHandle,
    pub transient: Option<Family>,
    pub on_navigate: Callback<Route>,
}

#[function_component(CreateFamily)]
pub fn create_family(props: &CreateFamilyProps) -> Html {
    let UseControllerResult { view, dispatch } = {
        let transient = props.transient.clone();
        use_controller(&props.roster, &props.on_navigate, move |store| {
            CreateFamilyView::load(store, transient)
        })
    };

    let on_family_name = {
        let dispatch = dispatch.clone();
        Callback::from(move |e: InputEvent| {
            let name = input_value(&e);
            dispatch.emit(edit(move |view: &mut CreateFamilyView, store| {
                view.set_family_name(store, &name);
                None
            }))
        })
    };

    let on_close_modal = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: ()| {
            dispatch.emit(edit(|view: &mut CreateFamilyView, _| {
                view.close_member_modal();
                None
            }))
        })
    };

    let members = if view.family.is_empty() {
        html! { <p class="empty-roster">{"No members yet. Add your first family member."}</p> }
    } else {
        html! {
            <ul class="member-list">
                {for view.family.members.iter().map(|member| html! {
                    <li class="member-row" key={member.id.clone()}>
                        <span class="member-name">{member.first_name.clone()}</span>
                        <span class="member-age">{member.age.clone()}</span>
                        <span class="member-role">{member.role.clone()}</span>
                    </li>
                })}
            </ul>
        }
    };

    let modal = if view.is_member_modal_open {
        html! {
            <Modal title="Add Family Member" on_close={on_close_modal.clone()}>
                {error_banner(&view.form_error)}
                {text_field("member-first-name", "First name", &view.member_form.first_name,
                    setter(&dispatch, |view: &mut CreateFamilyView, value| view.member_form.first_name = value))}
                {text_field("member-age", "Age", &view.member_form.age,
                    setter(&dispatch, |view: &mut CreateFamilyView, value| view.member_form.age = value))}
                {text_field("member-role", "Role", &view.member_form.role,
                    setter(&dispatch, |view: &mut CreateFamilyView, value| view.member_form.role = value))}
                <div class="modal-buttons">
                    <button type="button" class="btn btn-primary"
                        onclick={on_click(&dispatch, |view: &mut CreateFamilyView, store| {
                            if let Err(e) = view.submit_member(store) {
                                gloo::console::warn!("Member not added:", e.to_string());
                            }
                            None
                        })}>
                        {"Add Member"}
                    </button>
                    <button type="button" class="btn btn-secondary"
                        onclick={Callback::from(move |_: MouseEvent| on_close_modal.emit(()))}>
                        {"Cancel"}
                    </button>
                </div>
            </Modal>
        }
    } else {
        html! {}
    };

    html! {
        <div class="create-family">
            <h1>{"Create Your Family"}</h1>

            <div class="form-group">
                <label for="family-name">{"Family name"}</label>
                <input
                    id="family-name"
                    type="text"
                    placeholder="e.g. Gowda"
                    value={view.family_name_input.clone()}
                    oninput={on_family_name}
                />
            </div>

            <h2>{format!("Members ({})", view.family.member_count())}</h2>
            {members}

            <div class="create-family-buttons">
                <button type="button" class="btn btn-secondary"
                    onclick={on_click(&dispatch, |view: &mut CreateFamilyView, _| {
                        view.open_member_modal();
                        None
                    })}>
                    {"+ Add Member"}
                </button>
                <button type="button" class="btn btn-primary"
                    disabled={!view.can_confirm()}
                    onclick={on_click(&dispatch, |view: &mut CreateFamilyView, store| view.confirm_roster(store))}>
                    {"Confirm Roster"}
                </button>
                <button type="button" class="btn btn-danger"
                    onclick={on_click(&dispatch, |view: &mut CreateFamilyView, store| {
                        view.reset_roster(store);
                        None
                    })}>
                    {"Reset Roster"}
                </button>
            </div>

            {if view.is_roster_confirmed {
                html! { <p class="roster-confirmed">{"Roster confirmed."}</p> }
            } else {
                html! {}
            }}

            {modal}
        </div>
    }
}
