use family_roster::views::DocumentsView;
use family_roster::Route;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use super::modal::Modal;
use super::text_field;
use crate::hooks::use_controller::{edit, on_click, setter, use_controller, UseControllerResult};
use crate::services::roster::RosterHandle;

#[derive(Properties, PartialEq)]
pub struct DocumentsProps {
    pub roster: RosterHandle,
    pub on_navigate: Callback<Route>,
}

#[function_component(Documents)]
pub fn documents(props: &DocumentsProps) -> Html {
    let UseControllerResult { view, dispatch } =
        use_controller(&props.roster, &props.on_navigate, |store| DocumentsView::load(store));

    let on_member_select = {
        let dispatch = dispatch.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let member_id = select.value();
            dispatch.emit(edit(move |view: &mut DocumentsView, _| {
                view.select_member(&member_id);
                None
            }))
        })
    };

    let close_upload = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: ()| {
            dispatch.emit(edit(|view: &mut DocumentsView, _| {
                view.submit_upload();
                None
            }))
        })
    };

    let modal = if view.is_upload_modal_open {
        html! {
            <Modal title="Upload Document" on_close={close_upload}>
                {text_field("document-name", "Document name", &view.document_name,
                    setter(&dispatch, |view: &mut DocumentsView, value| view.document_name = value))}
                <div class="form-group">
                    <label for="document-member">{"Family member"}</label>
                    <select id="document-member" onchange={on_member_select}>
                        <option value="" selected={view.selected_member_id.is_none()}>{"Select a member"}</option>
                        {for view.member_options().into_iter().map(|(id, name)| {
                            let selected = view.selected_member_id.as_deref() == Some(id.as_str());
                            html! { <option value={id} {selected}>{name}</option> }
                        })}
                    </select>
                </div>
                <div class="form-group">
                    <label>{"Attachment (coming soon)"}</label>
                    <input type="file" disabled=true />
                </div>
                <div class="modal-buttons">
                    <button type="button" class="btn btn-primary"
                        onclick={on_click(&dispatch, |view: &mut DocumentsView, _| {
                            view.submit_upload();
                            None
                        })}>
                        {"Upload"}
                    </button>
                </div>
            </Modal>
        }
    } else {
        html! {}
    };

    html! {
        <div class="documents">
            <h1>{"Documents"}</h1>
            <p>{"Keep lab results, prescriptions and insurance cards in one place."}</p>
            <button type="button" class="btn btn-primary"
                onclick={on_click(&dispatch, |view: &mut DocumentsView, _| {
                    view.open_upload();
                    None
                })}>
                {"Upload Document"}
            </button>
            <p class="empty-documents">{"No documents uploaded yet."}</p>
            {modal}
        </div>
    }
}
