use family_roster::views::FamilyProfileView;
use family_roster::Route;
use shared::Family;
use yew::prelude::*;

use super::navigate_to;
use crate::hooks::use_controller::{use_controller, UseControllerResult};
use crate::services::roster::RosterHandle;

#[derive(Properties, PartialEq)]
pub struct FamilyProfileProps {
    pub roster: RosterHandle,
    pub transient: Option<Family>,
    pub on_navigate: Callback<Route>,
}

#[function_component(FamilyProfile)]
pub fn family_profile(props: &FamilyProfileProps) -> Html {
    let UseControllerResult { view, .. } = {
        let transient = props.transient.clone();
        use_controller(&props.roster, &props.on_navigate, move |store| {
            FamilyProfileView::load(store, transient)
        })
    };

    let cards = view.cards();

    html! {
        <div class="family-profile">
            <h1>{view.label()}</h1>
            <p class="member-count">{format!("{} members", view.member_count())}</p>

            {if cards.is_empty() {
                html! { <p class="empty-roster">{"No family members yet."}</p> }
            } else {
                html! {
                    <div class="member-cards">
                        {for cards.into_iter().map(|card| html! {
                            <div class="member-card" key={card.member_id.clone()}
                                onclick={navigate_to(&props.on_navigate, view.open_member(&card.member_id))}>
                                <h3>{card.first_name.clone()}</h3>
                                <p class="member-basics">{format!("{} {}", card.age, card.role)}</p>
                                <p class="member-summary">
                                    {format!(
                                        "{} conditions · {} medications · {} appointments",
                                        card.condition_count, card.medication_count, card.appointment_count
                                    )}
                                </p>
                            </div>
                        })}
                    </div>
                }
            }}

            <button type="button" class="btn btn-secondary"
                onclick={navigate_to(&props.on_navigate, view.edit_roster())}>
                {"Edit Roster"}
            </button>
        </div>
    }
}
