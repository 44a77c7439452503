use super::player_card::PlayerCard;
use crate::model::Player;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct RosterPanelProps {
    pub players: Vec<Player>,
    pub selected: u32,
    pub on_select: Callback<u32>,
    pub on_join: Callback<u32>,
}

#[function_component]
pub fn RosterPanel(props: &RosterPanelProps) -> Html {
    html! {<div style="display:grid; grid-template-columns:repeat(5, minmax(0, 1fr)); gap:14px; margin-bottom:28px;">
        { for props.players.iter().map(|p| html!{
            <PlayerCard
                key={p.id.to_string()}
                player={p.clone()}
                selected={p.id == props.selected}
                on_select={props.on_select.clone()}
                on_join={props.on_join.clone()}
            />
        }) }
    </div>}
}
